use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::eligibility::is_ready_for_contact;
use crate::models::{
    CampaignAction, CampaignStage, CoupleProfile, LeadProfile, LeadStatus, WeddingStage,
};

/// One entry in the campaign playbook: an eligibility guard plus the
/// transition applied after a confirmed send
pub struct StageRule {
    pub stage: CampaignStage,
    pub new_status: Option<LeadStatus>,
    pub follow_up_days: i64,
    eligible: fn(&LeadProfile, &CoupleProfile, DateTime<Utc>) -> bool,
}

impl StageRule {
    pub fn is_eligible(&self, lead: &LeadProfile, couple: &CoupleProfile, now: DateTime<Utc>) -> bool {
        (self.eligible)(lead, couple, now)
    }
}

fn engagement_eligible(lead: &LeadProfile, couple: &CoupleProfile, now: DateTime<Utc>) -> bool {
    couple.wedding_stage == WeddingStage::Engaged
        && !couple.opted_out
        && is_ready_for_contact(lead, now)
}

fn post_wedding_eligible(lead: &LeadProfile, couple: &CoupleProfile, now: DateTime<Utc>) -> bool {
    if couple.wedding_stage != WeddingStage::RecentlyMarried || couple.opted_out {
        return false;
    }
    // Trailing compliance window: wedding between 180 and 60 days ago
    let Some(wedding_date) = couple.wedding_date else {
        return false;
    };
    let window_start = (now - Duration::days(180)).date_naive();
    let window_end = (now - Duration::days(60)).date_naive();

    wedding_date >= window_start
        && wedding_date <= window_end
        && lead.status == LeadStatus::New
        && lead.last_contact_date.is_none()
}

fn nurture_eligible(lead: &LeadProfile, couple: &CoupleProfile, now: DateTime<Utc>) -> bool {
    matches!(lead.status, LeadStatus::Contacted | LeadStatus::Nurturing)
        && !couple.opted_out
        && lead.next_follow_up_date.map_or(false, |due| due <= now)
}

fn follow_up_eligible(lead: &LeadProfile, couple: &CoupleProfile, now: DateTime<Utc>) -> bool {
    lead.status == LeadStatus::Qualified
        && !couple.opted_out
        && lead.next_follow_up_date.map_or(false, |due| due <= now)
}

/// The ordered campaign playbook; guards are evaluated in this order and
/// only the first match is acted on per scheduling pass
pub fn playbook() -> [StageRule; 4] {
    [
        StageRule {
            stage: CampaignStage::Engagement,
            new_status: Some(LeadStatus::Contacted),
            follow_up_days: 14,
            eligible: engagement_eligible,
        },
        StageRule {
            stage: CampaignStage::PostWedding,
            new_status: Some(LeadStatus::Contacted),
            follow_up_days: 21,
            eligible: post_wedding_eligible,
        },
        StageRule {
            stage: CampaignStage::Nurture,
            new_status: Some(LeadStatus::Nurturing),
            follow_up_days: 30,
            eligible: nurture_eligible,
        },
        StageRule {
            stage: CampaignStage::FollowUp,
            new_status: None,
            follow_up_days: 14,
            eligible: follow_up_eligible,
        },
    ]
}

/// Select the campaign action a lead is eligible for at `now`, if any
///
/// Pure selection: no lead state is touched here. Returns `None` when no
/// guard holds (opted out, terminal status, nothing due).
pub fn select_campaign_action(
    lead: &LeadProfile,
    couple: &CoupleProfile,
    now: DateTime<Utc>,
) -> Option<CampaignAction> {
    playbook()
        .iter()
        .find(|rule| rule.is_eligible(lead, couple, now))
        .map(|rule| CampaignAction {
            stage: rule.stage,
            new_status: rule.new_status,
            next_follow_up_date: now + Duration::days(rule.follow_up_days),
        })
}

/// Apply a campaign action to a lead after a confirmed send
///
/// The dispatch collaborator reports send success to the caller; only then
/// is this committed. Failed sends must leave the lead untouched so the
/// next pass retries it.
pub fn commit_send(lead: &mut LeadProfile, action: &CampaignAction, now: DateTime<Utc>) {
    if let Some(status) = action.new_status {
        lead.status = status;
    }
    lead.last_contact_date = Some(now);
    lead.next_follow_up_date = Some(action.next_follow_up_date);
}

/// A planned send from a scheduling pass, keyed by lead id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedSend {
    pub lead_id: i64,
    pub action: CampaignAction,
}

/// Plan one scheduling pass over a batch of lead/couple pairs
///
/// Each lead is matched against the playbook at most once, so a single
/// pass never double-processes a lead. The caller sends each planned
/// email and commits the transition per confirmed send.
pub fn plan_scheduling_pass(
    pairs: &[(LeadProfile, CoupleProfile)],
    now: DateTime<Utc>,
) -> Vec<PlannedSend> {
    let planned: Vec<PlannedSend> = pairs
        .iter()
        .filter_map(|(lead, couple)| {
            select_campaign_action(lead, couple, now).map(|action| PlannedSend {
                lead_id: lead.id,
                action,
            })
        })
        .collect();

    debug!(
        total = pairs.len(),
        planned = planned.len(),
        "scheduling pass planned"
    );

    planned
}
