// Integration tests for Wedlead
//
// Exercise the full flow a scheduler-side caller runs: score leads,
// plan a campaign pass, commit the confirmed sends, and verify the next
// pass picks up where the cadence left off.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use wedlead::core::{
    commit_send, compute_earliest_contact_date, pick_loan_officer, plan_scheduling_pass,
    LeadScorer,
};
use wedlead::models::{
    CampaignStage, CoupleProfile, CreditTier, LeadProfile, LeadStatus, LoanOfficer, RuleOperator,
    ScoringRule, WeddingStage,
};

fn couple(id: i64, stage: WeddingStage) -> CoupleProfile {
    CoupleProfile {
        id,
        partner_1_email: Some(format!("partner1.{}@example.com", id)),
        partner_2_email: Some(format!("partner2.{}@example.com", id)),
        wedding_date: None,
        engagement_date: None,
        wedding_stage: stage,
        wedding_venue: None,
        wedding_city: None,
        wedding_state: None,
        wedding_budget: None,
        guest_count: None,
        registry_urls: vec![],
        opted_out: false,
    }
}

fn lead(id: i64, couple_id: i64, status: LeadStatus) -> LeadProfile {
    LeadProfile {
        id,
        couple_id,
        lead_score: 0.0,
        qualification_score: 0.0,
        status,
        assigned_loan_officer_id: None,
        target_purchase_price: None,
        target_down_payment: None,
        estimated_income: None,
        current_rent: None,
        has_existing_mortgage: false,
        credit_tier: None,
        debt_to_income_ratio: None,
        earliest_contact_date: None,
        last_contact_date: None,
        next_follow_up_date: None,
    }
}

#[test]
fn test_lead_intake_flow() {
    // Mirror what the create-lead handler does: score, then stamp the
    // compliance date.
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    let today = now.date_naive();

    let mut c = couple(1, WeddingStage::Engaged);
    c.wedding_date = NaiveDate::from_ymd_opt(2024, 10, 12);
    c.wedding_budget = Some(55_000.0);
    c.wedding_city = Some("Boston".to_string());
    c.wedding_state = Some("MA".to_string());
    c.guest_count = Some(140);
    c.registry_urls = vec!["https://registry.example.com/1".to_string()];

    let mut l = lead(1, 1, LeadStatus::New);
    l.estimated_income = Some(140_000.0);
    l.target_purchase_price = Some(600_000.0);
    l.current_rent = Some(2_600.0);
    l.credit_tier = Some(CreditTier::VeryGood);

    let rules = vec![ScoringRule {
        field_name: "estimated_income".to_string(),
        operator: RuleOperator::Gt,
        value: "100000".to_string(),
        points: 10.0,
        is_active: true,
    }];

    let scorer = LeadScorer::with_default_markets();
    l.lead_score = scorer.calculate_lead_score(&l, &c, &rules, today);
    l.earliest_contact_date = Some(compute_earliest_contact_date(&c, now));

    // Component sum plus the custom rule overshoots 100 and is clamped
    assert_eq!(l.lead_score, 100.0);
    assert_eq!(
        l.earliest_contact_date.unwrap().date_naive(),
        NaiveDate::from_ymd_opt(2024, 12, 11).unwrap()
    );

    let breakdown = scorer.explain_score(&l, &c, &rules, today);
    assert_eq!(breakdown.total_score, l.lead_score);
    assert_eq!(breakdown.custom_rules.score, 10.0);
}

#[test]
fn test_scheduling_pass_and_cadence() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();

    // Engaged couple past its waiting period
    let engaged_couple = couple(1, WeddingStage::Engaged);
    let mut engaged_lead = lead(1, 1, LeadStatus::New);
    engaged_lead.earliest_contact_date = Some(now - Duration::days(1));

    // Recently married couple inside the post-wedding window
    let mut married_couple = couple(2, WeddingStage::RecentlyMarried);
    married_couple.wedding_date = Some((now - Duration::days(100)).date_naive());
    let married_lead = lead(2, 2, LeadStatus::New);

    // Qualified lead with a due follow-up
    let qualified_couple = couple(3, WeddingStage::Planning);
    let mut qualified_lead = lead(3, 3, LeadStatus::Qualified);
    qualified_lead.next_follow_up_date = Some(now - Duration::days(3));

    // Opted-out couple: never contacted
    let mut opted_out_couple = couple(4, WeddingStage::Engaged);
    opted_out_couple.opted_out = true;
    let opted_out_lead = lead(4, 4, LeadStatus::New);

    let mut pairs = vec![
        (engaged_lead, engaged_couple),
        (married_lead, married_couple),
        (qualified_lead, qualified_couple),
        (opted_out_lead, opted_out_couple),
    ];

    let planned = plan_scheduling_pass(&pairs, now);
    assert_eq!(planned.len(), 3);
    assert_eq!(planned[0].action.stage, CampaignStage::Engagement);
    assert_eq!(planned[1].action.stage, CampaignStage::PostWedding);
    assert_eq!(planned[2].action.stage, CampaignStage::FollowUp);

    // Simulate dispatch: first two sends succeed, the third fails and is
    // not committed.
    for send in planned.iter().take(2) {
        let (l, _) = pairs
            .iter_mut()
            .find(|(l, _)| l.id == send.lead_id)
            .unwrap();
        commit_send(l, &send.action, now);
    }

    assert_eq!(pairs[0].0.status, LeadStatus::Contacted);
    assert_eq!(pairs[0].0.next_follow_up_date, Some(now + Duration::days(14)));
    assert_eq!(pairs[1].0.status, LeadStatus::Contacted);
    assert_eq!(pairs[1].0.next_follow_up_date, Some(now + Duration::days(21)));

    // Failed send left the qualified lead untouched
    assert_eq!(pairs[2].0.status, LeadStatus::Qualified);
    assert!(pairs[2].0.last_contact_date.is_none());

    // Immediate re-run: only the failed follow-up is still due
    let replanned = plan_scheduling_pass(&pairs, now);
    assert_eq!(replanned.len(), 1);
    assert_eq!(replanned[0].lead_id, 3);
    assert_eq!(replanned[0].action.stage, CampaignStage::FollowUp);

    // Two weeks later the contacted leads come due for nurture
    let later = now + Duration::days(15);
    let next_pass = plan_scheduling_pass(&pairs, later);
    let stages: Vec<CampaignStage> = next_pass.iter().map(|p| p.action.stage).collect();
    assert!(stages.contains(&CampaignStage::Nurture));
}

#[test]
fn test_officer_assignment_round() {
    let officers = vec![
        LoanOfficer {
            id: 10,
            name: "Avery".to_string(),
            email: "avery@example.com".to_string(),
            auto_assign_leads: true,
            total_leads_assigned: 4,
        },
        LoanOfficer {
            id: 11,
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            auto_assign_leads: true,
            total_leads_assigned: 2,
        },
        LoanOfficer {
            id: 12,
            name: "Riley".to_string(),
            email: "riley@example.com".to_string(),
            auto_assign_leads: false,
            total_leads_assigned: 0,
        },
    ];

    let unassigned = lead(1, 1, LeadStatus::New);
    let picked = pick_loan_officer(&unassigned, &officers).unwrap();
    assert_eq!(picked.id, 11);

    let mut preassigned = lead(2, 2, LeadStatus::New);
    preassigned.assigned_loan_officer_id = Some(10);
    let picked = pick_loan_officer(&preassigned, &officers).unwrap();
    assert_eq!(picked.id, 10);
}

#[test]
fn test_domain_round_trip_through_json() {
    // Snapshots arrive from the persistence collaborator as JSON
    let raw = r#"{
        "id": 7,
        "couple_id": 7,
        "status": "new",
        "estimated_income": 95000.0,
        "credit_tier": "very_good"
    }"#;

    let l: LeadProfile = serde_json::from_str(raw).unwrap();
    assert_eq!(l.status, LeadStatus::New);
    assert_eq!(l.credit_tier, Some(CreditTier::VeryGood));
    assert!(l.last_contact_date.is_none());

    let encoded = serde_json::to_string(&l).unwrap();
    assert!(encoded.contains("\"very_good\""));
}
