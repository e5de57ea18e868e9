use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::models::{CoupleProfile, LeadProfile, LeadStatus};

/// Compliance waiting period after the wedding before first contact
pub const CONTACT_WAIT_DAYS: i64 = 60;

/// Compute the earliest permissible contact timestamp for a lead
///
/// Wedding date known: midnight UTC, 60 days after the wedding. No
/// wedding date: `now`, i.e. immediately contactable. Stored on the lead
/// at creation time.
#[inline]
pub fn compute_earliest_contact_date(couple: &CoupleProfile, now: DateTime<Utc>) -> DateTime<Utc> {
    match couple.wedding_date {
        Some(date) => (date + Duration::days(CONTACT_WAIT_DAYS))
            .and_time(NaiveTime::MIN)
            .and_utc(),
        None => now,
    }
}

/// Whether a lead may receive its first outreach at `now`
///
/// Holds only for untouched NEW leads whose waiting period has elapsed.
/// Any prior contact vetoes regardless of dates. Re-evaluated on every
/// scheduling pass rather than cached.
#[inline]
pub fn is_ready_for_contact(lead: &LeadProfile, now: DateTime<Utc>) -> bool {
    lead.status == LeadStatus::New
        && lead.last_contact_date.is_none()
        && lead.earliest_contact_date.map_or(true, |earliest| earliest <= now)
}
