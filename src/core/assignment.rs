use crate::models::{LeadProfile, LoanOfficer};

/// Pick the loan officer who should work a lead
///
/// An existing assignment is honored; otherwise the least-loaded officer
/// flagged for auto-assignment wins, with ties broken by list order. The
/// caller persists the assignment and bumps the officer's load counter.
pub fn pick_loan_officer<'a>(
    lead: &LeadProfile,
    officers: &'a [LoanOfficer],
) -> Option<&'a LoanOfficer> {
    if let Some(assigned_id) = lead.assigned_loan_officer_id {
        return officers.iter().find(|officer| officer.id == assigned_id);
    }

    officers
        .iter()
        .filter(|officer| officer.auto_assign_leads)
        .min_by_key(|officer| officer.total_leads_assigned)
}
