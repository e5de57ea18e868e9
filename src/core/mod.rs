// Core engine exports
pub mod assignment;
pub mod campaign;
pub mod components;
pub mod eligibility;
pub mod rules;
pub mod scoring;

pub use assignment::pick_loan_officer;
pub use campaign::{commit_send, plan_scheduling_pass, playbook, select_campaign_action, PlannedSend, StageRule};
pub use components::{
    score_engagement, score_financial_profile, score_geography, score_timeline,
    score_wedding_budget,
};
pub use eligibility::{compute_earliest_contact_date, is_ready_for_contact, CONTACT_WAIT_DAYS};
pub use rules::{custom_rule_score, evaluate_rule, resolve_field, FieldValue};
pub use scoring::LeadScorer;
