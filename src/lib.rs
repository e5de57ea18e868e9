//! Wedlead - lead scoring and campaign automation engine for wedding-market
//! mortgage leads
//!
//! This library provides the deterministic core behind a mortgage-lead
//! platform: a five-factor additive lead scorer with a custom-rule
//! evaluator, a compliance contact-eligibility gate, and the time-gated
//! campaign stage selector that drives outreach cadence. HTTP, persistence,
//! and email delivery live in the calling layer; "now" is always an
//! explicit parameter.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    commit_send, compute_earliest_contact_date, custom_rule_score, is_ready_for_contact,
    pick_loan_officer, plan_scheduling_pass, select_campaign_action, LeadScorer,
};
pub use crate::models::{
    CampaignAction, CampaignStage, CoupleProfile, CreditTier, GeoMarkets, LeadProfile, LeadStatus,
    LoanOfficer, RuleOperator, ScoreBreakdown, ScoringRule, WeddingStage,
};
