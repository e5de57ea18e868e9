// Model exports
pub mod breakdown;
pub mod domain;

pub use breakdown::{ComponentScore, ScoreBreakdown};
pub use domain::{
    CampaignAction, CampaignStage, CoupleProfile, CreditTier, GeoMarkets, LeadProfile, LeadStatus,
    LoanOfficer, RuleOperator, ScoringRule, WeddingStage,
};
