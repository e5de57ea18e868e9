use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Where a couple is in the wedding lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeddingStage {
    Engaged,
    Planning,
    RecentlyMarried,
}

impl WeddingStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeddingStage::Engaged => "engaged",
            WeddingStage::Planning => "planning",
            WeddingStage::RecentlyMarried => "recently_married",
        }
    }
}

/// Lead lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Nurturing,
    Converted,
    ClosedWon,
    ClosedLost,
    OptOut,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Nurturing => "nurturing",
            LeadStatus::Converted => "converted",
            LeadStatus::ClosedWon => "closed_won",
            LeadStatus::ClosedLost => "closed_lost",
            LeadStatus::OptOut => "opt_out",
        }
    }
}

/// Self-reported credit tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditTier {
    Excellent,
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl CreditTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            CreditTier::Excellent => "excellent",
            CreditTier::VeryGood => "very_good",
            CreditTier::Good => "good",
            CreditTier::Fair => "fair",
            CreditTier::Poor => "poor",
        }
    }
}

/// Couple record with wedding logistics and budget data
///
/// Scoring treats most fields as optional: missing data resolves to a
/// neutral sub-score, never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoupleProfile {
    pub id: i64,
    #[serde(default)]
    pub partner_1_email: Option<String>,
    #[serde(default)]
    pub partner_2_email: Option<String>,
    #[serde(default)]
    pub wedding_date: Option<NaiveDate>,
    #[serde(default)]
    pub engagement_date: Option<NaiveDate>,
    pub wedding_stage: WeddingStage,
    #[serde(default)]
    pub wedding_venue: Option<String>,
    #[serde(default)]
    pub wedding_city: Option<String>,
    #[serde(default)]
    pub wedding_state: Option<String>,
    #[serde(default)]
    pub wedding_budget: Option<f64>,
    #[serde(default)]
    pub guest_count: Option<u32>,
    #[serde(default)]
    pub registry_urls: Vec<String>,
    #[serde(default)]
    pub opted_out: bool,
}

/// Home-purchase prospect derived from a couple record (1:1)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadProfile {
    pub id: i64,
    pub couple_id: i64,
    #[serde(default)]
    pub lead_score: f64,
    #[serde(default)]
    pub qualification_score: f64,
    pub status: LeadStatus,
    #[serde(default)]
    pub assigned_loan_officer_id: Option<i64>,
    #[serde(default)]
    pub target_purchase_price: Option<f64>,
    #[serde(default)]
    pub target_down_payment: Option<f64>,
    #[serde(default)]
    pub estimated_income: Option<f64>,
    #[serde(default)]
    pub current_rent: Option<f64>,
    #[serde(default)]
    pub has_existing_mortgage: bool,
    #[serde(default)]
    pub credit_tier: Option<CreditTier>,
    #[serde(default)]
    pub debt_to_income_ratio: Option<f64>,
    #[serde(default)]
    pub earliest_contact_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_contact_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_follow_up_date: Option<DateTime<Utc>>,
}

/// User-configurable scoring rule
///
/// Unrecognized operators deserialize to `Unknown` and never match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringRule {
    pub field_name: String,
    pub operator: RuleOperator,
    pub value: String,
    pub points: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Comparison operator for custom scoring rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleOperator {
    Gt,
    Lt,
    Eq,
    In,
    Contains,
    #[serde(other)]
    Unknown,
}

/// High-value market lists used by the geography calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoMarkets {
    pub high_value_states: Vec<String>,
    pub high_value_cities: Vec<String>,
}

impl Default for GeoMarkets {
    fn default() -> Self {
        Self {
            high_value_states: ["CA", "NY", "MA", "CT", "NJ", "WA", "DC", "MD", "VA"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            high_value_cities: [
                "san francisco",
                "new york",
                "boston",
                "seattle",
                "los angeles",
                "washington",
                "chicago",
                "austin",
                "denver",
                "atlanta",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Loan officer eligible for lead assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanOfficer {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub auto_assign_leads: bool,
    #[serde(default)]
    pub total_leads_assigned: u32,
}

/// The four automated outreach archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStage {
    Engagement,
    PostWedding,
    Nurture,
    FollowUp,
}

impl CampaignStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStage::Engagement => "engagement",
            CampaignStage::PostWedding => "post_wedding",
            CampaignStage::Nurture => "nurture",
            CampaignStage::FollowUp => "follow_up",
        }
    }
}

/// Outcome of stage selection: what to send and how the lead moves afterwards
///
/// Computed on demand, never persisted. The caller applies it with
/// `commit_send` only after the dispatch collaborator confirms the send.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CampaignAction {
    pub stage: CampaignStage,
    pub new_status: Option<LeadStatus>,
    pub next_follow_up_date: DateTime<Utc>,
}
