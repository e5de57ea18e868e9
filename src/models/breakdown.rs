use serde::{Deserialize, Serialize};

/// One scoring dimension's contribution to the total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentScore {
    pub score: f64,
    /// Cap for this component; `None` for the uncapped custom-rule sum
    pub max_possible: Option<f64>,
    pub description: String,
}

impl ComponentScore {
    pub fn capped(score: f64, max_possible: f64, description: impl Into<String>) -> Self {
        Self {
            score,
            max_possible: Some(max_possible),
            description: description.into(),
        }
    }

    pub fn uncapped(score: f64, description: impl Into<String>) -> Self {
        Self {
            score,
            max_possible: None,
            description: description.into(),
        }
    }
}

/// Full audit view of a lead score calculation
///
/// `total_score` is the clamped grand total; the components carry the raw
/// sub-scores that went into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total_score: f64,
    pub wedding_budget: ComponentScore,
    pub timeline: ComponentScore,
    pub financial_profile: ComponentScore,
    pub geographic: ComponentScore,
    pub engagement: ComponentScore,
    pub custom_rules: ComponentScore,
}
