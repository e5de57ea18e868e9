use chrono::NaiveDate;

use crate::core::components::{
    score_engagement, score_financial_profile, score_geography, score_timeline,
    score_wedding_budget, BUDGET_MAX, ENGAGEMENT_MAX, FINANCIAL_MAX, GEOGRAPHY_MAX, TIMELINE_MAX,
};
use crate::core::rules::custom_rule_score;
use crate::models::{ComponentScore, CoupleProfile, GeoMarkets, LeadProfile, ScoreBreakdown, ScoringRule};

/// Maximum total lead score after clamping
pub const TOTAL_MAX: f64 = 100.0;

/// Lead score aggregator
///
/// Combines the five component calculators with the custom-rule sum into
/// a single clamped total. Holds the market lists so geography scoring is
/// configurable without re-plumbing every call site.
#[derive(Debug, Clone)]
pub struct LeadScorer {
    markets: GeoMarkets,
}

impl LeadScorer {
    pub fn new(markets: GeoMarkets) -> Self {
        Self { markets }
    }

    pub fn with_default_markets() -> Self {
        Self {
            markets: GeoMarkets::default(),
        }
    }

    /// Calculate the lead score for a couple/lead pair (0-100)
    ///
    /// Pure function of its inputs; `today` anchors the timeline
    /// calculation so batch runs stay deterministic.
    pub fn calculate_lead_score(
        &self,
        lead: &LeadProfile,
        couple: &CoupleProfile,
        rules: &[ScoringRule],
        today: NaiveDate,
    ) -> f64 {
        let total = score_wedding_budget(couple.wedding_budget)
            + score_timeline(couple.wedding_date, couple.wedding_stage, today)
            + score_financial_profile(lead)
            + score_geography(couple, &self.markets)
            + score_engagement(couple)
            + custom_rule_score(lead, couple, rules);

        total.clamp(0.0, TOTAL_MAX)
    }

    /// Detailed breakdown of how the lead score was calculated
    ///
    /// Reporting view over the same calculators; the total here always
    /// equals `calculate_lead_score` for the same inputs.
    pub fn explain_score(
        &self,
        lead: &LeadProfile,
        couple: &CoupleProfile,
        rules: &[ScoringRule],
        today: NaiveDate,
    ) -> ScoreBreakdown {
        let budget = score_wedding_budget(couple.wedding_budget);
        let timeline = score_timeline(couple.wedding_date, couple.wedding_stage, today);
        let financial = score_financial_profile(lead);
        let geographic = score_geography(couple, &self.markets);
        let engagement = score_engagement(couple);
        let custom = custom_rule_score(lead, couple, rules);

        let total = budget + timeline + financial + geographic + engagement + custom;

        ScoreBreakdown {
            total_score: total.clamp(0.0, TOTAL_MAX),
            wedding_budget: ComponentScore::capped(
                budget,
                BUDGET_MAX,
                format!(
                    "Based on wedding budget of ${:.0}",
                    couple.wedding_budget.unwrap_or(0.0)
                ),
            ),
            timeline: ComponentScore::capped(
                timeline,
                TIMELINE_MAX,
                format!(
                    "Based on wedding stage ({}) and date",
                    couple.wedding_stage.as_str()
                ),
            ),
            financial_profile: ComponentScore::capped(
                financial,
                FINANCIAL_MAX,
                "Based on income, rent, and credit tier indicators",
            ),
            geographic: ComponentScore::capped(
                geographic,
                GEOGRAPHY_MAX,
                format!(
                    "Based on location: {}, {}",
                    couple.wedding_city.as_deref().unwrap_or("unknown"),
                    couple.wedding_state.as_deref().unwrap_or("unknown")
                ),
            ),
            engagement: ComponentScore::capped(
                engagement,
                ENGAGEMENT_MAX,
                "Based on data completeness and registry presence",
            ),
            custom_rules: ComponentScore::uncapped(custom, "Based on custom scoring rules"),
        }
    }
}

impl Default for LeadScorer {
    fn default() -> Self {
        Self::with_default_markets()
    }
}
