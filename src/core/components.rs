use chrono::NaiveDate;

use crate::models::{CoupleProfile, CreditTier, GeoMarkets, LeadProfile, WeddingStage};

/// Component caps; the five maximums sum to 100
pub const BUDGET_MAX: f64 = 25.0;
pub const TIMELINE_MAX: f64 = 20.0;
pub const FINANCIAL_MAX: f64 = 25.0;
pub const GEOGRAPHY_MAX: f64 = 15.0;
pub const ENGAGEMENT_MAX: f64 = 15.0;

/// Rough monthly-payment proxy: 0.5% of the purchase price
///
/// An approximation, not an amortization formula.
pub const MONTHLY_PAYMENT_RATE: f64 = 0.005;

/// Score the wedding budget as a financial-capacity indicator (0-25)
///
/// A missing budget resolves to the same neutral 5.0 as a small one.
#[inline]
pub fn score_wedding_budget(budget: Option<f64>) -> f64 {
    match budget {
        Some(b) if b >= 50_000.0 => 25.0,
        Some(b) if b >= 30_000.0 => 20.0,
        Some(b) if b >= 20_000.0 => 15.0,
        Some(b) if b >= 10_000.0 => 10.0,
        _ => 5.0,
    }
}

/// Score wedding timing: stage base plus a date-proximity bonus (0-20)
///
/// The bonus rewards weddings in the 60-365 day "sweet spot" ahead of
/// `today` and recent weddings behind it. Base plus bonus can exceed the
/// cap, so the sum is clamped.
#[inline]
pub fn score_timeline(wedding_date: Option<NaiveDate>, stage: WeddingStage, today: NaiveDate) -> f64 {
    let mut score: f64 = match stage {
        WeddingStage::Engaged => 20.0,
        WeddingStage::Planning => 15.0,
        WeddingStage::RecentlyMarried => 10.0,
    };

    if let Some(date) = wedding_date {
        let days_until = (date - today).num_days();

        if days_until < 0 {
            // Already married
            let days_since = -days_until;
            if days_since <= 90 {
                score += 5.0;
            } else if days_since <= 180 {
                score += 3.0;
            }
        } else if (60..=365).contains(&days_until) {
            score += 10.0;
        } else if days_until <= 60 {
            score += 7.0;
        } else if days_until <= 730 {
            score += 5.0;
        }
    }

    score.min(TIMELINE_MAX)
}

/// Score the lead's financial indicators (0-25)
///
/// Income tier contributes up to 10, the rent-vs-estimated-payment
/// heuristic up to 8, and credit tier up to 7. Each piece is skipped
/// when its inputs are absent.
#[inline]
pub fn score_financial_profile(lead: &LeadProfile) -> f64 {
    let mut score: f64 = 0.0;

    if let Some(income) = lead.estimated_income {
        score += if income >= 100_000.0 {
            10.0
        } else if income >= 75_000.0 {
            8.0
        } else if income >= 50_000.0 {
            6.0
        } else {
            3.0
        };
    }

    // Current rent vs. a rough monthly payment on the target price
    if let (Some(rent), Some(price)) = (lead.current_rent, lead.target_purchase_price) {
        let estimated_payment = price * MONTHLY_PAYMENT_RATE;
        if rent >= estimated_payment * 0.8 {
            score += 8.0;
        } else if rent >= estimated_payment * 0.6 {
            score += 5.0;
        }
    }

    score += match lead.credit_tier {
        Some(CreditTier::Excellent) => 7.0,
        Some(CreditTier::VeryGood) => 6.0,
        Some(CreditTier::Good) => 5.0,
        Some(CreditTier::Fair) | Some(CreditTier::Poor) => 3.0,
        None => 0.0,
    };

    score.min(FINANCIAL_MAX)
}

/// Score location against the high-value market lists (0-15)
///
/// State match is an exact (case-insensitive) abbreviation lookup; city
/// match is a case-insensitive substring test.
#[inline]
pub fn score_geography(couple: &CoupleProfile, markets: &GeoMarkets) -> f64 {
    let mut score: f64 = 0.0;

    if let Some(state) = &couple.wedding_state {
        if markets
            .high_value_states
            .iter()
            .any(|s| s.eq_ignore_ascii_case(state))
        {
            score += 8.0;
        }
    }

    if let Some(city) = &couple.wedding_city {
        let city = city.to_lowercase();
        if markets
            .high_value_cities
            .iter()
            .any(|c| city.contains(&c.to_lowercase()))
        {
            score += 7.0;
        }
    }

    score.min(GEOGRAPHY_MAX)
}

/// Score engagement level via data completeness and registry presence (0-15)
#[inline]
pub fn score_engagement(couple: &CoupleProfile) -> f64 {
    let data_points = [
        couple.partner_1_email.is_some(),
        couple.partner_2_email.is_some(),
        couple.wedding_date.is_some(),
        couple.wedding_venue.is_some(),
        couple.wedding_budget.is_some(),
        couple.guest_count.is_some(),
    ];

    let present = data_points.iter().filter(|p| **p).count();
    let mut score = present as f64 / data_points.len() as f64 * 10.0;

    // Registry presence indicates serious planning
    if !couple.registry_urls.is_empty() {
        score += 5.0;
    }

    score.min(ENGAGEMENT_MAX)
}
