use tracing::warn;

use crate::models::{CoupleProfile, LeadProfile, RuleOperator, ScoringRule};

/// Typed value resolved from a lead or couple field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// Numeric view for gt/lt comparisons; flags coerce to 0/1
    fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::Flag(b) => Some(if *b { 1.0 } else { 0.0 }),
        }
    }

    /// String view for eq/in/contains comparisons
    fn as_text(&self) -> String {
        match self {
            FieldValue::Number(n) => format!("{}", n),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Flag(b) => b.to_string(),
        }
    }
}

/// Resolve a rule field on the lead record
fn lead_field(lead: &LeadProfile, name: &str) -> Option<FieldValue> {
    match name {
        "lead_score" => Some(FieldValue::Number(lead.lead_score)),
        "qualification_score" => Some(FieldValue::Number(lead.qualification_score)),
        "status" => Some(FieldValue::Text(lead.status.as_str().to_string())),
        "target_purchase_price" => lead.target_purchase_price.map(FieldValue::Number),
        "target_down_payment" => lead.target_down_payment.map(FieldValue::Number),
        "estimated_income" => lead.estimated_income.map(FieldValue::Number),
        "current_rent" => lead.current_rent.map(FieldValue::Number),
        "has_existing_mortgage" => Some(FieldValue::Flag(lead.has_existing_mortgage)),
        "credit_score_range" => lead
            .credit_tier
            .map(|t| FieldValue::Text(t.as_str().to_string())),
        "debt_to_income_ratio" => lead.debt_to_income_ratio.map(FieldValue::Number),
        _ => None,
    }
}

/// Resolve a rule field on the couple record
fn couple_field(couple: &CoupleProfile, name: &str) -> Option<FieldValue> {
    match name {
        "wedding_stage" => Some(FieldValue::Text(couple.wedding_stage.as_str().to_string())),
        "wedding_budget" => couple.wedding_budget.map(FieldValue::Number),
        "guest_count" => couple.guest_count.map(|c| FieldValue::Number(c as f64)),
        "wedding_city" => couple.wedding_city.clone().map(FieldValue::Text),
        "wedding_state" => couple.wedding_state.clone().map(FieldValue::Text),
        "wedding_venue" => couple.wedding_venue.clone().map(FieldValue::Text),
        "partner_1_email" => couple.partner_1_email.clone().map(FieldValue::Text),
        "partner_2_email" => couple.partner_2_email.clone().map(FieldValue::Text),
        _ => None,
    }
}

/// Resolve a field name against the lead first, then the couple
///
/// Lead fields take precedence when both records name the same field.
#[inline]
pub fn resolve_field(lead: &LeadProfile, couple: &CoupleProfile, name: &str) -> Option<FieldValue> {
    lead_field(lead, name).or_else(|| couple_field(couple, name))
}

/// Evaluate a single rule against a lead/couple pair
///
/// A missing field, non-numeric comparison, or unknown operator fails to
/// "no match" rather than an error.
pub fn evaluate_rule(rule: &ScoringRule, lead: &LeadProfile, couple: &CoupleProfile) -> bool {
    let Some(field_value) = resolve_field(lead, couple, &rule.field_name) else {
        return false;
    };

    match rule.operator {
        RuleOperator::Gt | RuleOperator::Lt => {
            let (Some(lhs), Ok(rhs)) = (field_value.as_number(), rule.value.trim().parse::<f64>())
            else {
                warn!(
                    field = %rule.field_name,
                    value = %rule.value,
                    "non-numeric operand in numeric scoring rule, treating as no match"
                );
                return false;
            };
            if rule.operator == RuleOperator::Gt {
                lhs > rhs
            } else {
                lhs < rhs
            }
        }
        RuleOperator::Eq => field_value.as_text().to_lowercase() == rule.value.to_lowercase(),
        RuleOperator::In => {
            let needle = field_value.as_text().to_lowercase();
            rule.value
                .split(',')
                .map(|v| v.trim().to_lowercase())
                .any(|v| v == needle)
        }
        RuleOperator::Contains => field_value
            .as_text()
            .to_lowercase()
            .contains(&rule.value.to_lowercase()),
        RuleOperator::Unknown => false,
    }
}

/// Sum the points of all matching active rules (uncapped)
pub fn custom_rule_score(
    lead: &LeadProfile,
    couple: &CoupleProfile,
    rules: &[ScoringRule],
) -> f64 {
    rules
        .iter()
        .filter(|rule| rule.is_active)
        .filter(|rule| evaluate_rule(rule, lead, couple))
        .map(|rule| rule.points)
        .sum()
}
