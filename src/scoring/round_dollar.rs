//! Round dollar total scoring.

use crate::models::{Amount, RuleContribution};

/// Rule identifier for the round dollar rule.
pub const ROUND_DOLLAR_RULE: &str = "round_dollar";

/// Points awarded when the total has no cents.
pub const ROUND_DOLLAR_POINTS: u64 = 50;

/// Awards [`ROUND_DOLLAR_POINTS`] when the total is a whole dollar amount.
///
/// # Example
///
/// ```
/// use receipt_processor::models::Amount;
/// use receipt_processor::scoring::score_round_dollar;
///
/// assert_eq!(score_round_dollar(Amount::from_cents(3500)).points, 50);
/// assert_eq!(score_round_dollar(Amount::from_cents(3535)).points, 0);
/// ```
pub fn score_round_dollar(total: Amount) -> RuleContribution {
    let is_round = total.fractional_cents() == 0;
    let points = if is_round { ROUND_DOLLAR_POINTS } else { 0 };

    let reasoning = if is_round {
        format!("Total ${} has no cents: +{}", total, points)
    } else {
        format!("Total ${} has {} cents: no points", total, total.fractional_cents())
    };

    RuleContribution {
        rule_id: ROUND_DOLLAR_RULE.to_string(),
        rule_name: "Round Dollar Total".to_string(),
        points,
        input: serde_json::json!({ "total": total.to_string() }),
        reasoning,
    }
}
