//! Quarter multiple total scoring.
//!
//! The check runs on whole cents, so amounts such as `0.75` or `10.25` are
//! classified exactly.

use crate::models::{Amount, RuleContribution};

/// Rule identifier for the quarter multiple rule.
pub const QUARTER_MULTIPLE_RULE: &str = "quarter_multiple";

/// Points awarded when the total is a multiple of 0.25.
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;

const QUARTER_CENTS: u64 = 25;

/// Awards [`QUARTER_MULTIPLE_POINTS`] when the total is a multiple of 0.25.
///
/// # Example
///
/// ```
/// use receipt_processor::models::Amount;
/// use receipt_processor::scoring::score_quarter_multiple;
///
/// assert_eq!(score_quarter_multiple(Amount::from_cents(975)).points, 25);
/// assert_eq!(score_quarter_multiple(Amount::from_cents(3535)).points, 0);
/// ```
pub fn score_quarter_multiple(total: Amount) -> RuleContribution {
    let remainder = total.cents() % QUARTER_CENTS;
    let points = if remainder == 0 {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    };

    let reasoning = if remainder == 0 {
        format!("Total ${} is a multiple of $0.25: +{}", total, points)
    } else {
        format!(
            "Total ${} is {} cents off a multiple of $0.25: no points",
            total, remainder
        )
    };

    RuleContribution {
        rule_id: QUARTER_MULTIPLE_RULE.to_string(),
        rule_name: "Quarter Multiple Total".to_string(),
        points,
        input: serde_json::json!({ "total": total.to_string() }),
        reasoning,
    }
}
