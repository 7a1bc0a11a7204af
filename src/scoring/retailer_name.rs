//! Retailer name scoring.
//!
//! One point for every alphanumeric character in the retailer name.

use crate::models::RuleContribution;

/// Rule identifier for the retailer name rule.
pub const RETAILER_NAME_RULE: &str = "retailer_name";

/// Scores the retailer name.
///
/// Only ASCII letters and digits count. Spaces, punctuation and any
/// non-ASCII characters contribute nothing.
///
/// # Example
///
/// ```
/// use receipt_processor::scoring::score_retailer_name;
///
/// assert_eq!(score_retailer_name("Target").points, 6);
/// assert_eq!(score_retailer_name("M&M Corner Market").points, 14);
/// ```
pub fn score_retailer_name(retailer: &str) -> RuleContribution {
    let points = retailer
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .count() as u64;

    RuleContribution {
        rule_id: RETAILER_NAME_RULE.to_string(),
        rule_name: "Retailer Name".to_string(),
        points,
        input: serde_json::json!({ "retailer": retailer }),
        reasoning: format!(
            "'{}' has {} alphanumeric characters: +{}",
            retailer, points, points
        ),
    }
}
