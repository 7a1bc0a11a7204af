//! Item pair scoring.

use crate::models::RuleContribution;

/// Rule identifier for the item pair rule.
pub const ITEM_PAIRS_RULE: &str = "item_pairs";

/// Points awarded per complete pair of items.
pub const POINTS_PER_ITEM_PAIR: u64 = 5;

/// Awards [`POINTS_PER_ITEM_PAIR`] for every two items on the receipt.
///
/// An odd item left over earns nothing.
///
/// # Example
///
/// ```
/// use receipt_processor::scoring::score_item_pairs;
///
/// assert_eq!(score_item_pairs(4).points, 10);
/// assert_eq!(score_item_pairs(5).points, 10);
/// ```
pub fn score_item_pairs(item_count: usize) -> RuleContribution {
    let pairs = (item_count / 2) as u64;
    let points = pairs * POINTS_PER_ITEM_PAIR;

    RuleContribution {
        rule_id: ITEM_PAIRS_RULE.to_string(),
        rule_name: "Item Pairs".to_string(),
        points,
        input: serde_json::json!({ "item_count": item_count }),
        reasoning: format!(
            "{} items make {} pairs x {} = +{}",
            item_count, pairs, POINTS_PER_ITEM_PAIR, points
        ),
    }
}
