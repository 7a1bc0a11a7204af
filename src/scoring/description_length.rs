//! Item description length scoring.
//!
//! Items whose trimmed description length is a multiple of 3 earn 20% of
//! their price, rounded up to the next whole point.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Amount, RuleContribution};

use super::validation::ValidatedItem;

/// Rule identifier for the description length rule.
pub const DESCRIPTION_LENGTH_RULE: &str = "description_length";

/// The fraction of a qualifying item's price awarded as points (0.2).
pub const DESCRIPTION_PRICE_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Price in cents that is worth one point (1 / 0.2 dollars).
const CENTS_PER_POINT: u64 = 500;

/// Returns the length of a description after trimming surrounding whitespace.
///
/// Length is counted in characters, not bytes.
pub fn trimmed_length(short_description: &str) -> usize {
    short_description.trim().chars().count()
}

/// Returns the points one item earns under the description length rule.
///
/// A trimmed length of zero counts as a multiple of 3, so an item with a
/// blank description still qualifies.
///
/// # Example
///
/// ```
/// use receipt_processor::models::Amount;
/// use receipt_processor::scoring::description_points;
///
/// // "Emils Cheese Pizza" is 18 characters: ceil(12.25 * 0.2) = 3
/// assert_eq!(description_points("Emils Cheese Pizza", Amount::from_cents(1225)), 3);
/// // 17 characters does not qualify
/// assert_eq!(description_points("Mountain Dew 12PK", Amount::from_cents(649)), 0);
/// ```
pub fn description_points(short_description: &str, price: Amount) -> u64 {
    if trimmed_length(short_description) % 3 != 0 {
        return 0;
    }
    // price * 0.2 rounded up, computed on cents
    price.cents().div_ceil(CENTS_PER_POINT)
}

/// Scores every item on the receipt with the description length rule.
///
/// # Errors
///
/// Returns [`EngineError::InvalidReceipt`] on `items` if the item points
/// do not fit in a `u64`.
pub fn score_description_length(items: &[ValidatedItem<'_>]) -> EngineResult<RuleContribution> {
    let mut points: u64 = 0;
    let mut item_inputs = Vec::new();
    let mut details = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let length = trimmed_length(item.short_description);
        let item_points = description_points(item.short_description, item.price);

        if length % 3 == 0 {
            points = points
                .checked_add(item_points)
                .ok_or_else(|| EngineError::invalid_receipt("items", "points overflow"))?;
            let raw = item.price.to_decimal() * DESCRIPTION_PRICE_MULTIPLIER;
            details.push(format!(
                "item {} ({} chars): ${} x {} = {}, rounded up to {}",
                index,
                length,
                item.price,
                DESCRIPTION_PRICE_MULTIPLIER,
                raw.normalize(),
                item_points
            ));
        }

        item_inputs.push(serde_json::json!({
            "index": index,
            "trimmed_length": length,
            "price": item.price.to_string(),
            "points": item_points,
        }));
    }

    let reasoning = if details.is_empty() {
        "No item description has a length that is a multiple of 3".to_string()
    } else {
        format!("{}: +{}", details.join("; "), points)
    };

    Ok(RuleContribution {
        rule_id: DESCRIPTION_LENGTH_RULE.to_string(),
        rule_name: "Description Length".to_string(),
        points,
        input: serde_json::json!({ "items": item_inputs }),
        reasoning,
    })
}
