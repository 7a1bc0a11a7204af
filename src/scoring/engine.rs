//! Receipt scoring entry points.
//!
//! [`evaluate`] and [`evaluate_with_breakdown`] validate a receipt and run
//! every scoring rule over it. Both are pure: they never mutate the receipt,
//! perform I/O or depend on anything but their input.

use crate::error::EngineResult;
use crate::models::{Receipt, ScoreBreakdown};

use super::afternoon_window::score_afternoon_window;
use super::description_length::score_description_length;
use super::item_pairs::score_item_pairs;
use super::odd_day::score_odd_day;
use super::quarter_multiple::score_quarter_multiple;
use super::retailer_name::score_retailer_name;
use super::round_dollar::score_round_dollar;
use super::validation::validate_receipt;

/// Scores a receipt and returns the points with every rule's contribution.
///
/// Contributions are listed in rule order: retailer name, round dollar,
/// quarter multiple, item pairs, description length, odd day, afternoon
/// window.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidReceipt`] if any field is
/// missing or malformed, or if the item prices are so large that the points
/// overflow a `u64`. No partial score is produced.
///
/// # Example
///
/// ```
/// use receipt_processor::models::{Item, Receipt};
/// use receipt_processor::scoring::evaluate_with_breakdown;
///
/// let receipt = Receipt {
///     retailer: "M&M Corner Market".to_string(),
///     purchase_date: "2022-03-20".to_string(),
///     purchase_time: "14:33".to_string(),
///     total: "9.00".to_string(),
///     items: vec![Item::new("Gatorade", "2.25"); 4],
/// };
///
/// let breakdown = evaluate_with_breakdown(&receipt).unwrap();
/// assert_eq!(breakdown.points, 109);
/// assert_eq!(breakdown.contributions.len(), 7);
/// ```
pub fn evaluate_with_breakdown(receipt: &Receipt) -> EngineResult<ScoreBreakdown> {
    let validated = validate_receipt(receipt)?;

    let contributions = vec![
        score_retailer_name(validated.retailer),
        score_round_dollar(validated.total),
        score_quarter_multiple(validated.total),
        score_item_pairs(validated.items.len()),
        score_description_length(&validated.items)?,
        score_odd_day(validated.purchase_date),
        score_afternoon_window(validated.purchase_time),
    ];

    ScoreBreakdown::from_contributions(contributions)
}

/// Scores a receipt and returns its loyalty points.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidReceipt`] if any field is
/// missing or malformed.
///
/// # Example
///
/// ```
/// use receipt_processor::models::{Item, Receipt};
/// use receipt_processor::scoring::evaluate;
///
/// let receipt = Receipt {
///     retailer: "Target".to_string(),
///     purchase_date: "2022-01-01".to_string(),
///     purchase_time: "13:01".to_string(),
///     total: "35.35".to_string(),
///     items: vec![
///         Item::new("Mountain Dew 12PK", "6.49"),
///         Item::new("Emils Cheese Pizza", "12.25"),
///         Item::new("Knorr Creamy Chicken", "1.26"),
///         Item::new("Doritos Nacho Cheese", "3.35"),
///         Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
///     ],
/// };
///
/// assert_eq!(evaluate(&receipt).unwrap(), 28);
/// ```
pub fn evaluate(receipt: &Receipt) -> EngineResult<u64> {
    evaluate_with_breakdown(receipt).map(|breakdown| breakdown.points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::Item;
    use crate::scoring::{
        AFTERNOON_WINDOW_RULE, DESCRIPTION_LENGTH_RULE, ITEM_PAIRS_RULE, ODD_DAY_RULE,
        QUARTER_MULTIPLE_RULE, RETAILER_NAME_RULE, ROUND_DOLLAR_RULE,
    };
    use proptest::prelude::*;

    fn target_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            total: "35.35".to_string(),
            items: vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
                Item::new("Knorr Creamy Chicken", "1.26"),
                Item::new("Doritos Nacho Cheese", "3.35"),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
        }
    }

    fn corner_market_receipt() -> Receipt {
        Receipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            total: "9.00".to_string(),
            items: vec![Item::new("Gatorade", "2.25"); 4],
        }
    }

    fn points_for(breakdown: &ScoreBreakdown, rule_id: &str) -> u64 {
        breakdown
            .contribution(rule_id)
            .map(|c| c.points)
            .unwrap_or_else(|| panic!("missing contribution for {rule_id}"))
    }

    #[test]
    fn test_target_receipt_scores_28() {
        let breakdown = evaluate_with_breakdown(&target_receipt()).unwrap();

        assert_eq!(breakdown.points, 28);
        assert_eq!(points_for(&breakdown, RETAILER_NAME_RULE), 6);
        assert_eq!(points_for(&breakdown, ROUND_DOLLAR_RULE), 0);
        assert_eq!(points_for(&breakdown, QUARTER_MULTIPLE_RULE), 0);
        assert_eq!(points_for(&breakdown, ITEM_PAIRS_RULE), 10);
        assert_eq!(points_for(&breakdown, DESCRIPTION_LENGTH_RULE), 6);
        assert_eq!(points_for(&breakdown, ODD_DAY_RULE), 6);
        assert_eq!(points_for(&breakdown, AFTERNOON_WINDOW_RULE), 0);
    }

    #[test]
    fn test_corner_market_receipt_scores_109() {
        let breakdown = evaluate_with_breakdown(&corner_market_receipt()).unwrap();

        assert_eq!(breakdown.points, 109);
        assert_eq!(points_for(&breakdown, RETAILER_NAME_RULE), 14);
        assert_eq!(points_for(&breakdown, ROUND_DOLLAR_RULE), 50);
        assert_eq!(points_for(&breakdown, QUARTER_MULTIPLE_RULE), 25);
        assert_eq!(points_for(&breakdown, ITEM_PAIRS_RULE), 10);
        assert_eq!(points_for(&breakdown, DESCRIPTION_LENGTH_RULE), 0);
        assert_eq!(points_for(&breakdown, ODD_DAY_RULE), 0);
        assert_eq!(points_for(&breakdown, AFTERNOON_WINDOW_RULE), 10);
    }

    #[test]
    fn test_contributions_are_in_rule_order() {
        let breakdown = evaluate_with_breakdown(&target_receipt()).unwrap();
        let ids: Vec<&str> = breakdown
            .contributions
            .iter()
            .map(|c| c.rule_id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                RETAILER_NAME_RULE,
                ROUND_DOLLAR_RULE,
                QUARTER_MULTIPLE_RULE,
                ITEM_PAIRS_RULE,
                DESCRIPTION_LENGTH_RULE,
                ODD_DAY_RULE,
                AFTERNOON_WINDOW_RULE,
            ]
        );
    }

    #[test]
    fn test_round_total_earns_both_total_rules() {
        let mut receipt = target_receipt();
        receipt.total = "35.00".to_string();
        let breakdown = evaluate_with_breakdown(&receipt).unwrap();

        assert_eq!(points_for(&breakdown, ROUND_DOLLAR_RULE), 50);
        assert_eq!(points_for(&breakdown, QUARTER_MULTIPLE_RULE), 25);
        assert_eq!(breakdown.points, 28 + 75);
    }

    #[test]
    fn test_evaluate_does_not_modify_receipt() {
        let receipt = target_receipt();
        let before = receipt.clone();
        evaluate(&receipt).unwrap();
        assert_eq!(receipt, before);
    }

    #[test]
    fn test_empty_items_fails() {
        let mut receipt = target_receipt();
        receipt.items.clear();
        assert!(matches!(
            evaluate(&receipt),
            Err(EngineError::InvalidReceipt { field, .. }) if field == "items"
        ));
    }

    #[test]
    fn test_bad_total_fails() {
        let mut receipt = target_receipt();
        receipt.total = "35.3".to_string();
        assert!(matches!(
            evaluate(&receipt),
            Err(EngineError::InvalidReceipt { field, .. }) if field == "total"
        ));
    }

    #[test]
    fn test_bad_price_fails() {
        let mut receipt = target_receipt();
        receipt.items[4].price = "12".to_string();
        assert!(matches!(
            evaluate(&receipt),
            Err(EngineError::InvalidReceipt { field, .. }) if field == "items[4].price"
        ));
    }

    #[test]
    fn test_points_overflow_fails_instead_of_wrapping() {
        let mut receipt = target_receipt();
        let max_price = format!("{}.{:02}", i64::MAX / 100, i64::MAX % 100);
        receipt.items = vec![Item::new("abc", max_price); 1100];

        assert!(matches!(
            evaluate(&receipt),
            Err(EngineError::InvalidReceipt { field, .. }) if field == "items"
        ));
    }

    #[test]
    fn test_largest_prices_below_overflow_still_score() {
        let mut receipt = target_receipt();
        let max_price = format!("{}.{:02}", i64::MAX / 100, i64::MAX % 100);
        receipt.items = vec![Item::new("abc", max_price); 2];

        let breakdown = evaluate_with_breakdown(&receipt).unwrap();
        assert_eq!(
            points_for(&breakdown, DESCRIPTION_LENGTH_RULE),
            2 * 18_446_744_073_709_552
        );
    }

    fn arb_amount() -> impl Strategy<Value = String> {
        (0u64..10_000, 0u64..100).prop_map(|(dollars, cents)| format!("{dollars}.{cents:02}"))
    }

    fn arb_receipt() -> impl Strategy<Value = Receipt> {
        (
            "[A-Za-z0-9&' -]{1,30}",
            (2000i32..2030, 1u32..=12, 1u32..=28),
            (0u32..24, 0u32..60),
            arb_amount(),
            prop::collection::vec(("[A-Za-z0-9 -]{0,25}", arb_amount()), 1..12),
        )
            .prop_map(|(retailer, (y, m, d), (h, min), total, items)| Receipt {
                retailer,
                purchase_date: format!("{y:04}-{m:02}-{d:02}"),
                purchase_time: format!("{h:02}:{min:02}"),
                total,
                items: items
                    .into_iter()
                    .map(|(description, price)| Item::new(description, price))
                    .collect(),
            })
    }

    proptest! {
        #[test]
        fn prop_evaluate_is_deterministic(receipt in arb_receipt()) {
            let first = evaluate(&receipt).unwrap();
            let second = evaluate(&receipt).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_points_equal_sum_of_contributions(receipt in arb_receipt()) {
            let breakdown = evaluate_with_breakdown(&receipt).unwrap();
            let sum: u64 = breakdown.contributions.iter().map(|c| c.points).sum();
            prop_assert_eq!(breakdown.points, sum);
            prop_assert_eq!(breakdown.points, evaluate(&receipt).unwrap());
        }

        #[test]
        fn prop_round_totals_are_quarter_multiples(dollars in 0u64..100_000) {
            let mut receipt = Receipt {
                retailer: "X".to_string(),
                purchase_date: "2022-01-02".to_string(),
                purchase_time: "10:00".to_string(),
                total: format!("{dollars}.00"),
                items: vec![Item::new("ab", "1.00")],
            };
            let round = evaluate(&receipt).unwrap();
            receipt.total = format!("{dollars}.01");
            let off_by_a_cent = evaluate(&receipt).unwrap();
            prop_assert_eq!(round, off_by_a_cent + 75);
        }
    }
}
