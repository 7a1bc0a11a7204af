//! Receipt and item models.
//!
//! This module defines the [`Receipt`] and [`Item`] structs as they are
//! submitted for scoring. Amounts, dates and times are kept as the text the
//! client sent; the scoring engine is responsible for parsing them.

use serde::{Deserialize, Serialize};

/// A single purchased line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// The short product description, e.g. "Mountain Dew 12PK".
    pub short_description: String,
    /// The price paid for this item, e.g. "6.49".
    pub price: String,
}

impl Item {
    /// Creates an item from a description and price.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A purchase receipt submitted for scoring.
///
/// # Example
///
/// ```
/// use receipt_processor::models::{Item, Receipt};
///
/// let receipt = Receipt {
///     retailer: "Target".to_string(),
///     purchase_date: "2022-01-01".to_string(),
///     purchase_time: "13:01".to_string(),
///     total: "6.49".to_string(),
///     items: vec![Item::new("Mountain Dew 12PK", "6.49")],
/// };
///
/// let json = serde_json::to_value(&receipt).unwrap();
/// assert_eq!(json["purchaseDate"], "2022-01-01");
/// assert_eq!(json["items"][0]["shortDescription"], "Mountain Dew 12PK");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// The name of the retailer or store the receipt is from.
    pub retailer: String,
    /// The purchase date printed on the receipt (`YYYY-MM-DD`).
    pub purchase_date: String,
    /// The purchase time printed on the receipt (`HH:MM`, 24-hour).
    pub purchase_time: String,
    /// The total amount paid, e.g. "35.35".
    pub total: String,
    /// The items purchased, in receipt order.
    pub items: Vec<Item>,
}
