//! Receipt validation and parsing.
//!
//! Turns the text fields of a [`Receipt`] into the typed values the scoring
//! rules work on. Any failure is reported as [`EngineError::InvalidReceipt`]
//! naming the offending field; nothing is scored unless every field parses.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{EngineError, EngineResult};
use crate::models::{Amount, Receipt};

/// Format accepted for `purchaseDate`.
pub const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format accepted for `purchaseTime`.
pub const PURCHASE_TIME_FORMAT: &str = "%H:%M";

// chrono accepts unpadded fields, a leading sign and leading whitespace, so
// the exact shape is checked first. `d` is any ASCII digit.
const PURCHASE_DATE_SHAPE: &str = "dddd-dd-dd";
const PURCHASE_TIME_SHAPE: &str = "dd:dd";

/// An item whose price has been parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedItem<'a> {
    /// The description exactly as submitted (untrimmed).
    pub short_description: &'a str,
    /// The parsed price.
    pub price: Amount,
}

/// A receipt whose fields have all been parsed.
///
/// Borrows the text fields from the source [`Receipt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedReceipt<'a> {
    /// The retailer name as submitted.
    pub retailer: &'a str,
    /// The parsed purchase date.
    pub purchase_date: NaiveDate,
    /// The parsed purchase time.
    pub purchase_time: NaiveTime,
    /// The parsed receipt total.
    pub total: Amount,
    /// Parsed items in receipt order; never empty.
    pub items: Vec<ValidatedItem<'a>>,
}

/// Parses and validates every field of a receipt.
///
/// # Errors
///
/// Returns [`EngineError::InvalidReceipt`] when:
/// - `retailer` is empty
/// - `purchaseDate` is not a zero-padded `YYYY-MM-DD` calendar date
/// - `purchaseTime` is not a zero-padded 24-hour `HH:MM`
/// - `total` or any item `price` is not a two-decimal amount
/// - `items` is empty
///
/// # Example
///
/// ```
/// use receipt_processor::models::{Item, Receipt};
/// use receipt_processor::scoring::validate_receipt;
///
/// let receipt = Receipt {
///     retailer: "Target".to_string(),
///     purchase_date: "2022-01-01".to_string(),
///     purchase_time: "13:01".to_string(),
///     total: "6.49".to_string(),
///     items: vec![Item::new("Mountain Dew 12PK", "6.49")],
/// };
///
/// let validated = validate_receipt(&receipt).unwrap();
/// assert_eq!(validated.total.cents(), 649);
/// assert_eq!(validated.items.len(), 1);
/// ```
pub fn validate_receipt(receipt: &Receipt) -> EngineResult<ValidatedReceipt<'_>> {
    if receipt.retailer.is_empty() {
        return Err(EngineError::invalid_receipt("retailer", "must not be empty"));
    }

    let invalid_date = |reason: String| {
        EngineError::invalid_receipt(
            "purchaseDate",
            format!("'{}' is not a YYYY-MM-DD date: {}", receipt.purchase_date, reason),
        )
    };
    if !matches_shape(&receipt.purchase_date, PURCHASE_DATE_SHAPE) {
        return Err(invalid_date(
            "expected a four-digit year and two-digit month and day".to_string(),
        ));
    }
    let purchase_date = NaiveDate::parse_from_str(&receipt.purchase_date, PURCHASE_DATE_FORMAT)
        .map_err(|e| invalid_date(e.to_string()))?;

    let invalid_time = |reason: String| {
        EngineError::invalid_receipt(
            "purchaseTime",
            format!("'{}' is not a 24-hour HH:MM time: {}", receipt.purchase_time, reason),
        )
    };
    if !matches_shape(&receipt.purchase_time, PURCHASE_TIME_SHAPE) {
        return Err(invalid_time("expected two-digit hour and minute".to_string()));
    }
    let purchase_time = NaiveTime::parse_from_str(&receipt.purchase_time, PURCHASE_TIME_FORMAT)
        .map_err(|e| invalid_time(e.to_string()))?;

    let total = parse_amount("total", &receipt.total)?;

    if receipt.items.is_empty() {
        return Err(EngineError::invalid_receipt(
            "items",
            "at least one item is required",
        ));
    }

    let items = receipt
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| -> EngineResult<ValidatedItem> {
            let price = parse_amount(&format!("items[{}].price", index), &item.price)?;
            Ok(ValidatedItem {
                short_description: &item.short_description,
                price,
            })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    Ok(ValidatedReceipt {
        retailer: &receipt.retailer,
        purchase_date,
        purchase_time,
        total,
        items,
    })
}

/// Checks `value` byte by byte against `shape`, where `d` matches any ASCII
/// digit and every other byte must match exactly.
fn matches_shape(value: &str, shape: &str) -> bool {
    value.len() == shape.len()
        && value
            .bytes()
            .zip(shape.bytes())
            .all(|(v, s)| if s == b'd' { v.is_ascii_digit() } else { v == s })
}

fn parse_amount(field: &str, value: &str) -> EngineResult<Amount> {
    value
        .parse::<Amount>()
        .map_err(|e| EngineError::invalid_receipt(field, e.to_string()))
}
