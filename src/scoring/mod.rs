//! Scoring logic for the Receipt Processor.
//!
//! This module contains the rule engine that turns a receipt into loyalty
//! points. Each rule lives in its own module and reports a
//! [`RuleContribution`](crate::models::RuleContribution): the retailer name
//! rule, the round dollar and quarter multiple rules on the total, the item
//! pair rule, the description length rule, the odd day rule and the
//! afternoon window rule.

mod afternoon_window;
mod description_length;
mod engine;
mod item_pairs;
mod odd_day;
mod quarter_multiple;
mod retailer_name;
mod round_dollar;
mod validation;

pub use afternoon_window::{
    AFTERNOON_WINDOW_HOUR, AFTERNOON_WINDOW_POINTS, AFTERNOON_WINDOW_RULE, score_afternoon_window,
};
pub use description_length::{
    DESCRIPTION_LENGTH_RULE, DESCRIPTION_PRICE_MULTIPLIER, description_points,
    score_description_length, trimmed_length,
};
pub use engine::{evaluate, evaluate_with_breakdown};
pub use item_pairs::{ITEM_PAIRS_RULE, POINTS_PER_ITEM_PAIR, score_item_pairs};
pub use odd_day::{ODD_DAY_POINTS, ODD_DAY_RULE, score_odd_day};
pub use quarter_multiple::{QUARTER_MULTIPLE_POINTS, QUARTER_MULTIPLE_RULE, score_quarter_multiple};
pub use retailer_name::{RETAILER_NAME_RULE, score_retailer_name};
pub use round_dollar::{ROUND_DOLLAR_POINTS, ROUND_DOLLAR_RULE, score_round_dollar};
pub use validation::{
    PURCHASE_DATE_FORMAT, PURCHASE_TIME_FORMAT, ValidatedItem, ValidatedReceipt, validate_receipt,
};
