//! Request types for the Receipt Processor API.
//!
//! This module defines the JSON request structure for the
//! `/receipts/process` endpoint. Every field is optional on the wire so that
//! a missing field is reported as an invalid receipt naming that field.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Item, Receipt};

/// Request body for the `/receipts/process` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRequest {
    /// The name of the retailer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retailer: Option<String>,
    /// The purchase date (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    /// The purchase time (`HH:MM`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_time: Option<String>,
    /// The total amount paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
    /// The purchased items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ItemRequest>>,
}

/// Item information in a receipt request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    /// The short product description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    /// The price paid for the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

fn required<T>(value: Option<T>, field: impl Into<String>) -> EngineResult<T> {
    value.ok_or_else(|| EngineError::missing_field(field))
}

impl TryFrom<ItemRequest> for Item {
    type Error = EngineError;

    fn try_from(req: ItemRequest) -> EngineResult<Self> {
        Ok(Item {
            short_description: required(req.short_description, "shortDescription")?,
            price: required(req.price, "price")?,
        })
    }
}

impl TryFrom<ReceiptRequest> for Receipt {
    type Error = EngineError;

    fn try_from(req: ReceiptRequest) -> EngineResult<Self> {
        let items = required(req.items, "items")?
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                Item::try_from(item).map_err(|err| match err {
                    EngineError::InvalidReceipt { field, message } => {
                        EngineError::InvalidReceipt {
                            field: format!("items[{}].{}", index, field),
                            message,
                        }
                    }
                    other => other,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(Receipt {
            retailer: required(req.retailer, "retailer")?,
            purchase_date: required(req.purchase_date, "purchaseDate")?,
            purchase_time: required(req.purchase_time, "purchaseTime")?,
            total: required(req.total, "total")?,
            items,
        })
    }
}
