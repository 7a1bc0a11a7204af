//! Score models for the Receipt Processor.
//!
//! This module contains the [`ScoreBreakdown`] type, which records the points
//! a receipt earned together with the contribution of every scoring rule.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The points one scoring rule added to a receipt.
///
/// Each contribution captures the rule's input, the points it awarded and
/// the reasoning behind the decision.
///
/// # Example
///
/// ```
/// use receipt_processor::models::RuleContribution;
///
/// let contribution = RuleContribution {
///     rule_id: "odd_day".to_string(),
///     rule_name: "Odd Purchase Day".to_string(),
///     points: 6,
///     input: serde_json::json!({"purchase_date": "2022-01-01"}),
///     reasoning: "Day 1 is odd: +6".to_string(),
/// };
/// assert_eq!(contribution.points, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleContribution {
    /// The unique identifier of the rule.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Points awarded by this rule (may be zero).
    pub points: u64,
    /// The receipt data the rule looked at.
    pub input: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete scoring result for a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Total points, the sum of every contribution.
    pub points: u64,
    /// Contributions in rule order.
    pub contributions: Vec<RuleContribution>,
}

impl ScoreBreakdown {
    /// Builds a breakdown from contributions, summing their points.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidReceipt`] on `items` if the total does
    /// not fit in a `u64`. Only the item-driven rules can grow that large.
    pub fn from_contributions(contributions: Vec<RuleContribution>) -> EngineResult<Self> {
        let points = contributions
            .iter()
            .try_fold(0u64, |total, c| total.checked_add(c.points))
            .ok_or_else(|| EngineError::invalid_receipt("items", "points overflow"))?;
        Ok(Self {
            points,
            contributions,
        })
    }

    /// Returns the contribution made by the rule with the given id.
    pub fn contribution(&self, rule_id: &str) -> Option<&RuleContribution> {
        self.contributions.iter().find(|c| c.rule_id == rule_id)
    }
}
