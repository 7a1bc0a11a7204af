//! Core data models for the Receipt Processor.
//!
//! This module contains all the domain models used throughout the crate.

mod amount;
mod receipt;
mod score;

pub use amount::{Amount, AmountError};
pub use receipt::{Item, Receipt};
pub use score::{RuleContribution, ScoreBreakdown};
