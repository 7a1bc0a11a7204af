//! Odd purchase day scoring.

use chrono::{Datelike, NaiveDate};

use crate::models::RuleContribution;

/// Rule identifier for the odd day rule.
pub const ODD_DAY_RULE: &str = "odd_day";

/// Points awarded when the purchase day of month is odd.
pub const ODD_DAY_POINTS: u64 = 6;

/// Awards [`ODD_DAY_POINTS`] when the day of month of the purchase is odd.
///
/// Only the day of month matters; month and year are ignored.
///
/// # Example
///
/// ```
/// use receipt_processor::scoring::score_odd_day;
/// use chrono::NaiveDate;
///
/// let first = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
/// assert_eq!(score_odd_day(first).points, 6);
///
/// let twentieth = NaiveDate::from_ymd_opt(2022, 3, 20).unwrap();
/// assert_eq!(score_odd_day(twentieth).points, 0);
/// ```
pub fn score_odd_day(purchase_date: NaiveDate) -> RuleContribution {
    let day = purchase_date.day();
    let is_odd = day % 2 == 1;
    let points = if is_odd { ODD_DAY_POINTS } else { 0 };

    RuleContribution {
        rule_id: ODD_DAY_RULE.to_string(),
        rule_name: "Odd Purchase Day".to_string(),
        points,
        input: serde_json::json!({
            "purchase_date": purchase_date.to_string(),
            "day": day
        }),
        reasoning: if is_odd {
            format!("Day {} is odd: +{}", day, points)
        } else {
            format!("Day {} is even: no points", day)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_odd_days_score_6() {
        for day in [1, 3, 15, 29, 31] {
            assert_eq!(score_odd_day(date(2022, 1, day)).points, 6, "day {day}");
        }
    }

    #[test]
    fn test_even_days_score_nothing() {
        for day in [2, 10, 20, 28, 30] {
            assert_eq!(score_odd_day(date(2022, 1, day)).points, 0, "day {day}");
        }
    }

    #[test]
    fn test_month_does_not_matter() {
        // odd month, even day
        assert_eq!(score_odd_day(date(2023, 3, 2)).points, 0);
    }

    #[test]
    fn test_input_records_day() {
        let result = score_odd_day(date(2022, 1, 1));
        assert_eq!(result.input["day"], 1);
        assert_eq!(result.input["purchase_date"], "2022-01-01");
    }
}
