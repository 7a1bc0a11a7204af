//! Afternoon purchase window scoring.
//!
//! The window covers the 2 PM hour only: 14:00 through 14:59 score, 15:xx
//! does not.

use chrono::{NaiveTime, Timelike};

use crate::models::RuleContribution;

/// Rule identifier for the afternoon window rule.
pub const AFTERNOON_WINDOW_RULE: &str = "afternoon_window";

/// Points awarded for a purchase inside the afternoon window.
pub const AFTERNOON_WINDOW_POINTS: u64 = 10;

/// The hour (24-hour clock) that earns the afternoon bonus.
pub const AFTERNOON_WINDOW_HOUR: u32 = 14;

/// Awards [`AFTERNOON_WINDOW_POINTS`] when the purchase hour is 14.
///
/// # Example
///
/// ```
/// use receipt_processor::scoring::score_afternoon_window;
/// use chrono::NaiveTime;
///
/// let during = NaiveTime::from_hms_opt(14, 33, 0).unwrap();
/// assert_eq!(score_afternoon_window(during).points, 10);
///
/// let after = NaiveTime::from_hms_opt(15, 0, 0).unwrap();
/// assert_eq!(score_afternoon_window(after).points, 0);
/// ```
pub fn score_afternoon_window(purchase_time: NaiveTime) -> RuleContribution {
    let hour = purchase_time.hour();
    let in_window = hour == AFTERNOON_WINDOW_HOUR;
    let points = if in_window { AFTERNOON_WINDOW_POINTS } else { 0 };
    let time = purchase_time.format("%H:%M").to_string();

    RuleContribution {
        rule_id: AFTERNOON_WINDOW_RULE.to_string(),
        rule_name: "Afternoon Purchase Window".to_string(),
        points,
        input: serde_json::json!({ "purchase_time": time }),
        reasoning: if in_window {
            format!("Purchased at {} during the 2 PM hour: +{}", time, points)
        } else {
            format!("Purchased at {}, outside the 2 PM hour: no points", time)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_two_pm_hour_scores_10() {
        assert_eq!(score_afternoon_window(time(14, 0)).points, 10);
        assert_eq!(score_afternoon_window(time(14, 1)).points, 10);
        assert_eq!(score_afternoon_window(time(14, 59)).points, 10);
    }

    #[test]
    fn test_three_pm_hour_scores_nothing() {
        assert_eq!(score_afternoon_window(time(15, 0)).points, 0);
        assert_eq!(score_afternoon_window(time(15, 30)).points, 0);
    }

    #[test]
    fn test_outside_afternoon_scores_nothing() {
        assert_eq!(score_afternoon_window(time(13, 59)).points, 0);
        assert_eq!(score_afternoon_window(time(13, 1)).points, 0);
        assert_eq!(score_afternoon_window(time(2, 0)).points, 0);
        assert_eq!(score_afternoon_window(time(16, 0)).points, 0);
    }

    #[test]
    fn test_input_records_time() {
        let result = score_afternoon_window(time(8, 13));
        assert_eq!(result.input["purchase_time"], "08:13");
        assert!(result.reasoning.contains("08:13"));
    }
}
