//! Aggregated totals across an owner's shift entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ShiftRecord;

/// Totals computed over every stored entry for one owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSummary {
    /// Number of shift entries included.
    pub entry_count: usize,
    /// Sum of total worked hours across the entries.
    pub total_hours: Decimal,
    /// Sum of overtime hours across the entries.
    pub overtime_hours: Decimal,
    /// Sum of pay across the entries.
    pub total_pay: Decimal,
}

impl WorkSummary {
    /// Folds a set of records into their summary totals.
    ///
    /// # Example
    ///
    /// ```
    /// use timesheet_engine::models::WorkSummary;
    ///
    /// let summary = WorkSummary::from_records(&[]);
    /// assert_eq!(summary.entry_count, 0);
    /// assert_eq!(summary.total_pay, rust_decimal::Decimal::ZERO);
    /// ```
    pub fn from_records(records: &[ShiftRecord]) -> Self {
        let mut summary = Self {
            entry_count: records.len(),
            total_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            total_pay: Decimal::ZERO,
        };

        for record in records {
            summary.total_hours += record.total_hours;
            summary.overtime_hours += record.overtime_hours;
            summary.total_pay += record.pay;
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Utc};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn make_record(date: &str, total_hours: &str, overtime_hours: &str, pay: &str) -> ShiftRecord {
        ShiftRecord {
            owner: "u1".to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            total_hours: dec(total_hours),
            overtime_hours: dec(overtime_hours),
            pay: dec(pay),
            note: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_summary_is_all_zero() {
        let summary = WorkSummary::from_records(&[]);
        assert_eq!(summary.entry_count, 0);
        assert_eq!(summary.total_hours, Decimal::ZERO);
        assert_eq!(summary.overtime_hours, Decimal::ZERO);
        assert_eq!(summary.total_pay, Decimal::ZERO);
    }

    #[test]
    fn test_summary_sums_each_field() {
        let records = vec![
            make_record("2024-01-15", "8", "0", "112"),
            make_record("2024-01-16", "10", "2", "154"),
            make_record("2024-01-17", "6", "0", "84"),
        ];

        let summary = WorkSummary::from_records(&records);
        assert_eq!(summary.entry_count, 3);
        assert_eq!(summary.total_hours, dec("24"));
        assert_eq!(summary.overtime_hours, dec("2"));
        assert_eq!(summary.total_pay, dec("350"));
    }

    #[test]
    fn test_summary_preserves_fractional_hours() {
        let records = vec![
            make_record("2024-01-15", "7.5", "0", "105"),
            make_record("2024-01-16", "8.25", "0.25", "117.25"),
        ];

        let summary = WorkSummary::from_records(&records);
        assert_eq!(summary.total_hours, dec("15.75"));
        assert_eq!(summary.overtime_hours, dec("0.25"));
        assert_eq!(summary.total_pay, dec("222.25"));
    }
}
