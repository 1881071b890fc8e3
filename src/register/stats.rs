use crate::model::record::{Record, Status};

/// Summary figures for the stats cards, computed over whatever slice the
/// caller passes (full register or a filtered subset).
pub fn count(records: &[Record]) -> usize {
    records.len()
}

pub fn active_count(records: &[Record]) -> usize {
    records.iter().filter(|r| r.status == Status::Active).count()
}

/// Arithmetic mean of basic salary; 0.0 for an empty set.
pub fn average_basic_salary(records: &[Record]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total: f64 = records.iter().map(|r| r.basic_salary).sum();
    total / records.len() as f64
}

/// Two-decimal dollar display, e.g. `$5160.00`.
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::sample_records;
    use chrono::NaiveDate;

    #[test]
    fn average_of_an_empty_set_is_zero() {
        assert_eq!(average_basic_salary(&[]), 0.0);
    }

    #[test]
    fn average_over_the_sample_rows() {
        let records = sample_records();
        // (5000 + 4500 + 6000 + 5500 + 4800) / 5
        assert_eq!(average_basic_salary(&records), 5160.0);
    }

    #[test]
    fn active_count_ignores_pending_and_failed_rows() {
        let mut records = sample_records();
        assert_eq!(active_count(&records), 5);

        records[0].status = Status::Pending;
        records[1].status = Status::Failed;
        assert_eq!(active_count(&records), 3);
        assert_eq!(count(&records), 5);
    }

    #[test]
    fn count_includes_blank_rows() {
        let records = vec![Record::new_row(
            1,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )];
        assert_eq!(count(&records), 1);
        assert_eq!(active_count(&records), 0);
    }

    #[test]
    fn currency_renders_with_two_decimals() {
        assert_eq!(format_currency(5160.0), "$5160.00");
        assert_eq!(format_currency(0.5), "$0.50");
        assert_eq!(format_currency(0.0), "$0.00");
    }
}
