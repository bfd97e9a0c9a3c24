use chrono::DateTime;

fn group_indian(value: u64) -> String {
    // Indian system: last three digits together, then pairs.
    let digits = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in digits.iter().enumerate() {
        if i == 3 || (i > 3 && (i - 3) % 2 == 0) {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// Renders a rupee amount with Indian digit grouping. Paise show only when
/// the value actually has them: `320` not `320.00`, but `1,23,456.78`.
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let total_paise = (value.abs() * 100.0).round() as u64;
    let whole = group_indian(total_paise / 100);
    let paise = total_paise % 100;
    let formatted = if paise == 0 {
        whole
    } else {
        format!("{}.{:02}", whole, paise)
    };
    if negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Table date column: epoch milliseconds to "15 Jan 2024", "N/A" when the
/// backend could not date the row.
pub fn format_txn_date(millis: Option<i64>) -> String {
    match millis.and_then(DateTime::from_timestamp_millis) {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_indian_system() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(320.0), "320");
        assert_eq!(format_amount(1000.0), "1,000");
        assert_eq!(format_amount(100000.0), "1,00,000");
        assert_eq!(format_amount(1234567.0), "12,34,567");
    }

    #[test]
    fn shows_paise_only_when_present() {
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(123456.78), "1,23,456.78");
        assert_eq!(format_amount(99.999), "100");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside_the_grouping() {
        assert_eq!(format_amount(-450.0), "-450");
        assert_eq!(format_amount(-100000.25), "-1,00,000.25");
    }

    #[test]
    fn renders_epoch_millis_dates() {
        assert_eq!(format_txn_date(Some(1705276800000)), "15 Jan 2024");
        assert_eq!(format_txn_date(None), "N/A");
        // out of chrono's representable range
        assert_eq!(format_txn_date(Some(i64::MAX)), "N/A");
    }
}
