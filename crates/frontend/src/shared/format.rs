//! Display formatting for amounts and dates

use chrono::NaiveDate;

/// Amount with comma thousands separators and at most three decimals:
/// 1500.0 -> "1,500", 12.5 -> "12.5"
pub fn format_amount(value: f64) -> String {
    let millis = (value * 1000.0).round() as i64;
    let abs = millis.unsigned_abs();
    let digits = (abs / 1000).to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if millis < 0 {
        result.push('-');
    }
    let mut result: String = result.chars().rev().collect();
    let fraction = format!("{:03}", abs % 1000);
    let fraction = fraction.trim_end_matches('0');
    if !fraction.is_empty() {
        result.push('.');
        result.push_str(fraction);
    }
    result
}

/// Amount prefixed with the rupee sign
pub fn format_rupees(value: f64) -> String {
    format!("₹{}", format_amount(value))
}

/// Booking date as D/M/YYYY
pub fn format_booking_date(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(900.0), "900");
        assert_eq!(format_amount(1500.0), "1,500");
        assert_eq!(format_amount(1234567.0), "1,234,567");
        assert_eq!(format_amount(-2500.0), "-2,500");
        assert_eq!(format_amount(999.6), "999.6");
    }

    #[test]
    fn test_format_amount_keeps_three_decimals() {
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(0.05), "0.05");
        assert_eq!(format_amount(1234.5678), "1,234.568");
        assert_eq!(format_amount(2.0004), "2");
        assert_eq!(format_amount(-0.0001), "0");
        assert_eq!(format_amount(-1500.25), "-1,500.25");
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(2500.0), "₹2,500");
        assert_eq!(format_rupees(12.5), "₹12.5");
    }

    #[test]
    fn test_format_booking_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_booking_date(date), "7/3/2026");
    }
}
