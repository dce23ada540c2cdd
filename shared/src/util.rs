/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Human-readable date for email bodies, e.g. "03 Aug 2026".
pub fn format_date(date: chrono::NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let d = chrono::NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        assert_eq!(format_date(d), "03 Aug 2026");
    }
}
