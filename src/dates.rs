use chrono::NaiveDate;

/// Formats an ISO-8601 date string as `DD-MM-YY` for display.
///
/// Stored values are never rewritten; any input that does not parse as a
/// date is returned unchanged.
pub fn format_display_date(value: &str) -> String {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.format("%d-%m-%y").to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_iso_date_renders_short_form() {
        assert_eq!(format_display_date("2024-05-01"), "01-05-24");
        assert_eq!(format_display_date("1999-12-31"), "31-12-99");
    }

    #[test]
    fn formatted_output_is_fixed_length() {
        assert_eq!(format_display_date("2024-01-09").len(), 8);
    }

    #[test]
    fn malformed_input_passes_through() {
        assert_eq!(format_display_date("not-a-date"), "not-a-date");
        assert_eq!(format_display_date("2024-13-40"), "2024-13-40");
        assert_eq!(format_display_date(""), "");
    }
}
