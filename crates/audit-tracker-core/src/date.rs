use chrono::NaiveDate;

use crate::{Error, Result};

/// Calendar date format used on the wire and in storage.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date supplied by a client.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| Error::InvalidDate(value.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let date = parse_date("2024-03-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_date_round_trip() {
        let date = parse_date("2024-03-15").unwrap();
        assert_eq!(format_date(date), "2024-03-15");
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert_eq!(
            parse_date("15/03/2024"),
            Err(Error::InvalidDate("15/03/2024".to_string()))
        );
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("").is_err());
        assert!(parse_date("2024-03-15T10:00:00").is_err());
        assert!(parse_date(" 2024-03-15 ").is_err());
        assert!(parse_date("2024-03-15\n").is_err());
    }
}
