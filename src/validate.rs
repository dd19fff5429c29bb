//! Form Validation
//!
//! Client-side checks applied before a request is sent. The backend
//! enforces all of these again; failing early keeps the feedback inline.

use chrono::NaiveDate;

/// Extensions accepted for task attachments.
const ATTACHMENT_EXTENSIONS: &[&str] = &[".eml", ".pdf"];

/// Parse a date input value (YYYY-MM-DD).
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| "Enter a valid date".to_string())
}

/// A task or project may not be due before it starts.
pub fn check_date_range(start: NaiveDate, due: NaiveDate) -> Result<(), String> {
    if due < start {
        return Err("Due date cannot be before start date.".to_string());
    }
    Ok(())
}

/// Only email exports and PDFs can be attached to a task.
pub fn allowed_attachment(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    ATTACHMENT_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-07-01"),
            Ok(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())
        );
        assert!(parse_date("").is_err());
        assert!(parse_date("01/07/2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
    }

    #[test]
    fn test_check_date_range() {
        let start = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let due = NaiveDate::from_ymd_opt(2025, 7, 10).unwrap();
        assert!(check_date_range(start, due).is_ok());
        // Same day counts as in range
        assert!(check_date_range(start, start).is_ok());
        assert!(check_date_range(due, start).is_err());
    }

    #[test]
    fn test_allowed_attachment() {
        assert!(allowed_attachment("report.eml"));
        assert!(allowed_attachment("Quote.PDF"));
        assert!(allowed_attachment("archive.v2.pdf"));
        assert!(!allowed_attachment("notes.txt"));
        assert!(!allowed_attachment("eml"));
        assert!(!allowed_attachment(""));
    }
}
