//! Shared utility functions for TWQ crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Date formats accepted for the activity-start-date column, tried in order.
    /// WQX exports use ISO dates; older portal extracts use US-style slashes.
    const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%m-%d-%Y"];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Coerce a raw date field into a date, trying each accepted format.
    ///
    /// Returns `None` on unparseable input rather than an error; callers
    /// decide whether a missing date drops the record.
    pub fn coerce_date(s: &str) -> Option<NaiveDate> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }
        // A timestamp suffix ("2020-01-01 00:00:00") is ignored.
        let date_part = trimmed.split_whitespace().next()?;
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
    }

}

/// Numeric coercion helpers
pub mod numbers {
    /// Coerce a raw value field into a float.
    ///
    /// Returns `None` for empty, non-numeric, or sentinel inputs. The value
    /// column is nullable in the data model, so `None` keeps the record alive.
    pub fn coerce_value(s: &str) -> Option<f64> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
    }

}
