//! Error types for the earnings tracker.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! validating user-entered shift data, and reading or writing the
//! persisted ledgers.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the earnings tracker.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use paywatch::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/compensation.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/compensation.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was out of range or inconsistent.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// User-entered shift hours were not usable.
    #[error("Invalid shift hours '{value}': {message}")]
    InvalidShiftHours {
        /// The rejected value, as entered.
        value: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A user-entered time of day did not parse as 24-hour `HH:MM`.
    #[error("Invalid time of day '{value}': expected 24-hour HH:MM")]
    InvalidTimeOfDay {
        /// The rejected value, as entered.
        value: String,
    },

    /// A weekend shift entry was addressed to a Monday-Friday date.
    #[error("Cannot record a weekend shift on {date}: not a Saturday or Sunday")]
    NotARestDay {
        /// The date that was not a rest day.
        date: NaiveDate,
    },

    /// A persisted ledger file could not be read or written.
    #[error("Ledger file error at '{path}': {message}")]
    LedgerIo {
        /// The path of the ledger file.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// A persisted ledger file contained malformed data.
    #[error("Failed to parse ledger file '{path}': {message}")]
    LedgerParse {
        /// The path of the ledger file.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/compensation.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/compensation.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "salary.monthly".to_string(),
            message: "must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'salary.monthly': must be positive"
        );
    }

    #[test]
    fn test_invalid_shift_hours_displays_value_and_message() {
        let error = EngineError::InvalidShiftHours {
            value: "-2".to_string(),
            message: "must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid shift hours '-2': must be positive"
        );
    }

    #[test]
    fn test_invalid_time_of_day_displays_value() {
        let error = EngineError::InvalidTimeOfDay {
            value: "25:99".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid time of day '25:99': expected 24-hour HH:MM"
        );
    }

    #[test]
    fn test_not_a_rest_day_displays_date() {
        let error = EngineError::NotARestDay {
            date: NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot record a weekend shift on 2026-08-05: not a Saturday or Sunday"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
