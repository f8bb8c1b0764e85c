//! Error types and handling for the jobsift CLI

use anyhow::Result;
use serde::Serialize;
use std::fmt;

/// Application error types
#[derive(Debug, Serialize)]
pub enum AppError {
    InvalidInput(String),
    Configuration(String),
    NotFound(String),
    ParseError(String),
    StoreError(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::Configuration(msg) => write!(f, "Invalid configuration: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AppError::StoreError(msg) => write!(f, "Store error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Get the stable error code for machine-readable output
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Configuration(_) => "invalid_configuration",
            AppError::NotFound(_) => "not_found",
            AppError::ParseError(_) => "parse_error",
            AppError::StoreError(_) => "store_error",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Convert anyhow::Error to AppError
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Convert serde_json::Error to AppError
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

/// Convert std::io::Error to AppError
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Validation for raw search text at the CLI boundary.
///
/// An empty query is valid (it lists the whole collection); only an
/// excessively long one is rejected before it reaches the engine.
pub fn validate_query(query: &str) -> Result<(), AppError> {
    if query.len() > 500 {
        return Err(AppError::InvalidInput(
            "Query too long, maximum 500 characters".to_string(),
        ));
    }

    Ok(())
}

/// Normalize text using Unicode NFKC
pub fn normalize_text(text: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    text.nfkc().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Configuration("bad sort".into()).error_code(),
            "invalid_configuration"
        );
        assert_eq!(AppError::NotFound("x".into()).error_code(), "not_found");
    }

    #[test]
    fn test_display() {
        let err = AppError::Configuration("unknown sort key: size".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: unknown sort key: size"
        );
    }

    #[test]
    fn test_validate_query_allows_empty() {
        assert!(validate_query("").is_ok());
    }

    #[test]
    fn test_validate_query_rejects_oversized() {
        let long = "x".repeat(501);
        assert!(validate_query(&long).is_err());
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  hello  "), "hello");
        // NFKC folds the ligature
        assert_eq!(normalize_text("ﬁle"), "file");
    }
}
