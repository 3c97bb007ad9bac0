//! Error types for NavBuilder
//!
//! Rendering never fails; the only fallible paths are building a tree from
//! an external record source and parsing source configuration.

use thiserror::Error;

/// Result type alias for NavBuilder operations
pub type NavResult<T> = Result<T, NavError>;

/// Main error type for NavBuilder operations
#[derive(Error, Debug)]
pub enum NavError {
    /// The external record source failed while selecting child records
    #[error("record source error for table '{table}': {source}")]
    Source {
        table: String,
        #[source]
        source: anyhow::Error,
    },

    /// A returned record has no value under a configured column name
    #[error("record from table '{table}' has no '{column}' column")]
    MissingColumn { table: String, column: String },

    /// Source configuration text could not be parsed
    #[error("invalid source config: {0}")]
    Config(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_column() {
        let err = NavError::MissingColumn {
            table: "categories".to_string(),
            column: "title".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "record from table 'categories' has no 'title' column"
        );
    }

    #[test]
    fn test_error_display_source() {
        let err = NavError::Source {
            table: "nav_links".to_string(),
            source: anyhow::anyhow!("connection refused"),
        };
        assert_eq!(
            err.to_string(),
            "record source error for table 'nav_links': connection refused"
        );
    }
}
