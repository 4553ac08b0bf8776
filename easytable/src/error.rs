//! Error types for table configuration.

/// Errors raised while ingesting a table configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The override document is not valid JSON or names an unknown option.
    #[error("invalid table configuration: {0}")]
    Invalid(#[from] serde_json::Error),

    /// A page size of zero would make every page empty.
    #[error("page size ('rows') must be at least 1")]
    ZeroPageSize,
}
