//! Error types for skill discovery and registration.

use thiserror::Error;

/// Primary error type for all skill operations.
///
/// Discovery itself never fails; per-file problems are reported as
/// [`SkillDiagnostic`](crate::skills::SkillDiagnostic)s instead.
#[derive(Error, Debug)]
pub enum SkillsError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("MCP error: {0}")]
    Mcp(String),
}

impl SkillsError {
    /// Whether this error comes from invalid caller-supplied configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SkillsError>;
