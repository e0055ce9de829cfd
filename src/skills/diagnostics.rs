//! Diagnostics emitted while discovering skill files.

use std::path::{Path, PathBuf};

use strum::Display;

/// Severity level for a skill diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SkillDiagnosticLevel {
    /// A file that could not be loaded and was skipped.
    Warning,
    /// A file whose identifier was already taken by an earlier file.
    Collision,
}

/// Represents an identifier collision between two skill files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCollision {
    /// The contested identifier.
    pub name: String,
    /// The file that kept the identifier.
    pub winner_path: PathBuf,
    /// The file that was skipped.
    pub loser_path: PathBuf,
}

/// A diagnostic reported while scanning or loading a skill file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDiagnostic {
    /// Whether the file was skipped outright or lost an id collision.
    pub level: SkillDiagnosticLevel,
    /// What went wrong, suitable for a log line.
    pub message: String,
    /// The skipped file, or the ignore file or directory that failed to load.
    pub path: PathBuf,
    /// Collision details when this is a collision diagnostic.
    pub collision: Option<SkillCollision>,
}

impl SkillDiagnostic {
    pub(crate) fn warning(path: &Path, message: impl Into<String>) -> Self {
        Self {
            level: SkillDiagnosticLevel::Warning,
            message: message.into(),
            path: path.to_path_buf(),
            collision: None,
        }
    }

    pub(crate) fn collision(kind: &str, name: &str, winner_path: &Path, loser_path: &Path) -> Self {
        Self {
            level: SkillDiagnosticLevel::Collision,
            message: format!(
                "{kind} id collision for '{name}'; keeping '{}' and skipping '{}'",
                winner_path.display(),
                loser_path.display(),
            ),
            path: loser_path.to_path_buf(),
            collision: Some(SkillCollision {
                name: name.to_string(),
                winner_path: winner_path.to_path_buf(),
                loser_path: loser_path.to_path_buf(),
            }),
        }
    }

    /// Emit this diagnostic through `tracing`.
    pub fn log(&self) {
        tracing::warn!(
            kind = %self.level,
            path = %self.path.display(),
            "{}",
            self.message
        );
    }
}
