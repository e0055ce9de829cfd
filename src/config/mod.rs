//! Skill configuration and skills-root resolution.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SkillsError;

/// Skills directory used when no override path is configured, relative to
/// the injected base directory.
pub const DEFAULT_SKILLS_RELATIVE_PATH: &str = ".agents/skills";

/// Options controlling where skills are discovered.
///
/// ```
/// use agent_skills_mcp::config::SkillOptions;
///
/// let options = SkillOptions::default().with_path("/srv/skills");
/// assert_eq!(
///     options.resolve_root(std::path::Path::new("/opt/app")),
///     std::path::PathBuf::from("/srv/skills"),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SkillOptions {
    /// Directory containing skill assets. Absolute, or relative to the
    /// process working directory. Empty counts as unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl SkillOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the override skills directory.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// The override path, if one is set and non-empty.
    pub fn override_path(&self) -> Option<&Path> {
        self.path
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Resolve the skills root for these options against `base_dir`.
    pub fn resolve_root(&self, base_dir: &Path) -> PathBuf {
        resolve_skills_root(self.override_path(), base_dir)
    }
}

/// Resolve the directory scanned for skills.
///
/// A non-empty `override_path` is returned unchanged; otherwise the default
/// `.agents/skills` directory under `base_dir` is used.
pub fn resolve_skills_root(override_path: Option<&Path>, base_dir: &Path) -> PathBuf {
    match override_path {
        Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
        _ => base_dir.join(DEFAULT_SKILLS_RELATIVE_PATH),
    }
}

/// Check that an injected base directory can anchor the default skills root.
pub fn validate_base_dir(base_dir: &Path) -> Result<(), SkillsError> {
    if base_dir.as_os_str().is_empty() {
        return Err(SkillsError::Configuration(
            "base directory for skills must not be empty".into(),
        ));
    }

    if !base_dir.is_absolute() {
        return Err(SkillsError::Configuration(format!(
            "base directory for skills must be absolute: {}",
            base_dir.display()
        )));
    }

    Ok(())
}

/// Directory containing the running executable.
pub fn process_base_dir() -> Result<PathBuf, SkillsError> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        SkillsError::Configuration(format!(
            "executable path has no parent directory: {}",
            exe.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_override_path_is_returned_unchanged() {
        let base = PathBuf::from("/opt/app");
        for path in ["/srv/skills", "relative/skills", "./skills", "/"] {
            let resolved = resolve_skills_root(Some(Path::new(path)), &base);
            assert_eq!(resolved, PathBuf::from(path));
        }
    }

    #[test]
    fn no_override_resolves_under_the_base_directory() {
        let resolved = resolve_skills_root(None, Path::new("/opt/app"));
        assert_eq!(resolved, PathBuf::from("/opt/app/.agents/skills"));
    }

    #[test]
    fn an_empty_override_falls_back_to_the_default() {
        let resolved = resolve_skills_root(Some(Path::new("")), Path::new("/opt/app"));
        assert_eq!(resolved, PathBuf::from("/opt/app/.agents/skills"));

        let options = SkillOptions::default().with_path("");
        assert_eq!(options.override_path(), None);
        assert_eq!(
            options.resolve_root(Path::new("/opt/app")),
            PathBuf::from("/opt/app/.agents/skills")
        );
    }

    #[test]
    fn options_deserialize_with_and_without_a_path() {
        let empty: SkillOptions = serde_json::from_str("{}").expect("empty options should parse");
        assert_eq!(empty, SkillOptions::default());

        let with_path: SkillOptions =
            serde_json::from_str(r#"{ "path": "/srv/skills" }"#).expect("options should parse");
        assert_eq!(with_path.path, Some(PathBuf::from("/srv/skills")));
    }

    #[test]
    fn base_dir_validation_rejects_empty_and_relative_paths() {
        assert!(validate_base_dir(Path::new("")).is_err());
        assert!(validate_base_dir(Path::new("relative/dir")).is_err());

        let absolute = std::env::temp_dir();
        assert!(validate_base_dir(&absolute).is_ok());
    }

    #[test]
    fn process_base_dir_is_an_absolute_directory() {
        let dir = process_base_dir().expect("test binary should have a parent directory");
        assert!(dir.is_absolute());
        assert!(dir.is_dir());
    }
}
