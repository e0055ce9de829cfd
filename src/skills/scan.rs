//! Directory walk shared by the prompt and resource providers.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::skills::diagnostics::SkillDiagnostic;

/// File name marking a skill directory's main prompt.
pub const SKILL_FILE_NAME: &str = "SKILL.md";

/// File name suffix marking a standalone prompt template.
pub const PROMPT_FILE_SUFFIX: &str = ".prompt.md";

/// How a scanned file is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SkillFileKind {
    Prompt,
    Resource,
}

/// A candidate file found under the skills root.
#[derive(Debug, Clone)]
pub(crate) struct SkillFile {
    /// Full path of the file.
    pub path: PathBuf,
    /// Path relative to the skills root.
    pub relative_path: PathBuf,
}

pub(crate) fn classify(relative_path: &Path) -> SkillFileKind {
    match relative_path.file_name().and_then(OsStr::to_str) {
        Some(SKILL_FILE_NAME) => SkillFileKind::Prompt,
        Some(name) if name.ends_with(PROMPT_FILE_SUFFIX) => SkillFileKind::Prompt,
        _ => SkillFileKind::Resource,
    }
}

/// Collect files of `kind` under `root`, sorted by relative path.
///
/// A missing root yields no files and no diagnostics. Walk failures, such as
/// an unreadable directory or a malformed ignore file, belong to no single
/// file and are reported only by the [`SkillFileKind::Resource`] scan, so a
/// caller running both scans sees each failure once.
pub(crate) fn scan_skill_files(
    root: &Path,
    kind: SkillFileKind,
    diagnostics: &mut Vec<SkillDiagnostic>,
) -> Vec<SkillFile> {
    if !root.is_dir() {
        tracing::debug!(root = %root.display(), "skills root not found; nothing to discover");
        return Vec::new();
    }

    let reports_walk_errors = kind == SkillFileKind::Resource;

    let mut builder = WalkBuilder::new(root);
    builder.follow_links(false);
    builder.hidden(true);
    builder.ignore(true);
    builder.git_ignore(true);
    builder.require_git(false);
    builder.git_exclude(false);
    builder.git_global(false);
    builder.parents(false);

    let mut files = Vec::new();

    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                if reports_walk_errors {
                    diagnostics.push(walk_diagnostic(root, &error));
                }
                continue;
            }
        };

        // Ignore-file parse errors ride along on the directory's entry.
        if let Some(error) = entry.error() {
            if reports_walk_errors {
                diagnostics.push(walk_diagnostic(root, error));
            }
        }

        if entry.depth() == 0 {
            continue;
        }

        let Some(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            continue;
        }

        // Symlinked files are kept and read through the link; a broken link
        // surfaces as a read diagnostic. Symlinked directories are skipped.
        if file_type.is_symlink() {
            if let Ok(metadata) = fs::metadata(entry.path()) {
                if metadata.is_dir() {
                    tracing::debug!(
                        path = %entry.path().display(),
                        "not following symlinked directory"
                    );
                    continue;
                }
            }
        }

        if has_component(entry.path(), "node_modules") {
            continue;
        }

        let relative_path = match entry.path().strip_prefix(root) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => continue,
        };

        if classify(&relative_path) != kind {
            continue;
        }

        files.push(SkillFile {
            path: entry.into_path(),
            relative_path,
        });
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    files
}

fn walk_diagnostic(root: &Path, error: &ignore::Error) -> SkillDiagnostic {
    let path = error_path(error).unwrap_or(root);
    SkillDiagnostic::warning(path, format!("Failed while scanning for skills: {error}"))
}

/// The path an `ignore` error is about, if it carries one.
fn error_path(error: &ignore::Error) -> Option<&Path> {
    match error {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Partial(errors) => errors.iter().find_map(error_path),
        _ => None,
    }
}

/// Relative path rendered with `/` separators, or `None` when a component is
/// not valid UTF-8.
pub(crate) fn slash_path(relative_path: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in relative_path.components() {
        parts.push(component.as_os_str().to_str()?);
    }
    Some(parts.join("/"))
}

fn has_component(path: &Path, needle: &str) -> bool {
    path.components()
        .any(|component| component.as_os_str() == OsStr::new(needle))
}
