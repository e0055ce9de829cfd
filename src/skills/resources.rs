//! Resource discovery: every non-prompt file under the skills root.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::skills::content_type::{content_type_for, is_textual};
use crate::skills::diagnostics::SkillDiagnostic;
use crate::skills::scan::{scan_skill_files, slash_path, SkillFile, SkillFileKind};

/// URI scheme used for skill resources.
pub const RESOURCE_URI_SCHEME: &str = "skill://";

/// Resource content as loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourcePayload {
    Text(String),
    Binary(Vec<u8>),
}

impl ResourcePayload {
    pub fn len(&self) -> usize {
        match self {
            Self::Text(text) => text.len(),
            Self::Binary(bytes) => bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Binary(_) => None,
        }
    }
}

/// A discovered auxiliary skill file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Relative path without its final extension.
    pub id: String,
    /// `skill://` followed by the relative path.
    pub uri: String,
    /// MIME type inferred from the extension.
    pub content_type: String,
    pub payload: ResourcePayload,
    /// Full path of the source file.
    pub path: PathBuf,
    /// Path relative to the skills root.
    pub relative_path: PathBuf,
}

/// Output of a resource discovery pass.
#[derive(Debug, Default, Clone)]
pub struct LoadResourcesResult {
    /// Resources in lexicographic order of their relative path.
    pub resources: Vec<ResourceDescriptor>,
    /// Skipped files and id collisions.
    pub diagnostics: Vec<SkillDiagnostic>,
}

/// Discovers resource files under a skills root.
#[derive(Debug, Clone)]
pub struct FileSystemResourceProvider {
    root: PathBuf,
}

impl FileSystemResourceProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scan the root and load every resource file.
    pub fn load(&self) -> LoadResourcesResult {
        let mut diagnostics = Vec::new();
        let files = scan_skill_files(&self.root, SkillFileKind::Resource, &mut diagnostics);

        let mut seen = HashMap::<String, PathBuf>::new();
        let mut resources = Vec::new();

        for file in files {
            let Some(resource) = load_resource_file(&file, &mut diagnostics) else {
                continue;
            };

            if let Some(winner_path) = seen.get(&resource.id) {
                diagnostics.push(SkillDiagnostic::collision(
                    "Resource",
                    &resource.id,
                    winner_path,
                    &resource.path,
                ));
                continue;
            }

            seen.insert(resource.id.clone(), resource.path.clone());
            resources.push(resource);
        }

        tracing::debug!(
            root = %self.root.display(),
            resources = resources.len(),
            diagnostics = diagnostics.len(),
            "resource discovery finished"
        );

        LoadResourcesResult {
            resources,
            diagnostics,
        }
    }
}

fn load_resource_file(
    file: &SkillFile,
    diagnostics: &mut Vec<SkillDiagnostic>,
) -> Option<ResourceDescriptor> {
    let Some(relative) = slash_path(&file.relative_path) else {
        diagnostics.push(SkillDiagnostic::warning(
            &file.path,
            "Resource path is not valid UTF-8",
        ));
        return None;
    };

    let bytes = match fs::read(&file.path) {
        Ok(bytes) => bytes,
        Err(error) => {
            diagnostics.push(SkillDiagnostic::warning(
                &file.path,
                format!("Unable to read resource file: {error}"),
            ));
            return None;
        }
    };

    let content_type = content_type_for(&file.relative_path, &bytes);
    let payload = if is_textual(content_type) {
        match String::from_utf8(bytes) {
            Ok(text) => ResourcePayload::Text(text),
            Err(error) => ResourcePayload::Binary(error.into_bytes()),
        }
    } else {
        ResourcePayload::Binary(bytes)
    };

    Some(ResourceDescriptor {
        id: resource_id(&relative),
        uri: format!("{RESOURCE_URI_SCHEME}{relative}"),
        content_type: content_type.to_string(),
        payload,
        path: file.path.clone(),
        relative_path: file.relative_path.clone(),
    })
}

/// Strip the final extension from a `/`-separated relative path.
fn resource_id(relative: &str) -> String {
    let (parent, file_name) = match relative.rsplit_once('/') {
        Some((parent, file_name)) => (Some(parent), file_name),
        None => (None, relative),
    };

    let stem = match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    };

    match parent {
        Some(parent) => format!("{parent}/{stem}"),
        None => stem.to_string(),
    }
}
