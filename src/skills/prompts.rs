//! Prompt discovery: `*.prompt.md` templates and `SKILL.md` files.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::skills::diagnostics::SkillDiagnostic;
use crate::skills::frontmatter::{first_non_empty_line, non_empty_trimmed, parse_frontmatter};
use crate::skills::scan::{
    scan_skill_files, slash_path, SkillFile, SkillFileKind, PROMPT_FILE_SUFFIX, SKILL_FILE_NAME,
};

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z_][A-Za-z0-9_]*)\}\}").expect("placeholder regex must compile")
});

/// A discovered prompt template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDescriptor {
    /// Identifier derived from the relative file path.
    pub id: String,
    /// Short description from frontmatter, else the first non-empty line.
    pub description: Option<String>,
    /// File content, verbatim.
    pub content: String,
    /// Placeholder names (`{{name}}`) in order of first appearance.
    pub arguments: Vec<String>,
    /// Full path of the source file.
    pub path: PathBuf,
    /// Path relative to the skills root.
    pub relative_path: PathBuf,
}

impl PromptDescriptor {
    /// Replace `{{name}}` placeholders with values from `arguments`.
    ///
    /// Placeholders without a value are left untouched.
    pub fn render(&self, arguments: &HashMap<String, String>) -> String {
        PLACEHOLDER_RE
            .replace_all(&self.content, |captures: &regex::Captures<'_>| {
                let name = &captures[1];
                arguments
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| captures[0].to_string())
            })
            .into_owned()
    }
}

/// Output of a prompt discovery pass.
#[derive(Debug, Default, Clone)]
pub struct LoadPromptsResult {
    /// Prompts in lexicographic order of their relative path.
    pub prompts: Vec<PromptDescriptor>,
    /// Skipped files and id collisions.
    pub diagnostics: Vec<SkillDiagnostic>,
}

/// Discovers prompt templates under a skills root.
#[derive(Debug, Clone)]
pub struct FileSystemPromptProvider {
    root: PathBuf,
}

impl FileSystemPromptProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scan the root and load every recognized prompt file.
    pub fn load(&self) -> LoadPromptsResult {
        let mut diagnostics = Vec::new();
        let files = scan_skill_files(&self.root, SkillFileKind::Prompt, &mut diagnostics);

        let mut seen = HashMap::<String, PathBuf>::new();
        let mut prompts = Vec::new();

        for file in files {
            let Some(prompt) = load_prompt_file(&file, &mut diagnostics) else {
                continue;
            };

            if let Some(winner_path) = seen.get(&prompt.id) {
                diagnostics.push(SkillDiagnostic::collision(
                    "Prompt",
                    &prompt.id,
                    winner_path,
                    &prompt.path,
                ));
                continue;
            }

            seen.insert(prompt.id.clone(), prompt.path.clone());
            prompts.push(prompt);
        }

        tracing::debug!(
            root = %self.root.display(),
            prompts = prompts.len(),
            diagnostics = diagnostics.len(),
            "prompt discovery finished"
        );

        LoadPromptsResult {
            prompts,
            diagnostics,
        }
    }
}

fn load_prompt_file(
    file: &SkillFile,
    diagnostics: &mut Vec<SkillDiagnostic>,
) -> Option<PromptDescriptor> {
    let id = match prompt_id(&file.relative_path) {
        Ok(id) => id,
        Err(message) => {
            diagnostics.push(SkillDiagnostic::warning(&file.path, message));
            return None;
        }
    };

    let raw = match fs::read(&file.path) {
        Ok(raw) => raw,
        Err(error) => {
            diagnostics.push(SkillDiagnostic::warning(
                &file.path,
                format!("Unable to read prompt file: {error}"),
            ));
            return None;
        }
    };

    let content = match String::from_utf8(raw) {
        Ok(content) => content,
        Err(_) => {
            diagnostics.push(SkillDiagnostic::warning(
                &file.path,
                "Prompt file is not valid UTF-8",
            ));
            return None;
        }
    };

    let (frontmatter, body) = match parse_frontmatter(&content) {
        Ok(parsed) => parsed,
        Err(error) => {
            diagnostics.push(SkillDiagnostic::warning(
                &file.path,
                format!("Invalid prompt frontmatter YAML: {error}"),
            ));
            return None;
        }
    };

    let description = frontmatter
        .and_then(|frontmatter| frontmatter.description)
        .as_deref()
        .and_then(non_empty_trimmed)
        .or_else(|| first_non_empty_line(body));

    let arguments = template_arguments(&content);

    Some(PromptDescriptor {
        id,
        description,
        arguments,
        content,
        path: file.path.clone(),
        relative_path: file.relative_path.clone(),
    })
}

/// Derive a prompt id from its path relative to the skills root.
fn prompt_id(relative_path: &Path) -> Result<String, String> {
    let file_name = relative_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| "Prompt file name is not valid UTF-8".to_string())?;
    let parent = relative_path.parent().unwrap_or_else(|| Path::new(""));
    let parent = slash_path(parent)
        .ok_or_else(|| "Prompt directory name is not valid UTF-8".to_string())?;

    if file_name == SKILL_FILE_NAME {
        if parent.is_empty() {
            return Err(format!(
                "{SKILL_FILE_NAME} must live in a skill directory, not the skills root"
            ));
        }
        return Ok(parent);
    }

    let stem = file_name
        .strip_suffix(PROMPT_FILE_SUFFIX)
        .unwrap_or(file_name);
    if stem.is_empty() {
        return Err("Prompt file name could not be converted into an id".to_string());
    }

    if parent.is_empty() {
        Ok(stem.to_string())
    } else {
        Ok(format!("{parent}/{stem}"))
    }
}

/// Placeholder names used in `content`, deduplicated, in order.
pub fn template_arguments(content: &str) -> Vec<String> {
    let mut arguments: Vec<String> = Vec::new();
    for captures in PLACEHOLDER_RE.captures_iter(content) {
        let name = &captures[1];
        if !arguments.iter().any(|existing| existing == name) {
            arguments.push(name.to_string());
        }
    }
    arguments
}
