//! Shared test helpers for building skill trees on disk.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use agent_skills_mcp::registration::SkillRegistrar;
use agent_skills_mcp::skills::{PromptDescriptor, ResourceDescriptor};

/// Write `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent directory should be created");
    }
    fs::write(&path, content).expect("file should be written");
    path
}

/// A skills tree shaped like a packaged agent-skills directory.
pub fn write_sample_tree(root: &Path) {
    write_file(
        root,
        "orchardcore-content/SKILL.md",
        "---\nname: orchardcore-content\ndescription: Model content types\n---\n# Content\n",
    );
    write_file(
        root,
        "orchardcore-content/references/fields.md",
        "# Fields\n",
    );
    write_file(root, "greet.prompt.md", "Hello {{name}}");
    write_file(root, "logo.png", [0x89, b'P', b'N', b'G']);
}

/// Registrar recording every call it receives.
#[derive(Debug, Default)]
pub struct RecordingRegistrar {
    pub prompt_calls: Vec<Vec<PromptDescriptor>>,
    pub resource_calls: Vec<Vec<ResourceDescriptor>>,
}

impl SkillRegistrar for RecordingRegistrar {
    fn register_prompts(&mut self, prompts: Vec<PromptDescriptor>) {
        self.prompt_calls.push(prompts);
    }

    fn register_resources(&mut self, resources: Vec<ResourceDescriptor>) {
        self.resource_calls.push(resources);
    }
}
