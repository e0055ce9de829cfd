//! Filesystem discovery of skill prompts and resources.
//!
//! A skills root is scanned recursively. `SKILL.md` and `*.prompt.md` files
//! become [`PromptDescriptor`]s; every other file becomes a
//! [`ResourceDescriptor`]. Problems with individual files never abort a
//! scan: the file is skipped and a [`SkillDiagnostic`] is recorded.

pub mod content_type;
pub mod diagnostics;
pub mod prompts;
pub mod resources;

mod frontmatter;
mod scan;

pub use content_type::{content_type_for, CONTENT_TYPES};
pub use diagnostics::{SkillCollision, SkillDiagnostic, SkillDiagnosticLevel};
pub use prompts::{FileSystemPromptProvider, LoadPromptsResult, PromptDescriptor};
pub use resources::{
    FileSystemResourceProvider, LoadResourcesResult, ResourceDescriptor, ResourcePayload,
    RESOURCE_URI_SCHEME,
};
pub use scan::{PROMPT_FILE_SUFFIX, SKILL_FILE_NAME};
