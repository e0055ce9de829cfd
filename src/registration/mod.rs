//! Wiring discovered skills into a server's registration API.

use std::path::{Path, PathBuf};

use crate::config::{validate_base_dir, SkillOptions};
use crate::error::SkillsError;
use crate::skills::{
    FileSystemPromptProvider, FileSystemResourceProvider, PromptDescriptor, ResourceDescriptor,
    SkillDiagnostic,
};

/// A server builder that accepts discovered skill collections.
///
/// [`add_skills`] never calls either method with an empty collection.
pub trait SkillRegistrar {
    fn register_prompts(&mut self, prompts: Vec<PromptDescriptor>);

    fn register_resources(&mut self, resources: Vec<ResourceDescriptor>);
}

/// Summary of one discovery-and-registration pass.
#[derive(Debug, Clone)]
pub struct RegistrationReport {
    /// Directory that was scanned.
    pub root: PathBuf,
    /// Number of prompts handed to the registrar.
    pub prompts_registered: usize,
    /// Number of resources handed to the registrar.
    pub resources_registered: usize,
    /// Diagnostics from both providers, prompts first.
    pub diagnostics: Vec<SkillDiagnostic>,
}

impl RegistrationReport {
    pub fn registered_anything(&self) -> bool {
        self.prompts_registered > 0 || self.resources_registered > 0
    }
}

/// Discover skills with default options and register them.
pub fn add_default_skills<R>(
    registrar: &mut R,
    base_dir: &Path,
) -> Result<RegistrationReport, SkillsError>
where
    R: SkillRegistrar + ?Sized,
{
    add_skills(registrar, &SkillOptions::default(), base_dir)
}

/// Discover prompts and resources under the configured skills root and
/// register every non-empty collection with `registrar`.
///
/// `base_dir` anchors the default `.agents/skills` root and must be absolute
/// when `options` has no override path.
pub fn add_skills<R>(
    registrar: &mut R,
    options: &SkillOptions,
    base_dir: &Path,
) -> Result<RegistrationReport, SkillsError>
where
    R: SkillRegistrar + ?Sized,
{
    if options.override_path().is_none() {
        validate_base_dir(base_dir)?;
    }

    let root = options.resolve_root(base_dir);

    let prompts = FileSystemPromptProvider::new(&root).load();
    let resources = FileSystemResourceProvider::new(&root).load();

    let mut diagnostics = prompts.diagnostics;
    diagnostics.extend(resources.diagnostics);
    for diagnostic in &diagnostics {
        diagnostic.log();
    }

    let prompts_registered = prompts.prompts.len();
    if prompts_registered > 0 {
        registrar.register_prompts(prompts.prompts);
    }

    let resources_registered = resources.resources.len();
    if resources_registered > 0 {
        registrar.register_resources(resources.resources);
    }

    tracing::info!(
        root = %root.display(),
        prompts = prompts_registered,
        resources = resources_registered,
        skipped = diagnostics.len(),
        "registered skills"
    );

    Ok(RegistrationReport {
        root,
        prompts_registered,
        resources_registered,
        diagnostics,
    })
}
