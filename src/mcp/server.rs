//! `rmcp` server handler serving skill prompts and resources.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use base64::Engine;
use rmcp::{
    model::{
        AnnotateAble, GetPromptRequestParams, GetPromptResult, JsonObject, ListPromptsResult,
        ListResourcesResult, PaginatedRequestParams, Prompt, PromptArgument, PromptMessage,
        PromptMessageRole, RawResource, ReadResourceRequestParams, ReadResourceResult, Resource,
        ResourceContents, ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    ErrorData as McpError, ServerHandler,
};

use crate::config::SkillOptions;
use crate::error::SkillsError;
use crate::registration::{add_skills, SkillRegistrar};
use crate::skills::{PromptDescriptor, ResourceDescriptor, ResourcePayload};

/// Server name reported when none is configured.
pub const DEFAULT_SERVER_NAME: &str = "agent-skills-mcp";

/// Collects skill registrations and builds a [`SkillServer`].
///
/// Registrations append, so several skill roots can feed one server.
#[derive(Debug, Clone)]
pub struct SkillServerBuilder {
    name: String,
    version: String,
    instructions: Option<String>,
    prompts: Vec<PromptDescriptor>,
    resources: Vec<ResourceDescriptor>,
}

impl Default for SkillServerBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_NAME, env!("CARGO_PKG_VERSION"))
    }
}

impl SkillServerBuilder {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            instructions: None,
            prompts: Vec::new(),
            resources: Vec::new(),
        }
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Discover skills for `options` and register them with this builder.
    pub fn with_skills(
        mut self,
        options: &SkillOptions,
        base_dir: &Path,
    ) -> Result<Self, SkillsError> {
        add_skills(&mut self, options, base_dir)?;
        Ok(self)
    }

    pub fn prompts(&self) -> &[PromptDescriptor] {
        &self.prompts
    }

    pub fn resources(&self) -> &[ResourceDescriptor] {
        &self.resources
    }

    pub fn build(self) -> SkillServer {
        SkillServer {
            name: self.name,
            version: self.version,
            instructions: self.instructions,
            prompts: Arc::new(self.prompts),
            resources: Arc::new(self.resources),
        }
    }
}

impl SkillRegistrar for SkillServerBuilder {
    fn register_prompts(&mut self, prompts: Vec<PromptDescriptor>) {
        self.prompts.extend(prompts);
    }

    fn register_resources(&mut self, resources: Vec<ResourceDescriptor>) {
        self.resources.extend(resources);
    }
}

/// An MCP server handler over an immutable set of skills.
#[derive(Debug, Clone)]
pub struct SkillServer {
    name: String,
    version: String,
    instructions: Option<String>,
    prompts: Arc<Vec<PromptDescriptor>>,
    resources: Arc<Vec<ResourceDescriptor>>,
}

impl SkillServer {
    pub fn prompts(&self) -> &[PromptDescriptor] {
        &self.prompts
    }

    pub fn resources(&self) -> &[ResourceDescriptor] {
        &self.resources
    }

    /// MCP prompt definitions, in registration order.
    pub fn prompt_definitions(&self) -> Vec<Prompt> {
        self.prompts.iter().map(prompt_definition).collect()
    }

    /// MCP resource definitions, in registration order.
    pub fn resource_definitions(&self) -> Vec<Resource> {
        self.resources.iter().map(resource_definition).collect()
    }

    /// Render the prompt `name` with the given arguments.
    pub fn render_prompt(
        &self,
        name: &str,
        arguments: Option<&JsonObject>,
    ) -> Result<GetPromptResult, McpError> {
        let prompt = self
            .prompts
            .iter()
            .find(|prompt| prompt.id == name)
            .ok_or_else(|| McpError::invalid_params(format!("Unknown prompt: {name}"), None))?;

        let values = arguments.map(argument_values).unwrap_or_default();

        Ok(GetPromptResult {
            description: prompt.description.clone(),
            messages: vec![PromptMessage::new_text(
                PromptMessageRole::User,
                prompt.render(&values),
            )],
        })
    }

    /// Read the resource identified by `uri`.
    pub fn read(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        let resource = self
            .resources
            .iter()
            .find(|resource| resource.uri == uri)
            .ok_or_else(|| {
                McpError::resource_not_found(format!("Unknown resource: {uri}"), None)
            })?;

        let contents = match &resource.payload {
            ResourcePayload::Text(text) => ResourceContents::TextResourceContents {
                uri: resource.uri.clone(),
                mime_type: Some(resource.content_type.clone()),
                text: text.clone(),
                meta: None,
            },
            ResourcePayload::Binary(bytes) => ResourceContents::BlobResourceContents {
                uri: resource.uri.clone(),
                mime_type: Some(resource.content_type.clone()),
                blob: base64::engine::general_purpose::STANDARD.encode(bytes),
                meta: None,
            },
        };

        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }
}

fn prompt_definition(prompt: &PromptDescriptor) -> Prompt {
    let arguments = if prompt.arguments.is_empty() {
        None
    } else {
        Some(
            prompt
                .arguments
                .iter()
                .map(|name| PromptArgument {
                    name: name.clone(),
                    title: None,
                    description: Some(format!("Value substituted for {{{{{name}}}}}")),
                    required: Some(false),
                })
                .collect(),
        )
    };

    Prompt::new(prompt.id.clone(), prompt.description.clone(), arguments)
}

fn resource_definition(resource: &ResourceDescriptor) -> Resource {
    let mut raw = RawResource::new(resource.uri.clone(), resource.id.clone());
    raw.mime_type = Some(resource.content_type.clone());
    raw.size = u32::try_from(resource.payload.len()).ok();
    raw.no_annotation()
}

fn argument_values(arguments: &JsonObject) -> HashMap<String, String> {
    arguments
        .iter()
        .map(|(name, value)| {
            let value = match value {
                serde_json::Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            (name.clone(), value)
        })
        .collect()
}

impl ServerHandler for SkillServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder()
            .enable_prompts()
            .enable_resources()
            .build();
        info.server_info.name = self.name.clone();
        info.server_info.version = self.version.clone();
        info.instructions = self.instructions.clone();
        info
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult::with_all_items(self.prompt_definitions()))
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        tracing::debug!(prompt = %request.name, "serving prompt");
        self.render_prompt(&request.name, request.arguments.as_ref())
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(
            self.resource_definitions(),
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        tracing::debug!(uri = %request.uri, "serving resource");
        self.read(&request.uri)
    }
}
