//! Handlers for CLI subcommands.

use std::path::PathBuf;

use rmcp::ServiceExt;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use crate::config::{process_base_dir, SkillOptions};
use crate::error::SkillsError;
use crate::mcp::SkillServerBuilder;
use crate::registration::{add_skills, RegistrationReport};
use crate::skills::ResourcePayload;

use super::{Cli, ListArgs, ServeArgs};

/// Install a stderr `tracing` subscriber; `RUST_LOG` overrides `default_level`.
pub fn init_logging(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_ansi(false)
        .try_init();
}

fn base_dir(cli: &Cli) -> Result<PathBuf, SkillsError> {
    match &cli.base_dir {
        Some(dir) => Ok(dir.clone()),
        None => process_base_dir(),
    }
}

fn discover(
    options: &SkillOptions,
    cli: &Cli,
    builder: &mut SkillServerBuilder,
) -> Result<RegistrationReport, SkillsError> {
    let base_dir = if options.override_path().is_some() {
        cli.base_dir.clone().unwrap_or_default()
    } else {
        base_dir(cli)?
    };
    add_skills(builder, options, &base_dir)
}

/// Discover skills and serve them over stdio until the client disconnects.
pub async fn handle_serve(cli: &Cli, args: &ServeArgs) -> Result<(), SkillsError> {
    let mut builder = SkillServerBuilder::new(args.name.clone(), env!("CARGO_PKG_VERSION"));
    if let Some(instructions) = &args.instructions {
        builder = builder.with_instructions(instructions.clone());
    }

    let report = discover(&cli.skill_options(), cli, &mut builder)?;
    if !report.registered_anything() {
        tracing::warn!(root = %report.root.display(), "no skills found; serving an empty catalog");
    }

    let server = builder.build();
    tracing::info!("starting MCP skills server on stdio");
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|error| SkillsError::Mcp(error.to_string()))?;
    service
        .waiting()
        .await
        .map_err(|error| SkillsError::Mcp(error.to_string()))?;
    Ok(())
}

/// Print what a discovery pass finds.
pub fn handle_list(cli: &Cli, args: &ListArgs) -> Result<(), SkillsError> {
    let mut builder = SkillServerBuilder::default();
    let report = discover(&cli.skill_options(), cli, &mut builder)?;

    if args.json {
        let output = json!({
            "root": report.root.display().to_string(),
            "prompts": builder.prompts().iter().map(|prompt| json!({
                "id": prompt.id,
                "description": prompt.description,
                "arguments": prompt.arguments,
                "path": prompt.relative_path.display().to_string(),
            })).collect::<Vec<_>>(),
            "resources": builder.resources().iter().map(|resource| json!({
                "id": resource.id,
                "uri": resource.uri,
                "content_type": resource.content_type,
                "size": resource.payload.len(),
                "binary": matches!(resource.payload, ResourcePayload::Binary(_)),
            })).collect::<Vec<_>>(),
            "diagnostics": report.diagnostics.iter().map(|diagnostic| json!({
                "level": diagnostic.level.to_string(),
                "message": diagnostic.message,
                "path": diagnostic.path.display().to_string(),
            })).collect::<Vec<_>>(),
        });
        let rendered = serde_json::to_string_pretty(&output)
            .map_err(|error| SkillsError::InvalidArgument(error.to_string()))?;
        println!("{rendered}");
        return Ok(());
    }

    println!("Skills root: {}", report.root.display());
    println!("Prompts ({}):", builder.prompts().len());
    for prompt in builder.prompts() {
        match &prompt.description {
            Some(description) => println!("  {} - {description}", prompt.id),
            None => println!("  {}", prompt.id),
        }
    }
    println!("Resources ({}):", builder.resources().len());
    for resource in builder.resources() {
        println!("  {} [{}] {}", resource.id, resource.content_type, resource.uri);
    }
    if !report.diagnostics.is_empty() {
        println!("Diagnostics ({}):", report.diagnostics.len());
        for diagnostic in &report.diagnostics {
            println!(
                "  {}: {} ({})",
                diagnostic.level,
                diagnostic.message,
                diagnostic.path.display()
            );
        }
    }

    Ok(())
}
