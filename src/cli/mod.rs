//! CLI entry point for agent-skills-mcp.

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::SkillOptions;

/// Serve agent skills over MCP
#[derive(Parser, Debug)]
#[command(
    name = "agent-skills-mcp",
    version,
    about = "Serve filesystem agent skills as MCP prompts and resources"
)]
pub struct Cli {
    /// Skills directory (defaults to <base-dir>/.agents/skills)
    #[arg(short, long, global = true)]
    pub path: Option<PathBuf>,

    /// Base directory for the default skills path (defaults to the executable's directory)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve discovered skills over stdio
    Serve(ServeArgs),
    /// List discovered prompts, resources and diagnostics
    List(ListArgs),
}

/// Arguments for `agent-skills-mcp serve`.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Server name reported to MCP clients
    #[arg(long, default_value = crate::mcp::DEFAULT_SERVER_NAME)]
    pub name: String,

    /// Instructions reported to MCP clients
    #[arg(long)]
    pub instructions: Option<String>,
}

/// Arguments for `agent-skills-mcp list`.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Skill options derived from the global flags.
    pub fn skill_options(&self) -> SkillOptions {
        match &self.path {
            Some(path) => SkillOptions::default().with_path(path),
            None => SkillOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_serve_with_defaults() {
        let cli = Cli::try_parse_from(["agent-skills-mcp", "serve"]).expect("serve should parse");
        assert!(cli.path.is_none());
        assert!(cli.base_dir.is_none());
        assert_eq!(cli.log_level, "info");
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.name, crate::mcp::DEFAULT_SERVER_NAME);
                assert!(args.instructions.is_none());
            }
            other => panic!("expected Serve, got {other:?}"),
        }
    }

    #[test]
    fn parse_list_with_global_flags_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "agent-skills-mcp",
            "list",
            "--json",
            "--path",
            "/srv/skills",
            "--log-level",
            "debug",
        ])
        .expect("list should parse");

        assert_eq!(cli.path, Some(PathBuf::from("/srv/skills")));
        assert_eq!(cli.log_level, "debug");
        assert_eq!(
            cli.skill_options(),
            SkillOptions::default().with_path("/srv/skills")
        );
        match cli.command {
            Commands::List(args) => assert!(args.json),
            other => panic!("expected List, got {other:?}"),
        }
    }

    #[test]
    fn parse_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["agent-skills-mcp"]).is_err());
    }
}
