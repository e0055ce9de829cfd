//! Agent skills for MCP servers.
//!
//! Discovers skill assets on disk (prompt templates and resource files under
//! `.agents/skills` by default) and registers them with an MCP server
//! builder.
//!
//! ```no_run
//! use agent_skills_mcp::config::SkillOptions;
//! use agent_skills_mcp::mcp::SkillServerBuilder;
//!
//! # fn example() -> agent_skills_mcp::error::Result<()> {
//! let base_dir = agent_skills_mcp::config::process_base_dir()?;
//! let server = SkillServerBuilder::default()
//!     .with_skills(&SkillOptions::default(), &base_dir)?
//!     .build();
//! println!("{} prompts", server.prompts().len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod registration;
pub mod skills;

#[cfg(feature = "mcp")]
pub mod mcp;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::SkillOptions;
pub use error::{Result, SkillsError};
pub use registration::{add_default_skills, add_skills, RegistrationReport, SkillRegistrar};
