//! Model Context Protocol (MCP) server exposing discovered skills.

pub mod server;

pub use server::{SkillServer, SkillServerBuilder, DEFAULT_SERVER_NAME};
