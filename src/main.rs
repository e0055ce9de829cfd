//! agent-skills-mcp CLI binary entry point.

use agent_skills_mcp::cli::{commands, Cli, Commands};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    commands::init_logging(&cli.log_level);

    let result = match &cli.command {
        Commands::Serve(args) => commands::handle_serve(&cli, args).await,
        Commands::List(args) => commands::handle_list(&cli, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
