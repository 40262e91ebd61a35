//! ric CLI - course registry HTTP service
//!
//! Entry point for the `ric` binary:
//! - `serve`: connect to PostgreSQL and run the REST API
//!
//! Configuration is read from flags, then environment variables, with
//! `./.env` and `~/.ric/.env` loaded first.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "ric",
    author,
    version,
    about = "Course registry: courses, students, and enrollments over HTTP"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads env fallbacks
    let env_files = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();
    if env_files.is_empty() {
        tracing::debug!("No .env files found (current dir or ~/.ric)");
    }
    for path in &env_files {
        tracing::info!("Loaded environment from {}", path.display());
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_flags_parse() {
        let cli = Cli::try_parse_from([
            "ric",
            "--debug",
            "serve",
            "--database-url",
            "postgres://x/y",
            "--port",
            "9090",
            "--max-connections",
            "3",
        ])
        .unwrap();
        assert!(cli.debug);

        let Commands::Serve(args) = cli.command;
        assert_eq!(args.port, 9090);
        assert_eq!(args.max_connections, 3);
        assert_eq!(args.database_url, "postgres://x/y");
    }
}
