//! catalog CLI - runs the product/category HTTP service
//!
//! - `serve`: start the HTTP API (Postgres, or `--memory` for a throwaway store)
//! - `migrate`: create the catalog tables and exit

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "catalog",
    author,
    version,
    about = "Product and category catalog service"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Create the catalog schema in the configured database
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
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
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["catalog", "serve", "--database-url", "postgres://db/x"])
            .unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };

        assert_eq!(args.bind.to_string(), "127.0.0.1:4000");
        assert!(!args.cors_permissive);
        assert!(!args.memory);
        assert_eq!(args.database.database_url, "postgres://db/x");
        assert_eq!(args.database.max_connections, 5);
    }

    #[test]
    fn serve_memory_with_bind() {
        let cli = Cli::try_parse_from([
            "catalog",
            "--debug",
            "serve",
            "--memory",
            "-b",
            "0.0.0.0:8080",
        ])
        .unwrap();
        assert!(cli.debug);

        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert!(args.memory);
        assert_eq!(args.bind.port(), 8080);
    }

    #[test]
    fn rejects_bad_bind_address() {
        assert!(Cli::try_parse_from(["catalog", "serve", "-b", "localhost"]).is_err());
    }

    #[test]
    fn migrate_takes_database_args() {
        let cli = Cli::try_parse_from([
            "catalog",
            "migrate",
            "--database-url",
            "postgres://db/x",
            "--max-connections",
            "2",
        ])
        .unwrap();
        let Commands::Migrate(args) = cli.command else {
            panic!("expected migrate");
        };
        assert_eq!(args.database.max_connections, 2);
    }
}
