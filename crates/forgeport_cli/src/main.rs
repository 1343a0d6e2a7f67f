//! Forgeport CLI - migrate Bitbucket workspaces to GitHub organizations.

mod commands;
mod config;
mod progress;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::{FileConfig, MigrationArgs};

#[derive(Parser)]
#[command(name = "forgeport")]
#[command(version)]
#[command(about = "Bitbucket to GitHub migration tool")]
#[command(
    long_about = "Forgeport migrates repositories from a Bitbucket Cloud workspace into a \
GitHub organization: git content is mirrored in full, and issues and pull \
requests are recreated with provenance metadata, labels, and comments."
)]
#[command(after_long_help = r#"EXAMPLES
    Verify credentials and list the workspace:
        $ forgeport test-connection -w acme -o acme-gh

    Migrate two repositories:
        $ forgeport migrate-repo api web -w acme -o acme-gh

    Dry-run a whole-workspace migration:
        $ forgeport migrate-workspace -w acme -o acme-gh --dry-run

CONFIGURATION
    Forgeport reads configuration from:
      1. ~/.config/forgeport/config.toml (or $XDG_CONFIG_HOME/forgeport/config.toml)
      2. ./forgeport.toml
      3. Environment variables (FORGEPORT_* prefix)
      4. .env file in current directory

    A value of the form $(command) is resolved by running the command in a
    shell and using its trimmed output, so credentials can come from a
    password manager.

ENVIRONMENT VARIABLES
    FORGEPORT_BITBUCKET_USERNAME    Bitbucket username
    FORGEPORT_BITBUCKET_PASSWORD    Bitbucket app password
    FORGEPORT_BITBUCKET_WORKSPACE   Bitbucket workspace to read from
    FORGEPORT_GITHUB_TOKEN          GitHub personal access token
    FORGEPORT_GITHUB_ORG            GitHub organization to write to
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Test connections to Bitbucket and GitHub
    TestConnection {
        #[command(flatten)]
        args: MigrationArgs,
    },
    /// Migrate one or more repositories
    MigrateRepo {
        /// Repositories to migrate
        #[arg(required = true)]
        slugs: Vec<String>,

        #[command(flatten)]
        args: MigrationArgs,
    },
    /// Migrate all repositories in the Bitbucket workspace
    MigrateWorkspace {
        #[command(flatten)]
        args: MigrationArgs,
    },
}

impl Commands {
    fn args(&self) -> &MigrationArgs {
        match self {
            Commands::TestConnection { args } => args,
            Commands::MigrateRepo { args, .. } => args,
            Commands::MigrateWorkspace { args } => args,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "forgeport=debug,forgeport_cli=debug"
    } else {
        "forgeport=info,forgeport_cli=info"
    };
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(default_filter),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.command.args().verbose);

    let file_config = FileConfig::load();

    let success = match cli.command {
        Commands::TestConnection { args } => {
            let config = args.resolve(file_config)?;
            commands::test::handle_test_connection(config).await?
        }
        Commands::MigrateRepo { slugs, args } => {
            let config = args.resolve(file_config)?;
            commands::migrate::handle_migrate_repos(config, slugs).await?
        }
        Commands::MigrateWorkspace { args } => {
            let config = args.resolve(file_config)?;
            commands::migrate::handle_migrate_workspace(config).await?
        }
    };

    if !success {
        std::process::exit(1);
    }
    Ok(())
}
