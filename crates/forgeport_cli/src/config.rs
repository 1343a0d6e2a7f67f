//! Configuration file and environment support for forgeport.
//!
//! Configuration is loaded with the following precedence (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (prefixed with `FORGEPORT_`, e.g., `FORGEPORT_GITHUB_TOKEN`)
//! 3. Config file (~/.config/forgeport/config.toml or ./forgeport.toml)
//!
//! Example config file:
//! ```toml
//! [bitbucket]
//! username = "alice"
//! password = "$(pass show bitbucket/app-password)"  # shell substitution
//! workspace = "acme"
//!
//! [github]
//! token = "ghp_..."  # or use FORGEPORT_GITHUB_TOKEN env var
//! org = "acme-gh"
//! ```

use std::path::PathBuf;
use std::process::Command;

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use directories::ProjectDirs;
use forgeport::MigrationConfig;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting: {name}. Set {flag} or {env}.")]
    Missing {
        name: &'static str,
        flag: &'static str,
        env: &'static str,
    },
}

/// Top-level configuration file shape.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub bitbucket: BitbucketConfig,
    pub github: GitHubConfig,
}

/// Bitbucket source settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BitbucketConfig {
    /// Can also be set via FORGEPORT_BITBUCKET_USERNAME.
    pub username: Option<String>,
    /// App password. Can also be set via FORGEPORT_BITBUCKET_PASSWORD.
    pub password: Option<String>,
    /// Can also be set via FORGEPORT_BITBUCKET_WORKSPACE.
    pub workspace: Option<String>,
}

/// GitHub target settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Can also be set via FORGEPORT_GITHUB_TOKEN.
    pub token: Option<String>,
    /// Can also be set via FORGEPORT_GITHUB_ORG.
    pub org: Option<String>,
}

impl FileConfig {
    /// Load configuration using the config crate's layered approach.
    ///
    /// Sources are loaded in order (later sources override earlier):
    /// 1. XDG config file (~/.config/forgeport/config.toml)
    /// 2. Local config file (./forgeport.toml)
    /// 3. Environment variables with FORGEPORT_ prefix
    pub fn load() -> Self {
        let mut builder = ConfigBuilder::builder();

        if let Some(proj_dirs) = ProjectDirs::from("", "", "forgeport") {
            let xdg_config = proj_dirs.config_dir().join("config.toml");
            if xdg_config.exists() {
                tracing::debug!("Loading config from {:?}", xdg_config);
                builder = builder.add_source(
                    File::from(xdg_config)
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        let local_config = PathBuf::from("forgeport.toml");
        if local_config.exists() {
            tracing::debug!("Loading config from ./forgeport.toml");
            builder = builder.add_source(
                File::from(local_config)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        // e.g., FORGEPORT_BITBUCKET_USERNAME -> bitbucket.username
        builder = builder.add_source(
            Environment::with_prefix("FORGEPORT")
                .separator("_")
                .try_parsing(true),
        );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<FileConfig>() {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to deserialize config: {}", e);
                    FileConfig::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to build config: {}", e);
                FileConfig::default()
            }
        }
    }
}

/// Resolve a configured value, evaluating `$(command)` shell substitutions.
///
/// Substitution hands the command to `sh -c`, so config files and
/// environment variables are trusted input. This exists so credentials can
/// live in a password manager instead of plain text.
pub fn resolve_value(value: Option<String>) -> Option<String> {
    let value = value?;
    let Some(command) = value
        .strip_prefix("$(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return Some(value);
    };

    match Command::new("sh").arg("-c").arg(command).output() {
        Ok(output) if output.status.success() => {
            Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
        }
        Ok(output) => {
            tracing::warn!(
                "Shell command for config value exited with {}",
                output.status
            );
            None
        }
        Err(e) => {
            tracing::warn!("Failed to execute shell command for config value: {}", e);
            None
        }
    }
}

/// Credential and target overrides accepted by every subcommand.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct MigrationArgs {
    /// Bitbucket username
    #[arg(long)]
    pub bitbucket_username: Option<String>,

    /// Bitbucket app password
    #[arg(long)]
    pub bitbucket_password: Option<String>,

    /// GitHub personal access token
    #[arg(long)]
    pub github_token: Option<String>,

    /// Bitbucket workspace to read from
    #[arg(short = 'w', long)]
    pub workspace: Option<String>,

    /// GitHub organization to write to
    #[arg(short = 'o', long)]
    pub github_org: Option<String>,

    /// Simulate the migration without making changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl MigrationArgs {
    /// Merge CLI flags over the file/environment configuration.
    pub fn resolve(self, file: FileConfig) -> Result<MigrationConfig, ConfigError> {
        let bitbucket_username = self
            .bitbucket_username
            .or_else(|| resolve_value(file.bitbucket.username))
            .ok_or(ConfigError::Missing {
                name: "bitbucket username",
                flag: "--bitbucket-username",
                env: "FORGEPORT_BITBUCKET_USERNAME",
            })?;
        let bitbucket_password = self
            .bitbucket_password
            .or_else(|| resolve_value(file.bitbucket.password))
            .ok_or(ConfigError::Missing {
                name: "bitbucket password",
                flag: "--bitbucket-password",
                env: "FORGEPORT_BITBUCKET_PASSWORD",
            })?;
        let github_token = self
            .github_token
            .or_else(|| resolve_value(file.github.token))
            .ok_or(ConfigError::Missing {
                name: "github token",
                flag: "--github-token",
                env: "FORGEPORT_GITHUB_TOKEN",
            })?;
        let workspace = self
            .workspace
            .or_else(|| resolve_value(file.bitbucket.workspace))
            .ok_or(ConfigError::Missing {
                name: "bitbucket workspace",
                flag: "--workspace",
                env: "FORGEPORT_BITBUCKET_WORKSPACE",
            })?;
        let github_org = self
            .github_org
            .or_else(|| resolve_value(file.github.org))
            .ok_or(ConfigError::Missing {
                name: "github organization",
                flag: "--github-org",
                env: "FORGEPORT_GITHUB_ORG",
            })?;

        Ok(MigrationConfig {
            bitbucket_username,
            bitbucket_password,
            github_token,
            workspace,
            github_org,
            dry_run: self.dry_run,
            verbose: self.verbose,
        })
    }
}
