//! Forgeport - migrate Bitbucket Cloud workspaces to GitHub organizations.
//!
//! This library reads repositories, issues, and pull requests from a
//! Bitbucket workspace and recreates them in a GitHub organization,
//! mirroring the full git content along the way. Every API call is retried
//! with exponential backoff on rate limits and server errors.
//!
//! # Example
//!
//! ```ignore
//! use forgeport::{MigrationConfig, Migrator};
//!
//! let config = MigrationConfig {
//!     bitbucket_username: "alice".into(),
//!     bitbucket_password: "app-password".into(),
//!     github_token: "ghp_...".into(),
//!     workspace: "acme".into(),
//!     github_org: "acme-gh".into(),
//!     dry_run: false,
//!     verbose: false,
//! };
//!
//! let migrator = Migrator::new(config.into_shared())?;
//! if migrator.test_connections(None).await {
//!     let summary = migrator.migrate_workspace(None).await?;
//!     println!("migrated {} repositories", summary.completed);
//! }
//! ```

pub mod bitbucket;
pub mod config;
pub mod github;
pub mod http;
pub mod migrate;
pub mod mirror;
pub mod record;
pub mod retry;

pub use bitbucket::{BitbucketClient, BitbucketError, PullRequestFilter};
pub use config::{redact_url, MigrationConfig};
pub use github::{GitHubClient, GitHubError, PullOutcome};
pub use migrate::{
    MigrationProgress, Migrator, ProgressCallback, RepositoryReport, Stage, WorkspaceSummary,
};
pub use mirror::{ContentMirror, GitCommandMirror, MirrorError};
pub use record::{
    CommentRecord, IssueRecord, PullRequestRecord, PullRequestState, RepositoryRecord,
};
pub use retry::RetryPolicy;
