//! GitHub client for the target organization.
//!
//! Everything the migration writes goes through this module: repository
//! creation, issues with provenance labels, and pull requests with their
//! comment threads, reviewer requests, and closing state edits.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for GitHub API operations
//! - [`types`] - Wire types for requests and responses
//! - [`client`] - Client creation and the write operations

mod client;
mod error;
mod types;

pub use client::{
    format_comment_body, format_issue_body, format_pull_body, map_issue_state, GitHubClient,
    PullOutcome, GITHUB_API, MIGRATION_LABEL,
};
pub use error::{is_retryable, short_error_message, GitHubError};
pub use types::{GitHubOrg, GitHubUser, IssueHandle, PullHandle, RepoHandle};
