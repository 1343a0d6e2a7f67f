//! Bitbucket Cloud client for the source workspace.
//!
//! The migration only ever reads from Bitbucket: repository listings,
//! per-repository details, issues, and pull requests with their comment
//! threads. All listings follow the API's `next` links until exhausted.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for Bitbucket API operations
//! - [`types`] - Wire types for API responses
//! - [`client`] - Client creation and the read operations
//! - [`convert`] - Conversion to platform-neutral records

mod client;
mod convert;
mod error;
mod types;

pub use client::{BitbucketClient, PullRequestFilter, BITBUCKET_API};
pub use error::{is_retryable, short_error_message, BitbucketError};
pub use types::{BitbucketRepository, BitbucketUser, Page};
