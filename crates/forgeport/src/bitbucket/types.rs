//! Bitbucket Cloud API data types.
//!
//! Only the fields the migration reads are declared; everything else in
//! the API responses is ignored, which keeps deserialization resilient
//! to API additions.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One page of a paginated Bitbucket listing.
///
/// `next` holds the absolute URL of the following page, or is absent on
/// the last page.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub values: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
}

/// The authenticated Bitbucket user, from `GET /2.0/user`.
#[derive(Debug, Clone, Deserialize)]
pub struct BitbucketUser {
    pub display_name: String,
    pub username: String,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
}

/// A repository in a workspace listing or details response.
#[derive(Debug, Clone, Deserialize)]
pub struct BitbucketRepository {
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Absent in some responses; treated as private when missing.
    #[serde(default)]
    pub is_private: Option<bool>,
}

/// An account reference embedded in issues, pull requests, and comments.
#[derive(Debug, Clone, Deserialize)]
pub struct BitbucketActor {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
}

/// Rendered content block (`{"raw": ...}`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BitbucketContent {
    #[serde(default)]
    pub raw: Option<String>,
}

/// The `links` object; only the browser-facing `html` link is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BitbucketLinks {
    #[serde(default)]
    pub html: Option<BitbucketLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BitbucketLink {
    pub href: String,
}

/// An issue from the issue tracker.
#[derive(Debug, Clone, Deserialize)]
pub struct BitbucketIssue {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub reporter: Option<BitbucketActor>,
    #[serde(default)]
    pub links: Option<BitbucketLinks>,
    #[serde(default)]
    pub content: Option<BitbucketContent>,
    #[serde(default)]
    pub state: Option<String>,
}

/// A branch reference on one side of a pull request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BitbucketPullRef {
    #[serde(default)]
    pub branch: Option<BitbucketBranch>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BitbucketBranch {
    pub name: String,
}

/// A pull request, without its comments (those are a separate listing).
#[derive(Debug, Clone, Deserialize)]
pub struct BitbucketPullRequest {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<BitbucketActor>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub links: Option<BitbucketLinks>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: Option<BitbucketPullRef>,
    #[serde(default)]
    pub destination: Option<BitbucketPullRef>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub reviewers: Vec<BitbucketActor>,
}

/// A comment on a pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct BitbucketComment {
    #[serde(default)]
    pub user: Option<BitbucketActor>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub content: Option<BitbucketContent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_tolerates_missing_fields() {
        let page: Page<BitbucketRepository> = serde_json::from_str("{}").unwrap();
        assert!(page.values.is_empty());
        assert!(page.next.is_none());
    }

    #[test]
    fn pull_request_parses_nested_branches() {
        let json = r#"{
            "id": 7,
            "title": "Add feature",
            "state": "MERGED",
            "source": {"branch": {"name": "feature/x"}},
            "destination": {"branch": {"name": "main"}},
            "reviewers": [{"display_name": "Reviewer One", "nickname": "rev1"}]
        }"#;
        let pr: BitbucketPullRequest = serde_json::from_str(json).unwrap();
        assert_eq!(pr.id, 7);
        assert_eq!(
            pr.source.unwrap().branch.unwrap().name,
            "feature/x"
        );
        assert_eq!(pr.reviewers.len(), 1);
    }

    #[test]
    fn issue_tolerates_sparse_payloads() {
        let issue: BitbucketIssue = serde_json::from_str(r#"{"title": "Bug"}"#).unwrap();
        assert_eq!(issue.title.as_deref(), Some("Bug"));
        assert!(issue.state.is_none());
    }
}
