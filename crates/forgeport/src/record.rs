//! Platform-neutral records produced by the source connector and consumed
//! by the target connector.
//!
//! Records are built once per repository migration from the Bitbucket
//! payload types (see `bitbucket::convert`) and are read-only afterwards.

use chrono::{DateTime, Utc};

/// Source-side repository metadata.
#[derive(Debug, Clone)]
pub struct RepositoryRecord {
    /// Repository slug, unique within the workspace. Reused as the target
    /// repository name.
    pub slug: String,
    /// Repository description, empty when unset.
    pub description: String,
    /// Whether the repository is private.
    pub is_private: bool,
}

/// An issue fetched from the source, annotated for re-creation.
#[derive(Debug, Clone)]
pub struct IssueRecord {
    pub title: String,
    /// Display name of the original reporter.
    pub reporter: Option<String>,
    /// Link back to the original issue.
    pub link: Option<String>,
    /// Raw issue body.
    pub body: String,
    /// Raw source state token (e.g. "new", "resolved"). Mapped to a target
    /// state via [`crate::github::map_issue_state`] and also applied
    /// verbatim as a label.
    pub state: String,
}

/// Terminal state of a source pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullRequestState {
    Open,
    Merged,
    Declined,
    /// Any state token this crate does not recognize (e.g. SUPERSEDED).
    Other,
}

impl PullRequestState {
    /// Parse a Bitbucket state token.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token.to_ascii_uppercase().as_str() {
            "OPEN" => Self::Open,
            "MERGED" => Self::Merged,
            "DECLINED" => Self::Declined,
            _ => Self::Other,
        }
    }

    /// Whether the migrated pull request should be edited to a closed state.
    ///
    /// GitHub cannot represent "merged" for a pull request that was never
    /// merged there, so merged and declined both collapse to closed.
    #[must_use]
    pub fn should_close(self) -> bool {
        matches!(self, Self::Merged | Self::Declined)
    }
}

/// A pull request fetched from the source with its comments and reviewers.
#[derive(Debug, Clone)]
pub struct PullRequestRecord {
    pub title: String,
    /// Display name of the original author.
    pub author: Option<String>,
    pub created_on: Option<DateTime<Utc>>,
    /// Link back to the original pull request.
    pub link: Option<String>,
    pub description: String,
    /// Source branch name; a pull request missing either branch name is
    /// unmigratable.
    pub source_branch: Option<String>,
    /// Destination branch name.
    pub destination_branch: Option<String>,
    pub state: PullRequestState,
    /// Comments in the chronological order the source API returned them.
    pub comments: Vec<CommentRecord>,
    /// Reviewer usernames to request on the target.
    pub reviewers: Vec<String>,
}

impl PullRequestRecord {
    /// Both branch names, or None when the pull request is unmigratable.
    #[must_use]
    pub fn branches(&self) -> Option<(&str, &str)> {
        match (&self.source_branch, &self.destination_branch) {
            (Some(src), Some(dst)) => Some((src.as_str(), dst.as_str())),
            _ => None,
        }
    }
}

/// A single pull request comment.
#[derive(Debug, Clone)]
pub struct CommentRecord {
    pub author: Option<String>,
    pub created_on: Option<DateTime<Utc>>,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pull_request_state_parses_known_tokens() {
        assert_eq!(PullRequestState::parse("OPEN"), PullRequestState::Open);
        assert_eq!(PullRequestState::parse("merged"), PullRequestState::Merged);
        assert_eq!(
            PullRequestState::parse("Declined"),
            PullRequestState::Declined
        );
        assert_eq!(
            PullRequestState::parse("SUPERSEDED"),
            PullRequestState::Other
        );
    }

    #[test]
    fn merged_and_declined_should_close() {
        assert!(PullRequestState::Merged.should_close());
        assert!(PullRequestState::Declined.should_close());
        assert!(!PullRequestState::Open.should_close());
        assert!(!PullRequestState::Other.should_close());
    }

    #[test]
    fn branches_requires_both_names() {
        let mut pr = PullRequestRecord {
            title: "t".to_string(),
            author: None,
            created_on: None,
            link: None,
            description: String::new(),
            source_branch: Some("feature".to_string()),
            destination_branch: None,
            state: PullRequestState::Open,
            comments: Vec::new(),
            reviewers: Vec::new(),
        };
        assert!(pr.branches().is_none());

        pr.destination_branch = Some("main".to_string());
        assert_eq!(pr.branches(), Some(("feature", "main")));
    }
}
