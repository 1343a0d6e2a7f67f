//! Conversion from Bitbucket wire types to platform-neutral records.

use super::types::{
    BitbucketComment, BitbucketIssue, BitbucketPullRequest, BitbucketRepository,
};
use crate::record::{
    CommentRecord, IssueRecord, PullRequestRecord, PullRequestState, RepositoryRecord,
};

/// Convert a repository response to a record.
///
/// Missing `is_private` defaults to private so a migration never widens
/// visibility by accident.
pub fn to_repository_record(repo: &BitbucketRepository) -> RepositoryRecord {
    RepositoryRecord {
        slug: repo.slug.clone(),
        description: repo.description.clone().unwrap_or_default(),
        is_private: repo.is_private.unwrap_or(true),
    }
}

pub fn to_issue_record(issue: &BitbucketIssue) -> IssueRecord {
    IssueRecord {
        title: issue
            .title
            .clone()
            .unwrap_or_else(|| "No title".to_string()),
        reporter: issue
            .reporter
            .as_ref()
            .and_then(|actor| actor.display_name.clone()),
        link: issue
            .links
            .as_ref()
            .and_then(|links| links.html.as_ref())
            .map(|link| link.href.clone()),
        body: issue
            .content
            .as_ref()
            .and_then(|content| content.raw.clone())
            .unwrap_or_default(),
        state: issue
            .state
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
    }
}

/// Convert a pull request plus its separately fetched comments to a record.
pub fn to_pull_request_record(
    pr: &BitbucketPullRequest,
    comments: Vec<CommentRecord>,
) -> PullRequestRecord {
    PullRequestRecord {
        title: pr.title.clone().unwrap_or_else(|| "No title".to_string()),
        author: pr
            .author
            .as_ref()
            .and_then(|actor| actor.display_name.clone()),
        created_on: pr.created_on,
        link: pr
            .links
            .as_ref()
            .and_then(|links| links.html.as_ref())
            .map(|link| link.href.clone()),
        description: pr.description.clone().unwrap_or_default(),
        source_branch: pr
            .source
            .as_ref()
            .and_then(|r| r.branch.as_ref())
            .map(|b| b.name.clone()),
        destination_branch: pr
            .destination
            .as_ref()
            .and_then(|r| r.branch.as_ref())
            .map(|b| b.name.clone()),
        state: pr
            .state
            .as_deref()
            .map(PullRequestState::parse)
            .unwrap_or(PullRequestState::Other),
        comments,
        // Reviewer assignment needs account handles; nicknames map to
        // them, display names do not.
        reviewers: pr
            .reviewers
            .iter()
            .filter_map(|actor| actor.nickname.clone())
            .collect(),
    }
}

pub fn to_comment_record(comment: &BitbucketComment) -> CommentRecord {
    CommentRecord {
        author: comment
            .user
            .as_ref()
            .and_then(|actor| actor.display_name.clone()),
        created_on: comment.created_on,
        body: comment
            .content
            .as_ref()
            .and_then(|content| content.raw.clone())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitbucket::types::{BitbucketActor, BitbucketContent};

    #[test]
    fn repository_without_privacy_flag_defaults_to_private() {
        let repo: BitbucketRepository =
            serde_json::from_str(r#"{"slug": "api"}"#).unwrap();
        let record = to_repository_record(&repo);
        assert!(record.is_private);
        assert_eq!(record.description, "");
    }

    #[test]
    fn issue_record_carries_reporter_and_raw_state() {
        let issue: BitbucketIssue = serde_json::from_str(
            r#"{
                "title": "Crash on startup",
                "state": "resolved",
                "reporter": {"display_name": "Ada"},
                "links": {"html": {"href": "https://bitbucket.org/acme/api/issues/1"}},
                "content": {"raw": "It crashes."}
            }"#,
        )
        .unwrap();
        let record = to_issue_record(&issue);
        assert_eq!(record.title, "Crash on startup");
        assert_eq!(record.reporter.as_deref(), Some("Ada"));
        assert_eq!(record.state, "resolved");
        assert_eq!(record.body, "It crashes.");
    }

    #[test]
    fn pull_request_record_keeps_only_reviewer_nicknames() {
        let pr: BitbucketPullRequest = serde_json::from_str(
            r#"{
                "id": 3,
                "title": "Refactor",
                "state": "OPEN",
                "reviewers": [
                    {"display_name": "With Handle", "nickname": "handle"},
                    {"display_name": "No Handle"}
                ]
            }"#,
        )
        .unwrap();
        let record = to_pull_request_record(&pr, Vec::new());
        assert_eq!(record.reviewers, vec!["handle".to_string()]);
        assert_eq!(record.state, PullRequestState::Open);
        assert!(record.branches().is_none());
    }

    #[test]
    fn comment_record_tolerates_missing_author() {
        let comment = BitbucketComment {
            user: Some(BitbucketActor {
                display_name: None,
                nickname: None,
            }),
            created_on: None,
            content: Some(BitbucketContent {
                raw: Some("LGTM".to_string()),
            }),
        };
        let record = to_comment_record(&comment);
        assert!(record.author.is_none());
        assert_eq!(record.body, "LGTM");
    }
}
