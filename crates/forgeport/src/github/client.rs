//! GitHub API client for the target organization.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use serde::de::DeserializeOwned;

use super::error::{is_retryable, short_error_message, GitHubError};
use super::types::{
    CreateCommentBody, CreateIssueBody, CreatePullBody, CreateRepoBody, EditStateBody,
    GitHubOrg, GitHubUser, IssueHandle, PullHandle, RepoHandle, RequestReviewersBody,
};
use crate::config::MigrationConfig;
use crate::http::reqwest_transport::ReqwestTransport;
use crate::http::{HttpMethod, HttpRequest, HttpTransport};
use crate::migrate::{emit, MigrationProgress, ProgressCallback};
use crate::record::{IssueRecord, PullRequestRecord};
use crate::retry::{classify_status, RetryPolicy, StatusClass};

/// GitHub REST API base.
pub const GITHUB_API: &str = "https://api.github.com";

/// Label attached to every migrated issue, alongside the raw source state.
pub const MIGRATION_LABEL: &str = "migrated-from-bitbucket";

/// Map a Bitbucket issue state to the state the migrated issue ends in.
///
/// Unrecognized states stay open so nothing is closed by guesswork.
#[must_use]
pub fn map_issue_state(state: &str) -> &'static str {
    match state {
        "new" | "open" => "open",
        "resolved" | "closed" => "closed",
        _ => "open",
    }
}

/// Body text for a migrated issue, with provenance header.
#[must_use]
pub fn format_issue_body(issue: &IssueRecord) -> String {
    format!(
        "Migrated from Bitbucket\nOriginal Reporter: {}\nOriginal Link: {}\nOriginal State: {}\n\n{}",
        issue.reporter.as_deref().unwrap_or("Unknown"),
        issue.link.as_deref().unwrap_or(""),
        issue.state,
        issue.body
    )
}

/// Body text for a migrated pull request, with provenance header.
#[must_use]
pub fn format_pull_body(pr: &PullRequestRecord) -> String {
    let created_on = pr
        .created_on
        .map(|ts| ts.to_rfc3339())
        .unwrap_or_else(|| "Unknown".to_string());
    format!(
        "Migrated from Bitbucket Pull Request\nOriginal Author: {}\nOriginal Created On: {}\nOriginal Link: {}\n\n{}",
        pr.author.as_deref().unwrap_or("Unknown"),
        created_on,
        pr.link.as_deref().unwrap_or(""),
        pr.description
    )
}

/// Body text for a migrated pull request comment.
#[must_use]
pub fn format_comment_body(comment: &crate::record::CommentRecord) -> String {
    let created_on = comment
        .created_on
        .map(|ts| ts.to_rfc3339())
        .unwrap_or_else(|| "Unknown".to_string());
    format!(
        "Comment by {}\nOriginal comment date: {}\n\n{}",
        comment.author.as_deref().unwrap_or("Unknown"),
        created_on,
        comment.body
    )
}

/// Outcome of a pull request migration attempt.
#[derive(Debug, Clone)]
pub enum PullOutcome {
    /// Created on the target, possibly with comments and a closed state.
    Created(PullHandle),
    /// Source record had no usable branch pair; nothing was created.
    SkippedMissingBranch,
    /// Dry run; nothing was created.
    DryRun,
}

/// Write client for the target organization.
#[derive(Clone)]
pub struct GitHubClient {
    transport: Arc<dyn HttpTransport>,
    token: String,
    org: String,
    dry_run: bool,
    retry: RetryPolicy,
}

impl GitHubClient {
    /// Create a client with a real HTTP transport.
    pub fn new(config: &MigrationConfig) -> Result<Self, GitHubError> {
        let transport = ReqwestTransport::with_timeout(StdDuration::from_secs(30))
            .map_err(GitHubError::Http)?;
        Ok(Self::new_with_transport(config, Arc::new(transport)))
    }

    pub fn new_with_transport(
        config: &MigrationConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            transport,
            token: config.github_token.clone(),
            org: config.github_org.clone(),
            dry_run: config.dry_run,
            retry: RetryPolicy::default(),
        }
    }

    /// Replace the retry policy. Tests shorten the base delay through this.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    /// HTTPS clone URL with the token embedded.
    ///
    /// Never log this value; use [`crate::config::redact_url`] for display.
    #[must_use]
    pub fn clone_url(&self, name: &str) -> String {
        format!("https://{}@github.com/{}/{}.git", self.token, self.org, name)
    }

    fn build_request(&self, method: HttpMethod, url: &str, body: &[u8]) -> HttpRequest {
        let mut headers = vec![
            (
                "Accept".to_string(),
                "application/vnd.github+json".to_string(),
            ),
            ("User-Agent".to_string(), "forgeport".to_string()),
            ("Authorization".to_string(), format!("token {}", self.token)),
        ];
        if !body.is_empty() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        HttpRequest {
            method,
            url: url.to_string(),
            headers,
            body: body.to_vec(),
        }
    }

    /// One authenticated call with retry. Returns `None` on 404.
    async fn request<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        url: &str,
        body: &[u8],
        on_progress: Option<&ProgressCallback>,
    ) -> Result<Option<T>, GitHubError> {
        let context = format!("{} {}", method.as_str(), url);
        let operation = || async {
            let response = self
                .transport
                .send(self.build_request(method, url, body))
                .await?;
            match classify_status(response.status) {
                StatusClass::Success => Ok(Some(response.body)),
                StatusClass::NotFound => {
                    tracing::info!("Resource not found (404): {}", url);
                    Ok(None)
                }
                StatusClass::Retryable => Err(GitHubError::Retryable {
                    status: response.status,
                    message: String::from_utf8_lossy(&response.body).to_string(),
                }),
                StatusClass::Fatal => {
                    let message = String::from_utf8_lossy(&response.body).to_string();
                    if response.status == 400 || response.status == 401 {
                        Err(GitHubError::Auth {
                            status: response.status,
                            message,
                        })
                    } else {
                        Err(GitHubError::Api {
                            status: response.status,
                            message,
                        })
                    }
                }
            }
        };

        let bytes = self
            .retry
            .run(
                operation,
                is_retryable,
                short_error_message,
                &context,
                on_progress,
            )
            .await?;

        match bytes {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn post<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &impl serde::Serialize,
        resource: &str,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<T, GitHubError> {
        let payload = serde_json::to_vec(body)?;
        self.request(HttpMethod::Post, url, &payload, on_progress)
            .await?
            .ok_or_else(|| GitHubError::NotFound(resource.to_string()))
    }

    async fn patch<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &impl serde::Serialize,
        resource: &str,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<T, GitHubError> {
        let payload = serde_json::to_vec(body)?;
        self.request(HttpMethod::Patch, url, &payload, on_progress)
            .await?
            .ok_or_else(|| GitHubError::NotFound(resource.to_string()))
    }

    /// Verify the token and organization access.
    pub async fn test_connection(
        &self,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<(GitHubUser, GitHubOrg), GitHubError> {
        let user: GitHubUser = self
            .request(
                HttpMethod::Get,
                &format!("{}/user", GITHUB_API),
                &[],
                on_progress,
            )
            .await?
            .ok_or_else(|| GitHubError::NotFound("authenticated user".to_string()))?;
        tracing::info!("Successfully connected to GitHub as {}", user.login);

        let org: GitHubOrg = self
            .request(
                HttpMethod::Get,
                &format!("{}/orgs/{}", GITHUB_API, self.org),
                &[],
                on_progress,
            )
            .await?
            .ok_or_else(|| GitHubError::NotFound(format!("organization: {}", self.org)))?;
        tracing::info!("Access to organization: {}", org.login);

        Ok((user, org))
    }

    /// Create a repository in the organization.
    ///
    /// In dry-run mode nothing is sent; the returned handle names the
    /// repository that would have been created.
    pub async fn create_repository(
        &self,
        name: &str,
        description: &str,
        private: bool,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<RepoHandle, GitHubError> {
        if self.dry_run {
            tracing::info!("[DRY RUN] Would create repository: {}", name);
            emit(
                on_progress,
                MigrationProgress::WouldCreateRepository {
                    name: name.to_string(),
                },
            );
            return Ok(RepoHandle {
                name: name.to_string(),
                full_name: format!("{}/{}", self.org, name),
            });
        }

        let url = format!("{}/orgs/{}/repos", GITHUB_API, self.org);
        let repo: RepoHandle = self
            .post(
                &url,
                &CreateRepoBody {
                    name,
                    description,
                    private,
                },
                &format!("organization: {}", self.org),
                on_progress,
            )
            .await?;
        tracing::info!("Created repository: {}", repo.full_name);
        emit(
            on_progress,
            MigrationProgress::RepositoryCreated {
                name: repo.full_name.clone(),
            },
        );
        Ok(repo)
    }

    /// Create one migrated issue, labeled with its provenance, and close
    /// it when its source state maps to closed.
    ///
    /// Returns the created handle and the state it ended in.
    pub async fn create_issue(
        &self,
        repo: &str,
        issue: &IssueRecord,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<Option<(IssueHandle, &'static str)>, GitHubError> {
        if self.dry_run {
            tracing::info!("[DRY RUN] Would create issue: {}", issue.title);
            return Ok(None);
        }

        let repo_resource = format!("repository: {}/{}", self.org, repo);
        let url = format!("{}/repos/{}/{}/issues", GITHUB_API, self.org, repo);
        let body_text = format_issue_body(issue);
        let handle: IssueHandle = self
            .post(
                &url,
                &CreateIssueBody {
                    title: &issue.title,
                    body: &body_text,
                    labels: vec![MIGRATION_LABEL, &issue.state],
                },
                &repo_resource,
                on_progress,
            )
            .await?;

        let target_state = map_issue_state(&issue.state);
        if target_state == "closed" {
            let edit_url = format!(
                "{}/repos/{}/{}/issues/{}",
                GITHUB_API, self.org, repo, handle.number
            );
            let _: IssueHandle = self
                .patch(
                    &edit_url,
                    &EditStateBody { state: "closed" },
                    &format!("issue #{} in {}/{}", handle.number, self.org, repo),
                    on_progress,
                )
                .await?;
        }

        tracing::info!("Created issue: {}", handle.title);
        Ok(Some((handle, target_state)))
    }

    /// Migrate one pull request: create it, then attach comments,
    /// request reviewers, and close it when the source state was terminal.
    ///
    /// The follow-up steps are each best-effort; their failures are
    /// reported but do not undo or fail the created pull request.
    pub async fn create_pull_request(
        &self,
        repo: &str,
        pr: &PullRequestRecord,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<PullOutcome, GitHubError> {
        let Some((head, base)) = pr.branches() else {
            tracing::error!("Missing branch information for PR: {}", pr.title);
            return Ok(PullOutcome::SkippedMissingBranch);
        };

        if self.dry_run {
            tracing::info!("[DRY RUN] Would create pull request: {}", pr.title);
            return Ok(PullOutcome::DryRun);
        }

        let repo_resource = format!("repository: {}/{}", self.org, repo);
        let url = format!("{}/repos/{}/{}/pulls", GITHUB_API, self.org, repo);
        let body_text = format_pull_body(pr);
        let handle: PullHandle = self
            .post(
                &url,
                &CreatePullBody {
                    title: &pr.title,
                    body: &body_text,
                    head,
                    base,
                },
                &repo_resource,
                on_progress,
            )
            .await?;

        if !pr.comments.is_empty() {
            tracing::info!("Migrating {} comments", pr.comments.len());
        }
        for comment in &pr.comments {
            let comment_url = format!(
                "{}/repos/{}/{}/issues/{}/comments",
                GITHUB_API, self.org, repo, handle.number
            );
            let result: Result<serde_json::Value, GitHubError> = self
                .post(
                    &comment_url,
                    &CreateCommentBody {
                        body: &format_comment_body(comment),
                    },
                    &repo_resource,
                    on_progress,
                )
                .await;
            if let Err(err) = result {
                tracing::warn!("Failed to create comment: {}", err);
                emit(
                    on_progress,
                    MigrationProgress::CommentError {
                        repo: repo.to_string(),
                        pull: handle.number,
                        error: err.to_string(),
                    },
                );
            }
        }

        if !pr.reviewers.is_empty() {
            let reviewers_url = format!(
                "{}/repos/{}/{}/pulls/{}/requested_reviewers",
                GITHUB_API, self.org, repo, handle.number
            );
            let result: Result<serde_json::Value, GitHubError> = self
                .post(
                    &reviewers_url,
                    &RequestReviewersBody {
                        reviewers: &pr.reviewers,
                    },
                    &repo_resource,
                    on_progress,
                )
                .await;
            if let Err(err) = result {
                tracing::warn!("Failed to request reviewers: {}", err);
                emit(
                    on_progress,
                    MigrationProgress::ReviewerError {
                        repo: repo.to_string(),
                        pull: handle.number,
                        error: err.to_string(),
                    },
                );
            }
        }

        if pr.state.should_close() {
            let edit_url = format!(
                "{}/repos/{}/{}/pulls/{}",
                GITHUB_API, self.org, repo, handle.number
            );
            let result: Result<serde_json::Value, GitHubError> = self
                .patch(
                    &edit_url,
                    &EditStateBody { state: "closed" },
                    &repo_resource,
                    on_progress,
                )
                .await;
            if let Err(err) = result {
                tracing::warn!("Failed to close migrated pull request: {}", err);
                emit(
                    on_progress,
                    MigrationProgress::StateEditError {
                        repo: repo.to_string(),
                        pull: handle.number,
                        error: err.to_string(),
                    },
                );
            }
        }

        tracing::info!("Created pull request: {}", handle.title);
        Ok(PullOutcome::Created(handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpResponse, MockTransport};
    use crate::record::{CommentRecord, PullRequestState};
    use chrono::TimeZone;
    use std::time::Duration;

    fn test_config(dry_run: bool) -> MigrationConfig {
        MigrationConfig {
            bitbucket_username: "alice".to_string(),
            bitbucket_password: "app-password".to_string(),
            github_token: "ghtoken".to_string(),
            workspace: "acme".to_string(),
            github_org: "acme-gh".to_string(),
            dry_run,
            verbose: false,
        }
    }

    fn client_with(mock: Arc<MockTransport>, dry_run: bool) -> GitHubClient {
        GitHubClient::new_with_transport(&test_config(dry_run), mock)
            .with_retry_policy(RetryPolicy::new(2, Duration::from_millis(1)))
    }

    fn sample_issue(state: &str) -> IssueRecord {
        IssueRecord {
            title: "Crash on startup".to_string(),
            reporter: Some("Ada".to_string()),
            link: Some("https://bitbucket.org/acme/api/issues/1".to_string()),
            body: "It crashes.".to_string(),
            state: state.to_string(),
        }
    }

    fn sample_pull(state: PullRequestState) -> PullRequestRecord {
        PullRequestRecord {
            title: "Fix pagination".to_string(),
            author: Some("Bob".to_string()),
            created_on: Some(chrono::Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()),
            link: Some("https://bitbucket.org/acme/api/pull-requests/12".to_string()),
            description: "Follow next links.".to_string(),
            source_branch: Some("fix/pages".to_string()),
            destination_branch: Some("main".to_string()),
            state,
            comments: Vec::new(),
            reviewers: Vec::new(),
        }
    }

    #[test]
    fn issue_state_mapping_table() {
        assert_eq!(map_issue_state("new"), "open");
        assert_eq!(map_issue_state("open"), "open");
        assert_eq!(map_issue_state("resolved"), "closed");
        assert_eq!(map_issue_state("closed"), "closed");
        assert_eq!(map_issue_state("on hold"), "open");
        assert_eq!(map_issue_state("wontfix"), "open");
    }

    #[test]
    fn issue_body_carries_provenance_header() {
        let body = format_issue_body(&sample_issue("resolved"));
        assert_eq!(
            body,
            "Migrated from Bitbucket\n\
             Original Reporter: Ada\n\
             Original Link: https://bitbucket.org/acme/api/issues/1\n\
             Original State: resolved\n\
             \n\
             It crashes."
        );
    }

    #[test]
    fn pull_body_falls_back_to_unknown_author() {
        let mut pr = sample_pull(PullRequestState::Open);
        pr.author = None;
        pr.created_on = None;
        let body = format_pull_body(&pr);
        assert!(body.starts_with("Migrated from Bitbucket Pull Request\n"));
        assert!(body.contains("Original Author: Unknown\n"));
        assert!(body.contains("Original Created On: Unknown\n"));
    }

    #[test]
    fn comment_body_contains_author_and_date() {
        let comment = CommentRecord {
            author: Some("Eve".to_string()),
            created_on: Some(chrono::Utc.with_ymd_and_hms(2024, 2, 1, 9, 30, 0).unwrap()),
            body: "LGTM".to_string(),
        };
        let body = format_comment_body(&comment);
        assert!(body.starts_with("Comment by Eve\n"));
        assert!(body.contains("Original comment date: 2024-02-01T09:30:00+00:00"));
        assert!(body.ends_with("\n\nLGTM"));
    }

    #[tokio::test]
    async fn dry_run_creates_nothing() {
        let mock = Arc::new(MockTransport::new());
        let client = client_with(Arc::clone(&mock), true);

        let repo = client
            .create_repository("api", "desc", true, None)
            .await
            .unwrap();
        assert_eq!(repo.name, "api");
        assert_eq!(repo.full_name, "acme-gh/api");

        let issue = client.create_issue("api", &sample_issue("new"), None).await.unwrap();
        assert!(issue.is_none());

        let outcome = client
            .create_pull_request("api", &sample_pull(PullRequestState::Open), None)
            .await
            .unwrap();
        assert!(matches!(outcome, PullOutcome::DryRun));

        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn resolved_issue_is_created_then_closed() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(
            HttpMethod::Post,
            "https://api.github.com/repos/acme-gh/api/issues",
            HttpResponse::json(201, r#"{"number": 1, "title": "Crash on startup"}"#),
        );
        mock.push_response(
            HttpMethod::Patch,
            "https://api.github.com/repos/acme-gh/api/issues/1",
            HttpResponse::json(200, r#"{"number": 1, "title": "Crash on startup"}"#),
        );

        let client = client_with(Arc::clone(&mock), false);
        let (handle, target_state) = client
            .create_issue("api", &sample_issue("resolved"), None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(handle.number, 1);
        assert_eq!(target_state, "closed");

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);

        let create: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(
            create["labels"],
            serde_json::json!(["migrated-from-bitbucket", "resolved"])
        );

        let edit: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
        assert_eq!(edit["state"], "closed");
    }

    #[tokio::test]
    async fn open_issue_is_not_patched() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(
            HttpMethod::Post,
            "https://api.github.com/repos/acme-gh/api/issues",
            HttpResponse::json(201, r#"{"number": 2, "title": "Crash on startup"}"#),
        );

        let client = client_with(Arc::clone(&mock), false);
        let (_, target_state) = client
            .create_issue("api", &sample_issue("new"), None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(target_state, "open");
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn pull_without_branches_is_skipped_without_requests() {
        let mock = Arc::new(MockTransport::new());
        let client = client_with(Arc::clone(&mock), false);

        let mut pr = sample_pull(PullRequestState::Open);
        pr.destination_branch = None;

        let outcome = client.create_pull_request("api", &pr, None).await.unwrap();
        assert!(matches!(outcome, PullOutcome::SkippedMissingBranch));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn merged_pull_is_created_commented_and_closed() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(
            HttpMethod::Post,
            "https://api.github.com/repos/acme-gh/api/pulls",
            HttpResponse::json(201, r#"{"number": 5, "title": "Fix pagination"}"#),
        );
        mock.push_response(
            HttpMethod::Post,
            "https://api.github.com/repos/acme-gh/api/issues/5/comments",
            HttpResponse::json(201, r#"{"id": 100}"#),
        );
        mock.push_response(
            HttpMethod::Patch,
            "https://api.github.com/repos/acme-gh/api/pulls/5",
            HttpResponse::json(200, r#"{"number": 5}"#),
        );

        let mut pr = sample_pull(PullRequestState::Merged);
        pr.comments = vec![CommentRecord {
            author: Some("Eve".to_string()),
            created_on: None,
            body: "LGTM".to_string(),
        }];

        let client = client_with(Arc::clone(&mock), false);
        let outcome = client.create_pull_request("api", &pr, None).await.unwrap();
        assert!(matches!(outcome, PullOutcome::Created(ref h) if h.number == 5));

        let urls = mock.requested_urls();
        assert_eq!(urls.len(), 3);
        assert!(urls[1].ends_with("/issues/5/comments"));
        assert!(urls[2].ends_with("/pulls/5"));
    }

    #[tokio::test]
    async fn comment_failure_does_not_fail_the_pull_request() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(
            HttpMethod::Post,
            "https://api.github.com/repos/acme-gh/api/pulls",
            HttpResponse::json(201, r#"{"number": 8, "title": "Fix pagination"}"#),
        );
        mock.push_response(
            HttpMethod::Post,
            "https://api.github.com/repos/acme-gh/api/issues/8/comments",
            HttpResponse::json(422, r#"{"message": "Validation Failed"}"#),
        );

        let mut pr = sample_pull(PullRequestState::Open);
        pr.comments = vec![CommentRecord {
            author: None,
            created_on: None,
            body: "orphan".to_string(),
        }];

        let events = Arc::new(std::sync::Mutex::new(Vec::new()));
        let events_capture = Arc::clone(&events);
        let callback: ProgressCallback = Box::new(move |event| {
            events_capture
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(event);
        });

        let client = client_with(Arc::clone(&mock), false);
        let outcome = client
            .create_pull_request("api", &pr, Some(&callback))
            .await
            .unwrap();
        assert!(matches!(outcome, PullOutcome::Created(_)));

        let events = events.lock().unwrap_or_else(|e| e.into_inner());
        assert!(events
            .iter()
            .any(|e| matches!(e, MigrationProgress::CommentError { pull: 8, .. })));
    }

    #[tokio::test]
    async fn reviewers_are_requested_when_present() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(
            HttpMethod::Post,
            "https://api.github.com/repos/acme-gh/api/pulls",
            HttpResponse::json(201, r#"{"number": 9, "title": "Fix pagination"}"#),
        );
        mock.push_response(
            HttpMethod::Post,
            "https://api.github.com/repos/acme-gh/api/pulls/9/requested_reviewers",
            HttpResponse::json(201, r#"{"number": 9}"#),
        );

        let mut pr = sample_pull(PullRequestState::Open);
        pr.reviewers = vec!["rev1".to_string()];

        let client = client_with(Arc::clone(&mock), false);
        client.create_pull_request("api", &pr, None).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        let body: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
        assert_eq!(body["reviewers"], serde_json::json!(["rev1"]));
    }

    #[test]
    fn clone_url_embeds_token() {
        let client = client_with(Arc::new(MockTransport::new()), false);
        assert_eq!(
            client.clone_url("api"),
            "https://ghtoken@github.com/acme-gh/api.git"
        );
    }
}
