//! Migration pipeline orchestrator.
//!
//! Drives the per-repository stages in order: fetch details, fetch issues,
//! fetch pull requests, create the target repository, mirror content, then
//! migrate issues and pull requests. A stage failure aborts that repository
//! only; item-level failures inside the last two stages never abort.

use std::sync::Arc;

use thiserror::Error;

use super::progress::{emit, MigrationProgress, ProgressCallback};
use super::types::{RepositoryReport, Stage, WorkspaceSummary};
use crate::bitbucket::{BitbucketClient, BitbucketError, PullRequestFilter};
use crate::config::MigrationConfig;
use crate::github::{GitHubClient, GitHubError, PullOutcome};
use crate::mirror::{ContentMirror, GitCommandMirror};

/// Errors constructing a [`Migrator`].
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Bitbucket(#[from] BitbucketError),
    #[error(transparent)]
    GitHub(#[from] GitHubError),
}

/// One row of the workspace listing overview.
#[derive(Debug, Clone)]
pub struct ListingEntry {
    pub slug: String,
    pub issues: usize,
    pub pull_requests: usize,
}

/// Orchestrates a migration between one workspace and one organization.
pub struct Migrator {
    config: Arc<MigrationConfig>,
    source: BitbucketClient,
    target: GitHubClient,
    mirror: Arc<dyn ContentMirror>,
}

impl Migrator {
    /// Build a migrator with real transports and the system git binary.
    pub fn new(config: Arc<MigrationConfig>) -> Result<Self, SetupError> {
        let source = BitbucketClient::new(&config)?;
        let target = GitHubClient::new(&config)?;
        Ok(Self::with_parts(config, source, target, Arc::new(GitCommandMirror)))
    }

    /// Build a migrator from preconstructed parts. Tests inject mock
    /// transports and a recording mirror through this.
    pub fn with_parts(
        config: Arc<MigrationConfig>,
        source: BitbucketClient,
        target: GitHubClient,
        mirror: Arc<dyn ContentMirror>,
    ) -> Self {
        Self {
            config,
            source,
            target,
            mirror,
        }
    }

    pub fn config(&self) -> &MigrationConfig {
        &self.config
    }

    /// Verify both credentials. Both sides are always checked so a single
    /// run surfaces every credential problem at once.
    pub async fn test_connections(&self, on_progress: Option<&ProgressCallback>) -> bool {
        tracing::info!("Testing connections...");

        let source_ok = match self.source.test_connection(on_progress).await {
            Ok(user) => {
                if self.config.verbose {
                    if let Some(uuid) = &user.uuid {
                        tracing::info!("User UUID: {}", uuid);
                    }
                    if let Some(account_id) = &user.account_id {
                        tracing::info!("Account ID: {}", account_id);
                    }
                    tracing::info!("Bitbucket workspace: {}", self.config.workspace);
                }
                true
            }
            Err(err) => {
                tracing::error!("Failed to connect to Bitbucket Cloud: {}", err);
                false
            }
        };

        let target_ok = match self.target.test_connection(on_progress).await {
            Ok((user, org)) => {
                if self.config.verbose {
                    tracing::info!("User ID: {}", user.id);
                    tracing::info!("Organization ID: {}", org.id);
                }
                true
            }
            Err(err) => {
                tracing::error!("Failed to access organization: {}", err);
                false
            }
        };

        source_ok && target_ok
    }

    /// Smoke-read the workspace: list repositories and count their issues
    /// and open pull requests without writing anything.
    pub async fn list_workspace(
        &self,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<Vec<ListingEntry>, BitbucketError> {
        tracing::info!("Testing repository listing...");
        let repos = self.source.list_repositories(on_progress).await?;

        let mut entries = Vec::with_capacity(repos.len());
        for repo in &repos {
            let issues = self.source.list_issues(&repo.slug, on_progress).await?;
            let pulls = self
                .source
                .list_pull_requests(&repo.slug, PullRequestFilter::Open, on_progress)
                .await?;

            tracing::info!("Repository: {}", repo.slug);
            if self.config.verbose {
                for issue in &issues {
                    tracing::info!("  - [{}] {}", issue.state, issue.title);
                }
            }
            tracing::info!("Issues: {}", issues.len());
            tracing::info!("Pull Requests: {}", pulls.len());

            entries.push(ListingEntry {
                slug: repo.slug.clone(),
                issues: issues.len(),
                pull_requests: pulls.len(),
            });
        }
        Ok(entries)
    }

    /// Migrate every repository in the workspace.
    ///
    /// Only the initial listing is fatal; a repository aborted mid-pipeline
    /// is recorded in the summary and the loop moves on.
    pub async fn migrate_workspace(
        &self,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<WorkspaceSummary, BitbucketError> {
        let repos = self.source.list_repositories(on_progress).await?;
        let slugs: Vec<String> = repos.into_iter().map(|r| r.slug).collect();
        Ok(self.migrate_repositories(&slugs, on_progress).await)
    }

    /// Migrate a named set of repositories, in order.
    pub async fn migrate_repositories(
        &self,
        slugs: &[String],
        on_progress: Option<&ProgressCallback>,
    ) -> WorkspaceSummary {
        let mut summary = WorkspaceSummary::default();
        for slug in slugs {
            let report = self.migrate_repository(slug, on_progress).await;
            summary.push(report);
        }
        emit(
            on_progress,
            MigrationProgress::WorkspaceComplete {
                completed: summary.completed,
                aborted: summary.aborted,
            },
        );
        summary
    }

    /// Run the full pipeline for one repository.
    pub async fn migrate_repository(
        &self,
        slug: &str,
        on_progress: Option<&ProgressCallback>,
    ) -> RepositoryReport {
        let mut report = RepositoryReport::new(slug);
        let dry_run = self.config.dry_run;
        let mode = if dry_run { "[DRY RUN] " } else { "" };
        tracing::info!("{}Starting migration for {}", mode, slug);
        emit(
            on_progress,
            MigrationProgress::RepositoryStarted {
                slug: slug.to_string(),
                dry_run,
            },
        );

        // Stage 1: repository details.
        tracing::info!("{}Step 1: Getting repository details", mode);
        let details = match self.source.repository_details(slug, on_progress).await {
            Ok(Some(details)) => details,
            Ok(None) => {
                emit(
                    on_progress,
                    MigrationProgress::DetailsMissing {
                        slug: slug.to_string(),
                    },
                );
                self.abort(
                    &mut report,
                    Stage::FetchDetails,
                    "repository not found in workspace".to_string(),
                    on_progress,
                );
                return report;
            }
            Err(err) => {
                self.abort(&mut report, Stage::FetchDetails, err.to_string(), on_progress);
                return report;
            }
        };

        // Stage 2: issues.
        tracing::info!("{}Step 2: Getting issues", mode);
        let issues = match self.source.list_issues(slug, on_progress).await {
            Ok(issues) => issues,
            Err(err) => {
                self.abort(&mut report, Stage::FetchIssues, err.to_string(), on_progress);
                return report;
            }
        };
        tracing::info!("Found {} issues", issues.len());
        emit(
            on_progress,
            MigrationProgress::IssuesFetched {
                slug: slug.to_string(),
                count: issues.len(),
            },
        );

        // Stage 3: pull requests, terminal states included so merged and
        // declined ones arrive and get closed on the target.
        tracing::info!("{}Step 3: Getting pull requests", mode);
        let pulls = match self
            .source
            .list_pull_requests(slug, PullRequestFilter::All, on_progress)
            .await
        {
            Ok(pulls) => pulls,
            Err(err) => {
                self.abort(
                    &mut report,
                    Stage::FetchPullRequests,
                    err.to_string(),
                    on_progress,
                );
                return report;
            }
        };
        tracing::info!("Found {} pull requests", pulls.len());
        emit(
            on_progress,
            MigrationProgress::PullRequestsFetched {
                slug: slug.to_string(),
                count: pulls.len(),
            },
        );

        // Stage 4: create the target repository. In a dry run the client
        // reports the intent and the pipeline stops here.
        if dry_run {
            tracing::info!("[DRY RUN] Would create repository and migrate content");
            let _ = self
                .target
                .create_repository(slug, &details.description, details.is_private, on_progress)
                .await;
            return report;
        }

        tracing::info!("Step 4: Creating repository and migrating content");
        if let Err(err) = self
            .target
            .create_repository(slug, &details.description, details.is_private, on_progress)
            .await
        {
            self.abort(
                &mut report,
                Stage::CreateRepository,
                err.to_string(),
                on_progress,
            );
            return report;
        }

        // Stage 5: mirror content.
        emit(
            on_progress,
            MigrationProgress::MirroringContent {
                slug: slug.to_string(),
            },
        );
        let source_url = self.source.clone_url(slug);
        let target_url = self.target.clone_url(slug);
        if let Err(err) = self.mirror.mirror(&source_url, &target_url).await {
            self.abort(&mut report, Stage::MirrorContent, err.to_string(), on_progress);
            return report;
        }
        emit(
            on_progress,
            MigrationProgress::ContentMirrored {
                slug: slug.to_string(),
            },
        );

        // Stage 6: issues, one by one.
        tracing::info!("Step 5: Migrating issues");
        for issue in &issues {
            match self.target.create_issue(slug, issue, on_progress).await {
                Ok(Some((_, target_state))) => {
                    report.issues_migrated += 1;
                    emit(
                        on_progress,
                        MigrationProgress::IssueMigrated {
                            slug: slug.to_string(),
                            title: issue.title.clone(),
                            target_state,
                        },
                    );
                }
                Ok(None) => {}
                Err(err) => {
                    report.issues_failed += 1;
                    tracing::warn!("Failed to migrate issue {}: {}", issue.title, err);
                    emit(
                        on_progress,
                        MigrationProgress::IssueError {
                            slug: slug.to_string(),
                            title: issue.title.clone(),
                            error: err.to_string(),
                        },
                    );
                }
            }
        }
        tracing::info!("Migrated {} issues", report.issues_migrated);

        // Stage 7: pull requests, one by one.
        tracing::info!("Step 6: Migrating pull requests");
        for pr in &pulls {
            match self.target.create_pull_request(slug, pr, on_progress).await {
                Ok(PullOutcome::Created(_)) => {
                    report.pulls_migrated += 1;
                    emit(
                        on_progress,
                        MigrationProgress::PullRequestMigrated {
                            slug: slug.to_string(),
                            title: pr.title.clone(),
                        },
                    );
                }
                Ok(PullOutcome::SkippedMissingBranch) => {
                    report.pulls_skipped += 1;
                    emit(
                        on_progress,
                        MigrationProgress::PullRequestSkipped {
                            slug: slug.to_string(),
                            title: pr.title.clone(),
                        },
                    );
                }
                Ok(PullOutcome::DryRun) => {}
                Err(err) => {
                    report.pulls_failed += 1;
                    tracing::warn!("Failed to create pull request {}: {}", pr.title, err);
                    emit(
                        on_progress,
                        MigrationProgress::PullRequestError {
                            slug: slug.to_string(),
                            title: pr.title.clone(),
                            error: err.to_string(),
                        },
                    );
                }
            }
        }
        tracing::info!("Migrated {} pull requests", report.pulls_migrated);

        tracing::info!("Successfully completed migration for {}", slug);
        emit(
            on_progress,
            MigrationProgress::RepositoryComplete {
                slug: slug.to_string(),
                issues: report.issues_migrated,
                pull_requests: report.pulls_migrated,
            },
        );
        report
    }

    fn abort(
        &self,
        report: &mut RepositoryReport,
        stage: Stage,
        error: String,
        on_progress: Option<&ProgressCallback>,
    ) {
        tracing::error!(
            "Aborting migration for {} at {}: {}",
            report.slug,
            stage,
            error
        );
        emit(
            on_progress,
            MigrationProgress::RepositoryAborted {
                slug: report.slug.clone(),
                stage,
                error: error.clone(),
            },
        );
        report.aborted = Some((stage, error));
    }
}
