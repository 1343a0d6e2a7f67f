//! Progress events emitted during a migration.
//!
//! Every operation that does meaningful work takes an optional
//! [`ProgressCallback`]; the CLI renders the events, either interactively
//! or as structured log lines. The callback is injected at call sites
//! rather than living in a global so tests can capture events directly.

use super::types::Stage;

/// Progress events emitted during migration operations.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum MigrationProgress {
    /// Starting to list repositories in the source workspace.
    FetchingRepositories { workspace: String },

    /// Fetched one page of the repository listing.
    FetchedPage {
        workspace: String,
        count: usize,
        total_so_far: usize,
    },

    /// Repository listing complete.
    FetchComplete { workspace: String, total: usize },

    /// Starting the per-repository pipeline.
    RepositoryStarted { slug: String, dry_run: bool },

    /// The source reported the repository as absent.
    DetailsMissing { slug: String },

    /// Issue listing for a repository finished.
    IssuesFetched { slug: String, count: usize },

    /// Pull request listing (with nested comments) finished.
    PullRequestsFetched { slug: String, count: usize },

    /// Dry run: the repository that would have been created.
    WouldCreateRepository { name: String },

    /// Target repository created.
    RepositoryCreated { name: String },

    /// Mirror clone/push started.
    MirroringContent { slug: String },

    /// Mirror clone/push finished.
    ContentMirrored { slug: String },

    /// One issue migrated, with the state it ended up in on the target.
    IssueMigrated {
        slug: String,
        title: String,
        target_state: &'static str,
    },

    /// One issue failed; siblings are unaffected.
    IssueError {
        slug: String,
        title: String,
        error: String,
    },

    /// One pull request migrated.
    PullRequestMigrated { slug: String, title: String },

    /// A pull request was skipped because it lacks branch information.
    PullRequestSkipped { slug: String, title: String },

    /// One pull request failed; siblings are unaffected.
    PullRequestError {
        slug: String,
        title: String,
        error: String,
    },

    /// One comment on a migrated pull request failed; the rest proceed.
    CommentError {
        repo: String,
        pull: u64,
        error: String,
    },

    /// Reviewer assignment on a migrated pull request failed.
    ReviewerError {
        repo: String,
        pull: u64,
        error: String,
    },

    /// Closing a migrated pull request failed.
    StateEditError {
        repo: String,
        pull: u64,
        error: String,
    },

    /// The per-repository pipeline aborted at a stage; later stages were
    /// not attempted for this repository.
    RepositoryAborted {
        slug: String,
        stage: Stage,
        error: String,
    },

    /// The per-repository pipeline finished.
    RepositoryComplete {
        slug: String,
        issues: usize,
        pull_requests: usize,
    },

    /// Workspace-level driver finished.
    WorkspaceComplete { completed: usize, aborted: usize },

    /// A retryable failure; waiting before the next attempt.
    RetryBackoff {
        /// Short description of the call being retried.
        context: String,
        retry_after_ms: u64,
        attempt: u32,
    },

    /// Warning message (non-fatal).
    Warning { message: String },
}

/// Callback for progress updates during migration operations.
pub type ProgressCallback = Box<dyn Fn(MigrationProgress) + Send + Sync>;

/// Emit a progress event if a callback is provided.
#[inline]
pub fn emit(on_progress: Option<&ProgressCallback>, event: MigrationProgress) {
    if let Some(cb) = on_progress {
        cb(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn emit_with_callback_invokes_it() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);

        let callback: ProgressCallback = Box::new(move |_event| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        emit(
            Some(&callback),
            MigrationProgress::FetchComplete {
                workspace: "acme".to_string(),
                total: 3,
            },
        );
        emit(
            Some(&callback),
            MigrationProgress::RepositoryStarted {
                slug: "demo".to_string(),
                dry_run: false,
            },
        );

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn emit_without_callback_does_not_panic() {
        emit(
            None,
            MigrationProgress::Warning {
                message: "nothing listening".to_string(),
            },
        );
    }

    #[test]
    fn retry_backoff_debug_includes_context() {
        let event = MigrationProgress::RetryBackoff {
            context: "GET /repositories/acme".to_string(),
            retry_after_ms: 2000,
            attempt: 2,
        };
        let debug = format!("{event:?}");
        assert!(debug.contains("RetryBackoff"));
        assert!(debug.contains("acme"));
        assert!(debug.contains("2000"));
    }
}
