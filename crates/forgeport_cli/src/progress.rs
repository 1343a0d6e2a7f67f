//! Progress reporting for migration runs.
//!
//! Two modes: interactive terminal output for a TTY, structured logging
//! otherwise (CI, pipes). The reporter consumes the library's progress
//! events; command code never formats events itself.

use std::sync::Arc;

use console::{style, Term};
use forgeport::migrate::{MigrationProgress, ProgressCallback};

pub enum ProgressReporter {
    /// Styled terminal lines for a TTY.
    Interactive(InteractiveReporter),
    /// Structured logging for non-TTY output.
    Logging(LoggingReporter),
}

impl ProgressReporter {
    /// Create a reporter, auto-detecting TTY mode.
    pub fn new() -> Self {
        if Term::stdout().is_term() {
            Self::Interactive(InteractiveReporter::new())
        } else {
            Self::Logging(LoggingReporter)
        }
    }

    pub fn handle(&self, event: MigrationProgress) {
        match self {
            Self::Interactive(r) => r.handle(event),
            Self::Logging(r) => r.handle(event),
        }
    }

    /// Convert to a callback for the library.
    pub fn as_callback(self: &Arc<Self>) -> ProgressCallback {
        let reporter = Arc::clone(self);
        Box::new(move |event| {
            reporter.handle(event);
        })
    }
}

pub struct InteractiveReporter {
    term: Term,
}

impl InteractiveReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    fn line(&self, text: String) {
        let _ = self.term.write_line(&text);
    }

    pub fn handle(&self, event: MigrationProgress) {
        match event {
            MigrationProgress::FetchingRepositories { workspace } => {
                self.line(format!("Listing repositories in {}...", style(workspace).bold()));
            }
            MigrationProgress::FetchedPage { total_so_far, .. } => {
                let _ = self.term.clear_line();
                let _ = self
                    .term
                    .write_str(&format!("  fetched {} repositories\r", total_so_far));
            }
            MigrationProgress::FetchComplete { total, .. } => {
                let _ = self.term.clear_line();
                self.line(format!("Found {} repositories", style(total).bold()));
            }
            MigrationProgress::RepositoryStarted { slug, dry_run } => {
                let prefix = if dry_run { "[DRY RUN] " } else { "" };
                self.line(format!(
                    "{}Migrating {}",
                    style(prefix).yellow(),
                    style(slug).bold()
                ));
            }
            MigrationProgress::DetailsMissing { slug } => {
                self.line(format!(
                    "{} repository {} not found in workspace",
                    style("✗").red(),
                    slug
                ));
            }
            MigrationProgress::IssuesFetched { count, .. } => {
                self.line(format!("  {} issues to migrate", count));
            }
            MigrationProgress::PullRequestsFetched { count, .. } => {
                self.line(format!("  {} pull requests to migrate", count));
            }
            MigrationProgress::WouldCreateRepository { name } => {
                self.line(format!(
                    "{} would create repository {}",
                    style("[DRY RUN]").yellow(),
                    style(name).bold()
                ));
            }
            MigrationProgress::RepositoryCreated { name } => {
                self.line(format!("  {} created {}", style("✓").green(), name));
            }
            MigrationProgress::MirroringContent { .. } => {
                self.line("  mirroring git content...".to_string());
            }
            MigrationProgress::ContentMirrored { .. } => {
                self.line(format!("  {} content mirrored", style("✓").green()));
            }
            MigrationProgress::IssueMigrated {
                title,
                target_state,
                ..
            } => {
                self.line(format!(
                    "  {} issue ({}) {}",
                    style("✓").green(),
                    target_state,
                    title
                ));
            }
            MigrationProgress::IssueError { title, error, .. } => {
                self.line(format!(
                    "  {} issue {}: {}",
                    style("✗").red(),
                    title,
                    error
                ));
            }
            MigrationProgress::PullRequestMigrated { title, .. } => {
                self.line(format!("  {} pull request {}", style("✓").green(), title));
            }
            MigrationProgress::PullRequestSkipped { title, .. } => {
                self.line(format!(
                    "  {} skipped pull request (missing branches) {}",
                    style("-").yellow(),
                    title
                ));
            }
            MigrationProgress::PullRequestError { title, error, .. } => {
                self.line(format!(
                    "  {} pull request {}: {}",
                    style("✗").red(),
                    title,
                    error
                ));
            }
            MigrationProgress::CommentError { pull, error, .. } => {
                self.line(format!(
                    "  {} comment on #{}: {}",
                    style("✗").red(),
                    pull,
                    error
                ));
            }
            MigrationProgress::ReviewerError { pull, error, .. } => {
                self.line(format!(
                    "  {} reviewers on #{}: {}",
                    style("✗").red(),
                    pull,
                    error
                ));
            }
            MigrationProgress::StateEditError { pull, error, .. } => {
                self.line(format!(
                    "  {} closing #{}: {}",
                    style("✗").red(),
                    pull,
                    error
                ));
            }
            MigrationProgress::RepositoryAborted { slug, stage, error } => {
                self.line(format!(
                    "{} aborted {} at {}: {}",
                    style("✗").red(),
                    style(slug).bold(),
                    stage,
                    error
                ));
            }
            MigrationProgress::RepositoryComplete {
                slug,
                issues,
                pull_requests,
            } => {
                self.line(format!(
                    "{} {} migrated ({} issues, {} pull requests)",
                    style("✓").green(),
                    style(slug).bold(),
                    issues,
                    pull_requests
                ));
            }
            MigrationProgress::WorkspaceComplete { completed, aborted } => {
                self.line(format!(
                    "Done: {} migrated, {} aborted",
                    style(completed).green(),
                    if aborted > 0 {
                        style(aborted).red()
                    } else {
                        style(aborted).dim()
                    }
                ));
            }
            MigrationProgress::RetryBackoff {
                context,
                retry_after_ms,
                attempt,
            } => {
                let _ = self.term.clear_line();
                let _ = self.term.write_str(&format!(
                    "Waiting {}s for rate limit (attempt {}, {})\r",
                    retry_after_ms / 1000,
                    attempt,
                    context
                ));
            }
            MigrationProgress::Warning { message } => {
                self.line(format!("{} {}", style("!").yellow(), message));
            }
            _ => {}
        }
    }
}

/// Logging reporter using tracing for structured output.
pub struct LoggingReporter;

impl LoggingReporter {
    pub fn handle(&self, event: MigrationProgress) {
        match event {
            MigrationProgress::FetchingRepositories { workspace } => {
                tracing::info!(workspace = %workspace, "Fetching repositories");
            }
            MigrationProgress::FetchedPage {
                workspace,
                count,
                total_so_far,
            } => {
                tracing::debug!(workspace = %workspace, count, total_so_far, "Fetched page");
            }
            MigrationProgress::FetchComplete { workspace, total } => {
                tracing::info!(workspace = %workspace, total, "Fetch complete");
            }
            MigrationProgress::RepositoryStarted { slug, dry_run } => {
                tracing::info!(slug = %slug, dry_run, "Starting repository migration");
            }
            MigrationProgress::DetailsMissing { slug } => {
                tracing::warn!(slug = %slug, "Repository not found in workspace");
            }
            MigrationProgress::IssuesFetched { slug, count } => {
                tracing::info!(slug = %slug, count, "Fetched issues");
            }
            MigrationProgress::PullRequestsFetched { slug, count } => {
                tracing::info!(slug = %slug, count, "Fetched pull requests");
            }
            MigrationProgress::WouldCreateRepository { name } => {
                tracing::info!(name = %name, "[DRY RUN] Would create repository");
            }
            MigrationProgress::RepositoryCreated { name } => {
                tracing::info!(name = %name, "Created repository");
            }
            MigrationProgress::MirroringContent { slug } => {
                tracing::info!(slug = %slug, "Mirroring content");
            }
            MigrationProgress::ContentMirrored { slug } => {
                tracing::info!(slug = %slug, "Content mirrored");
            }
            MigrationProgress::IssueMigrated {
                slug,
                title,
                target_state,
            } => {
                tracing::info!(slug = %slug, title = %title, target_state, "Migrated issue");
            }
            MigrationProgress::IssueError { slug, title, error } => {
                tracing::warn!(slug = %slug, title = %title, error = %error, "Issue migration failed");
            }
            MigrationProgress::PullRequestMigrated { slug, title } => {
                tracing::info!(slug = %slug, title = %title, "Migrated pull request");
            }
            MigrationProgress::PullRequestSkipped { slug, title } => {
                tracing::warn!(slug = %slug, title = %title, "Skipped pull request without branch information");
            }
            MigrationProgress::PullRequestError { slug, title, error } => {
                tracing::warn!(slug = %slug, title = %title, error = %error, "Pull request migration failed");
            }
            MigrationProgress::CommentError { repo, pull, error } => {
                tracing::warn!(repo = %repo, pull, error = %error, "Comment migration failed");
            }
            MigrationProgress::ReviewerError { repo, pull, error } => {
                tracing::warn!(repo = %repo, pull, error = %error, "Reviewer request failed");
            }
            MigrationProgress::StateEditError { repo, pull, error } => {
                tracing::warn!(repo = %repo, pull, error = %error, "State edit failed");
            }
            MigrationProgress::RepositoryAborted { slug, stage, error } => {
                tracing::error!(slug = %slug, stage = %stage, error = %error, "Repository migration aborted");
            }
            MigrationProgress::RepositoryComplete {
                slug,
                issues,
                pull_requests,
            } => {
                tracing::info!(slug = %slug, issues, pull_requests, "Repository migration complete");
            }
            MigrationProgress::WorkspaceComplete { completed, aborted } => {
                tracing::info!(completed, aborted, "Workspace migration complete");
            }
            MigrationProgress::RetryBackoff {
                context,
                retry_after_ms,
                attempt,
            } => {
                tracing::warn!(context = %context, retry_after_ms, attempt, "Waiting before retry");
            }
            MigrationProgress::Warning { message } => {
                tracing::warn!("{}", message);
            }
            _ => {}
        }
    }
}
