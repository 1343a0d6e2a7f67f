//! Report types produced by a migration run.

use std::fmt;

/// Pipeline stage of a single repository migration, in execution order.
///
/// A repository is aborted at the first failing stage; later stages are
/// never attempted for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    FetchDetails,
    FetchIssues,
    FetchPullRequests,
    CreateRepository,
    MirrorContent,
    MigrateIssues,
    MigratePullRequests,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FetchDetails => "fetch details",
            Self::FetchIssues => "fetch issues",
            Self::FetchPullRequests => "fetch pull requests",
            Self::CreateRepository => "create repository",
            Self::MirrorContent => "mirror content",
            Self::MigrateIssues => "migrate issues",
            Self::MigratePullRequests => "migrate pull requests",
        };
        f.write_str(name)
    }
}

/// Outcome of migrating a single repository.
#[derive(Debug, Clone)]
pub struct RepositoryReport {
    pub slug: String,
    /// Stage and error message if the repository was aborted.
    pub aborted: Option<(Stage, String)>,
    pub issues_migrated: usize,
    pub issues_failed: usize,
    pub pulls_migrated: usize,
    pub pulls_skipped: usize,
    pub pulls_failed: usize,
}

impl RepositoryReport {
    pub(crate) fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            aborted: None,
            issues_migrated: 0,
            issues_failed: 0,
            pulls_migrated: 0,
            pulls_skipped: 0,
            pulls_failed: 0,
        }
    }

    /// Whether the repository ran all stages without an abort.
    ///
    /// Individual issue or pull request failures do not abort a repository.
    #[must_use]
    pub fn completed(&self) -> bool {
        self.aborted.is_none()
    }
}

/// Outcome of a whole-workspace migration.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceSummary {
    pub attempted: usize,
    pub completed: usize,
    pub aborted: usize,
    pub reports: Vec<RepositoryReport>,
}

impl WorkspaceSummary {
    pub(crate) fn push(&mut self, report: RepositoryReport) {
        self.attempted += 1;
        if report.completed() {
            self.completed += 1;
        } else {
            self.aborted += 1;
        }
        self.reports.push(report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_display_is_operator_friendly() {
        assert_eq!(Stage::FetchDetails.to_string(), "fetch details");
        assert_eq!(Stage::MigratePullRequests.to_string(), "migrate pull requests");
    }

    #[test]
    fn report_with_item_failures_still_counts_as_completed() {
        let mut report = RepositoryReport::new("api");
        report.issues_failed = 2;
        report.pulls_failed = 1;
        assert!(report.completed());
    }

    #[test]
    fn summary_tallies_completed_and_aborted() {
        let mut summary = WorkspaceSummary::default();
        summary.push(RepositoryReport::new("a"));

        let mut bad = RepositoryReport::new("b");
        bad.aborted = Some((Stage::FetchDetails, "not found".to_string()));
        summary.push(bad);

        assert_eq!(summary.attempted, 2);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.aborted, 1);
    }
}
