//! `migrate-repo` and `migrate-workspace` commands.

use std::sync::Arc;

use console::style;
use forgeport::migrate::WorkspaceSummary;
use forgeport::{MigrationConfig, Migrator};

use crate::progress::ProgressReporter;

/// Migrate a named set of repositories. Returns false when any aborted.
pub async fn handle_migrate_repos(
    config: MigrationConfig,
    slugs: Vec<String>,
) -> Result<bool, Box<dyn std::error::Error>> {
    let migrator = Migrator::new(config.into_shared())?;
    let reporter = Arc::new(ProgressReporter::new());
    let callback = reporter.as_callback();

    if !migrator.test_connections(Some(&callback)).await {
        println!("{}", style("Connection test failed! ✗").red());
        return Ok(false);
    }

    println!(
        "{}",
        style(format!(
            "Starting migration of {} repositories",
            slugs.len()
        ))
        .bold()
    );
    let summary = migrator.migrate_repositories(&slugs, Some(&callback)).await;
    print_summary(&summary);
    Ok(summary.aborted == 0)
}

/// Migrate every repository in the workspace.
pub async fn handle_migrate_workspace(
    config: MigrationConfig,
) -> Result<bool, Box<dyn std::error::Error>> {
    let migrator = Migrator::new(config.into_shared())?;
    let reporter = Arc::new(ProgressReporter::new());
    let callback = reporter.as_callback();

    if !migrator.test_connections(Some(&callback)).await {
        println!("{}", style("Connection test failed! ✗").red());
        return Ok(false);
    }

    let summary = migrator.migrate_workspace(Some(&callback)).await?;
    print_summary(&summary);
    Ok(summary.aborted == 0)
}

fn print_summary(summary: &WorkspaceSummary) {
    println!(
        "\n{} attempted, {} completed, {} aborted",
        summary.attempted,
        style(summary.completed).green(),
        if summary.aborted > 0 {
            style(summary.aborted).red()
        } else {
            style(summary.aborted).dim()
        }
    );
    for report in &summary.reports {
        if let Some((stage, error)) = &report.aborted {
            println!(
                "  {} {} aborted at {}: {}",
                style("✗").red(),
                report.slug,
                stage,
                error
            );
        } else if report.issues_failed > 0 || report.pulls_failed > 0 {
            println!(
                "  {} {} completed with {} issue and {} pull request failures",
                style("!").yellow(),
                report.slug,
                report.issues_failed,
                report.pulls_failed
            );
        }
    }
}
