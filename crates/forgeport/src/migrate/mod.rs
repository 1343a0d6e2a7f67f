//! Migration pipeline: orchestration, progress events, and run reports.
//!
//! # Module Structure
//!
//! - [`engine`] - The [`Migrator`] driving the per-repository stages
//! - [`progress`] - Progress events and the callback type
//! - [`types`] - Stages and run reports

mod engine;
mod progress;
mod types;

pub use engine::{ListingEntry, Migrator, SetupError};
pub use progress::{emit, MigrationProgress, ProgressCallback};
pub use types::{RepositoryReport, Stage, WorkspaceSummary};
