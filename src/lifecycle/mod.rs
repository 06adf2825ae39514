//! Storage lifecycle policy engine.
//!
//! Decides, for every object in a catalog, whether it stays put, moves to a
//! cheaper tier, gets flagged for compression, or is deleted, and aggregates
//! the financial impact of those decisions.
//!
//! - [`decide`] — pure policy function, one object in, one action out
//! - [`LifecycleRunner`] — applies the policy across the whole catalog with
//!   per-object failure isolation
//! - [`CostOptimizationAdvisor`] — read-only savings projection
//! - [`TemporaryFileReaper`] — narrow transient-only sweep
//!
//! # Example
//!
//! ```rust,ignore
//! use custodian::catalog::MemoryCatalog;
//! use custodian::config::CostOptimizationConfig;
//! use custodian::lifecycle::LifecycleRunner;
//!
//! let catalog = MemoryCatalog::from_records(records);
//! let mut runner = LifecycleRunner::new(catalog, CostOptimizationConfig::default());
//! let stats = runner.run();
//! println!("{}", stats.summary());
//! ```

mod advisor;
mod policy;
mod reaper;
mod runner;
mod stats;

pub use advisor::{AdvisorReport, CostOptimizationAdvisor, Recommendation, RecommendationKind};
pub use policy::{decide, LifecycleAction, TEXT_RETENTION_DAYS};
pub use reaper::TemporaryFileReaper;
pub use runner::LifecycleRunner;
pub use stats::LifecycleStats;
