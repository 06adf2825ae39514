//! Storage lifecycle policy engine for a content catalog.
//!
//! A library invoked by an outer scheduled job: it classifies every stored
//! object into a single lifecycle action (keep, tier down, compress flag,
//! delete), prices each transition through a fixed-rate cost model, and
//! applies the policy across the catalog in one failure-tolerant pass.

pub mod catalog;
pub mod config;
pub mod cost;
pub mod error;
pub mod lifecycle;

pub use config::CostOptimizationConfig;
pub use error::{Error, Result};
pub use lifecycle::{LifecycleAction, LifecycleStats};
