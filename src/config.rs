//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Policy parameters for a lifecycle pass.
///
/// Constructed once at startup (e.g. from a JSON file) and passed by
/// reference into every call; the engine never mutates it. Changing policy
/// means building a new value, not editing this one mid-run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CostOptimizationConfig {
    /// Master switch. When off, `LifecycleRunner::run` returns zeroed stats
    /// without touching the catalog.
    pub cleanup_enabled: bool,

    /// Enable Hot → Cool → Archive transitions.
    pub tiering_enabled: bool,

    /// Enable flagging large text objects for compression.
    pub compression_enabled: bool,

    /// Age after which a Hot object moves to Cool (days).
    pub hot_to_cool_days: u64,

    /// Age after which a Cool object moves to Archive (days).
    pub cool_to_archive_days: u64,

    /// Age after which an Archive object is deleted (days).
    pub archive_to_delete_days: u64,

    /// Minimum size for a compressible object to be flagged (bytes).
    pub compression_min_bytes: u64,

    /// Retention for objects flagged transient (hours).
    pub transient_retention_hours: u64,

    /// Retention window for audio objects (days).
    pub audio_retention_days: u64,

    /// Retention window for image objects (days).
    pub image_retention_days: u64,

    /// Retention window for unclassified objects (days).
    pub default_retention_days: u64,
}

impl Default for CostOptimizationConfig {
    fn default() -> Self {
        Self {
            cleanup_enabled: true,
            tiering_enabled: true,
            compression_enabled: true,
            hot_to_cool_days: 30,
            cool_to_archive_days: 90,
            archive_to_delete_days: 365,
            compression_min_bytes: 1024 * 1024,
            transient_retention_hours: 24,
            audio_retention_days: 365,
            image_retention_days: 90,
            default_retention_days: 30,
        }
    }
}
