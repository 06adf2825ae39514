//! Statistics accumulated over one lifecycle pass.

use std::time::Duration;

use serde::{Serialize, Serializer};

/// Summary of one runner pass. Built fresh per run, mutated only by the
/// runner, read-only once the run returns. Serializes to JSON for the
/// invoking scheduler.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LifecycleStats {
    /// Objects whose metadata was fetched and evaluated.
    pub processed_count: usize,

    /// Objects deleted.
    pub deleted_count: usize,

    /// Objects moved Hot → Cool.
    pub tiered_to_cool_count: usize,

    /// Objects moved Cool → Archive.
    pub tiered_to_archive_count: usize,

    /// Objects flagged for compression.
    pub compressed_count: usize,

    /// Per-object failures (metadata fetch or action execution).
    pub error_count: usize,

    /// Failure detail, one entry per recorded error.
    pub errors: Vec<String>,

    /// Bytes reclaimed by deletions.
    pub bytes_freed: u64,

    /// Estimated monthly savings, USD.
    pub estimated_savings: f64,

    /// Wall-clock duration of the pass.
    #[serde(rename = "duration_ms", serialize_with = "duration_ms")]
    pub duration: Duration,
}

impl LifecycleStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_delete(&mut self, size_bytes: u64, saving: f64) {
        self.deleted_count += 1;
        self.bytes_freed += size_bytes;
        self.estimated_savings += saving;
    }

    pub fn record_tier_to_cool(&mut self, saving: f64) {
        self.tiered_to_cool_count += 1;
        self.estimated_savings += saving;
    }

    pub fn record_tier_to_archive(&mut self, saving: f64) {
        self.tiered_to_archive_count += 1;
        self.estimated_savings += saving;
    }

    pub fn record_compress(&mut self, saving: f64) {
        self.compressed_count += 1;
        self.estimated_savings += saving;
    }

    pub fn record_error(&mut self, error: String) {
        self.error_count += 1;
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Every object the pass touched failed. The scheduler should treat this
    /// as a job failure rather than a warning.
    pub fn is_total_failure(&self) -> bool {
        self.error_count > 0 && self.processed_count == 0
    }

    /// One-line human-readable summary for log output.
    pub fn summary(&self) -> String {
        format!(
            "Processed: {}, Deleted: {}, ToCool: {}, ToArchive: {}, Compressed: {}, Errors: {}, Freed: {} bytes, Savings: ${:.4}/mo, Duration: {:?}",
            self.processed_count,
            self.deleted_count,
            self.tiered_to_cool_count,
            self.tiered_to_archive_count,
            self.compressed_count,
            self.error_count,
            self.bytes_freed,
            self.estimated_savings,
            self.duration
        )
    }
}

fn duration_ms<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u128(d.as_millis())
}
