//! Full catalog pass: fetch, decide, execute, accumulate.

use std::time::{Instant, SystemTime};

use log::{error, info, warn};

use crate::catalog::{FileCatalog, ObjectRecord, StorageTier, COMPRESSED_TAG};
use crate::config::CostOptimizationConfig;
use crate::cost;
use crate::lifecycle::{decide, LifecycleAction, LifecycleStats};
use crate::Result;

/// Drives one lifecycle pass over a catalog.
///
/// Objects are processed independently; no decision depends on another
/// object, and a failure on one never stops the rest of the pass. Only the
/// initial enumeration is pass-fatal, and even that is reported through the
/// returned stats rather than an `Err`.
pub struct LifecycleRunner<C> {
    catalog: C,
    config: CostOptimizationConfig,
}

impl<C: FileCatalog> LifecycleRunner<C> {
    pub fn new(catalog: C, config: CostOptimizationConfig) -> Self {
        Self { catalog, config }
    }

    /// Recover the catalog, e.g. to write a mutated snapshot back out.
    pub fn into_catalog(self) -> C {
        self.catalog
    }

    /// Run one pass and return the populated stats.
    ///
    /// With `cleanup_enabled` off this returns zeroed stats without touching
    /// the catalog at all.
    pub fn run(&mut self) -> LifecycleStats {
        let mut stats = LifecycleStats::new();
        if !self.config.cleanup_enabled {
            info!("cleanup disabled, skipping pass");
            return stats;
        }

        let start = Instant::now();
        let names = match self.catalog.list_all() {
            Ok(names) => names,
            Err(err) => {
                error!("catalog enumeration failed: {err}");
                stats.record_error(format!("catalog enumeration failed: {err}"));
                stats.duration = start.elapsed();
                return stats;
            }
        };

        let now = SystemTime::now();
        for name in names {
            let record = match self.catalog.metadata(&name) {
                Ok(record) => record,
                Err(err) => {
                    warn!("{name}: metadata fetch failed: {err}");
                    stats.record_error(format!("{name}: metadata fetch failed: {err}"));
                    continue;
                }
            };
            stats.processed_count += 1;

            let action = decide(&record, &self.config, now);
            if let Err(err) = self.execute(&record, action, &mut stats) {
                warn!("{name}: {action:?} failed: {err}");
                stats.record_error(format!("{name}: {action:?} failed: {err}"));
            }
        }

        stats.duration = start.elapsed();
        info!("{}", stats.summary());
        stats
    }

    /// Execute one action through the catalog. Stats are only updated after
    /// the mutation succeeds, so a failed action is never counted as done.
    fn execute(
        &mut self,
        record: &ObjectRecord,
        action: LifecycleAction,
        stats: &mut LifecycleStats,
    ) -> Result<()> {
        match action {
            LifecycleAction::Keep => Ok(()),
            LifecycleAction::Delete => {
                self.catalog.delete(&record.name)?;
                let saving = cost::tier_delta(record.size_bytes, record.current_tier, None);
                stats.record_delete(record.size_bytes, saving);
                Ok(())
            }
            LifecycleAction::TierToCool => {
                self.catalog.set_tier(&record.name, StorageTier::Cool)?;
                let saving = cost::tier_delta(
                    record.size_bytes,
                    record.current_tier,
                    Some(StorageTier::Cool),
                );
                stats.record_tier_to_cool(saving);
                Ok(())
            }
            LifecycleAction::TierToArchive => {
                self.catalog.set_tier(&record.name, StorageTier::Archive)?;
                let saving = cost::tier_delta(
                    record.size_bytes,
                    record.current_tier,
                    Some(StorageTier::Archive),
                );
                stats.record_tier_to_archive(saving);
                Ok(())
            }
            LifecycleAction::Compress => {
                self.catalog.set_tag(&record.name, COMPRESSED_TAG, "true")?;
                stats.record_compress(cost::compression_saving(record.size_bytes));
                Ok(())
            }
        }
    }
}
