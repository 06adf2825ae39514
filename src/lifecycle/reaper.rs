//! Transient object sweep.

use std::time::SystemTime;

use log::{info, warn};

use crate::catalog::FileCatalog;
use crate::config::CostOptimizationConfig;
use crate::Result;

/// Deletes expired transient objects and nothing else.
///
/// Invoked independently of the general runner (typically on a much tighter
/// schedule); non-transient objects are never touched and no monetary stats
/// are kept.
pub struct TemporaryFileReaper<C> {
    catalog: C,
    config: CostOptimizationConfig,
}

impl<C: FileCatalog> TemporaryFileReaper<C> {
    pub fn new(catalog: C, config: CostOptimizationConfig) -> Self {
        Self { catalog, config }
    }

    pub fn into_catalog(self) -> C {
        self.catalog
    }

    /// Sweep once; returns the number of objects deleted. Per-object
    /// failures are logged and skipped, only enumeration failure is fatal.
    pub fn reap(&mut self) -> Result<usize> {
        let names = self.catalog.list_all()?;
        let now = SystemTime::now();
        let mut deleted = 0;

        for name in names {
            let record = match self.catalog.metadata(&name) {
                Ok(record) => record,
                Err(err) => {
                    warn!("{name}: metadata fetch failed, skipping: {err}");
                    continue;
                }
            };
            if !record.is_transient {
                continue;
            }
            if record.age_hours(now) <= self.config.transient_retention_hours {
                continue;
            }
            match self.catalog.delete(&name) {
                Ok(()) => deleted += 1,
                Err(err) => warn!("{name}: delete failed: {err}"),
            }
        }

        info!("reaped {deleted} transient objects");
        Ok(deleted)
    }
}
