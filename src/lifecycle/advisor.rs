//! Advisory mode: project savings without mutating anything.

use std::time::SystemTime;

use log::warn;
use serde::Serialize;

use crate::catalog::{FileCatalog, StorageTier};
use crate::config::CostOptimizationConfig;
use crate::cost;
use crate::lifecycle::{decide, LifecycleAction};
use crate::Result;

/// Category of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Tiering,
    Compression,
    Deletion,
}

/// One aggregated savings opportunity.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub description: String,
    pub potential_savings: f64,
    pub affected_files: usize,
}

/// Full advisory report; produced fresh per call, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisorReport {
    pub total_potential_savings: f64,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Default)]
struct Bucket {
    count: usize,
    savings: f64,
}

impl Bucket {
    fn add(&mut self, saving: f64) {
        self.count += 1;
        self.savings += saving;
    }

    fn emit(
        &self,
        kind: RecommendationKind,
        description: impl FnOnce(usize) -> String,
        out: &mut Vec<Recommendation>,
    ) {
        // Empty buckets are omitted entirely.
        if self.count == 0 {
            return;
        }
        out.push(Recommendation {
            kind,
            description: description(self.count),
            potential_savings: self.savings,
            affected_files: self.count,
        });
    }
}

/// Scans the catalog and groups projected savings by opportunity.
///
/// Holds a shared reference only, so the type system guarantees no mutating
/// catalog call is ever made. Eligibility uses the same policy function as
/// the runner.
pub struct CostOptimizationAdvisor<'a, C> {
    catalog: &'a C,
    config: &'a CostOptimizationConfig,
}

impl<'a, C: FileCatalog> CostOptimizationAdvisor<'a, C> {
    pub fn new(catalog: &'a C, config: &'a CostOptimizationConfig) -> Self {
        Self { catalog, config }
    }

    /// Produce the savings report. Only catalog enumeration failure is an
    /// error; unreadable objects are skipped.
    pub fn recommend(&self) -> Result<AdvisorReport> {
        let names = self.catalog.list_all()?;
        let now = SystemTime::now();

        let mut to_cool = Bucket::default();
        let mut to_archive = Bucket::default();
        let mut compress = Bucket::default();
        let mut delete = Bucket::default();

        for name in names {
            let record = match self.catalog.metadata(&name) {
                Ok(record) => record,
                Err(err) => {
                    warn!("{name}: metadata fetch failed, skipping: {err}");
                    continue;
                }
            };

            match decide(&record, self.config, now) {
                LifecycleAction::Keep => {}
                LifecycleAction::TierToCool => to_cool.add(cost::tier_delta(
                    record.size_bytes,
                    record.current_tier,
                    Some(StorageTier::Cool),
                )),
                LifecycleAction::TierToArchive => to_archive.add(cost::tier_delta(
                    record.size_bytes,
                    record.current_tier,
                    Some(StorageTier::Archive),
                )),
                LifecycleAction::Compress => {
                    compress.add(cost::compression_saving(record.size_bytes))
                }
                LifecycleAction::Delete => {
                    delete.add(cost::tier_delta(record.size_bytes, record.current_tier, None))
                }
            }
        }

        let mut recommendations = Vec::new();
        to_cool.emit(
            RecommendationKind::Tiering,
            |n| format!("Move {n} objects from Hot to Cool storage"),
            &mut recommendations,
        );
        to_archive.emit(
            RecommendationKind::Tiering,
            |n| format!("Move {n} objects from Cool to Archive storage"),
            &mut recommendations,
        );
        compress.emit(
            RecommendationKind::Compression,
            |n| format!("Compress {n} large text objects"),
            &mut recommendations,
        );
        delete.emit(
            RecommendationKind::Deletion,
            |n| format!("Delete {n} objects past their retention window"),
            &mut recommendations,
        );

        let total_potential_savings = recommendations.iter().map(|r| r.potential_savings).sum();
        Ok(AdvisorReport {
            total_potential_savings,
            recommendations,
        })
    }
}
