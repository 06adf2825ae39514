//! Policy evaluation: classify one object into exactly one action.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::catalog::{ContentCategory, ObjectRecord, StorageTier};
use crate::config::CostOptimizationConfig;

/// Text/markup objects are deleted past this window.
pub const TEXT_RETENTION_DAYS: u64 = 180;
/// Text/markup tiering thresholds.
const TEXT_HOT_TO_COOL_DAYS: u64 = 14;
const TEXT_COOL_TO_ARCHIVE_DAYS: u64 = 60;

/// Images age out of Hot faster than audio; retrieval latency matters less.
const IMAGE_HOT_TO_COOL_DAYS: u64 = 7;
const IMAGE_COOL_TO_ARCHIVE_DAYS: u64 = 14;

/// Unclassified content only gets a Hot → Cool step.
const OTHER_HOT_TO_COOL_DAYS: u64 = 7;

/// The single action produced for an object in one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleAction {
    Keep,
    TierToCool,
    TierToArchive,
    Delete,
    Compress,
}

/// Decide the lifecycle action for one object.
///
/// Pure and deterministic given identical inputs, including `now`. Rules are
/// evaluated in strict priority order; the first match wins:
///
/// 1. Transient objects: delete past the transient retention, otherwise keep.
///    No other rule applies to them.
/// 2. Compression candidates: large compressible objects not yet flagged.
///    Supersedes tiering for this pass.
/// 3. Category retention and forward-only tiering.
///
/// Tier transitions only go `Hot → Cool → Archive`; an object already in
/// Archive is only ever deleted, and an object with no tier never receives a
/// tier transition.
pub fn decide(
    record: &ObjectRecord,
    config: &CostOptimizationConfig,
    now: SystemTime,
) -> LifecycleAction {
    if record.is_transient {
        if record.age_hours(now) > config.transient_retention_hours {
            return LifecycleAction::Delete;
        }
        return LifecycleAction::Keep;
    }

    if config.compression_enabled
        && record.size_bytes > config.compression_min_bytes
        && record.category.is_compressible()
        && !record.is_compressed()
    {
        return LifecycleAction::Compress;
    }

    let age_days = record.age_days(now);
    match record.category {
        ContentCategory::Audio => retention_ladder(
            record,
            config,
            age_days,
            config.audio_retention_days,
            config.hot_to_cool_days,
            Some(config.cool_to_archive_days),
        ),
        ContentCategory::Image => retention_ladder(
            record,
            config,
            age_days,
            config.image_retention_days,
            IMAGE_HOT_TO_COOL_DAYS,
            Some(IMAGE_COOL_TO_ARCHIVE_DAYS),
        ),
        ContentCategory::TextMarkup => retention_ladder(
            record,
            config,
            age_days,
            TEXT_RETENTION_DAYS,
            TEXT_HOT_TO_COOL_DAYS,
            Some(TEXT_COOL_TO_ARCHIVE_DAYS),
        ),
        ContentCategory::Other => retention_ladder(
            record,
            config,
            age_days,
            config.default_retention_days,
            OTHER_HOT_TO_COOL_DAYS,
            None,
        ),
    }
}

/// Shared delete-then-tier ladder for non-transient objects.
///
/// `to_archive_days = None` means the category has no Archive step.
fn retention_ladder(
    record: &ObjectRecord,
    config: &CostOptimizationConfig,
    age_days: u64,
    retention_days: u64,
    to_cool_days: u64,
    to_archive_days: Option<u64>,
) -> LifecycleAction {
    if age_days > retention_days {
        return LifecycleAction::Delete;
    }
    if !config.tiering_enabled {
        return LifecycleAction::Keep;
    }
    match record.current_tier {
        Some(StorageTier::Hot) if age_days > to_cool_days => LifecycleAction::TierToCool,
        Some(StorageTier::Cool) => match to_archive_days {
            Some(days) if age_days > days => LifecycleAction::TierToArchive,
            _ => LifecycleAction::Keep,
        },
        Some(StorageTier::Archive) if age_days > config.archive_to_delete_days => {
            LifecycleAction::Delete
        }
        _ => LifecycleAction::Keep,
    }
}
