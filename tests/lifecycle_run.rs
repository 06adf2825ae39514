//! End-to-end runner passes against an in-memory catalog, including fault
//! injection for per-object failure isolation.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, SystemTime};

use custodian::catalog::{
    ContentCategory, FileCatalog, MemoryCatalog, ObjectRecord, StorageTier, COMPRESSED_TAG,
};
use custodian::config::CostOptimizationConfig;
use custodian::lifecycle::LifecycleRunner;
use custodian::{Error, Result};

fn object(
    name: &str,
    category: ContentCategory,
    size_bytes: u64,
    age_days: u64,
    tier: Option<StorageTier>,
) -> ObjectRecord {
    ObjectRecord {
        name: name.to_string(),
        category,
        size_bytes,
        last_modified_at: SystemTime::now() - Duration::from_secs(age_days * 86_400),
        current_tier: tier,
        is_transient: false,
        tags: HashMap::new(),
    }
}

#[test]
fn mixed_catalog_full_pass() {
    let mut fresh = object("fresh.mp3", ContentCategory::Audio, 100, 1, Some(StorageTier::Hot));
    fresh.tags.insert("show".into(), "daily".into());

    let catalog = MemoryCatalog::from_records(vec![
        fresh,
        object("aging.mp3", ContentCategory::Audio, 5_000, 35, Some(StorageTier::Hot)),
        object("cold.mp3", ContentCategory::Audio, 7_000, 95, Some(StorageTier::Cool)),
        object("ancient.mp3", ContentCategory::Audio, 9_000, 400, Some(StorageTier::Archive)),
        object(
            "transcript.txt",
            ContentCategory::TextMarkup,
            2 * 1024 * 1024,
            2,
            Some(StorageTier::Hot),
        ),
        object("stale.bin", ContentCategory::Other, 3_000, 40, None),
    ]);

    let mut runner = LifecycleRunner::new(catalog, CostOptimizationConfig::default());
    let stats = runner.run();

    assert_eq!(stats.processed_count, 6);
    assert_eq!(stats.deleted_count, 2); // ancient.mp3, stale.bin
    assert_eq!(stats.tiered_to_cool_count, 1);
    assert_eq!(stats.tiered_to_archive_count, 1);
    assert_eq!(stats.compressed_count, 1);
    assert_eq!(stats.error_count, 0);
    assert_eq!(stats.bytes_freed, 9_000 + 3_000);
    assert!(stats.estimated_savings > 0.0);

    let catalog = runner.into_catalog();
    assert!(catalog.get("ancient.mp3").is_none());
    assert!(catalog.get("stale.bin").is_none());
    assert_eq!(
        catalog.get("aging.mp3").unwrap().current_tier,
        Some(StorageTier::Cool)
    );
    assert_eq!(
        catalog.get("cold.mp3").unwrap().current_tier,
        Some(StorageTier::Archive)
    );
    assert_eq!(
        catalog
            .get("transcript.txt")
            .unwrap()
            .tags
            .get(COMPRESSED_TAG)
            .map(String::as_str),
        Some("true")
    );
    // Untouched object keeps its own tags.
    assert_eq!(
        catalog.get("fresh.mp3").unwrap().tags.get("show").map(String::as_str),
        Some("daily")
    );
}

#[test]
fn bytes_freed_matches_deleted_sizes_exactly() {
    let catalog = MemoryCatalog::from_records(vec![
        object("a.mp3", ContentCategory::Audio, 1_111, 400, Some(StorageTier::Archive)),
        object("b.bin", ContentCategory::Other, 2_222, 40, None),
        object("keep.mp3", ContentCategory::Audio, 9_999, 1, Some(StorageTier::Hot)),
    ]);

    let mut runner = LifecycleRunner::new(catalog, CostOptimizationConfig::default());
    let stats = runner.run();
    assert_eq!(stats.deleted_count, 2);
    assert_eq!(stats.bytes_freed, 1_111 + 2_222);
}

#[test]
fn second_pass_is_idempotent_for_compression() {
    let catalog = MemoryCatalog::from_records(vec![object(
        "big.xml",
        ContentCategory::TextMarkup,
        4 * 1024 * 1024,
        1,
        Some(StorageTier::Hot),
    )]);

    let mut runner = LifecycleRunner::new(catalog, CostOptimizationConfig::default());
    let first = runner.run();
    assert_eq!(first.compressed_count, 1);

    let mut runner = LifecycleRunner::new(runner.into_catalog(), CostOptimizationConfig::default());
    let second = runner.run();
    assert_eq!(second.compressed_count, 0);
}

/// Wraps a MemoryCatalog and injects failures for chosen object names.
struct FlakyCatalog {
    inner: MemoryCatalog,
    fail_metadata: HashSet<String>,
    fail_mutations: HashSet<String>,
}

impl FlakyCatalog {
    fn new(inner: MemoryCatalog) -> Self {
        Self {
            inner,
            fail_metadata: HashSet::new(),
            fail_mutations: HashSet::new(),
        }
    }
}

impl FileCatalog for FlakyCatalog {
    fn list_all(&self) -> Result<Vec<String>> {
        self.inner.list_all()
    }

    fn metadata(&self, name: &str) -> Result<ObjectRecord> {
        if self.fail_metadata.contains(name) {
            return Err(Error::Catalog(format!("injected metadata fault: {name}")));
        }
        self.inner.metadata(name)
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        if self.fail_mutations.contains(name) {
            return Err(Error::Catalog(format!("injected mutation fault: {name}")));
        }
        self.inner.delete(name)
    }

    fn set_tier(&mut self, name: &str, tier: StorageTier) -> Result<()> {
        if self.fail_mutations.contains(name) {
            return Err(Error::Catalog(format!("injected mutation fault: {name}")));
        }
        self.inner.set_tier(name, tier)
    }

    fn set_tag(&mut self, name: &str, key: &str, value: &str) -> Result<()> {
        if self.fail_mutations.contains(name) {
            return Err(Error::Catalog(format!("injected mutation fault: {name}")));
        }
        self.inner.set_tag(name, key, value)
    }
}

#[test]
fn metadata_failure_counts_once_and_nowhere_else() {
    let inner = MemoryCatalog::from_records(vec![
        object("bad.mp3", ContentCategory::Audio, 100, 400, Some(StorageTier::Archive)),
        object("good.mp3", ContentCategory::Audio, 100, 35, Some(StorageTier::Hot)),
    ]);
    let mut catalog = FlakyCatalog::new(inner);
    catalog.fail_metadata.insert("bad.mp3".to_string());

    let mut runner = LifecycleRunner::new(catalog, CostOptimizationConfig::default());
    let stats = runner.run();

    assert_eq!(stats.error_count, 1);
    assert_eq!(stats.processed_count, 1);
    assert_eq!(stats.deleted_count, 0);
    assert_eq!(stats.tiered_to_cool_count, 1);
    assert_eq!(stats.bytes_freed, 0);
}

#[test]
fn action_failure_does_not_abort_pass_or_inflate_stats() {
    let inner = MemoryCatalog::from_records(vec![
        object("doomed.mp3", ContentCategory::Audio, 5_000, 400, Some(StorageTier::Archive)),
        object("fine.mp3", ContentCategory::Audio, 1_000, 400, Some(StorageTier::Archive)),
    ]);
    let mut catalog = FlakyCatalog::new(inner);
    catalog.fail_mutations.insert("doomed.mp3".to_string());

    let mut runner = LifecycleRunner::new(catalog, CostOptimizationConfig::default());
    let stats = runner.run();

    assert_eq!(stats.processed_count, 2);
    assert_eq!(stats.error_count, 1);
    // Only the successful delete is counted.
    assert_eq!(stats.deleted_count, 1);
    assert_eq!(stats.bytes_freed, 1_000);
    assert!(!stats.is_total_failure());
}
