//! In-memory catalog for tests and snapshot-driven runs.

use std::collections::BTreeMap;

use crate::catalog::{FileCatalog, ObjectRecord, StorageTier};
use crate::{Error, Result};

/// A [`FileCatalog`] backed by a plain map.
///
/// Used by the test suite and by the CLI's snapshot mode, where a JSON array
/// of records stands in for the real object store.
#[derive(Debug, Default, Clone)]
pub struct MemoryCatalog {
    objects: BTreeMap<String, ObjectRecord>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ObjectRecord>) -> Self {
        let objects = records.into_iter().map(|r| (r.name.clone(), r)).collect();
        Self { objects }
    }

    pub fn insert(&mut self, record: ObjectRecord) {
        self.objects.insert(record.name.clone(), record);
    }

    pub fn get(&self, name: &str) -> Option<&ObjectRecord> {
        self.objects.get(name)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Remaining records, in name order. Used for snapshot write-back.
    pub fn records(&self) -> Vec<ObjectRecord> {
        self.objects.values().cloned().collect()
    }
}

impl FileCatalog for MemoryCatalog {
    fn list_all(&self) -> Result<Vec<String>> {
        Ok(self.objects.keys().cloned().collect())
    }

    fn metadata(&self, name: &str) -> Result<ObjectRecord> {
        self.objects
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        self.objects
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    fn set_tier(&mut self, name: &str, tier: StorageTier) -> Result<()> {
        let record = self
            .objects
            .get_mut(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;
        record.current_tier = Some(tier);
        Ok(())
    }

    fn set_tag(&mut self, name: &str, key: &str, value: &str) -> Result<()> {
        let record = self
            .objects
            .get_mut(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;
        record.tags.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
