//! Catalog abstraction: the view of stored objects the engine works over.
//!
//! The engine never talks to a blob store directly. It consumes the
//! [`FileCatalog`] trait, which a backend adapter implements; the in-memory
//! [`MemoryCatalog`] is provided for tests and snapshot-driven CLI runs.

mod memory;

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

use crate::Result;

pub use memory::MemoryCatalog;

/// Tag key the runner sets once an object has been flagged for compression.
pub const COMPRESSED_TAG: &str = "compressed";

/// Storage tier of an object, ordered by cost and retrieval speed
/// (`Hot` > `Cool` > `Archive` on both axes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageTier {
    Hot,
    Cool,
    Archive,
}

impl fmt::Display for StorageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageTier::Hot => write!(f, "hot"),
            StorageTier::Cool => write!(f, "cool"),
            StorageTier::Archive => write!(f, "archive"),
        }
    }
}

/// Coarse content classification driving category-specific retention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    Audio,
    Image,
    /// Plain text, markup, and the JSON/XML family.
    TextMarkup,
    Other,
}

impl ContentCategory {
    /// Classify an object from its content type and name.
    ///
    /// Anything whose name suggests a transcript is treated as text/markup
    /// regardless of the declared content type.
    pub fn classify(content_type: &str, name: &str) -> Self {
        if name.to_ascii_lowercase().contains("transcript") {
            return ContentCategory::TextMarkup;
        }
        let ct = content_type.to_ascii_lowercase();
        if ct.starts_with("audio/") {
            ContentCategory::Audio
        } else if ct.starts_with("image/") {
            ContentCategory::Image
        } else if ct.starts_with("text/")
            || ct == "application/json"
            || ct == "application/xml"
            || ct.ends_with("+json")
            || ct.ends_with("+xml")
        {
            ContentCategory::TextMarkup
        } else {
            ContentCategory::Other
        }
    }

    /// Whether objects of this category are worth compressing.
    pub fn is_compressible(&self) -> bool {
        matches!(self, ContentCategory::TextMarkup)
    }
}

/// One stored object as seen by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectRecord {
    /// Unique key within the catalog.
    pub name: String,

    /// Coarse content classification.
    pub category: ContentCategory,

    /// Size in bytes.
    pub size_bytes: u64,

    /// Last modification time (unix seconds on the wire).
    #[serde(with = "unix_seconds")]
    pub last_modified_at: SystemTime,

    /// Current storage tier, if tiering applies to this object.
    pub current_tier: Option<StorageTier>,

    /// Marked for short-lived use, independent of category.
    #[serde(default)]
    pub is_transient: bool,

    /// Free-form tags; carries engine-set markers such as `compressed`.
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl ObjectRecord {
    /// Age at the evaluation instant. Clock skew is clamped to zero age,
    /// never negative.
    pub fn age(&self, now: SystemTime) -> Duration {
        now.duration_since(self.last_modified_at)
            .unwrap_or(Duration::ZERO)
    }

    pub fn age_days(&self, now: SystemTime) -> u64 {
        self.age(now).as_secs() / 86_400
    }

    pub fn age_hours(&self, now: SystemTime) -> u64 {
        self.age(now).as_secs() / 3_600
    }

    /// Whether the runner already flagged this object as compressed.
    pub fn is_compressed(&self) -> bool {
        self.tags
            .get(COMPRESSED_TAG)
            .map(|v| v == "true")
            .unwrap_or(false)
    }
}

/// Catalog collaborator interface.
///
/// The engine assumes no retry semantics here; transient backend failures are
/// the implementor's business. `set_tier` to the already-current tier is
/// expected to be a no-op on the backend — the engine keeps no cross-run
/// ledger of transitions it has already issued, so a re-run without elapsed
/// time may re-issue the same transition.
pub trait FileCatalog {
    /// Enumerate all object names. Failure here is fatal for a pass.
    fn list_all(&self) -> Result<Vec<String>>;

    /// Fetch full metadata for one object.
    fn metadata(&self, name: &str) -> Result<ObjectRecord>;

    fn delete(&mut self, name: &str) -> Result<()>;

    fn set_tier(&mut self, name: &str, tier: StorageTier) -> Result<()>;

    fn set_tag(&mut self, name: &str, key: &str, value: &str) -> Result<()>;
}

mod unix_seconds {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &SystemTime, s: S) -> Result<S::Ok, S::Error> {
        let secs = t
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_secs();
        s.serialize_u64(secs)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<SystemTime, D::Error> {
        let secs = u64::deserialize(d)?;
        Ok(UNIX_EPOCH + Duration::from_secs(secs))
    }
}
