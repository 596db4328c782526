//! Controller mapping database
//!
//! Stores one mapping record per device GUID and answers lookups for the
//! poller. The table is seeded with a fallback record under the zero GUID and
//! the built-in [`CATALOG`], folded left to right so later records win.
//!
//! Lookups never fail: a GUID without a record resolves to the fallback
//! ("Unmapped Controller"), whose layout depends on the [`InputBackend`] the
//! database was built for.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::mapping::catalog::{CATALOG, UNMAPPED_LEGACY, UNMAPPED_SDL2};
use crate::mapping::error::MappingError;
use crate::mapping::guid::DeviceGuid;
use crate::mapping::parser::MappingEntry;

/// Database shared between the poller task and the rest of the application
pub type SharedDatabase = Arc<RwLock<ControllerDatabase>>;

/// Raw ordinal layout produced by the input layer
///
/// Only affects the fallback record used for unknown devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputBackend {
    Legacy,
    #[default]
    Sdl2,
}

impl InputBackend {
    /// Zero-GUID record used for devices without a mapping
    pub const fn fallback_record(self) -> &'static str {
        match self {
            InputBackend::Legacy => UNMAPPED_LEGACY,
            InputBackend::Sdl2 => UNMAPPED_SDL2,
        }
    }
}

impl fmt::Display for InputBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputBackend::Legacy => f.write_str("legacy"),
            InputBackend::Sdl2 => f.write_str("sdl2"),
        }
    }
}

// Record text as added, plus its parsed form
#[derive(Debug, Clone)]
struct StoredMapping {
    record: String,
    entry: Arc<MappingEntry>,
}

impl StoredMapping {
    fn parse(record: &str) -> Result<Self, MappingError> {
        let record = record.trim();
        let entry = MappingEntry::parse(record)?;
        Ok(Self {
            record: record.to_string(),
            entry: Arc::new(entry),
        })
    }

    fn fallback(backend: InputBackend) -> Self {
        Self::parse(backend.fallback_record()).unwrap_or_else(|e| {
            error!("Built-in {} fallback record rejected: {}", backend, e);
            let entry = MappingEntry::new(DeviceGuid::ZERO, "Unmapped Controller");
            Self {
                record: entry.to_record(),
                entry: Arc::new(entry),
            }
        })
    }
}

/// Outcome of loading a multi-record document
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Records added or overwritten
    pub added: usize,
    /// Rejected records with their 1-based line number
    pub rejected: Vec<(usize, MappingError)>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Table from device GUID to mapping record
#[derive(Debug, Clone)]
pub struct ControllerDatabase {
    backend: InputBackend,
    fallback: StoredMapping,
    mappings: BTreeMap<DeviceGuid, StoredMapping>,
}

impl ControllerDatabase {
    /// Database seeded with the fallback and the built-in catalog
    pub fn new(backend: InputBackend) -> Self {
        let mut database = Self::empty(backend);

        let mut rejected = 0;
        for record in CATALOG {
            if let Err(e) = database.add(record) {
                warn!("Skipping built-in mapping: {}", e);
                rejected += 1;
            }
        }

        info!(
            "Controller database seeded for {} backend: {} mappings ({} rejected)",
            backend,
            database.len(),
            rejected
        );
        database
    }

    /// Database holding only the fallback record
    pub fn empty(backend: InputBackend) -> Self {
        Self {
            backend,
            fallback: StoredMapping::fallback(backend),
            mappings: BTreeMap::new(),
        }
    }

    /// Parses `record` and inserts it, replacing any mapping with the same GUID.
    ///
    /// On error the table is left untouched. A zero-GUID record replaces the
    /// fallback.
    pub fn add(&mut self, record: &str) -> Result<DeviceGuid, MappingError> {
        let stored = StoredMapping::parse(record)?;
        let guid = stored.entry.guid;

        if guid.is_zero() {
            debug!("Replacing fallback mapping with `{}`", stored.entry.name);
            self.fallback = stored;
        } else if let Some(previous) = self.mappings.insert(guid, stored) {
            debug!(
                "Mapping for {} overwritten (was `{}`)",
                guid, previous.entry.name
            );
        }

        Ok(guid)
    }

    /// Loads a `gamecontrollerdb.txt` style document, one record per line.
    ///
    /// Blank lines and `#` comments are skipped. A rejected line never stops
    /// the rest of the document from loading.
    pub fn add_from_str(&mut self, text: &str) -> LoadReport {
        let mut report = LoadReport::default();

        for (number, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match self.add(line) {
                Ok(_) => report.added += 1,
                Err(e) => {
                    warn!("Rejected mapping on line {}: {}", number + 1, e);
                    report.rejected.push((number + 1, e));
                }
            }
        }

        debug!(
            "Loaded {} mappings, {} rejected",
            report.added,
            report.rejected.len()
        );
        report
    }

    /// Record for `guid`, or the fallback record when none is stored
    pub fn lookup(&self, guid: &DeviceGuid) -> &str {
        &self.stored(guid).record
    }

    /// Parsed mapping for `guid`, with the same fallback rule as [`lookup`](Self::lookup)
    pub fn resolve(&self, guid: &DeviceGuid) -> Arc<MappingEntry> {
        Arc::clone(&self.stored(guid).entry)
    }

    fn stored(&self, guid: &DeviceGuid) -> &StoredMapping {
        if guid.is_zero() {
            return &self.fallback;
        }
        match self.mappings.get(guid) {
            Some(stored) => stored,
            None => {
                debug!("No mapping for {}, using fallback", guid);
                &self.fallback
            }
        }
    }

    /// Whether a record is stored for `guid`; the zero GUID is always present
    pub fn contains(&self, guid: &DeviceGuid) -> bool {
        guid.is_zero() || self.mappings.contains_key(guid)
    }

    /// Number of stored records, fallback included
    pub fn len(&self) -> usize {
        self.mappings.len() + 1
    }

    /// Always `false`: the fallback record cannot be removed
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn backend(&self) -> InputBackend {
        self.backend
    }

    /// Stored GUIDs in ascending order, starting with the zero GUID
    pub fn guids(&self) -> impl Iterator<Item = DeviceGuid> + '_ {
        std::iter::once(DeviceGuid::ZERO).chain(self.mappings.keys().copied())
    }

    pub fn into_shared(self) -> SharedDatabase {
        Arc::new(RwLock::new(self))
    }
}

impl Default for ControllerDatabase {
    fn default() -> Self {
        Self::new(InputBackend::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::mapping_types::{GamePadControl, InputSource};

    const RECORD: &str = "030000004c0500006802000011010000,Test Pad,a:b0,leftx:a0,";

    fn guid(text: &str) -> DeviceGuid {
        text.parse().unwrap()
    }

    #[test]
    fn test_unknown_guid_falls_back_to_zero() {
        let database = ControllerDatabase::new(InputBackend::Sdl2);
        let unknown = guid("deadbeefdeadbeefdeadbeefdeadbeef");

        assert!(!database.contains(&unknown));
        assert_eq!(database.lookup(&unknown), database.lookup(&DeviceGuid::ZERO));
        assert_eq!(database.resolve(&unknown).name, "Unmapped Controller");
    }

    #[test]
    fn test_backend_selects_fallback() {
        let legacy = ControllerDatabase::empty(InputBackend::Legacy);
        let sdl2 = ControllerDatabase::empty(InputBackend::Sdl2);

        assert_eq!(legacy.lookup(&DeviceGuid::ZERO), UNMAPPED_LEGACY);
        assert_eq!(sdl2.lookup(&DeviceGuid::ZERO), UNMAPPED_SDL2);
        assert_eq!(legacy.backend(), InputBackend::Legacy);
        assert_eq!(
            legacy.resolve(&DeviceGuid::ZERO).source(GamePadControl::Back),
            InputSource::Button(6)
        );
        assert_eq!(
            sdl2.resolve(&DeviceGuid::ZERO).source(GamePadControl::Back),
            InputSource::Button(4)
        );
    }

    #[test]
    fn test_empty_database_only_holds_fallback() {
        let database = ControllerDatabase::empty(InputBackend::Sdl2);
        assert_eq!(database.len(), 1);
        assert!(!database.is_empty());
        assert!(database.contains(&DeviceGuid::ZERO));
        assert_eq!(database.guids().collect::<Vec<_>>(), [DeviceGuid::ZERO]);
    }

    #[test]
    fn test_add_then_lookup() {
        let mut database = ControllerDatabase::empty(InputBackend::Sdl2);
        let added = database.add(&format!("  {RECORD}\n")).unwrap();

        assert_eq!(added, guid("030000004c0500006802000011010000"));
        assert_eq!(database.lookup(&added), RECORD);
        assert_eq!(
            database.resolve(&added).binding(GamePadControl::LeftX),
            Some(InputSource::axis(0))
        );
        assert_eq!(database.len(), 2);
    }

    #[test]
    fn test_second_add_overwrites() {
        let mut database = ControllerDatabase::empty(InputBackend::Sdl2);
        database.add(RECORD).unwrap();
        let key = database
            .add("030000004c0500006802000011010000,Second,a:b3,")
            .unwrap();

        assert_eq!(database.len(), 2);
        let entry = database.resolve(&key);
        assert_eq!(entry.name, "Second");
        assert_eq!(entry.binding(GamePadControl::A), Some(InputSource::Button(3)));
        assert_eq!(entry.binding(GamePadControl::LeftX), None);
    }

    #[test]
    fn test_failed_add_leaves_table_unchanged() {
        let mut database = ControllerDatabase::empty(InputBackend::Sdl2);
        database.add(RECORD).unwrap();
        let key = guid("030000004c0500006802000011010000");

        let result = database.add("030000004c0500006802000011010000,Broken,a:q1,");
        assert!(matches!(result, Err(MappingError::MalformedMapping(_))));
        let result = database.add("xyz,Broken,a:b1,");
        assert!(matches!(result, Err(MappingError::InvalidGuid(_))));

        assert_eq!(database.len(), 2);
        assert_eq!(database.lookup(&key), RECORD);
    }

    #[test]
    fn test_zero_guid_record_replaces_fallback() {
        let mut database = ControllerDatabase::empty(InputBackend::Sdl2);
        database
            .add("00000000000000000000000000000000,Custom Fallback,a:b9,")
            .unwrap();

        assert_eq!(database.len(), 1);
        let unknown = guid("deadbeefdeadbeefdeadbeefdeadbeef");
        assert_eq!(database.resolve(&unknown).name, "Custom Fallback");
    }

    #[test]
    fn test_catalog_is_seeded_in_order() {
        let database = ControllerDatabase::new(InputBackend::Sdl2);
        assert!(database.len() > 80);

        // Later records sharing a GUID replace earlier ones
        let dualshock3 = guid("030000004c0500006802000011010000");
        assert_eq!(database.resolve(&dualshock3).name, "PS3 Controller (hid-sony)");

        let f710 = guid("6d0419c2000000000000504944564944");
        assert_eq!(database.resolve(&f710).name, "Logitech F710 Gamepad (DInput)");
    }

    #[test]
    fn test_catalog_covers_every_platform() {
        let database = ControllerDatabase::new(InputBackend::Legacy);
        for text in [
            "4c056802000000000000504944564944",
            "4c050000000000006802000000000000",
            "050000004c050000c405000000010000",
            "4e564944494120436f72706f72617469",
        ] {
            assert!(database.contains(&guid(text)), "{text} missing");
        }
    }

    #[test]
    fn test_add_from_str_skips_comments_and_counts_failures() {
        let mut database = ControllerDatabase::empty(InputBackend::Sdl2);
        let text = format!(
            "# Game Controller DB\n\n{RECORD}\nnot a record\n  # indented comment\n\
             050000004c050000c405000000010000,DS4,a:b1,platform:Linux,\n"
        );
        let report = database.add_from_str(&text);

        assert_eq!(report.added, 2);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].0, 4);
        assert!(!report.is_clean());
        assert_eq!(database.len(), 3);
    }

    #[test]
    fn test_guids_are_sorted_after_zero() {
        let mut database = ControllerDatabase::empty(InputBackend::Sdl2);
        database.add("ff000000000000000000000000000000,Z,a:b0,").unwrap();
        database.add("01000000000000000000000000000000,A,a:b0,").unwrap();

        let guids: Vec<String> = database.guids().map(|g| g.to_string()).collect();
        assert_eq!(
            guids,
            [
                "00000000000000000000000000000000",
                "01000000000000000000000000000000",
                "ff000000000000000000000000000000",
            ]
        );
    }

    #[tokio::test]
    async fn test_shared_database_accepts_runtime_records() {
        let shared = ControllerDatabase::empty(InputBackend::Sdl2).into_shared();
        let key = shared.write().await.add(RECORD).unwrap();
        assert_eq!(shared.read().await.resolve(&key).name, "Test Pad");
    }

    #[test]
    fn test_backend_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            backend: InputBackend,
        }
        let parsed: Wrapper = toml::from_str("backend = \"legacy\"").unwrap();
        assert_eq!(parsed.backend, InputBackend::Legacy);
        assert_eq!(InputBackend::Sdl2.to_string(), "sdl2");
    }
}
