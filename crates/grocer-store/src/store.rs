//! # Inventory Store
//!
//! Reads and rewrites the inventory data file.
//!
//! ## Read-Modify-Write
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  How Every Change Reaches Disk                          │
//! │                                                                         │
//! │  add_item / replace_item / remove_item                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  load()  ── whole file → Inventory (missing file = empty list)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Inventory::push / replace / remove   (IndexOutOfRange stops here)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  save()  ── whole Inventory → file, old content overwritten            │
//! │                                                                         │
//! │  No cache between calls, no partial updates, no lock.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The file is rewritten in place. A crash in the middle of [`InventoryStore::save`]
//! can leave a truncated document, which the next `load` reports as
//! [`StoreError::DataCorruption`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use grocer_core::{Inventory, Item};

/// Default file name of the data file.
pub const DEFAULT_FILE_NAME: &str = "grocery_data.json";

/// JSON-file backed inventory.
///
/// ## Usage
/// ```rust,no_run
/// use grocer_core::Item;
/// use grocer_store::InventoryStore;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = InventoryStore::new("grocery_data.json");
///
/// store.add_item(Item::new("Tomato", 40.0, 2.5)?)?;
/// let onions = store.search("onion")?;
/// store.remove_item(0)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct InventoryStore {
    path: PathBuf,
}

impl InventoryStore {
    /// Creates a store over the file at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        InventoryStore { path: path.into() }
    }

    /// Location of the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole inventory.
    ///
    /// ## Returns
    /// * `Ok(Inventory)` - file contents, or empty when the file doesn't exist
    /// * `Err(StoreError::DataCorruption)` - file isn't a valid inventory
    /// * `Err(StoreError::Io)` - file exists but can't be read
    pub fn load(&self) -> StoreResult<Inventory> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No data file yet, starting empty");
                return Ok(Inventory::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let inventory: Inventory =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::corruption(&self.path, e))?;

        debug!(path = %self.path.display(), count = inventory.len(), "Loaded inventory");
        Ok(inventory)
    }

    /// Writes the whole inventory, replacing the file's previous content.
    pub fn save(&self, inventory: &Inventory) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(inventory)
            .map_err(|e| StoreError::io(&self.path, e.into()))?;

        fs::write(&self.path, json).map_err(|e| StoreError::io(&self.path, e))?;

        debug!(path = %self.path.display(), count = inventory.len(), "Saved inventory");
        Ok(())
    }

    /// Appends `item` to the end of the stored list, returning its position.
    pub fn add_item(&self, item: Item) -> StoreResult<usize> {
        let mut inventory = self.load()?;

        let index = inventory.len();
        info!(index, name = %item.name(), "Adding item");
        inventory.push(item);

        self.save(&inventory)?;
        Ok(index)
    }

    /// Replaces the item at `index`, returning the one it replaced.
    ///
    /// ## Returns
    /// * `Err(StoreError::IndexOutOfRange)` - nothing at `index`; file untouched
    pub fn replace_item(&self, index: usize, item: Item) -> StoreResult<Item> {
        let mut inventory = self.load()?;

        info!(index, name = %item.name(), "Replacing item");
        let previous = inventory.replace(index, item)?;

        self.save(&inventory)?;
        Ok(previous)
    }

    /// Removes the item at `index`, returning it.
    ///
    /// Later items move up one position.
    pub fn remove_item(&self, index: usize) -> StoreResult<Item> {
        let mut inventory = self.load()?;

        let removed = inventory.remove(index)?;
        info!(index, name = %removed.name(), "Removed item");

        self.save(&inventory)?;
        Ok(removed)
    }

    /// Saves the add/edit form: replaces at `index` when given, appends otherwise.
    ///
    /// Returns the position the item was saved at.
    pub fn upsert(&self, index: Option<usize>, item: Item) -> StoreResult<usize> {
        match index {
            Some(index) => self.replace_item(index, item).map(|_| index),
            None => self.add_item(item),
        }
    }

    /// Items whose name contains `keyword`, ignoring case. Never writes.
    pub fn search(&self, keyword: &str) -> StoreResult<Inventory> {
        let inventory = self.load()?;
        let hits = inventory.search(keyword);

        debug!(keyword, hits = hits.len(), "Searched inventory");
        Ok(hits)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn store_in(dir: &TempDir) -> InventoryStore {
        InventoryStore::new(dir.path().join(DEFAULT_FILE_NAME))
    }

    fn item(name: &str, price: f64, qty: f64) -> Item {
        Item::new(name, price, qty).unwrap()
    }

    fn sample() -> Inventory {
        vec![
            item("Tomato", 40.0, 2.5),
            item("Red Onion", 35.0, 3.0),
            item("Potato", 30.0, 5.0),
        ]
        .into()
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);

        assert!(store.load().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);

        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());

        store.save(&Inventory::new()).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_computed_floats_survive_save_and_load() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);

        // Values whose shortest decimal form needs all 17 digits to parse back.
        let mut items = vec![
            item("Saffron", 1823.3521453552403, 2.0277373531477235e-187),
            item("Pepper", 0.1 + 0.2, 1.0 / 3.0),
            item("Cumin", 2.0 / 3.0, 1e-300 * 7.0),
        ];
        let mut x = 0.7_f64;
        for i in 0..200 {
            x = (x * 3.9 * (1.0 - x)).abs();
            let price = x * 10f64.powi(i % 12) + f64::EPSILON;
            let qty = (i as f64 + 1.0) / 7.0 * x.max(1e-9);
            items.push(item(&format!("Item {i}"), price, qty));
        }
        let inventory: Inventory = items.into();

        store.save(&inventory).unwrap();
        let loaded = store.load().unwrap();

        for (saved, read) in inventory.iter().zip(loaded.iter()) {
            assert_eq!(saved.price_per_kg().to_bits(), read.price_per_kg().to_bits());
            assert_eq!(saved.quantity().to_bits(), read.quantity().to_bits());
        }
        assert_eq!(loaded, inventory);
    }

    #[test]
    fn test_file_is_indented_array() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);

        store.save(&vec![item("Tomato", 40.0, 2.5)].into()).unwrap();
        let text = fs::read_to_string(store.path()).unwrap();

        assert_eq!(
            text,
            "[\n  {\n    \"name\": \"Tomato\",\n    \"price_per_kg\": 40.0,\n    \"quantity\": 2.5\n  }\n]"
        );
    }

    #[test]
    fn test_reads_hand_written_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"[{"name": "Rice", "price_per_kg": 60, "quantity": 10}]"#,
        )
        .unwrap();

        let inventory = store.load().unwrap();
        assert_eq!(inventory.items(), [item("Rice", 60.0, 10.0)]);
    }

    #[test]
    fn test_add_item_appends() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);
        store.save(&sample()).unwrap();

        let garlic = item("Garlic", 200.0, 0.5);
        assert_eq!(store.add_item(garlic.clone()).unwrap(), 3);

        let inventory = store.load().unwrap();
        assert_eq!(inventory.len(), 4);
        assert_eq!(inventory.items().last(), Some(&garlic));
        assert_eq!(inventory.get(3), Some(&garlic));
    }

    #[test]
    fn test_add_item_creates_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);

        assert_eq!(store.add_item(item("Garlic", 200.0, 0.5)).unwrap(), 0);
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_replace_item() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);
        store.save(&sample()).unwrap();

        let previous = store.replace_item(1, item("Shallot", 80.0, 1.0)).unwrap();
        assert_eq!(previous.name(), "Red Onion");

        let names: Vec<String> = store
            .load()
            .unwrap()
            .iter()
            .map(|i| i.name().to_string())
            .collect();
        assert_eq!(names, ["Tomato", "Shallot", "Potato"]);
    }

    #[test]
    fn test_remove_item_keeps_order() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);
        store.save(&sample()).unwrap();

        let removed = store.remove_item(0).unwrap();
        assert_eq!(removed.name(), "Tomato");

        let expected: Inventory = sample().into_iter().skip(1).collect();
        assert_eq!(store.load().unwrap(), expected);
    }

    #[test]
    fn test_out_of_range_leaves_file_untouched() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);
        store.save(&sample()).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        assert!(matches!(
            store.remove_item(3),
            Err(StoreError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert!(matches!(
            store.replace_item(7, item("X", 1.0, 1.0)),
            Err(StoreError::IndexOutOfRange { index: 7, len: 3 })
        ));

        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_upsert() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);

        assert_eq!(store.upsert(None, item("Tomato", 40.0, 2.5)).unwrap(), 0);
        assert_eq!(store.upsert(None, item("Onion", 35.0, 3.0)).unwrap(), 1);
        assert_eq!(store.upsert(Some(0), item("Tomato", 45.0, 2.0)).unwrap(), 0);

        assert_eq!(
            store.load().unwrap().items(),
            [item("Tomato", 45.0, 2.0), item("Onion", 35.0, 3.0)]
        );
        assert!(store.upsert(Some(5), item("Tomato", 1.0, 1.0)).is_err());
    }

    #[test]
    fn test_search_does_not_write() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);

        assert!(store.search("onion").unwrap().is_empty());
        assert!(!store.path().exists());

        store.save(&sample()).unwrap();
        assert_eq!(store.search("").unwrap(), sample());
        assert_eq!(store.search("ONION").unwrap().items(), [item("Red Onion", 35.0, 3.0)]);
    }

    #[test]
    fn test_corrupted_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);

        for content in [
            "",
            "not json",
            "[{\"name\": \"Rice\"",
            r#"{"name": "Rice", "price_per_kg": 60, "quantity": 10}"#,
            r#"[{"name": "Rice", "price_per_kg": "sixty", "quantity": 10}]"#,
            r#"[{"name": "", "price_per_kg": 60, "quantity": 10}]"#,
        ] {
            fs::write(store.path(), content).unwrap();
            assert!(
                matches!(store.load(), Err(StoreError::DataCorruption { .. })),
                "content {content:?} should be reported as corrupted"
            );
        }

        // Mutations propagate the failure and keep the bad file for inspection.
        assert!(matches!(
            store.add_item(item("Rice", 60.0, 10.0)),
            Err(StoreError::DataCorruption { .. })
        ));
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let dir = tempdir().expect("Failed to create temp dir");
        // A directory where the file should be.
        let store = InventoryStore::new(dir.path());

        assert!(matches!(store.load(), Err(StoreError::Io { .. })));
        assert!(matches!(store.save(&sample()), Err(StoreError::Io { .. })));
    }
}
