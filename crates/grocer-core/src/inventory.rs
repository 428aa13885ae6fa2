//! # Inventory
//!
//! The ordered list of items, addressed by position.
//!
//! ## Positional Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  index │ name        │ price/kg │ qty                                  │
//! │  ──────┼─────────────┼──────────┼─────                                 │
//! │    0   │ Tomato      │   40.0   │ 2.5                                  │
//! │    1   │ Red Onion   │   35.0   │ 3.0   ◄── remove(1)                  │
//! │    2   │ Onion Seeds │  300.0   │ 0.1       shifts this one to 1       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! The order in memory is the order in the data file. A position taken
//! from an earlier listing is only valid until the next removal.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Item;

/// Ordered sequence of [`Item`]s.
///
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in stored order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Appends an item at the end.
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Replaces the item at `index`, returning the previous one.
    pub fn replace(&mut self, index: usize, item: Item) -> CoreResult<Item> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(CoreError::IndexOutOfRange { index, len })?;

        Ok(std::mem::replace(slot, item))
    }

    /// Removes the item at `index`, shifting later items down by one.
    pub fn remove(&mut self, index: usize) -> CoreResult<Item> {
        if index >= self.items.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        Ok(self.items.remove(index))
    }

    /// Items whose name contains `keyword`, ignoring case.
    ///
    /// ## Example
    /// ```rust
    /// use grocer_core::{Inventory, Item};
    ///
    /// let inventory: Inventory = vec![
    ///     Item::new("Tomato", 40.0, 2.5).unwrap(),
    ///     Item::new("Red Onion", 35.0, 3.0).unwrap(),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let hits = inventory.search("ONION");
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits.items()[0].name(), "Red Onion");
    ///
    /// // An empty keyword keeps everything, in order.
    /// assert_eq!(inventory.search(""), inventory);
    /// ```
    pub fn search(&self, keyword: &str) -> Inventory {
        self.search_indexed(keyword)
            .into_iter()
            .map(|(_, item)| item.clone())
            .collect()
    }

    /// Like [`search`](Self::search), but pairs every hit with its position
    /// in the full inventory so a filtered view can still edit or delete.
    pub fn search_indexed(&self, keyword: &str) -> Vec<(usize, &Item)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.name_contains(keyword))
            .collect()
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Inventory { items }
    }
}

impl From<Inventory> for Vec<Item> {
    fn from(inventory: Inventory) -> Self {
        inventory.items
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Inventory {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Inventory {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> Item {
        Item::new(name, 10.0, 1.0).unwrap()
    }

    fn sample() -> Inventory {
        vec![item("Tomato"), item("Red Onion"), item("Onion Seeds"), item("Potato")].into()
    }

    #[test]
    fn test_push_appends_last() {
        let mut inventory = sample();
        inventory.push(item("Garlic"));

        assert_eq!(inventory.len(), 5);
        assert_eq!(inventory.items().last().unwrap().name(), "Garlic");
    }

    #[test]
    fn test_replace_returns_previous() {
        let mut inventory = sample();
        let old = inventory.replace(1, item("Shallot")).unwrap();

        assert_eq!(old.name(), "Red Onion");
        assert_eq!(inventory.get(1).unwrap().name(), "Shallot");
        assert_eq!(inventory.len(), 4);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut inventory = sample();
        let removed = inventory.remove(1).unwrap();

        assert_eq!(removed.name(), "Red Onion");
        let names: Vec<&str> = inventory.iter().map(Item::name).collect();
        assert_eq!(names, ["Tomato", "Onion Seeds", "Potato"]);
    }

    #[test]
    fn test_out_of_range() {
        let mut inventory = sample();

        assert_eq!(
            inventory.remove(4),
            Err(CoreError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(
            inventory.replace(9, item("X")),
            Err(CoreError::IndexOutOfRange { index: 9, len: 4 })
        );
        assert_eq!(inventory, sample());

        let mut empty = Inventory::new();
        assert!(empty.remove(0).is_err());
    }

    #[test]
    fn test_search_indexed_keeps_full_list_positions() {
        let inventory = sample();
        let hits = inventory.search_indexed("onion");

        let positions: Vec<usize> = hits.iter().map(|(i, _)| *i).collect();
        assert_eq!(positions, [1, 2]);
    }

    #[test]
    fn test_search_empty_keyword_returns_all() {
        let inventory = sample();
        assert_eq!(inventory.search(""), inventory);
        assert!(inventory.search("mango").is_empty());
    }

    #[test]
    fn test_serializes_as_array() {
        let inventory: Inventory = vec![Item::new("Tomato", 40.0, 2.5).unwrap()].into();
        let json = serde_json::to_string(&inventory).unwrap();

        assert_eq!(json, r#"[{"name":"Tomato","price_per_kg":40.0,"quantity":2.5}]"#);
        let back: Inventory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inventory);
    }
}
