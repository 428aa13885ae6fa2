//! # Item Commands
//!
//! List, search, add, edit and delete.
//!
//! ## Positions in Filtered Views
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  grocer search onion                                                   │
//! │                                                                         │
//! │   [1] Red Onion    ₹35/kg  3kg                                         │
//! │   [2] Onion Seeds  ₹300/kg 0.1kg                                       │
//! │    │                                                                    │
//! │    └── position in the FULL list, so `grocer delete 2` removes         │
//! │        "Onion Seeds" even though it is the 2nd hit, not the 3rd row    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::AppConfig;
use crate::error::ApiError;
use grocer_core::{Item, ItemDraft};
use grocer_store::InventoryStore;

/// Item row for display and `--json` output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    /// Position in the full inventory.
    pub index: usize,
    pub name: String,
    pub price_per_kg: f64,
    pub quantity: f64,
}

impl ItemDto {
    fn new(index: usize, item: &Item) -> Self {
        ItemDto {
            index,
            name: item.name().to_string(),
            price_per_kg: item.price_per_kg(),
            quantity: item.quantity(),
        }
    }
}

/// Optional field overrides for `edit`. Unset fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price_per_kg: Option<String>,
    pub quantity: Option<String>,
}

/// All items in stored order.
pub fn list_items(store: &InventoryStore) -> Result<Vec<ItemDto>, ApiError> {
    search_items(store, "")
}

/// Items whose name contains `keyword` (any case), with full-list positions.
pub fn search_items(store: &InventoryStore, keyword: &str) -> Result<Vec<ItemDto>, ApiError> {
    let inventory = store.load()?;

    Ok(inventory
        .search_indexed(keyword)
        .into_iter()
        .map(|(index, item)| ItemDto::new(index, item))
        .collect())
}

/// Validates the form and appends the item.
pub fn add_item(store: &InventoryStore, draft: &ItemDraft) -> Result<ItemDto, ApiError> {
    let item = draft.parse()?;
    let index = store.upsert(None, item.clone())?;

    Ok(ItemDto::new(index, &item))
}

/// Applies `patch` over the item at `index` and saves it back.
pub fn edit_item(
    store: &InventoryStore,
    index: usize,
    patch: ItemPatch,
) -> Result<ItemDto, ApiError> {
    let inventory = store.load()?;
    let current = inventory
        .get(index)
        .ok_or_else(|| ApiError::not_found(index, inventory.len()))?;

    let mut draft = ItemDraft::from_item(current);
    if let Some(name) = patch.name {
        draft.name = name;
    }
    if let Some(price) = patch.price_per_kg {
        draft.price_per_kg = price;
    }
    if let Some(qty) = patch.quantity {
        draft.quantity = qty;
    }

    let item = draft.parse()?;
    store.upsert(Some(index), item.clone())?;

    Ok(ItemDto::new(index, &item))
}

/// Removes the item at `index`.
pub fn delete_item(store: &InventoryStore, index: usize) -> Result<ItemDto, ApiError> {
    let removed = store.remove_item(index)?;
    info!(index, name = %removed.name(), "Deleted item");

    Ok(ItemDto::new(index, &removed))
}

/// One list row: `[index] name  ₹price/kg  qtykg`.
pub fn format_row(config: &AppConfig, row: &ItemDto) -> String {
    format!(
        "[{}] {}  {}/kg  {}kg",
        row.index,
        row.name,
        config.format_currency(row.price_per_kg),
        row.quantity
    )
}
