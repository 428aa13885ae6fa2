//! # Domain Types
//!
//! The grocery record and the text form it is entered through.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐   parse()    ┌─────────────────────┐          │
//! │  │     ItemDraft       │ ───────────► │        Item         │          │
//! │  │  ─────────────────  │              │  ─────────────────  │          │
//! │  │  name: String       │              │  name (non-blank)   │          │
//! │  │  price_per_kg: Str  │              │  price_per_kg > 0   │          │
//! │  │  quantity: String   │              │  quantity > 0       │          │
//! │  └─────────────────────┘              └─────────────────────┘          │
//! │    raw text fields                      the persisted record            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Stable ID
//! Items carry no identifier. An item is addressed by its position in the
//! [`Inventory`](crate::Inventory), and names are not required to be unique.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::{parse_decimal, validate_item_name, validate_positive, ValidationResult};

// =============================================================================
// Item
// =============================================================================

/// One grocery product.
///
/// The fields are private so every `Item` in memory satisfies its invariants:
/// a non-blank name and finite, positive price and quantity. Deserialization
/// goes through the same checks.
///
/// ## On-Disk Shape
/// ```json
/// { "name": "Tomato", "price_per_kg": 40.0, "quantity": 2.5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
pub struct Item {
    name: String,
    price_per_kg: f64,
    quantity: f64,
}

impl Item {
    /// Creates a validated item.
    ///
    /// ## Example
    /// ```rust
    /// use grocer_core::Item;
    ///
    /// let item = Item::new("Potato", 30.0, 5.0).unwrap();
    /// assert_eq!(item.name(), "Potato");
    ///
    /// assert!(Item::new("", 30.0, 5.0).is_err());
    /// assert!(Item::new("Potato", 0.0, 5.0).is_err());
    /// ```
    pub fn new(name: impl Into<String>, price_per_kg: f64, quantity: f64) -> ValidationResult<Self> {
        let name = name.into();

        validate_item_name(&name)?;
        validate_positive("price_per_kg", price_per_kg)?;
        validate_positive("quantity", quantity)?;

        Ok(Item {
            name,
            price_per_kg,
            quantity,
        })
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Currency units per kilogram.
    pub fn price_per_kg(&self) -> f64 {
        self.price_per_kg
    }

    /// Kilograms held.
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Case-insensitive substring match on the name.
    ///
    /// An empty keyword matches every item.
    pub fn name_contains(&self, keyword: &str) -> bool {
        self.name.to_lowercase().contains(&keyword.to_lowercase())
    }
}

/// Unchecked wire form of [`Item`], validated by `TryFrom`.
#[derive(Deserialize)]
struct ItemRecord {
    name: String,
    price_per_kg: f64,
    quantity: f64,
}

impl TryFrom<ItemRecord> for Item {
    type Error = ValidationError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        Item::new(record.name, record.price_per_kg, record.quantity)
    }
}

// =============================================================================
// Item Draft
// =============================================================================

/// Raw text of the add/edit form, before validation.
///
/// ## Form Rules
/// ```text
/// name          → trimmed, must not be blank
/// price_per_kg  → decimal, blank reads as 0 (then rejected)
/// quantity      → decimal, blank reads as 0 (then rejected)
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub price_per_kg: String,
    pub quantity: String,
}

impl ItemDraft {
    /// Creates a draft from the three form fields.
    pub fn new(
        name: impl Into<String>,
        price_per_kg: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        ItemDraft {
            name: name.into(),
            price_per_kg: price_per_kg.into(),
            quantity: quantity.into(),
        }
    }

    /// Pre-fills a draft from an existing item (edit form).
    pub fn from_item(item: &Item) -> Self {
        ItemDraft {
            name: item.name.clone(),
            price_per_kg: item.price_per_kg.to_string(),
            quantity: item.quantity.to_string(),
        }
    }

    /// Parses the draft into a validated [`Item`].
    ///
    /// ## Example
    /// ```rust
    /// use grocer_core::ItemDraft;
    ///
    /// let item = ItemDraft::new("  Ginger ", "120", "0.25").parse().unwrap();
    /// assert_eq!(item.name(), "Ginger");
    ///
    /// // A blank quantity is refused rather than saved as zero.
    /// assert!(ItemDraft::new("Ginger", "120", "").parse().is_err());
    /// ```
    pub fn parse(&self) -> ValidationResult<Item> {
        let name = self.name.trim();
        let price_per_kg = parse_decimal("price_per_kg", &self.price_per_kg)?;
        let quantity = parse_decimal("quantity", &self.quantity)?;

        Item::new(name, price_per_kg, quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
