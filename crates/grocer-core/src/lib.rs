//! # grocer-core: Pure Inventory Logic for Grocer
//!
//! This crate holds the grocery list model and the unit-price calculator
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Grocer Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front end (CLI / GUI)                        │   │
//! │  │    List ──► Search ──► Add / Edit / Delete ──► Price finder     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ grocer-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ inventory │  │  pricing  │  │ validation│  │   │
//! │  │   │   Item    │  │ Inventory │  │ calculate │  │   rules   │  │   │
//! │  │   │ ItemDraft │  │  search   │  │   Quote   │  │  parsing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 grocer-store (JSON data file)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Item` and the `ItemDraft` form
//! - [`inventory`] - Ordered item list, positional edits, search
//! - [`pricing`] - The unit-price calculator
//! - [`error`] - Domain error types
//! - [`validation`] - Field rules and numeric parsing
//!
//! ## Example Usage
//!
//! ```rust
//! use grocer_core::{Inventory, Item};
//!
//! let mut inventory = Inventory::new();
//! inventory.push(Item::new("Tomato", 40.0, 2.5).unwrap());
//!
//! let hits = inventory.search("tom");
//! assert_eq!(hits.len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use pricing::{calculate, Quote};
pub use types::{Item, ItemDraft};
