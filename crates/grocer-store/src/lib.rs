//! # grocer-store: Data File Layer for Grocer
//!
//! This crate persists the inventory as a single JSON document.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Grocer Data Flow                                 │
//! │                                                                         │
//! │  Front end (grocer add --name Tomato ...)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   grocer-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────────┐            ┌──────────────────┐         │   │
//! │  │   │  InventoryStore  │            │    StoreError    │         │   │
//! │  │   │   (store.rs)     │ ─────────► │    (error.rs)    │         │   │
//! │  │   │ load / save      │            │ DataCorruption   │         │   │
//! │  │   │ add / replace /  │            │ IndexOutOfRange  │         │   │
//! │  │   │ remove / search  │            │ InvalidInput, Io │         │   │
//! │  │   └──────────────────┘            └──────────────────┘         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  grocery_data.json  ─  [ {name, price_per_kg, quantity}, ... ]  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use grocer_store::InventoryStore;
//!
//! let store = InventoryStore::new("path/to/grocery_data.json");
//! let inventory = store.load()?;
//! ```

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{InventoryStore, DEFAULT_FILE_NAME};
