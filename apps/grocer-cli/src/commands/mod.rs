//! # Commands
//!
//! Each subcommand is a plain function over an [`InventoryStore`](grocer_store::InventoryStore)
//! returning data or an [`ApiError`](crate::error::ApiError). Printing happens in `lib.rs`.
//!
//! - [`item`] - list, search, add, edit, delete
//! - [`price`] - the price finder

pub mod item;
pub mod price;
