//! # Pricing Module
//!
//! The unit-price calculator: given a price per kilogram and an amount the
//! shopper typed, work out how much to give or how much to charge.
//!
//! ## The Ambiguous Amount
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The amount field takes either money ("₹30") or grams ("400g"),        │
//! │  with no unit attached. The calculator answers every reading that      │
//! │  fits the range:                                                        │
//! │                                                                         │
//! │   amount        │ as money (qty for spend) │ as grams (cost for mass)  │
//! │   ──────────────┼──────────────────────────┼─────────────────────────  │
//! │   (0, 1000]     │           ✅              │           ✅              │
//! │   (1000, 2000]  │           ❌              │           ✅              │
//! │   > 2000        │           ❌              │           ❌              │
//! │                                                                         │
//! │  For small amounts BOTH answers are returned; the reader picks.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use grocer_core::pricing::calculate;
//!
//! let quote = calculate(50.0, 30.0).unwrap();
//! assert_eq!(quote.quantity_for_spend, Some(0.6)); // ₹30 buys 0.6 kg
//! assert_eq!(quote.cost_for_mass, Some(1.5));      // 30 g costs ₹1.5
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::validation::validate_positive;

/// Largest amount read as a currency value.
pub const MAX_SPEND: f64 = 1000.0;

/// Largest amount read as a mass in grams.
pub const MAX_MASS_GRAMS: f64 = 2000.0;

const GRAMS_PER_KG: f64 = 1000.0;

/// Result of [`calculate`]. Either, both, or neither reading may be present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Kilograms bought when the amount is money.
    pub quantity_for_spend: Option<f64>,

    /// Price charged when the amount is grams.
    pub cost_for_mass: Option<f64>,
}

impl Quote {
    /// True when the amount fell outside both ranges.
    pub fn is_empty(&self) -> bool {
        self.quantity_for_spend.is_none() && self.cost_for_mass.is_none()
    }
}

/// Converts an amount into quantity and/or cost at `price_per_kg`.
///
/// ## Rules
/// - both inputs must be finite and positive, else `InvalidInput`
/// - `amount <= 1000`: `quantity_for_spend = amount / price_per_kg`
/// - `amount <= 2000`: `cost_for_mass = price_per_kg * amount / 1000`
/// - results are rounded to 2 decimal places
/// - above 2000 the quote is empty; callers report that as out of range
pub fn calculate(price_per_kg: f64, amount: f64) -> CoreResult<Quote> {
    validate_positive("price_per_kg", price_per_kg)?;
    validate_positive("amount", amount)?;

    let mut quote = Quote::default();

    if amount <= MAX_SPEND {
        quote.quantity_for_spend = Some(round2(amount / price_per_kg));
    }

    if amount <= MAX_MASS_GRAMS {
        quote.cost_for_mass = Some(round2(price_per_kg * amount / GRAMS_PER_KG));
    }

    Ok(quote)
}

/// Rounds to 2 decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// Unit Tests
// =============================================================================
