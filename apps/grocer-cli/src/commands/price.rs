//! # Price Finder Command
//!
//! Wraps the calculator for text input and renders its answers.

use crate::config::AppConfig;
use crate::error::ApiError;
use grocer_core::pricing::{MAX_MASS_GRAMS, MAX_SPEND};
use grocer_core::validation::parse_decimal;
use grocer_core::{calculate, Quote};

/// Parses both fields and runs the calculator.
///
/// Unparseable, blank, zero or negative input is an error, never a zero result.
pub fn find_price(price_per_kg: &str, amount: &str) -> Result<(f64, Quote), ApiError> {
    let price_per_kg = parse_decimal("price_per_kg", price_per_kg)?;
    let amount = parse_decimal("amount", amount)?;

    let quote = calculate(price_per_kg, amount)?;
    Ok((amount, quote))
}

/// Output lines for a quote; an empty quote reports the range instead of nothing.
///
/// ## Example
/// ```text
/// For ₹30: give 0.6 kg
/// For 30g: charge ₹1.5
/// ```
pub fn format_quote(config: &AppConfig, amount: f64, quote: &Quote) -> Vec<String> {
    if quote.is_empty() {
        return vec![format!(
            "Amount {} is out of range (enter up to {} for money or {}g)",
            amount,
            config.format_currency(MAX_SPEND),
            MAX_MASS_GRAMS
        )];
    }

    let mut lines = Vec::new();

    if let Some(qty) = quote.quantity_for_spend {
        lines.push(format!("For {}: give {} kg", config.format_currency(amount), qty));
    }

    if let Some(cost) = quote.cost_for_mass {
        lines.push(format!("For {}g: charge {}", amount, config.format_currency(cost)));
    }

    lines
}
