//! Money display helpers.
//!
//! Prices are stored as [`rust_decimal::Decimal`] amounts in USD. The
//! storefront sells in a single currency, so there is no currency code on
//! the records themselves; this module owns the one display format used
//! across cart views and the customer portal.

use rust_decimal::Decimal;

/// Format a decimal amount as a USD price string (e.g., `"$219.00"`).
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    format!("${amount:.2}")
}
