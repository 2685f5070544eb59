//! Product catalog constants.
//!
//! The catalog is fixed: four firewood products sold either one-off or on a
//! recurring delivery subscription. Subscription pricing lives in a separate
//! table keyed by the same product keys and is snapshotted onto the
//! subscription record at creation time - existing subscriptions never track
//! later catalog changes.

use std::sync::LazyLock;

use rust_decimal::Decimal;

/// A product available in the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Catalog key used in forms and cart entries (e.g., `facecord`).
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-off price in USD.
    pub price: Decimal,
    /// Pricing unit shown next to the price (e.g., "delivery").
    pub unit: &'static str,
    /// Short description.
    pub description: &'static str,
}

static PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        Product {
            key: "bundle",
            name: "Bundle",
            price: Decimal::new(999, 2),
            unit: "bundle",
            description: "0.75 cubic feet",
        },
        Product {
            key: "halffacecord",
            name: "1/2 Face Cord",
            price: Decimal::new(219, 0),
            unit: "delivery",
            description: "21.33 cubic feet",
        },
        Product {
            key: "facecord",
            name: "1 Face Cord",
            price: Decimal::new(399, 0),
            unit: "delivery",
            description: "42.67 cubic feet",
        },
        Product {
            key: "ibctote",
            name: "IBC Tote",
            price: Decimal::new(349, 0),
            unit: "delivery",
            description: "35.3 cubic feet",
        },
    ]
});

/// Discounted recurring-delivery pricing, keyed by product key.
///
/// The `bundle-10` entry (a ten-bundle subscription tier) has no
/// corresponding catalog product and is unreachable from any current flow;
/// it is carried as-is from the pricing sheet.
static SUBSCRIPTION_PRICING: LazyLock<Vec<(&'static str, Decimal)>> = LazyLock::new(|| {
    vec![
        ("bundle-10", Decimal::new(9250, 2)),
        ("halffacecord", Decimal::new(197, 0)),
        ("facecord", Decimal::new(359, 0)),
        ("ibctote", Decimal::new(314, 0)),
    ]
});

/// All products, in display order.
#[must_use]
pub fn products() -> &'static [Product] {
    &PRODUCTS
}

/// Look up a product by catalog key.
#[must_use]
pub fn product(key: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.key == key)
}

/// Look up the subscription price for a product key.
#[must_use]
pub fn subscription_price(key: &str) -> Option<Decimal> {
    SUBSCRIPTION_PRICING
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, price)| *price)
}
