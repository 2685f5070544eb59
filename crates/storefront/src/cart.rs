//! Shopping cart.
//!
//! The cart is session-local and transient: a list of selected products with
//! quantities, never persisted. Catalog data (name, price, unit,
//! description) is copied onto the item at insertion time; the price is not
//! re-read from the catalog afterwards. There is no removal or
//! quantity-decrement operation.

use rust_decimal::Decimal;

use hearthside_core::format_usd;

use crate::catalog;
use crate::models::OrderLine;

/// A product in the cart with its quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    /// Catalog key the item was added under.
    pub product: String,
    /// Display name, copied from the catalog at insertion.
    pub name: String,
    /// Unit price, copied from the catalog at insertion.
    pub price: Decimal,
    /// Pricing unit, copied from the catalog at insertion.
    pub unit: String,
    /// Description, copied from the catalog at insertion.
    pub description: String,
    /// Number of units, incremented on repeat adds. Not checked against any
    /// stock level.
    pub quantity: u32,
}

/// The session shopping cart.
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `key` to the cart.
    ///
    /// Unknown catalog keys are silently ignored and return `None`. If the
    /// product is already in the cart its quantity is incremented; otherwise
    /// a new entry is appended with the catalog data copied at this moment.
    pub fn add(&mut self, key: &str) -> Option<&CartItem> {
        let product = catalog::product(key)?;

        let index = match self.items.iter().position(|item| item.product == key) {
            Some(index) => {
                if let Some(item) = self.items.get_mut(index) {
                    item.quantity += 1;
                }
                index
            }
            None => {
                self.items.push(CartItem {
                    product: product.key.to_owned(),
                    name: product.name.to_owned(),
                    price: product.price,
                    unit: product.unit.to_owned(),
                    description: product.description.to_owned(),
                    quantity: 1,
                });
                self.items.len() - 1
            }
        };
        self.items.get(index)
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Total unit count across all items.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of price times quantity across all items.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum()
    }

    /// True when no items have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot the cart contents as order lines.
    #[must_use]
    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.items
            .iter()
            .map(|item| OrderLine {
                product: item.product.clone(),
                quantity: item.quantity,
                unit_price: item.price,
            })
            .collect()
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Cart item display data for front ends.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data for front ends.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            subtotal: format_usd(cart.subtotal()),
            item_count: cart.item_count(),
        }
    }
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity,
            price: format_usd(item.price),
            line_price: format_usd(item.price * Decimal::from(item.quantity)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_add_unknown_key_is_silent_noop() {
        let mut cart = Cart::new();
        assert!(cart.add("kindling").is_none());
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_same_product_twice_increments_quantity() {
        let mut cart = Cart::new();
        cart.add("bundle").unwrap();
        let item = cart.add("bundle").unwrap();

        assert_eq!(item.quantity, 2);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_copies_catalog_data() {
        let mut cart = Cart::new();
        let item = cart.add("halffacecord").unwrap();
        assert_eq!(item.name, "1/2 Face Cord");
        assert_eq!(item.price, Decimal::new(219, 0));
        assert_eq!(item.unit, "delivery");
        assert_eq!(item.description, "21.33 cubic feet");
    }

    #[test]
    fn test_subtotal_and_count() {
        let mut cart = Cart::new();
        cart.add("bundle").unwrap();
        cart.add("bundle").unwrap();
        cart.add("facecord").unwrap();

        assert_eq!(cart.item_count(), 3);
        // 2 * 9.99 + 399
        assert_eq!(cart.subtotal(), Decimal::new(41898, 2));
    }

    #[test]
    fn test_cart_view_formats_prices() {
        let mut cart = Cart::new();
        cart.add("bundle").unwrap();
        cart.add("bundle").unwrap();

        let view = CartView::from(&cart);
        assert_eq!(view.item_count, 2);
        assert_eq!(view.subtotal, "$19.98");
        assert_eq!(view.items.first().unwrap().price, "$9.99");
        assert_eq!(view.items.first().unwrap().line_price, "$19.98");
    }

    #[test]
    fn test_order_lines_snapshot() {
        let mut cart = Cart::new();
        cart.add("ibctote").unwrap();
        cart.add("ibctote").unwrap();

        let lines = cart.order_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines.first().unwrap().quantity, 2);
        assert_eq!(lines.first().unwrap().unit_price, Decimal::new(349, 0));
    }
}
