//! Domain records persisted by the record store.
//!
//! Records serialize camelCase; the JSON written to storage is a direct
//! encode of these shapes with no schema versioning. Nothing is ever
//! deleted: customers and orders are immutable once created, and the only
//! post-creation mutation anywhere is a subscription status change.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use hearthside_core::{
    CustomerId, Email, Frequency, OrderId, OrderStatus, SubscriptionId, SubscriptionStatus,
};

/// A postal delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// A customer record.
///
/// Email is the lookup key; uniqueness is not enforced by the store itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub email: Email,
    pub phone: String,
    pub address: PostalAddress,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a customer record.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub email: Email,
    pub phone: String,
    pub address: PostalAddress,
}

/// A recurring delivery subscription.
///
/// `price` is snapshotted from the subscription pricing table at creation
/// and never recomputed; `address` is duplicated from the customer at
/// creation and not kept in sync. `customer_id` is not validated against
/// customer existence at write time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: SubscriptionId,
    pub customer_id: CustomerId,
    /// Catalog key of the subscribed product.
    pub product: String,
    pub frequency: Frequency,
    pub price: Decimal,
    pub address: PostalAddress,
    pub status: SubscriptionStatus,
    pub next_delivery: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    /// Set on the first status change, absent until then.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for creating a subscription record.
#[derive(Debug, Clone)]
pub struct NewSubscription {
    pub customer_id: CustomerId,
    pub product: String,
    pub frequency: Frequency,
    pub price: Decimal,
    pub address: PostalAddress,
}

/// One product line on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Catalog key of the ordered product.
    pub product: String,
    pub quantity: u32,
    /// Unit price at the time the order was placed.
    pub unit_price: Decimal,
}

/// A one-time order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub lines: Vec<OrderLine>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Input for creating an order record.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub lines: Vec<OrderLine>,
    pub total: Decimal,
}

/// A contact form submission.
///
/// Contact messages carry no identifier; they are appended to the contact
/// list as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}
