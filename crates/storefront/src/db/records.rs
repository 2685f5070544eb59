//! The record store: in-memory collections mirrored to key-value storage.

use chrono::Utc;
use serde::de::DeserializeOwned;

use hearthside_core::{CustomerId, Email, OrderId, OrderStatus, SubscriptionId, SubscriptionStatus};

use super::{IdSource, RandomIds, RepositoryError};
use crate::models::{
    ContactMessage, Customer, NewCustomer, NewOrder, NewSubscription, Order, Subscription,
};
use crate::storage::StorageBackend;

const KEY_CUSTOMERS: &str = "customers";
const KEY_SUBSCRIPTIONS: &str = "subscriptions";
const KEY_ORDERS: &str = "orders";
const KEY_CONTACTS: &str = "contacts";

/// Customer, subscription, order, and contact records over a storage
/// backend.
///
/// Every mutating operation rewrites all four collections to storage before
/// returning, so storage always reflects the in-memory state.
pub struct RecordStore {
    customers: Vec<Customer>,
    subscriptions: Vec<Subscription>,
    orders: Vec<Order>,
    contacts: Vec<ContactMessage>,
    backend: Box<dyn StorageBackend>,
    ids: Box<dyn IdSource>,
}

impl RecordStore {
    /// Open a store over `backend`, loading all collections.
    ///
    /// Absent keys load as empty collections.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the backend cannot be read, or
    /// `RepositoryError::DataCorruption` if a stored collection fails to
    /// decode.
    pub fn open(backend: impl StorageBackend + 'static) -> Result<Self, RepositoryError> {
        Self::open_with_ids(backend, RandomIds)
    }

    /// Open a store with an explicit identifier source.
    ///
    /// # Errors
    ///
    /// Same as [`RecordStore::open`].
    pub fn open_with_ids(
        backend: impl StorageBackend + 'static,
        ids: impl IdSource + 'static,
    ) -> Result<Self, RepositoryError> {
        let customers = load_collection(&backend, KEY_CUSTOMERS)?;
        let subscriptions = load_collection(&backend, KEY_SUBSCRIPTIONS)?;
        let orders = load_collection(&backend, KEY_ORDERS)?;
        let contacts = load_collection(&backend, KEY_CONTACTS)?;

        Ok(Self {
            customers,
            subscriptions,
            orders,
            contacts,
            backend: Box::new(backend),
            ids: Box::new(ids),
        })
    }

    /// Create a customer record.
    ///
    /// Assigns the id and creation timestamp. No duplicate-email check is
    /// performed here; callers that want upsert semantics look the email up
    /// first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if persisting fails. The record is still
    /// present in memory in that case.
    pub fn save_customer(&mut self, new: NewCustomer) -> Result<Customer, RepositoryError> {
        let customer = Customer {
            id: CustomerId::new(self.ids.next_id()),
            email: new.email,
            phone: new.phone,
            address: new.address,
            created_at: Utc::now(),
        };
        tracing::debug!(customer_id = %customer.id, "saving customer");
        self.customers.push(customer.clone());
        self.persist()?;
        Ok(customer)
    }

    /// Create a subscription record.
    ///
    /// Assigns the id and creation timestamp, forces status to `Active`,
    /// and derives the next delivery date from the requested frequency.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if persisting fails.
    pub fn save_subscription(
        &mut self,
        new: NewSubscription,
    ) -> Result<Subscription, RepositoryError> {
        let now = Utc::now();
        let subscription = Subscription {
            id: SubscriptionId::new(self.ids.next_id()),
            customer_id: new.customer_id,
            product: new.product,
            frequency: new.frequency,
            price: new.price,
            address: new.address,
            status: SubscriptionStatus::Active,
            next_delivery: new.frequency.next_delivery_after(now),
            created_at: now,
            updated_at: None,
        };
        tracing::debug!(
            subscription_id = %subscription.id,
            product = %subscription.product,
            frequency = %subscription.frequency,
            "saving subscription"
        );
        self.subscriptions.push(subscription.clone());
        self.persist()?;
        Ok(subscription)
    }

    /// Create an order record with status `Pending`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if persisting fails.
    pub fn save_order(&mut self, new: NewOrder) -> Result<Order, RepositoryError> {
        let order = Order {
            id: OrderId::new(self.ids.next_id()),
            lines: new.lines,
            total: new.total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };
        tracing::debug!(order_id = %order.id, total = %order.total, "saving order");
        self.orders.push(order.clone());
        self.persist()?;
        Ok(order)
    }

    /// Append a contact message.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if persisting fails.
    pub fn save_contact(&mut self, message: ContactMessage) -> Result<(), RepositoryError> {
        self.contacts.push(message);
        self.persist()
    }

    /// First customer whose email matches exactly, if any.
    #[must_use]
    pub fn customer_by_email(&self, email: &Email) -> Option<&Customer> {
        self.customers.iter().find(|c| &c.email == email)
    }

    /// All subscriptions owned by `customer_id`, in insertion order.
    #[must_use]
    pub fn customer_subscriptions(&self, customer_id: &CustomerId) -> Vec<&Subscription> {
        self.subscriptions
            .iter()
            .filter(|s| &s.customer_id == customer_id)
            .collect()
    }

    /// Update a subscription's status, stamping `updated_at`.
    ///
    /// An unknown id is a silent no-op: returns `Ok(None)` without touching
    /// storage.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if persisting the change fails.
    pub fn update_subscription_status(
        &mut self,
        id: &SubscriptionId,
        status: SubscriptionStatus,
    ) -> Result<Option<&Subscription>, RepositoryError> {
        let Some(index) = self.subscriptions.iter().position(|s| &s.id == id) else {
            return Ok(None);
        };
        if let Some(subscription) = self.subscriptions.get_mut(index) {
            subscription.status = status;
            subscription.updated_at = Some(Utc::now());
            tracing::debug!(subscription_id = %id, status = %status, "updated subscription status");
        }
        self.persist()?;
        Ok(self.subscriptions.get(index))
    }

    /// All customer records, in insertion order.
    #[must_use]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// All subscription records, in insertion order.
    #[must_use]
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    /// All order records, in insertion order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// All contact messages, in insertion order.
    #[must_use]
    pub fn contacts(&self) -> &[ContactMessage] {
        &self.contacts
    }

    /// Rewrite every collection to storage.
    fn persist(&mut self) -> Result<(), RepositoryError> {
        let customers = serde_json::to_string(&self.customers)?;
        let subscriptions = serde_json::to_string(&self.subscriptions)?;
        let orders = serde_json::to_string(&self.orders)?;
        let contacts = serde_json::to_string(&self.contacts)?;

        self.backend.set(KEY_CUSTOMERS, &customers)?;
        self.backend.set(KEY_SUBSCRIPTIONS, &subscriptions)?;
        self.backend.set(KEY_ORDERS, &orders)?;
        self.backend.set(KEY_CONTACTS, &contacts)?;
        Ok(())
    }
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("customers", &self.customers.len())
            .field("subscriptions", &self.subscriptions.len())
            .field("orders", &self.orders.len())
            .field("contacts", &self.contacts.len())
            .finish_non_exhaustive()
    }
}

fn load_collection<T: DeserializeOwned>(
    backend: &impl StorageBackend,
    key: &str,
) -> Result<Vec<T>, RepositoryError> {
    match backend.get(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid {key} collection in storage: {e}"))
        }),
        None => Ok(Vec::new()),
    }
}
