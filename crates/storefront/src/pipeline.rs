//! Form-to-record pipeline.
//!
//! [`Storefront`] ties the widget together: it reads submitted form data,
//! upserts customer records, creates subscription and order records, and
//! charges the payment gateway. Front ends construct one `Storefront` per
//! session and drive it sequentially.

use std::sync::Arc;

use chrono::Utc;
use tracing::instrument;

use hearthside_core::{Email, Frequency, SubscriptionId, SubscriptionStatus};

use crate::cart::{Cart, CartView};
use crate::catalog;
use crate::config::StorefrontConfig;
use crate::db::{RecordStore, RepositoryError};
use crate::error::{AppError, Result};
use crate::form::{ContactForm, SubscriptionForm};
use crate::models::{
    ContactMessage, Customer, NewCustomer, NewOrder, NewSubscription, Order, Subscription,
};
use crate::notify::Notification;
use crate::payment::{ChargeRequest, PaymentGateway, PaymentReceipt};
use crate::storage::JsonFileStorage;

/// Outcome of a successful subscription signup.
#[derive(Debug, Clone)]
pub struct SubscribeReceipt {
    pub customer: Customer,
    pub subscription: Subscription,
    pub payment: PaymentReceipt,
}

/// Outcome of a successful cart checkout.
#[derive(Debug, Clone)]
pub struct CheckoutReceipt {
    pub order: Order,
    pub payment: PaymentReceipt,
}

/// A customer and their subscriptions, for the portal view.
#[derive(Debug, Clone)]
pub struct CustomerPortal {
    pub customer: Customer,
    pub subscriptions: Vec<Subscription>,
}

/// The storefront widget: cart, records, and payments behind one API.
pub struct Storefront {
    store: RecordStore,
    cart: Cart,
    gateway: Arc<dyn PaymentGateway>,
}

impl Storefront {
    /// Create a storefront over an already-opened record store.
    pub fn new(store: RecordStore, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            store,
            cart: Cart::new(),
            gateway,
        }
    }

    /// Create a storefront from configuration: file-backed records under
    /// the configured data directory and the simulated gateway.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Repository` if the data directory or stored
    /// collections cannot be opened.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self> {
        let backend = JsonFileStorage::open(&config.data_dir).map_err(RepositoryError::from)?;
        let store = RecordStore::open(backend)?;
        let gateway = Arc::new(config.payment.gateway());
        Ok(Self::new(store, gateway))
    }

    /// Add one unit of a product to the cart.
    ///
    /// Unknown catalog keys are silently ignored (`None`); otherwise the
    /// banner to show is returned.
    pub fn add_to_cart(&mut self, key: &str) -> Option<Notification> {
        let item = self.cart.add(key)?;
        Some(Notification::ItemAdded {
            name: item.name.clone(),
        })
    }

    /// Current cart display data.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView::from(&self.cart)
    }

    /// Submit the subscription signup form.
    ///
    /// Looks up or creates the customer by email, creates an `Active`
    /// subscription priced from the subscription pricing table, then
    /// charges the gateway. On a declined charge the subscription record
    /// remains in place, still `Active`; there is no compensating rollback.
    ///
    /// # Errors
    ///
    /// - `AppError::BadRequest` for a malformed email (nothing is written)
    /// - `AppError::NotFound` for a product missing from the pricing table
    ///   (nothing is written)
    /// - `AppError::Payment` when the charge is declined (records remain)
    /// - `AppError::Repository` when persistence fails
    #[instrument(skip(self, form), fields(email = %form.email, product = %form.product))]
    pub async fn subscribe(&mut self, form: SubscriptionForm) -> Result<SubscribeReceipt> {
        let email = Email::parse(&form.email).map_err(|e| AppError::BadRequest(e.to_string()))?;
        let price = catalog::subscription_price(&form.product)
            .ok_or_else(|| AppError::NotFound(format!("product {}", form.product)))?;

        let address = form.postal_address();
        let customer = match self.store.customer_by_email(&email) {
            Some(existing) => existing.clone(),
            None => self.store.save_customer(NewCustomer {
                email,
                phone: form.phone.clone(),
                address: address.clone(),
            })?,
        };

        let subscription = self.store.save_subscription(NewSubscription {
            customer_id: customer.id.clone(),
            product: form.product.clone(),
            frequency: Frequency::parse_lossy(&form.frequency),
            price,
            address,
        })?;

        let payment = self
            .gateway
            .charge(ChargeRequest {
                reference: subscription.id.to_string(),
                amount: subscription.price,
                description: format!("{} subscription", subscription.product),
            })
            .await?;

        tracing::info!(subscription_id = %subscription.id, "subscription created");
        Ok(SubscribeReceipt {
            customer,
            subscription,
            payment,
        })
    }

    /// Submit the contact form. No payment step.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` for a malformed email or empty
    /// name/message, `AppError::Repository` if persistence fails.
    #[instrument(skip(self, form), fields(email = %form.email))]
    pub fn submit_contact(&mut self, form: ContactForm) -> Result<ContactMessage> {
        let email = Email::parse(&form.email).map_err(|e| AppError::BadRequest(e.to_string()))?;
        if form.name.trim().is_empty() || form.message.trim().is_empty() {
            return Err(AppError::BadRequest(
                "name and message are required".to_owned(),
            ));
        }

        let message = ContactMessage {
            name: form.name.trim().to_owned(),
            email,
            phone: form.phone.trim().to_owned(),
            message: form.message.trim().to_owned(),
            submitted_at: Utc::now(),
        };
        self.store.save_contact(message.clone())?;
        tracing::info!("contact message received");
        Ok(message)
    }

    /// Check out the cart as a one-time order.
    ///
    /// Snapshots the cart into a `Pending` order, charges the cart total,
    /// and clears the cart on success. On a declined charge the order
    /// record remains `Pending` and the cart is left intact so the
    /// customer can retry.
    ///
    /// # Errors
    ///
    /// - `AppError::BadRequest` when the cart is empty
    /// - `AppError::Payment` when the charge is declined (order remains)
    /// - `AppError::Repository` when persistence fails
    #[instrument(skip(self))]
    pub async fn checkout(&mut self) -> Result<CheckoutReceipt> {
        if self.cart.is_empty() {
            return Err(AppError::BadRequest("cart is empty".to_owned()));
        }

        let order = self.store.save_order(NewOrder {
            lines: self.cart.order_lines(),
            total: self.cart.subtotal(),
        })?;

        let payment = self
            .gateway
            .charge(ChargeRequest {
                reference: order.id.to_string(),
                amount: order.total,
                description: "firewood order".to_owned(),
            })
            .await?;

        self.cart.clear();
        tracing::info!(order_id = %order.id, "order placed");
        Ok(CheckoutReceipt { order, payment })
    }

    /// Load the customer portal view for an email address.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` for a malformed email and
    /// `AppError::NotFound` when no customer has that email.
    #[instrument(skip(self))]
    pub fn load_portal(&self, email: &str) -> Result<CustomerPortal> {
        let email = Email::parse(email).map_err(|e| AppError::BadRequest(e.to_string()))?;
        let customer = self
            .store
            .customer_by_email(&email)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("customer {email}")))?;
        let subscriptions = self
            .store
            .customer_subscriptions(&customer.id)
            .into_iter()
            .cloned()
            .collect();
        Ok(CustomerPortal {
            customer,
            subscriptions,
        })
    }

    /// Pause a subscription. Unknown ids are a silent no-op (`Ok(None)`).
    ///
    /// # Errors
    ///
    /// Returns `AppError::Repository` if persisting the change fails.
    pub fn pause_subscription(&mut self, id: &SubscriptionId) -> Result<Option<Subscription>> {
        self.set_subscription_status(id, SubscriptionStatus::Paused)
    }

    /// Resume a paused subscription. Unknown ids are a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Repository` if persisting the change fails.
    pub fn resume_subscription(&mut self, id: &SubscriptionId) -> Result<Option<Subscription>> {
        self.set_subscription_status(id, SubscriptionStatus::Active)
    }

    /// Cancel a subscription. Unknown ids are a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Repository` if persisting the change fails.
    pub fn cancel_subscription(&mut self, id: &SubscriptionId) -> Result<Option<Subscription>> {
        self.set_subscription_status(id, SubscriptionStatus::Cancelled)
    }

    fn set_subscription_status(
        &mut self,
        id: &SubscriptionId,
        status: SubscriptionStatus,
    ) -> Result<Option<Subscription>> {
        let updated = self.store.update_subscription_status(id, status)?.cloned();
        Ok(updated)
    }

    /// Read access to the underlying records.
    #[must_use]
    pub fn records(&self) -> &RecordStore {
        &self.store
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use chrono::Months;
    use rust_decimal::Decimal;

    use super::*;
    use crate::db::SequentialIds;
    use crate::payment::SimulatedGateway;
    use crate::storage::MemoryStorage;

    fn storefront(approval_rate: f64) -> Storefront {
        let store =
            RecordStore::open_with_ids(MemoryStorage::new(), SequentialIds::default()).unwrap();
        let gateway = Arc::new(SimulatedGateway::new(Duration::from_millis(1), approval_rate));
        Storefront::new(store, gateway)
    }

    fn subscription_form(email: &str, product: &str, frequency: &str) -> SubscriptionForm {
        SubscriptionForm {
            product: product.to_owned(),
            frequency: frequency.to_owned(),
            email: email.to_owned(),
            phone: "207-555-0101".to_owned(),
            address: "12 Birch Lane".to_owned(),
            city: "Bangor".to_owned(),
            state: "ME".to_owned(),
            zip: "04401".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_subscribe_creates_customer_and_subscription() {
        let mut front = storefront(1.0);
        let receipt = front
            .subscribe(subscription_form("a@example.com", "facecord", "quarterly"))
            .await
            .unwrap();

        assert_eq!(receipt.subscription.price, Decimal::new(359, 0));
        assert_eq!(receipt.subscription.status, SubscriptionStatus::Active);
        assert_eq!(
            receipt.subscription.next_delivery,
            receipt.subscription.created_at + Months::new(3)
        );
        assert_eq!(receipt.subscription.customer_id, receipt.customer.id);
        assert_eq!(receipt.payment.reference, receipt.subscription.id.to_string());
    }

    #[tokio::test]
    async fn test_subscribe_reuses_existing_customer() {
        let mut front = storefront(1.0);
        let first = front
            .subscribe(subscription_form("a@example.com", "facecord", "monthly"))
            .await
            .unwrap();
        let second = front
            .subscribe(subscription_form("a@example.com", "ibctote", "bimonthly"))
            .await
            .unwrap();

        assert_eq!(first.customer.id, second.customer.id);
        assert_eq!(front.records().customers().len(), 1);
        assert_eq!(front.records().subscriptions().len(), 2);
    }

    #[tokio::test]
    async fn test_subscribe_unknown_product_writes_nothing() {
        let mut front = storefront(1.0);
        let result = front
            .subscribe(subscription_form("a@example.com", "driftwood", "monthly"))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(front.records().customers().is_empty());
        assert!(front.records().subscriptions().is_empty());
    }

    #[tokio::test]
    async fn test_subscribe_malformed_email_is_bad_request() {
        let mut front = storefront(1.0);
        let result = front
            .subscribe(subscription_form("not-an-email", "facecord", "monthly"))
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_subscribe_unrecognized_frequency_defaults_to_monthly() {
        let mut front = storefront(1.0);
        let receipt = front
            .subscribe(subscription_form("a@example.com", "facecord", "fortnightly"))
            .await
            .unwrap();
        assert_eq!(receipt.subscription.frequency, Frequency::Monthly);
        assert_eq!(
            receipt.subscription.next_delivery,
            receipt.subscription.created_at + Months::new(1)
        );
    }

    #[tokio::test]
    async fn test_subscribe_declined_payment_keeps_subscription() {
        let mut front = storefront(0.0);
        let result = front
            .subscribe(subscription_form("a@example.com", "facecord", "quarterly"))
            .await;

        assert!(matches!(result, Err(AppError::Payment(_))));
        // The already-created records stay in place, subscription still Active
        assert_eq!(front.records().customers().len(), 1);
        let subs = front.records().subscriptions();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs.first().map(|s| s.status), Some(SubscriptionStatus::Active));
    }

    #[tokio::test]
    async fn test_contact_form_appends_message() {
        let mut front = storefront(1.0);
        let message = front
            .submit_contact(ContactForm {
                name: "Ann".to_owned(),
                email: "a@example.com".to_owned(),
                phone: String::new(),
                message: "Do you deliver on weekends?".to_owned(),
            })
            .unwrap();

        assert_eq!(message.name, "Ann");
        assert_eq!(front.records().contacts().len(), 1);
    }

    #[tokio::test]
    async fn test_contact_form_requires_name_and_message() {
        let mut front = storefront(1.0);
        let result = front.submit_contact(ContactForm {
            name: "  ".to_owned(),
            email: "a@example.com".to_owned(),
            phone: String::new(),
            message: "hi".to_owned(),
        });
        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(front.records().contacts().is_empty());
    }

    #[tokio::test]
    async fn test_checkout_snapshots_cart_and_clears_on_success() {
        let mut front = storefront(1.0);
        front.add_to_cart("bundle").unwrap();
        front.add_to_cart("bundle").unwrap();
        front.add_to_cart("facecord").unwrap();

        let receipt = front.checkout().await.unwrap();
        assert_eq!(receipt.order.total, Decimal::new(41898, 2));
        assert_eq!(receipt.order.lines.len(), 2);
        assert_eq!(front.cart_view().item_count, 0);
        assert_eq!(front.records().orders().len(), 1);
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_is_bad_request() {
        let mut front = storefront(1.0);
        let result = front.checkout().await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_checkout_declined_keeps_order_and_cart() {
        let mut front = storefront(0.0);
        front.add_to_cart("ibctote").unwrap();

        let result = front.checkout().await;
        assert!(matches!(result, Err(AppError::Payment(_))));
        assert_eq!(front.records().orders().len(), 1);
        assert_eq!(front.cart_view().item_count, 1);
    }

    #[tokio::test]
    async fn test_add_to_cart_notification() {
        let mut front = storefront(1.0);
        let note = front.add_to_cart("facecord").unwrap();
        assert_eq!(note.to_string(), "1 Face Cord added to cart!");
        assert!(front.add_to_cart("kindling").is_none());
    }

    #[tokio::test]
    async fn test_portal_and_status_changes() {
        let mut front = storefront(1.0);
        let receipt = front
            .subscribe(subscription_form("a@example.com", "halffacecord", "monthly"))
            .await
            .unwrap();

        let portal = front.load_portal("a@example.com").unwrap();
        assert_eq!(portal.subscriptions.len(), 1);

        let paused = front
            .pause_subscription(&receipt.subscription.id)
            .unwrap()
            .unwrap();
        assert_eq!(paused.status, SubscriptionStatus::Paused);

        let resumed = front
            .resume_subscription(&receipt.subscription.id)
            .unwrap()
            .unwrap();
        assert_eq!(resumed.status, SubscriptionStatus::Active);

        let cancelled = front
            .cancel_subscription(&receipt.subscription.id)
            .unwrap()
            .unwrap();
        assert_eq!(cancelled.status, SubscriptionStatus::Cancelled);

        // Unknown id: silent no-op
        assert!(front
            .pause_subscription(&SubscriptionId::new("missing"))
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_portal_unknown_email_is_not_found() {
        let front = storefront(1.0);
        let result = front.load_portal("ghost@example.com");
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
