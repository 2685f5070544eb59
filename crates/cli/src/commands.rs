//! Command implementations.
//!
//! Each command opens the storefront over the configured data directory,
//! runs one widget flow, and prints the same banners the web widget would
//! show.

use hearthside_core::{SubscriptionId, format_usd};
use hearthside_storefront::config::StorefrontConfig;
use hearthside_storefront::error::AppError;
use hearthside_storefront::form::{ContactForm, SubscriptionForm};
use hearthside_storefront::notify::{Level, Notification};
use hearthside_storefront::pipeline::Storefront;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

fn open_storefront() -> Result<Storefront, Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    Ok(Storefront::from_config(&config)?)
}

#[allow(clippy::print_stdout)]
fn banner(note: &Notification) {
    match note.level() {
        Level::Success => println!("✔ {note}"),
        Level::Error => println!("✖ {note}"),
    }
}

#[allow(clippy::print_stdout)]
fn print_cart(front: &Storefront) {
    let view = front.cart_view();
    for item in &view.items {
        println!("  {} x{}  {}  ({})", item.name, item.quantity, item.line_price, item.price);
    }
    println!("  {} item(s), subtotal {}", view.item_count, view.subtotal);
}

fn fill_cart(front: &mut Storefront, products: &[String]) {
    for key in products {
        match front.add_to_cart(key) {
            Some(note) => banner(&note),
            None => tracing::warn!(product = %key, "unknown product, skipping"),
        }
    }
}

/// Add products to a per-invocation cart and show it.
pub fn cart(products: &[String]) -> CommandResult {
    let mut front = open_storefront()?;
    fill_cart(&mut front, products);
    print_cart(&front);
    Ok(())
}

/// Add products to the cart and check out as a one-time order.
#[allow(clippy::print_stdout)]
pub async fn order(products: &[String]) -> CommandResult {
    let mut front = open_storefront()?;
    fill_cart(&mut front, products);
    print_cart(&front);

    match front.checkout().await {
        Ok(receipt) => {
            banner(&Notification::OrderPlaced);
            println!(
                "  order {} - {} ({} pending)",
                receipt.order.id,
                format_usd(receipt.order.total),
                receipt.order.status
            );
            Ok(())
        }
        Err(AppError::Payment(_)) => {
            banner(&Notification::PaymentFailed);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Sign up for a recurring delivery subscription.
#[allow(clippy::print_stdout)]
pub async fn subscribe(form: SubscriptionForm) -> CommandResult {
    let mut front = open_storefront()?;

    match front.subscribe(form).await {
        Ok(receipt) => {
            banner(&Notification::SubscriptionCreated);
            println!(
                "  subscription {} - {} every {} month(s), next delivery {}",
                receipt.subscription.id,
                format_usd(receipt.subscription.price),
                receipt.subscription.frequency.months(),
                receipt.subscription.next_delivery.format("%Y-%m-%d")
            );
            Ok(())
        }
        Err(AppError::Payment(_)) => {
            banner(&Notification::PaymentFailed);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Send a contact message.
pub fn contact(form: ContactForm) -> CommandResult {
    let mut front = open_storefront()?;
    front.submit_contact(form)?;
    banner(&Notification::ContactReceived);
    Ok(())
}

/// Show a customer's subscriptions.
#[allow(clippy::print_stdout)]
pub fn portal(email: &str) -> CommandResult {
    let front = open_storefront()?;

    match front.load_portal(email) {
        Ok(portal) => {
            println!(
                "Customer {} ({}) since {}",
                portal.customer.email,
                portal.customer.id,
                portal.customer.created_at.format("%Y-%m-%d")
            );
            if portal.subscriptions.is_empty() {
                println!("  no subscriptions");
            }
            for sub in &portal.subscriptions {
                println!(
                    "  [{}] {} - {} {} - next delivery {}",
                    sub.id,
                    sub.product,
                    format_usd(sub.price),
                    sub.status,
                    sub.next_delivery.format("%Y-%m-%d")
                );
            }
            Ok(())
        }
        Err(AppError::NotFound(_)) => {
            banner(&Notification::CustomerNotFound);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Pause a subscription.
pub fn pause(id: &str) -> CommandResult {
    let mut front = open_storefront()?;
    if front
        .pause_subscription(&SubscriptionId::new(id))?
        .is_some()
    {
        banner(&Notification::SubscriptionPaused);
    }
    Ok(())
}

/// Resume a subscription.
pub fn resume(id: &str) -> CommandResult {
    let mut front = open_storefront()?;
    if front
        .resume_subscription(&SubscriptionId::new(id))?
        .is_some()
    {
        banner(&Notification::SubscriptionResumed);
    }
    Ok(())
}

/// Cancel a subscription.
pub fn cancel(id: &str) -> CommandResult {
    let mut front = open_storefront()?;
    if front
        .cancel_subscription(&SubscriptionId::new(id))?
        .is_some()
    {
        banner(&Notification::SubscriptionCancelled);
    }
    Ok(())
}
