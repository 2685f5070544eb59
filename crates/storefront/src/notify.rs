//! User-visible notifications.
//!
//! The widget communicates outcomes through transient banners; this module
//! owns the banner text so every front end shows the same wording.

use std::fmt;

/// Banner severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

/// A user-visible banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A product was added to the cart.
    ItemAdded {
        /// Product display name.
        name: String,
    },
    SubscriptionCreated,
    OrderPlaced,
    PaymentFailed,
    ContactReceived,
    SubscriptionPaused,
    SubscriptionResumed,
    SubscriptionCancelled,
    CustomerNotFound,
}

impl Notification {
    /// Severity of the banner.
    #[must_use]
    pub const fn level(&self) -> Level {
        match self {
            Self::PaymentFailed | Self::CustomerNotFound => Level::Error,
            _ => Level::Success,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemAdded { name } => write!(f, "{name} added to cart!"),
            Self::SubscriptionCreated => write!(
                f,
                "Subscription created successfully! You will receive your first delivery soon."
            ),
            Self::OrderPlaced => write!(
                f,
                "Order placed successfully! We will contact you to schedule delivery."
            ),
            Self::PaymentFailed => write!(f, "Payment processing failed. Please try again."),
            Self::ContactReceived => write!(
                f,
                "Thank you for your message! We will get back to you within 24 hours."
            ),
            Self::SubscriptionPaused => write!(f, "Subscription paused successfully"),
            Self::SubscriptionResumed => write!(f, "Subscription resumed successfully"),
            Self::SubscriptionCancelled => write!(f, "Subscription cancelled"),
            Self::CustomerNotFound => write!(f, "Customer not found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_text() {
        assert_eq!(
            Notification::ItemAdded {
                name: "1 Face Cord".to_owned()
            }
            .to_string(),
            "1 Face Cord added to cart!"
        );
        assert_eq!(
            Notification::SubscriptionCreated.to_string(),
            "Subscription created successfully! You will receive your first delivery soon."
        );
        assert_eq!(
            Notification::PaymentFailed.to_string(),
            "Payment processing failed. Please try again."
        );
        assert_eq!(
            Notification::ContactReceived.to_string(),
            "Thank you for your message! We will get back to you within 24 hours."
        );
        assert_eq!(
            Notification::SubscriptionPaused.to_string(),
            "Subscription paused successfully"
        );
        assert_eq!(
            Notification::SubscriptionResumed.to_string(),
            "Subscription resumed successfully"
        );
        assert_eq!(
            Notification::SubscriptionCancelled.to_string(),
            "Subscription cancelled"
        );
        assert_eq!(
            Notification::CustomerNotFound.to_string(),
            "Customer not found"
        );
    }

    #[test]
    fn test_levels() {
        assert_eq!(Notification::PaymentFailed.level(), Level::Error);
        assert_eq!(Notification::CustomerNotFound.level(), Level::Error);
        assert_eq!(Notification::SubscriptionCreated.level(), Level::Success);
        assert_eq!(Notification::SubscriptionCancelled.level(), Level::Success);
    }
}
