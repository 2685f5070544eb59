//! Status and frequency enums for storefront entities.

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};

/// Subscription lifecycle status.
///
/// New subscriptions are always created `Active`; the only mutation a
/// subscription ever sees afterwards is a status change through the customer
/// portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    #[default]
    Active,
    Paused,
    Cancelled,
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Paused => write!(f, "paused"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Order status.
///
/// Orders are created `Pending` and currently stay there; fulfillment and
/// payment capture transitions are not implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Paid => write!(f, "paid"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Recurring delivery interval for subscriptions.
///
/// Form input is parsed lossily: anything that is not a recognized interval
/// falls back to monthly, matching how the delivery schedule treats
/// unrecognized values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    #[default]
    Monthly,
    Bimonthly,
    Quarterly,
}

impl Frequency {
    /// Parse a form value, falling back to [`Frequency::Monthly`] for
    /// anything unrecognized.
    #[must_use]
    pub fn parse_lossy(value: &str) -> Self {
        match value {
            "bimonthly" => Self::Bimonthly,
            "quarterly" => Self::Quarterly,
            _ => Self::Monthly,
        }
    }

    /// Number of months between deliveries.
    #[must_use]
    pub const fn months(self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Bimonthly => 2,
            Self::Quarterly => 3,
        }
    }

    /// The delivery date following `from` at this frequency.
    #[must_use]
    pub fn next_delivery_after(self, from: DateTime<Utc>) -> DateTime<Utc> {
        from + Months::new(self.months())
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Bimonthly => write!(f, "bimonthly"),
            Self::Quarterly => write!(f, "quarterly"),
        }
    }
}
