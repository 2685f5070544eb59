//! Form payloads submitted by front ends.
//!
//! Fields are raw strings exactly as a form would post them; parsing and
//! validation happen in the pipeline. Field names match the submitted form
//! inputs.

use serde::Deserialize;

use crate::models::PostalAddress;

/// Subscription signup form data.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionForm {
    pub product: String,
    pub frequency: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl SubscriptionForm {
    /// Assemble the address fields into a postal address.
    #[must_use]
    pub fn postal_address(&self) -> PostalAddress {
        PostalAddress {
            street: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip: self.zip.clone(),
        }
    }
}

/// Contact form data.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub message: String,
}
