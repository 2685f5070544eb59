//! Record identifier sources.
//!
//! Identifiers are opaque strings assigned once at record creation. The
//! default source is UUID v4, which keeps ids collision-resistant even when
//! two records are created within the same clock tick; [`SequentialIds`]
//! gives deterministic ids for tests.

use uuid::Uuid;

/// A source of unique record identifiers.
pub trait IdSource: Send {
    /// Produce the next identifier. Never returns the same value twice.
    fn next_id(&mut self) -> String;
}

/// Collision-resistant random identifiers (UUID v4).
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic counter identifiers (`1`, `2`, `3`, ...) for deterministic
/// tests.
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: u64,
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        self.last += 1;
        self.last.to_string()
    }
}
