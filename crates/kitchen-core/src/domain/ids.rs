//! Domain identifiers (strongly-typed IDs).
//!
//! Order ids are assigned by the ordering system upstream of the kitchen, so
//! this crate never generates them. The newtype only keeps them from being
//! mixed up with other integers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an order sent to production.
///
/// `OrderId(0)` is representable (it arrives from the outside world) but it
/// never passes [`ProductionOrder::validate`](super::ProductionOrder::validate).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u32);

impl OrderId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Zero is the "missing id" value.
    pub const fn is_blank(self) -> bool {
        self.0 == 0
    }

    /// Hash key used by record stores.
    pub fn as_key(self) -> String {
        self.0.to_string()
    }
}

impl From<u32> for OrderId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_blank() {
        assert!(OrderId::new(0).is_blank());
        assert!(!OrderId::new(7).is_blank());
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&OrderId::new(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn key_is_decimal_string() {
        assert_eq!(OrderId::from(1234).as_key(), "1234");
    }
}
