use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderId(pub i64);

impl OrderId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("order id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<OrderId> for i64 {
    fn from(value: OrderId) -> Self {
        value.0
    }
}

/// Identifier of an order's owning user, issued by the external identity
/// service. Guest orders carry none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// Order lifecycle tag. The set is deliberately open: operators move orders
/// between arbitrary non-empty tags ("pending", "processing", "completed",
/// "cancelled", …) with no transition rules and no terminal states. Any
/// future closed state machine goes through this one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderStatus(String);

impl OrderStatus {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("status cannot be empty".into()));
        }
        Ok(Self(value))
    }

    /// Initial status of every freshly submitted order.
    pub fn pending() -> Self {
        Self("pending".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(i64);

impl Quantity {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value <= 0 {
            Err(DomainError::Validation(
                "quantity must be a positive integer".into(),
            ))
        } else {
            Ok(Self(value))
        }
    }
}

impl From<Quantity> for i64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_accepts_any_non_empty_tag() {
        assert!(OrderStatus::new("pending").is_ok());
        assert!(OrderStatus::new("очікує дзвінка").is_ok());
        assert!(OrderStatus::new("   ").is_err());
    }

    #[test]
    fn pending_is_the_initial_tag() {
        assert_eq!(OrderStatus::pending().as_str(), "pending");
    }

    #[test]
    fn quantity_must_be_positive() {
        assert!(Quantity::new(0).is_err());
        assert!(Quantity::new(-1).is_err());
        assert_eq!(i64::from(Quantity::new(3).unwrap()), 3);
    }
}
