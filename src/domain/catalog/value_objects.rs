use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CakeId(pub i64);

impl CakeId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("cake id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CakeId> for i64 {
    fn from(value: CakeId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CakeName(String);

impl CakeName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("cake name cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CakeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CakeName> for String {
    fn from(value: CakeName) -> Self {
        value.0
    }
}

/// URL-safe catalog identifier. Unique across the catalog and immutable once
/// assigned; renaming a cake never touches it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CakeSlug(String);

impl CakeSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CakeSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CakeSlug> for String {
    fn from(value: CakeSlug) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cake_id_rejects_non_positive() {
        assert!(CakeId::new(0).is_err());
        assert!(CakeId::new(-3).is_err());
        assert!(CakeId::new(1).is_ok());
    }

    #[test]
    fn slug_rejects_blank() {
        assert!(CakeSlug::new("  ").is_err());
        assert_eq!(CakeSlug::new("medovyk").unwrap().as_str(), "medovyk");
    }
}
