//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures. Every variant is a
/// pure function of the request input: retrying with the same input yields
/// the same error, so nothing here is retried internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A malformed or self-contradictory request (duplicate GTIN, manifest
    /// GCP mismatch, negative quantity at construction). Rejects the whole
    /// request; nothing is partially applied.
    #[error("validation failed: {0}")]
    Validation(String),

    /// One or more GTINs had no match in the product directory. The message
    /// bundles every unknown GTIN from the request.
    #[error("no such entity: {0}")]
    NoSuchEntity(String),

    /// Requested quantity exceeds held stock, or no stock record exists. The
    /// message bundles every offending line with held vs requested figures.
    #[error("insufficient stock: {0}")]
    InsufficientStock(String),

    /// A single unit's weight exceeds truck capacity. The item can never
    /// ship; this is a data problem, not a transient condition.
    #[error("product exceeds truck capacity: {0}")]
    CapacityViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn no_such_entity(msg: impl Into<String>) -> Self {
        Self::NoSuchEntity(msg.into())
    }

    pub fn insufficient_stock(msg: impl Into<String>) -> Self {
        Self::InsufficientStock(msg.into())
    }

    pub fn capacity_violation(msg: impl Into<String>) -> Self {
        Self::CapacityViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
