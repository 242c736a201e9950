//! # Error Types
//!
//! Domain-specific error types for glowmart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  glowmart-core errors (this file)                                       │
//! │  ├── ValidationError  - Business rule violations (empty brand name,    │
//! │  │                      non-positive price, discount out of range)     │
//! │  ├── ParseError       - Malformed delimited brand strings              │
//! │  └── StoreError       - Umbrella over both, what callers match on      │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                              │
//! │                          ├──► StoreError ──► demo app ──► stderr       │
//! │        ParseError ──────┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Errors are raised eagerly at the point of violation and never retried

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Business rule validation errors.
///
/// Raised eagerly by constructors and discount operations when input does
/// not meet requirements. The operation leaves its receiver unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} cannot be empty")]
    Required { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be greater than zero")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Parse Error
// =============================================================================

/// Errors from the delimited brand-string mini-format.
///
/// ## When This Occurs
/// - The string does not split into exactly four `", "`-separated fields
/// - The year field is not an integer
///
/// Delimiter ambiguity (a comma-space inside the name or history field) is a
/// known limitation of the format and surfaces as a `FieldCount` error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Wrong number of delimited fields.
    #[error("expected {expected} comma-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// Year field did not parse as an integer.
    #[error("year '{value}' is not a valid integer")]
    InvalidYear { value: String },
}

// =============================================================================
// Store Error
// =============================================================================

/// Umbrella error for the storefront model.
///
/// Both leaf kinds convert in via `#[from]`, so `?` works across the crate.
/// The demo driver catches this family and prints a single-line diagnostic;
/// anything else is a programming error and is allowed to panic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Validation error (wraps ValidationError).
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Parse error (wraps ParseError).
    #[error("{0}")]
    Parse(#[from] ParseError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
