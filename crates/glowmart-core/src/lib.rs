//! # glowmart-core: Pure Business Logic for Glowmart
//!
//! This crate is the **heart** of Glowmart, a small beauty-storefront model.
//! It contains all business logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Glowmart Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/demo (Console Driver)                   │   │
//! │  │    parse brand ──► build catalog ──► order ──► payment         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ glowmart-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │ checkout  │  │ validation│  │   │
//! │  │   │   Brand   │  │   Money   │  │  Delivery │  │   rules   │  │   │
//! │  │   │  Category │  │  TaxRate  │  │   Order   │  │  checks   │  │   │
//! │  │   │  Product  │  │           │  │  Payment  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Brand, Category and Product types plus the store traits
//! - [`customer`] - Person trait and the loyal customer
//! - [`checkout`] - Delivery, Order and Payment
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in minor units (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use glowmart_core::money::Money;
//! use glowmart_core::DEFAULT_TAX_RATE;
//!
//! // Create money from minor units (never from floats!)
//! let price = Money::from_cents(1099); // ₸10.99
//!
//! // Tax at the default 10% rate, standalone calculation
//! let taxed = price.with_tax(DEFAULT_TAX_RATE);
//! assert_eq!(taxed.cents(), 1209);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod checkout;
pub mod customer;
pub mod error;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use glowmart_core::Money` instead of
// `use glowmart_core::money::Money`

pub use catalog::{Brand, Category, Discountable, Product, StoreItem};
pub use checkout::{Delivery, Order, Payment};
pub use customer::{LoyalCustomer, Person};
pub use error::{ParseError, StoreError, StoreResult, ValidationError};
pub use money::{Money, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// One whole (100%) expressed in basis points.
///
/// All rates in the crate are basis points: 1 bps = 0.01%, so
/// 1500 bps = 15% and 10000 bps = 100%.
pub const BPS_SCALE: u32 = 10_000;

/// Default sales tax rate: 10%.
///
/// Used by [`Money::with_tax`] callers that have no tenant-specific rate.
pub const DEFAULT_TAX_RATE: TaxRate = TaxRate::from_bps(1_000);

/// Number of fields in the delimited brand string consumed by
/// [`Brand::from_delimited_str`]: `name, country, year, history`.
pub const BRAND_FIELD_COUNT: usize = 4;
