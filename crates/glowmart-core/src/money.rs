//! # Money Module
//!
//! Provides the `Money` and `TaxRate` types for handling monetary values
//! and rates safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A 15% discount on ₸4500.00 must be exactly ₸3825.00, not              │
//! │  ₸3824.999999999. Storefront arithmetic is money arithmetic.           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units + basis-point rates                 │
//! │    450000 × 1500 bps / 10000 = 67500, exact                            │
//! │    Where division truncates, we round explicitly and KNOW we did       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use glowmart_core::money::{Money, TaxRate};
//!
//! // Create from minor units (preferred)
//! let price = Money::from_cents(1099); // ₸10.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                     // ₸21.98
//! let total = price + Money::from_cents(500);  // ₸15.99
//!
//! // Rates are basis points: 1500 = 15%
//! let tax = price.calculate_tax(TaxRate::from_bps(1000));
//! assert_eq!(tax.cents(), 110);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::BPS_SCALE;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (the storefront default sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (tiyn for KZT).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and fee corrections
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// Every monetary value in the model flows through this type:
/// product prices, delivery fees, order totals, payment amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use glowmart_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents ₸10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use glowmart_core::money::Money;
    ///
    /// let price = Money::from_major_minor(4500, 0); // ₸4500.00
    /// assert_eq!(price.cents(), 450_000);
    ///
    /// let negative = Money::from_major_minor(-5, 50); // -₸5.50
    /// assert_eq!(negative.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -₸5.50, not -₸4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        // Handle sign: if major is negative, minor should subtract
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in minor units (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99, absolute value).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Calculates tax on this amount with explicit rounding.
    ///
    /// ## Implementation
    /// Integer math: `(amount × bps + 5000) / 10000`.
    /// The +5000 provides round-half-up (5000/10000 = 0.5).
    /// i128 intermediate prevents overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use glowmart_core::money::{Money, TaxRate};
    ///
    /// let price = Money::from_cents(1000); // ₸10.00
    /// let rate = TaxRate::from_bps(825);   // 8.25%
    ///
    /// let tax = price.calculate_tax(rate);
    /// // ₸10.00 × 8.25% = ₸0.825 → rounds to ₸0.83
    /// assert_eq!(tax.cents(), 83);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / BPS_SCALE as i128;
        Money::from_cents(tax_cents as i64)
    }

    /// Returns this amount plus tax at the given rate.
    ///
    /// Standalone price math, not tied to any stored product price:
    /// nothing is mutated.
    ///
    /// ## Example
    /// ```rust
    /// use glowmart_core::money::Money;
    /// use glowmart_core::DEFAULT_TAX_RATE;
    ///
    /// let price = Money::from_cents(4000);
    /// assert_eq!(price.with_tax(DEFAULT_TAX_RATE).cents(), 4400);
    /// ```
    pub fn with_tax(&self, rate: TaxRate) -> Money {
        *self + self.calculate_tax(rate)
    }

    /// Calculates the discount amount for a rate in basis points.
    ///
    /// Same rounding rule as [`Money::calculate_tax`]. Range checking is the
    /// caller's job; see `validation::validate_discount_bps`.
    ///
    /// ## Example
    /// ```rust
    /// use glowmart_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(10000);          // ₸100.00
    /// let off = subtotal.discount_amount(1500);         // 15%
    /// assert_eq!(off.cents(), 1500);                    // ₸15.00
    /// ```
    pub fn discount_amount(&self, discount_bps: u32) -> Money {
        let discount = (self.0 as i128 * discount_bps as i128 + 5000) / BPS_SCALE as i128;
        Money::from_cents(discount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is what the detail/summary strings embed. Sign precedes the
/// currency symbol: `-₸5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₸{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Multiplication by i32 (ergonomics for literal quantities).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
