//! # Checkout Module
//!
//! Delivery, order and payment: the money-moving end of the flow.
//!
//! ## Total Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  total = product.calculate_price() × quantity + delivery.fee           │
//! │                                                                         │
//! │  Recomputed on EVERY call, never cached: a discount applied to the     │
//! │  product before the order is built is reflected automatically, and     │
//! │  Order and Payment can never disagree about the amount.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Orders and payments borrow their parts instead of copying them. They are
//! short-lived views over the catalog/customer state, not records: there is
//! no payment status, no paid flag, no double-payment check.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{Product, StoreItem};
use crate::customer::LoyalCustomer;
use crate::money::Money;

// =============================================================================
// Delivery
// =============================================================================

/// Shipping method, address and flat fee.
///
/// No validation: a zero or negative fee is accepted as-is (promotional
/// free shipping, fee corrections).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub method: String,
    pub address: String,
    pub fee: Money,
}

impl Delivery {
    /// Creates a delivery descriptor.
    pub fn new(method: impl Into<String>, address: impl Into<String>, fee: Money) -> Self {
        Delivery {
            method: method.into(),
            address: address.into(),
            fee,
        }
    }

    /// Renders the delivery line:
    /// `Delivery Method: <m>, Address: <a>, Fee: <f>`.
    pub fn get_delivery_info(&self) -> String {
        format!(
            "Delivery Method: {}, Address: {}, Fee: {}",
            self.method, self.address, self.fee
        )
    }
}

// =============================================================================
// Order
// =============================================================================

/// One customer buying one product in some quantity, shipped one way.
///
/// Quantity is NOT validated: zero or negative quantities are accepted
/// (the total simply reflects them). The storefront model trusts its
/// driver here, matching the delivery fee's non-validation.
#[derive(Debug, Clone, Copy)]
pub struct Order<'a> {
    pub customer: &'a LoyalCustomer,
    pub product: &'a Product,
    pub quantity: i64,
    pub delivery: &'a Delivery,
}

impl<'a> Order<'a> {
    /// Assembles an order over borrowed parts.
    pub fn new(
        customer: &'a LoyalCustomer,
        product: &'a Product,
        quantity: i64,
        delivery: &'a Delivery,
    ) -> Self {
        Order {
            customer,
            product,
            quantity,
            delivery,
        }
    }

    /// The order total, recomputed fresh on every call.
    pub fn total(&self) -> Money {
        self.product.calculate_price() * self.quantity + self.delivery.fee
    }

    /// Renders the order line:
    /// `Order for <customer>: <product> x <q>, Total with delivery: <total>`.
    pub fn get_order_summary(&self) -> String {
        format!(
            "Order for {}: {} x {}, Total with delivery: {}",
            self.customer.name,
            self.product.name,
            self.quantity,
            self.total()
        )
    }
}

// =============================================================================
// Payment
// =============================================================================

/// A payment method pointed at an order.
///
/// Processing is report-only: it recomputes the order total and emits it as
/// an informational event. Nothing transitions, nothing is persisted, the
/// method string is not checked against any known set.
#[derive(Debug, Clone)]
pub struct Payment<'a> {
    pub order: &'a Order<'a>,
    pub method: String,
}

impl<'a> Payment<'a> {
    /// Pairs an order with a payment method.
    pub fn new(order: &'a Order<'a>, method: impl Into<String>) -> Self {
        Payment {
            order,
            method: method.into(),
        }
    }

    /// The amount to charge: the same formula as [`Order::total`].
    pub fn total(&self) -> Money {
        self.order.total()
    }

    /// Reports the payment as a `tracing` info event. Side effect only.
    pub fn process_payment(&self) {
        info!(
            "Processing {} payment for {}. Total amount: {}",
            self.method,
            self.order.customer.name,
            self.total()
        );
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
