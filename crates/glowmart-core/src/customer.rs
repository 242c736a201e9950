//! # Customer Module
//!
//! Customer identity: the `Person` trait and the loyal customer.
//!
//! Note what is NOT here: customers have no discount capability. The
//! `Discountable` trait in [`crate::catalog`] requires the implementor to
//! own the price being discounted, and a customer owns no price. Discounts
//! belong to products; loyalty points are an accrual counter with no
//! consuming business rule yet.

use serde::{Deserialize, Serialize};

// =============================================================================
// Person Trait
// =============================================================================

/// Identity shared by all person-like roles in the store.
pub trait Person {
    /// Display name.
    fn name(&self) -> &str;

    /// Contact email.
    fn email(&self) -> &str;

    /// Renders the identity line: `Name: <n>, Email: <e>`.
    fn get_person_info(&self) -> String {
        format!("Name: {}, Email: {}", self.name(), self.email())
    }
}

// =============================================================================
// Loyal Customer
// =============================================================================

/// A repeat customer with a loyalty-points balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyalCustomer {
    pub name: String,
    pub email: String,
    /// Accrued loyalty points. Nothing spends these yet.
    pub loyalty_points: u32,
}

impl LoyalCustomer {
    /// Creates a customer with an opening points balance.
    pub fn new(name: impl Into<String>, email: impl Into<String>, loyalty_points: u32) -> Self {
        LoyalCustomer {
            name: name.into(),
            email: email.into(),
            loyalty_points,
        }
    }

    /// Renders the customer line:
    /// `Loyal Customer: <n>, Email: <e>, Points: <p>`.
    pub fn get_customer_info(&self) -> String {
        format!(
            "Loyal Customer: {}, Email: {}, Points: {}",
            self.name, self.email, self.loyalty_points
        )
    }
}

impl Person for LoyalCustomer {
    fn name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> &str {
        &self.email
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_info() {
        let customer = LoyalCustomer::new("Aizhan", "aizhan@example.com", 120);
        assert_eq!(
            customer.get_person_info(),
            "Name: Aizhan, Email: aizhan@example.com"
        );
    }

    #[test]
    fn test_customer_info() {
        let customer = LoyalCustomer::new("Aizhan", "aizhan@example.com", 120);
        assert_eq!(
            customer.get_customer_info(),
            "Loyal Customer: Aizhan, Email: aizhan@example.com, Points: 120"
        );
    }

    #[test]
    fn test_zero_points_customer() {
        let customer = LoyalCustomer::new("Dana", "dana@example.com", 0);
        assert_eq!(customer.loyalty_points, 0);
        assert_eq!(
            customer.get_customer_info(),
            "Loyal Customer: Dana, Email: dana@example.com, Points: 0"
        );
    }
}
