//! # Cart Module
//!
//! Accumulates line items for one customer and computes the bill.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    One Customer, One Cart                           │
//! │                                                                     │
//! │  reset() ──► add_line() ──► add_line() ──► ... ──► receipt          │
//! │                                                       │             │
//! │              subtotal / tax / grand_total             ▼             │
//! │              recomputed from accumulators        payment resolved   │
//! │                                                       │             │
//! │  next customer ◄──────────── reset() ◄────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `subtotal == Σ(unit_price × quantity)` over all lines, at all times
//! - `total_quantity == Σ(quantity)` over all lines, at all times
//! - Lines keep insertion order; duplicate names stay separate lines
//! - Exactly one cart is live at a time, owned by the session iteration

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::validate_quantity;
use crate::{CoreError, CARD_DISCOUNT_BPS, MAX_CART_LINES, TAX_RATE};

// =============================================================================
// Line Item
// =============================================================================

/// One (item, quantity, unit price) entry in a cart.
///
/// ## Price Freezing
/// The unit price is captured when the line is added. The line is
/// immutable afterwards and owned exclusively by its cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name as shown on the receipt.
    pub name: String,

    /// Unit price frozen at the moment the line was added.
    pub unit_price: Money,

    /// Quantity sold (always > 0).
    pub quantity: i64,
}

impl LineItem {
    /// Calculates the line amount (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// Accumulated line items for one customer's transaction.
///
/// The running `subtotal` and `total_quantity` accumulators are updated on
/// every `add_line` so billing reads are O(1); the invariant against the
/// line list is enforced by tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<LineItem>,
    subtotal: Money,
    total_quantity: i64,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Appends a line item.
    ///
    /// The unit price must already have been resolved through the catalog;
    /// the cart does not second-guess it. Duplicate names are kept as
    /// separate lines in entry order, exactly as rung up.
    ///
    /// ## Errors
    /// - `Validation` when quantity is not positive
    /// - `QuantityTooLarge` when quantity exceeds the per-line maximum
    /// - `CartTooLarge` when the cart is already at its line limit
    pub fn add_line(
        &mut self,
        name: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> CoreResult<()> {
        validate_quantity(quantity).map_err(|err| match err {
            crate::ValidationError::OutOfRange { .. } => CoreError::QuantityTooLarge {
                requested: quantity,
                max: crate::MAX_ITEM_QUANTITY,
            },
            other => CoreError::Validation(other),
        })?;

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        let line = LineItem {
            name: name.into(),
            unit_price,
            quantity,
        };
        self.subtotal += line.line_total();
        self.total_quantity += quantity;
        self.lines.push(line);
        Ok(())
    }

    /// Sum of unit price × quantity over all lines, before tax.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Tax on the subtotal at the shop's flat rate.
    #[inline]
    pub fn tax(&self) -> Money {
        self.subtotal.calculate_tax(TAX_RATE)
    }

    /// Subtotal plus tax, before any payment-method discount.
    #[inline]
    pub fn grand_total(&self) -> Money {
        self.subtotal + self.tax()
    }

    /// Grand total after the flat card discount.
    ///
    /// Only relevant when the customer pays by card; cash customers pay
    /// the grand total.
    #[inline]
    pub fn card_discounted_total(&self) -> Money {
        self.grand_total().less_percentage(CARD_DISCOUNT_BPS)
    }

    /// Total quantity across all lines.
    #[inline]
    pub fn total_quantity(&self) -> i64 {
        self.total_quantity
    }

    /// Number of lines in the cart.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines in insertion order.
    #[inline]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Clears all lines and accumulators back to empty/zero.
    ///
    /// Called at the start of each new customer transaction, never
    /// mid-transaction. Idempotent.
    pub fn reset(&mut self) {
        self.lines.clear();
        self.subtotal = Money::zero();
        self.total_quantity = 0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// The worked example from the shop floor: 2 eggs and a loaf.
    fn egg_and_bread_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_line("Egg", 2, Money::from_paisa(3000)).unwrap();
        cart.add_line("Bread", 1, Money::from_paisa(10000)).unwrap();
        cart
    }

    #[test]
    fn test_subtotal_matches_line_sum() {
        let cart = egg_and_bread_cart();

        let line_sum: i64 = cart.lines().iter().map(|l| l.line_total().paisa()).sum();
        assert_eq!(cart.subtotal().paisa(), line_sum);
        assert_eq!(cart.subtotal().paisa(), 16000); // Rs.160.00
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_billing_pipeline() {
        let cart = egg_and_bread_cart();

        assert_eq!(cart.tax().paisa(), 1600); // Rs.16.00
        assert_eq!(cart.grand_total().paisa(), 17600); // Rs.176.00
        assert_eq!(cart.card_discounted_total().paisa(), 16720); // Rs.167.20
    }

    #[test]
    fn test_grand_total_is_subtotal_plus_tax() {
        let cart = egg_and_bread_cart();
        assert_eq!(cart.grand_total(), cart.subtotal() + cart.tax());
    }

    #[test]
    fn test_duplicate_names_stay_separate_lines() {
        let mut cart = Cart::new();
        cart.add_line("Egg", 2, Money::from_paisa(3000)).unwrap();
        cart.add_line("Egg", 1, Money::from_paisa(3000)).unwrap();

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.subtotal().paisa(), 9000);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let cart = egg_and_bread_cart();
        let names: Vec<&str> = cart.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Egg", "Bread"]);
    }

    #[test]
    fn test_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        assert!(cart.add_line("Egg", 0, Money::from_paisa(3000)).is_err());
        assert!(cart.add_line("Egg", -2, Money::from_paisa(3000)).is_err());
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::zero());
    }

    #[test]
    fn test_rejects_oversized_quantity() {
        let mut cart = Cart::new();
        let err = cart
            .add_line("Egg", 1000, Money::from_paisa(3000))
            .unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { .. }));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_rejects_overfull_cart() {
        let mut cart = Cart::new();
        for i in 0..MAX_CART_LINES {
            cart.add_line(format!("Item{i}"), 1, Money::from_paisa(100))
                .unwrap();
        }
        let err = cart
            .add_line("Overflow", 1, Money::from_paisa(100))
            .unwrap_err();
        assert!(matches!(err, CoreError::CartTooLarge { .. }));
        assert_eq!(cart.line_count(), MAX_CART_LINES);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut cart = egg_and_bread_cart();

        cart.reset();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::zero());
        assert_eq!(cart.total_quantity(), 0);

        // Resetting an already-empty cart changes nothing.
        cart.reset();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::zero());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_empty_cart_bills_zero() {
        let cart = Cart::new();
        assert_eq!(cart.subtotal(), Money::zero());
        assert_eq!(cart.tax(), Money::zero());
        assert_eq!(cart.grand_total(), Money::zero());
        assert_eq!(cart.card_discounted_total(), Money::zero());
    }
}
