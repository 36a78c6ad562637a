//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  In many retail systems:                                            │
//! │    Rs.10.00 / 3 = Rs.3.33 (×3 = Rs.9.99)  → Lost a paisa!           │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Paisa                                        │
//! │    1000 paisa / 3 = 333 paisa (×3 = 999 paisa)                      │
//! │    We KNOW we lost 1 paisa, and handle it explicitly                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use karsaz_core::money::Money;
//!
//! // Create from paisa (preferred)
//! let price = Money::from_paisa(3000); // Rs.30.00
//!
//! // Arithmetic operations
//! let doubled = price * 2;                      // Rs.60.00
//! let total = price + Money::from_paisa(500);   // Rs.35.00
//!
//! // Parse operator-entered cash amounts
//! let tendered = Money::parse("200.00").unwrap();
//! assert_eq!(tendered.paisa(), 20000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::error::ValidationError;
use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (paisa).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds, discounts
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support so catalog seeds round-trip cleanly
///
/// Every monetary value in the system flows through this type:
/// catalog prices, cart lines, tax, totals, tendered cash, and change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paisa (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use karsaz_core::money::Money;
    ///
    /// let price = Money::from_paisa(3000); // Represents Rs.30.00
    /// assert_eq!(price.paisa(), 3000);
    /// ```
    #[inline]
    pub const fn from_paisa(paisa: i64) -> Self {
        Money(paisa)
    }

    /// Creates a Money value from major and minor units (rupees and paisa).
    ///
    /// ## Example
    /// ```rust
    /// use karsaz_core::money::Money;
    ///
    /// let price = Money::from_rupees_paisa(30, 50); // Rs.30.50
    /// assert_eq!(price.paisa(), 3050);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_rupees_paisa(-5, 50)` = -Rs.5.50, not -Rs.4.50
    #[inline]
    pub const fn from_rupees_paisa(rupees: i64, paisa: i64) -> Self {
        if rupees < 0 {
            Money(rupees * 100 - paisa)
        } else {
            Money(rupees * 100 + paisa)
        }
    }

    /// Parses a decimal amount as typed at the till ("200", "200.5",
    /// "200.50") into paisa.
    ///
    /// At most two fractional digits are accepted; a lone fractional digit
    /// means tens of paisa. Sign, empty strings, and anything non-numeric
    /// are rejected.
    ///
    /// ## Example
    /// ```rust
    /// use karsaz_core::money::Money;
    ///
    /// assert_eq!(Money::parse("200").unwrap().paisa(), 20000);
    /// assert_eq!(Money::parse("200.5").unwrap().paisa(), 20050);
    /// assert_eq!(Money::parse("200.50").unwrap().paisa(), 20050);
    /// assert!(Money::parse("two hundred").is_err());
    /// assert!(Money::parse("1.999").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();
        let invalid = || ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: "must be a decimal number like 200 or 200.50".to_string(),
        };

        let (whole, frac) = match input.split_once('.') {
            Some((w, f)) => (w, f),
            None => (input, ""),
        };

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let rupees: i64 = whole.parse().map_err(|_| invalid())?;
        let paisa: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        // A digit string can parse into an i64 whose paisa conversion
        // still overflows; checked math keeps absurd tenders an input
        // error instead of a wrapped negative amount.
        let total = rupees
            .checked_mul(100)
            .and_then(|r| r.checked_add(paisa))
            .ok_or_else(invalid)?;

        Ok(Money::from_paisa(total))
    }

    /// Returns the value in paisa (smallest currency unit).
    #[inline]
    pub const fn paisa(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (rupees) portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (paisa) portion (always 0-99).
    #[inline]
    pub const fn paisa_part(&self) -> i64 {
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

    /// Calculates tax on this amount.
    ///
    /// ## Implementation
    /// Integer math in basis points: `(amount * bps + 5000) / 10000`.
    /// The +5000 rounds half up; i128 intermediate prevents overflow on
    /// large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use karsaz_core::money::Money;
    /// use karsaz_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_paisa(16000);   // Rs.160.00
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(1000)); // 10%
    /// assert_eq!(tax.paisa(), 1600);             // Rs.16.00
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax_paisa = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_paisa(tax_paisa as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use karsaz_core::money::Money;
    ///
    /// let unit_price = Money::from_paisa(3000); // Rs.30.00
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.paisa(), 6000);     // Rs.60.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Subtracts a percentage discount and returns the reduced amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (500 = 5%)
    ///
    /// ## Example
    /// ```rust
    /// use karsaz_core::money::Money;
    ///
    /// let grand_total = Money::from_paisa(17600);           // Rs.176.00
    /// let discounted = grand_total.less_percentage(500);    // 5% off
    /// assert_eq!(discounted.paisa(), 16720);                // Rs.167.20
    /// ```
    pub fn less_percentage(&self, discount_bps: u32) -> Money {
        let discount_amount = (self.0 as i128 * discount_bps as i128 + 5000) / 10000;
        Money::from_paisa(self.0 - discount_amount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the amount exactly as it appears on receipts:
/// `Rs.` prefix, two fractional digits, sign in front.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}Rs.{}.{:02}", sign, self.rupees().abs(), self.paisa_part())
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
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
