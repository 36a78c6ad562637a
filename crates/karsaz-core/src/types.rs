//! # Domain Types
//!
//! Small domain types shared across the billing logic.
//!
//! - [`TaxRate`] - tax rate in basis points
//! - [`PaymentMethod`] - how the customer settles the bill

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (the shop's flat sales tax)
///
/// Basis points keep the rate an integer, so tax math never touches
/// floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a whole percentage (for receipt labels).
    ///
    /// Truncates sub-percent precision; the shop's rates are whole
    /// percentages.
    #[inline]
    pub const fn whole_percent(&self) -> u32 {
        self.0 / 100
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
// Payment Method
// =============================================================================

/// How the customer settles the bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash handed over the counter; change is returned.
    Cash,
    /// Card on the external terminal; earns the flat card discount.
    Card,
}

/// Error returned when a payment method token is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPaymentMethod;

/// Parses the operator-entered payment method token.
///
/// Matching is exact and case-sensitive: only `cash` and `card` are
/// accepted. Anything else ("Cash", "debit", "CARD") is unknown and the
/// session reports an invalid payment method.
impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            _ => Err(UnknownPaymentMethod),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1000);
        assert_eq!(rate.bps(), 1000);
        assert_eq!(rate.whole_percent(), 10);
    }

    #[test]
    fn test_payment_method_exact_tokens() {
        assert_eq!("cash".parse::<PaymentMethod>(), Ok(PaymentMethod::Cash));
        assert_eq!("card".parse::<PaymentMethod>(), Ok(PaymentMethod::Card));
    }

    #[test]
    fn test_payment_method_is_case_sensitive() {
        assert!("Cash".parse::<PaymentMethod>().is_err());
        assert!("CARD".parse::<PaymentMethod>().is_err());
        assert!("debit".parse::<PaymentMethod>().is_err());
        assert!("".parse::<PaymentMethod>().is_err());
    }
}
