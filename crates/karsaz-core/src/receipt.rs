//! # Receipt Module
//!
//! Renders a finalized cart into fixed-layout receipt text.
//!
//! Rendering is a pure function of the cart, the store header, the bill
//! number, and a timestamp supplied by the caller. Nothing here reads the
//! clock or writes to the console, and the cart is never mutated.
//!
//! ## Layout
//! ```text
//! ─────────────────────────────────────────────────────────────────────
//!                          KARSAZ QUICK SHOP
//!                    NORE IV Market, Karsaz, Karachi.
//!                      0333-3168235    0333-3168241
//! Bill No: 1
//! Date & Time: Mon Aug 31 14:05:00 2026
//! ---------------------------------------------------------------------
//! Description                    Qty            Rate          Amount
//! Egg                              2        Rs.30.00        Rs.60.00
//! Bread                            1       Rs.100.00       Rs.100.00
//! ---------------------------------------------------------------------
//!                                Net Amount:               Rs.160.00
//!                                Tax (10%):                 Rs.16.00
//!                                Total Amount:             Rs.176.00
//! ─────────────────────────────────────────────────────────────────────
//! ```

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::TAX_RATE;

/// Total character width of the receipt.
const RECEIPT_WIDTH: usize = 69;

// =============================================================================
// Store Header
// =============================================================================

/// Fixed store identity printed at the top of every receipt.
///
/// Explicit configuration passed in at startup, not a hidden global, so a
/// different branch (or a loadable config file) only has to construct a
/// different header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreHeader {
    /// Store name, centered on the first line.
    pub store_name: String,

    /// Street address line.
    pub address: String,

    /// Primary contact number.
    pub phone_primary: String,

    /// Secondary contact number.
    pub phone_secondary: String,
}

// =============================================================================
// Receipt
// =============================================================================

/// A receipt ready to render: borrows the finalized cart plus the fixed
/// header, and carries the per-customer bill number and timestamp.
#[derive(Debug)]
pub struct Receipt<'a> {
    header: &'a StoreHeader,
    cart: &'a Cart,
    bill_number: u32,
    issued_at: DateTime<Local>,
}

impl<'a> Receipt<'a> {
    /// Creates a receipt for a finalized cart.
    ///
    /// The timestamp is injected by the caller (the session loop passes
    /// `Local::now()`); tests pass a fixed instant.
    pub fn new(
        header: &'a StoreHeader,
        cart: &'a Cart,
        bill_number: u32,
        issued_at: DateTime<Local>,
    ) -> Self {
        Receipt {
            header,
            cart,
            bill_number,
            issued_at,
        }
    }

    /// Renders the full receipt text.
    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header block: centered store identity, then bill metadata.
        out.push_str(&centered(&self.header.store_name));
        out.push('\n');
        out.push_str(&centered(&self.header.address));
        out.push('\n');
        out.push_str(&centered(&format!(
            "{}    {}",
            self.header.phone_primary, self.header.phone_secondary
        )));
        out.push('\n');
        out.push_str(&format!("Bill No: {}\n", self.bill_number));
        out.push_str(&format!(
            "Date & Time: {}\n",
            self.issued_at.format("%a %b %e %H:%M:%S %Y")
        ));

        // Item table, lines in insertion order.
        out.push_str(&rule());
        out.push_str(&format!(
            "{:<28}{:>5}{:>16}{:>16}\n",
            "Description", "Qty", "Rate", "Amount"
        ));
        for line in self.cart.lines() {
            out.push_str(&format!(
                "{:<28}{:>5}{:>16}{:>16}\n",
                line.name,
                line.quantity,
                line.unit_price.to_string(),
                line.line_total().to_string()
            ));
        }

        // Summary block.
        out.push_str(&rule());
        out.push_str(&summary_line("Net Amount:", &self.cart.subtotal().to_string()));
        out.push_str(&summary_line(
            &format!("Tax ({}%):", TAX_RATE.whole_percent()),
            &self.cart.tax().to_string(),
        ));
        out.push_str(&summary_line(
            "Total Amount:",
            &self.cart.grand_total().to_string(),
        ));

        out
    }
}

/// `Display` delegates to [`Receipt::render`] so receipts drop straight
/// into `write!`.
impl fmt::Display for Receipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// =============================================================================
// Return Notice
// =============================================================================

/// Trailing return-policy notice, set off by underscore rules.
///
/// Printed once per customer after payment is resolved (whatever the
/// outcome), not as part of the receipt body.
pub fn return_notice() -> String {
    let line = "_".repeat(RECEIPT_WIDTH);
    format!(
        "{line}\n{}\n{line}",
        centered("No Return without receipt in 7 Days.")
    )
}

// =============================================================================
// Layout Helpers
// =============================================================================

/// Centers text within the receipt width, without trailing padding.
fn centered(text: &str) -> String {
    format!("{:^width$}", text, width = RECEIPT_WIDTH)
        .trim_end()
        .to_string()
}

/// Horizontal rule separating receipt sections.
fn rule() -> String {
    format!("{}\n", "-".repeat(RECEIPT_WIDTH))
}

/// One right-hand summary line (label left, amount right).
fn summary_line(label: &str, amount: &str) -> String {
    format!("{:>48}{:>21}\n", label, amount)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use chrono::TimeZone;

    fn test_header() -> StoreHeader {
        StoreHeader {
            store_name: "KARSAZ QUICK SHOP".to_string(),
            address: "NORE IV Market, Karsaz, Karachi.".to_string(),
            phone_primary: "0333-3168235".to_string(),
            phone_secondary: "0333-3168241".to_string(),
        }
    }

    fn test_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_line("Egg", 2, Money::from_paisa(3000)).unwrap();
        cart.add_line("Bread", 1, Money::from_paisa(10000)).unwrap();
        cart
    }

    fn test_timestamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 31, 14, 5, 0).unwrap()
    }

    #[test]
    fn test_header_block() {
        let header = test_header();
        let cart = test_cart();
        let text = Receipt::new(&header, &cart, 1, test_timestamp()).render();

        assert!(text.contains("KARSAZ QUICK SHOP"));
        assert!(text.contains("NORE IV Market, Karsaz, Karachi."));
        assert!(text.contains("0333-3168235    0333-3168241"));
        assert!(text.contains("Bill No: 1"));
        assert!(text.contains("Date & Time: "));
        assert!(text.contains("2026"));
    }

    #[test]
    fn test_item_table_in_insertion_order() {
        let header = test_header();
        let cart = test_cart();
        let text = Receipt::new(&header, &cart, 1, test_timestamp()).render();

        let egg_pos = text.find("Egg").unwrap();
        let bread_pos = text.find("Bread").unwrap();
        assert!(egg_pos < bread_pos, "lines must render in entry order");

        // Line amounts: 2 × Rs.30.00 and 1 × Rs.100.00
        assert!(text.contains("Rs.60.00"));
        assert!(text.contains("Rs.100.00"));
    }

    #[test]
    fn test_summary_block() {
        let header = test_header();
        let cart = test_cart();
        let text = Receipt::new(&header, &cart, 1, test_timestamp()).render();

        assert!(text.contains("Net Amount:"));
        assert!(text.contains("Rs.160.00"));
        assert!(text.contains("Tax (10%):"));
        assert!(text.contains("Rs.16.00"));
        assert!(text.contains("Total Amount:"));
        assert!(text.contains("Rs.176.00"));
    }

    #[test]
    fn test_bill_number_advances_with_customers() {
        let header = test_header();
        let cart = test_cart();
        let text = Receipt::new(&header, &cart, 7, test_timestamp()).render();
        assert!(text.contains("Bill No: 7"));
    }

    #[test]
    fn test_render_does_not_mutate_cart() {
        let header = test_header();
        let cart = test_cart();
        let before = cart.clone();

        let _ = Receipt::new(&header, &cart, 1, test_timestamp()).render();

        assert_eq!(cart.line_count(), before.line_count());
        assert_eq!(cart.subtotal(), before.subtotal());
    }

    #[test]
    fn test_return_notice_between_underscore_rules() {
        let notice = return_notice();
        let lines: Vec<&str> = notice.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "_".repeat(RECEIPT_WIDTH));
        assert_eq!(lines[2], "_".repeat(RECEIPT_WIDTH));
        assert!(lines[1].contains("No Return without receipt in 7 Days."));
    }

    #[test]
    fn test_empty_cart_still_renders_summary() {
        let header = test_header();
        let cart = Cart::new();
        let text = Receipt::new(&header, &cart, 1, test_timestamp()).render();

        assert!(text.contains("Net Amount:"));
        assert!(text.contains("Rs.0.00"));
    }
}
