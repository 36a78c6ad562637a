//! # karsaz-core: Pure Business Logic for Karsaz POS
//!
//! This crate is the **heart** of Karsaz POS. It contains all billing logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Karsaz POS Architecture                        │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  apps/terminal (karsaz-pos)                   │  │
//! │  │   Access Gate ──► Session Loop ──► Prompts ──► Exit Code      │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │              ★ karsaz-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │  │
//! │  │  │  money  │ │ catalog │ │  cart   │ │ receipt │ │validation│ │  │
//! │  │  │  Money  │ │ Catalog │ │  Cart   │ │ Receipt │ │  rules  │  │  │
//! │  │  │ TaxRate │ │ lookups │ │LineItem │ │ render  │ │ checks  │  │  │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │  │
//! │  │                                                               │  │
//! │  │  NO I/O • NO CONSOLE • NO CLOCK READS • PURE FUNCTIONS        │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Domain types (TaxRate, PaymentMethod, LineItem)
//! - [`catalog`] - Read-only item name → price lookups
//! - [`cart`] - Per-customer cart accumulation and billing math
//! - [`receipt`] - Fixed-layout receipt rendering
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Console, file system, and clock access are FORBIDDEN here;
//!    even the receipt timestamp is passed in by the caller
//! 3. **Integer Money**: All monetary values are in paisa (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use karsaz_core::cart::Cart;
//! use karsaz_core::money::Money;
//!
//! let mut cart = Cart::new();
//! cart.add_line("Egg", 2, Money::from_paisa(3000)).unwrap();
//! cart.add_line("Bread", 1, Money::from_paisa(10000)).unwrap();
//!
//! assert_eq!(cart.subtotal().paisa(), 16000);      // Rs.160.00
//! assert_eq!(cart.tax().paisa(), 1600);            // Rs.16.00  (10%)
//! assert_eq!(cart.grand_total().paisa(), 17600);   // Rs.176.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use karsaz_core::Money` instead of
// `use karsaz_core::money::Money`

pub use cart::{Cart, LineItem};
pub use catalog::{Catalog, CatalogEntry};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use receipt::{return_notice, Receipt, StoreHeader};
pub use types::{PaymentMethod, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax applied to every cart, in basis points (1000 = 10%).
///
/// ## Why a constant?
/// The shop charges one flat rate on everything. Per-item or per-region
/// rates would move this onto the catalog entries; the `TaxRate` type
/// already supports that without touching the cart math.
pub const TAX_RATE: types::TaxRate = types::TaxRate::from_bps(1000);

/// Discount applied to the grand total for card payments, in basis points
/// (500 = 5%).
pub const CARD_DISCOUNT_BPS: u32 = 500;

/// Maximum quantity of a single line item.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum lines allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and keeps receipts to a sane length.
pub const MAX_CART_LINES: usize = 100;
