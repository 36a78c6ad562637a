//! # Session Loop
//!
//! Drives repeated customer transactions as an explicit state machine.
//!
//! ## States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Session State Machine                          │
//! │                                                                     │
//! │   ┌──────────────────┐  END/end   ┌──────────┐                      │
//! │   │ AwaitingLineItem │ ─────────► │ Checkout │                      │
//! │   └──────────────────┘            └────┬─────┘                      │
//! │     ▲   │ known item + qty            │ receipt printed             │
//! │     └───┘ unknown item (no qty        ▼                             │
//! │           token consumed)      ┌───────────────────┐                │
//! │                                │ PaymentResolution │                │
//! │                                └────────┬──────────┘                │
//! │   cash: re-prompt until sufficient,     │ always                    │
//! │   card: discounted total,               ▼                           │
//! │   other: invalid method,         ┌─────────────┐  y/Y: reset cart,  │
//! │          proceeds unpaid         │ AskContinue │  next customer     │
//! │                                  └──────┬──────┘                    │
//! │                                         │ anything else             │
//! │                                         ▼                           │
//! │                                     Finished                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Re-expressing the nested prompt loops as named states makes every
//! transition a testable branch - in particular the invalid-payment-method
//! path, which proceeds to AskContinue without resolving payment.
//!
//! End of input anywhere resolves toward termination: item entry treats it
//! as `END`, the cash loop abandons payment, AskContinue terminates. No
//! state re-reads a closed input.

use std::io::{BufRead, Write};

use chrono::Local;
use tracing::{debug, info, warn};

use karsaz_core::validation::validate_item_name;
use karsaz_core::{return_notice, Cart, Catalog, Money, PaymentMethod, Receipt, StoreHeader};

use crate::console::Console;
use crate::error::AppResult;

// =============================================================================
// Session State
// =============================================================================

/// Where the session currently is for one customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    /// Reading item names and quantities into the cart.
    AwaitingLineItem,
    /// Printing the receipt for the finalized cart.
    Checkout,
    /// Reading the payment method and settling the bill.
    PaymentResolution,
    /// Asking whether another customer is waiting.
    AskContinue,
    /// Loop exit; farewell printed by the caller of `run`.
    Finished,
}

// =============================================================================
// Session
// =============================================================================

/// One operator session: a sequence of customer transactions over a single
/// cart that is reset between customers.
pub struct Session<'a, R, W> {
    console: &'a mut Console<R, W>,
    catalog: &'a Catalog,
    header: &'a StoreHeader,
    cart: Cart,
    customer_number: u32,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Creates a session over an authenticated console.
    pub fn new(
        console: &'a mut Console<R, W>,
        catalog: &'a Catalog,
        header: &'a StoreHeader,
    ) -> Self {
        Session {
            console,
            catalog,
            header,
            cart: Cart::new(),
            customer_number: 1,
        }
    }

    /// Runs the state machine until the operator stops it or input ends.
    pub fn run(mut self) -> AppResult<()> {
        info!("session started");
        self.announce_customer()?;

        let mut state = SessionState::AwaitingLineItem;
        while state != SessionState::Finished {
            state = match state {
                SessionState::AwaitingLineItem => self.await_line_item()?,
                SessionState::Checkout => self.checkout()?,
                SessionState::PaymentResolution => self.resolve_payment()?,
                SessionState::AskContinue => self.ask_continue()?,
                SessionState::Finished => unreachable!("loop exits before Finished"),
            };
        }

        self.console
            .write_line("Thank you for using the billing system. Goodbye!")?;
        info!(customers = self.customer_number, "session ended");
        Ok(())
    }

    fn announce_customer(&mut self) -> AppResult<()> {
        self.console
            .write_line(&format!("\n--- CUSTOMER {} ---", self.customer_number))?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // AwaitingLineItem
    // -------------------------------------------------------------------------

    /// Reads one item name (or the END token) and, for a known item, its
    /// quantity. An unknown item consumes NO quantity token - the very next
    /// token is the next item name.
    fn await_line_item(&mut self) -> AppResult<SessionState> {
        let token = self
            .console
            .prompt_token("Enter item and quantity (or type END to finish): ")?;

        let name = match token {
            Some(name) => name,
            // Input closed mid-entry: finish the cart as if END was typed.
            None => return Ok(SessionState::Checkout),
        };

        if name == "END" || name == "end" {
            return Ok(SessionState::Checkout);
        }

        let name = match validate_item_name(&name) {
            Ok(name) => name,
            Err(err) => {
                self.console.write_line(&err.to_string())?;
                return Ok(SessionState::AwaitingLineItem);
            }
        };

        if !self.catalog.exists(name) {
            self.console.write_line("Item not found in inventory.")?;
            debug!(item = %name, "unknown item rejected");
            return Ok(SessionState::AwaitingLineItem);
        }

        let quantity = match self.console.next_token()? {
            Some(token) => match token.parse::<i64>() {
                Ok(qty) => qty,
                Err(_) => {
                    self.console
                        .write_line("Invalid quantity. Entry discarded.")?;
                    return Ok(SessionState::AwaitingLineItem);
                }
            },
            None => return Ok(SessionState::Checkout),
        };

        let unit_price = self.catalog.price_of(name)?;
        match self.cart.add_line(name, quantity, unit_price) {
            Ok(()) => {
                debug!(item = %name, quantity, price = %unit_price, "line added");
            }
            Err(err) => {
                // Quantity out of range or cart full: report and discard
                // the entry, the session keeps going.
                self.console.write_line(&err.to_string())?;
            }
        }

        Ok(SessionState::AwaitingLineItem)
    }

    // -------------------------------------------------------------------------
    // Checkout
    // -------------------------------------------------------------------------

    /// Renders and prints the receipt exactly once, then moves on to
    /// payment.
    fn checkout(&mut self) -> AppResult<SessionState> {
        let receipt = Receipt::new(self.header, &self.cart, self.customer_number, Local::now());
        self.console.write_line("")?;
        self.console.write_text(&receipt.render())?;

        info!(
            bill = self.customer_number,
            lines = self.cart.line_count(),
            total = %self.cart.grand_total(),
            "receipt printed"
        );
        Ok(SessionState::PaymentResolution)
    }

    // -------------------------------------------------------------------------
    // PaymentResolution
    // -------------------------------------------------------------------------

    /// Reads the payment method token and settles accordingly. Whatever
    /// happens - cash, card, invalid token, or end of input - the session
    /// proceeds to AskContinue.
    fn resolve_payment(&mut self) -> AppResult<SessionState> {
        let token = self.console.prompt_token("Enter payment method (cash/card): ")?;

        match token.as_deref().map(str::parse::<PaymentMethod>) {
            Some(Ok(PaymentMethod::Cash)) => self.collect_cash()?,
            Some(Ok(PaymentMethod::Card)) => {
                let discounted = self.cart.card_discounted_total();
                self.console
                    .write_line("Card Payment Applied (5% Discount).")?;
                self.console
                    .write_line(&format!("Discounted Total: {discounted}"))?;
                info!(total = %discounted, "card payment applied");
            }
            Some(Err(_)) => {
                // The transaction proceeds without a resolved payment; the
                // next prompt is already "another customer?".
                self.console.write_line("Invalid payment method.")?;
                warn!(
                    method = token.as_deref().unwrap_or(""),
                    "invalid payment method, transaction left unpaid"
                );
            }
            None => {
                warn!("input ended before payment method");
            }
        }

        // Return policy goes out after every payment resolution, paid or
        // not.
        self.console.write_line(&return_notice())?;

        Ok(SessionState::AskContinue)
    }

    /// Cash loop: re-prompts until the tendered amount covers the grand
    /// total, then prints the change. Tendering the exact total yields
    /// Rs.0.00 change.
    fn collect_cash(&mut self) -> AppResult<()> {
        let due = self.cart.grand_total();

        loop {
            let token = match self.console.prompt_token("Cash Paid: ")? {
                Some(token) => token,
                None => {
                    warn!("input ended during cash payment, payment abandoned");
                    return Ok(());
                }
            };

            let tendered = match Money::parse(&token) {
                Ok(amount) => amount,
                Err(err) => {
                    self.console.write_line(&err.to_string())?;
                    continue;
                }
            };

            if tendered < due {
                self.console
                    .write_line("Insufficient Payment. Please enter a sufficient amount.")?;
                debug!(tendered = %tendered, due = %due, "insufficient cash");
                continue;
            }

            let change = tendered - due;
            self.console.write_line(&format!("Change: {change}"))?;
            info!(tendered = %tendered, change = %change, "cash payment settled");
            return Ok(());
        }
    }

    // -------------------------------------------------------------------------
    // AskContinue
    // -------------------------------------------------------------------------

    /// `y`/`Y` starts the next customer with a fresh cart; any other
    /// token (or end of input) terminates the loop.
    fn ask_continue(&mut self) -> AppResult<SessionState> {
        let token = self
            .console
            .prompt_token("Is there another customer? (y/n): ")?;

        match token.as_deref() {
            Some("y") | Some("Y") => {
                self.cart.reset();
                self.customer_number += 1;
                self.announce_customer()?;
                Ok(SessionState::AwaitingLineItem)
            }
            _ => Ok(SessionState::Finished),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
