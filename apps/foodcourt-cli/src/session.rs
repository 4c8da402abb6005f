//! # Order Session
//!
//! One customer's walk through the terminal, from menu to printed bill.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Start ──► DisplayingMenu ──► CollectingOrder ──► AskingStudentStatus   │
//! │                                 │        ▲                 │            │
//! │                                 │  bad   │                 ▼            │
//! │                                 └─input──┘             AskingTip        │
//! │                                 (message,                  │            │
//! │                                  re-prompt)                ▼            │
//! │                                                        Rendering        │
//! │                                                            │            │
//! │                                                            ▼            │
//! │                                                          Done           │
//! │                                                                         │
//! │  Every validation failure is recovered inside its own state.            │
//! │  `0` (or end of input) is the only way out of CollectingOrder.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::Local;
use foodcourt_core::billing::{resolve_tip, Bill, TipResponse};
use foodcourt_core::catalog::Catalog;
use foodcourt_core::order::{MenuChoice, Order};
use foodcourt_core::receipt::Receipt;
use foodcourt_core::validation::{parse_choice, parse_quantity, parse_yes_no};
use foodcourt_core::{CoreError, CustomerStatus, Money};
use tracing::{debug, error, info, warn};

use crate::bill_number::BillNumberSource;
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::input::TokenReader;
use crate::persist;

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Start,
    DisplayingMenu,
    CollectingOrder,
    AskingStudentStatus,
    AskingTip,
    Rendering,
    Done,
}

/// What a finished session produced.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub receipt: Receipt,
    pub status: CustomerStatus,
    /// `None` when the receipt file could not be written.
    pub saved_to: Option<PathBuf>,
}

/// Interactive ordering session over any line-based input and any output.
pub struct OrderSession<R, W, S> {
    config: AppConfig,
    catalog: Catalog,
    order: Order,
    state: SessionState,
    input: TokenReader<R>,
    output: W,
    bill_numbers: S,
}

impl<R, W, S> OrderSession<R, W, S>
where
    R: BufRead,
    W: Write,
    S: BillNumberSource,
{
    pub fn new(config: AppConfig, catalog: Catalog, input: R, output: W, bill_numbers: S) -> Self {
        let order = Order::new(&catalog);
        OrderSession {
            config,
            catalog,
            order,
            state: SessionState::Start,
            input: TokenReader::new(input),
            output,
            bill_numbers,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Runs the whole session.
    ///
    /// Only a failing console stream ends it early; every other problem is
    /// reported to the customer and recovered from.
    pub fn run(mut self) -> AppResult<SessionOutcome> {
        self.display_menu()?;
        self.collect_order()?;
        let status = self.ask_student_status()?;
        let tip = self.ask_tip()?;
        let outcome = self.render_bill(status, tip)?;
        self.transition(SessionState::Done);
        Ok(outcome)
    }

    fn transition(&mut self, next: SessionState) {
        debug!(from = ?self.state, to = ?next, "Session state change");
        self.state = next;
    }

    // =========================================================================
    // Menu
    // =========================================================================

    pub fn display_menu(&mut self) -> AppResult<()> {
        self.transition(SessionState::DisplayingMenu);
        let menu = self.catalog.render_menu(&self.config.store);
        self.output.write_all(menu.as_bytes())?;
        self.output.flush()?;
        info!("Displayed the menu");
        Ok(())
    }

    // =========================================================================
    // Order Collection
    // =========================================================================

    /// Repeats the choice/quantity prompts until `0` is entered.
    ///
    /// Invalid choices and quantities print a message and re-prompt without
    /// touching the order. End of input is treated like `0`.
    pub fn collect_order(&mut self) -> AppResult<()> {
        self.transition(SessionState::CollectingOrder);
        info!("Started taking menu choices");

        let max = self.catalog.len();
        loop {
            write!(self.output, "\nEnter your choice (1-{max}) or 0 to finish: ")?;
            self.output.flush()?;

            let Some(token) = self.input.next_token()? else {
                info!("Input ended while ordering");
                break;
            };

            let index = match parse_choice(&token, max) {
                Ok(MenuChoice::Done) => break,
                Ok(MenuChoice::Item(index)) => index,
                Err(err) => {
                    self.input.discard_line();
                    writeln!(
                        self.output,
                        "Invalid choice! Please choose a number between 1 and {max}."
                    )?;
                    warn!(%token, %err, "Invalid choice");
                    continue;
                }
            };

            let name = match self.catalog.get(index) {
                Some(entry) => entry.name.clone(),
                None => continue,
            };

            write!(self.output, "How many {name} do you want? ")?;
            self.output.flush()?;

            let Some(token) = self.input.next_token()? else {
                info!("Input ended while ordering");
                break;
            };

            let added = parse_quantity(&token)
                .map_err(CoreError::from)
                .and_then(|qty| self.order.select_item(MenuChoice::Item(index), qty).map(|()| qty));

            match added {
                Ok(qty) => info!(item = %name, quantity = qty, "Item ordered"),
                Err(err) => {
                    self.input.discard_line();
                    writeln!(
                        self.output,
                        "Invalid quantity! Please enter a non-negative number."
                    )?;
                    warn!(item = %name, %token, %err, "Invalid quantity");
                }
            }
        }

        info!(
            items = self.order.total_quantity(),
            "Finished taking menu choices"
        );
        Ok(())
    }

    // =========================================================================
    // Student Status / Tip
    // =========================================================================

    pub fn ask_student_status(&mut self) -> AppResult<CustomerStatus> {
        self.transition(SessionState::AskingStudentStatus);
        let is_student = self.ask_yes_no("\nAre you a student? (y/n): ")?;
        let status = CustomerStatus::from_is_student(is_student);
        info!(?status, "Customer status recorded");
        Ok(status)
    }

    /// Asks once for a tip. A rejected amount becomes $0.00 without a retry.
    pub fn ask_tip(&mut self) -> AppResult<Money> {
        self.transition(SessionState::AskingTip);

        let response = if self.ask_yes_no("\nWould you like to add a tip? (y/n): ")? {
            write!(self.output, "Enter the tip amount: $")?;
            self.output.flush()?;
            TipResponse::Amount(self.input.next_token()?)
        } else {
            TipResponse::Declined
        };

        let outcome = resolve_tip(&response);
        if let Some(err) = outcome.rejected {
            self.input.discard_line();
            writeln!(self.output, "Invalid tip amount! Setting tip to $0.")?;
            warn!(%err, "Invalid tip amount");
        } else if outcome.tip.is_positive() {
            info!(tip = %outcome.tip, "Tip added");
        }

        Ok(outcome.tip)
    }

    fn ask_yes_no(&mut self, prompt: &str) -> AppResult<bool> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(self
            .input
            .next_token()?
            .is_some_and(|token| parse_yes_no(&token)))
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Prints the bill and saves a copy to the configured receipt file.
    ///
    /// A failed save is reported and logged; the console bill still stands.
    pub fn render_bill(&mut self, status: CustomerStatus, tip: Money) -> AppResult<SessionOutcome> {
        self.transition(SessionState::Rendering);

        info!(?status, "Calculating tax");
        let bill = Bill::compute(&self.order, &self.catalog, status, self.config.tax_rate(), tip);

        let receipt = Receipt::new(
            self.bill_numbers.next_bill_number(),
            Local::now().naive_local(),
            self.config.store.clone(),
            &self.order,
            &self.catalog,
            bill,
        );

        self.output.write_all(receipt.render().as_bytes())?;
        self.output.flush()?;
        info!(
            bill_number = %receipt.bill_number,
            subtotal = %bill.subtotal,
            tax = %bill.tax,
            tip = %bill.tip,
            total = %bill.total,
            "Printed bill"
        );

        let path = self.config.receipt_path.clone();
        let saved_to = match persist::write_receipt(&path, &receipt) {
            Ok(()) => Some(path),
            Err(err) => {
                writeln!(self.output, "Error writing to the bill file!")?;
                self.output.flush()?;
                error!(%err, "Error writing to the bill file");
                None
            }
        };

        Ok(SessionOutcome {
            receipt,
            status,
            saved_to,
        })
    }
}
