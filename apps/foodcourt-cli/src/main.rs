//! # Food Court Terminal Entry Point
//!
//! Shows the menu, takes an order, prints the bill and saves it to
//! `bill.txt`. The setup lives in `lib.rs` for testability.

fn main() {
    foodcourt_cli::run();
}
