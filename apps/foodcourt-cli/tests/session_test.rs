//! End-to-end sessions driven through in-memory stdin/stdout.

use std::fs;
use std::io::Cursor;

use foodcourt_cli::bill_number::FixedBillNumber;
use foodcourt_cli::config::AppConfig;
use foodcourt_cli::session::{OrderSession, SessionOutcome, SessionState};
use foodcourt_core::catalog::Catalog;
use foodcourt_core::receipt::BillNumber;
use foodcourt_core::{CustomerStatus, Money};
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> AppConfig {
    AppConfig {
        receipt_path: dir.path().join("bill.txt"),
        activity_log_path: dir.path().join("activity_log.txt"),
        ..AppConfig::default()
    }
}

fn fixed_number() -> FixedBillNumber {
    FixedBillNumber(BillNumber::new(1234).unwrap())
}

fn run_with(config: AppConfig, input: &str) -> (SessionOutcome, String) {
    let mut output = Vec::new();
    let session = OrderSession::new(
        config,
        Catalog::food_court(),
        Cursor::new(input),
        &mut output,
        fixed_number(),
    );
    let outcome = session.run().expect("session should complete");
    (outcome, String::from_utf8(output).unwrap())
}

fn run_session(input: &str) -> (SessionOutcome, String, TempDir) {
    let dir = TempDir::new().unwrap();
    let (outcome, output) = run_with(config_in(&dir), input);
    (outcome, output, dir)
}

#[test]
fn test_two_cheeseburgers_and_bacon_no_student_no_tip() {
    let (outcome, output, dir) = run_session("1\n2\n3\n1\n0\nn\nn\n");

    let bill = outcome.receipt.bill;
    assert_eq!(bill.subtotal.cents(), 2575);
    assert_eq!(bill.tax.cents(), 232);
    assert_eq!(bill.tip, Money::zero());
    assert_eq!(bill.total.cents(), 2807);
    assert_eq!(outcome.status, CustomerStatus::General);

    assert!(output.contains("Welcome to Ohlone College Food Court"));
    assert!(output.contains("How many Cheeseburger do you want? "));
    assert!(output.contains("How many Bacon Cheeseburger do you want? "));
    assert!(output.contains("Bill Number: 1234"));
    assert!(output.contains("Total:       $28.07"));

    let saved = outcome.saved_to.expect("receipt saved");
    assert_eq!(saved, dir.path().join("bill.txt"));
    let file = fs::read_to_string(saved).unwrap();
    assert_eq!(file, outcome.receipt.render());
    assert!(output.contains(&file));
}

#[test]
fn test_immediate_done_for_student() {
    let (outcome, output, _dir) = run_session("0\ny\nn\n");

    let bill = outcome.receipt.bill;
    assert_eq!(bill.subtotal, Money::zero());
    assert_eq!(bill.tax, Money::zero());
    assert_eq!(bill.tip, Money::zero());
    assert_eq!(bill.total, Money::zero());
    assert_eq!(outcome.status, CustomerStatus::Student);
    assert!(outcome.receipt.lines.is_empty());

    assert_eq!(output.matches("Enter your choice (1-5) or 0 to finish: ").count(), 1);
    assert!(!output.contains("How many"));
}

#[test]
fn test_veggie_burger_with_two_dollar_tip() {
    let (outcome, output, _dir) = run_session("2\n1\n0\nn\ny\n2\n");

    let bill = outcome.receipt.bill;
    assert_eq!(bill.subtotal.cents(), 975);
    assert_eq!(bill.tax.cents(), 88);
    assert_eq!(bill.tip.cents(), 200);
    assert_eq!(bill.total.cents(), 1263);
    assert!(output.contains("Enter the tip amount: $"));
    assert!(output.contains("Tip:        $2.00"));
}

#[test]
fn test_out_of_range_choices_do_not_mutate_or_end_loop() {
    let (outcome, output, _dir) = run_session("6\n-1\nabc\n1\n1\n0\nn\nn\n");

    assert_eq!(
        output
            .matches("Invalid choice! Please choose a number between 1 and 5.")
            .count(),
        3
    );
    assert_eq!(output.matches("Enter your choice (1-5) or 0 to finish: ").count(), 5);
    assert_eq!(outcome.receipt.lines.len(), 1);
    assert_eq!(outcome.receipt.lines[0].quantity, 1);
}

#[test]
fn test_bad_quantities_are_rejected_and_reprompted() {
    let (outcome, output, _dir) = run_session("1\n-2\n1\nxyz\n1\n3\n0\nn\nn\n");

    assert_eq!(
        output
            .matches("Invalid quantity! Please enter a non-negative number.")
            .count(),
        2
    );
    assert_eq!(outcome.receipt.lines[0].name, "Cheeseburger");
    assert_eq!(outcome.receipt.lines[0].quantity, 3);
}

#[test]
fn test_repeated_item_accumulates() {
    let (outcome, _output, _dir) = run_session("4\n1\n4\n2\n4\n0\n0\nn\nn\n");

    assert_eq!(outcome.receipt.lines.len(), 1);
    assert_eq!(outcome.receipt.lines[0].name, "Mushroom Burger");
    assert_eq!(outcome.receipt.lines[0].quantity, 3);
    assert_eq!(outcome.receipt.bill.subtotal.cents(), 2697);
}

#[test]
fn test_negative_tip_defaults_to_zero_without_retry() {
    let (outcome, output, _dir) = run_session("1\n1\n0\nn\ny\n-5\n");

    assert_eq!(outcome.receipt.bill.tip, Money::zero());
    assert!(output.contains("Invalid tip amount! Setting tip to $0."));
    assert_eq!(output.matches("Enter the tip amount: $").count(), 1);
    assert_eq!(outcome.receipt.bill.total.cents(), 825 + 74);
}

#[test]
fn test_non_numeric_tip_defaults_to_zero() {
    let (outcome, output, _dir) = run_session("1\n1\n0\ny\ny\nplenty\n");

    assert_eq!(outcome.receipt.bill.tip, Money::zero());
    assert_eq!(outcome.receipt.bill.total.cents(), 825);
    assert!(output.contains("Invalid tip amount! Setting tip to $0."));
}

#[test]
fn test_rejected_line_leftovers_are_discarded() {
    let (outcome, _output, _dir) = run_session("9 1 1\n2\n1\n0\nn\nn\n");

    assert_eq!(outcome.receipt.lines.len(), 1);
    assert_eq!(outcome.receipt.lines[0].name, "Veggie Burger");
}

#[test]
fn test_answers_on_one_line() {
    let (outcome, _output, _dir) = run_session("1 2 3 1 0 n n\n");

    assert_eq!(outcome.receipt.bill.total.cents(), 2807);
}

#[test]
fn test_end_of_input_finishes_session() {
    let (outcome, output, _dir) = run_session("1\n");

    assert!(outcome.receipt.lines.is_empty());
    assert_eq!(outcome.status, CustomerStatus::General);
    assert!(output.contains("Total:        $0.00"));
}

#[test]
fn test_done_stops_collection_without_mutation() {
    let dir = TempDir::new().unwrap();
    let mut output = Vec::new();
    let mut session = OrderSession::new(
        config_in(&dir),
        Catalog::food_court(),
        Cursor::new("5\n2\n0\n1\n9\n"),
        &mut output,
        fixed_number(),
    );

    session.collect_order().unwrap();

    assert_eq!(session.state(), SessionState::CollectingOrder);
    assert_eq!(session.order().quantities(), &[0, 0, 0, 0, 2]);
}

#[test]
fn test_unwritable_receipt_is_reported_and_run_continues() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig {
        receipt_path: dir.path().join("missing/dir/bill.txt"),
        ..config_in(&dir)
    };

    let (outcome, output) = run_with(config, "3\n1\n0\nn\nn\n");

    assert!(outcome.saved_to.is_none());
    assert!(output.contains("Error writing to the bill file!"));
    assert!(output.contains("Bacon Cheeseburger"));
    assert_eq!(outcome.receipt.bill.subtotal.cents(), 925);
}

#[test]
fn test_configured_tax_rate_and_store_name() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    config.tax_rate_bps = 1000;
    config.store.name = "Night Market".to_string();

    let (outcome, output) = run_with(config, "1\n4\n0\nn\nn\n");

    assert_eq!(outcome.receipt.bill.tax.cents(), 330);
    assert!(output.contains("Welcome to Night Market"));
}

#[test]
fn test_huge_tip_defaults_to_zero() {
    let (outcome, output, _dir) = run_session("1\n1\n0\nn\ny\n92233720368547758\n");

    assert_eq!(outcome.receipt.bill.tip, Money::zero());
    assert_eq!(outcome.receipt.bill.total.cents(), 825 + 74);
    assert!(output.contains("Invalid tip amount! Setting tip to $0."));
}
