#![allow(dead_code)]

use chrono::NaiveDate;
use expense_bank_order::application::builder::ExpenseBankOrderBuilder;
use expense_bank_order::domain::expense::{BankDetails, Expense};
use expense_bank_order::infrastructure::calendar::FixedCalendar;
use expense_bank_order::infrastructure::factory::{
    DefaultBankOrderLineFactory, DefaultBankOrderShellFactory,
};
use expense_bank_order::infrastructure::in_memory::InMemoryBankOrderStore;
use expense_bank_order::interfaces::json::request_reader::ReimbursementRequest;
use std::path::Path;

pub const REQUEST_FIXTURE: &str = "tests/fixtures/request.json";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Expense and bank details from the shared request fixture.
pub fn request() -> (Expense, BankDetails) {
    let file = std::fs::File::open(REQUEST_FIXTURE).unwrap();
    let request = ReimbursementRequest::from_reader(file).unwrap();
    (request.expense, request.bank_details)
}

pub fn builder(today: NaiveDate, store: InMemoryBankOrderStore) -> ExpenseBankOrderBuilder {
    ExpenseBankOrderBuilder::new(
        Box::new(DefaultBankOrderShellFactory),
        Box::new(DefaultBankOrderLineFactory),
        Box::new(store),
        Box::new(FixedCalendar::new(today)),
    )
}

/// Writes `expense` and `bank_details` as a request file the CLI can read.
pub fn write_request(path: &Path, expense: &Expense, bank_details: &BankDetails) {
    let value = serde_json::json!({
        "expense": expense,
        "bank_details": bank_details,
    });
    std::fs::write(path, serde_json::to_vec_pretty(&value).unwrap()).unwrap();
}
