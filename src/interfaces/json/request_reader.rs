use crate::domain::expense::{BankDetails, Expense};
use crate::error::Result;
use serde::Deserialize;
use std::io::Read;

/// One reimbursement to pay: the expense and the account it is paid from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReimbursementRequest {
    pub expense: Expense,
    pub bank_details: BankDetails,
}

impl ReimbursementRequest {
    /// Parses a request from any `Read` source (e.g., File, Stdin).
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        Ok(serde_json::from_reader(source)?)
    }
}
