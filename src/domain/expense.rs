use super::money::Money;
use crate::error::{BankOrderError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 code, e.g. `EUR`.
    pub code: String,
    #[serde(default)]
    pub name: String,
}

/// The legal entity paying the reimbursement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: u64,
    pub name: String,
    pub currency: Currency,
    /// Offset from UTC used to decide what "today" is for this company.
    #[serde(default)]
    pub utc_offset_seconds: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: u64,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u64,
    pub name: String,
    pub contact_partner: Partner,
}

/// Describes the file a bank order is exported to (SEPA credit transfer, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankOrderFileFormat {
    pub code: String,
    #[serde(default)]
    pub name: String,
    /// Currencies the format can carry. Empty means unrestricted.
    #[serde(default)]
    pub allowed_currencies: Vec<String>,
}

impl BankOrderFileFormat {
    pub fn accepts_currency(&self, currency: &Currency) -> bool {
        self.allowed_currencies.is_empty()
            || self.allowed_currencies.iter().any(|c| c == &currency.code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMode {
    pub id: u64,
    pub code: String,
    #[serde(default)]
    pub bank_order_file_format: Option<BankOrderFileFormat>,
    /// Raw trigger code as configured. Not guaranteed to be a known value.
    pub accounting_trigger_select: i32,
}

/// The sender bank account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankDetails {
    pub id: u64,
    pub iban: String,
    #[serde(default)]
    pub bic: Option<String>,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// An employee expense report awaiting reimbursement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u64,
    pub company: Company,
    pub employee: Employee,
    pub payment_mode: PaymentMode,
    pub in_tax_total: Money,
    pub advance_amount: Money,
    pub withdrawn_cash: Money,
    pub personal_expense_amount: Money,
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
    pub expense_seq: String,
    pub full_name: String,
}

impl Expense {
    /// Amount owed to the employee once advances, withdrawn cash and
    /// personal expenses are deducted. May be negative.
    ///
    /// Fails with `InvalidInput` when the difference overflows `Decimal`.
    pub fn reimbursable_amount(&self) -> Result<Money> {
        [
            self.advance_amount,
            self.withdrawn_cash,
            self.personal_expense_amount,
        ]
        .into_iter()
        .try_fold(self.in_tax_total, Money::checked_sub)
        .ok_or_else(|| {
            BankOrderError::InvalidInput(format!(
                "Reimbursable amount of expense {} is out of range",
                self.expense_seq
            ))
        })
    }
}
