use super::expense::{BankDetails, BankOrderFileFormat, Company, Currency, Partner};
use super::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const ACCOUNTING_TRIGGER_IMMEDIATE: i32 = 1;
pub const ACCOUNTING_TRIGGER_CONFIRMATION: i32 = 2;
pub const ACCOUNTING_TRIGGER_VALIDATION: i32 = 3;
pub const ACCOUNTING_TRIGGER_REALIZATION: i32 = 4;

/// Event at which a bank order is posted to accounting.
///
/// Only the two triggers a bank order can carry are representable; payment modes
/// hold the wider raw code set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountingTrigger {
    #[default]
    Confirmation,
    Realization,
}

impl AccountingTrigger {
    pub fn code(&self) -> i32 {
        match self {
            AccountingTrigger::Confirmation => ACCOUNTING_TRIGGER_CONFIRMATION,
            AccountingTrigger::Realization => ACCOUNTING_TRIGGER_REALIZATION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerType {
    Supplier,
    Employee,
    Customer,
}

impl PartnerType {
    pub fn code(&self) -> i32 {
        match self {
            PartnerType::Supplier => 1,
            PartnerType::Employee => 2,
            PartnerType::Customer => 3,
        }
    }
}

/// How the order came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechnicalOrigin {
    Entry,
    Automatic,
    Import,
}

impl TechnicalOrigin {
    pub fn code(&self) -> i32 {
        match self {
            TechnicalOrigin::Entry => 1,
            TechnicalOrigin::Automatic => 2,
            TechnicalOrigin::Import => 3,
        }
    }
}

/// Which business flow produced the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionalOrigin {
    Manual,
    PaymentSession,
    Expense,
    InvoicePayment,
}

impl FunctionalOrigin {
    pub fn code(&self) -> i32 {
        match self {
            FunctionalOrigin::Manual => 1,
            FunctionalOrigin::PaymentSession => 2,
            FunctionalOrigin::Expense => 3,
            FunctionalOrigin::InvoicePayment => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankOrderStatus {
    #[default]
    Draft,
    AwaitingSignature,
    Validated,
    CarriedOut,
    Rejected,
    Canceled,
}

/// Source document a line was generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LineOrigin {
    Expense { expense_id: u64, expense_seq: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankOrderLine {
    pub file_format: BankOrderFileFormat,
    pub partner: Partner,
    pub amount: Money,
    pub currency: Currency,
    pub date: NaiveDate,
    pub sequence: String,
    pub label: String,
    pub origin: LineOrigin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankOrder {
    /// Assigned by the store on first save.
    pub id: Option<u64>,
    pub name: String,
    pub description: String,
    pub company: Company,
    pub currency: Currency,
    pub partner_type: PartnerType,
    pub payment_date: NaiveDate,
    pub technical_origin: TechnicalOrigin,
    pub functional_origin: FunctionalOrigin,
    pub accounting_trigger: AccountingTrigger,
    pub payment_mode_code: String,
    pub file_format: BankOrderFileFormat,
    pub sender_bank_details: BankDetails,
    pub status: BankOrderStatus,
    pub lines: Vec<BankOrderLine>,
    pub arithmetic_total: Money,
}

impl BankOrder {
    pub fn add_line(&mut self, line: BankOrderLine) {
        self.lines.push(line);
        self.arithmetic_total = self.lines.iter().map(|l| l.amount).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accounting_trigger_codes() {
        assert_eq!(AccountingTrigger::Confirmation.code(), ACCOUNTING_TRIGGER_CONFIRMATION);
        assert_eq!(AccountingTrigger::Realization.code(), ACCOUNTING_TRIGGER_REALIZATION);
        assert_eq!(AccountingTrigger::default(), AccountingTrigger::Confirmation);
    }

    #[test]
    fn test_classification_serialization() {
        assert_eq!(
            serde_json::to_string(&FunctionalOrigin::Expense).unwrap(),
            "\"expense\""
        );
        assert_eq!(
            serde_json::to_string(&BankOrderStatus::CarriedOut).unwrap(),
            "\"carried_out\""
        );
        assert_eq!(PartnerType::Employee.code(), 2);
        assert_eq!(TechnicalOrigin::Automatic.code(), 2);
    }

    #[test]
    fn test_line_origin_is_tagged() {
        let origin = LineOrigin::Expense {
            expense_id: 7,
            expense_seq: "EXP-0007".to_string(),
        };
        let json = serde_json::to_value(&origin).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["expense_id"], 7);
    }
}
