use super::bank_order::{
    AccountingTrigger, BankOrder, BankOrderLine, FunctionalOrigin, LineOrigin, PartnerType,
    TechnicalOrigin,
};
use super::expense::{BankDetails, BankOrderFileFormat, Company, Currency, Partner, PaymentMode};
use super::money::Money;
use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Everything needed to open an empty bank order.
#[derive(Debug, Clone, Copy)]
pub struct ShellRequest<'a> {
    pub payment_mode: &'a PaymentMode,
    pub partner_type: PartnerType,
    pub payment_date: NaiveDate,
    pub company: &'a Company,
    pub bank_details: &'a BankDetails,
    pub currency: &'a Currency,
    pub name: &'a str,
    pub description: &'a str,
    pub technical_origin: TechnicalOrigin,
    pub functional_origin: FunctionalOrigin,
    pub accounting_trigger: AccountingTrigger,
}

#[derive(Debug, Clone)]
pub struct LineRequest<'a> {
    pub file_format: &'a BankOrderFileFormat,
    pub partner: &'a Partner,
    pub amount: Money,
    pub currency: &'a Currency,
    pub date: NaiveDate,
    pub sequence: &'a str,
    pub label: &'a str,
    pub origin: LineOrigin,
}

/// Builds a bank order with header fields set and no lines.
pub trait BankOrderShellFactory: Send + Sync {
    fn create(&self, request: ShellRequest<'_>) -> Result<BankOrder>;
}

pub trait BankOrderLineFactory: Send + Sync {
    fn create(&self, request: LineRequest<'_>) -> Result<BankOrderLine>;
}

#[async_trait]
pub trait BankOrderStore: Send + Sync {
    /// Persists the order and returns the stored instance, with its id set.
    async fn save(&self, order: BankOrder) -> Result<BankOrder>;
    async fn get(&self, id: u64) -> Result<Option<BankOrder>>;
    async fn get_all(&self) -> Result<Vec<BankOrder>>;
}

pub trait CalendarService: Send + Sync {
    fn today(&self, company: &Company) -> NaiveDate;
}

pub type BankOrderShellFactoryBox = Box<dyn BankOrderShellFactory>;
pub type BankOrderLineFactoryBox = Box<dyn BankOrderLineFactory>;
pub type BankOrderStoreBox = Box<dyn BankOrderStore>;
pub type CalendarServiceBox = Box<dyn CalendarService>;
