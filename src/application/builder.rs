use crate::domain::bank_order::{
    ACCOUNTING_TRIGGER_CONFIRMATION, ACCOUNTING_TRIGGER_REALIZATION, AccountingTrigger, BankOrder,
    FunctionalOrigin, LineOrigin, PartnerType, TechnicalOrigin,
};
use crate::domain::expense::{BankDetails, Expense, PaymentMode};
use crate::domain::ports::{
    BankOrderLineFactoryBox, BankOrderShellFactoryBox, BankOrderStoreBox, CalendarServiceBox,
    LineRequest, ShellRequest,
};
use crate::error::{BankOrderError, Result};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Builds the bank order that reimburses an employee expense.
///
/// Owns its collaborators. Each call produces a fresh order with exactly one
/// line and writes it once through the store.
pub struct ExpenseBankOrderBuilder {
    shell_factory: BankOrderShellFactoryBox,
    line_factory: BankOrderLineFactoryBox,
    store: BankOrderStoreBox,
    calendar: CalendarServiceBox,
}

impl ExpenseBankOrderBuilder {
    /// Creates a new builder.
    ///
    /// # Arguments
    ///
    /// * `shell_factory` - Opens the order header.
    /// * `line_factory` - Builds the single transfer line.
    /// * `store` - Persists the finished order.
    /// * `calendar` - Supplies the company's current date when the expense has no payment date.
    pub fn new(
        shell_factory: BankOrderShellFactoryBox,
        line_factory: BankOrderLineFactoryBox,
        store: BankOrderStoreBox,
        calendar: CalendarServiceBox,
    ) -> Self {
        Self {
            shell_factory,
            line_factory,
            store,
            calendar,
        }
    }

    /// Creates and saves the bank order paying `expense` from `bank_details`.
    ///
    /// Errors raised by the factories or the store are returned as they are.
    pub async fn create_bank_order(
        &self,
        expense: &Expense,
        bank_details: &BankDetails,
    ) -> Result<BankOrder> {
        let company = &expense.company;
        let partner = &expense.employee.contact_partner;
        let payment_mode = &expense.payment_mode;
        let amount = expense.reimbursable_amount()?;
        let currency = &company.currency;
        let payment_date = self.payment_date(expense);
        let accounting_trigger = accounting_trigger_select(payment_mode);

        debug!(
            expense = %expense.expense_seq,
            %amount,
            %payment_date,
            ?accounting_trigger,
            "Building bank order for expense"
        );

        let mut bank_order = self.shell_factory.create(ShellRequest {
            payment_mode,
            partner_type: PartnerType::Employee,
            payment_date,
            company,
            bank_details,
            currency,
            name: &expense.full_name,
            description: &expense.full_name,
            technical_origin: TechnicalOrigin::Automatic,
            functional_origin: FunctionalOrigin::Expense,
            accounting_trigger,
        })?;

        // The shell factory has already checked the format is present.
        let file_format = payment_mode.bank_order_file_format.as_ref().ok_or_else(|| {
            BankOrderError::BusinessRule(format!(
                "Payment mode {} has no bank order file format",
                payment_mode.code
            ))
        })?;

        let line = self.line_factory.create(LineRequest {
            file_format,
            partner,
            amount,
            currency,
            date: payment_date,
            sequence: &expense.expense_seq,
            label: &expense.full_name,
            origin: LineOrigin::Expense {
                expense_id: expense.id,
                expense_seq: expense.expense_seq.clone(),
            },
        })?;
        bank_order.add_line(line);

        let bank_order = self.store.save(bank_order).await?;
        info!(
            id = ?bank_order.id,
            expense = %expense.expense_seq,
            "Bank order saved"
        );

        Ok(bank_order)
    }

    /// Consumes the builder and returns every order persisted so far.
    pub async fn into_results(self) -> Result<Vec<BankOrder>> {
        self.store.get_all().await
    }

    fn payment_date(&self, expense: &Expense) -> NaiveDate {
        expense
            .payment_date
            .unwrap_or_else(|| self.calendar.today(&expense.company))
    }
}

/// Trigger to put on the order: the payment mode's own setting when it is
/// confirmation or realization, confirmation for anything else.
pub fn accounting_trigger_select(payment_mode: &PaymentMode) -> AccountingTrigger {
    match payment_mode.accounting_trigger_select {
        ACCOUNTING_TRIGGER_CONFIRMATION => AccountingTrigger::Confirmation,
        ACCOUNTING_TRIGGER_REALIZATION => AccountingTrigger::Realization,
        _ => AccountingTrigger::Confirmation,
    }
}
