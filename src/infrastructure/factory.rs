use crate::domain::bank_order::{BankOrder, BankOrderLine, BankOrderStatus};
use crate::domain::money::Money;
use crate::domain::ports::{BankOrderLineFactory, BankOrderShellFactory, LineRequest, ShellRequest};
use crate::error::{BankOrderError, Result};
use tracing::warn;

/// Opens draft bank orders after checking the payment setup can carry them.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultBankOrderShellFactory;

impl BankOrderShellFactory for DefaultBankOrderShellFactory {
    fn create(&self, request: ShellRequest<'_>) -> Result<BankOrder> {
        let payment_mode = request.payment_mode;

        let file_format = payment_mode.bank_order_file_format.as_ref().ok_or_else(|| {
            BankOrderError::BusinessRule(format!(
                "Payment mode {} has no bank order file format",
                payment_mode.code
            ))
        })?;

        if !request.bank_details.active {
            return Err(BankOrderError::BusinessRule(format!(
                "Bank details {} are inactive",
                request.bank_details.iban
            )));
        }

        if !file_format.accepts_currency(request.currency) {
            warn!(
                file_format = %file_format.code,
                currency = %request.currency.code,
                "Currency rejected by file format"
            );
            return Err(BankOrderError::BusinessRule(format!(
                "File format {} does not support currency {}",
                file_format.code, request.currency.code
            )));
        }

        Ok(BankOrder {
            id: None,
            name: request.name.to_string(),
            description: request.description.to_string(),
            company: request.company.clone(),
            currency: request.currency.clone(),
            partner_type: request.partner_type,
            payment_date: request.payment_date,
            technical_origin: request.technical_origin,
            functional_origin: request.functional_origin,
            accounting_trigger: request.accounting_trigger,
            payment_mode_code: payment_mode.code.clone(),
            file_format: file_format.clone(),
            sender_bank_details: request.bank_details.clone(),
            status: BankOrderStatus::Draft,
            lines: Vec::new(),
            arithmetic_total: Money::ZERO,
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultBankOrderLineFactory;

impl BankOrderLineFactory for DefaultBankOrderLineFactory {
    fn create(&self, request: LineRequest<'_>) -> Result<BankOrderLine> {
        Ok(BankOrderLine {
            file_format: request.file_format.clone(),
            partner: request.partner.clone(),
            amount: request.amount,
            currency: request.currency.clone(),
            date: request.date,
            sequence: request.sequence.to_string(),
            label: request.label.to_string(),
            origin: request.origin,
        })
    }
}
