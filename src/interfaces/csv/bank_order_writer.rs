use crate::domain::bank_order::BankOrder;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct LineRecord<'a> {
    id: Option<u64>,
    sequence: &'a str,
    partner: &'a str,
    amount: String,
    currency: &'a str,
    date: String,
    label: &'a str,
    file_format: &'a str,
}

/// Writes bank order lines as CSV, one record per line.
///
/// Header: `id,sequence,partner,amount,currency,date,label,file_format`.
pub struct BankOrderWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> BankOrderWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_orders<'a, I>(&mut self, orders: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a BankOrder>,
    {
        for order in orders {
            for line in &order.lines {
                self.writer.serialize(LineRecord {
                    id: order.id,
                    sequence: &line.sequence,
                    partner: &line.partner.full_name,
                    amount: line.amount.to_string(),
                    currency: &line.currency.code,
                    date: line.date.to_string(),
                    label: &line.label,
                    file_format: &line.file_format.code,
                })?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}
