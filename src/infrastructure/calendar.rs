use crate::domain::expense::Company;
use crate::domain::ports::CalendarService;
use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use tracing::warn;

/// Reads the wall clock and shifts it to the company's UTC offset.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCalendar;

impl SystemCalendar {
    pub fn new() -> Self {
        Self
    }
}

impl CalendarService for SystemCalendar {
    fn today(&self, company: &Company) -> NaiveDate {
        let offset = company_offset(company);
        Utc::now().with_timezone(&offset).date_naive()
    }
}

/// Offset for `company`, UTC when the configured value is out of range.
pub fn company_offset(company: &Company) -> FixedOffset {
    FixedOffset::east_opt(company.utc_offset_seconds).unwrap_or_else(|| {
        warn!(
            company = company.id,
            offset = company.utc_offset_seconds,
            "Invalid UTC offset, using UTC"
        );
        Utc.fix()
    })
}

/// Always answers the same date, whatever the company.
#[derive(Debug, Clone, Copy)]
pub struct FixedCalendar {
    today: NaiveDate,
}

impl FixedCalendar {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl CalendarService for FixedCalendar {
    fn today(&self, _company: &Company) -> NaiveDate {
        self.today
    }
}
