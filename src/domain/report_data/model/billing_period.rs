use std::fmt;

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::core::persistence::provider::provider_type::ProviderType;
use crate::domain::report_data::error::ValidationError;

use super::invoice_month::InvoiceMonth;

/// A slice of the requested range that falls inside one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub invoice_month: Option<InvoiceMonth>,
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.start.format("%Y-%m-%d");
        let end = self.end.format("%Y-%m-%d");
        match &self.invoice_month {
            Some(month) => write!(f, "('{}', '{}', '{}')", start, end, month),
            None => write!(f, "('{}', '{}', None)", start, end),
        }
    }
}

/// Parse a report date given as `YYYY-MM-DD` or as a timestamp.
pub fn parse_report_date(field: &str, raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .map_err(|_| {
            ValidationError::invalid_range(format!(
                "{} '{}' is not a valid date (expected YYYY-MM-DD).",
                field, raw
            ))
        })
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// Split `[start_date, end_date]` into per-month billing periods.
///
/// Without `end_date` the single period runs to the end of the start month.
/// For invoice-billed providers a missing `invoice_month` is derived from
/// `end_date` (or `start_date`); every other provider drops it.
pub fn expand_billing_periods(
    start_date: Option<&str>,
    end_date: Option<&str>,
    invoice_month: Option<&str>,
    provider_type: Option<ProviderType>,
) -> Result<Vec<BillingPeriod>, ValidationError> {
    let start_raw = start_date
        .ok_or_else(|| ValidationError::invalid_range("start_date is a required parameter."))?;
    let start = parse_report_date("start_date", start_raw)?;
    let end = end_date
        .map(|raw| parse_report_date("end_date", raw))
        .transpose()?;

    if let Some(end) = end {
        if end < start {
            return Err(ValidationError::invalid_range(format!(
                "end_date {} is before start_date {}.",
                end, start
            )));
        }
    }

    let invoice_month = match provider_type {
        Some(kind) if kind.is_invoice_billed() => Some(match invoice_month {
            Some(raw) => InvoiceMonth::parse(raw)?,
            None => InvoiceMonth::from_date(end.unwrap_or(start)),
        }),
        _ => None,
    };

    let range_end = end.unwrap_or_else(|| last_of_month(start));

    let mut periods = Vec::new();
    let mut month = first_of_month(start);
    while month <= range_end {
        periods.push(BillingPeriod {
            start: month.max(start),
            end: last_of_month(month).min(range_end),
            invoice_month: invoice_month.clone(),
        });

        month = match month.checked_add_months(Months::new(1)) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(periods)
}
