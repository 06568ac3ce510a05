use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::domain::report_data::error::ValidationError;

/// Invoice month in `YYYYMM` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct InvoiceMonth(String);

impl InvoiceMonth {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        let valid = raw.len() == 6
            && raw.bytes().all(|b| b.is_ascii_digit())
            && matches!(raw[4..].parse::<u32>(), Ok(1..=12));

        if !valid {
            return Err(ValidationError::invalid_range(format!(
                "invoice_month '{}' must be formatted as YYYYMM.",
                raw
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(format!("{:04}{:02}", date.year(), date.month()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvoiceMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
