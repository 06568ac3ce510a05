use serde::Deserialize;
use validator::Validate;

use crate::domain::report_data::error::ValidationError;

/// Provider uuid that requests a summary of every provider.
pub const ALL_PROVIDERS: &str = "*";

/// Summarize request as received from the transport, before validation.
///
/// Every field is the raw token; field-shape rules are checked by the
/// validator in its ordered pass, not at the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct SummarizeRequest {
    pub provider_uuid: Option<String>,
    pub provider_type: Option<String>,

    /// Tenant schema name (Postgres identifier).
    #[validate(length(max = 63, message = "schema must be at most 63 characters."))]
    pub schema_name: Option<String>,

    pub start_date: Option<String>,
    pub end_date: Option<String>,

    #[validate(length(
        max = 6,
        code = "invalid_range",
        message = "invoice_month must be in the format YYYYMM."
    ))]
    pub invoice_month: Option<String>,

    pub queue_override: Option<String>,

    /// Raw `"true"` / `"false"` token; absent means true.
    pub ocp_on_cloud: Option<String>,
}

impl SummarizeRequest {
    /// True when the request targets every provider (`provider_uuid=*`).
    pub fn targets_all_providers(&self) -> bool {
        self.provider_uuid.as_deref().map(str::trim) == Some(ALL_PROVIDERS)
    }
}

/// Parse a `"true"` / `"false"` flag, ignoring case.
pub fn parse_bool_flag(name: &str, raw: Option<&str>, default: bool) -> Result<bool, ValidationError> {
    match raw.map(str::trim) {
        None => Ok(default),
        Some(value) if value.eq_ignore_ascii_case("true") => Ok(true),
        Some(value) if value.eq_ignore_ascii_case("false") => Ok(false),
        Some(_) => Err(ValidationError::invalid_boolean(format!("{} must be a boolean.", name))),
    }
}
