use serde::Deserialize;
use validator::Validate;

/// Expired-data removal request as received from the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct DeleteRequest {
    #[validate(length(max = 63, message = "schema must be at most 63 characters."))]
    pub schema_name: Option<String>,
    pub provider_type: Option<String>,
    #[validate(length(max = 64, message = "provider_uuid must be at most 64 characters."))]
    pub provider_uuid: Option<String>,

    /// Raw `"true"` / `"false"` token; absent means a real removal.
    pub simulate: Option<String>,
}
