use tracing::debug;
use validator::Validate;

use crate::core::persistence::provider::provider_lookup_trait::ProviderLookup;
use crate::core::persistence::provider::provider_type::ProviderType;
use crate::core::queue::queue_name::QueueName;
use crate::domain::report_data::dto::delete_request::DeleteRequest;
use crate::domain::report_data::dto::summarize_request::{parse_bool_flag, SummarizeRequest};
use crate::domain::report_data::error::{ReportDataError, ValidationCode, ValidationError};
use crate::domain::report_data::model::provider_identity::ProviderIdentity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummarizeScope {
    Provider(ProviderIdentity),
    /// Every provider; only reachable in development mode.
    AllProviders { provider_type: Option<ProviderType> },
}

impl SummarizeScope {
    pub fn provider_type(&self) -> Option<ProviderType> {
        match self {
            SummarizeScope::Provider(identity) => Some(identity.provider_type),
            SummarizeScope::AllProviders { provider_type } => *provider_type,
        }
    }

    pub fn schema_name(&self) -> Option<&str> {
        match self {
            SummarizeScope::Provider(identity) => Some(identity.schema_name.as_str()),
            SummarizeScope::AllProviders { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSummarize {
    pub scope: SummarizeScope,
    pub start_date: String,
    pub end_date: Option<String>,
    pub invoice_month: Option<String>,
    pub queue_override: Option<QueueName>,
    pub include_ocp_on_cloud: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDelete {
    pub schema_name: String,
    pub provider_type: ProviderType,
    pub provider_uuid: String,
    pub simulate: bool,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_provider_type(raw: &str) -> Result<ProviderType, ValidationError> {
    ProviderType::from_code(raw).ok_or_else(|| {
        ValidationError::new(
            ValidationCode::InvalidProviderType,
            format!("provider_type '{}' is not a supported provider type.", raw),
        )
    })
}

/// Check a summarize request; the first failing rule wins.
///
/// The only side effect is the read-only provider lookup, which happens
/// after the queue override has been accepted. Field-shape rules and the
/// `ocp_on_cloud` flag are checked last.
pub async fn validate_summarize_request(
    request: &SummarizeRequest,
    providers: &dyn ProviderLookup,
    dev_mode: bool,
) -> Result<ValidatedSummarize, ReportDataError> {
    let provider_uuid = present(&request.provider_uuid);
    let requested_type = present(&request.provider_type);

    if provider_uuid.is_none() && requested_type.is_none() {
        return Err(ValidationError::missing_field(
            "provider_uuid or provider_type must be supplied as a parameter.",
        )
        .into());
    }

    let all_providers = request.targets_all_providers();
    if all_providers && !dev_mode {
        return Err(ValidationError::new(
            ValidationCode::WildcardDisabled,
            "?provider_uuid=* is invalid query.",
        )
        .into());
    }

    let queue_override = present(&request.queue_override)
        .map(|name| {
            QueueName::from_name(name).ok_or_else(|| {
                ValidationError::new(
                    ValidationCode::InvalidQueue,
                    format!("'queue' must be one of [{}].", QueueName::allow_list_display()),
                )
            })
        })
        .transpose()?;

    let schema_name = present(&request.schema_name);

    let resolved = match provider_uuid {
        Some(uuid) if !all_providers => {
            let provider = providers
                .lookup_provider(uuid)
                .await
                .map_err(|e| ReportDataError::ProviderLookupFailed(e.to_string()))?
                .ok_or_else(|| {
                    ValidationError::new(
                        ValidationCode::ProviderNotFound,
                        format!("provider_uuid {} does not exist", uuid),
                    )
                })?;

            if Some(provider.schema_name.as_str()) != schema_name {
                return Err(ValidationError::new(
                    ValidationCode::SchemaMismatch,
                    format!(
                        "provider_uuid {} is not associated with schema {}.",
                        uuid,
                        schema_name.unwrap_or("None")
                    ),
                )
                .into());
            }
            debug!(uuid, provider_type = %provider.provider_type, "Resolved provider");
            Some(provider)
        }
        _ => None,
    };

    let start_date = present(&request.start_date)
        .ok_or_else(|| ValidationError::invalid_range("start_date is a required parameter."))?
        .to_string();

    let scope = if all_providers {
        SummarizeScope::AllProviders {
            provider_type: requested_type.and_then(ProviderType::from_code),
        }
    } else {
        let schema_name = schema_name
            .ok_or_else(|| ValidationError::missing_field("schema is a required parameter."))?;

        let requested = requested_type.map(parse_provider_type).transpose()?;
        let provider_type = resolved
            .as_ref()
            .map(|p| p.provider_type)
            .or(requested)
            .ok_or_else(|| ValidationError::missing_field("Unable to determine provider type."))?;

        if let Some(requested) = requested {
            if requested != provider_type {
                return Err(ValidationError::new(
                    ValidationCode::TypeMismatch,
                    "provider_uuid and provider_type have mismatched provider types.",
                )
                .into());
            }
        }

        SummarizeScope::Provider(match resolved {
            Some(provider) => ProviderIdentity::from(provider),
            None => ProviderIdentity {
                uuid: None,
                provider_type,
                schema_name: schema_name.to_string(),
            },
        })
    };

    request.validate().map_err(ValidationError::from)?;
    let include_ocp_on_cloud = parse_bool_flag("ocp_on_cloud", present(&request.ocp_on_cloud), true)?;

    Ok(ValidatedSummarize {
        scope,
        start_date,
        end_date: present(&request.end_date).map(str::to_string),
        invoice_month: present(&request.invoice_month).map(str::to_string),
        queue_override,
        include_ocp_on_cloud,
    })
}

pub fn validate_delete_request(request: &DeleteRequest) -> Result<ValidatedDelete, ValidationError> {
    let schema_name = present(&request.schema_name)
        .ok_or_else(|| ValidationError::missing_field("schema is a required parameter."))?;
    let provider = present(&request.provider_type)
        .ok_or_else(|| ValidationError::missing_field("provider is a required parameter."))?;
    let provider_uuid = present(&request.provider_uuid)
        .ok_or_else(|| ValidationError::missing_field("provider_uuid is a required parameter."))?;
    let simulate = parse_bool_flag("simulate", present(&request.simulate), false)?;
    request.validate()?;

    Ok(ValidatedDelete {
        schema_name: schema_name.to_string(),
        provider_type: parse_provider_type(provider)?,
        provider_uuid: provider_uuid.to_string(),
        simulate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::provider::provider_entity::ProviderEntity;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::Mutex;

    const AWS_UUID: &str = "6e212746-484a-40cd-bba0-09a19d132d64";

    #[derive(Default)]
    struct MockProviderLookup {
        providers: Vec<ProviderEntity>,
        calls: Mutex<Vec<String>>,
    }

    impl MockProviderLookup {
        fn with_aws() -> Self {
            Self {
                providers: vec![ProviderEntity {
                    uuid: AWS_UUID.into(),
                    provider_type: ProviderType::Aws,
                    schema_name: "org1234567".into(),
                    name: None,
                }],
                ..Default::default()
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ProviderLookup for MockProviderLookup {
        async fn lookup_provider(&self, uuid: &str) -> Result<Option<ProviderEntity>> {
            self.calls.lock().unwrap().push(uuid.to_string());
            Ok(self.providers.iter().find(|p| p.uuid == uuid).cloned())
        }
    }

    fn aws_request() -> SummarizeRequest {
        SummarizeRequest {
            provider_uuid: Some(AWS_UUID.into()),
            schema_name: Some("org1234567".into()),
            start_date: Some("2023-01-15".into()),
            ..Default::default()
        }
    }

    async fn code_of(request: SummarizeRequest, lookup: &MockProviderLookup, dev_mode: bool) -> ValidationCode {
        validate_summarize_request(&request, lookup, dev_mode)
            .await
            .unwrap_err()
            .validation_code()
            .expect("validation error")
    }

    #[tokio::test]
    async fn resolves_provider_identity() {
        let lookup = MockProviderLookup::with_aws();
        let validated = validate_summarize_request(&aws_request(), &lookup, false)
            .await
            .unwrap();

        assert_eq!(
            validated.scope,
            SummarizeScope::Provider(ProviderIdentity {
                uuid: Some(AWS_UUID.into()),
                provider_type: ProviderType::Aws,
                schema_name: "org1234567".into(),
            })
        );
        assert_eq!(validated.start_date, "2023-01-15");
        assert!(validated.queue_override.is_none());
    }

    #[tokio::test]
    async fn requires_provider_uuid_or_type() {
        let lookup = MockProviderLookup::default();
        let request = SummarizeRequest {
            schema_name: Some("org1".into()),
            start_date: Some("2023-01-01".into()),
            ..Default::default()
        };
        assert_eq!(code_of(request, &lookup, true).await, ValidationCode::MissingField);
    }

    #[tokio::test]
    async fn bogus_queue_fails_before_provider_lookup() {
        let lookup = MockProviderLookup::with_aws();
        let request = SummarizeRequest {
            queue_override: Some("bogus".into()),
            ..aws_request()
        };

        assert_eq!(code_of(request, &lookup, false).await, ValidationCode::InvalidQueue);
        assert_eq!(lookup.call_count(), 0);
    }

    #[tokio::test]
    async fn bogus_queue_wins_over_malformed_fields() {
        let lookup = MockProviderLookup::with_aws();
        let request = SummarizeRequest {
            queue_override: Some("bogus".into()),
            ocp_on_cloud: Some("nah".into()),
            invoice_month: Some("2023033".into()),
            ..aws_request()
        };

        assert_eq!(code_of(request, &lookup, false).await, ValidationCode::InvalidQueue);
        assert_eq!(lookup.call_count(), 0);
    }

    #[tokio::test]
    async fn ocp_on_cloud_defaults_true_and_rejects_junk() {
        let lookup = MockProviderLookup::with_aws();
        let validated = validate_summarize_request(&aws_request(), &lookup, false).await.unwrap();
        assert!(validated.include_ocp_on_cloud);

        let off = SummarizeRequest {
            ocp_on_cloud: Some("False".into()),
            ..aws_request()
        };
        let validated = validate_summarize_request(&off, &lookup, false).await.unwrap();
        assert!(!validated.include_ocp_on_cloud);

        let junk = SummarizeRequest {
            ocp_on_cloud: Some("nah".into()),
            ..aws_request()
        };
        assert_eq!(code_of(junk, &lookup, false).await, ValidationCode::InvalidBoolean);
    }

    #[tokio::test]
    async fn oversized_invoice_month_is_invalid_range() {
        let lookup = MockProviderLookup::with_aws();
        let request = SummarizeRequest {
            invoice_month: Some("2023033".into()),
            ocp_on_cloud: Some("nah".into()),
            ..aws_request()
        };
        assert_eq!(code_of(request, &lookup, false).await, ValidationCode::InvalidRange);
    }

    #[tokio::test]
    async fn accepts_allow_listed_queue_override() {
        let lookup = MockProviderLookup::with_aws();
        let request = SummarizeRequest {
            queue_override: Some("summary_xl".into()),
            ..aws_request()
        };

        let validated = validate_summarize_request(&request, &lookup, false).await.unwrap();
        assert_eq!(validated.queue_override, Some(QueueName::SummaryXl));
    }

    #[tokio::test]
    async fn wildcard_without_dev_mode_is_rejected_regardless_of_other_fields() {
        let lookup = MockProviderLookup::with_aws();
        let requests = [
            SummarizeRequest {
                provider_uuid: Some("*".into()),
                ..Default::default()
            },
            SummarizeRequest {
                provider_uuid: Some("*".into()),
                queue_override: Some("bogus".into()),
                start_date: Some("2023-01-01".into()),
                ..Default::default()
            },
            SummarizeRequest {
                provider_uuid: Some(" * ".into()),
                provider_type: Some("GCP".into()),
                schema_name: Some("org1".into()),
                invoice_month: Some("2023033".into()),
                ocp_on_cloud: Some("nah".into()),
                ..Default::default()
            },
        ];

        for request in requests {
            assert_eq!(code_of(request, &lookup, false).await, ValidationCode::WildcardDisabled);
        }
        assert_eq!(lookup.call_count(), 0);
    }

    #[tokio::test]
    async fn wildcard_in_dev_mode_skips_lookup_and_schema() {
        let lookup = MockProviderLookup::default();
        let request = SummarizeRequest {
            provider_uuid: Some("*".into()),
            provider_type: Some("gcp".into()),
            start_date: Some("2023-01-01".into()),
            ..Default::default()
        };

        let validated = validate_summarize_request(&request, &lookup, true).await.unwrap();
        assert_eq!(
            validated.scope,
            SummarizeScope::AllProviders {
                provider_type: Some(ProviderType::Gcp)
            }
        );
        assert_eq!(lookup.call_count(), 0);
    }

    #[tokio::test]
    async fn unknown_provider_uuid_is_not_found() {
        let lookup = MockProviderLookup::with_aws();
        let request = SummarizeRequest {
            provider_uuid: Some("00000000-0000-0000-0000-000000000000".into()),
            ..aws_request()
        };
        assert_eq!(code_of(request, &lookup, false).await, ValidationCode::ProviderNotFound);
    }

    #[tokio::test]
    async fn schema_must_match_provider_account() {
        let lookup = MockProviderLookup::with_aws();
        let request = SummarizeRequest {
            schema_name: Some("org9999999".into()),
            ..aws_request()
        };
        assert_eq!(code_of(request, &lookup, false).await, ValidationCode::SchemaMismatch);

        let no_schema = SummarizeRequest {
            schema_name: None,
            ..aws_request()
        };
        assert_eq!(code_of(no_schema, &lookup, false).await, ValidationCode::SchemaMismatch);
    }

    #[tokio::test]
    async fn start_date_is_required() {
        let lookup = MockProviderLookup::with_aws();
        let request = SummarizeRequest {
            start_date: None,
            ..aws_request()
        };
        assert_eq!(code_of(request, &lookup, false).await, ValidationCode::InvalidRange);
    }

    #[tokio::test]
    async fn type_only_request_requires_schema() {
        let lookup = MockProviderLookup::default();
        let request = SummarizeRequest {
            provider_type: Some("AWS".into()),
            start_date: Some("2023-01-01".into()),
            ..Default::default()
        };
        assert_eq!(code_of(request, &lookup, false).await, ValidationCode::MissingField);
    }

    #[tokio::test]
    async fn type_only_request_builds_identity_without_uuid() {
        let lookup = MockProviderLookup::default();
        let request = SummarizeRequest {
            provider_type: Some("OCP".into()),
            schema_name: Some("org1".into()),
            start_date: Some("2023-01-01".into()),
            ..Default::default()
        };

        let validated = validate_summarize_request(&request, &lookup, false).await.unwrap();
        assert_eq!(validated.scope.provider_type(), Some(ProviderType::Ocp));
        assert_eq!(validated.scope.schema_name(), Some("org1"));
    }

    #[tokio::test]
    async fn requested_type_must_match_resolved_type() {
        let lookup = MockProviderLookup::with_aws();
        let mismatch = SummarizeRequest {
            provider_type: Some("Azure".into()),
            ..aws_request()
        };
        assert_eq!(code_of(mismatch, &lookup, false).await, ValidationCode::TypeMismatch);

        let same = SummarizeRequest {
            provider_type: Some("aws".into()),
            ..aws_request()
        };
        assert!(validate_summarize_request(&same, &lookup, false).await.is_ok());
    }

    #[tokio::test]
    async fn unsupported_provider_type_is_rejected() {
        let lookup = MockProviderLookup::default();
        let request = SummarizeRequest {
            provider_type: Some("IBM".into()),
            schema_name: Some("org1".into()),
            start_date: Some("2023-01-01".into()),
            ..Default::default()
        };
        assert_eq!(code_of(request, &lookup, false).await, ValidationCode::InvalidProviderType);
    }

    #[test]
    fn delete_requires_fields_in_order() {
        let full = DeleteRequest {
            schema_name: Some("org1".into()),
            provider_type: Some("AWS".into()),
            provider_uuid: Some(AWS_UUID.into()),
            simulate: None,
        };

        let missing_schema = DeleteRequest {
            schema_name: None,
            provider_type: None,
            ..full.clone()
        };
        let err = validate_delete_request(&missing_schema).unwrap_err();
        assert_eq!(err.message, "schema is a required parameter.");

        let missing_provider = DeleteRequest {
            provider_type: None,
            provider_uuid: None,
            ..full.clone()
        };
        let err = validate_delete_request(&missing_provider).unwrap_err();
        assert_eq!(err.message, "provider is a required parameter.");

        let missing_uuid = DeleteRequest {
            provider_uuid: None,
            ..full.clone()
        };
        let err = validate_delete_request(&missing_uuid).unwrap_err();
        assert_eq!(err.message, "provider_uuid is a required parameter.");

        let validated = validate_delete_request(&full).unwrap();
        assert!(!validated.simulate);
        assert_eq!(validated.provider_type, ProviderType::Aws);
    }

    #[test]
    fn delete_simulate_parsing() {
        let base = DeleteRequest {
            schema_name: Some("org1".into()),
            provider_type: Some("AWS".into()),
            provider_uuid: Some(AWS_UUID.into()),
            simulate: Some("TRUE".into()),
        };
        assert!(validate_delete_request(&base).unwrap().simulate);

        let maybe = DeleteRequest {
            simulate: Some("maybe".into()),
            ..base
        };
        assert_eq!(
            validate_delete_request(&maybe).unwrap_err().code,
            ValidationCode::InvalidBoolean
        );
    }

    #[test]
    fn delete_oversized_schema_has_a_code() {
        let request = DeleteRequest {
            schema_name: Some("o".repeat(70)),
            provider_type: Some("AWS".into()),
            provider_uuid: Some(AWS_UUID.into()),
            simulate: None,
        };

        let err = validate_delete_request(&request).unwrap_err();
        assert_eq!(err.code, ValidationCode::MissingField);
        assert_eq!(err.message, "schema must be at most 63 characters.");
    }
}
