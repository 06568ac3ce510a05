use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported cost data source kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderType {
    #[serde(rename = "AWS")]
    Aws,
    #[serde(rename = "AWS-local")]
    AwsLocal,
    #[serde(rename = "Azure")]
    Azure,
    #[serde(rename = "Azure-local")]
    AzureLocal,
    #[serde(rename = "GCP")]
    Gcp,
    #[serde(rename = "GCP-local")]
    GcpLocal,
    #[serde(rename = "OCI")]
    Oci,
    #[serde(rename = "OCI-local")]
    OciLocal,
    #[serde(rename = "OCP")]
    Ocp,
}

impl ProviderType {
    pub fn as_code(&self) -> &'static str {
        match self {
            ProviderType::Aws => "AWS",
            ProviderType::AwsLocal => "AWS-local",
            ProviderType::Azure => "Azure",
            ProviderType::AzureLocal => "Azure-local",
            ProviderType::Gcp => "GCP",
            ProviderType::GcpLocal => "GCP-local",
            ProviderType::Oci => "OCI",
            ProviderType::OciLocal => "OCI-local",
            ProviderType::Ocp => "OCP",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "AWS" => Some(ProviderType::Aws),
            "AWS-LOCAL" => Some(ProviderType::AwsLocal),
            "AZURE" => Some(ProviderType::Azure),
            "AZURE-LOCAL" => Some(ProviderType::AzureLocal),
            "GCP" => Some(ProviderType::Gcp),
            "GCP-LOCAL" => Some(ProviderType::GcpLocal),
            "OCI" => Some(ProviderType::Oci),
            "OCI-LOCAL" => Some(ProviderType::OciLocal),
            "OCP" => Some(ProviderType::Ocp),
            _ => None,
        }
    }

    /// Providers whose billing periods are keyed by invoice month.
    pub fn is_invoice_billed(&self) -> bool {
        matches!(self, ProviderType::Gcp | ProviderType::GcpLocal)
    }

    /// Cloud sources that can be correlated with OpenShift usage.
    pub fn is_cloud(&self) -> bool {
        !matches!(self, ProviderType::Ocp)
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}
