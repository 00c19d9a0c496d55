mod models;

use std::{fs, path::Path};

pub use models::{AzureCredentials, CloudCredentials};

use crate::sdk::ServicePrincipalCredential;

// ---- Public API (serde hidden from callers) ----

impl CloudCredentials {
    /// Load the credentials document from a JSON file path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CredentialError> {
        let data = fs::read_to_string(path).map_err(CredentialError::Io)?;
        Self::from_json_str(&data)
    }

    /// Parse the credentials document from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, CredentialError> {
        serde_json::from_str(json).map_err(CredentialError::Json)
    }
}

/// Extract the Azure service principal from a multi-provider credentials
/// document.
///
/// Returns the subscription id verbatim (callers need it to scope later API
/// calls) together with the constructed credential handle. Field values are
/// passed through untouched; anything malformed is rejected downstream by
/// the SDK, not here.
pub fn resolve_credentials(
    all_credentials: &CloudCredentials,
) -> Result<(String, ServicePrincipalCredential), CredentialError> {
    let azure = all_credentials
        .azure()
        .ok_or(CredentialError::ProviderNotConfigured("azure"))?;

    let credential = ServicePrincipalCredential::new(
        azure.application_id(),
        azure.application_password(),
        azure.subscription_id(),
        azure.tenant_id(),
    );

    Ok((azure.subscription_id().to_string(), credential))
}

/// ---- Errors ----
#[derive(thiserror::Error, Debug)]
pub enum CredentialError {
    #[error("cloud provider '{0}' has no credentials configured")]
    ProviderNotConfigured(&'static str),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::{CloudCredentials, CredentialError, resolve_credentials};

    fn sample_document() -> &'static str {
        r#"{
            "azure": {
                "credentials": {
                    "application-id": "application-id1",
                    "application-password": "password1",
                    "subscription-id": "subscription-id1",
                    "tenant-id": "tenant-id1"
                }
            }
        }"#
    }

    #[test]
    fn resolve_extracts_subscription_and_builds_credential() {
        let all = CloudCredentials::from_json_str(sample_document())
            .expect("document must parse");

        let (subscription_id, credential) =
            resolve_credentials(&all).expect("resolution must succeed");

        assert_eq!(subscription_id, "subscription-id1");
        assert_eq!(credential.client_id(), "application-id1");
        assert_eq!(credential.secret(), "password1");
        assert_eq!(credential.subscription_id(), "subscription-id1");
        assert_eq!(credential.tenant(), "tenant-id1");
    }

    #[test]
    fn missing_field_fails_before_any_credential_exists() {
        let required = [
            "application-id",
            "application-password",
            "subscription-id",
            "tenant-id",
        ];

        for omitted in required {
            let mut document: serde_json::Value =
                serde_json::from_str(sample_document()).unwrap();
            document["azure"]["credentials"]
                .as_object_mut()
                .unwrap()
                .remove(omitted);

            let result = CloudCredentials::from_json_str(&document.to_string());
            assert!(
                matches!(result, Err(CredentialError::Json(_))),
                "expected parse failure when '{omitted}' is absent"
            );
        }
    }

    #[test]
    fn missing_provider_section_is_reported() {
        let all = CloudCredentials::from_json_str("{}").expect("empty document parses");

        let result = resolve_credentials(&all);
        assert!(matches!(
            result,
            Err(CredentialError::ProviderNotConfigured("azure"))
        ));
    }

    #[test]
    fn field_content_is_not_validated() {
        let all = CloudCredentials::from_json_str(
            r#"{
                "azure": {
                    "credentials": {
                        "application-id": "",
                        "application-password": "",
                        "subscription-id": "",
                        "tenant-id": ""
                    }
                }
            }"#,
        )
        .expect("empty strings are accepted");

        let (subscription_id, _) = resolve_credentials(&all).expect("resolution must succeed");
        assert_eq!(subscription_id, "");
    }
}
