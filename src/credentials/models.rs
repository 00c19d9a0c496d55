use serde::{Deserialize, Serialize};

/// Public model; serde is confined to this module tree.
///
/// The on-disk document is keyed by provider name. Only the `azure` section
/// is typed; other providers may be present but are not interpreted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudCredentials {
    #[serde(default)]
    pub(crate) azure: Option<ProviderSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSection {
    pub(crate) credentials: AzureCredentials,
}

/// The four service-principal fields Azure needs. All are required; a
/// missing key fails at deserialization time. Field *content* is never
/// validated, matching the permissiveness of the rest of the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AzureCredentials {
    pub(crate) application_id: String,
    pub(crate) application_password: String,
    pub(crate) subscription_id: String,
    pub(crate) tenant_id: String,
}

impl CloudCredentials {
    // Borrowing getters (no clones).
    pub fn azure(&self) -> Option<&AzureCredentials> {
        self.azure.as_ref().map(|section| &section.credentials)
    }
}

impl AzureCredentials {
    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    pub fn application_password(&self) -> &str {
        &self.application_password
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }
}
