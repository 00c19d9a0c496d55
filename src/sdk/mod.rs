//! Boundary types for the cloud SDK this crate feeds and consumes.
//!
//! The real SDK exposes far richer records; the rest of the crate relies on
//! nothing beyond what is modelled here, so callers adapt at this seam.

use std::fmt;

/// Opaque service-principal credential handle, presented to the SDK as
/// proof of identity. Immutable after construction; building one performs
/// no I/O.
#[derive(Clone)]
pub struct ServicePrincipalCredential {
    client_id: String,
    secret: String,
    subscription_id: String,
    tenant: String,
}

impl ServicePrincipalCredential {
    pub fn new(
        client_id: impl Into<String>,
        secret: impl Into<String>,
        subscription_id: impl Into<String>,
        tenant: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            secret: secret.into(),
            subscription_id: subscription_id.into(),
            tenant: tenant.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    pub fn tenant(&self) -> &str {
        &self.tenant
    }
}

impl fmt::Debug for ServicePrincipalCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServicePrincipalCredential")
            .field("client_id", &self.client_id)
            .field("secret", &"<redacted>")
            .field("subscription_id", &self.subscription_id)
            .field("tenant", &self.tenant)
            .finish()
    }
}

/// Minimal view of one discovered image version: a human-readable build
/// label and the provider-internal locator of the disk artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageVersion {
    name: String,
    location: String,
}

impl ImageVersion {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

#[cfg(test)]
mod tests {
    use super::ServicePrincipalCredential;

    #[test]
    fn debug_output_redacts_the_secret() {
        let credential =
            ServicePrincipalCredential::new("client", "hunter2", "subscription", "tenant");

        let rendered = format!("{credential:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("hunter2"));
    }
}
