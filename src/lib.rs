//! Conversion of Azure image-catalog entries into simplestreams metadata.
//!
//! Two stateless entry points make up the pipeline: [`resolve_credentials`]
//! extracts the Azure service-principal fields from a multi-provider
//! credentials document, and [`make_item`] turns one discovered image
//! version into a canonical simplestreams [`Item`]. An external orchestrator
//! enumerates versions with the resulting credential and calls `make_item`
//! once per version per region; [`items_to_trees`] groups the flat items
//! into the nested product catalog that the stream format expects.

mod credentials;
mod sdk;
mod streams;

pub use credentials::{
    AzureCredentials, CloudCredentials, CredentialError, resolve_credentials,
};
pub use sdk::{ImageVersion, ServicePrincipalCredential};
pub use streams::{
    CONTENT_ID, IdentitySpec, Item, PRODUCT_NAME, Product, ProductTree, StreamsError, Version,
    items_to_trees, make_item,
};
