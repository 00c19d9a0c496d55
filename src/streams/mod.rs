mod item;
mod tree;

use std::collections::BTreeMap;

pub use item::Item;
pub use tree::{Product, ProductTree, Version, items_to_trees};

use crate::sdk::ImageVersion;

/// Content id for every item this pipeline emits.
pub const CONTENT_ID: &str = "com.ubuntu.cloud:released:azure";
/// Product name for every item this pipeline emits.
pub const PRODUCT_NAME: &str = "com.ubuntu.cloud:windows";

const ARCH: &str = "amd64";
const VIRT: &str = "Hyper-V";
const LABEL: &str = "release";

/// The (publisher, offer, sku) triple identifying a logical image line,
/// independent of region or version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentitySpec {
    publisher: String,
    offer: String,
    sku: String,
}

impl IdentitySpec {
    pub fn new(
        publisher: impl Into<String>,
        offer: impl Into<String>,
        sku: impl Into<String>,
    ) -> Self {
        Self {
            publisher: publisher.into(),
            offer: offer.into(),
            sku: sku.into(),
        }
    }

    /// Build a spec from an ordered sequence, enforcing the 3-field arity.
    pub fn from_slice(fields: &[String]) -> Result<Self, StreamsError> {
        match fields {
            [publisher, offer, sku] => Ok(Self::new(publisher, offer, sku)),
            other => Err(StreamsError::SpecArity(other.len())),
        }
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn offer(&self) -> &str {
        &self.offer
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// Composite image id: publisher, offer, sku and version name joined
    /// with colons. Embedded colons in any field are not escaped, so such
    /// ids are ambiguous; the upstream format behaves the same way.
    pub fn image_id(&self, version_name: &str) -> String {
        format!(
            "{}:{}:{}:{}",
            self.publisher, self.offer, self.sku, version_name
        )
    }
}

/// Build the simplestreams item describing one image version's availability
/// in one region.
///
/// Pure construction: the result is fully determined by the five inputs,
/// and identical inputs always yield value-equal items. `release`,
/// `region_name` and `endpoint` are copied verbatim, with no validation.
pub fn make_item(
    version: &ImageVersion,
    spec: &IdentitySpec,
    release: &str,
    region_name: &str,
    endpoint: &str,
) -> Item {
    let data = BTreeMap::from([
        ("arch".to_string(), ARCH.to_string()),
        ("virt".to_string(), VIRT.to_string()),
        ("region".to_string(), region_name.to_string()),
        ("id".to_string(), spec.image_id(version.name())),
        ("label".to_string(), LABEL.to_string()),
        ("endpoint".to_string(), endpoint.to_string()),
        ("release".to_string(), release.to_string()),
    ]);

    Item::new(
        CONTENT_ID,
        PRODUCT_NAME,
        version.name(),
        version.location(),
        data,
    )
}

#[derive(thiserror::Error, Debug)]
pub enum StreamsError {
    #[error("identity spec must have exactly 3 fields (publisher, offer, sku), got {0}")]
    SpecArity(usize),
}
