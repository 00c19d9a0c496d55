use serde::Serialize;
use std::collections::BTreeMap;

/// One simplestreams metadata record: the four positional identifiers plus
/// the free-form attribute map describing the image's availability.
///
/// The attribute map is ordered so a serialized stream is byte-stable for
/// identical inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    content_id: String,
    product_name: String,
    version_name: String,
    item_name: String,
    data: BTreeMap<String, String>,
}

impl Item {
    pub fn new(
        content_id: impl Into<String>,
        product_name: impl Into<String>,
        version_name: impl Into<String>,
        item_name: impl Into<String>,
        data: BTreeMap<String, String>,
    ) -> Self {
        Self {
            content_id: content_id.into(),
            product_name: product_name.into(),
            version_name: version_name.into(),
            item_name: item_name.into(),
            data,
        }
    }

    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn version_name(&self) -> &str {
        &self.version_name
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn data(&self) -> &BTreeMap<String, String> {
        &self.data
    }
}
