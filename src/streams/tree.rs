use serde::Serialize;
use std::collections::BTreeMap;

use super::Item;

/// Top-level container for one serialized simplestreams catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductTree {
    content_id: String,
    products: BTreeMap<String, Product>,
}

impl ProductTree {
    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    pub fn products(&self) -> &BTreeMap<String, Product> {
        &self.products
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Product {
    versions: BTreeMap<String, Version>,
}

impl Product {
    pub fn versions(&self) -> &BTreeMap<String, Version> {
        &self.versions
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Version {
    items: BTreeMap<String, BTreeMap<String, String>>,
}

impl Version {
    pub fn items(&self) -> &BTreeMap<String, BTreeMap<String, String>> {
        &self.items
    }
}

/// Group flat items into nested catalogues, keyed by content id.
///
/// Products nest under their product name, versions under their version
/// name, and each item's attribute map lands under its item name. Input
/// order is immaterial: the maps give the stream a canonical ordering. A
/// later duplicate of the same (content id, product, version, item) path
/// overwrites the earlier entry.
pub fn items_to_trees(items: &[Item]) -> BTreeMap<String, ProductTree> {
    let mut trees: BTreeMap<String, ProductTree> = BTreeMap::new();

    for item in items {
        let tree = trees
            .entry(item.content_id().to_string())
            .or_insert_with(|| ProductTree {
                content_id: item.content_id().to_string(),
                products: BTreeMap::new(),
            });
        let product = tree
            .products
            .entry(item.product_name().to_string())
            .or_default();
        let version = product
            .versions
            .entry(item.version_name().to_string())
            .or_default();
        version
            .items
            .insert(item.item_name().to_string(), item.data().clone());
    }

    trees
}
