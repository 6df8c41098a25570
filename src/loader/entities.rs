use serde::{Deserialize, Serialize};

/// One record in the input dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Model identifier (e.g. "Person", "Organization")
    pub model: String,
    /// Properties attached to this entity, in file order
    pub properties: Vec<Property>,
}

/// A slug/value pair attached to an entity
///
/// The same slug may appear more than once on one entity; each occurrence
/// counts separately during aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Semantic name of the property (e.g. "city")
    pub slug: String,
    /// The property's value (e.g. "Paris")
    pub value: String,
}

impl Entity {
    /// Check if this entity carries at least one property with the given slug
    pub fn has_slug(&self, slug: &str) -> bool {
        self.properties.iter().any(|p| p.slug == slug)
    }
}
