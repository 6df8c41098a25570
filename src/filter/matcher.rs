use super::parser::{ModelFilterSet, PropertyFilterMap};
use crate::loader::Entity;
use colored::Colorize;
use std::collections::BTreeSet;

/// The selection predicate applied to each entity
///
/// Combines the parsed model set and property map with OR semantics: an
/// entity is selected when its model is in the set, or when at least one
/// of its properties matches the property map.
#[derive(Debug, Clone, Default)]
pub struct EntityFilter {
    models: ModelFilterSet,
    properties: PropertyFilterMap,
}

impl EntityFilter {
    pub fn new(models: ModelFilterSet, properties: PropertyFilterMap) -> Self {
        Self { models, properties }
    }

    /// An empty model set disables filtering entirely; property filters
    /// alone never narrow the dataset.
    pub fn is_unfiltered(&self) -> bool {
        self.models.is_empty()
    }

    pub fn models(&self) -> &ModelFilterSet {
        &self.models
    }

    pub fn property_slugs(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Check whether this entity passes the selection predicate
    pub fn matches(&self, entity: &Entity) -> bool {
        let model_match = self.models.contains(&entity.model);

        let property_match = !self.properties.is_empty()
            && entity.properties.iter().any(|property| {
                self.properties
                    .get(&property.slug)
                    .is_some_and(|values| values.contains(&property.value))
            });

        model_match || property_match
    }
}

/// Print warnings for filter values that cannot match the loaded dataset
///
/// A model identifier absent from the data, or a property slug no entity
/// carries, selects nothing from that predicate. Usually a typo.
pub fn print_filter_warnings(filter: &EntityFilter, entities: &[Entity]) {
    let known_models: BTreeSet<&str> = entities.iter().map(|e| e.model.as_str()).collect();

    for model in filter.models() {
        if !known_models.contains(model.as_str()) {
            eprintln!(
                "{} model '{}' does not appear in the dataset",
                "Warning:".yellow().bold(),
                model
            );
        }
    }

    for slug in filter.property_slugs() {
        if !entities.iter().any(|e| e.has_slug(slug)) {
            eprintln!(
                "{} no entity carries a property with slug '{}'",
                "Warning:".yellow().bold(),
                slug
            );
        }
    }
}
