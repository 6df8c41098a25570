//! Entity selection and property-value aggregation
//!
//! The engine takes the loaded entity list and the parsed filter, selects
//! the matching entities, and folds their properties into a per-slug
//! value-count table. With no model filter the dataset passes through
//! untouched instead (see [`run_analysis`]).

mod display;
mod entities;

pub use display::{
    aggregation_to_json, create_styled_table, display_aggregation, entities_to_json,
    format_aggregation_text,
};
pub use entities::{Aggregation, ValueCount};

use crate::filter::EntityFilter;
use crate::loader::Entity;

/// Outcome of one analysis run
#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    /// Frequency table over the selected entities
    Aggregated {
        /// Entities that passed the selection predicate
        selected: usize,
        /// Entities in the input dataset
        total: usize,
        aggregation: Aggregation,
    },
    /// No model filter was supplied; the dataset passes through unchanged
    Unfiltered(Vec<Entity>),
}

/// Select the entities passing the filter, preserving input order
pub fn select_entities<'a>(entities: &'a [Entity], filter: &EntityFilter) -> Vec<&'a Entity> {
    entities.iter().filter(|e| filter.matches(e)).collect()
}

/// Fold entities into a per-slug value-count table
///
/// Entities are visited in order, and each entity's properties in order,
/// so the table's slug and value ordering is first-encounter order. Every
/// property occurrence counts; duplicates within one entity are not
/// deduplicated.
pub fn aggregate_properties<'a, I>(entities: I) -> Aggregation
where
    I: IntoIterator<Item = &'a Entity>,
{
    let mut aggregation = Aggregation::new();
    for entity in entities {
        for property in &entity.properties {
            aggregation.record(&property.slug, &property.value);
        }
    }
    aggregation
}

/// Run the full selection-and-aggregation pass over the dataset
///
/// With an empty model set the selection predicate is not run at all: the
/// whole dataset is returned unaggregated, property filters included.
// TODO: decide whether property-only filters should select on their own
// instead of falling through to the raw dataset.
pub fn run_analysis(entities: &[Entity], filter: &EntityFilter) -> AnalysisOutcome {
    if filter.is_unfiltered() {
        return AnalysisOutcome::Unfiltered(entities.to_vec());
    }

    let selected = select_entities(entities, filter);
    let aggregation = aggregate_properties(selected.iter().copied());

    AnalysisOutcome::Aggregated {
        selected: selected.len(),
        total: entities.len(),
        aggregation,
    }
}
