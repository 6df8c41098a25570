//! Filter token parsing and entity matching
//!
//! This module turns the compact filter tokens from the command line into
//! structured predicates and applies them to entities.
//!
//! # Syntax
//!
//! ```text
//! -m Person,Organization      Models to include, one comma-separated token
//! -p slug:value1,value2       Accepted values for one property slug
//! ```
//!
//! Model and property predicates combine with OR: an entity is selected
//! when its model is in the model set, or when any of its properties
//! matches the property map.
//!
//! # Examples
//!
//! ```text
//! -m Person                           # All Person entities
//! -m Person,Org                       # Person and Org entities
//! -m Person -p city:Lyon              # Person entities, plus anything in Lyon
//! -p city:Paris,Lyon                  # No model filter: the dataset passes
//!                                     # through unfiltered (see matcher)
//! ```

pub mod error;
pub mod matcher;
pub mod parser;

pub use error::FilterParseError;
pub use matcher::{EntityFilter, print_filter_warnings};
pub use parser::{
    ModelFilterSet, PropertyFilterMap, parse_model_filters, parse_property_filters,
};
