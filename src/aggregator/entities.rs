use crate::cli::SortOrder;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::collections::HashMap;

/// A single property value and how many times it occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount {
    pub value: String,
    pub count: u64,
}

/// Per-slug value counts in first-encounter order
///
/// Slugs are kept in the order they were first recorded, and so are the
/// values within each slug. The slug lookup is hash-keyed with a parallel
/// order list; the value lookup within a slug is a linear scan (values
/// per slug are typically few).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    order: Vec<String>,
    by_slug: HashMap<String, Vec<ValueCount>>,
}

impl Aggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a slug/value pair
    pub fn record(&mut self, slug: &str, value: &str) {
        match self.by_slug.get_mut(slug) {
            Some(values) => match values.iter_mut().find(|vc| vc.value == value) {
                Some(vc) => vc.count += 1,
                None => values.push(ValueCount {
                    value: value.to_string(),
                    count: 1,
                }),
            },
            None => {
                self.order.push(slug.to_string());
                self.by_slug.insert(
                    slug.to_string(),
                    vec![ValueCount {
                        value: value.to_string(),
                        count: 1,
                    }],
                );
            }
        }
    }

    /// Value counts for one slug, in first-encounter order
    pub fn get(&self, slug: &str) -> Option<&[ValueCount]> {
        self.by_slug.get(slug).map(Vec::as_slice)
    }

    /// Iterate slugs and their value counts in first-encounter order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ValueCount])> {
        self.order
            .iter()
            .filter_map(|slug| Some((slug.as_str(), self.by_slug.get(slug)?.as_slice())))
    }

    /// Number of distinct slugs
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total property occurrences across all slugs
    pub fn total_occurrences(&self) -> u64 {
        self.by_slug
            .values()
            .flat_map(|values| values.iter())
            .map(|vc| vc.count)
            .sum()
    }

    /// A copy with the per-slug value lists reordered for display
    ///
    /// Slug order is never changed; only the value lists within each slug
    /// are reordered. `SortOrder::None` returns an unchanged copy.
    pub fn sorted(&self, order: SortOrder) -> Aggregation {
        let mut sorted = self.clone();
        match order {
            SortOrder::None => {}
            SortOrder::Count => {
                for values in sorted.by_slug.values_mut() {
                    values.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
                }
            }
            SortOrder::Value => {
                for values in sorted.by_slug.values_mut() {
                    values.sort_by(|a, b| a.value.cmp(&b.value));
                }
            }
        }
        sorted
    }
}

/// Serializes as `{ "<slug>": [["<value>", <count>], ...], ... }` with
/// slugs and values in first-encounter order.
impl Serialize for Aggregation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (slug, values) in self.iter() {
            let pairs: Vec<(&str, u64)> = values
                .iter()
                .map(|vc| (vc.value.as_str(), vc.count))
                .collect();
            map.serialize_entry(slug, &pairs)?;
        }
        map.end()
    }
}
