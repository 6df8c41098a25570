use super::error::FilterParseError;
use std::collections::{BTreeMap, BTreeSet};

/// Set of model identifiers an entity's `model` must belong to
pub type ModelFilterSet = BTreeSet<String>;

/// Map from property slug to the set of accepted values for that slug
pub type PropertyFilterMap = BTreeMap<String, BTreeSet<String>>;

/// Parse model filter tokens into a set of model identifiers
///
/// Only the first token is consulted: the compact CLI encoding joins all
/// models into a single comma-separated argument (e.g.
/// `-m Person,Organization`), so any additional occurrences are ignored.
/// Pieces are trimmed and empty pieces dropped; an absent or empty first
/// token yields the empty set, which disables model filtering.
pub fn parse_model_filters(tokens: &[String]) -> ModelFilterSet {
    let Some(first) = tokens.first() else {
        return ModelFilterSet::new();
    };

    first
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse property filter tokens into a slug -> accepted-values map
///
/// Each token has the form `slug:value1,value2`. The token is split on the
/// first `:` only, so values may themselves contain `:`. Slug and values
/// are trimmed. A slug repeating across tokens overwrites the earlier
/// occurrence (last-write-wins); values from separate tokens are not
/// merged.
pub fn parse_property_filters(tokens: &[String]) -> Result<PropertyFilterMap, FilterParseError> {
    let mut filters = PropertyFilterMap::new();

    for token in tokens {
        let (slug, values) = parse_property_token(token)?;
        filters.insert(slug, values);
    }

    Ok(filters)
}

/// Parse a single `slug:value1,value2` token
fn parse_property_token(token: &str) -> Result<(String, BTreeSet<String>), FilterParseError> {
    let Some((slug, value_list)) = token.split_once(':') else {
        return Err(FilterParseError::MissingSeparator(token.to_string()));
    };

    let slug = slug.trim();
    if slug.is_empty() {
        return Err(FilterParseError::EmptySlug(token.to_string()));
    }

    let values: BTreeSet<String> = value_list
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect();

    if values.is_empty() {
        return Err(FilterParseError::EmptyValues(slug.to_string()));
    }

    Ok((slug.to_string(), values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_single_model() {
        let models = parse_model_filters(&tokens(&["Person"]));
        assert_eq!(models.len(), 1);
        assert!(models.contains("Person"));
    }

    #[test]
    fn test_parse_comma_separated_models() {
        let models = parse_model_filters(&tokens(&["Person,Organization"]));
        assert!(models.contains("Person"));
        assert!(models.contains("Organization"));
    }

    #[test]
    fn test_model_pieces_are_trimmed_and_empties_dropped() {
        let models = parse_model_filters(&tokens(&[" Person , ,Org "]));
        assert_eq!(models.len(), 2);
        assert!(models.contains("Person"));
        assert!(models.contains("Org"));
    }

    #[test]
    fn test_absent_or_empty_model_token_yields_empty_set() {
        assert!(parse_model_filters(&[]).is_empty());
        assert!(parse_model_filters(&tokens(&[""])).is_empty());
    }

    #[test]
    fn test_only_first_model_token_is_consulted() {
        let models = parse_model_filters(&tokens(&["Person", "Organization"]));
        assert_eq!(models.len(), 1);
        assert!(models.contains("Person"));
        assert!(!models.contains("Organization"));
    }

    #[test]
    fn test_parse_single_property_token() {
        let filters = parse_property_filters(&tokens(&["city:Paris,Lyon"])).unwrap();
        let values = filters.get("city").unwrap();
        assert!(values.contains("Paris"));
        assert!(values.contains("Lyon"));
    }

    #[test]
    fn test_property_slug_and_values_are_trimmed() {
        let filters = parse_property_filters(&tokens(&[" city : Paris , Lyon "])).unwrap();
        let values = filters.get("city").unwrap();
        assert_eq!(values.len(), 2);
        assert!(values.contains("Paris"));
    }

    #[test]
    fn test_repeated_slug_is_last_write_wins() {
        let filters = parse_property_filters(&tokens(&["city:Paris", "city:Lyon"])).unwrap();
        let values = filters.get("city").unwrap();
        assert_eq!(values.len(), 1);
        assert!(values.contains("Lyon"));
        assert!(!values.contains("Paris"));
    }

    #[test]
    fn test_value_may_contain_a_colon() {
        let filters = parse_property_filters(&tokens(&["url:http://a,http://b"])).unwrap();
        let values = filters.get("url").unwrap();
        assert!(values.contains("http://a"));
        assert!(values.contains("http://b"));
    }

    #[test]
    fn test_token_without_separator_is_an_error() {
        let err = parse_property_filters(&tokens(&["city"])).unwrap_err();
        assert!(matches!(err, FilterParseError::MissingSeparator(_)));
        assert!(err.to_string().contains("city"));
    }

    #[test]
    fn test_empty_slug_is_an_error() {
        let err = parse_property_filters(&tokens(&[":Paris"])).unwrap_err();
        assert!(matches!(err, FilterParseError::EmptySlug(_)));
    }

    #[test]
    fn test_empty_value_list_is_an_error() {
        let err = parse_property_filters(&tokens(&["city:"])).unwrap_err();
        assert!(matches!(err, FilterParseError::EmptyValues(_)));

        let err = parse_property_filters(&tokens(&["city: , "])).unwrap_err();
        assert!(matches!(err, FilterParseError::EmptyValues(_)));
    }
}
