use thiserror::Error;

/// Errors that can occur when parsing filter tokens
#[derive(Debug, Error)]
pub enum FilterParseError {
    #[error("Invalid property filter '{0}': expected 'slug:value1,value2' format")]
    MissingSeparator(String),

    #[error("Invalid property filter '{0}': the slug before ':' is empty")]
    EmptySlug(String),

    #[error("Property filter for '{0}' lists no values")]
    EmptyValues(String),
}
