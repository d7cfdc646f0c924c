//! Placeholder substitution for component names.
//! Replaces the four casing variants of the placeholder token with the
//! matching casing of a component name, in file contents and file paths alike.

use std::path::{Component, Path};

use regex::Regex;
use serde::Deserialize;

use crate::constants::{
    COMPONENT_NAME, COMPONENT_NAME_CAMEL, COMPONENT_NAME_LOWER, COMPONENT_NAME_UPPER,
};
use crate::error::{Error, Result};

/// How placeholder tokens are matched inside text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubstitutionMode {
    /// Every literal occurrence matches, including ones embedded in longer
    /// identifiers such as `MYCOMPONENT_NAME_X`.
    #[default]
    Literal,
    /// Only occurrences delimited by word boundaries match.
    #[serde(rename = "word")]
    WordBoundary,
}

/// Rejects names that cannot be substituted or used as a path segment.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidArgument("component name must not be empty".to_string()));
    }
    if name.contains(['/', '\\']) {
        return Err(Error::InvalidArgument(format!(
            "component name '{name}' must not contain a path separator"
        )));
    }
    let mut components = Path::new(name).components();
    if !matches!((components.next(), components.next()), (Some(Component::Normal(_)), None)) {
        return Err(Error::InvalidArgument(format!(
            "component name '{name}' must be a plain directory name"
        )));
    }
    Ok(())
}

fn lower_first(name: &str) -> Result<String> {
    let mut chars = name.chars();
    let first = chars.next().ok_or_else(|| {
        Error::InvalidArgument("cannot lowercase the first character of an empty name".to_string())
    })?;
    Ok(first.to_lowercase().chain(chars).collect())
}

struct Placeholder {
    token: &'static str,
    value: String,
    pattern: Option<Regex>,
}

/// The four placeholder tokens and their replacements for one component name.
pub struct Placeholders {
    entries: Vec<Placeholder>,
}

impl Placeholders {
    /// Builds the literal-matching placeholder set for `name`.
    pub fn new(name: &str) -> Result<Self> {
        Self::with_mode(name, SubstitutionMode::Literal)
    }

    pub fn with_mode(name: &str, mode: SubstitutionMode) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::InvalidArgument("component name must not be empty".to_string()));
        }

        let pairs = [
            (COMPONENT_NAME, name.to_string()),
            (COMPONENT_NAME_LOWER, name.to_lowercase()),
            (COMPONENT_NAME_UPPER, name.to_uppercase()),
            (COMPONENT_NAME_CAMEL, lower_first(name)?),
        ];

        let entries = pairs
            .into_iter()
            .map(|(token, value)| -> Result<Placeholder> {
                let pattern = match mode {
                    SubstitutionMode::Literal => None,
                    SubstitutionMode::WordBoundary => {
                        Some(Regex::new(&format!(r"\b{}\b", regex::escape(token)))?)
                    }
                };
                Ok(Placeholder { token, value, pattern })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    /// Replaces every placeholder occurrence in `text`.
    ///
    /// Tokens are applied one after another on the updated string, so a later
    /// token may match text produced by an earlier replacement.
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for entry in &self.entries {
            match &entry.pattern {
                Some(pattern) => {
                    if pattern.is_match(&result) {
                        result = pattern
                            .replace_all(&result, regex::NoExpand(entry.value.as_str()))
                            .into_owned();
                    }
                }
                None => {
                    if result.contains(entry.token) {
                        result = result.replace(entry.token, &entry.value);
                    }
                }
            }
        }
        result
    }
}

/// Substitutes all placeholder tokens in `text` with casings of `name`.
///
/// # Errors
/// * `Error::InvalidArgument` if `name` is empty
pub fn substitute(text: &str, name: &str) -> Result<String> {
    Ok(Placeholders::new(name)?.apply(text))
}

/// Same as [`substitute`] with an explicit matching mode.
pub fn substitute_with(text: &str, name: &str, mode: SubstitutionMode) -> Result<String> {
    Ok(Placeholders::with_mode(name, mode)?.apply(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("Button").unwrap(), "button");
        assert_eq!(lower_first("URLField").unwrap(), "uRLField");
        assert_eq!(lower_first("Ébène").unwrap(), "ébène");
        assert!(lower_first("").is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Button").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("a/b").is_err());
        assert!(validate_name("a\\b").is_err());
        assert!(validate_name(".").is_err());
        assert!(validate_name("..").is_err());
        assert!(validate_name("..Button").is_ok());
    }
}
