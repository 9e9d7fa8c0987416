//! Accumulated questionnaire answers.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::foundation::ValidationError;

/// Answers collected so far, keyed by field identifier.
///
/// Keys are unique and iteration follows insertion order, which in turn
/// follows question order. Serializes to a flat JSON object, the shape
/// the recommendation endpoints accept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMap {
    entries: Vec<(String, String)>,
}

impl ResponseMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer for a field.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the field already has an answer.
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let field = field.into();
        if self.contains(&field) {
            return Err(ValidationError::invalid_format(
                field,
                "field already answered",
            ));
        }
        self.entries.push((field, answer.into()));
        Ok(())
    }

    /// The answer recorded for a field, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, answer)| answer.as_str())
    }

    /// True when the field already has an answer.
    pub fn contains(&self, field: &str) -> bool {
        self.entries.iter().any(|(f, _)| f == field)
    }

    /// Number of recorded answers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no answers have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field identifiers in insertion order.
    pub fn fields(&self) -> Vec<&str> {
        self.entries.iter().map(|(f, _)| f.as_str()).collect()
    }

    /// Iterates (field, answer) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(f, a)| (f.as_str(), a.as_str()))
    }
}

impl Serialize for ResponseMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, answer) in &self.entries {
            map.serialize_entry(field, answer)?;
        }
        map.end()
    }
}
