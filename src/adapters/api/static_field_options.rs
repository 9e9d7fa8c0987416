//! Static implementation of FieldOptionProvider for development and
//! testing.
//!
//! Serves a fixed option table seeded at construction. Unknown fields
//! resolve to an empty list, matching how the tracker answers a filter
//! that selects nothing.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::ports::{FieldOption, FieldOptionError, FieldOptionProvider};

/// Field option provider backed by a fixed table.
#[derive(Debug, Clone, Default)]
pub struct StaticFieldOptions {
    options: HashMap<String, Vec<FieldOption>>,
}

impl StaticFieldOptions {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the full option list for a field.
    pub fn with_field(mut self, field_name: impl Into<String>, options: Vec<FieldOption>) -> Self {
        self.options.insert(field_name.into(), options);
        self
    }

    /// Sets a field's options from plain values, numbering ids and
    /// display order by position.
    pub fn with_values(mut self, field_name: impl Into<String>, values: &[&str]) -> Self {
        let options = values
            .iter()
            .enumerate()
            .map(|(index, value)| FieldOption {
                id: index as i64 + 1,
                option_value: value.to_string(),
                display_order: index as i32 + 1,
            })
            .collect();
        self.options.insert(field_name.into(), options);
        self
    }
}

#[async_trait]
impl FieldOptionProvider for StaticFieldOptions {
    async fn options_for(&self, field_name: &str) -> Result<Vec<FieldOption>, FieldOptionError> {
        let mut options = self.options.get(field_name).cloned().unwrap_or_default();
        FieldOption::display_sort(&mut options);
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_seeded_values_in_order() {
        let provider =
            StaticFieldOptions::new().with_values("department", &["Claims", "Finance", "IT"]);

        let options = provider.options_for("department").await.unwrap();
        let values: Vec<&str> = options.iter().map(|o| o.option_value.as_str()).collect();
        assert_eq!(values, vec!["Claims", "Finance", "IT"]);
    }

    #[tokio::test]
    async fn unknown_field_resolves_to_empty() {
        let provider = StaticFieldOptions::new();

        let options = provider.options_for("status").await.unwrap();
        assert!(options.is_empty());
    }

    #[tokio::test]
    async fn explicit_options_are_display_sorted() {
        let provider = StaticFieldOptions::new().with_field(
            "benefit",
            vec![
                FieldOption {
                    id: 1,
                    option_value: "Revenue Growth".to_string(),
                    display_order: 2,
                },
                FieldOption {
                    id: 2,
                    option_value: "Cost Reduction".to_string(),
                    display_order: 1,
                },
            ],
        );

        let options = provider.options_for("benefit").await.unwrap();
        assert_eq!(options[0].option_value, "Cost Reduction");
        assert_eq!(options[1].option_value, "Revenue Growth");
    }
}
