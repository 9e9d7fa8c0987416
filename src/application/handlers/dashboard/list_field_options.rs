//! ListFieldOptionsHandler - Query handler for form dropdown choices.
//!
//! Dashboard filters and forms draw their selectable values from the
//! operator-maintained option lists rather than hard-coded enums.

use std::sync::Arc;

use crate::ports::{FieldOption, FieldOptionError, FieldOptionProvider};

/// Query for one field's selectable options.
#[derive(Debug, Clone)]
pub struct ListFieldOptionsQuery {
    pub field_name: String,
}

/// Result: the field's options in display order.
pub type ListFieldOptionsResult = Vec<FieldOption>;

/// Handler for loading field options.
pub struct ListFieldOptionsHandler {
    options: Arc<dyn FieldOptionProvider>,
}

impl ListFieldOptionsHandler {
    pub fn new(options: Arc<dyn FieldOptionProvider>) -> Self {
        Self { options }
    }

    pub async fn handle(
        &self,
        query: ListFieldOptionsQuery,
    ) -> Result<ListFieldOptionsResult, FieldOptionError> {
        self.options.options_for(&query.field_name).await
    }
}
