use std::collections::BTreeMap;

use thiserror::Error;

/// Field-keyed validation messages accumulated while checking a create,
/// update, or destroy operation.
///
/// Keys are attribute names as exposed in the API; the `base` key holds
/// record-level messages that do not belong to a single attribute.
#[derive(Error, Debug, Clone, Default, PartialEq)]
#[error("Validation failed")]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn into_fields(self) -> BTreeMap<String, Vec<String>> {
        self.fields
    }

    /// Ok when no messages were recorded, Err(self) otherwise.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}
