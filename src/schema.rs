//! Input and output schema descriptors
//!
//! A [`Schema`] is an opaque structural descriptor attached to a model's
//! `input_schema` and `output_schema`. The model and decorator core only
//! store and forward schemas; interpretation happens in the schema
//! validation decorator, which checks values against the JSON Schema
//! document compiled here.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

/// Errors from building a schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Invalid schema '{name}': {reason}")]
    InvalidSchema { name: String, reason: String },
}

/// A named JSON Schema document with its pre-compiled validator.
///
/// Cloning is cheap: the document and validator are shared.
#[derive(Clone)]
pub struct Schema {
    name: String,
    definition: Arc<Value>,
    validator: Arc<jsonschema::Validator>,
}

impl Schema {
    /// Compile `definition` into a schema.
    pub fn new(name: impl Into<String>, definition: Value) -> Result<Self, SchemaError> {
        let name = name.into();
        let validator =
            jsonschema::validator_for(&definition).map_err(|e| SchemaError::InvalidSchema {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            name,
            definition: Arc::new(definition),
            validator: Arc::new(validator),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw JSON Schema document.
    pub fn definition(&self) -> &Value {
        &self.definition
    }

    /// Returns true if `value` conforms to the schema.
    pub fn is_valid(&self, value: &Value) -> bool {
        self.validator.is_valid(value)
    }

    /// Validate `value`, collecting one message per violation.
    pub fn validate(&self, value: &Value) -> Result<(), Vec<String>> {
        let errors: Vec<String> = self
            .validator
            .iter_errors(value)
            .map(|e| {
                let path = e.instance_path.to_string();
                if path.is_empty() {
                    e.to_string()
                } else {
                    format!("at '{}': {}", path, e)
                }
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.definition == other.definition
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("definition", &self.definition)
            .finish()
    }
}
