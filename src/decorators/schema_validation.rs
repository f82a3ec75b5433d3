//! Schema validation decorator
//!
//! Checks prediction input against the wrapped model's `input_schema`
//! before the model runs, and the result against `output_schema` after it
//! returns. Violations fail with [`ModelError::SchemaValidation`]; a model
//! that declares no schema for a side is not checked on that side.
//!
//! Configuration keys:
//! - `validate_input` (bool, default `true`)
//! - `validate_output` (bool, default `true`)

use serde_json::Value;

use crate::config::Configuration;
use crate::decorator::{Decorate, MLModelDecorator};
use crate::error::{DecoratorError, ModelError, SchemaDirection};
use crate::model::MLModel;
use crate::schema::Schema;

#[derive(Debug, Clone)]
pub struct SchemaValidation {
    validate_input: bool,
    validate_output: bool,
}

pub type SchemaValidationDecorator = MLModelDecorator<SchemaValidation>;

impl Default for SchemaValidation {
    fn default() -> Self {
        Self {
            validate_input: true,
            validate_output: true,
        }
    }
}

impl SchemaValidation {
    pub fn validates_input(&self) -> bool {
        self.validate_input
    }

    pub fn validates_output(&self) -> bool {
        self.validate_output
    }

    fn check(
        schema: Option<Schema>,
        value: &Value,
        direction: SchemaDirection,
        model: &dyn MLModel,
    ) -> Result<(), ModelError> {
        let Some(schema) = schema else {
            return Ok(());
        };
        schema.validate(value).map_err(|errors| {
            tracing::debug!(
                model = %model.qualified_name(),
                schema = schema.name(),
                %direction,
                violations = errors.len(),
                "Schema validation failed"
            );
            ModelError::SchemaValidation { direction, errors }
        })
    }
}

impl Decorate for SchemaValidation {
    fn configure(configuration: &Configuration) -> Result<Self, DecoratorError> {
        let invalid = |e| DecoratorError::invalid("schema_validation", e);
        Ok(Self {
            validate_input: configuration
                .get_bool_or("validate_input", true)
                .map_err(invalid)?,
            validate_output: configuration
                .get_bool_or("validate_output", true)
                .map_err(invalid)?,
        })
    }

    fn predict(&self, inner: &dyn MLModel, data: Value) -> Result<Value, ModelError> {
        if self.validate_input {
            Self::check(inner.input_schema(), &data, SchemaDirection::Input, inner)?;
        }

        let result = inner.predict(data)?;

        if self.validate_output {
            Self::check(inner.output_schema(), &result, SchemaDirection::Output, inner)?;
        }
        Ok(result)
    }
}
