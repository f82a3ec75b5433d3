//! Shared test model for unit tests.

use std::any::Any;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::attributes::Attributes;
use crate::error::ModelError;
use crate::model::MLModel;
use crate::schema::Schema;

#[derive(Debug, Deserialize)]
struct IrisInput {
    #[allow(dead_code)]
    sepal_length: f64,
    #[allow(dead_code)]
    sepal_width: f64,
    petal_length: f64,
    petal_width: f64,
}

pub(crate) struct IrisModel {
    pub(crate) attributes: Attributes,
    pub(crate) output_override: Option<Value>,
}

impl IrisModel {
    pub(crate) fn new() -> Self {
        Self {
            attributes: Attributes::new(),
            output_override: None,
        }
    }

    /// Model whose predictions are always `output`.
    pub(crate) fn returning(output: Value) -> Self {
        Self {
            attributes: Attributes::new(),
            output_override: Some(output),
        }
    }
}

pub(crate) fn iris_input_schema() -> Schema {
    Schema::new(
        "IrisInput",
        json!({
            "type": "object",
            "properties": {
                "sepal_length": {"type": "number"},
                "sepal_width": {"type": "number"},
                "petal_length": {"type": "number"},
                "petal_width": {"type": "number"}
            },
            "required": ["sepal_length", "sepal_width", "petal_length", "petal_width"]
        }),
    )
    .expect("valid input schema")
}

pub(crate) fn iris_output_schema() -> Schema {
    Schema::new(
        "IrisOutput",
        json!({
            "type": "object",
            "properties": {
                "species": {"enum": ["setosa", "versicolor", "virginica"]}
            },
            "required": ["species"]
        }),
    )
    .expect("valid output schema")
}

pub(crate) fn valid_input() -> Value {
    json!({
        "sepal_length": 6.0,
        "sepal_width": 4.0,
        "petal_length": 2.0,
        "petal_width": 1.0
    })
}

pub(crate) fn invalid_input() -> Value {
    json!({
        "sepal_length": 6.0,
        "sepal_width": 4.0,
        "petal_length": 2.0,
        "petal_width": "asdf"
    })
}

impl MLModel for IrisModel {
    fn display_name(&self) -> String {
        "display_name".into()
    }

    fn qualified_name(&self) -> String {
        "qualified_name".into()
    }

    fn description(&self) -> String {
        "description".into()
    }

    fn version(&self) -> String {
        "1.0.0".into()
    }

    fn input_schema(&self) -> Option<Schema> {
        Some(iris_input_schema())
    }

    fn output_schema(&self) -> Option<Schema> {
        Some(iris_output_schema())
    }

    fn predict(&self, data: Value) -> Result<Value, ModelError> {
        let input: IrisInput = serde_json::from_value(data).map_err(ModelError::prediction)?;
        if let Some(output) = &self.output_override {
            return Ok(output.clone());
        }
        let species = if input.petal_length < 2.5 {
            "setosa"
        } else if input.petal_width < 1.8 {
            "versicolor"
        } else {
            "virginica"
        };
        Ok(json!({ "species": species }))
    }

    fn attribute(&self, name: &str) -> Result<Value, ModelError> {
        self.attributes.get(name)
    }

    fn set_attribute(&mut self, name: &str, value: Value) -> Result<(), ModelError> {
        self.attributes.set(name, value);
        Ok(())
    }

    fn attribute_names(&self) -> Vec<String> {
        self.attributes.names()
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }

    fn as_any_mut(&mut self) -> Option<&mut dyn Any> {
        Some(self)
    }
}
