//! Shared mocks for integration tests.
#![allow(dead_code)]

use std::any::Any;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use ml_base::prelude::*;
use ml_base::Attributes;

/// Prediction input of the iris mock.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelInput {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
}

/// Prediction output of the iris mock.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelOutput {
    pub species: String,
}

pub fn model_input_schema() -> Schema {
    Schema::new(
        "ModelInput",
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
    .expect("valid schema")
}

pub fn model_output_schema() -> Schema {
    Schema::new(
        "ModelOutput",
        json!({
            "type": "object",
            "properties": {"species": {"type": "string"}},
            "required": ["species"]
        }),
    )
    .expect("valid schema")
}

pub fn iris_input(petal_width: Value) -> Value {
    json!({
        "sepal_length": 6.0,
        "sepal_width": 4.0,
        "petal_length": 2.0,
        "petal_width": petal_width
    })
}

/// Iris classifier stand-in with mutable metadata and dynamic attributes.
pub struct MLModelMock {
    pub display_name: String,
    pub qualified_name: String,
    pub description: String,
    pub version: String,
    pub attributes: Attributes,
}

impl Default for MLModelMock {
    fn default() -> Self {
        Self {
            display_name: "display_name".into(),
            qualified_name: "qualified_name".into(),
            description: "description".into(),
            version: "1.0.0".into(),
            attributes: Attributes::new(),
        }
    }
}

impl MLModelMock {
    /// Capability that only exists on the concrete type.
    pub fn labels(&self) -> Vec<&'static str> {
        vec!["setosa", "versicolor", "virginica"]
    }
}

impl MLModel for MLModelMock {
    fn display_name(&self) -> String {
        self.display_name.clone()
    }

    fn qualified_name(&self) -> String {
        self.qualified_name.clone()
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn version(&self) -> String {
        self.version.clone()
    }

    fn input_schema(&self) -> Option<Schema> {
        Some(model_input_schema())
    }

    fn output_schema(&self) -> Option<Schema> {
        Some(model_output_schema())
    }

    fn predict(&self, data: Value) -> Result<Value, ModelError> {
        let input: ModelInput = serde_json::from_value(data).map_err(ModelError::prediction)?;
        let species = if input.petal_length < 2.5 { "setosa" } else { "versicolor" };
        serde_json::to_value(ModelOutput {
            species: species.into(),
        })
        .map_err(ModelError::prediction)
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

/// Not a model.
pub struct SomeClass;

/// A model that keeps the default attribute hooks, so it stores nothing.
pub struct StaticModel;

impl MLModel for StaticModel {
    fn display_name(&self) -> String {
        "Static".into()
    }

    fn qualified_name(&self) -> String {
        "static".into()
    }

    fn description(&self) -> String {
        String::new()
    }

    fn version(&self) -> String {
        "0.0.1".into()
    }

    fn input_schema(&self) -> Option<Schema> {
        None
    }

    fn output_schema(&self) -> Option<Schema> {
        None
    }

    fn predict(&self, data: Value) -> Result<Value, ModelError> {
        Ok(data)
    }
}

/// Appends the configured `string` to the four string properties.
#[derive(Debug)]
pub struct AddString {
    string: String,
}

pub type AddStringDecorator = MLModelDecorator<AddString>;

impl Decorate for AddString {
    fn configure(configuration: &Configuration) -> Result<Self, DecoratorError> {
        let string = configuration
            .require::<String>("string")
            .map_err(DecoratorError::Config)?;
        Ok(Self { string })
    }

    fn display_name(&self, inner: &dyn MLModel) -> String {
        format!("{}{}", inner.display_name(), self.string)
    }

    fn qualified_name(&self, inner: &dyn MLModel) -> String {
        format!("{}{}", inner.qualified_name(), self.string)
    }

    fn description(&self, inner: &dyn MLModel) -> String {
        format!("{}{}", inner.description(), self.string)
    }

    fn version(&self, inner: &dyn MLModel) -> String {
        format!("{}{}", inner.version(), self.string)
    }
}
