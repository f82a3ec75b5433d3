//! The model interface
//!
//! [`MLModel`] is the capability set every deployable model exposes:
//! identity metadata, input/output schema descriptors and `predict`.
//! Serving code holds models as `Box<dyn MLModel>` and never needs to know
//! whether it is talking to a raw model or to a chain of decorators.
//!
//! Beyond the named interface the trait offers two explicit escape
//! hatches:
//!
//! - dynamic attributes (`attribute` / `set_attribute`), forwarded through
//!   every decorator to the layer that owns them;
//! - typed downcasting (`as_any` + [`find_layer`]) for capabilities that
//!   exist only on a concrete type.

use std::any::Any;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ModelError;
use crate::schema::Schema;

/// Contract every deployable predictive model satisfies.
pub trait MLModel: Send + Sync {
    /// Human-readable label.
    fn display_name(&self) -> String;

    /// Stable machine identifier, unique within a deployment.
    fn qualified_name(&self) -> String;

    /// Free-text documentation.
    fn description(&self) -> String;

    /// Version string, caller-defined format.
    fn version(&self) -> String;

    /// Descriptor of valid prediction inputs.
    fn input_schema(&self) -> Option<Schema>;

    /// Descriptor of valid prediction outputs.
    fn output_schema(&self) -> Option<Schema>;

    /// Make a prediction.
    fn predict(&self, data: Value) -> Result<Value, ModelError>;

    /// Read a capability outside the named interface.
    fn attribute(&self, name: &str) -> Result<Value, ModelError> {
        Err(ModelError::attribute_not_found(name))
    }

    /// Mutate a capability outside the named interface.
    fn set_attribute(&mut self, name: &str, _value: Value) -> Result<(), ModelError> {
        Err(ModelError::attribute_not_found(name))
    }

    /// Names of the dynamic attributes currently exposed.
    fn attribute_names(&self) -> Vec<String> {
        Vec::new()
    }

    /// The next layer inward, `None` for a raw model.
    fn wrapped(&self) -> Option<&dyn MLModel> {
        None
    }

    fn wrapped_mut(&mut self) -> Option<&mut dyn MLModel> {
        None
    }

    /// Opt-in downcast hook used by [`find_layer`].
    fn as_any(&self) -> Option<&dyn Any> {
        None
    }

    fn as_any_mut(&mut self) -> Option<&mut dyn Any> {
        None
    }
}

impl<M: MLModel + ?Sized> MLModel for Box<M> {
    fn display_name(&self) -> String {
        (**self).display_name()
    }

    fn qualified_name(&self) -> String {
        (**self).qualified_name()
    }

    fn description(&self) -> String {
        (**self).description()
    }

    fn version(&self) -> String {
        (**self).version()
    }

    fn input_schema(&self) -> Option<Schema> {
        (**self).input_schema()
    }

    fn output_schema(&self) -> Option<Schema> {
        (**self).output_schema()
    }

    fn predict(&self, data: Value) -> Result<Value, ModelError> {
        (**self).predict(data)
    }

    fn attribute(&self, name: &str) -> Result<Value, ModelError> {
        (**self).attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: Value) -> Result<(), ModelError> {
        (**self).set_attribute(name, value)
    }

    fn attribute_names(&self) -> Vec<String> {
        (**self).attribute_names()
    }

    fn wrapped(&self) -> Option<&dyn MLModel> {
        (**self).wrapped()
    }

    fn wrapped_mut(&mut self) -> Option<&mut dyn MLModel> {
        (**self).wrapped_mut()
    }

    fn as_any(&self) -> Option<&dyn Any> {
        (**self).as_any()
    }

    fn as_any_mut(&mut self) -> Option<&mut dyn Any> {
        (**self).as_any_mut()
    }
}

impl std::fmt::Debug for dyn MLModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MLModel")
            .field("qualified_name", &self.qualified_name())
            .field("version", &self.version())
            .field("depth", &chain_depth(self))
            .finish()
    }
}

/// Snapshot of the six metadata values of a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub display_name: String,
    pub qualified_name: String,
    pub description: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<Value>,
}

impl ModelMetadata {
    /// Read the metadata through `model`, resolving any decorators.
    pub fn of(model: &dyn MLModel) -> Self {
        Self {
            display_name: model.display_name(),
            qualified_name: model.qualified_name(),
            description: model.description(),
            version: model.version(),
            input_schema: model.input_schema().map(|s| s.definition().clone()),
            output_schema: model.output_schema().map(|s| s.definition().clone()),
        }
    }
}

/// Number of decorator layers above the raw model.
pub fn chain_depth(model: &dyn MLModel) -> usize {
    let mut depth = 0;
    let mut current = model;
    while let Some(inner) = current.wrapped() {
        depth += 1;
        current = inner;
    }
    depth
}

/// The raw model at the bottom of the chain.
pub fn innermost(model: &dyn MLModel) -> &dyn MLModel {
    let mut current = model;
    while let Some(inner) = current.wrapped() {
        current = inner;
    }
    current
}

/// Find the outermost layer of concrete type `T`.
///
/// Only layers that opt in through `as_any` can be found.
pub fn find_layer<T: Any>(model: &dyn MLModel) -> Option<&T> {
    let mut current = Some(model);
    while let Some(layer) = current {
        if let Some(found) = layer.as_any().and_then(|a| a.downcast_ref::<T>()) {
            return Some(found);
        }
        current = layer.wrapped();
    }
    None
}

/// Mutable variant of [`find_layer`].
pub fn find_layer_mut<T: Any>(model: &mut dyn MLModel) -> Option<&mut T> {
    let is_match = model
        .as_any()
        .map(|a| a.downcast_ref::<T>().is_some())
        .unwrap_or(false);
    if is_match {
        return model.as_any_mut().and_then(|a| a.downcast_mut::<T>());
    }
    match model.wrapped_mut() {
        Some(inner) => find_layer_mut::<T>(inner),
        None => None,
    }
}
