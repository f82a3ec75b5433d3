//! Transparent model decorator
//!
//! [`MLModelDecorator`] wraps exactly one model and implements [`MLModel`]
//! itself, so decorators stack to any depth. What a decorator changes is
//! defined by its behavior, a [`Decorate`] implementation with one hook per
//! capability. Every hook defaults to returning exactly what the wrapped
//! model returns, so a behavior overrides only what it needs and every
//! other capability (dynamic attributes included) resolves to the wrapped
//! model as if the decorator were not there.
//!
//! The wrapped model and the configuration are the decorator's only own
//! state. Neither is reachable through the attribute hooks; attribute
//! reads and writes always land on the wrapped chain.
//!
//! ```rust,ignore
//! use ml_base::{Configuration, Decorate, MLModel, MLModelDecorator};
//!
//! struct Shout;
//!
//! impl Decorate for Shout {
//!     fn configure(_: &Configuration) -> Result<Self, ml_base::DecoratorError> {
//!         Ok(Shout)
//!     }
//!
//!     fn display_name(&self, inner: &dyn MLModel) -> String {
//!         inner.display_name().to_uppercase()
//!     }
//! }
//!
//! let model = MLModelDecorator::<Shout>::new(iris, Configuration::new())?;
//! ```

use std::any::Any;

use serde_json::Value;

use crate::config::Configuration;
use crate::error::{DecoratorError, ModelError};
use crate::model::MLModel;
use crate::schema::Schema;

/// Override protocol for decorators.
///
/// Each hook receives the wrapped model. The defaults forward unchanged.
pub trait Decorate: Send + Sync + Sized + 'static {
    /// Build the behavior from the decorator's configuration.
    fn configure(configuration: &Configuration) -> Result<Self, DecoratorError>;

    fn display_name(&self, inner: &dyn MLModel) -> String {
        inner.display_name()
    }

    fn qualified_name(&self, inner: &dyn MLModel) -> String {
        inner.qualified_name()
    }

    fn description(&self, inner: &dyn MLModel) -> String {
        inner.description()
    }

    fn version(&self, inner: &dyn MLModel) -> String {
        inner.version()
    }

    fn input_schema(&self, inner: &dyn MLModel) -> Option<Schema> {
        inner.input_schema()
    }

    fn output_schema(&self, inner: &dyn MLModel) -> Option<Schema> {
        inner.output_schema()
    }

    fn predict(&self, inner: &dyn MLModel, data: Value) -> Result<Value, ModelError> {
        inner.predict(data)
    }

    fn attribute(&self, inner: &dyn MLModel, name: &str) -> Result<Value, ModelError> {
        inner.attribute(name)
    }

    fn set_attribute(
        &self,
        inner: &mut dyn MLModel,
        name: &str,
        value: Value,
    ) -> Result<(), ModelError> {
        inner.set_attribute(name, value)
    }

    fn attribute_names(&self, inner: &dyn MLModel) -> Vec<String> {
        inner.attribute_names()
    }
}

/// Behavior that overrides nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl Decorate for PassThrough {
    fn configure(_configuration: &Configuration) -> Result<Self, DecoratorError> {
        Ok(PassThrough)
    }
}

/// A model wrapped by a behavior `B`.
pub struct MLModelDecorator<B: Decorate = PassThrough> {
    model: Box<dyn MLModel>,
    configuration: Configuration,
    behavior: B,
}

impl<B: Decorate> MLModelDecorator<B> {
    /// Wrap `model`, building the behavior from `configuration`.
    pub fn new(
        model: impl MLModel + 'static,
        configuration: Configuration,
    ) -> Result<Self, DecoratorError> {
        Self::from_boxed(Box::new(model), configuration)
    }

    /// Wrap an already boxed model.
    pub fn from_boxed(
        model: Box<dyn MLModel>,
        configuration: Configuration,
    ) -> Result<Self, DecoratorError> {
        let behavior = B::configure(&configuration)?;
        Ok(Self::with_behavior(model, behavior, configuration))
    }

    /// Wrap `model` with a behavior built by the caller.
    pub fn with_behavior(
        model: Box<dyn MLModel>,
        behavior: B,
        configuration: Configuration,
    ) -> Self {
        tracing::trace!(
            model = %model.qualified_name(),
            decorator = std::any::type_name::<B>(),
            "Decorating model"
        );
        Self {
            model,
            configuration,
            behavior,
        }
    }

    /// Wrap a type-erased object.
    ///
    /// The object must hold a `Box<dyn MLModel>`; anything else is rejected
    /// with [`DecoratorError::NotAModel`]. That includes a concrete model
    /// erased directly, since `Any` cannot recover a trait object from an
    /// unknown concrete type. Erase models as `Box<dyn MLModel>` first.
    pub fn from_any(
        object: Box<dyn Any + Send + Sync>,
        configuration: Configuration,
    ) -> Result<Self, DecoratorError> {
        match object.downcast::<Box<dyn MLModel>>() {
            Ok(model) => Self::from_boxed(*model, configuration),
            Err(_) => Err(DecoratorError::NotAModel),
        }
    }

    /// The wrapped model.
    pub fn model(&self) -> &dyn MLModel {
        self.model.as_ref()
    }

    pub fn model_mut(&mut self) -> &mut dyn MLModel {
        self.model.as_mut()
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Mutable access for behaviors that reconfigure at runtime.
    ///
    /// The behavior itself is not rebuilt.
    pub fn configuration_mut(&mut self) -> &mut Configuration {
        &mut self.configuration
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    /// Unwrap one layer, returning the wrapped model.
    pub fn into_inner(self) -> Box<dyn MLModel> {
        self.model
    }
}

impl<B: Decorate> MLModel for MLModelDecorator<B> {
    fn display_name(&self) -> String {
        self.behavior.display_name(self.model.as_ref())
    }

    fn qualified_name(&self) -> String {
        self.behavior.qualified_name(self.model.as_ref())
    }

    fn description(&self) -> String {
        self.behavior.description(self.model.as_ref())
    }

    fn version(&self) -> String {
        self.behavior.version(self.model.as_ref())
    }

    fn input_schema(&self) -> Option<Schema> {
        self.behavior.input_schema(self.model.as_ref())
    }

    fn output_schema(&self) -> Option<Schema> {
        self.behavior.output_schema(self.model.as_ref())
    }

    fn predict(&self, data: Value) -> Result<Value, ModelError> {
        self.behavior.predict(self.model.as_ref(), data)
    }

    fn attribute(&self, name: &str) -> Result<Value, ModelError> {
        self.behavior.attribute(self.model.as_ref(), name)
    }

    fn set_attribute(&mut self, name: &str, value: Value) -> Result<(), ModelError> {
        self.behavior.set_attribute(self.model.as_mut(), name, value)
    }

    fn attribute_names(&self) -> Vec<String> {
        self.behavior.attribute_names(self.model.as_ref())
    }

    fn wrapped(&self) -> Option<&dyn MLModel> {
        Some(self.model.as_ref())
    }

    fn wrapped_mut(&mut self) -> Option<&mut dyn MLModel> {
        Some(self.model.as_mut())
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }

    fn as_any_mut(&mut self) -> Option<&mut dyn Any> {
        Some(self)
    }
}

impl<B: Decorate + std::fmt::Debug> std::fmt::Debug for MLModelDecorator<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MLModelDecorator")
            .field("model", &self.model.qualified_name())
            .field("configuration", &self.configuration)
            .field("behavior", &self.behavior)
            .finish()
    }
}
