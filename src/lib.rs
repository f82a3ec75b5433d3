//! Base contract for deployable ML models
//!
//! [`MLModel`] is the uniform interface serving infrastructure uses to talk
//! to any model: identity metadata, input/output schemas and `predict`.
//! [`MLModelDecorator`] layers cross-cutting behavior (validation, error
//! translation, metadata augmentation, logging) around a model without
//! touching the model's code. Decorators forward every capability they do
//! not override, so a chain of any depth looks exactly like the model it
//! wraps except where a layer deliberately changes something.

pub mod attributes;
pub mod chain;
pub mod config;
pub mod decorator;
pub mod decorators;
pub mod error;
pub mod model;
pub mod prelude;
pub mod schema;

#[cfg(test)]
pub(crate) mod testing;

pub use attributes::Attributes;
pub use chain::{DecoratorConstructor, DecoratorRegistry};
pub use config::{ChainConfig, Configuration, LayerConfig};
pub use decorator::{Decorate, MLModelDecorator, PassThrough};
pub use decorators::{
    CatchErrors, CatchErrorsDecorator, Logging, LoggingDecorator, Metadata, MetadataDecorator,
    SchemaValidation, SchemaValidationDecorator,
};
pub use error::{BoxError, ConfigError, DecoratorError, ModelError, SchemaDirection};
pub use model::{chain_depth, find_layer, find_layer_mut, innermost, MLModel, ModelMetadata};
pub use schema::{Schema, SchemaError};
