//! Declarative decorator chains
//!
//! A [`DecoratorRegistry`] maps decorator kind names to constructors and
//! builds a chain around a model from a [`ChainConfig`]. Layers are
//! applied in the order they are listed, so the first layer wraps the
//! model directly and the last one is the outermost decorator.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{ChainConfig, Configuration};
use crate::decorator::{Decorate, MLModelDecorator, PassThrough};
use crate::decorators::{CatchErrors, Logging, Metadata, SchemaValidation};
use crate::error::DecoratorError;
use crate::model::MLModel;

/// Builds one decorator layer around a model.
pub type DecoratorConstructor = Arc<
    dyn Fn(Box<dyn MLModel>, Configuration) -> Result<Box<dyn MLModel>, DecoratorError>
        + Send
        + Sync,
>;

type ConfigurationCheck = Arc<dyn Fn(&Configuration) -> Result<(), DecoratorError> + Send + Sync>;

/// Registry of named decorator kinds.
#[derive(Clone)]
pub struct DecoratorRegistry {
    constructors: HashMap<String, DecoratorConstructor>,
    checks: HashMap<String, ConfigurationCheck>,
}

impl Default for DecoratorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl DecoratorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
            checks: HashMap::new(),
        }
    }

    /// Create a registry with every built-in decorator registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register::<PassThrough>("pass_through");
        registry.register::<CatchErrors>("catch_errors");
        registry.register::<SchemaValidation>("schema_validation");
        registry.register::<Logging>("logging");
        registry.register::<Metadata>("metadata");
        registry
    }

    /// Register behavior `B` under `name`, replacing any previous entry.
    ///
    /// The layer's configuration is checked with [`Decorate::configure`]
    /// before [`build`](Self::build) wraps anything.
    pub fn register<B: Decorate>(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        self.register_fn(name.clone(), |model, configuration| {
            let decorator = MLModelDecorator::<B>::from_boxed(model, configuration)?;
            Ok(Box::new(decorator) as Box<dyn MLModel>)
        });
        self.checks.insert(name, Arc::new(check_configuration::<B>));
        self
    }

    /// Register a custom constructor under `name`.
    ///
    /// A custom constructor has no separate configuration check, so when it
    /// rejects its configuration inside [`build`](Self::build) the layers
    /// already applied, and the model they wrap, are dropped with the chain.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, constructor: F) -> &mut Self
    where
        F: Fn(Box<dyn MLModel>, Configuration) -> Result<Box<dyn MLModel>, DecoratorError>
            + Send
            + Sync
            + 'static,
    {
        let name = name.into();
        self.checks.remove(&name);
        self.constructors.insert(name, Arc::new(constructor));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered kind names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.constructors.keys().cloned().collect();
        names.sort();
        names
    }

    /// Wrap `model` in a single decorator of kind `name`.
    pub fn decorate(
        &self,
        name: &str,
        model: Box<dyn MLModel>,
        configuration: Configuration,
    ) -> Result<Box<dyn MLModel>, DecoratorError> {
        let constructor =
            self.constructors
                .get(name)
                .ok_or_else(|| DecoratorError::UnknownDecorator {
                    name: name.to_string(),
                })?;
        constructor(model, configuration)
    }

    /// Check that every layer of `chain` names a registered kind and that
    /// every layer registered through [`register`](Self::register) accepts
    /// its configuration.
    pub fn validate(&self, chain: &ChainConfig) -> Result<(), DecoratorError> {
        for layer in &chain.layers {
            if !self.contains(&layer.decorator) {
                return Err(DecoratorError::UnknownDecorator {
                    name: layer.decorator.clone(),
                });
            }
        }
        for layer in &chain.layers {
            if let Some(check) = self.checks.get(&layer.decorator) {
                check(&layer.configuration)?;
            }
        }
        Ok(())
    }

    /// Wrap `model` with every layer of `chain`, innermost first.
    ///
    /// The chain is validated before any layer is applied, so an unknown
    /// kind or a rejected built-in configuration leaves nothing half built.
    pub fn build(
        &self,
        model: Box<dyn MLModel>,
        chain: &ChainConfig,
    ) -> Result<Box<dyn MLModel>, DecoratorError> {
        self.validate(chain)?;

        let mut current = model;
        for (depth, layer) in chain.layers.iter().enumerate() {
            current = self.decorate(&layer.decorator, current, layer.configuration.clone())?;
            tracing::debug!(
                model = %current.qualified_name(),
                decorator = %layer.decorator,
                depth = depth + 1,
                "Applied decorator layer"
            );
        }
        Ok(current)
    }
}

fn check_configuration<B: Decorate>(configuration: &Configuration) -> Result<(), DecoratorError> {
    B::configure(configuration).map(|_| ())
}

impl std::fmt::Debug for DecoratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoratorRegistry")
            .field("decorators", &self.names())
            .finish()
    }
}
