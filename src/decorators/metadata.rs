//! Metadata augmentation decorator
//!
//! Replaces or extends the identity metadata reported by the wrapped model
//! without touching schemas or predictions. Useful for tagging a canary or
//! a shadow deployment of an existing model.
//!
//! Configuration keys (all optional strings):
//! - `display_name`, `qualified_name`, `description`, `version`: replace
//!   the wrapped model's value.
//! - `suffix`: appended to all four values, after any replacement.

use crate::config::Configuration;
use crate::decorator::{Decorate, MLModelDecorator};
use crate::error::DecoratorError;
use crate::model::MLModel;

#[derive(Debug, Clone, Default)]
pub struct Metadata {
    display_name: Option<String>,
    qualified_name: Option<String>,
    description: Option<String>,
    version: Option<String>,
    suffix: String,
}

pub type MetadataDecorator = MLModelDecorator<Metadata>;

impl Metadata {
    fn render(&self, replacement: &Option<String>, inner: impl FnOnce() -> String) -> String {
        let base = match replacement {
            Some(value) => value.clone(),
            None => inner(),
        };
        format!("{}{}", base, self.suffix)
    }
}

impl Decorate for Metadata {
    fn configure(configuration: &Configuration) -> Result<Self, DecoratorError> {
        let read = |key: &str| {
            configuration
                .get_as::<String>(key)
                .map_err(|e| DecoratorError::invalid("metadata", e))
        };
        Ok(Self {
            display_name: read("display_name")?,
            qualified_name: read("qualified_name")?,
            description: read("description")?,
            version: read("version")?,
            suffix: read("suffix")?.unwrap_or_default(),
        })
    }

    fn display_name(&self, inner: &dyn MLModel) -> String {
        self.render(&self.display_name, || inner.display_name())
    }

    fn qualified_name(&self, inner: &dyn MLModel) -> String {
        self.render(&self.qualified_name, || inner.qualified_name())
    }

    fn description(&self, inner: &dyn MLModel) -> String {
        self.render(&self.description, || inner.description())
    }

    fn version(&self, inner: &dyn MLModel) -> String {
        self.render(&self.version, || inner.version())
    }
}
