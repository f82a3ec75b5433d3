//! Error translation decorator
//!
//! Presents a uniform failure type to callers: any error raised by the
//! wrapped model's `predict` comes back as [`ModelError::Model`] with the
//! original error kept as its source.
//!
//! Configuration keys:
//! - `message` (string, optional): message for translated errors.

use serde_json::Value;

use crate::config::Configuration;
use crate::decorator::{Decorate, MLModelDecorator};
use crate::error::{DecoratorError, ModelError};
use crate::model::MLModel;

const DEFAULT_MESSAGE: &str = "Exception raised while making a prediction";

#[derive(Debug, Clone)]
pub struct CatchErrors {
    message: String,
}

pub type CatchErrorsDecorator = MLModelDecorator<CatchErrors>;

impl CatchErrors {
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for CatchErrors {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
        }
    }
}

impl Decorate for CatchErrors {
    fn configure(configuration: &Configuration) -> Result<Self, DecoratorError> {
        let message = configuration
            .get_as::<String>("message")
            .map_err(|e| DecoratorError::invalid("catch_errors", e))?
            .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());
        Ok(Self { message })
    }

    fn predict(&self, inner: &dyn MLModel, data: Value) -> Result<Value, ModelError> {
        inner.predict(data).map_err(|err| match err {
            ModelError::Model { .. } => err,
            other => {
                tracing::debug!(
                    model = %inner.qualified_name(),
                    error = %other,
                    "Translating prediction failure"
                );
                ModelError::wrap(self.message.clone(), other)
            }
        })
    }
}
