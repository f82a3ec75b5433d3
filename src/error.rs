//! Error types for models, decorator construction and configuration

use std::fmt;
use thiserror::Error;

/// Boxed error carried as the cause of a model failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Which side of `predict` failed schema validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaDirection {
    Input,
    Output,
}

impl fmt::Display for SchemaDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaDirection::Input => write!(f, "input"),
            SchemaDirection::Output => write!(f, "output"),
        }
    }
}

/// Errors raised while using a model object.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Generic failure during model usage, optionally wrapping the cause.
    #[error("Model error: {message}")]
    Model {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Input or output of `predict` did not conform to the declared schema.
    #[error("Schema validation failed for {direction}: {}", .errors.join("; "))]
    SchemaValidation {
        direction: SchemaDirection,
        errors: Vec<String>,
    },

    /// Failure raised by a concrete model's own prediction logic.
    #[error("Prediction failed: {0}")]
    Prediction(#[source] BoxError),

    /// No layer of the chain exposes the requested capability.
    #[error("Attribute not found: {name}")]
    AttributeNotFound { name: String },
}

impl ModelError {
    /// Generic model error without an underlying cause.
    pub fn model(message: impl Into<String>) -> Self {
        ModelError::Model {
            message: message.into(),
            source: None,
        }
    }

    /// Generic model error wrapping `source`.
    pub fn wrap(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        ModelError::Model {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Model-internal prediction failure.
    pub fn prediction(source: impl Into<BoxError>) -> Self {
        ModelError::Prediction(source.into())
    }

    pub fn attribute_not_found(name: impl Into<String>) -> Self {
        ModelError::AttributeNotFound { name: name.into() }
    }

    /// Returns true for the generic `Model` kind.
    pub fn is_model_error(&self) -> bool {
        matches!(self, ModelError::Model { .. })
    }

    /// Returns true for schema validation failures.
    pub fn is_schema_validation(&self) -> bool {
        matches!(self, ModelError::SchemaValidation { .. })
    }
}

/// Errors raised while building a decorator or a chain of decorators.
#[derive(Debug, Error)]
pub enum DecoratorError {
    #[error("Only objects implementing MLModel can be wrapped by a decorator")]
    NotAModel,

    #[error("Unknown decorator: {name}")]
    UnknownDecorator { name: String },

    #[error("Invalid configuration for decorator '{decorator}' key '{key}': {reason}")]
    InvalidConfiguration {
        decorator: String,
        key: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl DecoratorError {
    pub(crate) fn invalid(decorator: &str, err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidValue { key, reason } => DecoratorError::InvalidConfiguration {
                decorator: decorator.to_string(),
                key,
                reason,
            },
            ConfigError::MissingRequired { key } => DecoratorError::InvalidConfiguration {
                decorator: decorator.to_string(),
                key,
                reason: "missing required value".to_string(),
            },
            other => DecoratorError::Config(other),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}")]
    MissingRequired { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("IO error reading config file: {message}")]
    IoError { message: String },

    #[error("Configuration parsing error: {message}")]
    ParseError { message: String },

    #[error("Unsupported configuration format: {path}")]
    UnsupportedFormat { path: String },
}
