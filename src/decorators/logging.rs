//! Structured logging decorator
//!
//! Emits `tracing` events around every prediction: the model's qualified
//! name and version, a per-call prediction id, elapsed time and outcome.
//! Events are emitted inside a `predict` span so any subscriber
//! (stdout, OpenTelemetry, ...) can correlate them.
//!
//! Configuration keys:
//! - `log_payloads` (bool, default `false`): also log input and output at
//!   `trace` level.

use std::time::Instant;

use serde_json::Value;

use crate::config::Configuration;
use crate::decorator::{Decorate, MLModelDecorator};
use crate::error::{DecoratorError, ModelError};
use crate::model::MLModel;

#[derive(Debug, Clone, Default)]
pub struct Logging {
    log_payloads: bool,
}

pub type LoggingDecorator = MLModelDecorator<Logging>;

impl Logging {
    pub fn logs_payloads(&self) -> bool {
        self.log_payloads
    }
}

impl Decorate for Logging {
    fn configure(configuration: &Configuration) -> Result<Self, DecoratorError> {
        Ok(Self {
            log_payloads: configuration
                .get_bool_or("log_payloads", false)
                .map_err(|e| DecoratorError::invalid("logging", e))?,
        })
    }

    fn predict(&self, inner: &dyn MLModel, data: Value) -> Result<Value, ModelError> {
        let prediction_id = uuid::Uuid::new_v4();
        let model = inner.qualified_name();
        let span = tracing::info_span!(
            "predict",
            model = %model,
            version = %inner.version(),
            prediction_id = %prediction_id
        );
        let _guard = span.enter();

        if self.log_payloads {
            tracing::trace!(input = %data, "Prediction input");
        }

        let start = Instant::now();
        let result = inner.predict(data);
        let duration_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(output) => {
                if self.log_payloads {
                    tracing::trace!(output = %output, "Prediction output");
                }
                tracing::debug!(duration_ms, "Prediction completed");
            }
            Err(e) => {
                tracing::warn!(duration_ms, error = %e, "Prediction failed");
            }
        }

        result
    }
}
