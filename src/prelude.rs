//! Prelude for model and decorator authors.
//!
//! ```ignore
//! use ml_base::prelude::*;
//! ```

pub use crate::config::Configuration;
pub use crate::decorator::{Decorate, MLModelDecorator, PassThrough};
pub use crate::error::{DecoratorError, ModelError};
pub use crate::model::MLModel;
pub use crate::schema::Schema;
