//! Built-in decorator behaviors
//!
//! Each behavior comes with a type alias for the decorated model, e.g.
//! [`CatchErrorsDecorator`] is `MLModelDecorator<CatchErrors>`.

pub mod catch_errors;
pub mod logging;
pub mod metadata;
pub mod schema_validation;

pub use catch_errors::{CatchErrors, CatchErrorsDecorator};
pub use logging::{Logging, LoggingDecorator};
pub use metadata::{Metadata, MetadataDecorator};
pub use schema_validation::{SchemaValidation, SchemaValidationDecorator};
