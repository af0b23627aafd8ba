pub mod payload;
pub mod validation;

pub use payload::ConfigurationPayload;
pub use validation::{Rejection, RejectionKind, ValidationResult};
