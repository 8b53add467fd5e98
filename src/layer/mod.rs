//! Tower Layer implementations for the directory surface

pub mod validation;

pub use validation::{DirectoryValidationLayer, DirectoryValidationService};
