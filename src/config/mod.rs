mod types;
mod loader;
pub mod defaults;
mod validation;

pub use types::*;
pub use loader::{load_options, parse_options};
pub use validation::validate_options;
