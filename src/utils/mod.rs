// Shared helpers

pub mod casing;
pub mod constants;

pub use casing::{to_camel_case, to_snake_case};
pub use constants::*;
