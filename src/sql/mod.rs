//! SQL builder: identifiers from the entity registry only, values as parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
