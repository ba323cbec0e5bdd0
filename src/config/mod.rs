pub mod entities;
pub mod settings;
pub mod validator;

pub use entities::*;
pub use settings::*;
pub use validator::*;
