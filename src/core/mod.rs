pub mod error;
pub mod path;

pub use error::{Result, VenvRunError};
pub use path::{absolutize, expand_home};
