pub mod environment;
pub mod executor;
pub mod resolver;

pub use executor::ExecStatus;
pub use resolver::ResolvedVenv;
