pub mod cli;
pub mod config;
pub mod core;
pub mod venv;
