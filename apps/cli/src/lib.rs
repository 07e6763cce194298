pub mod commands;
pub mod dto;
pub mod error;
pub mod logging;

pub use error::CliError;
