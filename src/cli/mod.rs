pub mod commands;
pub mod display;
pub mod gateway;

pub use commands::CliArgs;
