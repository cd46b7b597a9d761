pub mod commands;
pub mod handlers;

use crate::error::Error;

// Re-export commonly used items
pub use commands::GenerateArgs;
pub use handlers::handle_generate_command;

pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CLI_NAME: &str = "provenance-cli";

pub fn format_error(error: &Error) -> String {
    match error {
        Error::Configuration(msg) => format!("Configuration error: {msg}"),
        Error::Validation(msg) => format!("Validation error: {msg}"),
        Error::NotFound(msg) => format!("Not found: {msg}"),
        Error::Io(err) => format!("IO error: {err}"),
        Error::Serialization(msg) => format!("Serialization error: {msg}"),
        Error::UnsupportedEnvironment(msg) => format!("Unsupported environment: {msg}"),
        Error::Initialization(msg) => format!("Initialization error: {msg}"),
    }
}
