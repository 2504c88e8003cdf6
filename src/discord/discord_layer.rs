// Discord layer - commands, the platform adapter and the error hook.

#[path = "commands/command_catalog.rs"]
pub mod commands;

#[path = "errors.rs"]
pub mod errors;

#[path = "permissions.rs"]
pub mod permissions;

#[path = "platform.rs"]
pub mod platform;

// Re-export command types for convenience
pub use commands::{Context, Data, Error};
