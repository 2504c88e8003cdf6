// Core dispatch module - the command table and the dispatcher that runs it.

pub mod dispatch_models;
pub mod dispatcher;
pub mod formatting;
pub mod platform;

pub use dispatch_models::*;
pub use dispatcher::Dispatcher;
pub use platform::ChatPlatform;
