// The core module contains all business logic.
// Each feature gets its own submodule.

#[path = "ai/mod.rs"]
pub mod ai;

#[path = "dispatch/mod.rs"]
pub mod dispatch;

#[path = "moderation/mod.rs"]
pub mod moderation;
