// Discord commands module.
// Each feature gets its own command file.

use crate::core::ai::AiService;
use crate::core::dispatch::DispatchSettings;
use crate::core::moderation::WarningService;
use crate::infra::ai::CompletionClient;
use crate::infra::moderation::InMemoryWarningStore;
use std::sync::Arc;

pub mod ai;

pub mod help;

pub mod invocation;

pub mod moderation;

// Bot presence management
pub mod presence;

/// Type alias for our bot's context.
/// This is what every command receives as its first parameter.
pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Data that's shared across all commands.
///
/// Built once in `main` and handed to poise; the warning ledger lives here
/// for the whole life of the process.
pub struct Data {
    pub ai: Arc<AiService<CompletionClient>>,
    pub warnings: Arc<WarningService<InMemoryWarningStore>>,
    pub settings: DispatchSettings,
}

/// Every command we register with poise.
pub fn all() -> Vec<poise::Command<Data, Error>> {
    vec![
        ai::ask(),
        ai::joke(),
        moderation::warn(),
        moderation::warnings(),
        moderation::clearwarns(),
        moderation::kick(),
        moderation::ban(),
        help::help(),
    ]
}
