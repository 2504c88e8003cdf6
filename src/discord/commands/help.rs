use super::invocation::{command_context, run};
use crate::core::dispatch::Command;
use crate::discord::{Context, Error};

/// Show every command and what it does.
#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let invocation = command_context(ctx, None, None);
    run(ctx, invocation, Command::Help).await
}
