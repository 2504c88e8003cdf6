// Discord commands for the AI question service.

use super::invocation::{command_context, run};
use crate::core::dispatch::Command;
use crate::discord::{Context, Error};

/// Ask the AI a question.
#[poise::command(prefix_command, slash_command, category = "AI")]
pub async fn ask(
    ctx: Context<'_>,
    #[description = "What do you want to know?"]
    #[rest]
    question: String,
) -> Result<(), Error> {
    // Typing indicator (prefix) or deferred response (slash) while we wait
    ctx.defer_or_broadcast().await?;

    let invocation = command_context(ctx, None, Some(question));
    run(ctx, invocation, Command::Ask).await
}

/// Hear a joke from the AI.
#[poise::command(prefix_command, slash_command, category = "AI")]
pub async fn joke(ctx: Context<'_>) -> Result<(), Error> {
    ctx.defer_or_broadcast().await?;

    let invocation = command_context(ctx, None, None);
    run(ctx, invocation, Command::Joke).await
}
