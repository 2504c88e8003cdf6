// Moderation commands: warnings, kick and ban.
//
// This layer is THIN. Permission checks, the ledger and every reply live in
// the core dispatcher; here we only pull the member and reason out of poise.

use super::invocation::{command_context, run};
use crate::core::dispatch::Command;
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

/// Warn a member and record the reason.
#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn warn(
    ctx: Context<'_>,
    #[description = "Member to warn"] member: Option<serenity::Member>,
    #[description = "Reason for the warning"]
    #[rest]
    reason: Option<String>,
) -> Result<(), Error> {
    let invocation = command_context(ctx, member.as_ref(), reason);
    run(ctx, invocation, Command::Warn).await
}

/// List a member's warnings.
#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn warnings(
    ctx: Context<'_>,
    #[description = "Member to look up"] member: Option<serenity::Member>,
) -> Result<(), Error> {
    let invocation = command_context(ctx, member.as_ref(), None);
    run(ctx, invocation, Command::Warnings).await
}

/// Clear all of a member's warnings.
#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn clearwarns(
    ctx: Context<'_>,
    #[description = "Member whose warnings to clear"] member: Option<serenity::Member>,
) -> Result<(), Error> {
    let invocation = command_context(ctx, member.as_ref(), None);
    run(ctx, invocation, Command::ClearWarns).await
}

/// Kick a member from the server.
#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn kick(
    ctx: Context<'_>,
    #[description = "Member to kick"] member: Option<serenity::Member>,
    #[description = "Reason for the kick"]
    #[rest]
    reason: Option<String>,
) -> Result<(), Error> {
    let invocation = command_context(ctx, member.as_ref(), reason);
    run(ctx, invocation, Command::Kick).await
}

/// Ban a member and purge their recent messages.
#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn ban(
    ctx: Context<'_>,
    #[description = "Member to ban"] member: Option<serenity::Member>,
    #[description = "Reason for the ban"]
    #[rest]
    reason: Option<String>,
) -> Result<(), Error> {
    let invocation = command_context(ctx, member.as_ref(), reason);
    run(ctx, invocation, Command::Ban).await
}
