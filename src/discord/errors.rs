// Framework error hook.
//
// Dispatcher denials become chat replies; everything else is logged.

use crate::core::dispatch::formatting::usage_message;
use crate::core::dispatch::{Command, DispatchError};
use crate::discord::{Data, Error};

pub async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            let message = error
                .downcast_ref::<DispatchError>()
                .and_then(DispatchError::user_message);

            match message {
                Some(message) => {
                    if let Err(e) = ctx.say(message).await {
                        tracing::warn!("Failed to send denial message: {}", e);
                    }
                }
                None => {
                    tracing::error!(
                        command = %ctx.command().qualified_name,
                        "Command failed: {}",
                        error
                    );
                }
            }
        }
        poise::FrameworkError::ArgumentParse { ctx, input, .. } => {
            let prefix = &ctx.data().settings.command_prefix;
            let usage = Command::ALL
                .iter()
                .find(|command| command.name() == ctx.command().name)
                .map(|command| usage_message(*command, prefix))
                .unwrap_or_else(|| format!("Usage: `{}{}`", prefix, ctx.command().name));

            let reply = match input {
                Some(input) => format!("Invalid argument: `{}`\n{}", input, usage),
                None => format!("Missing required argument.\n{}", usage),
            };
            if let Err(e) = ctx.say(reply).await {
                tracing::warn!("Failed to send usage message: {}", e);
            }
        }
        poise::FrameworkError::UnknownCommand { .. } => {
            tracing::debug!("Unknown command invocation");
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!("Error while handling error: {}", e);
            }
        }
    }
}
