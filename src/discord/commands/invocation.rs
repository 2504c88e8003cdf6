// Translation between poise contexts and the core dispatcher.
//
// **The pattern every command follows:**
// 1. Extract primitive data from Discord types into a `CommandContext`
// 2. Hand it to the core `Dispatcher`
// 3. Let the dispatcher talk back through `SerenityPlatform`

use crate::core::dispatch::{Actor, Command, CommandContext, Dispatcher, GuildRef, TargetMember};
use crate::discord::platform::SerenityPlatform;
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

pub fn command_context(
    ctx: Context<'_>,
    target: Option<&serenity::Member>,
    args: Option<String>,
) -> CommandContext {
    let author = ctx.author();

    // The cache guard must not outlive this function; it isn't Send.
    let guild = ctx.guild_id().map(|guild_id| GuildRef {
        id: guild_id.get(),
        name: ctx
            .guild()
            .map(|guild| guild.name.clone())
            .unwrap_or_else(|| "the server".to_string()),
    });

    CommandContext {
        invoker: Actor {
            id: author.id.get(),
            tag: author.tag(),
        },
        target: target.map(|member| TargetMember {
            id: member.user.id.get(),
            display_name: member.display_name().to_string(),
        }),
        guild,
        args: args.unwrap_or_default(),
    }
}

/// Run a command through the core dispatcher.
pub async fn run(
    ctx: Context<'_>,
    invocation: CommandContext,
    command: Command,
) -> Result<(), Error> {
    let data = ctx.data();
    let dispatcher = Dispatcher::new(data.ai.as_ref(), data.warnings.as_ref(), &data.settings);
    let platform = SerenityPlatform::new(ctx);

    dispatcher.dispatch(&platform, &invocation, command).await?;
    Ok(())
}
