// Bot presence.
//
// Discord-layer glue only: we point people at the help command so the
// prefix is discoverable from the member list.

use poise::serenity_prelude as serenity;

/// Called once the bot is ready.
pub fn on_ready(ctx: &serenity::Context, prefix: &str) {
    // serenity 0.12 exposes builder helpers on ActivityData, not Activity.
    let activity = serenity::ActivityData::listening(format!("{}help", prefix));
    ctx.set_presence(Some(activity), serenity::OnlineStatus::Online);
}
