// `ChatPlatform` over a poise context.
//
// Everything here converts between core values and serenity calls; the
// decisions about what to send live in the core dispatcher.

use crate::core::dispatch::{
    Actor, Capability, ChatPlatform, GuildRef, PlatformError, Reply, ReplyEmbed, TargetMember,
};
use crate::discord::permissions::{grants, resolve_member_permissions};
use crate::discord::Context;
use async_trait::async_trait;
use poise::serenity_prelude as serenity;

pub struct SerenityPlatform<'a> {
    ctx: Context<'a>,
}

impl<'a> SerenityPlatform<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl<'a> ChatPlatform for SerenityPlatform<'a> {
    async fn has_permission(&self, actor: &Actor, capability: Capability) -> bool {
        let Some(guild_id) = self.ctx.guild_id() else {
            return false;
        };

        match resolve_member_permissions(
            self.ctx.http(),
            guild_id,
            serenity::UserId::new(actor.id),
        )
        .await
        {
            Ok(perms) => grants(perms, capability),
            Err(e) => {
                tracing::warn!(
                    guild_id = guild_id.get(),
                    user_id = actor.id,
                    "Failed to resolve permissions: {}",
                    e
                );
                false
            }
        }
    }

    async fn send_reply(&self, reply: Reply) -> Result<(), PlatformError> {
        let builder = match reply {
            Reply::Text(text) => poise::CreateReply::default().content(text),
            Reply::Embed(embed) => poise::CreateReply::default().embed(render_embed(embed)),
        };

        self.ctx
            .send(builder)
            .await
            .map(|_| ())
            .map_err(classify_error)
    }

    async fn kick(
        &self,
        guild: &GuildRef,
        member: &TargetMember,
        reason: &str,
    ) -> Result<(), PlatformError> {
        serenity::GuildId::new(guild.id)
            .kick_with_reason(self.ctx.http(), serenity::UserId::new(member.id), reason)
            .await
            .map_err(classify_error)
    }

    async fn ban(
        &self,
        guild: &GuildRef,
        member: &TargetMember,
        reason: &str,
        purge_days: u8,
    ) -> Result<(), PlatformError> {
        serenity::GuildId::new(guild.id)
            .ban_with_reason(
                self.ctx.http(),
                serenity::UserId::new(member.id),
                purge_days,
                reason,
            )
            .await
            .map_err(classify_error)
    }

    async fn direct_message(&self, member: &TargetMember, text: &str) -> Result<(), PlatformError> {
        serenity::UserId::new(member.id)
            .direct_message(self.ctx.http(), serenity::CreateMessage::new().content(text))
            .await
            .map(|_| ())
            .map_err(classify_error)
    }
}

fn render_embed(embed: ReplyEmbed) -> serenity::CreateEmbed {
    let mut rendered = serenity::CreateEmbed::new()
        .title(embed.title)
        .color(embed.color);

    if let Some(description) = embed.description {
        rendered = rendered.description(description);
    }
    for field in embed.fields {
        rendered = rendered.field(field.name, field.value, field.inline);
    }
    if let Some(footer) = embed.footer {
        rendered = rendered.footer(serenity::CreateEmbedFooter::new(footer));
    }

    rendered
}

/// HTTP 403 means the bot lacks rights for the action (role hierarchy,
/// missing permission, closed DMs). Anything else is passed on as text.
fn classify_error(err: serenity::Error) -> PlatformError {
    if let serenity::Error::Http(http_err) = &err {
        if http_err.status_code().map(|status| status.as_u16()) == Some(403) {
            return PlatformError::Forbidden;
        }
    }
    PlatformError::Other(err.to_string())
}
