// Guild permission resolution for the capability predicate.
//
// We resolve over HTTP instead of the cache so freshly assigned roles count
// immediately.

use crate::core::dispatch::Capability;
use poise::serenity_prelude as serenity;

/// The Discord permission each capability maps to.
///
/// Warnings ride on KICK_MEMBERS: anyone trusted to kick may also warn.
pub fn required_permission(capability: Capability) -> serenity::Permissions {
    match capability {
        Capability::Moderate | Capability::Kick => serenity::Permissions::KICK_MEMBERS,
        Capability::Ban => serenity::Permissions::BAN_MEMBERS,
    }
}

/// Whether a resolved permission set grants `capability`.
/// Administrators hold every capability.
pub fn grants(perms: serenity::Permissions, capability: Capability) -> bool {
    perms.contains(serenity::Permissions::ADMINISTRATOR)
        || perms.contains(required_permission(capability))
}

/// Effective guild-level permissions of a member.
///
/// The owner gets everything; everyone else gets the union of @everyone and
/// their roles.
pub async fn resolve_member_permissions(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    user_id: serenity::UserId,
) -> serenity::Result<serenity::Permissions> {
    let guild = guild_id.to_partial_guild(http).await?;
    if guild.owner_id == user_id {
        return Ok(serenity::Permissions::all());
    }

    let member = guild_id.member(http, user_id).await?;
    let everyone_role_id = serenity::RoleId::new(guild_id.get());

    let mut resolved = serenity::Permissions::empty();
    for role in guild.roles.values() {
        if role.id == everyone_role_id || member.roles.contains(&role.id) {
            resolved |= role.permissions;
        }
    }

    Ok(resolved)
}
