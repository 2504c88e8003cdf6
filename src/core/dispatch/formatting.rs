//! Reply formatting for the dispatcher.
//!
//! Builds the text and embed replies for each command. Colours follow the
//! Discord palette (orange for warnings, red for kicks, dark red for bans).

use super::dispatch_models::{Actor, Command, EmbedField, ReplyEmbed, TargetMember};

pub const AI_UNAVAILABLE_MESSAGE: &str = "Sorry, I couldn't get a response from the AI service.";
pub const AI_MALFORMED_MESSAGE: &str = "Received malformed response from AI service";
pub const AI_EMPTY_MESSAGE: &str = "The AI service sent back an empty answer.";

/// Discord rejects messages longer than this.
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Discord rejects embeds with more fields than this.
pub const MAX_EMBED_FIELDS: usize = 25;

/// Per-field limits and the cap on all text in one embed, in characters.
pub const MAX_FIELD_NAME_LEN: usize = 256;
pub const MAX_FIELD_VALUE_LEN: usize = 1024;
pub const MAX_EMBED_LEN: usize = 6000;

const COLOR_ORANGE: u32 = 0xE67E22;
const COLOR_RED: u32 = 0xE74C3C;
const COLOR_DARK_RED: u32 = 0x992D22;
const COLOR_BLURPLE: u32 = 0x5865F2;

fn field(name: impl Into<String>, value: impl Into<String>, inline: bool) -> EmbedField {
    EmbedField {
        name: truncate(&name.into(), MAX_FIELD_NAME_LEN),
        value: truncate(&value.into(), MAX_FIELD_VALUE_LEN),
        inline,
    }
}

/// Cut `text` down to `max_len` characters, ending in an ellipsis when
/// anything was dropped.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_len.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn field_len(field: &EmbedField) -> usize {
    field.name.chars().count() + field.value.chars().count()
}

/// Characters Discord counts towards [`MAX_EMBED_LEN`].
pub fn embed_len(embed: &ReplyEmbed) -> usize {
    embed.title.chars().count()
        + embed.description.as_deref().map_or(0, |d| d.chars().count())
        + embed.fields.iter().map(field_len).sum::<usize>()
        + embed.footer.as_deref().map_or(0, |f| f.chars().count())
}

fn moderator_footer(moderator: &Actor) -> Option<String> {
    Some(format!("Moderator: {}", moderator.tag))
}

pub fn usage_message(command: Command, prefix: &str) -> String {
    format!("Usage: `{}`", command.usage(prefix))
}

pub fn warned_embed(
    member: &TargetMember,
    reason: &str,
    total: usize,
    moderator: &Actor,
) -> ReplyEmbed {
    ReplyEmbed {
        title: "⚠️ User Warned".to_string(),
        description: Some(format!("{} has been warned.", member.mention())),
        color: COLOR_ORANGE,
        fields: vec![
            field("Reason", reason, false),
            field("Total Warnings", total.to_string(), true),
        ],
        footer: moderator_footer(moderator),
    }
}

pub fn warned_notice(guild_name: &str, reason: &str) -> String {
    truncate(
        &format!("You've been warned in {} for: {}", guild_name, reason),
        MAX_MESSAGE_LEN,
    )
}

/// Numbered list of warnings, oldest first.
///
/// Fields stop at [`MAX_EMBED_FIELDS`] or once the next one would push the
/// embed past [`MAX_EMBED_LEN`]; the footer then says how many are shown.
pub fn warnings_embed(member: &TargetMember, warnings: &[String]) -> ReplyEmbed {
    let title = truncate(
        &format!("⚠️ Warnings for {}", member.display_name),
        MAX_FIELD_NAME_LEN,
    );
    let total = warnings.len();

    // Leave room for the longest footer we might need.
    let footer_room = showing_footer(total, total).chars().count();
    let budget = MAX_EMBED_LEN.saturating_sub(title.chars().count() + footer_room);

    let mut fields = Vec::new();
    let mut used = 0;
    for (i, reason) in warnings.iter().take(MAX_EMBED_FIELDS).enumerate() {
        let next = field(format!("Warning #{}", i + 1), reason.as_str(), false);
        let len = field_len(&next);
        if used + len > budget {
            break;
        }
        used += len;
        fields.push(next);
    }

    let footer = (fields.len() < total).then(|| showing_footer(fields.len(), total));

    ReplyEmbed {
        title,
        description: None,
        color: COLOR_ORANGE,
        fields,
        footer,
    }
}

fn showing_footer(shown: usize, total: usize) -> String {
    format!("Showing {} of {} warnings", shown, total)
}

pub fn no_warnings_message(member: &TargetMember) -> String {
    format!("{} has no warnings.", member.display_name)
}

pub fn cleared_message(member: &TargetMember) -> String {
    format!("Cleared all warnings for {}", member.mention())
}

pub fn nothing_to_clear_message(member: &TargetMember) -> String {
    format!("{} has no warnings to clear.", member.display_name)
}

pub fn kicked_embed(member: &TargetMember, reason: &str, moderator: &Actor) -> ReplyEmbed {
    ReplyEmbed {
        title: "👢 User Kicked".to_string(),
        description: Some(format!(
            "{} has been kicked from the server.",
            member.mention()
        )),
        color: COLOR_RED,
        fields: vec![field("Reason", reason, false)],
        footer: moderator_footer(moderator),
    }
}

pub fn banned_embed(member: &TargetMember, reason: &str, moderator: &Actor) -> ReplyEmbed {
    ReplyEmbed {
        title: "🔨 User Banned".to_string(),
        description: Some(format!(
            "{} has been banned from the server.",
            member.mention()
        )),
        color: COLOR_DARK_RED,
        fields: vec![field("Reason", reason, false)],
        footer: moderator_footer(moderator),
    }
}

pub fn help_embed(prefix: &str) -> ReplyEmbed {
    ReplyEmbed {
        title: "📖 Commands".to_string(),
        description: None,
        color: COLOR_BLURPLE,
        fields: Command::ALL
            .iter()
            .map(|command| {
                field(
                    format!("`{}`", command.usage(prefix)),
                    command.description(),
                    false,
                )
            })
            .collect(),
        footer: Some("Moderation commands need the matching server permission.".to_string()),
    }
}

/// Split text into chunks Discord will accept, counting characters rather
/// than bytes so multi-byte text is never cut mid-codepoint.
pub fn split_message(text: &str, max_len: usize) -> Vec<String> {
    text.chars()
        .collect::<Vec<char>>()
        .chunks(max_len.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}
