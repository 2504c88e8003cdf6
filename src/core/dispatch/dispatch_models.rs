// Dispatch domain models - what a command invocation looks like once the
// chat platform has been stripped away.
//
// These are pure domain types with no Discord dependencies.
// The Discord layer builds them from poise contexts and renders `Reply`
// back into messages and embeds.

use std::fmt;
use thiserror::Error;

// ============================================================================
// COMMAND TABLE
// ============================================================================

/// Every command the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ask,
    Joke,
    Warn,
    Warnings,
    ClearWarns,
    Kick,
    Ban,
    Help,
}

impl Command {
    pub const ALL: [Command; 8] = [
        Command::Ask,
        Command::Joke,
        Command::Warn,
        Command::Warnings,
        Command::ClearWarns,
        Command::Kick,
        Command::Ban,
        Command::Help,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::Ask => "ask",
            Command::Joke => "joke",
            Command::Warn => "warn",
            Command::Warnings => "warnings",
            Command::ClearWarns => "clearwarns",
            Command::Kick => "kick",
            Command::Ban => "ban",
            Command::Help => "help",
        }
    }

    /// Argument synopsis shown in usage and help messages.
    pub fn arguments(&self) -> &'static str {
        match self {
            Command::Ask => " <question>",
            Command::Warn | Command::Kick | Command::Ban => " <member> [reason]",
            Command::Warnings | Command::ClearWarns => " <member>",
            Command::Joke | Command::Help => "",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Ask => "Ask the AI a question.",
            Command::Joke => "Hear a joke from the AI.",
            Command::Warn => "Warn a member and record the reason.",
            Command::Warnings => "List a member's warnings.",
            Command::ClearWarns => "Clear all of a member's warnings.",
            Command::Kick => "Kick a member from the server.",
            Command::Ban => "Ban a member and purge their recent messages.",
            Command::Help => "Show this list.",
        }
    }

    /// The capability the invoker must hold. `None` means anyone may run it.
    pub fn required_capability(&self) -> Option<Capability> {
        match self {
            Command::Warn | Command::Warnings | Command::ClearWarns => Some(Capability::Moderate),
            Command::Kick => Some(Capability::Kick),
            Command::Ban => Some(Capability::Ban),
            Command::Ask | Command::Joke | Command::Help => None,
        }
    }

    /// Moderation commands only make sense inside a guild.
    pub fn guild_only(&self) -> bool {
        self.required_capability().is_some()
    }

    pub fn usage(&self, prefix: &str) -> String {
        format!("{}{}{}", prefix, self.name(), self.arguments())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Something an actor may or may not be allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Issue, list and clear warnings.
    Moderate,
    Kick,
    Ban,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Warnings ride on the kick permission.
            Capability::Moderate | Capability::Kick => write!(f, "Kick Members"),
            Capability::Ban => write!(f, "Ban Members"),
        }
    }
}

// ============================================================================
// INVOCATION
// ============================================================================

/// The user who ran the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: u64,
    /// Human-readable name, e.g. `name#1234` or the new-style username.
    pub tag: String,
}

/// The member a moderation command acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetMember {
    pub id: u64,
    pub display_name: String,
}

impl TargetMember {
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildRef {
    pub id: u64,
    pub name: String,
}

/// Everything the dispatcher needs to know about one invocation.
/// Lives for exactly one command.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub invoker: Actor,
    pub target: Option<TargetMember>,
    pub guild: Option<GuildRef>,
    /// Free text after the command (and target): the question for `ask`,
    /// the reason for `warn`/`kick`/`ban`.
    pub args: String,
}

/// Knobs that aren't per-invocation.
#[derive(Debug, Clone)]
pub struct DispatchSettings {
    pub command_prefix: String,
    /// Days of message history purged when banning (Discord allows 0-7).
    pub ban_purge_days: u8,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            command_prefix: "!".to_string(),
            ban_purge_days: 1,
        }
    }
}

// ============================================================================
// REPLIES
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Embed(ReplyEmbed),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplyEmbed {
    pub title: String,
    pub description: Option<String>,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

// ============================================================================
// ERRORS
// ============================================================================

/// Failure signalled by the chat platform for an outbound action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// The bot itself lacks the rights (role hierarchy, missing permission,
    /// DMs closed).
    #[error("Missing access")]
    Forbidden,

    #[error("{0}")]
    Other(String),
}

/// Result of a best-effort notification. Never turned into an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Delivered,
    Undeliverable,
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("You're missing permissions: {0}")]
    MissingPermission(Capability),

    #[error("This command only works in servers.")]
    GuildOnly,

    /// The reply itself could not be delivered, so there's nobody left to tell.
    #[error("Failed to send reply: {0}")]
    Send(#[from] PlatformError),
}

impl DispatchError {
    /// Text to show the invoker, if the failure is theirs to see.
    pub fn user_message(&self) -> Option<String> {
        match self {
            DispatchError::MissingPermission(_) | DispatchError::GuildOnly => {
                Some(self.to_string())
            }
            DispatchError::Send(_) => None,
        }
    }
}
