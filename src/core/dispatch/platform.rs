use super::dispatch_models::{
    Actor, Capability, GuildRef, Notification, PlatformError, Reply, TargetMember,
};
use async_trait::async_trait;

/// The chat platform as seen by the dispatcher.
///
/// The Discord layer implements this over a poise context; tests implement it
/// with a recorder. Everything the dispatcher does to the outside world goes
/// through here.
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Whether `actor` holds `capability` in the guild the command came from.
    async fn has_permission(&self, actor: &Actor, capability: Capability) -> bool;

    /// Send a reply to wherever the command was invoked.
    async fn send_reply(&self, reply: Reply) -> Result<(), PlatformError>;

    async fn kick(
        &self,
        guild: &GuildRef,
        member: &TargetMember,
        reason: &str,
    ) -> Result<(), PlatformError>;

    async fn ban(
        &self,
        guild: &GuildRef,
        member: &TargetMember,
        reason: &str,
        purge_days: u8,
    ) -> Result<(), PlatformError>;

    async fn direct_message(&self, member: &TargetMember, text: &str) -> Result<(), PlatformError>;
}

/// Fire-and-forget DM. Delivery failure (closed DMs, blocked bot) is
/// reported as `Notification::Undeliverable` and never fails the caller.
pub async fn notify_best_effort<P: ChatPlatform + ?Sized>(
    platform: &P,
    member: &TargetMember,
    text: &str,
) -> Notification {
    match platform.direct_message(member, text).await {
        Ok(()) => Notification::Delivered,
        Err(e) => {
            tracing::debug!(member_id = member.id, "Notification not delivered: {}", e);
            Notification::Undeliverable
        }
    }
}
