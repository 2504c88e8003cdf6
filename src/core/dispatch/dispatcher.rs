// Command dispatcher - routes one invocation to the AI service, the warning
// ledger, or a platform action, and sends back the formatted reply.
//
// Stateless between invocations. Every failure a user should hear about is
// turned into a chat message here; only permission/guild denials and failures
// to send the reply itself come back as `DispatchError`.

use super::dispatch_models::{
    Command, CommandContext, DispatchError, DispatchSettings, GuildRef, PlatformError, Reply,
    TargetMember,
};
use super::formatting;
use super::platform::{notify_best_effort, ChatPlatform};
use crate::core::ai::{AiError, AiProvider, AiService};
use crate::core::moderation::{reason_or_default, WarningService, WarningStore};

/// Prompt behind the `joke` command.
pub const JOKE_COMMAND_PROMPT: &str = "Tell me a funny joke";

pub struct Dispatcher<'a, P: AiProvider, S: WarningStore> {
    ai: &'a AiService<P>,
    warnings: &'a WarningService<S>,
    settings: &'a DispatchSettings,
}

impl<'a, P: AiProvider, S: WarningStore> Dispatcher<'a, P, S> {
    pub fn new(
        ai: &'a AiService<P>,
        warnings: &'a WarningService<S>,
        settings: &'a DispatchSettings,
    ) -> Self {
        Self {
            ai,
            warnings,
            settings,
        }
    }

    /// Run one command to completion.
    ///
    /// The capability check happens before anything else touches the ledger
    /// or the platform.
    pub async fn dispatch<C: ChatPlatform + ?Sized>(
        &self,
        platform: &C,
        ctx: &CommandContext,
        command: Command,
    ) -> Result<(), DispatchError> {
        if command.guild_only() && ctx.guild.is_none() {
            return Err(DispatchError::GuildOnly);
        }

        if let Some(capability) = command.required_capability() {
            if !platform.has_permission(&ctx.invoker, capability).await {
                tracing::info!(
                    command = command.name(),
                    user_id = ctx.invoker.id,
                    %capability,
                    "Command denied"
                );
                return Err(DispatchError::MissingPermission(capability));
            }
        }

        tracing::debug!(
            command = command.name(),
            user_id = ctx.invoker.id,
            "Dispatching"
        );

        // Moderation commands act on a member inside a guild.
        let scope = ctx.guild.as_ref().zip(ctx.target.as_ref());

        match (command, scope) {
            (Command::Ask, _) => self.answer(platform, ctx.args.trim(), command).await,
            (Command::Joke, _) => self.answer(platform, JOKE_COMMAND_PROMPT, command).await,
            (Command::Help, _) => {
                let embed = formatting::help_embed(&self.settings.command_prefix);
                Ok(platform.send_reply(Reply::Embed(embed)).await?)
            }
            (Command::Warn, Some((guild, target))) => self.warn(platform, ctx, guild, target).await,
            (Command::Warnings, Some((guild, target))) => {
                self.list_warnings(platform, guild, target).await
            }
            (Command::ClearWarns, Some((guild, target))) => {
                self.clear_warnings(platform, guild, target).await
            }
            (Command::Kick | Command::Ban, Some((guild, target))) => {
                self.remove_member(platform, ctx, guild, target, command).await
            }
            (_, None) => self.send_usage(platform, command).await,
        }
    }

    // ------------------------------------------------------------------------
    // AI
    // ------------------------------------------------------------------------

    async fn answer<C: ChatPlatform + ?Sized>(
        &self,
        platform: &C,
        prompt: &str,
        command: Command,
    ) -> Result<(), DispatchError> {
        if prompt.is_empty() {
            return self.send_usage(platform, command).await;
        }

        let text = match self.ai.ask(prompt).await {
            Ok(reply) if reply.trim().is_empty() => formatting::AI_EMPTY_MESSAGE.to_string(),
            Ok(reply) => reply,
            Err(AiError::MalformedResponse { raw_body }) => {
                tracing::error!(raw_body = %raw_body, "Malformed response from AI service");
                formatting::AI_MALFORMED_MESSAGE.to_string()
            }
            Err(AiError::ServiceUnavailable(_)) => formatting::AI_UNAVAILABLE_MESSAGE.to_string(),
            Err(AiError::EmptyPrompt) => {
                return self.send_usage(platform, command).await;
            }
        };

        for chunk in formatting::split_message(&text, formatting::MAX_MESSAGE_LEN) {
            platform.send_reply(Reply::Text(chunk)).await?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // WARNINGS
    // ------------------------------------------------------------------------

    async fn warn<C: ChatPlatform + ?Sized>(
        &self,
        platform: &C,
        ctx: &CommandContext,
        guild: &GuildRef,
        target: &TargetMember,
    ) -> Result<(), DispatchError> {
        let reason = reason_or_default(Some(&ctx.args));

        let total = match self.warnings.add_warning(guild.id, target.id, &reason).await {
            Ok(total) => total,
            Err(e) => {
                tracing::error!(
                    guild_id = guild.id,
                    member_id = target.id,
                    "Failed to record warning: {}",
                    e
                );
                return send_text(platform, format!("An error occurred: {}", e)).await;
            }
        };

        let embed = formatting::warned_embed(target, &reason, total, &ctx.invoker);
        let replied = platform.send_reply(Reply::Embed(embed)).await;

        // The warning stands whether or not the member can be told about it,
        // and the DM goes out even if the moderator's reply did not.
        notify_best_effort(
            platform,
            target,
            &formatting::warned_notice(&guild.name, &reason),
        )
        .await;

        Ok(replied?)
    }

    async fn list_warnings<C: ChatPlatform + ?Sized>(
        &self,
        platform: &C,
        guild: &GuildRef,
        target: &TargetMember,
    ) -> Result<(), DispatchError> {
        let warnings = match self.warnings.list_warnings(guild.id, target.id).await {
            Ok(warnings) => warnings,
            Err(e) => {
                tracing::error!(
                    guild_id = guild.id,
                    member_id = target.id,
                    "Failed to list warnings: {}",
                    e
                );
                return send_text(platform, format!("An error occurred: {}", e)).await;
            }
        };

        if warnings.is_empty() {
            return send_text(platform, formatting::no_warnings_message(target)).await;
        }

        let embed = formatting::warnings_embed(target, &warnings);
        Ok(platform.send_reply(Reply::Embed(embed)).await?)
    }

    async fn clear_warnings<C: ChatPlatform + ?Sized>(
        &self,
        platform: &C,
        guild: &GuildRef,
        target: &TargetMember,
    ) -> Result<(), DispatchError> {
        let message = match self.warnings.clear_warnings(guild.id, target.id).await {
            Ok(true) => formatting::cleared_message(target),
            Ok(false) => formatting::nothing_to_clear_message(target),
            Err(e) => {
                tracing::error!(
                    guild_id = guild.id,
                    member_id = target.id,
                    "Failed to clear warnings: {}",
                    e
                );
                format!("An error occurred: {}", e)
            }
        };

        send_text(platform, message).await
    }

    // ------------------------------------------------------------------------
    // KICK / BAN
    // ------------------------------------------------------------------------

    async fn remove_member<C: ChatPlatform + ?Sized>(
        &self,
        platform: &C,
        ctx: &CommandContext,
        guild: &GuildRef,
        target: &TargetMember,
        command: Command,
    ) -> Result<(), DispatchError> {
        let verb = command.name();

        if target.id == ctx.invoker.id {
            return send_text(platform, format!("You can't {} yourself.", verb)).await;
        }

        let reason = reason_or_default(Some(&ctx.args));
        let result = if command == Command::Ban {
            platform
                .ban(guild, target, &reason, self.settings.ban_purge_days)
                .await
        } else {
            platform.kick(guild, target, &reason).await
        };

        match result {
            Ok(()) => {
                tracing::info!(
                    guild_id = guild.id,
                    member_id = target.id,
                    moderator_id = ctx.invoker.id,
                    action = verb,
                    "Member removed"
                );
                let embed = if command == Command::Ban {
                    formatting::banned_embed(target, &reason, &ctx.invoker)
                } else {
                    formatting::kicked_embed(target, &reason, &ctx.invoker)
                };
                Ok(platform.send_reply(Reply::Embed(embed)).await?)
            }
            Err(PlatformError::Forbidden) => {
                send_text(
                    platform,
                    format!("I don't have permission to {} this user.", verb),
                )
                .await
            }
            Err(PlatformError::Other(detail)) => {
                tracing::error!(
                    guild_id = guild.id,
                    member_id = target.id,
                    action = verb,
                    "Platform action failed: {}",
                    detail
                );
                send_text(platform, format!("An error occurred: {}", detail)).await
            }
        }
    }

    async fn send_usage<C: ChatPlatform + ?Sized>(
        &self,
        platform: &C,
        command: Command,
    ) -> Result<(), DispatchError> {
        send_text(
            platform,
            formatting::usage_message(command, &self.settings.command_prefix),
        )
        .await
    }
}

async fn send_text<C: ChatPlatform + ?Sized>(
    platform: &C,
    text: String,
) -> Result<(), DispatchError> {
    Ok(platform.send_reply(Reply::Text(text)).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ai::CompletionRequest;
    use crate::core::dispatch::dispatch_models::{Actor, Capability};
    use crate::infra::moderation::InMemoryWarningStore;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::time::Duration;

    // ------------------------------------------------------------------------
    // Test doubles
    // ------------------------------------------------------------------------

    struct StubAi {
        result: Result<String, String>,
        calls: Mutex<Vec<String>>,
    }

    impl StubAi {
        fn body(body: &str) -> Self {
            Self {
                result: Ok(body.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn unavailable() -> Self {
            Self {
                result: Err("status 500".to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AiProvider for StubAi {
        async fn complete(
            &self,
            request: &CompletionRequest,
            _timeout: Duration,
        ) -> Result<String, AiError> {
            self.calls
                .lock()
                .unwrap()
                .push(request.messages[0].content.clone());
            self.result.clone().map_err(AiError::ServiceUnavailable)
        }
    }

    /// Records everything the dispatcher asks of the platform.
    struct RecordingPlatform {
        granted: HashSet<Capability>,
        reply_result: Result<(), PlatformError>,
        removal_result: Result<(), PlatformError>,
        dm_result: Result<(), PlatformError>,
        replies: Mutex<Vec<Reply>>,
        kicks: Mutex<Vec<(u64, String)>>,
        bans: Mutex<Vec<(u64, String, u8)>>,
        dms: Mutex<Vec<String>>,
    }

    impl RecordingPlatform {
        fn with(granted: &[Capability]) -> Self {
            Self {
                granted: granted.iter().copied().collect(),
                reply_result: Ok(()),
                removal_result: Ok(()),
                dm_result: Ok(()),
                replies: Mutex::new(Vec::new()),
                kicks: Mutex::new(Vec::new()),
                bans: Mutex::new(Vec::new()),
                dms: Mutex::new(Vec::new()),
            }
        }

        fn replies(&self) -> Vec<Reply> {
            self.replies.lock().unwrap().clone()
        }

        fn only_text(&self) -> String {
            match self.replies().as_slice() {
                [Reply::Text(text)] => text.clone(),
                other => panic!("expected a single text reply, got {:?}", other),
            }
        }
    }

    #[async_trait]
    impl ChatPlatform for RecordingPlatform {
        async fn has_permission(&self, _actor: &Actor, capability: Capability) -> bool {
            self.granted.contains(&capability)
        }

        async fn send_reply(&self, reply: Reply) -> Result<(), PlatformError> {
            self.replies.lock().unwrap().push(reply);
            self.reply_result.clone()
        }

        async fn kick(
            &self,
            _guild: &GuildRef,
            member: &TargetMember,
            reason: &str,
        ) -> Result<(), PlatformError> {
            self.kicks
                .lock()
                .unwrap()
                .push((member.id, reason.to_string()));
            self.removal_result.clone()
        }

        async fn ban(
            &self,
            _guild: &GuildRef,
            member: &TargetMember,
            reason: &str,
            purge_days: u8,
        ) -> Result<(), PlatformError> {
            self.bans
                .lock()
                .unwrap()
                .push((member.id, reason.to_string(), purge_days));
            self.removal_result.clone()
        }

        async fn direct_message(
            &self,
            _member: &TargetMember,
            text: &str,
        ) -> Result<(), PlatformError> {
            self.dms.lock().unwrap().push(text.to_string());
            self.dm_result.clone()
        }
    }

    struct Harness {
        ai: AiService<StubAi>,
        warnings: WarningService<InMemoryWarningStore>,
        settings: DispatchSettings,
    }

    impl Harness {
        fn new(ai: StubAi) -> Self {
            Self {
                ai: AiService::new(ai, Duration::from_secs(10)),
                warnings: WarningService::new(InMemoryWarningStore::new()),
                settings: DispatchSettings::default(),
            }
        }

        fn dispatcher(&self) -> Dispatcher<'_, StubAi, InMemoryWarningStore> {
            Dispatcher::new(&self.ai, &self.warnings, &self.settings)
        }
    }

    fn ok_body(content: &str) -> String {
        serde_json::json!({"choices": [{"message": {"content": content}}]}).to_string()
    }

    fn guild_ctx(target: Option<u64>, args: &str) -> CommandContext {
        CommandContext {
            invoker: Actor {
                id: 7,
                tag: "mod#0001".to_string(),
            },
            target: target.map(|id| TargetMember {
                id,
                display_name: format!("member{}", id),
            }),
            guild: Some(GuildRef {
                id: 1,
                name: "Test Guild".to_string(),
            }),
            args: args.to_string(),
        }
    }

    fn dm_ctx(args: &str) -> CommandContext {
        CommandContext {
            guild: None,
            ..guild_ctx(None, args)
        }
    }

    // ------------------------------------------------------------------------
    // ask / joke
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_ask_sends_reply_verbatim() {
        let harness = Harness::new(StubAi::body(&ok_body("Why did...")));
        let platform = RecordingPlatform::with(&[]);

        harness
            .dispatcher()
            .dispatch(&platform, &dm_ctx("Tell me a joke"), Command::Ask)
            .await
            .unwrap();

        assert_eq!(platform.only_text(), "Why did...");
    }

    #[tokio::test]
    async fn test_ask_unavailable_sends_apology() {
        let harness = Harness::new(StubAi::unavailable());
        let platform = RecordingPlatform::with(&[]);

        let result = harness
            .dispatcher()
            .dispatch(&platform, &dm_ctx("anything"), Command::Ask)
            .await;

        assert!(result.is_ok());
        assert_eq!(
            platform.only_text(),
            "Sorry, I couldn't get a response from the AI service."
        );
    }

    #[tokio::test]
    async fn test_ask_malformed_sends_malformed_message() {
        let harness = Harness::new(StubAi::body(r#"{"unexpected":"shape"}"#));
        let platform = RecordingPlatform::with(&[]);

        harness
            .dispatcher()
            .dispatch(&platform, &dm_ctx("anything"), Command::Ask)
            .await
            .unwrap();

        assert_eq!(
            platform.only_text(),
            "Received malformed response from AI service"
        );
    }

    #[tokio::test]
    async fn test_ask_without_question_shows_usage() {
        let harness = Harness::new(StubAi::body(&ok_body("unused")));
        let platform = RecordingPlatform::with(&[]);

        harness
            .dispatcher()
            .dispatch(&platform, &dm_ctx("   "), Command::Ask)
            .await
            .unwrap();

        assert_eq!(platform.only_text(), "Usage: `!ask <question>`");
        assert!(harness.ai_calls().is_empty());
    }

    #[tokio::test]
    async fn test_joke_uses_joke_prompt() {
        let harness = Harness::new(StubAi::body(&ok_body("knock knock")));
        let platform = RecordingPlatform::with(&[]);

        harness
            .dispatcher()
            .dispatch(&platform, &dm_ctx("ignored"), Command::Joke)
            .await
            .unwrap();

        assert_eq!(harness.ai_calls(), vec!["Tell me a funny joke"]);
        assert_eq!(platform.only_text(), "knock knock");
    }

    #[tokio::test]
    async fn test_long_answer_is_split() {
        let answer = "a".repeat(4001);
        let harness = Harness::new(StubAi::body(&ok_body(&answer)));
        let platform = RecordingPlatform::with(&[]);

        harness
            .dispatcher()
            .dispatch(&platform, &dm_ctx("essay please"), Command::Ask)
            .await
            .unwrap();

        assert_eq!(platform.replies().len(), 3);
    }

    impl Harness {
        fn ai_calls(&self) -> Vec<String> {
            self.ai.provider().calls.lock().unwrap().clone()
        }
    }

    // ------------------------------------------------------------------------
    // warnings
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_warn_records_and_notifies() {
        let harness = Harness::new(StubAi::unavailable());
        let platform = RecordingPlatform::with(&[Capability::Moderate]);
        let dispatcher = harness.dispatcher();

        dispatcher
            .dispatch(&platform, &guild_ctx(Some(42), "spam"), Command::Warn)
            .await
            .unwrap();
        dispatcher
            .dispatch(&platform, &guild_ctx(Some(42), ""), Command::Warn)
            .await
            .unwrap();

        let stored = harness.warnings.list_warnings(1, 42).await.unwrap();
        assert_eq!(stored, vec!["spam", "No reason provided"]);

        let replies = platform.replies();
        match &replies[1] {
            Reply::Embed(embed) => {
                assert_eq!(embed.title, "⚠️ User Warned");
                assert_eq!(embed.fields[1].value, "2");
            }
            other => panic!("expected embed, got {:?}", other),
        }

        let dms = platform.dms.lock().unwrap().clone();
        assert_eq!(
            dms,
            vec![
                "You've been warned in Test Guild for: spam",
                "You've been warned in Test Guild for: No reason provided",
            ]
        );
    }

    #[tokio::test]
    async fn test_warn_survives_closed_dms() {
        let harness = Harness::new(StubAi::unavailable());
        let mut platform = RecordingPlatform::with(&[Capability::Moderate]);
        platform.dm_result = Err(PlatformError::Forbidden);

        let result = harness
            .dispatcher()
            .dispatch(&platform, &guild_ctx(Some(42), "spam"), Command::Warn)
            .await;

        assert!(result.is_ok());
        assert_eq!(platform.replies().len(), 1);
        assert!(matches!(platform.replies()[0], Reply::Embed(_)));
        assert_eq!(
            harness.warnings.list_warnings(1, 42).await.unwrap(),
            vec!["spam"]
        );
    }

    #[tokio::test]
    async fn test_warn_still_notifies_when_reply_fails() {
        let harness = Harness::new(StubAi::unavailable());
        let mut platform = RecordingPlatform::with(&[Capability::Moderate]);
        platform.reply_result = Err(PlatformError::Other("Embed too large".to_string()));

        let result = harness
            .dispatcher()
            .dispatch(&platform, &guild_ctx(Some(42), "spam"), Command::Warn)
            .await;

        assert!(matches!(
            result,
            Err(DispatchError::Send(PlatformError::Other(_)))
        ));
        assert_eq!(
            harness.warnings.list_warnings(1, 42).await.unwrap(),
            vec!["spam"]
        );
        assert_eq!(
            *platform.dms.lock().unwrap(),
            vec!["You've been warned in Test Guild for: spam"]
        );
    }

    #[tokio::test]
    async fn test_warn_with_oversized_reason_fits_the_embed() {
        let harness = Harness::new(StubAi::unavailable());
        let platform = RecordingPlatform::with(&[Capability::Moderate]);
        let reason = "r".repeat(1500);

        harness
            .dispatcher()
            .dispatch(&platform, &guild_ctx(Some(42), &reason), Command::Warn)
            .await
            .unwrap();

        // The ledger keeps the full text; only the embed is shortened.
        assert_eq!(
            harness.warnings.list_warnings(1, 42).await.unwrap(),
            vec![reason]
        );
        match platform.replies().as_slice() {
            [Reply::Embed(embed)] => {
                assert_eq!(
                    embed.fields[0].value.chars().count(),
                    formatting::MAX_FIELD_VALUE_LEN
                );
                assert!(formatting::embed_len(embed) <= formatting::MAX_EMBED_LEN);
            }
            other => panic!("expected one embed, got {:?}", other),
        }
        assert_eq!(platform.dms.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_warn_without_permission_touches_nothing() {
        let harness = Harness::new(StubAi::unavailable());
        let platform = RecordingPlatform::with(&[Capability::Kick, Capability::Ban]);

        let result = harness
            .dispatcher()
            .dispatch(&platform, &guild_ctx(Some(42), "spam"), Command::Warn)
            .await;

        assert!(matches!(
            result,
            Err(DispatchError::MissingPermission(Capability::Moderate))
        ));
        assert!(harness.warnings.list_warnings(1, 42).await.unwrap().is_empty());
        assert!(platform.replies().is_empty());
        assert!(platform.dms.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_warn_outside_guild_is_rejected() {
        let harness = Harness::new(StubAi::unavailable());
        let platform = RecordingPlatform::with(&[Capability::Moderate]);

        let result = harness
            .dispatcher()
            .dispatch(&platform, &dm_ctx("spam"), Command::Warn)
            .await;

        assert!(matches!(result, Err(DispatchError::GuildOnly)));
    }

    #[tokio::test]
    async fn test_warn_without_target_shows_usage() {
        let harness = Harness::new(StubAi::unavailable());
        let platform = RecordingPlatform::with(&[Capability::Moderate]);

        harness
            .dispatcher()
            .dispatch(&platform, &guild_ctx(None, "spam"), Command::Warn)
            .await
            .unwrap();

        assert_eq!(
            platform.only_text(),
            "Usage: `!warn <member> [reason]`"
        );
    }

    #[tokio::test]
    async fn test_warnings_listing() {
        let harness = Harness::new(StubAi::unavailable());
        let platform = RecordingPlatform::with(&[Capability::Moderate]);
        let dispatcher = harness.dispatcher();

        dispatcher
            .dispatch(&platform, &guild_ctx(Some(42), ""), Command::Warnings)
            .await
            .unwrap();
        assert_eq!(platform.only_text(), "member42 has no warnings.");

        harness.warnings.add_warning(1, 42, "spam").await.unwrap();
        harness.warnings.add_warning(1, 42, "spam again").await.unwrap();

        dispatcher
            .dispatch(&platform, &guild_ctx(Some(42), ""), Command::Warnings)
            .await
            .unwrap();

        match platform.replies().last() {
            Some(Reply::Embed(embed)) => {
                let names: Vec<_> = embed.fields.iter().map(|f| f.name.as_str()).collect();
                let values: Vec<_> = embed.fields.iter().map(|f| f.value.as_str()).collect();
                assert_eq!(names, vec!["Warning #1", "Warning #2"]);
                assert_eq!(values, vec!["spam", "spam again"]);
            }
            other => panic!("expected embed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_clearwarns() {
        let harness = Harness::new(StubAi::unavailable());
        let platform = RecordingPlatform::with(&[Capability::Moderate]);
        let dispatcher = harness.dispatcher();

        harness.warnings.add_warning(1, 42, "spam").await.unwrap();

        dispatcher
            .dispatch(&platform, &guild_ctx(Some(42), ""), Command::ClearWarns)
            .await
            .unwrap();
        dispatcher
            .dispatch(&platform, &guild_ctx(Some(42), ""), Command::ClearWarns)
            .await
            .unwrap();

        assert_eq!(
            platform.replies(),
            vec![
                Reply::Text("Cleared all warnings for <@42>".to_string()),
                Reply::Text("member42 has no warnings to clear.".to_string()),
            ]
        );
        assert!(harness.warnings.list_warnings(1, 42).await.unwrap().is_empty());
    }

    // ------------------------------------------------------------------------
    // kick / ban
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_kick_success() {
        let harness = Harness::new(StubAi::unavailable());
        let platform = RecordingPlatform::with(&[Capability::Kick]);

        harness
            .dispatcher()
            .dispatch(&platform, &guild_ctx(Some(42), "rude"), Command::Kick)
            .await
            .unwrap();

        assert_eq!(
            platform.kicks.lock().unwrap().clone(),
            vec![(42, "rude".to_string())]
        );
        match platform.replies().as_slice() {
            [Reply::Embed(embed)] => assert_eq!(embed.title, "👢 User Kicked"),
            other => panic!("expected kick embed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_kick_forbidden_by_platform() {
        let harness = Harness::new(StubAi::unavailable());
        let mut platform = RecordingPlatform::with(&[Capability::Kick]);
        platform.removal_result = Err(PlatformError::Forbidden);

        harness
            .dispatcher()
            .dispatch(&platform, &guild_ctx(Some(42), ""), Command::Kick)
            .await
            .unwrap();

        assert_eq!(
            platform.only_text(),
            "I don't have permission to kick this user."
        );
    }

    #[tokio::test]
    async fn test_ban_other_error_reports_detail() {
        let harness = Harness::new(StubAi::unavailable());
        let mut platform = RecordingPlatform::with(&[Capability::Ban]);
        platform.removal_result = Err(PlatformError::Other("Unknown Member".to_string()));

        harness
            .dispatcher()
            .dispatch(&platform, &guild_ctx(Some(42), ""), Command::Ban)
            .await
            .unwrap();

        assert_eq!(platform.only_text(), "An error occurred: Unknown Member");
    }

    #[tokio::test]
    async fn test_ban_uses_purge_setting_and_default_reason() {
        let mut harness = Harness::new(StubAi::unavailable());
        harness.settings.ban_purge_days = 3;
        let platform = RecordingPlatform::with(&[Capability::Ban]);

        harness
            .dispatcher()
            .dispatch(&platform, &guild_ctx(Some(42), ""), Command::Ban)
            .await
            .unwrap();

        assert_eq!(
            platform.bans.lock().unwrap().clone(),
            vec![(42, "No reason provided".to_string(), 3)]
        );
    }

    #[tokio::test]
    async fn test_ban_needs_ban_capability() {
        let harness = Harness::new(StubAi::unavailable());
        let platform = RecordingPlatform::with(&[Capability::Kick, Capability::Moderate]);

        let result = harness
            .dispatcher()
            .dispatch(&platform, &guild_ctx(Some(42), ""), Command::Ban)
            .await;

        assert!(matches!(
            result,
            Err(DispatchError::MissingPermission(Capability::Ban))
        ));
        assert!(platform.bans.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cannot_kick_yourself() {
        let harness = Harness::new(StubAi::unavailable());
        let platform = RecordingPlatform::with(&[Capability::Kick]);

        // Invoker id is 7
        harness
            .dispatcher()
            .dispatch(&platform, &guild_ctx(Some(7), ""), Command::Kick)
            .await
            .unwrap();

        assert_eq!(platform.only_text(), "You can't kick yourself.");
        assert!(platform.kicks.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_help_needs_no_permission() {
        let harness = Harness::new(StubAi::unavailable());
        let platform = RecordingPlatform::with(&[]);

        harness
            .dispatcher()
            .dispatch(&platform, &dm_ctx(""), Command::Help)
            .await
            .unwrap();

        assert!(matches!(platform.replies().as_slice(), [Reply::Embed(_)]));
    }
}
