//! "клара напомни <N>" handler
//!
//! Tells the user when their stamina will be full and schedules a reply
//! to their message for that moment.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 2.0.0: Reminders scheduled through ReminderScheduler
//! - 1.0.0: Initial implementation

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::info;
use tokio::task::JoinHandle;

use crate::commands::context::CommandContext;
use crate::core::messenger::IncomingMessage;
use crate::core::response::{stamina_format_hint, stamina_full_at_reply};
use crate::features::reminders::ScheduledReminder;
use crate::features::stamina::{regen_timestamp, remaining_power, StaminaValue};

pub struct RemindHandler;

impl RemindHandler {
    /// Returns the pending reminder task, or `None` if the request was rejected.
    pub async fn handle(
        &self,
        ctx: &CommandContext,
        msg: &IncomingMessage,
        raw_number: &str,
    ) -> Result<Option<JoinHandle<()>>> {
        self.handle_at(ctx, msg, raw_number, Utc::now()).await
    }

    async fn handle_at(
        &self,
        ctx: &CommandContext,
        msg: &IncomingMessage,
        raw_number: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<JoinHandle<()>>> {
        let current = match StaminaValue::parse(raw_number) {
            Ok(value) => value,
            Err(e) => {
                info!("Rejected reminder request from user {}: {e}", msg.author_id);
                ctx.messenger
                    .send_text(msg.channel_id, &stamina_format_hint())
                    .await?;
                return Ok(None);
            }
        };

        let full_at = regen_timestamp(now, remaining_power(current));

        // No acknowledgement, no reminder
        ctx.messenger
            .send_text(msg.channel_id, &stamina_full_at_reply(&full_at))
            .await?;

        let handle = ctx.scheduler.schedule(ScheduledReminder {
            fire_at: full_at,
            channel_id: msg.channel_id,
            reply_to: msg.reply_to,
            author_id: msg.author_id,
        });
        Ok(Some(handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::messenger::fake::RecordingMessenger;
    use chrono::{Duration, TimeZone};
    use serenity::model::id::{ChannelId, MessageId, UserId};
    use std::sync::Arc;

    fn message() -> IncomingMessage {
        IncomingMessage {
            author_id: UserId(42),
            channel_id: ChannelId(7),
            content: "клара напомни".to_string(),
            reply_to: Some(MessageId(1000)),
        }
    }

    #[tokio::test]
    async fn test_rejects_bad_number_with_hint() {
        let messenger = Arc::new(RecordingMessenger::new());
        let ctx = CommandContext::new(messenger.clone(), "Europe/Moscow");

        for raw in ["", "999", "abc"] {
            let handle = RemindHandler.handle(&ctx, &message(), raw).await.unwrap();
            assert!(handle.is_none());
        }

        let sent = messenger.sent();
        assert_eq!(sent.len(), 3);
        for reply in sent {
            assert!(reply.text.contains("клара напомни <число 0-240>"));
        }
    }

    #[tokio::test]
    async fn test_acknowledges_with_full_time() {
        let messenger = Arc::new(RecordingMessenger::new());
        let ctx = CommandContext::new(messenger.clone(), "Europe/Moscow");
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();

        // 40 missing * 6 minutes = 4 hours; the reminder stays pending
        let handle = RemindHandler
            .handle_at(&ctx, &message(), "200", now)
            .await
            .unwrap()
            .expect("reminder should be scheduled");
        handle.abort();

        let expected = (now + Duration::hours(4)).timestamp();
        let sent = messenger.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].text,
            format!("Сестричка, твоя стамина полностью заполнится <t:{expected}:R>")
        );
    }

    #[tokio::test]
    async fn test_full_stamina_reminds_immediately() {
        let messenger = Arc::new(RecordingMessenger::new());
        let ctx = CommandContext::new(messenger.clone(), "Europe/Moscow");

        let handle = RemindHandler
            .handle(&ctx, &message(), "240")
            .await
            .unwrap()
            .unwrap();
        handle.await.unwrap();

        let sent = messenger.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].reply_to, Some(MessageId(1000)));
        assert_eq!(
            sent[1].text,
            "Сестричка, <@42>, твоя стамина полностью восстановлена!"
        );
    }

    #[tokio::test]
    async fn test_failed_acknowledgement_schedules_nothing() {
        let ctx = CommandContext::new(Arc::new(RecordingMessenger::failing()), "Europe/Moscow");
        assert!(RemindHandler.handle(&ctx, &message(), "100").await.is_err());
    }
}
