use crate::commands::context::CommandContext;
use crate::commands::handlers::{DiceHandler, ExhHandler, RemindHandler, ResetHandler};
use crate::commands::matcher::{classify, CommandKind};
use crate::core::messenger::{IncomingMessage, Messenger};
use anyhow::Result;
use log::{debug, info};
use serenity::model::id::UserId;
use std::sync::Arc;
use uuid::Uuid;

/// Entry point for every inbound channel message.
#[derive(Clone)]
pub struct CommandHandler {
    context: Arc<CommandContext>,
}

impl CommandHandler {
    pub fn new(messenger: Arc<dyn Messenger>, reset_timezone: impl Into<String>) -> Self {
        CommandHandler {
            context: Arc::new(CommandContext::new(messenger, reset_timezone)),
        }
    }

    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// Classify `msg` and run the matching command.
    ///
    /// Messages from `self_user_id` and unrecognized text are ignored. Send
    /// failures are returned to the caller for logging and never retried.
    pub async fn handle_message(&self, msg: &IncomingMessage, self_user_id: UserId) -> Result<()> {
        if msg.author_id == self_user_id {
            return Ok(());
        }

        let request_id = Uuid::new_v4();
        let content = msg.content.trim();
        debug!("[{}] 📥 Message received | User: {} | Channel: {} | Content: '{}'",
               request_id, msg.author_id, msg.channel_id,
               content.chars().take(100).collect::<String>());

        let command = classify(content);
        let ctx = self.context.as_ref();

        match command {
            CommandKind::RollDouble(phrase) => {
                info!("[{request_id}] 🎲 Roll requested by {}", msg.author_id);
                DiceHandler.handle(ctx, msg, &phrase).await?;
            }
            CommandKind::ResetQuery => {
                info!("[{request_id}] 🕕 Reset time requested by {}", msg.author_id);
                ResetHandler.handle(ctx, msg).await?;
            }
            CommandKind::ExhQuery => {
                info!("[{request_id}] 😮‍💨 Exh from {}", msg.author_id);
                ExhHandler.handle(ctx, msg).await?;
            }
            CommandKind::ReminderRequest(raw_number) => {
                info!("[{request_id}] ⏰ Stamina reminder requested by {}", msg.author_id);
                // Detached; the reminder outlives this message event
                let _pending = RemindHandler.handle(ctx, msg, &raw_number).await?;
            }
            CommandKind::Unrecognized => {
                debug!("[{request_id}] No trigger matched");
                return Ok(());
            }
        }

        debug!("[{request_id}] ✅ Reply sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::messenger::fake::RecordingMessenger;
    use serenity::model::id::{ChannelId, MessageId};
    use std::time::Duration;

    const BOT_ID: UserId = UserId(1);

    fn message(content: &str) -> IncomingMessage {
        IncomingMessage {
            author_id: UserId(500),
            channel_id: ChannelId(900),
            content: content.to_string(),
            reply_to: Some(MessageId(77)),
        }
    }

    fn handler() -> (CommandHandler, Arc<RecordingMessenger>) {
        let messenger = Arc::new(RecordingMessenger::new());
        (CommandHandler::new(messenger.clone(), "Europe/Moscow"), messenger)
    }

    #[tokio::test]
    async fn test_unrecognized_sends_nothing() {
        let (handler, messenger) = handler();

        handler.handle_message(&message("просто болтаем"), BOT_ID).await.unwrap();
        handler.handle_message(&message("ех!"), BOT_ID).await.unwrap();

        assert!(messenger.sent().is_empty());
    }

    #[tokio::test]
    async fn test_own_messages_are_ignored() {
        let (handler, messenger) = handler();
        let mut msg = message("ех...");
        msg.author_id = BOT_ID;

        handler.handle_message(&msg, BOT_ID).await.unwrap();

        assert!(messenger.sent().is_empty());
    }

    #[tokio::test]
    async fn test_dispatches_each_command() {
        let (handler, messenger) = handler();

        handler.handle_message(&message("чё там на дабл покушать"), BOT_ID).await.unwrap();
        handler.handle_message(&message("клара ресет"), BOT_ID).await.unwrap();
        handler.handle_message(&message("ех..."), BOT_ID).await.unwrap();
        handler.handle_message(&message("клара напомни abc"), BOT_ID).await.unwrap();

        let sent = messenger.sent();
        assert_eq!(sent.len(), 4);
        assert!(sent[0].text.starts_with("🎲 **"));
        assert!(sent[0].text.ends_with("покушать"));
        assert!(sent[1].text.starts_with("Ресет на европе"));
        assert_eq!(sent[2].text, "тяжело... тяжело...");
        assert!(sent[3].text.contains("формат команды"));
        assert!(sent.iter().all(|s| s.channel_id == ChannelId(900)));
    }

    #[tokio::test]
    async fn test_reminder_fires_after_handler_returns() {
        let (handler, messenger) = handler();

        handler.handle_message(&message("клара напомни 240"), BOT_ID).await.unwrap();

        // The reminder runs on its own task; wait for it to land
        tokio::time::timeout(Duration::from_secs(2), async {
            while messenger.sent().len() < 2 {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("reminder should fire");

        let sent = messenger.sent();
        assert_eq!(sent[1].reply_to, Some(MessageId(77)));
        assert!(sent[1].text.contains("<@500>"));
    }

    #[tokio::test]
    async fn test_transport_failure_is_reported_not_panicked() {
        let handler = CommandHandler::new(Arc::new(RecordingMessenger::failing()), "Europe/Moscow");

        assert!(handler.handle_message(&message("ех"), BOT_ID).await.is_err());
        // A later message is unaffected by the earlier failure
        assert!(handler.handle_message(&message("привет"), BOT_ID).await.is_ok());
    }
}
