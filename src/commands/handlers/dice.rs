//! "на дабл" roll handler

use anyhow::Result;
use log::debug;

use crate::commands::context::CommandContext;
use crate::core::messenger::IncomingMessage;
use crate::core::response::roll_reply;
use crate::features::dice::roll_percent;

pub struct DiceHandler;

impl DiceHandler {
    pub async fn handle(
        &self,
        ctx: &CommandContext,
        msg: &IncomingMessage,
        phrase: &str,
    ) -> Result<()> {
        let roll = roll_percent();
        debug!("Rolled {roll} for user {}", msg.author_id);

        ctx.messenger
            .send_text(msg.channel_id, &roll_reply(roll, phrase))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::messenger::fake::RecordingMessenger;
    use serenity::model::id::{ChannelId, MessageId, UserId};
    use std::sync::Arc;

    fn message() -> IncomingMessage {
        IncomingMessage {
            author_id: UserId(1),
            channel_id: ChannelId(2),
            content: "на дабл спать".to_string(),
            reply_to: Some(MessageId(3)),
        }
    }

    #[tokio::test]
    async fn test_roll_reply_shape() {
        let messenger = Arc::new(RecordingMessenger::new());
        let ctx = CommandContext::new(messenger.clone(), "Europe/Moscow");

        DiceHandler.handle(&ctx, &message(), "спать").await.unwrap();

        let sent = messenger.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].channel_id, ChannelId(2));
        assert_eq!(sent[0].reply_to, None);

        let text = &sent[0].text;
        let roll: u32 = text
            .trim_start_matches("🎲 **")
            .split("**")
            .next()
            .unwrap()
            .parse()
            .unwrap();
        assert!(roll <= 100);
        assert!(text.ends_with("** спать"));
    }

    #[tokio::test]
    async fn test_send_failure_propagates() {
        let ctx = CommandContext::new(Arc::new(RecordingMessenger::failing()), "Europe/Moscow");
        assert!(DiceHandler.handle(&ctx, &message(), "").await.is_err());
    }
}
