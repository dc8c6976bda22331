//! "ех..." handler

use anyhow::Result;

use crate::commands::context::CommandContext;
use crate::core::messenger::IncomingMessage;
use crate::core::response::EXH_REPLY;

pub struct ExhHandler;

impl ExhHandler {
    pub async fn handle(&self, ctx: &CommandContext, msg: &IncomingMessage) -> Result<()> {
        ctx.messenger.send_text(msg.channel_id, EXH_REPLY).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::messenger::fake::RecordingMessenger;
    use serenity::model::id::{ChannelId, UserId};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_exh_reply() {
        let messenger = Arc::new(RecordingMessenger::new());
        let ctx = CommandContext::new(messenger.clone(), "Europe/Moscow");
        let msg = IncomingMessage {
            author_id: UserId(1),
            channel_id: ChannelId(5),
            content: "ех...".to_string(),
            reply_to: None,
        };

        ExhHandler.handle(&ctx, &msg).await.unwrap();

        let sent = messenger.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].text, "тяжело... тяжело...");
        assert_eq!(sent[0].channel_id, ChannelId(5));
    }
}
