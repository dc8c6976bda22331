//! # Discord Transport
//!
//! Serenity-backed [`Messenger`] and gateway message conversion.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.2.0

use anyhow::Result;
use async_trait::async_trait;
use serenity::http::Http;
use serenity::model::channel::Message;
use serenity::model::id::{ChannelId, MessageId};
use std::sync::Arc;

use crate::core::messenger::{IncomingMessage, Messenger};

pub struct DiscordMessenger {
    http: Arc<Http>,
}

impl DiscordMessenger {
    pub fn new(http: Arc<Http>) -> Self {
        DiscordMessenger { http }
    }
}

#[async_trait]
impl Messenger for DiscordMessenger {
    async fn send_text(&self, channel_id: ChannelId, text: &str) -> Result<MessageId> {
        let sent = channel_id.say(&self.http, text).await?;
        Ok(sent.id)
    }

    async fn send_reply(
        &self,
        channel_id: ChannelId,
        text: &str,
        reply_to: MessageId,
    ) -> Result<MessageId> {
        let sent = channel_id
            .send_message(&self.http, |m| {
                m.content(text).reference_message((channel_id, reply_to))
            })
            .await?;
        Ok(sent.id)
    }
}

impl From<&Message> for IncomingMessage {
    fn from(msg: &Message) -> Self {
        IncomingMessage {
            author_id: msg.author.id,
            channel_id: msg.channel_id,
            content: msg.content.clone(),
            reply_to: Some(msg.id),
        }
    }
}
