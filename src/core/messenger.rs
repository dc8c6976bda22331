//! Outbound messaging seam
//!
//! Handlers talk to the chat service only through [`Messenger`], so the
//! Discord gateway can be swapped for a recording fake in tests.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.2.0

use anyhow::Result;
use async_trait::async_trait;
use serenity::model::id::{ChannelId, MessageId, UserId};

/// A text message as seen by the command layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub author_id: UserId,
    pub channel_id: ChannelId,
    pub content: String,
    /// Message to thread follow-ups under. `None` for synthetic messages.
    pub reply_to: Option<MessageId>,
}

/// Capability for sending text into a channel.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send a plain message to a channel.
    async fn send_text(&self, channel_id: ChannelId, text: &str) -> Result<MessageId>;

    /// Send a message as a reply to `reply_to` in the same channel.
    async fn send_reply(
        &self,
        channel_id: ChannelId,
        text: &str,
        reply_to: MessageId,
    ) -> Result<MessageId>;
}
