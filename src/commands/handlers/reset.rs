//! "клара ресет" handler
//!
//! Replies with the next daily reset as a Discord relative timestamp.

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::error;

use crate::commands::context::CommandContext;
use crate::core::messenger::IncomingMessage;
use crate::core::response::reset_reply;
use crate::features::daily_reset::next_reset;

pub struct ResetHandler;

impl ResetHandler {
    pub async fn handle(&self, ctx: &CommandContext, msg: &IncomingMessage) -> Result<()> {
        let reset_at = Self::reset_timestamp_or_epoch(Utc::now(), &ctx.reset_timezone);
        ctx.messenger
            .send_text(msg.channel_id, &reset_reply(reset_at))
            .await?;
        Ok(())
    }

    /// Next reset, or the Unix epoch if it cannot be computed.
    fn reset_timestamp_or_epoch(now: DateTime<Utc>, timezone: &str) -> i64 {
        next_reset(now, timezone).unwrap_or_else(|e| {
            error!("Failed to compute next reset: {e}");
            0
        })
    }
}
