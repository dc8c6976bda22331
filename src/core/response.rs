//! Reply templates and Discord message utilities
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Collect all user-facing reply texts here
//! - 1.0.0: Message length limit and truncation

use chrono::{DateTime, TimeZone};
use serenity::model::id::UserId;

use crate::features::stamina::MAX_POWER;

/// Discord message content limit
pub const MESSAGE_LIMIT: usize = 2000;

pub const EXH_REPLY: &str = "тяжело... тяжело...";

/// Discord markup that renders as a relative time ("in 3 hours") for each viewer.
pub fn discord_relative_time(unix_seconds: i64) -> String {
    format!("<t:{unix_seconds}:R>")
}

pub fn roll_reply(roll: u32, phrase: &str) -> String {
    truncate_for_message(format!("🎲 **{roll}** {phrase}").trim_end())
}

pub fn reset_reply(reset_at: i64) -> String {
    format!("Ресет на европе {}", discord_relative_time(reset_at))
}

pub fn stamina_full_at_reply<Tz: TimeZone>(full_at: &DateTime<Tz>) -> String {
    format!(
        "Сестричка, твоя стамина полностью заполнится {}",
        discord_relative_time(full_at.timestamp())
    )
}

pub fn stamina_format_hint() -> String {
    format!("Сестричка, формат команды должен быть такой: `клара напомни <число 0-{MAX_POWER}>`")
}

pub fn stamina_restored_reply(author_id: UserId) -> String {
    format!("Сестричка, <@{author_id}>, твоя стамина полностью восстановлена!")
}

/// Truncate text to fit message limit, adding ellipsis if needed
pub fn truncate_for_message(text: &str) -> String {
    if text.len() <= MESSAGE_LIMIT {
        text.to_string()
    } else {
        // Find a safe UTF-8 boundary
        let mut end = MESSAGE_LIMIT - 3; // Room for "..."
        while !text.is_char_boundary(end) && end > 0 {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}
