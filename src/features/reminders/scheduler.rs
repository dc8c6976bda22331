use chrono::{DateTime, Utc};
use log::{debug, error, info};
use serenity::model::id::{ChannelId, MessageId, UserId};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::core::messenger::Messenger;
use crate::core::response::stamina_restored_reply;

/// A pending "stamina restored" notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledReminder {
    pub fire_at: DateTime<Utc>,
    pub channel_id: ChannelId,
    pub reply_to: Option<MessageId>,
    pub author_id: UserId,
}

/// Run `callback` exactly once, no earlier than `fire_at`, on its own task.
///
/// Instants in the past fire on the next scheduler tick. The returned handle
/// may be dropped; the task keeps running.
pub fn schedule_once<F, Fut>(fire_at: DateTime<Utc>, callback: F) -> JoinHandle<()>
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let delay = (fire_at - Utc::now()).to_std().unwrap_or(Duration::ZERO);
    tokio::spawn(async move {
        sleep(delay).await;
        callback().await;
    })
}

/// Delivers reminders through the injected messenger.
#[derive(Clone)]
pub struct ReminderScheduler {
    messenger: Arc<dyn Messenger>,
}

impl ReminderScheduler {
    pub fn new(messenger: Arc<dyn Messenger>) -> Self {
        ReminderScheduler { messenger }
    }

    pub fn schedule(&self, reminder: ScheduledReminder) -> JoinHandle<()> {
        info!(
            "⏰ Reminder for user {} in channel {} scheduled at {}",
            reminder.author_id,
            reminder.channel_id,
            reminder.fire_at.format("%Y-%m-%d %H:%M:%S UTC")
        );

        let messenger = Arc::clone(&self.messenger);
        schedule_once(reminder.fire_at, move || deliver(messenger, reminder))
    }
}

async fn deliver(messenger: Arc<dyn Messenger>, reminder: ScheduledReminder) {
    let text = stamina_restored_reply(reminder.author_id);
    let sent = match reminder.reply_to {
        Some(reply_to) => {
            messenger
                .send_reply(reminder.channel_id, &text, reply_to)
                .await
        }
        None => messenger.send_text(reminder.channel_id, &text).await,
    };

    match sent {
        Ok(message_id) => debug!(
            "Reminder delivered to user {} as message {message_id}",
            reminder.author_id
        ),
        // Never retried: the command that created it has long returned
        Err(e) => error!(
            "Error sending reminder message to user {}: {e:#}",
            reminder.author_id
        ),
    }
}
