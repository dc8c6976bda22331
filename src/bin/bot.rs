use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info, warn};
use serenity::async_trait;
use serenity::http::Http;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;

use klara::core::{Config, IncomingMessage, Messenger};
use klara::discord::DiscordMessenger;
use klara::CommandHandler;

struct Handler {
    command_handler: Arc<CommandHandler>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        let self_user_id = ctx.cache.current_user_id();
        let incoming = IncomingMessage::from(&msg);

        if let Err(e) = self
            .command_handler
            .handle_message(&incoming, self_user_id)
            .await
        {
            // The failed send was the only channel back to the user
            error!("Error handling message {}: {e:#}", msg.id);
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);
        info!(
            "🕕 Reset timezone: {}",
            self.command_handler.context().reset_timezone
        );
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = terminate.recv() => {}
                }
            }
            Err(e) => {
                warn!("Could not install SIGTERM handler: {e}");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {e}");
        e
    })?;
    info!("Starting Klara Discord Bot...");

    let http = Arc::new(Http::new(&config.bot_token()));
    let messenger: Arc<dyn Messenger> = Arc::new(DiscordMessenger::new(http));
    let command_handler = CommandHandler::new(messenger, config.reset_timezone.clone());

    let handler = Handler {
        command_handler: Arc::new(command_handler),
    };

    let intents = GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("Shutdown signal received, closing gateway session...");
        shard_manager.lock().await.shutdown_all().await;
    });

    info!("Bot is now running. Press CTRL-C to exit.");
    info!("Gateway intents: {intents:?}");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    info!("Gateway session closed, exiting");
    Ok(())
}
