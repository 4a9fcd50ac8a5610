//! Basic usage example for the Discord webhook logger
//!
//! Replace the webhook URLs with real ones from your Discord server
//! (channel settings → Integrations → Webhooks), then:
//!
//! ```bash
//! cargo run --example basic_usage
//! ```

use discord_webhook_logger::DiscordLogger;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Configure once at startup; the first entry is the fallback destination
    // for messages without a matching category.
    let logger = DiscordLogger::configure([
        ("general", "https://discord.com/api/webhooks/111111/general-token"),
        ("alerts", "https://discord.com/api/webhooks/222222/alerts-token"),
    ]);

    // Routed to the "alerts" channel
    let delivered = logger
        .warning("disk usage at 91%", Some("worker-3"), Some("alerts"))
        .await;
    println!("alert delivered: {delivered}");

    // No category: falls back to "general"
    logger.info("service started", None, None).await;

    // Fire-and-forget: spawn and drop the result
    let fire_and_forget = logger.clone();
    tokio::spawn(async move {
        fire_and_forget
            .error("background task failed", Some("janitor"), None)
            .await;
    });

    // Full control over the extra fields via the generic entry point
    let fields = vec![
        ("Severity".to_string(), "Info".to_string()),
        ("Build".to_string(), env!("CARGO_PKG_VERSION").to_string()),
    ];
    logger
        .send_log("deploy finished", Some("ci"), Some("general"), &fields)
        .await;
}
