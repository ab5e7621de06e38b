//! Loads trending videos and prints the rendered grid
//!
//! Usage: cargo run --example trending -- [host] [filter]

use trendgrid_core::{Surface, VideoListClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let host = args.next().unwrap_or_else(|| "localhost".to_string());
    let filter = args.next();

    let client = VideoListClient::for_host(&host, Surface::new(), Surface::new())?;
    println!("Fetching trending videos from {}...\n", client.api().base_url());

    client.load_trending().await;
    if let Some(query) = filter {
        client.filter(&query);
    }

    let view = client.view();
    for message in view.grid().messages() {
        println!("{}", message);
    }
    for card in view.grid().cards() {
        println!("{} | {} | {}", card.title, card.channel, card.url);
    }

    Ok(())
}
