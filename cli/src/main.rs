mod config;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use mockstream_core::StreamConfig;
use mockstream_gateway::{GatewayState, start_server};

use config::StreamOptions;

#[derive(Parser)]
#[command(name = "mockstream")]
#[command(about = "Mock streaming chat-completion server for exercising SSE clients")]
#[command(version)]
struct Cli {
    /// Path to a text file to use as the message
    #[arg(long)]
    text_file: Option<PathBuf>,

    /// Message to stream word by word
    #[arg(long)]
    message: Option<String>,

    /// Words per second (default: 2)
    #[arg(long)]
    words_per_second: Option<u32>,

    /// Number of times to repeat the message (default: 1)
    #[arg(long)]
    repeat_count: Option<u32>,

    /// Total duration of the output in seconds
    #[arg(long)]
    stream_duration: Option<u64>,

    /// Port number for the server
    #[arg(long, default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let resolved = config::resolve(StreamOptions {
        text_file: cli.text_file,
        message: cli.message,
        words_per_second: cli.words_per_second,
        repeat_count: cli.repeat_count,
        stream_duration: cli.stream_duration,
    });

    let stream_config = StreamConfig::new(
        &resolved.message,
        resolved.words_per_second,
        resolved.repeat_count,
        resolved.stream_duration,
    )?;

    let state = GatewayState {
        config: Arc::new(stream_config),
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    start_server(addr, state).await
}
