//! Agora Server Binary
//!
//! Starts the TCP server for Agora.

use std::sync::Arc;

use agora::network::Server;
use agora::{CommentRemoval, Config, Dispatcher, Engine};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// Agora Server
#[derive(Parser, Debug)]
#[command(name = "agora-server")]
#[command(about = "In-memory forum entity store")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:7878")]
    listen: String,

    /// Maximum concurrent connections
    #[arg(short, long, default_value = "1024")]
    max_connections: usize,

    /// Per-request timeout in milliseconds
    #[arg(short = 't', long, default_value = "5000")]
    request_timeout_ms: u64,

    /// Remove a comment's whole reply subtree instead of orphaning it
    #[arg(long)]
    cascade_comments: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,agora=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("Agora Server v{}", agora::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    let comment_removal = if args.cascade_comments {
        CommentRemoval::Cascade
    } else {
        CommentRemoval::Orphan
    };

    let config = Config::builder()
        .listen_addr(&args.listen)
        .max_connections(args.max_connections)
        .request_timeout_ms(args.request_timeout_ms)
        .comment_removal(comment_removal)
        .build();

    let engine = Arc::new(Engine::new(config.clone()));

    let dispatcher = match Dispatcher::for_engine(engine) {
        Ok(d) => Arc::new(d),
        Err(e) => {
            tracing::error!("Failed to start dispatcher: {}", e);
            std::process::exit(1);
        }
    };

    let server = match Server::bind(config, dispatcher) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to bind: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
