#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use movieshelf_core::ShelfConfig;

/// Global configuration, set from command line
static CONFIG: OnceLock<ShelfConfig> = OnceLock::new();

/// Get the configuration (set from command line or default)
pub fn get_config() -> ShelfConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Movieshelf - Movie Catalog Browser
#[derive(Parser, Debug)]
#[command(name = "movieshelf-desktop")]
#[command(about = "Movieshelf - browse the movie catalog and simulate purchases")]
struct Args {
    /// Catalog snapshot file (default: bundled demo catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Artificial latency for every catalog call, in milliseconds
    #[arg(short, long, default_value_t = 0)]
    latency_ms: u64,

    /// Image CDN prefix for poster URLs
    #[arg(long)]
    image_base: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = ShelfConfig::resolve(args.catalog, args.image_base, args.latency_ms);
    tracing::info!(
        catalog = ?config.catalog_path,
        latency_ms = args.latency_ms,
        "Starting Movieshelf"
    );

    // Store configuration globally
    let _ = CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Movieshelf")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
