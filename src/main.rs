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

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Whether to run against the local sample catalogue
static OFFLINE: OnceLock<bool> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("portfolio")
    })
}

pub fn is_offline() -> bool {
    OFFLINE.get().copied().unwrap_or(false)
}

/// Portfolio - photography gallery and catalogue admin
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Portfolio - photography gallery with a catalogue admin")]
struct Args {
    /// Data directory for local state (admin session, activity log)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Use a local sample catalogue instead of the hosted store
    #[arg(long)]
    offline: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    portfolio_core::logging::init(args.verbose);

    let data_dir = args.data_dir.unwrap_or_else(get_data_dir);
    let _ = DATA_DIR.set(data_dir.clone());
    let _ = OFFLINE.set(args.offline);

    let title = if args.offline {
        "Portfolio (offline)"
    } else {
        "Portfolio"
    };

    tracing::info!(offline = args.offline, "Starting with data dir: {:?}", data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
