#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global reduce-motion flag, set from command line
static REDUCED_MOTION: OnceLock<bool> = OnceLock::new();

/// Whether decorative motion should be skipped (set from command line)
pub fn reduced_motion() -> bool {
    REDUCED_MOTION.get().copied().unwrap_or(false)
}

/// Valentine - an invitation one cannot decline
#[derive(Parser, Debug)]
#[command(name = "valentine-desktop")]
#[command(about = "A valentine greeting with a decline button that refuses to be pressed")]
struct Args {
    /// Keep the decline button still and skip decorative animation
    #[arg(long)]
    reduced_motion: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 900.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 720.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let _ = REDUCED_MOTION.set(args.reduced_motion);

    tracing::info!(reduced_motion = args.reduced_motion, "starting valentine");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("A Most Important Question")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
