#![allow(non_snake_case)]

mod app;
mod components;
mod printer;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Dental Warranty Card Generator
#[derive(Parser, Debug)]
#[command(name = "dentacard-desktop")]
#[command(about = "Dental warranty card generator - print-ready ID-size cards")]
struct Args {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let default_filter = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    tracing::info!("starting dental warranty card generator");

    // Wide enough for the form panel next to a full-size card preview.
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Dental Warranty Card Generator")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1180.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
