#![forbid(unsafe_code)]
#![cfg_attr(not(debug_assertions), deny(warnings))] // Forbid warnings in release builds
#![warn(clippy::all, rust_2018_idioms)]

use clap::Parser;
use desk_clock::cli::Args;
use desk_clock::style::Background;
use desk_clock::{logging, ClockApp, WidgetConfig};

#[tokio::main]
async fn main() -> desk_clock::Result<()> {
    let args = Args::parse();
    logging::init();

    let background = Background::from_arg(args.color.as_deref());
    let config = WidgetConfig::default();
    tracing::info!(background = %background.describe(), "starting clock");

    eframe::run_native(
        &config.title,
        config.native_options(),
        Box::new(move |cc| Box::new(ClockApp::new(cc, background))),
    )?;
    Ok(())
}
