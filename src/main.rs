// src/main.rs

use anyhow::Context;
use log::info;

use colormap_gen::colormap::{write_color_map, COLOR_MAP};

/// Main entry point for the `colormap-gen` tool.
///
/// Emits the palette fragment on stdout; diagnostics go to stderr so they
/// can never contaminate the generated source.
fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let map = &*COLOR_MAP;
    info!("Built color map with {} entries.", map.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_color_map(&mut out, map).context("Failed to write color map to stdout")?;

    info!("Color map emitted.");
    Ok(())
}
