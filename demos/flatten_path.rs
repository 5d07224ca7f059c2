//! Flattens a small path mixing every command family and logs the result.
//!
//! Run with `RUST_LOG=pathflat=trace` to see each command transition.

use pathflat::path::polylines;
use pathflat::{flatten_raw_path, FlattenOptions, RawCommand};
use tracing_subscriber::EnvFilter;

fn main() -> pathflat::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let commands = [
        RawCommand::new('M', [10.0, 80.0]),
        RawCommand::new('C', [40.0, 10.0, 65.0, 10.0, 95.0, 80.0]),
        RawCommand::new('S', [150.0, 150.0, 180.0, 80.0]),
        RawCommand::new('Q', [210.0, 20.0, 240.0, 80.0]),
        RawCommand::new('T', [300.0, 80.0]),
        RawCommand::new('a', [25.0, 25.0, -30.0, 0.0, 1.0, 50.0, -25.0]),
        RawCommand::new('v', [40.0]),
        RawCommand::new('h', [-20.0]),
        RawCommand::new('Z', Vec::new()),
    ];

    let options = FlattenOptions::new(5.0)?;
    let flattened = flatten_raw_path(&commands, &options)?;
    for polyline in polylines(&flattened) {
        tracing::info!(
            vertices = polyline.points.len(),
            length = polyline.length(),
            "polyline"
        );
    }
    for command in &flattened {
        println!("{command}");
    }
    Ok(())
}
