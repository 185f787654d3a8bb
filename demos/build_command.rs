//! Example: Translate a capture configuration into an ffmpeg command line.
//!
//! Reads a JSON configuration from the path given as the first argument, or
//! uses a built-in screen capture configuration, and prints the command.
//!
//! Run with:
//!     cargo run --example build_command [config.json]

use anyhow::Context;
use log::LevelFilter;
use simple_capture::{init_log, CaptureConfig, StreamRegistry};

const SCREEN_CAPTURE: &str = r#"{
    "global": { "overwrite_output": true, "display_stats": false },
    "inputs": [ { "filename": ":0.0", "args": ["-f", "x11grab", "-framerate", "30"] } ],
    "outputs": [
        { "options": { "filename": "screen.mp4", "video_codec": "libx264",
                       "pixel_format": "yuv420p", "duration": "10", "end_position": "20" } }
    ]
}"#;

fn main() -> anyhow::Result<()> {
    init_log(LevelFilter::Info, None)?;

    let config = match std::env::args().nth(1) {
        Some(path) => CaptureConfig::load(&path)
            .with_context(|| format!("loading configuration from {}", path))?,
        None => CaptureConfig::from_json(SCREEN_CAPTURE)?,
    };

    let registry = StreamRegistry::with_builtin();
    println!("Available output streams:");
    for name in registry.names() {
        println!("  {}: {}", name, registry.help(name).unwrap_or_default());
    }
    println!();

    let command = config.build_command(&registry)?;
    println!("{}", command);

    Ok(())
}
