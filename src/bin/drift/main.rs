//! drift - terminal player for a randomly gliding voice
//!
//! Run with: cargo run --bin drift

mod app;
mod ui;

use app::DriftApp;
use ramp_dsp::DriftConfig;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = DriftConfig::default()
        .range(48.0, 72.0)
        .resolution(1.0)
        .hold_ms(300.0)
        .fade_ms(40.0)
        .gain_db(-12.0);

    DriftApp::new(config).run()
}
