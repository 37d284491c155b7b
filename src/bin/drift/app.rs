//! DriftApp - audio stream setup and runner

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;

use ramp_dsp::{
    control::{DriftMessage, DriftSnapshot},
    Drift, DriftConfig, MAX_BLOCK_SIZE,
};

use super::ui::UiApp;

/// Queue depth for UI → audio commands
const CONTROL_QUEUE: usize = 64;
/// Queue depth for audio → UI scope samples
const SCOPE_QUEUE: usize = 8192;
/// Queue depth for audio → UI state snapshots
const SNAPSHOT_QUEUE: usize = 64;

/// Main application builder
pub struct DriftApp {
    config: DriftConfig,
}

impl DriftApp {
    pub fn new(config: DriftConfig) -> Self {
        Self { config }
    }

    /// Open the default output device and run until the user quits.
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let stream_config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = stream_config.sample_rate().0 as f32;
        let channels = stream_config.channels() as usize;
        let config = self.config.sample_rate(sample_rate);

        println!("=== drift ===");
        println!("Sample rate: {} Hz", sample_rate);
        println!("Channels: {}", channels);
        println!(
            "Notes: {}..{} every {} semitone(s), seed {}",
            config.low_note, config.high_note, config.resolution, config.seed
        );

        let (control_tx, mut control_rx) = RingBuffer::<DriftMessage>::new(CONTROL_QUEUE);
        let (mut scope_tx, scope_rx) = RingBuffer::<f32>::new(SCOPE_QUEUE);
        let (mut snapshot_tx, snapshot_rx) = RingBuffer::<DriftSnapshot>::new(SNAPSHOT_QUEUE);

        let mut drift = Drift::new(config);
        let initial = drift.snapshot();
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device
            .build_output_stream(
                &stream_config.into(),
                move |data: &mut [f32], _| {
                    let total_frames = data.len() / channels;
                    let mut frames_written = 0;

                    while frames_written < total_frames {
                        let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                        let block = &mut render_buf[..frames_to_render];
                        drift.render(block, &mut control_rx);

                        // Copy to output (mono to all channels)
                        let out_off = frames_written * channels;
                        for (i, &s) in block.iter().enumerate() {
                            for ch in 0..channels {
                                data[out_off + i * channels + ch] = s;
                            }
                            // Scope is best-effort; drop samples when the UI lags
                            let _ = scope_tx.push(s);
                        }

                        frames_written += frames_to_render;
                    }

                    let _ = snapshot_tx.push(drift.snapshot());
                },
                |err| eprintln!("Audio error: {}", err),
                None,
            )
            .wrap_err("failed to build output stream")?;

        stream.play().wrap_err("failed to start output stream")?;

        let mut terminal = ratatui::init();
        let result = UiApp::new(control_tx, scope_rx, snapshot_rx, initial).run(&mut terminal);
        ratatui::restore();

        drop(stream);
        result
    }
}
