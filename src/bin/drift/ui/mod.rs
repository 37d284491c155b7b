//! TUI module for drift
//!
//! Shows the voice state published by the audio thread and sends control
//! messages back to it.

mod meters;
mod status;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};
use std::time::Duration;

use ramp_dsp::{
    control::{DriftMessage, DriftSnapshot},
    dsp::math::clamp,
};

use meters::{render_fader, render_pitch};
use status::{render_status, AudioStats};
use waveform::render_waveform;

/// Audio visualization buffer size
const VIS_BUFFER_SIZE: usize = 1024;

const GAIN_STEP_DB: f32 = 3.0;
const MIN_GAIN_DB: f32 = -60.0;
const MAX_GAIN_DB: f32 = 0.0;
const MIN_RESOLUTION: f32 = 0.25;
const MAX_RESOLUTION: f32 = 12.0;

/// UI application state
pub struct UiApp {
    /// Commands to the audio thread
    control_tx: Producer<DriftMessage>,
    /// Ring buffer receiver for audio samples
    audio_rx: Consumer<f32>,
    /// Ring buffer receiver for voice snapshots
    state_rx: Consumer<DriftSnapshot>,
    /// Latest snapshot received
    current_state: DriftSnapshot,
    /// Audio sample buffer for visualization
    audio_buffer: Vec<f32>,
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        control_tx: Producer<DriftMessage>,
        audio_rx: Consumer<f32>,
        state_rx: Consumer<DriftSnapshot>,
        initial_state: DriftSnapshot,
    ) -> Self {
        Self {
            control_tx,
            audio_rx,
            state_rx,
            current_state: initial_state,
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_audio();
            self.poll_state();

            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    fn poll_audio(&mut self) {
        while let Ok(sample) = self.audio_rx.pop() {
            self.audio_buffer.push(sample);
        }

        // Keep only the last VIS_BUFFER_SIZE samples
        if self.audio_buffer.len() > VIS_BUFFER_SIZE {
            let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
            self.audio_buffer.drain(0..excess);
        }
    }

    fn poll_state(&mut self) {
        while let Ok(state) = self.state_rx.pop() {
            self.current_state = state;
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        let state = self.current_state;
        let message = match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Char(' ') => Some(DriftMessage::Gate(!state.gate_open)),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                Some(DriftMessage::Reseed(state.seed.wrapping_add(1)))
            }
            KeyCode::Char('[') => Some(DriftMessage::SetResolution(clamp(
                state.resolution * 0.5,
                MIN_RESOLUTION,
                MAX_RESOLUTION,
            ))),
            KeyCode::Char(']') => Some(DriftMessage::SetResolution(clamp(
                state.resolution * 2.0,
                MIN_RESOLUTION,
                MAX_RESOLUTION,
            ))),
            KeyCode::Char('-') => Some(DriftMessage::SetGain(clamp(
                state.gain_db - GAIN_STEP_DB,
                MIN_GAIN_DB,
                MAX_GAIN_DB,
            ))),
            KeyCode::Char('=') | KeyCode::Char('+') => Some(DriftMessage::SetGain(clamp(
                state.gain_db + GAIN_STEP_DB,
                MIN_GAIN_DB,
                MAX_GAIN_DB,
            ))),
            _ => None,
        };

        if let Some(message) = message {
            // A full queue means the audio thread is stalled; the keypress is dropped
            let _ = self.control_tx.push(message);
        }
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar
                Constraint::Length(3), // Fader
                Constraint::Length(3), // Pitch
                Constraint::Min(8),    // Waveform
                Constraint::Length(1), // Help bar
            ])
            .split(frame.area());

        let stats = AudioStats::from_buffer(&self.audio_buffer);
        render_status(frame, chunks[0], &self.current_state, &stats);
        render_fader(frame, chunks[1], &self.current_state);
        render_pitch(frame, chunks[2], &self.current_state);
        render_waveform(frame, chunks[3], &self.audio_buffer);

        let help = Paragraph::new(
            " [Q] Quit  [Space] Gate  [R] Reseed  [ [ / ] ] Resolution  [-/=] Gain",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[4]);
    }
}
