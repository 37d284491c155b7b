//! Status bar widget - gate, seed, grid, gain and output level

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use ramp_dsp::{control::DriftSnapshot, dsp::math::linear_to_db};

/// Audio statistics for display
pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

fn format_db(linear: f32) -> String {
    let db = linear_to_db(linear);
    if db.is_finite() {
        format!("{:.1}dB", db)
    } else {
        "-inf".to_string()
    }
}

pub fn render_status(frame: &mut Frame, area: Rect, state: &DriftSnapshot, stats: &AudioStats) {
    let block = Block::default().title(" drift ").borders(Borders::ALL);

    let (gate_symbol, gate_str, gate_color) = if state.gate_open {
        ("▶", "Open", Color::Green)
    } else {
        ("⏸", "Closed", Color::Yellow)
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} {}  ", gate_symbol, gate_str),
            Style::default().fg(gate_color),
        ),
        Span::styled(
            format!("Seed: {}  ", state.seed),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("Grid: {} st  ", state.resolution),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("Gain: {:.0}dB  ", state.gain_db),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("Peak: {}  RMS: {}", format_db(stats.peak), format_db(stats.rms)),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
