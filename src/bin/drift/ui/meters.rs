//! Gauges for the fader level and the current pitch

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use ramp_dsp::{control::DriftSnapshot, dsp::math::clamp};

const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

fn note_name(note: f32) -> String {
    let nearest = note.round() as i32;
    let name = NOTE_NAMES[nearest.rem_euclid(12) as usize];
    let octave = nearest.div_euclid(12) - 1;
    format!("{}{}", name, octave)
}

pub fn render_fader(frame: &mut Frame, area: Rect, state: &DriftSnapshot) {
    let gauge = Gauge::default()
        .block(Block::default().title(" Fader ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(clamp(state.fade, 0.0, 1.0) as f64)
        .label(format!("{:.0}%", state.fade * 100.0));

    frame.render_widget(gauge, area);
}

pub fn render_pitch(frame: &mut Frame, area: Rect, state: &DriftSnapshot) {
    let gauge = Gauge::default()
        .block(Block::default().title(" Pitch ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(clamp(state.pitch_position, 0.0, 1.0) as f64)
        .label(format!(
            "{} ({:.2}) → {}",
            note_name(state.note),
            state.note,
            note_name(state.target_note)
        ));

    frame.render_widget(gauge, area);
}
