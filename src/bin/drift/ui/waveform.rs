//! Output oscilloscope widget

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use ramp_dsp::dsp::math::{clamp, normalize};

/// Quietest peak the scope zooms in to
const MIN_SCALE: f32 = 0.05;

/// Render the output, zoomed so the current peak fills the height.
pub fn render_waveform(frame: &mut Frame, area: Rect, audio_buffer: &[f32]) {
    let peak = audio_buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
    let scale = clamp(peak, MIN_SCALE, 1.0);

    let last = audio_buffer.len().saturating_sub(1).max(1) as f32;
    let data: Vec<(f64, f64)> = audio_buffer
        .iter()
        .enumerate()
        .map(|(i, &sample)| {
            let x = normalize(i as f32, 0.0, last);
            (x as f64, (sample / scale) as f64)
        })
        .collect();

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(format!(" Output (x{:.1}) ", 1.0 / scale))
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-1.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
