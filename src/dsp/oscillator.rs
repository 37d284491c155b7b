use super::math::{ring_interp_linear, wrap};
use crate::WAVETABLE_SIZE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shape baked into a [`WavetableOscillator`]'s table.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OscillatorWaveform {
    Sine,
    Triangle,
}

/// Convert a (possibly fractional) MIDI note number to Hz.
#[inline]
pub fn note_to_freq(note: f32) -> f32 {
    440.0 * 2.0_f32.powf((note - 69.0) / 12.0)
}

/// Single-cycle table oscillator.
///
/// The table is allocated once at construction and read with linear
/// interpolation, wrapping around the end of the cycle.
pub struct WavetableOscillator {
    table: Vec<f32>,
    phase: f32, // position in the cycle, 0.0 - 1.0
}

impl WavetableOscillator {
    pub fn new(waveform: OscillatorWaveform) -> Self {
        let table = (0..WAVETABLE_SIZE)
            .map(|i| {
                let t = i as f32 / WAVETABLE_SIZE as f32;
                match waveform {
                    OscillatorWaveform::Sine => (t * std::f32::consts::TAU).sin(),
                    // Rises through zero at t = 0, like the sine
                    OscillatorWaveform::Triangle => 1.0 - 4.0 * (wrap(t + 0.25, 1.0) - 0.5).abs(),
                }
            })
            .collect();

        Self { table, phase: 0.0 }
    }

    pub fn sine() -> Self {
        Self::new(OscillatorWaveform::Sine)
    }

    /// Produce one sample at `frequency` Hz, then advance the phase.
    #[inline]
    pub fn next_sample(&mut self, frequency: f32, sample_rate: f32) -> f32 {
        let sample = ring_interp_linear(&self.table, self.phase * self.table.len() as f32);
        self.phase = wrap(self.phase + frequency / sample_rate, 1.0);
        sample
    }

    /// Render a block at a fixed frequency.
    pub fn render(&mut self, buffer: &mut [f32], frequency: f32, sample_rate: f32) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(frequency, sample_rate);
        }
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}
