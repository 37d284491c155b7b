//! A self-playing voice that wanders between random pitches.

/*
Drift Voice
===========

Drift strings the primitives together the way a host engine would use them:

    Randomizer ──→ Smoother ──→ Oscillator ──→ × gain ──→ Fader ──→ out
    (pick note)    (glide)      (wavetable)     (dB)       (gate)

Every `hold` period the randomizer draws a new note on the pitch grid
(resolution 1.0 = semitones, 0.5 = quarter tones, 12.0 = octaves). The
smoother glides there over `glide_frames` samples, so pitch changes are
portamento rather than jumps. The fader opens and closes the output
without clicks.

Pitch is tracked as a fractional MIDI note and only converted to Hz at the
oscillator, so the glide is linear in pitch (what we hear) rather than in
frequency.
*/

use crate::{
    control::{DriftMessage, DriftSnapshot, MessageReceiver},
    dsp::{
        math::{clamp, db_to_linear, normalize},
        oscillator::{note_to_freq, WavetableOscillator},
        Fader, Randomizer, Smoother, DEFAULT_SEED,
    },
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Construction parameters for a [`Drift`] voice.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriftConfig {
    pub sample_rate: f32,
    /// Lowest note the randomizer may pick (MIDI)
    pub low_note: f32,
    /// Highest note the randomizer may pick (MIDI)
    pub high_note: f32,
    /// Pitch grid in semitones
    pub resolution: f32,
    /// Time between new notes
    pub hold_ms: f32,
    /// Samples spent gliding to each new note
    pub glide_frames: usize,
    pub fade_ms: f32,
    pub gain_db: f32,
    pub seed: u32,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000.0,
            low_note: 48.0,  // C3
            high_note: 72.0, // C5
            resolution: 1.0,
            hold_ms: 250.0,
            glide_frames: 2_400, // 50ms at 48kHz
            fade_ms: 20.0,
            gain_db: -12.0,
            seed: DEFAULT_SEED,
        }
    }
}

impl DriftConfig {
    pub fn sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn range(mut self, low_note: f32, high_note: f32) -> Self {
        self.low_note = low_note;
        self.high_note = high_note;
        self
    }

    pub fn resolution(mut self, resolution: f32) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn hold_ms(mut self, hold_ms: f32) -> Self {
        self.hold_ms = hold_ms;
        self
    }

    pub fn glide_frames(mut self, glide_frames: usize) -> Self {
        self.glide_frames = glide_frames;
        self
    }

    pub fn fade_ms(mut self, fade_ms: f32) -> Self {
        self.fade_ms = fade_ms;
        self
    }

    pub fn gain_db(mut self, gain_db: f32) -> Self {
        self.gain_db = gain_db;
        self
    }

    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}

pub struct Drift {
    sample_rate: f32,
    low_note: f32,
    high_note: f32,
    gain_db: f32,
    gain: f32,
    seed: u32,

    notes: Randomizer,
    glide: Smoother,
    gate: Fader,
    osc: WavetableOscillator,

    hold_samples: u32,
    elapsed_samples: u32,
}

impl Drift {
    /// Build a voice with its gate closed. The first note is drawn immediately.
    pub fn new(config: DriftConfig) -> Self {
        let mut notes = Randomizer::new(config.low_note, config.high_note, config.resolution);
        notes.set_seed(config.seed);
        let first_note = notes.next_float();

        Self {
            sample_rate: config.sample_rate,
            low_note: config.low_note,
            high_note: config.high_note,
            gain_db: config.gain_db,
            gain: db_to_linear(config.gain_db),
            seed: config.seed,

            notes,
            glide: Smoother::new(first_note, config.glide_frames),
            gate: Fader::new(config.fade_ms, config.sample_rate),
            osc: WavetableOscillator::sine(),

            hold_samples: ((config.hold_ms / 1000.0) * config.sample_rate)
                .round()
                .max(1.0) as u32,
            elapsed_samples: 0,
        }
    }

    pub fn handle(&mut self, message: DriftMessage) {
        match message {
            DriftMessage::Gate(open) => self.gate.set_enabled(open),
            DriftMessage::Reseed(seed) => {
                self.seed = seed;
                self.notes.set_seed(seed);
                self.next_note();
            }
            DriftMessage::SetRange { low, high } => {
                self.low_note = low;
                self.high_note = high;
                self.notes.set_range(low, high);
            }
            DriftMessage::SetResolution(resolution) => self.notes.set_resolution(resolution),
            DriftMessage::SetGain(gain_db) => {
                self.gain_db = gain_db;
                self.gain = db_to_linear(gain_db);
            }
        }
    }

    fn next_note(&mut self) {
        self.elapsed_samples = 0;
        let note = self.notes.next_float();
        self.glide.set_target(note);
    }

    /// Advance one sample.
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        if self.elapsed_samples >= self.hold_samples {
            self.next_note();
        }
        self.elapsed_samples += 1;

        let frequency = note_to_freq(self.glide.next());
        let sample = self.osc.next_sample(frequency, self.sample_rate) * self.gain;
        self.gate.process(sample)
    }

    /// Apply any pending messages, then render a block.
    pub fn render<R: MessageReceiver>(&mut self, buffer: &mut [f32], rx: &mut R) {
        while let Some(message) = rx.pop() {
            self.handle(message);
        }

        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// Current pitch in fractional MIDI notes.
    pub fn note(&self) -> f32 {
        self.glide.get()
    }

    pub fn target_note(&self) -> f32 {
        self.glide.target()
    }

    /// Where the current pitch sits in the note range, 0.0 (low) to 1.0 (high).
    pub fn pitch_position(&self) -> f32 {
        if self.high_note <= self.low_note {
            return 0.0;
        }
        clamp(
            normalize(self.glide.get(), self.low_note, self.high_note),
            0.0,
            1.0,
        )
    }

    pub fn fade(&self) -> f32 {
        self.gate.fade()
    }

    pub fn is_gate_open(&self) -> bool {
        self.gate.is_enabled()
    }

    pub fn snapshot(&self) -> DriftSnapshot {
        DriftSnapshot {
            gate_open: self.gate.is_enabled(),
            fade: self.gate.fade(),
            note: self.glide.get(),
            target_note: self.glide.target(),
            pitch_position: self.pitch_position(),
            resolution: self.notes.resolution(),
            gain_db: self.gain_db,
            seed: self.seed,
        }
    }
}
