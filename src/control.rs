#[cfg(feature = "rtrb")]
use rtrb::Consumer;
use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Commands for a [`Drift`](crate::Drift) voice, applied between blocks.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DriftMessage {
    /// Open (fade in) or close (fade out) the output gate.
    Gate(bool),
    /// Restart the pitch sequence from a new seed.
    Reseed(u32),
    /// Change the pitch range, in MIDI notes.
    SetRange { low: f32, high: f32 },
    /// Change the pitch grid, in semitones.
    SetResolution(f32),
    /// Output level in dB.
    SetGain(f32),
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<DriftMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<DriftMessage> {
    fn pop(&mut self) -> Option<DriftMessage> {
        Consumer::pop(self).ok()
    }
}

// Offline rendering and tests, where nothing runs on an audio thread
impl MessageReceiver for VecDeque<DriftMessage> {
    fn pop(&mut self) -> Option<DriftMessage> {
        self.pop_front()
    }
}

/// Voice state published from the audio thread (allocation-free, Copy).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DriftSnapshot {
    /// Whether the gate is heading open
    pub gate_open: bool,
    /// Current fader gain (0.0-1.0)
    pub fade: f32,
    /// Pitch being played, in (fractional) MIDI notes
    pub note: f32,
    /// Pitch the glide is heading to
    pub target_note: f32,
    /// Current pitch within the configured range (0.0-1.0)
    pub pitch_position: f32,
    /// Current pitch grid in semitones
    pub resolution: f32,
    /// Output level in dB
    pub gain_db: f32,
    /// Seed the current sequence was started from
    pub seed: u32,
}
