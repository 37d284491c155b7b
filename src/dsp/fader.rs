use super::math::clamp;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Linear Fader
============

A fader is a tiny gain envelope with two destinations: fully on (1.0) or
fully off (0.0). It exists to avoid clicks when a signal is switched on or
off abruptly.

Vocabulary
----------

  fade        The current gain multiplier, always in [0.0, 1.0].

  step        How much `fade` moves per sample. Derived from the fade time
              and sample rate.

  enabled     Which way we are heading. Enabled ramps toward 1.0,
              disabled ramps toward 0.0.


The Math: Fade Time to Step
---------------------------

    step = 1 / (fade_time_seconds * sample_rate)
         = 1000 / (fade_time_ms * sample_rate)

Example: 10 ms at 48 kHz
  - 0.010 * 48000 = 480 samples
  - step = 1 / 480 ≈ 0.00208

A fade time of zero (or less) means "instant": step = 1.0, so a single
sample takes the fader all the way to its destination.


Switching Direction
-------------------

Switching snaps `fade` to the far end before ramping:

    enable   →  fade = 0.0, then ramp up
    disable  →  fade = 1.0, then ramp down

So every transition crosses the full range, even if the previous ramp had
not finished. A half-faded signal toggled back on restarts from silence.
That is intentional: the fader is used for gating, where a predictable
ramp length matters more than continuity.


Per-Sample Update
-----------------

    fade = clamp(fade ± step, 0, 1)
    out  = sample * fade

The clamp makes the endpoints sticky. After ceil(1 / step) calls the fader
sits at its destination and stays there.
*/

/// Ramps a gain multiplier toward fully on or fully off.
///
/// Not thread-safe: one fader per voice/channel, owned by whoever calls
/// [`Fader::process`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fader {
    fade: f32,     // current multiplier (0.0 - 1.0)
    step: f32,     // per-sample increment, > 0
    enabled: bool, // target: true = fade in, false = fade out
}

impl Fader {
    /// Create a disabled, silent fader that takes `fade_time_ms` to cross
    /// the full range at `sample_rate`.
    pub fn new(fade_time_ms: f32, sample_rate: f32) -> Self {
        Self {
            fade: 0.0,
            step: Self::step_for(fade_time_ms, sample_rate),
            enabled: false,
        }
    }

    fn step_for(fade_time_ms: f32, sample_rate: f32) -> f32 {
        if fade_time_ms <= 0.0 {
            1.0 // instant
        } else {
            1000.0 / (fade_time_ms * sample_rate)
        }
    }

    /// Recompute the ramp speed. Leaves the current fade and direction alone.
    pub fn set_fade_time(&mut self, fade_time_ms: f32, sample_rate: f32) {
        self.step = Self::step_for(fade_time_ms, sample_rate);
    }

    /// Choose the ramp direction, snapping `fade` to the opposite end.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.fade = if enabled { 0.0 } else { 1.0 };
    }

    /// Advance one sample and return `sample` scaled by the new fade.
    ///
    /// Call exactly once per input sample.
    #[inline]
    pub fn process(&mut self, sample: f32) -> f32 {
        let delta = if self.enabled { self.step } else { -self.step };
        self.fade = clamp(self.fade + delta, 0.0, 1.0);

        debug_assert!((0.0..=1.0).contains(&self.fade));
        sample * self.fade
    }

    /// Fade a block of samples in place.
    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    pub fn fade(&self) -> f32 {
        self.fade
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// True once the fade has reached its destination.
    pub fn is_settled(&self) -> bool {
        if self.enabled {
            self.fade >= 1.0
        } else {
            self.fade <= 0.0
        }
    }
}
