use super::math::clamp;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Quantized Random Values
=======================

Produces pseudo-random floats in [min, max] that always land on a grid of
`resolution`-sized steps measured from `min`. Useful for stepped random
modulation: random notes on a scale, random pan positions in 10% steps,
and so on. Not suitable for anything security related.

Vocabulary
----------

  seed         The 32-bit generator state. Advanced on every draw.

  resolution   Grid spacing of the output. 0.1 gives min, min+0.1, ...

  max_steps    Index of the highest grid point that fits in the range:
               round(range / resolution).


The Generator
-------------

A 32-bit linear congruential generator (the "Numerical Recipes" constants):

    seed = seed * 1664525 + 1013904223   (wrapping at 2^32)

Cheap, deterministic, and good enough for modulation. Two randomizers with
the same seed and parameters produce identical sequences; there is no
shared state between instances.


Quantizing: Buckets
-------------------

The normalized seed u in [0, 1] is split into (max_steps + 1) equal buckets:

    bucket = floor(u * (max_steps + 1))      0 ..= max_steps
    value  = min + bucket * resolution

Every grid point gets the same share of the generator's range. u can come
out as exactly 1.0 once the seed is rounded to f32, which would select a
bucket one past the end, so the bucket index is capped at max_steps.

When range / resolution is not a whole number, rounding can pick a top
grid point past `max` (range 1.0, resolution 0.4 rounds to 3 steps = 1.2).
Such a step is dropped so every grid point stays inside the range. The
final clamp only soaks up float error on the top point.
*/

/// Seed every new randomizer starts from.
pub const DEFAULT_SEED: u32 = 856_382_025;

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;

/// Relative slack allowed when checking the top grid point against `max`.
const GRID_TOLERANCE: f32 = 1e-5;

/// Seeded generator of grid-aligned random values.
///
/// `max < min` is a caller error: every draw then returns `min`.
/// Not thread-safe: use one randomizer per consumer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Randomizer {
    seed: u32,
    min: f32,
    max: f32,
    resolution: f32,

    // Derived, refreshed whenever range or resolution change
    range: f32,
    max_steps: u32,
}

impl Randomizer {
    /// Create a randomizer over `[min, max]` seeded with [`DEFAULT_SEED`].
    ///
    /// A non-positive (or NaN) `resolution` silently becomes `1.0`.
    pub fn new(min: f32, max: f32, resolution: f32) -> Self {
        let resolution = sanitize_resolution(resolution);
        let range = max - min;
        Self {
            seed: DEFAULT_SEED,
            min,
            max,
            resolution,
            range,
            max_steps: max_steps(range, resolution),
        }
    }

    /// Replace the generator state. Range and resolution are untouched.
    pub fn set_seed(&mut self, seed: u32) {
        self.seed = seed;
    }

    pub fn set_range(&mut self, min: f32, max: f32) {
        self.min = min;
        self.max = max;
        self.range = max - min;
        self.max_steps = max_steps(self.range, self.resolution);
    }

    /// Change the grid spacing. Non-positive values become `1.0`.
    pub fn set_resolution(&mut self, resolution: f32) {
        self.resolution = sanitize_resolution(resolution);
        self.max_steps = max_steps(self.range, self.resolution);
    }

    /// Draw the next value.
    #[inline]
    pub fn next_float(&mut self) -> f32 {
        self.seed = self
            .seed
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);

        if self.max_steps == 0 {
            return self.min;
        }

        let normalized = self.seed as f32 / u32::MAX as f32;
        let bucket = ((normalized * (self.max_steps as f32 + 1.0)) as u32).min(self.max_steps);

        clamp(
            self.min + bucket as f32 * self.resolution,
            self.min,
            self.max,
        )
    }

    /// Fill `buffer` with successive draws.
    pub fn fill(&mut self, buffer: &mut [f32]) {
        for value in buffer.iter_mut() {
            *value = self.next_float();
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    /// Index of the highest reachable grid point.
    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }
}

fn sanitize_resolution(resolution: f32) -> f32 {
    if resolution > 0.0 {
        resolution
    } else {
        1.0
    }
}

fn max_steps(range: f32, resolution: f32) -> u32 {
    if !(range > 0.0) {
        return 0;
    }

    // Saturating cast: absurdly fine grids top out at u32::MAX
    let mut steps = (range / resolution).round() as u32;
    while steps > 0 && steps as f32 * resolution > range * (1.0 + GRID_TOLERANCE) {
        steps -= 1;
    }
    steps
}
