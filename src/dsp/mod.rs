//! Per-sample DSP primitives.
//!
//! These components are allocation-free once constructed and cheap enough to
//! run once per sample, making them safe to embed directly inside voice
//! structs. None of them synchronize internally: each instance belongs to a
//! single owner (one per voice or channel).

/// Linear fade in/out toward a fully-on or fully-off gain.
pub mod fader;
/// Clamp, range mapping, decibels, ring interpolation and wrapping.
pub mod math;
/// Wavetable oscillator and pitch conversion.
pub mod oscillator;
/// Seeded generator of grid-aligned random values.
pub mod randomizer;
/// Fixed-length linear glide toward a target value.
pub mod smoother;

pub use fader::Fader;
pub use randomizer::{Randomizer, DEFAULT_SEED};
pub use smoother::Smoother;
