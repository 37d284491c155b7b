pub mod control; // Realtime control messages
pub mod drift; // Demo voice built from the primitives
pub mod dsp;

/// Largest block rendered in one call.
pub const MAX_BLOCK_SIZE: usize = 2048;
/// Samples in one wavetable cycle.
pub const WAVETABLE_SIZE: usize = 2048;

pub use drift::{Drift, DriftConfig};
