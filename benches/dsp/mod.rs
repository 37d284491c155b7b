//! Benchmarks for low-level DSP primitives.

mod fader;
mod math;
mod randomizer;
mod smoother;

pub use fader::bench_fader;
pub use math::bench_math;
pub use randomizer::bench_randomizer;
pub use smoother::bench_smoother;
