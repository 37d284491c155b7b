//! Stateless math helpers shared by the primitives.
//!
//! Everything here is a pure function on `f32`. None of the helpers guard
//! against degenerate ranges; preconditions are listed per function and
//! violating them gives an unspecified (but non-panicking, unless noted)
//! numeric result.

/// Bound `value` to `[lo, hi]`.
///
/// Returns `lo` if `value < lo`, else `hi` if `value > hi`, else `value`.
/// Unlike [`f32::clamp`] this never panics when `lo > hi`; the result is
/// simply whatever the comparisons above produce.
///
/// # Example
/// ```
/// use ramp_dsp::dsp::math::clamp;
/// assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
/// ```
#[inline]
pub fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Map `value` from `[lo, hi]` onto `[0, 1]`.
///
/// Precondition: `hi != lo`.
#[inline]
pub fn normalize(value: f32, lo: f32, hi: f32) -> f32 {
    (value - lo) / (hi - lo)
}

/// Map `t` from `[0, 1]` back onto `[lo, hi]`. Inverse of [`normalize`].
#[inline]
pub fn denormalize(t: f32, lo: f32, hi: f32) -> f32 {
    lo + t * (hi - lo)
}

/// Convert decibels to a linear gain multiplier.
///
/// # Example
/// ```
/// use ramp_dsp::dsp::math::db_to_linear;
/// assert_eq!(db_to_linear(0.0), 1.0);
/// assert!((db_to_linear(-20.0) - 0.1).abs() < 1e-6);
/// ```
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    10.0_f32.powf(db / 20.0)
}

/// Convert a linear gain multiplier to decibels.
///
/// Non-positive input has no finite level and maps to negative infinity.
///
/// # Example
/// ```
/// use ramp_dsp::dsp::math::linear_to_db;
/// assert_eq!(linear_to_db(0.0), f32::NEG_INFINITY);
/// assert!((linear_to_db(0.5) + 6.0206).abs() < 1e-3);
/// ```
#[inline]
pub fn linear_to_db(value: f32) -> f32 {
    if value > 0.0 {
        20.0 * value.log10()
    } else {
        f32::NEG_INFINITY
    }
}

/// Read `buffer` at a fractional `index`, treating it as circular.
///
/// The two neighbouring indices are each wrapped back into range with a
/// single subtraction, so `index` must lie in `[0, 2 * len)`; anything
/// further out panics on the slice access. Pass `&buffer[..size]` to read a
/// shorter logical ring out of a larger allocation. An empty buffer reads
/// as silence.
///
/// # Example
/// ```
/// use ramp_dsp::dsp::math::ring_interp_linear;
/// let ring = [1.0, 2.0, 3.0, 4.0];
/// // Between index 3 (4.0) and index 0 (1.0).
/// assert_eq!(ring_interp_linear(&ring, 3.5), 2.5);
/// ```
#[inline]
pub fn ring_interp_linear(buffer: &[f32], index: f32) -> f32 {
    let size = buffer.len();
    if size == 0 {
        return 0.0;
    }
    debug_assert!(index >= 0.0, "ring index must be non-negative");

    let base = index.floor();
    let frac = index - base;

    let mut i1 = base as usize;
    if i1 >= size {
        i1 -= size;
    }
    let mut i2 = i1 + 1;
    if i2 >= size {
        i2 -= size;
    }

    let a = buffer[i1];
    a + frac * (buffer[i2] - a)
}

/// Fold `x` into `[0, max)`.
///
/// Handles negative input and input any number of periods out in constant
/// time. A non-positive `max`, or a non-finite `x`, leaves `x` untouched
/// since no period exists to fold by.
///
/// # Example
/// ```
/// use ramp_dsp::dsp::math::wrap;
/// assert_eq!(wrap(-0.5, 1.0), 0.5);
/// assert_eq!(wrap(1.5, 1.0), 0.5);
/// ```
#[inline]
pub fn wrap(x: f32, max: f32) -> f32 {
    if !(max > 0.0) || !x.is_finite() {
        return x;
    }

    // The remainder itself is exact; adding `max` back to a tiny negative
    // remainder can round up to exactly `max`
    let x = x.rem_euclid(max);
    if x >= max {
        0.0
    } else {
        x
    }
}
