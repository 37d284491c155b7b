//! Linear parameter smoothing over a fixed number of frames.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Glides a control value to its target in `frames` equal steps.
///
/// Retargeting mid-glide starts a fresh ramp from wherever the value is now;
/// the remaining part of the old ramp is discarded.
///
/// Not thread-safe: give each consumer its own smoother.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Smoother {
    current: f32,
    target: f32,
    step: f32,
    frames: usize,
}

impl Smoother {
    /// Start at rest on `initial`. A frame count of zero is treated as one.
    pub fn new(initial: f32, frames: usize) -> Self {
        Self {
            current: initial,
            target: initial,
            step: 0.0,
            frames: frames.max(1),
        }
    }

    /// Aim at `target`, reaching it after `frames` calls to [`Smoother::next`].
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
        self.step = (self.target - self.current) / self.frames as f32;
    }

    /// Advance one frame and return the new value.
    #[inline]
    pub fn next(&mut self) -> f32 {
        if self.current == self.target {
            return self.current;
        }

        self.current += self.step;

        // Snap to the target on the final step instead of overshooting it
        if (self.step > 0.0 && self.current > self.target)
            || (self.step < 0.0 && self.current < self.target)
        {
            self.current = self.target;
        }

        self.current
    }

    /// Write successive smoothed values into `buffer`.
    pub fn render(&mut self, buffer: &mut [f32]) {
        for value in buffer.iter_mut() {
            *value = self.next();
        }
    }

    /// Jump straight to `value` with no glide.
    pub fn reset(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.step = 0.0;
    }

    /// Current value, without advancing.
    pub fn get(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glides_in_equal_steps() {
        let mut smoother = Smoother::new(5.0, 4);
        smoother.set_target(9.0);

        assert_eq!(smoother.next(), 6.0);
        assert_eq!(smoother.next(), 7.0);
        assert_eq!(smoother.next(), 8.0);
        assert_eq!(smoother.next(), 9.0);
        assert_eq!(smoother.next(), 9.0);
        assert!(smoother.is_settled());
    }

    #[test]
    fn single_frame_jumps_to_target() {
        let mut smoother = Smoother::new(0.0, 1);
        smoother.set_target(-3.5);
        assert_eq!(smoother.next(), -3.5);
    }

    #[test]
    fn zero_frames_is_coerced_to_one() {
        let mut smoother = Smoother::new(1.0, 0);
        assert_eq!(smoother.frames(), 1);
        smoother.set_target(2.0);
        assert_eq!(smoother.next(), 2.0);
    }

    #[test]
    fn at_rest_next_is_noop() {
        let mut smoother = Smoother::new(0.3, 16);
        for _ in 0..4 {
            assert_eq!(smoother.next(), 0.3);
        }
        assert_eq!(smoother.get(), 0.3);
        assert_eq!(smoother.step(), 0.0);
    }

    #[test]
    fn reaches_awkward_target_exactly() {
        // 0.1 / 3 does not sum back to 0.1 in floating point
        let mut smoother = Smoother::new(0.0, 3);
        smoother.set_target(0.1);
        let mut last = 0.0;
        for _ in 0..3 {
            last = smoother.next();
        }
        // Either the last step lands exactly or the next one snaps
        if last != 0.1 {
            last = smoother.next();
        }
        assert_eq!(last, 0.1);
        assert!(smoother.is_settled());
    }

    #[test]
    fn never_overshoots_downward() {
        let mut smoother = Smoother::new(1.0, 7);
        smoother.set_target(-0.3);
        for _ in 0..20 {
            let value = smoother.next();
            assert!(value >= -0.3, "overshot target: {}", value);
        }
        assert_eq!(smoother.get(), -0.3);
    }

    #[test]
    fn retarget_uses_current_value() {
        let mut smoother = Smoother::new(0.0, 4);
        smoother.set_target(8.0);
        smoother.next(); // 2.0
        smoother.next(); // 4.0

        smoother.set_target(0.0);
        assert_eq!(smoother.step(), -1.0);
        assert_eq!(smoother.next(), 3.0);
    }

    #[test]
    fn get_does_not_advance() {
        let mut smoother = Smoother::new(0.0, 2);
        smoother.set_target(1.0);
        assert_eq!(smoother.get(), 0.0);
        assert_eq!(smoother.get(), 0.0);
        assert_eq!(smoother.next(), 0.5);
    }

    #[test]
    fn render_fills_ramp() {
        let mut smoother = Smoother::new(0.0, 4);
        smoother.set_target(1.0);
        let mut block = [0.0; 6];
        smoother.render(&mut block);
        assert_eq!(block, [0.25, 0.5, 0.75, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn reset_snaps_without_glide() {
        let mut smoother = Smoother::new(0.0, 100);
        smoother.set_target(10.0);
        smoother.next();
        smoother.reset(3.0);
        assert_eq!(smoother.get(), 3.0);
        assert_eq!(smoother.target(), 3.0);
        assert_eq!(smoother.next(), 3.0);
    }
}
