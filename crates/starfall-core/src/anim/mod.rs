//! Animation primitives: easing functions, tweens, and the playback engine.

use starfall_types::color::{Color, lerp_color};

pub mod player;

/// Standard easing functions.
///
/// Input `t` is clamped to `[0.0, 1.0]`. Output is the eased value.
pub mod easing {
    pub fn linear(t: f32) -> f32 {
        t.clamp(0.0, 1.0)
    }

    pub fn ease_in_quad(t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        t * t
    }

    pub fn ease_out_quad(t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        t * (2.0 - t)
    }

    pub fn ease_in_out_quad(t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t < 0.5 {
            2.0 * t * t
        } else {
            -1.0 + (4.0 - 2.0 * t) * t
        }
    }

    pub fn ease_out_cubic(t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let t1 = t - 1.0;
        t1 * t1 * t1 + 1.0
    }
}

/// What a tween does when a pass ends and more passes remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatMode {
    /// Jump back to the start value and play forward again.
    Restart,
    /// Play the next pass mirrored, end back toward start.
    Reverse,
}

/// A running animation that interpolates between two values.
///
/// A tween plays `repeat_count + 1` passes of `duration_ms` each. Odd passes
/// run mirrored under [`RepeatMode::Reverse`], so `repeat_count == 1` with
/// `Reverse` plays out and back, landing exactly on `start`.
pub struct Tween {
    pub start: f32,
    pub end: f32,
    pub duration_ms: u32,
    pub elapsed_ms: u32,
    pub repeat_count: u32,
    pub repeat_mode: RepeatMode,
    pub easing: fn(f32) -> f32,
}

impl Tween {
    /// A single-pass tween from `start` to `end`.
    pub fn new(start: f32, end: f32, duration_ms: u32, easing: fn(f32) -> f32) -> Self {
        Self {
            start,
            end,
            duration_ms,
            elapsed_ms: 0,
            repeat_count: 0,
            repeat_mode: RepeatMode::Restart,
            easing,
        }
    }

    /// Add `count` extra passes after the first, replayed per `mode`.
    pub fn with_repeat(mut self, count: u32, mode: RepeatMode) -> Self {
        self.repeat_count = count;
        self.repeat_mode = mode;
        self
    }

    /// Total runtime across all passes.
    pub fn total_ms(&self) -> u32 {
        self.duration_ms.saturating_mul(self.repeat_count + 1)
    }

    /// Advance by `dt_ms` and return the current interpolated value.
    pub fn tick(&mut self, dt_ms: u32) -> f32 {
        self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.total_ms());
        self.value()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.total_ms()
    }

    /// Current value without advancing time.
    pub fn value(&self) -> f32 {
        if self.duration_ms == 0 {
            return self.resting_value();
        }
        let total = self.total_ms();
        let elapsed = self.elapsed_ms.min(total);
        // Attribute the final instant to the last pass so a finished tween
        // reports its resting value instead of wrapping to pass total+1.
        let (pass, in_pass) = if elapsed == total {
            (self.repeat_count, self.duration_ms)
        } else {
            (elapsed / self.duration_ms, elapsed % self.duration_ms)
        };
        let mut t = in_pass as f32 / self.duration_ms as f32;
        if self.repeat_mode == RepeatMode::Reverse && pass % 2 == 1 {
            t = 1.0 - t;
        }
        let eased = (self.easing)(t);
        self.start + (self.end - self.start) * eased
    }

    /// The value a finished tween holds: `start` when the last pass is
    /// mirrored, `end` otherwise.
    fn resting_value(&self) -> f32 {
        if self.repeat_mode == RepeatMode::Reverse && self.repeat_count % 2 == 1 {
            self.start
        } else {
            self.end
        }
    }
}

/// Tween between two colors over time.
pub struct ColorTween {
    pub start: Color,
    pub end: Color,
    tween: Tween,
}

impl ColorTween {
    pub fn new(start: Color, end: Color, duration_ms: u32, easing: fn(f32) -> f32) -> Self {
        Self {
            start,
            end,
            tween: Tween::new(0.0, 1.0, duration_ms, easing),
        }
    }

    /// Add `count` extra passes after the first, replayed per `mode`.
    pub fn with_repeat(mut self, count: u32, mode: RepeatMode) -> Self {
        self.tween = self.tween.with_repeat(count, mode);
        self
    }

    pub fn tick(&mut self, dt_ms: u32) -> Color {
        let t = self.tween.tick(dt_ms);
        lerp_color(self.start, self.end, t)
    }

    /// Current color without advancing time.
    pub fn value(&self) -> Color {
        lerp_color(self.start, self.end, self.tween.value())
    }

    pub fn is_finished(&self) -> bool {
        self.tween.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_linear() {
        let mut tw = Tween::new(0.0, 100.0, 100, easing::linear);
        assert_eq!(tw.tick(0), 0.0);
        assert_eq!(tw.tick(50), 50.0);
        assert_eq!(tw.tick(50), 100.0);
        assert!(tw.is_finished());
    }

    #[test]
    fn tween_eased() {
        let mut tw = Tween::new(0.0, 100.0, 100, easing::ease_in_quad);
        let v = tw.tick(50);
        // ease_in_quad at t=0.5 is 0.25, so value should be 25.
        assert!((v - 25.0).abs() < 0.01);
    }

    #[test]
    fn easing_bounds() {
        assert_eq!(easing::linear(0.0), 0.0);
        assert_eq!(easing::linear(1.0), 1.0);
        assert_eq!(easing::ease_out_quad(0.0), 0.0);
        assert_eq!(easing::ease_out_quad(1.0), 1.0);
        assert_eq!(easing::ease_in_out_quad(0.0), 0.0);
        assert_eq!(easing::ease_in_out_quad(1.0), 1.0);
        assert_eq!(easing::ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn value_does_not_advance() {
        let mut tw = Tween::new(0.0, 100.0, 100, easing::linear);
        tw.tick(30);
        assert_eq!(tw.value(), 30.0);
        assert_eq!(tw.value(), 30.0);
        assert_eq!(tw.elapsed_ms, 30);
    }

    #[test]
    fn single_pass_rests_at_end() {
        let mut tw = Tween::new(10.0, 20.0, 50, easing::linear);
        tw.tick(50);
        assert!(tw.is_finished());
        assert_eq!(tw.tick(1000), 20.0);
        assert_eq!(tw.value(), 20.0);
    }

    #[test]
    fn reverse_round_trip_lands_exactly_on_start() {
        let mut tw =
            Tween::new(0.0, 500.0, 300, easing::ease_in_out_quad).with_repeat(1, RepeatMode::Reverse);
        assert_eq!(tw.total_ms(), 600);
        let peak = tw.tick(300);
        assert_eq!(peak, 500.0);
        let back = tw.tick(300);
        assert_eq!(back, 0.0);
        assert!(tw.is_finished());
    }

    #[test]
    fn reverse_is_continuous_at_the_turn() {
        let mut tw = Tween::new(0.0, 100.0, 100, easing::linear).with_repeat(1, RepeatMode::Reverse);
        let before = tw.tick(99);
        let at = tw.tick(1);
        let after = tw.tick(1);
        assert!((before - 99.0).abs() < 0.01);
        assert_eq!(at, 100.0);
        assert!((after - 99.0).abs() < 0.01);
    }

    #[test]
    fn restart_mode_snaps_back() {
        let mut tw = Tween::new(0.0, 100.0, 100, easing::linear).with_repeat(1, RepeatMode::Restart);
        assert_eq!(tw.tick(100), 0.0);
        assert_eq!(tw.tick(50), 50.0);
        assert_eq!(tw.tick(50), 100.0);
        assert!(tw.is_finished());
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let tw = Tween::new(5.0, 9.0, 0, easing::linear);
        assert!(tw.is_finished());
        assert_eq!(tw.value(), 9.0);

        let rev = Tween::new(5.0, 9.0, 0, easing::linear).with_repeat(1, RepeatMode::Reverse);
        assert!(rev.is_finished());
        assert_eq!(rev.value(), 5.0);
    }

    #[test]
    fn eased_reverse_still_lands_exactly() {
        let mut tw =
            Tween::new(1.0, 4.0, 1000, easing::ease_in_out_quad).with_repeat(1, RepeatMode::Reverse);
        tw.tick(2000);
        assert_eq!(tw.value(), 1.0);
    }

    #[test]
    fn color_tween_works() {
        let mut ct = ColorTween::new(
            Color::rgb(0, 0, 0),
            Color::rgb(200, 100, 50),
            100,
            easing::linear,
        );
        let c = ct.tick(50);
        assert_eq!(c.r, 100);
        assert_eq!(c.g, 50);
        assert_eq!(c.b, 25);
    }

    #[test]
    fn color_tween_reverse_returns_to_start() {
        let mut ct = ColorTween::new(Color::BLACK, Color::RED, 500, easing::linear)
            .with_repeat(1, RepeatMode::Reverse);
        ct.tick(500);
        let end = ct.value();
        assert_eq!(end, Color::RED);
        ct.tick(500);
        assert_eq!(ct.value(), Color::BLACK);
        assert!(ct.is_finished());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn easing_output_stays_in_unit_interval(t in -2.0f32..3.0) {
                for ease in [
                    easing::linear,
                    easing::ease_in_quad,
                    easing::ease_out_quad,
                    easing::ease_in_out_quad,
                    easing::ease_out_cubic,
                ] {
                    let v = ease(t);
                    prop_assert!((0.0..=1.0).contains(&v), "eased {t} escaped to {v}");
                }
            }

            #[test]
            fn tween_value_stays_between_endpoints(
                elapsed in 0u32..4000,
                dur in 1u32..2000,
            ) {
                let mut tw = Tween::new(-360.0, 0.0, dur, easing::ease_in_out_quad)
                    .with_repeat(1, RepeatMode::Reverse);
                let v = tw.tick(elapsed);
                prop_assert!((-360.0..=0.0).contains(&v));
            }
        }
    }
}
