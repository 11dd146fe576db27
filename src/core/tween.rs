//! Timed tick-to-tick glide with cubic ease-out.
//!
//! A [`Tween`] never reads the clock. Callers pass `now` into every
//! sample, so frames are driven by the event loop in production and by
//! fabricated instants in tests.

use std::time::{Duration, Instant};

/// Travel time per tick of distance, in milliseconds.
const MS_PER_TICK: u64 = 25;
/// Shortest glide, so even a one-tick hop is visible.
const MIN_MS: u64 = 150;
/// Longest glide, so long jumps stay snappy.
const MAX_MS: u64 = 400;

/// An in-flight animated transition between two tick indices.
#[derive(Debug, Clone)]
pub struct Tween {
    from: usize,
    to: usize,
    started: Instant,
    duration: Duration,
}

impl Tween {
    /// Start a transition at `now`. Duration scales with distance and is
    /// clamped to `[150 ms, 400 ms]`.
    pub fn new(from: usize, to: usize, now: Instant) -> Self {
        let distance = from.abs_diff(to) as u64;
        let duration = Duration::from_millis((distance * MS_PER_TICK).clamp(MIN_MS, MAX_MS));
        Self {
            from,
            to,
            started: now,
            duration,
        }
    }

    pub fn target(&self) -> usize {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear progress through the glide, clamped to `[0, 1]`.
    fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// The tick index the selection sits on at `now`.
    pub fn index_at(&self, now: Instant) -> usize {
        let eased = ease_out_cubic(self.progress(now));
        let from = self.from as f64;
        let delta = self.to as f64 - from;
        (from + delta * eased).round() as usize
    }

    /// True once progress has reached 1; `index_at` then returns exactly
    /// the target forever.
    pub fn is_settled(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Decelerating cubic curve: fast start, smooth landing.
fn ease_out_cubic(p: f64) -> f64 {
    let inv = 1.0 - p.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn duration_scales_with_distance_and_clamps() {
        let t0 = Instant::now();
        assert_eq!(Tween::new(10, 11, t0).duration(), Duration::from_millis(150));
        assert_eq!(Tween::new(10, 18, t0).duration(), Duration::from_millis(200));
        assert_eq!(Tween::new(86, 0, t0).duration(), Duration::from_millis(400));
        assert_eq!(Tween::new(5, 5, t0).duration(), Duration::from_millis(150));
    }

    #[test]
    fn starts_on_from_and_settles_on_target() {
        let t0 = Instant::now();
        let tween = Tween::new(80, 20, t0);
        assert_eq!(tween.index_at(t0), 80);
        assert!(!tween.is_settled(t0));

        let end = at(t0, 400);
        assert!(tween.is_settled(end));
        assert_eq!(tween.index_at(end), 20);
        // Long after the end it stays put.
        assert_eq!(tween.index_at(at(t0, 10_000)), 20);
    }

    #[test]
    fn moves_monotonically_toward_the_target() {
        let t0 = Instant::now();
        let tween = Tween::new(0, 40, t0);
        let mut prev = 0;
        for ms in (0..=400).step_by(10) {
            let idx = tween.index_at(at(t0, ms));
            assert!(idx >= prev, "glide reversed at {ms}ms");
            assert!(idx <= 40);
            prev = idx;
        }
        assert_eq!(prev, 40);
    }

    #[test]
    fn ease_out_front_loads_the_motion() {
        let t0 = Instant::now();
        let tween = Tween::new(0, 40, t0);
        // Half the time covers well over half the distance.
        let halfway = tween.index_at(at(t0, 200));
        assert!(halfway > 30, "expected > 30 ticks at half time, got {halfway}");
    }

    #[test]
    fn settles_exactly_at_duration() {
        let t0 = Instant::now();
        let tween = Tween::new(5, 6, t0);
        assert!(!tween.is_settled(at(t0, 149)));
        assert!(tween.is_settled(at(t0, 150)));
    }

    #[test]
    fn works_backwards_too() {
        let t0 = Instant::now();
        let tween = Tween::new(10, 2, t0);
        let mut prev = 10;
        for ms in (0..=200).step_by(10) {
            let idx = tween.index_at(at(t0, ms));
            assert!(idx <= prev, "backwards glide reversed at {ms}ms");
            prev = idx;
        }
        assert_eq!(tween.index_at(at(t0, 200)), 2);
    }
}
