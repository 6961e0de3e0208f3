// Easing and animation timing
// Animations are fire-and-forget: a Timeline is started when a transition
// commits and sampled at draw time. Nothing blocks on completion; a newer
// transition simply replaces the timeline.

use std::time::{Duration, Instant};

/// Symmetric ease-in-out (cosine). Maps [0, 1] onto [0, 1] with zero slope at
/// both ends; inputs outside the range are clamped.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    0.5 - 0.5 * (std::f32::consts::PI * t).cos()
}

/// A fixed-duration animation clock
#[derive(Debug, Clone, Copy)]
pub struct Timeline {
    started: Instant,
    duration: Duration,
}

impl Timeline {
    /// Start a timeline now
    pub fn new(duration: Duration) -> Self {
        Self::starting_at(Instant::now(), duration)
    }

    /// Start a timeline at an explicit instant
    pub fn starting_at(started: Instant, duration: Duration) -> Self {
        Self { started, duration }
    }

    /// Linear progress in [0, 1] at the given instant
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased progress in [0, 1] at the given instant
    pub fn eased_at(&self, now: Instant) -> f32 {
        ease_in_out(self.progress_at(now))
    }

    /// Whether the timeline has run its full duration
    pub fn is_complete_at(&self, now: Instant) -> bool {
        self.progress_at(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert!((ease_in_out(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ease_is_clamped() {
        assert_eq!(ease_in_out(-1.0), 0.0);
        assert!((ease_in_out(2.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ease_is_monotonic() {
        let mut prev = 0.0;
        for step in 0..=100 {
            let v = ease_in_out(step as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_timeline_progress() {
        let start = Instant::now();
        let timeline = Timeline::starting_at(start, Duration::from_millis(250));

        assert_eq!(timeline.progress_at(start), 0.0);
        let half = timeline.progress_at(start + Duration::from_millis(125));
        assert!((half - 0.5).abs() < 0.01);
        assert_eq!(timeline.progress_at(start + Duration::from_millis(400)), 1.0);
        assert!(timeline.is_complete_at(start + Duration::from_millis(250)));
    }

    #[test]
    fn test_timeline_before_start_clamps_to_zero() {
        let start = Instant::now();
        let timeline = Timeline::starting_at(start + Duration::from_millis(50), Duration::from_millis(250));
        assert_eq!(timeline.progress_at(start), 0.0);
        assert_eq!(timeline.eased_at(start), 0.0);
    }
}
