//! Celebration timer for the accepted state.

use std::time::Duration;

/// A transient celebratory display request, withdrawn after a fixed window.
///
/// Advanced by the frame clock; owns no timer task. Dropping it cancels the
/// display request, so a reset before expiry needs no coordination with a
/// pending callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Celebration {
    elapsed: Duration,
    duration: Duration,
}

impl Celebration {
    /// Default display window.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);

    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    /// Normalized progress through the display window, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::Celebration;
    use std::time::Duration;

    #[test]
    fn starts_unfinished() {
        let celebration = Celebration::new(Duration::from_millis(4000));
        assert!(!celebration.is_finished());
        assert!(celebration.progress() < 0.01);
    }

    #[test]
    fn advance_accumulates() {
        let mut celebration = Celebration::new(Duration::from_millis(4000));
        celebration.advance(Duration::from_millis(1000));
        celebration.advance(Duration::from_millis(1000));
        assert!((celebration.progress() - 0.5).abs() < 0.01);
        assert!(!celebration.is_finished());
    }

    #[test]
    fn finished_after_duration() {
        let mut celebration = Celebration::new(Duration::from_millis(4000));
        celebration.advance(Duration::from_millis(4000));
        assert!(celebration.is_finished());
    }

    #[test]
    fn progress_clamped_at_one() {
        let mut celebration = Celebration::new(Duration::from_millis(100));
        celebration.advance(Duration::from_millis(5000));
        assert!((celebration.progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_duration_immediately_finished() {
        let celebration = Celebration::new(Duration::ZERO);
        assert!(celebration.is_finished());
        assert!((celebration.progress() - 1.0).abs() < f32::EPSILON);
    }
}
