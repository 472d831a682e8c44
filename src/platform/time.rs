//! Frame pacing

use std::time::{Duration, Instant};

/// Sleeps out the rest of each frame so the loop runs at most `fps` times a second
pub struct FrameLimiter {
    frame: Duration,
    last: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Self::frame_duration(fps),
            last: Instant::now(),
        }
    }

    /// Target duration of one frame
    pub fn frame_duration(fps: u32) -> Duration {
        Duration::from_secs_f64(1.0 / fps.max(1) as f64)
    }

    /// Time left in the current frame as of `now`
    pub fn remaining(&self, now: Instant) -> Duration {
        self.frame
            .saturating_sub(now.saturating_duration_since(self.last))
    }

    /// Block until the frame budget is used up, then start the next frame
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.last = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        let d = FrameLimiter::frame_duration(240);
        assert!((d.as_secs_f64() - 1.0 / 240.0).abs() < 1e-9);
        assert_eq!(FrameLimiter::frame_duration(0), Duration::from_secs(1));
    }

    #[test]
    fn test_remaining_shrinks_then_saturates() {
        let limiter = FrameLimiter::new(10);
        let start = limiter.last;
        assert_eq!(limiter.remaining(start), Duration::from_millis(100));
        assert_eq!(
            limiter.remaining(start + Duration::from_millis(40)),
            Duration::from_millis(60)
        );
        assert_eq!(limiter.remaining(start + Duration::from_secs(1)), Duration::ZERO);
    }

    #[test]
    fn test_wait_paces_frames() {
        let mut limiter = FrameLimiter::new(100);
        let start = Instant::now();
        limiter.wait();
        limiter.wait();
        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}
