use std::thread;
use std::time::{Duration, Instant};

/// Caps a loop at a fixed frame rate by sleeping away what is left of each
/// frame's budget.
#[derive(Debug)]
pub struct FrameThrottle {
    budget: Option<Duration>,
    last: Option<Instant>,
}

impl FrameThrottle {
    /// `fps == 0` disables throttling.
    pub fn new(fps: u32) -> Self {
        let budget = (fps > 0).then(|| Duration::from_secs(1) / fps);
        FrameThrottle { budget, last: None }
    }

    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }

    /// Time still owed to the current frame after `elapsed` has passed.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.budget
            .map_or(Duration::ZERO, |budget| budget.saturating_sub(elapsed))
    }

    /// Sleep until the frame budget since the previous tick is used up.
    /// The first tick returns immediately.
    pub fn tick(&mut self) {
        if let Some(last) = self.last {
            let wait = self.remaining(last.elapsed());
            if !wait.is_zero() {
                thread::sleep(wait);
            }
        }
        self.last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_fps_budget() {
        let throttle = FrameThrottle::new(30);
        assert_eq!(throttle.budget(), Some(Duration::from_nanos(33_333_333)));
        assert_eq!(
            throttle.remaining(Duration::from_millis(10)),
            Duration::from_nanos(23_333_333)
        );
    }

    #[test]
    fn overrun_frames_do_not_wait() {
        let throttle = FrameThrottle::new(30);
        assert_eq!(throttle.remaining(Duration::from_millis(50)), Duration::ZERO);
    }

    #[test]
    fn zero_fps_is_unthrottled() {
        let mut throttle = FrameThrottle::new(0);
        assert_eq!(throttle.budget(), None);
        assert_eq!(throttle.remaining(Duration::ZERO), Duration::ZERO);
        let start = Instant::now();
        throttle.tick();
        throttle.tick();
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn tick_waits_out_the_budget() {
        let mut throttle = FrameThrottle::new(50);
        throttle.tick();
        let start = Instant::now();
        throttle.tick();
        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}
