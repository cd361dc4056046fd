//! Fixed-rate frame pacing

use std::time::{Duration, Instant};

/// Blocks the loop until the next frame boundary
#[derive(Debug)]
pub struct FrameClock {
    period: Duration,
    next: Instant,
    frames: u64,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self::starting_at(fps, Instant::now())
    }

    /// Clock whose first frame ends one period after `start`
    pub fn starting_at(fps: u32, start: Instant) -> Self {
        let period = Duration::from_secs(1) / fps.max(1);
        Self {
            period,
            next: start + period,
            frames: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Deadline of the current frame
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Sleep until the current frame's deadline
    pub fn wait(&mut self) {
        if let Some(pause) = self.advance(Instant::now()) {
            std::thread::sleep(pause);
        }
    }

    /// Close the current frame at `now` and return how long to sleep. An
    /// overrun frame gets no sleep, and the schedule restarts from `now`
    /// instead of catching up.
    pub fn advance(&mut self, now: Instant) -> Option<Duration> {
        self.frames += 1;
        if now < self.next {
            let pause = self.next - now;
            self.next += self.period;
            Some(pause)
        } else {
            if now - self.next > self.period {
                log::trace!("Frame {} overran by {:?}", self.frames, now - self.next);
            }
            self.next = now + self.period;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_from_fps() {
        assert_eq!(FrameClock::new(50).period(), Duration::from_millis(20));
        assert_eq!(FrameClock::new(0).period(), Duration::from_secs(1));
    }

    #[test]
    fn test_early_frame_sleeps_to_deadline() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(50, start);
        let ms = Duration::from_millis;

        assert_eq!(clock.advance(start + ms(5)), Some(ms(15)));
        assert_eq!(clock.deadline(), start + ms(40));
        assert_eq!(clock.advance(start + ms(30)), Some(ms(10)));
        assert_eq!(clock.deadline(), start + ms(60));
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn test_overrun_does_not_sleep_or_catch_up() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(50, start);
        let ms = Duration::from_millis;

        assert_eq!(clock.advance(start + ms(75)), None);
        // Next frame is a full period from the late one
        assert_eq!(clock.deadline(), start + ms(95));
        assert_eq!(clock.advance(start + ms(80)), Some(ms(15)));
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn test_frame_exactly_on_deadline_does_not_sleep() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(50, start);
        assert_eq!(clock.advance(start + Duration::from_millis(20)), None);
        assert_eq!(clock.deadline(), start + Duration::from_millis(40));
    }
}
