//! Target-FPS pacing.
//!
//! The backend asks [`FramePacer::deadline`] when the next frame is due and
//! sleeps the event loop until then. Each frame the scene runs calls
//! [`FramePacer::tick`] to schedule the one after it.

use std::time::{Duration, Instant};

pub struct FramePacer {
    interval: Option<Duration>,
    next_deadline: Instant,
}

impl FramePacer {
    /// A `target_fps` of 0 disables pacing; frames run back to back.
    pub fn new(target_fps: u32, now: Instant) -> Self {
        let interval = (target_fps > 0).then(|| Duration::from_secs_f64(1.0 / target_fps as f64));
        Self {
            interval,
            next_deadline: now,
        }
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// When the next frame should start, or `None` when unpaced.
    pub fn deadline(&self) -> Option<Instant> {
        self.interval.map(|_| self.next_deadline)
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.interval.is_none() || now >= self.next_deadline
    }

    /// Advances by one frame. Deadlines that already passed are skipped
    /// instead of being replayed in a burst.
    pub fn tick(&mut self, now: Instant) {
        if let Some(interval) = self.interval {
            let mut next = self.next_deadline + interval;
            if next <= now {
                next = now + interval;
            }
            self.next_deadline = next;
        }
    }
}
