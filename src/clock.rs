use std::thread;
use std::time::{Duration, Instant};

/// Fixed-rate frame pacer.
#[derive(Debug)]
pub struct Clock {
    period: Duration,
    last_tick: Instant,
}

impl Clock {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            period: period_for(tick_rate),
            last_tick: Instant::now(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Blocks until one period has passed since the previous tick began and
    /// returns the time actually elapsed.
    pub fn tick(&mut self) -> Duration {
        let wait = remaining(self.period, self.last_tick.elapsed());
        if !wait.is_zero() {
            thread::sleep(wait);
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        elapsed
    }
}

/// Length of one tick at `tick_rate` ticks per second.
pub fn period_for(tick_rate: u32) -> Duration {
    Duration::from_secs(1) / tick_rate.max(1)
}

/// How long to wait so that `elapsed` reaches `period`.
pub fn remaining(period: Duration, elapsed: Duration) -> Duration {
    period.saturating_sub(elapsed)
}
