use std::{thread::sleep, time::{Duration, Instant}};

use crate::context::Clock;

pub struct FrameClock {
    period: Duration,
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new(period: Duration) -> Self {
        FrameClock { period, last_tick: None }
    }

    fn remaining(&self, now: Instant) -> Duration {
        match self.last_tick {
            Some(last) => self.period.checked_sub(now - last).unwrap_or_default(),
            None => Duration::ZERO,
        }
    }
}

impl Clock for FrameClock {
    fn tick(&mut self) -> Duration {
        let wait = self.remaining(Instant::now());
        if !wait.is_zero() {
            sleep(wait);
        }

        let now = Instant::now();
        let elapsed = self.last_tick.map_or(Duration::ZERO, |last| now - last);
        self.last_tick = Some(now);
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_does_not_wait() {
        let mut clock = FrameClock::new(Duration::from_secs(5));
        let start = Instant::now();
        assert_eq!(clock.tick(), Duration::ZERO);
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn later_ticks_wait_for_period() {
        let period = Duration::from_millis(30);
        let mut clock = FrameClock::new(period);
        clock.tick();

        let elapsed = clock.tick();
        assert!(elapsed >= period);
    }

    #[test]
    fn slow_frames_do_not_wait() {
        let mut clock = FrameClock::new(Duration::from_millis(10));
        clock.tick();
        sleep(Duration::from_millis(20));

        assert_eq!(clock.remaining(Instant::now()), Duration::ZERO);
    }
}
