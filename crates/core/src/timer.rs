use std::time::Duration;

/// Outcome of a single countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Running { remaining: u32 },
    Finished,
    /// The countdown was not running; nothing changed.
    Idle,
}

/// Whole-second countdown driven by an external one-second ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    total: u32,
    remaining: u32,
    running: bool,
}

impl Countdown {
    #[must_use]
    pub fn new(total_secs: u32) -> Self {
        Self {
            total: total_secs,
            remaining: total_secs,
            running: false,
        }
    }

    /// Restart from the full duration.
    pub fn start(&mut self) {
        self.remaining = self.total;
        self.running = true;
    }

    /// Stop and rewind to the full duration.
    pub fn reset(&mut self) {
        self.remaining = self.total;
        self.running = false;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            return Tick::Finished;
        }
        Tick::Running {
            remaining: self.remaining,
        }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Elapsed share of the countdown as degrees of a ring (0..=360).
    #[must_use]
    pub fn ring_degrees(&self) -> f64 {
        if self.total == 0 {
            return 360.0;
        }
        f64::from(self.total - self.remaining) / f64::from(self.total) * 360.0
    }
}

/// Scale a nominal duration by the presenter's time scale.
#[must_use]
pub fn scaled(duration: Duration, time_scale: f32) -> Duration {
    duration.mul_f32(time_scale.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_countdown_ignores_ticks() {
        let mut countdown = Countdown::new(3);
        assert_eq!(countdown.tick(), Tick::Idle);
        assert_eq!(countdown.remaining(), 3);
    }

    #[test]
    fn countdown_runs_to_finish_once() {
        let mut countdown = Countdown::new(3);
        countdown.start();
        assert_eq!(countdown.tick(), Tick::Running { remaining: 2 });
        assert_eq!(countdown.tick(), Tick::Running { remaining: 1 });
        assert_eq!(countdown.tick(), Tick::Finished);
        assert!(!countdown.is_running());
        assert_eq!(countdown.tick(), Tick::Idle);
    }

    #[test]
    fn ring_fills_as_time_passes() {
        let mut countdown = Countdown::new(4);
        countdown.start();
        assert!(countdown.ring_degrees().abs() < f64::EPSILON);
        countdown.tick();
        assert!((countdown.ring_degrees() - 90.0).abs() < 1e-9);
        countdown.reset();
        assert!(countdown.ring_degrees().abs() < f64::EPSILON);
    }

    #[test]
    fn restart_rewinds() {
        let mut countdown = Countdown::new(11);
        countdown.start();
        countdown.tick();
        countdown.tick();
        countdown.start();
        assert_eq!(countdown.remaining(), 11);
    }

    #[test]
    fn scaled_duration_multiplies() {
        assert_eq!(
            scaled(Duration::from_secs(1), 0.5),
            Duration::from_millis(500)
        );
    }
}
