use std::time::Duration;

use crate::state::TimerState;

/// Repeating timer driven by the frame loop.
///
/// Each call to [`IntervalTimer::tick`] adds the frame time and reports how
/// many whole intervals elapsed since the previous call. A zero interval fires
/// exactly once per tick.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval: f32,
    elapsed: f32,
    state: TimerState,
}

impl IntervalTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.as_secs_f32(),
            elapsed: 0.0,
            state: TimerState::Running,
        }
    }

    pub fn tick(&mut self, dt: f32) -> u32 {
        if self.state == TimerState::Stopped {
            return 0;
        }
        if self.interval <= 0.0 {
            return 1;
        }

        self.elapsed += dt.max(0.0);
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }

    /// Cancels the timer and drops any partially elapsed interval.
    pub fn stop(&mut self) {
        self.state = TimerState::Stopped;
        self.elapsed = 0.0;
    }

    pub fn resume(&mut self) {
        if self.state == TimerState::Stopped {
            self.elapsed = 0.0;
            self.state = TimerState::Running;
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs_f32(self.interval)
    }
}
