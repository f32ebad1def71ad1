/// One step of a [`CounterAnimation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterFrame {
    Running(f64),
    /// Snapped to the exact end value; no further frames follow.
    Finished(f64),
}

impl CounterFrame {
    pub fn value(self) -> f64 {
        match self {
            CounterFrame::Running(value) | CounterFrame::Finished(value) => value,
        }
    }
}

/// Linear tween from `start` to `end`, advanced one fixed tick at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    current: f64,
    end: f64,
    increment: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(start: f64, end: f64, duration_ms: f64, tick_ms: u32) -> Self {
        let ticks = duration_ms / f64::from(tick_ms.max(1));
        Self {
            current: start,
            end,
            increment: (end - start) / ticks,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick(&mut self) -> CounterFrame {
        if self.finished {
            return CounterFrame::Finished(self.end);
        }

        self.current += self.increment;

        // A zero or non-finite step would never reach the end value
        let reached = !self.increment.is_finite()
            || self.increment == 0.0
            || (self.increment > 0.0 && self.current >= self.end)
            || (self.increment < 0.0 && self.current <= self.end);

        if reached {
            self.finished = true;
            CounterFrame::Finished(self.end)
        } else {
            CounterFrame::Running(self.current)
        }
    }
}
