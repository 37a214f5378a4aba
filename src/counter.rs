//! Count-up animation for numeric stats.
//!
//! A counter accumulates `target / (duration / tick)` per tick and displays
//! the floor of the running total. The tick that reaches or passes the target
//! displays the target itself and finishes, so rounding never overshoots.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Read a counter target from an element's text: every non-digit is dropped.
/// Returns `None` when nothing is left, the digits overflow, or the value is 0.
#[must_use]
pub fn parse_target(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    match digits.parse::<u64>() {
        Ok(value) if value > 0 => Some(value),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterTick {
    pub value: u64,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    accumulated: f64,
    done: bool,
}

impl CounterAnimation {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(target: u64, duration_ms: u32, tick_ms: u32) -> Self {
        let steps = f64::from(duration_ms) / f64::from(tick_ms.max(1));
        let increment = if steps > 0.0 { target as f64 / steps } else { target as f64 };
        Self { target, increment, accumulated: 0.0, done: target == 0 }
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one tick and return the value to display.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn tick(&mut self) -> CounterTick {
        if self.done {
            return CounterTick { value: self.target, done: true };
        }
        self.accumulated += self.increment;
        if self.accumulated >= self.target as f64 {
            self.done = true;
            return CounterTick { value: self.target, done: true };
        }
        let value = (self.accumulated.floor() as u64).min(self.target);
        CounterTick { value, done: false }
    }
}

/// A counter element tracked by the page: its target and, once triggered,
/// its animation.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterSlot {
    pub target: u64,
    pub animation: Option<CounterAnimation>,
}

impl CounterSlot {
    #[must_use]
    pub fn new(target: u64) -> Self {
        Self { target, animation: None }
    }

    /// Whether the animation has been started. Set on first visibility and
    /// never cleared.
    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.animation.is_some()
    }
}
