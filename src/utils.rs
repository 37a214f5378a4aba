//! Reusable helpers for page scripts: rate limiting, number formatting and a
//! viewport containment check.
//!
//! Nothing here touches the DOM or reads a clock. Callers pass the current
//! time in milliseconds, which keeps the helpers deterministic under test.

#[cfg(test)]
#[path = "utils_test.rs"]
mod utils_test;

/// Trailing-edge (or, with `immediate`, leading-edge) debounce.
///
/// Call [`Debounce::call`] on every event and [`Debounce::poll`] from a timer;
/// the wrapped function runs when either returns `true`.
#[derive(Debug, Clone, PartialEq)]
pub struct Debounce {
    wait_ms: f64,
    immediate: bool,
    deadline: Option<f64>,
}

impl Debounce {
    #[must_use]
    pub fn new(wait_ms: f64, immediate: bool) -> Self {
        Self { wait_ms, immediate, deadline: None }
    }

    /// Record a call at `now_ms`. Returns `true` when the function should run
    /// right away (leading edge of an `immediate` debounce).
    pub fn call(&mut self, now_ms: f64) -> bool {
        let idle = self.deadline.is_none_or(|deadline| now_ms >= deadline);
        self.deadline = Some(now_ms + self.wait_ms);
        self.immediate && idle
    }

    /// Returns `true` once when the quiet period has elapsed and a trailing
    /// call is owed.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                !self.immediate
            }
            _ => false,
        }
    }

    /// When the pending trailing call becomes due, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }
}

/// At most one call per `limit_ms` window; calls inside the window are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Throttle {
    limit_ms: f64,
    blocked_until: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(limit_ms: f64) -> Self {
        Self { limit_ms, blocked_until: None }
    }

    /// Returns `true` when the call at `now_ms` may run.
    pub fn try_call(&mut self, now_ms: f64) -> bool {
        if self.blocked_until.is_some_and(|until| now_ms < until) {
            return false;
        }
        self.blocked_until = Some(now_ms + self.limit_ms);
        true
    }
}

/// Insert thousands separators: `1234567` becomes `1,234,567`.
#[must_use]
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Client rectangle of an element, as from `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Whether `rect` lies entirely inside the viewport.
#[must_use]
pub fn is_in_viewport(rect: Rect, viewport: Viewport) -> bool {
    rect.top >= 0.0 && rect.left >= 0.0 && rect.bottom <= viewport.height && rect.right <= viewport.width
}
