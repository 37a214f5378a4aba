//! One-shot fade-in bookkeeping for content cards and the hero load sequence.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::HERO_SELECTORS;

/// Tracks which registered elements have already faded in.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    shown: Vec<bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hidden element and return its index.
    pub fn register(&mut self) -> usize {
        self.shown.push(false);
        self.shown.len() - 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shown.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    #[must_use]
    pub fn is_shown(&self, index: usize) -> bool {
        self.shown.get(index).copied().unwrap_or(false)
    }

    /// Mark `index` visible. Returns `true` only the first time, and `false`
    /// for unknown indices.
    pub fn show(&mut self, index: usize) -> bool {
        match self.shown.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }
}

/// Delay before each hero element slides in, in [`HERO_SELECTORS`] order.
#[must_use]
pub fn hero_delays(stagger_ms: u32) -> Vec<u32> {
    (0..HERO_SELECTORS.len())
        .map(|i| u32::try_from(i).map_or(u32::MAX, |i| i.saturating_mul(stagger_ms)))
        .collect()
}
