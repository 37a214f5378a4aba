//! Tunable page constants.
//!
//! DESIGN
//! ======
//! Every field has a default matching the stock landing page, so a page
//! without a `#landing-config` block behaves exactly like one with an empty
//! object. Pages can override any subset of fields through inline JSON.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::testimonial::{Testimonial, default_testimonials};

/// Errors raised while loading a [`LandingConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration block is not valid JSON for this schema.
    #[error("failed to parse landing config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The configuration parsed but holds an unusable value.
    #[error("invalid landing config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LandingConfig {
    /// Scroll offset in pixels past which the navbar switches to its scrolled style.
    pub navbar_threshold_px: f64,
    /// Monthly price per plan, in display order.
    pub base_prices: Vec<u64>,
    /// Multiplier applied to non-zero monthly prices in yearly mode.
    pub yearly_multiplier: u64,
    pub notification_ms: u32,
    pub testimonial_fade_ms: u32,
    pub counter_duration_ms: u32,
    pub counter_tick_ms: u32,
    pub hero_stagger_ms: u32,
    /// Minimum trimmed message length accepted by contact forms.
    pub min_message_len: usize,
    /// Image `src` substring that opts an image into lazy cross-fading.
    pub lazy_asset_marker: String,
    pub testimonials: Vec<Testimonial>,
    pub hero_particles: bool,
    pub particle_count: usize,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            navbar_threshold_px: 50.0,
            base_prices: vec![0, 8, 16],
            yearly_multiplier: 10,
            notification_ms: 5000,
            testimonial_fade_ms: 300,
            counter_duration_ms: 2000,
            counter_tick_ms: 16,
            hero_stagger_ms: 200,
            min_message_len: 10,
            lazy_asset_marker: "public/assets/".to_owned(),
            testimonials: default_testimonials(),
            hero_particles: false,
            particle_count: 50,
        }
    }
}

impl LandingConfig {
    /// Parse and validate a JSON configuration block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when [`LandingConfig::validate`] rejects it.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall or divide by zero in the animations.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.counter_tick_ms == 0 {
            return Err(ConfigError::Invalid("counterTickMs must be positive".into()));
        }
        if self.counter_duration_ms == 0 {
            return Err(ConfigError::Invalid("counterDurationMs must be positive".into()));
        }
        if !self.navbar_threshold_px.is_finite() {
            return Err(ConfigError::Invalid("navbarThresholdPx must be finite".into()));
        }
        if self.lazy_asset_marker.is_empty() {
            return Err(ConfigError::Invalid("lazyAssetMarker must not be empty".into()));
        }
        Ok(())
    }
}
