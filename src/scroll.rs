//! Scroll-driven chrome: navbar intensity and the reading-progress bar.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Document scroll geometry sampled on each scroll event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    /// `window.scrollY`.
    pub scroll_y: f64,
    /// Scroll offset of the document element (or body, whichever is non-zero).
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Percentage of the scrollable height already scrolled, in `[0, 100]`.
    /// A page that cannot scroll reports 0.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        let height = self.scroll_height - self.client_height;
        if height <= 0.0 || !height.is_finite() {
            return 0.0;
        }
        (self.scroll_top / height * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavbarStyle {
    #[default]
    Resting,
    Scrolled,
}

impl NavbarStyle {
    #[must_use]
    pub fn for_offset(scroll_y: f64, threshold_px: f64) -> Self {
        if scroll_y > threshold_px { Self::Scrolled } else { Self::Resting }
    }

    #[must_use]
    pub fn box_shadow(self) -> &'static str {
        match self {
            Self::Resting => "none",
            Self::Scrolled => "0 2px 20px rgba(0, 0, 0, 0.1)",
        }
    }

    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Resting => "rgba(255, 255, 255, 0.95)",
            Self::Scrolled => "rgba(255, 255, 255, 0.98)",
        }
    }
}

/// CSS `width` value for a progress percentage.
#[must_use]
pub fn progress_width(percent: f64) -> String {
    format!("{percent}%")
}
