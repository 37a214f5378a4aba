//! Decorative hero particles. Off unless `heroParticles` is set.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

/// Placement and timing of one particle, all derived from unit random draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position as a percentage of the hero section.
    pub left_pct: f64,
    /// Vertical position as a percentage of the hero section.
    pub top_pct: f64,
    /// Loop duration in seconds, in `[2, 5)`.
    pub duration_s: f64,
}

impl Particle {
    /// Build a particle from three draws in `[0, 1)`.
    #[must_use]
    pub fn from_draws(duration: f64, left: f64, top: f64) -> Self {
        let unit = |v: f64| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
        Self { left_pct: unit(left) * 100.0, top_pct: unit(top) * 100.0, duration_s: unit(duration) * 3.0 + 2.0 }
    }

    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "position: absolute; width: 4px; height: 4px; background: rgba(84, 212, 200, 0.3); \
             border-radius: 50%; pointer-events: none; \
             animation: float-particle {}s linear infinite; left: {}%; top: {}%; z-index: 1;",
            self.duration_s, self.left_pct, self.top_pct
        )
    }
}

/// Lay out `count` particles, pulling three draws per particle from `random`.
pub fn scatter(count: usize, mut random: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let duration = random();
            let left = random();
            let top = random();
            Particle::from_draws(duration, left, top)
        })
        .collect()
}
