#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn draws_map_to_ranges() {
    let p = Particle::from_draws(0.5, 0.25, 0.75);
    assert_eq!(p.duration_s, 3.5);
    assert_eq!(p.left_pct, 25.0);
    assert_eq!(p.top_pct, 75.0);
}

#[test]
fn out_of_range_draws_are_clamped() {
    let p = Particle::from_draws(f64::NAN, -1.0, 4.0);
    assert_eq!(p.duration_s, 2.0);
    assert_eq!(p.left_pct, 0.0);
    assert_eq!(p.top_pct, 100.0);
}

#[test]
fn scatter_consumes_three_draws_each() {
    let mut calls = 0;
    let particles = scatter(4, || {
        calls += 1;
        0.0
    });
    assert_eq!(particles.len(), 4);
    assert_eq!(calls, 12);
}

#[test]
fn css_embeds_position_and_duration() {
    let css = Particle::from_draws(0.0, 0.1, 0.2).css();
    assert!(css.contains("animation: float-particle 2s linear infinite;"));
    assert!(css.contains("left: 10%;"));
    assert!(css.contains("top: 20%;"));
}
