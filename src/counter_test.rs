use super::*;

fn run_to_end(anim: &mut CounterAnimation) -> Vec<u64> {
    let mut shown = Vec::new();
    for _ in 0..10_000 {
        let tick = anim.tick();
        shown.push(tick.value);
        if tick.done {
            return shown;
        }
    }
    shown
}

// =============================================================
// parse_target
// =============================================================

#[test]
fn parse_strips_non_digits() {
    assert_eq!(parse_target("$1,250"), Some(1250));
    assert_eq!(parse_target("  16 "), Some(16));
    assert_eq!(parse_target("4.5k"), Some(45));
}

#[test]
fn parse_rejects_zero_and_empty() {
    assert_eq!(parse_target("0"), None);
    assert_eq!(parse_target("$0"), None);
    assert_eq!(parse_target("Free"), None);
    assert_eq!(parse_target(""), None);
}

#[test]
fn parse_rejects_overflow() {
    assert_eq!(parse_target("99999999999999999999999"), None);
}

// =============================================================
// CounterAnimation
// =============================================================

#[test]
fn ends_exactly_at_target() {
    for target in [1, 7, 8, 16, 125, 999, 1250, 123_457] {
        let mut anim = CounterAnimation::new(target, 2000, 16);
        let shown = run_to_end(&mut anim);
        assert_eq!(shown.last(), Some(&target), "target {target}");
        assert!(anim.is_done());
    }
}

#[test]
fn never_exceeds_target_and_never_decreases() {
    for target in [3, 8, 100, 7777] {
        let mut anim = CounterAnimation::new(target, 2000, 16);
        let shown = run_to_end(&mut anim);
        assert!(shown.iter().all(|&v| v <= target));
        assert!(shown.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn takes_about_duration_over_tick_steps() {
    let mut anim = CounterAnimation::new(1000, 2000, 16);
    let shown = run_to_end(&mut anim);
    // 2000 / 16 = 125 steps; float accumulation may need one more.
    assert!((125..=126).contains(&shown.len()), "took {} ticks", shown.len());
}

#[test]
fn first_tick_of_small_target_floors_to_zero() {
    let mut anim = CounterAnimation::new(8, 2000, 16);
    assert_eq!(anim.tick(), CounterTick { value: 0, done: false });
}

#[test]
fn tick_after_done_is_stable() {
    let mut anim = CounterAnimation::new(5, 32, 16);
    run_to_end(&mut anim);
    assert_eq!(anim.tick(), CounterTick { value: 5, done: true });
}

#[test]
fn zero_target_is_done_immediately() {
    let anim = CounterAnimation::new(0, 2000, 16);
    assert!(anim.is_done());
}

#[test]
fn duration_shorter_than_tick_finishes_in_one() {
    let mut anim = CounterAnimation::new(50, 10, 16);
    assert_eq!(anim.tick(), CounterTick { value: 50, done: true });
}

#[test]
fn slot_marks_animated_once_started() {
    let mut slot = CounterSlot::new(16);
    assert!(!slot.is_animated());
    slot.animation = Some(CounterAnimation::new(slot.target, 2000, 16));
    assert!(slot.is_animated());
}
