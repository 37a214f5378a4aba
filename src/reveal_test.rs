use super::*;

#[test]
fn register_hands_out_sequential_indices() {
    let mut tracker = RevealTracker::new();
    assert!(tracker.is_empty());
    assert_eq!(tracker.register(), 0);
    assert_eq!(tracker.register(), 1);
    assert_eq!(tracker.len(), 2);
}

#[test]
fn show_is_one_shot() {
    let mut tracker = RevealTracker::new();
    let idx = tracker.register();
    assert!(!tracker.is_shown(idx));
    assert!(tracker.show(idx));
    assert!(tracker.is_shown(idx));
    assert!(!tracker.show(idx));
}

#[test]
fn show_unknown_index_is_noop() {
    let mut tracker = RevealTracker::new();
    assert!(!tracker.show(3));
    assert!(!tracker.is_shown(3));
}

#[test]
fn hero_delays_stagger_by_index() {
    assert_eq!(hero_delays(200), vec![0, 200, 400, 600, 800]);
    assert_eq!(hero_delays(0), vec![0, 0, 0, 0, 0]);
}
