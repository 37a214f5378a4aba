use super::*;

#[test]
fn severity_colors() {
    assert_eq!(Severity::Success.color(), "#54D4C8");
    assert_eq!(Severity::Error.color(), "#FF6B6B");
    assert_eq!(Severity::Info.color(), "#333");
}

#[test]
fn severity_default_is_info() {
    assert_eq!(Severity::default(), Severity::Info);
}

#[test]
fn class_name_carries_severity() {
    let mut slot = NotificationSlot::new();
    let n = slot.show("Saved", Severity::Success);
    assert_eq!(n.class_name(), "notification notification-success");
}

#[test]
fn show_replaces_previous() {
    let mut slot = NotificationSlot::new();
    let first = slot.show("one", Severity::Info);
    let second = slot.show("two", Severity::Error);
    assert_ne!(first.id, second.id);
    assert_eq!(slot.current(), Some(&second));
}

#[test]
fn stale_dismiss_keeps_successor() {
    let mut slot = NotificationSlot::new();
    let first = slot.show("one", Severity::Info);
    let second = slot.show("two", Severity::Info);
    assert!(!slot.dismiss(first.id));
    assert_eq!(slot.current().map(|n| n.id), Some(second.id));
}

#[test]
fn dismiss_current_clears_slot() {
    let mut slot = NotificationSlot::new();
    let n = slot.show("one", Severity::Info);
    assert!(slot.dismiss(n.id));
    assert!(slot.current().is_none());
    assert!(!slot.dismiss(n.id));
}
