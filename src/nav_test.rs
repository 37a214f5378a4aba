use super::*;

#[test]
fn menu_starts_closed() {
    assert!(!MobileMenu::default().is_open());
}

#[test]
fn toggle_flips_state() {
    let mut menu = MobileMenu::default();
    assert!(menu.toggle());
    assert!(menu.is_open());
    assert!(!menu.toggle());
    assert!(!menu.is_open());
}

#[test]
fn close_is_idempotent() {
    let mut menu = MobileMenu::default();
    menu.toggle();
    menu.close();
    menu.close();
    assert!(!menu.is_open());
}

#[test]
fn anchor_target_strips_hash() {
    assert_eq!(anchor_target("#pricing"), Some("pricing"));
    assert_eq!(anchor_target("#a-b_c"), Some("a-b_c"));
}

#[test]
fn anchor_target_rejects_bare_hash_and_urls() {
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target(""), None);
    assert_eq!(anchor_target("/about#team"), None);
    assert_eq!(anchor_target("https://example.com"), None);
}
