use super::*;

#[test]
fn only_asset_paths_are_registered() {
    let mut images = LazyImages::new("public/assets/");
    assert_eq!(images.register("https://cdn.example.com/logo.png"), None);
    assert_eq!(images.register("/public/assets/hero.png"), Some(0));
    assert_eq!(images.register("public/assets/team.jpg"), Some(1));
    assert_eq!(images.len(), 2);
}

#[test]
fn authored_source_is_matched_and_kept() {
    let mut images = LazyImages::new("public/assets/");
    // A relative path outside the asset folder stays eager even when the page
    // itself is served from under it.
    assert_eq!(images.register("images/logo.png"), None);
    let idx = images.register("public/assets/hero.png").expect("registered");
    assert_eq!(images.begin_preload(idx).as_deref(), Some("public/assets/hero.png"));
}

#[test]
fn empty_marker_matches_nothing() {
    let images = LazyImages::new("");
    assert!(!images.matches("anything.png"));
}

#[test]
fn preload_runs_once_then_shows() {
    let mut images = LazyImages::new("public/assets/");
    let idx = images.register("public/assets/a.png").expect("registered");

    assert_eq!(images.finish_preload(idx), None);
    assert_eq!(images.begin_preload(idx).as_deref(), Some("public/assets/a.png"));
    assert_eq!(images.begin_preload(idx), None);
    assert_eq!(images.get(idx).map(|i| i.phase), Some(ImagePhase::Preloading));

    assert_eq!(images.finish_preload(idx).as_deref(), Some("public/assets/a.png"));
    assert_eq!(images.get(idx).map(|i| i.phase), Some(ImagePhase::Shown));
    assert_eq!(images.finish_preload(idx), None);
}

#[test]
fn unknown_index_is_ignored() {
    let mut images = LazyImages::new("public/assets/");
    assert!(images.is_empty());
    assert_eq!(images.begin_preload(0), None);
    assert_eq!(images.finish_preload(0), None);
}
