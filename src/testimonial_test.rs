use super::*;

fn three() -> TestimonialRotator {
    TestimonialRotator::new(default_testimonials())
}

#[test]
fn starts_on_first_entry() {
    let rotator = three();
    assert_eq!(rotator.index(), 0);
    assert_eq!(rotator.current().map(|t| t.author.as_str()), Some("Aria Zinanrio"));
}

#[test]
fn advance_wraps_modulo_len() {
    for clicks in 0..10 {
        let mut rotator = three();
        for _ in 0..clicks {
            assert!(rotator.advance());
        }
        assert_eq!(rotator.index(), clicks % 3);
    }
}

#[test]
fn advance_on_empty_list_is_noop() {
    let mut rotator = TestimonialRotator::new(Vec::new());
    assert!(rotator.is_empty());
    assert!(!rotator.advance());
    assert_eq!(rotator.index(), 0);
    assert!(rotator.current().is_none());
}

#[test]
fn single_entry_stays_put() {
    let mut rotator = TestimonialRotator::new(vec![Testimonial::new("Solid", "Bo")]);
    assert!(rotator.advance());
    assert_eq!(rotator.index(), 0);
}

#[test]
fn author_line_is_prefixed() {
    let t = Testimonial::new("Nice", "Michael Chen");
    assert_eq!(t.author_line(), "_ Michael Chen");
}
