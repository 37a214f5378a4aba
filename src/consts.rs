//! Shared constants: the host page's selector contract and fixed styling values.

// ── Navigation ──────────────────────────────────────────────────

pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const NAV_LINK_SELECTOR: &str = ".nav-menu a";
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const NAVBAR_SELECTOR: &str = ".navbar";

/// Class toggled on the hamburger and the menu while the mobile menu is open.
pub const ACTIVE_CLASS: &str = "active";

// ── Pricing ─────────────────────────────────────────────────────

pub const BILLING_BUTTON_SELECTOR: &str = ".billing-btn";
pub const AMOUNT_SELECTOR: &str = ".amount";
pub const SAVE_TEXT_SELECTOR: &str = ".save-text";

/// Substring of a billing button label that selects yearly mode.
pub const YEARLY_LABEL: &str = "Yearly";

// ── Fade-in cards ───────────────────────────────────────────────

pub const REVEAL_SELECTOR: &str = ".feature-card, .pricing-card, .benefits-list li";

/// Fraction of the element that must be visible before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root margin shrinking the viewport's bottom edge by 50px.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Vertical offset applied to hidden elements before they slide in.
pub const HIDDEN_OFFSET: &str = "translateY(30px)";
pub const SHOWN_OFFSET: &str = "translateY(0)";
pub const SLIDE_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

// ── Forms and notifications ─────────────────────────────────────

pub const FORM_SELECTOR: &str = "form";
pub const NEWSLETTER_SELECTOR: &str = ".newsletter";
pub const EMAIL_INPUT_SELECTOR: &str = "input[type=\"email\"]";
pub const MESSAGE_SELECTOR: &str = "textarea";
pub const NOTIFICATION_SELECTOR: &str = ".notification";

pub const CONTACT_SUCCESS: &str = "Thank you! We'll get back to you soon.";
pub const NEWSLETTER_SUCCESS: &str = "Successfully subscribed to newsletter!";

// ── Testimonials ────────────────────────────────────────────────

pub const TESTIMONIAL_BUTTON_SELECTOR: &str = ".play-testimonial";
pub const TESTIMONIAL_QUOTE_SELECTOR: &str = ".testimonial-quote p";
pub const TESTIMONIAL_AUTHOR_SELECTOR: &str = ".testimonial-author";

// ── Counters ────────────────────────────────────────────────────

pub const COUNTER_SELECTOR: &str = ".amount, .income-amount, .income-value";

// ── Scroll progress ─────────────────────────────────────────────

pub const PROGRESS_BAR_CLASS: &str = "scroll-progress";
pub const PROGRESS_BAR_SELECTOR: &str = ".scroll-progress";

// ── Images ──────────────────────────────────────────────────────

pub const IMAGE_SELECTOR: &str = "img";
pub const IMAGE_TRANSITION: &str = "opacity 0.3s ease";

// ── Load sequence ───────────────────────────────────────────────

/// Hero elements revealed in order after the window `load` event.
pub const HERO_SELECTORS: [&str; 5] = [
    ".hero-text h1",
    ".hero-underline",
    ".hero-text p",
    ".hero-buttons",
    ".hero-image",
];

pub const HERO_SECTION_SELECTOR: &str = ".hero-section";
pub const LOADED_CLASS: &str = "loaded";

/// Id of the optional inline JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";
