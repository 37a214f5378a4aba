use log::debug;

use crate::config::LandingConfig;
use crate::counter::{CounterAnimation, CounterSlot, parse_target};
use crate::forms::{FormFields, FormKind, validate};
use crate::images::LazyImages;
use crate::nav::{MobileMenu, anchor_target};
use crate::notification::{Notification, NotificationId, NotificationSlot, Severity};
use crate::pricing::{BillingPeriod, PricingToggle};
use crate::reveal::{RevealTracker, hero_delays};
use crate::scroll::{NavbarStyle, ScrollMetrics};
use crate::testimonial::{Testimonial, TestimonialRotator};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Deferred work the host runs on a timer and feeds back through
/// [`PageCore::on_timer`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Task {
    DismissNotification(NotificationId),
    /// Swap in whichever testimonial is current when the timer fires.
    SwapTestimonial,
    CounterTick(usize),
    RevealHero(usize),
}

/// DOM effects returned from event handlers for the host to apply.
///
/// Indices refer to elements in the order the host registered them. Effects
/// on elements the page does not have are ignored by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Set or clear `active` on the hamburger and the nav menu.
    SetMenuOpen(bool),
    /// Smooth-scroll the element with this id to the top of the viewport.
    ScrollTo(String),
    StyleNavbar(NavbarStyle),
    /// Create (or adopt) the `.scroll-progress` bar.
    CreateProgressBar,
    SetProgress(f64),
    /// Mark billing button `index` active and every other button inactive.
    SelectBilling(usize),
    /// New `.amount` texts, in document order.
    SetAmounts(Vec<u64>),
    ShowSaveText(bool),
    RevealCard(usize),
    /// Remove every `.notification` in the document.
    ClearNotifications,
    ShowNotification(Notification),
    RemoveNotification(NotificationId),
    ResetForm(usize),
    ClearEmail(usize),
    /// Fade the quote and author in (`true`) or out (`false`).
    FadeTestimonial(bool),
    SetTestimonial(Testimonial),
    SetCounter { counter: usize, value: u64 },
    FadeOutImage(usize),
    PreloadImage { image: usize, src: String },
    ShowImage { image: usize, src: String },
    /// Add the `loaded` class to `<body>`.
    MarkLoaded,
    HideHero(usize),
    RevealHero(usize),
    SpawnParticles(usize),
    Schedule { delay_ms: u32, task: Task },
    Every { interval_ms: u32, task: Task },
    Cancel(Task),
}

/// Per-page behavior state. One instance is built at startup; every event
/// handler goes through it.
#[derive(Debug, Clone)]
pub struct PageCore {
    pub config: LandingConfig,
    pub menu: MobileMenu,
    pub pricing: PricingToggle,
    pub testimonials: TestimonialRotator,
    pub counters: Vec<CounterSlot>,
    pub notifications: NotificationSlot,
    pub reveals: RevealTracker,
    pub images: LazyImages,
    pub progress_bar_created: bool,
    pub loaded: bool,
}

impl Default for PageCore {
    fn default() -> Self {
        Self::new(LandingConfig::default())
    }
}

impl PageCore {
    #[must_use]
    pub fn new(config: LandingConfig) -> Self {
        Self {
            menu: MobileMenu::default(),
            pricing: PricingToggle::new(config.base_prices.clone(), config.yearly_multiplier),
            testimonials: TestimonialRotator::new(config.testimonials.clone()),
            counters: Vec::new(),
            notifications: NotificationSlot::new(),
            reveals: RevealTracker::new(),
            images: LazyImages::new(&config.lazy_asset_marker),
            progress_bar_created: false,
            loaded: false,
            config,
        }
    }

    // --- Navigation ---

    pub fn on_menu_toggle(&mut self) -> Vec<Action> {
        vec![Action::SetMenuOpen(self.menu.toggle())]
    }

    pub fn on_nav_link(&mut self) -> Vec<Action> {
        self.menu.close();
        vec![Action::SetMenuOpen(false)]
    }

    /// Same-page link clicked. The host always cancels the default jump.
    pub fn on_anchor_click(&mut self, href: &str) -> Vec<Action> {
        match anchor_target(href) {
            Some(id) => vec![Action::ScrollTo(id.to_owned())],
            None => {
                debug!("anchor {href:?} has no target id");
                Vec::new()
            }
        }
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Vec<Action> {
        let mut actions =
            vec![Action::StyleNavbar(NavbarStyle::for_offset(metrics.scroll_y, self.config.navbar_threshold_px))];
        if !self.progress_bar_created {
            self.progress_bar_created = true;
            actions.push(Action::CreateProgressBar);
        }
        actions.push(Action::SetProgress(metrics.progress_percent()));
        actions
    }

    // --- Pricing ---

    pub fn on_billing_click(&mut self, button: usize, label: &str) -> Vec<Action> {
        let period = self.pricing.select(button, label);
        debug!("billing switched to {period:?}");
        vec![
            Action::SelectBilling(button),
            Action::SetAmounts(self.pricing.amounts()),
            Action::ShowSaveText(period.shows_savings()),
        ]
    }

    #[must_use]
    pub fn billing_period(&self) -> BillingPeriod {
        self.pricing.period()
    }

    // --- Cards ---

    pub fn register_reveal(&mut self) -> usize {
        self.reveals.register()
    }

    pub fn on_reveal_visible(&mut self, card: usize) -> Vec<Action> {
        if self.reveals.show(card) { vec![Action::RevealCard(card)] } else { Vec::new() }
    }

    // --- Forms and notifications ---

    /// Form `form` was submitted with `fields`. A form without an email input
    /// is left alone.
    pub fn on_submit(&mut self, form: usize, kind: FormKind, fields: &FormFields) -> Vec<Action> {
        if fields.email.is_none() {
            debug!("form {form} has no email input, ignoring submit");
            return Vec::new();
        }
        match validate(kind, fields, self.config.min_message_len) {
            Err(err) => {
                debug!("form {form} rejected: {err}");
                self.notify(&err.to_string(), Severity::Error)
            }
            Ok(()) => {
                let mut actions = self.notify(kind.success_message(), Severity::Success);
                actions.push(match kind {
                    FormKind::Contact => Action::ResetForm(form),
                    FormKind::Newsletter => Action::ClearEmail(form),
                });
                actions
            }
        }
    }

    /// Show a toast, evicting any existing one, and arm its auto-dismiss.
    pub fn notify(&mut self, message: &str, severity: Severity) -> Vec<Action> {
        let notification = self.notifications.show(message, severity);
        let id = notification.id;
        vec![
            Action::ClearNotifications,
            Action::ShowNotification(notification),
            Action::Schedule { delay_ms: self.config.notification_ms, task: Task::DismissNotification(id) },
        ]
    }

    /// Close button on toast `id` clicked.
    pub fn on_notification_close(&mut self, id: NotificationId) -> Vec<Action> {
        if self.notifications.dismiss(id) { vec![Action::RemoveNotification(id)] } else { Vec::new() }
    }

    // --- Testimonials ---

    /// Next-testimonial button clicked. The index always advances; the fade
    /// and swap run only when the page has both the quote and the author.
    pub fn on_testimonial_next(&mut self, targets_present: bool) -> Vec<Action> {
        if !self.testimonials.advance() || !targets_present {
            return Vec::new();
        }
        vec![
            Action::FadeTestimonial(false),
            Action::Schedule { delay_ms: self.config.testimonial_fade_ms, task: Task::SwapTestimonial },
        ]
    }

    // --- Counters ---

    /// Register a stat element by its displayed text. Returns the counter
    /// index when the text holds a positive number; the host then shows `0`.
    pub fn register_counter(&mut self, text: &str) -> Option<usize> {
        let target = parse_target(text)?;
        self.counters.push(CounterSlot::new(target));
        Some(self.counters.len() - 1)
    }

    pub fn on_counter_visible(&mut self, counter: usize) -> Vec<Action> {
        let Some(slot) = self.counters.get_mut(counter) else {
            return Vec::new();
        };
        if slot.is_animated() {
            return Vec::new();
        }
        slot.animation =
            Some(CounterAnimation::new(slot.target, self.config.counter_duration_ms, self.config.counter_tick_ms));
        vec![Action::Every { interval_ms: self.config.counter_tick_ms, task: Task::CounterTick(counter) }]
    }

    fn tick_counter(&mut self, counter: usize) -> Vec<Action> {
        let task = Task::CounterTick(counter);
        let Some(animation) = self.counters.get_mut(counter).and_then(|slot| slot.animation.as_mut()) else {
            return vec![Action::Cancel(task)];
        };
        let tick = animation.tick();
        let mut actions = vec![Action::SetCounter { counter, value: tick.value }];
        if tick.done {
            actions.push(Action::Cancel(task));
        }
        actions
    }

    // --- Images ---

    pub fn register_image(&mut self, src: &str) -> Option<usize> {
        self.images.register(src)
    }

    pub fn on_image_visible(&mut self, image: usize) -> Vec<Action> {
        match self.images.begin_preload(image) {
            Some(src) => vec![Action::FadeOutImage(image), Action::PreloadImage { image, src }],
            None => Vec::new(),
        }
    }

    pub fn on_image_loaded(&mut self, image: usize) -> Vec<Action> {
        match self.images.finish_preload(image) {
            Some(src) => vec![Action::ShowImage { image, src }],
            None => Vec::new(),
        }
    }

    // --- Load sequence ---

    /// Window `load`: mark the body and stagger the hero elements in.
    pub fn on_load(&mut self) -> Vec<Action> {
        if self.loaded {
            return Vec::new();
        }
        self.loaded = true;
        let mut actions = vec![Action::MarkLoaded];
        for (index, delay_ms) in hero_delays(self.config.hero_stagger_ms).into_iter().enumerate() {
            actions.push(Action::HideHero(index));
            actions.push(Action::Schedule { delay_ms, task: Task::RevealHero(index) });
        }
        if self.config.hero_particles && self.config.particle_count > 0 {
            actions.push(Action::SpawnParticles(self.config.particle_count));
        }
        actions
    }

    // --- Timers ---

    pub fn on_timer(&mut self, task: &Task) -> Vec<Action> {
        match task {
            Task::DismissNotification(id) => self.on_notification_close(*id),
            Task::SwapTestimonial => match self.testimonials.current() {
                Some(testimonial) => {
                    vec![Action::SetTestimonial(testimonial.clone()), Action::FadeTestimonial(true)]
                }
                None => Vec::new(),
            },
            Task::CounterTick(counter) => self.tick_counter(*counter),
            Task::RevealHero(index) => vec![Action::RevealHero(*index)],
        }
    }
}
