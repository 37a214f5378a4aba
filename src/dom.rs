//! Browser host for [`PageCore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Discovers the page's markup once, attaches DOM listeners and intersection
//! observers, and applies the [`Action`]s the core returns. Timers become
//! `gloo-timers` callbacks that feed [`Task`]s back into the core. All closures
//! live for the page lifetime and are leaked with `forget`.
//!
//! TRADE-OFFS
//! ==========
//! A failing DOM call is logged and skipped; nothing here aborts the mount.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::{debug, info, warn};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, HtmlImageElement, HtmlInputElement,
    HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::config::LandingConfig;
use crate::consts::*;
use crate::controller::{Action, PageCore, Task};
use crate::forms::{FormFields, FormKind, generic_form_kind};
use crate::notification::{Notification, NotificationId};
use crate::particles::scatter;
use crate::scroll::{ScrollMetrics, progress_width};
use crate::styles::{CLOSE_BUTTON_CSS, PAGE_CSS, PARTICLE_CSS, PROGRESS_BAR_CSS, notification_css};

// =============================================================
// Entry
// =============================================================

/// Mount now if the document is already interactive, otherwise on
/// `DOMContentLoaded`.
pub fn mount_when_ready() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("no document; landing behaviors disabled");
        return;
    };
    if document.ready_state() == "loading" {
        listen(&document, "DOMContentLoaded", |_| mount());
    } else {
        mount();
    }
}

/// Attach every behavior to the current document.
pub fn mount() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let config = read_config(&document);
    append_style(&document, PAGE_CSS);

    let mut core = PageCore::new(config);
    let elements = Elements::discover(&document, &mut core);
    let already_loaded = document.ready_state() == "complete";

    let page = Rc::new(Page {
        window,
        document,
        core: RefCell::new(core),
        elements,
        progress_bar: RefCell::new(None),
        notification: RefCell::new(None),
        intervals: RefCell::new(HashMap::new()),
        particle_style_added: Cell::new(false),
    });

    wire_menu(&page);
    wire_anchors(&page);
    wire_scroll(&page);
    wire_billing(&page);
    wire_forms(&page);
    wire_testimonials(&page);
    observe_cards(&page);
    observe_counters(&page);
    observe_images(&page);

    if already_loaded {
        page.handle(PageCore::on_load);
    } else {
        let on_load = Rc::clone(&page);
        listen(&page.window, "load", move |_| on_load.handle(PageCore::on_load));
    }

    let els = &page.elements;
    info!(
        "landing page ready: menu={} billing_buttons={} cards={} forms={} counters={} images={} testimonials={}",
        els.hamburger.is_some() && els.nav_menu.is_some(),
        els.billing_buttons.len(),
        els.cards.len(),
        els.forms.len(),
        els.counters.len(),
        els.images.len(),
        els.testimonial_button.is_some(),
    );
}

fn read_config(document: &Document) -> LandingConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return LandingConfig::default();
    };
    match LandingConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            warn!("{err}; using defaults");
            LandingConfig::default()
        }
    }
}

// =============================================================
// Element discovery
// =============================================================

struct Elements {
    hamburger: Option<Element>,
    nav_menu: Option<Element>,
    nav_links: Vec<Element>,
    anchors: Vec<Element>,
    navbar: Option<Element>,
    billing_buttons: Vec<Element>,
    amounts: Vec<Element>,
    save_texts: Vec<Element>,
    cards: Vec<Element>,
    forms: Vec<(Element, FormKind)>,
    testimonial_button: Option<Element>,
    testimonial_quote: Option<Element>,
    testimonial_author: Option<Element>,
    counters: Vec<Element>,
    images: Vec<HtmlImageElement>,
    hero: Vec<Option<Element>>,
    hero_section: Option<Element>,
}

impl Elements {
    /// Query the page and register cards, counters and images with `core`.
    /// Indices in the returned vectors match the indices `core` hands out.
    fn discover(document: &Document, core: &mut PageCore) -> Self {
        let cards = query_all(document, REVEAL_SELECTOR);
        for card in &cards {
            core.register_reveal();
            set_style(card, "opacity", "0");
            set_style(card, "transform", HIDDEN_OFFSET);
            set_style(card, "transition", SLIDE_TRANSITION);
        }

        let mut counters = Vec::new();
        for el in query_all(document, COUNTER_SELECTOR) {
            let text = el.text_content().unwrap_or_default();
            if core.register_counter(&text).is_some() {
                el.set_text_content(Some("0"));
                counters.push(el);
            } else {
                debug!("stat {text:?} has no positive value, not animating");
            }
        }

        let mut images = Vec::new();
        for el in query_all(document, IMAGE_SELECTOR) {
            let Ok(img) = el.dyn_into::<HtmlImageElement>() else {
                continue;
            };
            let authored = img.get_attribute("src").unwrap_or_default();
            if core.register_image(&authored).is_some() {
                images.push(img);
            }
        }

        let mut forms: Vec<(Element, FormKind)> = query_all(document, FORM_SELECTOR)
            .into_iter()
            .filter_map(|form| {
                let in_newsletter = match form.closest(NEWSLETTER_SELECTOR) {
                    Ok(found) => found.is_some(),
                    Err(err) => {
                        warn!("closest({NEWSLETTER_SELECTOR}) failed: {err:?}");
                        false
                    }
                };
                generic_form_kind(in_newsletter).map(|kind| (form, kind))
            })
            .collect();
        if let Some(newsletter) = query(document, NEWSLETTER_SELECTOR) {
            forms.push((newsletter, FormKind::Newsletter));
        }

        Self {
            hamburger: query(document, HAMBURGER_SELECTOR),
            nav_menu: query(document, NAV_MENU_SELECTOR),
            nav_links: query_all(document, NAV_LINK_SELECTOR),
            anchors: query_all(document, ANCHOR_LINK_SELECTOR),
            navbar: query(document, NAVBAR_SELECTOR),
            billing_buttons: query_all(document, BILLING_BUTTON_SELECTOR),
            amounts: query_all(document, AMOUNT_SELECTOR),
            save_texts: query_all(document, SAVE_TEXT_SELECTOR),
            cards,
            forms,
            testimonial_button: query(document, TESTIMONIAL_BUTTON_SELECTOR),
            testimonial_quote: query(document, TESTIMONIAL_QUOTE_SELECTOR),
            testimonial_author: query(document, TESTIMONIAL_AUTHOR_SELECTOR),
            counters,
            images,
            hero: HERO_SELECTORS.iter().map(|sel| query(document, sel)).collect(),
            hero_section: query(document, HERO_SECTION_SELECTOR),
        }
    }
}

// =============================================================
// Page host
// =============================================================

struct Page {
    window: Window,
    document: Document,
    core: RefCell<PageCore>,
    elements: Elements,
    progress_bar: RefCell<Option<Element>>,
    notification: RefCell<Option<(NotificationId, Element)>>,
    intervals: RefCell<HashMap<Task, Interval>>,
    particle_style_added: Cell<bool>,
}

impl Page {
    /// Run one core handler and apply what it returns. The core borrow ends
    /// before any action runs.
    fn handle(self: &Rc<Self>, handler: impl FnOnce(&mut PageCore) -> Vec<Action>) {
        let actions = handler(&mut *self.core.borrow_mut());
        for action in actions {
            self.apply(action);
        }
    }

    fn run_task(self: &Rc<Self>, task: &Task) {
        self.handle(|core| core.on_timer(task));
    }

    #[allow(clippy::too_many_lines)]
    fn apply(self: &Rc<Self>, action: Action) {
        let els = &self.elements;
        match action {
            Action::SetMenuOpen(open) => {
                for el in els.hamburger.iter().chain(els.nav_menu.iter()) {
                    set_class(el, ACTIVE_CLASS, open);
                }
            }
            Action::ScrollTo(id) => match self.document.get_element_by_id(&id) {
                Some(target) => {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
                None => debug!("no element with id {id:?}"),
            },
            Action::StyleNavbar(style) => {
                if let Some(navbar) = &els.navbar {
                    set_style(navbar, "box-shadow", style.box_shadow());
                    set_style(navbar, "background", style.background());
                }
            }
            Action::CreateProgressBar => self.create_progress_bar(),
            Action::SetProgress(percent) => {
                if let Some(bar) = self.progress_bar.borrow().as_ref() {
                    set_style(bar, "width", &progress_width(percent));
                }
            }
            Action::SelectBilling(index) => {
                for (i, button) in els.billing_buttons.iter().enumerate() {
                    set_class(button, ACTIVE_CLASS, i == index);
                }
            }
            Action::SetAmounts(amounts) => {
                for (el, amount) in els.amounts.iter().zip(amounts) {
                    el.set_text_content(Some(&amount.to_string()));
                }
            }
            Action::ShowSaveText(visible) => {
                for el in &els.save_texts {
                    set_style(el, "display", if visible { "block" } else { "none" });
                }
            }
            Action::RevealCard(index) => {
                if let Some(card) = els.cards.get(index) {
                    show_slid_in(card);
                }
            }
            Action::ClearNotifications => {
                for el in query_all(&self.document, NOTIFICATION_SELECTOR) {
                    el.remove();
                }
                self.notification.borrow_mut().take();
            }
            Action::ShowNotification(notification) => self.show_notification(&notification),
            Action::RemoveNotification(id) => {
                let mut slot = self.notification.borrow_mut();
                if slot.as_ref().is_some_and(|(shown, _)| *shown == id) {
                    if let Some((_, el)) = slot.take() {
                        el.remove();
                    }
                }
            }
            Action::ResetForm(index) => {
                if let Some(form) = els.forms.get(index).and_then(|(el, _)| el.dyn_ref::<HtmlFormElement>()) {
                    form.reset();
                }
            }
            Action::ClearEmail(index) => {
                if let Some(input) = els
                    .forms
                    .get(index)
                    .and_then(|(el, _)| query_in(el, EMAIL_INPUT_SELECTOR))
                    .and_then(|el| el.dyn_into::<HtmlInputElement>().into_iter().next())
                {
                    input.set_value("");
                }
            }
            Action::FadeTestimonial(visible) => {
                let opacity = if visible { "1" } else { "0" };
                for el in els.testimonial_quote.iter().chain(els.testimonial_author.iter()) {
                    set_style(el, "opacity", opacity);
                }
            }
            Action::SetTestimonial(testimonial) => {
                if let (Some(quote), Some(author)) = (&els.testimonial_quote, &els.testimonial_author) {
                    quote.set_text_content(Some(&testimonial.quote));
                    author.set_text_content(Some(&testimonial.author_line()));
                }
            }
            Action::SetCounter { counter, value } => {
                if let Some(el) = els.counters.get(counter) {
                    el.set_text_content(Some(&value.to_string()));
                }
            }
            Action::FadeOutImage(index) => {
                if let Some(img) = els.images.get(index) {
                    set_style(img, "opacity", "0");
                    set_style(img, "transition", IMAGE_TRANSITION);
                }
            }
            Action::PreloadImage { image, src } => self.preload_image(image, &src),
            Action::ShowImage { image, src } => {
                if let Some(img) = els.images.get(image) {
                    img.set_src(&src);
                    set_style(img, "opacity", "1");
                }
            }
            Action::MarkLoaded => {
                if let Some(body) = self.document.body() {
                    set_class(&body, LOADED_CLASS, true);
                }
            }
            Action::HideHero(index) => {
                if let Some(Some(el)) = els.hero.get(index) {
                    set_style(el, "opacity", "0");
                    set_style(el, "transform", HIDDEN_OFFSET);
                    set_style(el, "transition", SLIDE_TRANSITION);
                }
            }
            Action::RevealHero(index) => {
                if let Some(Some(el)) = els.hero.get(index) {
                    show_slid_in(el);
                }
            }
            Action::SpawnParticles(count) => self.spawn_particles(count),
            Action::Schedule { delay_ms, task } => {
                let page = Rc::clone(self);
                Timeout::new(delay_ms, move || page.run_task(&task)).forget();
            }
            Action::Every { interval_ms, task } => {
                let page = Rc::clone(self);
                let key = task.clone();
                let interval = Interval::new(interval_ms, move || page.run_task(&task));
                self.intervals.borrow_mut().insert(key, interval);
            }
            Action::Cancel(task) => {
                // Cancel usually arrives from inside the interval's own
                // callback, so the handle is dropped on the next tick.
                if let Some(interval) = self.intervals.borrow_mut().remove(&task) {
                    Timeout::new(0, move || drop(interval)).forget();
                }
            }
        }
    }

    fn create_progress_bar(&self) {
        let bar = match query(&self.document, PROGRESS_BAR_SELECTOR) {
            Some(existing) => Some(existing),
            None => self.create_element("div").and_then(|bar| {
                bar.set_class_name(PROGRESS_BAR_CLASS);
                set_attr(&bar, "style", PROGRESS_BAR_CSS);
                self.append_to_body(&bar).then_some(bar)
            }),
        };
        *self.progress_bar.borrow_mut() = bar;
    }

    fn show_notification(self: &Rc<Self>, notification: &Notification) {
        let Some(toast) = self.create_element("div") else {
            return;
        };
        toast.set_class_name(&notification.class_name());
        set_attr(&toast, "style", &notification_css(notification.severity));

        if let Some(text) = self.create_element("span") {
            text.set_text_content(Some(&notification.message));
            append(&toast, &text);
        }
        if let Some(close) = self.create_element("button") {
            close.set_text_content(Some("\u{d7}"));
            set_attr(&close, "style", CLOSE_BUTTON_CSS);
            let page = Rc::clone(self);
            let id = notification.id;
            listen(&close, "click", move |_| page.handle(|core| core.on_notification_close(id)));
            append(&toast, &close);
        }

        if self.append_to_body(&toast) {
            *self.notification.borrow_mut() = Some((notification.id, toast));
        }
    }

    fn preload_image(self: &Rc<Self>, image: usize, src: &str) {
        let preload = match HtmlImageElement::new() {
            Ok(img) => img,
            Err(err) => {
                warn!("image preload unavailable: {err:?}");
                return;
            }
        };
        let page = Rc::clone(self);
        let on_load = Closure::<dyn FnMut()>::new(move || page.handle(|core| core.on_image_loaded(image)));
        preload.set_onload(Some(on_load.as_ref().unchecked_ref()));
        on_load.forget();
        preload.set_src(src);
    }

    fn spawn_particles(&self, count: usize) {
        let Some(section) = &self.elements.hero_section else {
            return;
        };
        for particle in scatter(count, js_sys::Math::random) {
            if let Some(dot) = self.create_element("div") {
                set_attr(&dot, "style", &particle.css());
                append(section, &dot);
            }
        }
        if !self.particle_style_added.replace(true) {
            append_style(&self.document, PARTICLE_CSS);
        }
    }

    fn create_element(&self, tag: &str) -> Option<Element> {
        match self.document.create_element(tag) {
            Ok(el) => Some(el),
            Err(err) => {
                warn!("create <{tag}> failed: {err:?}");
                None
            }
        }
    }

    fn append_to_body(&self, el: &Element) -> bool {
        match self.document.body() {
            Some(body) => append(&body, el),
            None => false,
        }
    }
}

// =============================================================
// Wiring
// =============================================================

fn wire_menu(page: &Rc<Page>) {
    let els = &page.elements;
    let (Some(hamburger), Some(_)) = (&els.hamburger, &els.nav_menu) else {
        return;
    };
    let on_toggle = Rc::clone(page);
    listen(hamburger, "click", move |_| on_toggle.handle(PageCore::on_menu_toggle));
    for link in &els.nav_links {
        let on_link = Rc::clone(page);
        listen(link, "click", move |_| on_link.handle(PageCore::on_nav_link));
    }
}

fn wire_anchors(page: &Rc<Page>) {
    for link in &page.elements.anchors {
        let on_click = Rc::clone(page);
        let href = link.get_attribute("href").unwrap_or_default();
        listen(link, "click", move |event: Event| {
            event.prevent_default();
            on_click.handle(|core| core.on_anchor_click(&href));
        });
    }
}

fn wire_scroll(page: &Rc<Page>) {
    let on_scroll = Rc::clone(page);
    listen(&page.window, "scroll", move |_| {
        let metrics = scroll_metrics(&on_scroll.window, &on_scroll.document);
        on_scroll.handle(|core| core.on_scroll(metrics));
    });
}

fn wire_billing(page: &Rc<Page>) {
    for (index, button) in page.elements.billing_buttons.iter().enumerate() {
        let on_click = Rc::clone(page);
        let source = button.clone();
        listen(button, "click", move |_| {
            let label = source.text_content().unwrap_or_default();
            on_click.handle(|core| core.on_billing_click(index, &label));
        });
    }
}

fn wire_forms(page: &Rc<Page>) {
    for (index, (form, kind)) in page.elements.forms.iter().enumerate() {
        let on_submit = Rc::clone(page);
        let source = form.clone();
        let kind = *kind;
        listen(form, "submit", move |event: Event| {
            event.prevent_default();
            let fields = read_fields(&source, kind);
            on_submit.handle(|core| core.on_submit(index, kind, &fields));
        });
    }
}

fn wire_testimonials(page: &Rc<Page>) {
    if let Some(button) = &page.elements.testimonial_button {
        let on_click = Rc::clone(page);
        let els = &page.elements;
        let targets_present = els.testimonial_quote.is_some() && els.testimonial_author.is_some();
        listen(button, "click", move |_| on_click.handle(|core| core.on_testimonial_next(targets_present)));
    }
}

fn observe_cards(page: &Rc<Page>) {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let on_visible = Rc::clone(page);
    observe(&page.elements.cards, Some(&init), false, move |index| {
        on_visible.handle(|core| core.on_reveal_visible(index));
    });
}

fn observe_counters(page: &Rc<Page>) {
    let on_visible = Rc::clone(page);
    observe(&page.elements.counters, None, false, move |index| {
        on_visible.handle(|core| core.on_counter_visible(index));
    });
}

fn observe_images(page: &Rc<Page>) {
    let targets: Vec<Element> = page.elements.images.iter().map(|img| img.clone().unchecked_into()).collect();
    let on_visible = Rc::clone(page);
    observe(&targets, None, true, move |index| {
        on_visible.handle(|core| core.on_image_visible(index));
    });
}

/// Observe `targets` and call `on_visible` with the index of each element that
/// starts intersecting. With `once`, an element is unobserved after its first
/// hit.
fn observe(
    targets: &[Element],
    init: Option<&IntersectionObserverInit>,
    once: bool,
    mut on_visible: impl FnMut(usize) + 'static,
) {
    if targets.is_empty() {
        return;
    }
    let watched = targets.to_vec();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if once {
                    observer.unobserve(&target);
                }
                if let Some(index) = watched.iter().position(|el| *el == target) {
                    on_visible(index);
                }
            }
        },
    );
    let created = match init {
        Some(init) => IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init),
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref()),
    };
    match created {
        Ok(observer) => {
            for target in targets {
                observer.observe(target);
            }
            callback.forget();
        }
        Err(err) => warn!("IntersectionObserver unavailable: {err:?}"),
    }
}

// =============================================================
// DOM helpers
// =============================================================

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        warn!("failed to listen for {event}: {err:?}");
        return;
    }
    closure.forget();
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            warn!("bad selector {selector}: {err:?}");
            None
        }
    }
}

fn query_in(root: &Element, selector: &str) -> Option<Element> {
    match root.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            warn!("bad selector {selector}: {err:?}");
            None
        }
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            warn!("bad selector {selector}: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .flat_map(|node| node.dyn_into::<Element>())
        .collect()
}

fn read_fields(form: &Element, kind: FormKind) -> FormFields {
    let email = query_in(form, EMAIL_INPUT_SELECTOR)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().into_iter().next())
        .map(|input| input.value());
    let message = match kind {
        FormKind::Contact => query_in(form, MESSAGE_SELECTOR)
            .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().into_iter().next())
            .map(|area| area.value()),
        FormKind::Newsletter => None,
    };
    FormFields { email, message }
}

fn scroll_metrics(window: &Window, document: &Document) -> ScrollMetrics {
    let root = document.document_element();
    let body_top = document.body().map_or(0, |body| body.scroll_top());
    let root_top = root.as_ref().map_or(0, Element::scroll_top);
    let scroll_top = if body_top != 0 { body_top } else { root_top };
    ScrollMetrics {
        scroll_y: window.scroll_y().unwrap_or_default(),
        scroll_top: f64::from(scroll_top),
        scroll_height: f64::from(root.as_ref().map_or(0, Element::scroll_height)),
        client_height: f64::from(root.as_ref().map_or(0, Element::client_height)),
    }
}

fn show_slid_in(el: &Element) {
    set_style(el, "opacity", "1");
    set_style(el, "transform", SHOWN_OFFSET);
}

fn set_style(el: &Element, property: &str, value: &str) {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(err) = html.style().set_property(property, value) {
        warn!("failed to set {property}: {err:?}");
    }
}

fn set_class(el: &Element, class: &str, on: bool) {
    if let Err(err) = el.class_list().toggle_with_force(class, on) {
        warn!("failed to toggle class {class}: {err:?}");
    }
}

fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(err) = el.set_attribute(name, value) {
        warn!("failed to set {name}: {err:?}");
    }
}

fn append(parent: &Element, child: &Element) -> bool {
    match parent.append_child(child) {
        Ok(_) => true,
        Err(err) => {
            warn!("append failed: {err:?}");
            false
        }
    }
}

fn append_style(document: &Document, css: &str) {
    let Some(head) = document.head() else {
        return;
    };
    match document.create_element("style") {
        Ok(style) => {
            style.set_text_content(Some(css));
            append(&head, &style);
        }
        Err(err) => warn!("create <style> failed: {err:?}"),
    }
}
