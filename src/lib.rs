//! Interactive behavior for the Biccas landing page.
//!
//! This crate is compiled to WebAssembly and attached to a static HTML page.
//! It wires the navigation drawer, smooth anchors, the pricing toggle,
//! fade-in cards, form validation toasts, the testimonial rotator, stat
//! counters, the scroll-progress bar and lazy asset images. Every behavior is
//! optional: markup the page lacks is skipped without error.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::PageCore`]: all page state, events in, [`controller::Action`]s out |
//! | [`schedule`] | Deterministic timer queue for driving the core without a browser |
//! | [`config`] | Tunable constants, optionally read from inline JSON |
//! | [`nav`] | Mobile menu state and anchor resolution |
//! | [`scroll`] | Navbar style and progress percentage |
//! | [`pricing`] | Monthly/yearly display amounts |
//! | [`forms`] | Email and message validation |
//! | [`notification`] | Single-slot toast state |
//! | [`testimonial`] | Testimonial list and rotation |
//! | [`counter`] | Count-up animation for stats |
//! | [`reveal`] | One-shot fade-in tracking and the hero stagger |
//! | [`images`] | Lazy cross-fade for asset images |
//! | [`particles`] | Optional hero particles |
//! | [`styles`] | Inline CSS the controller writes |
//! | [`utils`] | Debounce, throttle, number formatting, viewport check |
//! | [`consts`] | Selector contract with the host page |
//! | `dom` | Browser host (`hydrate` feature only) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod counter;
pub mod forms;
pub mod images;
pub mod nav;
pub mod notification;
pub mod particles;
pub mod pricing;
pub mod reveal;
pub mod schedule;
pub mod scroll;
pub mod styles;
pub mod testimonial;
pub mod utils;

#[cfg(feature = "hydrate")]
pub mod dom;

/// WASM entry point: install the panic hook and logger, then mount once the
/// document is interactive.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already initialized: {err}").into());
    }
    dom::mount_when_ready();
}
