//! Mobile menu state and same-page anchor resolution.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Element id targeted by a same-page link such as `#pricing`.
///
/// Returns `None` for anything that is not a fragment or for a bare `#`.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}
