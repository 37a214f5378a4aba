//! Testimonial carousel state.

#[cfg(test)]
#[path = "testimonial_test.rs"]
mod testimonial_test;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
}

impl Testimonial {
    #[must_use]
    pub fn new(quote: &str, author: &str) -> Self {
        Self { quote: quote.to_owned(), author: author.to_owned() }
    }

    /// Author line as rendered under the quote.
    #[must_use]
    pub fn author_line(&self) -> String {
        format!("_ {}", self.author)
    }
}

/// The three testimonials shipped with the stock page.
#[must_use]
pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "I am very helped by this E-wallet application , my days are very easy to use this application and its very helpful in my life , even I can pay a short time 💰",
            "Aria Zinanrio",
        ),
        Testimonial::new(
            "This productivity dashboard has completely transformed how I manage my daily tasks. The interface is intuitive and the features are exactly what I needed.",
            "Sarah Johnson",
        ),
        Testimonial::new(
            "The collaboration features are outstanding. Our team's efficiency has improved by 40% since we started using Biccas.",
            "Michael Chen",
        ),
    ]
}

/// Index into a fixed testimonial list. The page starts on entry 0, which the
/// markup already shows.
#[derive(Debug, Clone, Default)]
pub struct TestimonialRotator {
    items: Vec<Testimonial>,
    index: usize,
}

impl TestimonialRotator {
    #[must_use]
    pub fn new(items: Vec<Testimonial>) -> Self {
        Self { items, index: 0 }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Move to the next testimonial, wrapping at the end. Returns `false` for
    /// an empty list.
    pub fn advance(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.index = (self.index + 1) % self.items.len();
        true
    }

    #[must_use]
    pub fn current(&self) -> Option<&Testimonial> {
        self.items.get(self.index)
    }
}
