//! Lazy cross-fade for asset images.
//!
//! Matching images stay as authored until they scroll into view; then they
//! fade out, the same source is preloaded off-screen, and the image fades back
//! in once the preload completes.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImagePhase {
    #[default]
    Waiting,
    Preloading,
    Shown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyImage {
    pub src: String,
    pub phase: ImagePhase,
}

#[derive(Debug, Clone, Default)]
pub struct LazyImages {
    marker: String,
    images: Vec<LazyImage>,
}

impl LazyImages {
    #[must_use]
    pub fn new(marker: &str) -> Self {
        Self { marker: marker.to_owned(), images: Vec::new() }
    }

    #[must_use]
    pub fn matches(&self, src: &str) -> bool {
        !self.marker.is_empty() && src.contains(&self.marker)
    }

    /// Track an image if its source follows the asset-path convention.
    pub fn register(&mut self, src: &str) -> Option<usize> {
        if !self.matches(src) {
            return None;
        }
        self.images.push(LazyImage { src: src.to_owned(), phase: ImagePhase::Waiting });
        Some(self.images.len() - 1)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LazyImage> {
        self.images.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// The image entered the viewport. Returns the source to preload on the
    /// first call only.
    pub fn begin_preload(&mut self, index: usize) -> Option<String> {
        let image = self.images.get_mut(index)?;
        if image.phase != ImagePhase::Waiting {
            return None;
        }
        image.phase = ImagePhase::Preloading;
        Some(image.src.clone())
    }

    /// The off-screen copy finished loading.
    pub fn finish_preload(&mut self, index: usize) -> Option<String> {
        let image = self.images.get_mut(index)?;
        if image.phase != ImagePhase::Preloading {
            return None;
        }
        image.phase = ImagePhase::Shown;
        Some(image.src.clone())
    }
}
