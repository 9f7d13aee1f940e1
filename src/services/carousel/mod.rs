//! Cyclic image navigation for a single card.
//!
//! Wraps a fixed [`ImageSequence`] with a position that advances and
//! retreats with modular wraparound, plus a fullscreen presentation flag.

use crate::models::image::{ImageRef, ImageSequence};

/// Navigation state over one card's image sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselIndexer {
    images: ImageSequence,
    current: usize,
    fullscreen: bool,
}

impl CarouselIndexer {
    pub fn new(images: ImageSequence) -> Self {
        Self {
            images,
            current: 0,
            fullscreen: false,
        }
    }

    /// Move to the next image, wrapping from last back to first.
    pub fn advance(&mut self) {
        if !self.images.is_empty() {
            self.current = (self.current + 1) % self.images.len();
        }
    }

    /// Move to the previous image, wrapping from first back to last.
    pub fn retreat(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.current = if self.current == 0 {
            self.images.len() - 1
        } else {
            self.current - 1
        };
    }

    /// Flip the fullscreen flag. With no images there is no surface to
    /// expand, so the flag stays false.
    pub fn toggle_fullscreen(&mut self) {
        if !self.images.is_empty() {
            self.fullscreen = !self.fullscreen;
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Index of the current image; `None` for an empty sequence.
    pub fn current_index(&self) -> Option<usize> {
        if self.images.is_empty() {
            None
        } else {
            Some(self.current)
        }
    }

    pub fn current_image(&self) -> Option<&ImageRef> {
        self.images.get(self.current)
    }

    /// Whether previous/next controls should be shown at all.
    pub fn has_navigation(&self) -> bool {
        self.images.len() > 1
    }

    pub fn images(&self) -> &ImageSequence {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sequence_of(count: usize) -> ImageSequence {
        let images: Vec<ImageRef> = (0..count)
            .map(|i| ImageRef::new(format!("img-{i}.jpg")))
            .collect();
        ImageSequence::from_parts(None, &images)
    }

    #[test]
    fn advance_wraps_from_last_to_first() {
        let mut carousel = CarouselIndexer::new(sequence_of(3));
        let mut seen = Vec::new();
        for _ in 0..3 {
            carousel.advance();
            seen.push(carousel.current_index().unwrap());
        }
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn retreat_wraps_from_first_to_last() {
        let mut carousel = CarouselIndexer::new(sequence_of(3));
        carousel.retreat();
        assert_eq!(carousel.current_index(), Some(2));
        carousel.retreat();
        assert_eq!(carousel.current_index(), Some(1));
    }

    #[test]
    fn single_image_navigation_is_a_no_op() {
        let mut carousel = CarouselIndexer::new(sequence_of(1));
        for _ in 0..5 {
            carousel.advance();
            assert_eq!(carousel.current_index(), Some(0));
        }
        for _ in 0..5 {
            carousel.retreat();
            assert_eq!(carousel.current_index(), Some(0));
        }
        assert!(!carousel.has_navigation());
    }

    #[test]
    fn empty_sequence_has_no_index_and_no_fullscreen() {
        let mut carousel = CarouselIndexer::new(ImageSequence::new());
        carousel.advance();
        carousel.retreat();
        carousel.toggle_fullscreen();
        assert_eq!(carousel.current_index(), None);
        assert_eq!(carousel.current_image(), None);
        assert!(!carousel.is_fullscreen());
        assert!(!carousel.has_navigation());
    }

    #[test]
    fn fullscreen_toggle_preserves_index() {
        let mut carousel = CarouselIndexer::new(sequence_of(3));
        carousel.advance();
        carousel.toggle_fullscreen();
        assert!(carousel.is_fullscreen());
        assert_eq!(carousel.current_index(), Some(1));
        carousel.toggle_fullscreen();
        assert!(!carousel.is_fullscreen());
        assert_eq!(carousel.current_index(), Some(1));
    }

    #[test_case(2 ; "two images")]
    #[test_case(3 ; "three images")]
    #[test_case(7 ; "seven images")]
    fn full_cycle_returns_to_start(count: usize) {
        let mut carousel = CarouselIndexer::new(sequence_of(count));
        for _ in 0..count {
            carousel.advance();
        }
        assert_eq!(carousel.current_index(), Some(0));
        assert!(carousel.has_navigation());
    }

    #[test]
    fn current_image_follows_the_index() {
        let mut carousel = CarouselIndexer::new(sequence_of(3));
        assert_eq!(carousel.current_image().unwrap().url, "img-0.jpg");
        carousel.advance();
        assert_eq!(carousel.current_image().unwrap().url, "img-1.jpg");
    }
}
