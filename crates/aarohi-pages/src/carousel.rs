//! Wrapping slide index for carousels and slideshows.

/// Current position in a fixed finite slide sequence.
///
/// The index is always in `[0, len)`; `next` and `previous` wrap modularly.
/// A zero-length carousel is inert: the index stays 0 and navigation is a
/// no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Creates a carousel over a sequence of the given length, at index 0.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// The current slide index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The sequence length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advances one slide, wrapping from the last back to the first.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Steps back one slide, wrapping from the first to the last.
    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jumps directly to the indicator at `index`.
    ///
    /// Indicators are rendered one per slide, so a clicked index is in range
    /// by construction; out-of-range values are clamped into the sequence.
    pub fn jump_to(&mut self, index: usize) {
        if self.len > 0 {
            self.index = index.min(self.len - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_previous_from_start_wraps_to_end() {
        let mut carousel = Carousel::new(5);
        assert_eq!(carousel.index(), 0);
        carousel.previous();
        assert_eq!(carousel.index(), 4);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_jump_to_sets_exactly() {
        let mut carousel = Carousel::new(5);
        carousel.jump_to(3);
        assert_eq!(carousel.index(), 3);
        carousel.jump_to(0);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.previous();
        carousel.jump_to(7);
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_empty());
    }

    proptest! {
        #[test]
        fn prop_next_n_times_returns_to_start(len in 1usize..64, start in 0usize..64) {
            let mut carousel = Carousel::new(len);
            carousel.jump_to(start % len);
            let origin = carousel.index();
            for _ in 0..len {
                carousel.next();
            }
            prop_assert_eq!(carousel.index(), origin);
        }

        #[test]
        fn prop_previous_n_times_returns_to_start(len in 1usize..64, start in 0usize..64) {
            let mut carousel = Carousel::new(len);
            carousel.jump_to(start % len);
            let origin = carousel.index();
            for _ in 0..len {
                carousel.previous();
            }
            prop_assert_eq!(carousel.index(), origin);
        }

        #[test]
        fn prop_index_always_in_range(len in 1usize..64, steps in proptest::collection::vec(0u8..3, 0..128)) {
            let mut carousel = Carousel::new(len);
            for step in steps {
                match step {
                    0 => carousel.next(),
                    1 => carousel.previous(),
                    _ => carousel.jump_to(len / 2),
                }
                prop_assert!(carousel.index() < len);
            }
        }
    }
}
