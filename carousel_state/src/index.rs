// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Current-slide bookkeeping.

use core::num::NonZeroUsize;

/// The single source of truth for "current slide".
///
/// The slide count is fixed at construction and is never zero, so
/// `current` is always a valid position in `0..count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideIndex {
    current: usize,
    count: NonZeroUsize,
}

impl SlideIndex {
    /// Creates an index over `count` slides, starting at the first one.
    #[must_use]
    pub fn new(count: NonZeroUsize) -> Self {
        Self { current: 0, count }
    }

    /// Returns the current slide position.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the number of slides.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Returns the position of the last slide.
    #[must_use]
    pub fn last(&self) -> usize {
        self.count.get() - 1
    }

    /// Clamps an arbitrary requested position into `0..count`.
    ///
    /// Negative requests land on the first slide and requests past the end
    /// land on the last one. Navigation never wraps.
    #[must_use]
    pub fn clamp(&self, requested: isize) -> usize {
        if requested <= 0 {
            return 0;
        }
        // `requested` is positive here, so the conversion is lossless.
        requested.unsigned_abs().min(self.last())
    }

    /// Clamps `requested` and makes it current, returning the new position.
    pub fn set(&mut self, requested: isize) -> usize {
        self.current = self.clamp(requested);
        self.current
    }

    /// Returns `true` when the first slide is current.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    /// Returns `true` when the last slide is current.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current == self.last()
    }

    /// Returns the current position as a signed value for relative requests.
    #[must_use]
    pub(crate) fn signed_current(&self) -> isize {
        // Slide counts come from host element lists and stay far below `isize::MAX`.
        isize::try_from(self.current).unwrap_or(isize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(count: usize) -> SlideIndex {
        SlideIndex::new(NonZeroUsize::new(count).unwrap())
    }

    #[test]
    fn starts_at_first_slide() {
        let idx = index(5);
        assert_eq!(idx.current(), 0);
        assert_eq!(idx.count(), 5);
        assert!(idx.is_first());
        assert!(!idx.is_last());
    }

    #[test]
    fn clamp_is_identity_in_range() {
        let idx = index(5);
        for i in 0..5_isize {
            assert_eq!(idx.clamp(i), i.unsigned_abs(), "in-range {i} must pass through");
        }
    }

    #[test]
    fn clamp_saturates_out_of_range() {
        let idx = index(5);
        assert_eq!(idx.clamp(-1), 0);
        assert_eq!(idx.clamp(isize::MIN), 0);
        assert_eq!(idx.clamp(5), 4);
        assert_eq!(idx.clamp(isize::MAX), 4);
    }

    #[test]
    fn single_slide_is_first_and_last() {
        let mut idx = index(1);
        assert!(idx.is_first());
        assert!(idx.is_last());
        assert_eq!(idx.set(3), 0);
        assert_eq!(idx.set(-3), 0);
    }

    #[test]
    fn set_stores_clamped_value() {
        let mut idx = index(3);
        assert_eq!(idx.set(2), 2);
        assert!(idx.is_last());
        assert_eq!(idx.set(7), 2);
        assert_eq!(idx.set(1), 1);
        assert_eq!(idx.signed_current(), 1);
    }
}
