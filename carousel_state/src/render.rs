// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation sync: derive every visual and accessibility attribute from the current index.
//!
//! [`Frame::resting`] is a pure function of `(index, count)`. [`Frame::apply`]
//! writes a frame to a [`Surface`]. Applying the same frame twice leaves the
//! surface in the same observable state, so re-rendering is always safe.
//!
//! ```
//! use carousel_state::render::{ControlState, Frame, Transition};
//!
//! let frame = Frame::resting(2, 3);
//! assert_eq!(frame.track.transition, Transition::Eased);
//! assert!(frame.is_active(2));
//! assert_eq!(frame.next, ControlState::SUPPRESSED);
//! assert!(frame.continue_visible);
//! ```

use crate::gesture::resting_offset_percent;

/// How the track moves to a new offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Animate with the surface's eased transition.
    Eased,
    /// Jump immediately, with no transition (live drag feedback).
    Immediate,
}

/// Horizontal position of the slide track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackPosition {
    /// Offset in percent of the track's own width. Zero shows the first slide.
    pub offset_percent: f64,
    /// How the surface should move there.
    pub transition: Transition,
}

/// Attributes of one slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideState {
    /// Carries the active marker.
    pub active: bool,
    /// Hidden from assistive technology. Always `!active`.
    pub hidden: bool,
}

impl SlideState {
    /// State for a slide that is (or is not) the current one.
    #[must_use]
    pub fn new(active: bool) -> Self {
        Self {
            active,
            hidden: !active,
        }
    }
}

/// Attributes of a navigation control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlState {
    /// Non-interactive and flagged as disabled for assistive technology.
    pub disabled: bool,
    /// Visible (full opacity). `false` means zero opacity.
    pub visible: bool,
    /// Accepts pointer interaction.
    pub interactive: bool,
}

impl ControlState {
    /// Visible, interactive, enabled.
    pub const ENABLED: Self = Self {
        disabled: false,
        visible: true,
        interactive: true,
    };

    /// Visible but disabled.
    pub const DISABLED: Self = Self {
        disabled: true,
        visible: true,
        interactive: false,
    };

    /// Disabled and faded out; used for "next" while the continue affordance shows.
    pub const SUPPRESSED: Self = Self {
        disabled: true,
        visible: false,
        interactive: false,
    };
}

/// A complete snapshot of presentation state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Current slide.
    pub index: usize,
    /// Number of slides.
    pub count: usize,
    /// Track position.
    pub track: TrackPosition,
    /// "Previous" control.
    pub prev: ControlState,
    /// "Next" control.
    pub next: ControlState,
    /// Whether the optional "continue" affordance is shown (and interactive).
    pub continue_visible: bool,
}

impl Frame {
    /// The resting frame for `index` among `count` slides.
    #[must_use]
    pub fn resting(index: usize, count: usize) -> Self {
        let last = count.saturating_sub(1);
        let at_first = index == 0;
        let at_last = index >= last;

        let prev = if at_first {
            ControlState::DISABLED
        } else {
            ControlState::ENABLED
        };
        let next = if at_last {
            ControlState::SUPPRESSED
        } else {
            ControlState::ENABLED
        };

        Self {
            index,
            count,
            track: TrackPosition {
                offset_percent: resting_offset_percent(index, count),
                transition: Transition::Eased,
            },
            prev,
            next,
            continue_visible: at_last,
        }
    }

    /// Drops the continue affordance from this frame.
    ///
    /// Without the affordance, "next" on the last slide is merely disabled
    /// rather than faded out.
    #[must_use]
    pub fn without_continue(mut self) -> Self {
        if self.next == ControlState::SUPPRESSED {
            self.next = ControlState::DISABLED;
        }
        self.continue_visible = false;
        self
    }

    /// Replaces the track position, keeping every other attribute.
    #[must_use]
    pub fn with_track(mut self, track: TrackPosition) -> Self {
        self.track = track;
        self
    }

    /// Returns `true` if slide `i` is the current one.
    #[must_use]
    pub fn is_active(&self, i: usize) -> bool {
        i == self.index
    }

    /// Per-slide attributes, in slide order.
    pub fn slides(&self) -> impl Iterator<Item = SlideState> + '_ {
        (0..self.count).map(|i| SlideState::new(self.is_active(i)))
    }

    /// Writes the whole frame, track included, to `surface`.
    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_track(self.track);
        self.apply_attributes(surface);
    }

    /// Writes everything but the track position to `surface`.
    ///
    /// Used while a drag owns the track, so that a layout-only re-render does
    /// not fight the live drag offset.
    pub fn apply_attributes<S: Surface + ?Sized>(&self, surface: &mut S) {
        for (i, slide) in self.slides().enumerate() {
            surface.set_slide(i, slide);
        }
        surface.set_prev(self.prev);
        surface.set_next(self.next);
        surface.set_continue(self.continue_visible);
    }
}

/// The host surface a carousel is mounted on.
///
/// The slide list, viewport and track are required. The previous, next and
/// continue controls are optional: their setters default to no-ops, so a
/// surface without them simply does not override those methods. A surface
/// that does carry a continue affordance reports it through
/// [`Surface::has_continue`].
pub trait Surface {
    /// Number of slides. Fixed for the lifetime of the mount.
    fn slide_count(&self) -> usize;

    /// Current width of the draggable viewport, in pointer-event units.
    fn viewport_width(&self) -> f64;

    /// Moves the track.
    fn set_track(&mut self, track: TrackPosition);

    /// Updates the active marker and accessibility-hidden flag of slide `index`.
    fn set_slide(&mut self, index: usize, state: SlideState);

    /// Updates the "previous" control, if there is one.
    fn set_prev(&mut self, state: ControlState) {
        let _ = state;
    }

    /// Updates the "next" control, if there is one.
    fn set_next(&mut self, state: ControlState) {
        let _ = state;
    }

    /// Returns `true` if the surface carries a "continue" affordance.
    fn has_continue(&self) -> bool {
        false
    }

    /// Shows or hides the "continue" affordance, if there is one.
    fn set_continue(&mut self, visible: bool) {
        let _ = visible;
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn slide_count(&self) -> usize {
        (**self).slide_count()
    }

    fn viewport_width(&self) -> f64 {
        (**self).viewport_width()
    }

    fn set_track(&mut self, track: TrackPosition) {
        (**self).set_track(track);
    }

    fn set_slide(&mut self, index: usize, state: SlideState) {
        (**self).set_slide(index, state);
    }

    fn set_prev(&mut self, state: ControlState) {
        (**self).set_prev(state);
    }

    fn set_next(&mut self, state: ControlState) {
        (**self).set_next(state);
    }

    fn has_continue(&self) -> bool {
        (**self).has_continue()
    }

    fn set_continue(&mut self, visible: bool) {
        (**self).set_continue(visible);
    }
}
