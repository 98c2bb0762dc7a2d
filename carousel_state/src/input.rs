// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter from [`ui_events`] pointer and keyboard events to carousel navigation.
//!
//! The adapter owns pointer capture: the pointer that starts a drag owns it
//! until it lifts or is cancelled, and events from any other pointer are
//! ignored in the meantime.
//!
//! ```rust,no_run
//! use carousel_state::input::InputAdapter;
//! # use carousel_state::{Carousel, ManualTimer};
//! # use carousel_state::render::Surface;
//! # use ui_events::{keyboard::KeyboardEvent, pointer::PointerEvent};
//! # fn route<S: Surface>(
//! #     carousel: &mut Carousel<S, ManualTimer>,
//! #     pointer: &PointerEvent,
//! #     key: &KeyboardEvent,
//! # ) {
//! let mut input = InputAdapter::new();
//!
//! // Pointer events from the viewport.
//! input.pointer(carousel, pointer);
//!
//! // Keyboard events, with the host's answer to "is focus inside the carousel?".
//! let outcome = input.keyboard(carousel, key, true);
//! if outcome.prevent_default {
//!     // Suppress the platform's default handling of the key.
//! }
//! # }
//! ```

use ui_events::keyboard::{Key, KeyboardEvent, NamedKey};
use ui_events::pointer::{PointerButton, PointerEvent, PointerId, PointerInfo};

use crate::carousel::{Carousel, KeyOutcome, NavKey};
use crate::lock::UnlockScheduler;
use crate::render::Surface;

/// Maps a key-down to the navigation key it stands for.
///
/// Key releases and every other key map to `None`.
#[must_use]
pub fn nav_key(event: &KeyboardEvent) -> Option<NavKey> {
    if !event.state.is_down() {
        return None;
    }
    match event.key {
        Key::Named(NamedKey::ArrowLeft) => Some(NavKey::ArrowLeft),
        Key::Named(NamedKey::ArrowRight) => Some(NavKey::ArrowRight),
        _ => None,
    }
}

/// The pointer that owns the live drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Captured {
    pointer_id: Option<PointerId>,
}

impl Captured {
    fn owns(&self, info: &PointerInfo) -> bool {
        self.pointer_id == info.pointer_id
    }
}

/// Routes `ui-events` input into a [`Carousel`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputAdapter {
    captured: Option<Captured>,
}

impl InputAdapter {
    /// Creates an adapter with no captured pointer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a pointer is captured for a drag.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.captured.is_some()
    }

    /// Feeds a pointer event from the carousel's viewport.
    ///
    /// Returns `true` if the event was consumed by the drag gesture.
    pub fn pointer<S: Surface, T: UnlockScheduler>(
        &mut self,
        carousel: &mut Carousel<S, T>,
        event: &PointerEvent,
    ) -> bool {
        match event {
            PointerEvent::Down(e) => {
                if self.captured.is_some()
                    || !matches!(e.button, None | Some(PointerButton::Primary))
                {
                    return false;
                }
                if carousel.drag_start(e.state.logical_point()) {
                    self.captured = Some(Captured {
                        pointer_id: e.pointer.pointer_id,
                    });
                    true
                } else {
                    false
                }
            }
            PointerEvent::Move(e) => match self.captured {
                Some(owner) if owner.owns(&e.pointer) => {
                    carousel.drag_move(e.current.logical_point())
                }
                _ => false,
            },
            PointerEvent::Up(e) => match self.captured {
                Some(owner) if owner.owns(&e.pointer) => {
                    self.captured = None;
                    // The release position is not a move; the drag resolves on
                    // the last recorded one.
                    carousel.drag_end().is_some()
                }
                _ => false,
            },
            PointerEvent::Cancel(info) => match self.captured {
                Some(owner) if owner.owns(info) => {
                    self.captured = None;
                    carousel.drag_cancel()
                }
                _ => false,
            },
            _ => false,
        }
    }

    /// Feeds a keyboard event.
    ///
    /// `focus_within` tells whether the carousel's surface or one of its
    /// descendants currently holds focus.
    pub fn keyboard<S: Surface, T: UnlockScheduler>(
        &mut self,
        carousel: &mut Carousel<S, T>,
        event: &KeyboardEvent,
        focus_within: bool,
    ) -> KeyOutcome {
        match nav_key(event) {
            Some(key) => carousel.key(key, focus_within),
            None => KeyOutcome::default(),
        }
    }
}
