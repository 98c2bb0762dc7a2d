// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=carousel_state --heading-base-level=0

//! Carousel State: a headless navigation and gesture controller for one-slide-per-page carousels.
//!
//! This crate owns the parts of a carousel that have real invariants and
//! timing behavior, and nothing else:
//!
//! - [`index`]: the current slide, always clamped into `0..count`.
//! - [`lock`]: the animation lock. At most one committed transition is in
//!   flight; requests that arrive meanwhile are dropped, not queued.
//! - [`gesture`]: drag-to-navigate. Live, uncommitted track offsets while the
//!   pointer moves, and a commit-or-revert decision on release.
//! - [`render`]: presentation sync. A pure function from the current index to
//!   track offset, active/hidden slide flags, control states and the optional
//!   last-slide "continue" affordance.
//! - [`Carousel`]: the controller wiring those together behind button,
//!   keyboard, pointer and resize entry points.
//!
//! It does **not** own markup, styles, or an event loop. Callers are expected to:
//! - Implement [`Surface`](render::Surface) for whatever displays the slides.
//! - Implement [`UnlockScheduler`] on top of their platform's one-shot timers,
//!   or drive a [`ManualTimer`] from their own clock.
//! - Route input into the controller, directly or through the `ui-events`
//!   adapter in [`input`].
//!
//! ## Minimal example
//!
//! ```rust
//! use carousel_state::{Carousel, CarouselConfig, ManualTimer};
//! use carousel_state::render::{ControlState, SlideState, Surface, TrackPosition};
//! use kurbo::Point;
//!
//! #[derive(Default)]
//! struct Deck {
//!     track: Option<TrackPosition>,
//!     next: Option<ControlState>,
//! }
//!
//! impl Surface for Deck {
//!     fn slide_count(&self) -> usize { 3 }
//!     fn viewport_width(&self) -> f64 { 400.0 }
//!     fn set_track(&mut self, track: TrackPosition) { self.track = Some(track); }
//!     fn set_slide(&mut self, _: usize, _: SlideState) {}
//!     fn set_next(&mut self, state: ControlState) { self.next = Some(state); }
//! }
//!
//! let config = CarouselConfig::new().with_transition_duration_ms(300).unwrap();
//! let mut carousel = Carousel::mount(Deck::default(), ManualTimer::new(0), config).unwrap();
//!
//! // Drag a third of the viewport to the left: commits to the next slide.
//! carousel.drag_start(Point::new(300.0, 10.0));
//! carousel.drag_move(Point::new(160.0, 10.0));
//! carousel.drag_end();
//! assert_eq!(carousel.current_index(), 1);
//!
//! // Wait out the transition, then use the "next" button.
//! carousel.advance_by(300);
//! assert!(carousel.next_slide());
//! assert_eq!(carousel.surface().next, Some(ControlState::DISABLED));
//! ```
//!
//! ## Timing
//!
//! The lock is released only by the one-shot scheduled when it was acquired.
//! That one-shot is fire-and-forget: it is never cancelled or rescheduled, and
//! its duration is [`CarouselConfig::transition_duration_ms`], which must match
//! the surface's eased transition.
//!
//! Drag feedback is exempt from the lock: a drag can start and move while a
//! transition runs. Only the commit on release is evaluated by the lock, and
//! a rejected commit snaps the track back.
//!
//! ## Features
//!
//! - `ui_events_adapter` (default): [`input::InputAdapter`] for `ui-events`
//!   pointer and keyboard events.
//! - `std` / `libm`: forwarded to `kurbo`.
//!
//! This crate is `no_std`.

#![no_std]

mod carousel;
mod config;
mod error;

pub mod gesture;
pub mod index;
#[cfg(feature = "ui_events_adapter")]
pub mod input;
pub mod lock;
pub mod render;
pub mod timer;

pub use carousel::{Carousel, DragOutcome, KeyOutcome, NavKey};
pub use config::CarouselConfig;
pub use error::{ConfigError, MountError};
pub use lock::{UnlockScheduler, UnlockTicket};
pub use timer::ManualTimer;
