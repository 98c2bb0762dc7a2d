// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller: ties index, lock, gesture and presentation together.

use core::num::NonZeroUsize;

use kurbo::Point;
use log::{debug, trace};

use crate::config::CarouselConfig;
use crate::error::MountError;
use crate::gesture::{
    Direction, DragDecision, DragTracker, GestureSession, live_offset_percent, resolve_drag,
};
use crate::index::SlideIndex;
use crate::lock::{AnimationLock, LockState, UnlockScheduler, UnlockTicket};
use crate::render::{Frame, Surface, TrackPosition, Transition};
use crate::timer::ManualTimer;

/// Arrow keys the carousel reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    /// Go to the previous slide.
    ArrowLeft,
    /// Go to the next slide.
    ArrowRight,
}

/// What happened to a key press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// The key was consumed; the host must suppress its default action.
    pub prevent_default: bool,
    /// The key produced an accepted commit.
    pub committed: bool,
}

/// How a finished drag was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// The drag crossed the threshold and the commit was accepted.
    Committed(Direction),
    /// The drag crossed the threshold but a transition was in flight; the
    /// track snapped back instead.
    Rejected(Direction),
    /// The drag stayed under the threshold; the track snapped back.
    Reverted,
}

/// A slide carousel mounted on a [`Surface`].
///
/// All state changes happen synchronously inside the calls below. The only
/// asynchronous edge is the unlock one-shot, which the [`UnlockScheduler`]
/// arranges and which comes back in through [`Carousel::on_unlock_timer`]
/// carrying the [`UnlockTicket`] it was scheduled with.
///
/// ```
/// use carousel_state::{Carousel, CarouselConfig, ManualTimer};
/// use carousel_state::render::{SlideState, Surface, TrackPosition};
///
/// struct Deck;
///
/// impl Surface for Deck {
///     fn slide_count(&self) -> usize { 3 }
///     fn viewport_width(&self) -> f64 { 640.0 }
///     fn set_track(&mut self, _: TrackPosition) {}
///     fn set_slide(&mut self, _: usize, _: SlideState) {}
/// }
///
/// let mut carousel =
///     Carousel::mount(Deck, ManualTimer::new(0), CarouselConfig::default()).unwrap();
/// assert!(carousel.next_slide());
/// // Locked until the transition has run.
/// assert!(!carousel.next_slide());
/// carousel.advance_by(500);
/// assert!(carousel.next_slide());
/// assert_eq!(carousel.current_index(), 2);
/// ```
#[derive(Debug)]
pub struct Carousel<S, T> {
    surface: S,
    scheduler: T,
    config: CarouselConfig,
    index: SlideIndex,
    lock: AnimationLock,
    drag: DragTracker,
}

impl<S: Surface, T: UnlockScheduler> Carousel<S, T> {
    /// Mounts a carousel on `surface` at the first slide and renders it.
    pub fn mount(surface: S, scheduler: T, config: CarouselConfig) -> Result<Self, MountError> {
        let count = NonZeroUsize::new(surface.slide_count()).ok_or(MountError::NoSlides)?;
        let mut carousel = Self {
            surface,
            scheduler,
            config,
            index: SlideIndex::new(count),
            lock: AnimationLock::default(),
            drag: DragTracker::default(),
        };
        carousel.render();
        debug!(
            "mounted carousel: {} slides, {} ms transitions",
            count,
            config.transition_duration_ms()
        );
        Ok(carousel)
    }

    /// Requests a commit to `target`, clamped into range.
    ///
    /// Returns `false` and changes nothing while a transition is in flight.
    /// Otherwise sets the index, locks, schedules the unlock, renders, and
    /// returns `true`. Committing to the current slide still locks.
    pub fn request_commit(&mut self, target: isize) -> bool {
        let Some(ticket) = self.lock.try_acquire() else {
            debug!("commit to {target} rejected: transition in flight");
            return false;
        };
        let from = self.index.current();
        let to = self.index.set(target);
        self.scheduler
            .schedule_unlock(self.config.transition_duration_ms(), ticket);
        debug!("commit {from} -> {to} (requested {target})");
        self.render();
        true
    }

    /// Requests a commit to slide `index`. See [`Carousel::request_commit`].
    pub fn go_to(&mut self, index: usize) -> bool {
        self.request_commit(isize::try_from(index).unwrap_or(isize::MAX))
    }

    /// "Next" button. Does nothing while locked.
    pub fn next_slide(&mut self) -> bool {
        self.step(Direction::Next)
    }

    /// "Previous" button. Does nothing while locked.
    pub fn previous_slide(&mut self) -> bool {
        self.step(Direction::Previous)
    }

    fn step(&mut self, direction: Direction) -> bool {
        if self.lock.is_locked() {
            return false;
        }
        let target = self.index.signed_current().saturating_add(direction.step());
        self.request_commit(target)
    }

    /// Arrow-key navigation.
    ///
    /// Keys only count while the carousel's surface (or a descendant) has
    /// focus. A consumed key asks the host to suppress its default action,
    /// even when the lock drops the navigation itself.
    pub fn key(&mut self, key: NavKey, focus_within: bool) -> KeyOutcome {
        if !focus_within {
            return KeyOutcome::default();
        }
        let committed = match key {
            NavKey::ArrowLeft => self.previous_slide(),
            NavKey::ArrowRight => self.next_slide(),
        };
        KeyOutcome {
            prevent_default: true,
            committed,
        }
    }

    /// Starts a drag at `pos`. The animation lock is not consulted.
    pub fn drag_start(&mut self, pos: Point) -> bool {
        let started = self.drag.begin(pos);
        if started {
            trace!("drag start at x={}", pos.x);
        }
        started
    }

    /// Follows the pointer: shifts the track immediately, without committing.
    pub fn drag_move(&mut self, pos: Point) -> bool {
        let Some(dx) = self.drag.update(pos) else {
            return false;
        };
        let offset_percent = live_offset_percent(
            self.index.current(),
            self.index.count(),
            dx,
            self.surface.viewport_width(),
        );
        trace!("drag dx={dx} offset={offset_percent}%");
        self.surface.set_track(TrackPosition {
            offset_percent,
            transition: Transition::Immediate,
        });
        true
    }

    /// Releases the drag and commits or reverts.
    ///
    /// Returns `None` if no drag was live. Every outcome ends with an eased
    /// render at the (possibly new) current index, so the track never stays
    /// at a mid-drag offset.
    pub fn drag_end(&mut self) -> Option<DragOutcome> {
        let dx = self.drag.finish()?;
        let outcome = match resolve_drag(dx, self.surface.viewport_width()) {
            DragDecision::Commit(direction) => {
                let target = self.index.signed_current().saturating_add(direction.step());
                if self.request_commit(target) {
                    DragOutcome::Committed(direction)
                } else {
                    self.render();
                    DragOutcome::Rejected(direction)
                }
            }
            DragDecision::Revert => {
                self.render();
                DragOutcome::Reverted
            }
        };
        debug!("drag dx={dx} resolved as {outcome:?}");
        Some(outcome)
    }

    /// Abandons the drag (for example when the input device goes away) and snaps back.
    pub fn drag_cancel(&mut self) -> bool {
        if !self.drag.cancel() {
            return false;
        }
        debug!("drag cancelled");
        self.render();
        true
    }

    /// Re-renders at the unchanged index after a layout change.
    pub fn resize(&mut self) {
        self.render();
    }

    /// The unlock one-shot fired: Locked → Idle.
    ///
    /// Only the ticket handed to the scheduler by the current acquisition
    /// releases the lock. Stale tickets, or firing while idle, are ignored.
    pub fn on_unlock_timer(&mut self, ticket: UnlockTicket) -> bool {
        let released = self.lock.release(ticket);
        if released {
            debug!("transition finished at slide {}", self.index.current());
        } else {
            debug!("unlock {ticket:?} does not match the current transition; ignored");
        }
        released
    }
}

impl<S: Surface, T> Carousel<S, T> {
    /// The frame for the current index, adjusted for the controls the surface has.
    #[must_use]
    pub fn frame(&self) -> Frame {
        let frame = Frame::resting(self.index.current(), self.index.count());
        if self.surface.has_continue() {
            frame
        } else {
            frame.without_continue()
        }
    }

    /// Presentation sync at the current index.
    ///
    /// While a drag is live the gesture owns the track, so only the slide and
    /// control attributes are written.
    pub fn render(&mut self) {
        let frame = self.frame();
        if self.drag.is_dragging() {
            frame.apply_attributes(&mut self.surface);
        } else {
            frame.apply(&mut self.surface);
        }
    }
}

impl<S, T> Carousel<S, T> {
    /// Current slide.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index.current()
    }

    /// Number of slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.index.count()
    }

    /// Returns `true` while a committed transition is in flight.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Animation lock state.
    #[must_use]
    pub fn lock_state(&self) -> LockState {
        self.lock.state()
    }

    /// Returns `true` while a drag is live.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The live drag, if any.
    #[must_use]
    pub fn drag_session(&self) -> Option<&GestureSession> {
        self.drag.session()
    }

    /// Configuration in effect.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The mounted surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The unlock scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    /// Unmounts, handing back the surface and the scheduler.
    pub fn into_parts(self) -> (S, T) {
        (self.surface, self.scheduler)
    }
}

impl<S: Surface> Carousel<S, ManualTimer> {
    /// Advances the manual clock to `now_ms`, firing the unlock if it is due.
    ///
    /// Returns `true` if the advance released the lock.
    pub fn advance_to(&mut self, now_ms: u64) -> bool {
        self.scheduler
            .advance_to(now_ms)
            .is_some_and(|ticket| self.on_unlock_timer(ticket))
    }

    /// Advances the manual clock by `delta_ms`. See [`Carousel::advance_to`].
    pub fn advance_by(&mut self, delta_ms: u64) -> bool {
        let now = self.scheduler.now().saturating_add(delta_ms);
        self.advance_to(now)
    }
}
