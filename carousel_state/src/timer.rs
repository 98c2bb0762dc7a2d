// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A host-driven, fake-clock [`UnlockScheduler`].
//!
//! [`ManualTimer`] never fires by itself. The host (or a test) advances its
//! clock, and the timer hands back the pending [`UnlockTicket`] once its
//! deadline has been reached. This is handy both for deterministic tests and
//! for hosts that already own a frame clock and would rather not spawn
//! platform timers.
//!
//! ```
//! use carousel_state::UnlockScheduler;
//! use carousel_state::lock::AnimationLock;
//! use carousel_state::timer::ManualTimer;
//!
//! let mut lock = AnimationLock::default();
//! let ticket = lock.try_acquire().unwrap();
//!
//! let mut timer = ManualTimer::new(1_000);
//! timer.schedule_unlock(300, ticket);
//! assert_eq!(timer.deadline(), Some(1_300));
//!
//! assert_eq!(timer.advance_to(1_299), None);
//! assert_eq!(timer.advance_to(1_300), Some(ticket));
//! assert_eq!(timer.deadline(), None);
//! ```

use crate::lock::{UnlockScheduler, UnlockTicket};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pending {
    deadline: u64,
    ticket: UnlockTicket,
}

/// A one-slot timer queue driven by an externally supplied clock (milliseconds).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManualTimer {
    now: u64,
    pending: Option<Pending>,
}

impl ManualTimer {
    /// Creates a timer whose clock reads `now_ms`.
    #[must_use]
    pub fn new(now_ms: u64) -> Self {
        Self {
            now: now_ms,
            pending: None,
        }
    }

    /// Returns the current clock reading.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Returns the pending unlock deadline, if one is scheduled.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.pending.map(|pending| pending.deadline)
    }

    /// Returns `true` while an unlock is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Moves the clock forward to `now_ms` and returns the ticket of the
    /// pending unlock if its deadline has been reached.
    ///
    /// The clock never runs backwards; an earlier reading is ignored. A fired
    /// unlock is consumed, so each one fires at most once.
    pub fn advance_to(&mut self, now_ms: u64) -> Option<UnlockTicket> {
        self.now = self.now.max(now_ms);
        match self.pending {
            Some(pending) if pending.deadline <= self.now => {
                self.pending = None;
                Some(pending.ticket)
            }
            _ => None,
        }
    }

    /// Moves the clock forward by `delta_ms`. See [`ManualTimer::advance_to`].
    pub fn advance_by(&mut self, delta_ms: u64) -> Option<UnlockTicket> {
        self.advance_to(self.now.saturating_add(delta_ms))
    }
}

impl UnlockScheduler for ManualTimer {
    fn schedule_unlock(&mut self, after_ms: u32, ticket: UnlockTicket) {
        debug_assert!(
            self.pending.is_none(),
            "an unlock is already pending; the lock admits one per acquisition"
        );
        self.pending = Some(Pending {
            deadline: self.now.saturating_add(u64::from(after_ms)),
            ticket,
        });
    }
}
