//! Animation lock: at most one committed transition in flight.
//!
//! ## Usage
//!
//! 1) Call [`AnimationLock::try_acquire`] when a navigation commit is requested.
//!    `None` means a transition is already running and the request must be
//!    dropped (not queued).
//! 2) On success, schedule exactly one unlock through an [`UnlockScheduler`],
//!    handing it the returned [`UnlockTicket`].
//! 3) When that one-shot fires, call [`AnimationLock::release`] with the same
//!    ticket. Any other ticket leaves the lock alone.
//!
//! ```
//! use carousel_state::lock::AnimationLock;
//!
//! let mut lock = AnimationLock::default();
//! let first = lock.try_acquire().unwrap();
//! assert!(lock.try_acquire().is_none());
//! assert!(lock.release(first));
//!
//! let second = lock.try_acquire().unwrap();
//! // The first transition's one-shot cannot end the second one.
//! assert!(!lock.release(first));
//! assert!(lock.release(second));
//! ```

/// Lock states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LockState {
    /// No transition is running; commits are accepted.
    #[default]
    Idle,
    /// A committed transition is running; commits are rejected.
    Locked,
}

/// Identifies one acquisition of an [`AnimationLock`].
///
/// Only the ticket of the current acquisition can release the lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnlockTicket(u64);

/// A two-state guard that rejects commits while a transition is running.
///
/// The lock has no timer of its own. Release is driven externally by the
/// one-shot scheduled through [`UnlockScheduler`] at acquisition time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnimationLock {
    state: LockState,
    generation: u64,
}

impl AnimationLock {
    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> LockState {
        self.state
    }

    /// Returns `true` while a transition is running.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.state == LockState::Locked
    }

    /// Attempts Idle → Locked, returning the ticket that releases this acquisition.
    ///
    /// Returns `None` without changing state if already locked.
    pub fn try_acquire(&mut self) -> Option<UnlockTicket> {
        match self.state {
            LockState::Idle => {
                self.state = LockState::Locked;
                self.generation = self.generation.wrapping_add(1);
                Some(UnlockTicket(self.generation))
            }
            LockState::Locked => None,
        }
    }

    /// Locked → Idle, if `ticket` belongs to the current acquisition.
    ///
    /// Returns `false` and changes nothing when the lock is idle or the ticket
    /// is stale.
    pub fn release(&mut self, ticket: UnlockTicket) -> bool {
        if self.state == LockState::Locked && ticket.0 == self.generation {
            self.state = LockState::Idle;
            true
        } else {
            false
        }
    }
}

/// Schedules the one-shot that releases the [`AnimationLock`].
///
/// Implementations must arrange for the owning
/// [`Carousel::on_unlock_timer`](crate::Carousel::on_unlock_timer) to run once,
/// `after_ms` milliseconds from now, with `ticket`. The timer is
/// fire-and-forget: the carousel never cancels or reschedules it.
pub trait UnlockScheduler {
    /// Schedules a single unlock `after_ms` milliseconds from now.
    fn schedule_unlock(&mut self, after_ms: u32, ticket: UnlockTicket);
}

impl<T: UnlockScheduler + ?Sized> UnlockScheduler for &mut T {
    fn schedule_unlock(&mut self, after_ms: u32, ticket: UnlockTicket) {
        (**self).schedule_unlock(after_ms, ticket);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lock_is_idle() {
        let lock = AnimationLock::default();
        assert_eq!(lock.state(), LockState::Idle);
        assert!(!lock.is_locked());
    }

    #[test]
    fn acquire_is_exclusive() {
        let mut lock = AnimationLock::default();
        assert!(lock.try_acquire().is_some());
        assert!(lock.is_locked());

        // Repeated requests are rejected outright.
        assert!(lock.try_acquire().is_none());
        assert!(lock.try_acquire().is_none());
        assert!(lock.is_locked());
    }

    #[test]
    fn release_returns_to_idle() {
        let mut lock = AnimationLock::default();
        let ticket = lock.try_acquire().unwrap();
        assert!(lock.release(ticket));
        assert_eq!(lock.state(), LockState::Idle);
    }

    #[test]
    fn release_on_idle_is_noop() {
        let mut lock = AnimationLock::default();
        let ticket = lock.try_acquire().unwrap();
        assert!(lock.release(ticket));
        assert!(!lock.release(ticket));
        assert_eq!(lock.state(), LockState::Idle);
    }

    #[test]
    fn stale_ticket_does_not_release() {
        let mut lock = AnimationLock::default();
        let first = lock.try_acquire().unwrap();
        lock.release(first);
        let second = lock.try_acquire().unwrap();
        assert_ne!(first, second);

        assert!(!lock.release(first));
        assert!(lock.is_locked());
        assert!(lock.release(second));
    }
}
