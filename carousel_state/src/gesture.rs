// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-navigate: track one pointer drag and turn it into a navigation decision.
//!
//! ## Usage
//!
//! 1) Start a session with [`DragTracker::begin`] at the pointer-down position.
//! 2) On each move, call [`DragTracker::update`] to get the horizontal offset
//!    from the start, and feed it to [`live_offset_percent`] to draw the track.
//! 3) On release, [`DragTracker::finish`] returns the final offset and ends
//!    the session; [`resolve_drag`] decides between a commit and a revert.
//! 4) On cancel, [`DragTracker::cancel`] ends the session without a decision.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use carousel_state::gesture::{Direction, DragDecision, DragTracker, resolve_drag};
//!
//! let mut drag = DragTracker::default();
//! drag.begin(Point::new(300.0, 40.0));
//!
//! // Only the horizontal component matters.
//! assert_eq!(drag.update(Point::new(180.0, 90.0)), Some(-120.0));
//!
//! let dx = drag.finish().unwrap();
//! assert!(!drag.is_dragging());
//!
//! // 120px on a 400px viewport is past the quarter-width threshold.
//! assert_eq!(resolve_drag(dx, 400.0), DragDecision::Commit(Direction::Next));
//! ```

use kurbo::Point;

/// Fraction of the viewport width a drag must exceed to commit.
pub const COMMIT_THRESHOLD: f64 = 0.25;

/// Ephemeral state of one pointer drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    /// Position of the pointer-down that started the drag.
    pub start: Point,
    /// Last recorded pointer position.
    pub last: Point,
}

impl GestureSession {
    /// Horizontal offset from the start to the last recorded position.
    #[must_use]
    pub fn dx(&self) -> f64 {
        self.last.x - self.start.x
    }
}

/// Holds at most one live [`GestureSession`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    session: Option<GestureSession>,
}

impl DragTracker {
    /// Starts a session at `pos`.
    ///
    /// A live session is kept as is; pointer capture on the host means a
    /// second pointer-down should not reach us while one is active. Returns
    /// `true` if a new session was started.
    pub fn begin(&mut self, pos: Point) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(GestureSession {
            start: pos,
            last: pos,
        });
        true
    }

    /// Records a move and returns the horizontal offset from the start.
    pub fn update(&mut self, pos: Point) -> Option<f64> {
        let session = self.session.as_mut()?;
        session.last = pos;
        Some(session.dx())
    }

    /// Ends the session and returns its final horizontal offset.
    pub fn finish(&mut self) -> Option<f64> {
        self.session.take().map(|session| session.dx())
    }

    /// Ends the session without producing an offset.
    ///
    /// Returns `true` if a session was live.
    pub fn cancel(&mut self) -> bool {
        self.session.take().is_some()
    }

    /// Returns the live session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Returns `true` while a drag is live.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }
}

/// Which neighbor a committed drag navigates to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward index − 1. Content was dragged rightward.
    Previous,
    /// Toward index + 1. Content was dragged leftward.
    Next,
}

impl Direction {
    /// Signed index step for this direction.
    #[must_use]
    pub fn step(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Outcome of a finished drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragDecision {
    /// Request a commit toward the given neighbor.
    Commit(Direction),
    /// Snap back to the resting position of the current slide.
    Revert,
}

/// Decides what a drag of `dx` pixels on a viewport `viewport_width` pixels wide means.
///
/// The drag commits only when `|dx|` is strictly greater than
/// [`COMMIT_THRESHOLD`] × `viewport_width`. A viewport with no width (or a
/// non-finite offset) always reverts.
#[must_use]
pub fn resolve_drag(dx: f64, viewport_width: f64) -> DragDecision {
    if !has_width(viewport_width) || !dx.is_finite() {
        return DragDecision::Revert;
    }
    let threshold = COMMIT_THRESHOLD * viewport_width;
    if dx.abs() <= threshold {
        DragDecision::Revert
    } else if dx > 0.0 {
        DragDecision::Commit(Direction::Previous)
    } else {
        DragDecision::Commit(Direction::Next)
    }
}

fn has_width(viewport_width: f64) -> bool {
    viewport_width.is_finite() && viewport_width > 0.0
}

/// Resting track offset for `index`, in percent of the track width.
#[must_use]
pub fn resting_offset_percent(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    -(index as f64) * (100.0 / count as f64)
}

/// Track offset while dragging, in percent of the track width.
///
/// The track is `count` viewports wide, so a pixel offset of `dx` shifts it by
/// `dx / viewport_width` of one slide, i.e. `(dx / viewport_width) × (100 / count)`
/// percent, layered on top of the resting offset for `index`.
#[must_use]
pub fn live_offset_percent(index: usize, count: usize, dx: f64, viewport_width: f64) -> f64 {
    let resting = resting_offset_percent(index, count);
    if count == 0 || !has_width(viewport_width) {
        return resting;
    }
    let per_slide = 100.0 / count as f64;
    resting + (dx / viewport_width) * per_slide
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn new_tracker_is_not_dragging() {
        let drag = DragTracker::default();
        assert!(!drag.is_dragging());
        assert!(drag.session().is_none());
    }

    #[test]
    fn begin_records_start_and_last() {
        let mut drag = DragTracker::default();
        let start = Point::new(10.0, 20.0);
        assert!(drag.begin(start));

        let session = drag.session().unwrap();
        assert_eq!(session.start, start);
        assert_eq!(session.last, start);
        assert_eq!(session.dx(), 0.0);
    }

    #[test]
    fn begin_while_dragging_keeps_first_session() {
        let mut drag = DragTracker::default();
        drag.begin(Point::new(10.0, 0.0));
        assert!(!drag.begin(Point::new(500.0, 0.0)));
        assert_eq!(drag.session().unwrap().start, Point::new(10.0, 0.0));
    }

    #[test]
    fn update_reports_total_horizontal_offset() {
        let mut drag = DragTracker::default();
        drag.begin(Point::new(100.0, 100.0));

        assert_eq!(drag.update(Point::new(90.0, 300.0)), Some(-10.0));
        // Offsets are measured from the start, not from the previous move.
        assert_eq!(drag.update(Point::new(70.0, 0.0)), Some(-30.0));
        assert_eq!(drag.session().unwrap().last, Point::new(70.0, 0.0));
    }

    #[test]
    fn update_without_session_is_ignored() {
        let mut drag = DragTracker::default();
        assert_eq!(drag.update(Point::new(5.0, 5.0)), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn finish_returns_offset_and_ends_session() {
        let mut drag = DragTracker::default();
        drag.begin(Point::new(0.0, 0.0));
        drag.update(Point::new(42.0, 0.0));

        assert_eq!(drag.finish(), Some(42.0));
        assert!(!drag.is_dragging());
        assert_eq!(drag.finish(), None);
    }

    #[test]
    fn cancel_ends_session() {
        let mut drag = DragTracker::default();
        assert!(!drag.cancel());
        drag.begin(Point::new(0.0, 0.0));
        assert!(drag.cancel());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn resolve_commits_past_threshold() {
        let width = 400.0;
        assert_eq!(
            resolve_drag(-0.3 * width, width),
            DragDecision::Commit(Direction::Next)
        );
        assert_eq!(
            resolve_drag(0.3 * width, width),
            DragDecision::Commit(Direction::Previous)
        );
    }

    #[test]
    fn resolve_reverts_at_or_below_threshold() {
        let width = 400.0;
        assert_eq!(resolve_drag(0.1 * width, width), DragDecision::Revert);
        assert_eq!(resolve_drag(100.0, width), DragDecision::Revert);
        assert_eq!(resolve_drag(-100.0, width), DragDecision::Revert);
        assert_eq!(resolve_drag(0.0, width), DragDecision::Revert);
    }

    #[test]
    fn resolve_reverts_without_viewport_width() {
        assert_eq!(resolve_drag(-500.0, 0.0), DragDecision::Revert);
        assert_eq!(resolve_drag(-500.0, -10.0), DragDecision::Revert);
        assert_eq!(resolve_drag(-500.0, f64::NAN), DragDecision::Revert);
        assert_eq!(resolve_drag(f64::NAN, 400.0), DragDecision::Revert);
    }

    #[test]
    fn direction_steps() {
        assert_eq!(Direction::Previous.step(), -1);
        assert_eq!(Direction::Next.step(), 1);
    }

    #[test]
    fn resting_offsets() {
        assert!(approx(resting_offset_percent(0, 5), 0.0));
        assert!(approx(resting_offset_percent(2, 5), -40.0));
        assert!(approx(resting_offset_percent(3, 4), -75.0));
    }

    #[test]
    fn live_offset_shifts_by_fraction_of_slide() {
        // Half a viewport to the left from slide 1 of 4: -25% - 12.5%.
        assert!(approx(live_offset_percent(1, 4, -200.0, 400.0), -37.5));
        // A full viewport to the right from slide 2 of 5 lands on slide 1's rest.
        assert!(approx(
            live_offset_percent(2, 5, 400.0, 400.0),
            resting_offset_percent(1, 5)
        ));
    }

    #[test]
    fn live_offset_without_width_is_resting() {
        assert!(approx(live_offset_percent(1, 4, -200.0, 0.0), -25.0));
    }
}
