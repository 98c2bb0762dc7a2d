// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The markup contract, the attribute values written to it, and the DOM
//! events that end a drag.
//!
//! Everything here is plain string work, so it builds and is tested on every
//! target. The DOM code on `wasm32` only forwards these values to `web-sys`.

use alloc::format;
use alloc::string::String;

use carousel_state::render::{ControlState, Transition};
use carousel_state::{CarouselConfig, ConfigError};

/// Selects the draggable viewport inside a carousel root.
pub const VIEWPORT_SELECTOR: &str = "[data-carousel-viewport]";
/// Selects the movable track inside a carousel root.
pub const TRACK_SELECTOR: &str = "[data-carousel-track]";
/// Selects the slides inside a carousel root, in document order.
pub const SLIDE_SELECTOR: &str = "[data-carousel-slide]";
/// Selects the optional "previous" control inside a carousel root.
pub const PREV_SELECTOR: &str = "[data-carousel-prev]";
/// Selects the optional "next" control inside a carousel root.
pub const NEXT_SELECTOR: &str = "[data-carousel-next]";
/// Selects the optional "continue" control inside a carousel root.
///
/// Only `mount_all` looks this up, and only within each root. `mount` takes
/// the control as an explicit option.
pub const CONTINUE_SELECTOR: &str = "[data-carousel-continue]";

/// Root attribute overriding the transition duration, in milliseconds.
pub const DURATION_ATTRIBUTE: &str = "data-transition-duration-ms";

/// Class carried by the current slide.
pub const ACTIVE_CLASS: &str = "is-active";

/// How the end of a captured pointer resolves the live drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerRelease {
    /// The pointer lifted: commit or revert on the last move.
    Resolve,
    /// The pointer went away: revert without committing.
    Cancel,
}

/// Viewport events that end the drag of the captured pointer.
///
/// `lostpointercapture` covers capture ending without an up or cancel, for
/// example when the viewport leaves the document.
pub const RELEASE_EVENTS: [&str; 3] = ["pointerup", "pointercancel", "lostpointercapture"];

/// Maps a viewport event type to the way it ends a drag.
#[must_use]
pub fn pointer_release(kind: &str) -> Option<PointerRelease> {
    match kind {
        "pointerup" => Some(PointerRelease::Resolve),
        "pointercancel" | "lostpointercapture" => Some(PointerRelease::Cancel),
        _ => None,
    }
}

/// CSS `transform` value placing the track at `offset_percent`.
#[must_use]
pub fn track_transform(offset_percent: f64) -> String {
    // `-0` would otherwise print as "-0%".
    let offset = if offset_percent == 0.0 {
        0.0
    } else {
        offset_percent
    };
    format!("translateX({offset}%)")
}

/// Inline CSS `transition` value for the track.
///
/// `None` removes the inline override so the stylesheet's eased transition
/// applies again.
#[must_use]
pub fn track_transition(transition: Transition) -> Option<&'static str> {
    match transition {
        Transition::Eased => None,
        Transition::Immediate => Some("none"),
    }
}

/// Value for `aria-*` boolean attributes.
#[must_use]
pub fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Inline `opacity` for a control. `None` clears the override.
#[must_use]
pub fn control_opacity(state: ControlState) -> Option<&'static str> {
    if state.visible { None } else { Some("0") }
}

/// Inline `pointer-events` for a control or affordance. `None` clears the override.
#[must_use]
pub fn pointer_events(interactive: bool) -> Option<&'static str> {
    if interactive { None } else { Some("none") }
}

/// Resolves the configuration for a root.
///
/// An explicit duration wins; otherwise the root's
/// [`DURATION_ATTRIBUTE`] is parsed; otherwise the default applies.
pub fn resolve_config(
    explicit_ms: Option<u32>,
    attribute: Option<&str>,
) -> Result<CarouselConfig, ConfigError> {
    match (explicit_ms, attribute) {
        (Some(ms), _) => CarouselConfig::new().with_transition_duration_ms(ms),
        (None, Some(text)) => text.parse(),
        (None, None) => Ok(CarouselConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transforms() {
        assert_eq!(track_transform(0.0), "translateX(0%)");
        assert_eq!(track_transform(-0.0), "translateX(0%)");
        assert_eq!(track_transform(-40.0), "translateX(-40%)");
        assert_eq!(track_transform(-37.5), "translateX(-37.5%)");
    }

    #[test]
    fn transitions() {
        assert_eq!(track_transition(Transition::Eased), None);
        assert_eq!(track_transition(Transition::Immediate), Some("none"));
    }

    #[test]
    fn control_styles() {
        assert_eq!(control_opacity(ControlState::ENABLED), None);
        assert_eq!(control_opacity(ControlState::DISABLED), None);
        assert_eq!(control_opacity(ControlState::SUPPRESSED), Some("0"));
        assert_eq!(pointer_events(true), None);
        assert_eq!(pointer_events(false), Some("none"));
        assert_eq!(aria_bool(true), "true");
        assert_eq!(aria_bool(false), "false");
    }

    #[test]
    fn every_release_event_ends_the_drag() {
        for kind in RELEASE_EVENTS {
            assert!(pointer_release(kind).is_some(), "{kind} must end the drag");
        }
        assert_eq!(pointer_release("pointerup"), Some(PointerRelease::Resolve));
        assert_eq!(
            pointer_release("pointercancel"),
            Some(PointerRelease::Cancel)
        );
        assert_eq!(
            pointer_release("lostpointercapture"),
            Some(PointerRelease::Cancel)
        );
        assert_eq!(pointer_release("pointermove"), None);
    }

    #[test]
    fn config_resolution_order() {
        let explicit = resolve_config(Some(250), Some("900")).unwrap();
        assert_eq!(explicit.transition_duration_ms(), 250);

        let from_attribute = resolve_config(None, Some("900")).unwrap();
        assert_eq!(from_attribute.transition_duration_ms(), 900);

        let fallback = resolve_config(None, None).unwrap();
        assert_eq!(
            fallback.transition_duration_ms(),
            CarouselConfig::DEFAULT_TRANSITION_DURATION_MS
        );
    }

    #[test]
    fn config_errors() {
        assert_eq!(
            resolve_config(Some(0), None),
            Err(ConfigError::ZeroTransitionDuration)
        );
        assert_eq!(
            resolve_config(None, Some("0.5s")),
            Err(ConfigError::InvalidTransitionDuration)
        );
    }
}
