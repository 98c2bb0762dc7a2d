// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for routing `ui-events` input through `carousel_state::input::InputAdapter`.

use carousel_state::input::{InputAdapter, nav_key};
use carousel_state::render::{SlideState, Surface, TrackPosition};
use carousel_state::{Carousel, CarouselConfig, ManualTimer, NavKey};
use dpi::PhysicalPosition;
use ui_events::keyboard::{Key, KeyState, KeyboardEvent, NamedKey};
use ui_events::pointer::{
    PointerButton, PointerButtonEvent, PointerEvent, PointerId, PointerInfo, PointerState,
    PointerType, PointerUpdate,
};

struct Strip {
    track: Option<TrackPosition>,
}

impl Surface for Strip {
    fn slide_count(&self) -> usize {
        4
    }

    fn viewport_width(&self) -> f64 {
        400.0
    }

    fn set_track(&mut self, track: TrackPosition) {
        self.track = Some(track);
    }

    fn set_slide(&mut self, _: usize, _: SlideState) {}
}

fn carousel() -> Carousel<Strip, ManualTimer> {
    Carousel::mount(
        Strip { track: None },
        ManualTimer::new(0),
        CarouselConfig::default(),
    )
    .unwrap()
}

fn info(id: u64) -> PointerInfo {
    PointerInfo {
        pointer_id: PointerId::new(id),
        persistent_device_id: None,
        pointer_type: PointerType::Touch,
    }
}

fn at(x: f64) -> PointerState {
    PointerState {
        position: PhysicalPosition::new(x, 20.0),
        scale_factor: 1.0,
        ..Default::default()
    }
}

fn down(id: u64, x: f64) -> PointerEvent {
    PointerEvent::Down(PointerButtonEvent {
        button: Some(PointerButton::Primary),
        pointer: info(id),
        state: at(x),
    })
}

fn moved(id: u64, x: f64) -> PointerEvent {
    PointerEvent::Move(PointerUpdate {
        pointer: info(id),
        current: at(x),
        coalesced: Vec::new(),
        predicted: Vec::new(),
    })
}

fn up(id: u64, x: f64) -> PointerEvent {
    PointerEvent::Up(PointerButtonEvent {
        button: Some(PointerButton::Primary),
        pointer: info(id),
        state: at(x),
    })
}

fn key(named: NamedKey, state: KeyState) -> KeyboardEvent {
    KeyboardEvent {
        key: Key::Named(named),
        state,
        ..Default::default()
    }
}

#[test]
fn swipe_left_commits_next() {
    let mut carousel = carousel();
    let mut input = InputAdapter::new();

    assert!(input.pointer(&mut carousel, &down(1, 350.0)));
    assert!(input.is_captured());
    assert!(input.pointer(&mut carousel, &moved(1, 200.0)));
    assert!(input.pointer(&mut carousel, &up(1, 200.0)));

    assert!(!input.is_captured());
    assert_eq!(carousel.current_index(), 1);
    assert!(carousel.is_locked());
}

#[test]
fn other_pointers_are_ignored_while_captured() {
    let mut carousel = carousel();
    let mut input = InputAdapter::new();

    input.pointer(&mut carousel, &down(1, 350.0));
    assert!(!input.pointer(&mut carousel, &down(2, 10.0)));
    assert!(!input.pointer(&mut carousel, &moved(2, 0.0)));
    assert!(!input.pointer(&mut carousel, &up(2, 0.0)));
    assert!(carousel.is_dragging());

    // The owner's short move reverts.
    input.pointer(&mut carousel, &moved(1, 330.0));
    assert!(input.pointer(&mut carousel, &up(1, 330.0)));
    assert_eq!(carousel.current_index(), 0);
    assert!(!carousel.is_locked());
}

#[test]
fn release_position_is_not_a_move() {
    let mut carousel = carousel();
    let mut input = InputAdapter::new();

    input.pointer(&mut carousel, &down(1, 350.0));
    // Released far away without any move: resolves on the last move (none).
    input.pointer(&mut carousel, &up(1, 0.0));
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn cancel_reverts_and_releases_capture() {
    let mut carousel = carousel();
    let mut input = InputAdapter::new();

    input.pointer(&mut carousel, &down(1, 350.0));
    input.pointer(&mut carousel, &moved(1, 0.0));
    assert!(input.pointer(&mut carousel, &PointerEvent::Cancel(info(1))));

    assert!(!input.is_captured());
    assert!(!carousel.is_dragging());
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.surface().track.unwrap().offset_percent, 0.0);
}

#[test]
fn arrow_keys_map_on_key_down_only() {
    assert_eq!(
        nav_key(&key(NamedKey::ArrowLeft, KeyState::Down)),
        Some(NavKey::ArrowLeft)
    );
    assert_eq!(
        nav_key(&key(NamedKey::ArrowRight, KeyState::Down)),
        Some(NavKey::ArrowRight)
    );
    assert_eq!(nav_key(&key(NamedKey::ArrowRight, KeyState::Up)), None);
    assert_eq!(nav_key(&key(NamedKey::Enter, KeyState::Down)), None);
}

#[test]
fn keyboard_navigates_with_focus() {
    let mut carousel = carousel();
    let mut input = InputAdapter::new();
    let right = key(NamedKey::ArrowRight, KeyState::Down);

    let outcome = input.keyboard(&mut carousel, &right, false);
    assert!(!outcome.prevent_default);
    assert_eq!(carousel.current_index(), 0);

    let outcome = input.keyboard(&mut carousel, &right, true);
    assert!(outcome.prevent_default);
    assert!(outcome.committed);
    assert_eq!(carousel.current_index(), 1);
}
