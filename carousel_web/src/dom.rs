// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::string::ToString;
use alloc::vec::Vec;
use core::cell::{Cell, OnceCell, RefCell};
use core::fmt;

use carousel_state::render::{ControlState, SlideState, Surface, TrackPosition};
use carousel_state::{Carousel, NavKey, UnlockScheduler, UnlockTicket};
use js_sys::Function;
use kurbo::Point;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    CssStyleDeclaration, Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent, Node,
    PointerEvent, Window,
};

use crate::markup::{
    ACTIVE_CLASS, CONTINUE_SELECTOR, DURATION_ATTRIBUTE, NEXT_SELECTOR, PREV_SELECTOR,
    PointerRelease, RELEASE_EVENTS, SLIDE_SELECTOR, TRACK_SELECTOR, VIEWPORT_SELECTOR, aria_bool,
    control_opacity, pointer_events, pointer_release, resolve_config, track_transform,
    track_transition,
};

type WebCarousel = Carousel<DomSurface, TimeoutScheduler>;

fn js_error(err: impl fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn set_or_clear(style: &CssStyleDeclaration, property: &str, value: Option<&str>) {
    let _ = match value {
        Some(value) => style.set_property(property, value),
        None => style.remove_property(property).map(drop),
    };
}

/// HTML elements a carousel renders into.
#[derive(Debug)]
pub struct DomSurface {
    viewport: HtmlElement,
    track: HtmlElement,
    slides: Vec<Element>,
    prev: Option<HtmlElement>,
    next: Option<HtmlElement>,
    continue_control: Option<HtmlElement>,
}

impl DomSurface {
    fn set_control(control: Option<&HtmlElement>, state: ControlState) {
        let Some(control) = control else {
            return;
        };
        let _ = if state.disabled {
            control.set_attribute("disabled", "")
        } else {
            control.remove_attribute("disabled")
        };
        let _ = control.set_attribute("aria-disabled", aria_bool(state.disabled));
        let style = control.style();
        set_or_clear(&style, "opacity", control_opacity(state));
        set_or_clear(&style, "pointer-events", pointer_events(state.interactive));
    }
}

impl Surface for DomSurface {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn viewport_width(&self) -> f64 {
        f64::from(self.viewport.client_width())
    }

    fn set_track(&mut self, track: TrackPosition) {
        let style = self.track.style();
        set_or_clear(&style, "transition", track_transition(track.transition));
        let _ = style.set_property("transform", &track_transform(track.offset_percent));
    }

    fn set_slide(&mut self, index: usize, state: SlideState) {
        let Some(slide) = self.slides.get(index) else {
            return;
        };
        let _ = slide.class_list().toggle_with_force(ACTIVE_CLASS, state.active);
        let _ = slide.set_attribute("aria-hidden", aria_bool(state.hidden));
    }

    fn set_prev(&mut self, state: ControlState) {
        Self::set_control(self.prev.as_ref(), state);
    }

    fn set_next(&mut self, state: ControlState) {
        Self::set_control(self.next.as_ref(), state);
    }

    fn has_continue(&self) -> bool {
        self.continue_control.is_some()
    }

    fn set_continue(&mut self, visible: bool) {
        let Some(control) = &self.continue_control else {
            return;
        };
        let style = control.style();
        set_or_clear(&style, "visibility", (!visible).then_some("hidden"));
        set_or_clear(&style, "pointer-events", pointer_events(visible));
        let _ = control.set_attribute("aria-hidden", aria_bool(!visible));
    }
}

/// Releases the animation lock with `setTimeout`.
#[derive(Debug)]
pub struct TimeoutScheduler {
    window: Window,
    owner: Rc<OnceCell<Weak<RefCell<WebCarousel>>>>,
}

impl UnlockScheduler for TimeoutScheduler {
    fn schedule_unlock(&mut self, after_ms: u32, ticket: UnlockTicket) {
        let owner = Rc::clone(&self.owner);
        let fire = Closure::once_into_js(move || {
            if let Some(carousel) = owner.get().and_then(Weak::upgrade) {
                carousel.borrow_mut().on_unlock_timer(ticket);
            }
        });
        let timeout = i32::try_from(after_ms).unwrap_or(i32::MAX);
        if let Err(err) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(fire.unchecked_ref(), timeout)
        {
            warn!("could not schedule carousel unlock: {err:?}");
        }
    }
}

/// An event listener that unregisters itself when dropped.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn new(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    fn callback(&self) -> &Function {
        self.closure.as_ref().unchecked_ref()
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback());
    }
}

/// Options for [`mount`].
#[derive(Clone, Debug, Default)]
pub struct MountOptions {
    /// Transition duration override. Falls back to the root's
    /// `data-transition-duration-ms` attribute, then to the default.
    pub transition_duration_ms: Option<u32>,
    /// The optional "continue" affordance shown on the last slide.
    pub continue_control: Option<HtmlElement>,
}

/// A mounted carousel. Dropping it removes every listener it registered.
#[derive(Debug)]
pub struct CarouselHandle {
    carousel: Rc<RefCell<WebCarousel>>,
    _listeners: Vec<Listener>,
}

impl CarouselHandle {
    /// Current slide.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.carousel.borrow().current_index()
    }

    /// Number of slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.carousel.borrow().slide_count()
    }

    /// Programmatic navigation, subject to the animation lock.
    pub fn go_to(&self, index: usize) -> bool {
        self.carousel.borrow_mut().go_to(index)
    }
}

fn optional_html(root: &Element, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(root
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

fn required_html(root: &Element, selector: &str) -> Result<HtmlElement, JsValue> {
    optional_html(root, selector)?
        .ok_or_else(|| js_error(format_args!("carousel markup is missing {selector}")))
}

fn slides(root: &Element) -> Result<Vec<Element>, JsValue> {
    let list = root.query_selector_all(SLIDE_SELECTOR)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| js_error("no global window"))
}

fn pointer_position(event: &PointerEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

fn focus_within(root: &Element) -> bool {
    root.owner_document()
        .and_then(|doc| doc.active_element())
        .is_some_and(|active| {
            let active: &Node = &active;
            root.contains(Some(active))
        })
}

/// Mounts a carousel on `root`.
///
/// `root` must contain a [`VIEWPORT_SELECTOR`] element, a [`TRACK_SELECTOR`]
/// element and at least one [`SLIDE_SELECTOR`] element. Previous and next
/// controls are picked up when present.
pub fn mount(root: &Element, options: MountOptions) -> Result<CarouselHandle, JsValue> {
    let window = window()?;
    let config = resolve_config(
        options.transition_duration_ms,
        root.get_attribute(DURATION_ATTRIBUTE).as_deref(),
    )
    .map_err(js_error)?;

    let surface = DomSurface {
        viewport: required_html(root, VIEWPORT_SELECTOR)?,
        track: required_html(root, TRACK_SELECTOR)?,
        slides: slides(root)?,
        prev: optional_html(root, PREV_SELECTOR)?,
        next: optional_html(root, NEXT_SELECTOR)?,
        continue_control: options.continue_control,
    };
    if surface.prev.is_none() || surface.next.is_none() {
        warn!("carousel mounted without previous/next controls");
    }
    let viewport: EventTarget = surface.viewport.clone().into();
    let prev = surface.prev.clone();
    let next = surface.next.clone();

    let owner = Rc::new(OnceCell::new());
    let scheduler = TimeoutScheduler {
        window: window.clone(),
        owner: Rc::clone(&owner),
    };
    let carousel = Rc::new(RefCell::new(
        Carousel::mount(surface, scheduler, config).map_err(js_error)?,
    ));
    let _ = owner.set(Rc::downgrade(&carousel));

    let mut listeners = Vec::new();
    let captured: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    {
        let carousel = Rc::clone(&carousel);
        let captured = Rc::clone(&captured);
        let viewport_el = viewport.clone().unchecked_into::<Element>();
        listeners.push(Listener::new(&viewport, "pointerdown", move |event| {
            let Ok(event) = event.dyn_into::<PointerEvent>() else {
                return;
            };
            if event.button() != 0 || captured.get().is_some() {
                return;
            }
            if carousel.borrow_mut().drag_start(pointer_position(&event)) {
                captured.set(Some(event.pointer_id()));
                let _ = viewport_el.set_pointer_capture(event.pointer_id());
            }
        })?);
    }
    {
        let carousel = Rc::clone(&carousel);
        let captured = Rc::clone(&captured);
        listeners.push(Listener::new(&viewport, "pointermove", move |event| {
            let Ok(event) = event.dyn_into::<PointerEvent>() else {
                return;
            };
            if captured.get() == Some(event.pointer_id()) {
                carousel.borrow_mut().drag_move(pointer_position(&event));
            }
        })?);
    }
    for kind in RELEASE_EVENTS {
        let carousel = Rc::clone(&carousel);
        let captured = Rc::clone(&captured);
        let viewport_el = viewport.clone().unchecked_into::<Element>();
        listeners.push(Listener::new(&viewport, kind, move |event| {
            let Ok(event) = event.dyn_into::<PointerEvent>() else {
                return;
            };
            let Some(release) = pointer_release(kind) else {
                return;
            };
            if captured.get() != Some(event.pointer_id()) {
                return;
            }
            // Cleared first: releasing capture below dispatches `lostpointercapture`.
            captured.set(None);
            let _ = viewport_el.release_pointer_capture(event.pointer_id());
            let mut carousel = carousel.borrow_mut();
            match release {
                PointerRelease::Resolve => {
                    carousel.drag_end();
                }
                PointerRelease::Cancel => {
                    carousel.drag_cancel();
                }
            }
        })?);
    }
    if let Some(prev) = prev {
        let carousel = Rc::clone(&carousel);
        listeners.push(Listener::new(&prev, "click", move |_| {
            carousel.borrow_mut().previous_slide();
        })?);
    }
    if let Some(next) = next {
        let carousel = Rc::clone(&carousel);
        listeners.push(Listener::new(&next, "click", move |_| {
            carousel.borrow_mut().next_slide();
        })?);
    }
    {
        let carousel = Rc::clone(&carousel);
        let scope = root.clone();
        listeners.push(Listener::new(root, "keydown", move |event| {
            let Ok(event) = event.dyn_into::<KeyboardEvent>() else {
                return;
            };
            let key = match event.key().as_str() {
                "ArrowLeft" => NavKey::ArrowLeft,
                "ArrowRight" => NavKey::ArrowRight,
                _ => return,
            };
            let outcome = carousel.borrow_mut().key(key, focus_within(&scope));
            if outcome.prevent_default {
                event.prevent_default();
            }
        })?);
    }
    {
        let carousel = Rc::clone(&carousel);
        listeners.push(Listener::new(&window, "resize", move |_| {
            carousel.borrow_mut().resize();
        })?);
    }

    Ok(CarouselHandle {
        carousel,
        _listeners: listeners,
    })
}

/// Mounts a carousel on every element of `document` matching `selector`.
///
/// Each root's continue affordance is looked up inside that root only, so
/// several carousels can share a page.
pub fn mount_all(document: &Document, selector: &str) -> Result<Vec<CarouselHandle>, JsValue> {
    let roots = document.query_selector_all(selector)?;
    let mut handles = Vec::new();
    for i in 0..roots.length() {
        let Some(root) = roots.get(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let options = MountOptions {
            transition_duration_ms: None,
            continue_control: optional_html(&root, CONTINUE_SELECTOR)?,
        };
        handles.push(mount(&root, options)?);
    }
    debug!("mounted {} carousels for {selector}", handles.len());
    Ok(handles)
}
