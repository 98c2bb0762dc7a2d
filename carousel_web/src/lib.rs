// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=carousel_web --heading-base-level=0

//! DOM binding for [`carousel_state`].
//!
//! On `wasm32` this crate mounts a carousel on existing HTML markup and
//! forwards pointer, keyboard, click and resize events to a
//! [`carousel_state::Carousel`]. The animation lock is released with
//! `setTimeout`.
//!
//! # Markup
//!
//! ```html
//! <section class="carousel" data-transition-duration-ms="400">
//!   <div data-carousel-viewport>
//!     <div data-carousel-track>
//!       <article data-carousel-slide>…</article>
//!       <article data-carousel-slide>…</article>
//!     </div>
//!   </div>
//!   <button data-carousel-prev>Back</button>
//!   <button data-carousel-next>Next</button>
//!   <a data-carousel-continue href="/start">Get started</a>
//! </section>
//! ```
//!
//! The stylesheet owns the eased `transition` on the track and its duration
//! must match `data-transition-duration-ms` (500 ms when absent). The binding
//! only writes inline `transform`, a `transition: none` override while a drag
//! is in progress, the `is-active` slide class and ARIA attributes.
//!
//! # Usage
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn start(
//!     document: &web_sys::Document,
//! ) -> Result<Vec<carousel_web::CarouselHandle>, wasm_bindgen::JsValue> {
//!     carousel_web::mount_all(document, ".carousel")
//! }
//! ```
//!
//! Keep the returned handles alive for as long as the carousels should respond
//! to input; dropping a handle removes its listeners.
//!
//! The [`markup`] module holds the selector contract and the attribute values
//! written for each state, and is available on every target.

#![no_std]

extern crate alloc;

pub mod markup;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::{CarouselHandle, DomSurface, MountOptions, TimeoutScheduler, mount, mount_all};
