// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while configuring or mounting a carousel.
//!
//! Navigation itself never fails: rejected and out-of-range requests are
//! reported through return values, not errors.

use core::fmt;

/// Error returned when a carousel cannot be mounted on a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountError {
    /// The surface has no slides.
    NoSlides,
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSlides => f.write_str("cannot mount a carousel on a surface with no slides"),
        }
    }
}

impl core::error::Error for MountError {}

/// Error returned for an unusable [`CarouselConfig`](crate::CarouselConfig).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The transition duration was zero.
    ZeroTransitionDuration,
    /// The transition duration could not be parsed as a whole number of milliseconds.
    InvalidTransitionDuration,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTransitionDuration => {
                f.write_str("transition duration must be greater than zero milliseconds")
            }
            Self::InvalidTransitionDuration => {
                f.write_str("transition duration must be a whole number of milliseconds")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
