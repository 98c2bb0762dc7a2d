// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::num::NonZeroU32;
use core::str::FromStr;

use crate::error::ConfigError;

const DEFAULT_TRANSITION_DURATION: NonZeroU32 =
    match NonZeroU32::new(CarouselConfig::DEFAULT_TRANSITION_DURATION_MS) {
        Some(ms) => ms,
        None => panic!("default transition duration must be nonzero"),
    };

/// Carousel configuration.
///
/// The only recognized option is the transition duration. It must match the
/// duration of the surface's eased track transition, otherwise the animation
/// lock releases too early or too late.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselConfig {
    transition_duration_ms: NonZeroU32,
}

impl CarouselConfig {
    /// Default transition duration, in milliseconds.
    pub const DEFAULT_TRANSITION_DURATION_MS: u32 = 500;

    /// Creates a configuration with the default transition duration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transition_duration_ms: DEFAULT_TRANSITION_DURATION,
        }
    }

    /// Sets the transition duration. Zero is rejected.
    pub fn with_transition_duration_ms(mut self, ms: u32) -> Result<Self, ConfigError> {
        self.transition_duration_ms =
            NonZeroU32::new(ms).ok_or(ConfigError::ZeroTransitionDuration)?;
        Ok(self)
    }

    /// Returns the transition duration, in milliseconds.
    #[must_use]
    pub fn transition_duration_ms(&self) -> u32 {
        self.transition_duration_ms.get()
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a transition duration such as `"350"` (surrounding whitespace allowed).
impl FromStr for CarouselConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ms = s
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidTransitionDuration)?;
        Self::new().with_transition_duration_ms(ms)
    }
}
