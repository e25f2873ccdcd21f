// SPDX-License-Identifier: MPL-2.0
//! Scroll-derived transforms: wave parallax, the hero visual, and the
//! scroll-indicator fade.
//!
//! Unlike the reveal triggers these are level-triggered and reversible:
//! every qualifying scroll event recomputes the full output from the
//! current offset alone.

use crate::config::defaults::{
    PARALLAX_HERO_SPEED, PARALLAX_RATE, PARALLAX_WAVE_STEP, SCROLL_INDICATOR_THRESHOLD,
};
use crate::surface::{NodeId, Surface};

pub const WAVE_CLASS: &str = "wave";
pub const HERO_CLASS: &str = "hero-visual";
pub const INDICATOR_CLASS: &str = "scroll-indicator";

/// Vertical translation of wave `index` at the given scroll offset.
pub fn wave_offset(offset: f64, index: usize) -> f64 {
    offset * PARALLAX_RATE * ((index + 1) as f64 * PARALLAX_WAVE_STEP)
}

/// Vertical translation of the hero visual at the given scroll offset.
pub fn hero_offset(offset: f64) -> f64 {
    offset * PARALLAX_RATE * PARALLAX_HERO_SPEED
}

/// Whether the scroll indicator is hidden at this offset.
pub fn indicator_hidden(offset: f64) -> bool {
    offset > SCROLL_INDICATOR_THRESHOLD
}

/// The parallax layers present on the page, discovered once at startup.
#[derive(Debug, Default)]
pub struct ParallaxLayers {
    waves: Vec<NodeId>,
    hero: Option<NodeId>,
}

impl ParallaxLayers {
    pub fn discover<S: Surface>(surface: &S) -> Self {
        Self {
            waves: surface.query_class(WAVE_CLASS),
            hero: surface.query_class(HERO_CLASS).first().copied(),
        }
    }

    /// True when the page has nothing to move; the throttled scroll route
    /// is not worth enrolling in that case.
    pub fn is_empty(&self) -> bool {
        self.waves.is_empty() && self.hero.is_none()
    }

    /// Writes the transform for every layer from the current offset.
    pub fn apply<S: Surface>(&self, surface: &mut S, offset: f64) {
        for (index, &wave) in self.waves.iter().enumerate() {
            let y = wave_offset(offset, index);
            surface.set_style(wave, "transform", &format!("translate3d(0, {}px, 0)", y));
        }
        if let Some(hero) = self.hero {
            let y = hero_offset(offset);
            surface.set_style(hero, "transform", &format!("translate3d(0, {}px, 0)", y));
        }
    }
}

/// Recomputes the scroll indicator's visibility and interactivity.
pub fn apply_indicator<S: Surface>(surface: &mut S, offset: f64) {
    let Some(indicator) = surface.query_class(INDICATOR_CLASS).first().copied() else {
        return;
    };
    if indicator_hidden(offset) {
        surface.set_style(indicator, "opacity", "0");
        surface.set_style(indicator, "pointer-events", "none");
    } else {
        surface.set_style(indicator, "opacity", "1");
        surface.set_style(indicator, "pointer-events", "auto");
    }
}
