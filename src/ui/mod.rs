// SPDX-License-Identifier: MPL-2.0
//! Behavior components, one module per page feature.
//!
//! Each component follows the same shape: a small state struct (when the
//! feature is stateful), pure helpers for the math, and an `update`/`apply`
//! pair that routes messages and writes the outcome to the surface. All
//! components no-op when their markup is missing.
//!
//! - [`navbar`] - active-link highlighting, collapsible menu, scrolled chrome
//! - [`reveal`] - one-shot visibility triggers (fade-in, stagger, counters)
//! - [`counter`] - numeric tween with magnitude-based formatting
//! - [`parallax`] - scroll-rate transforms and the scroll-indicator fade
//! - [`effects`] - decorative pointer effects (ripple, tilt, pulse, anchors)

pub mod counter;
pub mod effects;
pub mod navbar;
pub mod parallax;
pub mod reveal;
