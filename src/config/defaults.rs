// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the engine's behavior constants.
//!
//! This module is the single source of truth for the thresholds, rates, and
//! durations used across the components. External stylesheets are tuned
//! against these values, so changing one here changes the page's feel
//! everywhere it applies.
//!
//! # Categories
//!
//! - **Chrome**: navbar and scroll-indicator thresholds
//! - **Reveal**: visibility-trigger thresholds and margins
//! - **Counter**: numeric tween cadence and duration
//! - **Parallax**: scroll-rate multipliers and throttle window
//! - **Effects**: decorative effect geometry and lifetimes

// ==========================================================================
// Chrome
// ==========================================================================

/// Scroll offset above which the navbar gains the `scrolled` marker.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;

/// Scroll offset above which the scroll indicator is hidden and disabled.
pub const SCROLL_INDICATOR_THRESHOLD: f64 = 100.0;

/// Path the active-link resolution falls back to when the location path is
/// empty.
pub const DEFAULT_PAGE: &str = "index.html";

// ==========================================================================
// Reveal
// ==========================================================================

/// Visible fraction required before a generic fade-in element is revealed.
pub const FADE_IN_THRESHOLD: f64 = 0.1;

/// Bottom root margin for the generic fade-in trigger. Shrinks the
/// observation viewport so elements reveal slightly before their natural
/// entry point.
pub const FADE_IN_BOTTOM_MARGIN: f64 = 100.0;

/// Visible fraction required before the counter group starts animating.
pub const COUNTER_GROUP_THRESHOLD: f64 = 0.5;

/// Visible fraction required before a staggered list item is scheduled.
pub const STAGGER_THRESHOLD: f64 = 0.2;

/// Per-index delay between staggered list-item reveals, in milliseconds.
pub const STAGGER_STEP_MS: u64 = 100;

/// Horizontal offset applied to staggered items before they reveal.
pub const STAGGER_HIDDEN_OFFSET: f64 = -30.0;

// ==========================================================================
// Counter
// ==========================================================================

/// Tick interval of the numeric tween, in milliseconds (~60 Hz).
pub const COUNTER_TICK_MS: u64 = 16;

/// Duration of a counter animation, in milliseconds.
pub const COUNTER_DURATION_MS: u64 = 2000;

// ==========================================================================
// Parallax
// ==========================================================================

/// Base rate applied to the scroll offset before per-element speeds.
pub const PARALLAX_RATE: f64 = 0.5;

/// Speed multiplier step per wave element: wave `i` moves at
/// `(i + 1) * PARALLAX_WAVE_STEP` times the base rate.
pub const PARALLAX_WAVE_STEP: f64 = 0.3;

/// Speed multiplier for the hero visual.
pub const PARALLAX_HERO_SPEED: f64 = 0.3;

/// Throttle window for the parallax scroll route, in milliseconds.
pub const PARALLAX_THROTTLE_MS: u64 = 10;

// ==========================================================================
// Effects
// ==========================================================================

/// Lifetime of a ripple decoration before it is removed, in milliseconds.
pub const RIPPLE_LIFETIME_MS: u64 = 600;

/// Divisor converting pointer distance from a card's center into tilt
/// degrees.
pub const TILT_DIVISOR: f64 = 10.0;

/// Vertical lift applied to a tilted card.
pub const TILT_LIFT: f64 = 8.0;
