// SPDX-License-Identifier: MPL-2.0
//! `sitekit` is the client-side behavior layer of a dual-locale marketing
//! site, rebuilt as a host-independent engine.
//!
//! It couples a persisted language preference, attribute-driven text
//! substitution, scroll-derived chrome, one-shot visibility triggers, and
//! numeric counter tweens behind a single session object. All document
//! access goes through the [`surface::Surface`] capability trait, so the
//! whole engine runs (and is tested) against the in-memory reference host
//! without a browser.

#![doc(html_root_url = "https://docs.rs/sitekit/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod surface;
pub mod timing;
pub mod ui;

#[cfg(test)]
mod test_utils;

// Stable utility surface for page-specific scripts. Other scripts depend on
// these exact items; extend it, don't reshape it.
pub use app::{App, Flags, InputEvent};
pub use i18n::Locale;
pub use surface::{is_in_viewport, Surface};
pub use timing::{Debounce, Throttle};
pub use ui::counter::{format_value, CounterTween};
