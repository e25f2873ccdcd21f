// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the behavior layer.
//!
//! The site ships exactly two locales, carried inline in the markup as
//! paired `data-en` / `data-cn` attributes. This module owns the locale
//! enumeration and the renderer that projects the active locale onto the
//! surface.
//!
//! # Features
//!
//! - Two fixed locales with a hard default (English)
//! - Lenient parsing of the persisted code, falling back to the default
//! - Idempotent re-rendering on toggle
//! - Placeholder-aware text application for input-like controls

pub mod locale;
pub mod renderer;

pub use locale::Locale;
