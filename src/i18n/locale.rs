// SPDX-License-Identifier: MPL-2.0
//! The two-variant locale enumeration.

use std::fmt;

/// Active language of the page.
///
/// The persisted form is the lowercase code (`"en"` / `"cn"`); anything else
/// resolves to [`Locale::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Cn,
}

impl Locale {
    pub const DEFAULT: Locale = Locale::En;

    /// Parses a persisted language code. Unrecognized input yields `None`;
    /// callers treat that as an absent preference.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::En),
            "cn" => Some(Locale::Cn),
            _ => None,
        }
    }

    /// The persisted wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Cn => "cn",
        }
    }

    /// The markup attribute holding this locale's text variant.
    pub fn attr_name(self) -> &'static str {
        match self {
            Locale::En => "data-en",
            Locale::Cn => "data-cn",
        }
    }

    /// Label shown on the language switch control.
    pub fn switch_label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Cn => "中文",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Cn,
            Locale::Cn => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
