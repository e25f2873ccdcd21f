// SPDX-License-Identifier: MPL-2.0
//! Projects the active locale onto the surface.
//!
//! Localizable nodes carry both `data-en` and `data-cn`; nodes with only one
//! of the pair are authoring mistakes and are left untouched. Input-like
//! controls receive the text as their placeholder, everything else as
//! content. Rendering the same locale twice is a no-op by construction: the
//! written text is a pure function of the attributes and the locale.

use super::Locale;
use crate::surface::Surface;

/// Class of the label on the language switch control.
const SWITCH_LABEL_CLASS: &str = "lang-text";

/// Applies `locale` to every localizable node currently in the document,
/// and refreshes the switch-control label.
pub fn render<S: Surface>(surface: &mut S, locale: Locale) {
    if let Some(label) = surface.query_class(SWITCH_LABEL_CLASS).first().copied() {
        surface.set_text(label, locale.switch_label());
    }

    for node in surface.query_attr(Locale::En.attr_name()) {
        // Require the full pair, mirroring the [data-en][data-cn] contract.
        if surface.attr(node, Locale::Cn.attr_name()).is_none() {
            continue;
        }
        let Some(text) = surface.attr(node, locale.attr_name()) else {
            continue;
        };
        if surface.kind(node).is_input_like() {
            surface.set_placeholder(node, &text);
        } else {
            surface.set_text(node, &text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::memory::{MemorySurface, NodeSpec};
    use crate::surface::ElementKind;

    fn localized_page() -> MemorySurface {
        let mut surface = MemorySurface::new("/index.html", 1280.0, 800.0);
        surface.insert(
            NodeSpec::new()
                .class("hero-title")
                .attr("data-en", "Welcome")
                .attr("data-cn", "欢迎"),
        );
        surface.insert(
            NodeSpec::new()
                .kind(ElementKind::Input)
                .attr("data-en", "Your email")
                .attr("data-cn", "您的邮箱"),
        );
        surface.insert(NodeSpec::new().class("lang-text").text("EN"));
        surface
    }

    #[test]
    fn render_applies_the_selected_variant() {
        let mut surface = localized_page();
        render(&mut surface, Locale::Cn);

        let title = surface.query_class("hero-title")[0];
        assert_eq!(surface.text(title).as_deref(), Some("欢迎"));
    }

    #[test]
    fn input_like_nodes_get_a_placeholder_not_text() {
        let mut surface = localized_page();
        render(&mut surface, Locale::En);

        let input = surface.query_attr("data-en")[1];
        assert_eq!(surface.placeholder(input).as_deref(), Some("Your email"));
        assert_eq!(surface.text(input), None);
    }

    #[test]
    fn switch_label_tracks_the_locale() {
        let mut surface = localized_page();
        let label = surface.query_class("lang-text")[0];

        render(&mut surface, Locale::Cn);
        assert_eq!(surface.text(label).as_deref(), Some("中文"));
        render(&mut surface, Locale::En);
        assert_eq!(surface.text(label).as_deref(), Some("EN"));
    }

    #[test]
    fn render_is_idempotent() {
        let mut first = localized_page();
        render(&mut first, Locale::Cn);
        let mut twice = first.clone();
        render(&mut twice, Locale::Cn);

        let title = first.query_class("hero-title")[0];
        assert_eq!(first.text(title), twice.text(title));
        let input = first.query_attr("data-en")[1];
        assert_eq!(first.placeholder(input), twice.placeholder(input));
    }

    #[test]
    fn half_paired_nodes_are_skipped() {
        let mut surface = MemorySurface::new("/", 1280.0, 800.0);
        let lonely = surface.insert(NodeSpec::new().attr("data-en", "Only English").text("original"));
        render(&mut surface, Locale::En);
        assert_eq!(surface.text(lonely).as_deref(), Some("original"));
    }

    #[test]
    fn render_without_any_targets_is_a_noop() {
        let mut surface = MemorySurface::new("/", 1280.0, 800.0);
        render(&mut surface, Locale::Cn);
        assert_eq!(surface.live_count(), 0);
    }
}
