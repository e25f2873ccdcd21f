// SPDX-License-Identifier: MPL-2.0
//! Navigation bar behavior: active-link highlighting, the collapsible
//! mobile menu, and the scroll-derived chrome flag.
//!
//! The menu is plain per-page state: it opens from its toggle control and
//! closes when a link is activated or a pointer lands outside both the menu
//! and the toggle. Nothing here survives a page load.

use crate::config::defaults::{DEFAULT_PAGE, NAVBAR_SCROLL_THRESHOLD};
use crate::surface::Surface;

pub const NAVBAR_ID: &str = "navbar";
pub const MENU_ID: &str = "navMenu";
pub const TOGGLE_ID: &str = "mobileToggle";
pub const LINK_CLASS: &str = "nav-link";
pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";

/// Messages consumed by the menu state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    /// A nav link was activated by the user.
    LinkActivated,
    /// A pointer press landed outside both the menu and its toggle.
    OutsidePress,
}

/// Events propagated to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The open/closed state changed and the class markers need a re-sync.
    MenuChanged,
}

/// Process a menu message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::MenuChanged
        }
        Message::LinkActivated | Message::OutsidePress => {
            if *menu_open {
                *menu_open = false;
                Event::MenuChanged
            } else {
                Event::None
            }
        }
    }
}

/// Mirrors the open/closed state onto the menu and toggle class markers.
pub fn sync_menu<S: Surface>(surface: &mut S, menu_open: bool) {
    for id in [MENU_ID, TOGGLE_ID] {
        let Some(node) = surface.query_id(id) else {
            continue;
        };
        if menu_open {
            surface.add_class(node, ACTIVE_CLASS);
        } else {
            surface.remove_class(node, ACTIVE_CLASS);
        }
    }
}

/// Last segment of the location path, or the default page when empty.
pub fn current_page(path: &str) -> String {
    let segment = path.rsplit('/').next().unwrap_or("");
    if segment.is_empty() {
        DEFAULT_PAGE.to_string()
    } else {
        segment.to_string()
    }
}

/// Marks the link whose target matches the current page as active and
/// clears the marker everywhere else.
pub fn resolve_active_link<S: Surface>(surface: &mut S) {
    let page = current_page(&surface.location_path());
    for link in surface.query_class(LINK_CLASS) {
        surface.remove_class(link, ACTIVE_CLASS);
        let Some(href) = surface.attr(link, "href") else {
            continue;
        };
        if href == page {
            surface.add_class(link, ACTIVE_CLASS);
        }
    }
}

/// Whether the navbar shows its scrolled chrome at this offset.
pub fn is_scrolled(offset: f64) -> bool {
    offset > NAVBAR_SCROLL_THRESHOLD
}

/// Recomputes the `scrolled` marker from the current offset. Level-triggered
/// with no hysteresis.
pub fn apply_scroll_state<S: Surface>(surface: &mut S, offset: f64) {
    let Some(navbar) = surface.query_id(NAVBAR_ID) else {
        return;
    };
    if is_scrolled(offset) {
        surface.add_class(navbar, SCROLLED_CLASS);
    } else {
        surface.remove_class(navbar, SCROLLED_CLASS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::memory::{MemorySurface, NodeSpec};

    fn page_with_nav(path: &str) -> MemorySurface {
        let mut surface = MemorySurface::new(path, 1280.0, 800.0);
        surface.insert(NodeSpec::new().id(NAVBAR_ID));
        let menu = surface.insert(NodeSpec::new().id(MENU_ID));
        surface.insert(NodeSpec::new().id(TOGGLE_ID));
        for href in ["index.html", "technology.html", "about.html"] {
            surface.insert(NodeSpec::new().class(LINK_CLASS).attr("href", href).parent(menu));
        }
        surface
    }

    fn active_hrefs(surface: &MemorySurface) -> Vec<String> {
        surface
            .query_class(LINK_CLASS)
            .into_iter()
            .filter(|&link| surface.has_class(link, ACTIVE_CLASS))
            .filter_map(|link| surface.attr(link, "href"))
            .collect()
    }

    #[test]
    fn toggle_flips_menu_state() {
        let mut open = false;
        assert_eq!(update(Message::ToggleMenu, &mut open), Event::MenuChanged);
        assert!(open);
        assert_eq!(update(Message::ToggleMenu, &mut open), Event::MenuChanged);
        assert!(!open);
    }

    #[test]
    fn link_activation_closes_an_open_menu() {
        let mut open = true;
        assert_eq!(update(Message::LinkActivated, &mut open), Event::MenuChanged);
        assert!(!open);
        // Closing an already-closed menu is not a change.
        assert_eq!(update(Message::LinkActivated, &mut open), Event::None);
    }

    #[test]
    fn outside_press_closes_an_open_menu() {
        let mut open = true;
        assert_eq!(update(Message::OutsidePress, &mut open), Event::MenuChanged);
        assert!(!open);
    }

    #[test]
    fn sync_menu_mirrors_state_on_both_nodes() {
        let mut surface = page_with_nav("/index.html");
        sync_menu(&mut surface, true);
        let menu = surface.query_id(MENU_ID).unwrap();
        let toggle = surface.query_id(TOGGLE_ID).unwrap();
        assert!(surface.has_class(menu, ACTIVE_CLASS));
        assert!(surface.has_class(toggle, ACTIVE_CLASS));

        sync_menu(&mut surface, false);
        assert!(!surface.has_class(menu, ACTIVE_CLASS));
        assert!(!surface.has_class(toggle, ACTIVE_CLASS));
    }

    #[test]
    fn current_page_takes_the_last_segment() {
        assert_eq!(current_page("/pages/about.html"), "about.html");
        assert_eq!(current_page("index.html"), "index.html");
    }

    #[test]
    fn current_page_defaults_when_empty() {
        assert_eq!(current_page(""), DEFAULT_PAGE);
        assert_eq!(current_page("/"), DEFAULT_PAGE);
    }

    #[test]
    fn exactly_one_link_is_active_after_resolution() {
        let mut surface = page_with_nav("/technology.html");
        resolve_active_link(&mut surface);
        assert_eq!(active_hrefs(&surface), vec!["technology.html".to_string()]);
    }

    #[test]
    fn empty_path_activates_the_default_link() {
        let mut surface = page_with_nav("/");
        resolve_active_link(&mut surface);
        assert_eq!(active_hrefs(&surface), vec![DEFAULT_PAGE.to_string()]);
    }

    #[test]
    fn unmatched_path_activates_nothing() {
        let mut surface = page_with_nav("/careers.html");
        resolve_active_link(&mut surface);
        assert_eq!(active_hrefs(&surface), Vec::<String>::new());
    }

    #[test]
    fn resolution_clears_stale_markers() {
        let mut surface = page_with_nav("/about.html");
        let first = surface.query_class(LINK_CLASS)[0];
        surface.add_class(first, ACTIVE_CLASS);
        resolve_active_link(&mut surface);
        assert_eq!(active_hrefs(&surface), vec!["about.html".to_string()]);
    }

    #[test]
    fn scrolled_flag_is_a_strict_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(99.0));
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(101.0));
        assert!(is_scrolled(500.0));
    }

    #[test]
    fn apply_scroll_state_is_reversible() {
        let mut surface = page_with_nav("/index.html");
        let navbar = surface.query_id(NAVBAR_ID).unwrap();

        apply_scroll_state(&mut surface, 250.0);
        assert!(surface.has_class(navbar, SCROLLED_CLASS));
        apply_scroll_state(&mut surface, 20.0);
        assert!(!surface.has_class(navbar, SCROLLED_CLASS));
    }

    #[test]
    fn missing_navbar_is_a_noop() {
        let mut surface = MemorySurface::new("/index.html", 1280.0, 800.0);
        apply_scroll_state(&mut surface, 250.0);
        resolve_active_link(&mut surface);
    }
}
