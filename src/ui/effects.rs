// SPDX-License-Identifier: MPL-2.0
//! Decorative pointer effects: button ripples, card tilt, pulse-indicator
//! hover, and smooth scrolling for in-page anchors.
//!
//! Every handler inspects the event target and skips silently when the
//! target is not one of its elements, so the same pointer stream can be fed
//! through all of them. Only the ripple effect carries state (the removal
//! deadlines of spawned decorations); everything else is pure per gesture.

use super::parallax::INDICATOR_CLASS;
use crate::config::defaults::{RIPPLE_LIFETIME_MS, TILT_DIVISOR, TILT_LIFT};
use crate::surface::{NodeId, Surface};

pub const BUTTON_CLASS: &str = "btn";
pub const RIPPLE_CLASS: &str = "ripple";
pub const CARD_CLASS: &str = "mission-card";
pub const PULSE_CLASS: &str = "pulse-indicator";
pub const MISSION_CLASS: &str = "mission";

/// Tilt angles for a pointer at `(x, y)` relative to a card of the given
/// size: the card rotates toward the pointer around its center.
pub fn tilt_angles(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let rotate_x = (y - center_y) / TILT_DIVISOR;
    let rotate_y = (center_x - x) / TILT_DIVISOR;
    (rotate_x, rotate_y)
}

/// Pointer-effect dispatcher plus the ripple removal queue.
#[derive(Debug, Default)]
pub struct Effects {
    ripples: Vec<(NodeId, u64)>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_ripples(&self) -> usize {
        self.ripples.len()
    }

    /// Press on a button spawns a ripple sized to the button's larger side,
    /// centered on the pointer. The decoration is removed once its lifetime
    /// expires.
    pub fn pointer_pressed<S: Surface>(
        &mut self,
        surface: &mut S,
        target: NodeId,
        x: f64,
        y: f64,
        now_ms: u64,
    ) {
        if !surface.has_class(target, BUTTON_CLASS) {
            return;
        }
        let Some(rect) = surface.rect(target) else {
            return;
        };
        let Some(ripple) = surface.spawn_child(target, RIPPLE_CLASS) else {
            return;
        };
        let size = rect.width.max(rect.height);
        let left = x - rect.x - size / 2.0;
        let top = y - rect.y - size / 2.0;
        surface.set_style(ripple, "width", &format!("{}px", size));
        surface.set_style(ripple, "height", &format!("{}px", size));
        surface.set_style(ripple, "left", &format!("{}px", left));
        surface.set_style(ripple, "top", &format!("{}px", top));
        self.ripples
            .push((ripple, now_ms.saturating_add(RIPPLE_LIFETIME_MS)));
    }

    /// Pointer movement over a mission card tilts it toward the pointer.
    pub fn pointer_moved<S: Surface>(&self, surface: &mut S, target: NodeId, x: f64, y: f64) {
        if !surface.has_class(target, CARD_CLASS) {
            return;
        }
        let Some(rect) = surface.rect(target) else {
            return;
        };
        let (rotate_x, rotate_y) = tilt_angles(x - rect.x, y - rect.y, rect.width, rect.height);
        surface.set_style(
            target,
            "transform",
            &format!(
                "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-{}px)",
                rotate_x, rotate_y, TILT_LIFT
            ),
        );
    }

    /// Pointer entering a pulse indicator scales it up with a glow.
    pub fn pointer_entered<S: Surface>(&self, surface: &mut S, target: NodeId) {
        if !surface.has_class(target, PULSE_CLASS) {
            return;
        }
        surface.set_style(target, "transform", "scale(2)");
        surface.set_style(target, "box-shadow", "0 0 20px var(--color-primary)");
    }

    /// Pointer leaving restores the neutral pose of whichever effect owned
    /// the element.
    pub fn pointer_left<S: Surface>(&self, surface: &mut S, target: NodeId) {
        if surface.has_class(target, CARD_CLASS) {
            surface.set_style(
                target,
                "transform",
                "perspective(1000px) rotateX(0) rotateY(0) translateY(0)",
            );
        } else if surface.has_class(target, PULSE_CLASS) {
            surface.set_style(target, "transform", "scale(1)");
            surface.set_style(target, "box-shadow", "none");
        }
    }

    /// Clicks on in-page anchors and on the scroll indicator smooth-scroll
    /// to their section.
    pub fn clicked<S: Surface>(&self, surface: &mut S, target: NodeId) {
        if surface.has_class(target, INDICATOR_CLASS) {
            if let Some(section) = surface.query_class(MISSION_CLASS).first().copied() {
                surface.scroll_to(section);
            }
            return;
        }
        let Some(href) = surface.attr(target, "href") else {
            return;
        };
        let Some(anchor) = href.strip_prefix('#') else {
            return;
        };
        if anchor.is_empty() {
            return;
        }
        if let Some(section) = surface.query_id(anchor) {
            surface.scroll_to(section);
        }
    }

    /// Removes every spawned ripple whose lifetime has elapsed.
    pub fn expire<S: Surface>(&mut self, surface: &mut S, now_ms: u64) {
        let mut expired = Vec::new();
        self.ripples.retain(|&(node, deadline)| {
            if now_ms >= deadline {
                expired.push(node);
                false
            } else {
                true
            }
        });
        for node in expired {
            surface.remove_node(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::memory::{MemorySurface, NodeSpec};
    use crate::test_utils::assert_abs_diff_eq;

    fn page() -> MemorySurface {
        let mut surface = MemorySurface::new("/index.html", 1280.0, 800.0);
        surface.insert(
            NodeSpec::new()
                .id("cta")
                .class(BUTTON_CLASS)
                .rect(100.0, 200.0, 160.0, 48.0),
        );
        surface.insert(
            NodeSpec::new()
                .class(CARD_CLASS)
                .rect(0.0, 600.0, 400.0, 300.0),
        );
        surface.insert(NodeSpec::new().class(PULSE_CLASS).rect(50.0, 50.0, 16.0, 16.0));
        surface.insert(NodeSpec::new().class(MISSION_CLASS).rect(0.0, 900.0, 1280.0, 600.0));
        surface.insert(NodeSpec::new().class(INDICATOR_CLASS).rect(600.0, 700.0, 80.0, 80.0));
        surface
    }

    #[test]
    fn tilt_is_neutral_at_the_center() {
        let (rx, ry) = tilt_angles(200.0, 150.0, 400.0, 300.0);
        assert_abs_diff_eq!(rx, 0.0);
        assert_abs_diff_eq!(ry, 0.0);
    }

    #[test]
    fn tilt_is_antisymmetric_around_the_center() {
        let (rx1, ry1) = tilt_angles(100.0, 50.0, 400.0, 300.0);
        let (rx2, ry2) = tilt_angles(300.0, 250.0, 400.0, 300.0);
        assert_abs_diff_eq!(rx1, -rx2);
        assert_abs_diff_eq!(ry1, -ry2);
    }

    #[test]
    fn press_on_a_button_spawns_a_centered_ripple() {
        let mut surface = page();
        let button = surface.query_id("cta").unwrap();
        let mut effects = Effects::new();

        // Pointer at document (180, 220) → relative (80, 20); size 160.
        effects.pointer_pressed(&mut surface, button, 180.0, 220.0, 1_000);

        let ripple = surface.query_class(RIPPLE_CLASS)[0];
        assert!(surface.contains(button, ripple));
        assert_eq!(surface.style(ripple, "width").as_deref(), Some("160px"));
        assert_eq!(surface.style(ripple, "left").as_deref(), Some("0px"));
        assert_eq!(surface.style(ripple, "top").as_deref(), Some("-60px"));
        assert_eq!(effects.pending_ripples(), 1);
    }

    #[test]
    fn ripples_expire_after_their_lifetime() {
        let mut surface = page();
        let button = surface.query_id("cta").unwrap();
        let mut effects = Effects::new();
        effects.pointer_pressed(&mut surface, button, 180.0, 220.0, 1_000);

        effects.expire(&mut surface, 1_599);
        assert_eq!(surface.query_class(RIPPLE_CLASS).len(), 1);
        effects.expire(&mut surface, 1_600);
        assert!(surface.query_class(RIPPLE_CLASS).is_empty());
        assert_eq!(effects.pending_ripples(), 0);
    }

    #[test]
    fn press_on_a_non_button_does_nothing() {
        let mut surface = page();
        let card = surface.query_class(CARD_CLASS)[0];
        let mut effects = Effects::new();
        effects.pointer_pressed(&mut surface, card, 10.0, 610.0, 0);
        assert!(surface.query_class(RIPPLE_CLASS).is_empty());
    }

    #[test]
    fn card_tilts_toward_the_pointer_and_resets_on_leave() {
        let mut surface = page();
        let card = surface.query_class(CARD_CLASS)[0];
        let effects = Effects::new();

        // Bottom-right quadrant: positive rotateX, negative rotateY.
        effects.pointer_moved(&mut surface, card, 300.0, 850.0);
        let transform = surface.style(card, "transform").unwrap();
        assert!(transform.contains("rotateX(10deg)"));
        assert!(transform.contains("rotateY(-10deg)"));
        assert!(transform.contains("translateY(-8px)"));

        effects.pointer_left(&mut surface, card);
        assert_eq!(
            surface.style(card, "transform").as_deref(),
            Some("perspective(1000px) rotateX(0) rotateY(0) translateY(0)")
        );
    }

    #[test]
    fn pulse_indicator_scales_on_hover() {
        let mut surface = page();
        let pulse = surface.query_class(PULSE_CLASS)[0];
        let effects = Effects::new();

        effects.pointer_entered(&mut surface, pulse);
        assert_eq!(surface.style(pulse, "transform").as_deref(), Some("scale(2)"));

        effects.pointer_left(&mut surface, pulse);
        assert_eq!(surface.style(pulse, "transform").as_deref(), Some("scale(1)"));
        assert_eq!(surface.style(pulse, "box-shadow").as_deref(), Some("none"));
    }

    #[test]
    fn indicator_click_scrolls_to_the_mission_section() {
        let mut surface = page();
        let indicator = surface.query_class(INDICATOR_CLASS)[0];
        Effects::new().clicked(&mut surface, indicator);
        assert_eq!(surface.viewport().scroll_offset, 900.0);
    }

    #[test]
    fn anchor_click_scrolls_to_the_referenced_section() {
        let mut surface = page();
        surface.insert(NodeSpec::new().id("contact").rect(0.0, 2000.0, 1280.0, 400.0));
        let anchor = surface.insert(NodeSpec::new().attr("href", "#contact"));

        Effects::new().clicked(&mut surface, anchor);
        assert_eq!(surface.viewport().scroll_offset, 2000.0);
    }

    #[test]
    fn bare_hash_and_external_links_are_ignored() {
        let mut surface = page();
        let bare = surface.insert(NodeSpec::new().attr("href", "#"));
        let external = surface.insert(NodeSpec::new().attr("href", "about.html"));

        Effects::new().clicked(&mut surface, bare);
        Effects::new().clicked(&mut surface, external);
        assert_eq!(surface.viewport().scroll_offset, 0.0);
    }
}
