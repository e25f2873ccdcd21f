// SPDX-License-Identifier: MPL-2.0
//! One-shot visibility triggers.
//!
//! Each trigger observes a set of elements and fires once per element when
//! its visible fraction crosses the trigger's threshold; fired elements are
//! unenrolled immediately, so the revealed state is terminal. Three trigger
//! shapes coexist with independent thresholds:
//!
//! - [`RevealTrigger`]: marks crossed elements with the `visible` class
//! - [`StaggerTrigger`]: reveals list items on a per-index delay
//! - [`GroupTrigger`]: fires a single time for a whole container (used to
//!   kick off the counter tweens)

use crate::config::defaults::STAGGER_HIDDEN_OFFSET;
use crate::surface::{visible_fraction, NodeId, Surface};

/// Marker class interpreted by the page stylesheet.
pub const VISIBLE_CLASS: &str = "visible";

/// Generic one-shot fade-in trigger.
#[derive(Debug)]
pub struct RevealTrigger {
    threshold: f64,
    bottom_margin: f64,
    entries: Vec<NodeId>,
}

impl RevealTrigger {
    pub fn new(threshold: f64, bottom_margin: f64) -> Self {
        Self {
            threshold,
            bottom_margin,
            entries: Vec::new(),
        }
    }

    pub fn enroll(&mut self, nodes: impl IntoIterator<Item = NodeId>) {
        self.entries.extend(nodes);
    }

    /// Elements still being observed.
    pub fn observed(&self) -> usize {
        self.entries.len()
    }

    /// Re-checks every enrolled element, marks the ones that crossed the
    /// threshold with the `visible` class, and unenrolls them. Returns the
    /// newly revealed elements.
    pub fn evaluate<S: Surface>(&mut self, surface: &mut S) -> Vec<NodeId> {
        let viewport = surface.viewport();
        let mut revealed = Vec::new();
        self.entries.retain(|&node| {
            let crossed = surface
                .rect(node)
                .is_some_and(|rect| {
                    visible_fraction(rect, viewport, self.bottom_margin) >= self.threshold
                });
            if crossed {
                revealed.push(node);
            }
            !crossed
        });
        for &node in &revealed {
            surface.add_class(node, VISIBLE_CLASS);
        }
        revealed
    }
}

/// Staggered list-item trigger: items hide at enroll time and reveal with a
/// per-index delay once they cross the threshold.
#[derive(Debug)]
pub struct StaggerTrigger {
    threshold: f64,
    step_ms: u64,
    entries: Vec<(NodeId, usize)>,
    pending: Vec<(NodeId, u64)>,
    enrolled: usize,
}

impl StaggerTrigger {
    pub fn new(threshold: f64, step_ms: u64) -> Self {
        Self {
            threshold,
            step_ms,
            entries: Vec::new(),
            pending: Vec::new(),
            enrolled: 0,
        }
    }

    /// Enrolls items and puts them in their hidden starting pose.
    pub fn enroll<S: Surface>(&mut self, surface: &mut S, nodes: impl IntoIterator<Item = NodeId>) {
        for node in nodes {
            surface.set_style(node, "opacity", "0");
            surface.set_style(
                node,
                "transform",
                &format!("translateX({}px)", STAGGER_HIDDEN_OFFSET),
            );
            surface.set_style(node, "transition", "all 0.6s ease");
            self.entries.push((node, self.enrolled));
            self.enrolled += 1;
        }
    }

    pub fn observed(&self) -> usize {
        self.entries.len()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Moves items that crossed the threshold onto the delay queue; each
    /// item's deadline is `now + index * step`.
    pub fn evaluate<S: Surface>(&mut self, surface: &S, now_ms: u64) {
        let viewport = surface.viewport();
        let threshold = self.threshold;
        let step_ms = self.step_ms;
        let pending = &mut self.pending;
        self.entries.retain(|&(node, index)| {
            let crossed = surface
                .rect(node)
                .is_some_and(|rect| visible_fraction(rect, viewport, 0.0) >= threshold);
            if crossed {
                pending.push((node, now_ms.saturating_add(index as u64 * step_ms)));
            }
            !crossed
        });
    }

    /// Reveals every queued item whose deadline has passed.
    pub fn release<S: Surface>(&mut self, surface: &mut S, now_ms: u64) -> Vec<NodeId> {
        let mut released = Vec::new();
        self.pending.retain(|&(node, deadline)| {
            if now_ms >= deadline {
                released.push(node);
                false
            } else {
                true
            }
        });
        for &node in &released {
            surface.set_style(node, "opacity", "1");
            surface.set_style(node, "transform", "translateX(0)");
        }
        released
    }
}

/// One-shot trigger for a whole container; used by the counter group so the
/// tweens start together.
#[derive(Debug)]
pub struct GroupTrigger {
    group: Option<NodeId>,
    threshold: f64,
    fired: bool,
}

impl GroupTrigger {
    pub fn new(group: Option<NodeId>, threshold: f64) -> Self {
        Self {
            group,
            threshold,
            fired: false,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Returns `true` exactly once, the first time the container crosses the
    /// threshold. Afterwards the trigger is disconnected.
    pub fn evaluate<S: Surface>(&mut self, surface: &S) -> bool {
        if self.fired {
            return false;
        }
        let Some(group) = self.group else {
            return false;
        };
        let viewport = surface.viewport();
        let crossed = surface
            .rect(group)
            .is_some_and(|rect| visible_fraction(rect, viewport, 0.0) >= self.threshold);
        if crossed {
            self.fired = true;
            self.group = None;
        }
        crossed
    }
}
