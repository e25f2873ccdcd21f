// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the session.
//!
//! Every handler registration is an explicit entry in this registry with an
//! enroll/unenroll lifecycle, instead of ad-hoc listeners on a global
//! document. For one event kind, routes fire in registration order; no
//! ordering holds between different kinds. A route may carry a throttle, in
//! which case events landing inside the closed window are dropped (not
//! queued).

use super::message::EventKind;
use crate::timing::Throttle;

/// Feature a subscription delivers events to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Navbar chrome, scroll-indicator fade, visibility triggers.
    Chrome,
    /// Parallax transforms (throttled).
    Parallax,
    /// Collapsible menu interactions.
    Menu,
    /// Language switch.
    Language,
    /// Decorative pointer effects.
    Effects,
    /// Animation advancement.
    Animation,
}

/// Handle returned by enrollment, used for later unenrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

#[derive(Debug)]
struct Entry {
    kind: EventKind,
    route: Route,
    throttle: Option<Throttle>,
    active: bool,
}

/// Registry of live event routes.
#[derive(Debug, Default)]
pub struct Subscriptions {
    entries: Vec<Entry>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enroll(&mut self, kind: EventKind, route: Route) -> SubscriptionId {
        self.push(kind, route, None)
    }

    /// Enrolls a rate-limited route: at most one delivery per window.
    pub fn enroll_throttled(
        &mut self,
        kind: EventKind,
        route: Route,
        window_ms: u64,
    ) -> SubscriptionId {
        self.push(kind, route, Some(Throttle::new(window_ms)))
    }

    fn push(&mut self, kind: EventKind, route: Route, throttle: Option<Throttle>) -> SubscriptionId {
        self.entries.push(Entry {
            kind,
            route,
            throttle,
            active: true,
        });
        SubscriptionId(self.entries.len() - 1)
    }

    pub fn unenroll(&mut self, id: SubscriptionId) {
        if let Some(entry) = self.entries.get_mut(id.0) {
            entry.active = false;
        }
    }

    pub fn is_active(&self, id: SubscriptionId) -> bool {
        self.entries.get(id.0).is_some_and(|e| e.active)
    }

    /// Routes to deliver an event of `kind` to, in registration order, with
    /// throttles applied.
    pub fn routes_for(&mut self, kind: EventKind, now_ms: u64) -> Vec<Route> {
        let mut routes = Vec::new();
        for entry in &mut self.entries {
            if !entry.active || entry.kind != kind {
                continue;
            }
            let admitted = match &mut entry.throttle {
                Some(throttle) => throttle.admit(now_ms),
                None => true,
            };
            if admitted {
                routes.push(entry.route);
            }
        }
        routes
    }
}
