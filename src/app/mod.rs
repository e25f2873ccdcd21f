// SPDX-License-Identifier: MPL-2.0
//! Session root state and orchestration between the page components.
//!
//! The `App` struct wires together the domains (preference store, locale
//! renderer, navigation, triggers, animations) and owns the view surface.
//! Initialization runs the full startup sequence; afterwards the host feeds
//! timestamped [`InputEvent`]s into [`App::handle`] and the engine routes
//! them through the subscription registry into the single update loop. This
//! file intentionally keeps policy decisions (which elements enroll where,
//! which routes exist) close together so user-facing behavior is easy to
//! audit.

mod message;
mod persistence;
mod subscription;
mod update;

pub use message::{EffectMessage, EventKind, Flags, InputEvent, Message};
pub use persistence::PreferenceStore;
pub use subscription::{Route, SubscriptionId, Subscriptions};

use crate::config::defaults::{
    COUNTER_GROUP_THRESHOLD, FADE_IN_BOTTOM_MARGIN, FADE_IN_THRESHOLD, PARALLAX_THROTTLE_MS,
    STAGGER_STEP_MS, STAGGER_THRESHOLD,
};
use crate::i18n::{renderer, Locale};
use crate::surface::{NodeId, Surface};
use crate::ui::counter::CounterTween;
use crate::ui::effects::Effects;
use crate::ui::navbar;
use crate::ui::parallax::ParallaxLayers;
use crate::ui::reveal::{GroupTrigger, RevealTrigger, StaggerTrigger};
use tracing::{debug, trace};

/// Classes enrolled in the generic fade-in trigger.
const FADE_IN_CLASSES: [&str; 5] = ["fade-in-up", "fade-in", "card", "mission-card", "number-card"];

/// Class of the staggered feature-list items.
const FEATURE_ITEM_CLASS: &str = "feature-item";

/// Class of the counter cards; the group trigger observes their container.
const COUNTER_CARD_CLASS: &str = "number-card";

/// Id of the language switch control.
pub const LANG_SWITCH_ID: &str = "langSwitch";

/// Root session state bridging the surface, localization, and the
/// scroll-derived behaviors.
pub struct App<S: Surface> {
    surface: S,
    store: PreferenceStore,
    menu_open: bool,
    fade_trigger: RevealTrigger,
    stagger_trigger: StaggerTrigger,
    counter_trigger: GroupTrigger,
    tweens: Vec<CounterTween>,
    parallax: ParallaxLayers,
    effects: Effects,
    subscriptions: Subscriptions,
}

impl<S: Surface> std::fmt::Debug for App<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.store.get())
            .field("menu_open", &self.menu_open)
            .field("running_tweens", &self.tweens.len())
            .finish()
    }
}

impl<S: Surface> App<S> {
    /// Runs the startup sequence: read the preference, paint the initial
    /// locale, resolve the active nav link, enroll the triggers, and
    /// register the event routes.
    pub fn init(mut surface: S, flags: Flags, now_ms: u64) -> Self {
        let mut store = PreferenceStore::load(flags.config_path);
        if let Some(locale) = flags.lang.as_deref().and_then(Locale::parse) {
            store.override_locale(locale);
        }

        renderer::render(&mut surface, store.get());
        navbar::resolve_active_link(&mut surface);

        let mut fade_trigger = RevealTrigger::new(FADE_IN_THRESHOLD, FADE_IN_BOTTOM_MARGIN);
        fade_trigger.enroll(collect_fade_targets(&surface));
        fade_trigger.evaluate(&mut surface);

        let mut stagger_trigger = StaggerTrigger::new(STAGGER_THRESHOLD, STAGGER_STEP_MS);
        let feature_items = surface.query_class(FEATURE_ITEM_CLASS);
        stagger_trigger.enroll(&mut surface, feature_items);
        stagger_trigger.evaluate(&surface, now_ms);

        let group = surface
            .query_class(COUNTER_CARD_CLASS)
            .first()
            .copied()
            .map(|card| surface.parent(card).unwrap_or(card));
        let counter_trigger = GroupTrigger::new(group, COUNTER_GROUP_THRESHOLD);

        let parallax = ParallaxLayers::discover(&surface);

        let mut subscriptions = Subscriptions::new();
        subscriptions.enroll(EventKind::Scroll, Route::Chrome);
        if !parallax.is_empty() {
            subscriptions.enroll_throttled(EventKind::Scroll, Route::Parallax, PARALLAX_THROTTLE_MS);
        }
        let has_menu = surface.query_id(navbar::MENU_ID).is_some()
            && surface.query_id(navbar::TOGGLE_ID).is_some();
        if has_menu {
            subscriptions.enroll(EventKind::Clicked, Route::Menu);
            subscriptions.enroll(EventKind::PointerPressed, Route::Menu);
        }
        if surface.query_id(LANG_SWITCH_ID).is_some() {
            subscriptions.enroll(EventKind::Clicked, Route::Language);
        }
        subscriptions.enroll(EventKind::PointerPressed, Route::Effects);
        subscriptions.enroll(EventKind::PointerMoved, Route::Effects);
        subscriptions.enroll(EventKind::PointerEntered, Route::Effects);
        subscriptions.enroll(EventKind::PointerLeft, Route::Effects);
        subscriptions.enroll(EventKind::Clicked, Route::Effects);
        subscriptions.enroll(EventKind::Tick, Route::Animation);

        let mut app = Self {
            surface,
            store,
            menu_open: false,
            fade_trigger,
            stagger_trigger,
            counter_trigger,
            tweens: Vec::new(),
            parallax,
            effects: Effects::new(),
            subscriptions,
        };

        // The counter group may already be in view on load.
        if app.counter_trigger.evaluate(&app.surface) {
            app.start_counters(now_ms);
        }

        debug!(
            locale = %app.store.get(),
            observed = app.fade_trigger.observed(),
            has_menu,
            "session initialized"
        );
        app
    }

    /// Feeds one host event through the subscription registry.
    pub fn handle(&mut self, event: InputEvent, now_ms: u64) {
        trace!(?event, now_ms, "input event");
        let routes = self.subscriptions.routes_for(event.kind(), now_ms);
        for route in routes {
            if let Some(message) = self.route_message(route, event) {
                self.update(message, now_ms);
            }
        }
    }

    pub fn current_locale(&self) -> Locale {
        self.store.get()
    }

    pub fn menu_is_open(&self) -> bool {
        self.menu_open
    }

    /// Whether any time-driven animation still wants ticks.
    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty()
            || self.stagger_trigger.has_pending()
            || self.effects.pending_ripples() > 0
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn route_message(&self, route: Route, event: InputEvent) -> Option<Message> {
        match (route, event) {
            (Route::Chrome, InputEvent::Scroll { offset }) => Some(Message::Chrome { offset }),
            (Route::Parallax, InputEvent::Scroll { offset }) => Some(Message::Parallax { offset }),
            (Route::Menu, InputEvent::Clicked { target }) => {
                self.menu_click_message(target).map(Message::Navbar)
            }
            (Route::Menu, InputEvent::PointerPressed { target, .. }) => {
                self.outside_press_message(target).map(Message::Navbar)
            }
            (Route::Language, InputEvent::Clicked { target }) => {
                let switch = self.surface.query_id(LANG_SWITCH_ID)?;
                self.surface
                    .contains(switch, target)
                    .then_some(Message::ToggleLanguage)
            }
            (Route::Effects, InputEvent::PointerPressed { target, x, y }) => {
                target.map(|target| Message::Effect(EffectMessage::Pressed { target, x, y }))
            }
            (Route::Effects, InputEvent::PointerMoved { target, x, y }) => {
                Some(Message::Effect(EffectMessage::Moved { target, x, y }))
            }
            (Route::Effects, InputEvent::PointerEntered { target }) => {
                Some(Message::Effect(EffectMessage::Entered { target }))
            }
            (Route::Effects, InputEvent::PointerLeft { target }) => {
                Some(Message::Effect(EffectMessage::Left { target }))
            }
            (Route::Effects, InputEvent::Clicked { target }) => {
                Some(Message::Effect(EffectMessage::Clicked { target }))
            }
            (Route::Animation, InputEvent::Tick) => Some(Message::Tick),
            _ => None,
        }
    }

    fn menu_click_message(&self, target: NodeId) -> Option<navbar::Message> {
        let toggle = self.surface.query_id(navbar::TOGGLE_ID)?;
        let menu = self.surface.query_id(navbar::MENU_ID)?;
        if self.surface.contains(toggle, target) {
            Some(navbar::Message::ToggleMenu)
        } else if self.surface.has_class(target, navbar::LINK_CLASS) {
            Some(navbar::Message::LinkActivated)
        } else if self.surface.contains(menu, target) {
            // Clicks inside the menu that are not links leave it open.
            None
        } else {
            Some(navbar::Message::OutsidePress)
        }
    }

    /// Presses only ever close the menu; opening stays on the click path so
    /// a press-then-click on the toggle does not toggle twice.
    fn outside_press_message(&self, target: Option<NodeId>) -> Option<navbar::Message> {
        let toggle = self.surface.query_id(navbar::TOGGLE_ID)?;
        let menu = self.surface.query_id(navbar::MENU_ID)?;
        match target {
            Some(t)
                if self.surface.contains(toggle, t) || self.surface.contains(menu, t) =>
            {
                None
            }
            _ => Some(navbar::Message::OutsidePress),
        }
    }
}

/// Collects the fade-in candidates across all enrolled classes, deduplicated
/// in document order (an element may carry several of the classes).
fn collect_fade_targets<S: Surface>(surface: &S) -> Vec<NodeId> {
    let mut targets: Vec<NodeId> = Vec::new();
    for class in FADE_IN_CLASSES {
        for node in surface.query_class(class) {
            if !targets.contains(&node) {
                targets.push(node);
            }
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::memory::{MemorySurface, NodeSpec};
    use crate::ui::reveal::VISIBLE_CLASS;

    fn bare_page() -> MemorySurface {
        MemorySurface::new("/index.html", 1280.0, 800.0)
    }

    #[test]
    fn init_on_an_empty_page_degrades_to_a_noop_session() {
        let mut app = App::init(bare_page(), Flags::default(), 0);
        // No markup, nothing to do, nothing to panic about.
        app.handle(InputEvent::Scroll { offset: 300.0 }, 10);
        app.handle(InputEvent::Tick, 26);
        assert!(!app.is_animating());
        assert!(!app.menu_is_open());
    }

    #[test]
    fn fade_targets_are_deduplicated() {
        let mut surface = bare_page();
        surface.insert(
            NodeSpec::new()
                .class("card")
                .class("fade-in")
                .rect(0.0, 2000.0, 100.0, 100.0),
        );
        assert_eq!(collect_fade_targets(&surface).len(), 1);
    }

    #[test]
    fn initially_visible_cards_reveal_during_init() {
        let mut surface = bare_page();
        let card = surface.insert(NodeSpec::new().class("card").rect(0.0, 100.0, 400.0, 200.0));
        let app = App::init(surface, Flags::default(), 0);
        assert!(app.surface().has_class(card, VISIBLE_CLASS));
    }

    #[test]
    fn locale_flag_overrides_the_default() {
        let app = App::init(
            bare_page(),
            Flags {
                lang: Some("cn".to_string()),
                config_path: None,
            },
            0,
        );
        assert_eq!(app.current_locale(), Locale::Cn);
    }

    #[test]
    fn invalid_locale_flag_falls_back_to_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = App::init(
            bare_page(),
            Flags {
                lang: Some("martian".to_string()),
                config_path: Some(dir.path().join("settings.toml")),
            },
            0,
        );
        assert_eq!(app.current_locale(), Locale::En);
    }
}
