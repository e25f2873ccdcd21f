// SPDX-License-Identifier: MPL-2.0
//! The single update entrypoint: routes messages to the owning component
//! and applies the resulting surface mutations.

use super::message::{EffectMessage, Message};
use super::App;
use crate::config::defaults::COUNTER_DURATION_MS;
use crate::i18n::renderer;
use crate::surface::Surface;
use crate::ui::counter::{self, CounterTween};
use crate::ui::{navbar, parallax};
use tracing::debug;

impl<S: Surface> App<S> {
    pub(crate) fn update(&mut self, message: Message, now_ms: u64) {
        match message {
            Message::Navbar(msg) => {
                if navbar::update(msg, &mut self.menu_open) == navbar::Event::MenuChanged {
                    navbar::sync_menu(&mut self.surface, self.menu_open);
                }
            }
            Message::ToggleLanguage => {
                let locale = self.store.toggle();
                renderer::render(&mut self.surface, locale);
                debug!(%locale, "language toggled");
            }
            Message::Chrome { offset } => {
                navbar::apply_scroll_state(&mut self.surface, offset);
                parallax::apply_indicator(&mut self.surface, offset);
                self.fade_trigger.evaluate(&mut self.surface);
                self.stagger_trigger.evaluate(&self.surface, now_ms);
                if self.counter_trigger.evaluate(&self.surface) {
                    self.start_counters(now_ms);
                }
            }
            Message::Parallax { offset } => {
                self.parallax.apply(&mut self.surface, offset);
            }
            Message::Effect(effect) => self.apply_effect(effect, now_ms),
            Message::Tick => self.advance_animations(now_ms),
        }
    }

    fn apply_effect(&mut self, effect: EffectMessage, now_ms: u64) {
        match effect {
            EffectMessage::Pressed { target, x, y } => {
                self.effects
                    .pointer_pressed(&mut self.surface, target, x, y, now_ms);
            }
            EffectMessage::Moved { target, x, y } => {
                self.effects.pointer_moved(&mut self.surface, target, x, y);
            }
            EffectMessage::Entered { target } => {
                self.effects.pointer_entered(&mut self.surface, target);
            }
            EffectMessage::Left { target } => {
                self.effects.pointer_left(&mut self.surface, target);
            }
            EffectMessage::Clicked { target } => {
                self.effects.clicked(&mut self.surface, target);
            }
        }
    }

    /// Starts one tween per counter element, from zero to its markup target.
    pub(crate) fn start_counters(&mut self, now_ms: u64) {
        for node in self.surface.query_class(counter::VALUE_CLASS) {
            let Some(raw) = self.surface.attr(node, counter::TARGET_ATTR) else {
                continue;
            };
            let Ok(target) = raw.trim().parse::<f64>() else {
                continue;
            };
            self.tweens
                .push(CounterTween::new(node, 0.0, target, COUNTER_DURATION_MS, now_ms));
        }
        debug!(count = self.tweens.len(), "counter animations started");
    }

    fn advance_animations(&mut self, now_ms: u64) {
        let surface = &mut self.surface;
        for tween in &mut self.tweens {
            if let Some(display) = tween.advance(now_ms) {
                surface.set_text(tween.node(), &display);
            }
        }
        self.tweens.retain(|tween| !tween.is_done());
        self.stagger_trigger.release(&mut self.surface, now_ms);
        self.effects.expire(&mut self.surface, now_ms);
    }
}
