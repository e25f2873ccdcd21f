// SPDX-License-Identifier: MPL-2.0
//! Top-level messages, host events, and runtime flags for the session.

use crate::surface::NodeId;
use crate::ui::navbar;
use std::path::PathBuf;

/// Input events fed in by the host. The host also supplies the timestamp of
/// each event to [`App::handle`](super::App::handle); events themselves stay
/// clock-free.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The viewport scrolled to `offset`. Hosts update their own viewport
    /// state before reporting, so the offset and `Surface::viewport` agree.
    Scroll { offset: f64 },
    /// Primary pointer button went down. `target` is `None` for presses on
    /// bare page background. Coordinates are document-space.
    PointerPressed { target: Option<NodeId>, x: f64, y: f64 },
    PointerMoved { target: NodeId, x: f64, y: f64 },
    PointerEntered { target: NodeId },
    PointerLeft { target: NodeId },
    /// A completed click on an element.
    Clicked { target: NodeId },
    /// Periodic animation tick.
    Tick,
}

impl InputEvent {
    pub(crate) fn kind(&self) -> EventKind {
        match self {
            InputEvent::Scroll { .. } => EventKind::Scroll,
            InputEvent::PointerPressed { .. } => EventKind::PointerPressed,
            InputEvent::PointerMoved { .. } => EventKind::PointerMoved,
            InputEvent::PointerEntered { .. } => EventKind::PointerEntered,
            InputEvent::PointerLeft { .. } => EventKind::PointerLeft,
            InputEvent::Clicked { .. } => EventKind::Clicked,
            InputEvent::Tick => EventKind::Tick,
        }
    }
}

/// Event taxonomy used by the subscription registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Scroll,
    PointerPressed,
    PointerMoved,
    PointerEntered,
    PointerLeft,
    Clicked,
    Tick,
}

/// Messages consumed by `App::update`. The variants forward lower-level
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Navbar(navbar::Message),
    /// The language switch control was activated.
    ToggleLanguage,
    /// Unthrottled scroll route: chrome flags, indicator fade, and the
    /// visibility triggers.
    Chrome { offset: f64 },
    /// Throttled scroll route: parallax transforms.
    Parallax { offset: f64 },
    /// Decorative pointer effects.
    Effect(EffectMessage),
    /// Animation tick: tweens, stagger releases, ripple expiry.
    Tick,
}

/// Pointer gestures routed to the decorative effects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectMessage {
    Pressed { target: NodeId, x: f64, y: f64 },
    Moved { target: NodeId, x: f64, y: f64 },
    Entered { target: NodeId },
    Left { target: NodeId },
    Clicked { target: NodeId },
}

/// Runtime flags passed in from the CLI or launcher to tweak startup
/// behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override (`en` or `cn`). Applied for the session
    /// without being persisted.
    pub lang: Option<String>,
    /// Optional settings-file override (for tests and portable installs).
    /// Takes precedence over the `SITEKIT_CONFIG_DIR` environment variable.
    pub config_path: Option<PathBuf>,
}
