// SPDX-License-Identifier: MPL-2.0
//! Demo runner: builds the sample landing page on the in-memory surface and
//! drives a scripted browsing session through the engine.

use sitekit::app::{App, Flags, InputEvent};
use sitekit::surface::memory::{MemorySurface, NodeSpec};
use sitekit::surface::{ElementKind, Surface};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();
    let path: Option<String> = args.opt_value_from_str("--path").unwrap_or(None);
    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        config_path: args
            .opt_value_from_str::<_, PathBuf>("--config")
            .unwrap_or(None),
    };

    let surface = build_landing_page(path.as_deref().unwrap_or("/index.html"));
    let mut app = App::init(surface, flags, 0);
    info!(locale = %app.current_locale(), "session initialized");

    // Scroll down the page in steps, ticking the animations along the way.
    let mut now: u64 = 0;
    for offset in [120.0, 480.0, 900.0, 1400.0] {
        now += 40;
        app.surface_mut().set_scroll(offset);
        app.handle(InputEvent::Scroll { offset }, now);
        now += 16;
        app.handle(InputEvent::Tick, now);
    }
    while app.is_animating() && now < 10_000 {
        now += 16;
        app.handle(InputEvent::Tick, now);
    }

    for value in app.surface().query_class("number-value") {
        if let Some(text) = app.surface().text(value) {
            info!(counter = %text, "counter settled");
        }
    }

    // Toggle the language through the switch control.
    if let Some(switch) = app.surface().query_id("langSwitch") {
        now += 40;
        app.handle(InputEvent::Clicked { target: switch }, now);
        info!(locale = %app.current_locale(), "language toggled");
        if let Some(title) = app.surface().query_attr("data-en").first().copied() {
            if let Some(text) = app.surface().text(title) {
                info!(title = %text, "hero title now reads");
            }
        }
    }
}

/// A condensed model of the landing page markup.
fn build_landing_page(path: &str) -> MemorySurface {
    let mut surface = MemorySurface::new(path, 1280.0, 800.0);

    surface.insert(NodeSpec::new().id("navbar").rect(0.0, 0.0, 1280.0, 64.0));
    let menu = surface.insert(NodeSpec::new().id("navMenu"));
    surface.insert(NodeSpec::new().id("mobileToggle"));
    for href in ["index.html", "technology.html", "about.html", "contact.html"] {
        surface.insert(NodeSpec::new().class("nav-link").attr("href", href).parent(menu));
    }
    let switch = surface.insert(NodeSpec::new().id("langSwitch"));
    surface.insert(NodeSpec::new().class("lang-text").text("EN").parent(switch));

    surface.insert(
        NodeSpec::new()
            .class("fade-in-up")
            .attr("data-en", "Clean water, anywhere")
            .attr("data-cn", "清洁水，无处不在")
            .rect(160.0, 120.0, 960.0, 80.0),
    );
    surface.insert(
        NodeSpec::new()
            .kind(ElementKind::Input)
            .attr("data-en", "Your email")
            .attr("data-cn", "您的邮箱")
            .rect(160.0, 240.0, 320.0, 40.0),
    );
    surface.insert(NodeSpec::new().class("hero-visual").rect(720.0, 120.0, 480.0, 480.0));
    for i in 0..3 {
        surface.insert(NodeSpec::new().class("wave").rect(0.0, 500.0 + 40.0 * i as f64, 1280.0, 120.0));
    }
    surface.insert(NodeSpec::new().class("scroll-indicator").rect(610.0, 720.0, 60.0, 60.0));

    surface.insert(NodeSpec::new().class("mission").rect(0.0, 900.0, 1280.0, 500.0));
    for i in 0..3 {
        surface.insert(
            NodeSpec::new()
                .class("mission-card")
                .rect(80.0 + 400.0 * i as f64, 980.0, 360.0, 320.0),
        );
    }
    for i in 0..4 {
        surface.insert(
            NodeSpec::new()
                .class("feature-item")
                .rect(160.0, 1450.0 + 90.0 * i as f64, 960.0, 70.0),
        );
    }

    let grid = surface.insert(NodeSpec::new().rect(0.0, 1850.0, 1280.0, 360.0));
    for (target, label) in [("1234", "Deployments"), ("98", "Uptime"), ("4.5", "Rating")] {
        let card = surface.insert(NodeSpec::new().class("number-card").parent(grid).rect(0.0, 1850.0, 400.0, 360.0));
        surface.insert(
            NodeSpec::new()
                .class("number-value")
                .attr("data-target", target)
                .text("0")
                .parent(card),
        );
        surface.insert(
            NodeSpec::new()
                .attr("data-en", label)
                .attr("data-cn", label)
                .parent(card),
        );
    }

    surface.insert(NodeSpec::new().class("btn").attr("href", "#contact").rect(160.0, 320.0, 180.0, 48.0));
    surface.insert(NodeSpec::new().id("contact").rect(0.0, 2300.0, 1280.0, 400.0));

    surface
}
