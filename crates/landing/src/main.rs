//! Starfield Landing Page
//!
//! Event landing page over an animated starfield, hosted in a macroquad
//! window. Page behaviour lives in the `starfield` crate; this binary lays
//! the page out, forwards input and draws.
//!
//! Config: first CLI argument or `LANDING_CONFIG` (JSON or YAML). Falls back
//! to the built-in page.

mod canvas;
mod layout;
mod view;

use std::path::PathBuf;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use macroquad::prelude::*;
use starfield::controls::resolve_anchor;
use starfield::{Features, LandingConfig, SectionEvent};

use crate::canvas::{MacroquadCanvas, PAGE_BACKGROUND};
use crate::layout::PageLayout;

/// Pixels scrolled per wheel notch.
const WHEEL_STEP: f32 = 80.0;

fn window_conf() -> Conf {
    Conf {
        window_title: "Starfield Summit".to_owned(),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

fn host_now() -> Duration {
    Duration::from_secs_f64(get_time())
}

fn wall_now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn config_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os("LANDING_CONFIG"))
        .map(PathBuf::from)
}

fn load_config() -> Result<LandingConfig, Box<dyn std::error::Error>> {
    match config_path() {
        Some(path) => {
            let config = LandingConfig::load(&path)?;
            log::info!("loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(LandingConfig::default()),
    }
}

/// Run both reveal passes and the back-to-top check for the current scroll.
fn apply_scroll(features: &mut Features, layout: &PageLayout, now: Duration) {
    let scroll = features.scroll.offset();
    let update = features.on_scroll(
        scroll,
        &layout.section_rects(scroll),
        &layout.card_tops(scroll),
        layout.viewport.y,
        now,
    );
    for event in &update.sections {
        match event {
            SectionEvent::Entered(i) => log::trace!("section '{}' in view", layout.sections[*i].id),
            SectionEvent::Left(i) => log::trace!("section '{}' out of view", layout.sections[*i].id),
        }
    }
    if update.cards_scheduled > 0 {
        log::trace!("{} cards scheduled for reveal", update.cards_scheduled);
    }
}

/// Left click at a viewport point. Returns true if a control consumed it.
fn handle_click(features: &mut Features, layout: &PageLayout, point: glam::Vec2) -> bool {
    if let (Some(rect), Some(button)) = (layout.back_to_top, features.back_to_top.as_ref()) {
        if button.is_visible() && rect.contains(point.x, point.y) {
            let top = button.on_click();
            features.scroll.scroll_to(top);
            return true;
        }
    }

    let Some(menu) = features.menu.as_mut() else {
        return false;
    };

    if layout.compact {
        if let Some(rect) = layout.menu_button {
            if rect.contains(point.x, point.y) {
                let view = menu.toggle();
                log::debug!("menu {} (aria-expanded={})", view.glyph, view.aria_expanded);
                return true;
            }
        }
    }

    if let Some(link) = layout.nav_link_at(point, menu.is_open()) {
        menu.close();
        match resolve_anchor(&link.href, &layout.anchors()) {
            Some(target) => features.scroll.scroll_to(target.offset),
            None => log::warn!("nav link {} has no target", link.href),
        }
        return true;
    }
    false
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}; using built-in page", e);
            LandingConfig::default()
        }
    };

    let mut viewport = glam::Vec2::new(screen_width(), screen_height());
    let has_countdown = config.event_start.is_some();
    let mut layout = PageLayout::build(&config.page, has_countdown, viewport);
    let mut features = Features::init(&layout.elements(), &config, viewport, host_now(), wall_now());
    features.scroll.set_max(layout.max_scroll());
    if !features.skipped().is_empty() {
        log::info!("running without: {}", features.skipped().join(", "));
    }

    let mut canvas = MacroquadCanvas::new();
    let mut last_mouse: Option<(f32, f32)> = None;

    // load pass
    apply_scroll(&mut features, &layout, host_now());
    let mut last_scroll = features.scroll.offset();

    loop {
        let now = host_now();

        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        // --- RESIZE ---
        let size = glam::Vec2::new(screen_width(), screen_height());
        if size != viewport {
            viewport = size;
            layout = PageLayout::build(&config.page, has_countdown, viewport);
            features.on_resize(viewport);
            features.scroll.set_max(layout.max_scroll());
            apply_scroll(&mut features, &layout, now);
        }

        // --- INPUT ---
        let mouse = mouse_position();
        // the first position reported before any movement isn't a real pointer
        if last_mouse.is_some_and(|m| m != mouse) {
            features.on_mouse_move(mouse.0, mouse.1);
        }
        last_mouse = Some(mouse);
        let pointer = glam::Vec2::new(mouse.0, mouse.1);

        let (_, wheel_y) = mouse_wheel();
        if wheel_y != 0.0 {
            features.scroll.scroll_by(-wheel_y.signum() * WHEEL_STEP);
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            handle_click(&mut features, &layout, pointer);
        }

        // --- UPDATE ---
        let scroll = features.scroll.update(get_frame_time());
        if scroll != last_scroll {
            last_scroll = scroll;
            apply_scroll(&mut features, &layout, now);
        }

        let tick = features.tick(now, wall_now());
        for index in &tick.revealed_cards {
            log::trace!("card {} revealed", index);
        }

        let hit = layout.card_at(pointer, scroll);
        features.hover.update(hit);

        // --- RENDER ---
        let animating = match features.render.as_mut() {
            Some(render) => render.frame(now, &mut canvas),
            None => false,
        };
        if !animating {
            clear_background(PAGE_BACKGROUND);
        }
        view::draw_page(&layout, &features, now);

        next_frame().await
    }

    features.shutdown();
    if let Some(render) = features.render.as_ref() {
        log::info!("rendered {} frames", render.frames());
    }
}
