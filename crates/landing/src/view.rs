//! Page chrome drawn over the starfield: nav bar, hero, sections, cards,
//! countdown and back-to-top button.

use std::time::Duration;

use macroquad::prelude::*;
use starfield::reveal::CardState;
use starfield::{Features, Rect};

use crate::layout::{PageLayout, NAV_FONT, NAV_HEIGHT};

const ACCENT: Color = Color::new(110.0 / 255.0, 231.0 / 255.0, 1.0, 1.0);
const PANEL: Color = Color::new(0.05, 0.06, 0.14, 0.55);
const CARD: Color = Color::new(0.08, 0.09, 0.2, 0.8);
const NAV: Color = Color::new(0.01, 0.01, 0.05, 0.85);
const TEXT: Color = Color::new(0.92, 0.94, 1.0, 1.0);
const MUTED: Color = Color::new(0.65, 0.7, 0.85, 1.0);

/// Card fade/slide-in duration after reveal.
const CARD_TRANSITION: f32 = 0.6;
const CARD_SLIDE: f32 = 30.0;
/// Sections not yet seen are drawn faded.
const HIDDEN_SECTION_ALPHA: f32 = 0.15;

#[inline]
fn faded(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, color.a * alpha)
}

/// Soft outer glow, approximating a CSS box-shadow.
fn draw_glow(rect: Rect, spread: f32, strength: f32) {
    let steps = 6;
    for i in 1..=steps {
        let grow = spread * i as f32 / steps as f32;
        let alpha = strength * (1.0 - i as f32 / (steps as f32 + 1.0)) / steps as f32;
        draw_rectangle_lines(
            rect.x - grow,
            rect.y - grow,
            rect.width + grow * 2.0,
            rect.height + grow * 2.0,
            spread / steps as f32,
            faded(ACCENT, alpha),
        );
    }
}

pub fn draw_page(layout: &PageLayout, features: &Features, now: Duration) {
    let scroll = features.scroll.offset();

    draw_hero(layout, features, scroll);

    for (index, section) in layout.sections.iter().enumerate() {
        let rect = section.rect.scrolled(scroll);
        if rect.bottom() < 0.0 || rect.top() > layout.viewport.y {
            continue;
        }
        let state = features.sections.state(index).unwrap_or_default();
        let alpha = if state.visible { 1.0 } else { HIDDEN_SECTION_ALPHA };
        if state.glowing {
            draw_glow(rect, 60.0, 0.4);
        }
        draw_rectangle(rect.x, rect.y, rect.width, rect.height, faded(PANEL, alpha));
        draw_text(&section.title, rect.x + 32.0, rect.y + 32.0 + 32.0, 36.0, faded(TEXT, alpha));
        if !section.body.is_empty() {
            draw_text(&section.body, rect.x + 32.0, rect.y + 32.0 + 64.0, 22.0, faded(MUTED, alpha));
        }
    }

    for (index, card) in layout.cards.iter().enumerate() {
        let progress = match features.cards.state(index) {
            Some(CardState::Revealed(at)) => {
                (now.saturating_sub(at).as_secs_f32() / CARD_TRANSITION).min(1.0)
            }
            _ => 0.0,
        };
        if progress <= 0.0 {
            continue;
        }
        let style = features.hover.style(index);
        let mut rect = card.rect.scrolled(scroll);
        rect.y += (1.0 - progress) * CARD_SLIDE;
        if rect.bottom() < 0.0 || rect.top() > layout.viewport.y {
            continue;
        }

        // scale about the center
        let grow_w = rect.width * (style.scale - 1.0);
        let grow_h = rect.height * (style.scale - 1.0);
        let rect = Rect::new(
            rect.x - grow_w * 0.5,
            rect.y - grow_h * 0.5,
            rect.width + grow_w,
            rect.height + grow_h,
        );

        if style.glow.is_some() {
            draw_glow(rect, 48.0, 0.5 * progress);
        }
        draw_rectangle(rect.x, rect.y, rect.width, rect.height, faded(CARD, progress));
        draw_rectangle_lines(rect.x, rect.y, rect.width, rect.height, 1.0, faded(ACCENT, 0.4 * progress));
        draw_text(&card.title, rect.x + 20.0, rect.y + 44.0, 28.0, faded(TEXT, progress));
        draw_text(&card.body, rect.x + 20.0, rect.y + 80.0, 20.0, faded(MUTED, progress));
    }

    draw_nav(layout, features);
    draw_back_to_top(layout, features);
}

fn draw_hero(layout: &PageLayout, features: &Features, scroll: f32) {
    let hero = layout.hero.scrolled(scroll);
    if hero.bottom() < 0.0 {
        return;
    }
    draw_text(&layout.title, hero.x, hero.y + hero.height * 0.4, 64.0, TEXT);

    let (Some(at), Some(countdown)) = (layout.countdown_at, features.countdown.as_ref()) else {
        return;
    };
    let y = at.y - scroll;
    let glow = countdown.glow_px();
    // text-shadow: blurred copies behind the text
    for (dx, dy) in [(-1.0, 0.0), (1.0, 0.0), (0.0, -1.0), (0.0, 1.0)] {
        draw_text(
            countdown.text(),
            at.x + dx * glow * 0.5,
            y + dy * glow * 0.5,
            44.0,
            faded(ACCENT, 0.7 / 4.0),
        );
    }
    draw_text(countdown.text(), at.x, y, 44.0, TEXT);
}

fn draw_nav(layout: &PageLayout, features: &Features) {
    let width = layout.viewport.x;
    draw_rectangle(0.0, 0.0, width, NAV_HEIGHT, NAV);
    draw_text(&layout.title, 24.0, NAV_HEIGHT * 0.5 + 8.0, 26.0, ACCENT);

    let Some(menu) = features.menu.as_ref() else {
        return;
    };

    if !layout.compact {
        for link in &layout.nav_links {
            let r = link.inline;
            draw_text(&link.label, r.x + 12.0, r.y + r.height * 0.5 + 6.0, NAV_FONT, TEXT);
        }
        return;
    }

    let Some(button) = layout.menu_button else {
        return;
    };
    let view = menu.view();
    let (cx, cy) = (button.x + button.width * 0.5, button.y + button.height * 0.5);
    if view.open {
        // ✕
        draw_line(cx - 10.0, cy - 10.0, cx + 10.0, cy + 10.0, 3.0, TEXT);
        draw_line(cx - 10.0, cy + 10.0, cx + 10.0, cy - 10.0, 3.0, TEXT);
        for link in &layout.nav_links {
            let r = link.dropdown;
            draw_rectangle(r.x, r.y, r.width, r.height, NAV);
            draw_text(&link.label, r.x + 24.0, r.y + r.height * 0.5 + 6.0, NAV_FONT, TEXT);
        }
    } else {
        // ☰
        for dy in [-8.0, 0.0, 8.0] {
            draw_line(cx - 12.0, cy + dy, cx + 12.0, cy + dy, 3.0, TEXT);
        }
    }
}

fn draw_back_to_top(layout: &PageLayout, features: &Features) {
    let (Some(rect), Some(button)) = (layout.back_to_top, features.back_to_top.as_ref()) else {
        return;
    };
    if !button.is_visible() {
        return;
    }
    let (cx, cy) = (rect.x + rect.width * 0.5, rect.y + rect.height * 0.5);
    draw_circle(cx, cy, rect.width * 0.5, faded(ACCENT, 0.85));
    draw_triangle(
        vec2(cx, cy - 10.0),
        vec2(cx - 10.0, cy + 6.0),
        vec2(cx + 10.0, cy + 6.0),
        NAV,
    );
}
