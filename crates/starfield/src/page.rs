//! Feature wiring with an optional-element contract.
//!
//! The host reports which page elements it actually has. Each feature starts
//! only if its elements exist; a missing element disables that one feature
//! (with a warning) and leaves the rest of the page working.

use std::time::Duration;

use chrono::NaiveDateTime;
use glam::Vec2;

use crate::config::LandingConfig;
use crate::controls::{BackToTop, CardHover, NavMenu, ScrollAnimator};
use crate::countdown::Countdown;
use crate::field::ParticleField;
use crate::render::RenderLoop;
use crate::reveal::{Rect, SectionEvent, SectionObserver, StaggeredReveal};

/// Host element handles, `None` when the page doesn't have one.
#[derive(Clone, Debug)]
pub struct PageElements<E> {
    pub menu_toggle: Option<E>,
    pub nav_links: Option<E>,
    pub canvas: Option<E>,
    pub countdown: Option<E>,
    pub back_to_top: Option<E>,
    pub sections: Vec<E>,
    pub cards: Vec<E>,
}

impl<E> Default for PageElements<E> {
    fn default() -> Self {
        Self {
            menu_toggle: None,
            nav_links: None,
            canvas: None,
            countdown: None,
            back_to_top: None,
            sections: Vec::new(),
            cards: Vec::new(),
        }
    }
}

/// Result of one scroll/load pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollUpdate {
    pub sections: Vec<SectionEvent>,
    pub cards_scheduled: usize,
    pub back_to_top: Option<bool>,
}

/// Result of one per-frame timer poll.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickUpdate {
    pub revealed_cards: Vec<usize>,
    pub countdown_changed: bool,
}

/// Every page behavior, each present only when its elements were found.
pub struct Features {
    pub menu: Option<NavMenu>,
    pub render: Option<RenderLoop>,
    pub countdown: Option<Countdown>,
    pub back_to_top: Option<BackToTop>,
    pub sections: SectionObserver,
    pub cards: StaggeredReveal,
    pub hover: CardHover,
    pub scroll: ScrollAnimator,
    skipped: Vec<&'static str>,
}

impl Features {
    /// Start every feature whose elements exist.
    ///
    /// `now` is host monotonic time, `wall_now` the local wall clock for the
    /// countdown.
    pub fn init<E>(
        elements: &PageElements<E>,
        config: &LandingConfig,
        viewport: Vec2,
        now: Duration,
        wall_now: NaiveDateTime,
    ) -> Self {
        let mut skipped = Vec::new();

        let menu = if elements.menu_toggle.is_some() && elements.nav_links.is_some() {
            Some(NavMenu::new())
        } else {
            log::warn!("menu toggle or nav links missing; nav menu disabled");
            skipped.push("menu");
            None
        };

        let render = if elements.canvas.is_some() {
            let field = ParticleField::new(config.field.clone(), viewport.x, viewport.y);
            let mut render = RenderLoop::new(field);
            render.start(now);
            Some(render)
        } else {
            log::warn!("canvas missing; starfield disabled");
            skipped.push("starfield");
            None
        };

        let countdown = match (&elements.countdown, config.event_start) {
            (Some(_), Some(target)) => {
                let period = Duration::from_millis(config.controls.countdown_period_ms);
                let mut countdown = Countdown::new(target, period);
                countdown.start(now, wall_now);
                Some(countdown)
            }
            (None, _) => {
                log::warn!("countdown element missing; countdown disabled");
                skipped.push("countdown");
                None
            }
            (Some(_), None) => {
                log::info!("no event start configured; countdown disabled");
                skipped.push("countdown");
                None
            }
        };

        let back_to_top = if elements.back_to_top.is_some() {
            Some(BackToTop::new(config.controls.back_to_top_offset))
        } else {
            log::warn!("back-to-top button missing; control disabled");
            skipped.push("back-to-top");
            None
        };

        if elements.sections.is_empty() {
            log::debug!("no sections to observe");
        }
        if elements.cards.is_empty() {
            log::debug!("no cards to reveal");
        }

        Self {
            menu,
            render,
            countdown,
            back_to_top,
            sections: SectionObserver::new(elements.sections.len(), config.reveal.section_threshold),
            cards: StaggeredReveal::new(
                elements.cards.len(),
                config.reveal.card_trigger,
                Duration::from_millis(config.reveal.stagger_delay_ms),
            ),
            hover: CardHover::default(),
            scroll: ScrollAnimator::default(),
            skipped,
        }
    }

    /// Scroll or load: run both reveal passes and the back-to-top check.
    ///
    /// `section_rects` and `card_tops` are viewport-relative.
    pub fn on_scroll(
        &mut self,
        scroll_y: f32,
        section_rects: &[Rect],
        card_tops: &[f32],
        viewport_height: f32,
        now: Duration,
    ) -> ScrollUpdate {
        ScrollUpdate {
            sections: self.sections.observe(section_rects, viewport_height),
            cards_scheduled: self.cards.scan(card_tops, viewport_height, now),
            back_to_top: self
                .back_to_top
                .as_mut()
                .and_then(|button| button.on_scroll(scroll_y)),
        }
    }

    /// Poll the timer-driven parts: staggered reveals and the countdown.
    pub fn tick(&mut self, now: Duration, wall_now: NaiveDateTime) -> TickUpdate {
        TickUpdate {
            revealed_cards: self.cards.poll(now),
            countdown_changed: self
                .countdown
                .as_mut()
                .is_some_and(|countdown| countdown.tick(now, wall_now)),
        }
    }

    /// Viewport resized: the starfield repopulates for the new size.
    pub fn on_resize(&mut self, viewport: Vec2) {
        if let Some(render) = self.render.as_mut() {
            render.field_mut().resize(viewport.x, viewport.y);
        }
    }

    /// Pointer moved over the page.
    pub fn on_mouse_move(&mut self, x: f32, y: f32) {
        if let Some(render) = self.render.as_mut() {
            render.field_mut().set_mouse(x, y);
        }
    }

    /// Page teardown: cancel the animation and the countdown.
    pub fn shutdown(&mut self) {
        if let Some(render) = self.render.as_mut() {
            render.stop();
        }
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.stop();
        }
    }

    /// Names of features that didn't start.
    #[inline]
    pub fn skipped(&self) -> &[&'static str] {
        &self.skipped
    }
}
