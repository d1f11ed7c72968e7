//! Scroll-driven reveal.
//!
//! Two independent mechanisms:
//! - `SectionObserver`: whole sections cross a visible-fraction threshold.
//!   Crossing in sets the sticky `visible` flag and turns the glow on,
//!   crossing out turns the glow off again.
//! - `StaggeredReveal`: cards whose top rises above a fraction of the
//!   viewport are revealed after `index * delay`. Once revealed a card stays
//!   revealed.
//!
//! Geometry is in viewport coordinates (y = 0 at the top of the viewport).

use std::time::Duration;

/// Glow applied to a section while it is in view.
pub const SECTION_GLOW: &str = "0 0 60px rgba(110,231,255,0.4)";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.bottom()
    }

    /// Same rect shifted up by `scroll` (page → viewport coordinates).
    #[inline]
    pub fn scrolled(&self, scroll: f32) -> Rect {
        Rect {
            y: self.y - scroll,
            ..*self
        }
    }
}

/// Fraction of `rect`'s height inside `[0, viewport_height]`.
pub fn intersection_ratio(rect: &Rect, viewport_height: f32) -> f32 {
    if rect.height <= 0.0 {
        let inside = rect.y >= 0.0 && rect.y <= viewport_height;
        return if inside { 1.0 } else { 0.0 };
    }
    let visible = rect.bottom().min(viewport_height) - rect.top().max(0.0);
    (visible / rect.height).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionEvent {
    /// Section crossed into view: add `visible`, apply `SECTION_GLOW`
    Entered(usize),
    /// Section left view: clear the glow (`visible` stays)
    Left(usize),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionState {
    /// Sticky once set
    pub visible: bool,
    pub glowing: bool,
}

#[derive(Clone, Debug)]
pub struct SectionObserver {
    threshold: f32,
    sections: Vec<SectionState>,
}

impl SectionObserver {
    pub fn new(count: usize, threshold: f32) -> Self {
        Self {
            threshold,
            sections: vec![SectionState::default(); count],
        }
    }

    /// Compare current geometry against the last observation and report
    /// transitions only.
    pub fn observe(&mut self, rects: &[Rect], viewport_height: f32) -> Vec<SectionEvent> {
        let mut events = Vec::new();
        for (i, (state, rect)) in self.sections.iter_mut().zip(rects).enumerate() {
            let in_view = intersection_ratio(rect, viewport_height) >= self.threshold;
            if in_view && !state.glowing {
                state.visible = true;
                state.glowing = true;
                events.push(SectionEvent::Entered(i));
            } else if !in_view && state.glowing {
                state.glowing = false;
                events.push(SectionEvent::Left(i));
            }
        }
        events
    }

    #[inline]
    pub fn state(&self, index: usize) -> Option<SectionState> {
        self.sections.get(index).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardState {
    #[default]
    Hidden,
    /// Reveal due at this host time
    Scheduled(Duration),
    /// Revealed at this host time
    Revealed(Duration),
}

#[derive(Clone, Debug)]
pub struct StaggeredReveal {
    trigger: f32,
    delay: Duration,
    cards: Vec<CardState>,
}

impl StaggeredReveal {
    pub fn new(count: usize, trigger: f32, delay: Duration) -> Self {
        Self {
            trigger,
            delay,
            cards: vec![CardState::Hidden; count],
        }
    }

    /// Schedule every hidden card whose top is above `trigger * viewport_height`.
    ///
    /// `tops` are viewport-relative. Returns how many cards were newly
    /// scheduled; cards already scheduled or revealed are left alone.
    pub fn scan(&mut self, tops: &[f32], viewport_height: f32, now: Duration) -> usize {
        let trigger_line = viewport_height * self.trigger;
        let mut scheduled = 0;
        for (index, (state, &top)) in self.cards.iter_mut().zip(tops).enumerate() {
            if *state == CardState::Hidden && top < trigger_line {
                *state = CardState::Scheduled(now + self.delay * index as u32);
                scheduled += 1;
            }
        }
        scheduled
    }

    /// Reveal every scheduled card that is due. Returns their indices.
    pub fn poll(&mut self, now: Duration) -> Vec<usize> {
        let mut revealed = Vec::new();
        for (index, state) in self.cards.iter_mut().enumerate() {
            if let CardState::Scheduled(at) = *state {
                if at <= now {
                    *state = CardState::Revealed(at);
                    revealed.push(index);
                }
            }
        }
        revealed
    }

    #[inline]
    pub fn state(&self, index: usize) -> Option<CardState> {
        self.cards.get(index).copied()
    }

    #[inline]
    pub fn is_revealed(&self, index: usize) -> bool {
        matches!(self.state(index), Some(CardState::Revealed(_)))
    }

    pub fn revealed_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|s| matches!(s, CardState::Revealed(_)))
            .count()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
