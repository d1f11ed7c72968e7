//! Ancillary page controls: nav menu, smooth scroll, back-to-top, card hover.
//!
//! Each control is a small state machine. The host feeds it events and
//! applies the returned view state to whatever it draws.

/// Glyph on the menu button while the menu is closed.
pub const MENU_GLYPH_CLOSED: &str = "☰";
/// Glyph on the menu button while the menu is open.
pub const MENU_GLYPH_OPEN: &str = "✕";

/// Glow on a hovered card.
pub const CARD_GLOW: &str = "0 0 48px rgba(110,231,255,0.5)";
pub const CARD_HOVER_SCALE: f32 = 1.03;

/// What the menu button and link list should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuView {
    /// `aria-expanded` on the button
    pub aria_expanded: bool,
    /// `open` class on the link list
    pub open: bool,
    pub glyph: &'static str,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) -> MenuView {
        self.open = !self.open;
        self.view()
    }

    /// A nav link was followed.
    pub fn close(&mut self) -> MenuView {
        self.open = false;
        self.view()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn view(&self) -> MenuView {
        MenuView {
            aria_expanded: self.open,
            open: self.open,
            glyph: if self.open { MENU_GLYPH_OPEN } else { MENU_GLYPH_CLOSED },
        }
    }
}

/// An in-page scroll destination, `offset` in page coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct AnchorTarget {
    pub id: String,
    pub offset: f32,
}

/// `"#about"` → `Some("about")`. Anything that isn't an in-page anchor is
/// left for default handling.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Find the target an in-page link points at.
pub fn resolve_anchor<'t>(href: &str, targets: &'t [AnchorTarget]) -> Option<&'t AnchorTarget> {
    let id = anchor_id(href)?;
    targets.iter().find(|t| t.id == id)
}

/// Page scroll offset with eased movement toward a target.
#[derive(Clone, Debug)]
pub struct ScrollAnimator {
    offset: f32,
    max_offset: f32,
    target: Option<f32>,
    /// Approach rate (1/s)
    rate: f32,
}

const SCROLL_RATE: f32 = 10.0;
const SCROLL_SNAP: f32 = 0.5;

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ScrollAnimator {
    pub fn new(max_offset: f32) -> Self {
        Self {
            offset: 0.0,
            max_offset: max_offset.max(0.0),
            target: None,
            rate: SCROLL_RATE,
        }
    }

    /// Document height changed.
    pub fn set_max(&mut self, max_offset: f32) {
        self.max_offset = max_offset.max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_offset);
        if let Some(target) = self.target.as_mut() {
            *target = target.clamp(0.0, self.max_offset);
        }
    }

    /// Begin a smooth scroll.
    pub fn scroll_to(&mut self, target: f32) {
        if target.is_finite() {
            self.target = Some(target.clamp(0.0, self.max_offset));
        }
    }

    /// Immediate scroll (wheel, drag). Cancels any smooth scroll.
    pub fn scroll_by(&mut self, delta: f32) {
        if delta.is_finite() {
            self.target = None;
            self.offset = (self.offset + delta).clamp(0.0, self.max_offset);
        }
    }

    /// Advance the easing by `dt` seconds. Returns the new offset.
    pub fn update(&mut self, dt: f32) -> f32 {
        if let Some(target) = self.target {
            let t = 1.0 - (-self.rate * dt.max(0.0)).exp();
            self.offset += (target - self.offset) * t;
            if (target - self.offset).abs() < SCROLL_SNAP {
                self.offset = target;
                self.target = None;
            }
        }
        self.offset
    }

    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }
}

/// Back-to-top button shown once the page is scrolled far enough.
#[derive(Clone, Copy, Debug)]
pub struct BackToTop {
    offset: f32,
    visible: bool,
}

impl BackToTop {
    pub fn new(offset: f32) -> Self {
        Self {
            offset,
            visible: false,
        }
    }

    /// Returns the new visibility when it changed.
    pub fn on_scroll(&mut self, scroll_y: f32) -> Option<bool> {
        let visible = scroll_y > self.offset;
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        Some(visible)
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Scroll destination for a click.
    #[inline]
    pub fn on_click(&self) -> f32 {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardStyle {
    pub scale: f32,
    pub glow: Option<&'static str>,
}

pub fn card_style(hovered: bool) -> CardStyle {
    if hovered {
        CardStyle {
            scale: CARD_HOVER_SCALE,
            glow: Some(CARD_GLOW),
        }
    } else {
        CardStyle {
            scale: 1.0,
            glow: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    Enter(usize),
    Leave(usize),
}

/// Tracks which card (if any) is under the pointer.
#[derive(Clone, Copy, Debug, Default)]
pub struct CardHover {
    hovered: Option<usize>,
}

impl CardHover {
    /// `hit` is the card under the pointer this frame.
    pub fn update(&mut self, hit: Option<usize>) -> Vec<HoverEvent> {
        if hit == self.hovered {
            return Vec::new();
        }
        let mut events = Vec::with_capacity(2);
        if let Some(prev) = self.hovered {
            events.push(HoverEvent::Leave(prev));
        }
        if let Some(next) = hit {
            events.push(HoverEvent::Enter(next));
        }
        self.hovered = hit;
        events
    }

    #[inline]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn style(&self, index: usize) -> CardStyle {
        card_style(self.hovered == Some(index))
    }
}
