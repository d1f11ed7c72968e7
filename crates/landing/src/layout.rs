//! Page layout: where every section, card and control sits.
//!
//! Pure geometry, no drawing. Sections and cards are in page coordinates
//! (y grows down from the top of the document); the nav bar, menu button and
//! back-to-top button are fixed to the viewport.

use glam::Vec2;
use starfield::config::PageContent;
use starfield::controls::AnchorTarget;
use starfield::{PageElements, Rect};

pub const NAV_HEIGHT: f32 = 64.0;
pub const NAV_FONT: f32 = 20.0;
pub const MENU_ITEM_HEIGHT: f32 = 44.0;
/// Below this width the nav links collapse behind the menu button.
pub const COMPACT_WIDTH: f32 = 720.0;

const MAX_CONTENT_WIDTH: f32 = 1100.0;
const SECTION_GAP: f32 = 40.0;
const SECTION_PADDING: f32 = 32.0;
const TITLE_HEIGHT: f32 = 48.0;
const BODY_HEIGHT: f32 = 32.0;
const CARD_HEIGHT: f32 = 120.0;
const CARD_GAP: f32 = 20.0;
const BUTTON_SIZE: f32 = 48.0;
/// Rough glyph advance for the default font at `NAV_FONT`.
const NAV_CHAR_WIDTH: f32 = 10.0;

/// Host element handles for the optional-element contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementId {
    MenuToggle,
    NavLinks,
    Canvas,
    Countdown,
    BackToTop,
    Section(usize),
    Card(usize),
}

#[derive(Clone, Debug)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    /// Viewport rect when the links are inline
    pub inline: Rect,
    /// Viewport rect inside the open dropdown
    pub dropdown: Rect,
}

#[derive(Clone, Debug)]
pub struct SectionBox {
    pub id: String,
    pub title: String,
    pub body: String,
    pub rect: Rect,
}

#[derive(Clone, Debug)]
pub struct CardBox {
    pub section: usize,
    pub title: String,
    pub body: String,
    pub rect: Rect,
}

#[derive(Clone, Debug)]
pub struct PageLayout {
    pub viewport: Vec2,
    pub compact: bool,
    pub title: String,
    pub hero: Rect,
    pub countdown_at: Option<Vec2>,
    pub sections: Vec<SectionBox>,
    pub cards: Vec<CardBox>,
    pub nav_links: Vec<NavLink>,
    pub menu_button: Option<Rect>,
    pub back_to_top: Option<Rect>,
    pub has_canvas: bool,
    pub document_height: f32,
}

impl PageLayout {
    pub fn build(content: &PageContent, has_countdown: bool, viewport: Vec2) -> Self {
        let compact = viewport.x < COMPACT_WIDTH;
        let margin = if compact { 16.0 } else { 48.0 };
        let content_width = (viewport.x - 2.0 * margin).clamp(0.0, MAX_CONTENT_WIDTH);
        let left = ((viewport.x - content_width) * 0.5).max(0.0);

        let hero = Rect::new(left, NAV_HEIGHT, content_width, (viewport.y * 0.8).max(240.0));
        let countdown_at = has_countdown.then(|| Vec2::new(hero.x, hero.y + hero.height * 0.6));

        let columns = if compact { 1 } else { 3 };
        let card_width = (content_width - CARD_GAP * (columns as f32 - 1.0)) / columns as f32;

        let mut sections = Vec::with_capacity(content.sections.len());
        let mut cards = Vec::new();
        let mut cursor = hero.bottom() + SECTION_GAP;

        for (index, section) in content.sections.iter().enumerate() {
            let top = cursor;
            let mut y = top + SECTION_PADDING + TITLE_HEIGHT;
            if !section.body.is_empty() {
                y += BODY_HEIGHT;
            }
            for (i, card) in section.cards.iter().enumerate() {
                let col = i % columns;
                let row = i / columns;
                cards.push(CardBox {
                    section: index,
                    title: card.title.clone(),
                    body: card.body.clone(),
                    rect: Rect::new(
                        left + col as f32 * (card_width + CARD_GAP),
                        y + row as f32 * (CARD_HEIGHT + CARD_GAP),
                        card_width,
                        CARD_HEIGHT,
                    ),
                });
            }
            let rows = section.cards.len().div_ceil(columns);
            y += rows as f32 * (CARD_HEIGHT + CARD_GAP);
            let height = y + SECTION_PADDING - top;

            sections.push(SectionBox {
                id: section.id.clone(),
                title: section.title.clone(),
                body: section.body.clone(),
                rect: Rect::new(left, top, content_width, height),
            });
            cursor = top + height + SECTION_GAP;
        }

        let nav_links = if content.menu {
            nav_links(content, viewport)
        } else {
            Vec::new()
        };
        let menu_button = content.menu.then(|| {
            Rect::new(
                viewport.x - margin - BUTTON_SIZE,
                (NAV_HEIGHT - BUTTON_SIZE) * 0.5,
                BUTTON_SIZE,
                BUTTON_SIZE,
            )
        });
        let back_to_top = content.back_to_top.then(|| {
            Rect::new(
                viewport.x - BUTTON_SIZE - 24.0,
                viewport.y - BUTTON_SIZE - 24.0,
                BUTTON_SIZE,
                BUTTON_SIZE,
            )
        });

        Self {
            viewport,
            compact,
            title: content.title.clone(),
            hero,
            countdown_at,
            sections,
            cards,
            nav_links,
            menu_button,
            back_to_top,
            has_canvas: content.canvas,
            document_height: cursor,
        }
    }

    /// Which page elements exist.
    pub fn elements(&self) -> PageElements<ElementId> {
        let has_menu = self.menu_button.is_some();
        PageElements {
            menu_toggle: has_menu.then_some(ElementId::MenuToggle),
            nav_links: (has_menu && !self.nav_links.is_empty()).then_some(ElementId::NavLinks),
            canvas: self.has_canvas.then_some(ElementId::Canvas),
            countdown: self.countdown_at.map(|_| ElementId::Countdown),
            back_to_top: self.back_to_top.map(|_| ElementId::BackToTop),
            sections: (0..self.sections.len()).map(ElementId::Section).collect(),
            cards: (0..self.cards.len()).map(ElementId::Card).collect(),
        }
    }

    /// Scroll destinations for `#id` links, leaving room for the nav bar.
    pub fn anchors(&self) -> Vec<AnchorTarget> {
        self.sections
            .iter()
            .map(|s| AnchorTarget {
                id: s.id.clone(),
                offset: (s.rect.y - NAV_HEIGHT).max(0.0),
            })
            .collect()
    }

    pub fn max_scroll(&self) -> f32 {
        (self.document_height - self.viewport.y).max(0.0)
    }

    pub fn section_rects(&self, scroll: f32) -> Vec<Rect> {
        self.sections.iter().map(|s| s.rect.scrolled(scroll)).collect()
    }

    pub fn card_tops(&self, scroll: f32) -> Vec<f32> {
        self.cards.iter().map(|c| c.rect.y - scroll).collect()
    }

    /// Card under a viewport point.
    pub fn card_at(&self, point: Vec2, scroll: f32) -> Option<usize> {
        if point.y < NAV_HEIGHT {
            return None;
        }
        self.cards
            .iter()
            .position(|c| c.rect.scrolled(scroll).contains(point.x, point.y))
    }

    /// Nav link under a viewport point.
    pub fn nav_link_at(&self, point: Vec2, menu_open: bool) -> Option<&NavLink> {
        self.nav_links.iter().find(|link| {
            let rect = if self.compact {
                if !menu_open {
                    return false;
                }
                link.dropdown
            } else {
                link.inline
            };
            rect.contains(point.x, point.y)
        })
    }
}

fn nav_links(content: &PageContent, viewport: Vec2) -> Vec<NavLink> {
    let margin = 48.0 + BUTTON_SIZE + 16.0;
    let widths: Vec<f32> = content
        .sections
        .iter()
        .map(|s| s.title.chars().count() as f32 * NAV_CHAR_WIDTH + 24.0)
        .collect();
    let mut x = viewport.x - margin - widths.iter().sum::<f32>();

    content
        .sections
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (section, width))| {
            let inline = Rect::new(x, 0.0, width, NAV_HEIGHT);
            x += width;
            NavLink {
                label: section.title.clone(),
                href: format!("#{}", section.id),
                inline,
                dropdown: Rect::new(
                    0.0,
                    NAV_HEIGHT + i as f32 * MENU_ITEM_HEIGHT,
                    viewport.x,
                    MENU_ITEM_HEIGHT,
                ),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use starfield::controls::resolve_anchor;

    fn layout(width: f32) -> PageLayout {
        PageLayout::build(&PageContent::default(), true, Vec2::new(width, 800.0))
    }

    #[test]
    fn test_sections_stack_without_overlap() {
        let layout = layout(1280.0);
        assert_eq!(layout.sections.len(), 4);
        for pair in layout.sections.windows(2) {
            assert!(pair[0].rect.bottom() < pair[1].rect.top());
        }
        assert!(layout.document_height > layout.sections[3].rect.bottom());
    }

    #[test]
    fn test_cards_inside_their_section() {
        for width in [400.0, 1280.0] {
            let layout = layout(width);
            assert_eq!(layout.cards.len(), 13);
            for card in &layout.cards {
                let section = &layout.sections[card.section].rect;
                assert!(card.rect.top() >= section.top());
                assert!(card.rect.bottom() <= section.bottom());
            }
        }
    }

    #[test]
    fn test_compact_layout_collapses_menu() {
        let narrow = layout(400.0);
        assert!(narrow.compact);
        let link = &narrow.nav_links[0];
        let center = Vec2::new(link.dropdown.x + 10.0, link.dropdown.y + 10.0);
        assert!(narrow.nav_link_at(center, false).is_none());
        assert_eq!(narrow.nav_link_at(center, true).map(|l| l.href.as_str()), Some("#about"));
    }

    #[test]
    fn test_nav_links_resolve_to_sections() {
        let layout = layout(1280.0);
        let anchors = layout.anchors();
        for link in &layout.nav_links {
            assert!(resolve_anchor(&link.href, &anchors).is_some(), "{}", link.href);
        }
    }

    #[test]
    fn test_elements_follow_content() {
        let content = PageContent {
            menu: false,
            back_to_top: false,
            ..PageContent::default()
        };
        let layout = PageLayout::build(&content, false, Vec2::new(1024.0, 768.0));
        let elements = layout.elements();
        assert!(elements.menu_toggle.is_none());
        assert!(elements.nav_links.is_none());
        assert!(elements.countdown.is_none());
        assert!(elements.back_to_top.is_none());
        assert_eq!(elements.canvas, Some(ElementId::Canvas));
        assert_eq!(elements.sections.len(), 4);
    }

    #[test]
    fn test_card_hit_respects_scroll_and_nav() {
        let layout = layout(1280.0);
        let card = layout.cards[0].rect;
        let scroll = card.y - 300.0;
        let inside = Vec2::new(card.x + 5.0, 305.0);
        assert_eq!(layout.card_at(inside, scroll), Some(0));
        // hidden behind the nav bar
        assert_eq!(layout.card_at(Vec2::new(card.x + 5.0, 10.0), card.y - 5.0), None);
    }
}
