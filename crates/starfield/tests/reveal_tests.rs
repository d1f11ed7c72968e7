//! Reveal behaviour across scroll sequences
//!
//! - Staggered card reveal is monotonic: scrolling back up never hides a card
//! - Re-running the pass with nothing new in view mutates nothing
//! - Section glow follows the viewport both ways

use std::time::Duration;

use starfield::reveal::CardState;
use starfield::{Rect, SectionEvent, SectionObserver, StaggeredReveal};

const VH: f32 = 800.0;
const DELAY: Duration = Duration::from_millis(150);

/// Card tops for a page with cards every 300px, seen from `scroll`
fn tops(count: usize, scroll: f32) -> Vec<f32> {
    (0..count).map(|i| 200.0 + i as f32 * 300.0 - scroll).collect()
}

#[test]
fn test_reveal_is_monotonic() {
    let mut reveal = StaggeredReveal::new(8, 0.85, DELAY);
    let mut now = Duration::ZERO;

    // scroll down to the bottom
    for scroll in (0..=2400).step_by(100) {
        reveal.scan(&tops(8, scroll as f32), VH, now);
        reveal.poll(now);
        now += Duration::from_millis(50);
    }
    now += DELAY * 8;
    reveal.poll(now);
    assert_eq!(reveal.revealed_count(), 8);

    // scroll back up: nothing is hidden again
    for scroll in (0..=2400).rev().step_by(100) {
        reveal.scan(&tops(8, scroll as f32), VH, now);
        assert!(reveal.poll(now).is_empty());
        assert_eq!(reveal.revealed_count(), 8);
        now += Duration::from_millis(50);
    }
}

#[test]
fn test_rescan_is_idempotent() {
    let mut reveal = StaggeredReveal::new(5, 0.85, DELAY);
    let now = Duration::from_secs(2);
    let view = tops(5, 0.0); // first two cards above 680px

    assert_eq!(reveal.scan(&view, VH, now), 2);
    let snapshot: Vec<_> = (0..5).map(|i| reveal.state(i)).collect();

    // same view, later scroll events: no new schedules, no re-timing
    for later in 1..10 {
        assert_eq!(reveal.scan(&view, VH, now + DELAY * later), 0);
    }
    let after: Vec<_> = (0..5).map(|i| reveal.state(i)).collect();
    assert_eq!(snapshot, after);

    let revealed = reveal.poll(now + DELAY * 4);
    assert_eq!(revealed, vec![0, 1]);
    assert!(reveal.poll(now + DELAY * 5).is_empty());
    assert_eq!(reveal.state(0), Some(CardState::Revealed(now)));
}

#[test]
fn test_section_glow_bidirectional() {
    let mut observer = SectionObserver::new(1, 0.2);
    let section = Rect::new(0.0, 1000.0, 600.0, 500.0);
    let mut events = Vec::new();

    for scroll in [0.0, 400.0, 900.0, 1500.0, 900.0, 0.0] {
        events.extend(observer.observe(&[section.scrolled(scroll)], VH));
    }
    assert_eq!(
        events,
        vec![
            SectionEvent::Entered(0), // 400: 200px of 500 visible
            SectionEvent::Left(0),    // 1500: scrolled past
            SectionEvent::Entered(0), // 900: back in
            SectionEvent::Left(0),    // 0: below the fold again
        ]
    );
    let state = observer.state(0).unwrap();
    assert!(state.visible);
    assert!(!state.glowing);
}
