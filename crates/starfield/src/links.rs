//! Proximity links between particles
//!
//! Every unordered pair closer than the threshold gets a line whose opacity
//! falls off linearly with distance. The stock field (120 particles) is small
//! enough for the all-pairs scan (7140 checks/frame); larger fields go
//! through a uniform grid with cell size = threshold so only the 3x3
//! neighbourhood of each cell is tested.

use glam::Vec2;

/// A line between particles `a` and `b` (`a < b`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub alpha: f32,
}

/// Line opacity for two particles `distance` apart.
///
/// `1 - distance / threshold` inside the threshold, `None` at or beyond it.
#[inline]
pub fn link_alpha(distance: f32, threshold: f32) -> Option<f32> {
    if distance < threshold {
        Some((1.0 - distance / threshold).clamp(f32::MIN_POSITIVE, 1.0))
    } else {
        None
    }
}

#[inline]
fn try_link(positions: &[Vec2], a: usize, b: usize, threshold: f32) -> Option<Link> {
    let distance = positions[a].distance(positions[b]);
    link_alpha(distance, threshold).map(|alpha| Link { a, b, distance, alpha })
}

/// O(n²) scan over every unordered pair.
pub fn all_pairs(positions: &[Vec2], threshold: f32) -> Vec<Link> {
    let mut links = Vec::new();
    for a in 0..positions.len() {
        for b in (a + 1)..positions.len() {
            if let Some(link) = try_link(positions, a, b, threshold) {
                links.push(link);
            }
        }
    }
    links
}

/// Same pair set as `all_pairs`, bucketed through a uniform grid.
///
/// Positions outside `bounds` are clamped into the edge cells, which keeps
/// neighbours within one cell of each other.
pub fn grid_pairs(positions: &[Vec2], threshold: f32, bounds: Vec2) -> Vec<Link> {
    let mut links = Vec::new();
    if positions.is_empty() {
        return links;
    }

    let cols = ((bounds.x / threshold).ceil() as usize).max(1);
    let rows = ((bounds.y / threshold).ceil() as usize).max(1);

    let cell_of = |p: Vec2| -> (usize, usize) {
        let cx = ((p.x / threshold).floor().max(0.0) as usize).min(cols - 1);
        let cy = ((p.y / threshold).floor().max(0.0) as usize).min(rows - 1);
        (cx, cy)
    };

    // Linked-list buckets: heads[cell] -> first particle, next[i] -> following
    let mut heads: Vec<i32> = vec![-1; cols * rows];
    let mut next: Vec<i32> = vec![-1; positions.len()];
    for (i, &p) in positions.iter().enumerate() {
        let (cx, cy) = cell_of(p);
        let cell = cy * cols + cx;
        next[i] = heads[cell];
        heads[cell] = i as i32;
    }

    for (a, &p) in positions.iter().enumerate() {
        let (cx, cy) = cell_of(p);
        for ny in cy.saturating_sub(1)..=(cy + 1).min(rows - 1) {
            for nx in cx.saturating_sub(1)..=(cx + 1).min(cols - 1) {
                let mut j = heads[ny * cols + nx];
                while j >= 0 {
                    let b = j as usize;
                    // each unordered pair once
                    if b > a {
                        if let Some(link) = try_link(positions, a, b, threshold) {
                            links.push(link);
                        }
                    }
                    j = next[b];
                }
            }
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_falls_off_linearly() {
        assert_eq!(link_alpha(0.0, 120.0), Some(1.0));
        assert_eq!(link_alpha(60.0, 120.0), Some(0.5));
        let near_edge = link_alpha(119.0, 120.0).unwrap();
        assert!((near_edge - 1.0 / 120.0).abs() < 1e-6);
    }

    #[test]
    fn test_no_link_at_or_past_threshold() {
        assert_eq!(link_alpha(120.0, 120.0), None);
        assert_eq!(link_alpha(500.0, 120.0), None);
    }

    #[test]
    fn test_all_pairs_counts_each_pair_once() {
        let positions = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(20.0, 0.0)];
        let links = all_pairs(&positions, 120.0);
        assert_eq!(links.len(), 3);
        assert!(links.iter().all(|l| l.a < l.b));
    }

    #[test]
    fn test_grid_matches_all_pairs() {
        // Deterministic scatter, including a few points past the edges
        let bounds = Vec2::new(1000.0, 700.0);
        let positions: Vec<Vec2> = (0..600)
            .map(|i| {
                let t = i as f32;
                Vec2::new((t * 37.7) % 1040.0 - 20.0, (t * 91.3) % 740.0 - 20.0)
            })
            .collect();

        let key = |l: &Link| (l.a, l.b);
        let mut brute = all_pairs(&positions, 120.0);
        let mut grid = grid_pairs(&positions, 120.0, bounds);
        brute.sort_by_key(key);
        grid.sort_by_key(key);
        assert_eq!(brute, grid);
    }

    #[test]
    fn test_grid_handles_empty_and_tiny_canvas() {
        assert!(grid_pairs(&[], 120.0, Vec2::new(100.0, 100.0)).is_empty());
        let positions = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)];
        assert_eq!(grid_pairs(&positions, 120.0, Vec2::ZERO).len(), 1);
    }
}
