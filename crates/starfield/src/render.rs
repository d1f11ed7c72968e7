//! Frame rendering against an abstract 2D surface.
//!
//! The host (macroquad window, test recorder, ...) implements `Canvas2d`.
//! `render_frame` draws one frame of the starfield:
//! 1. clear
//! 2. nebula radial gradient
//! 3. advance + draw particles
//! 4. advance + draw shooting stars
//! 5. proximity links
//!
//! `RenderLoop` wraps that in a start/stop lifecycle so the host's frame
//! callback can be halted deterministically.

use std::time::Duration;

use glam::Vec2;

use crate::field::ParticleField;

/// 8-bit RGB with float alpha, CSS `rgba()` style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Component-wise blend, `t` in [0, 1].
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// Gradient stop, `offset` in [0, 1] from the center outward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Violet core → deep blue → black.
pub const NEBULA_STOPS: [ColorStop; 3] = [
    ColorStop::new(0.0, Rgba::new(50, 0, 100, 0.25)),
    ColorStop::new(0.5, Rgba::new(0, 0, 50, 0.2)),
    ColorStop::new(1.0, Rgba::new(0, 0, 0, 0.3)),
];

pub const PARTICLE_FILL: Rgba = Rgba::new(255, 255, 255, 0.8);
pub const STAR_STROKE: Rgba = Rgba::new(255, 255, 255, 0.8);
pub const STAR_LINE_WIDTH: f32 = 2.0;
/// Link colour; alpha is replaced per link.
pub const LINK_STROKE: Rgba = Rgba::new(110, 231, 255, 1.0);
pub const LINK_LINE_WIDTH: f32 = 0.7;

/// Color of a gradient at `offset`, interpolated between the nearest stops.
pub fn sample_gradient(stops: &[ColorStop], offset: f32) -> Option<Rgba> {
    let first = stops.first()?;
    let last = stops.last()?;
    if offset <= first.offset {
        return Some(first.color);
    }
    if offset >= last.offset {
        return Some(last.color);
    }
    if let Some(exact) = stops.iter().find(|s| s.offset == offset) {
        return Some(exact.color);
    }
    stops.windows(2).find_map(|pair| {
        let (lo, hi) = (pair[0], pair[1]);
        if offset >= lo.offset && offset <= hi.offset {
            let span = hi.offset - lo.offset;
            let t = if span > 0.0 { (offset - lo.offset) / span } else { 0.0 };
            Some(lo.color.lerp(hi.color, t))
        } else {
            None
        }
    })
}

/// Drawing surface with the handful of primitives the starfield needs.
pub trait Canvas2d {
    /// Reset every pixel to fully transparent.
    fn clear(&mut self);

    /// Fill the whole surface with a radial gradient around `center`.
    /// Pixels past `radius` take the last stop's color.
    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[ColorStop]);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// What one frame drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub stars: usize,
    pub links: usize,
}

/// Draw one frame, advancing the field as it goes.
pub fn render_frame<C: Canvas2d + ?Sized>(
    field: &mut ParticleField,
    surface: &mut C,
    elapsed: Duration,
) -> FrameStats {
    surface.clear();

    let bounds = field.bounds();
    surface.fill_radial_gradient(bounds * 0.5, bounds.x * 0.5, &NEBULA_STOPS);

    field.advance_particles(elapsed);
    for particle in field.particles() {
        surface.fill_circle(particle.position, particle.size, PARTICLE_FILL);
    }

    field.advance_stars();
    for star in field.stars() {
        surface.stroke_line(star.position, star.tail(), STAR_LINE_WIDTH, STAR_STROKE);
    }

    let links = field.links();
    let particles = field.particles();
    for link in &links {
        surface.stroke_line(
            particles[link.a].position,
            particles[link.b].position,
            LINK_LINE_WIDTH,
            LINK_STROKE.with_alpha(link.alpha),
        );
    }

    FrameStats {
        particles: particles.len(),
        stars: field.stars().len(),
        links: links.len(),
    }
}

/// Token for a scheduled animation. Dropped on `RenderLoop::stop`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Start/stop lifecycle around `render_frame`.
///
/// The host calls `frame` from its display-synced callback and keeps
/// scheduling while it returns true.
pub struct RenderLoop {
    field: ParticleField,
    handle: Option<FrameHandle>,
    next_handle: u64,
    started_at: Duration,
    frames: u64,
    last_stats: FrameStats,
}

impl RenderLoop {
    pub fn new(field: ParticleField) -> Self {
        Self {
            field,
            handle: None,
            next_handle: 1,
            started_at: Duration::ZERO,
            frames: 0,
            last_stats: FrameStats::default(),
        }
    }

    /// Begin animating at host time `now`. Idempotent while running.
    pub fn start(&mut self, now: Duration) -> FrameHandle {
        if let Some(handle) = self.handle {
            return handle;
        }
        let handle = FrameHandle(self.next_handle);
        self.next_handle += 1;
        self.handle = Some(handle);
        self.started_at = now;
        log::debug!("render loop started ({:?})", handle);
        handle
    }

    /// Cancel the scheduled animation. Returns false if it wasn't running.
    pub fn stop(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                log::debug!("render loop stopped ({:?}) after {} frames", handle, self.frames);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    #[inline]
    pub fn handle(&self) -> Option<FrameHandle> {
        self.handle
    }

    /// Render one frame if running. Returns whether to schedule another.
    pub fn frame<C: Canvas2d + ?Sized>(&mut self, now: Duration, surface: &mut C) -> bool {
        if self.handle.is_none() {
            return false;
        }
        let elapsed = now.saturating_sub(self.started_at);
        self.last_stats = render_frame(&mut self.field, surface, elapsed);
        self.frames += 1;
        true
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[inline]
    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_gradient_midpoints() {
        assert_eq!(sample_gradient(&NEBULA_STOPS, 0.0), Some(NEBULA_STOPS[0].color));
        assert_eq!(sample_gradient(&NEBULA_STOPS, 0.5), Some(NEBULA_STOPS[1].color));
        assert_eq!(sample_gradient(&NEBULA_STOPS, 2.0), Some(NEBULA_STOPS[2].color));
        let quarter = sample_gradient(&NEBULA_STOPS, 0.25).unwrap();
        assert_eq!((quarter.r, quarter.g, quarter.b), (25, 0, 75));
        assert!((quarter.a - 0.225).abs() < 1e-6);
        assert_eq!(sample_gradient(&[], 0.3), None);
    }

    #[test]
    fn test_with_alpha_keeps_rgb() {
        let c = LINK_STROKE.with_alpha(0.25);
        assert_eq!((c.r, c.g, c.b, c.a), (110, 231, 255, 0.25));
    }
}
