//! `Canvas2d` on top of macroquad's immediate-mode drawing.

use glam::Vec2;
use macroquad::models::{draw_mesh, Mesh, Vertex};
use macroquad::prelude::*;
use starfield::render::sample_gradient;
use starfield::{Canvas2d, ColorStop, Rgba};

/// Page background behind the starfield.
pub const PAGE_BACKGROUND: Color = Color::new(0.02, 0.02, 0.06, 1.0);

/// Segments per gradient ring.
const GRADIENT_SEGMENTS: usize = 64;

#[inline]
pub fn to_color(c: Rgba) -> Color {
    Color::from_rgba(c.r, c.g, c.b, (c.a.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Draws straight to the screen. There is no separate canvas layer, so
/// "clear to transparent" clears to the page background instead.
pub struct MacroquadCanvas {
    background: Color,
}

impl MacroquadCanvas {
    pub fn new() -> Self {
        Self {
            background: PAGE_BACKGROUND,
        }
    }
}

impl Canvas2d for MacroquadCanvas {
    fn clear(&mut self) {
        clear_background(self.background);
    }

    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[ColorStop]) {
        let Some(inner) = sample_gradient(stops, 0.0) else {
            return;
        };
        if radius <= 0.0 {
            return;
        }

        // Rings at every stop, plus one out to the screen corners so the
        // whole surface is covered by a single mesh (no double blending).
        let mut rings: Vec<(f32, Color)> = stops
            .iter()
            .filter(|s| s.offset > 0.0)
            .map(|s| (radius * s.offset.min(1.0), to_color(s.color)))
            .collect();
        let corner = Vec2::new(center.x.max(screen_width() - center.x), center.y.max(screen_height() - center.y))
            .length();
        let outer = rings.last().map(|r| r.0).unwrap_or(0.0);
        if corner > outer {
            let color = stops.last().map(|s| to_color(s.color)).unwrap_or(to_color(inner));
            rings.push((corner, color));
        }

        let mut vertices = Vec::with_capacity(1 + rings.len() * GRADIENT_SEGMENTS);
        let mut indices: Vec<u16> = Vec::with_capacity(rings.len() * GRADIENT_SEGMENTS * 6);
        vertices.push(Vertex::new(center.x, center.y, 0.0, 0.0, 0.0, to_color(inner)));

        for (ring, &(r, color)) in rings.iter().enumerate() {
            for seg in 0..GRADIENT_SEGMENTS {
                let angle = seg as f32 / GRADIENT_SEGMENTS as f32 * std::f32::consts::TAU;
                let p = center + Vec2::from_angle(angle) * r;
                vertices.push(Vertex::new(p.x, p.y, 0.0, 0.0, 0.0, color));
            }

            let base = (1 + ring * GRADIENT_SEGMENTS) as u16;
            for seg in 0..GRADIENT_SEGMENTS {
                let a = base + seg as u16;
                let b = base + ((seg + 1) % GRADIENT_SEGMENTS) as u16;
                if ring == 0 {
                    indices.extend_from_slice(&[0, a, b]);
                } else {
                    let pa = a - GRADIENT_SEGMENTS as u16;
                    let pb = b - GRADIENT_SEGMENTS as u16;
                    indices.extend_from_slice(&[pa, a, b, pa, b, pb]);
                }
            }
        }

        draw_mesh(&Mesh {
            vertices,
            indices,
            texture: None,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        draw_circle(center.x, center.y, radius.max(0.0), to_color(color));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        draw_line(from.x, from.y, to.x, to.y, width, to_color(color));
    }
}
