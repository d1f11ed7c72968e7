//! The particle field: the scene object the render loop draws.
//!
//! Owns everything the animation reads each frame (canvas bounds, last mouse
//! position, particles, shooting stars) so update and draw are functions of
//! the field plus elapsed time rather than of shared globals.

use std::time::Duration;

use glam::Vec2;
use rand::{rngs::StdRng, SeedableRng};

use crate::config::FieldConfig;
use crate::links::{self, Link};
use crate::particle::{Particle, ShootingStar};

pub struct ParticleField {
    config: FieldConfig,
    bounds: Vec2,
    mouse: Option<Vec2>,
    particles: Vec<Particle>,
    stars: Vec<ShootingStar>,
    rng: StdRng,
}

impl ParticleField {
    /// Create and populate a field with `config.particle_count` particles.
    pub fn new(config: FieldConfig, width: f32, height: f32) -> Self {
        Self::from_rng(config, width, height, StdRng::from_entropy())
    }

    /// Deterministic field for tests and reproducible captures.
    pub fn with_seed(config: FieldConfig, width: f32, height: f32, seed: u64) -> Self {
        Self::from_rng(config, width, height, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: FieldConfig, width: f32, height: f32, rng: StdRng) -> Self {
        let count = config.particle_count;
        let mut field = Self {
            config,
            bounds: sanitize_bounds(width, height),
            mouse: None,
            particles: Vec::new(),
            stars: Vec::new(),
            rng,
        };
        field.initialize(count);
        field
    }

    /// Discard all entities and repopulate with `count` fresh particles and
    /// a full star pool.
    pub fn initialize(&mut self, count: usize) {
        let bounds = self.bounds;
        let rng = &mut self.rng;

        self.particles.clear();
        self.particles
            .extend((0..count).map(|_| Particle::random(rng, bounds)));

        self.stars.clear();
        self.stars.extend(
            (0..self.config.star_count).map(|_| ShootingStar::random(rng, bounds.x)),
        );

        log::debug!(
            "field initialized: {} particles, {} stars on {}x{}",
            self.particles.len(),
            self.stars.len(),
            bounds.x,
            bounds.y
        );
    }

    /// Track a new canvas size. Repopulates (same counts) when it changed.
    pub fn resize(&mut self, width: f32, height: f32) {
        let bounds = sanitize_bounds(width, height);
        if bounds == self.bounds {
            return;
        }
        self.bounds = bounds;
        let count = self.particles.len();
        self.initialize(count);
    }

    /// Record the pointer position. Non-finite coordinates are ignored.
    pub fn set_mouse(&mut self, x: f32, y: f32) {
        let mouse = Vec2::new(x, y);
        if mouse.is_finite() {
            self.mouse = Some(mouse);
        } else {
            log::debug!("ignoring non-finite mouse position ({}, {})", x, y);
        }
    }

    /// Pointer left the canvas.
    pub fn clear_mouse(&mut self) {
        self.mouse = None;
    }

    /// Advance every particle, then every shooting star, by one frame.
    pub fn advance(&mut self, elapsed: Duration) {
        self.advance_particles(elapsed);
        self.advance_stars();
    }

    pub fn advance_particles(&mut self, elapsed: Duration) {
        let elapsed_secs = elapsed.as_secs_f32();
        let bounds = self.bounds;
        let mouse = self.mouse;
        for particle in &mut self.particles {
            particle.update(bounds, mouse, &self.config, elapsed_secs);
            if !particle.is_finite() {
                log::warn!("respawning particle with non-finite state: {:?}", particle);
                *particle = Particle::random(&mut self.rng, bounds);
            }
        }
    }

    /// Stars that leave the canvas are reset in place.
    pub fn advance_stars(&mut self) {
        let bounds = self.bounds;
        for star in &mut self.stars {
            if star.update(bounds) {
                star.reset(&mut self.rng, bounds.x);
            }
        }
    }

    /// Particle pairs closer than the link threshold.
    pub fn links(&self) -> Vec<Link> {
        let positions: Vec<Vec2> = self.particles.iter().map(|p| p.position).collect();
        let threshold = self.config.link_threshold;
        if positions.len() > self.config.grid_link_cutoff {
            links::grid_pairs(&positions, threshold, self.bounds)
        } else {
            links::all_pairs(&positions, threshold)
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access to entity state. The count itself is fixed.
    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn stars(&self) -> &[ShootingStar] {
        &self.stars
    }

    #[inline]
    pub fn stars_mut(&mut self) -> &mut [ShootingStar] {
        &mut self.stars
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.bounds.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bounds.y
    }

    #[inline]
    pub fn mouse(&self) -> Option<Vec2> {
        self.mouse
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}

fn sanitize_bounds(width: f32, height: f32) -> Vec2 {
    let clean = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    Vec2::new(clean(width), clean(height))
}
