//! Starfield entities
//!
//! Two point-like entities share the canvas:
//! - `Particle`: slow drifting dot, bounces off the canvas edges, shimmers
//! - `ShootingStar`: fast streak that falls across the canvas and is recycled
//!   in place once it leaves
//!
//! Both are plain data. The owning `ParticleField` supplies bounds, mouse and
//! time on every step.

use glam::Vec2;
use rand::Rng;

use crate::config::FieldConfig;
use crate::constants::{
    PARTICLE_MAX_SIZE, PARTICLE_MAX_SPEED, PARTICLE_MIN_SIZE, SHIMMER_AMPLITUDE, SHIMMER_RATE,
    STAR_FALL, STAR_MAX_ANGLE, STAR_MAX_LENGTH, STAR_MAX_SPEED, STAR_MIN_LENGTH, STAR_MIN_SPEED,
    STAR_SPAWN_Y,
};

/// A drifting dot rendered as a small filled circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Per-frame displacement (pixels/frame).
    pub velocity: Vec2,
    /// Radius the shimmer oscillates around.
    pub base_size: f32,
    /// Radius used for drawing this frame.
    pub size: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, base_size: f32) -> Self {
        Self {
            position,
            velocity,
            base_size,
            size: base_size,
        }
    }

    /// Uniform position over `bounds`, small symmetric velocity, small radius.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Self {
        // gen::<f32>() scaling instead of gen_range so a zero-sized canvas
        // doesn't produce an empty range
        let position = Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y);
        let velocity = Vec2::new(
            rng.gen::<f32>() * 2.0 * PARTICLE_MAX_SPEED - PARTICLE_MAX_SPEED,
            rng.gen::<f32>() * 2.0 * PARTICLE_MAX_SPEED - PARTICLE_MAX_SPEED,
        );
        let base_size = rng.gen::<f32>() * (PARTICLE_MAX_SIZE - PARTICLE_MIN_SIZE) + PARTICLE_MIN_SIZE;
        Self::new(position, velocity, base_size)
    }

    /// One frame of motion.
    ///
    /// Order matters and matches the drawn result:
    /// 1. integrate
    /// 2. reflect off any edge the particle is past and still moving away from
    /// 3. pull toward the mouse when inside `config.mouse_radius`
    /// 4. shimmer the radius (travelling wave along x)
    pub fn update(&mut self, bounds: Vec2, mouse: Option<Vec2>, config: &FieldConfig, elapsed_secs: f32) {
        self.position += self.velocity;

        // Not clamped: a particle may sit past the edge for a frame.
        if (self.position.x < 0.0 && self.velocity.x < 0.0)
            || (self.position.x > bounds.x && self.velocity.x > 0.0)
        {
            self.velocity.x = -self.velocity.x;
        }
        if (self.position.y < 0.0 && self.velocity.y < 0.0)
            || (self.position.y > bounds.y && self.velocity.y > 0.0)
        {
            self.velocity.y = -self.velocity.y;
        }

        if let Some(mouse) = mouse {
            let delta = mouse - self.position;
            if delta.length() < config.mouse_radius {
                self.position += delta * config.mouse_pull;
            }
        }

        self.size = self.base_size
            + (elapsed_secs * SHIMMER_RATE + self.position.x).sin() * SHIMMER_AMPLITUDE;
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite() && self.size.is_finite()
    }

    #[inline]
    pub fn in_bounds(&self, bounds: Vec2) -> bool {
        self.position.x >= 0.0
            && self.position.x <= bounds.x
            && self.position.y >= 0.0
            && self.position.y <= bounds.y
    }
}

/// A streak with a fixed trajectory, rendered as a short trailing line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShootingStar {
    /// Head of the streak.
    pub position: Vec2,
    /// Radians from +x, positive is downward on screen.
    pub angle: f32,
    /// Pixels per frame along `angle`.
    pub speed: f32,
    /// Trail length in pixels.
    pub length: f32,
}

impl ShootingStar {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32) -> Self {
        let mut star = Self {
            position: Vec2::ZERO,
            angle: 0.0,
            speed: 0.0,
            length: 0.0,
        };
        star.reset(rng, width);
        star
    }

    /// Re-randomize in place just above the top edge.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f32) {
        self.position = Vec2::new(rng.gen::<f32>() * width, STAR_SPAWN_Y);
        self.length = rng.gen::<f32>() * (STAR_MAX_LENGTH - STAR_MIN_LENGTH) + STAR_MIN_LENGTH;
        self.speed = rng.gen::<f32>() * (STAR_MAX_SPEED - STAR_MIN_SPEED) + STAR_MIN_SPEED;
        self.angle = rng.gen::<f32>() * 2.0 * STAR_MAX_ANGLE - STAR_MAX_ANGLE;
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }

    /// Move one frame. Returns true once the star has left the canvas
    /// through the bottom, left or right edge.
    ///
    /// The top edge is not an exit: stars spawn above it.
    pub fn update(&mut self, bounds: Vec2) -> bool {
        self.position += self.direction() * self.speed + Vec2::new(0.0, STAR_FALL);
        self.is_outside(bounds)
    }

    #[inline]
    pub fn is_outside(&self, bounds: Vec2) -> bool {
        !self.position.is_finite()
            || self.position.y > bounds.y
            || self.position.x > bounds.x
            || self.position.x < 0.0
    }

    /// Tail end of the streak, trailing back along the trajectory.
    #[inline]
    pub fn tail(&self) -> Vec2 {
        self.position - self.direction() * self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn config() -> FieldConfig {
        FieldConfig::default()
    }

    #[test]
    fn test_random_particle_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Vec2::new(800.0, 600.0);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, bounds);
            assert!(p.in_bounds(bounds));
            assert!(p.velocity.x.abs() <= PARTICLE_MAX_SPEED);
            assert!(p.velocity.y.abs() <= PARTICLE_MAX_SPEED);
            assert!(p.base_size >= PARTICLE_MIN_SIZE && p.base_size <= PARTICLE_MAX_SIZE);
            assert_eq!(p.size, p.base_size);
        }
    }

    #[test]
    fn test_random_particle_on_empty_canvas() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = Particle::random(&mut rng, Vec2::ZERO);
        assert_eq!(p.position, Vec2::ZERO);
    }

    #[test]
    fn test_shimmer_stays_positive() {
        let bounds = Vec2::new(100.0, 100.0);
        let mut p = Particle::new(Vec2::new(50.0, 50.0), Vec2::ZERO, PARTICLE_MIN_SIZE);
        for frame in 0..200 {
            p.update(bounds, None, &config(), frame as f32 / 60.0);
            assert!(p.size >= 0.0);
            assert!((p.size - p.base_size).abs() <= SHIMMER_AMPLITUDE + 1e-6);
        }
    }

    #[test]
    fn test_shimmer_travels_along_x() {
        // Same time, different x -> different phase
        let bounds = Vec2::new(100.0, 100.0);
        let mut a = Particle::new(Vec2::new(10.0, 50.0), Vec2::ZERO, 1.0);
        let mut b = Particle::new(Vec2::new(11.5, 50.0), Vec2::ZERO, 1.0);
        a.update(bounds, None, &config(), 0.0);
        b.update(bounds, None, &config(), 0.0);
        assert!((a.size - b.size).abs() > 1e-3);
    }

    #[test]
    fn test_star_reset_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let s = ShootingStar::random(&mut rng, 640.0);
            assert_eq!(s.position.y, STAR_SPAWN_Y);
            assert!(s.position.x >= 0.0 && s.position.x <= 640.0);
            assert!(s.length >= STAR_MIN_LENGTH && s.length <= STAR_MAX_LENGTH);
            assert!(s.speed >= STAR_MIN_SPEED && s.speed <= STAR_MAX_SPEED);
            assert!(s.angle.abs() <= STAR_MAX_ANGLE);
        }
    }

    #[test]
    fn test_star_falls_and_trails_behind() {
        let mut star = ShootingStar {
            position: Vec2::new(100.0, 0.0),
            angle: 0.0,
            speed: 5.0,
            length: 120.0,
        };
        let exited = star.update(Vec2::new(800.0, 600.0));
        assert!(!exited);
        assert_eq!(star.position, Vec2::new(105.0, STAR_FALL));
        assert_eq!(star.tail(), Vec2::new(-15.0, STAR_FALL));
    }

    #[test]
    fn test_star_above_top_is_not_outside() {
        let star = ShootingStar {
            position: Vec2::new(10.0, STAR_SPAWN_Y),
            angle: 0.0,
            speed: 5.0,
            length: 100.0,
        };
        assert!(!star.is_outside(Vec2::new(100.0, 100.0)));
    }
}
