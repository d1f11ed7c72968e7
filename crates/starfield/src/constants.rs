//! Reference tuning for the landing page effects.
//!
//! `LandingConfig::default()` is built from these, so changing a value here
//! changes the stock page. A loaded config can still override most of them.

/// Drifting particles created by `ParticleField::initialize`.
pub const PARTICLE_COUNT: usize = 120;

/// Size of the shooting star pool.
pub const SHOOTING_STAR_COUNT: usize = 3;

/// Particles closer than this to the mouse get pulled toward it (pixels).
pub const MOUSE_RADIUS: f32 = 120.0;

/// Fraction of the particle→mouse delta applied per frame inside the radius.
///
/// Must stay in (0, 1): at 1.0 the particle lands on the mouse, above it the
/// particle overshoots.
pub const MOUSE_PULL: f32 = 0.02;

/// Two particles closer than this get a connecting line (pixels).
pub const LINK_THRESHOLD: f32 = 120.0;

/// Above this many particles `links()` switches from all-pairs to a grid.
pub const GRID_LINK_CUTOFF: usize = 400;

/// Particle velocity components are drawn from [-MAX, MAX).
pub const PARTICLE_MAX_SPEED: f32 = 0.25;

/// Particle base radius range.
pub const PARTICLE_MIN_SIZE: f32 = 0.5;
pub const PARTICLE_MAX_SIZE: f32 = 2.5;

/// Amplitude and rate of the size shimmer.
pub const SHIMMER_AMPLITUDE: f32 = 0.5;
pub const SHIMMER_RATE: f32 = 5.0;

/// Stars respawn just above the top edge.
pub const STAR_SPAWN_Y: f32 = -10.0;
pub const STAR_MIN_LENGTH: f32 = 100.0;
pub const STAR_MAX_LENGTH: f32 = 180.0;
pub const STAR_MIN_SPEED: f32 = 4.0;
pub const STAR_MAX_SPEED: f32 = 10.0;
/// Constant downward drift added to every star step.
pub const STAR_FALL: f32 = 2.0;
/// Stars travel within ±π/16 of horizontal.
pub const STAR_MAX_ANGLE: f32 = std::f32::consts::PI / 16.0;

/// Section counts as in view once this fraction of it is visible.
pub const SECTION_THRESHOLD: f32 = 0.2;

/// Cards reveal once their top is above this fraction of the viewport height.
pub const CARD_TRIGGER: f32 = 0.85;

/// Delay between consecutive card reveals, in milliseconds.
pub const STAGGER_DELAY_MS: u64 = 150;

/// Back-to-top shows once the page is scrolled past this many pixels.
pub const BACK_TO_TOP_OFFSET: f32 = 300.0;

/// Countdown refresh period, in milliseconds.
pub const COUNTDOWN_PERIOD_MS: u64 = 1000;

/// Event start, local time.
pub const EVENT_START: &str = "2025-11-18T09:00:00";
