//! Starfield - Landing Page Behavior Library
//!
//! Everything the event landing page does besides markup and styling:
//! - Drifting particle field with mouse pull and proximity links
//! - Recycled shooting stars
//! - Per-frame render loop against an abstract 2D surface
//! - Section/card reveal on scroll
//! - Nav menu, smooth scroll, countdown and back-to-top controls
//!
//! This crate is framework-agnostic - it handles state and geometry only.
//! Use the `landing` crate for the Macroquad host.

pub mod config;
pub mod constants;
pub mod controls;
pub mod countdown;
pub mod field;
pub mod links;
pub mod page;
pub mod particle;
pub mod render;
pub mod reveal;
pub mod timer;

pub use config::{ConfigError, LandingConfig};
pub use controls::{
    resolve_anchor, AnchorTarget, BackToTop, CardHover, HoverEvent, MenuView, NavMenu,
    ScrollAnimator,
};
pub use countdown::{countdown_glow, format_countdown, Countdown};
pub use field::ParticleField;
pub use links::Link;
pub use page::{Features, PageElements, ScrollUpdate, TickUpdate};
pub use particle::{Particle, ShootingStar};
pub use render::{render_frame, Canvas2d, ColorStop, FrameHandle, RenderLoop, Rgba};
pub use reveal::{intersection_ratio, Rect, SectionEvent, SectionObserver, StaggeredReveal};
pub use timer::Interval;
