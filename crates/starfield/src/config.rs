//! Landing page configuration.
//!
//! Every knob has a default matching the stock page (see `constants`), so an
//! empty JSON object `{}` is a valid config.

use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    BACK_TO_TOP_OFFSET, CARD_TRIGGER, COUNTDOWN_PERIOD_MS, EVENT_START, GRID_LINK_CUTOFF,
    LINK_THRESHOLD, MOUSE_PULL, MOUSE_RADIUS, PARTICLE_COUNT, SECTION_THRESHOLD,
    SHOOTING_STAR_COUNT, STAGGER_DELAY_MS,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Particle field tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub star_count: usize,
    /// Pull radius around the mouse (pixels)
    pub mouse_radius: f32,
    /// Fraction of the particle→mouse delta applied per frame, in (0, 1)
    pub mouse_pull: f32,
    /// Max distance for a connecting line (pixels)
    pub link_threshold: f32,
    /// Particle count above which links use the spatial grid
    pub grid_link_cutoff: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            star_count: SHOOTING_STAR_COUNT,
            mouse_radius: MOUSE_RADIUS,
            mouse_pull: MOUSE_PULL,
            link_threshold: LINK_THRESHOLD,
            grid_link_cutoff: GRID_LINK_CUTOFF,
        }
    }
}

/// Scroll reveal tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction at which a section counts as in view
    pub section_threshold: f32,
    /// Fraction of viewport height a card top must rise above
    pub card_trigger: f32,
    /// Delay per card index (ms)
    pub stagger_delay_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            section_threshold: SECTION_THRESHOLD,
            card_trigger: CARD_TRIGGER,
            stagger_delay_ms: STAGGER_DELAY_MS,
        }
    }
}

/// Ancillary control tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub back_to_top_offset: f32,
    pub countdown_period_ms: u64,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            back_to_top_offset: BACK_TO_TOP_OFFSET,
            countdown_period_ms: COUNTDOWN_PERIOD_MS,
        }
    }
}

/// A card inside a section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardContent {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// A page section, addressable as `#id`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionContent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub cards: Vec<CardContent>,
}

/// Page markup stand-in: what the host lays out
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageContent {
    pub title: String,
    /// Render the collapsible nav menu
    pub menu: bool,
    /// Render the back-to-top button
    pub back_to_top: bool,
    /// Render the starfield canvas
    pub canvas: bool,
    pub sections: Vec<SectionContent>,
}

impl Default for PageContent {
    fn default() -> Self {
        let card = |title: &str, body: &str| CardContent {
            title: title.to_owned(),
            body: body.to_owned(),
        };
        Self {
            title: "Starfield Summit".to_owned(),
            menu: true,
            back_to_top: true,
            canvas: true,
            sections: vec![
                SectionContent {
                    id: "about".to_owned(),
                    title: "About".to_owned(),
                    body: "One day of talks under the stars.".to_owned(),
                    cards: vec![
                        card("Talks", "Twelve sessions across two stages"),
                        card("Workshops", "Hands-on labs in the afternoon"),
                        card("Networking", "Evening meetup on the rooftop"),
                    ],
                },
                SectionContent {
                    id: "speakers".to_owned(),
                    title: "Speakers".to_owned(),
                    body: String::new(),
                    cards: vec![
                        card("Ada", "Keynote"),
                        card("Grace", "Compilers"),
                        card("Linus", "Kernels"),
                        card("Barbara", "Abstractions"),
                    ],
                },
                SectionContent {
                    id: "timeline".to_owned(),
                    title: "Timeline".to_owned(),
                    body: String::new(),
                    cards: vec![
                        card("09:00", "Doors open"),
                        card("10:00", "Keynote"),
                        card("13:00", "Workshops"),
                        card("18:00", "Closing"),
                    ],
                },
                SectionContent {
                    id: "register".to_owned(),
                    title: "Register".to_owned(),
                    body: "Seats are limited.".to_owned(),
                    cards: vec![card("Standard", "Full day access"), card("Student", "Bring your ID")],
                },
            ],
        }
    }
}

/// Complete landing page configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub field: FieldConfig,
    pub reveal: RevealConfig,
    pub controls: ControlsConfig,
    /// Event start in local time; no countdown when absent
    pub event_start: Option<NaiveDateTime>,
    pub page: PageContent,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            reveal: RevealConfig::default(),
            controls: ControlsConfig::default(),
            event_start: NaiveDateTime::parse_from_str(EVENT_START, "%Y-%m-%dT%H:%M:%S").ok(),
            page: PageContent::default(),
        }
    }
}

impl LandingConfig {
    /// Load from a `.json`, `.yaml` or `.yml` file and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::load_json(path),
            Some("yaml") | Some("yml") => Self::load_yaml(path),
            _ => Err(ConfigError::Invalid(format!(
                "unsupported config extension: {}",
                path.display()
            ))),
        }
    }

    pub fn load_json(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_yaml(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_json(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let field = &self.field;
        if !(field.mouse_pull > 0.0 && field.mouse_pull < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "field.mouse_pull must be in (0, 1), got {}",
                field.mouse_pull
            )));
        }
        positive("field.mouse_radius", field.mouse_radius)?;
        positive("field.link_threshold", field.link_threshold)?;

        let reveal = &self.reveal;
        fraction("reveal.section_threshold", reveal.section_threshold)?;
        fraction("reveal.card_trigger", reveal.card_trigger)?;

        let controls = &self.controls;
        if !controls.back_to_top_offset.is_finite() || controls.back_to_top_offset < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "controls.back_to_top_offset must be >= 0, got {}",
                controls.back_to_top_offset
            )));
        }
        if controls.countdown_period_ms == 0 {
            return Err(ConfigError::Invalid(
                "controls.countdown_period_ms must be > 0".to_owned(),
            ));
        }

        for (i, section) in self.page.sections.iter().enumerate() {
            if section.id.is_empty() || section.id.contains(char::is_whitespace) {
                return Err(ConfigError::Invalid(format!(
                    "page.sections[{}].id must be a non-empty anchor without spaces",
                    i
                )));
            }
            if self.page.sections[..i].iter().any(|s| s.id == section.id) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
        }
        Ok(())
    }
}

fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{} must be > 0, got {}", name, value)))
    }
}

fn fraction(name: &str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{} must be in (0, 1], got {}", name, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = LandingConfig::default();
        config.validate().unwrap();
        assert_eq!(config.field.particle_count, 120);
        assert_eq!(config.field.star_count, 3);
        assert!(config.event_start.is_some());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: LandingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LandingConfig::default());
    }

    #[test]
    fn test_partial_yaml_override() {
        let yaml = "field:\n  particle_count: 40\nevent_start: 2030-01-02T03:04:05\n";
        let config: LandingConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.field.particle_count, 40);
        assert_eq!(config.field.link_threshold, LINK_THRESHOLD);
        assert_eq!(
            config.event_start.unwrap().to_string(),
            "2030-01-02 03:04:05"
        );
    }

    #[test]
    fn test_rejects_overshooting_pull() {
        let mut config = LandingConfig::default();
        config.field.mouse_pull = 1.5;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        config.field.mouse_pull = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_duplicate_anchor() {
        let mut config = LandingConfig::default();
        let dup = config.page.sections[0].clone();
        config.page.sections.push(dup);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_example_config_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/landing.example.yaml");
        let config = LandingConfig::load(&path).unwrap();
        assert_eq!(config.field.particle_count, 160);
        assert_eq!(config.field.star_count, SHOOTING_STAR_COUNT);
        assert_eq!(config.reveal.stagger_delay_ms, 120);
        assert_eq!(config.page.sections.len(), 2);
        assert!(config.page.menu);
    }

    #[test]
    fn test_unknown_extension() {
        let err = LandingConfig::load(Path::new("landing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
