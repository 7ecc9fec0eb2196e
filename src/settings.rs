//! Game settings
//!
//! Resolved once at startup: defaults, then an optional `settings.json` in the
//! data directory, then environment overrides.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Difficulty;

/// Screen layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Layout {
    #[default]
    Desktop,
    Mobile,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Desktop => "Desktop",
            Layout::Mobile => "Mobile",
        }
    }

    /// Logical screen size in pixels
    pub fn screen_size(&self) -> Vec2 {
        match self {
            Layout::Desktop => Vec2::new(1400.0, 800.0),
            Layout::Mobile => Vec2::new(540.0, 960.0),
        }
    }

    pub fn is_mobile(&self) -> bool {
        *self == Layout::Mobile
    }

    pub fn student_pos(&self) -> Vec2 {
        match self {
            Layout::Desktop => Vec2::new(400.0, 500.0),
            Layout::Mobile => Vec2::new(85.0, 440.0),
        }
    }

    pub fn teacher_pos(&self) -> Vec2 {
        match self {
            Layout::Desktop => Vec2::new(1000.0, 150.0),
            Layout::Mobile => Vec2::new(self.screen_size().x - 60.0, 50.0),
        }
    }

    /// How many notices fit on screen at once
    pub fn max_messages(&self) -> usize {
        match self {
            Layout::Desktop => 3,
            Layout::Mobile => 2,
        }
    }
}

/// Which ruleset the menu starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// Fixed 30 s rounds, the teacher always turns around
    #[default]
    Classic,
    /// Difficulty screen before each round
    Tiered,
}

impl Variant {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Variant::Classic),
            "tiered" | "difficulty" => Some(Variant::Tiered),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub layout: Layout,
    pub variant: Variant,
    /// Where the best score and `settings.json` live. Only
    /// `CHEAT_SIM_DATA_DIR` sets it; the file cannot point elsewhere.
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Fixed RNG seed; random when unset
    pub seed: Option<u64>,

    // === Headless driver ===
    /// Rounds the autopilot plays before exiting
    pub demo_rounds: u32,
    /// Tier the autopilot picks in the tiered variant
    pub difficulty: Difficulty,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: Layout::Desktop,
            variant: Variant::Classic,
            data_dir: PathBuf::from("."),
            seed: None,
            demo_rounds: 3,
            difficulty: Difficulty::Normal,
        }
    }
}

/// Environment variable names
pub const ENV_MOBILE: &str = "MOBILE";
pub const ENV_VARIANT: &str = "CHEAT_SIM_VARIANT";
pub const ENV_DATA_DIR: &str = "CHEAT_SIM_DATA_DIR";
pub const ENV_SEED: &str = "CHEAT_SIM_SEED";

const SETTINGS_FILE: &str = "settings.json";
const BEST_SCORE_FILE: &str = "best_score.json";

impl Settings {
    /// Resolve settings from the process environment
    pub fn load() -> Self {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Resolve settings with an injectable environment lookup
    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = env(ENV_DATA_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| Self::default().data_dir);

        let mut settings = Self::read_file(&data_dir.join(SETTINGS_FILE)).unwrap_or_default();
        settings.data_dir = data_dir;
        settings.apply_env(env);
        log::info!(
            "Settings: {} layout, {:?} variant, data in {}",
            settings.layout.as_str(),
            settings.variant,
            settings.data_dir.display()
        );
        settings
    }

    fn read_file(path: &Path) -> Option<Self> {
        let json = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                Some(settings)
            }
            Err(e) => {
                log::warn!("Ignoring unreadable {}: {}", path.display(), e);
                None
            }
        }
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(flag) = env(ENV_MOBILE) {
            let on = !matches!(flag.trim().to_lowercase().as_str(), "" | "0" | "false");
            self.layout = if on { Layout::Mobile } else { Layout::Desktop };
        }
        if let Some(v) = env(ENV_VARIANT) {
            match Variant::from_str(&v) {
                Some(variant) => self.variant = variant,
                None => log::warn!("Unknown {ENV_VARIANT}={v:?}, keeping {:?}", self.variant),
            }
        }
        if let Some(seed) = env(ENV_SEED) {
            match seed.trim().parse() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => log::warn!("Ignoring non-numeric {ENV_SEED}={seed:?}"),
            }
        }
    }

    /// Path of the persisted best score
    pub fn best_score_path(&self) -> PathBuf {
        self.data_dir.join(BEST_SCORE_FILE)
    }
}
