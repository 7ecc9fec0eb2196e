//! Difficulty tiers and the teacher's alert policy

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;

/// Round length for the classic (tierless) game, in seconds
pub const CLASSIC_ROUND_SECS: u32 = 30;

/// Selectable difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// Immutable per-tier configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyProfile {
    /// Total round length in seconds
    pub round_secs: u32,
    /// Chance (percent) that a decision point turns into an alert
    pub alert_chance: u32,
    pub label: &'static str,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                round_secs: 30,
                alert_chance: 40,
                label: "EASY",
            },
            Difficulty::Normal => DifficultyProfile {
                round_secs: 45,
                alert_chance: 60,
                label: "NORMAL",
            },
            Difficulty::Hard => DifficultyProfile {
                round_secs: 60,
                alert_chance: 85,
                label: "HARD",
            },
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "medium" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// What happens when the teacher's waiting timer runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertPolicy {
    /// Always turn around (classic game)
    Always,
    /// Turn around with the given percent chance
    Chance(u32),
}

impl AlertPolicy {
    /// Decide whether this decision point becomes an alert
    pub fn roll(self, rng: &mut impl RandomSource) -> bool {
        match self {
            AlertPolicy::Always => true,
            AlertPolicy::Chance(percent) => rng.range_inclusive(1, 100) <= percent,
        }
    }
}

/// Parameters fixed for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub round_secs: u32,
    pub policy: AlertPolicy,
    /// Tier the round was started with, if any
    pub difficulty: Option<Difficulty>,
}

impl RoundConfig {
    pub fn classic() -> Self {
        Self {
            round_secs: CLASSIC_ROUND_SECS,
            policy: AlertPolicy::Always,
            difficulty: None,
        }
    }

    pub fn tiered(difficulty: Difficulty) -> Self {
        let profile = difficulty.profile();
        Self {
            round_secs: profile.round_secs,
            policy: AlertPolicy::Chance(profile.alert_chance),
            difficulty: Some(difficulty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedRng;

    #[test]
    fn test_chance_gate() {
        let mut rng = ScriptedRng::new([60, 61, 1, 100]);
        let policy = AlertPolicy::Chance(60);
        assert!(policy.roll(&mut rng));
        assert!(!policy.roll(&mut rng));
        assert!(!AlertPolicy::Chance(0).roll(&mut ScriptedRng::new([1])));
        assert!(policy.roll(&mut rng));
        assert!(AlertPolicy::Chance(100).roll(&mut rng));
    }

    #[test]
    fn test_always_consumes_nothing() {
        let mut rng = ScriptedRng::new([99]);
        assert!(AlertPolicy::Always.roll(&mut rng));
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn test_tier_config() {
        let config = RoundConfig::tiered(Difficulty::Hard);
        assert_eq!(config.round_secs, 60);
        assert_eq!(config.policy, AlertPolicy::Chance(85));
        assert_eq!(Difficulty::from_str("Medium"), Some(Difficulty::Normal));
        assert_eq!(Difficulty::from_str("nightmare"), None);
        assert_eq!(RoundConfig::classic().policy, AlertPolicy::Always);
    }
}
