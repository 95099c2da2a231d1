//! Game modes and the controller that cycles through them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which rule set decides a plant's verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Environment,
    Neighbors,
    Combined,
}

impl GameMode {
    /// Next mode in the fixed cycle Environment → Neighbors → Combined.
    pub fn next(self) -> Self {
        match self {
            GameMode::Environment => GameMode::Neighbors,
            GameMode::Neighbors => GameMode::Combined,
            GameMode::Combined => GameMode::Environment,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::Environment => "Environment",
            GameMode::Neighbors => "Neighbors",
            GameMode::Combined => "Combined (Environment & Neighbors)",
        }
    }

    pub fn checks_environment(self) -> bool {
        matches!(self, GameMode::Environment | GameMode::Combined)
    }

    pub fn checks_neighbors(self) -> bool {
        matches!(self, GameMode::Neighbors | GameMode::Combined)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "environment" | "env" => Ok(GameMode::Environment),
            "neighbors" | "neighbours" => Ok(GameMode::Neighbors),
            "combined" | "both" => Ok(GameMode::Combined),
            other => Err(format!(
                "unknown mode '{}' (expected environment, neighbors or combined)",
                other
            )),
        }
    }
}

/// Holds the current mode. The mode changes only through [`cycle`](Self::cycle).
#[derive(Debug, Clone, Default)]
pub struct ModeController {
    current: GameMode,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: GameMode) -> Self {
        Self { current: mode }
    }

    pub fn current(&self) -> GameMode {
        self.current
    }

    /// Advance to the next mode and return it. Callers re-evaluate against
    /// the returned mode.
    pub fn cycle(&mut self) -> GameMode {
        self.current = self.current.next();
        self.current
    }

    pub fn label(&self) -> &'static str {
        self.current.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_cycles_return_to_start() {
        let mut controller = ModeController::new();
        assert_eq!(controller.cycle(), GameMode::Neighbors);
        assert_eq!(controller.cycle(), GameMode::Combined);
        assert_eq!(controller.cycle(), GameMode::Environment);
    }

    #[test]
    fn labels() {
        let controller = ModeController::with_mode(GameMode::Combined);
        assert_eq!(controller.label(), "Combined (Environment & Neighbors)");
        assert_eq!(GameMode::Neighbors.to_string(), "Neighbors");
    }

    #[test]
    fn parse_modes() {
        assert_eq!("Combined".parse::<GameMode>(), Ok(GameMode::Combined));
        assert_eq!("env".parse::<GameMode>(), Ok(GameMode::Environment));
        assert!("sideways".parse::<GameMode>().is_err());
    }

    #[test]
    fn sub_checks_by_mode() {
        assert!(GameMode::Environment.checks_environment());
        assert!(!GameMode::Environment.checks_neighbors());
        assert!(GameMode::Combined.checks_environment());
        assert!(GameMode::Combined.checks_neighbors());
    }
}
