use std::time::Duration;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Which rule variant the game runs under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ruleset {
    /// Single-segment start, unbounded field, self-collision ends the process
    Classic,
    /// Three-segment start, walled field, any collision resets the game
    Arena,
}

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rule variant
    pub ruleset: Ruleset,
    /// Width of the play field in pixels
    pub field_width: i32,
    /// Height of the play field in pixels
    pub field_height: i32,
    /// Edge length of one grid cell in pixels
    pub cell_size: i32,
    /// Initial length of the snake in segments
    pub initial_length: usize,
    /// Time between movement ticks
    pub tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::arena()
    }
}

impl GameConfig {
    /// Classic rules: one segment at the origin, no walls, death is final
    pub fn classic() -> Self {
        Self {
            ruleset: Ruleset::Classic,
            initial_length: 1,
            ..Self::arena()
        }
    }

    /// Arena rules: three segments at the center, walls, crashes respawn
    pub fn arena() -> Self {
        Self {
            ruleset: Ruleset::Arena,
            field_width: 800,
            field_height: 600,
            cell_size: 20,
            initial_length: 3,
            tick_interval: Duration::from_millis(75),
        }
    }

    /// Override the field dimensions, keeping everything else
    pub fn with_field(self, width: i32, height: i32) -> Self {
        Self {
            field_width: width,
            field_height: height,
            ..self
        }
    }

    /// Check that the field is usable before the game starts
    pub fn validate(&self) -> Result<()> {
        if self.cell_size <= 0 {
            bail!("cell size must be positive, got {}", self.cell_size);
        }
        if self.field_width <= 0 || self.field_height <= 0 {
            bail!(
                "field dimensions must be positive, got {}x{}",
                self.field_width,
                self.field_height
            );
        }
        if self.field_width % self.cell_size != 0 || self.field_height % self.cell_size != 0 {
            bail!(
                "field dimensions {}x{} must be multiples of the cell size {}",
                self.field_width,
                self.field_height,
                self.cell_size
            );
        }
        if self.initial_length == 0 {
            bail!("the snake needs at least one segment");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_config() {
        let config = GameConfig::arena();
        assert_eq!(config.ruleset, Ruleset::Arena);
        assert_eq!(config.field_width, 800);
        assert_eq!(config.field_height, 600);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.initial_length, 3);
        assert_eq!(config.tick_interval, Duration::from_millis(75));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_classic_config() {
        let config = GameConfig::classic();
        assert_eq!(config.ruleset, Ruleset::Classic);
        assert_eq!(config.initial_length, 1);
        assert_eq!(config.cell_size, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_is_arena() {
        assert_eq!(GameConfig::default().ruleset, Ruleset::Arena);
    }

    #[test]
    fn test_with_field() {
        let config = GameConfig::arena().with_field(400, 200);
        assert_eq!(config.field_width, 400);
        assert_eq!(config.field_height, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_misaligned_field() {
        let config = GameConfig::arena().with_field(810, 600);
        assert!(config.validate().is_err());

        let config = GameConfig::arena().with_field(800, 590);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_field() {
        let config = GameConfig::arena().with_field(0, 600);
        assert!(config.validate().is_err());

        let config = GameConfig::arena().with_field(800, -600);
        assert!(config.validate().is_err());
    }
}
