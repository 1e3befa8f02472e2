use crate::error::{LifeError, Result};
use crate::sim::Grid;
use rand::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Configuration for a simulation run
#[derive(Clone, Debug, PartialEq)]
pub struct LifeConfig {
    pub width: usize,
    pub height: usize,
    pub history_depth: usize,
    pub seed: Option<u64>,
    pub density: f64,
    pub time_step: f32,
    pub draw_char: char,
    pub max_generations: Option<u64>,
    pub pattern: Option<PathBuf>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: 32,
            height: 32,
            history_depth: 32,
            seed: None,
            density: 0.5,     // Fair coin per cell
            time_step: 0.1,   // 100ms per frame
            draw_char: 'O',
            max_generations: None,
            pattern: None,
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LifeError::InvalidConfig("grid dimensions must be non-zero"));
        }
        if self.history_depth == 0 {
            return Err(LifeError::InvalidConfig("history depth must be non-zero"));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(LifeError::InvalidConfig("density must be between 0.0 and 1.0"));
        }
        if !(self.time_step > 0.0 && self.time_step.is_finite()) {
            return Err(LifeError::InvalidConfig("time step must be a positive number of seconds"));
        }
        Ok(())
    }

    /// The explicit seed, or the current unix time in seconds
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default()
        })
    }

    /// First generation: the pattern file if one is set, random cells otherwise
    pub fn initial_grid(&self) -> Result<Grid> {
        match &self.pattern {
            Some(path) => {
                let text = fs::read_to_string(path)?;
                Grid::from_pattern(self.width, self.height, &text)
            }
            None => {
                let mut rng = StdRng::seed_from_u64(self.resolved_seed());
                Grid::random(self.width, self.height, self.density, &mut rng)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = LifeConfig::default();
        assert_eq!((config.width, config.height, config.history_depth), (32, 32, 32));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_sizes_rejected() {
        for config in [
            LifeConfig { width: 0, ..LifeConfig::default() },
            LifeConfig { height: 0, ..LifeConfig::default() },
            LifeConfig { history_depth: 0, ..LifeConfig::default() },
        ] {
            assert!(matches!(config.validate(), Err(LifeError::InvalidConfig(_))));
        }
    }

    #[test]
    fn bad_density_and_speed_rejected() {
        assert!(LifeConfig { density: -0.1, ..LifeConfig::default() }.validate().is_err());
        assert!(LifeConfig { time_step: 0.0, ..LifeConfig::default() }.validate().is_err());
    }

    #[test]
    fn seeded_grid_is_reproducible() {
        let config = LifeConfig { seed: Some(1234), ..LifeConfig::default() };
        assert_eq!(config.initial_grid().unwrap(), config.initial_grid().unwrap());
    }

    #[test]
    fn pattern_file_overrides_random_seed() {
        let path = std::env::temp_dir().join(format!("toruslife-pattern-{}.cells", std::process::id()));
        fs::write(&path, "!blinker\n.O.\n.O.\n.O.\n").unwrap();
        let config = LifeConfig {
            width: 5,
            height: 5,
            pattern: Some(path.clone()),
            ..LifeConfig::default()
        };
        let grid = config.initial_grid().unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn missing_pattern_file_is_io_error() {
        let config = LifeConfig {
            pattern: Some(PathBuf::from("/nonexistent/toruslife/pattern.cells")),
            ..LifeConfig::default()
        };
        assert!(matches!(config.initial_grid(), Err(LifeError::Io(_))));
    }
}
