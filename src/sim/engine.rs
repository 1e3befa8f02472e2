//! Generation stepping and oscillation tracking

use super::grid::Grid;
use super::history::HistoryBuffer;
use super::neighbors::count_live_neighbors;
use super::oscillation::detect;
use super::rule::next_state;
use super::stats::PopulationStats;
use crate::config::LifeConfig;
use crate::error::Result;
use serde::Serialize;
use tracing::{debug, info};

/// Whether the board has been seen to repeat itself
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Oscillation {
    #[default]
    NotDetected,
    Detected { period: usize },
}

impl Oscillation {
    pub fn period(self) -> Option<usize> {
        match self {
            Oscillation::NotDetected => None,
            Oscillation::Detected { period } => Some(period),
        }
    }

    pub fn is_detected(self) -> bool {
        self.period().is_some()
    }
}

/// Everything a front end shows for one tick, minus the cells
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub generation: u64,
    pub ticks: u64,
    pub oscillation: Oscillation,
    pub stats: PopulationStats,
}

/// Live grid plus its history.
///
/// The generation counter starts at 1 and stops advancing on the step where
/// a repeat is first found. Cells keep evolving after that.
#[derive(Clone, Debug)]
pub struct Engine {
    grid: Grid,
    history: HistoryBuffer,
    generation: u64,
    ticks: u64,
    oscillation: Oscillation,
}

impl Engine {
    /// Start from `grid`, with every history slot holding a copy of it
    pub fn new(grid: Grid, history_depth: usize) -> Result<Self> {
        let history = HistoryBuffer::new(history_depth, &grid)?;
        Ok(Self {
            grid,
            history,
            generation: 1,
            ticks: 0,
            oscillation: Oscillation::NotDetected,
        })
    }

    /// Validate `config` and seed the first generation from it
    pub fn from_config(config: &LifeConfig) -> Result<Self> {
        config.validate()?;
        let grid = config.initial_grid()?;
        let engine = Self::new(grid, config.history_depth)?;
        info!(
            width = config.width,
            height = config.height,
            history_depth = config.history_depth,
            alive = engine.grid.count_live(),
            "Seeded simulation",
        );
        Ok(engine)
    }

    /// Advance every cell by one generation
    pub fn step(&mut self) -> Result<()> {
        self.history.shift_and_push(&self.grid)?;

        let prior = self.history.newest();
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let neighbors = count_live_neighbors(prior, x, y)?;
                let cell = self.grid.get(x, y)?;
                self.grid.set(x, y, next_state(cell, neighbors))?;
            }
        }
        self.ticks += 1;

        if !self.oscillation.is_detected() {
            match detect(&self.grid, &self.history)? {
                Some(period) => {
                    self.oscillation = Oscillation::Detected { period };
                    info!(generation = self.generation, period, "Oscillation detected");
                }
                None => self.generation += 1,
            }
        }

        debug!(
            generation = self.generation,
            tick = self.ticks,
            alive = self.grid.count_live(),
            "Evolved generation",
        );
        Ok(())
    }

    pub fn population_stats(&self) -> PopulationStats {
        PopulationStats::measure(&self.grid, self.history.newest())
    }

    /// No live cells left; the run is over
    pub fn is_extinct(&self) -> bool {
        self.grid.count_live() == 0
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            generation: self.generation,
            ticks: self.ticks,
            oscillation: self.oscillation,
            stats: self.population_stats(),
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of `step()` calls so far, including those after a lock
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[inline]
    pub fn oscillation(&self) -> Oscillation {
        self.oscillation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Cell;

    fn block(w: usize, h: usize) -> Grid {
        Grid::with_live_cells(w, h, [(1, 1), (2, 1), (1, 2), (2, 2)]).unwrap()
    }

    #[test]
    fn fresh_engine_state() {
        let engine = Engine::new(block(6, 6), 4).unwrap();
        assert_eq!(engine.generation(), 1);
        assert_eq!(engine.ticks(), 0);
        assert_eq!(engine.oscillation(), Oscillation::NotDetected);
        assert_eq!(engine.history().len(), 4);
        assert_eq!(engine.population_stats().delta_from_previous, 0);
    }

    #[test]
    fn still_life_locks_with_period_one() {
        let mut engine = Engine::new(block(6, 6), 4).unwrap();
        engine.step().unwrap();
        assert_eq!(engine.grid(), &block(6, 6));
        assert_eq!(engine.oscillation(), Oscillation::Detected { period: 1 });
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn lone_cell_dies() {
        let grid = Grid::with_live_cells(5, 5, [(2, 2)]).unwrap();
        let mut engine = Engine::new(grid, 3).unwrap();
        engine.step().unwrap();
        assert_eq!(engine.grid().get(2, 2).unwrap(), Cell::Dead);
        assert!(engine.is_extinct());
        assert_eq!(engine.population_stats().delta_from_previous, -1);
    }

    #[test]
    fn generation_advances_while_running() {
        // Glider on a big torus does not repeat within a short window.
        let glider = Grid::with_live_cells(16, 16, [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]).unwrap();
        let mut engine = Engine::new(glider, 3).unwrap();
        for expected in 2..=6 {
            engine.step().unwrap();
            assert_eq!(engine.generation(), expected);
            assert!(!engine.oscillation().is_detected());
        }
        assert_eq!(engine.ticks(), 5);
    }

    #[test]
    fn snapshot_serializes_oscillation_tag() {
        let mut engine = Engine::new(block(6, 6), 4).unwrap();
        engine.step().unwrap();
        let json = serde_json::to_value(engine.snapshot()).unwrap();
        assert_eq!(json["oscillation"]["status"], "detected");
        assert_eq!(json["oscillation"]["period"], 1);
        assert_eq!(json["stats"]["alive"], 4);
    }
}
