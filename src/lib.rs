//! Conway's Game of Life on a fixed-size torus.
//!
//! [`sim`] holds the engine: grid, neighbor counting, the transition rule,
//! a fixed-depth history and the oscillation detector. [`driver`] ticks an
//! engine from the terminal or as a plain-text stream.

pub mod config;
pub mod driver;
pub mod error;
pub mod render;
pub mod settings;
pub mod sim;
pub mod terminal;

pub use config::LifeConfig;
pub use error::{LifeError, Result};
pub use sim::{Cell, Engine, Grid, Oscillation, PopulationStats, Snapshot};
