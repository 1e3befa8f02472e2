//! Simulation core
//!
//! Pure state manipulation. Rendering and frame pacing live in `driver`.

pub mod engine;
pub mod grid;
pub mod history;
pub mod neighbors;
pub mod oscillation;
pub mod rule;
pub mod stats;

pub use engine::{Engine, Oscillation, Snapshot};
pub use grid::{Cell, Grid};
pub use history::HistoryBuffer;
pub use neighbors::count_live_neighbors;
pub use oscillation::detect;
pub use rule::next_state;
pub use stats::PopulationStats;
