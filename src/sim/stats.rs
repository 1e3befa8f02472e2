use super::grid::Grid;
use serde::Serialize;

/// Population counts for one generation
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PopulationStats {
    pub alive: usize,
    pub dead: usize,
    pub total: usize,
    pub alive_pct: f64,
    pub dead_pct: f64,
    /// Alive now minus alive in the previous generation
    pub delta_from_previous: i64,
}

impl PopulationStats {
    pub fn measure(current: &Grid, previous: &Grid) -> Self {
        let total = current.size();
        let alive = current.count_live();
        let dead = total - alive;
        let before = previous.count_live();
        Self {
            alive,
            dead,
            total,
            alive_pct: percent(alive, total),
            dead_pct: percent(dead, total),
            delta_from_previous: alive as i64 - before as i64,
        }
    }
}

#[inline]
fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_percentages() {
        let current = Grid::with_live_cells(4, 4, [(0, 0), (1, 0), (2, 0), (3, 0)]).unwrap();
        let previous = Grid::with_live_cells(4, 4, [(0, 0), (1, 1)]).unwrap();
        let stats = PopulationStats::measure(&current, &previous);
        assert_eq!(stats.alive, 4);
        assert_eq!(stats.dead, 12);
        assert_eq!(stats.total, 16);
        assert!((stats.alive_pct - 25.0).abs() < 1e-9);
        assert!((stats.dead_pct - 75.0).abs() < 1e-9);
        assert_eq!(stats.delta_from_previous, 2);
    }

    #[test]
    fn shrinking_population_has_negative_delta() {
        let current = Grid::new(3, 3).unwrap();
        let previous = Grid::with_live_cells(3, 3, [(0, 0), (2, 2), (1, 1)]).unwrap();
        assert_eq!(PopulationStats::measure(&current, &previous).delta_from_previous, -3);
    }
}
