use super::grid::Grid;
use super::history::HistoryBuffer;
use crate::error::Result;

/// Smallest period after which `current` repeats a retained generation.
///
/// Distance `a` refers to history age `a - 1`, checked for `a` in
/// `1..capacity`. `None` if nothing in that window matches.
pub fn detect(current: &Grid, history: &HistoryBuffer) -> Result<Option<usize>> {
    for period in 1..history.capacity() {
        if let Some(past) = history.get(period - 1) {
            if current.equals(past)? {
                return Ok(Some(period));
            }
        }
    }
    Ok(None)
}
