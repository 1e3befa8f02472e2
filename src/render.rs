//! Plain-text rendering of the board and its statistics

use crate::sim::{Grid, Oscillation, Snapshot};

const RULE: &str = "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~";

/// Board framed by `|` on the sides and `-` above and below
pub fn frame_text(grid: &Grid, draw_char: char) -> String {
    let mut out = String::with_capacity((grid.width() + 3) * (grid.height() + 2));
    let border: String = "-".repeat(grid.width());

    out.push('|');
    out.push_str(&border);
    out.push_str("|\n");
    for row in grid.rows() {
        out.push('|');
        out.extend(row.iter().map(|c| if c.is_alive() { draw_char } else { ' ' }));
        out.push_str("|\n");
    }
    out.push('|');
    out.push_str(&border);
    out.push_str("|\n");
    out
}

/// Statistic lines without the surrounding rules or spacing
pub fn stats_lines(snapshot: &Snapshot) -> [String; 5] {
    let s = &snapshot.stats;
    let (osc_flag, period) = match snapshot.oscillation {
        Oscillation::NotDetected => ("NO", 0),
        Oscillation::Detected { period } => ("YES", period),
    };
    [
        format!("Stats: Generation {:6}", snapshot.generation),
        format!("Number of Living Cells:       {:05} / {:05} === {:5.2}%", s.alive, s.total, s.alive_pct),
        format!("Number of Dead Cells:         {:05} / {:05} === {:5.2}%", s.dead, s.total, s.dead_pct),
        format!("Change to last Generation:     {:4} cells", s.delta_from_previous),
        format!("Stable state / Oscillating? : {} ({} steps)", osc_flag, period),
    ]
}

/// Full statistics block as printed below each frame
pub fn stats_text(snapshot: &Snapshot) -> String {
    let [generation, living, dead, change, osc] = stats_lines(snapshot);
    format!(
        "\n\n{rule}\n\n{generation}\n\n{living}\n{dead}\n{change}\n{osc}\n\n\n{rule}\n",
        rule = RULE,
    )
}
