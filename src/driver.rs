//! Front ends that tick the engine and show its state

use crate::config::LifeConfig;
use crate::error::Result;
use crate::render::{frame_text, stats_lines, stats_text};
use crate::sim::{Engine, Snapshot};
use crate::terminal::{colors, Terminal};
use crossterm::event::{KeyCode, KeyModifiers};
use std::io::Write;
use tracing::info;

const KEY_HINT: &str = "q quit  space pause  n step  1-9 speed";

/// Runtime state for interactive controls
pub struct DriverState {
    pub speed: f32, // Seconds per frame
    pub paused: bool,
    pub step_once: bool,
}

impl DriverState {
    pub fn new(initial_speed: f32) -> Self {
        Self {
            speed: initial_speed,
            paused: false,
            step_once: false,
        }
    }

    /// Handle keypress, returns true if should quit
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('n') if self.paused => self.step_once = true,
            // Number keys: change speed (1=fastest, 9=slowest, 0=very slow)
            KeyCode::Char(c) => {
                if let Some(n) = c.to_digit(10) {
                    self.speed = match n {
                        0 => 0.5,
                        1 => 0.01,
                        2 => 0.02,
                        3 => 0.03,
                        4 => 0.05,
                        5 => 0.075,
                        6 => 0.1,
                        7 => 0.15,
                        8 => 0.2,
                        _ => 0.3,
                    };
                }
            }
            _ => {}
        }
        false
    }
}

/// Interactive alternate-screen run. Ends on extinction or when the user quits.
pub fn run_interactive(config: &LifeConfig) -> Result<Snapshot> {
    let mut engine = Engine::from_config(config)?;
    let mut state = DriverState::new(config.time_step);
    let mut term = Terminal::new()?;
    term.clear_screen()?;

    loop {
        term.refresh_size()?;
        draw(&mut term, &engine, config.draw_char, &state);
        term.present()?;

        if engine.is_extinct() {
            info!(generation = engine.generation(), "Population died out");
            // Keep the last frame up until a key arrives.
            while term.wait_key(100)?.is_none() {}
            break;
        }

        if let Some((code, mods)) = term.check_key()? {
            if state.handle_key(code, mods) {
                break;
            }
        }

        if state.paused && !state.step_once {
            term.sleep(0.05);
            continue;
        }
        state.step_once = false;

        term.sleep(state.speed);
        engine.step()?;
    }

    Ok(engine.snapshot())
}

fn draw(term: &mut Terminal, engine: &Engine, draw_char: char, state: &DriverState) {
    let grid = engine.grid();
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    let snapshot = engine.snapshot();
    term.clear();

    for y in -1..=h {
        term.set(0, y + 1, '|', Some(colors::BORDER), false);
        term.set(w + 1, y + 1, '|', Some(colors::BORDER), false);
        if y == -1 || y == h {
            for x in 0..w {
                term.set(x + 1, y + 1, '-', Some(colors::BORDER), false);
            }
        }
    }
    for (x, y) in grid.live_cells() {
        term.set(x as i32 + 1, y as i32 + 1, draw_char, Some(colors::ALIVE), true);
    }

    let top = h + 3;
    let stats_color = if engine.is_extinct() {
        colors::EXTINCT
    } else if snapshot.oscillation.is_detected() {
        colors::LOCKED
    } else {
        colors::STATS
    };
    for (i, line) in stats_lines(&snapshot).iter().enumerate() {
        term.set_str(0, top + i as i32, line, Some(stats_color), i == 0);
    }

    let hint = if engine.is_extinct() {
        "extinct - press any key"
    } else if state.paused {
        "paused - space resume  n step  q quit"
    } else {
        KEY_HINT
    };
    term.set_str(0, top + 6, hint, Some(colors::HINT), false);
}

/// How `run_print` writes each generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrintFormat {
    /// Framed board followed by the statistics block
    Text,
    /// One JSON snapshot per line
    Json,
}

/// Headless run writing every generation to `out`.
///
/// Stops on extinction or after `config.max_generations` steps.
pub fn run_print<W: Write>(config: &LifeConfig, format: PrintFormat, out: &mut W) -> Result<Snapshot> {
    let mut engine = Engine::from_config(config)?;
    run_engine_print(&mut engine, config, format, out)
}

/// Same as `run_print` for an engine that is already built
pub fn run_engine_print<W: Write>(
    engine: &mut Engine,
    config: &LifeConfig,
    format: PrintFormat,
    out: &mut W,
) -> Result<Snapshot> {
    let under_cap = |engine: &Engine| config.max_generations.map_or(true, |max| engine.ticks() < max);

    while !engine.is_extinct() && under_cap(engine) {
        if format == PrintFormat::Text {
            out.write_all(frame_text(engine.grid(), config.draw_char).as_bytes())?;
        }
        engine.step()?;
        write_snapshot(out, &engine.snapshot(), format)?;
    }

    let snapshot = engine.snapshot();
    if format == PrintFormat::Text {
        out.write_all(frame_text(engine.grid(), config.draw_char).as_bytes())?;
        out.write_all(stats_text(&snapshot).as_bytes())?;
    }
    out.flush()?;

    if engine.is_extinct() {
        info!(generation = snapshot.generation, ticks = snapshot.ticks, "Population died out");
    }
    Ok(snapshot)
}

fn write_snapshot<W: Write>(out: &mut W, snapshot: &Snapshot, format: PrintFormat) -> Result<()> {
    match format {
        PrintFormat::Text => out.write_all(stats_text(snapshot).as_bytes())?,
        PrintFormat::Json => {
            serde_json::to_writer(&mut *out, snapshot).map_err(std::io::Error::from)?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Grid, Oscillation};

    #[test]
    fn speed_presets_and_quit() {
        let mut state = DriverState::new(0.1);
        assert!(!state.handle_key(KeyCode::Char('1'), KeyModifiers::NONE));
        assert!((state.speed - 0.01).abs() < f32::EPSILON);
        assert!(!state.handle_key(KeyCode::Char('9'), KeyModifiers::NONE));
        assert!((state.speed - 0.3).abs() < f32::EPSILON);
        assert!(state.handle_key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(state.handle_key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(state.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
    }

    #[test]
    fn single_step_only_while_paused() {
        let mut state = DriverState::new(0.1);
        state.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert!(!state.step_once);
        state.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert!(state.paused);
        state.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert!(state.step_once);
    }

    #[test]
    fn all_dead_board_prints_once_and_stops() {
        let config = LifeConfig { width: 4, height: 3, density: 0.0, seed: Some(1), ..LifeConfig::default() };
        let mut out = Vec::new();
        let snapshot = run_print(&config, PrintFormat::Text, &mut out).unwrap();
        assert_eq!(snapshot.generation, 1);
        assert_eq!(snapshot.ticks, 0);
        assert_eq!(snapshot.stats.alive, 0);
        assert_eq!(snapshot.stats.dead, 12);
        assert_eq!(snapshot.stats.delta_from_previous, 0);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("|----|\n|    |\n"));
        assert!(text.contains("Stats: Generation      1"));
    }

    #[test]
    fn cap_stops_an_oscillator() {
        let grid = Grid::with_live_cells(5, 5, [(2, 1), (2, 2), (2, 3)]).unwrap();
        let mut engine = Engine::new(grid, 4).unwrap();
        let config = LifeConfig { max_generations: Some(6), ..LifeConfig::default() };
        let mut out = Vec::new();
        let snapshot = run_engine_print(&mut engine, &config, PrintFormat::Json, &mut out).unwrap();
        assert_eq!(snapshot.ticks, 6);
        assert_eq!(snapshot.oscillation, Oscillation::Detected { period: 2 });

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        let last: serde_json::Value = serde_json::from_str(lines[5]).unwrap();
        assert_eq!(last["oscillation"]["period"], 2);
        assert_eq!(last["generation"], 2);
    }
}
