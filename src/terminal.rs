use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{poll, read, Event, KeyCode, KeyModifiers},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, stdout, Write};
use std::time::Duration;

/// Double-buffered alternate-screen terminal
pub struct Terminal {
    width: u16,
    height: u16,
    buffer: Vec<Vec<Glyph>>,
}

/// A single character slot in the back buffer
#[derive(Clone, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Option<Color>,
    pub bold: bool,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: None,
            bold: false,
        }
    }
}

impl Terminal {
    /// Switch to the alternate screen in raw mode
    pub fn new() -> io::Result<Self> {
        let (width, height) = size()?;

        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide)?;

        let buffer = vec![vec![Glyph::default(); width as usize]; height as usize];

        Ok(Self { width, height, buffer })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Pick up a changed window size; returns true if it changed
    pub fn refresh_size(&mut self) -> io::Result<bool> {
        let (width, height) = size()?;
        if (width, height) == (self.width, self.height) {
            return Ok(false);
        }
        self.width = width;
        self.height = height;
        self.buffer = vec![vec![Glyph::default(); width as usize]; height as usize];
        self.clear_screen()?;
        Ok(true)
    }

    /// Clear the back buffer
    pub fn clear(&mut self) {
        for row in &mut self.buffer {
            row.fill(Glyph::default());
        }
    }

    /// Clear the actual terminal
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(stdout(), Clear(ClearType::All))?;
        Ok(())
    }

    /// Set a character at position; anything off-screen is dropped
    pub fn set(&mut self, x: i32, y: i32, ch: char, fg: Option<Color>, bold: bool) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.buffer[y as usize][x as usize] = Glyph { ch, fg, bold };
        }
    }

    pub fn set_str(&mut self, x: i32, y: i32, s: &str, fg: Option<Color>, bold: bool) {
        for (i, ch) in s.chars().enumerate() {
            self.set(x + i as i32, y, ch, fg, bold);
        }
    }

    /// Draw the back buffer to the screen
    pub fn present(&self) -> io::Result<()> {
        let mut out = stdout();

        for (y, row) in self.buffer.iter().enumerate() {
            queue!(out, MoveTo(0, y as u16))?;

            for glyph in row {
                if glyph.bold {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }

                if let Some(color) = glyph.fg {
                    queue!(out, SetForegroundColor(color), Print(glyph.ch), ResetColor)?;
                } else {
                    queue!(out, Print(glyph.ch))?;
                }

                if glyph.bold {
                    queue!(out, SetAttribute(Attribute::Reset))?;
                }
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Check for keypress (non-blocking)
    pub fn check_key(&self) -> io::Result<Option<(KeyCode, KeyModifiers)>> {
        if poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = read()? {
                return Ok(Some((key_event.code, key_event.modifiers)));
            }
        }
        Ok(None)
    }

    /// Wait for a keypress with timeout
    pub fn wait_key(&self, timeout_ms: u64) -> io::Result<Option<KeyCode>> {
        if poll(Duration::from_millis(timeout_ms))? {
            if let Event::Key(key_event) = read()? {
                return Ok(Some(key_event.code));
            }
        }
        Ok(None)
    }

    pub fn sleep(&self, seconds: f32) {
        std::thread::sleep(Duration::from_secs_f32(seconds));
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Colors used by the interactive display
pub mod colors {
    use crossterm::style::Color;

    pub const ALIVE: Color = Color::Green;
    pub const BORDER: Color = Color::DarkGrey;
    pub const STATS: Color = Color::Grey;
    pub const LOCKED: Color = Color::Yellow;
    pub const EXTINCT: Color = Color::Red;
    pub const HINT: Color = Color::DarkGrey;
}
