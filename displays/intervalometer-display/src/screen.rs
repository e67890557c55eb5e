//! Screen buffer types
//!
//! Provides a character buffer for the 16x2 panel. Board code can render
//! into a `Screen` and push dirty frames to the real panel, and tests use it
//! to inspect exactly what the menu drew.

use crate::backend::{TextDisplay, DISPLAY_COLS, DISPLAY_ROWS};

const COLS: usize = DISPLAY_COLS as usize;
const ROWS: usize = DISPLAY_ROWS as usize;

/// Character buffer for a text-mode panel
#[derive(Clone)]
pub struct Screen {
    /// Current content, space-filled
    cells: [[u8; COLS]; ROWS],
    /// Cursor position (col, row)
    cursor: (u8, u8),
    /// Whether the content changed since the last `mark_clean`
    dirty: bool,
    /// Number of `clear` calls
    clears: u32,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new blank screen
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; COLS]; ROWS],
            cursor: (0, 0),
            dirty: true,
            clears: 0,
        }
    }

    /// Get the content of a row, trailing spaces included
    pub fn line(&self, row: usize) -> Option<&str> {
        self.cells
            .get(row)
            .and_then(|cells| core::str::from_utf8(cells).ok())
    }

    /// Get the content of a row with surrounding blanks trimmed
    pub fn text(&self, row: usize) -> &str {
        self.line(row).map(str::trim).unwrap_or("")
    }

    /// Get the cursor position as (col, row)
    pub fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    /// Number of times the screen was cleared
    pub fn clear_count(&self) -> u32 {
        self.clears
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after pushing it to the panel)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl TextDisplay for Screen {
    fn clear(&mut self) {
        self.cells = [[b' '; COLS]; ROWS];
        self.cursor = (0, 0);
        self.dirty = true;
        self.clears = self.clears.wrapping_add(1);
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.cursor = (col, row);
    }

    fn print(&mut self, text: &str) {
        let (mut col, row) = self.cursor;
        let Some(cells) = self.cells.get_mut(row as usize) else {
            return;
        };

        for byte in text.bytes() {
            // Non-ASCII has no glyph on the panel
            let byte = if byte.is_ascii() { byte } else { b'?' };
            if let Some(cell) = cells.get_mut(col as usize) {
                *cell = byte;
            }
            col = col.saturating_add(1);
        }

        self.cursor = (col, row);
        self.dirty = true;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for row in 0..ROWS {
            if row > 0 {
                defmt::write!(f, " | ");
            }
            defmt::write!(f, "{}", self.line(row).unwrap_or(""));
        }
        defmt::write!(f, "]");
    }
}
