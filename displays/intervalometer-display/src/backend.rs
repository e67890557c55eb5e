//! Display backend trait
//!
//! Defines the interface the core uses to render onto a character panel.

/// Number of character columns on the panel
pub const DISPLAY_COLS: u8 = 16;

/// Number of character rows on the panel
pub const DISPLAY_ROWS: u8 = 2;

/// Character display primitives
///
/// Text is written at the cursor and the cursor advances one column per
/// character. Output past the last column is dropped; there is no wrap.
pub trait TextDisplay {
    /// Blank the whole panel and home the cursor
    fn clear(&mut self);

    /// Move the cursor
    ///
    /// - `col`: Column (0-15)
    /// - `row`: Row (0-1)
    fn set_cursor(&mut self, col: u8, row: u8);

    /// Print ASCII text at the cursor
    fn print(&mut self, text: &str);

    /// Print text at a position
    fn print_at(&mut self, col: u8, row: u8, text: &str) {
        self.set_cursor(col, row);
        self.print(text);
    }

    /// Print text so that its last character lands in the last column
    fn print_right(&mut self, row: u8, text: &str) {
        let len = text.len().min(DISPLAY_COLS as usize) as u8;
        self.print_at(DISPLAY_COLS - len, row, text);
    }
}
