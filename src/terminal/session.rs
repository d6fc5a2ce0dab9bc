//! Terminal session guard: raw mode + alternate screen, restored on drop.

use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;

/// An RAII guard for presenting grids on the developer's terminal.
///
/// Construction switches the terminal to raw mode on the alternate
/// screen with the cursor hidden; dropping the guard restores the
/// previous state even on early return.
pub struct TermSession {
    _private: (),
}

impl TermSession {
    /// Enter raw mode on the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal refuses either switch.
    pub fn begin() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { _private: () })
    }
}

impl Drop for TermSession {
    fn drop(&mut self) {
        // Restore terminal state; nothing useful to do on failure here.
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
