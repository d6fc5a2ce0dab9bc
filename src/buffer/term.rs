//! Scroll buffer: a circular character grid with a windowed view.
//!
//! The buffer is larger than the visible display. Rows are addressed as a
//! flat ring: writing past the last row lands back at the first,
//! overwriting whatever was there. Rows map one-to-one onto device rows —
//! the buffer holds actual screenspace (including the blank tail of an
//! LF-terminated line), not a stream of characters.
//!
//! A contiguous subset of ring rows, the *window*, is what a sink copies
//! to the device. The window is anchored by `row_shift` and starts moving
//! down once the cursor has reached its bottom row, which implements
//! scrolling.
//!
//! The cursor row is tracked twice: `row` is the absolute ring row and
//! `row_screen` is the same row relative to the window. Splitting the two
//! lets the window grow until full and only then switch to scrolling,
//! without re-deriving scroll state from modular arithmetic on a single
//! counter.

use super::cell::{Attr, Cell, Color};

/// First printable byte of the display code space.
const PRINTABLE_MIN: u8 = 0x20;
/// DEL, the one byte above `PRINTABLE_MIN` that is not printable.
const DEL: u8 = 0x7F;

/// A fixed-capacity circular grid of [`Cell`]s with cursor tracking,
/// line-feed/wrap logic and windowed scrolling.
///
/// The backing storage is a caller-supplied arena sized at construction;
/// nothing on the write path allocates. Intended as a process-lifetime
/// singleton owned by the startup sequence and passed by reference.
pub struct ScrollBuffer<'a> {
    /// Backing ring, row-major: `(row % row_n) * column_n + column`.
    cells: &'a mut [Cell],
    /// Absolute ring row of the cursor.
    row: usize,
    /// Cursor column.
    column: usize,
    /// Total ring rows.
    row_n: usize,
    /// Columns per row; must equal the device's column count.
    column_n: usize,
    /// Ring index of the first row currently visible.
    row_shift: usize,
    /// Cursor row relative to the window.
    row_screen: usize,
    /// Window height in rows; constant, equal to the device's row count.
    row_screen_n: usize,
    /// Current write attribute.
    color: Attr,
}

impl<'a> ScrollBuffer<'a> {
    /// Create a buffer over `cells`, zero-filling every cell and placing
    /// the cursor at (0, 0) with the default attribute.
    ///
    /// # Panics
    /// Panics if any dimension is zero, if `rows < window_height`, or if
    /// `cells.len() != rows * columns`.
    pub fn new(cells: &'a mut [Cell], rows: usize, columns: usize, window_height: usize) -> Self {
        assert!(rows > 0 && columns > 0, "buffer dimensions must be non-zero");
        assert!(
            window_height > 0 && window_height <= rows,
            "window height must be non-zero and fit in the ring"
        );
        assert_eq!(
            cells.len(),
            rows * columns,
            "backing storage must hold exactly rows * columns cells"
        );
        cells.fill(Cell::NULL);
        Self {
            cells,
            row: 0,
            column: 0,
            row_n: rows,
            column_n: columns,
            row_shift: 0,
            row_screen: 0,
            row_screen_n: window_height,
            color: Attr::DEFAULT,
        }
    }

    /// Total ring rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.row_n
    }

    /// Columns per row.
    #[inline]
    pub const fn columns(&self) -> usize {
        self.column_n
    }

    /// Window height in rows.
    #[inline]
    pub const fn window_height(&self) -> usize {
        self.row_screen_n
    }

    /// Cursor column.
    #[inline]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Absolute ring row of the cursor.
    #[inline]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Cursor row relative to the window.
    #[inline]
    pub const fn row_screen(&self) -> usize {
        self.row_screen
    }

    /// Ring index of the first visible row.
    #[inline]
    pub const fn row_shift(&self) -> usize {
        self.row_shift
    }

    /// Current write attribute.
    #[inline]
    pub const fn color(&self) -> Attr {
        self.color
    }

    /// Set the attribute used for future writes. Cells already written
    /// keep the attribute they were written with.
    pub fn set_color(&mut self, fg: Color, bg: Color) {
        self.color = Attr::new(fg, bg);
    }

    /// Read the cell at window-relative position (`window_row`, `column`).
    ///
    /// This is the read surface a sink copies from: window row `i` lives
    /// at ring row `(row_shift + i) % row_n`.
    ///
    /// # Panics
    /// Panics if `window_row >= window_height()` or `column >= columns()`.
    #[inline]
    pub fn visible_cell(&self, window_row: usize, column: usize) -> Cell {
        assert!(window_row < self.row_screen_n && column < self.column_n);
        self.cells[self.ring_index(window_row, column)]
    }

    /// Write one byte through the cursor state machine.
    ///
    /// `\n` performs a line feed. Other non-printable bytes (below 0x20,
    /// and DEL) are silently discarded: no cursor advance, no cell write.
    /// Printable bytes land at the cursor in the current attribute; when
    /// the write fills the last column the buffer wraps with a line feed
    /// of its own.
    pub fn put_char(&mut self, byte: u8) {
        if byte == b'\n' {
            self.line_feed();
            return;
        }
        if byte < PRINTABLE_MIN || byte == DEL {
            return;
        }
        let index = self.ring_index(self.row_screen, self.column);
        self.cells[index] = Cell::new(byte, self.color);
        self.column += 1;
        if self.column == self.column_n {
            self.line_feed();
        }
    }

    /// Write a byte slice, one [`put_char`](Self::put_char) per byte.
    pub fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.put_char(byte);
        }
    }

    /// Write a string slice byte-wise.
    pub fn put_str(&mut self, s: &str) {
        self.write(s.as_bytes());
    }

    /// Zero-fill every ring cell.
    ///
    /// Cursor and window state are deliberately left untouched; writes
    /// continue from the current position.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::NULL);
    }

    /// Advance the cursor to a fresh row: blank the destination ring row
    /// and either grow the window or scroll it.
    fn line_feed(&mut self) {
        // `row` is absolute, always advanced mod the ring size.
        self.row = (self.row + 1) % self.row_n;
        self.column = 0;

        // Blank the destination row in the *default* attribute, so stale
        // glyphs from a previous wrap-around pass cannot resurface.
        let start = self.row * self.column_n;
        self.cells[start..start + self.column_n].fill(Cell::BLANK);

        if self.row_screen < self.row_screen_n - 1 {
            // Window not yet full: grow downward, no scroll.
            self.row_screen += 1;
        } else {
            // Window full: scroll down one row. The oldest visible row
            // leaves the window but stays in the ring until a future
            // wraparound overwrites it.
            self.row_shift = (self.row_shift + 1) % self.row_n;
        }
    }

    #[inline]
    fn ring_index(&self, window_row: usize, column: usize) -> usize {
        ((self.row_shift + window_row) % self.row_n) * self.column_n + column
    }
}

impl std::fmt::Debug for ScrollBuffer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollBuffer")
            .field("rows", &self.row_n)
            .field("columns", &self.column_n)
            .field("window_height", &self.row_screen_n)
            .field("row", &self.row)
            .field("column", &self.column)
            .field("row_shift", &self.row_shift)
            .field("row_screen", &self.row_screen)
            .field("color", &self.color)
            .finish()
    }
}
