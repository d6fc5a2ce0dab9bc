//! Console: the startup-owned context tying buffer, sink and formatter.
//!
//! A [`Console`] is the surface a boot sequence talks to: it owns the
//! scroll buffer, the device grid handle and a fixed formatter scratch,
//! and keeps the device in step with the buffer after every logical
//! write. There is no ambient global state; the context is constructed
//! once and passed by reference.

use crate::buffer::{Cell, Color, ScrollBuffer};
use crate::fmt::{format_into, Arg};
use crate::sink::{self, DeviceGrid};

/// Capacity of the formatter scratch: one `printf` call produces at most
/// this many bytes.
pub const PRINTF_CAPACITY: usize = 256;

/// A scroll buffer, a device grid and a formatter scratch, driven as one
/// unit.
pub struct Console<'a, G: DeviceGrid> {
    term: ScrollBuffer<'a>,
    grid: G,
    scratch: [u8; PRINTF_CAPACITY],
}

impl<'a, G: DeviceGrid> Console<'a, G> {
    /// Build a console over `arena` with `rows` ring rows, taking the
    /// column count and window height from the grid's dimensions. The
    /// device is cleared so stale hardware contents never show through.
    ///
    /// # Panics
    /// Panics if `arena.len() != rows * grid.columns()` or
    /// `rows < grid.rows()`.
    pub fn new(arena: &'a mut [Cell], rows: usize, grid: G) -> Self {
        let columns = grid.columns();
        let window_height = grid.rows();
        let term = ScrollBuffer::new(arena, rows, columns, window_height);
        let mut console = Self {
            term,
            grid,
            scratch: [0; PRINTF_CAPACITY],
        };
        sink::clear(&mut console.grid);
        console
    }

    /// Set the attribute used for future writes.
    pub fn set_color(&mut self, fg: Color, bg: Color) {
        self.term.set_color(fg, bg);
    }

    /// Write one byte without refreshing the device. Callers composing
    /// single-byte writes call [`refresh`](Self::refresh) when done.
    pub fn put_char(&mut self, byte: u8) {
        self.term.put_char(byte);
    }

    /// Write a byte slice, then refresh the device.
    pub fn write(&mut self, bytes: &[u8]) {
        self.term.write(bytes);
        self.refresh();
    }

    /// Write a string slice, then refresh the device.
    pub fn put_str(&mut self, s: &str) {
        self.term.put_str(s);
        self.refresh();
    }

    /// Format into the fixed scratch, feed the result through the
    /// buffer, then refresh the device.
    ///
    /// Output longer than [`PRINTF_CAPACITY`] is truncated, per the
    /// formatter's contract.
    pub fn printf(&mut self, fmt: &str, args: &[Arg]) {
        // The formatter expects a zero-filled buffer.
        self.scratch.fill(0);
        let written = format_into(&mut self.scratch, fmt, args);
        self.term.write(&self.scratch[..written]);
        self.refresh();
    }

    /// Zero-fill the whole ring, then refresh the device. Cursor and
    /// window state stay where they were.
    pub fn clear(&mut self) {
        self.term.clear();
        self.refresh();
    }

    /// Copy the buffer's visible window to the device grid.
    pub fn refresh(&mut self) {
        sink::refresh(&self.term, &mut self.grid);
    }

    /// The underlying scroll buffer.
    pub fn buffer(&self) -> &ScrollBuffer<'a> {
        &self.term
    }

    /// The device grid handle.
    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Mutable access to the device grid handle.
    pub fn grid_mut(&mut self) -> &mut G {
        &mut self.grid
    }
}
