//! Host terminal presentation: preview a device grid on a developer
//! terminal.
//!
//! None of this is needed on real hardware — the device grid there *is*
//! the display. On a host, [`present`] renders a [`SliceGrid`]-backed
//! region with the 16-color ANSI palette so console output can be
//! inspected without a machine to boot.

mod output;
mod session;

pub use output::OutputBuffer;
pub use session::TermSession;

use crate::buffer::Attr;
use crate::sink::{DeviceGrid, SliceGrid};
use std::io::{self, Write};

/// Render the whole grid into `out` and flush it to `writer` in one
/// syscall.
///
/// Attribute changes are emitted only when a cell's attribute differs
/// from its predecessor's, so a grid in a single color costs one SGR
/// sequence per frame.
///
/// # Errors
///
/// Returns an error if the flush to `writer` fails.
pub fn present<W: Write>(
    grid: &SliceGrid<'_>,
    out: &mut OutputBuffer,
    writer: &mut W,
) -> io::Result<()> {
    out.clear();
    out.cursor_hide();
    let mut last_attr: Option<Attr> = None;
    for y in 0..grid.rows() {
        #[allow(clippy::cast_possible_truncation)]
        out.cursor_move(0, y as u16);
        for x in 0..grid.columns() {
            let cell = grid.get(x, y);
            if last_attr != Some(cell.attr()) {
                out.set_attr(cell.attr());
                last_attr = Some(cell.attr());
            }
            out.push_cell(cell);
        }
    }
    out.reset_attrs();
    out.flush_to(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{Cell, Color};

    #[test]
    fn test_present_emits_attr_runs() {
        let mut region = vec![Cell::BLANK; 4 * 2];
        region[0] = Cell::new(b'a', Attr::new(Color::White, Color::Black));
        region[1] = Cell::new(b'b', Attr::new(Color::White, Color::Black));
        let grid = SliceGrid::new(&mut region, 4, 2);

        let mut out = OutputBuffer::new();
        let mut sink = Vec::new();
        present(&grid, &mut out, &mut sink).unwrap();

        let text = String::from_utf8(sink).unwrap();
        // One SGR for the white run, one for the default-attr remainder.
        assert_eq!(text.matches("\x1b[97;40m").count(), 1);
        assert_eq!(text.matches("\x1b[37;40m").count(), 1);
        assert!(text.contains("ab"));
        assert!(text.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_present_is_repeatable() {
        let mut region = vec![Cell::BLANK; 4 * 2];
        let grid = SliceGrid::new(&mut region, 4, 2);
        let mut out = OutputBuffer::new();

        let mut first = Vec::new();
        present(&grid, &mut out, &mut first).unwrap();
        let mut second = Vec::new();
        present(&grid, &mut out, &mut second).unwrap();
        assert_eq!(first, second);
    }
}
