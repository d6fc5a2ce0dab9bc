//! Boot banner demo: drive a console over an in-memory device grid and
//! preview it on the host terminal.
//!
//! The 25x80 "device" here is an ordinary array; on real hardware it
//! would be the mapped display region and the presentation step would
//! not exist.

use palimpsest::{present, Arg, Cell, Color, Console, OutputBuffer, SliceGrid, TermSession};
use std::io;
use std::thread;
use std::time::Duration;

const COLUMNS: usize = 80;
const WINDOW: usize = 25;
const RING: usize = 2 * WINDOW;

fn main() -> io::Result<()> {
    let mut device = vec![Cell::NULL; WINDOW * COLUMNS];
    let mut arena = vec![Cell::NULL; RING * COLUMNS];

    let session = TermSession::begin()?;
    let grid = SliceGrid::new(&mut device, COLUMNS, WINDOW);
    let mut console = Console::new(&mut arena, RING, grid);
    let mut out = OutputBuffer::new();
    let mut stdout = io::stdout();

    console.set_color(Color::White, Color::Blue);
    console.put_str("  palimpsest  \n");
    console.set_color(Color::LightGrey, Color::Black);
    console.put_str("console up; watch the window fill, then scroll\n");
    present(console.grid(), &mut out, &mut stdout)?;
    thread::sleep(Duration::from_millis(900));

    for line in 0..60u32 {
        if line % 10 == 0 {
            console.set_color(Color::LightBrown, Color::Black);
        } else {
            console.set_color(Color::LightGrey, Color::Black);
        }
        console.printf("line %d of 60 (hex %x)\n", &[Arg::from(line), Arg::from(line)]);
        present(console.grid(), &mut out, &mut stdout)?;
        thread::sleep(Duration::from_millis(60));
    }

    console.set_color(Color::LightGreen, Color::Black);
    console.put_str("done.\n");
    present(console.grid(), &mut out, &mut stdout)?;
    thread::sleep(Duration::from_millis(1500));

    drop(session);
    Ok(())
}
