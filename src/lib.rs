//! # Palimpsest
//!
//! A circular scrollback console for memory-mapped text-mode displays.
//!
//! Palimpsest renders a stream of characters onto a fixed-size character
//! display, with line wrapping, automatic scrolling over a
//! larger-than-visible backing ring, and a bounded formatter to feed it.
//! Nothing on the write path allocates: all storage is fixed-capacity,
//! sized at initialization.
//!
//! ## Core Concepts
//!
//! - **Packed cells**: glyph + color attribute in one 16-bit device word
//! - **Backing ring**: a character grid taller than the display, indexed
//!   circularly by row
//! - **Window**: the contiguous subset of ring rows a sink copies to the
//!   device; it grows until full, then scrolls
//! - **Bounded formatting**: best-effort, truncating, never failing
//!
//! ## Example
//!
//! ```rust,ignore
//! use palimpsest::{Arg, Cell, Console, SliceGrid};
//!
//! // A 25x80 device region and a 50-row backing ring.
//! let mut device = [Cell::NULL; 25 * 80];
//! let mut arena = [Cell::NULL; 50 * 80];
//!
//! let grid = SliceGrid::new(&mut device, 80, 25);
//! let mut console = Console::new(&mut arena, 50, grid);
//! console.printf("booting, %d modules\n", &[Arg::from(3u32)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod console;
pub mod fmt;
pub mod sink;
pub mod terminal;

// Re-exports for convenience
pub use buffer::{Attr, Cell, Color, ScrollBuffer};
pub use console::{Console, PRINTF_CAPACITY};
pub use fmt::{format_into, Arg};
pub use sink::{clear, fill, refresh, DeviceGrid, MmioGrid, SliceGrid};
pub use terminal::{present, OutputBuffer, TermSession};
