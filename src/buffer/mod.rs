//! Buffer module: Core data structures for the scrollback console.
//!
//! This module contains:
//! - [`Cell`]: the atomic unit of display, one packed device word
//! - [`Attr`]: a packed foreground/background attribute byte
//! - [`Color`]: the 16-color text-mode palette
//! - [`ScrollBuffer`]: the circular character grid with a windowed view

mod cell;
mod term;

pub use cell::{Attr, Cell, Color};
pub use term::ScrollBuffer;
