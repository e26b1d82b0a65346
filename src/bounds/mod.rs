//! Rectangle utilities.

mod rect;

pub use rect::Rect;
