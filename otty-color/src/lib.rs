//! Compact text color for terminal cells.
//!
//! A [`TextColor`] records what the application asked for (the terminal
//! default, a 24-bit color or a palette index) and is turned into a concrete
//! [`Rgb`] only when a cell is rendered.

mod error;
pub mod palette;
mod rgb;
mod text_color;

pub use error::{PaletteError, ParseRgbError};
pub use rgb::Rgb;
pub use text_color::TextColor;
