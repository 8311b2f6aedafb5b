use log::error;

use crate::{
    error::PaletteError,
    palette::{LEGACY_PALETTE_LEN, bright_index},
    rgb::Rgb,
};

/// Color of a single cell, resolved against a palette at render time.
///
/// Fits in four bytes: the tag plus three payload bytes shared by the RGB
/// triplet and the palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextColor {
    /// Left to the terminal, see the `default_color` of [`TextColor::resolve`].
    #[default]
    Default,
    /// 24-bit color stored in the cell itself.
    Rgb(Rgb),
    /// Index into the caller's 16 or 256 color palette.
    Indexed(u8),
}

impl TextColor {
    pub const fn rgb(color: Rgb) -> Self {
        Self::Rgb(color)
    }

    pub const fn indexed(index: u8) -> Self {
        Self::Indexed(index)
    }

    pub fn set_default(&mut self) {
        *self = Self::Default;
    }

    /// Any index is accepted, palette bounds are checked on resolve.
    pub fn set_indexed(&mut self, index: u8) {
        *self = Self::Indexed(index);
    }

    pub fn set_rgb(&mut self, color: Rgb) {
        *self = Self::Rgb(color);
    }

    #[inline]
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    #[inline]
    pub fn is_rgb(&self) -> bool {
        matches!(self, Self::Rgb(_))
    }

    /// Whether this is a palette index.
    #[inline]
    pub fn is_legacy(&self) -> bool {
        !(self.is_default() || self.is_rgb())
    }

    pub fn index(&self) -> Option<u8> {
        match *self {
            Self::Indexed(index) => Some(index),
            _ => None,
        }
    }

    pub fn rgb_value(&self) -> Option<Rgb> {
        match *self {
            Self::Rgb(color) => Some(color),
            _ => None,
        }
    }

    /// Checks that `palette` can resolve this color.
    ///
    /// Reports the same violations [`TextColor::resolve`] panics on.
    pub fn check_palette(
        &self,
        palette: &[Rgb],
        brighten: bool,
    ) -> Result<(), PaletteError> {
        match *self {
            Self::Indexed(index) => {
                palette_slot(index, palette.len(), brighten).map(|_| ())
            },
            _ => Ok(()),
        }
    }

    /// Resolves the displayable color.
    ///
    /// * `Default` yields `default_color`.
    /// * `Rgb` yields the stored color.
    /// * `Indexed` looks the index up in `palette`. With `brighten` set, dark
    ///   indices `0..8` use their bright counterpart at `index + 8`. Indices
    ///   from `8` on are returned as is.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range for `palette`, or if brightening
    /// needs a bright range the palette does not have. Callers must pick a
    /// palette that matches the indexed mode in use, see
    /// [`TextColor::check_palette`].
    ///
    /// ```
    /// use otty_color::{Rgb, TextColor};
    ///
    /// let palette: Vec<Rgb> = (0..16).map(|i| Rgb::new(i, i, i)).collect();
    /// let default_color = Rgb::new(0xff, 0xff, 0xff);
    ///
    /// let mut color = TextColor::default();
    /// assert_eq!(color.resolve(&palette, default_color, true), default_color);
    ///
    /// // Bold text picks the bright counterpart of a dark index.
    /// color.set_indexed(3);
    /// assert_eq!(color.resolve(&palette, default_color, true), palette[11]);
    /// assert_eq!(color.resolve(&palette, default_color, false), palette[3]);
    ///
    /// // Already bright, unchanged.
    /// color.set_indexed(12);
    /// assert_eq!(color.resolve(&palette, default_color, true), palette[12]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn resolve(
        &self,
        palette: &[Rgb],
        default_color: Rgb,
        brighten: bool,
    ) -> Rgb {
        match *self {
            Self::Default => default_color,
            Self::Rgb(color) => color,
            Self::Indexed(index) => {
                match palette_slot(index, palette.len(), brighten) {
                    Ok(slot) => palette[slot],
                    Err(err) => {
                        error!("{err} (brighten={brighten})");
                        panic!("{err}");
                    },
                }
            },
        }
    }

    /// Non-panicking [`TextColor::resolve`].
    pub fn try_resolve(
        &self,
        palette: &[Rgb],
        default_color: Rgb,
        brighten: bool,
    ) -> Result<Rgb, PaletteError> {
        self.check_palette(palette, brighten)?;
        Ok(self.resolve(palette, default_color, brighten))
    }
}

impl From<Rgb> for TextColor {
    fn from(color: Rgb) -> Self {
        Self::Rgb(color)
    }
}

impl From<u8> for TextColor {
    fn from(index: u8) -> Self {
        Self::Indexed(index)
    }
}

/// Palette slot for `index`, honoring the bold-as-bright substitution.
fn palette_slot(
    index: u8,
    len: usize,
    brighten: bool,
) -> Result<usize, PaletteError> {
    if usize::from(index) >= len {
        return Err(PaletteError::IndexOutOfRange { index, len });
    }

    match bright_index(index) {
        Some(bright) if brighten => {
            if len < LEGACY_PALETTE_LEN || usize::from(bright) >= len {
                return Err(PaletteError::NoBrightRange { index, len });
            }
            Ok(usize::from(bright))
        },
        _ => Ok(usize::from(index)),
    }
}
