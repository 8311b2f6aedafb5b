//! Palette layout shared by indexed colors.
//!
//! Palettes are plain `&[Rgb]` slices owned by the caller:
//!
//! * `0..8` – dark ANSI colors
//! * `8..16` – bright counterparts, `dark + 8`
//! * `16..256` – extended colors, unaffected by brightening

/// Size of the dark range, also the distance to its bright counterpart.
pub const DARK_COLORS: usize = 8;

/// Length of a legacy 16 color palette.
pub const LEGACY_PALETTE_LEN: usize = 16;

/// Length of a 256 color palette.
pub const EXTENDED_PALETTE_LEN: usize = 256;

/// Returns the bright counterpart of a dark palette index.
///
/// Indices outside the dark range have no counterpart.
#[inline]
pub const fn bright_index(index: u8) -> Option<u8> {
    if (index as usize) < DARK_COLORS {
        Some(index + DARK_COLORS as u8)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_range_maps_to_bright_range() {
        for index in 0..8u8 {
            assert_eq!(bright_index(index), Some(index + 8));
        }
    }

    #[test]
    fn other_indices_have_no_bright_counterpart() {
        assert_eq!(bright_index(8), None);
        assert_eq!(bright_index(15), None);
        assert_eq!(bright_index(16), None);
        assert_eq!(bright_index(u8::MAX), None);
    }
}
