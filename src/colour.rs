//! Colouring algorithms.
//!
//! Divergent points are coloured in bands keyed to the integer part of the
//! escape magnitude. Each band lights at most one of red, green or blue, so the
//! result is a pseudo-periodic stripe pattern rather than a smooth gradient.

use crate::{escape::Escape, pixel::Rgba};

/// Bands below this brightness are lifted by [`DIM_BAND_LIFT`].
pub const MIN_BRIGHTNESS: u32 = 70;

pub const DIM_BAND_LIFT: u32 = 255 - MIN_BRIGHTNESS;

const BAND_COUNT: u64 = 255;

/// The channel a band lights up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    /// Every fourth band stays black even though the point diverged.
    Dark,
}

impl Channel {
    pub fn of_band(band: u32) -> Self {
        match band % 4 {
            1 => Channel::Red,
            2 => Channel::Green,
            3 => Channel::Blue,
            _ => Channel::Dark,
        }
    }
}

/// Truncates the magnitude to an integer, then reduces it modulo 255.
pub fn band(magnitude: f64) -> u32 {
    // `as` saturates, so an infinite magnitude lands on a well-defined band.
    ((magnitude as u64) % BAND_COUNT) as u32
}

/// Raw brightness of a band, before it is narrowed into an 8-bit channel.
pub fn brightness(band: u32) -> u32 {
    if band < MIN_BRIGHTNESS {
        band + DIM_BAND_LIFT
    } else {
        band
    }
}

/// Colour of a pixel given how its point escaped.
pub fn colour(escape: Escape) -> Rgba {
    match escape {
        Escape::Bounded => Rgba::OPAQUE_BLACK,
        Escape::Divergent { magnitude, .. } => {
            let band = band(magnitude);
            // Narrowing truncates to the low 8 bits.
            let value = brightness(band) as u8;
            match Channel::of_band(band) {
                Channel::Red => Rgba::opaque(value, 0, 0),
                Channel::Green => Rgba::opaque(0, value, 0),
                Channel::Blue => Rgba::opaque(0, 0, value),
                Channel::Dark => Rgba::OPAQUE_BLACK,
            }
        }
    }
}
