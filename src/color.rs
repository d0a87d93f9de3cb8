// src/color.rs

//! Defines the `Rgb` color value type and the 256-color palette arithmetic:
//! the 6x6x6 color cube (indices 16-231) and the grayscale ramp (232-255).

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// Constants for 256-color palette indexing
pub const CUBE_OFFSET: u8 = 16;
pub const CUBE_SIZE: u8 = 6; // 6x6x6 cube
pub const CUBE_COLORS: u8 = CUBE_SIZE * CUBE_SIZE * CUBE_SIZE; // 216
pub const GRAYSCALE_OFFSET: u8 = CUBE_OFFSET + CUBE_COLORS; // 16 + 216 = 232
pub const GRAYSCALE_LEVELS: u8 = 24; // Indices 232-255

/// Channel levels of the color cube. The 256-color terminal convention uses
/// this non-linear ramp, not a linear 0-255 spread.
pub const CUBE_RAMP: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

/// Gray levels of the grayscale ramp, one per palette index 232-255.
pub const GRAYSCALE_RAMP: [u8; 24] = [
    0x08, 0x12, 0x1c, 0x26, 0x30, 0x3a, 0x44, 0x4e, 0x58, 0x62, 0x6c, 0x76, 0x80, 0x8a, 0x94,
    0x9e, 0xa8, 0xb2, 0xbc, 0xc6, 0xd0, 0xda, 0xe4, 0xee,
];

/// An RGB true color, with each component from 0 to 255.
///
/// The canonical textual form is `#` followed by six lowercase hex digits;
/// `Display`, `FromStr`, and the serde impls all speak that form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = match s.strip_prefix('#') {
            Some(hex) => hex,
            None => bail!("color string missing '#' prefix: {:?}", s),
        };
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            bail!("expected 6 hex digits after '#', got {:?}", s);
        }
        Ok(Rgb {
            r: u8::from_str_radix(&hex[0..2], 16)?,
            g: u8::from_str_radix(&hex[2..4], 16)?,
            b: u8::from_str_radix(&hex[4..6], 16)?,
        })
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Returns the color-cube entry for a cube offset.
///
/// The offset decomposes as `(offset / 36, (offset / 6) % 6, offset % 6)`,
/// each component selecting one level of `CUBE_RAMP`. Components are taken
/// modulo 6, so any `u8` offset resolves; callers pass offsets in [0,216).
pub fn cube_rgb(offset: u8) -> Rgb {
    let r = (offset / (CUBE_SIZE * CUBE_SIZE)) % CUBE_SIZE;
    let g = (offset / CUBE_SIZE) % CUBE_SIZE;
    let b = offset % CUBE_SIZE;
    Rgb {
        r: CUBE_RAMP[r as usize],
        g: CUBE_RAMP[g as usize],
        b: CUBE_RAMP[b as usize],
    }
}

/// Returns the grayscale ramp entry for a grayscale offset.
///
/// # Panics
/// Panics if the offset is outside [0,24).
pub fn grayscale_rgb(offset: u8) -> Rgb {
    let level = GRAYSCALE_RAMP[offset as usize];
    Rgb {
        r: level,
        g: level,
        b: level,
    }
}

/// Resolves a 256-color palette index to its RGB value.
///
/// Indices 0-15 are the named ANSI colors, which the consumer supplies
/// itself; they resolve to `None` here. Indices 16-231 hit the color cube
/// and 232-255 the grayscale ramp.
pub fn extended_rgb(index: u8) -> Option<Rgb> {
    if index < CUBE_OFFSET {
        return None;
    }
    if index < GRAYSCALE_OFFSET {
        return Some(cube_rgb(index - CUBE_OFFSET));
    }
    Some(grayscale_rgb(index - GRAYSCALE_OFFSET))
}
