// src/colormap.rs

//! Builds the full color map (palette indices 16-255 to hex colors) and
//! serializes it as the JavaScript fragment the web client includes.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Context;
use log::debug;
use once_cell::sync::Lazy;

use crate::color::{
    cube_rgb, grayscale_rgb, Rgb, CUBE_COLORS, CUBE_OFFSET, GRAYSCALE_LEVELS, GRAYSCALE_OFFSET,
};

/// Identifier of the emitted global; the client resolves a palette index
/// with `COLOR_MAP[index]`.
pub const COLOR_MAP_IDENT: &str = "COLOR_MAP";

/// The full table, built once on first access and read-only afterward.
pub static COLOR_MAP: Lazy<BTreeMap<u8, Rgb>> = Lazy::new(build_color_map);

/// Composes the cube and grayscale sub-tables into one map keyed by
/// palette index.
///
/// `BTreeMap` keeps keys in ascending numeric order, so serialization
/// order is fixed regardless of which sub-table is inserted first.
pub fn build_color_map() -> BTreeMap<u8, Rgb> {
    let cube = (0..CUBE_COLORS).map(|off| (CUBE_OFFSET + off, cube_rgb(off)));
    let gray = (0..GRAYSCALE_LEVELS).map(|off| (GRAYSCALE_OFFSET + off, grayscale_rgb(off)));
    let map: BTreeMap<u8, Rgb> = cube.chain(gray).collect();
    debug!("Built color map with {} entries.", map.len());
    map
}

/// Writes the map as a two-line JavaScript fragment: the declaration
/// header, then the JSON object literal terminated by `;`.
///
/// Keys serialize as quoted decimal strings in ascending numeric order,
/// values as quoted lowercase `#rrggbb` strings.
pub fn write_color_map<W: Write>(out: &mut W, map: &BTreeMap<u8, Rgb>) -> anyhow::Result<()> {
    let body = serde_json::to_string(map).context("Failed to serialize color map")?;
    writeln!(out, "var {} = ", COLOR_MAP_IDENT)?;
    writeln!(out, "{};", body)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    // Serializes COLOR_MAP the way the binary does and returns the output.
    fn emitted_fragment() -> String {
        let mut buf = Vec::new();
        write_color_map(&mut buf, &COLOR_MAP).expect("write to Vec cannot fail");
        String::from_utf8(buf).expect("fragment is not UTF-8")
    }

    #[test]
    fn map_covers_exactly_indices_16_through_255() {
        let map = build_color_map();
        assert_eq!(map.len(), 240);
        let keys: Vec<u8> = map.keys().copied().collect();
        let expected: Vec<u8> = (16..=255).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn map_entries_match_palette_arithmetic() {
        for (&index, &rgb) in COLOR_MAP.iter() {
            assert_eq!(crate::color::extended_rgb(index), Some(rgb));
        }
    }

    #[test]
    fn rebuilding_yields_an_equal_map() {
        assert_eq!(build_color_map(), build_color_map());
        assert_eq!(build_color_map(), *COLOR_MAP);
    }

    #[test]
    fn fragment_has_header_and_terminated_object() {
        let fragment = emitted_fragment();
        let mut lines = fragment.lines();
        assert_eq!(lines.next(), Some("var COLOR_MAP = "));
        let body = lines.next().expect("missing object line");
        assert!(body.starts_with('{'));
        assert!(body.ends_with("};"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn fragment_round_trips_through_json() {
        let fragment = emitted_fragment();
        let body = fragment.lines().nth(1).expect("missing object line");
        let json = body.strip_suffix(';').expect("missing statement terminator");
        let parsed: BTreeMap<u8, Rgb> =
            serde_json::from_str(json).expect("object line is not valid JSON");
        assert_eq!(parsed, *COLOR_MAP);
    }

    #[test]
    fn fragment_keys_appear_in_ascending_numeric_order() {
        let fragment = emitted_fragment();
        let mut last = 0;
        for index in 16u16..=255 {
            let key = format!("\"{}\":", index);
            let pos = fragment.find(&key).unwrap_or_else(|| panic!("missing key {}", index));
            assert!(pos > last, "key {} out of order", index);
            last = pos;
        }
    }

    #[test]
    fn emission_is_byte_identical_across_calls() {
        assert_eq!(emitted_fragment(), emitted_fragment());
    }
}
