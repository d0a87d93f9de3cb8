// src/lib.rs

//! Generates the 256-color terminal palette mapping as a JavaScript
//! `var COLOR_MAP = {...};` fragment for the message renderer.
//!
//! Indices 0-15 are the named ANSI colors, which the consumer defines
//! itself; this crate covers the 6x6x6 color cube (indices 16-231) and the
//! grayscale ramp (indices 232-255), 240 entries in total.

pub mod color;
pub mod colormap;
