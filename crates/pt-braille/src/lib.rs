//! Braille dot-matrix rendering engine for pointillé.
//!
//! Renders a binary dot grid as Unicode Braille patterns, one character
//! per 2×4 block of dots.

pub mod braille;
pub mod display;
pub mod sample;

pub use display::DotMatrixDisplay;
