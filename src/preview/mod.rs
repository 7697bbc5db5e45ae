//! Preview interpreters: render what a compiled format would display for a
//! sample value. The rendering is an approximation of the spreadsheet's
//! output, not an evaluator.

pub mod date;
pub mod number;

pub use number::{NumberPreview, RenderedZone};
