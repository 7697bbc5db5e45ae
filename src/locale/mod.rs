//! Locale tables for previews. Only English names are provided.

mod builtin;

pub use builtin::Locale;
