//! Compilers from structured settings to format codes.
//!
//! Every compiler is a pure function of its input and never fails: out of
//! range values are clamped and empty literals are dropped.

pub mod conditional;
pub mod datetime;
pub mod number;

pub use datetime::AUTO_SCALE_THRESHOLD;
