//! Binary split tree of windows.

mod operations;
mod types;

pub use types::*;
