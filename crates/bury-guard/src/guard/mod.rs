//! The layout guard: capture on start, restore on clean finish.

mod mode;
mod state;


pub use mode::LayoutGuard;
pub use state::{GuardState, Transition};
