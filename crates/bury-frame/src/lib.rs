//! A minimal in-memory editor frame that hosts the layout guard.
//!
//! [`Frame`] keeps a split tree of windows over named buffers and saves
//! whole window configurations in registers. [`BuildRunner`] simulates
//! builds against it and fires the compilation hooks.

pub mod buffer;
pub mod frame;
pub mod layout;
pub mod runner;
pub mod tree;
pub mod window;

pub use buffer::{Buffer, COMPILATION_BUFFER, GREP_BUFFER, SCRATCH_BUFFER};
pub use frame::{Frame, WindowConfiguration, DEFAULT_MAX_REGISTERS};
pub use layout::LayoutEngine;
pub use runner::{BuildJob, BuildRunner};
pub use tree::{Direction, SplitNode};
pub use window::Window;
