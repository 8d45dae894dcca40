//! File watcher for live config reload.

mod config_watcher;


pub use config_watcher::{ConfigWatcher, DEBOUNCE};
