//! Application state management
//!
//! Services and background-loaded data shared with the window.

mod app_state;

pub use app_state::*;
