//! InvenTree UI Library
//!
//! GPUI-based desktop UI for InvenTree.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │ Header                           [Part #7] [🔔 Subscribe] │
//! ├───────────────────────────────────────────────────────────┤
//! │ Icons                                                     │
//! │ ┌──────┐ ┌──────┐ ┌──────┐                                │
//! │ │ApiIcon│ │ApiIcon│ │ApiIcon│ ...                          │
//! │ └──────┘ └──────┘ └──────┘                                │
//! │                                                           │
//! │ Report Templates                                          │
//! │ ┌───────────────────────────────────────────────────────┐ │
//! │ │ Name │ Description │ Page Size │ Landscape │ ...      │ │
//! │ └───────────────────────────────────────────────────────┘ │
//! │                                     ┌───────────────────┐ │
//! │                                     │ Notification      │ │
//! │                                     └───────────────────┘ │
//! └───────────────────────────────────────────────────────────┘
//! ```

pub mod components;
pub mod state;
pub mod theme;

// Re-exports
pub use state::{AppServices, PanelState};
pub use theme::{layout, Spacing, Theme, ThemeColors, Typography};
