//! Reusable UI components
//!
//! Basic building blocks for the InvenTree desktop UI.

pub mod api_icon;
pub mod starred_toggle;
pub mod template_table;
pub mod yes_no;

pub use api_icon::ApiIcon;
pub use starred_toggle::{StarredToggleButton, BELL_GLYPH};
pub use template_table::{column_labels, GpuiTableRenderer};
pub use yes_no::YesNoButton;
