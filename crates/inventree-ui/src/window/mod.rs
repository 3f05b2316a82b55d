//! Application windows

mod inventree_window;

pub use inventree_window::InvenTreeWindow;
