//! Color definitions for the InvenTree theme
//!
//! Colors are `0xRRGGBB` / `0xRRGGBBAA` values so they can be handed to
//! GPUI's `rgb()` and `rgba()` directly.

use inventree_ui_core::{ButtonColor, NotificationColor};

/// Theme color palette
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // === Backgrounds ===
    /// Window background
    pub panel_bg: u32,
    /// Surface/card background
    pub surface: u32,
    /// Elevated surface (toasts, headers)
    pub surface_elevated: u32,

    // === Text Colors ===
    pub text_primary: u32,
    pub text_secondary: u32,
    /// Text on a filled button
    pub text_on_fill: u32,

    // === Accents ===
    pub blue: u32,
    pub green: u32,
    pub yellow: u32,
    pub red: u32,
    pub gray: u32,

    // === UI Elements ===
    pub border: u32,
    pub divider: u32,
    /// Hover state (with alpha)
    pub hover: u32,
}

impl ThemeColors {
    /// Create the light palette
    pub fn light() -> Self {
        Self {
            panel_bg: 0xf8f9fa,
            surface: 0xffffff,
            surface_elevated: 0xf1f3f5,

            text_primary: 0x212529,
            text_secondary: 0x868e96,
            text_on_fill: 0xffffff,

            blue: 0x228be6,
            green: 0x40c057,
            yellow: 0xfab005,
            red: 0xfa5252,
            gray: 0x868e96,

            border: 0xdee2e6,
            divider: 0xe9ecef,
            hover: 0x228be61a,
        }
    }

    /// Create the dark palette
    pub fn dark() -> Self {
        Self {
            panel_bg: 0x1a1b1e,
            surface: 0x25262b,
            surface_elevated: 0x2c2e33,

            text_primary: 0xc1c2c5,
            text_secondary: 0x909296,
            text_on_fill: 0xffffff,

            blue: 0x1c7ed6,
            green: 0x37b24d,
            yellow: 0xf59f00,
            red: 0xf03e3e,
            gray: 0x5c5f66,

            border: 0x373a40,
            divider: 0x2c2e33,
            hover: 0x1c7ed62a,
        }
    }

    pub fn notification(&self, color: NotificationColor) -> u32 {
        match color {
            NotificationColor::Blue => self.blue,
            NotificationColor::Green => self.green,
            NotificationColor::Yellow => self.yellow,
            NotificationColor::Red => self.red,
            NotificationColor::Gray => self.gray,
        }
    }

    pub fn button(&self, color: ButtonColor) -> u32 {
        match color {
            ButtonColor::Green => self.green,
            ButtonColor::Blue => self.blue,
        }
    }
}
