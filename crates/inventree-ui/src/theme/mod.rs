//! Theme system for the InvenTree desktop UI

mod colors;

pub use colors::*;

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ThemeColors,
    pub spacing: Spacing,
    pub typography: Typography,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            colors: ThemeColors::light(),
            spacing: Spacing::default(),
            typography: Typography::default(),
        }
    }

    pub fn dark() -> Self {
        Self {
            colors: ThemeColors::dark(),
            spacing: Spacing::default(),
            typography: Typography::default(),
        }
    }
}

/// Spacing constants
#[derive(Debug, Clone)]
pub struct Spacing {
    /// Extra small spacing (4px)
    pub xs: f32,
    /// Small spacing (8px)
    pub sm: f32,
    /// Medium spacing (12px)
    pub md: f32,
    /// Large spacing (16px)
    pub lg: f32,
    /// Extra large spacing (24px)
    pub xl: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 12.0,
            lg: 16.0,
            xl: 24.0,
        }
    }
}

/// Typography settings
#[derive(Debug, Clone)]
pub struct Typography {
    pub base_size: f32,
    pub small_size: f32,
    pub header_size: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            base_size: 14.0,
            small_size: 12.0,
            header_size: 18.0,
        }
    }
}

/// Layout constants
pub mod layout {
    /// Header height in pixels
    pub const HEADER_HEIGHT: f32 = 48.0;
    /// Width of one icon gallery cell
    pub const GALLERY_CELL_WIDTH: f32 = 96.0;
    /// Max icons shown in the gallery
    pub const GALLERY_LIMIT: usize = 64;
    /// Width of the notification stack
    pub const NOTIFICATION_WIDTH: f32 = 320.0;
    /// Border radius
    pub const BORDER_RADIUS: f32 = 6.0;
    /// Border radius small
    pub const BORDER_RADIUS_SM: f32 = 4.0;

    /// Button height for the `lg` size
    pub const BUTTON_HEIGHT_LG: f32 = 42.0;
    pub const BUTTON_HEIGHT_MD: f32 = 36.0;
    pub const BUTTON_HEIGHT_SM: f32 = 30.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventree_ui_core::{ButtonColor, NotificationColor};

    #[test]
    fn test_color_mapping() {
        let colors = ThemeColors::light();
        assert_eq!(colors.notification(NotificationColor::Red), colors.red);
        assert_eq!(colors.button(ButtonColor::Green), colors.green);
        assert_ne!(
            colors.notification(NotificationColor::Blue),
            colors.notification(NotificationColor::Red)
        );
    }
}
