//! Font glyph icon resolved from the server's icon packages

use gpui::*;
use inventree_ui_core::{IconPackageMap, IconResolver, ResolvedIcon, DEFAULT_ICON_SIZE};
use std::sync::Arc;

/// Renders a `package:name:variant` icon in its package font.
///
/// An unknown identifier renders an empty box of the same size and logs a
/// warning on every render.
#[derive(IntoElement)]
pub struct ApiIcon {
    name: SharedString,
    size: f32,
    packages: Arc<IconPackageMap>,
}

impl ApiIcon {
    pub fn new(name: impl Into<SharedString>, packages: Arc<IconPackageMap>) -> Self {
        Self {
            name: name.into(),
            size: DEFAULT_ICON_SIZE,
            packages,
        }
    }

    /// Font size in pixels (default 22)
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn resolve(&self) -> ResolvedIcon {
        IconResolver::new().resolve(&self.name, &self.packages, Some(self.size))
    }
}

impl RenderOnce for ApiIcon {
    fn render(self, _cx: &mut WindowContext) -> impl IntoElement {
        let icon = self.resolve();

        div()
            .flex()
            .items_center()
            .justify_center()
            .flex_shrink_0()
            .w(px(icon.size))
            .h(px(icon.size))
            .font_family(icon.font_family)
            .text_size(px(icon.size))
            .line_height(px(icon.size))
            .child(icon.glyph)
    }
}
