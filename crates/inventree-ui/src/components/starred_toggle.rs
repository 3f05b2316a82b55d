//! Subscribe / unsubscribe button for parts and categories

use crate::theme::{layout, ThemeColors};
use gpui::prelude::FluentBuilder;
use gpui::*;
use inventree_ui_core::{ButtonSize, ButtonVariant, ToggleAppearance};

/// Bell glyph shown on the toggle
pub const BELL_GLYPH: &str = "\u{1F514}";

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut WindowContext) + 'static>;

#[derive(IntoElement)]
pub struct StarredToggleButton {
    id: ElementId,
    appearance: ToggleAppearance,
    colors: ThemeColors,
    on_click: Option<ClickHandler>,
}

impl StarredToggleButton {
    pub fn new(id: impl Into<ElementId>, starred: bool, colors: ThemeColors) -> Self {
        Self {
            id: id.into(),
            appearance: ToggleAppearance::for_state(starred),
            colors,
            on_click: None,
        }
    }

    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut WindowContext) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn appearance(&self) -> &ToggleAppearance {
        &self.appearance
    }

    pub fn height(&self) -> f32 {
        match self.appearance.size {
            ButtonSize::Sm => layout::BUTTON_HEIGHT_SM,
            ButtonSize::Md => layout::BUTTON_HEIGHT_MD,
            ButtonSize::Lg => layout::BUTTON_HEIGHT_LG,
        }
    }
}

impl RenderOnce for StarredToggleButton {
    fn render(self, _cx: &mut WindowContext) -> impl IntoElement {
        let accent = self.colors.button(self.appearance.color);
        let on_fill = self.colors.text_on_fill;
        let hover = self.colors.hover;
        let filled = self.appearance.variant == ButtonVariant::Filled;
        let height = self.height();

        div()
            .id(self.id)
            .h(px(height))
            .px(px(12.0))
            .flex()
            .items_center()
            .gap(px(6.0))
            .rounded(px(layout::BORDER_RADIUS))
            .border_1()
            .border_color(rgb(accent))
            .cursor_pointer()
            .when(filled, |el| el.bg(rgb(accent)).text_color(rgb(on_fill)))
            .when(!filled, |el| {
                el.text_color(rgb(accent)).hover(|s| s.bg(rgba(hover)))
            })
            .child(BELL_GLYPH)
            // Tooltip text doubles as the button label
            .child(div().text_sm().child(self.appearance.tooltip))
            .when_some(self.on_click, |el, handler| el.on_click(handler))
    }
}
