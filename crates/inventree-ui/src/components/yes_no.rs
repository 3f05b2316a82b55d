//! Yes / No badge for boolean table columns

use crate::theme::{layout, ThemeColors};
use gpui::*;

#[derive(IntoElement)]
pub struct YesNoButton {
    value: bool,
    colors: ThemeColors,
}

impl YesNoButton {
    pub fn new(value: bool, colors: ThemeColors) -> Self {
        Self { value, colors }
    }

    pub fn label(&self) -> &'static str {
        if self.value {
            "Yes"
        } else {
            "No"
        }
    }

    pub fn color(&self) -> u32 {
        if self.value {
            self.colors.green
        } else {
            self.colors.red
        }
    }
}

impl RenderOnce for YesNoButton {
    fn render(self, _cx: &mut WindowContext) -> impl IntoElement {
        div()
            .px(px(8.0))
            .py(px(2.0))
            .rounded(px(layout::BORDER_RADIUS_SM))
            .bg(rgb(self.color()))
            .text_xs()
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(rgb(self.colors.text_on_fill))
            .child(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_and_color() {
        let colors = ThemeColors::light();

        let yes = YesNoButton::new(true, colors.clone());
        assert_eq!(yes.label(), "Yes");
        assert_eq!(yes.color(), colors.green);

        let no = YesNoButton::new(false, colors.clone());
        assert_eq!(no.label(), "No");
        assert_eq!(no.color(), colors.red);
    }
}
