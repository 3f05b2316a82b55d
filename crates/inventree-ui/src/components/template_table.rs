//! GPUI table drawing for template panels

use super::YesNoButton;
use crate::theme::{layout, ThemeColors};
use gpui::*;
use inventree_ui_core::{CellContent, TableRenderer, TemplateTableProps};
use serde_json::Value;

/// Fixed columns shown before the panel's own fields
const BASE_COLUMNS: [(&str, &str); 2] = [("name", "Name"), ("description", "Description")];

/// Column headers for a template table
pub fn column_labels(props: &TemplateTableProps) -> Vec<String> {
    BASE_COLUMNS
        .iter()
        .map(|(_, label)| label.to_string())
        .chain(props.additional_form_fields.iter().map(|f| f.label.clone()))
        .collect()
}

fn text_of(record: &Value, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Draws template records as a simple grid
pub struct GpuiTableRenderer<'a> {
    records: &'a [Value],
    colors: &'a ThemeColors,
}

impl<'a> GpuiTableRenderer<'a> {
    pub fn new(records: &'a [Value], colors: &'a ThemeColors) -> Self {
        Self { records, colors }
    }

    fn cell(&self, content: AnyElement) -> Div {
        div()
            .flex_1()
            .min_w(px(80.0))
            .px(px(8.0))
            .py(px(6.0))
            .flex()
            .items_center()
            .child(content)
    }

    fn text_cell(&self, text: String) -> Div {
        self.cell(div().text_sm().child(text).into_any_element())
    }

    fn render_row(&self, props: &TemplateTableProps, record: &Value) -> Div {
        let mut row = div()
            .flex()
            .flex_row()
            .border_b_1()
            .border_color(rgb(self.colors.divider));

        for (key, _) in BASE_COLUMNS {
            row = row.child(self.text_cell(text_of(record, key)));
        }

        for field in &props.additional_form_fields {
            let content = match field.render(record) {
                CellContent::Text(text) => div().text_sm().child(text).into_any_element(),
                CellContent::YesNo(value) => {
                    YesNoButton::new(value, self.colors.clone()).into_any_element()
                }
                CellContent::Empty => div().text_sm().child("-").into_any_element(),
            };
            row = row.child(self.cell(content));
        }

        row
    }
}

impl TableRenderer for GpuiTableRenderer<'_> {
    type Output = Div;

    fn render_table(&self, props: &TemplateTableProps) -> Div {
        let header = div()
            .flex()
            .flex_row()
            .bg(rgb(self.colors.surface_elevated))
            .text_color(rgb(self.colors.text_secondary))
            .font_weight(FontWeight::SEMIBOLD)
            .children(
                column_labels(props)
                    .into_iter()
                    .map(|label| self.text_cell(label)),
            );

        let body = if self.records.is_empty() {
            div()
                .p(px(12.0))
                .text_sm()
                .text_color(rgb(self.colors.text_secondary))
                .child(format!("No {} records found", props.model_type))
        } else {
            div()
                .flex()
                .flex_col()
                .children(self.records.iter().map(|r| self.render_row(props, r)))
        };

        div()
            .flex()
            .flex_col()
            .rounded(px(layout::BORDER_RADIUS))
            .border_1()
            .border_color(rgb(self.colors.border))
            .bg(rgb(self.colors.surface))
            .child(header)
            .child(body)
    }
}
