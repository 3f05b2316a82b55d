//! Report template admin panel
//!
//! The panel only describes the table; drawing it is left to a
//! `TableRenderer` supplied by the display layer.

use crate::api::{api_url, ApiClient, ApiEndpoint, ModelType};
use crate::error::{ApiError, Error, Result};
use serde_json::Value;
use tracing::debug;

/// How a column value is presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldRenderer {
    #[default]
    Text,
    /// Boolean shown as a Yes / No badge
    YesNo,
}

/// Rendered content of one table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Text(String),
    YesNo(bool),
    Empty,
}

/// An extra field shown in the table and in the edit form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub renderer: FieldRenderer,
}

impl FormField {
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            renderer: FieldRenderer::Text,
        }
    }

    pub fn yes_no(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            renderer: FieldRenderer::YesNo,
        }
    }

    /// Render this field of a record
    pub fn render(&self, record: &Value) -> CellContent {
        let value = record.get(&self.name);
        match self.renderer {
            FieldRenderer::YesNo => CellContent::YesNo(value.map(is_truthy).unwrap_or(false)),
            FieldRenderer::Text => match value {
                None | Some(Value::Null) => CellContent::Empty,
                Some(Value::String(s)) if s.is_empty() => CellContent::Empty,
                Some(Value::String(s)) => CellContent::Text(s.clone()),
                Some(other) => CellContent::Text(other.to_string()),
            },
        }
    }
}

/// Loose boolean interpretation of a JSON value
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "yes" | "y" | "on"
        ),
        _ => false,
    }
}

/// Configuration handed to the table renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateTableProps {
    pub model_type: ModelType,
    pub template_endpoint: ApiEndpoint,
    pub printing_endpoint: ApiEndpoint,
    pub additional_form_fields: Vec<FormField>,
}

/// Generic table drawing capability
pub trait TableRenderer {
    type Output;

    fn render_table(&self, props: &TemplateTableProps) -> Self::Output;
}

pub struct TemplatePanel {
    props: TemplateTableProps,
}

impl TemplatePanel {
    pub fn new(props: TemplateTableProps) -> Self {
        Self { props }
    }

    /// Panel listing report templates
    pub fn report() -> Self {
        Self::new(TemplateTableProps {
            model_type: ModelType::ReportTemplate,
            template_endpoint: ApiEndpoint::ReportList,
            printing_endpoint: ApiEndpoint::ReportPrint,
            additional_form_fields: vec![
                FormField::text("page_size", "Page Size"),
                FormField::yes_no("landscape", "Landscape"),
                FormField::yes_no("merge", "Merge"),
                FormField::yes_no("attach_to_model", "Attach to Model"),
            ],
        })
    }

    pub fn props(&self) -> &TemplateTableProps {
        &self.props
    }

    pub fn render<R: TableRenderer>(&self, renderer: &R) -> R::Output {
        renderer.render_table(&self.props)
    }

    /// Fetch the template records listed by the panel.
    ///
    /// Accepts both a bare list and a paginated `{"results": [...]}` body.
    pub async fn fetch_records(&self, api: &dyn ApiClient) -> Result<Vec<Value>> {
        let body = api.get(&api_url(self.props.template_endpoint, None)).await?;

        let records = match body {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("results") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(Error::Api(ApiError::InvalidResponse(
                        "expected a list of templates".to_string(),
                    )))
                }
            },
            _ => {
                return Err(Error::Api(ApiError::InvalidResponse(
                    "expected a list of templates".to_string(),
                )))
            }
        };

        debug!("Fetched {} {} records", records.len(), self.props.model_type);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApiClient;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    struct LabelRenderer;

    impl TableRenderer for LabelRenderer {
        type Output = Vec<String>;

        fn render_table(&self, props: &TemplateTableProps) -> Vec<String> {
            props
                .additional_form_fields
                .iter()
                .map(|f| f.label.clone())
                .collect()
        }
    }

    #[test]
    fn test_report_panel_props() {
        let panel = TemplatePanel::report();
        let props = panel.props();

        assert_eq!(props.model_type, ModelType::ReportTemplate);
        assert_eq!(props.template_endpoint, ApiEndpoint::ReportList);
        assert_eq!(props.printing_endpoint, ApiEndpoint::ReportPrint);
        assert_eq!(
            panel.render(&LabelRenderer),
            vec!["Page Size", "Landscape", "Merge", "Attach to Model"]
        );
    }

    #[test]
    fn test_field_rendering() {
        let panel = TemplatePanel::report();
        let record = json!({
            "pk": 1,
            "name": "Bill of Materials",
            "page_size": "A4",
            "landscape": true,
            "merge": false
        });

        let cells: Vec<CellContent> = panel
            .props()
            .additional_form_fields
            .iter()
            .map(|f| f.render(&record))
            .collect();

        assert_eq!(
            cells,
            vec![
                CellContent::Text("A4".to_string()),
                CellContent::YesNo(true),
                CellContent::YesNo(false),
                CellContent::YesNo(false),
            ]
        );
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("Yes")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("false")));
        assert!(!is_truthy(&Value::Null));
    }

    #[tokio::test]
    async fn test_fetch_paginated_records() {
        let mut api = MockApiClient::new();
        api.expect_get()
            .withf(|path| path == "/api/report/template/")
            .returning(|_| Ok(json!({"count": 1, "results": [{"pk": 1, "name": "BOM"}]})));

        let records = TemplatePanel::report().fetch_records(&api).await.unwrap();
        assert_eq!(records, vec![json!({"pk": 1, "name": "BOM"})]);
    }

    #[tokio::test]
    async fn test_fetch_rejects_unexpected_body() {
        let mut api = MockApiClient::new();
        api.expect_get().returning(|_| Ok(json!("nope")));

        let result = TemplatePanel::report().fetch_records(&api).await;
        assert!(matches!(
            result,
            Err(Error::Api(ApiError::InvalidResponse(_)))
        ));
    }
}
