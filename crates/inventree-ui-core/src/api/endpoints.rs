//! API endpoint paths and model types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Known server API endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiEndpoint {
    PartList,
    CategoryList,
    ReportList,
    ReportPrint,
    Icons,
}

impl ApiEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            ApiEndpoint::PartList => "part/",
            ApiEndpoint::CategoryList => "part/category/",
            ApiEndpoint::ReportList => "report/template/",
            ApiEndpoint::ReportPrint => "report/print/",
            ApiEndpoint::Icons => "icons/",
        }
    }
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Database model types referenced by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    Part,
    PartCategory,
    ReportTemplate,
}

impl ModelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Part => "part",
            ModelType::PartCategory => "partcategory",
            ModelType::ReportTemplate => "reporttemplate",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the server-relative URL for an endpoint, optionally for one record.
///
/// Relative endpoint paths are placed under `/api/`. A record pk replaces an
/// `:id` placeholder when the path has one, otherwise it is appended.
pub fn api_url(endpoint: ApiEndpoint, pk: Option<u64>) -> String {
    url_for_path(endpoint.path(), pk)
}

pub(crate) fn url_for_path(path: &str, pk: Option<u64>) -> String {
    let mut url = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/api/{}", path)
    };

    if let Some(pk) = pk {
        if url.contains(":id") {
            url = url.replace(":id", &pk.to_string());
        } else {
            url.push_str(&format!("{}/", pk));
        }
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_url() {
        assert_eq!(api_url(ApiEndpoint::Icons, None), "/api/icons/");
        assert_eq!(api_url(ApiEndpoint::ReportPrint, None), "/api/report/print/");
    }

    #[test]
    fn test_detail_url() {
        assert_eq!(api_url(ApiEndpoint::PartList, Some(42)), "/api/part/42/");
        assert_eq!(
            api_url(ApiEndpoint::CategoryList, Some(7)),
            "/api/part/category/7/"
        );
    }

    #[test]
    fn test_id_placeholder_and_absolute_paths() {
        assert_eq!(
            url_for_path("/plugin/:id/settings/", Some(3)),
            "/plugin/3/settings/"
        );
        assert_eq!(url_for_path("/static/", None), "/static/");
    }

    #[test]
    fn test_model_type_serde() {
        let json = serde_json::to_string(&ModelType::PartCategory).unwrap();
        assert_eq!(json, "\"partcategory\"");
        let model: ModelType = serde_json::from_str("\"reporttemplate\"").unwrap();
        assert_eq!(model, ModelType::ReportTemplate);
    }
}
