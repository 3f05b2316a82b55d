//! Installed icon packages as served by the `icons/` API endpoint

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;
use url::Url;

/// Prefix of the font family registered for every icon package
pub const FONT_FAMILY_PREFIX: &str = "inventree-icon-font-";

/// Font family used to render glyphs of the given package
pub fn font_family(package_key: &str) -> String {
    format!("{}{}", FONT_FAMILY_PREFIX, package_key)
}

/// A single icon with its style variants
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Variant key -> hexadecimal code point
    #[serde(default)]
    pub variants: HashMap<String, String>,
}

impl IconEntry {
    pub fn variant(&self, key: &str) -> Option<&str> {
        self.variants.get(key).map(String::as_str)
    }
}

/// A named collection of icons contributed by one icon font
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconPackage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub prefix: String,
    /// Font format (e.g. `woff2`) -> font file URL
    #[serde(default)]
    pub fonts: BTreeMap<String, String>,
    #[serde(default)]
    pub icons: HashMap<String, IconEntry>,
}

impl IconPackage {
    pub fn new(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            ..Default::default()
        }
    }

    /// Add an icon with the given `(variant, hex code point)` pairs
    pub fn with_icon<'a>(
        mut self,
        name: impl Into<String>,
        variants: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let name = name.into();
        let entry = IconEntry {
            name: name.clone(),
            variants: variants
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Default::default()
        };
        self.icons.insert(name, entry);
        self
    }

    pub fn icon(&self, name: &str) -> Option<&IconEntry> {
        self.icons.get(name)
    }

    /// Describe the font face that has to be registered for this package.
    ///
    /// Font URLs are made absolute against `base`. Returns `None` for
    /// packages without a prefix or without any font files.
    pub fn font_face(&self, base: &Url) -> Result<Option<FontFace>> {
        if self.prefix.is_empty() || self.fonts.is_empty() {
            return Ok(None);
        }

        let mut sources = Vec::with_capacity(self.fonts.len());
        for (format, url) in &self.fonts {
            let absolute = base.join(url)?;
            sources.push(FontSource {
                url: absolute.to_string(),
                format: format.clone(),
            });
        }

        Ok(Some(FontFace {
            family: font_family(&self.prefix),
            sources,
        }))
    }
}

/// One downloadable font file of a font face
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSource {
    pub url: String,
    pub format: String,
}

/// Font face registration for an icon package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFace {
    pub family: String,
    pub sources: Vec<FontSource>,
}

impl FontFace {
    /// CSS `src` descriptor, e.g. `url(https://host/a.woff2) format("woff2")`
    pub fn css_src(&self) -> String {
        self.sources
            .iter()
            .map(|s| format!("url({}) format(\"{}\")", s.url, s.format))
            .collect::<Vec<_>>()
            .join(",\n")
    }
}

/// Package key -> installed package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconPackageMap {
    packages: HashMap<String, IconPackage>,
}

impl IconPackageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key packages by their prefix, skipping packages that have none
    pub fn from_packages(packages: impl IntoIterator<Item = IconPackage>) -> Self {
        let mut map = Self::new();
        for package in packages {
            if package.prefix.is_empty() {
                debug!("Skipping icon package without prefix: {}", package.name);
                continue;
            }
            map.packages.insert(package.prefix.clone(), package);
        }
        map
    }

    pub fn insert(&mut self, key: impl Into<String>, package: IconPackage) {
        self.packages.insert(key.into(), package);
    }

    pub fn get(&self, key: &str) -> Option<&IconPackage> {
        self.packages.get(key)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IconPackage)> {
        self.packages.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every `package:name:variant` identifier the map can resolve, sorted
    pub fn identifiers(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .packages
            .iter()
            .flat_map(|(key, package)| {
                package.icons.iter().flat_map(move |(name, entry)| {
                    entry
                        .variants
                        .keys()
                        .map(move |variant| format!("{}:{}:{}", key, name, variant))
                })
            })
            .collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ICONS_RESPONSE: &str = r#"[
        {
            "name": "Tabler Icons",
            "prefix": "ti",
            "fonts": {
                "woff2": "/static/fonts/tabler-icons.woff2",
                "woff": "/static/fonts/tabler-icons.woff"
            },
            "icons": {
                "bell": {
                    "name": "Bell",
                    "category": "system",
                    "tags": ["notification", "alarm"],
                    "variants": {"outline": "ea35", "filled": "f69e"}
                }
            }
        },
        {
            "name": "Broken",
            "icons": {}
        }
    ]"#;

    #[test]
    fn test_deserialize_api_response() {
        let packages: Vec<IconPackage> = serde_json::from_str(ICONS_RESPONSE).unwrap();
        let map = IconPackageMap::from_packages(packages);

        assert_eq!(map.len(), 1);
        let bell = map.get("ti").and_then(|p| p.icon("bell")).unwrap();
        assert_eq!(bell.variant("outline"), Some("ea35"));
        assert_eq!(bell.tags, vec!["notification", "alarm"]);
    }

    #[test]
    fn test_bare_icons_mapping_deserializes() {
        let json = r#"{"mdi": {"icons": {"home": {"variants": {"outline": "e900"}}}}}"#;
        let map: IconPackageMap = serde_json::from_str(json).unwrap();

        let home = map.get("mdi").and_then(|p| p.icon("home")).unwrap();
        assert_eq!(home.variant("outline"), Some("e900"));
        assert_eq!(home.variant("solid"), None);
    }

    #[test]
    fn test_font_face_sources() {
        let packages: Vec<IconPackage> = serde_json::from_str(ICONS_RESPONSE).unwrap();
        let base = Url::parse("https://demo.inventree.org").unwrap();
        let face = packages[0].font_face(&base).unwrap().unwrap();

        assert_eq!(face.family, "inventree-icon-font-ti");
        assert_eq!(
            face.css_src(),
            "url(https://demo.inventree.org/static/fonts/tabler-icons.woff) format(\"woff\"),\n\
             url(https://demo.inventree.org/static/fonts/tabler-icons.woff2) format(\"woff2\")"
        );
    }

    #[test]
    fn test_font_face_requires_prefix_and_fonts() {
        let base = Url::parse("http://localhost:8000").unwrap();
        let package = IconPackage::new("Empty", "empty");
        assert!(package.font_face(&base).unwrap().is_none());
    }

    #[test]
    fn test_identifiers_are_sorted() {
        let mut map = IconPackageMap::new();
        map.insert(
            "mdi",
            IconPackage::new("Material", "mdi")
                .with_icon("home", [("solid", "e901"), ("outline", "e900")]),
        );

        assert_eq!(
            map.identifiers(),
            vec!["mdi:home:outline".to_string(), "mdi:home:solid".to_string()]
        );
    }
}
