//! Icon identifier -> glyph resolution
//!
//! Resolution walks package -> icon -> variant and converts the stored
//! hexadecimal code point into a character. Every failure degrades to an
//! empty glyph; nothing is surfaced to the caller as an error.

use super::identifier::IconIdentifier;
use super::package::{font_family, IconPackageMap};
use tracing::warn;

/// Default rendered icon size in pixels
pub const DEFAULT_ICON_SIZE: f32 = 22.0;

/// Receives a report for every identifier that could not be resolved
#[cfg_attr(test, mockall::automock)]
pub trait IconDiagnostics: Send + Sync {
    fn icon_not_found(&self, identifier: &str);
}

/// Production diagnostics: a `tracing` warning per miss
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl IconDiagnostics for TracingDiagnostics {
    fn icon_not_found(&self, identifier: &str) {
        warn!("ApiIcon not found: '{}'", identifier);
    }
}

impl<D: IconDiagnostics + ?Sized> IconDiagnostics for std::sync::Arc<D> {
    fn icon_not_found(&self, identifier: &str) {
        (**self).icon_not_found(identifier)
    }
}

/// Everything the display layer needs to draw an icon
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedIcon {
    /// Single-character glyph, or empty when unresolved
    pub glyph: String,
    /// Per-package font family, derived even when resolution failed
    pub font_family: String,
    /// Font size in pixels
    pub size: f32,
}

impl ResolvedIcon {
    pub fn is_empty(&self) -> bool {
        self.glyph.is_empty()
    }
}

/// Parse a hexadecimal code point into a Unicode scalar value.
///
/// Accepts surrounding whitespace and an optional `0x` prefix. Anything that
/// is not valid hex, or is not a scalar value (surrogates, > U+10FFFF),
/// yields `None`.
pub fn parse_code_point(hex: &str) -> Option<char> {
    let hex = hex.trim();
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    u32::from_str_radix(digits, 16).ok().and_then(char::from_u32)
}

/// Resolves icon identifiers against a package map snapshot
#[derive(Debug, Clone, Default)]
pub struct IconResolver<D = TracingDiagnostics> {
    diagnostics: D,
}

impl IconResolver<TracingDiagnostics> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: IconDiagnostics> IconResolver<D> {
    pub fn with_diagnostics(diagnostics: D) -> Self {
        Self { diagnostics }
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Find the stored hex code point for an identifier
    pub fn lookup<'m>(packages: &'m IconPackageMap, id: &IconIdentifier<'_>) -> Option<&'m str> {
        packages
            .get(id.package()?)?
            .icon(id.name()?)?
            .variant(id.variant()?)
    }

    /// Resolve an identifier to its glyph, empty on any miss.
    ///
    /// A non-empty identifier that resolves to nothing is reported to the
    /// diagnostics sink once per call.
    pub fn glyph(&self, identifier: &str, packages: &IconPackageMap) -> String {
        let id = IconIdentifier::parse(identifier);

        let glyph = Self::lookup(packages, &id)
            .and_then(parse_code_point)
            .map(String::from)
            .unwrap_or_default();

        if glyph.is_empty() && !id.is_empty() {
            self.diagnostics.icon_not_found(identifier);
        }

        glyph
    }

    /// Resolve an identifier together with its font family and size
    pub fn resolve(
        &self,
        identifier: &str,
        packages: &IconPackageMap,
        size: Option<f32>,
    ) -> ResolvedIcon {
        let package = IconIdentifier::parse(identifier).package().unwrap_or_default();

        ResolvedIcon {
            glyph: self.glyph(identifier, packages),
            font_family: font_family(package),
            size: size.unwrap_or(DEFAULT_ICON_SIZE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::IconPackage;
    use mockall::predicate::eq;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Default)]
    struct CapturingDiagnostics {
        messages: Mutex<Vec<String>>,
    }

    impl IconDiagnostics for CapturingDiagnostics {
        fn icon_not_found(&self, identifier: &str) {
            self.messages.lock().push(identifier.to_string());
        }
    }

    fn sample_map() -> IconPackageMap {
        let mut map = IconPackageMap::new();
        map.insert(
            "mdi",
            IconPackage::new("Material Design", "mdi")
                .with_icon("home", [("outline", "e900")])
                .with_icon("broken", [("outline", "zz"), ("surrogate", "d800")]),
        );
        map
    }

    fn capturing() -> (IconResolver<Arc<CapturingDiagnostics>>, Arc<CapturingDiagnostics>) {
        let sink = Arc::new(CapturingDiagnostics::default());
        (IconResolver::with_diagnostics(sink.clone()), sink)
    }

    #[test]
    fn test_resolves_present_icon() {
        let (resolver, sink) = capturing();
        let glyph = resolver.glyph("mdi:home:outline", &sample_map());

        assert_eq!(glyph, "\u{e900}");
        assert!(sink.messages.lock().is_empty());
    }

    #[test]
    fn test_unknown_variant_warns_once() {
        let mut diagnostics = MockIconDiagnostics::new();
        diagnostics
            .expect_icon_not_found()
            .with(eq("mdi:home:solid"))
            .times(1)
            .return_const(());

        let resolver = IconResolver::with_diagnostics(diagnostics);
        assert_eq!(resolver.glyph("mdi:home:solid", &sample_map()), "");
    }

    #[test]
    fn test_unknown_package_and_name() {
        let (resolver, sink) = capturing();
        let map = sample_map();

        assert_eq!(resolver.glyph("fa:home:outline", &map), "");
        assert_eq!(resolver.glyph("mdi:garage:outline", &map), "");
        assert_eq!(
            *sink.messages.lock(),
            vec!["fa:home:outline".to_string(), "mdi:garage:outline".to_string()]
        );
    }

    #[test]
    fn test_empty_identifier_is_silent() {
        let mut diagnostics = MockIconDiagnostics::new();
        diagnostics.expect_icon_not_found().never();

        let resolver = IconResolver::with_diagnostics(diagnostics);
        let icon = resolver.resolve("", &sample_map(), None);
        assert!(icon.is_empty());
    }

    #[test]
    fn test_short_identifier_is_a_miss() {
        let (resolver, sink) = capturing();
        assert_eq!(resolver.glyph("mdi:home", &sample_map()), "");
        assert_eq!(*sink.messages.lock(), vec!["mdi:home".to_string()]);
    }

    #[test]
    fn test_invalid_code_points_are_misses() {
        let (resolver, sink) = capturing();
        let map = sample_map();

        assert_eq!(resolver.glyph("mdi:broken:outline", &map), "");
        assert_eq!(resolver.glyph("mdi:broken:surrogate", &map), "");
        assert_eq!(sink.messages.lock().len(), 2);
    }

    #[test]
    fn test_repeated_resolution_is_stable_and_not_deduplicated() {
        let (resolver, sink) = capturing();
        let map = sample_map();

        let first = resolver.resolve("mdi:home:solid", &map, Some(16.0));
        let second = resolver.resolve("mdi:home:solid", &map, Some(16.0));
        assert_eq!(first, second);
        assert_eq!(sink.messages.lock().len(), 2);

        assert_eq!(
            resolver.glyph("mdi:home:outline", &map),
            resolver.glyph("mdi:home:outline", &map)
        );
    }

    #[test]
    fn test_font_family_derived_on_miss() {
        let (resolver, _sink) = capturing();
        let icon = resolver.resolve("fa:nothing:here", &sample_map(), None);

        assert!(icon.is_empty());
        assert_eq!(icon.font_family, "inventree-icon-font-fa");
        assert_eq!(icon.size, DEFAULT_ICON_SIZE);
    }

    #[test]
    fn test_parse_code_point() {
        assert_eq!(parse_code_point("e900"), Some('\u{e900}'));
        assert_eq!(parse_code_point(" 0x1F514 "), Some('\u{1F514}'));
        assert_eq!(parse_code_point("41"), Some('A'));
        assert_eq!(parse_code_point(""), None);
        assert_eq!(parse_code_point("+41"), None);
        assert_eq!(parse_code_point("xyz"), None);
        assert_eq!(parse_code_point("110000"), None);
    }
}
