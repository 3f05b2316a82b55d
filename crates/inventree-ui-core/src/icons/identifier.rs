//! Colon-delimited icon identifiers (`package:name:variant`)

use std::fmt;

/// Separator between the identifier parts
pub const IDENTIFIER_SEPARATOR: char = ':';

/// A borrowed, positionally split icon identifier.
///
/// Arity is not validated: parts beyond the third are ignored and missing
/// parts are `None`, which later degrades to a lookup miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconIdentifier<'a> {
    raw: &'a str,
    package: Option<&'a str>,
    name: Option<&'a str>,
    variant: Option<&'a str>,
}

impl<'a> IconIdentifier<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let mut parts = raw.split(IDENTIFIER_SEPARATOR);

        Self {
            raw,
            package: parts.next(),
            name: parts.next(),
            variant: parts.next(),
        }
    }

    /// The identifier exactly as it was given
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    pub fn package(&self) -> Option<&'a str> {
        self.package
    }

    pub fn name(&self) -> Option<&'a str> {
        self.name
    }

    pub fn variant(&self) -> Option<&'a str> {
        self.variant
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// True when all three parts are present
    pub fn is_complete(&self) -> bool {
        self.package.is_some() && self.name.is_some() && self.variant.is_some()
    }
}

impl fmt::Display for IconIdentifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}
