//! Icon packages and glyph resolution
//!
//! ```text
//! "mdi:home:outline"
//!    │
//!    ▼  IconIdentifier::parse
//! package ──► icon ──► variant ──► "e900" ──► U+E900
//!    │
//!    └─► font family "inventree-icon-font-mdi"
//! ```

mod identifier;
mod package;
mod resolver;
mod store;

pub use identifier::{IconIdentifier, IDENTIFIER_SEPARATOR};
pub use package::{
    font_family, FontFace, FontSource, IconEntry, IconPackage, IconPackageMap,
    FONT_FAMILY_PREFIX,
};
pub use resolver::{
    parse_code_point, IconDiagnostics, IconResolver, ResolvedIcon, TracingDiagnostics,
    DEFAULT_ICON_SIZE,
};
pub use store::IconStore;
