//! InvenTree UI Core Library
//!
//! This crate provides the display-independent parts of the InvenTree UI:
//! - Icon package model and glyph resolution
//! - API endpoint plumbing and the HTTP update capability
//! - Notifications, the subscription toggle and the template panel
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     inventree-ui-core                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  icons/           - Packages, resolver, published store     │
//! │  api/             - Endpoints, ApiClient, HTTP client       │
//! │  notifications.rs - Notifier capability, in-memory center   │
//! │  subscription.rs  - Starred toggle for parts / categories   │
//! │  templates.rs     - Report template panel configuration     │
//! │  markup.rs        - Legacy HTML button / link helpers       │
//! │  config.rs        - AppConfig loading                       │
//! │  error.rs         - Error types                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod icons;
pub mod markup;
pub mod notifications;
pub mod subscription;
pub mod templates;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{Error, Result};

pub use api::{api_url, ApiClient, ApiEndpoint, HttpApiClient, ModelType};

pub use icons::{
    IconDiagnostics, IconEntry, IconIdentifier, IconPackage, IconPackageMap, IconResolver,
    IconStore, ResolvedIcon, TracingDiagnostics, DEFAULT_ICON_SIZE,
};

pub use notifications::{
    ActiveNotification, Notification, NotificationCenter, NotificationColor, Notifier,
};

pub use subscription::{
    ButtonColor, ButtonSize, ButtonVariant, SubscriptionTarget, SubscriptionToggle,
    ToggleAppearance, ToggleOutcome, TooltipAlignment,
};

pub use templates::{
    CellContent, FieldRenderer, FormField, TableRenderer, TemplatePanel, TemplateTableProps,
};
