//! Part / category subscription ("starred") toggle

use crate::api::{api_url, ApiClient, ApiEndpoint, ModelType};
use crate::error::{Error, Result};
use crate::notifications::{Notification, NotificationColor, Notifier};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Id shared by all subscription update notifications
pub const SUBSCRIPTION_NOTIFICATION_ID: &str = "subscription-update";

/// How long subscription notifications stay visible
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_millis(5000);

/// Icon shown on the toggle button
pub const TOGGLE_ICON: &str = "bell";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonColor {
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Filled,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    Md,
    Lg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipAlignment {
    Top,
    Bottom,
}

/// Visual state of the toggle button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleAppearance {
    pub color: ButtonColor,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub tooltip: &'static str,
    pub tooltip_alignment: TooltipAlignment,
    pub icon: &'static str,
}

impl ToggleAppearance {
    pub fn for_state(starred: bool) -> Self {
        Self {
            color: if starred { ButtonColor::Green } else { ButtonColor::Blue },
            variant: if starred {
                ButtonVariant::Filled
            } else {
                ButtonVariant::Outline
            },
            size: ButtonSize::Lg,
            tooltip: if starred {
                "Unsubscribe from notifications"
            } else {
                "Subscribe to notifications"
            },
            tooltip_alignment: TooltipAlignment::Bottom,
            icon: TOGGLE_ICON,
        }
    }
}

/// A record whose subscription can be toggled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionTarget {
    model: ModelType,
    pk: u64,
    starred: bool,
}

impl SubscriptionTarget {
    /// Only parts and part categories support subscriptions
    pub fn new(model: ModelType, pk: u64, starred: bool) -> Result<Self> {
        endpoint_for(model)?;
        Ok(Self { model, pk, starred })
    }

    /// Fetch a record and read its current `starred` flag
    pub async fn fetch(api: &dyn ApiClient, model: ModelType, pk: u64) -> Result<Self> {
        let endpoint = endpoint_for(model)?;
        let record = api.get(&api_url(endpoint, Some(pk))).await?;
        let starred = record.get("starred").and_then(Value::as_bool).unwrap_or(false);
        Ok(Self { model, pk, starred })
    }

    pub fn model(&self) -> ModelType {
        self.model
    }

    pub fn pk(&self) -> u64 {
        self.pk
    }

    pub fn starred(&self) -> bool {
        self.starred
    }

    /// Same record with an updated starred flag
    pub fn with_starred(self, starred: bool) -> Self {
        Self { starred, ..self }
    }

    pub fn appearance(&self) -> ToggleAppearance {
        ToggleAppearance::for_state(self.starred)
    }

    pub fn url(&self) -> String {
        // Model type was checked on construction
        match endpoint_for(self.model) {
            Ok(endpoint) => api_url(endpoint, Some(self.pk)),
            Err(_) => String::new(),
        }
    }
}

fn endpoint_for(model: ModelType) -> Result<ApiEndpoint> {
    match model {
        ModelType::Part => Ok(ApiEndpoint::PartList),
        ModelType::PartCategory => Ok(ApiEndpoint::CategoryList),
        other => Err(Error::Unsupported(other.to_string())),
    }
}

/// Result of a toggle attempt; failures are reported, never propagated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Updated { starred: bool },
    Failed { message: String },
}

/// Sends the subscription update and reports the result to the user
pub struct SubscriptionToggle {
    api: Arc<dyn ApiClient>,
    notifier: Arc<dyn Notifier>,
}

impl SubscriptionToggle {
    pub fn new(api: Arc<dyn ApiClient>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, notifier }
    }

    /// Flip the subscription of `target`.
    ///
    /// `on_success` receives the new starred state and only runs when the
    /// server accepted the update.
    pub async fn toggle(
        &self,
        target: &SubscriptionTarget,
        on_success: impl FnOnce(bool) + Send,
    ) -> ToggleOutcome {
        let starred = target.starred;
        let body = json!({ "starred": !starred });

        match self.api.patch(&target.url(), body).await {
            Ok(_) => {
                info!(
                    "Subscription {} for {} {}",
                    if starred { "removed" } else { "added" },
                    target.model,
                    target.pk
                );

                self.notifier.hide(SUBSCRIPTION_NOTIFICATION_ID);
                self.notifier.show(
                    Notification::new(
                        "Subscription Updated",
                        format!("Subscription {}", if starred { "removed" } else { "added" }),
                    )
                    .with_id(SUBSCRIPTION_NOTIFICATION_ID)
                    .with_color(NotificationColor::Blue)
                    .with_auto_close(NOTIFICATION_TIMEOUT),
                );

                on_success(!starred);
                ToggleOutcome::Updated { starred: !starred }
            }
            Err(err) => {
                let message = match &err {
                    Error::Api(api_err) => api_err.to_string(),
                    other => other.to_string(),
                };
                warn!("Subscription update failed: {}", message);

                self.notifier.show(
                    Notification::new("Error", message.clone())
                        .with_color(NotificationColor::Red)
                        .with_auto_close(NOTIFICATION_TIMEOUT),
                );

                ToggleOutcome::Failed { message }
            }
        }
    }
}
