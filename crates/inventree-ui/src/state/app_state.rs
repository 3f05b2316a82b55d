//! Backend services and state shared between the tokio runtime and the UI

use inventree_ui_core::{
    AppConfig, ApiClient, HttpApiClient, IconStore, ModelType, Notification, NotificationCenter,
    NotificationColor, Notifier, SubscriptionTarget, SubscriptionToggle, TemplatePanel,
};
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// How long load errors stay on screen
const ERROR_TIMEOUT: Duration = Duration::from_secs(10);

/// Data fetched in the background and read by the window on each frame
#[derive(Debug, Default)]
pub struct PanelState {
    /// Records listed by the report template panel
    pub templates: Vec<Value>,
    /// Part whose subscription toggle is shown
    pub subscription: Option<SubscriptionTarget>,
    /// A toggle request is in flight
    pub toggle_pending: bool,
}

/// Backend services used by the window
pub struct AppServices {
    pub config: AppConfig,
    pub runtime: Arc<Runtime>,
    pub api: Arc<dyn ApiClient>,
    pub icons: Arc<IconStore>,
    pub notifications: Arc<NotificationCenter>,
    pub subscription: Arc<SubscriptionToggle>,
    pub template_panel: Arc<TemplatePanel>,
    pub state: Arc<RwLock<PanelState>>,
}

impl AppServices {
    /// Create services talking to the configured server
    pub fn new(config: AppConfig) -> inventree_ui_core::Result<Self> {
        let api: Arc<dyn ApiClient> = Arc::new(HttpApiClient::new(&config)?);
        Self::with_api(config, api)
    }

    /// Create services around an existing API client
    pub fn with_api(config: AppConfig, api: Arc<dyn ApiClient>) -> inventree_ui_core::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("inventree-io")
            .enable_all()
            .build()?;

        let notifications = Arc::new(NotificationCenter::new());
        let subscription = Arc::new(SubscriptionToggle::new(api.clone(), notifications.clone()));

        Ok(Self {
            config,
            runtime: Arc::new(runtime),
            api,
            icons: Arc::new(IconStore::new()),
            notifications,
            subscription,
            template_panel: Arc::new(TemplatePanel::report()),
            state: Arc::new(RwLock::new(PanelState::default())),
        })
    }

    /// Fetch icon packages, template records and the subscription target
    pub fn load_initial_data(&self) -> JoinHandle<()> {
        let api = self.api.clone();
        let icons = self.icons.clone();
        let notifications = self.notifications.clone();
        let panel = self.template_panel.clone();
        let state = self.state.clone();
        let part = self.config.subscription_part;

        self.runtime.spawn(async move {
            if let Err(e) = icons.load(api.as_ref()).await {
                report_error(notifications.as_ref(), "Failed to load icons", &e);
            }

            match panel.fetch_records(api.as_ref()).await {
                Ok(records) => state.write().templates = records,
                Err(e) => report_error(notifications.as_ref(), "Failed to load templates", &e),
            }

            if let Some(pk) = part {
                match SubscriptionTarget::fetch(api.as_ref(), ModelType::Part, pk).await {
                    Ok(target) => state.write().subscription = Some(target),
                    Err(e) => report_error(notifications.as_ref(), "Failed to load part", &e),
                }
            }

            info!("Initial data loaded");
        })
    }

    /// Flip the subscription of the current part, if any.
    ///
    /// Returns `None` when there is nothing to toggle or a request is
    /// already running.
    pub fn toggle_subscription(&self) -> Option<JoinHandle<()>> {
        let target = {
            let mut state = self.state.write();
            if state.toggle_pending {
                return None;
            }
            let target = state.subscription?;
            state.toggle_pending = true;
            target
        };

        let toggle = self.subscription.clone();
        let state = self.state.clone();

        Some(self.runtime.spawn(async move {
            let on_success_state = state.clone();
            toggle
                .toggle(&target, move |starred| {
                    on_success_state.write().subscription = Some(target.with_starred(starred));
                })
                .await;
            state.write().toggle_pending = false;
        }))
    }
}

fn report_error(notifications: &dyn Notifier, title: &str, error: &inventree_ui_core::Error) {
    warn!("{}: {}", title, error);
    notifications.show(
        Notification::new(title, error.to_string())
            .with_color(NotificationColor::Red)
            .with_auto_close(ERROR_TIMEOUT),
    );
}
