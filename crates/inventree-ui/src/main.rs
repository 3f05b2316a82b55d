//! InvenTree Desktop Application
//!
//! GPUI-based desktop client showing installed icons, report templates and
//! part subscriptions of an InvenTree server.

use anyhow::Context;
use gpui::*;
use inventree_ui::{AppServices, Theme};
use inventree_ui_core::AppConfig;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod window;

use window::InvenTreeWindow;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("InvenTree UI v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load().context("failed to load configuration")?;
    info!("Server: {}", config.server);

    let services = Arc::new(AppServices::new(config).context("failed to start services")?);
    // Loading continues in the background; the window polls for results
    let _ = services.load_initial_data();

    App::new().run(move |cx: &mut AppContext| {
        let theme = Theme::light();

        let window_options = WindowOptions {
            titlebar: Some(TitlebarOptions {
                title: Some("InvenTree".into()),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            window_bounds: Some(WindowBounds::Windowed(Bounds {
                origin: point(px(100.0), px(100.0)),
                size: size(px(1100.0), px(760.0)),
            })),
            focus: true,
            show: true,
            kind: WindowKind::Normal,
            is_movable: true,
            window_background: WindowBackgroundAppearance::Opaque,
            app_id: Some("org.inventree.desktop".to_string()),
            ..Default::default()
        };

        let services = services.clone();
        if let Err(e) = cx.open_window(window_options, |cx| {
            cx.new_view(|cx| InvenTreeWindow::new(cx, theme, services))
        }) {
            error!("Failed to open main window: {}", e);
            cx.quit();
        }
    });

    Ok(())
}
