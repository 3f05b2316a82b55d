//! Main InvenTree window
//!
//! - Header: title + subscription toggle for the configured part
//! - Icon gallery: every installed icon, drawn through `ApiIcon`
//! - Report templates: the template panel rendered as a table
//! - Notification stack in the bottom right corner

use chrono::Utc;
use gpui::prelude::FluentBuilder;
use gpui::*;
use inventree_ui_core::{ActiveNotification, IconPackageMap};
use inventree_ui::{
    components::{ApiIcon, GpuiTableRenderer, StarredToggleButton},
    layout, AppServices, Theme,
};
use std::sync::Arc;
use std::time::Duration;

pub struct InvenTreeWindow {
    theme: Theme,
    services: Arc<AppServices>,
    /// Icon snapshot used for the current frame
    packages: Arc<IconPackageMap>,
    focus_handle: FocusHandle,
}

impl InvenTreeWindow {
    pub fn new(cx: &mut ViewContext<Self>, theme: Theme, services: Arc<AppServices>) -> Self {
        let focus_handle = cx.focus_handle();
        let packages = services.icons.snapshot();

        // Poll background state (icon snapshots, fetched records, notifications)
        cx.spawn(|view, mut cx| async move {
            loop {
                cx.background_executor()
                    .timer(Duration::from_millis(100))
                    .await;

                let result = view.update(&mut cx, |this, cx| {
                    this.refresh();
                    cx.notify();
                });
                if result.is_err() {
                    break;
                }
            }
        })
        .detach();

        Self {
            theme,
            services,
            packages,
            focus_handle,
        }
    }

    fn refresh(&mut self) {
        self.packages = self.services.icons.snapshot();
        self.services.notifications.prune(Utc::now());
    }

    fn handle_toggle(&mut self, cx: &mut ViewContext<Self>) {
        if self.services.toggle_subscription().is_none() {
            tracing::debug!("Subscription toggle ignored");
        }
        cx.notify();
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    fn render_header(&self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let subscription = self.services.state.read().subscription;

        div()
            .w_full()
            .h(px(layout::HEADER_HEIGHT))
            .px(px(16.0))
            .flex()
            .items_center()
            .justify_between()
            .bg(rgb(colors.surface))
            .border_b_1()
            .border_color(rgb(colors.border))
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child("InvenTree"),
            )
            .when_some(subscription, |el, target| {
                el.child(
                    div()
                        .flex()
                        .items_center()
                        .gap(px(8.0))
                        .child(
                            div()
                                .text_sm()
                                .text_color(rgb(colors.text_secondary))
                                .child(format!("Part #{}", target.pk())),
                        )
                        .child(
                            StarredToggleButton::new("starred-toggle", target.starred(), colors.clone())
                                .on_click(cx.listener(|this, _, cx| {
                                    this.handle_toggle(cx);
                                })),
                        ),
                )
            })
    }

    fn render_section_title(&self, title: &str) -> impl IntoElement {
        div()
            .text_size(px(self.theme.typography.header_size))
            .font_weight(FontWeight::SEMIBOLD)
            .pb(px(self.theme.spacing.sm))
            .child(title.to_string())
    }

    fn render_icon_gallery(&self) -> impl IntoElement {
        let colors = &self.theme.colors;
        let icon_size = self.services.config.icon_size;
        let identifiers = self.packages.identifiers();

        let body = if identifiers.is_empty() {
            div()
                .text_sm()
                .text_color(rgb(colors.text_secondary))
                .child("No icon packages loaded")
        } else {
            div().flex().flex_row().flex_wrap().gap(px(8.0)).children(
                identifiers
                    .into_iter()
                    .take(layout::GALLERY_LIMIT)
                    .map(|id| {
                        div()
                            .w(px(layout::GALLERY_CELL_WIDTH))
                            .p(px(8.0))
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap(px(4.0))
                            .rounded(px(layout::BORDER_RADIUS))
                            .bg(rgb(colors.surface))
                            .child(ApiIcon::new(id.clone(), self.packages.clone()).size(icon_size))
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(rgb(colors.text_secondary))
                                    .overflow_hidden()
                                    .child(id),
                            )
                    }),
            )
        };

        div()
            .flex()
            .flex_col()
            .child(self.render_section_title("Icons"))
            .child(body)
    }

    fn render_template_panel(&self) -> impl IntoElement {
        let table = {
            let state = self.services.state.read();
            let renderer = GpuiTableRenderer::new(&state.templates, &self.theme.colors);
            self.services.template_panel.render(&renderer)
        };

        div()
            .flex()
            .flex_col()
            .child(self.render_section_title("Report Templates"))
            .child(table)
    }

    fn render_notification(&self, active: &ActiveNotification) -> impl IntoElement {
        let colors = &self.theme.colors;
        let accent = colors.notification(active.notification.color);

        div()
            .w_full()
            .p(px(12.0))
            .flex()
            .flex_col()
            .gap(px(4.0))
            .rounded(px(layout::BORDER_RADIUS))
            .bg(rgb(colors.surface_elevated))
            .border_l_4()
            .border_color(rgb(accent))
            .child(
                div()
                    .text_sm()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child(active.notification.title.clone()),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(rgb(colors.text_secondary))
                    .child(active.notification.message.clone()),
            )
    }

    fn render_notifications(&self) -> impl IntoElement {
        let visible = self.services.notifications.visible();

        div()
            .absolute()
            .bottom(px(16.0))
            .right(px(16.0))
            .w(px(layout::NOTIFICATION_WIDTH))
            .flex()
            .flex_col()
            .gap(px(8.0))
            .children(visible.iter().map(|n| self.render_notification(n)))
    }
}

impl Render for InvenTreeWindow {
    fn render(&mut self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;

        div()
            .id("inventree-window")
            .key_context("InvenTreeWindow")
            .track_focus(&self.focus_handle)
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .bg(rgb(colors.panel_bg))
            .text_color(rgb(colors.text_primary))
            .child(self.render_header(cx))
            .child(
                div()
                    .id("content")
                    .flex_1()
                    .min_h_0()
                    .overflow_y_scroll()
                    .p(px(16.0))
                    .flex()
                    .flex_col()
                    .gap(px(24.0))
                    .child(self.render_icon_gallery())
                    .child(self.render_template_panel()),
            )
            .child(self.render_notifications())
    }
}
