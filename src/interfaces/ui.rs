use crate::application::monitor_app::{MonitorApp, ViewTab};
use crate::interfaces::dashboard_components::analytics_view::render_analytics_view;
use crate::interfaces::dashboard_components::models_view::render_models_view;
use crate::interfaces::dashboard_components::overview::render_overview;
use crate::interfaces::dashboard_components::positions_view::render_positions_view;
use crate::interfaces::design_system::DesignSystem;
use chrono::Utc;
use eframe::egui;

/// Applied once at startup from the eframe creation context.
pub fn configure_style(ctx: &egui::Context) {
    ctx.set_visuals(DesignSystem::theme());
}

const VIEW_TABS: [(ViewTab, &str); 4] = [
    (ViewTab::Overview, "Overview"),
    (ViewTab::Analytics, "Analytics"),
    (ViewTab::Positions, "Positions"),
    (ViewTab::Models, "Models"),
];

const LEVEL_FILTERS: [&str; 3] = ["INFO", "WARN", "ERROR"];

impl eframe::App for MonitorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain mirrored logs before painting.
        MonitorApp::update(self);

        // --- Top status bar: title, bot tabs, connection state ---
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🛰 Botwatch");
                ui.separator();

                let bots: Vec<String> = self.client.bots().to_vec();
                for bot in bots {
                    let selected = self.selected_bot == bot;
                    if ui.selectable_label(selected, bot.to_uppercase()).clicked() {
                        self.selected_bot = bot;
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("UTC {}", Utc::now().format("%H:%M:%S")))
                            .small()
                            .color(DesignSystem::TEXT_MUTED),
                    );
                    ui.separator();

                    let status = self
                        .selected_snapshot()
                        .and_then(|s| s.summary.map(|b| b.running));
                    let (text, color) = match status {
                        Some(true) => ("● ONLINE", DesignSystem::SUCCESS),
                        Some(false) => ("● OFFLINE", DesignSystem::DANGER),
                        None => ("● CONNECTING", DesignSystem::WARNING),
                    };
                    ui.label(egui::RichText::new(text).small().color(color));
                });
            });
        });

        // --- Left sidebar: mirrored system logs ---
        egui::SidePanel::left("log_panel")
            .default_width(340.0)
            .min_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.vertical(|ui| {
                    ui.heading("System Logs");

                    ui.horizontal(|ui| {
                        if ui
                            .selectable_label(self.log_level_filter.is_none(), "All")
                            .clicked()
                        {
                            self.log_level_filter = None;
                        }
                        for level in LEVEL_FILTERS {
                            let active = self.log_level_filter.as_deref() == Some(level);
                            if ui.selectable_label(active, level).clicked() {
                                self.log_level_filter = Some(level.to_string());
                            }
                        }
                    });
                    ui.separator();

                    egui::ScrollArea::vertical()
                        .auto_shrink([false, true])
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for line in &self.log_lines {
                                if let Some(filter) = &self.log_level_filter {
                                    if !line.contains(filter.as_str()) {
                                        continue;
                                    }
                                }

                                let color = if line.contains("ERROR") {
                                    DesignSystem::DANGER
                                } else if line.contains("WARN") {
                                    DesignSystem::WARNING
                                } else {
                                    DesignSystem::TEXT_SECONDARY
                                };
                                ui.label(egui::RichText::new(line).small().color(color));
                            }
                        });
                });
            });

        // --- Central panel: view tabs + active view ---
        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for (tab, label) in VIEW_TABS {
                        let selected = self.active_view == tab;
                        if ui.selectable_label(selected, label).clicked() {
                            self.active_view = tab;
                        }
                    }
                });
                ui.separator();

                match self.active_view {
                    ViewTab::Overview => render_overview(ui, self),
                    ViewTab::Analytics => render_analytics_view(ui, self),
                    ViewTab::Positions => render_positions_view(ui, self),
                    ViewTab::Models => render_models_view(ui, self),
                }
            });

        // Keep logs and poll results flowing onto the screen.
        ctx.request_repaint();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.client.shutdown();
    }
}
