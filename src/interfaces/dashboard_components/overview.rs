use crate::application::monitor_app::MonitorApp;
use crate::interfaces::dashboard_components::metrics_card::render_mini_metric;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Fleet overview: one card per bot with its headline numbers.
pub fn render_overview(ui: &mut egui::Ui, app: &mut MonitorApp) {
    ui.add_space(10.0);
    ui.heading(
        egui::RichText::new("Fleet Overview")
            .size(22.0)
            .strong()
            .color(DesignSystem::TEXT_PRIMARY),
    );
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(16.0);

    let bots: Vec<String> = app.client.bots().to_vec();

    egui::ScrollArea::vertical()
        .id_salt("overview_scroll")
        .show(ui, |ui| {
            for bot in bots {
                let snapshot = app.client.snapshot_of(&bot);

                DesignSystem::card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());

                    match snapshot {
                        Some(snap) => {
                            let summary = snap.summary.clone();

                            ui.horizontal(|ui| {
                                let name = summary
                                    .as_ref()
                                    .map(|s| s.display_name().to_string())
                                    .unwrap_or_else(|| bot.to_uppercase());
                                ui.label(
                                    egui::RichText::new(name)
                                        .size(16.0)
                                        .strong()
                                        .color(DesignSystem::ACCENT_SECONDARY),
                                );

                                let running = summary.as_ref().is_some_and(|s| s.running);
                                let (dot, color) = if running {
                                    ("● RUNNING", DesignSystem::SUCCESS)
                                } else {
                                    ("● STOPPED", DesignSystem::DANGER)
                                };
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.label(egui::RichText::new(dot).small().color(color));
                                    },
                                );
                            });

                            ui.add_space(10.0);

                            let equity = summary.as_ref().map(|s| s.equity).unwrap_or(0.0);
                            let daily = summary.as_ref().map(|s| s.daily_pnl).unwrap_or(0.0);
                            let positions =
                                summary.as_ref().map(|s| s.open_positions).unwrap_or(0);
                            let (wins, losses) = snap.win_loss_days();

                            ui.columns(5, |cols| {
                                render_mini_metric(
                                    &mut cols[0],
                                    "Equity",
                                    &format!("${:.2}", equity),
                                    DesignSystem::TEXT_PRIMARY,
                                );
                                render_mini_metric(
                                    &mut cols[1],
                                    "Daily P&L",
                                    &format!("${:+.2}", daily),
                                    DesignSystem::pnl_color(daily),
                                );
                                render_mini_metric(
                                    &mut cols[2],
                                    "Max DD",
                                    &format!("{:.2}%", snap.max_drawdown()),
                                    DesignSystem::DANGER,
                                );
                                render_mini_metric(
                                    &mut cols[3],
                                    "Positions",
                                    &positions.to_string(),
                                    DesignSystem::TEXT_SECONDARY,
                                );
                                render_mini_metric(
                                    &mut cols[4],
                                    "Win/Loss Days",
                                    &format!("{}/{}", wins, losses),
                                    DesignSystem::TEXT_SECONDARY,
                                );
                            });

                            if let Some(err) = &snap.last_error {
                                ui.add_space(8.0);
                                ui.label(
                                    egui::RichText::new(format!("⚠ {}", err))
                                        .small()
                                        .color(DesignSystem::WARNING),
                                );
                            }
                        }
                        None => {
                            ui.label(
                                egui::RichText::new(format!("{} — waiting for first fetch…", bot))
                                    .italics()
                                    .color(DesignSystem::TEXT_MUTED),
                            );
                        }
                    }
                });

                ui.add_space(12.0);
            }
        });
}
