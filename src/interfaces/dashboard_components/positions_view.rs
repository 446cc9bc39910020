use crate::application::monitor_app::MonitorApp;
use crate::domain::monitoring::PositionSide;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Open positions table for the selected bot.
pub fn render_positions_view(ui: &mut egui::Ui, app: &mut MonitorApp) {
    ui.add_space(10.0);
    ui.heading(
        egui::RichText::new(format!("Positions — {}", app.selected_bot.to_uppercase()))
            .size(22.0)
            .strong()
            .color(DesignSystem::TEXT_PRIMARY),
    );
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(16.0);

    let Some(snapshot) = app.selected_snapshot() else {
        ui.label(
            egui::RichText::new("Waiting for first fetch…")
                .italics()
                .color(DesignSystem::TEXT_MUTED),
        );
        return;
    };

    if snapshot.positions.is_empty() {
        ui.label(
            egui::RichText::new("No open positions.")
                .italics()
                .color(DesignSystem::TEXT_MUTED),
        );
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("positions_scroll")
        .show(ui, |ui| {
            egui::Grid::new("positions_grid")
                .striped(true)
                .min_col_width(90.0)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    ui.strong("Symbol");
                    ui.strong("Side");
                    ui.strong("Qty");
                    ui.strong("Entry");
                    ui.strong("Mark");
                    ui.strong("uP&L");
                    ui.strong("Opened");
                    ui.end_row();

                    for pos in &snapshot.positions {
                        ui.label(
                            egui::RichText::new(&pos.symbol)
                                .strong()
                                .color(DesignSystem::ACCENT_SECONDARY),
                        );

                        let side_color = match pos.side {
                            PositionSide::Long => DesignSystem::SUCCESS,
                            PositionSide::Short => DesignSystem::DANGER,
                        };
                        ui.colored_label(side_color, pos.side.to_string());

                        ui.label(format!("{:.4}", pos.quantity));
                        ui.label(format!("${:.2}", pos.entry_price));
                        ui.label(format!("${:.2}", pos.mark_price));
                        ui.colored_label(
                            DesignSystem::pnl_color(pos.unrealized_pnl),
                            format!("${:+.2}", pos.unrealized_pnl),
                        );

                        match pos.opened_at {
                            Some(ts) => ui.label(ts.format("%Y-%m-%d %H:%M").to_string()),
                            None => ui.label("-"),
                        };
                        ui.end_row();
                    }
                });
        });
}
