use crate::application::monitor_app::MonitorApp;
use crate::application::snapshot::BotSnapshot;
use crate::domain::analytics::HeatmapDay;
use crate::interfaces::dashboard_components::metrics_card::render_mini_metric;
use crate::interfaces::design_system::DesignSystem;
use chrono::Datelike;
use eframe::egui;

/// Equity curve, drawdown curve, and the daily P&L calendar for the
/// selected bot.
pub fn render_analytics_view(ui: &mut egui::Ui, app: &mut MonitorApp) {
    let Some(snapshot) = app.selected_snapshot() else {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("Waiting for first equity fetch…")
                    .italics()
                    .color(DesignSystem::TEXT_MUTED),
            );
        });
        return;
    };

    ui.vertical(|ui| {
        ui.add_space(10.0);
        ui.heading(
            egui::RichText::new(format!("Analytics — {}", app.selected_bot.to_uppercase()))
                .size(22.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(16.0);

        egui::ScrollArea::vertical()
            .id_salt("analytics_scroll")
            .show(ui, |ui| {
                render_headline_metrics(ui, &snapshot);
                ui.add_space(24.0);

                ui.label(
                    egui::RichText::new("Equity Curve")
                        .size(17.0)
                        .strong(),
                );
                ui.add_space(8.0);
                render_equity_plot(ui, &snapshot);

                ui.add_space(24.0);
                ui.label(
                    egui::RichText::new("Drawdown")
                        .size(17.0)
                        .strong(),
                );
                ui.add_space(8.0);
                render_drawdown_plot(ui, &snapshot);

                ui.add_space(24.0);
                ui.label(
                    egui::RichText::new("Daily P&L Calendar")
                        .size(17.0)
                        .strong(),
                );
                ui.add_space(8.0);
                render_pnl_heatmap(ui, &snapshot.heatmap);
            });
    });
}

fn render_headline_metrics(ui: &mut egui::Ui, snapshot: &BotSnapshot) {
    let equity = snapshot.summary.as_ref().map(|s| s.equity).unwrap_or(0.0);
    let daily = snapshot.summary.as_ref().map(|s| s.daily_pnl).unwrap_or(0.0);
    let (wins, losses) = snapshot.win_loss_days();

    ui.columns(4, |cols| {
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
            "Max Drawdown",
            &format!("{:.2}%", snapshot.max_drawdown()),
            DesignSystem::DANGER,
        );
        render_mini_metric(
            &mut cols[3],
            "Win/Loss Days",
            &format!("{}/{}", wins, losses),
            DesignSystem::TEXT_SECONDARY,
        );
    });
}

fn render_equity_plot(ui: &mut egui::Ui, snapshot: &BotSnapshot) {
    if snapshot.equity_curve.is_empty() {
        ui.label(
            egui::RichText::new("Not enough data for equity curve.")
                .italics()
                .color(DesignSystem::TEXT_MUTED),
        );
        return;
    }

    let points: Vec<[f64; 2]> = snapshot
        .equity_curve
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.equity.map(|e| [i as f64, e]))
        .collect();

    let line = egui_plot::Line::new("Equity", egui_plot::PlotPoints::from(points))
        .color(DesignSystem::ACCENT_PRIMARY)
        .width(2.0);

    egui_plot::Plot::new("equity_curve_plot")
        .height(220.0)
        .show_axes([true, true])
        .show_grid([true, true])
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}

fn render_drawdown_plot(ui: &mut egui::Ui, snapshot: &BotSnapshot) {
    if snapshot.drawdown_curve.is_empty() {
        ui.label(
            egui::RichText::new("Not enough data for drawdown curve.")
                .italics()
                .color(DesignSystem::TEXT_MUTED),
        );
        return;
    }

    let points: Vec<[f64; 2]> = snapshot
        .drawdown_curve
        .iter()
        .enumerate()
        .map(|(i, p)| [i as f64, p.drawdown])
        .collect();

    let line = egui_plot::Line::new("Drawdown %", egui_plot::PlotPoints::from(points))
        .color(DesignSystem::DANGER)
        .width(2.0);

    egui_plot::Plot::new("drawdown_plot")
        .height(160.0)
        .show_axes([true, true])
        .show_grid([true, true])
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}

/// GitHub-style calendar grid: weeks as columns, weekdays as rows. Neutral
/// cells are days with no trading activity.
fn render_pnl_heatmap(ui: &mut egui::Ui, days: &[HeatmapDay]) {
    if days.is_empty() {
        ui.label(
            egui::RichText::new("No closed trades yet.")
                .italics()
                .color(DesignSystem::TEXT_MUTED),
        );
        return;
    }

    let max_abs = days
        .iter()
        .filter_map(|d| d.pnl)
        .fold(0.0_f64, |acc, p| acc.max(p.abs()))
        .max(f64::EPSILON);

    let cell = 14.0;
    let gap = 3.0;
    let step = cell + gap;

    // The first column may be a partial week.
    let lead = days[0].date.weekday().num_days_from_monday() as usize;
    let weeks = (lead + days.len()).div_ceil(7);

    egui::ScrollArea::horizontal()
        .id_salt("heatmap_scroll")
        .show(ui, |ui| {
            let size = egui::vec2(weeks as f32 * step, 7.0 * step);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
            let origin = response.rect.min;

            for (i, day) in days.iter().enumerate() {
                let slot = lead + i;
                let week = slot / 7;
                let dow = slot % 7;

                let pos = origin + egui::vec2(week as f32 * step, dow as f32 * step);
                let rect = egui::Rect::from_min_size(pos, egui::vec2(cell, cell));
                painter.rect_filled(rect, 2.0, cell_color(day, max_abs));
            }

            if let Some(pos) = response.hover_pos() {
                let rel = pos - origin;
                let week = (rel.x / step) as usize;
                let dow = (rel.y / step) as usize;
                let slot = week * 7 + dow;
                if slot >= lead {
                    if let Some(day) = days.get(slot - lead) {
                        let text = match day.pnl {
                            Some(pnl) => {
                                format!("{}  ${:+.2}  ({} trades)", day.date, pnl, day.trades)
                            }
                            None => format!("{}  no activity", day.date),
                        };
                        response.on_hover_text(text);
                    }
                }
            }
        });
}

fn cell_color(day: &HeatmapDay, max_abs: f64) -> egui::Color32 {
    match day.pnl {
        None => DesignSystem::HEATMAP_IDLE,
        Some(pnl) if pnl > 0.0 => {
            let intensity = (pnl / max_abs) as f32;
            DesignSystem::SUCCESS.linear_multiply(0.25 + 0.75 * intensity)
        }
        Some(pnl) if pnl < 0.0 => {
            let intensity = (pnl.abs() / max_abs) as f32;
            DesignSystem::DANGER.linear_multiply(0.25 + 0.75 * intensity)
        }
        // Traded but flat
        Some(_) => DesignSystem::TEXT_MUTED.linear_multiply(0.4),
    }
}
