use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// A labeled headline number inside a card frame.
pub fn render_metric_card(
    ui: &mut egui::Ui,
    title: &str,
    value: &str,
    subtitle: Option<&str>,
    value_color: egui::Color32,
) {
    let card_size = egui::vec2(180.0, 92.0);

    ui.allocate_ui_with_layout(card_size, egui::Layout::top_down(egui::Align::LEFT), |ui| {
        DesignSystem::card_frame().show(ui, |ui| {
            ui.set_width(150.0);
            ui.set_height(64.0);

            ui.label(
                egui::RichText::new(title.to_uppercase())
                    .size(10.0)
                    .color(DesignSystem::TEXT_MUTED)
                    .strong(),
            );

            ui.add_space(6.0);

            ui.label(
                egui::RichText::new(value)
                    .size(22.0)
                    .strong()
                    .color(value_color),
            );

            if let Some(sub) = subtitle {
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(sub)
                        .size(10.0)
                        .color(DesignSystem::TEXT_SECONDARY),
                );
            }
        });
    });
}

/// Compact label/value pair for dense metric rows.
pub fn render_mini_metric(ui: &mut egui::Ui, label: &str, value: &str, color: egui::Color32) {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(label.to_uppercase())
                .size(9.0)
                .color(DesignSystem::TEXT_MUTED),
        );
        ui.label(egui::RichText::new(value).size(16.0).strong().color(color));
    });
}
