use crate::application::commands::ModelAction;
use crate::application::monitor_app::MonitorApp;
use crate::domain::monitoring::ModelStage;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// ML model registry for the selected bot, with the three pass-through
/// actions: train a new model, approve a candidate, revoke a live model.
pub fn render_models_view(ui: &mut egui::Ui, app: &mut MonitorApp) {
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.heading(
            egui::RichText::new(format!("Models — {}", app.selected_bot.to_uppercase()))
                .size(22.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(egui::RichText::new("🧠 Train New Model").strong())
                .clicked()
            {
                app.send_model_action(ModelAction::Train);
            }
        });
    });
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

    if snapshot.models.is_empty() {
        ui.label(
            egui::RichText::new("No models registered for this bot.")
                .italics()
                .color(DesignSystem::TEXT_MUTED),
        );
        return;
    }

    let mut pending: Vec<ModelAction> = Vec::new();

    egui::ScrollArea::vertical()
        .id_salt("models_scroll")
        .show(ui, |ui| {
            for model in &snapshot.models {
                DesignSystem::card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());

                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(&model.model_id)
                                .size(15.0)
                                .strong()
                                .color(DesignSystem::TEXT_PRIMARY),
                        );

                        let stage_color = match model.stage {
                            ModelStage::Approved => DesignSystem::SUCCESS,
                            ModelStage::Candidate => DesignSystem::WARNING,
                            ModelStage::Training => DesignSystem::ACCENT_PRIMARY,
                            ModelStage::Revoked => DesignSystem::TEXT_MUTED,
                        };
                        ui.colored_label(stage_color, model.stage.to_string());

                        match model.accuracy {
                            Some(acc) => ui.label(
                                egui::RichText::new(format!("acc {:.1}%", acc * 100.0))
                                    .color(DesignSystem::TEXT_SECONDARY),
                            ),
                            None => ui.label(
                                egui::RichText::new("acc –").color(DesignSystem::TEXT_MUTED),
                            ),
                        };

                        if let Some(ts) = model.trained_at {
                            ui.label(
                                egui::RichText::new(format!(
                                    "trained {}",
                                    ts.format("%Y-%m-%d")
                                ))
                                .small()
                                .color(DesignSystem::TEXT_MUTED),
                            );
                        }

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            match model.stage {
                                ModelStage::Candidate => {
                                    if ui.button("Approve").clicked() {
                                        pending.push(ModelAction::Approve {
                                            model_id: model.model_id.clone(),
                                        });
                                    }
                                }
                                ModelStage::Approved => {
                                    if ui.button("Revoke").clicked() {
                                        pending.push(ModelAction::Revoke {
                                            model_id: model.model_id.clone(),
                                        });
                                    }
                                }
                                ModelStage::Training | ModelStage::Revoked => {}
                            }
                        });
                    });
                });
                ui.add_space(10.0);
            }
        });

    for action in pending {
        app.send_model_action(action);
    }
}
