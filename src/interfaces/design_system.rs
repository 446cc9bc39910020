use eframe::egui;

/// Dark control-room palette shared by every view.
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(11, 13, 18); // #0B0D12
    pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(11, 13, 18);
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(23, 28, 36); // #171C24
    pub const BG_CARD_HOVER: egui::Color32 = egui::Color32::from_rgb(30, 36, 45);

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(38, 198, 218); // Teal
    pub const ACCENT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(128, 222, 234);

    // Status
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(0, 200, 83); // #00C853
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(255, 61, 87); // #FF3D57
    pub const WARNING: egui::Color32 = egui::Color32::from_rgb(255, 171, 0); // #FFAB00

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(236, 242, 248);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(165);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(105);

    // Heatmap neutral cell (no trading activity that day)
    pub const HEATMAP_IDLE: egui::Color32 = egui::Color32::from_rgb(32, 38, 46);

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(46, 53, 62);

    // --- Metrics ---

    pub const ROUNDING_MEDIUM: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    // --- Styles ---

    /// Standard visual style for the application.
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_SECONDARY);
        visuals.widgets.inactive.weak_bg_fill = Self::BG_CARD;
        visuals.widgets.inactive.bg_fill = Self::BG_CARD;

        visuals.widgets.hovered.bg_fill = Self::BG_CARD_HOVER;
        visuals.widgets.active.bg_fill = Self::ACCENT_SECONDARY;

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    /// Standard card styling.
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Main layout frame.
    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }

    /// Green for gains, red for losses.
    pub fn pnl_color(value: f64) -> egui::Color32 {
        if value >= 0.0 {
            Self::SUCCESS
        } else {
            Self::DANGER
        }
    }
}
