use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subdued: Color32,
    pub central_panel: Color32,
    pub card: Color32,
    pub card_border: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Card never grows wider than this
    pub max_content_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(75, 85, 99),    // gray-600
        heading: Color32::from_rgb(17, 24, 39),  // gray-900
        subdued: Color32::from_rgb(107, 114, 128), // gray-500
        central_panel: Color32::WHITE,
        card: Color32::WHITE,
        card_border: Color32::from_rgb(243, 244, 246), // gray-100
    },
    max_content_width: 1280.0,
};

impl UiConfig {
    /// Frame for the page background (generous padding)
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(32),
            ..Default::default()
        }
    }

    /// Frame for the chart card
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_border),
            inner_margin: Margin::same(24),
            corner_radius: CornerRadius::same(8),
            ..Default::default()
        }
    }
}
