//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Bars below the active price (ETH side)
    pub primary_color: Color32,
    /// Bars at or above the active price (WBTC side)
    pub secondary_color: Color32,

    // --- ACTIVE PRICE MARKER ---
    pub reference_line_color: Color32,
    pub reference_label_color: Color32,
    pub reference_line_width: f32,
    pub reference_dash_length: f32,
    pub reference_label_size: f32,

    /// Label one tick every `bucket_count / axis_tick_divisions` buckets
    pub axis_tick_divisions: usize,
    pub axis_label_decimals: usize,

    /// Bars are never drawn shorter than this (as a fraction of the tallest magnitude)
    /// so a tiny value still shows up.
    pub min_bar_height_pct: f64,
    /// 1.0 = bars touch, no gap between neighbours
    pub bar_width_pct: f64,

    pub plot_height: f32,
    /// Headroom above the tallest bar, leaves space for the "Active Bin" label
    pub plot_y_padding_pct: f64,

    // --- TEXT ---
    pub color_text_primary: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    primary_color: Color32::from_rgb(16, 185, 129), // Emerald #10b981
    secondary_color: Color32::from_rgb(139, 92, 246), // Purple #8b5cf6

    reference_line_color: Color32::from_rgb(148, 163, 184), // Slate #94a3b8
    reference_label_color: Color32::from_rgb(100, 116, 139), // #64748b
    reference_line_width: 1.0,
    reference_dash_length: 3.0,
    reference_label_size: 12.0,

    axis_tick_divisions: 10,
    axis_label_decimals: 8,

    min_bar_height_pct: 0.02,
    bar_width_pct: 1.0,

    plot_height: 300.0,
    plot_y_padding_pct: 0.15,

    color_text_primary: Color32::from_rgb(17, 24, 39), // gray-900
    color_text_subdued: Color32::from_rgb(75, 85, 99), // gray-600
};
