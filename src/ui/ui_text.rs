use std::sync::LazyLock;

pub const ICON_REFRESH: &str = "⟳";
pub const ICON_DOT: &str = "●";

pub struct UiText {
    // --- Header ---
    pub heading: String,
    pub active_bin_prefix: String,

    // --- Toolbar ---
    pub button_refresh: String,
    pub hover_refresh: String,
    pub toggle_reference_line: String,
    pub toggle_tooltip: String,
    pub label_seed: String,
    pub label_unseeded: String,

    // --- Plot ---
    pub plot_id: String,
    pub reference_line_label: String,
    pub legend_dot: String,

    // --- Errors ---
    pub generation_failed: String,
}

// THE SINGLETON
pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    heading: "Pool Distribution".to_string(),
    active_bin_prefix: "Active Bin:".to_string(),

    button_refresh: ICON_REFRESH.to_string() + " Refresh",
    hover_refresh: "Draw new magnitudes (R)".to_string(),
    toggle_reference_line: "Show active bin".to_string(),
    toggle_tooltip: "Tooltips".to_string(),
    label_seed: "Seed".to_string(),
    label_unseeded: "random".to_string(),

    plot_id: "pool_distribution_plot".to_string(),
    reference_line_label: "Active Bin".to_string(),
    legend_dot: ICON_DOT.to_string(),

    generation_failed: "Could not generate pool distribution".to_string(),
});
