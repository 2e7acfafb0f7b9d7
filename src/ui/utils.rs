use eframe::egui::{Context, Visuals};
use strum::IntoEnumIterator;

use crate::config::PairLabels;
use crate::config::plot::PLOT_CONFIG;
use crate::domain::{Bucket, Series};
use crate::ui::ui_config::{UI_CONFIG, UI_TEXT};

/// Fixed-precision price/magnitude text, matching the axis and tooltip (8 decimals).
pub fn format_price(value: f64) -> String {
    format!("{:.*}", PLOT_CONFIG.axis_label_decimals, value)
}

/// Number of unlabelled buckets skipped between two labelled ticks.
pub fn axis_tick_interval(bucket_count: usize) -> usize {
    bucket_count / PLOT_CONFIG.axis_tick_divisions
}

/// Distance in buckets from one labelled tick to the next. Never zero.
pub fn axis_tick_stride(bucket_count: usize) -> usize {
    axis_tick_interval(bucket_count) + 1
}

/// Bucket prices that receive an axis label, first bucket included.
pub fn axis_tick_prices(buckets: &[Bucket]) -> Vec<f64> {
    let stride = axis_tick_stride(buckets.len());
    buckets.iter().step_by(stride).map(|b| b.price).collect()
}

/// Token name shown for a series.
pub fn series_label(series: Series, pair: &PairLabels) -> &'static str {
    match series {
        Series::Primary => pair.primary,
        Series::Secondary => pair.secondary,
    }
}

/// "Active Bin: 27.8424411281 ETH per WBTC"
pub fn active_bin_caption(active_price: f64, pair: &PairLabels) -> String {
    format!("{} {} {}", UI_TEXT.active_bin_prefix, active_price, pair.quote_unit)
}

/// (heading, value) rows shown when hovering a bucket.
/// The price row always comes first; the value row belongs to whichever side is present.
pub fn tooltip_rows(bucket: &Bucket, pair: &PairLabels) -> Vec<(String, String)> {
    let mut rows = vec![(pair.price_label.to_string(), format_price(bucket.price))];
    for series in Series::iter() {
        if let Some(value) = bucket.value_for(series) {
            rows.push((series_label(series, pair).to_string(), format_price(value)));
        }
    }
    rows
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::light();

    visuals.window_fill = UI_CONFIG.colors.card;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
