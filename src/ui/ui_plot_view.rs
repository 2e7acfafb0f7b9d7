use eframe::egui::Ui;
use egui_plot::{AxisHints, GridMark, Plot, VPlacement};
use serde::{Deserialize, Serialize};

use crate::config::plot::PLOT_CONFIG;
use crate::domain::Series;
use crate::models::PoolDistribution;
use crate::ui::plot_layers::{
    ActivePriceLayer, HoverTooltipLayer, LayerContext, PlotLayer, SeriesBarsLayer,
};
use crate::ui::ui_config::UI_TEXT;
use crate::ui::utils::{axis_tick_prices, axis_tick_stride, format_price};

/// Which optional overlays are drawn. Persisted between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotVisibility {
    pub reference_line: bool,
    pub tooltip: bool,
}

impl Default for PlotVisibility {
    fn default() -> Self {
        Self {
            reference_line: true,
            tooltip: true,
        }
    }
}

#[derive(Default)]
pub struct PlotView;

// --- LAYER STACK ---
// Bars first, overlays on top in draw order.
fn build_layers(visibility: &PlotVisibility) -> Vec<Box<dyn PlotLayer>> {
    let mut layers: Vec<Box<dyn PlotLayer>> = vec![
        Box::new(SeriesBarsLayer {
            series: Series::Primary,
        }),
        Box::new(SeriesBarsLayer {
            series: Series::Secondary,
        }),
    ];
    if visibility.reference_line {
        layers.push(Box::new(ActivePriceLayer));
    }
    if visibility.tooltip {
        layers.push(Box::new(HoverTooltipLayer));
    }
    layers
}

// Price axis: labels on the buckets picked by `axis_tick_prices`, 8 decimals.
fn create_price_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .formatter(|mark, _range| format_price(mark.value))
        .placement(VPlacement::Bottom)
}

impl PlotView {
    pub fn new() -> Self {
        Self
    }

    /// Visible x range: half a bucket of slack either side so edge bars are not clipped.
    fn calculate_x_bounds(distribution: &PoolDistribution) -> std::ops::RangeInclusive<f64> {
        let half_step = distribution.range.step() / 2.0;
        let first = distribution.range.price_at(0);
        let last = distribution.range.price_at(distribution.range.n_buckets() - 1);
        (first - half_step)..=(last + half_step)
    }

    fn calculate_y_max(distribution: &PoolDistribution) -> f64 {
        distribution.max_magnitude() * (1.0 + PLOT_CONFIG.plot_y_padding_pct)
    }

    pub fn show_my_plot(
        &mut self,
        ui: &mut Ui,
        distribution: &PoolDistribution,
        visibility: &PlotVisibility,
    ) {
        let x_bounds = Self::calculate_x_bounds(distribution);
        let y_max = Self::calculate_y_max(distribution);
        let tick_prices = axis_tick_prices(distribution.buckets());
        let tick_step = distribution.range.step() * axis_tick_stride(distribution.len()) as f64;

        Plot::new(UI_TEXT.plot_id.as_str())
            .height(PLOT_CONFIG.plot_height)
            .custom_x_axes(vec![create_price_axis()])
            .show_axes([true, false])
            .show_grid(false)
            .show_background(false)
            .label_formatter(|_, _| String::new())
            .x_grid_spacer(move |_input| {
                tick_prices
                    .iter()
                    .map(|&value| GridMark {
                        value,
                        step_size: tick_step,
                    })
                    .collect()
            })
            .allow_double_click_reset(false)
            .allow_scroll(false)
            .allow_drag(false)
            .allow_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(x_bounds);
                plot_ui.set_plot_bounds_y(0.0..=y_max);

                let ctx = LayerContext { distribution, y_max };

                for layer in build_layers(visibility) {
                    layer.render(plot_ui, &ctx);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlays_follow_visibility() {
        assert_eq!(build_layers(&PlotVisibility::default()).len(), 4);

        let bars_only = PlotVisibility {
            reference_line: false,
            tooltip: false,
        };
        assert_eq!(build_layers(&bars_only).len(), 2);

        let no_tooltip = PlotVisibility {
            tooltip: false,
            ..PlotVisibility::default()
        };
        assert_eq!(build_layers(&no_tooltip).len(), 3);
    }

    #[test]
    fn visibility_restores_missing_fields_as_shown() {
        let restored: PlotVisibility =
            serde_json::from_str(r#"{"reference_line":false}"#).unwrap();
        assert!(!restored.reference_line);
        assert!(restored.tooltip);
    }
}
