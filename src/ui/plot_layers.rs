use eframe::egui::{Align2, Color32, Id, LayerId, Order::Tooltip, RichText, Ui};

#[allow(deprecated)]
use eframe::egui::show_tooltip_at_pointer;

use egui_plot::{Bar, BarChart, LineStyle, PlotPoint, PlotUi, Text, VLine};

use crate::config::plot::PLOT_CONFIG;
use crate::domain::Series;
use crate::models::PoolDistribution;
use crate::ui::ui_config::UI_TEXT;
use crate::ui::utils::{series_label, tooltip_rows};

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub distribution: &'a PoolDistribution,
    /// Top of the visible y range (tallest bar plus padding)
    pub y_max: f64,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

fn series_color(series: Series) -> Color32 {
    match series {
        Series::Primary => PLOT_CONFIG.primary_color,
        Series::Secondary => PLOT_CONFIG.secondary_color,
    }
}

// ============================================================================
// 1. BARS (one chart per side of the pool)
// ============================================================================
pub struct SeriesBarsLayer {
    pub series: Series,
}

impl PlotLayer for SeriesBarsLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let dist = ctx.distribution;
        let width = dist.range.step() * PLOT_CONFIG.bar_width_pct;
        let min_height = dist.max_magnitude() * PLOT_CONFIG.min_bar_height_pct;
        let color = series_color(self.series);

        // Bars are centred on their bucket price, like a category axis.
        let bars: Vec<Bar> = dist
            .series(self.series)
            .into_iter()
            .map(|(price, value)| {
                Bar::new(price, value.max(min_height))
                    .width(width)
                    .fill(color)
            })
            .collect();

        if bars.is_empty() {
            return;
        }

        let name = series_label(self.series, &dist.pair);
        plot_ui.bar_chart(BarChart::new(name, bars).color(color));
    }
}

// ============================================================================
// 2. ACTIVE PRICE MARKER (dashed reference line + label)
// ============================================================================
pub struct ActivePriceLayer;

impl PlotLayer for ActivePriceLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let x = ctx.distribution.active_price;

        plot_ui.vline(
            VLine::new("", x)
                .color(PLOT_CONFIG.reference_line_color)
                .width(PLOT_CONFIG.reference_line_width)
                .style(LineStyle::Dashed {
                    length: PLOT_CONFIG.reference_dash_length,
                }),
        );

        plot_ui.text(
            Text::new(
                "",
                PlotPoint::new(x, ctx.y_max),
                RichText::new(UI_TEXT.reference_line_label.as_str())
                    .size(PLOT_CONFIG.reference_label_size)
                    .color(PLOT_CONFIG.reference_label_color),
            )
            .anchor(Align2::CENTER_TOP),
        );
    }
}

// ============================================================================
// 3. HOVER TOOLTIP (price + whichever side is present)
// ============================================================================
pub struct HoverTooltipLayer;

impl PlotLayer for HoverTooltipLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(pointer) = plot_ui.pointer_coordinate() else {
            return;
        };
        if pointer.y < 0.0 || pointer.y > ctx.y_max {
            return;
        }
        let dist = ctx.distribution;
        let Some(bucket) = dist.bucket_near(pointer.x) else {
            return;
        };

        let rows = tooltip_rows(bucket, &dist.pair);
        let value_color = series_color(bucket.series());
        let tooltip_layer = LayerId::new(Tooltip, Id::new("bucket_tooltips"));

        #[allow(deprecated)]
        show_tooltip_at_pointer(
            plot_ui.ctx(),
            tooltip_layer,
            Id::new("bucket_tooltip"),
            |ui: &mut Ui| {
                for (idx, (heading, value)) in rows.iter().enumerate() {
                    if idx > 0 {
                        ui.add_space(6.0);
                    }
                    ui.label(
                        RichText::new(heading)
                            .small()
                            .color(PLOT_CONFIG.color_text_subdued),
                    );
                    // First row is the price, the rest are magnitudes.
                    let color = if idx == 0 {
                        PLOT_CONFIG.color_text_primary
                    } else {
                        value_color
                    };
                    ui.label(RichText::new(value).strong().color(color));
                }
            },
        );
    }
}
