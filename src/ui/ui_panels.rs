use eframe::egui::{Align, Layout, RichText, Ui};

use crate::config::plot::PLOT_CONFIG;
use crate::domain::Series;
use crate::models::PoolDistribution;
use crate::ui::ui_config::{UI_CONFIG, UI_TEXT};
use crate::ui::ui_plot_view::PlotVisibility;
use crate::ui::utils::{active_bin_caption, series_label};

/// What the user asked for from the header controls this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    None,
    Refresh,
}

fn legend_entry(ui: &mut Ui, series: Series, distribution: &PoolDistribution) {
    let color = match series {
        Series::Primary => PLOT_CONFIG.primary_color,
        Series::Secondary => PLOT_CONFIG.secondary_color,
    };
    ui.spacing_mut().item_spacing.x = 4.0;
    ui.label(RichText::new(UI_TEXT.legend_dot.as_str()).small().color(color));
    ui.label(
        RichText::new(series_label(series, &distribution.pair))
            .small()
            .color(UI_CONFIG.colors.label),
    );
}

/// Title on the left; legend, active bin caption and controls on the right.
pub fn render_header(
    ui: &mut Ui,
    distribution: &PoolDistribution,
    visibility: &mut PlotVisibility,
    seed: Option<u64>,
) -> HeaderAction {
    let mut action = HeaderAction::None;

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(UI_TEXT.heading.as_str())
                .size(20.0)
                .color(UI_CONFIG.colors.heading),
        );

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui
                .button(UI_TEXT.button_refresh.as_str())
                .on_hover_text(UI_TEXT.hover_refresh.as_str())
                .clicked()
            {
                action = HeaderAction::Refresh;
            }
            ui.checkbox(&mut visibility.tooltip, UI_TEXT.toggle_tooltip.as_str());
            ui.checkbox(
                &mut visibility.reference_line,
                UI_TEXT.toggle_reference_line.as_str(),
            );

            let seed_text = seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| UI_TEXT.label_unseeded.clone());
            ui.label(
                RichText::new(format!("{}: {}", UI_TEXT.label_seed, seed_text))
                    .small()
                    .color(UI_CONFIG.colors.subdued),
            );

            ui.separator();
            ui.label(
                RichText::new(active_bin_caption(
                    distribution.active_price,
                    &distribution.pair,
                ))
                .small()
                .color(UI_CONFIG.colors.subdued),
            );

            ui.add_space(16.0);
            // right_to_left: add the secondary entry first so ETH reads before WBTC.
            ui.horizontal(|ui| legend_entry(ui, Series::Secondary, distribution));
            ui.horizontal(|ui| legend_entry(ui, Series::Primary, distribution));
        });
    });

    action
}
