mod plot_layers;
mod ui_config;
mod ui_panels;
mod ui_plot_view;
mod ui_text;
pub mod utils;

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use ui_panels::{HeaderAction, render_header};
pub(crate) use utils::setup_custom_visuals;
pub use ui_plot_view::{PlotView, PlotVisibility};
