#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Windows release: hide console window
use log::LevelFilter;
use pool_distribution::{Cli, run_app};

#[cfg(not(target_arch = "wasm32"))]
use {
    clap::Parser,
    eframe::NativeOptions,
    pool_distribution::config::PERSISTENCE,
    std::{panic, path::PathBuf},
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, prelude::*};

const APP_TITLE: &str = "Pool Distribution";
const WINDOW_SIZE: [f32; 2] = [1280.0, 520.0];

/// (everything else, this crate). Quiet in release builds.
fn log_levels() -> (LevelFilter, LevelFilter) {
    if cfg!(debug_assertions) {
        (LevelFilter::Warn, LevelFilter::Info)
    } else {
        (LevelFilter::Error, LevelFilter::Error)
    }
}

// Browser entry point is `start`.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
fn init_browser_log() {
    let (global_level, crate_level) = log_levels();
    let _ = fern::Dispatch::new()
        .level(global_level)
        .level_for(env!("CARGO_CRATE_NAME"), crate_level)
        .chain(fern::Output::call(|record| {
            let msg = record.args().to_string().into();
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&msg),
                log::Level::Warn => web_sys::console::warn_1(&msg),
                log::Level::Info => web_sys::console::info_1(&msg),
                log::Level::Debug | log::Level::Trace => web_sys::console::log_1(&msg),
            }
        }))
        .apply();
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_browser_log();

    let canvas = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("the_canvas_id"))
        .ok_or("missing canvas element 'the_canvas_id'")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "'the_canvas_id' is not a canvas")?;

    // No command line in the browser: unseeded, default bucket count.
    let args = Cli::default();
    log::info!("Starting {} in the browser", APP_TITLE);

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(Box::new(run_app(cc, args)))),
        )
        .await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, crate_level) = log_levels();
    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("pool_distribution"), crate_level)
        .init();

    let args = Cli::parse();
    log::info!(
        "Starting {} (seed: {:?}, buckets: {:?})",
        APP_TITLE,
        args.seed,
        args.buckets
    );

    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(PERSISTENCE.app.state_path)),
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_logs_louder_than_dependencies_in_debug() {
        let (global_level, crate_level) = log_levels();
        if cfg!(debug_assertions) {
            assert_eq!((global_level, crate_level), (LevelFilter::Warn, LevelFilter::Info));
        } else {
            assert_eq!((global_level, crate_level), (LevelFilter::Error, LevelFilter::Error));
        }
    }
}
