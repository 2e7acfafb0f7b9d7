use {
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, Key, RichText, ScrollArea},
    },
    rand::{SeedableRng, rngs::StdRng},
    serde::{Deserialize, Serialize},
};

use crate::{
    Cli,
    app::AppState,
    config::{DF, POOL, PoolSpec},
    models::PoolDistribution,
    ui::{
        HeaderAction, PlotView, PlotVisibility, UI_CONFIG, UI_TEXT, render_header,
        setup_custom_visuals,
    },
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) plot_visibility: PlotVisibility, // persists across sessions.
    #[serde(skip)]
    pub(crate) pool: PoolSpec,
    #[serde(skip)]
    pub(crate) seed: Option<u64>,
    #[serde(skip)]
    rng: Option<StdRng>,
    #[serde(skip)]
    pub(crate) plot_view: PlotView,
    #[serde(skip)]
    state: AppState,
}

impl Default for App {
    fn default() -> Self {
        Self {
            plot_visibility: PlotVisibility::default(),
            pool: POOL.clone(),
            seed: None,
            rng: None,
            plot_view: PlotView::new(),
            state: AppState::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.pool = match args.buckets {
            Some(n) => POOL.with_bucket_count(n),
            None => POOL.clone(),
        };
        app.seed = args.seed;
        app.rng = Some(match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        });

        // Generate once on mount; the buckets live as long as the window does.
        app.mount();
        app
    }

    fn mount(&mut self) {
        let Some(rng) = self.rng.as_mut() else {
            return;
        };
        self.state = match PoolDistribution::generate(&self.pool, rng) {
            Ok(distribution) => AppState::Ready(distribution),
            Err(e) => {
                log::error!("{}: {}", UI_TEXT.generation_failed, e);
                AppState::Failed(e)
            }
        };
    }

    /// Replace the held buckets with a fresh draw.
    pub(crate) fn refresh(&mut self) {
        if DF.log_refresh {
            log::info!("Refresh requested");
        }
        if let (AppState::Ready(distribution), Some(rng)) = (&mut self.state, self.rng.as_mut()) {
            distribution.regenerate(rng);
            return;
        }
        self.mount();
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        if ctx.input(|i| i.key_pressed(Key::R)) {
            self.refresh();
        }
    }

    /// Draws the card and reports whether a refresh was requested.
    fn render_card(&mut self, ctx: &Context) -> HeaderAction {
        let mut action = HeaderAction::None;

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    ui.set_max_width(UI_CONFIG.max_content_width);
                    UI_CONFIG.card_frame().show(ui, |ui| match &self.state {
                        AppState::Ready(distribution) => {
                            action = render_header(
                                ui,
                                distribution,
                                &mut self.plot_visibility,
                                self.seed,
                            );
                            ui.add_space(16.0);
                            self.plot_view
                                .show_my_plot(ui, distribution, &self.plot_visibility);
                        }
                        AppState::Failed(e) => {
                            ui.label(
                                RichText::new(UI_TEXT.heading.as_str())
                                    .size(20.0)
                                    .color(UI_CONFIG.colors.heading),
                            );
                            ui.label(format!("{}: {}", UI_TEXT.generation_failed, e));
                        }
                        AppState::Unmounted => {}
                    });
                });
            });

        action
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.handle_global_shortcuts(ctx);
        if self.render_card(ctx) == HeaderAction::Refresh {
            self.refresh();
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        // View settings only; bucket data is discarded with the window.
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}
