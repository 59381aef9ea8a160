//! Application shell: the drawing and measuring panels side by side

use geosketch_core::DrawMode;

use crate::config::{ConfigManager, UiTheme};
use crate::panels::{MapPanel, MapPanelConfig};

/// Mode sets offered by the two panel variants
const DRAWING_MODES: &[DrawMode] = &DrawMode::ALL;
const MEASURE_MODES: &[DrawMode] = &[DrawMode::Line, DrawMode::Polygon, DrawMode::None];

pub struct GeosketchApp {
    config: ConfigManager,
    drawing: MapPanel,
    measure: MapPanel,
}

impl GeosketchApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = ConfigManager::new();
        apply_theme(&cc.egui_ctx, config.config().ui.theme);

        let drawing = MapPanel::new(
            &cc.egui_ctx,
            MapPanelConfig {
                title: "Drawing",
                modes: DRAWING_MODES,
                measure: false,
            },
            &config.config().drawing,
        );
        let measure = MapPanel::new(
            &cc.egui_ctx,
            MapPanelConfig {
                title: "Measure",
                modes: MEASURE_MODES,
                measure: true,
            },
            &config.config().measure,
        );

        Self {
            config,
            drawing,
            measure,
        }
    }
}

fn apply_theme(ctx: &egui::Context, theme: UiTheme) {
    match theme {
        UiTheme::Dark => ctx.set_visuals(egui::Visuals::dark()),
        UiTheme::Light => ctx.set_visuals(egui::Visuals::light()),
    }
}

impl eframe::App for GeosketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                self.drawing.show(&mut columns[0]);
                self.measure.show(&mut columns[1]);
            });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Remember the last map views for the next run
        let config = self.config.config_mut();
        config.drawing = self.drawing.view();
        config.measure = self.measure.view();

        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save config: {}", e);
        }
    }
}
