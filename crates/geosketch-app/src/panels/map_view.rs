//! Unified map panel
//!
//! One configurable component covers both page variants: the plain
//! drawing panel and the measuring panel (mode set plus optional
//! measurement tooltips).

use geosketch_core::{
    DrawMode, DrawState, Feature, FeatureStore, Geometry, MeasureTooltips, Measurement,
};
use walkers::{HttpTiles, Map, MapMemory, Position, lon_lat, sources::OpenStreetMap};

use super::toolbar;
use crate::config::MapViewConfig;
use crate::plugins::DrawPlugin;

/// Static configuration for one map panel
pub struct MapPanelConfig {
    pub title: &'static str,
    /// Modes offered in the selector
    pub modes: &'static [DrawMode],
    /// Show measurement tooltips and label finished features
    pub measure: bool,
}

/// A map viewport with a draw-mode selector and an owned feature store.
///
/// Each panel privately owns its tile source, pan/zoom memory, draw
/// interaction, and drawn features; panels do not share state.
pub struct MapPanel {
    cfg: MapPanelConfig,
    tiles: HttpTiles,
    memory: MapMemory,
    home: Position,
    draw: DrawState,
    features: FeatureStore,
    tooltips: Option<MeasureTooltips>,
}

impl MapPanel {
    pub fn new(ctx: &egui::Context, cfg: MapPanelConfig, view: &MapViewConfig) -> Self {
        let mut memory = MapMemory::default();
        if let Err(e) = memory.set_zoom(view.zoom) {
            tracing::warn!("Configured zoom {} is out of range: {:?}", view.zoom, e);
        }

        Self {
            tiles: HttpTiles::new(OpenStreetMap, ctx.clone()),
            memory,
            home: lon_lat(view.lon, view.lat),
            draw: DrawState::default(),
            features: FeatureStore::default(),
            tooltips: cfg.measure.then(MeasureTooltips::new),
            cfg,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(self.cfg.title);
            ui.separator();
            if let Some(mode) = toolbar::mode_selector(
                ui,
                self.cfg.title,
                self.draw.mode(),
                self.cfg.modes,
            ) {
                self.set_mode(mode);
            }
            if ui.button("Clear").clicked() {
                self.clear();
            }
            if !self.features.is_empty() {
                ui.label(format!("{} shapes", self.features.len()));
            }
        });

        let mut finished = Vec::new();
        let map = Map::new(Some(&mut self.tiles), &mut self.memory, self.home).with_plugin(
            DrawPlugin {
                draw: &mut self.draw,
                features: &self.features,
                tooltips: self.tooltips.as_mut(),
                finished: &mut finished,
            },
        );
        ui.add(map);

        for geometry in finished {
            self.push_feature(geometry);
        }
    }

    /// Switch the draw mode, detaching the previous interaction.
    ///
    /// Completed features are untouched; an in-progress sketch is
    /// discarded along with its tracking tooltip.
    pub fn set_mode(&mut self, mode: DrawMode) {
        if let Some(event) = self.draw.set_mode(mode)
            && let Some(tooltips) = &mut self.tooltips
        {
            tooltips.on_event(&event);
        }
    }

    /// Current map view, for persisting across runs
    pub fn view(&self) -> MapViewConfig {
        let center = self.memory.detached().unwrap_or(self.home);
        MapViewConfig {
            lon: center.x(),
            lat: center.y(),
            zoom: self.memory.zoom(),
        }
    }

    fn push_feature(&mut self, geometry: Geometry) {
        let mut feature = Feature::new(geometry);
        if self.cfg.measure
            && let Some(measurement) = Measurement::of(&feature.geometry)
        {
            feature = feature.with_label(measurement.to_string());
        }
        tracing::debug!(id = %feature.id, "feature completed");
        self.features.push(feature);
    }

    /// Remove all drawn shapes and their frozen measurement labels
    pub fn clear(&mut self) {
        self.features.clear();
        if let Some(tooltips) = &mut self.tooltips {
            tooltips.clear_retired();
        }
    }
}
