//! Tooltip overlays: frozen and tracking measurement labels, plus the
//! cursor-following help hint

use egui::epaint::{RectShape, TextShape};
use egui::{Color32, FontId, Pos2, Response, Ui, vec2};
use geosketch_core::{DrawMode, MeasureTooltips, TooltipStyle, help_text};
use walkers::Projector;

const FONT_SIZE: f32 = 12.0;
const LABEL_RISE: f32 = 12.0;
const HELP_OFFSET: egui::Vec2 = vec2(16.0, 4.0);
const TRACKING_BG: Color32 = Color32::from_rgb(40, 40, 40);
const STATIC_BG: Color32 = Color32::from_rgb(50, 90, 140);
const HELP_BG: Color32 = Color32::from_rgb(40, 40, 40);

/// Draw every measurement tooltip: the frozen labels of completed
/// gestures and the one tracking the in-progress sketch
pub fn draw_measure_tooltips(ui: &mut Ui, projector: &Projector, tooltips: &MeasureTooltips) {
    for tooltip in tooltips.retired() {
        if let Some(position) = tooltip.position {
            let anchor = projector.project(position).to_pos2();
            draw_label(ui, anchor, &tooltip.text, tooltip.style);
        }
    }

    let active = tooltips.active();
    if let Some(position) = active.position {
        let anchor = projector.project(position).to_pos2();
        draw_label(ui, anchor, &active.text, active.style);
    }
}

/// Cursor-following hint, hidden when the pointer leaves the viewport
pub fn draw_help_tooltip(ui: &mut Ui, response: &Response, mode: DrawMode, sketching: bool) {
    let Some(text) = help_text(mode, sketching) else {
        return;
    };
    let Some(mouse) = response.hover_pos() else {
        return;
    };

    let galley = ui.fonts(|f| {
        f.layout_no_wrap(
            text.to_owned(),
            FontId::proportional(FONT_SIZE),
            Color32::WHITE,
        )
    });
    let pos = mouse + HELP_OFFSET;
    let rect = galley.rect.translate(pos.to_vec2()).expand(4.0);
    ui.painter()
        .add(RectShape::filled(rect, 4.0, HELP_BG.gamma_multiply(0.8)));
    ui.painter()
        .add(TextShape::new(pos, galley, Color32::PLACEHOLDER));
}

fn draw_label(ui: &mut Ui, anchor: Pos2, text: &str, style: TooltipStyle) {
    if text.is_empty() {
        return;
    }

    let galley = ui.fonts(|f| {
        f.layout_no_wrap(
            text.to_owned(),
            FontId::proportional(FONT_SIZE),
            Color32::WHITE,
        )
    });

    // Centered above the anchor
    let size = galley.rect.size();
    let pos = anchor + vec2(-size.x / 2.0, -size.y - LABEL_RISE);
    let rect = galley.rect.translate(pos.to_vec2()).expand(4.0);

    let bg = match style {
        TooltipStyle::Tracking => TRACKING_BG.gamma_multiply(0.7),
        TooltipStyle::Static => STATIC_BG,
    };

    ui.painter().add(RectShape::filled(rect, 4.0, bg));
    ui.painter()
        .add(TextShape::new(pos, galley, Color32::PLACEHOLDER));
}
