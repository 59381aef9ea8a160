//! Mode selector for a map panel

use geosketch_core::DrawMode;

/// Render the draw-mode selector.
///
/// Returns the newly selected mode, if the user changed it.
pub fn mode_selector(
    ui: &mut egui::Ui,
    id: &str,
    current: DrawMode,
    offered: &[DrawMode],
) -> Option<DrawMode> {
    let mut selected = current;
    ui.label("Type:");
    egui::ComboBox::from_id_salt(("draw_mode", id))
        .selected_text(selected.name())
        .show_ui(ui, |ui| {
            for mode in offered {
                ui.selectable_value(&mut selected, *mode, mode.name());
            }
        });
    (selected != current).then_some(selected)
}
