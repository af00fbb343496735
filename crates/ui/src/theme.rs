use bevy_egui::{egui, EguiContexts};

use atlas::config::{ATMOSPHERE_RGB, MARKER_RGB, TEXT_RGB};

pub fn color32(rgb: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Marker red, used for accents and the active tab.
pub fn accent() -> egui::Color32 {
    color32(MARKER_RGB)
}

pub fn text() -> egui::Color32 {
    color32(TEXT_RGB)
}

/// Translucent fill behind chips and stat cells.
pub fn chip_fill() -> egui::Color32 {
    let [r, g, b] = ATMOSPHERE_RGB;
    egui::Color32::from_rgba_unmultiplied(r, g, b, 200)
}

pub fn apply_globe_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    // Near-black panels with a red cast
    let panel = egui::Color32::from_rgba_unmultiplied(18, 6, 6, 235);
    let inactive = egui::Color32::from_rgb(48, 14, 14);
    let hover = egui::Color32::from_rgb(90, 20, 20);
    let active = accent();

    style.visuals.dark_mode = true;
    style.visuals.override_text_color = Some(text());

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.window_stroke = egui::Stroke::new(1.0, color32(ATMOSPHERE_RGB));
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(10, 2, 2);
    style.visuals.faint_bg_color = egui::Color32::from_rgb(30, 8, 8);

    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, text());

    let window_rounding = egui::CornerRadius::same(10);
    let widget_rounding = egui::CornerRadius::same(6);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}
