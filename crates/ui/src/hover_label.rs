//! Name of the hovered city, floating just above the middle of the window.
//! The label fades in on hover and out after the pointer leaves.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use atlas::HoverState;

use crate::theme::accent;

/// Vertical offset of the label's bottom edge above the window centre.
pub const LABEL_OFFSET_PX: f32 = 50.0;

/// Anchor point (bottom centre) of the label for a given screen rect.
pub fn label_anchor(screen: egui::Rect) -> egui::Pos2 {
    screen.center() - egui::vec2(0.0, LABEL_OFFSET_PX)
}

/// Seconds for the label to fade in or out.
pub const HOVER_FADE_SECS: f32 = 0.15;

/// Draws the hovered city's name, fading it out after the pointer leaves.
pub fn hover_label_ui(
    mut contexts: EguiContexts,
    hover: Res<HoverState>,
    mut last_name: Local<Option<String>>,
) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };
    if let Some(name) = hover.name() {
        if last_name.as_deref() != Some(name) {
            *last_name = Some(name.to_owned());
        }
    }
    let id = egui::Id::new("hover_label");
    let opacity =
        ctx.animate_bool_with_time(id.with("fade"), hover.name().is_some(), HOVER_FADE_SECS);
    if opacity <= 0.0 {
        *last_name = None;
        return;
    }
    let Some(name) = last_name.as_deref() else {
        return;
    };
    let anchor = label_anchor(ctx.screen_rect());

    egui::Area::new(id)
        .fixed_pos(anchor)
        .pivot(egui::Align2::CENTER_BOTTOM)
        .interactable(false)
        .order(egui::Order::Tooltip)
        .show(ctx, |ui| {
            ui.multiply_opacity(opacity);
            egui::Frame::new()
                .fill(egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180))
                .stroke(egui::Stroke::new(1.0, accent()))
                .corner_radius(egui::CornerRadius::same(4))
                .inner_margin(egui::Margin::symmetric(8, 4))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(name).strong());
                });
        });
}
