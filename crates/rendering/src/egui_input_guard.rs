//! Keeps pointer and keyboard input that egui consumed away from the globe.
//!
//! The detail panel floats over the globe, so a click on one of its tabs must
//! not also select the marker underneath it, and dragging its scrollbar must
//! not spin the camera.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

/// Whether egui owned the pointer on the last pass. Globe input systems and
/// picking observers read this instead of querying egui themselves.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UiPointerCapture(pub bool);

/// `true` while the cursor is over an egui area or egui owns a drag.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    contexts
        .try_ctx_mut()
        .is_some_and(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area())
}

/// `true` while an egui widget has keyboard focus.
#[inline]
pub fn egui_wants_keyboard(contexts: &mut EguiContexts) -> bool {
    contexts
        .try_ctx_mut()
        .is_some_and(|ctx| ctx.wants_keyboard_input())
}

/// System: refresh [`UiPointerCapture`] from the egui context.
pub fn track_ui_pointer(mut contexts: EguiContexts, mut capture: ResMut<UiPointerCapture>) {
    capture.set_if_neq(UiPointerCapture(egui_wants_pointer(&mut contexts)));
}
