//! Keyboard shortcuts for the detail panel: `Escape` closes it and `1`/`2`/`3`
//! switch between its tabs.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use atlas::{DetailTab, GlobeInput, Selection};
use rendering::egui_input_guard::egui_wants_keyboard;

/// Panel input bound to `key`, if any.
pub fn key_action(key: KeyCode) -> Option<GlobeInput> {
    match key {
        KeyCode::Escape => Some(GlobeInput::ClosePanel),
        KeyCode::Digit1 => Some(GlobeInput::SelectTab(DetailTab::Overview)),
        KeyCode::Digit2 => Some(GlobeInput::SelectTab(DetailTab::Impact)),
        KeyCode::Digit3 => Some(GlobeInput::SelectTab(DetailTab::Stats)),
        _ => None,
    }
}

pub fn detail_keybinds(
    keyboard: Res<ButtonInput<KeyCode>>,
    selection: Res<Selection>,
    mut contexts: EguiContexts,
    mut input: EventWriter<GlobeInput>,
) {
    if selection.is_idle() || egui_wants_keyboard(&mut contexts) {
        return;
    }
    for key in keyboard.get_just_pressed() {
        if let Some(action) = key_action(*key) {
            input.send(action);
        }
    }
}
