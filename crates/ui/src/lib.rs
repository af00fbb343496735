use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use atlas::InteractionSet;

pub mod detail_panel;
pub mod hover_label;
pub mod keybinds;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_globe_theme)
            .add_systems(
                Update,
                (
                    detail_panel::detail_panel_ui,
                    hover_label::hover_label_ui,
                    keybinds::detail_keybinds,
                )
                    .before(InteractionSet),
            );
    }
}
