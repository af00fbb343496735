use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;

use atlas::InteractionSet;

pub mod camera;
pub mod camera_flight;
pub mod egui_input_guard;
pub mod globe;
pub mod lighting;
pub mod markers;
pub mod rings;
pub mod screenshot;

use camera::{CameraDrag, GlobeCamera, OrbitControls};
use camera_flight::PointOfViewFlight;
use egui_input_guard::UiPointerCapture;
use rings::RingStyle;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MeshPickingPlugin)
            .init_resource::<GlobeCamera>()
            .init_resource::<OrbitControls>()
            .init_resource::<CameraDrag>()
            .init_resource::<PointOfViewFlight>()
            .init_resource::<RingStyle>()
            .init_resource::<UiPointerCapture>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    lighting::setup_lighting,
                    globe::spawn_globe,
                    markers::spawn_city_markers,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    egui_input_guard::track_ui_pointer,
                    camera::camera_drag_rotate,
                    camera::camera_zoom,
                    camera_flight::start_flights.after(InteractionSet),
                    camera_flight::advance_flight,
                    camera::camera_spin,
                    camera::apply_globe_camera,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    rings::manage_selection_ring,
                    rings::animate_selection_ring,
                )
                    .chain()
                    .after(InteractionSet),
            )
            .add_systems(Update, markers::grow_markers);

        // F12 to capture
        app.add_plugins(screenshot::ScreenshotPlugin);
    }
}
