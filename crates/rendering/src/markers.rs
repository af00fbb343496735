//! City markers: one radial column per catalog entry.
//!
//! Each marker carries the [`CityId`] of its record. Picking observers report
//! clicks and hovers as [`GlobeInput`] keyed by that id, so no coordinate
//! matching is involved in resolving a picked point.
//!
//! Markers rise out of the surface over [`POINTS_TRANSITION`] after spawning.

use std::time::Duration;

use bevy::picking::events::{Click, Out, Over, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;

use atlas::config::MARKER_RGB;
use atlas::{Catalog, CityId, GeoCoord, GlobeInput, PointRef};

use crate::camera::CameraDrag;
use crate::camera_flight::ease_in_out_cubic;
use crate::egui_input_guard::UiPointerCapture;
use crate::globe::{emissive, geo_to_world, srgb, surface_normal, GLOBE_RADIUS};

/// Column height above the surface, in globe radii.
pub const POINT_ALTITUDE: f32 = 0.1;
/// Column radius in degrees of arc.
pub const POINT_RADIUS_DEG: f32 = 2.0;
pub const POINT_RESOLUTION: u32 = 32;
/// Emissive boost so markers cross the bloom threshold.
const MARKER_GLOW: f32 = 0.02;
/// Time for a new marker to reach full height.
pub const POINTS_TRANSITION: Duration = Duration::from_millis(1000);
/// Smallest height scale, so a fresh marker never has a degenerate transform.
const MIN_GROWTH: f32 = 1e-3;

#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct CityMarker {
    pub id: CityId,
}

/// Arc length of `degrees` on the globe surface, in world units.
pub fn arc_to_world(degrees: f32) -> f32 {
    GLOBE_RADIUS * degrees.to_radians()
}

/// A Y-up column standing on the surface at `coord`.
pub fn marker_transform(coord: GeoCoord) -> Transform {
    marker_transform_at(coord, 1.0)
}

/// The column at `growth` (0..=1) of its full height, base on the surface.
pub fn marker_transform_at(coord: GeoCoord, growth: f32) -> Transform {
    let growth = growth.clamp(MIN_GROWTH, 1.0);
    let normal = surface_normal(coord);
    Transform::from_translation(geo_to_world(coord, POINT_ALTITUDE * 0.5 * growth))
        .with_rotation(Quat::from_rotation_arc(Vec3::Y, normal))
        .with_scale(Vec3::new(1.0, growth, 1.0))
}

/// Eased height fraction `elapsed` into the grow-in.
pub fn growth_at(elapsed: Duration) -> f32 {
    if POINTS_TRANSITION.is_zero() {
        return 1.0;
    }
    let t = (elapsed.as_secs_f32() / POINTS_TRANSITION.as_secs_f32()).clamp(0.0, 1.0);
    ease_in_out_cubic(t)
}

/// A marker still rising out of the surface.
#[derive(Component, Debug, Clone)]
pub struct GrowIn {
    pub coord: GeoCoord,
    pub elapsed: Duration,
}

pub fn spawn_city_markers(
    mut commands: Commands,
    catalog: Res<Catalog>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(
        Cylinder::new(arc_to_world(POINT_RADIUS_DEG), POINT_ALTITUDE * GLOBE_RADIUS)
            .mesh()
            .resolution(POINT_RESOLUTION),
    );
    let material = materials.add(StandardMaterial {
        base_color: srgb(MARKER_RGB),
        emissive: emissive(MARKER_RGB, MARKER_GLOW),
        ..default()
    });

    for record in catalog.records() {
        commands
            .spawn((
                CityMarker {
                    id: record.id.clone(),
                },
                Name::new(format!("marker:{}", record.id)),
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material.clone()),
                marker_transform_at(record.coord, 0.0),
                GrowIn {
                    coord: record.coord,
                    elapsed: Duration::ZERO,
                },
            ))
            .observe(on_marker_click)
            .observe(on_marker_over)
            .observe(on_marker_out);
    }

    info!("Spawned {} city markers", catalog.len());
}

/// System: raise new markers, dropping [`GrowIn`] once they reach full height.
pub fn grow_markers(
    mut commands: Commands,
    time: Res<Time>,
    mut markers: Query<(Entity, &mut GrowIn, &mut Transform)>,
) {
    for (entity, mut grow, mut transform) in &mut markers {
        grow.elapsed += time.delta();
        *transform = marker_transform_at(grow.coord, growth_at(grow.elapsed));
        if grow.elapsed >= POINTS_TRANSITION {
            commands.entity(entity).remove::<GrowIn>();
        }
    }
}

fn on_marker_click(
    trigger: Trigger<Pointer<Click>>,
    markers: Query<&CityMarker>,
    drag: Res<CameraDrag>,
    capture: Res<UiPointerCapture>,
    mut input: EventWriter<GlobeInput>,
) {
    if trigger.event().button != PointerButton::Primary || drag.is_dragging() || capture.0 {
        return;
    }
    let Ok(marker) = markers.get(trigger.entity()) else {
        return;
    };
    input.send(GlobeInput::Click(PointRef::City(marker.id.clone())));
}

fn on_marker_over(
    trigger: Trigger<Pointer<Over>>,
    markers: Query<&CityMarker>,
    capture: Res<UiPointerCapture>,
    mut input: EventWriter<GlobeInput>,
) {
    if capture.0 {
        return;
    }
    let Ok(marker) = markers.get(trigger.entity()) else {
        return;
    };
    input.send(GlobeInput::HoverStart(PointRef::City(marker.id.clone())));
}

fn on_marker_out(_trigger: Trigger<Pointer<Out>>, mut input: EventWriter<GlobeInput>) {
    input.send(GlobeInput::HoverEnd);
}
