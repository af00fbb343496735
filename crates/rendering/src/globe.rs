//! Globe and atmosphere meshes, plus the lat/lng -> world mapping shared by
//! everything placed on the globe.

use bevy::picking::PickingBehavior;
use bevy::prelude::*;
use bevy::render::render_resource::Face;

use atlas::config::{ATMOSPHERE_RGB, GLOBE_EMISSIVE_RGB, GLOBE_RGB};
use atlas::GeoCoord;

/// Globe radius in world units. Altitudes elsewhere are in multiples of this.
pub const GLOBE_RADIUS: f32 = 100.0;
/// Atmosphere shell height above the surface, in globe radii.
pub const ATMOSPHERE_ALTITUDE: f32 = 0.25;
const ATMOSPHERE_OPACITY: f32 = 0.35;

const GLOBE_SECTORS: u32 = 96;
const GLOBE_STACKS: u32 = 48;

const GLOBE_EMISSIVE_INTENSITY: f32 = 0.1;
/// Scales emissive colours into the camera's HDR range.
const EMISSIVE_NITS: f32 = 400.0;
/// Phong shininess 0.5 is close to fully diffuse.
const GLOBE_ROUGHNESS: f32 = 0.95;

/// Marker on the globe body.
#[derive(Component)]
pub struct GlobeBody;

/// Marker on the atmosphere shell.
#[derive(Component)]
pub struct Atmosphere;

/// World position of `coord` at `altitude` globe radii above the surface.
///
/// Y is up; (0, 0) faces +Z and longitude 90 E faces +X.
pub fn geo_to_world(coord: GeoCoord, altitude: f32) -> Vec3 {
    let r = f64::from(GLOBE_RADIUS * (1.0 + altitude));
    let phi = (90.0 - coord.lat).to_radians();
    let theta = (90.0 - coord.lng).to_radians();

    Vec3::new(
        (r * phi.sin() * theta.cos()) as f32,
        (r * phi.cos()) as f32,
        (r * phi.sin() * theta.sin()) as f32,
    )
}

/// Outward unit normal of the surface at `coord`.
pub fn surface_normal(coord: GeoCoord) -> Vec3 {
    geo_to_world(coord, 0.0).normalize()
}

pub fn srgb(rgb: [u8; 3]) -> Color {
    Color::srgb_u8(rgb[0], rgb[1], rgb[2])
}

/// Linear emissive colour scaled to `intensity`.
pub fn emissive(rgb: [u8; 3], intensity: f32) -> LinearRgba {
    srgb(rgb).to_linear() * (intensity * EMISSIVE_NITS)
}

pub fn spawn_globe(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let globe_mesh = meshes.add(
        Sphere::new(GLOBE_RADIUS)
            .mesh()
            .uv(GLOBE_SECTORS, GLOBE_STACKS),
    );
    let globe_material = materials.add(StandardMaterial {
        base_color: srgb(GLOBE_RGB),
        emissive: emissive(GLOBE_EMISSIVE_RGB, GLOBE_EMISSIVE_INTENSITY),
        perceptual_roughness: GLOBE_ROUGHNESS,
        reflectance: 0.1,
        ..default()
    });

    commands.spawn((
        GlobeBody,
        Name::new("globe"),
        Mesh3d(globe_mesh),
        MeshMaterial3d(globe_material),
        Transform::IDENTITY,
    ));

    // Back faces only, additively blended: a halo around the limb.
    let shell_mesh = meshes.add(
        Sphere::new(GLOBE_RADIUS * (1.0 + ATMOSPHERE_ALTITUDE))
            .mesh()
            .uv(GLOBE_SECTORS, GLOBE_STACKS),
    );
    let shell_material = materials.add(StandardMaterial {
        base_color: srgb(ATMOSPHERE_RGB).with_alpha(ATMOSPHERE_OPACITY),
        alpha_mode: AlphaMode::Add,
        unlit: true,
        cull_mode: Some(Face::Front),
        ..default()
    });

    commands.spawn((
        Atmosphere,
        Name::new("atmosphere"),
        Mesh3d(shell_mesh),
        MeshMaterial3d(shell_material),
        Transform::IDENTITY,
        PickingBehavior::IGNORE,
    ));
}
