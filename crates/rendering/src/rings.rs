use bevy::picking::PickingBehavior;
use bevy::prelude::*;

use atlas::config::MARKER_RGB;
use atlas::{Catalog, CityId, Selection};

use crate::globe::{geo_to_world, srgb, surface_normal};
use crate::markers::arc_to_world;

/// Inner radius of the ring mesh relative to its outer radius.
const RING_INNER_RATIO: f32 = 0.85;
const RING_RESOLUTION: u32 = 64;

/// Ring highlight timing and size.
#[derive(Resource, Debug, Clone)]
pub struct RingStyle {
    /// Largest ring radius, in degrees of arc.
    pub max_radius_deg: f32,
    /// Growth rate in degrees per second.
    pub propagation_speed: f32,
    /// Seconds between successive rings.
    pub repeat_period: f32,
    /// Height above the surface in globe radii.
    pub altitude: f32,
}

impl Default for RingStyle {
    fn default() -> Self {
        Self {
            max_radius_deg: 5.0,
            propagation_speed: 3.0,
            repeat_period: 2.0,
            altitude: 0.1,
        }
    }
}

/// Radius (degrees) and opacity of the ring `elapsed` seconds after the
/// highlight appeared, or `None` while waiting for the next ring.
pub fn ring_phase(style: &RingStyle, elapsed: f32) -> Option<(f32, f32)> {
    if style.repeat_period <= 0.0 || style.max_radius_deg <= 0.0 {
        return None;
    }
    let t = elapsed.rem_euclid(style.repeat_period);
    let radius = t * style.propagation_speed;
    if radius > style.max_radius_deg {
        return None;
    }
    Some((radius, 1.0 - radius / style.max_radius_deg))
}

/// The pulsing ring drawn around the selected city.
#[derive(Component)]
pub struct SelectionRing {
    pub tracked: CityId,
    pub spawned_at: f32,
    pub material: Handle<StandardMaterial>,
}

#[derive(Resource)]
pub struct RingMesh(pub Handle<Mesh>);

/// Spawn / despawn the ring so it matches the current selection.
pub fn manage_selection_ring(
    mut commands: Commands,
    selection: Res<Selection>,
    catalog: Res<Catalog>,
    time: Res<Time>,
    style: Res<RingStyle>,
    rings: Query<(Entity, &SelectionRing)>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    ring_mesh: Option<Res<RingMesh>>,
) {
    if !selection.is_changed() {
        return;
    }
    let selected = selection.city();

    for (entity, ring) in &rings {
        if selected != Some(&ring.tracked) {
            commands.entity(entity).despawn();
        }
    }

    let (Some(city), Some(coord)) = (selected, selection.ring_points(&catalog).first().copied())
    else {
        return;
    };
    if rings.iter().any(|(_, ring)| &ring.tracked == city) {
        return;
    }

    let mesh = match ring_mesh {
        Some(m) => m.0.clone(),
        None => {
            let handle = meshes.add(
                Annulus::new(RING_INNER_RATIO, 1.0)
                    .mesh()
                    .resolution(RING_RESOLUTION),
            );
            commands.insert_resource(RingMesh(handle.clone()));
            handle
        }
    };
    let material = materials.add(StandardMaterial {
        base_color: srgb(MARKER_RGB),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    // Annulus meshes lie in the XY plane facing +Z.
    let transform = Transform::from_translation(geo_to_world(coord, style.altitude))
        .with_rotation(Quat::from_rotation_arc(Vec3::Z, surface_normal(coord)))
        .with_scale(Vec3::ZERO);

    commands.spawn((
        SelectionRing {
            tracked: city.clone(),
            spawned_at: time.elapsed_secs(),
            material: material.clone(),
        },
        Name::new(format!("ring:{city}")),
        Mesh3d(mesh),
        MeshMaterial3d(material),
        transform,
        Visibility::Hidden,
        PickingBehavior::IGNORE,
    ));
}

/// Grow and fade the ring each frame.
pub fn animate_selection_ring(
    time: Res<Time>,
    style: Res<RingStyle>,
    mut rings: Query<(&SelectionRing, &mut Transform, &mut Visibility)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let now = time.elapsed_secs();
    for (ring, mut transform, mut visibility) in &mut rings {
        match ring_phase(&style, now - ring.spawned_at) {
            Some((radius_deg, alpha)) if radius_deg > 0.0 => {
                transform.scale = Vec3::splat(arc_to_world(radius_deg));
                if let Some(material) = materials.get_mut(&ring.material) {
                    material.base_color.set_alpha(alpha);
                }
                *visibility = Visibility::Inherited;
            }
            _ => *visibility = Visibility::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_phase_grows_and_fades() {
        let style = RingStyle::default();
        let (r0, a0) = ring_phase(&style, 0.0).unwrap();
        assert_eq!(r0, 0.0);
        assert_eq!(a0, 1.0);

        let (r1, a1) = ring_phase(&style, 1.0).unwrap();
        assert!((r1 - 3.0).abs() < 1e-6);
        assert!((a1 - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_ring_phase_gap_before_next_ring() {
        let style = RingStyle::default();
        // 5 deg at 3 deg/s is reached after 1.67 s; the next ring starts at 2 s.
        assert!(ring_phase(&style, 1.8).is_none());
        let (r, _) = ring_phase(&style, 2.5).unwrap();
        assert!((r - 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_ring_phase_degenerate_style() {
        let style = RingStyle {
            repeat_period: 0.0,
            ..default()
        };
        assert!(ring_phase(&style, 1.0).is_none());
    }

    fn ring_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<RingStyle>()
            .init_resource::<Selection>()
            .insert_resource(Catalog::builtin().unwrap())
            .add_systems(Update, manage_selection_ring);
        app
    }

    fn rings_tracking(app: &mut App) -> Vec<String> {
        let world = app.world_mut();
        world
            .query::<&SelectionRing>()
            .iter(world)
            .map(|r| r.tracked.to_string())
            .collect()
    }

    #[test]
    fn test_ring_follows_selection() {
        let mut app = ring_app();
        app.update();
        assert!(rings_tracking(&mut app).is_empty());

        *app.world_mut().resource_mut::<Selection>() = Selection::Detail {
            city: CityId::new("lagos"),
            tab: Default::default(),
        };
        app.update();
        assert_eq!(rings_tracking(&mut app), ["lagos"]);

        *app.world_mut().resource_mut::<Selection>() = Selection::Detail {
            city: CityId::new("accra"),
            tab: Default::default(),
        };
        app.update();
        assert_eq!(rings_tracking(&mut app), ["accra"]);

        *app.world_mut().resource_mut::<Selection>() = Selection::Idle;
        app.update();
        assert!(rings_tracking(&mut app).is_empty());
    }
}
