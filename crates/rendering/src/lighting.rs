//! Scene lights and the bloom filter that makes the red glow.

use bevy::core_pipeline::bloom::{Bloom, BloomCompositeMode, BloomPrefilter};
use bevy::prelude::*;

use crate::globe::srgb;

/// Lumens per unit of `GlowLight::intensity` at this scene's scale.
const POINT_LIGHT_LUMENS: f32 = 1.5e6;
const POINT_LIGHT_RANGE: f32 = 1000.0;
/// Ambient brightness per unit of `AMBIENT_INTENSITY`.
const AMBIENT_BRIGHTNESS: f32 = 400.0;

const AMBIENT_RGB: [u8; 3] = [0x22, 0x22, 0x22];
const AMBIENT_INTENSITY: f32 = 1.0;

pub const BLOOM_STRENGTH: f32 = 1.5;
pub const BLOOM_RADIUS: f32 = 0.4;
pub const BLOOM_THRESHOLD: f32 = 0.85;
/// Bevy's energy-conserving bloom intensity corresponding to strength 1.0.
const BLOOM_INTENSITY_PER_STRENGTH: f32 = 0.1;

/// A coloured point light placed around the globe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowLight {
    pub rgb: [u8; 3],
    pub intensity: f32,
    pub position: Vec3,
}

/// Two strong lights in front, two weaker ones behind.
pub const GLOW_LIGHTS: [GlowLight; 4] = [
    GlowLight {
        rgb: [0xff, 0x33, 0x33],
        intensity: 2.0,
        position: Vec3::new(100.0, 100.0, 100.0),
    },
    GlowLight {
        rgb: [0xff, 0x33, 0x33],
        intensity: 2.0,
        position: Vec3::new(-100.0, -100.0, 100.0),
    },
    GlowLight {
        rgb: [0xff, 0x00, 0x00],
        intensity: 1.0,
        position: Vec3::new(100.0, -100.0, -100.0),
    },
    GlowLight {
        rgb: [0xff, 0x00, 0x00],
        intensity: 1.0,
        position: Vec3::new(-100.0, 100.0, -100.0),
    },
];

/// Lights owned by the globe scene.
#[derive(Component)]
pub struct SceneLight;

/// Bloom settings equivalent to an additive bloom pass of
/// (`BLOOM_STRENGTH`, `BLOOM_RADIUS`, `BLOOM_THRESHOLD`).
pub fn globe_bloom() -> Bloom {
    Bloom {
        intensity: BLOOM_STRENGTH * BLOOM_INTENSITY_PER_STRENGTH,
        low_frequency_boost: BLOOM_RADIUS,
        prefilter: BloomPrefilter {
            threshold: BLOOM_THRESHOLD,
            threshold_softness: 0.0,
        },
        composite_mode: BloomCompositeMode::Additive,
        ..Bloom::NATURAL
    }
}

/// Replace whatever lights exist with the globe's ambient + glow lights.
pub fn setup_lighting(
    mut commands: Commands,
    foreign_lights: Query<
        Entity,
        (
            Or<(With<PointLight>, With<DirectionalLight>, With<SpotLight>)>,
            Without<SceneLight>,
        ),
    >,
) {
    for entity in &foreign_lights {
        commands.entity(entity).despawn_recursive();
    }

    commands.insert_resource(AmbientLight {
        color: srgb(AMBIENT_RGB),
        brightness: AMBIENT_INTENSITY * AMBIENT_BRIGHTNESS,
    });

    for (i, light) in GLOW_LIGHTS.iter().enumerate() {
        commands.spawn((
            SceneLight,
            Name::new(format!("glow_light_{i}")),
            PointLight {
                color: srgb(light.rgb),
                intensity: light.intensity * POINT_LIGHT_LUMENS,
                range: POINT_LIGHT_RANGE,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(light.position),
        ));
    }
}
