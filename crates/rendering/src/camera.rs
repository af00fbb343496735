use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::math::DVec2;
use bevy::prelude::*;

use atlas::config::BACKGROUND_RGB;
use atlas::geo::normalize_lng;
use atlas::GeoCoord;

use crate::camera_flight::PointOfViewFlight;
use crate::egui_input_guard::UiPointerCapture;
use crate::globe::{geo_to_world, srgb, GLOBE_RADIUS};
use crate::lighting::globe_bloom;

/// Camera latitude is kept off the poles so `looking_at` keeps a stable up vector.
const MAX_CAMERA_LAT: f64 = 85.0;
/// Pixels the pointer may travel while pressed before a click becomes a drag.
pub const DRAG_THRESHOLD: f32 = 5.0;
/// Below this the post-release spin is considered stopped (degrees per second).
const SPIN_EPSILON: f64 = 0.01;
/// Distance multiplier per wheel line.
const ZOOM_STEP: f32 = 0.95;

/// Globe-centric camera: the camera sits above `coord` at `altitude` globe
/// radii and always looks at the globe centre.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct GlobeCamera {
    pub coord: GeoCoord,
    pub altitude: f32,
}

impl Default for GlobeCamera {
    fn default() -> Self {
        Self {
            coord: GeoCoord::new(0.0, 0.0),
            altitude: 2.5,
        }
    }
}

impl GlobeCamera {
    pub fn distance(&self) -> f32 {
        GLOBE_RADIUS * (1.0 + self.altitude)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(geo_to_world(self.coord, self.altitude))
            .looking_at(Vec3::ZERO, Vec3::Y)
    }

    /// Rotate the viewpoint by the given degrees, clamping latitude and wrapping longitude.
    pub fn orbit_by(&mut self, dlat: f64, dlng: f64) {
        self.coord.lat = (self.coord.lat + dlat).clamp(-MAX_CAMERA_LAT, MAX_CAMERA_LAT);
        self.coord.lng = normalize_lng(self.coord.lng + dlng);
    }
}

/// Orbit-control tuning. Speeds are expressed per 60 Hz frame.
#[derive(Resource, Debug, Clone)]
pub struct OrbitControls {
    pub enable_zoom: bool,
    pub auto_rotate: bool,
    /// 1.0 = one revolution per minute at 60 fps.
    pub auto_rotate_speed: f64,
    /// Fraction of the spin velocity removed per 60 Hz frame after release.
    pub damping_factor: f64,
    /// 1.0 = a drag across the full window height turns the camera 360 degrees.
    pub rotate_speed: f64,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            enable_zoom: true,
            auto_rotate: true,
            auto_rotate_speed: 0.2,
            damping_factor: 0.1,
            rotate_speed: 1.0,
            min_distance: 200.0,
            max_distance: 500.0,
        }
    }
}

impl OrbitControls {
    pub fn min_altitude(&self) -> f32 {
        self.min_distance / GLOBE_RADIUS - 1.0
    }

    pub fn max_altitude(&self) -> f32 {
        self.max_distance / GLOBE_RADIUS - 1.0
    }

    pub fn clamp_altitude(&self, altitude: f32) -> f32 {
        altitude.clamp(self.min_altitude(), self.max_altitude())
    }
}

/// Degrees per second the camera drifts westward while auto-rotating.
pub fn auto_rotate_rate(speed: f64) -> f64 {
    6.0 * speed
}

/// Remaining share of spin velocity after `dt` seconds of damping.
pub fn damping_decay(damping_factor: f64, dt: f64) -> f64 {
    (1.0 - damping_factor).clamp(0.0, 1.0).powf(dt * 60.0)
}

/// Left-button drag state. Picking observers fire in `PreUpdate`, before
/// `camera_drag_rotate` sees the release, so they read the `travel` of the
/// press being released; it is cleared once the release is handled.
#[derive(Resource, Default, Debug)]
pub struct CameraDrag {
    pub pressed: bool,
    pub last_pos: Vec2,
    pub travel: f32,
    /// Spin velocity in degrees per second (x = longitude, y = latitude).
    pub spin: DVec2,
}

impl CameraDrag {
    pub fn is_dragging(&self) -> bool {
        self.travel > DRAG_THRESHOLD
    }
}

pub fn setup_camera(mut commands: Commands, view: Res<GlobeCamera>) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            clear_color: ClearColorConfig::Custom(srgb(BACKGROUND_RGB)),
            ..default()
        },
        Tonemapping::TonyMcMapface,
        globe_bloom(),
        view.transform(),
    ));
}

/// System: apply `GlobeCamera` to the camera transform when it changed.
pub fn apply_globe_camera(view: Res<GlobeCamera>, mut query: Query<&mut Transform, With<Camera3d>>) {
    if !view.is_changed() {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = view.transform();
}

/// Left-mouse drag: rotate the globe under the pointer. Releasing keeps the
/// last velocity, which `camera_spin` then damps out.
pub fn camera_drag_rotate(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    time: Res<Time>,
    controls: Res<OrbitControls>,
    mut drag: ResMut<CameraDrag>,
    mut view: ResMut<GlobeCamera>,
    mut flight: ResMut<PointOfViewFlight>,
    capture: Res<UiPointerCapture>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    // Presses that land on a panel belong to egui.
    if buttons.just_pressed(MouseButton::Left) && !capture.0 {
        if let Some(pos) = window.cursor_position() {
            drag.pressed = true;
            drag.last_pos = pos;
            drag.travel = 0.0;
            drag.spin = DVec2::ZERO;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        drag.pressed = false;
        drag.travel = 0.0;
    }

    if !drag.pressed {
        return;
    }
    let Some(pos) = window.cursor_position() else {
        return;
    };

    let delta = pos - drag.last_pos;
    drag.last_pos = pos;
    drag.travel += delta.length();
    if !drag.is_dragging() || delta == Vec2::ZERO {
        return;
    }

    // The user took over; drop any scripted flight.
    flight.cancel();

    let deg_per_px = 360.0 * controls.rotate_speed / f64::from(window.height().max(1.0));
    let dlng = -f64::from(delta.x) * deg_per_px;
    let dlat = f64::from(delta.y) * deg_per_px;
    view.orbit_by(dlat, dlng);

    let dt = f64::from(time.delta_secs());
    if dt > 0.0 {
        drag.spin = DVec2::new(dlng / dt, dlat / dt);
    }
}

/// After release: keep rotating with the damped drag velocity, plus auto-rotation.
pub fn camera_spin(
    time: Res<Time>,
    controls: Res<OrbitControls>,
    mut drag: ResMut<CameraDrag>,
    mut view: ResMut<GlobeCamera>,
    flight: Res<PointOfViewFlight>,
) {
    if drag.pressed || flight.is_active() {
        return;
    }
    let dt = f64::from(time.delta_secs());
    if dt <= 0.0 {
        return;
    }

    let mut dlng = 0.0;
    let mut dlat = 0.0;

    if drag.spin.length() > SPIN_EPSILON {
        dlng += drag.spin.x * dt;
        dlat += drag.spin.y * dt;
        drag.spin *= damping_decay(controls.damping_factor, dt);
    } else if drag.spin != DVec2::ZERO {
        drag.spin = DVec2::ZERO;
    }

    if controls.auto_rotate {
        dlng -= auto_rotate_rate(controls.auto_rotate_speed) * dt;
    }

    if dlng != 0.0 || dlat != 0.0 {
        view.orbit_by(dlat, dlng);
    }
}

/// Mouse wheel: zoom in/out within the configured distance bounds. Wheel
/// input over a panel scrolls the panel only. Zooming takes over from a
/// running flight, like a drag does.
pub fn camera_zoom(
    mut scroll_events: EventReader<MouseWheel>,
    controls: Res<OrbitControls>,
    capture: Res<UiPointerCapture>,
    mut view: ResMut<GlobeCamera>,
    mut flight: ResMut<PointOfViewFlight>,
) {
    let mut steps = 0.0;
    for event in scroll_events.read() {
        steps += match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / 100.0,
        };
    }
    if steps == 0.0 || !controls.enable_zoom || capture.0 {
        return;
    }

    flight.cancel();

    let distance = view.distance() * ZOOM_STEP.powf(steps);
    let altitude = controls.clamp_altitude(distance / GLOBE_RADIUS - 1.0);
    if (altitude - view.altitude).abs() > f32::EPSILON {
        view.altitude = altitude;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::camera_flight::Flight;

    #[test]
    fn test_default_controls_match_scene() {
        let c = OrbitControls::default();
        assert!(c.auto_rotate);
        assert!(c.enable_zoom);
        assert!((c.min_altitude() - 1.0).abs() < 1e-6);
        assert!((c.max_altitude() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_auto_rotate_rate() {
        assert!((auto_rotate_rate(0.2) - 1.2).abs() < 1e-9);
        assert_eq!(auto_rotate_rate(0.0), 0.0);
    }

    #[test]
    fn test_damping_decay_per_frame() {
        // One 60 Hz frame removes exactly the damping factor.
        assert!((damping_decay(0.1, 1.0 / 60.0) - 0.9).abs() < 1e-9);
        // Two half frames equal one full frame.
        let half = damping_decay(0.1, 1.0 / 120.0);
        assert!((half * half - 0.9).abs() < 1e-9);
        assert_eq!(damping_decay(0.1, 0.0), 1.0);
    }

    #[test]
    fn test_orbit_by_clamps_latitude() {
        let mut view = GlobeCamera::default();
        view.orbit_by(120.0, 0.0);
        assert_eq!(view.coord.lat, MAX_CAMERA_LAT);
        view.orbit_by(-500.0, 0.0);
        assert_eq!(view.coord.lat, -MAX_CAMERA_LAT);
    }

    #[test]
    fn test_orbit_by_wraps_longitude() {
        let mut view = GlobeCamera {
            coord: GeoCoord::new(0.0, 175.0),
            altitude: 2.5,
        };
        view.orbit_by(0.0, 10.0);
        assert!((view.coord.lng - -175.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_altitude() {
        let c = OrbitControls::default();
        assert_eq!(c.clamp_altitude(0.2), 1.0);
        assert_eq!(c.clamp_altitude(9.0), 4.0);
        assert_eq!(c.clamp_altitude(2.5), 2.5);
    }

    #[test]
    fn test_transform_looks_at_globe_centre() {
        let view = GlobeCamera {
            coord: GeoCoord::new(0.0, 20.0),
            altitude: 2.5,
        };
        let t = view.transform();
        assert!((t.translation.length() - view.distance()).abs() < 1e-3);
        let forward = t.forward().as_vec3();
        let to_centre = (-t.translation).normalize();
        assert!(forward.dot(to_centre) > 0.9999);
    }

    #[test]
    fn test_drag_threshold() {
        let mut drag = CameraDrag::default();
        assert!(!drag.is_dragging());
        drag.travel = DRAG_THRESHOLD + 0.5;
        assert!(drag.is_dragging());
    }

    fn input_app(ui_has_pointer: bool) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<MouseWheel>()
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<OrbitControls>()
            .init_resource::<CameraDrag>()
            .init_resource::<GlobeCamera>()
            .insert_resource(UiPointerCapture(ui_has_pointer))
            .insert_resource(PointOfViewFlight(Some(Flight {
                from: GlobeCamera::default(),
                to: GlobeCamera {
                    coord: GeoCoord::new(6.5244, 3.3792),
                    altitude: 1.8,
                },
                duration: Duration::from_secs(60),
                elapsed: Duration::ZERO,
            })))
            .add_systems(Update, (camera_drag_rotate, camera_zoom).chain());

        let mut window = Window::default();
        window.set_cursor_position(Some(Vec2::new(400.0, 300.0)));
        app.world_mut().spawn(window);
        app
    }

    fn move_cursor(app: &mut App, pos: Vec2) {
        let world = app.world_mut();
        let mut windows = world.query::<&mut Window>();
        for mut window in windows.iter_mut(world) {
            window.set_cursor_position(Some(pos));
        }
    }

    /// Press, then drag 80 px to the right over two frames.
    fn press_and_drag(app: &mut App) {
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .clear();
        move_cursor(app, Vec2::new(480.0, 300.0));
        app.update();
    }

    fn scroll(app: &mut App, lines: f32) {
        app.world_mut().send_event(MouseWheel {
            unit: MouseScrollUnit::Line,
            x: 0.0,
            y: lines,
            window: Entity::PLACEHOLDER,
        });
        app.update();
    }

    #[test]
    fn test_drag_on_globe_rotates_and_cancels_flight() {
        let mut app = input_app(false);
        press_and_drag(&mut app);

        assert!(app.world().resource::<CameraDrag>().is_dragging());
        assert!(app.world().resource::<GlobeCamera>().coord.lng < 0.0);
        assert!(!app.world().resource::<PointOfViewFlight>().is_active());
    }

    #[test]
    fn test_drag_starting_on_panel_leaves_camera_alone() {
        let mut app = input_app(true);
        press_and_drag(&mut app);

        let drag = app.world().resource::<CameraDrag>();
        assert!(!drag.pressed);
        assert!(!drag.is_dragging());
        assert_eq!(app.world().resource::<GlobeCamera>().coord.lng, 0.0);
        assert!(app.world().resource::<PointOfViewFlight>().is_active());
    }

    #[test]
    fn test_release_clears_travel() {
        let mut app = input_app(false);
        press_and_drag(&mut app);
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .release(MouseButton::Left);
        app.update();

        let drag = app.world().resource::<CameraDrag>();
        assert!(!drag.pressed);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_wheel_over_panel_does_not_zoom() {
        let mut app = input_app(true);
        scroll(&mut app, 3.0);
        assert_eq!(app.world().resource::<GlobeCamera>().altitude, 2.5);
        assert!(app.world().resource::<PointOfViewFlight>().is_active());

        // Wheel input swallowed by the panel is not replayed later.
        app.insert_resource(UiPointerCapture(false));
        app.update();
        assert_eq!(app.world().resource::<GlobeCamera>().altitude, 2.5);
    }

    #[test]
    fn test_wheel_on_globe_zooms_and_cancels_flight() {
        let mut app = input_app(false);
        scroll(&mut app, 1.0);

        // One line in: distance 350 * 0.95 = 332.5.
        let altitude = app.world().resource::<GlobeCamera>().altitude;
        assert!((altitude - 2.325).abs() < 1e-4, "got {altitude}");
        assert!(!app.world().resource::<PointOfViewFlight>().is_active());
    }
}
