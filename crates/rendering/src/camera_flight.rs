//! Timed point-of-view transitions.
//!
//! A [`CameraCommand::PointOfView`] starts a flight from wherever the camera is
//! now to the requested view. Each frame `advance_flight` writes the eased
//! in-between view into [`GlobeCamera`]. Longitude travels the short way round.
//! A newer command replaces the running flight; a user drag cancels it.

use std::time::Duration;

use bevy::prelude::*;

use atlas::geo::{normalize_lng, shortest_lng_delta};
use atlas::{CameraCommand, GeoCoord};

use crate::camera::GlobeCamera;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flight {
    pub from: GlobeCamera,
    pub to: GlobeCamera,
    pub duration: Duration,
    pub elapsed: Duration,
}

impl Flight {
    /// Progress in [0, 1]. Zero-length flights are complete immediately.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn current(&self) -> GlobeCamera {
        interpolate_view(&self.from, &self.to, ease_in_out_cubic(self.progress()))
    }
}

/// The flight in progress, if any.
#[derive(Resource, Debug, Default)]
pub struct PointOfViewFlight(pub Option<Flight>);

impl PointOfViewFlight {
    pub fn is_active(&self) -> bool {
        self.0.is_some()
    }

    pub fn cancel(&mut self) {
        if self.0.take().is_some() {
            debug!("Camera flight cancelled");
        }
    }
}

pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// View at eased fraction `t` between `from` and `to`.
pub fn interpolate_view(from: &GlobeCamera, to: &GlobeCamera, t: f32) -> GlobeCamera {
    let tf = f64::from(t);
    let lat = from.coord.lat + (to.coord.lat - from.coord.lat) * tf;
    let lng = normalize_lng(from.coord.lng + shortest_lng_delta(from.coord.lng, to.coord.lng) * tf);

    GlobeCamera {
        coord: GeoCoord::new(lat, lng),
        altitude: from.altitude + (to.altitude - from.altitude) * t,
    }
}

/// System: turn camera commands into flights starting from the current view.
pub fn start_flights(
    mut commands: EventReader<CameraCommand>,
    view: Res<GlobeCamera>,
    mut flight: ResMut<PointOfViewFlight>,
) {
    for command in commands.read() {
        let CameraCommand::PointOfView {
            coord,
            altitude,
            duration,
        } = *command;

        let from = flight.0.as_ref().map_or(*view, Flight::current);
        flight.0 = Some(Flight {
            from,
            to: GlobeCamera { coord, altitude },
            duration,
            elapsed: Duration::ZERO,
        });
    }
}

/// System: advance the running flight and apply it to the camera.
pub fn advance_flight(
    time: Res<Time>,
    mut flight: ResMut<PointOfViewFlight>,
    mut view: ResMut<GlobeCamera>,
) {
    let Some(active) = flight.0.as_mut() else {
        return;
    };
    active.elapsed += time.delta();
    *view = active.current();

    if active.is_finished() {
        flight.0 = None;
    }
}
