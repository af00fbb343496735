use std::time::Duration;

use crate::geo::GeoCoord;

/// Viewpoint the globe flies to once the scene is mounted.
pub const INITIAL_VIEW: GeoCoord = GeoCoord::new(0.0, 20.0);
/// Camera altitude for the initial viewpoint, in globe radii above the surface.
pub const INITIAL_ALTITUDE: f32 = 2.5;
/// Camera altitude used when re-centering on a selected city.
pub const FOCUS_ALTITUDE: f32 = 1.8;
/// Duration of every point-of-view transition requested by the view state.
pub const VIEW_TRANSITION: Duration = Duration::from_millis(1000);

/// Great-circle distance (degrees) within which a coordinate-only event
/// resolves to a catalog entry.
pub const PICK_TOLERANCE_DEG: f64 = 0.01;

// Palette shared by the scene and the panels (sRGB).
pub const BACKGROUND_RGB: [u8; 3] = [0x00, 0x00, 0x00];
pub const GLOBE_RGB: [u8; 3] = [0x1a, 0x1a, 0x1a];
pub const GLOBE_EMISSIVE_RGB: [u8; 3] = [0x22, 0x00, 0x00];
pub const MARKER_RGB: [u8; 3] = [0xff, 0x33, 0x33];
pub const ATMOSPHERE_RGB: [u8; 3] = [0x4a, 0x04, 0x04];
pub const TEXT_RGB: [u8; 3] = [0xff, 0xff, 0xff];
