use bevy::prelude::*;

pub mod catalog;
pub mod catalog_error;
pub mod config;
pub mod geo;
pub mod hover;
pub mod interaction;
pub mod selection;

pub use catalog::{Catalog, CityId, CityRecord, CityStats, TopSong};
pub use catalog_error::CatalogError;
pub use geo::GeoCoord;
pub use hover::{HoverData, HoverState};
pub use interaction::{CameraCommand, GlobeInput, PointRef, SelectionChanged};
pub use selection::{DetailTab, Selection, SelectionChange};

/// Systems that turn [`GlobeInput`] into view-state changes.
///
/// Input producers (picking observers, panels, keybinds) run before this set;
/// consumers of `Selection`/`HoverState` and `CameraCommand` run after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct InteractionSet;

pub struct AtlasPlugin;

impl Plugin for AtlasPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Selection>()
            .init_resource::<HoverState>()
            .add_event::<GlobeInput>()
            .add_event::<CameraCommand>()
            .add_event::<SelectionChanged>()
            .add_systems(PreStartup, catalog::load_catalog)
            .add_systems(Startup, interaction::request_initial_view)
            .add_systems(
                Update,
                interaction::apply_globe_input.in_set(InteractionSet),
            );
    }
}
