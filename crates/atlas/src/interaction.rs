//! Events exchanged between the globe renderer, the panels and the view state.
//!
//! The renderer and the UI only ever *send* [`GlobeInput`]; `apply_globe_input`
//! is the single writer of [`Selection`] and [`HoverState`]. Entering a city
//! detail view asks the renderer to re-center via [`CameraCommand`].

use std::time::Duration;

use bevy::prelude::*;

use crate::catalog::{Catalog, CityId, CityRecord};
use crate::config::{FOCUS_ALTITUDE, INITIAL_ALTITUDE, INITIAL_VIEW, VIEW_TRANSITION};
use crate::geo::GeoCoord;
use crate::hover::HoverState;
use crate::selection::{DetailTab, Selection, SelectionChange};

/// How an interaction identifies the point it refers to.
#[derive(Debug, Clone, PartialEq)]
pub enum PointRef {
    /// A picked marker, identified by the id it was spawned with.
    City(CityId),
    /// A bare coordinate, resolved against the catalog within the pick tolerance.
    Coord(GeoCoord),
}

impl PointRef {
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Option<&'a CityRecord> {
        match self {
            PointRef::City(id) => catalog.get(id),
            PointRef::Coord(coord) => catalog.find_at(*coord),
        }
    }
}

/// User intent reported by the globe or the panels.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum GlobeInput {
    Click(PointRef),
    HoverStart(PointRef),
    HoverEnd,
    ClosePanel,
    SelectTab(DetailTab),
}

/// Commands for the rendering surface.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Move the viewpoint to `coord` at `altitude` (globe radii) over `duration`.
    PointOfView {
        coord: GeoCoord,
        altitude: f32,
        duration: Duration,
    },
}

/// Emitted after every transition that changed the selection.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged(pub SelectionChange);

/// Startup system: fly from the default viewpoint to the initial one.
pub fn request_initial_view(mut camera: EventWriter<CameraCommand>) {
    camera.send(CameraCommand::PointOfView {
        coord: INITIAL_VIEW,
        altitude: INITIAL_ALTITUDE,
        duration: VIEW_TRANSITION,
    });
}

/// Apply queued interaction events to the view state, in arrival order.
pub fn apply_globe_input(
    mut inputs: EventReader<GlobeInput>,
    catalog: Res<Catalog>,
    mut selection: ResMut<Selection>,
    mut hover: ResMut<HoverState>,
    mut camera: EventWriter<CameraCommand>,
    mut changes: EventWriter<SelectionChanged>,
) {
    for input in inputs.read() {
        let change = match input {
            GlobeInput::HoverStart(point) => {
                hover.set_if_neq(HoverState::resolve(&catalog, Some(point)));
                continue;
            }
            GlobeInput::HoverEnd => {
                hover.set_if_neq(HoverState::default());
                continue;
            }
            GlobeInput::Click(point) => selection.bypass_change_detection().click(&catalog, point),
            GlobeInput::ClosePanel => selection.bypass_change_detection().close(),
            GlobeInput::SelectTab(tab) => selection.bypass_change_detection().select_tab(*tab),
        };

        if change == SelectionChange::Unchanged {
            continue;
        }
        selection.set_changed();

        match &change {
            SelectionChange::Selected(id) => {
                if let Some(record) = catalog.get(id) {
                    info!("Selected {} ({})", record.name, record.genre);
                    camera.send(CameraCommand::PointOfView {
                        coord: record.coord,
                        altitude: FOCUS_ALTITUDE,
                        duration: VIEW_TRANSITION,
                    });
                }
            }
            SelectionChange::TabChanged(tab) => debug!("Detail tab -> {}", tab.label()),
            SelectionChange::Closed => debug!("Detail panel closed"),
            SelectionChange::Unchanged => {}
        }

        changes.send(SelectionChanged(change));
    }
}
