//! Hover tracking for the tooltip label. Independent of [`crate::selection::Selection`].

use bevy::prelude::*;

use crate::catalog::{Catalog, CityId};
use crate::geo::GeoCoord;
use crate::interaction::PointRef;

#[derive(Debug, Clone, PartialEq)]
pub struct HoverData {
    pub city: CityId,
    pub coord: GeoCoord,
    pub name: String,
}

/// The point under the pointer, if it resolves to a catalog entry.
#[derive(Resource, Debug, Clone, PartialEq, Default)]
pub struct HoverState(pub Option<HoverData>);

impl HoverState {
    /// Hover state for a pointer over `point` (or over nothing).
    pub fn resolve(catalog: &Catalog, point: Option<&PointRef>) -> Self {
        let data = point
            .and_then(|p| p.resolve(catalog))
            .map(|record| HoverData {
                city: record.id.clone(),
                coord: record.coord,
                name: record.name.clone(),
            });
        Self(data)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.as_ref().map(|h| h.name.as_str())
    }
}
