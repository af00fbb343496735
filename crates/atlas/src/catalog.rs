//! The music-city catalog.
//!
//! The catalog is embedded at build time, validated once at startup and then
//! only read. Rendered points carry a [`CityId`] so that interaction events map
//! back to their record by identifier rather than by comparing coordinates.

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog_error::CatalogError;
use crate::config::PICK_TOLERANCE_DEG;
use crate::geo::GeoCoord;

/// Embedded catalog data, fixed at build time.
const MUSIC_CITIES_JSON: &str = include_str!("../data/music_cities.json");

/// Stable identifier of a catalog entry (e.g. `"lagos"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(String);

impl CityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Headline numbers for a city's music scene. `streams` is display text, not a count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityStats {
    pub streams: String,
    pub venues: u32,
    pub festivals: u32,
    pub yearly_events: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopSong {
    pub title: String,
    pub year: u16,
    pub streams: String,
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRecord {
    pub id: CityId,
    #[serde(flatten)]
    pub coord: GeoCoord,
    pub name: String,
    pub genre: String,
    pub description: String,
    pub artists: Vec<String>,
    pub stats: CityStats,
    pub top_songs: Vec<TopSong>,
    pub cultural_impact: Vec<String>,
}

/// Ordered, read-only list of city records.
#[derive(Resource, Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CityRecord>,
}

impl Catalog {
    /// The catalog shipped with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(MUSIC_CITIES_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<CityRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Build a catalog, rejecting data that would make points ambiguous.
    pub fn from_records(records: Vec<CityRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (i, record) in records.iter().enumerate() {
            if record.id.as_str().trim().is_empty() {
                return Err(CatalogError::BlankId(record.name.clone()));
            }
            if record.name.trim().is_empty() {
                return Err(CatalogError::MissingName(record.id.to_string()));
            }
            if !record.coord.is_valid() {
                return Err(CatalogError::InvalidCoordinate {
                    id: record.id.to_string(),
                    coord: record.coord,
                });
            }

            for earlier in &records[..i] {
                if earlier.id == record.id {
                    return Err(CatalogError::DuplicateId(record.id.to_string()));
                }
                if earlier.coord.angular_distance_deg(&record.coord) <= PICK_TOLERANCE_DEG {
                    return Err(CatalogError::DuplicateCoordinates {
                        first: earlier.id.to_string(),
                        second: record.id.to_string(),
                    });
                }
            }
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[CityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &CityId) -> Option<&CityRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn position(&self, id: &CityId) -> Option<usize> {
        self.records.iter().position(|r| &r.id == id)
    }

    /// Resolve a bare coordinate to the nearest record within the pick tolerance.
    ///
    /// Records are at least the tolerance apart (enforced in `from_records`),
    /// so at most one record can match.
    pub fn find_at(&self, coord: GeoCoord) -> Option<&CityRecord> {
        self.records
            .iter()
            .map(|r| (r, r.coord.angular_distance_deg(&coord)))
            .filter(|(_, d)| *d <= PICK_TOLERANCE_DEG)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(r, _)| r)
    }
}

/// Startup system: insert the embedded catalog unless one was provided up front.
///
/// A catalog that fails validation is logged and replaced by an empty one so
/// the globe still mounts.
pub fn load_catalog(mut commands: Commands, existing: Option<Res<Catalog>>) {
    if existing.is_some() {
        return;
    }

    match Catalog::builtin() {
        Ok(catalog) => {
            info!("Loaded music catalog with {} cities", catalog.len());
            commands.insert_resource(catalog);
        }
        Err(e) => {
            error!("Built-in music catalog rejected: {e}");
            commands.insert_resource(Catalog::default());
        }
    }
}
