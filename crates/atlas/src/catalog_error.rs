// ---------------------------------------------------------------------------
// CatalogError: why a city catalog was rejected at load time
// ---------------------------------------------------------------------------

use std::fmt;

use crate::geo::GeoCoord;

/// Errors raised while parsing or validating a city catalog.
///
/// Only catalog construction is fallible; once a `Catalog` exists every lookup
/// is infallible and a miss is reported as `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The catalog data could not be decoded.
    Parse(String),
    /// The catalog contains no records.
    Empty,
    /// Two records share an id.
    DuplicateId(String),
    /// A record's id is empty or whitespace. Carries the record's name.
    BlankId(String),
    /// Two records sit on the same coordinates, so a point could not be told apart.
    DuplicateCoordinates { first: String, second: String },
    /// A record's coordinates are outside the valid lat/lng range.
    InvalidCoordinate { id: String, coord: GeoCoord },
    /// A record has an empty display name.
    MissingName(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(msg) => write!(f, "catalog parse error: {msg}"),
            CatalogError::Empty => write!(f, "catalog has no records"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate city id '{id}'"),
            CatalogError::BlankId(name) => write!(f, "city '{name}' has a blank id"),
            CatalogError::DuplicateCoordinates { first, second } => {
                write!(f, "cities '{first}' and '{second}' share the same coordinates")
            }
            CatalogError::InvalidCoordinate { id, coord } => write!(
                f,
                "city '{id}' has invalid coordinates ({}, {})",
                coord.lat, coord.lng
            ),
            CatalogError::MissingName(id) => write!(f, "city '{id}' has no name"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display_duplicate_coordinates() {
        let err = CatalogError::DuplicateCoordinates {
            first: "lagos".to_string(),
            second: "lagos-2".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("lagos"), "got: {msg}");
        assert!(msg.contains("lagos-2"), "got: {msg}");
    }

    #[test]
    fn test_catalog_error_display_invalid_coordinate() {
        let err = CatalogError::InvalidCoordinate {
            id: "atlantis".to_string(),
            coord: GeoCoord::new(120.0, 0.0),
        };
        let msg = format!("{err}");
        assert!(msg.contains("atlantis"), "got: {msg}");
        assert!(msg.contains("120"), "got: {msg}");
    }

    #[test]
    fn test_catalog_error_display_blank_id() {
        let err = CatalogError::BlankId("Lagos".to_string());
        assert_eq!(format!("{err}"), "city 'Lagos' has a blank id");
    }

    #[test]
    fn test_catalog_error_from_serde_json() {
        let json_err = serde_json::from_str::<Vec<u32>>("[1, 2").unwrap_err();
        let err: CatalogError = json_err.into();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_catalog_error_is_error_trait() {
        let err = CatalogError::Empty;
        assert!(std::error::Error::source(&err).is_none());
        assert_eq!(format!("{err}"), "catalog has no records");
    }
}
