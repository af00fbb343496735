//! Selection state machine for the detail panel.
//!
//! `Idle` means no city is selected. `Detail` carries the selected city and
//! the active tab, so a tab can never exist without a city. Selecting a new
//! city starts on [`DetailTab::Overview`]; clicking the city already shown only
//! returns the panel to that tab.

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;

use crate::catalog::{Catalog, CityId, CityRecord};
use crate::geo::GeoCoord;
use crate::interaction::PointRef;

/// Tabs of the detail panel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Impact,
    Stats,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::Overview, DetailTab::Impact, DetailTab::Stats];

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Impact => "Impact",
            DetailTab::Stats => "Stats",
        }
    }
}

/// A tab name that is not one of `overview`, `impact` or `stats`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTab(pub String);

impl fmt::Display for UnknownTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown detail tab '{}'", self.0)
    }
}

impl std::error::Error for UnknownTab {}

impl FromStr for DetailTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overview" => Ok(DetailTab::Overview),
            "impact" => Ok(DetailTab::Impact),
            "stats" => Ok(DetailTab::Stats),
            _ => Err(UnknownTab(s.to_string())),
        }
    }
}

/// What a transition did to the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Unchanged,
    Selected(CityId),
    TabChanged(DetailTab),
    Closed,
}

/// Current panel state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Detail { city: CityId, tab: DetailTab },
}

impl Selection {
    /// A click on a point. Unresolvable points leave the state untouched.
    pub fn click(&mut self, catalog: &Catalog, point: &PointRef) -> SelectionChange {
        let Some(record) = point.resolve(catalog) else {
            return SelectionChange::Unchanged;
        };
        if self.city() == Some(&record.id) {
            return self.select_tab(DetailTab::Overview);
        }
        *self = Selection::Detail {
            city: record.id.clone(),
            tab: DetailTab::Overview,
        };
        SelectionChange::Selected(record.id.clone())
    }

    pub fn close(&mut self) -> SelectionChange {
        match self {
            Selection::Idle => SelectionChange::Unchanged,
            Selection::Detail { .. } => {
                *self = Selection::Idle;
                SelectionChange::Closed
            }
        }
    }

    pub fn select_tab(&mut self, new_tab: DetailTab) -> SelectionChange {
        match self {
            Selection::Detail { tab, .. } if *tab != new_tab => {
                *tab = new_tab;
                SelectionChange::TabChanged(new_tab)
            }
            _ => SelectionChange::Unchanged,
        }
    }

    /// Select a tab by name; unknown names are ignored.
    pub fn select_tab_named(&mut self, name: &str) -> SelectionChange {
        match name.parse::<DetailTab>() {
            Ok(tab) => self.select_tab(tab),
            Err(_) => SelectionChange::Unchanged,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    pub fn city(&self) -> Option<&CityId> {
        match self {
            Selection::Idle => None,
            Selection::Detail { city, .. } => Some(city),
        }
    }

    pub fn tab(&self) -> Option<DetailTab> {
        match self {
            Selection::Idle => None,
            Selection::Detail { tab, .. } => Some(*tab),
        }
    }

    pub fn selected_record<'a>(&self, catalog: &'a Catalog) -> Option<&'a CityRecord> {
        self.city().and_then(|id| catalog.get(id))
    }

    /// Coordinates that should carry a ring highlight: empty or the selected city.
    pub fn ring_points(&self, catalog: &Catalog) -> Vec<GeoCoord> {
        self.selected_record(catalog)
            .map(|r| r.coord)
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn city(id: &str) -> PointRef {
        PointRef::City(CityId::new(id))
    }

    fn detail(id: &str, tab: DetailTab) -> Selection {
        Selection::Detail {
            city: CityId::new(id),
            tab,
        }
    }

    #[test]
    fn test_default_is_idle() {
        let s = Selection::default();
        assert!(s.is_idle());
        assert!(s.city().is_none());
        assert!(s.tab().is_none());
    }

    #[test]
    fn test_click_known_city_from_idle() {
        let cat = catalog();
        let mut s = Selection::Idle;
        let change = s.click(&cat, &city("accra"));
        assert_eq!(change, SelectionChange::Selected(CityId::new("accra")));
        assert_eq!(s, detail("accra", DetailTab::Overview));
    }

    #[test]
    fn test_click_unknown_city_is_noop() {
        let cat = catalog();
        let mut s = detail("lagos", DetailTab::Impact);
        assert_eq!(s.click(&cat, &city("cairo")), SelectionChange::Unchanged);
        assert_eq!(s, detail("lagos", DetailTab::Impact));
    }

    #[test]
    fn test_click_new_city_resets_tab() {
        let cat = catalog();
        let mut s = detail("lagos", DetailTab::Impact);
        s.click(&cat, &city("dakar"));
        assert_eq!(s, detail("dakar", DetailTab::Overview));
    }

    #[test]
    fn test_click_same_city_resets_tab() {
        let cat = catalog();
        let mut s = detail("lagos", DetailTab::Stats);
        let change = s.click(&cat, &city("lagos"));
        assert_eq!(change, SelectionChange::TabChanged(DetailTab::Overview));
        assert_eq!(s, detail("lagos", DetailTab::Overview));
    }

    #[test]
    fn test_click_same_city_on_overview_is_unchanged() {
        let cat = catalog();
        let mut s = detail("lagos", DetailTab::Overview);
        assert_eq!(s.click(&cat, &city("lagos")), SelectionChange::Unchanged);
        assert_eq!(s, detail("lagos", DetailTab::Overview));
    }

    #[test]
    fn test_click_by_coordinate() {
        let cat = catalog();
        let mut s = Selection::Idle;
        s.click(&cat, &PointRef::Coord(GeoCoord::new(-26.2041, 28.0473)));
        assert_eq!(s, detail("johannesburg", DetailTab::Overview));

        s.click(&cat, &PointRef::Coord(GeoCoord::new(0.0, 0.0)));
        assert_eq!(s, detail("johannesburg", DetailTab::Overview));
    }

    #[test]
    fn test_close_from_every_tab() {
        for tab in DetailTab::ALL {
            let mut s = detail("nairobi", tab);
            assert_eq!(s.close(), SelectionChange::Closed);
            assert!(s.is_idle());
        }
        let mut idle = Selection::Idle;
        assert_eq!(idle.close(), SelectionChange::Unchanged);
    }

    #[test]
    fn test_select_tab_in_detail() {
        let mut s = detail("kinshasa", DetailTab::Overview);
        for tab in [DetailTab::Impact, DetailTab::Stats, DetailTab::Overview] {
            assert_eq!(s.select_tab(tab), SelectionChange::TabChanged(tab));
            assert_eq!(s, detail("kinshasa", tab));
        }
        assert_eq!(s.select_tab(DetailTab::Overview), SelectionChange::Unchanged);
    }

    #[test]
    fn test_select_tab_when_idle_is_noop() {
        let mut s = Selection::Idle;
        assert_eq!(s.select_tab(DetailTab::Stats), SelectionChange::Unchanged);
        assert!(s.is_idle());
    }

    #[test]
    fn test_select_tab_named() {
        let mut s = detail("lagos", DetailTab::Overview);
        assert_eq!(
            s.select_tab_named("Stats"),
            SelectionChange::TabChanged(DetailTab::Stats)
        );
        assert_eq!(s.select_tab_named("history"), SelectionChange::Unchanged);
        assert_eq!(s, detail("lagos", DetailTab::Stats));
    }

    #[test]
    fn test_detail_tab_from_str() {
        assert_eq!("overview".parse::<DetailTab>(), Ok(DetailTab::Overview));
        assert_eq!(" IMPACT ".parse::<DetailTab>(), Ok(DetailTab::Impact));
        assert!("".parse::<DetailTab>().is_err());
    }

    #[test]
    fn test_ring_points_follow_selection() {
        let cat = catalog();
        assert!(Selection::Idle.ring_points(&cat).is_empty());

        let rings = detail("lagos", DetailTab::Impact).ring_points(&cat);
        assert_eq!(rings.len(), 1);
        assert!((rings[0].lat - 6.5244).abs() < 1e-9);
    }

    #[test]
    fn test_selected_record_missing_city() {
        let cat = catalog();
        assert!(detail("atlantis", DetailTab::Overview)
            .selected_record(&cat)
            .is_none());
    }
}
