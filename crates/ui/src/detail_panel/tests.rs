//! Tests for the detail panel text helpers.

use super::*;
use atlas::{Catalog, CityId, CityStats, TopSong};

fn lagos_stats() -> CityStats {
    Catalog::builtin()
        .unwrap()
        .get(&CityId::new("lagos"))
        .unwrap()
        .stats
        .clone()
}

#[test]
fn test_stat_cells_order_and_labels() {
    let cells = stat_cells(&lagos_stats());
    assert_eq!(cells[0].value, "2.5B+");
    let labels: Vec<_> = cells.iter().map(|c| c.label).collect();
    assert_eq!(
        labels,
        [
            "Total Streams",
            "Music Venues",
            "Annual Festivals",
            "Yearly Events"
        ]
    );
}

#[test]
fn test_stat_cells_values() {
    let stats = CityStats {
        streams: "2.5B+".to_string(),
        venues: 450,
        festivals: 25,
        yearly_events: 1200,
    };
    let cells = stat_cells(&stats);
    assert_eq!(cells[0].value, "2.5B+");
    assert_eq!(cells[1].value, "450");
    assert_eq!(cells[2].value, "25");
    assert_eq!(cells[3].value, "1200");
}

#[test]
fn test_impact_lines_numbered_from_one() {
    let notes = vec!["First".to_string(), "Second".to_string()];
    assert_eq!(impact_lines(&notes), ["1. First", "2. Second"]);
    assert!(impact_lines(&[]).is_empty());
}

#[test]
fn test_song_detail() {
    let song = TopSong {
        title: "Song".to_string(),
        year: 2019,
        streams: "100M+".to_string(),
    };
    assert_eq!(song_detail(&song), "2019 · 100M+ streams");
}

#[test]
fn test_every_city_has_panel_content() {
    let catalog = Catalog::builtin().unwrap();
    for record in catalog.records() {
        assert!(!record.artists.is_empty(), "{} has no artists", record.id);
        assert!(!record.top_songs.is_empty(), "{} has no songs", record.id);
        assert_eq!(
            impact_lines(&record.cultural_impact).len(),
            record.cultural_impact.len()
        );
    }
}

#[test]
fn test_panel_scale_from_hidden_to_shown() {
    assert!((panel_scale(0.0) - PANEL_HIDDEN_SCALE).abs() < 1e-6);
    assert!((panel_scale(0.5) - 0.95).abs() < 1e-6);
    assert!((panel_scale(1.0) - 1.0).abs() < 1e-6);
    assert!((panel_scale(3.0) - 1.0).abs() < 1e-6);
}

#[test]
fn test_scale_about_keeps_centre_fixed() {
    use bevy_egui::egui::pos2;

    let centre = pos2(900.0, 360.0);
    let t = scale_about(centre, 0.9);
    let mapped = t * centre;
    assert!((mapped - centre).length() < 1e-3);

    // A corner 100 pt right of centre moves in to 90 pt.
    let corner = t * pos2(1000.0, 360.0);
    assert!((corner.x - 990.0).abs() < 1e-3);
}

#[test]
fn test_content_fade_settles() {
    let start = content_fade(0.0);
    assert!(start.opacity.abs() < 1e-6);
    assert!((start.offset - TAB_SLIDE_PX).abs() < 1e-6);

    let mid = content_fade(TAB_FADE_SECS / 2.0);
    assert!((mid.opacity - 0.5).abs() < 1e-5);
    assert!(mid.offset > 0.0 && mid.offset < TAB_SLIDE_PX);

    let done = content_fade(TAB_FADE_SECS * 4.0);
    assert!((done.opacity - 1.0).abs() < 1e-6);
    assert!(done.offset.abs() < 1e-6);
}
