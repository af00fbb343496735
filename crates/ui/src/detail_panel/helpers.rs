//! Text for the detail panel, kept apart from the egui calls.

use atlas::{CityStats, TopSong};
use rendering::camera_flight::ease_in_out_cubic;

/// One cell of the stats grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCell {
    pub label: &'static str,
    pub value: String,
}

/// The four stats in grid order (row-major).
pub fn stat_cells(stats: &CityStats) -> [StatCell; 4] {
    [
        StatCell {
            label: "Total Streams",
            value: stats.streams.clone(),
        },
        StatCell {
            label: "Music Venues",
            value: stats.venues.to_string(),
        },
        StatCell {
            label: "Annual Festivals",
            value: stats.festivals.to_string(),
        },
        StatCell {
            label: "Yearly Events",
            value: stats.yearly_events.to_string(),
        },
    ]
}

/// Cultural impact notes numbered from 1.
pub fn impact_lines(notes: &[String]) -> Vec<String> {
    notes
        .iter()
        .enumerate()
        .map(|(i, note)| format!("{}. {}", i + 1, note))
        .collect()
}

/// Secondary line under a song title.
pub fn song_detail(song: &TopSong) -> String {
    format!("{} · {} streams", song.year, song.streams)
}

/// Seconds for the panel to fade and scale in or out.
pub const PANEL_FADE_SECS: f32 = 0.3;
/// Panel scale while fully transparent.
pub const PANEL_HIDDEN_SCALE: f32 = 0.9;
/// Seconds for freshly shown tab content to settle.
pub const TAB_FADE_SECS: f32 = 0.25;
/// How far tab content starts below its resting place, in points.
pub const TAB_SLIDE_PX: f32 = 12.0;

/// Panel scale at `opacity` (0 hidden, 1 fully shown).
pub fn panel_scale(opacity: f32) -> f32 {
    PANEL_HIDDEN_SCALE + (1.0 - PANEL_HIDDEN_SCALE) * opacity.clamp(0.0, 1.0)
}

/// Opacity and downward offset of tab content `elapsed` seconds after it
/// was first shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentFade {
    pub opacity: f32,
    pub offset: f32,
}

pub fn content_fade(elapsed: f32) -> ContentFade {
    let t = if TAB_FADE_SECS > 0.0 {
        (elapsed / TAB_FADE_SECS).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let eased = ease_in_out_cubic(t);
    ContentFade {
        opacity: eased,
        offset: TAB_SLIDE_PX * (1.0 - eased),
    }
}
