//! City detail panel.
//!
//! Shown while a city is selected. The header carries the city name, its
//! genre and a close button; below it three tabs switch between an overview
//! (description, notable artists, top songs), a numbered list of cultural
//! impact notes and a 2x2 grid of headline stats.
//!
//! Opening fades the panel in from 90% scale and closing reverses it. Each
//! time the tab or city changes the tab content fades in with a short upward
//! slide.
//!
//! The panel never edits the selection itself: every click is reported as a
//! [`atlas::GlobeInput`] and applied by the interaction systems.

mod helpers;
mod ui_panel;

#[cfg(test)]
mod tests;

pub use helpers::{
    content_fade, impact_lines, panel_scale, song_detail, stat_cells, ContentFade, StatCell,
    PANEL_FADE_SECS, PANEL_HIDDEN_SCALE, TAB_FADE_SECS, TAB_SLIDE_PX,
};
pub use ui_panel::{detail_panel_ui, scale_about, PanelMemory};
