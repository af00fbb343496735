//! Egui rendering for the city detail panel.

use bevy::prelude::*;
use bevy_egui::egui::emath::TSTransform;
use bevy_egui::{egui, EguiContexts};

use atlas::{Catalog, CityId, CityRecord, DetailTab, GlobeInput, Selection};

use super::helpers::{
    content_fade, impact_lines, panel_scale, song_detail, stat_cells, PANEL_FADE_SECS,
};
use crate::theme::{accent, chip_fill};

const PANEL_WIDTH: f32 = 340.0;
const PANEL_MARGIN: f32 = 16.0;

/// What the panel last drew, so it can keep drawing while it fades out and
/// restart the content fade when the tab or city changes.
#[derive(Debug, Default)]
pub struct PanelMemory {
    city: Option<CityId>,
    tab: DetailTab,
    content_since: f64,
}

/// Uniform scale of `s` around `center`.
pub fn scale_about(center: egui::Pos2, s: f32) -> TSTransform {
    TSTransform::new(center.to_vec2() * (1.0 - s), s)
}

/// System that draws the panel for the selected city.
///
/// Opening fades and scales the panel in; closing plays the same in reverse
/// with the last city still drawn but no longer interactive.
pub fn detail_panel_ui(
    mut contexts: EguiContexts,
    selection: Res<Selection>,
    catalog: Res<Catalog>,
    mut memory: Local<PanelMemory>,
    mut input: EventWriter<GlobeInput>,
) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };
    let now = ctx.input(|i| i.time);
    let panel_id = egui::Id::new("city_detail_panel");

    let open = match &*selection {
        Selection::Detail { city, tab } if catalog.get(city).is_some() => {
            if memory.city.as_ref() != Some(city) || memory.tab != *tab {
                memory.city = Some(city.clone());
                memory.tab = *tab;
                memory.content_since = now;
            }
            true
        }
        _ => false,
    };
    let opacity = ctx.animate_bool_with_time(panel_id.with("fade"), open, PANEL_FADE_SECS);
    if opacity <= 0.0 {
        memory.city = None;
        return;
    }
    let Some(record) = memory.city.as_ref().and_then(|id| catalog.get(id)) else {
        return;
    };
    let tab = memory.tab;
    let content = content_fade((now - memory.content_since) as f32);
    if opacity < 1.0 || content.opacity < 1.0 {
        ctx.request_repaint();
    }

    let frame = egui::Frame::window(&ctx.style()).multiply_with_opacity(opacity);
    let shown = egui::Window::new("City Details")
        .id(panel_id)
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .frame(frame)
        .default_width(PANEL_WIDTH)
        .anchor(egui::Align2::RIGHT_CENTER, egui::vec2(-PANEL_MARGIN, 0.0))
        .show(ctx, |ui| {
            ui.multiply_opacity(opacity);
            if !open {
                ui.disable();
            }
            if header(ui, record) && open {
                input.send(GlobeInput::ClosePanel);
            }
            ui.separator();

            ui.horizontal(|ui| {
                for candidate in DetailTab::ALL {
                    if ui
                        .selectable_label(tab == candidate, candidate.label())
                        .clicked()
                        && open
                    {
                        input.send(GlobeInput::SelectTab(candidate));
                    }
                }
            });
            ui.add_space(6.0);

            egui::ScrollArea::vertical()
                .max_height(420.0)
                .show(ui, |ui| {
                    ui.multiply_opacity(content.opacity);
                    ui.add_space(content.offset);
                    match tab {
                        DetailTab::Overview => overview_tab(ui, record),
                        DetailTab::Impact => impact_tab(ui, record),
                        DetailTab::Stats => stats_tab(ui, record),
                    }
                });
        });

    if let Some(shown) = shown {
        let transform = scale_about(shown.response.rect.center(), panel_scale(opacity));
        ctx.set_transform_layer(shown.response.layer_id, transform);
    }
}

/// Name, genre and the close button. Returns `true` when close was clicked.
fn header(ui: &mut egui::Ui, record: &CityRecord) -> bool {
    let mut close = false;
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(&record.name);
            ui.label(egui::RichText::new(&record.genre).color(accent()));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
            close = ui.button("✕").on_hover_text("Close").clicked();
        });
    });
    close
}

fn overview_tab(ui: &mut egui::Ui, record: &CityRecord) {
    ui.label(&record.description);
    ui.add_space(8.0);

    ui.label(egui::RichText::new("Notable Artists").strong());
    ui.horizontal_wrapped(|ui| {
        for artist in &record.artists {
            egui::Frame::new()
                .fill(chip_fill())
                .corner_radius(egui::CornerRadius::same(10))
                .inner_margin(egui::Margin::symmetric(8, 3))
                .show(ui, |ui| {
                    ui.label(artist);
                });
        }
    });
    ui.add_space(8.0);

    ui.label(egui::RichText::new("Top Songs").strong());
    for song in &record.top_songs {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("•").color(accent()));
            ui.vertical(|ui| {
                ui.label(&song.title);
                ui.label(egui::RichText::new(song_detail(song)).small().weak());
            });
        });
    }
}

fn impact_tab(ui: &mut egui::Ui, record: &CityRecord) {
    for line in impact_lines(&record.cultural_impact) {
        ui.label(line);
        ui.add_space(4.0);
    }
}

fn stats_tab(ui: &mut egui::Ui, record: &CityRecord) {
    egui::Grid::new("city_stats")
        .num_columns(2)
        .spacing([12.0, 12.0])
        .show(ui, |ui| {
            for (i, cell) in stat_cells(&record.stats).iter().enumerate() {
                egui::Frame::new()
                    .fill(chip_fill())
                    .corner_radius(egui::CornerRadius::same(6))
                    .inner_margin(egui::Margin::same(8))
                    .show(ui, |ui| {
                        ui.set_min_width(PANEL_WIDTH / 2.0 - 28.0);
                        ui.label(
                            egui::RichText::new(&cell.value)
                                .size(20.0)
                                .strong()
                                .color(accent()),
                        );
                        ui.label(egui::RichText::new(cell.label).small());
                    });
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}
