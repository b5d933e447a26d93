//! Side panel with one editable form per body.
//!
//! The forms write into [`EditorValues`]; the simulation pulls them into the
//! live bodies on its next tick while editing. Touching any field sends the
//! simulation back to editing.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{colors, icons};
use crate::body::BodyInit;
use crate::simulation::{EditorValues, Simulation, add_edited_body, remove_edited_body};
use crate::types::BodyId;

/// What the user did to one body form this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct FormResponse {
    changed: bool,
    delete: bool,
}

/// System that renders the body editor panel.
pub fn body_panel_system(
    mut contexts: EguiContexts,
    mut simulation: ResMut<Simulation>,
    mut editor: ResMut<EditorValues>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut changed = false;
    let mut delete: Option<BodyId> = None;
    let mut add = false;

    egui::SidePanel::left("bodies")
        .default_width(240.0)
        .frame(
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::same(10)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Bodies").strong().color(colors::TEXT));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    add = ui
                        .button(icons::ADD)
                        .on_hover_text("Add body (N)")
                        .clicked();
                });
            });
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                for (id, init) in editor.iter_mut() {
                    let response = body_form(ui, id, init);
                    changed |= response.changed;
                    if response.delete {
                        delete = Some(id);
                    }
                }
            });
        });

    if changed {
        simulation.mark_edited();
    }
    if let Some(id) = delete {
        if let Err(err) = remove_edited_body(&mut simulation, &mut editor, id) {
            warn!("Could not delete body: {}", err);
        }
    }
    if add {
        if let Err(err) = add_edited_body(&mut simulation, &mut editor, BodyInit::default()) {
            warn!("Could not add body: {}", err);
        }
    }
}

fn body_form(ui: &mut egui::Ui, id: BodyId, init: &mut BodyInit) -> FormResponse {
    let mut response = FormResponse::default();

    egui::CollapsingHeader::new(format!("{} {}", icons::PLANET, id))
        .id_salt(id.0)
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new(("body_form", id.0))
                .num_columns(3)
                .spacing([6.0, 4.0])
                .show(ui, |ui| {
                    let pos = &mut init.pos;
                    response.changed |= vector_row(ui, "Position", &mut pos.x, &mut pos.y, 0.01);
                    let vel = &mut init.vel;
                    response.changed |= vector_row(ui, "Velocity", &mut vel.x, &mut vel.y, 1e-4);

                    ui.label("Mass");
                    response.changed |= ui
                        .add(egui::DragValue::new(&mut init.mass).speed(0.1))
                        .changed();
                    ui.end_row();

                    ui.label("Radius");
                    response.changed |= ui
                        .add(
                            egui::DragValue::new(&mut init.radius)
                                .speed(0.01)
                                .range(0.0..=f64::MAX),
                        )
                        .changed();
                    ui.end_row();

                    ui.label("Color");
                    response.changed |= ui.color_edit_button_srgb(&mut init.color.0).changed();
                    ui.end_row();
                });

            if init.mass == 0.0 {
                ui.colored_label(
                    colors::WARNING,
                    format!("{} Mass must not be zero", icons::WARNING),
                );
            }

            response.delete = ui
                .button(format!("{} Delete", icons::DELETE))
                .clicked();
        });

    response
}

fn vector_row(ui: &mut egui::Ui, label: &str, x: &mut f64, y: &mut f64, speed: f64) -> bool {
    ui.label(label);
    let x_changed = ui
        .add(egui::DragValue::new(x).speed(speed).prefix("x "))
        .changed();
    let y_changed = ui
        .add(egui::DragValue::new(y).speed(speed).prefix("y "))
        .changed();
    ui.end_row();

    x_changed || y_changed
}
