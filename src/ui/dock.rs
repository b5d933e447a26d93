//! Dock (bottom bar) for the simulation controls.
//!
//! Holds the play/pause toggle, the restart button, the gravitational
//! constant and the scenario picker.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{colors, icons};
use crate::scenarios::SCENARIOS;
use crate::simulation::{EditorValues, Simulation};
use crate::types::SimulationStatus;

/// Icon, color and hover text of the play/pause button.
pub fn play_pause_face(status: SimulationStatus) -> (&'static str, egui::Color32, &'static str) {
    match status {
        SimulationStatus::Running => (icons::PAUSE, colors::PAUSE_ICON, "Pause (Space)"),
        SimulationStatus::Setting | SimulationStatus::Paused => {
            (icons::PLAY, colors::PLAY_ICON, "Play (Space)")
        }
    }
}

/// System that renders the dock at the bottom.
pub fn dock_system(
    mut contexts: EguiContexts,
    mut simulation: ResMut<Simulation>,
    mut editor: ResMut<EditorValues>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::bottom("dock")
        .exact_height(48.0)
        .frame(
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(16, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 12.0;

                render_play_pause(ui, &mut simulation);
                render_restart(ui, &mut simulation);

                ui.separator();
                ui.label(
                    egui::RichText::new(simulation.status().label())
                        .monospace()
                        .color(colors::MUTED),
                );

                ui.separator();
                render_gravity(ui, &mut simulation, &mut editor);

                ui.separator();
                render_scenario_picker(ui, &mut simulation, &mut editor);
            });
        });
}

fn render_play_pause(ui: &mut egui::Ui, simulation: &mut Simulation) {
    let (icon, color, hover) = play_pause_face(simulation.status());
    let button = egui::Button::new(egui::RichText::new(icon).size(20.0).color(color))
        .min_size(egui::vec2(36.0, 30.0));

    if ui.add(button).on_hover_text(hover).clicked() {
        simulation.toggle_play_pause();
    }
}

fn render_restart(ui: &mut egui::Ui, simulation: &mut Simulation) {
    let button = egui::Button::new(egui::RichText::new(icons::RESET).size(18.0))
        .min_size(egui::vec2(36.0, 30.0));

    if ui
        .add(button)
        .on_hover_text("Back to editing (R)")
        .clicked()
    {
        simulation.restart();
    }
}

fn render_gravity(ui: &mut egui::Ui, simulation: &mut Simulation, editor: &mut EditorValues) {
    ui.label(egui::RichText::new("G").strong().color(colors::TEXT));
    let response = ui.add(
        egui::DragValue::new(&mut editor.gravitational_constant)
            .speed(0.01)
            .max_decimals(6),
    );

    if response.changed() {
        simulation.mark_edited();
    }
}

fn render_scenario_picker(
    ui: &mut egui::Ui,
    simulation: &mut Simulation,
    editor: &mut EditorValues,
) {
    egui::ComboBox::from_id_salt("scenario")
        .selected_text("Load scenario")
        .show_ui(ui, |ui| {
            for scenario in SCENARIOS {
                let clicked = ui
                    .selectable_label(false, scenario.name)
                    .on_hover_text(scenario.description)
                    .clicked();

                if clicked {
                    if let Err(err) = scenario.load(simulation, editor) {
                        warn!("Failed to load scenario '{}': {}", scenario.name, err);
                    }
                }
            }
        });
}
