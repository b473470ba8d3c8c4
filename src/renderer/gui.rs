// renderer/gui.rs
// egui control window, help overlay, and the world-anchored text labels
// (tick numbers, charge magnitudes, force values)

use quarkstrom::egui::{self, Align2, Color32, FontId};
use ultraviolet::Vec2;

use crate::config;
use crate::fraction;
use crate::io;

impl super::Renderer {
    pub fn show_gui(&mut self, ctx: &quarkstrom::egui::Context) {
        self.draw_world_labels(ctx);
        self.show_controls_window(ctx);
        self.show_help_window(ctx);
    }

    fn show_controls_window(&mut self, ctx: &egui::Context) {
        let mut open = self.settings_window_open;
        egui::Window::new("Field Controls")
            .default_width(300.0)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label("Left click on the axis: place a charge or toggle its arrow");
                ui.label("Right click on a charge: remove it");
                ui.separator();

                ui.horizontal(|ui| {
                    ui.label("Magnitude (Q):");
                    ui.text_edit_singleline(&mut self.magnitude_input);
                });
                ui.checkbox(&mut self.show_fraction, "Show forces as fractions");
                ui.checkbox(
                    &mut self.show_negative_force,
                    "Show sign on leftward forces",
                );

                ui.separator();
                self.show_charge_list(ui);

                ui.separator();
                self.show_layout_controls(ui);

                ui.separator();
                if ui.button("Help").clicked() {
                    self.toggle_help();
                }
                if let Some(status) = &self.status_line {
                    ui.label(status.clone());
                }
            });
        self.settings_window_open = open;
    }

    fn show_charge_list(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("Charges: {}", self.calculator.charges().len()));
        let mut toggle_slot = None;
        let mut remove_slot = None;
        let forces = self.forces().to_vec();
        for (charge, force) in self.calculator.charges().iter().zip(forces.iter()) {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "x = {:>3}   q = {}Q   F = {}",
                    charge.x,
                    charge.q,
                    fraction::force_label(*force, self.show_fraction, true)
                ));
                let toggle_text = if charge.show_force { "Hide" } else { "Show" };
                if ui.small_button(toggle_text).clicked() {
                    toggle_slot = Some(charge.x);
                }
                if ui.small_button("Remove").clicked() {
                    remove_slot = Some(charge.x);
                }
            });
        }
        if let Some(x) = toggle_slot {
            self.calculator.toggle_force_display(x);
        }
        if let Some(x) = remove_slot {
            self.calculator.remove_charge(x);
        }
        if !self.calculator.charges().is_empty() && ui.button("Clear all").clicked() {
            self.calculator.clear();
        }
    }

    fn show_layout_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Layout name:");
            ui.text_edit_singleline(&mut self.save_name);
            if ui.button("Save").clicked() {
                let name = self.save_name.trim().to_string();
                if name.is_empty() {
                    self.status_line = Some("Enter a layout name before saving".to_string());
                } else {
                    self.status_line = Some(match io::save_layout(&name, &self.calculator) {
                        Ok(()) => format!("Saved layout '{}'", name),
                        Err(e) => format!("Save failed: {}", e),
                    });
                }
            }
        });

        let layouts = io::available_layouts();
        if layouts.is_empty() {
            return;
        }
        ui.horizontal(|ui| {
            egui::ComboBox::from_label("Saved layouts")
                .selected_text(self.load_selected.as_deref().unwrap_or("Select layout"))
                .show_ui(ui, |ui| {
                    for name in &layouts {
                        ui.selectable_value(&mut self.load_selected, Some(name.clone()), name);
                    }
                });
            if ui.button("Load").clicked() {
                if let Some(name) = self.load_selected.clone() {
                    self.status_line = Some(match io::load_layout(&name) {
                        Ok(calc) => {
                            self.calculator = calc;
                            format!("Loaded layout '{}'", name)
                        }
                        Err(e) => format!("Load failed: {}", e),
                    });
                }
            }
        });
    }

    fn show_help_window(&mut self, ctx: &egui::Context) {
        if !self.help_window_open {
            return;
        }
        let mut open = self.help_window_open;
        egui::Window::new("Help")
            .default_width(440.0)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if let Some(text) = &self.help_text {
                        ui.monospace(text.clone());
                    }
                });
            });
        self.help_window_open = open;
    }

    /// Text anchored to world positions, painted on the background layer
    /// behind the egui windows.
    fn draw_world_labels(&self, ctx: &egui::Context) {
        if self.window_width == 0 || self.window_height == 0 {
            return;
        }
        let painter = ctx.layer_painter(egui::LayerId::background());
        let ppp = ctx.pixels_per_point();
        let to_points = |world: Vec2| {
            let px = self.screen_from_world(world);
            egui::pos2(px.x / ppp, px.y / ppp)
        };

        // Font sizes track the zoom level the way the world geometry does
        let px_per_world = self.window_height as f32 / (2.0 * self.scale) / ppp;
        let tick_font = FontId::proportional((0.4 * px_per_world).clamp(8.0, 48.0));
        let label_font = FontId::proportional((0.5 * px_per_world).clamp(8.0, 60.0));

        let (x_min, x_max) = self.calculator.slot_range();
        for x in x_min..=x_max {
            let world = Vec2::new(x as f32 * config::GRID_SPACING, -config::TICK_LABEL_OFFSET);
            painter.text(
                to_points(world),
                Align2::CENTER_CENTER,
                x.to_string(),
                tick_font.clone(),
                Color32::GRAY,
            );
        }

        for (charge, &force) in self.calculator.charges().iter().zip(self.forces()) {
            let below = charge.world_pos() - Vec2::new(0.0, config::CHARGE_LABEL_OFFSET);
            painter.text(
                to_points(below),
                Align2::CENTER_TOP,
                format!("{}Q", charge.q),
                label_font.clone(),
                Color32::WHITE,
            );
            if !charge.show_force {
                continue;
            }
            let dir = if force > 0.0 { 1.0 } else { -1.0 };
            let label_pos = charge.world_pos()
                + Vec2::new(
                    dir * (config::ARROW_OFFSET + config::FORCE_LABEL_ADVANCE),
                    config::FORCE_LABEL_RAISE,
                );
            painter.text(
                to_points(label_pos),
                Align2::CENTER_CENTER,
                fraction::force_label(force, self.show_fraction, self.show_negative_force),
                label_font.clone(),
                Color32::WHITE,
            );
        }
    }
}
