// renderer/input.rs
// Pointer and keyboard handling: view pan/zoom plus charge placement,
// toggling, and removal on the axis

use quarkstrom::winit::event::VirtualKeyCode;
use quarkstrom::winit_input_helper::WinitInputHelper;
use ultraviolet::Vec2;

use crate::config;
use crate::io;

impl super::Renderer {
    pub fn handle_input(&mut self, input: &WinitInputHelper, width: u16, height: u16) {
        self.settings_window_open ^= input.key_pressed(VirtualKeyCode::E);
        if input.key_pressed(VirtualKeyCode::H) {
            self.toggle_help();
        }
        if input.key_pressed(VirtualKeyCode::F) {
            self.show_fraction = !self.show_fraction;
        }
        if input.key_pressed(VirtualKeyCode::N) {
            self.show_negative_force = !self.show_negative_force;
        }

        if let Some((mx, my)) = input.mouse() {
            // Scroll steps to double/halve the scale
            let steps = 5.0;
            let zoom = (-input.scroll_diff() / steps).exp2();

            // Screen space -> view space
            let target =
                Vec2::new(mx * 2.0 - width as f32, height as f32 - my * 2.0) / height as f32;

            self.pos += target * self.scale * (1.0 - zoom);
            self.scale *= zoom;
        }

        // Grab
        if input.mouse_held(2) {
            let (mdx, mdy) = input.mouse_diff();
            self.pos.x -= mdx / height as f32 * self.scale * 2.0;
            self.pos.y += mdy / height as f32 * self.scale * 2.0;
        }

        if input.mouse_pressed(0) {
            if let Some((mx, my)) = input.mouse() {
                if let Some(slot) = grid_slot(self.world_from_screen(mx, my)) {
                    self.place_or_toggle(slot);
                }
            }
        }

        if input.mouse_pressed(1) {
            if let Some((mx, my)) = input.mouse() {
                if let Some(slot) = grid_slot(self.world_from_screen(mx, my)) {
                    self.calculator.remove_charge(slot);
                }
            }
        }
    }

    /// Left-click action on a slot: toggle an existing charge's arrow, or
    /// place a new charge with the magnitude from the input field.
    pub fn place_or_toggle(&mut self, slot: i32) {
        if self.calculator.charge_at(slot).is_some() {
            self.calculator.toggle_force_display(slot);
        } else {
            self.calculator.add_charge(slot, self.input_magnitude());
        }
    }

    /// Magnitude from the GUI input field; malformed or non-finite input
    /// falls back to the default rather than failing.
    pub fn input_magnitude(&self) -> f32 {
        self.magnitude_input
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|q| q.is_finite())
            .unwrap_or(config::DEFAULT_MAGNITUDE)
    }

    pub fn toggle_help(&mut self) {
        self.help_window_open = !self.help_window_open;
        if self.help_window_open && self.help_text.is_none() {
            self.help_text = Some(io::load_help_text());
        }
    }
}

/// Nearest integer slot for a world position, if it lies within the click
/// band around the axis. Range checking is left to the calculator.
pub fn grid_slot(world: Vec2) -> Option<i32> {
    if world.y.abs() >= config::CLICK_BAND {
        return None;
    }
    Some((world.x / config::GRID_SPACING).round() as i32)
}
