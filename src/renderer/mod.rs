// renderer/mod.rs
// Application state driven by the quarkstrom loop: view transform, GUI
// state, and the charge set being visualized

pub mod draw;
pub mod gui;
pub mod input;

use quarkstrom::winit_input_helper::WinitInputHelper;
use ultraviolet::Vec2;

use crate::field::ElectricFieldCalculator;
use crate::scenario;

pub struct Renderer {
    // View transform
    pos: Vec2,
    scale: f32,
    pub window_width: u16,
    pub window_height: u16,

    // Charge state
    pub calculator: ElectricFieldCalculator,
    /// Net forces recomputed every frame, parallel to the charge array.
    forces: Vec<f32>,

    // Display toggles
    pub show_fraction: bool,
    pub show_negative_force: bool,

    // GUI state
    settings_window_open: bool,
    help_window_open: bool,
    help_text: Option<String>,
    pub magnitude_input: String,
    save_name: String,
    load_selected: Option<String>,
    status_line: Option<String>,
}

impl quarkstrom::Renderer for Renderer {
    fn new() -> Self {
        let startup = scenario::startup();
        Self {
            pos: Vec2::zero(),
            scale: startup.view_scale,
            window_width: 0,
            window_height: 0,
            forces: startup.calculator.net_forces(),
            calculator: startup.calculator,
            show_fraction: false,
            show_negative_force: false,
            settings_window_open: true,
            help_window_open: false,
            help_text: None,
            magnitude_input: String::from("1"),
            save_name: String::new(),
            load_selected: None,
            status_line: None,
        }
    }

    fn input(&mut self, input: &WinitInputHelper, width: u16, height: u16) {
        self.window_width = width;
        self.window_height = height;
        if width == 0 || height == 0 {
            // Window is minimized; ignore input until restored
            return;
        }
        self.handle_input(input, width, height);
    }

    fn render(&mut self, ctx: &mut quarkstrom::RenderContext) {
        if self.window_width == 0 || self.window_height == 0 {
            // Surface has zero area while minimized, skip drawing
            return;
        }
        self.forces = self.calculator.net_forces();
        self.draw(ctx);
    }

    fn gui(&mut self, ctx: &quarkstrom::egui::Context) {
        self.show_gui(ctx);
    }
}

impl Renderer {
    pub fn forces(&self) -> &[f32] {
        &self.forces
    }

    /// Screen pixel -> world position, inverse of the view transform.
    pub fn world_from_screen(&self, mx: f32, my: f32) -> Vec2 {
        let (width, height) = (self.window_width as f32, self.window_height as f32);
        let mut mouse = Vec2::new(mx, my);
        mouse *= 2.0 / height;
        mouse.y -= 1.0;
        mouse.y *= -1.0;
        mouse.x -= width / height;
        mouse * self.scale + self.pos
    }

    /// World position -> screen pixel.
    pub fn screen_from_world(&self, world: Vec2) -> Vec2 {
        let (width, height) = (self.window_width as f32, self.window_height as f32);
        let v = (world - self.pos) / self.scale;
        Vec2::new(
            (v.x + width / height) * height / 2.0,
            (1.0 - v.y) * height / 2.0,
        )
    }
}
