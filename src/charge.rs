// charge.rs
// The PointCharge value object: one charge pinned to an integer axis slot

use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointCharge {
    /// Integer slot on the axis.
    pub x: i32,
    /// Signed magnitude in units of Q.
    pub q: f32,
    /// Whether the net-force arrow is drawn for this charge.
    pub show_force: bool,
}

impl PointCharge {
    pub fn new(x: i32, q: f32) -> Self {
        Self {
            x,
            q,
            show_force: true,
        }
    }

    pub fn toggle_force_display(&mut self) {
        self.show_force = !self.show_force;
    }

    /// World-space position of the charge center on the axis.
    pub fn world_pos(&self) -> Vec2 {
        Vec2::new(self.x as f32 * config::GRID_SPACING, 0.0)
    }
}
