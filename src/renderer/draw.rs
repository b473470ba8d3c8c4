// renderer/draw.rs
// World-space drawing: axis, charge markers, and force arrows

use ultraviolet::Vec2;

use crate::config;

impl super::Renderer {
    /// Full clear-and-redraw of the scene. Idempotent for a given charge
    /// set; no incremental diffing.
    pub fn draw(&mut self, ctx: &mut quarkstrom::RenderContext) {
        ctx.clear_circles();
        ctx.clear_lines();
        ctx.set_view_pos(self.pos);
        ctx.set_view_scale(self.scale);

        self.draw_axis(ctx);
        self.draw_force_arrows(ctx);
        self.draw_charges(ctx);
    }

    fn draw_axis(&self, ctx: &mut quarkstrom::RenderContext) {
        let (x_min, x_max) = self.calculator.slot_range();
        ctx.draw_line(
            Vec2::new(x_min as f32 * config::GRID_SPACING, 0.0),
            Vec2::new(x_max as f32 * config::GRID_SPACING, 0.0),
            config::COLOR_AXIS,
        );
        for x in x_min..=x_max {
            let cx = x as f32 * config::GRID_SPACING;
            ctx.draw_line(
                Vec2::new(cx, -config::TICK_HALF_HEIGHT),
                Vec2::new(cx, config::TICK_HALF_HEIGHT),
                config::COLOR_AXIS,
            );
        }
    }

    fn draw_charges(&self, ctx: &mut quarkstrom::RenderContext) {
        for charge in self.calculator.charges() {
            let color = if charge.show_force {
                config::COLOR_CHARGE_ACTIVE
            } else {
                config::COLOR_CHARGE_MUTED
            };
            ctx.draw_circle(charge.world_pos(), config::CHARGE_RADIUS, color);
        }
    }

    fn draw_force_arrows(&self, ctx: &mut quarkstrom::RenderContext) {
        for (charge, &force) in self.calculator.charges().iter().zip(self.forces()) {
            if !charge.show_force {
                continue;
            }
            let dir = if force > 0.0 { 1.0 } else { -1.0 };
            let color = if force > 0.0 {
                config::COLOR_FORCE_POSITIVE
            } else {
                config::COLOR_FORCE_NEGATIVE
            };
            let start = charge.world_pos();
            let shaft_end = start + Vec2::new(dir * config::ARROW_OFFSET, 0.0);
            ctx.draw_line(start, shaft_end, color);

            let tip = shaft_end + Vec2::new(dir * config::ARROWHEAD_LENGTH, 0.0);
            let barb_up = shaft_end + Vec2::new(0.0, config::ARROWHEAD_HALF_WIDTH);
            let barb_down = shaft_end - Vec2::new(0.0, config::ARROWHEAD_HALF_WIDTH);
            ctx.draw_line(tip, barb_up, color);
            ctx.draw_line(tip, barb_down, color);
            ctx.draw_line(barb_up, barb_down, color);
        }
    }
}
