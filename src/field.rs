// field.rs
// ElectricFieldCalculator: owns the charge set and performs the pairwise
// 1-D Coulomb summation

use crate::charge::PointCharge;
use crate::config;

/// Ordered collection of point charges on a bounded integer axis.
/// Insertion order is array order; at most one charge per slot.
#[derive(Clone, Debug)]
pub struct ElectricFieldCalculator {
    x_min: i32,
    x_max: i32,
    charges: Vec<PointCharge>,
}

impl Default for ElectricFieldCalculator {
    fn default() -> Self {
        Self::new(config::X_MIN, config::X_MAX)
    }
}

impl ElectricFieldCalculator {
    pub fn new(x_min: i32, x_max: i32) -> Self {
        Self {
            x_min,
            x_max,
            charges: Vec::new(),
        }
    }

    pub fn charges(&self) -> &[PointCharge] {
        &self.charges
    }

    pub fn slot_range(&self) -> (i32, i32) {
        (self.x_min, self.x_max)
    }

    pub fn charge_at(&self, x: i32) -> Option<&PointCharge> {
        self.charges.iter().find(|c| c.x == x)
    }

    /// Place a charge at slot `x`. Rejects out-of-range slots and occupied
    /// slots; returns whether the charge was inserted.
    pub fn add_charge(&mut self, x: i32, q: f32) -> bool {
        if x < self.x_min || x > self.x_max {
            return false;
        }
        if self.charges.iter().any(|c| c.x == x) {
            return false;
        }
        self.charges.push(PointCharge::new(x, q));
        true
    }

    /// Remove the charge at slot `x`, if any. Returns whether one was removed.
    pub fn remove_charge(&mut self, x: i32) -> bool {
        let before = self.charges.len();
        self.charges.retain(|c| c.x != x);
        self.charges.len() != before
    }

    /// Flip the force-display flag of the charge at slot `x`, if any.
    pub fn toggle_force_display(&mut self, x: i32) -> bool {
        if let Some(charge) = self.charges.iter_mut().find(|c| c.x == x) {
            charge.toggle_force_display();
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.charges.clear();
    }

    /// Net scalar force on every charge, parallel to the charge array.
    ///
    /// For charge i this is sum over j != i of k * q_i * q_j / (x_i - x_j)^2,
    /// signed by the relative direction: positive pushes rightward. Full
    /// O(n^2) recompute per call; n is at most the number of slots.
    pub fn net_forces(&self) -> Vec<f32> {
        let mut forces = vec![0.0f32; self.charges.len()];
        for (i, a) in self.charges.iter().enumerate() {
            for (j, b) in self.charges.iter().enumerate() {
                if i == j {
                    continue;
                }
                let r = a.x - b.x;
                if r == 0 {
                    // Unreachable under the one-charge-per-slot invariant,
                    // kept as a division guard
                    continue;
                }
                let f = config::COULOMB_CONSTANT * a.q * b.q / ((r * r) as f32);
                forces[i] += if r > 0 { f } else { -f };
            }
        }
        forces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_charge_forces_are_equal_and_opposite() {
        let mut calc = ElectricFieldCalculator::default();
        assert!(calc.add_charge(1, 2.0));
        assert!(calc.add_charge(4, 3.0));
        let forces = calc.net_forces();
        // q1*q2 / (1-4)^2 = 6/9, directed leftward for the left charge
        assert!((forces[0] - (-2.0 / 3.0)).abs() < 1e-6);
        assert!((forces[1] - (2.0 / 3.0)).abs() < 1e-6);
        assert!((forces[0] + forces[1]).abs() < 1e-6);
    }

    #[test]
    fn like_charges_repel_and_opposites_attract() {
        let mut calc = ElectricFieldCalculator::default();
        calc.add_charge(0, 1.0);
        calc.add_charge(2, 1.0);
        let forces = calc.net_forces();
        assert!(forces[0] < 0.0, "left like charge pushed leftward");
        assert!(forces[1] > 0.0, "right like charge pushed rightward");

        let mut calc = ElectricFieldCalculator::default();
        calc.add_charge(0, 1.0);
        calc.add_charge(2, -1.0);
        let forces = calc.net_forces();
        assert!(forces[0] > 0.0, "left charge pulled rightward");
        assert!(forces[1] < 0.0, "right charge pulled leftward");
    }

    #[test]
    fn out_of_range_placement_leaves_the_set_unchanged() {
        let mut calc = ElectricFieldCalculator::default();
        assert!(!calc.add_charge(11, 1.0));
        assert!(!calc.add_charge(-11, 1.0));
        assert!(calc.charges().is_empty());
    }

    #[test]
    fn duplicate_placement_leaves_the_set_unchanged() {
        let mut calc = ElectricFieldCalculator::default();
        assert!(calc.add_charge(3, 1.0));
        assert!(!calc.add_charge(3, 5.0));
        assert_eq!(calc.charges().len(), 1);
        assert_eq!(calc.charge_at(3).unwrap().q, 1.0);
    }

    #[test]
    fn toggle_flips_only_the_target_charge() {
        let mut calc = ElectricFieldCalculator::default();
        calc.add_charge(0, 1.0);
        calc.add_charge(5, 1.0);
        assert!(calc.toggle_force_display(0));
        assert!(!calc.charge_at(0).unwrap().show_force);
        assert!(calc.charge_at(5).unwrap().show_force);
        // Double-toggle returns to the original state
        assert!(calc.toggle_force_display(0));
        assert!(calc.charge_at(0).unwrap().show_force);
    }

    #[test]
    fn toggle_on_an_empty_slot_does_nothing() {
        let mut calc = ElectricFieldCalculator::default();
        calc.add_charge(0, 1.0);
        assert!(!calc.toggle_force_display(7));
        assert!(calc.charge_at(0).unwrap().show_force);
    }

    #[test]
    fn symmetric_triple_cancels_at_the_center() {
        let mut calc = ElectricFieldCalculator::default();
        calc.add_charge(-1, 1.0);
        calc.add_charge(0, 1.0);
        calc.add_charge(1, 1.0);
        let forces = calc.net_forces();
        assert!(forces[1].abs() < 1e-6, "center force should cancel");
        // The outer charges see 1/1 + 1/4 pushing outward
        assert!((forces[0] + 1.25).abs() < 1e-6);
        assert!((forces[2] - 1.25).abs() < 1e-6);
    }

    #[test]
    fn remove_deletes_exactly_one_entry() {
        let mut calc = ElectricFieldCalculator::default();
        calc.add_charge(-2, 1.0);
        calc.add_charge(0, 2.0);
        calc.add_charge(3, 3.0);
        assert!(calc.remove_charge(0));
        assert_eq!(calc.charges().len(), 2);
        assert!(calc.charge_at(0).is_none());
        assert_eq!(calc.charge_at(-2).unwrap().q, 1.0);
        assert_eq!(calc.charge_at(3).unwrap().q, 3.0);
        assert!(!calc.remove_charge(0), "second removal finds nothing");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut calc = ElectricFieldCalculator::default();
        calc.add_charge(5, 1.0);
        calc.add_charge(-5, 1.0);
        calc.add_charge(0, 1.0);
        let xs: Vec<i32> = calc.charges().iter().map(|c| c.x).collect();
        assert_eq!(xs, vec![5, -5, 0]);
    }
}
