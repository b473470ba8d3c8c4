// io.rs
// Saving and loading charge layouts under saved_state/, plus the help text

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::charge::PointCharge;
use crate::config;
use crate::field::ElectricFieldCalculator;

#[derive(Clone, Serialize, Deserialize)]
pub struct SavedLayout {
    pub x_min: i32,
    pub x_max: i32,
    pub charges: Vec<PointCharge>,
}

impl SavedLayout {
    pub fn from_calculator(calc: &ElectricFieldCalculator) -> Self {
        let (x_min, x_max) = calc.slot_range();
        Self {
            x_min,
            x_max,
            charges: calc.charges().to_vec(),
        }
    }

    /// Rebuild a calculator, re-validating every entry so hand-edited files
    /// cannot violate the placement invariants.
    pub fn into_calculator(self) -> ElectricFieldCalculator {
        let mut calc = ElectricFieldCalculator::new(self.x_min, self.x_max);
        for c in self.charges {
            if calc.add_charge(c.x, c.q) && !c.show_force {
                calc.toggle_force_display(c.x);
            }
        }
        calc
    }
}

fn layout_path(name: &str) -> PathBuf {
    Path::new(config::SAVED_STATE_DIR).join(format!("{}.json", name))
}

pub fn save_layout(
    name: &str,
    calc: &ElectricFieldCalculator,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(config::SAVED_STATE_DIR)?;
    let json = serde_json::to_string_pretty(&SavedLayout::from_calculator(calc))?;
    fs::write(layout_path(name), json)?;
    Ok(())
}

pub fn load_layout(name: &str) -> Result<ElectricFieldCalculator, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(layout_path(name))?;
    let layout: SavedLayout = serde_json::from_str(&content)?;
    Ok(layout.into_calculator())
}

/// Names of the layouts available under saved_state/.
pub fn available_layouts() -> Vec<String> {
    let mut list = Vec::new();
    if let Ok(entries) = fs::read_dir(config::SAVED_STATE_DIR) {
        for entry in entries.flatten() {
            if let Some(name) = entry.file_name().to_str() {
                if name.ends_with(".json") {
                    list.push(name.trim_end_matches(".json").to_string());
                }
            }
        }
    }
    list.sort();
    list
}

/// Help overlay text: help.txt next to the executable when present,
/// otherwise the built-in text.
pub fn load_help_text() -> String {
    fs::read_to_string(config::HELP_FILE).unwrap_or_else(|_| DEFAULT_HELP.to_string())
}

const DEFAULT_HELP: &str = "\
1-D Coulomb force visualizer

Charges sit on integer slots of the number line. Every frame the net force
on each charge is the sum of pairwise Coulomb contributions (k = 1):
F_i = sum over j of q_i * q_j / (x_i - x_j)^2, signed by direction.

Mouse
  Left click near the axis   place a charge (magnitude from the input
                             field) or toggle the arrow of an existing one
  Right click on a charge    remove it
  Middle drag                pan the view
  Scroll                     zoom about the cursor

Keys
  E   toggle the controls window
  F   toggle fraction display of force values
  N   toggle the minus sign on leftward forces
  H   toggle this help

Red arrows point right (positive net force), blue arrows point left.
Gray charges have their force arrow hidden.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_round_trips_through_json() {
        let mut calc = ElectricFieldCalculator::default();
        calc.add_charge(2, 3.0);
        calc.add_charge(-3, -2.0);
        calc.toggle_force_display(-3);

        let json = serde_json::to_string(&SavedLayout::from_calculator(&calc)).unwrap();
        let layout: SavedLayout = serde_json::from_str(&json).unwrap();
        let restored = layout.into_calculator();

        assert_eq!(restored.charges(), calc.charges());
        assert!(!restored.charge_at(-3).unwrap().show_force);
    }

    #[test]
    fn hand_edited_layouts_are_revalidated() {
        let layout = SavedLayout {
            x_min: -10,
            x_max: 10,
            charges: vec![
                PointCharge::new(1, 1.0),
                PointCharge::new(1, 2.0),
                PointCharge::new(99, 1.0),
            ],
        };
        let calc = layout.into_calculator();
        assert_eq!(calc.charges().len(), 1);
        assert_eq!(calc.charge_at(1).unwrap().q, 1.0);
    }

    #[test]
    fn builtin_help_mentions_the_controls() {
        assert!(DEFAULT_HELP.contains("Left click"));
        assert!(DEFAULT_HELP.contains("fraction"));
    }
}
