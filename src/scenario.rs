// scenario.rs
// Builds the startup charge set, from field_config.toml when present

use crate::config;
use crate::field::ElectricFieldCalculator;
use crate::init_config::InitConfig;

pub struct Startup {
    pub calculator: ElectricFieldCalculator,
    pub view_scale: f32,
}

/// Load the startup configuration, falling back to the built-in demo
/// layout when the file is missing or malformed.
pub fn startup() -> Startup {
    match InitConfig::load_default() {
        Ok(init) => {
            println!(
                "Loaded startup configuration from {}",
                config::INIT_CONFIG_FILE
            );
            Startup {
                view_scale: init.view_scale(),
                calculator: build_from_config(&init),
            }
        }
        Err(e) => {
            eprintln!(
                "No startup configuration ({}), using the built-in layout",
                e
            );
            Startup {
                calculator: default_calculator(),
                view_scale: config::DEFAULT_VIEW_SCALE,
            }
        }
    }
}

fn build_from_config(init: &InitConfig) -> ElectricFieldCalculator {
    let (x_min, x_max) = init
        .axis
        .as_ref()
        .map(|a| a.range())
        .unwrap_or((config::X_MIN, config::X_MAX));
    let mut calc = ElectricFieldCalculator::new(x_min, x_max);
    for c in &init.charges {
        if calc.add_charge(c.x, c.q) {
            if !c.show_force {
                calc.toggle_force_display(c.x);
            }
        } else {
            eprintln!(
                "Ignoring startup charge at x = {}: slot out of range or occupied",
                c.x
            );
        }
    }
    calc
}

/// The demo layout: a 3Q charge at x = 2 opposite a -2Q charge at x = -3.
pub fn default_calculator() -> ElectricFieldCalculator {
    let mut calc = ElectricFieldCalculator::new(config::X_MIN, config::X_MAX);
    calc.add_charge(2, 3.0);
    calc.add_charge(-3, -2.0);
    calc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_has_the_demo_pair() {
        let calc = default_calculator();
        assert_eq!(calc.charges().len(), 2);
        assert_eq!(calc.charge_at(2).unwrap().q, 3.0);
        assert_eq!(calc.charge_at(-3).unwrap().q, -2.0);
    }

    #[test]
    fn config_charges_pass_through_placement_validation() {
        let init: InitConfig = toml::from_str(
            r#"
            [axis]
            x_min = -2
            x_max = 2

            [[charges]]
            x = 0
            q = 1.0

            [[charges]]
            x = 0
            q = 2.0

            [[charges]]
            x = 9
            q = 1.0
        "#,
        )
        .unwrap();
        let calc = build_from_config(&init);
        // Duplicate and out-of-range entries are dropped
        assert_eq!(calc.charges().len(), 1);
        assert_eq!(calc.charge_at(0).unwrap().q, 1.0);
    }
}
