// init_config.rs
// Optional startup configuration parsed from field_config.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config;

#[derive(Debug, Deserialize, Serialize)]
pub struct InitConfig {
    pub view: Option<ViewConfig>,
    pub axis: Option<AxisConfig>,
    #[serde(default)]
    pub charges: Vec<ChargeConfig>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ViewConfig {
    /// Half-height of the visible world region. Falls back to the default
    /// when omitted.
    pub scale: Option<f32>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct AxisConfig {
    pub x_min: Option<i32>,
    pub x_max: Option<i32>,
}

impl AxisConfig {
    /// Return the slot range, using the global defaults for missing bounds.
    pub fn range(&self) -> (i32, i32) {
        (
            self.x_min.unwrap_or(config::X_MIN),
            self.x_max.unwrap_or(config::X_MAX),
        )
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChargeConfig {
    pub x: i32,
    pub q: f32,
    #[serde(default = "default_show_force")]
    pub show_force: bool,
}

fn default_show_force() -> bool {
    true
}

impl InitConfig {
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from_file(config::INIT_CONFIG_FILE)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let init: InitConfig = toml::from_str(&content)?;
        Ok(init)
    }

    pub fn view_scale(&self) -> f32 {
        self.view
            .as_ref()
            .and_then(|v| v.scale)
            .unwrap_or(config::DEFAULT_VIEW_SCALE)
    }
}
