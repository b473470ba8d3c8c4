// config.rs
// Centralized constants for the axis geometry, rendering, and interaction

// ====================
// Axis / Grid
// ====================
/// Leftmost placement slot on the axis.
pub const X_MIN: i32 = -10;
/// Rightmost placement slot on the axis.
pub const X_MAX: i32 = 10;
/// World-space distance between adjacent integer slots.
pub const GRID_SPACING: f32 = 1.0;

// ====================
// Force Parameters
// ====================
/// Coulomb constant. The demo works in natural units, so k = 1.
pub const COULOMB_CONSTANT: f32 = 1.0;
/// Magnitude used when the input field does not parse as a finite number.
pub const DEFAULT_MAGNITUDE: f32 = 1.0;

// ====================
// Rendering Geometry
// ====================
// Ratios carried over from the reference layout's 60 px slot pitch.
pub const TICK_HALF_HEIGHT: f32 = GRID_SPACING / 6.0;
pub const CHARGE_RADIUS: f32 = GRID_SPACING / 6.0;
/// Shaft length of a force arrow. Fixed, not scaled by force magnitude.
pub const ARROW_OFFSET: f32 = GRID_SPACING / 2.0;
pub const ARROWHEAD_LENGTH: f32 = GRID_SPACING / 4.0;
pub const ARROWHEAD_HALF_WIDTH: f32 = GRID_SPACING / 12.0;
/// Vertical half-band around the axis that accepts placement clicks.
pub const CLICK_BAND: f32 = GRID_SPACING * 2.0 / 3.0;

// Label placement (world units)
pub const TICK_LABEL_OFFSET: f32 = GRID_SPACING;
pub const CHARGE_LABEL_OFFSET: f32 = GRID_SPACING / 3.0;
pub const FORCE_LABEL_RAISE: f32 = GRID_SPACING / 2.0;
pub const FORCE_LABEL_ADVANCE: f32 = GRID_SPACING / 3.0;

// ====================
// Colors (RGBA)
// ====================
pub const COLOR_AXIS: [u8; 4] = [255, 255, 255, 255];
pub const COLOR_FORCE_POSITIVE: [u8; 4] = [255, 0, 0, 255]; // rightward
pub const COLOR_FORCE_NEGATIVE: [u8; 4] = [0, 96, 255, 255]; // leftward
pub const COLOR_CHARGE_ACTIVE: [u8; 4] = [255, 255, 255, 255];
pub const COLOR_CHARGE_MUTED: [u8; 4] = [128, 128, 128, 255];

// ====================
// View
// ====================
/// Half-height of the visible world region at startup.
pub const DEFAULT_VIEW_SCALE: f32 = 9.0;

// ====================
// Fraction Display
// ====================
/// Denominator cap for the exact-fraction force labels. Large enough to
/// recover the exact rational for integer charges on integer slots, small
/// enough to absorb float noise.
pub const FRACTION_MAX_DENOMINATOR: i64 = 10_000;

// ====================
// Files
// ====================
pub const SAVED_STATE_DIR: &str = "saved_state";
pub const INIT_CONFIG_FILE: &str = "field_config.toml";
pub const HELP_FILE: &str = "help.txt";
