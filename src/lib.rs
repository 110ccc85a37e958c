//! Triangle Buttons - a needy bomb module
//!
//! Four arrows, four buttons. The arrows' directions decide which button is
//! correct; press it before the countdown runs out.
//!
//! Core modules:
//! - `puzzle`: Orientation shuffle, solution table and the module state machine
//! - `host`: Callbacks to and from the game hosting the module
//! - `settings`: Data-driven module tuning
//! - `stats`: Per-module outcome tally

pub mod host;
pub mod puzzle;
pub mod settings;
pub mod stats;

pub use host::{Host, HostCall, HostEvent, RecordingHost, SoundEffect};
pub use puzzle::{Direction, ModuleIds, ModulePhase, Orientation, PressOutcome, Slot, TriangleButtons};
pub use settings::Settings;
pub use stats::ModuleStats;

/// Module configuration constants
pub mod consts {
    /// Name used to tag log lines
    pub const MODULE_NAME: &str = "Triangle Buttons";
    /// Arrows (and buttons) on the module face
    pub const SLOT_COUNT: usize = 4;
    /// X tilt that lays an arrow flat on the face
    pub const ARROW_TILT_DEGREES: f32 = 90.0;
    /// Yaw per direction step
    pub const QUARTER_TURN_DEGREES: f32 = 90.0;
    /// Default interaction punch on a press
    pub const DEFAULT_PUNCH_INTENSITY: f32 = 0.2;
}
