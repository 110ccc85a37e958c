//! Boundary with the game hosting the module
//!
//! The host owns rendering, audio, the countdown and the bomb's strike count.
//! The module only ever talks to it through [`Host`], and only hears from it
//! through [`HostEvent`]s delivered one at a time.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::SLOT_COUNT;
use crate::puzzle::Slot;

/// Game sound effects the module can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Heavy press (used for the triangle buttons)
    #[default]
    BigButtonPress,
    /// Regular keypad press
    ButtonPress,
    /// Needy module waking up
    NeedyActivated,
    /// Strike buzzer
    Strike,
}

impl SoundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::BigButtonPress => "BigButtonPress",
            SoundEffect::ButtonPress => "ButtonPress",
            SoundEffect::NeedyActivated => "NeedyActivated",
            SoundEffect::Strike => "Strike",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bigbuttonpress" | "big" => Some(SoundEffect::BigButtonPress),
            "buttonpress" | "button" => Some(SoundEffect::ButtonPress),
            "needyactivated" | "needy" => Some(SoundEffect::NeedyActivated),
            "strike" => Some(SoundEffect::Strike),
            _ => None,
        }
    }
}

/// Callbacks the host delivers to the module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostEvent {
    /// Countdown started
    Activate,
    /// Countdown cancelled without a verdict
    Deactivate,
    /// Countdown ran out
    TimerExpired,
    /// A button was pressed
    Interact(Slot),
}

/// Calls the module makes into the host
pub trait Host {
    fn report_strike(&mut self);
    fn report_pass(&mut self);
    fn play_sound(&mut self, effect: SoundEffect);
    fn add_interaction_punch(&mut self, button: Slot, intensity: f32);
    /// Euler angles in degrees
    fn set_arrow_rotation(&mut self, slot: Slot, euler_degrees: Vec3);
    fn set_arrow_visible(&mut self, slot: Slot, visible: bool);
}

/// A single recorded [`Host`] call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HostCall {
    Strike,
    Pass,
    Sound(SoundEffect),
    Punch { button: Slot, intensity: f32 },
    Rotate { slot: Slot, euler_degrees: Vec3 },
    Visible { slot: Slot, visible: bool },
}

/// In-memory host: remembers what it was asked to do
///
/// Used by the console driver and the tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
    pub strikes: u32,
    pub passes: u32,
    pub arrows_visible: [bool; SLOT_COUNT],
    pub arrow_rotations: [Vec3; SLOT_COUNT],
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded since the last drain
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Take the recorded calls, leaving counters and arrow state intact
    pub fn drain(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    /// Strike and pass calls only, in order
    pub fn verdicts(&self) -> Vec<HostCall> {
        self.calls
            .iter()
            .copied()
            .filter(|c| matches!(c, HostCall::Strike | HostCall::Pass))
            .collect()
    }

    pub fn any_arrow_visible(&self) -> bool {
        self.arrows_visible.iter().any(|&v| v)
    }
}

impl Host for RecordingHost {
    fn report_strike(&mut self) {
        self.strikes += 1;
        self.calls.push(HostCall::Strike);
    }

    fn report_pass(&mut self) {
        self.passes += 1;
        self.calls.push(HostCall::Pass);
    }

    fn play_sound(&mut self, effect: SoundEffect) {
        self.calls.push(HostCall::Sound(effect));
    }

    fn add_interaction_punch(&mut self, button: Slot, intensity: f32) {
        self.calls.push(HostCall::Punch { button, intensity });
    }

    fn set_arrow_rotation(&mut self, slot: Slot, euler_degrees: Vec3) {
        self.arrow_rotations[slot.index()] = euler_degrees;
        self.calls.push(HostCall::Rotate { slot, euler_degrees });
    }

    fn set_arrow_visible(&mut self, slot: Slot, visible: bool) {
        self.arrows_visible[slot.index()] = visible;
        self.calls.push(HostCall::Visible { slot, visible });
    }
}
