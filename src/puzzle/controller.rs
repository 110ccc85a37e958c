//! Module state machine
//!
//! Inactive until the host starts a countdown, then active until the player
//! presses any button, the countdown runs out, or the host cancels it.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::orientation::{Orientation, Slot};
use super::solutions;
use crate::consts::MODULE_NAME;
use crate::host::{Host, HostEvent};
use crate::settings::Settings;
use crate::stats::ModuleStats;

/// Whether button presses currently count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModulePhase {
    #[default]
    Inactive,
    Active,
}

/// What a button press did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressOutcome {
    /// Module was inactive; feedback only
    Ignored,
    Correct,
    Incorrect { expected: Option<Slot> },
}

/// Hands out module ids 1, 2, 3, ... to whoever builds modules
#[derive(Debug, Clone)]
pub struct ModuleIds {
    next: u32,
}

impl Default for ModuleIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl ModuleIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// One Triangle Buttons module
#[derive(Debug, Clone)]
pub struct TriangleButtons {
    id: u32,
    phase: ModulePhase,
    orientation: Option<Orientation>,
    settings: Settings,
    rng: Pcg32,
    stats: ModuleStats,
}

impl TriangleButtons {
    pub fn new(id: u32, settings: Settings) -> Self {
        let rng = settings.rng();
        Self {
            id,
            phase: ModulePhase::Inactive,
            orientation: None,
            settings,
            rng,
            stats: ModuleStats::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn phase(&self) -> ModulePhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == ModulePhase::Active
    }

    /// Orientation shown since the last activation, while active
    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// The button that would pass right now
    pub fn correct_button(&self) -> Option<Slot> {
        self.orientation.as_ref().and_then(solutions::correct_button)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn stats(&self) -> &ModuleStats {
        &self.stats
    }

    /// Dispatch a host callback to the matching handler
    pub fn handle<H: Host + ?Sized>(&mut self, event: HostEvent, host: &mut H) -> Option<PressOutcome> {
        match event {
            HostEvent::Activate => self.on_activate(host),
            HostEvent::Deactivate => self.on_deactivate(host),
            HostEvent::TimerExpired => self.on_timer_expired(host),
            HostEvent::Interact(button) => return Some(self.on_button_press(button, host)),
        }
        None
    }

    /// Countdown started: shuffle and show the arrows
    pub fn on_activate<H: Host + ?Sized>(&mut self, host: &mut H) {
        let orientation = Orientation::shuffled(&mut self.rng);
        self.on_activate_with(orientation, host);
    }

    /// Same as [`Self::on_activate`] with a chosen orientation
    pub fn on_activate_with<H: Host + ?Sized>(&mut self, orientation: Orientation, host: &mut H) {
        self.phase = ModulePhase::Active;
        self.orientation = Some(orientation);
        self.stats.activations += 1;
        log::info!("[{} #{}] Needy module is active.", MODULE_NAME, self.id);

        if self.settings.log_orientation {
            let [a, b, c, d] = orientation.directions();
            log::info!(
                "[{} #{}] Arrow orientation is {}, {}, {}, and {}.",
                MODULE_NAME,
                self.id,
                a.name(),
                b.name(),
                c.name(),
                d.name()
            );
            if let Some(answer) = solutions::correct_button(&orientation) {
                log::info!(
                    "[{} #{}] Correct button is the {} button.",
                    MODULE_NAME,
                    self.id,
                    answer.label().to_lowercase()
                );
            }
        }

        for slot in Slot::ALL {
            host.set_arrow_rotation(slot, orientation.arrow_rotation(slot));
        }
        for slot in Slot::ALL {
            host.set_arrow_visible(slot, true);
        }
    }

    /// Countdown cancelled: hide, no verdict
    pub fn on_deactivate<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.is_active() {
            self.stats.deactivations += 1;
        }
        self.hide_arrows(host);
    }

    /// Countdown ran out: strike
    pub fn on_timer_expired<H: Host + ?Sized>(&mut self, host: &mut H) {
        host.report_strike();
        self.stats.timeouts += 1;
        self.hide_arrows(host);
        log::info!("[{} #{}] Timer expired. Strike occurred.", MODULE_NAME, self.id);
    }

    /// A button was pressed
    ///
    /// A wrong press reports a strike and then a pass: the module resolves
    /// after any press while active.
    pub fn on_button_press<H: Host + ?Sized>(&mut self, button: Slot, host: &mut H) -> PressOutcome {
        host.add_interaction_punch(button, self.settings.effective_punch_intensity());
        host.play_sound(self.settings.press_sound);

        if !self.is_active() {
            self.stats.ignored_presses += 1;
            log::debug!("[{} #{}] {} button pushed while inactive.", MODULE_NAME, self.id, button);
            return PressOutcome::Ignored;
        }

        let expected = self.correct_button();
        self.hide_arrows(host);

        if expected == Some(button) {
            self.stats.correct += 1;
            log::info!(
                "[{} #{}] {} button has been pushed and is correct. Module deactivated.",
                MODULE_NAME,
                self.id,
                button
            );
            host.report_pass();
            PressOutcome::Correct
        } else {
            self.stats.incorrect += 1;
            host.report_strike();
            log::info!(
                "[{} #{}] {} button has been pushed and is incorrect. Strike occurred, module deactivated.",
                MODULE_NAME,
                self.id,
                button
            );
            host.report_pass();
            PressOutcome::Incorrect { expected }
        }
    }

    fn hide_arrows<H: Host + ?Sized>(&mut self, host: &mut H) {
        for slot in Slot::ALL {
            host.set_arrow_visible(slot, false);
        }
        self.phase = ModulePhase::Inactive;
        self.orientation = None;
    }
}
