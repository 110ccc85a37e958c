//! Puzzle logic
//!
//! Pure and host-agnostic:
//! - Seeded RNG only
//! - All host effects go through the `Host` trait
//! - No rendering or platform dependencies

pub mod controller;
pub mod orientation;
pub mod solutions;

pub use controller::{ModuleIds, ModulePhase, PressOutcome, TriangleButtons};
pub use orientation::{Direction, Orientation, Slot};
pub use solutions::{correct_button, lookup};
