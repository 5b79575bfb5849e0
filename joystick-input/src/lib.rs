//! Joystick state tracking and angle derivation for servo control loops.
//!
//! This crate is the input-side collaborator of the PCA9685 servo driver.
//! It deliberately owns no device handles and performs no I/O: the event
//! source (SDL, evdev, a test harness) feeds raw axis and button events
//! into an explicit [`JoystickState`] value, and the control loop derives
//! a bounded servo angle from that state each iteration. Keeping the
//! state explicit — rather than module-level mutable globals — makes the
//! whole loop testable with synthetic inputs.
//!
//! # Typical control loop
//!
//! ```
//! use joystick_input::{AngleSlew, Axis, JoystickState};
//!
//! let mut stick = JoystickState::new();
//! let mut slew = AngleSlew::new(135.0, 10.0);
//!
//! // Each iteration: drain pending events, derive the target angle,
//! // rate-limit it, command the servo, then sleep ~100 ms.
//! stick.apply_axis(Axis::LeftX, 12_000);
//! let target = stick.left_stick_angle(270.0);
//! let angle = slew.advance_toward(target);
//! assert!(angle >= 0.0 && angle <= 270.0);
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations for embedded
//!   logging.

#![no_std]

pub use mapping::map_range;
pub use slew::AngleSlew;
pub use state::{Axis, Button, JoystickState, AXIS_DEADZONE};

mod mapping;
mod slew;
mod state;
