//! Explicit joystick state and angle derivation.

use crate::mapping::map_range;

/// Axis motions smaller than this (in raw units) are treated as stick
/// noise and snap to center.
pub const AXIS_DEADZONE: i16 = 200;

/// Analog axes of a standard twin-stick game controller, with the raw
/// event indices used by SDL-style joystick APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Left stick, horizontal. Raw index 0.
    LeftX,
    /// Left stick, vertical. Raw index 1.
    LeftY,
    /// Left analog trigger. Raw index 2.
    LeftTrigger,
    /// Right stick, horizontal. Raw index 3.
    RightX,
    /// Right stick, vertical. Raw index 4.
    RightY,
    /// Right analog trigger. Raw index 5.
    RightTrigger,
}

impl Axis {
    pub(crate) const COUNT: usize = 6;

    /// Map a raw event axis index to an [`Axis`].
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Axis::LeftX),
            1 => Some(Axis::LeftY),
            2 => Some(Axis::LeftTrigger),
            3 => Some(Axis::RightX),
            4 => Some(Axis::RightY),
            5 => Some(Axis::RightTrigger),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Axis::LeftX => 0,
            Axis::LeftY => 1,
            Axis::LeftTrigger => 2,
            Axis::RightX => 3,
            Axis::RightY => 4,
            Axis::RightTrigger => 5,
        }
    }
}

/// Buttons of a standard game controller, with raw event indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Raw index 0.
    A,
    /// Raw index 1.
    B,
    /// Raw index 2.
    Y,
    /// Raw index 3.
    X,
    /// Raw index 4.
    LeftBumper,
    /// Raw index 5.
    RightBumper,
    /// Raw index 6.
    Minus,
    /// Raw index 7.
    Plus,
}

impl Button {
    /// Map a raw event button index to a [`Button`].
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Button::A),
            1 => Some(Button::B),
            2 => Some(Button::Y),
            3 => Some(Button::X),
            4 => Some(Button::LeftBumper),
            5 => Some(Button::RightBumper),
            6 => Some(Button::Minus),
            7 => Some(Button::Plus),
            _ => None,
        }
    }
}

/// The most recent value of every analog axis.
///
/// Owned by the input collaborator and fed into the angle derivation by
/// value or reference; never global. See the crate-level example for the
/// control-loop shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickState {
    axes: [i16; Axis::COUNT],
}

impl JoystickState {
    /// All axes centered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an axis motion event.
    ///
    /// Values within [`AXIS_DEADZONE`] of center are stored as 0 so that
    /// stick noise near the rest position does not jitter the derived
    /// angle.
    pub fn apply_axis(&mut self, axis: Axis, value: i16) {
        let filtered = if value.unsigned_abs() <= AXIS_DEADZONE as u16 {
            0
        } else {
            value
        };
        self.axes[axis.index()] = filtered;
    }

    /// The last recorded value for an axis.
    pub fn axis(&self, axis: Axis) -> i16 {
        self.axes[axis.index()]
    }

    /// Derive a servo angle from the left stick's horizontal position.
    ///
    /// Linear map of the raw axis range onto `[0, max_angle_deg]`; a
    /// centered stick yields the middle of the range.
    pub fn left_stick_angle(&self, max_angle_deg: f32) -> f32 {
        self.stick_angle(Axis::LeftX, max_angle_deg)
    }

    /// Derive a servo angle from the right stick's horizontal position.
    pub fn right_stick_angle(&self, max_angle_deg: f32) -> f32 {
        self.stick_angle(Axis::RightX, max_angle_deg)
    }

    fn stick_angle(&self, axis: Axis, max_angle_deg: f32) -> f32 {
        map_range(
            f32::from(self.axis(axis)),
            f32::from(i16::MIN),
            f32::from(i16::MAX),
            0.0,
            max_angle_deg,
        )
    }
}
