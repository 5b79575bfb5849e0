//! Caller-side angle rate limiting.

/// Rate limiter for servo angle commands.
///
/// The PCA9685 driver is stateless across calls and performs no
/// interpolation: each `set_servo_angle` call commands a full-speed move.
/// A control loop that follows a live input gets smooth motion by bounding
/// how far each update may move the commanded angle, then sleeping its
/// fixed inter-update interval (typically ~100 ms).
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AngleSlew {
    current: f32,
    max_step_deg: f32,
}

impl AngleSlew {
    /// Start at `initial_deg`, moving at most `max_step_deg` per update.
    pub fn new(initial_deg: f32, max_step_deg: f32) -> Self {
        Self {
            current: initial_deg,
            max_step_deg,
        }
    }

    /// The most recently commanded angle.
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Move one bounded step toward `target_deg` and return the angle to
    /// command this update.
    pub fn advance_toward(&mut self, target_deg: f32) -> f32 {
        let delta = (target_deg - self.current).clamp(-self.max_step_deg, self.max_step_deg);
        self.current += delta;
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_bounded() {
        let mut slew = AngleSlew::new(0.0, 10.0);

        assert_eq!(slew.advance_toward(100.0), 10.0);
        assert_eq!(slew.advance_toward(100.0), 20.0);
        assert_eq!(slew.advance_toward(-100.0), 10.0);
    }

    #[test]
    fn converges_exactly_onto_the_target() {
        let mut slew = AngleSlew::new(0.0, 10.0);

        for _ in 0..4 {
            slew.advance_toward(35.0);
        }
        assert_eq!(slew.current(), 35.0);
        assert_eq!(slew.advance_toward(35.0), 35.0);
    }

    #[test]
    fn small_moves_land_in_one_step() {
        let mut slew = AngleSlew::new(90.0, 10.0);
        assert_eq!(slew.advance_toward(95.0), 95.0);
    }
}
