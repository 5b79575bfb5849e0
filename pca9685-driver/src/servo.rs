//! Servo pulse-width calibration profiles.

/// Pulse-width calibration for one servo model.
///
/// Maps a mechanical angle range onto the pulse widths the servo
/// electronics expect. Adding support for a new servo is a matter of
/// constructing a new profile value — the mapping itself never changes.
///
/// # Example
///
/// ```
/// use pca9685_driver::ServoProfile;
///
/// let profile = ServoProfile::new(1.0, 2.0, 90.0);
/// assert_eq!(profile.pulse_ms_for_angle(45.0), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoProfile {
    /// Pulse width at angle 0, in milliseconds.
    pub min_pulse_ms: f32,
    /// Pulse width at `max_angle_deg`, in milliseconds.
    pub max_pulse_ms: f32,
    /// Maximum mechanical angle, in degrees.
    pub max_angle_deg: f32,
}

impl ServoProfile {
    /// MS62 high-torque servo: 0.5–2.5 ms over 270°. Profile id 0.
    pub const MS62: Self = Self::new(0.5, 2.5, 270.0);

    /// DM996 standard servo: 0.5–2.5 ms over 180°. Profile id 1.
    pub const DM996: Self = Self::new(0.5, 2.5, 180.0);

    /// Create a profile from raw calibration values.
    pub const fn new(min_pulse_ms: f32, max_pulse_ms: f32, max_angle_deg: f32) -> Self {
        Self {
            min_pulse_ms,
            max_pulse_ms,
            max_angle_deg,
        }
    }

    /// Look up a built-in profile by numeric id.
    ///
    /// Ids match the servo type constants used on the wire by callers:
    /// 0 = [`MS62`](Self::MS62), 1 = [`DM996`](Self::DM996).
    pub fn by_id(id: u8) -> Option<&'static Self> {
        match id {
            0 => Some(&Self::MS62),
            1 => Some(&Self::DM996),
            _ => None,
        }
    }

    /// Linearly map an angle to a pulse width in milliseconds.
    ///
    /// Angles outside `[0, max_angle_deg]` are clamped to the profile's
    /// pulse-width range rather than rejected. Callers that want strict
    /// validation must range-check the angle themselves before calling.
    pub fn pulse_ms_for_angle(&self, angle_deg: f32) -> f32 {
        let span = self.max_pulse_ms - self.min_pulse_ms;
        let pulse = self.min_pulse_ms + angle_deg / self.max_angle_deg * span;
        pulse.clamp(self.min_pulse_ms, self.max_pulse_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_angle_maps_to_midpoint_pulse() {
        assert_eq!(ServoProfile::MS62.pulse_ms_for_angle(135.0), 1.5);
        assert_eq!(ServoProfile::DM996.pulse_ms_for_angle(90.0), 1.5);
    }

    #[test]
    fn endpoints_map_to_calibration_limits() {
        let p = ServoProfile::DM996;
        assert_eq!(p.pulse_ms_for_angle(0.0), 0.5);
        assert_eq!(p.pulse_ms_for_angle(180.0), 2.5);
    }

    #[test]
    fn out_of_range_angles_are_clamped() {
        let p = ServoProfile::DM996;
        assert_eq!(p.pulse_ms_for_angle(270.0), p.pulse_ms_for_angle(180.0));
        assert_eq!(p.pulse_ms_for_angle(-45.0), p.pulse_ms_for_angle(0.0));
    }

    #[test]
    fn built_in_profiles_resolve_by_id() {
        assert_eq!(ServoProfile::by_id(0), Some(&ServoProfile::MS62));
        assert_eq!(ServoProfile::by_id(1), Some(&ServoProfile::DM996));
        assert_eq!(ServoProfile::by_id(2), None);
    }
}
