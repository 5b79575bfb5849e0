//! High-level PCA9685 device handle.
//!
//! [`Pca9685`] wraps the low-level register bus with the chip's lifecycle
//! (open → configure → close), the sleep/program/restart frequency
//! sequence, validated per-channel tick programming, and the servo
//! pulse/angle conversions.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::bus::RegisterBus;
use crate::error::Error;
use crate::registers::{
    CHANNEL_COUNT, CHANNEL_STRIDE, LED0_ON_L, MODE1, MODE1_RESTART, MODE1_SLEEP, MODE2,
    MODE2_OUTDRV, OSC_CLOCK_HZ, OSC_SETTLE_US, PRESCALE, PRESCALE_MIN, RESOLUTION,
};
use crate::servo::ServoProfile;

/// Default PWM frequency applied by [`Pca9685::open`], suitable for
/// standard hobby servos.
pub const DEFAULT_FREQ_HZ: f32 = 50.0;

/// Compute the prescale byte for a target output frequency.
///
/// Returns `None` when the frequency would need a prescale value the chip
/// cannot hold. The low end of the prescale range is the datasheet floor
/// of 3, not 0 — the chip silently clamps smaller values, so accepting
/// them would misreport the real output frequency.
fn prescale_for(freq_hz: f32) -> Option<u8> {
    let exact = OSC_CLOCK_HZ / (f32::from(RESOLUTION) * freq_hz) - 1.0;
    let rounded = libm::roundf(exact);
    if (f32::from(PRESCALE_MIN)..=255.0).contains(&rounded) {
        Some(rounded as u8)
    } else {
        None
    }
}

/// Handle to one PCA9685 on an I2C bus.
///
/// Owns the I2C peripheral, the chip's slave address, a delay provider for
/// the oscillator settle time, and the *current PWM frequency*. The cached
/// frequency is the driver's view of chip state: it is updated only after
/// a frequency change fully succeeds, and every pulse-width conversion
/// reads it rather than assuming 50 Hz.
///
/// The handle starts **closed**. [`open`](Self::open) runs the wake-and-
/// configure sequence; after [`close`](Self::close) every operation fails
/// with [`Error::NotOpen`] until the handle is reopened, which repeats the
/// full configuration — no chip state is assumed to survive a close.
///
/// Calls are blocking and the handle is single-owner; callers driving it
/// from more than one context must serialise access externally. A
/// frequency change must never interleave with a channel write, or tick
/// counts get computed against a frequency that is about to change.
pub struct Pca9685<I2C, D> {
    bus: RegisterBus<I2C>,
    delay: D,
    opened: bool,
    freq_hz: f32,
}

impl<I2C, D> Pca9685<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a closed handle bound to one slave address.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `address` — 7-bit I2C device address (typically 0x40)
    /// * `delay` — delay provider for the oscillator settle time
    pub fn new(i2c: I2C, address: u8, delay: D) -> Self {
        Self {
            bus: RegisterBus::new(i2c, address),
            delay,
            opened: false,
            freq_hz: DEFAULT_FREQ_HZ,
        }
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Wake the chip and apply the cached PWM frequency.
    ///
    /// Idempotent: opening an already-open handle does nothing and returns
    /// success. The handle transitions to open only once the whole sequence
    /// has succeeded, so a failed open can simply be retried.
    ///
    /// # Errors
    /// * [`Error::I2c`] on communication failure
    /// * [`Error::InvalidFrequency`] if the cached frequency is unreachable
    pub fn open(&mut self) -> Result<(), Error<I2C::Error>> {
        if self.opened {
            return Ok(());
        }

        // Clear the sleep bit to start the oscillator, then select
        // totem-pole output drive for the servo signal lines.
        let mode1 = self.bus.read_u8(MODE1)?;
        self.bus.write_u8(MODE1, mode1 & !MODE1_SLEEP)?;
        self.bus.write_u8(MODE2, MODE2_OUTDRV)?;

        self.apply_pwm_freq(self.freq_hz)?;

        self.opened = true;
        Ok(())
    }

    /// Close the handle. Subsequent operations fail with
    /// [`Error::NotOpen`] until [`open`](Self::open) is called again.
    pub fn close(&mut self) {
        self.opened = false;
    }

    /// Whether the handle is currently open.
    pub fn is_open(&self) -> bool {
        self.opened
    }

    /// The PWM frequency the driver believes the chip is running at, in Hz.
    pub fn frequency(&self) -> f32 {
        self.freq_hz
    }

    /// Consume the handle and hand back the I2C peripheral and delay
    /// provider. The chip keeps running with its last-programmed state.
    pub fn release(self) -> (I2C, D) {
        (self.bus.release(), self.delay)
    }

    // -----------------------------------------------------------------------
    // Frequency control
    // -----------------------------------------------------------------------

    /// Reprogram the chip's output frequency for all 16 channels.
    ///
    /// The prescale register can only be written while the chip sleeps, so
    /// this runs the full sleep → program → wake → settle → restart
    /// sequence. The sequence aborts on the first failing register access;
    /// the cached frequency is updated only after the whole sequence has
    /// succeeded, so on error the handle still reports the old frequency.
    /// Recovery from a mid-sequence failure is to call this again (or
    /// reopen) — every step rewrites full register values, so the retry is
    /// idempotent.
    ///
    /// Changing frequency changes the tick duration for **every** channel
    /// at once; pulse widths programmed before the change must be re-sent.
    ///
    /// # Errors
    /// * [`Error::NotOpen`] if the handle is closed
    /// * [`Error::InvalidFrequency`] if no prescale value reaches `freq_hz`
    /// * [`Error::I2c`] on communication failure
    pub fn set_pwm_freq(&mut self, freq_hz: f32) -> Result<(), Error<I2C::Error>> {
        if !self.opened {
            return Err(Error::NotOpen);
        }
        self.apply_pwm_freq(freq_hz)
    }

    /// Frequency sequence shared by `open` and `set_pwm_freq`.
    fn apply_pwm_freq(&mut self, freq_hz: f32) -> Result<(), Error<I2C::Error>> {
        let prescale = prescale_for(freq_hz).ok_or(Error::InvalidFrequency)?;

        let old_mode = self.bus.read_u8(MODE1)?;

        // Sleep with the restart bit masked off; the chip rejects SLEEP
        // and RESTART written together.
        self.bus.write_u8(MODE1, (old_mode & 0x7F) | MODE1_SLEEP)?;
        self.bus.write_u8(PRESCALE, prescale)?;
        self.bus.write_u8(MODE1, old_mode)?;

        // Oscillator settle time before restarting the outputs.
        self.delay.delay_us(OSC_SETTLE_US);
        self.bus.write_u8(MODE1, old_mode | MODE1_RESTART)?;

        self.freq_hz = freq_hz;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Channel programming
    // -----------------------------------------------------------------------

    /// Program one channel's raw 12-bit ON/OFF tick pair.
    ///
    /// The output rises at tick `on` and falls at tick `off` within each
    /// 4096-tick period. Tick values are truncated to 12 bits. The 4-byte
    /// block is written in a single bus transaction; channels are
    /// independently addressable and no other channel is touched.
    ///
    /// # Errors
    /// * [`Error::NotOpen`] if the handle is closed
    /// * [`Error::InvalidChannel`] if `channel >= 16`
    /// * [`Error::I2c`] on communication failure — the channel's on-chip
    ///   state is then undefined and the caller should retry the call
    pub fn set_pwm(&mut self, channel: u8, on: u16, off: u16) -> Result<(), Error<I2C::Error>> {
        if !self.opened {
            return Err(Error::NotOpen);
        }
        if channel >= CHANNEL_COUNT {
            return Err(Error::InvalidChannel);
        }

        let data = [
            (on & 0xFF) as u8,
            ((on >> 8) & 0x0F) as u8,
            (off & 0xFF) as u8,
            ((off >> 8) & 0x0F) as u8,
        ];
        let register = LED0_ON_L + CHANNEL_STRIDE * channel;
        self.bus.write_channel_block(register, data)
    }

    // -----------------------------------------------------------------------
    // Servo helpers
    // -----------------------------------------------------------------------

    /// Drive a channel with a servo pulse of the given width.
    ///
    /// Converts the pulse width to ticks at the *current* frequency and
    /// clamps the result to the chip's 0–4095 tick range. The on-tick is
    /// fixed at 0, phase-aligning all channels at the period start.
    ///
    /// # Errors
    /// Same as [`set_pwm`](Self::set_pwm).
    pub fn set_servo_pulse(
        &mut self,
        channel: u8,
        pulse_ms: f32,
    ) -> Result<(), Error<I2C::Error>> {
        let period_ms = 1000.0 / self.freq_hz;
        let ticks = pulse_ms / period_ms * f32::from(RESOLUTION);
        let ticks = ticks.clamp(0.0, f32::from(RESOLUTION - 1));

        self.set_pwm(channel, 0, libm::roundf(ticks) as u16)
    }

    /// Position a servo at an angle using the given calibration profile.
    ///
    /// Out-of-range angles are clamped to the profile's pulse range, not
    /// rejected (see [`ServoProfile::pulse_ms_for_angle`]).
    ///
    /// # Errors
    /// Same as [`set_pwm`](Self::set_pwm).
    pub fn set_servo_angle(
        &mut self,
        channel: u8,
        profile: &ServoProfile,
        angle_deg: f32,
    ) -> Result<(), Error<I2C::Error>> {
        self.set_servo_pulse(channel, profile.pulse_ms_for_angle(angle_deg))
    }

    /// Position a servo by built-in profile id (0 = MS62, 1 = DM996).
    ///
    /// # Errors
    /// * [`Error::UnknownServoProfile`] if `servo_id` has no profile
    /// * Otherwise same as [`set_pwm`](Self::set_pwm)
    pub fn set_servo_angle_by_id(
        &mut self,
        channel: u8,
        servo_id: u8,
        angle_deg: f32,
    ) -> Result<(), Error<I2C::Error>> {
        let profile = ServoProfile::by_id(servo_id).ok_or(Error::UnknownServoProfile)?;
        self.set_servo_angle(channel, profile, angle_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prescale_matches_datasheet_example() {
        // 50 Hz: 25 MHz / (4096 * 50) - 1 = 121.07 -> 121.
        assert_eq!(prescale_for(50.0), Some(121));
    }

    #[test]
    fn prescale_is_monotonically_non_increasing() {
        let mut previous = u8::MAX;
        let mut freq = 24.0;
        while freq <= 1526.0 {
            let prescale = prescale_for(freq).unwrap();
            assert!(prescale <= previous, "prescale rose at {freq} Hz");
            previous = prescale;
            freq += 0.5;
        }
    }

    #[test]
    fn unreachable_frequencies_are_rejected() {
        assert_eq!(prescale_for(10.0), None); // prescale would exceed 255
        assert_eq!(prescale_for(2000.0), None); // prescale would drop below 3
    }

    #[test]
    fn prescale_range_endpoints() {
        assert_eq!(prescale_for(24.0), Some(253));
        assert_eq!(prescale_for(1526.0), Some(3));
    }
}
