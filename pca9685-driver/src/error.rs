//! Error types for the PCA9685 driver.

use core::fmt;

/// Errors that can occur when driving the PCA9685.
#[derive(Debug)]
pub enum Error<E> {
    /// Underlying I2C bus error.
    I2c(E),

    /// The device handle has not been opened (or was closed).
    NotOpen,

    /// Requested PWM frequency maps to a prescale value the chip cannot
    /// hold (achievable range is roughly 24–1526 Hz).
    InvalidFrequency,

    /// Channel index out of valid range (must be 0–15).
    InvalidChannel,

    /// No built-in servo profile with the given id.
    UnknownServoProfile,
}

// Allow ergonomic `?` propagation from raw I2C errors.
impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {:?}", e),
            Error::NotOpen => write!(f, "Device not open"),
            Error::InvalidFrequency => write!(f, "PWM frequency out of achievable range"),
            Error::InvalidChannel => write!(f, "Invalid channel index (must be 0-15)"),
            Error::UnknownServoProfile => write!(f, "Unknown servo profile id"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::I2c(e) => defmt::write!(f, "I2C error: {}", e),
            Error::NotOpen => defmt::write!(f, "Device not open"),
            Error::InvalidFrequency => defmt::write!(f, "PWM frequency out of achievable range"),
            Error::InvalidChannel => defmt::write!(f, "Invalid channel index"),
            Error::UnknownServoProfile => defmt::write!(f, "Unknown servo profile id"),
        }
    }
}
