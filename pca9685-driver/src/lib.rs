//! Driver for the PCA9685 16-channel I2C PWM controller.
//!
//! This crate provides a blocking driver for the NXP PCA9685, the PWM
//! controller found on most hobby servo breakout boards. It works with any
//! `embedded-hal` 1.0 I2C implementation.
//!
//! # Architecture
//!
//! The crate is split into layers:
//!
//! - **`bus`** (crate-private) — Raw register read/write primitives on top
//!   of the I2C transport.
//! - **[`Pca9685`]** (public) — The device handle: open/close lifecycle,
//!   PWM frequency control, per-channel on/off tick programming, and
//!   servo pulse/angle helpers.
//! - **[`ServoProfile`]** — Pulse-width calibration data for a servo model.
//! - **[`scan`]/[`probe`]** — Bus diagnostics for pre-flight checks.
//!
//! # Quick start
//!
//! ```no_run
//! use embedded_hal::{delay::DelayNs, i2c::I2c};
//! use pca9685_driver::{Error, Pca9685, ServoProfile, DEFAULT_ADDRESS};
//!
//! fn drive<I2C: I2c, D: DelayNs>(i2c: I2C, delay: D) -> Result<(), Error<I2C::Error>> {
//!     let mut pwm = Pca9685::new(i2c, DEFAULT_ADDRESS, delay);
//!     pwm.open()?;
//!     pwm.set_pwm_freq(50.0)?;
//!     pwm.set_servo_angle(0, &ServoProfile::MS62, 135.0)?;
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on error and
//!   profile types for embedded logging.

#![no_std]

pub use device::{Pca9685, DEFAULT_FREQ_HZ};
pub use error::Error;
pub use registers::{CHANNEL_COUNT, DEFAULT_ADDRESS, RESOLUTION};
pub use scan::{probe, scan, SCAN_CAPACITY};
pub use servo::ServoProfile;

mod bus;
mod device;
mod error;
mod registers;
mod scan;
mod servo;
