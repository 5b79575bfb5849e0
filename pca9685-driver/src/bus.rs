//! Register-level I2C protocol primitives.
//!
//! Encodes PCA9685 register accesses as raw bus transactions. A write is a
//! single transaction of the register address byte followed by the payload;
//! a read is a one-byte write of the register address followed by a separate
//! one-byte read.
//!
//! This module is crate-private — consumers interact with [`Pca9685`] in
//! `device.rs` instead.
//!
//! [`Pca9685`]: crate::Pca9685

use embedded_hal::i2c::I2c;

use crate::error::Error;

/// Low-level register access over a shared I2C transport.
///
/// Owns the I2C peripheral and the chip's 7-bit slave address. No retries
/// are attempted at this layer; transport failures propagate to the caller.
pub(crate) struct RegisterBus<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> RegisterBus<I2C>
where
    I2C: I2c,
{
    /// Create a new register bus bound to one slave address.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Write a single byte to a register.
    pub fn write_u8(&mut self, register: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c.write(self.address, &[register, value])?;
        Ok(())
    }

    /// Write a channel's 4-byte ON/OFF block starting at `register`.
    ///
    /// The whole block goes out as one bus transaction so the chip latches
    /// all four bytes together. If the transport fails partway through, the
    /// channel's state on the chip is undefined and the caller should retry
    /// the full write.
    pub fn write_channel_block(
        &mut self,
        register: u8,
        data: [u8; 4],
    ) -> Result<(), Error<I2C::Error>> {
        let buf = [register, data[0], data[1], data[2], data[3]];
        self.i2c.write(self.address, &buf)?;
        Ok(())
    }

    /// Read a single byte from a register.
    ///
    /// Uses separate `write()` and `read()` transactions rather than
    /// `write_read()`: some transports (Linux i2c-dev without combined
    /// transfers, for one) have no repeated-start, and the chip does not
    /// need one.
    pub fn read_u8(&mut self, register: u8) -> Result<u8, Error<I2C::Error>> {
        self.i2c.write(self.address, &[register])?;

        let mut buf = [0u8; 1];
        self.i2c.read(self.address, &mut buf)?;

        Ok(buf[0])
    }

    /// Consume the bus driver and hand back the I2C peripheral.
    pub fn release(self) -> I2C {
        self.i2c
    }
}
