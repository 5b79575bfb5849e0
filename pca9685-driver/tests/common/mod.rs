//! Fake I2C transport and delay provider for driver tests.
//!
//! [`FakeBus`] models the PCA9685's register file behind an I2C bus: a
//! write transaction of `[reg, payload…]` stores the payload at `reg` and
//! sets the register pointer, a read transaction returns bytes from the
//! pointer onwards. Only configured addresses acknowledge, and the test
//! can inject a failure on the nth write transaction to exercise
//! mid-sequence abort paths.

#![allow(dead_code)]

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{self, ErrorType, I2c, Operation};

/// Power-on value of MODE1: SLEEP and ALLCALL set.
pub const MODE1_POWER_ON: u8 = 0x11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeBusError {
    /// No device acknowledges at the addressed slave.
    Nack,
    /// Failure injected by the test.
    Injected,
}

impl i2c::Error for FakeBusError {
    fn kind(&self) -> i2c::ErrorKind {
        match self {
            FakeBusError::Nack => {
                i2c::ErrorKind::NoAcknowledge(i2c::NoAcknowledgeSource::Address)
            }
            FakeBusError::Injected => i2c::ErrorKind::Other,
        }
    }
}

pub struct FakeBus {
    /// The chip's register file, addressable for readback assertions.
    pub registers: [u8; 256],
    /// Payloads of every completed write transaction, in order.
    pub write_log: Vec<Vec<u8>>,
    pointer: u8,
    present: Vec<u8>,
    fail_on_write: Option<usize>,
    writes_seen: usize,
}

impl FakeBus {
    /// A bus with a single PCA9685 at `address`, in its power-on state.
    pub fn new(address: u8) -> Self {
        Self::with_devices(&[address])
    }

    /// A bus where every listed address acknowledges.
    pub fn with_devices(addresses: &[u8]) -> Self {
        let mut registers = [0u8; 256];
        registers[0] = MODE1_POWER_ON;
        Self {
            registers,
            write_log: Vec::new(),
            pointer: 0,
            present: addresses.to_vec(),
            fail_on_write: None,
            writes_seen: 0,
        }
    }

    /// Make the `nth` write transaction (1-based, counted from bus
    /// creation) fail. Later writes succeed again, so a retry after the
    /// injected failure goes through.
    pub fn fail_on_write(&mut self, nth: usize) {
        self.fail_on_write = Some(nth);
    }

    /// Number of write transactions attempted so far.
    pub fn write_count(&self) -> usize {
        self.writes_seen
    }
}

impl ErrorType for FakeBus {
    type Error = FakeBusError;
}

impl I2c for FakeBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if !self.present.contains(&address) {
            return Err(FakeBusError::Nack);
        }

        for operation in operations {
            match operation {
                Operation::Write(bytes) => {
                    self.writes_seen += 1;
                    if self.fail_on_write == Some(self.writes_seen) {
                        return Err(FakeBusError::Injected);
                    }

                    if let Some((&register, payload)) = bytes.split_first() {
                        self.pointer = register;
                        for (offset, &byte) in payload.iter().enumerate() {
                            self.registers[register as usize + offset] = byte;
                        }
                    }
                    self.write_log.push(bytes.to_vec());
                }
                Operation::Read(buffer) => {
                    for byte in buffer.iter_mut() {
                        *byte = self.registers[self.pointer as usize];
                        self.pointer = self.pointer.wrapping_add(1);
                    }
                }
            }
        }

        Ok(())
    }
}

/// Delay provider that records total requested delay instead of sleeping.
#[derive(Debug, Default)]
pub struct FakeDelay {
    pub total_ns: u64,
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}
