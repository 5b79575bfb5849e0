//! Bus diagnostics: probe a single address or scan the whole bus.
//!
//! These helpers operate on a bare I2C peripheral rather than a
//! [`Pca9685`](crate::Pca9685) handle, so they can run before a device is
//! opened — the usual pre-flight check that the expected chip is actually
//! present at the expected address.

use embedded_hal::i2c::I2c;
use heapless::Vec;

use crate::registers::{MODE1, SCAN_FIRST_ADDRESS, SCAN_LAST_ADDRESS};

/// Capacity of the scan result: one slot per probeable 7-bit address.
pub const SCAN_CAPACITY: usize =
    (SCAN_LAST_ADDRESS - SCAN_FIRST_ADDRESS) as usize + 1;

/// Check whether a device acknowledges at the given 7-bit address.
///
/// Writes register address 0 and reads one byte back; both transactions
/// must complete for the address to count as occupied. A NACK from an
/// empty address surfaces as a transport error, which is the expected
/// outcome — it is swallowed here, not propagated.
pub fn probe<I2C: I2c>(i2c: &mut I2C, address: u8) -> bool {
    let mut buf = [0u8; 1];
    i2c.write(address, &[MODE1]).is_ok() && i2c.read(address, &mut buf).is_ok()
}

/// Probe every valid 7-bit address (0x03–0x77) and collect the ones that
/// acknowledge, in ascending order.
pub fn scan<I2C: I2c>(i2c: &mut I2C) -> Vec<u8, SCAN_CAPACITY> {
    let mut found = Vec::new();

    for address in SCAN_FIRST_ADDRESS..=SCAN_LAST_ADDRESS {
        if probe(i2c, address) {
            // Cannot overflow: capacity covers the whole address range.
            let _ = found.push(address);
        }
    }

    found
}
