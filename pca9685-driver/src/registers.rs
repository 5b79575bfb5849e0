//! PCA9685 register map and timing constants.
//!
//! Register addresses and bit positions follow the NXP PCA9685 datasheet.
//! Each of the 16 LED outputs has a 4-register block (ON low/high, OFF
//! low/high) starting at [`LED0_ON_L`] and spaced [`CHANNEL_STRIDE`]
//! registers apart.

// ---------------------------------------------------------------------------
// Control registers
// ---------------------------------------------------------------------------

/// Mode register 1: restart, sleep, and addressing bits.
pub const MODE1: u8 = 0x00;

/// Mode register 2: output driver configuration.
pub const MODE2: u8 = 0x01;

/// Oscillator prescaler. Writable only while the SLEEP bit is set.
pub const PRESCALE: u8 = 0xFE;

/// First register of channel 0's ON/OFF block.
pub const LED0_ON_L: u8 = 0x06;

/// Register stride between consecutive channel blocks.
pub const CHANNEL_STRIDE: u8 = 4;

// ---------------------------------------------------------------------------
// Mode register bits
// ---------------------------------------------------------------------------

/// MODE1 bit: low-power mode, oscillator off.
pub const MODE1_SLEEP: u8 = 0x10;

/// MODE1 bit: restart all channels from their programmed state.
pub const MODE1_RESTART: u8 = 0x80;

/// MODE2 bit: totem-pole output drive (rather than open-drain).
pub const MODE2_OUTDRV: u8 = 0x04;

// ---------------------------------------------------------------------------
// Chip characteristics
// ---------------------------------------------------------------------------

/// Internal oscillator frequency in Hz.
pub const OSC_CLOCK_HZ: f32 = 25_000_000.0;

/// Tick resolution of one PWM period. Fixed regardless of frequency.
pub const RESOLUTION: u16 = 4096;

/// Number of independent PWM output channels.
pub const CHANNEL_COUNT: u8 = 16;

/// Default 7-bit I2C address (all address pins low).
pub const DEFAULT_ADDRESS: u8 = 0x40;

/// Smallest prescale value the chip accepts. Together with the fixed
/// oscillator this caps the output frequency at roughly 1526 Hz.
pub const PRESCALE_MIN: u8 = 3;

/// Settle time after waking the oscillator, before setting the restart
/// bit. The datasheet requires at least 500µs; 5ms is used throughout.
pub const OSC_SETTLE_US: u32 = 5_000;

// ---------------------------------------------------------------------------
// Bus scan range
// ---------------------------------------------------------------------------

/// First 7-bit address probed by a bus scan (below are reserved).
pub const SCAN_FIRST_ADDRESS: u8 = 0x03;

/// Last 7-bit address probed by a bus scan (above are reserved).
pub const SCAN_LAST_ADDRESS: u8 = 0x77;
