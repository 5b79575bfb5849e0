//! Command-line rig for positioning hobby servos on a PCA9685 breakout.
//!
//! Wires the driver and input crates to a Linux I2C character device:
//!
//! 1. `scan` — pre-flight diagnostic listing every acknowledging address.
//! 2. `angle` — position one servo at a fixed angle and exit.
//! 3. `sweep` — run the continuous ~100 ms control loop, deriving the
//!    target angle from a synthetic joystick input exactly the way a
//!    live controller-driven caller would.
//!
//! Commands that talk to the chip first probe its address and fall back
//! to a full bus scan when nothing acknowledges, so a mis-jumpered board
//! shows up before any servo moves.

use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use joystick_input::{AngleSlew, Axis, JoystickState};
use linux_embedded_hal::{Delay, I2cdev};
use log::{debug, error, info};
use pca9685_driver::{probe, scan, Pca9685, ServoProfile};

/// Interval between control-loop updates.
const UPDATE_INTERVAL: Duration = Duration::from_millis(100);

/// Raw stick travel per sweep update.
const STICK_STEP: i32 = 4096;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// I2C character device of the bus the PCA9685 sits on.
    #[arg(long, default_value = "/dev/i2c-1")]
    bus: String,

    /// 7-bit slave address of the chip (decimal or 0x-prefixed hex).
    #[arg(long, default_value = "0x40", value_parser = parse_address)]
    address: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Probe every 7-bit address and report which ones acknowledge.
    Scan,

    /// Position one servo at a fixed angle.
    Angle {
        /// Output channel (0-15).
        #[arg(value_parser = clap::value_parser!(u8).range(..16))]
        channel: u8,

        /// Target angle in degrees.
        degrees: f32,

        /// Built-in servo profile id (0 = MS62 270°, 1 = DM996 180°).
        #[arg(long, default_value_t = 0)]
        servo: u8,
    },

    /// Sweep one servo end to end with a rate-limited control loop.
    Sweep {
        /// Output channel (0-15).
        #[arg(value_parser = clap::value_parser!(u8).range(..16))]
        channel: u8,

        /// Built-in servo profile id (0 = MS62 270°, 1 = DM996 180°).
        #[arg(long, default_value_t = 0)]
        servo: u8,

        /// Maximum angle change per update, in degrees.
        #[arg(long, default_value_t = 5.0)]
        step: f32,
    },
}

fn parse_address(raw: &str) -> Result<u8, String> {
    let parsed = if let Some(hex) = raw.strip_prefix("0x") {
        u8::from_str_radix(hex, 16)
    } else {
        raw.parse()
    };
    parsed.map_err(|_| format!("invalid I2C address: {raw}"))
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut i2c = match I2cdev::new(&cli.bus) {
        Ok(i2c) => i2c,
        Err(e) => {
            error!("Failed to open {}: {e}", cli.bus);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Scan => run_scan(&mut i2c, &cli.bus),
        Command::Angle {
            channel,
            degrees,
            servo,
        } => {
            if !preflight(&mut i2c, &cli.bus, cli.address) {
                return ExitCode::FAILURE;
            }
            run_angle(i2c, cli.address, channel, servo, degrees)
        }
        Command::Sweep {
            channel,
            servo,
            step,
        } => {
            if !preflight(&mut i2c, &cli.bus, cli.address) {
                return ExitCode::FAILURE;
            }
            run_sweep(i2c, cli.address, channel, servo, step)
        }
    }
}

/// Check that something acknowledges at the expected address; on failure,
/// scan the bus so the operator can see what is actually connected.
fn preflight(i2c: &mut I2cdev, bus: &str, address: u8) -> bool {
    if probe(i2c, address) {
        return true;
    }

    error!("No device acknowledges at {address:#04x} on {bus}");
    let found = scan(i2c);
    if found.is_empty() {
        error!("No I2C devices found on {bus}");
    }
    for occupied in &found {
        info!("Found device at {occupied:#04x}");
    }
    false
}

fn run_scan(i2c: &mut I2cdev, bus: &str) -> ExitCode {
    info!("Scanning {bus}...");

    let found = scan(i2c);
    if found.is_empty() {
        println!("No I2C devices found");
        return ExitCode::SUCCESS;
    }
    for address in &found {
        println!("Found device at {address:#04x}");
    }
    ExitCode::SUCCESS
}

fn run_angle(i2c: I2cdev, address: u8, channel: u8, servo: u8, degrees: f32) -> ExitCode {
    let mut pwm = Pca9685::new(i2c, address, Delay);
    if let Err(e) = pwm.open() {
        error!("Failed to configure PCA9685: {e}");
        return ExitCode::FAILURE;
    }
    info!("PCA9685 ready at {} Hz", pwm.frequency());

    match pwm.set_servo_angle_by_id(channel, servo, degrees) {
        Ok(()) => {
            info!("Channel {channel} positioned at {degrees}°");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to position servo: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_sweep(i2c: I2cdev, address: u8, channel: u8, servo: u8, step: f32) -> ExitCode {
    let Some(profile) = ServoProfile::by_id(servo) else {
        error!("Unknown servo profile id {servo}");
        return ExitCode::FAILURE;
    };

    let mut pwm = Pca9685::new(i2c, address, Delay);
    if let Err(e) = pwm.open() {
        error!("Failed to configure PCA9685: {e}");
        return ExitCode::FAILURE;
    }
    info!(
        "Sweeping channel {channel} over {}° at {} Hz",
        profile.max_angle_deg,
        pwm.frequency()
    );

    // Synthetic input source: ramp a virtual stick across its full travel
    // and back, then run the same read-derive-command-sleep loop a live
    // joystick caller would.
    let mut stick = JoystickState::new();
    let mut slew = AngleSlew::new(profile.max_angle_deg / 2.0, step);
    let mut position: i32 = i32::from(i16::MIN);
    let mut direction: i32 = 1;

    loop {
        stick.apply_axis(Axis::LeftX, position as i16);
        let target = stick.left_stick_angle(profile.max_angle_deg);
        let angle = slew.advance_toward(target);

        if let Err(e) = pwm.set_servo_angle(channel, profile, angle) {
            error!("Channel write failed: {e}");
            return ExitCode::FAILURE;
        }
        debug!("stick={position} target={target:.1} angle={angle:.1}");

        position += direction * STICK_STEP;
        if position >= i32::from(i16::MAX) {
            position = i32::from(i16::MAX);
            direction = -1;
        } else if position <= i32::from(i16::MIN) {
            position = i32::from(i16::MIN);
            direction = 1;
        }

        thread::sleep(UPDATE_INTERVAL);
    }
}
