//! Register-level support for the TMC5072 dual stepper motor driver.
//!
//! The TMC5072 integrates two complete motion controllers and motor drivers
//! behind one SPI/UART register interface. This crate holds the static part
//! of that interface: register addresses and their access-permission
//! classes, typed register values, and the timing constants needed to turn
//! ramp-generator register units into physical units.
//!
//! It deliberately contains no bus code. Opening the SPI channel, issuing
//! transactions, sequencing ramps and reacting to fault flags belong to the
//! driver layer that consumes these definitions.

#![no_std]

pub mod reg;

/// Address-byte value of a read transaction (direction bit cleared).
pub const READ_FLAG: u8 = 0x00;

/// Direction bit of the transaction address byte. A register address with
/// this bit set selects a write access.
pub const WRITE_FLAG: u8 = 0x80;

/// Internal clock frequency the driver runs at without an external clock
/// [Hz].
pub const FCLK_HZ: f32 = 13_000_000.0;

/// Microsteps per full step at the default microstep resolution (MRES = 0).
pub const MICROSTEPS_PER_FULLSTEP: u32 = 256;

/// Velocity represented by one unit of a velocity register [microsteps/s].
///
/// v[microsteps/s] = VMAX * fCLK / 2^24
pub const VELOCITY_LSB_HZ: f32 = FCLK_HZ / 16_777_216.0;

/// Acceleration represented by one unit of an acceleration register
/// [microsteps/s^2].
///
/// a[microsteps/s^2] = AMAX * fCLK^2 / (2^24 * 2^17)
pub const ACCEL_LSB_HZ2: f32 = VELOCITY_LSB_HZ * (FCLK_HZ / 131_072.0);

/// One of the two motion controller / motor driver pairs of the chip.
///
/// The ramp generator and motor driver register banks exist once per motor;
/// see [`reg::AxisRegister`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
pub enum Motor {
    One,
    Two,
}

/// How the motion controller operates the chip.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
pub enum DriveMode {
    /// External STEP/DIR pulses, ramp generator bypassed.
    StepDir,
    /// Internal six-point ramp generator (VSTART, A1/V1, AMAX/VMAX, VSTOP).
    #[default]
    SixPoint,
    /// Velocity mode: accelerate with AMAX towards VMAX, no target position.
    Velocity,
}
