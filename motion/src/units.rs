//! Conversion between physical units and TMC5072 register units.
//!
//! All three scales derive from two inputs: the drive wheel diameter and
//! the chip's internal clock. They are plain constants, computed once at
//! build time, and the conversion helpers are pure arithmetic with no
//! error conditions.

use core::f32::consts::PI;

use tmc5072::{ACCEL_LSB_HZ2, MICROSTEPS_PER_FULLSTEP, VELOCITY_LSB_HZ};

use crate::config::{FULL_STEPS_PER_REV, TIRE_DIAMETER_MM};

/// Wheel travel per microstep [mm].
pub const PULSE_MM: f32 =
    TIRE_DIAMETER_MM * PI / (FULL_STEPS_PER_REV * MICROSTEPS_PER_FULLSTEP as f32);

/// Wheel speed represented by one velocity register unit [mm/s].
pub const VELOCITY_SCALE: f32 = PULSE_MM * VELOCITY_LSB_HZ;

/// Wheel acceleration represented by one acceleration register unit
/// [mm/s^2].
pub const ACCEL_SCALE: f32 = PULSE_MM * ACCEL_LSB_HZ2;

/// Travel distance to a position register value, rounded to the nearest
/// microstep.
pub fn mm_to_microsteps(mm: f32) -> i32 {
    round(mm / PULSE_MM)
}

/// Position register value to travel distance [mm].
pub fn microsteps_to_mm(microsteps: i32) -> f32 {
    microsteps as f32 * PULSE_MM
}

/// Wheel speed [mm/s] to a velocity register value, rounded to the nearest
/// unit. Velocity registers hold magnitudes, negative speeds clamp to
/// zero.
pub fn mm_s_to_velocity(mm_s: f32) -> u32 {
    (mm_s / VELOCITY_SCALE + 0.5) as u32
}

/// Velocity register value to wheel speed [mm/s].
pub fn velocity_to_mm_s(units: u32) -> f32 {
    units as f32 * VELOCITY_SCALE
}

/// Wheel acceleration [mm/s^2] to an acceleration register value, rounded
/// to the nearest unit. Negative accelerations clamp to zero.
pub fn mm_s2_to_accel(mm_s2: f32) -> u32 {
    (mm_s2 / ACCEL_SCALE + 0.5) as u32
}

/// Acceleration register value to wheel acceleration [mm/s^2].
pub fn accel_to_mm_s2(units: u32) -> f32 {
    units as f32 * ACCEL_SCALE
}

fn round(x: f32) -> i32 {
    if x >= 0.0 {
        (x + 0.5) as i32
    } else {
        (x - 0.5) as i32
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn pulse_matches_closed_form() {
        // diameter * pi / (200 * 256)
        assert_relative_eq!(PULSE_MM, TIRE_DIAMETER_MM * PI / 51_200.0, epsilon = 1e-9);
        assert_relative_eq!(PULSE_MM, 0.001_472_6, epsilon = 1e-6);
    }

    #[test]
    fn scales_match_closed_form() {
        let fclk = 13_000_000.0f32;
        assert_relative_eq!(
            VELOCITY_SCALE,
            PULSE_MM * (fclk / 16_777_216.0),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            ACCEL_SCALE,
            PULSE_MM * (fclk / 16_777_216.0) * (fclk / 131_072.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn velocity_conversion_roundtrips() {
        for &mm_s in &[0.0, 55.5, 300.0, 1200.0, 3000.0] {
            let units = mm_s_to_velocity(mm_s);
            assert_relative_eq!(velocity_to_mm_s(units), mm_s, epsilon = VELOCITY_SCALE);
        }
        assert_eq!(mm_s_to_velocity(-10.0), 0);
    }

    #[test]
    fn accel_conversion_roundtrips() {
        for &mm_s2 in &[0.0, 500.0, 4000.0, 12_000.0] {
            let units = mm_s2_to_accel(mm_s2);
            assert_relative_eq!(accel_to_mm_s2(units), mm_s2, epsilon = ACCEL_SCALE);
        }
    }

    #[test]
    fn position_conversion_roundtrips() {
        // One cell of a classic maze is 180 mm.
        let microsteps = mm_to_microsteps(180.0);
        assert_relative_eq!(microsteps_to_mm(microsteps), 180.0, epsilon = PULSE_MM);

        // Backwards moves produce negative targets.
        assert_eq!(mm_to_microsteps(-90.0), -mm_to_microsteps(90.0));
    }
}
