//! The motion profile handed from the planner to the driver layer.

use crate::units;

/// One planned move for the six-point ramp generator.
///
/// Speeds are in mm/s, accelerations in mm/s^2, the distance in mm. The
/// profile is a plain value object: the planner fills it in, the driver
/// layer programs it into the ramp registers of one motor. The two-stage
/// shape mirrors the ramp generator itself: accelerate with `a1_accel` up
/// to `v1_speed`, then with `amax_accel` up to the `vmax_speed` cruise
/// speed, and end the move at `finish_speed` after `len` of travel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct MotionProfile {
    /// Speed at the start of the move [mm/s].
    pub init_speed: f32,
    /// Top speed of the first acceleration stage [mm/s].
    pub v1_speed: f32,
    /// Acceleration up to `v1_speed` [mm/s^2].
    pub a1_accel: f32,
    /// Cruise speed [mm/s].
    pub vmax_speed: f32,
    /// Acceleration from `v1_speed` up to `vmax_speed` [mm/s^2].
    pub amax_accel: f32,
    /// Speed at the end of the move [mm/s].
    pub finish_speed: f32,
    /// Total travel [mm].
    pub len: f32,
}

impl MotionProfile {
    /// VSTART register value for this move.
    pub fn vstart(&self) -> u32 {
        units::mm_s_to_velocity(self.init_speed)
    }

    /// V1 register value for this move.
    pub fn v1(&self) -> u32 {
        units::mm_s_to_velocity(self.v1_speed)
    }

    /// A1 register value for this move.
    pub fn a1(&self) -> u32 {
        units::mm_s2_to_accel(self.a1_accel)
    }

    /// VMAX register value for this move.
    pub fn vmax(&self) -> u32 {
        units::mm_s_to_velocity(self.vmax_speed)
    }

    /// AMAX register value for this move.
    pub fn amax(&self) -> u32 {
        units::mm_s2_to_accel(self.amax_accel)
    }

    /// VSTOP register value for this move. The ramp generator requires
    /// VSTOP >= 1, a zero here means the caller has to substitute the
    /// minimum.
    pub fn vstop(&self) -> u32 {
        units::mm_s_to_velocity(self.finish_speed)
    }

    /// XTARGET register value for this move, relative to the current
    /// position.
    pub fn xtarget(&self) -> i32 {
        units::mm_to_microsteps(self.len)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::units;

    fn straight() -> MotionProfile {
        MotionProfile {
            init_speed: 0.0,
            v1_speed: 300.0,
            a1_accel: 6000.0,
            vmax_speed: 1800.0,
            amax_accel: 4000.0,
            finish_speed: 0.0,
            len: 180.0 * 4.0,
        }
    }

    #[test]
    fn fields_roundtrip() {
        let p = straight();
        assert_eq!(p, straight());
        assert_relative_eq!(p.v1_speed, 300.0);
        assert_relative_eq!(p.a1_accel, 6000.0);
        assert_relative_eq!(p.len, 720.0);
    }

    #[test]
    fn register_values_match_unit_scales() {
        let p = straight();
        assert_eq!(p.vstart(), 0);
        assert_eq!(p.v1(), units::mm_s_to_velocity(300.0));
        assert_eq!(p.vmax(), units::mm_s_to_velocity(1800.0));
        assert_eq!(p.a1(), units::mm_s2_to_accel(6000.0));
        assert_eq!(p.amax(), units::mm_s2_to_accel(4000.0));
        assert_eq!(p.vstop(), 0);
        assert_eq!(p.xtarget(), units::mm_to_microsteps(720.0));
    }

    #[test]
    fn cruise_dominates_first_stage() {
        let p = straight();
        assert!(p.v1() < p.vmax());
        assert!(p.xtarget() > 0);
    }
}
