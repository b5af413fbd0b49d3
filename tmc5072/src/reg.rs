//! Declaration of the TMC5072 registers and their implementations.
//!
//! Please refer to the TMC5072 datasheet for information on what each of
//! these registers and their fields mean. The register map is described
//! under section 4 of the datasheet.
//!
//! https://www.trinamic.com/fileadmin/assets/Products/ICs_Documents/TMC5072_datasheet.pdf
//!
//! The TMC5072 contains two complete motion controller and driver channels.
//! The ramp generator, feature control, encoder and motor driver register
//! banks therefore exist once per motor, while the general configuration
//! and microstep table registers are shared. Each unique register is
//! modelled by one value type; the [`Address`] enum carries one variant per
//! physical address, so per-motor registers appear twice (`XACTUAL1` and
//! `XACTUAL2` both carry an [`XACTUAL`]).

#![allow(non_camel_case_types)]

use bitfield::bitfield;

use crate::{Motor, WRITE_FLAG};

// Register Traits
// --------------------------------------------------------

/// Implemented for all register value types.
pub trait Register: Copy + From<u32> + Into<u32> {}

/// Registers that exist once per chip.
pub trait GlobalRegister: Register {
    const ADDRESS: Address;
}

/// Registers duplicated per motion controller / motor driver channel.
pub trait AxisRegister: Register {
    const MOTOR1: Address;
    const MOTOR2: Address;

    /// The address of this register for the given motor.
    fn address(motor: Motor) -> Address {
        match motor {
            Motor::One => Self::MOTOR1,
            Motor::Two => Self::MOTOR2,
        }
    }
}

/// Implemented for all registers that can be read from.
pub trait ReadableRegister: Register {}

/// Implemented for all registers that can be written to.
pub trait WritableRegister: Register {}

/// An error that might occur in the case that an address could not be
/// parsed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
pub struct UnknownAddress;

/// An error indicating an unexpected `State`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
pub struct UnexpectedAddress;

// Access Permissions
// --------------------------------------------------------

/// Access permission class of a register address.
///
/// The classes beyond plain read/write encode hardware behaviour that
/// cannot be recovered from the address alone: [`ReadWriteSplit`] addresses
/// serve different functions for reading and writing, [`ReadClear`] flag
/// registers clear as a side effect of being read, and [`WritePreset`]
/// registers come out of reset loaded with hardware presets rather than
/// zeros.
///
/// [`ReadWriteSplit`]: Access::ReadWriteSplit
/// [`ReadClear`]: Access::ReadClear
/// [`WritePreset`]: Access::WritePreset
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
pub enum Access {
    /// Reserved address, no register behind it.
    None,
    /// Read only.
    Read,
    /// Write only.
    Write,
    /// Read and write.
    ReadWrite,
    /// Read and write, with separate functions or values for reading and
    /// writing.
    ReadWriteSplit,
    /// Read only flag register, reading clears the flags.
    ReadClear,
    /// Write only, loaded from hardware presets at reset.
    WritePreset,
}

impl Access {
    /// Whether a read request may be issued to an address of this class.
    pub const fn readable(self) -> bool {
        matches!(
            self,
            Self::Read | Self::ReadWrite | Self::ReadWriteSplit | Self::ReadClear
        )
    }

    /// Whether a write request may be issued to an address of this class.
    pub const fn writable(self) -> bool {
        matches!(
            self,
            Self::Write | Self::ReadWrite | Self::ReadWriteSplit | Self::WritePreset
        )
    }

    /// Whether reading an address of this class clears its flag bits.
    pub const fn clears_on_read(self) -> bool {
        matches!(self, Self::ReadClear)
    }

    /// Whether a register of this class is reloaded from hardware presets
    /// at reset rather than cleared.
    pub const fn preset_at_reset(self) -> bool {
        matches!(self, Self::WritePreset)
    }

    /// Look up the access class of a register address.
    ///
    /// Total over the whole address space: the direction bit of a
    /// transaction address byte is stripped, and reserved addresses report
    /// [`Access::None`].
    pub const fn of(addr: u8) -> Self {
        ACCESS_MAP[(addr & !WRITE_FLAG) as usize]
    }
}

/// Access permissions for the full 7-bit register address space.
///
/// Row comments give the first address of each group of eight. `__` marks
/// reserved addresses.
pub const ACCESS_MAP: [Access; 128] = {
    use Access::None as __;
    use Access::Read as R;
    use Access::ReadWrite as RW;
    use Access::ReadWriteSplit as RWS;
    use Access::Write as W;
    use Access::WritePreset as WP;
    [
        RW, R, R, W, RWS, W, __, __, // 0x00
        __, __, __, __, __, __, __, __, // 0x08
        W, R, __, __, __, __, __, __, // 0x10
        W, R, __, __, __, __, __, __, // 0x18
        RW, RW, R, W, W, W, W, W, // 0x20
        W, __, W, W, W, RW, __, __, // 0x28
        W, W, W, W, RW, R, R, __, // 0x30
        RW, RW, W, R, R, __, __, __, // 0x38
        RW, RW, R, W, W, W, W, W, // 0x40
        W, __, W, W, W, RW, __, __, // 0x48
        W, W, W, W, RW, R, R, __, // 0x50
        RW, RW, W, R, R, __, __, __, // 0x58
        WP, WP, WP, WP, WP, WP, WP, WP, // 0x60
        WP, WP, R, R, RW, W, W, R, // 0x68
        __, __, __, __, __, __, __, __, // 0x70
        __, __, R, R, RW, W, W, R, // 0x78
    ]
};

// Register Declarations
// --------------------------------------------------------

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct GCONF(u32);
    impl Debug;
    u32;
    pub poscmp_enable, set_poscmp_enable: 0;
    pub test_mode, set_test_mode: 1;
    pub shaft1, set_shaft1: 2;
    pub shaft2, set_shaft2: 3;
    pub lock_gconf, set_lock_gconf: 4;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct GSTAT(u32);
    impl Debug;
    u8;
    pub reset, _: 0;
    pub drv_err1, _: 1;
    pub drv_err2, _: 2;
    pub uv_cp, _: 3;
}

/// Interface transmission counter, increments on each successful UART
/// write access.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
pub struct IFCNT(pub u32);

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct SLAVECONF(u32);
    impl Debug;
    u8;
    pub senddelay, set_senddelay: 11, 8;
}

bitfield! {
    /// One address, two functions: reading returns the state of the IO
    /// pins (plus the silicon version), writing sets the IO output
    /// polarity.
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct IO(u32);
    impl Debug;
    u8;
    pub refl1_step, _: 0;
    pub refr1_dir, _: 1;
    pub refl2_step, _: 2;
    pub refr2_dir, _: 3;
    pub drv_enn, _: 4;
    pub output_polarity, set_output_polarity: 0;
    u8;
    pub version, _: 31, 24;
}

/// Position comparison register. The position compare output pin goes
/// active when XACTUAL of motor 1 matches this value.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
pub struct X_COMPARE(pub u32);

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct PWMCONF(u32);
    impl Debug;
    u8;
    pub pwm_ampl, set_pwm_ampl: 7, 0;
    pub pwm_grad, set_pwm_grad: 15, 8;
    pub pwm_freq, set_pwm_freq: 17, 16;
    pub pwm_autoscale, set_pwm_autoscale: 18;
    pub pwm_symmetric, set_pwm_symmetric: 19;
    pub freewheel, set_freewheel: 21, 20;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct PWM_STATUS(u32);
    impl Debug;
    u8;
    pub pwm_scale, _: 7, 0;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct RAMPMODE(u32);
    impl Debug;
    u8;
    pub get, set: 1, 0;
}

impl RAMPMODE {
    /// Follow the six-point ramp towards XTARGET.
    pub const POSITION: Self = RAMPMODE(0);
    /// Velocity mode, positive VMAX.
    pub const VELOCITY_POS: Self = RAMPMODE(1);
    /// Velocity mode, negative VMAX.
    pub const VELOCITY_NEG: Self = RAMPMODE(2);
    /// Hold the current velocity, ramp generator frozen.
    pub const HOLD: Self = RAMPMODE(3);
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct XACTUAL(u32);
    impl Debug;
    i32;
    pub get, set: 31, 0;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct VACTUAL(u32);
    impl Debug;
    i32;
    pub get, _: 23, 0;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct VSTART(u32);
    impl Debug;
    u32;
    pub get, set: 17, 0;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct A1(u32);
    impl Debug;
    u16;
    pub get, set: 15, 0;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct V1(u32);
    impl Debug;
    u32;
    pub get, set: 19, 0;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct AMAX(u32);
    impl Debug;
    u16;
    pub get, set: 15, 0;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct VMAX(u32);
    impl Debug;
    u32;
    pub get, set: 22, 0;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct DMAX(u32);
    impl Debug;
    u16;
    pub get, set: 15, 0;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct D1(u32);
    impl Debug;
    u16;
    pub get, set: 15, 0;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct VSTOP(u32);
    impl Debug;
    u32;
    pub get, set: 17, 0;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct TZEROWAIT(u32);
    impl Debug;
    u16;
    pub get, set: 15, 0;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct XTARGET(u32);
    impl Debug;
    i32;
    pub get, set: 31, 0;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct IHOLD_IRUN(u32);
    impl Debug;
    u8;
    pub ihold, set_ihold: 4, 0;
    pub irun, set_irun: 12, 8;
    pub ihold_delay, set_ihold_delay: 19, 16;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct VCOOLTHRS(u32);
    impl Debug;
    u32;
    pub get, set: 22, 0;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct VHIGH(u32);
    impl Debug;
    u32;
    pub get, set: 22, 0;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct VDCMIN(u32);
    impl Debug;
    u32;
    pub get, set: 22, 0;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct SW_MODE(u32);
    impl Debug;
    u16;
    pub stop_l_enable, set_stop_l_enable: 0;
    pub stop_r_enable, set_stop_r_enable: 1;
    pub pol_stop_l, set_pol_stop_l: 2;
    pub pol_stop_r, set_pol_stop_r: 3;
    pub swap_lr, set_swap_lr: 4;
    pub latch_l_active, set_latch_l_active: 5;
    pub latch_l_inactive, set_latch_l_inactive: 6;
    pub latch_r_active, set_latch_r_active: 7;
    pub latch_r_inactive, set_latch_r_inactive: 8;
    pub en_latch_encoder, set_en_latch_encoder: 9;
    pub sg_stop, set_sg_stop: 10;
    pub en_softstop, set_en_softstop: 11;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct RAMP_STAT(u32);
    impl Debug;
    u16;
    pub status_stop_l, _: 0;
    pub status_stop_r, _: 1;
    pub status_latch_l, _: 2;
    pub status_latch_r, _: 3;
    pub event_stop_l, _: 4;
    pub event_stop_r, _: 5;
    pub event_stop_sg, _: 6;
    pub event_pos_reached, _: 7;
    pub velocity_reached, _: 8;
    pub position_reached, _: 9;
    pub vzero, _: 10;
    pub t_zerowait_active, _: 11;
    pub second_move, _: 12;
    pub status_sg, _: 13;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct XLATCH(u32);
    impl Debug;
    i32;
    pub get, _: 31, 0;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct ENCMODE(u32);
    impl Debug;
    u16;
    pub pol_a, set_pol_a: 0;
    pub pol_b, set_pol_b: 1;
    pub pol_n, set_pol_n: 2;
    pub ignore_ab, set_ignore_ab: 3;
    pub clr_cont, set_clr_cont: 4;
    pub clr_once, set_clr_once: 5;
    pub pos_edge, set_pos_edge: 6;
    pub neg_edge, set_neg_edge: 7;
    pub clr_enc_x, set_clr_enc_x: 8;
    pub latch_x_act, set_latch_x_act: 9;
    pub enc_sel_decimal, set_enc_sel_decimal: 10;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct X_ENC(u32);
    impl Debug;
    i32;
    pub get, set: 31, 0;
}

/// Encoder constant, signed 16.16 fixed point factor between encoder
/// resolution and motor resolution.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
pub struct ENC_CONST(pub u32);

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct ENC_STATUS(u32);
    impl Debug;
    u8;
    pub n_event, _: 0;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct ENC_LATCH(u32);
    impl Debug;
    i32;
    pub get, _: 31, 0;
}

/// One entry of the microstep waveform look-up table.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
pub struct MSLUT0(pub u32);

/// One entry of the microstep waveform look-up table.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
pub struct MSLUT1(pub u32);

/// One entry of the microstep waveform look-up table.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
pub struct MSLUT2(pub u32);

/// One entry of the microstep waveform look-up table.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
pub struct MSLUT3(pub u32);

/// One entry of the microstep waveform look-up table.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
pub struct MSLUT4(pub u32);

/// One entry of the microstep waveform look-up table.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
pub struct MSLUT5(pub u32);

/// One entry of the microstep waveform look-up table.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
pub struct MSLUT6(pub u32);

/// One entry of the microstep waveform look-up table.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
pub struct MSLUT7(pub u32);

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct MSLUTSEL(u32);
    impl Debug;
    u8;
    pub w0, set_w0: 1, 0;
    pub w1, set_w1: 3, 2;
    pub w2, set_w2: 5, 4;
    pub w3, set_w3: 7, 6;
    pub x1, set_x1: 15, 8;
    pub x2, set_x2: 23, 16;
    pub x3, set_x3: 31, 24;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct MSLUTSTART(u32);
    impl Debug;
    u8;
    pub start_sin, set_start_sin: 7, 0;
    pub start_sin90, set_start_sin90: 23, 16;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct MSCNT(u32);
    impl Debug;
    u16;
    pub get, _: 9, 0;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct MSCURACT(u32);
    impl Debug;
    u16;
    pub cur_a, _: 8, 0;
    pub cur_b, _: 24, 16;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct CHOPCONF(u32);
    impl Debug;
    u8;
    pub toff, set_toff: 3, 0;
    pub hstrt, set_hstrt: 6, 4;
    pub hend, set_hend: 10, 7;
    pub fd3, set_fd3: 11;
    pub disfdcc, set_disfdcc: 12;
    pub rndtf, set_rndtf: 13;
    pub chm, set_chm: 14;
    pub tbl, set_tbl: 16, 15;
    pub vsense, set_vsense: 17;
    pub vhighfs, set_vhighfs: 18;
    pub vhighchm, set_vhighchm: 19;
    pub sync, set_sync: 23, 20;
    pub mres, set_mres: 27, 24;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct COOLCONF(u32);
    impl Debug;
    u8;
    pub semin, set_semin: 3, 0;
    pub seup, set_seup: 6, 5;
    pub semax, set_semax: 11, 8;
    pub sedn, set_sedn: 14, 13;
    pub seimin, set_seimin: 15;
    pub sgt, set_sgt: 22, 16;
    pub sfilt, set_sfilt: 24;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct DCCTRL(u32);
    impl Debug;
    u16;
    pub dc_time, set_dc_time: 9, 0;
    u8;
    pub dc_sg, set_dc_sg: 23, 16;
}

bitfield! {
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[cfg_attr(feature = "hash", derive(hash32_derive::Hash32))]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
    #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
    pub struct DRV_STATUS(u32);
    impl Debug;
    u16;
    pub sg_result, _: 9, 0;
    pub fsactive, _: 15;
    u8;
    pub cs_actual, _: 20, 16;
    pub stallguard, _: 24;
    pub ot, _: 25;
    pub otpw, _: 26;
    pub s2ga, _: 27;
    pub s2gb, _: 28;
    pub ola, _: 29;
    pub olb, _: 30;
    pub stst, _: 31;
}

// Implementation Macros
// --------------------------------------------------------

/// Maps an access-class token to its [`Access`] variant.
macro_rules! class_access {
    (R) => {
        Access::Read
    };
    (W) => {
        Access::Write
    };
    (RW) => {
        Access::ReadWrite
    };
    (RWS) => {
        Access::ReadWriteSplit
    };
    (RC) => {
        Access::ReadClear
    };
    (WP) => {
        Access::WritePreset
    };
}

/// A macro for generating `ReadableRegister` and `WritableRegister`
/// implementations for the register types based on their access class.
macro_rules! impl_rw {
    (R $T:ident) => {
        impl ReadableRegister for $T {}
    };
    (W $T:ident) => {
        impl WritableRegister for $T {}
    };
    (RW $T:ident) => {
        impl ReadableRegister for $T {}
        impl WritableRegister for $T {}
    };
    (RWS $T:ident) => {
        impl ReadableRegister for $T {}
        impl WritableRegister for $T {}
    };
    (RC $T:ident) => {
        impl ReadableRegister for $T {}
    };
    (WP $T:ident) => {
        impl WritableRegister for $T {}
    };
}

/// A macro for generating the `Address` and `State` enums along with the
/// register trait implementations.
///
/// `global` entries declare registers that exist once per chip, `axis`
/// entries declare the per-motor register pairs: one value type, two
/// addresses.
macro_rules! impl_registers {
    (
        global {
            $($gc:ident $gaddr:literal $G:ident,)*
        }
        axis {
            $($ac:ident $A:ident [$addr1:literal $V1:ident, $addr2:literal $V2:ident],)*
        }
    ) => {
        /// A dynamic representation of a register's 8-bit address.
        #[repr(u8)]
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
        #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
        pub enum Address {
            $(
                $G = $gaddr,
            )*
            $(
                $V1 = $addr1,
                $V2 = $addr2,
            )*
        }

        /// A dynamic representation of a register's 32-bit state.
        ///
        /// Per-motor registers have one variant per bank, both carrying
        /// the shared value type.
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
        #[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
        pub enum State {
            $(
                $G($G),
            )*
            $(
                $V1($A),
                $V2($A),
            )*
        }

        impl Address {
            /// All register addresses.
            pub const ALL: &'static [Self] = &[
                $(
                    Self::$G,
                )*
                $(
                    Self::$V1,
                    Self::$V2,
                )*
            ];

            /// The access class declared for this register.
            ///
            /// Agrees with [`ACCESS_MAP`] for every address.
            pub const fn access(self) -> Access {
                match self {
                    $(
                        Self::$G => class_access!($gc),
                    )*
                    $(
                        Self::$V1 | Self::$V2 => class_access!($ac),
                    )*
                }
            }

            /// Whether or not we can send a read request to the register
            /// address.
            pub const fn readable(self) -> bool {
                self.access().readable()
            }

            /// Whether or not we can send a write request to the register
            /// address.
            pub const fn writable(self) -> bool {
                self.access().writable()
            }

            /// The address byte of a read transaction.
            pub const fn read_byte(self) -> u8 {
                self as u8
            }

            /// The address byte of a write transaction, direction flag
            /// set.
            pub const fn write_byte(self) -> u8 {
                self as u8 | WRITE_FLAG
            }
        }

        impl State {
            /// Construct a register state from its address and data
            /// represented as a `u32`.
            pub fn from_addr_and_data(addr: Address, data: u32) -> Self {
                match addr {
                    $(
                        Address::$G => State::$G(<_>::from(data)),
                    )*
                    $(
                        Address::$V1 => State::$V1(<_>::from(data)),
                        Address::$V2 => State::$V2(<_>::from(data)),
                    )*
                }
            }

            /// Construct the cleared register state associated with the
            /// given address.
            pub fn from_addr_default(addr: Address) -> Self {
                Self::from_addr_and_data(addr, 0)
            }

            /// The address of the register with which this state is
            /// associated.
            pub fn addr(&self) -> Address {
                match *self {
                    $(
                        State::$G(_) => Address::$G,
                    )*
                    $(
                        State::$V1(_) => Address::$V1,
                        State::$V2(_) => Address::$V2,
                    )*
                }
            }

            /// Attempt to retrieve a reference to a register of type `R`
            /// from the dynamic register `State` representation.
            ///
            /// For per-motor registers either bank's variant yields the
            /// shared value type. Returns an `Err` if the register type
            /// does not match.
            pub fn reg<R>(&self) -> Result<&R, UnexpectedAddress>
            where
                R: 'static + Register,
            {
                match *self {
                    $(
                        Self::$G(ref r) => (r as &dyn core::any::Any)
                            .downcast_ref()
                            .ok_or(UnexpectedAddress),
                    )*
                    $(
                        Self::$V1(ref r) | Self::$V2(ref r) => (r as &dyn core::any::Any)
                            .downcast_ref()
                            .ok_or(UnexpectedAddress),
                    )*
                }
            }
        }

        impl From<Address> for u8 {
            fn from(addr: Address) -> Self {
                addr as u8
            }
        }

        impl From<State> for u32 {
            fn from(state: State) -> Self {
                match state {
                    $(
                        State::$G(r) => r.into(),
                    )*
                    $(
                        State::$V1(r) | State::$V2(r) => r.into(),
                    )*
                }
            }
        }

        impl core::convert::TryFrom<u8> for Address {
            type Error = UnknownAddress;
            fn try_from(u: u8) -> Result<Self, Self::Error> {
                let reg = match u {
                    $(
                        $gaddr => Self::$G,
                    )*
                    $(
                        $addr1 => Self::$V1,
                        $addr2 => Self::$V2,
                    )*
                    _ => return Err(UnknownAddress),
                };
                Ok(reg)
            }
        }

        #[cfg(feature = "hash")]
        impl hash32::Hash for Address {
            fn hash<H>(&self, state: &mut H)
            where
                H: hash32::Hasher,
            {
                (*self as u8).hash(state)
            }
        }

        #[cfg(feature = "hash")]
        impl hash32::Hash for State {
            fn hash<H>(&self, state: &mut H)
            where
                H: hash32::Hasher,
            {
                let u: u32 = (*self).into();
                u.hash(state)
            }
        }

        $(
            impl From<u32> for $G {
                fn from(u: u32) -> $G {
                    $G(u)
                }
            }

            impl From<$G> for u32 {
                fn from(r: $G) -> u32 {
                    r.0
                }
            }

            impl From<$G> for State {
                fn from(r: $G) -> Self {
                    State::$G(r)
                }
            }

            impl core::convert::TryFrom<State> for $G {
                type Error = UnexpectedAddress;
                fn try_from(state: State) -> Result<Self, Self::Error> {
                    match state {
                        State::$G(s) => Ok(s),
                        _ => Err(UnexpectedAddress),
                    }
                }
            }

            impl Register for $G {}

            impl GlobalRegister for $G {
                const ADDRESS: Address = Address::$G;
            }

            impl_rw! {$gc $G}
        )*

        $(
            impl From<u32> for $A {
                fn from(u: u32) -> $A {
                    $A(u)
                }
            }

            impl From<$A> for u32 {
                fn from(r: $A) -> u32 {
                    r.0
                }
            }

            impl core::convert::TryFrom<State> for $A {
                type Error = UnexpectedAddress;
                fn try_from(state: State) -> Result<Self, Self::Error> {
                    match state {
                        State::$V1(s) | State::$V2(s) => Ok(s),
                        _ => Err(UnexpectedAddress),
                    }
                }
            }

            impl Register for $A {}

            impl AxisRegister for $A {
                const MOTOR1: Address = Address::$V1;
                const MOTOR2: Address = Address::$V2;
            }

            impl_rw! {$ac $A}
        )*
    };
}

// Register Implementations
// --------------------------------------------------------

impl_registers! {
    global {
        // General configuration registers.
        RW  0x00 GCONF,
        R   0x01 GSTAT,
        R   0x02 IFCNT,
        W   0x03 SLAVECONF,
        RWS 0x04 IO,
        W   0x05 X_COMPARE,

        // Microstep table, shared by both drivers.
        WP  0x60 MSLUT0,
        WP  0x61 MSLUT1,
        WP  0x62 MSLUT2,
        WP  0x63 MSLUT3,
        WP  0x64 MSLUT4,
        WP  0x65 MSLUT5,
        WP  0x66 MSLUT6,
        WP  0x67 MSLUT7,
        WP  0x68 MSLUTSEL,
        WP  0x69 MSLUTSTART,
    }
    axis {
        // StealthChop voltage PWM mode.
        W   PWMCONF    [0x10 PWMCONF1, 0x18 PWMCONF2],
        R   PWM_STATUS [0x11 PWM_STATUS1, 0x19 PWM_STATUS2],

        // Ramp generator motion control registers.
        RW  RAMPMODE   [0x20 RAMPMODE1, 0x40 RAMPMODE2],
        RW  XACTUAL    [0x21 XACTUAL1, 0x41 XACTUAL2],
        R   VACTUAL    [0x22 VACTUAL1, 0x42 VACTUAL2],
        W   VSTART     [0x23 VSTART1, 0x43 VSTART2],
        W   A1         [0x24 A11, 0x44 A12],
        W   V1         [0x25 V11, 0x45 V12],
        W   AMAX       [0x26 AMAX1, 0x46 AMAX2],
        W   VMAX       [0x27 VMAX1, 0x47 VMAX2],
        W   DMAX       [0x28 DMAX1, 0x48 DMAX2],
        W   D1         [0x2A D11, 0x4A D12],
        W   VSTOP      [0x2B VSTOP1, 0x4B VSTOP2],
        W   TZEROWAIT  [0x2C TZEROWAIT1, 0x4C TZEROWAIT2],
        RW  XTARGET    [0x2D XTARGET1, 0x4D XTARGET2],

        // Ramp generator driver feature control registers.
        W   IHOLD_IRUN [0x30 IHOLD_IRUN1, 0x50 IHOLD_IRUN2],
        W   VCOOLTHRS  [0x31 VCOOLTHRS1, 0x51 VCOOLTHRS2],
        W   VHIGH      [0x32 VHIGH1, 0x52 VHIGH2],
        W   VDCMIN     [0x33 VDCMIN1, 0x53 VDCMIN2],
        RW  SW_MODE    [0x34 SW_MODE1, 0x54 SW_MODE2],
        R   RAMP_STAT  [0x35 RAMP_STAT1, 0x55 RAMP_STAT2],
        R   XLATCH     [0x36 XLATCH1, 0x56 XLATCH2],

        // Encoder registers.
        RW  ENCMODE    [0x38 ENCMODE1, 0x58 ENCMODE2],
        RW  X_ENC      [0x39 X_ENC1, 0x59 X_ENC2],
        W   ENC_CONST  [0x3A ENC_CONST1, 0x5A ENC_CONST2],
        R   ENC_STATUS [0x3B ENC_STATUS1, 0x5B ENC_STATUS2],
        R   ENC_LATCH  [0x3C ENC_LATCH1, 0x5C ENC_LATCH2],

        // Motor driver registers.
        R   MSCNT      [0x6A MSCNT1, 0x7A MSCNT2],
        R   MSCURACT   [0x6B MSCURACT1, 0x7B MSCURACT2],
        RW  CHOPCONF   [0x6C CHOPCONF1, 0x7C CHOPCONF2],
        W   COOLCONF   [0x6D COOLCONF1, 0x7D COOLCONF2],
        W   DCCTRL     [0x6E DCCTRL1, 0x7E DCCTRL2],
        R   DRV_STATUS [0x6F DRV_STATUS1, 0x7F DRV_STATUS2],
    }
}

// Sanity Checks
// --------------------------------------------------------

#[test]
fn test_access_map_covers_every_address() {
    for addr in 0x00..=0x7Fu8 {
        let class = Access::of(addr);
        match Address::try_from(addr) {
            // Every documented address carries the class from the table.
            Ok(reg) => assert_eq!(reg.access(), class, "addr {:#04x}", addr),
            // Every undocumented address is reserved.
            Err(UnknownAddress) => assert_eq!(class, Access::None, "addr {:#04x}", addr),
        }
    }
}

#[test]
fn test_access_spot_values() {
    assert_eq!(Access::of(0x00), Access::ReadWrite);
    assert_eq!(Access::of(0x01), Access::Read);
    assert_eq!(Access::of(0x04), Access::ReadWriteSplit);
    assert_eq!(Access::of(0x29), Access::None);
    assert_eq!(Access::of(0x35), Access::Read);
    assert_eq!(Access::of(0x60), Access::WritePreset);
    assert_eq!(Access::of(0x6A), Access::Read);
    assert_eq!(Access::of(0x7F), Access::Read);
}

#[test]
fn test_access_strips_direction_flag() {
    // A write-transaction address byte reports the same class as the bare
    // register address.
    assert_eq!(Access::of(0x80), Access::of(0x00));
    assert_eq!(Access::of(0xA7), Access::of(0x27));
    assert_eq!(Access::of(0xFF), Access::of(0x7F));
}

#[test]
fn test_address_roundtrip() {
    for &addr in Address::ALL {
        assert_eq!(Address::try_from(addr as u8), Ok(addr));
    }
    assert_eq!(Address::try_from(0x06), Err(UnknownAddress));
    assert_eq!(Address::try_from(0x70), Err(UnknownAddress));
}

#[test]
fn test_axis_banks_mirror() {
    // Ramp generator and feature control banks sit 0x20 apart, the motor
    // driver bank 0x10.
    assert_eq!(XACTUAL::MOTOR1 as u8 + 0x20, XACTUAL::MOTOR2 as u8);
    assert_eq!(IHOLD_IRUN::MOTOR1 as u8 + 0x20, IHOLD_IRUN::MOTOR2 as u8);
    assert_eq!(ENCMODE::MOTOR1 as u8 + 0x20, ENCMODE::MOTOR2 as u8);
    assert_eq!(CHOPCONF::MOTOR1 as u8 + 0x10, CHOPCONF::MOTOR2 as u8);
    assert_eq!(PWMCONF::MOTOR1 as u8 + 0x08, PWMCONF::MOTOR2 as u8);

    assert_eq!(VMAX::address(Motor::One), Address::VMAX1);
    assert_eq!(VMAX::address(Motor::Two), Address::VMAX2);
    assert_eq!(VMAX::MOTOR1.access(), VMAX::MOTOR2.access());
}

#[test]
fn test_register_trait_addresses() {
    assert_eq!(GCONF::ADDRESS, Address::GCONF);
    assert_eq!(MSLUTSTART::ADDRESS, Address::MSLUTSTART);
}

#[test]
fn test_access_semantics() {
    assert!(Access::ReadWriteSplit.readable() && Access::ReadWriteSplit.writable());
    assert!(Access::WritePreset.writable() && !Access::WritePreset.readable());
    assert!(Access::WritePreset.preset_at_reset());
    assert!(Access::ReadClear.clears_on_read());
    assert!(!Access::None.readable() && !Access::None.writable());
    assert!(Address::VACTUAL1.readable() && !Address::VACTUAL1.writable());
    assert!(Address::VSTOP2.writable() && !Address::VSTOP2.readable());
}

#[test]
fn test_transaction_bytes() {
    assert_eq!(Address::VMAX1.read_byte(), 0x27);
    assert_eq!(Address::VMAX1.write_byte(), 0xA7);
    assert_eq!(Address::GCONF.write_byte(), 0x80);
}

#[test]
fn test_ihold_irun() {
    let mut r = IHOLD_IRUN(0);
    r.set_ihold(8);
    r.set_irun(31);
    r.set_ihold_delay(1);
    assert_eq!(r.0, 0x00011F08);
}

#[test]
fn test_sw_mode() {
    let mut s = SW_MODE(0);
    s.set_stop_l_enable(true);
    s.set_sg_stop(true);
    s.set_en_softstop(true);
    assert_eq!(s.0, 0b1100_0000_0001);
}

#[test]
fn test_rampmode_values() {
    assert_eq!(RAMPMODE::POSITION.get(), 0);
    assert_eq!(RAMPMODE::VELOCITY_POS.get(), 1);
    assert_eq!(RAMPMODE::VELOCITY_NEG.get(), 2);
    assert_eq!(RAMPMODE::HOLD.get(), 3);
}

#[test]
fn test_signed_register_values() {
    let x = XACTUAL(0xFFFF_FFFF);
    assert_eq!(x.get(), -1);

    // VACTUAL is a 24 bit two's complement value.
    let v = VACTUAL::from(0x00FF_FFFF);
    assert_eq!(v.get(), -1);
    let v = VACTUAL::from(0x0000_0001);
    assert_eq!(v.get(), 1);
}

#[test]
fn test_drv_status_unpack() {
    let s = DRV_STATUS::from(0x8100_0123);
    assert!(s.stst());
    assert!(s.stallguard());
    assert_eq!(s.sg_result(), 0x123);
    assert!(!s.ot());
}

#[test]
fn test_state_roundtrip() {
    let state = State::from_addr_and_data(Address::XACTUAL2, 0xFFFF_FFFF);
    assert_eq!(state.addr(), Address::XACTUAL2);
    let x: &XACTUAL = state.reg().unwrap();
    assert_eq!(x.get(), -1);
    assert_eq!(state.reg::<GCONF>(), Err(UnexpectedAddress));

    let raw: u32 = state.into();
    assert_eq!(raw, 0xFFFF_FFFF);

    let cleared = State::from_addr_default(Address::GCONF);
    assert_eq!(u32::from(cleared), 0);
}
