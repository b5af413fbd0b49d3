//! Motion units and profile types for the mouse's TMC5072 driven wheels.
//!
//! The ramp generator of the TMC5072 works in microsteps and in fixed
//! point velocity/acceleration units derived from its internal clock. The
//! search and run layers of the mouse work in millimetres. This crate owns
//! the mechanical build parameters, the conversion constants between the
//! two worlds, and the profile value object a planned move is handed
//! around as.

#![no_std]

pub mod config;
pub mod profile;
pub mod units;
