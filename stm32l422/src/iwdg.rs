//! Independent watchdog.

use crate::field::Register;
use crate::register::{Ro, Rw, Wo};

peripheral! {
    pub struct RegisterBlock: 0x14 {
        0x00 => pub kr: Wo<u32>,
        0x04 => pub pr: Rw<u32>,
        0x08 => pub rlr: Rw<u32>,
        0x0C => pub sr: Ro<u32>,
        0x10 => pub winr: Rw<u32>,
    }
}

/// Reloads the counter.
pub const KEY_RELOAD: u32 = 0xAAAA;
/// Unlocks `PR`, `RLR` and `WINR`.
pub const KEY_WRITE_ACCESS: u32 = 0x5555;
pub const KEY_START: u32 = 0xCCCC;

fields! {
    kr: u32 {
        KEY: 0..=15,
    }

    pr: u32 {
        PR: 0..=2 {
            DIV4 = 0,
            DIV8 = 1,
            DIV16 = 2,
            DIV32 = 3,
            DIV64 = 4,
            DIV128 = 5,
            DIV256 = 6,
        },
    }

    rlr: u32 {
        RL: 0..=11,
    }

    /// Update flags; a register must not be written while its flag is set.
    sr: u32 {
        PVU: 0,
        RVU: 1,
        WVU: 2,
    }

    winr: u32 {
        WIN: 0..=11,
    }
}

pub const REGISTERS: &[Register] = &[
    kr::REGISTER,
    pr::REGISTER,
    rlr::REGISTER,
    sr::REGISTER,
    winr::REGISTER,
];
