//! CRC calculation unit.

use crate::field::Register;
use crate::register::Rw;

peripheral! {
    pub struct RegisterBlock: 0x18 {
        /// Data in on write, current CRC on read.
        0x00 => pub dr: Rw<u32>,
        /// Scratch byte, untouched by the CRC engine.
        0x04 => pub idr: Rw<u8>,
        0x05 => _reserved0: u8,
        0x06 => _reserved1: u16,
        0x08 => pub cr: Rw<u32>,
        0x0C => _reserved2: u32,
        0x10 => pub init: Rw<u32>,
        0x14 => pub pol: Rw<u32>,
    }
}

fields! {
    dr: u32 {
        DR: 0..=31,
    }

    idr: u8 {
        IDR: 0..=7,
    }

    cr: u32 {
        RESET: 0,
        POLYSIZE: 3..=4 {
            BITS_32 = 0,
            BITS_16 = 1,
            BITS_8 = 2,
            BITS_7 = 3,
        },
        REV_IN: 5..=6 {
            NONE = 0,
            BYTE = 1,
            HALF_WORD = 2,
            WORD = 3,
        },
        REV_OUT: 7,
    }

    init: u32 {
        INIT: 0..=31,
    }

    pol: u32 {
        POL: 0..=31,
    }
}

/// Reset value of `POL`: the CRC-32 (Ethernet) polynomial.
pub const DEFAULT_POLYNOMIAL: u32 = 0x04C1_1DB7;

pub const REGISTERS: &[Register] = &[
    dr::REGISTER,
    idr::REGISTER,
    cr::REGISTER,
    init::REGISTER,
    pol::REGISTER,
];
