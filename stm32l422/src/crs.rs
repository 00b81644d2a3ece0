//! Clock recovery system for the HSI48 oscillator.

use crate::field::Register;
use crate::register::{Ro, Rw};

peripheral! {
    pub struct RegisterBlock: 0x10 {
        0x00 => pub cr: Rw<u32>,
        0x04 => pub cfgr: Rw<u32>,
        0x08 => pub isr: Ro<u32>,
        0x0C => pub icr: Rw<u32>,
    }
}

fields! {
    cr: u32 {
        SYNCOKIE: 0,
        SYNCWARNIE: 1,
        ERRIE: 2,
        ESYNCIE: 3,
        CEN: 5,
        AUTOTRIMEN: 6,
        SWSYNC: 7,
        TRIM: 8..=13,
    }

    cfgr: u32 {
        RELOAD: 0..=15,
        FELIM: 16..=23,
        SYNCDIV: 24..=26 {
            DIV1 = 0,
            DIV2 = 1,
            DIV4 = 2,
            DIV8 = 3,
            DIV16 = 4,
            DIV32 = 5,
            DIV64 = 6,
            DIV128 = 7,
        },
        SYNCSRC: 28..=29 {
            GPIO = 0,
            LSE = 1,
            USB_SOF = 2,
        },
        SYNCPOL: 31,
    }

    isr: u32 {
        SYNCOKF: 0,
        SYNCWARNF: 1,
        ERRF: 2,
        ESYNCF: 3,
        SYNCERR: 8,
        SYNCMISS: 9,
        TRIMOVF: 10,
        /// Frequency error direction: 0 counting up, 1 counting down.
        FEDIR: 15,
        FECAP: 16..=31,
    }

    icr: u32 {
        SYNCOKC: 0,
        SYNCWARNC: 1,
        ERRC: 2,
        ESYNCC: 3,
    }
}

/// `RELOAD` for a 1 kHz USB SOF sync source and a 48 MHz target: `48_000_000 / 1_000 - 1`.
pub const RELOAD_USB_SOF: u32 = 47_999;
/// Reset value of `FELIM`.
pub const FELIM_DEFAULT: u32 = 0x22;

pub const REGISTERS: &[Register] = &[cr::REGISTER, cfgr::REGISTER, isr::REGISTER, icr::REGISTER];
