//! Tamper detection and backup registers.

use crate::field::Register;
use crate::register::{Ro, Rw, Wo};

/// Number of backup registers.
pub const BKPR_COUNT: usize = 32;

peripheral! {
    pub struct RegisterBlock: 0x180 {
        0x00 => pub cr1: Rw<u32>,
        0x04 => pub cr2: Rw<u32>,
        0x08 => _reserved0: u32,
        0x0C => pub fltcr: Rw<u32>,
        0x10 => _reserved1: [u32; 7],
        0x2C => pub ier: Rw<u32>,
        0x30 => pub sr: Ro<u32>,
        0x34 => pub misr: Ro<u32>,
        0x38 => _reserved2: u32,
        0x3C => pub scr: Wo<u32>,
        0x40 => _reserved3: [u32; 48],
        /// Backup registers, erased on a tamper event.
        0x100 => pub bkpr: [Rw<u32>; BKPR_COUNT],
    }
}

fields! {
    cr1: u32 {
        TAMP1E: 0,
        TAMP2E: 1,
        TAMP3E: 2,
    }

    cr2: u32 {
        TAMP1NOERASE: 0,
        TAMP2NOERASE: 1,
        TAMP3NOERASE: 2,
        TAMP1MSK: 16,
        TAMP2MSK: 17,
        TAMP3MSK: 18,
        /// Active level: 0 rising edge or low level, 1 falling edge or high level.
        TAMP1TRG: 24,
        TAMP2TRG: 25,
        TAMP3TRG: 26,
    }

    fltcr: u32 {
        TAMPFREQ: 0..=2,
        TAMPFLT: 3..=4 {
            EDGE = 0,
            SAMPLES_2 = 1,
            SAMPLES_4 = 2,
            SAMPLES_8 = 3,
        },
        TAMPPRCH: 5..=6,
        TAMPPUDIS: 7,
    }

    ier: u32 {
        TAMP1IE: 0,
        TAMP2IE: 1,
        TAMP3IE: 2,
    }

    sr: u32 {
        TAMP1F: 0,
        TAMP2F: 1,
        TAMP3F: 2,
    }

    misr: u32 {
        TAMP1MF: 0,
        TAMP2MF: 1,
        TAMP3MF: 2,
    }

    scr: u32 {
        CTAMP1F: 0,
        CTAMP2F: 1,
        CTAMP3F: 2,
    }

    bkpr: u32 {
        BKP: 0..=31,
    }
}

pub const REGISTERS: &[Register] = &[
    cr1::REGISTER,
    cr2::REGISTER,
    fltcr::REGISTER,
    ier::REGISTER,
    sr::REGISTER,
    misr::REGISTER,
    scr::REGISTER,
    bkpr::REGISTER,
];
