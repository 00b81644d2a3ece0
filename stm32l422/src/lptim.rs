//! Low-power timers (LPTIM1, LPTIM2).

use crate::field::Register;
use crate::register::{Ro, Rw, Wo};

peripheral! {
    pub struct RegisterBlock: 0x24 {
        0x00 => pub isr: Ro<u32>,
        0x04 => pub icr: Wo<u32>,
        /// Writable only while `CR.ENABLE` is clear.
        0x08 => pub ier: Rw<u32>,
        /// Writable only while `CR.ENABLE` is clear.
        0x0C => pub cfgr: Rw<u32>,
        0x10 => pub cr: Rw<u32>,
        0x14 => pub cmp: Rw<u32>,
        0x18 => pub arr: Rw<u32>,
        0x1C => pub cnt: Ro<u32>,
        0x20 => pub or: Rw<u32>,
    }
}

fields! {
    isr: u32 {
        CMPM: 0,
        ARRM: 1,
        EXTTRIG: 2,
        CMPOK: 3,
        ARROK: 4,
        UP: 5,
        DOWN: 6,
    }

    icr: u32 {
        CMPMCF: 0,
        ARRMCF: 1,
        EXTTRIGCF: 2,
        CMPOKCF: 3,
        ARROKCF: 4,
        UPCF: 5,
        DOWNCF: 6,
    }

    ier: u32 {
        CMPMIE: 0,
        ARRMIE: 1,
        EXTTRIGIE: 2,
        CMPOKIE: 3,
        ARROKIE: 4,
        UPIE: 5,
        DOWNIE: 6,
    }

    cfgr: u32 {
        CKSEL: 0,
        CKPOL: 1..=2,
        CKFLT: 3..=4,
        TRGFLT: 6..=7,
        PRESC: 9..=11 {
            DIV1 = 0,
            DIV2 = 1,
            DIV4 = 2,
            DIV8 = 3,
            DIV16 = 4,
            DIV32 = 5,
            DIV64 = 6,
            DIV128 = 7,
        },
        TRIGSEL: 13..=15,
        TRIGEN: 17..=18 {
            SOFTWARE = 0,
            RISING = 1,
            FALLING = 2,
            BOTH = 3,
        },
        TIMOUT: 19,
        WAVE: 20,
        WAVPOL: 21,
        PRELOAD: 22,
        COUNTMODE: 23,
        ENC: 24,
    }

    cr: u32 {
        ENABLE: 0,
        SNGSTRT: 1,
        CNTSTRT: 2,
        COUNTRST: 3,
        RSTARE: 4,
    }

    cmp: u32 {
        CMP: 0..=15,
    }

    arr: u32 {
        ARR: 0..=15,
    }

    cnt: u32 {
        CNT: 0..=15,
    }

    /// Input remapping.
    or: u32 {
        OR_0: 0,
        OR_1: 1,
    }
}

pub const REGISTERS: &[Register] = &[
    isr::REGISTER,
    icr::REGISTER,
    ier::REGISTER,
    cfgr::REGISTER,
    cr::REGISTER,
    cmp::REGISTER,
    arr::REGISTER,
    cnt::REGISTER,
    or::REGISTER,
];
