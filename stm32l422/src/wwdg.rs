//! System window watchdog.

use crate::field::Register;
use crate::register::Rw;

peripheral! {
    pub struct RegisterBlock: 0x0C {
        0x00 => pub cr: Rw<u32>,
        0x04 => pub cfr: Rw<u32>,
        0x08 => pub sr: Rw<u32>,
    }
}

fields! {
    cr: u32 {
        /// Down counter. Reset fires when bit 6 clears.
        T: 0..=6,
        WDGA: 7,
    }

    cfr: u32 {
        /// Window value.
        W: 0..=6,
        WDGTB: 7..=8 {
            DIV1 = 0,
            DIV2 = 1,
            DIV4 = 2,
            DIV8 = 3,
        },
        EWI: 9,
    }

    /// Cleared by writing 0.
    sr: u32 {
        EWIF: 0,
    }
}

pub const REGISTERS: &[Register] = &[cr::REGISTER, cfr::REGISTER, sr::REGISTER];
