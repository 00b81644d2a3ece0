//! Touch sensing controller.
//!
//! The I/O control registers share one layout: bit `4 * (g - 1) + (i - 1)` is I/O `i` of
//! group `g`, for groups 1 to 7 and I/Os 1 to 4.

use crate::field::Register;
use crate::register::{Ro, Rw};

/// Number of analog I/O groups.
pub const GROUPS: usize = 7;

peripheral! {
    pub struct RegisterBlock: 0x50 {
        0x00 => pub cr: Rw<u32>,
        0x04 => pub ier: Rw<u32>,
        0x08 => pub icr: Rw<u32>,
        0x0C => pub isr: Ro<u32>,
        /// Hysteresis control.
        0x10 => pub iohcr: Rw<u32>,
        0x14 => _reserved0: u32,
        /// Analog switch control.
        0x18 => pub ioascr: Rw<u32>,
        0x1C => _reserved1: u32,
        /// Sampling capacitor selection.
        0x20 => pub ioscr: Rw<u32>,
        0x24 => _reserved2: u32,
        /// Channel selection.
        0x28 => pub ioccr: Rw<u32>,
        0x2C => _reserved3: u32,
        0x30 => pub iogcsr: Rw<u32>,
        /// Acquisition counters of groups 1 to 7.
        0x34 => pub iogxcr: [Ro<u32>; GROUPS],
    }
}

// The four group/I/O registers differ only in name.
macro_rules! io_registers {
    ($($reg:ident),*) => {
        fields! {$(
            $reg: u32 {
                G1_IO1: 0, G1_IO2: 1, G1_IO3: 2, G1_IO4: 3,
                G2_IO1: 4, G2_IO2: 5, G2_IO3: 6, G2_IO4: 7,
                G3_IO1: 8, G3_IO2: 9, G3_IO3: 10, G3_IO4: 11,
                G4_IO1: 12, G4_IO2: 13, G4_IO3: 14, G4_IO4: 15,
                G5_IO1: 16, G5_IO2: 17, G5_IO3: 18, G5_IO4: 19,
                G6_IO1: 20, G6_IO2: 21, G6_IO3: 22, G6_IO4: 23,
                G7_IO1: 24, G7_IO2: 25, G7_IO3: 26, G7_IO4: 27,
            }
        )*}
    };
}

io_registers!(iohcr, ioascr, ioscr, ioccr);

fields! {
    cr: u32 {
        TSCE: 0,
        START: 1,
        /// Acquisition mode: 0 normal, 1 synchronized on the SYNC input.
        AM: 2,
        SYNCPOL: 3,
        IODEF: 4,
        /// Max count value.
        MCV: 5..=7 {
            COUNT_255 = 0,
            COUNT_511 = 1,
            COUNT_1023 = 2,
            COUNT_2047 = 3,
            COUNT_4095 = 4,
            COUNT_8191 = 5,
            COUNT_16383 = 6,
        },
        PGPSC: 12..=14,
        SSPSC: 15,
        SSE: 16,
        SSD: 17..=23,
        CTPL: 24..=27,
        CTPH: 28..=31,
    }

    ier: u32 {
        EOAIE: 0,
        MCEIE: 1,
    }

    icr: u32 {
        EOAIC: 0,
        MCEIC: 1,
    }

    isr: u32 {
        EOAF: 0,
        MCEF: 1,
    }

    /// Group enables and acquisition status.
    iogcsr: u32 {
        G1E: 0,
        G2E: 1,
        G3E: 2,
        G4E: 3,
        G5E: 4,
        G6E: 5,
        G7E: 6,
        G1S: 16,
        G2S: 17,
        G3S: 18,
        G4S: 19,
        G5S: 20,
        G6S: 21,
        G7S: 22,
    }

    iogxcr: u32 {
        CNT: 0..=13,
    }
}

pub const REGISTERS: &[Register] = &[
    cr::REGISTER,
    ier::REGISTER,
    icr::REGISTER,
    isr::REGISTER,
    iohcr::REGISTER,
    ioascr::REGISTER,
    ioscr::REGISTER,
    ioccr::REGISTER,
    iogcsr::REGISTER,
    iogxcr::REGISTER,
];
