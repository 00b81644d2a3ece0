//! Operational amplifier (OPAMP1).

use crate::field::Register;
use crate::register::Rw;

peripheral! {
    pub struct RegisterBlock: 0x0C {
        0x00 => pub csr: Rw<u32>,
        /// Offset trim for normal mode.
        0x04 => pub otr: Rw<u32>,
        /// Offset trim for low-power mode.
        0x08 => pub lpotr: Rw<u32>,
    }
}

fields! {
    csr: u32 {
        OPAEN: 0,
        OPALPM: 1,
        OPAMODE: 2..=3 {
            PGA_DISABLED = 0,
            PGA_DISABLED_ALT = 1,
            PGA_ENABLED = 2,
            FOLLOWER = 3,
        },
        PGA_GAIN: 4..=5 {
            X2 = 0,
            X4 = 1,
            X8 = 2,
            X16 = 3,
        },
        VM_SEL: 8..=9,
        VP_SEL: 10,
        CALON: 12,
        CALSEL: 13,
        USERTRIM: 14,
        CALOUT: 15,
        /// Set when VDDA is above 2.4 V. Common to all amplifiers.
        OPA_RANGE: 31,
    }

    otr: u32 {
        TRIMOFFSETN: 0..=4,
        TRIMOFFSETP: 8..=12,
    }

    lpotr: u32 {
        TRIMLPOFFSETN: 0..=4,
        TRIMLPOFFSETP: 8..=12,
    }
}

pub const REGISTERS: &[Register] = &[csr::REGISTER, otr::REGISTER, lpotr::REGISTER];
