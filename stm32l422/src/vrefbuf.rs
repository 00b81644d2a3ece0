//! Voltage reference buffer.

use crate::field::Register;
use crate::register::Rw;

peripheral! {
    pub struct RegisterBlock: 0x08 {
        0x00 => pub csr: Rw<u32>,
        0x04 => pub ccr: Rw<u32>,
    }
}

fields! {
    csr: u32 {
        ENVR: 0,
        HIZ: 1,
        VRS: 2,
        /// Set once the output is within its final range.
        VRR: 3,
    }

    ccr: u32 {
        TRIM: 0..=5,
    }
}

/// `VRS` value for a 2.048 V reference.
pub const VRS_2V048: u32 = 0;
/// `VRS` value for a 2.5 V reference.
pub const VRS_2V5: u32 = 1;

pub const REGISTERS: &[Register] = &[csr::REGISTER, ccr::REGISTER];
