//! True random number generator.

use crate::field::Register;
use crate::register::{Ro, Rw};

peripheral! {
    pub struct RegisterBlock: 0x0C {
        0x00 => pub cr: Rw<u32>,
        0x04 => pub sr: Rw<u32>,
        /// Valid only while `SR.DRDY` is set.
        0x08 => pub dr: Ro<u32>,
    }
}

fields! {
    cr: u32 {
        RNGEN: 2,
        IE: 3,
        /// Clock error detection disable.
        CED: 5,
    }

    sr: u32 {
        DRDY: 0,
        CECS: 1,
        SECS: 2,
        CEIS: 5,
        SEIS: 6,
    }

    dr: u32 {
        RNDATA: 0..=31,
    }
}

pub const REGISTERS: &[Register] = &[cr::REGISTER, sr::REGISTER, dr::REGISTER];
