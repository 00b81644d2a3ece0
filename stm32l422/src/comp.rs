//! Comparator (COMP1).

use crate::field::Register;
use crate::register::Rw;

peripheral! {
    pub struct RegisterBlock: 0x04 {
        /// Control and status. Read-only once `LOCK` is set, until the next reset.
        0x00 => pub csr: Rw<u32>,
    }
}

fields! {
    csr: u32 {
        EN: 0,
        PWRMODE: 2..=3 {
            HIGH_SPEED = 0,
            MEDIUM_SPEED = 1,
            ULTRA_LOW_POWER = 3,
        },
        /// Inverting input.
        INMSEL: 4..=6 {
            QUARTER_VREFINT = 0,
            HALF_VREFINT = 1,
            THREE_QUARTER_VREFINT = 2,
            VREFINT = 3,
            INM_PIN = 6,
            INM_EXT = 7,
        },
        INPSEL: 7..=8,
        POLARITY: 15,
        HYST: 16..=17 {
            NONE = 0,
            LOW = 1,
            MEDIUM = 2,
            HIGH = 3,
        },
        BLANKING: 18..=20,
        BRGEN: 22,
        SCALEN: 23,
        /// Pin used when `INMSEL` selects `INM_EXT`.
        INMESEL: 25..=26,
        VALUE: 30,
        LOCK: 31,
    }
}

pub const REGISTERS: &[Register] = &[csr::REGISTER];
