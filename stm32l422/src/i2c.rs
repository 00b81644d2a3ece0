//! Inter-integrated circuit interfaces (I2C1-3).

use crate::field::Register;
use crate::register::{Ro, Rw};

peripheral! {
    pub struct RegisterBlock: 0x2C {
        0x00 => pub cr1: Rw<u32>,
        0x04 => pub cr2: Rw<u32>,
        0x08 => pub oar1: Rw<u32>,
        0x0C => pub oar2: Rw<u32>,
        /// Writable only while `CR1.PE` is clear.
        0x10 => pub timingr: Rw<u32>,
        0x14 => pub timeoutr: Rw<u32>,
        0x18 => pub isr: Rw<u32>,
        0x1C => pub icr: Rw<u32>,
        0x20 => pub pecr: Ro<u32>,
        0x24 => pub rxdr: Ro<u32>,
        0x28 => pub txdr: Rw<u32>,
    }
}

fields! {
    cr1: u32 {
        PE: 0,
        TXIE: 1,
        RXIE: 2,
        ADDRIE: 3,
        NACKIE: 4,
        STOPIE: 5,
        TCIE: 6,
        ERRIE: 7,
        /// Digital noise filter length, in I2C kernel clock periods.
        DNF: 8..=11,
        ANFOFF: 12,
        TXDMAEN: 14,
        RXDMAEN: 15,
        SBC: 16,
        NOSTRETCH: 17,
        WUPEN: 18,
        GCEN: 19,
        SMBHEN: 20,
        SMBDEN: 21,
        ALERTEN: 22,
        PECEN: 23,
    }

    cr2: u32 {
        /// Target address. A 7-bit address sits in bits 1-7.
        SADD: 0..=9,
        RD_WRN: 10,
        ADD10: 11,
        HEAD10R: 12,
        START: 13,
        STOP: 14,
        NACK: 15,
        NBYTES: 16..=23,
        RELOAD: 24,
        AUTOEND: 25,
        PECBYTE: 26,
    }

    oar1: u32 {
        OA1: 0..=9,
        OA1MODE: 10,
        OA1EN: 15,
    }

    oar2: u32 {
        OA2: 1..=7,
        OA2MSK: 8..=10 {
            NOMASK = 0,
            MASK01 = 1,
            MASK02 = 2,
            MASK03 = 3,
            MASK04 = 4,
            MASK05 = 5,
            MASK06 = 6,
            MASK07 = 7,
        },
        OA2EN: 15,
    }

    timingr: u32 {
        SCLL: 0..=7,
        SCLH: 8..=15,
        SDADEL: 16..=19,
        SCLDEL: 20..=23,
        PRESC: 28..=31,
    }

    timeoutr: u32 {
        TIMEOUTA: 0..=11,
        TIDLE: 12,
        TIMOUTEN: 15,
        TIMEOUTB: 16..=27,
        TEXTEN: 31,
    }

    /// Interrupt and status. Only `TXE` and `TXIS` are writable.
    isr: u32 {
        TXE: 0,
        TXIS: 1,
        RXNE: 2,
        ADDR: 3,
        NACKF: 4,
        STOPF: 5,
        TC: 6,
        TCR: 7,
        BERR: 8,
        ARLO: 9,
        OVR: 10,
        PECERR: 11,
        TIMEOUT: 12,
        ALERT: 13,
        BUSY: 15,
        DIR: 16,
        ADDCODE: 17..=23,
    }

    icr: u32 {
        ADDRCF: 3,
        NACKCF: 4,
        STOPCF: 5,
        BERRCF: 8,
        ARLOCF: 9,
        OVRCF: 10,
        PECCF: 11,
        TIMOUTCF: 12,
        ALERTCF: 13,
    }

    pecr: u32 {
        PEC: 0..=7,
    }

    rxdr: u32 {
        RXDATA: 0..=7,
    }

    txdr: u32 {
        TXDATA: 0..=7,
    }
}

pub const REGISTERS: &[Register] = &[
    cr1::REGISTER,
    cr2::REGISTER,
    oar1::REGISTER,
    oar2::REGISTER,
    timingr::REGISTER,
    timeoutr::REGISTER,
    isr::REGISTER,
    icr::REGISTER,
    pecr::REGISTER,
    rxdr::REGISTER,
    txdr::REGISTER,
];
