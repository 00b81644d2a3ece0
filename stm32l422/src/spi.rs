//! Serial peripheral interfaces (SPI1, SPI2).

use crate::field::Register;
use crate::register::{Ro, Rw};

peripheral! {
    pub struct RegisterBlock: 0x1C {
        0x00 => pub cr1: Rw<u32>,
        0x04 => pub cr2: Rw<u32>,
        0x08 => pub sr: Rw<u32>,
        /// Byte access through [`Rw::as_ptr`] packs two frames of up to 8 bits.
        0x0C => pub dr: Rw<u32>,
        0x10 => pub crcpr: Rw<u32>,
        0x14 => pub rxcrcr: Ro<u32>,
        0x18 => pub txcrcr: Ro<u32>,
    }
}

fields! {
    cr1: u32 {
        CPHA: 0,
        CPOL: 1,
        MSTR: 2,
        BR: 3..=5 {
            DIV2 = 0,
            DIV4 = 1,
            DIV8 = 2,
            DIV16 = 3,
            DIV32 = 4,
            DIV64 = 5,
            DIV128 = 6,
            DIV256 = 7,
        },
        SPE: 6,
        LSBFIRST: 7,
        SSI: 8,
        SSM: 9,
        RXONLY: 10,
        CRCL: 11,
        CRCNEXT: 12,
        CRCEN: 13,
        BIDIOE: 14,
        BIDIMODE: 15,
    }

    cr2: u32 {
        RXDMAEN: 0,
        TXDMAEN: 1,
        SSOE: 2,
        NSSP: 3,
        /// TI frame format.
        FRF: 4,
        ERRIE: 5,
        RXNEIE: 6,
        TXEIE: 7,
        /// Data size minus one. Values below 3 select 8 bits.
        DS: 8..=11 {
            BITS_4 = 3,
            BITS_5 = 4,
            BITS_6 = 5,
            BITS_7 = 6,
            BITS_8 = 7,
            BITS_9 = 8,
            BITS_10 = 9,
            BITS_11 = 10,
            BITS_12 = 11,
            BITS_13 = 12,
            BITS_14 = 13,
            BITS_15 = 14,
            BITS_16 = 15,
        },
        FRXTH: 12,
        LDMA_RX: 13,
        LDMA_TX: 14,
    }

    /// Status. Only `CRCERR` is writable, by writing 0.
    sr: u32 {
        RXNE: 0,
        TXE: 1,
        CRCERR: 4,
        MODF: 5,
        OVR: 6,
        BSY: 7,
        FRE: 8,
        FRLVL: 9..=10 {
            EMPTY = 0,
            QUARTER = 1,
            HALF = 2,
            FULL = 3,
        },
        FTLVL: 11..=12 {
            EMPTY = 0,
            QUARTER = 1,
            HALF = 2,
            FULL = 3,
        },
    }

    dr: u32 {
        DR: 0..=15,
    }

    crcpr: u32 {
        CRCPOLY: 0..=15,
    }

    rxcrcr: u32 {
        RXCRC: 0..=15,
    }

    txcrcr: u32 {
        TXCRC: 0..=15,
    }
}

pub const REGISTERS: &[Register] = &[
    cr1::REGISTER,
    cr2::REGISTER,
    sr::REGISTER,
    dr::REGISTER,
    crcpr::REGISTER,
    rxcrcr::REGISTER,
    txcrcr::REGISTER,
];
