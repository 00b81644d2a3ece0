//! Quad-SPI flash interface.

use crate::field::Register;
use crate::register::{Ro, Rw, Wo};

peripheral! {
    pub struct RegisterBlock: 0x34 {
        0x00 => pub cr: Rw<u32>,
        0x04 => pub dcr: Rw<u32>,
        0x08 => pub sr: Ro<u32>,
        0x0C => pub fcr: Wo<u32>,
        0x10 => pub dlr: Rw<u32>,
        /// Writing the instruction starts the transfer in indirect mode.
        0x14 => pub ccr: Rw<u32>,
        0x18 => pub ar: Rw<u32>,
        0x1C => pub abr: Rw<u32>,
        0x20 => pub dr: Rw<u32>,
        0x24 => pub psmkr: Rw<u32>,
        0x28 => pub psmar: Rw<u32>,
        0x2C => pub pir: Rw<u32>,
        0x30 => pub lptr: Rw<u32>,
    }
}

fields! {
    cr: u32 {
        EN: 0,
        ABORT: 1,
        DMAEN: 2,
        TCEN: 3,
        SSHIFT: 4,
        FTHRES: 8..=11,
        TEIE: 16,
        TCIE: 17,
        FTIE: 18,
        SMIE: 19,
        TOIE: 20,
        /// Automatic poll mode stop.
        APMS: 22,
        /// Polling match mode: 0 AND, 1 OR.
        PMM: 23,
        PRESCALER: 24..=31,
    }

    dcr: u32 {
        CKMODE: 0,
        CSHT: 8..=10,
        /// Flash size is `2^(FSIZE + 1)` bytes.
        FSIZE: 16..=20,
    }

    sr: u32 {
        TEF: 0,
        TCF: 1,
        FTF: 2,
        SMF: 3,
        TOF: 4,
        BUSY: 5,
        FLEVEL: 8..=12,
    }

    fcr: u32 {
        CTEF: 0,
        CTCF: 1,
        CSMF: 3,
        CTOF: 4,
    }

    /// Number of bytes to transfer, minus one.
    dlr: u32 {
        DL: 0..=31,
    }

    ccr: u32 {
        INSTRUCTION: 0..=7,
        IMODE: 8..=9 {
            NONE = 0,
            SINGLE = 1,
            DUAL = 2,
            QUAD = 3,
        },
        ADMODE: 10..=11 {
            NONE = 0,
            SINGLE = 1,
            DUAL = 2,
            QUAD = 3,
        },
        ADSIZE: 12..=13 {
            BITS_8 = 0,
            BITS_16 = 1,
            BITS_24 = 2,
            BITS_32 = 3,
        },
        ABMODE: 14..=15 {
            NONE = 0,
            SINGLE = 1,
            DUAL = 2,
            QUAD = 3,
        },
        ABSIZE: 16..=17 {
            BITS_8 = 0,
            BITS_16 = 1,
            BITS_24 = 2,
            BITS_32 = 3,
        },
        DCYC: 18..=22,
        DMODE: 24..=25 {
            NONE = 0,
            SINGLE = 1,
            DUAL = 2,
            QUAD = 3,
        },
        FMODE: 26..=27 {
            INDIRECT_WRITE = 0,
            INDIRECT_READ = 1,
            AUTO_POLLING = 2,
            MEMORY_MAPPED = 3,
        },
        SIOO: 28,
        DHHC: 30,
        DDRM: 31,
    }

    ar: u32 {
        ADDRESS: 0..=31,
    }

    abr: u32 {
        ALTERNATE: 0..=31,
    }

    dr: u32 {
        DATA: 0..=31,
    }

    psmkr: u32 {
        MASK: 0..=31,
    }

    psmar: u32 {
        MATCH: 0..=31,
    }

    pir: u32 {
        INTERVAL: 0..=15,
    }

    lptr: u32 {
        TIMEOUT: 0..=15,
    }
}

pub const REGISTERS: &[Register] = &[
    cr::REGISTER,
    dcr::REGISTER,
    sr::REGISTER,
    fcr::REGISTER,
    dlr::REGISTER,
    ccr::REGISTER,
    ar::REGISTER,
    abr::REGISTER,
    dr::REGISTER,
    psmkr::REGISTER,
    psmar::REGISTER,
    pir::REGISTER,
    lptr::REGISTER,
];
