//! AES hardware accelerator.

use crate::field::Register;
use crate::register::{Ro, Rw};

peripheral! {
    pub struct RegisterBlock: 0x60 {
        0x00 => pub cr: Rw<u32>,
        0x04 => pub sr: Ro<u32>,
        0x08 => pub dinr: Rw<u32>,
        0x0C => pub doutr: Ro<u32>,
        /// Key bits 0-127, least significant word first.
        0x10 => pub keyr: [Rw<u32>; 4],
        /// Initialization vector, least significant word first.
        0x20 => pub ivr: [Rw<u32>; 4],
        /// Key bits 128-255, used with 256-bit keys.
        0x30 => pub keyr_high: [Rw<u32>; 4],
        /// Context save area for suspended GCM and CCM operations.
        0x40 => pub susp: [Rw<u32>; 8],
    }
}

fields! {
    cr: u32 {
        EN: 0,
        DATATYPE: 1..=2 {
            NONE = 0,
            HALF_WORD = 1,
            BYTE = 2,
            BIT = 3,
        },
        MODE: 3..=4 {
            ENCRYPT = 0,
            KEY_DERIVATION = 1,
            DECRYPT = 2,
            KEY_DERIVATION_DECRYPT = 3,
        },
        /// Chaining mode, low bits. See [`CHMOD_2`].
        CHMOD: 5..=6 {
            ECB = 0,
            CBC = 1,
            CTR = 2,
            GCM_GMAC = 3,
        },
        CCFC: 7,
        ERRC: 8,
        CCFIE: 9,
        ERRIE: 10,
        DMAINEN: 11,
        DMAOUTEN: 12,
        GCMPH: 13..=14 {
            INIT = 0,
            HEADER = 1,
            PAYLOAD = 2,
            FINAL = 3,
        },
        /// Chaining mode, high bit. Set with `CHMOD = 0` for CCM.
        CHMOD_2: 16,
        /// 0: 128-bit key, 1: 256-bit key.
        KEYSIZE: 18,
    }

    sr: u32 {
        CCF: 0,
        RDERR: 1,
        WRERR: 2,
        BUSY: 3,
    }

    dinr: u32 {
        DIN: 0..=31,
    }

    doutr: u32 {
        DOUT: 0..=31,
    }

    keyr: u32 {
        KEY: 0..=31,
    }

    ivr: u32 {
        IV: 0..=31,
    }

    susp: u32 {
        SUSP: 0..=31,
    }
}

pub const REGISTERS: &[Register] = &[
    cr::REGISTER,
    sr::REGISTER,
    dinr::REGISTER,
    doutr::REGISTER,
    keyr::REGISTER,
    ivr::REGISTER,
    susp::REGISTER,
];
