//! Embedded flash memory interface.

use crate::field::Register;
use crate::register::{Rw, Wo};

peripheral! {
    pub struct RegisterBlock: 0x34 {
        0x00 => pub acr: Rw<u32>,
        /// Power-down key, see [`PDKEY1`].
        0x04 => pub pdkeyr: Wo<u32>,
        /// Unlock key for `CR`, see [`KEY1`].
        0x08 => pub keyr: Wo<u32>,
        /// Unlock key for the option bytes, see [`OPTKEY1`].
        0x0C => pub optkeyr: Wo<u32>,
        0x10 => pub sr: Rw<u32>,
        0x14 => pub cr: Rw<u32>,
        0x18 => pub eccr: Rw<u32>,
        0x1C => _reserved0: u32,
        0x20 => pub optr: Rw<u32>,
        0x24 => pub pcrop1sr: Rw<u32>,
        0x28 => pub pcrop1er: Rw<u32>,
        0x2C => pub wrp1ar: Rw<u32>,
        0x30 => pub wrp1br: Rw<u32>,
    }
}

/// First word of the `CR` unlock sequence.
pub const KEY1: u32 = 0x4567_0123;
pub const KEY2: u32 = 0xCDEF_89AB;
/// First word of the option byte unlock sequence, written after `CR` is unlocked.
pub const OPTKEY1: u32 = 0x0819_2A3B;
pub const OPTKEY2: u32 = 0x4C5D_6E7F;
/// First word of the sequence clearing `ACR.RUN_PD`.
pub const PDKEY1: u32 = 0x0415_2637;
pub const PDKEY2: u32 = 0xFAFB_FCFD;

/// Size of an erasable page.
pub const PAGE_SIZE: usize = 2048;

fields! {
    acr: u32 {
        /// Wait states.
        LATENCY: 0..=2 {
            WS0 = 0,
            WS1 = 1,
            WS2 = 2,
            WS3 = 3,
            WS4 = 4,
        },
        PRFTEN: 8,
        ICEN: 9,
        DCEN: 10,
        ICRST: 11,
        DCRST: 12,
        RUN_PD: 13,
        SLEEP_PD: 14,
    }

    pdkeyr: u32 {
        PDKEYR: 0..=31,
    }

    keyr: u32 {
        KEYR: 0..=31,
    }

    optkeyr: u32 {
        OPTKEYR: 0..=31,
    }

    /// Status. Error flags are cleared by writing 1.
    sr: u32 {
        EOP: 0,
        OPERR: 1,
        PROGERR: 3,
        WRPERR: 4,
        PGAERR: 5,
        SIZERR: 6,
        PGSERR: 7,
        MISERR: 8,
        FASTERR: 9,
        RDERR: 14,
        OPTVERR: 15,
        BSY: 16,
        PEMPTY: 17,
    }

    cr: u32 {
        PG: 0,
        PER: 1,
        MER1: 2,
        /// Page number for `PER`.
        PNB: 3..=10,
        STRT: 16,
        OPTSTRT: 17,
        FSTPG: 18,
        EOPIE: 24,
        ERRIE: 25,
        RDERRIE: 26,
        OBL_LAUNCH: 27,
        OPTLOCK: 30,
        LOCK: 31,
    }

    eccr: u32 {
        ADDR_ECC: 0..=18,
        SYSF_ECC: 20,
        ECCIE: 24,
        ECCC: 30,
        ECCD: 31,
    }

    /// Option bytes, as loaded at reset.
    optr: u32 {
        RDP: 0..=7 {
            LEVEL_0 = 0xAA,
            /// Level 2 is permanent.
            LEVEL_2 = 0xCC,
        },
        BOR_LEV: 8..=10,
        nRST_STOP: 12,
        nRST_STDBY: 13,
        nRST_SHDW: 14,
        IWDG_SW: 16,
        IWDG_STOP: 17,
        IWDG_STDBY: 18,
        WWDG_SW: 19,
        nBOOT1: 23,
        SRAM2_PE: 24,
        SRAM2_RST: 25,
        nSWBOOT0: 26,
        nBOOT0: 27,
    }

    pcrop1sr: u32 {
        PCROP1_STRT: 0..=15,
    }

    pcrop1er: u32 {
        PCROP1_END: 0..=15,
        PCROP_RDP: 31,
    }

    wrp1ar: u32 {
        WRP1A_STRT: 0..=7,
        WRP1A_END: 16..=23,
    }

    wrp1br: u32 {
        WRP1B_STRT: 0..=7,
        WRP1B_END: 16..=23,
    }
}

pub const REGISTERS: &[Register] = &[
    acr::REGISTER,
    pdkeyr::REGISTER,
    keyr::REGISTER,
    optkeyr::REGISTER,
    sr::REGISTER,
    cr::REGISTER,
    eccr::REGISTER,
    optr::REGISTER,
    pcrop1sr::REGISTER,
    pcrop1er::REGISTER,
    wrp1ar::REGISTER,
    wrp1br::REGISTER,
];
