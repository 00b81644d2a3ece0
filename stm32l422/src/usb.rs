//! USB full-speed device.
//!
//! Registers are 16 bits wide on 32-bit boundaries. Buffer descriptors and packet data
//! live in the packet memory area at [`USB_PMAADDR`](crate::memory_map::USB_PMAADDR).

use crate::field::Register;
use crate::register::{Ro, Rw};

/// Size of the packet memory area in bytes.
pub const PMA_SIZE: usize = 1024;

peripheral! {
    pub struct Endpoint: 0x04 {
        /// `STAT_*` and `DTOG_*` toggle when written 1; `CTR_*` clear when written 0.
        0x00 => pub epr: Rw<u16>,
        0x02 => _reserved0: u16,
    }

    pub struct RegisterBlock: 0x5C {
        0x00 => pub ep: [Endpoint; 8],
        0x20 => _reserved0: [u32; 8],
        0x40 => pub cntr: Rw<u16>,
        0x42 => _reserved1: u16,
        0x44 => pub istr: Rw<u16>,
        0x46 => _reserved2: u16,
        0x48 => pub fnr: Ro<u16>,
        0x4A => _reserved3: u16,
        0x4C => pub daddr: Rw<u16>,
        0x4E => _reserved4: u16,
        /// Offset of the buffer descriptor table within the packet memory area.
        0x50 => pub btable: Rw<u16>,
        0x52 => _reserved5: u16,
        0x54 => pub lpmcsr: Rw<u16>,
        0x56 => _reserved6: u16,
        0x58 => pub bcdr: Rw<u16>,
        0x5A => _reserved7: u16,
    }
}

fields! {
    epr: u16 {
        EA: 0..=3,
        STAT_TX: 4..=5 {
            DISABLED = 0,
            STALL = 1,
            NAK = 2,
            VALID = 3,
        },
        DTOG_TX: 6,
        CTR_TX: 7,
        EP_KIND: 8,
        EP_TYPE: 9..=10 {
            BULK = 0,
            CONTROL = 1,
            ISOCHRONOUS = 2,
            INTERRUPT = 3,
        },
        SETUP: 11,
        STAT_RX: 12..=13 {
            DISABLED = 0,
            STALL = 1,
            NAK = 2,
            VALID = 3,
        },
        DTOG_RX: 14,
        CTR_RX: 15,
    }

    cntr: u16 {
        FRES: 0,
        PDWN: 1,
        LP_MODE: 2,
        FSUSP: 3,
        RESUME: 4,
        L1RESUME: 5,
        L1REQM: 7,
        ESOFM: 8,
        SOFM: 9,
        RESETM: 10,
        SUSPM: 11,
        WKUPM: 12,
        ERRM: 13,
        PMAOVRM: 14,
        CTRM: 15,
    }
    @legacy {
        LPMODE => LP_MODE,
    }

    /// Interrupt status. Flags other than `CTR` are cleared by writing 0.
    istr: u16 {
        EP_ID: 0..=3,
        DIR: 4,
        L1REQ: 7,
        ESOF: 8,
        SOF: 9,
        RESET: 10,
        SUSP: 11,
        WKUP: 12,
        ERR: 13,
        PMAOVR: 14,
        CTR: 15,
    }

    fnr: u16 {
        FN: 0..=10,
        LSOF: 11..=12,
        LCK: 13,
        RXDM: 14,
        RXDP: 15,
    }

    daddr: u16 {
        ADD: 0..=6,
        EF: 7,
    }

    btable: u16 {
        BTABLE: 3..=15,
    }

    lpmcsr: u16 {
        LPMEN: 0,
        LPMACK: 1,
        REMWAKE: 3,
        BESL: 4..=7,
    }

    /// Battery charging detection.
    bcdr: u16 {
        BCDEN: 0,
        DCDEN: 1,
        PDEN: 2,
        SDEN: 3,
        DCDET: 4,
        PDET: 5,
        SDET: 6,
        PS2DET: 7,
        /// D+ pull-up.
        DPPU: 15,
    }
}

/// Bits of `EPR` that toggle when written 1.
pub const EPR_TOGGLE_MASK: u32 =
    epr::STAT_TX.mask() | epr::DTOG_TX.mask() | epr::STAT_RX.mask() | epr::DTOG_RX.mask();

pub const REGISTERS: &[Register] = &[
    epr::REGISTER,
    cntr::REGISTER,
    istr::REGISTER,
    fnr::REGISTER,
    daddr::REGISTER,
    btable::REGISTER,
    lpmcsr::REGISTER,
    bcdr::REGISTER,
];
