//! Power control.

use seq_macro::seq;

use crate::field::Register;
use crate::register::{Ro, Rw, Wo};

peripheral! {
    /// Pull-up and pull-down control of one GPIO port in Standby and Shutdown modes.
    pub struct PortPull: 0x08 {
        0x00 => pub pucr: Rw<u32>,
        0x04 => pub pdcr: Rw<u32>,
    }

    pub struct RegisterBlock: 0x60 {
        0x00 => pub cr1: Rw<u32>,
        0x04 => pub cr2: Rw<u32>,
        0x08 => pub cr3: Rw<u32>,
        0x0C => pub cr4: Rw<u32>,
        0x10 => pub sr1: Ro<u32>,
        0x14 => pub sr2: Ro<u32>,
        0x18 => pub scr: Wo<u32>,
        0x1C => _reserved0: u32,
        /// Ports A to E, in order. Port E has no pins on this device.
        0x20 => pub port: [PortPull; 5],
        0x48 => _reserved1: [u32; 4],
        0x58 => pub pucrh: Rw<u32>,
        0x5C => pub pdcrh: Rw<u32>,
    }
}

fields! {
    cr1: u32 {
        LPMS: 0..=2 {
            STOP0 = 0,
            STOP1 = 1,
            STOP2 = 2,
            STANDBY = 3,
            SHUTDOWN = 4,
        },
        /// Backup domain write access.
        DBP: 8,
        VOS: 9..=10 {
            RANGE1 = 1,
            RANGE2 = 2,
        },
        LPR: 14,
    }

    cr2: u32 {
        PVDE: 0,
        PLS: 1..=3,
        PVME1: 4,
        PVME3: 6,
        USV: 10,
    }

    cr3: u32 {
        EWUP1: 0,
        EWUP2: 1,
        EWUP3: 2,
        EWUP4: 3,
        EWUP5: 4,
        RRS: 8,
        APC: 10,
        ENULP: 11,
        EIWUL: 15,
    }
    @legacy {
        EIWF => EIWUL,
    }

    cr4: u32 {
        WP1: 0,
        WP2: 1,
        WP3: 2,
        WP4: 3,
        WP5: 4,
        VBE: 8,
        VBRS: 9,
        EXT_SMPS_ON: 13,
    }

    sr1: u32 {
        WUF1: 0,
        WUF2: 1,
        WUF3: 2,
        WUF4: 3,
        WUF5: 4,
        SBF: 8,
        EXT_SMPS_RDY: 13,
        WUFI: 15,
    }

    sr2: u32 {
        REGLPS: 8,
        REGLPF: 9,
        VOSF: 10,
        PVDO: 11,
        PVMO1: 12,
        PVMO3: 14,
    }

    scr: u32 {
        CWUF1: 0,
        CWUF2: 1,
        CWUF3: 2,
        CWUF4: 3,
        CWUF5: 4,
        CSBF: 8,
    }

    /// Port H pull-up.
    pucrh: u32 {
        PU0: 0,
        PU1: 1,
        PU3: 3,
    }

    pdcrh: u32 {
        PD0: 0,
        PD1: 1,
        PD3: 3,
    }
}

seq!(N in 0..16 {
    fields! {
        /// Pull-up of one port, one bit per pin.
        pucr: u32 {
            #( PU~N: N, )*
        }

        /// Pull-down of one port, one bit per pin.
        pdcr: u32 {
            #( PD~N: N, )*
        }
    }
});

pub const REGISTERS: &[Register] = &[
    cr1::REGISTER,
    cr2::REGISTER,
    cr3::REGISTER,
    cr4::REGISTER,
    sr1::REGISTER,
    sr2::REGISTER,
    scr::REGISTER,
    pucr::REGISTER,
    pdcr::REGISTER,
    pucrh::REGISTER,
    pdcrh::REGISTER,
];
