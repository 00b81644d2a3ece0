//! Real-time clock.
//!
//! Time and date registers hold BCD digits: `xT` fields are tens, `xU` units.

use crate::field::Register;
use crate::register::{Ro, Rw, Wo};

peripheral! {
    pub struct RegisterBlock: 0x60 {
        0x00 => pub tr: Rw<u32>,
        0x04 => pub dr: Rw<u32>,
        0x08 => pub ssr: Ro<u32>,
        0x0C => pub icsr: Rw<u32>,
        0x10 => pub prer: Rw<u32>,
        0x14 => pub wutr: Rw<u32>,
        0x18 => pub cr: Rw<u32>,
        0x1C => _reserved0: [u32; 2],
        /// Write protection key, see [`WPR_KEY1`].
        0x24 => pub wpr: Wo<u32>,
        0x28 => pub calr: Rw<u32>,
        0x2C => pub shiftr: Wo<u32>,
        0x30 => pub tstr: Ro<u32>,
        0x34 => pub tsdr: Ro<u32>,
        0x38 => pub tsssr: Ro<u32>,
        0x3C => _reserved1: u32,
        0x40 => pub alrmar: Rw<u32>,
        0x44 => pub alrmassr: Rw<u32>,
        0x48 => pub alrmbr: Rw<u32>,
        0x4C => pub alrmbssr: Rw<u32>,
        0x50 => pub sr: Ro<u32>,
        0x54 => pub misr: Ro<u32>,
        0x58 => _reserved2: u32,
        0x5C => pub scr: Wo<u32>,
    }
}

/// First write of the unlock sequence on `WPR`. Any other value locks again.
pub const WPR_KEY1: u32 = 0xCA;
pub const WPR_KEY2: u32 = 0x53;

fields! {
    tr: u32 {
        SU: 0..=3,
        ST: 4..=6,
        MNU: 8..=11,
        MNT: 12..=14,
        HU: 16..=19,
        HT: 20..=21,
        /// Set for PM in 12-hour format.
        PM: 22,
    }

    dr: u32 {
        DU: 0..=3,
        DT: 4..=5,
        MU: 8..=11,
        MT: 12,
        /// Week day, 1 for Monday through 7 for Sunday.
        WDU: 13..=15,
        YU: 16..=19,
        YT: 20..=23,
    }

    ssr: u32 {
        SS: 0..=15,
    }

    icsr: u32 {
        WUTWF: 2,
        SHPF: 3,
        INITS: 4,
        RSF: 5,
        INITF: 6,
        INIT: 7,
        RECALPF: 16,
    }

    prer: u32 {
        PREDIV_S: 0..=14,
        PREDIV_A: 16..=22,
    }

    wutr: u32 {
        WUT: 0..=15,
        WUTOCLR: 16..=31,
    }

    cr: u32 {
        WUCKSEL: 0..=2 {
            RTC_DIV16 = 0,
            RTC_DIV8 = 1,
            RTC_DIV4 = 2,
            RTC_DIV2 = 3,
            CK_SPRE = 4,
            /// `CK_SPRE`, with 2^16 added to the wakeup counter.
            CK_SPRE_WUT = 6,
        },
        TSEDGE: 3,
        REFCKON: 4,
        BYPSHAD: 5,
        FMT: 6,
        ALRAE: 8,
        ALRBE: 9,
        WUTE: 10,
        TSE: 11,
        ALRAIE: 12,
        ALRBIE: 13,
        WUTIE: 14,
        TSIE: 15,
        ADD1H: 16,
        SUB1H: 17,
        BKP: 18,
        COSEL: 19,
        POL: 20,
        OSEL: 21..=22 {
            DISABLED = 0,
            ALARM_A = 1,
            ALARM_B = 2,
            WAKEUP = 3,
        },
        COE: 23,
        ITSE: 24,
        TAMPTS: 25,
        TAMPOE: 26,
        TAMPALRM_PU: 29,
        TAMPALRM_TYPE: 30,
        OUT2EN: 31,
    }

    wpr: u32 {
        KEY: 0..=7,
    }

    /// Smooth calibration.
    calr: u32 {
        CALM: 0..=8,
        LPCAL: 12,
        CALW16: 13,
        CALW8: 14,
        CALP: 15,
    }

    shiftr: u32 {
        SUBFS: 0..=14,
        ADD1S: 31,
    }

    /// Timestamp time.
    tstr: u32 {
        SU: 0..=3,
        ST: 4..=6,
        MNU: 8..=11,
        MNT: 12..=14,
        HU: 16..=19,
        HT: 20..=21,
        PM: 22,
    }

    /// Timestamp date. The year is not captured.
    tsdr: u32 {
        DU: 0..=3,
        DT: 4..=5,
        MU: 8..=11,
        MT: 12,
        WDU: 13..=15,
    }

    tsssr: u32 {
        SS: 0..=15,
    }

    /// Alarm A. Alarm B uses the same fields in `ALRMBR`.
    alrmar: u32 {
        SU: 0..=3,
        ST: 4..=6,
        MSK1: 7,
        MNU: 8..=11,
        MNT: 12..=14,
        MSK2: 15,
        HU: 16..=19,
        HT: 20..=21,
        PM: 22,
        MSK3: 23,
        DU: 24..=27,
        DT: 28..=29,
        /// `DU` holds the week day instead of the date.
        WDSEL: 30,
        MSK4: 31,
    }

    /// Alarm A sub-seconds. Alarm B uses the same fields in `ALRMBSSR`.
    alrmassr: u32 {
        SS: 0..=14,
        MASKSS: 24..=27,
    }

    sr: u32 {
        ALRAF: 0,
        ALRBF: 1,
        WUTF: 2,
        TSF: 3,
        TSOVF: 4,
        ITSF: 5,
    }

    misr: u32 {
        ALRAMF: 0,
        ALRBMF: 1,
        WUTMF: 2,
        TSMF: 3,
        TSOVMF: 4,
        ITSMF: 5,
    }

    scr: u32 {
        CALRAF: 0,
        CALRBF: 1,
        CWUTF: 2,
        CTSF: 3,
        CTSOVF: 4,
        CITSF: 5,
    }
}

pub use self::alrmar as alrmbr;
pub use self::alrmassr as alrmbssr;

pub const REGISTERS: &[Register] = &[
    tr::REGISTER,
    dr::REGISTER,
    ssr::REGISTER,
    icsr::REGISTER,
    prer::REGISTER,
    wutr::REGISTER,
    cr::REGISTER,
    wpr::REGISTER,
    calr::REGISTER,
    shiftr::REGISTER,
    tstr::REGISTER,
    tsdr::REGISTER,
    tsssr::REGISTER,
    alrmar::REGISTER,
    alrmassr::REGISTER,
    sr::REGISTER,
    misr::REGISTER,
    scr::REGISTER,
];
