//! Timers (TIM1, TIM2, TIM6, TIM15, TIM16).
//!
//! All timers share the layout of the advanced-control timer TIM1. Registers and fields a
//! smaller timer does not implement read as zero and ignore writes.
//!
//! Capture/compare mode registers have an output-compare view and an input-capture view
//! over the same bits, selected per channel by `CCxS`. Each view has its own descriptor
//! module. The 4-bit output compare modes do not fit in contiguous bits: the low three
//! bits are in `OCxM` and bit 3 in `OCxM_3`.

use crate::field::Register;
use crate::register::{Rw, Wo};

peripheral! {
    pub struct RegisterBlock: 0x68 {
        0x00 => pub cr1: Rw<u32>,
        0x04 => pub cr2: Rw<u32>,
        0x08 => pub smcr: Rw<u32>,
        0x0C => pub dier: Rw<u32>,
        /// Flags are cleared by writing 0.
        0x10 => pub sr: Rw<u32>,
        0x14 => pub egr: Wo<u32>,
        /// See [`ccmr1_output`] and [`ccmr1_input`].
        0x18 => pub ccmr1: Rw<u32>,
        /// See [`ccmr2_output`] and [`ccmr2_input`].
        0x1C => pub ccmr2: Rw<u32>,
        0x20 => pub ccer: Rw<u32>,
        /// See [`cnt`], or [`cnt_remap`] when `CR1.UIFREMAP` is set.
        0x24 => pub cnt: Rw<u32>,
        0x28 => pub psc: Rw<u32>,
        0x2C => pub arr: Rw<u32>,
        0x30 => pub rcr: Rw<u32>,
        /// Capture/compare values of channels 1 to 4.
        0x34 => pub ccr: [Rw<u32>; 4],
        0x44 => pub bdtr: Rw<u32>,
        0x48 => pub dcr: Rw<u32>,
        /// DMA burst access to the register selected by `DCR.DBA`.
        0x4C => pub dmar: Rw<u32>,
        /// Timer-specific option register, see [`tim1_or1`], [`tim2_or1`], [`tim15_or1`]
        /// and [`tim16_or1`].
        0x50 => pub or1: Rw<u32>,
        0x54 => pub ccmr3: Rw<u32>,
        0x58 => pub ccr5: Rw<u32>,
        0x5C => pub ccr6: Rw<u32>,
        /// See [`tim1_or2`], [`tim2_or2`], [`tim15_or2`] and [`tim16_or2`].
        0x60 => pub or2: Rw<u32>,
        /// See [`tim1_or3`].
        0x64 => pub or3: Rw<u32>,
    }
}

/// Output compare mode encodings. Bit 3 of each mode goes to `OCxM_3`, see `split`.
pub mod ocm {
    pub const FROZEN: u32 = 0b0000;
    pub const ACTIVE_ON_MATCH: u32 = 0b0001;
    pub const INACTIVE_ON_MATCH: u32 = 0b0010;
    pub const TOGGLE: u32 = 0b0011;
    pub const FORCE_INACTIVE: u32 = 0b0100;
    pub const FORCE_ACTIVE: u32 = 0b0101;
    pub const PWM1: u32 = 0b0110;
    pub const PWM2: u32 = 0b0111;
    pub const RETRIGGERABLE_OPM1: u32 = 0b1000;
    pub const RETRIGGERABLE_OPM2: u32 = 0b1001;
    pub const COMBINED_PWM1: u32 = 0b1100;
    pub const COMBINED_PWM2: u32 = 0b1101;
    pub const ASYMMETRIC_PWM1: u32 = 0b1110;
    pub const ASYMMETRIC_PWM2: u32 = 0b1111;

    /// Splits a 4-bit mode into the `OCxM` value and the `OCxM_3` value.
    pub const fn split(mode: u32) -> (u32, u32) {
        (mode & 0b111, (mode >> 3) & 1)
    }
}

fields! {
    cr1: u32 {
        CEN: 0,
        UDIS: 1,
        URS: 2,
        OPM: 3,
        DIR: 4,
        CMS: 5..=6 {
            EDGE = 0,
            CENTER1 = 1,
            CENTER2 = 2,
            CENTER3 = 3,
        },
        ARPE: 7,
        CKD: 8..=9 {
            DIV1 = 0,
            DIV2 = 1,
            DIV4 = 2,
        },
        /// Copies `SR.UIF` into bit 31 of `CNT`.
        UIFREMAP: 11,
    }

    cr2: u32 {
        CCPC: 0,
        CCUS: 2,
        CCDS: 3,
        MMS: 4..=6 {
            RESET = 0,
            ENABLE = 1,
            UPDATE = 2,
            COMPARE_PULSE = 3,
            OC1REF = 4,
            OC2REF = 5,
            OC3REF = 6,
            OC4REF = 7,
        },
        TI1S: 7,
        OIS1: 8,
        OIS1N: 9,
        OIS2: 10,
        OIS2N: 11,
        OIS3: 12,
        OIS3N: 13,
        OIS4: 14,
        OIS5: 16,
        OIS6: 18,
        /// Master mode selection 2, for TRGO2.
        MMS2: 20..=23,
    }

    /// Slave mode control. Mode 8 (combined reset and trigger) sets `SMS_3`.
    smcr: u32 {
        SMS: 0..=2 {
            DISABLED = 0,
            ENCODER1 = 1,
            ENCODER2 = 2,
            ENCODER3 = 3,
            RESET = 4,
            GATED = 5,
            TRIGGER = 6,
            EXTERNAL_CLOCK1 = 7,
        },
        OCCS: 3,
        TS: 4..=6 {
            ITR0 = 0,
            ITR1 = 1,
            ITR2 = 2,
            ITR3 = 3,
            TI1F_ED = 4,
            TI1FP1 = 5,
            TI2FP2 = 6,
            ETRF = 7,
        },
        MSM: 7,
        ETF: 8..=11,
        ETPS: 12..=13 {
            DIV1 = 0,
            DIV2 = 1,
            DIV4 = 2,
            DIV8 = 3,
        },
        ECE: 14,
        ETP: 15,
        SMS_3: 16,
    }

    dier: u32 {
        UIE: 0,
        CC1IE: 1,
        CC2IE: 2,
        CC3IE: 3,
        CC4IE: 4,
        COMIE: 5,
        TIE: 6,
        BIE: 7,
        UDE: 8,
        CC1DE: 9,
        CC2DE: 10,
        CC3DE: 11,
        CC4DE: 12,
        COMDE: 13,
        TDE: 14,
    }

    sr: u32 {
        UIF: 0,
        CC1IF: 1,
        CC2IF: 2,
        CC3IF: 3,
        CC4IF: 4,
        COMIF: 5,
        TIF: 6,
        BIF: 7,
        B2IF: 8,
        CC1OF: 9,
        CC2OF: 10,
        CC3OF: 11,
        CC4OF: 12,
        SBIF: 13,
        CC5IF: 16,
        CC6IF: 17,
    }

    egr: u32 {
        UG: 0,
        CC1G: 1,
        CC2G: 2,
        CC3G: 3,
        CC4G: 4,
        COMG: 5,
        TG: 6,
        BG: 7,
        B2G: 8,
    }

    /// `CCMR1` for channels configured as outputs.
    ccmr1_output: u32 {
        CC1S: 0..=1,
        OC1FE: 2,
        OC1PE: 3,
        OC1M: 4..=6,
        OC1CE: 7,
        CC2S: 8..=9,
        OC2FE: 10,
        OC2PE: 11,
        OC2M: 12..=14,
        OC2CE: 15,
        OC1M_3: 16,
        OC2M_3: 24,
    }

    /// `CCMR1` for channels configured as inputs.
    ccmr1_input: u32 {
        CC1S: 0..=1 {
            OUTPUT = 0,
            TI1 = 1,
            TI2 = 2,
            TRC = 3,
        },
        IC1PSC: 2..=3,
        IC1F: 4..=7,
        CC2S: 8..=9 {
            OUTPUT = 0,
            TI2 = 1,
            TI1 = 2,
            TRC = 3,
        },
        IC2PSC: 10..=11,
        IC2F: 12..=15,
    }

    ccmr2_output: u32 {
        CC3S: 0..=1,
        OC3FE: 2,
        OC3PE: 3,
        OC3M: 4..=6,
        OC3CE: 7,
        CC4S: 8..=9,
        OC4FE: 10,
        OC4PE: 11,
        OC4M: 12..=14,
        OC4CE: 15,
        OC3M_3: 16,
        OC4M_3: 24,
    }

    ccmr2_input: u32 {
        CC3S: 0..=1 {
            OUTPUT = 0,
            TI3 = 1,
            TI4 = 2,
            TRC = 3,
        },
        IC3PSC: 2..=3,
        IC3F: 4..=7,
        CC4S: 8..=9 {
            OUTPUT = 0,
            TI4 = 1,
            TI3 = 2,
            TRC = 3,
        },
        IC4PSC: 10..=11,
        IC4F: 12..=15,
    }

    ccer: u32 {
        CC1E: 0,
        CC1P: 1,
        CC1NE: 2,
        CC1NP: 3,
        CC2E: 4,
        CC2P: 5,
        CC2NE: 6,
        CC2NP: 7,
        CC3E: 8,
        CC3P: 9,
        CC3NE: 10,
        CC3NP: 11,
        CC4E: 12,
        CC4P: 13,
        CC4NP: 15,
        CC5E: 16,
        CC5P: 17,
        CC6E: 20,
        CC6P: 21,
    }

    /// Counter. 32 bits on TIM2, 16 bits elsewhere.
    cnt: u32 {
        CNT: 0..=31,
    }

    /// `CNT` while `CR1.UIFREMAP` is set.
    cnt_remap: u32 {
        CNT: 0..=30,
        UIFCPY: 31,
    }

    psc: u32 {
        PSC: 0..=15,
    }

    arr: u32 {
        ARR: 0..=31,
    }

    /// Repetition counter.
    rcr: u32 {
        REP: 0..=15,
    }

    ccr: u32 {
        CCR: 0..=31,
    }

    /// Break and dead-time.
    bdtr: u32 {
        DTG: 0..=7,
        LOCK: 8..=9 {
            OFF = 0,
            LEVEL1 = 1,
            LEVEL2 = 2,
            LEVEL3 = 3,
        },
        OSSI: 10,
        OSSR: 11,
        BKE: 12,
        BKP: 13,
        AOE: 14,
        MOE: 15,
        BKF: 16..=19,
        BK2F: 20..=23,
        BK2E: 24,
        BK2P: 25,
    }

    dcr: u32 {
        DBA: 0..=4,
        /// Burst length minus one.
        DBL: 8..=12,
    }

    dmar: u32 {
        DMAB: 0..=31,
    }

    /// Output compare channels 5 and 6 (TIM1 only).
    ccmr3: u32 {
        OC5FE: 2,
        OC5PE: 3,
        OC5M: 4..=6,
        OC5CE: 7,
        OC6FE: 10,
        OC6PE: 11,
        OC6M: 12..=14,
        OC6CE: 15,
        OC5M_3: 16,
        OC6M_3: 24,
    }

    /// Channel 5 compare value and its combination with channels 1 to 3.
    ccr5: u32 {
        CCR5: 0..=15,
        GC5C1: 29,
        GC5C2: 30,
        GC5C3: 31,
    }

    ccr6: u32 {
        CCR6: 0..=15,
    }

    tim1_or1: u32 {
        ETR_ADC1_RMP: 0..=1,
        TI1_RMP: 4,
    }

    tim2_or1: u32 {
        ITR1_RMP: 0,
        ETR1_RMP: 1,
        TI4_RMP: 2..=3,
    }

    tim15_or1: u32 {
        TI1_RMP: 0,
        ENCODER_MODE: 1..=2,
    }

    tim16_or1: u32 {
        TI1_RMP: 0..=1 {
            GPIO = 0,
            LSI = 1,
            LSE = 2,
            RTC_WAKEUP = 3,
        },
    }

    /// Break input sources of TIM1.
    tim1_or2: u32 {
        BKINE: 0,
        BKCMP1E: 1,
        BKCMP2E: 2,
        BKINP: 9,
        BKCMP1P: 10,
        BKCMP2P: 11,
        ETRSEL: 14..=16,
    }

    /// Break 2 input sources of TIM1.
    tim1_or3: u32 {
        BK2INE: 0,
        BK2CMP1E: 1,
        BK2CMP2E: 2,
        BK2INP: 9,
        BK2CMP1P: 10,
        BK2CMP2P: 11,
    }

    tim2_or2: u32 {
        ETRSEL: 14..=16,
    }

    tim15_or2: u32 {
        BKINE: 0,
        BKCMP1E: 1,
        BKCMP2E: 2,
        BKINP: 9,
        BKCMP1P: 10,
        BKCMP2P: 11,
    }

    tim16_or2: u32 {
        BKINE: 0,
        BKCMP1E: 1,
        BKCMP2E: 2,
        BKINP: 9,
        BKCMP1P: 10,
        BKCMP2P: 11,
    }
}

pub const REGISTERS: &[Register] = &[
    cr1::REGISTER,
    cr2::REGISTER,
    smcr::REGISTER,
    dier::REGISTER,
    sr::REGISTER,
    egr::REGISTER,
    ccmr1_output::REGISTER,
    ccmr1_input::REGISTER,
    ccmr2_output::REGISTER,
    ccmr2_input::REGISTER,
    ccer::REGISTER,
    cnt::REGISTER,
    cnt_remap::REGISTER,
    psc::REGISTER,
    arr::REGISTER,
    rcr::REGISTER,
    ccr::REGISTER,
    bdtr::REGISTER,
    dcr::REGISTER,
    dmar::REGISTER,
    ccmr3::REGISTER,
    ccr5::REGISTER,
    ccr6::REGISTER,
    tim1_or1::REGISTER,
    tim2_or1::REGISTER,
    tim15_or1::REGISTER,
    tim16_or1::REGISTER,
    tim1_or2::REGISTER,
    tim1_or3::REGISTER,
    tim2_or2::REGISTER,
    tim15_or2::REGISTER,
    tim16_or2::REGISTER,
];
