//! Debug support: device identification and peripheral freeze in debug mode.

use crate::field::Register;
use crate::register::{Ro, Rw};

peripheral! {
    pub struct RegisterBlock: 0x14 {
        0x00 => pub idcode: Ro<u32>,
        0x04 => pub cr: Rw<u32>,
        0x08 => pub apb1fzr1: Rw<u32>,
        0x0C => pub apb1fzr2: Rw<u32>,
        0x10 => pub apb2fz: Rw<u32>,
    }
}

fields! {
    idcode: u32 {
        /// `0x464` for the STM32L41x/42x line.
        DEV_ID: 0..=11,
        REV_ID: 16..=31,
    }

    cr: u32 {
        DBG_SLEEP: 0,
        DBG_STOP: 1,
        DBG_STANDBY: 2,
        TRACE_IOEN: 5,
        TRACE_MODE: 6..=7 {
            ASYNC = 0,
            SYNC_1 = 1,
            SYNC_2 = 2,
            SYNC_4 = 3,
        },
    }

    apb1fzr1: u32 {
        DBG_TIM2_STOP: 0,
        DBG_TIM6_STOP: 4,
        DBG_RTC_STOP: 10,
        DBG_WWDG_STOP: 11,
        DBG_IWDG_STOP: 12,
        DBG_I2C1_STOP: 21,
        DBG_I2C2_STOP: 22,
        DBG_I2C3_STOP: 23,
        DBG_LPTIM1_STOP: 31,
    }

    apb1fzr2: u32 {
        DBG_LPTIM2_STOP: 5,
    }

    apb2fz: u32 {
        DBG_TIM1_STOP: 11,
        DBG_TIM15_STOP: 16,
        DBG_TIM16_STOP: 17,
    }
}

/// `DEV_ID` of the STM32L41x/42x line.
pub const DEV_ID: u32 = 0x464;

pub const REGISTERS: &[Register] = &[
    idcode::REGISTER,
    cr::REGISTER,
    apb1fzr1::REGISTER,
    apb1fzr2::REGISTER,
    apb2fz::REGISTER,
];
