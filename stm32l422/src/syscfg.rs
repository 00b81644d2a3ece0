//! System configuration controller.

use seq_macro::seq;

use crate::field::Register;
use crate::register::{Rw, Wo};

peripheral! {
    pub struct RegisterBlock: 0x28 {
        0x00 => pub memrmp: Rw<u32>,
        0x04 => pub cfgr1: Rw<u32>,
        /// External interrupt source selection: `exticr[k]` routes lines `4k` to `4k + 3`.
        0x08 => pub exticr: [Rw<u32>; 4],
        0x18 => pub scsr: Rw<u32>,
        0x1C => pub cfgr2: Rw<u32>,
        /// SRAM2 write protection, one bit per 1 KiB page. Bits are cleared only by reset.
        0x20 => pub swpr: Wo<u32>,
        /// SRAM2 erase key, see [`SKR_KEY1`].
        0x24 => pub skr: Wo<u32>,
    }
}

/// Unlock sequence for `SCSR.SRAM2ER`, written to `SKR`.
pub const SKR_KEY1: u32 = 0xCA;
pub const SKR_KEY2: u32 = 0x53;

/// Source port encodings of the `EXTIn` fields.
pub mod port {
    pub const PA: u32 = 0;
    pub const PB: u32 = 1;
    pub const PC: u32 = 2;
    pub const PD: u32 = 3;
    pub const PE: u32 = 4;
    pub const PH: u32 = 7;
}

fields! {
    memrmp: u32 {
        MEM_MODE: 0..=2 {
            MAIN_FLASH = 0,
            SYSTEM_FLASH = 1,
            SRAM1 = 3,
            QUADSPI = 6,
        },
    }

    cfgr1: u32 {
        /// Firewall disable. Set by software, cleared by reset.
        FWDIS: 0,
        BOOSTEN: 8,
        I2C_PB6_FMP: 16,
        I2C_PB7_FMP: 17,
        I2C_PB8_FMP: 18,
        I2C_PB9_FMP: 19,
        I2C1_FMP: 20,
        I2C2_FMP: 21,
        I2C3_FMP: 22,
        /// FPU exception interrupt enables: invalid operation, divide by zero, underflow,
        /// overflow, input denormal and inexact.
        FPU_IE: 26..=31,
    }

    scsr: u32 {
        SRAM2ER: 0,
        SRAM2BSY: 1,
    }

    /// Lock bits are set once and cleared only by reset.
    cfgr2: u32 {
        CLL: 0,
        SPL: 1,
        PVDL: 2,
        ECCL: 3,
        /// SRAM2 parity error flag, cleared by writing 1.
        SPF: 8,
    }

    skr: u32 {
        KEY: 0..=7,
    }
}

seq!(N in 0..4 {
    fields! {
        exticr1: u32 {
            #( EXTI~N: (N * 4)..=(N * 4 + 2), )*
        }
    }
});

seq!(N in 4..8 {
    fields! {
        exticr2: u32 {
            #( EXTI~N: ((N - 4) * 4)..=((N - 4) * 4 + 2), )*
        }
    }
});

seq!(N in 8..12 {
    fields! {
        exticr3: u32 {
            #( EXTI~N: ((N - 8) * 4)..=((N - 8) * 4 + 2), )*
        }
    }
});

seq!(N in 12..16 {
    fields! {
        exticr4: u32 {
            #( EXTI~N: ((N - 12) * 4)..=((N - 12) * 4 + 2), )*
        }
    }
});

fields! {
    swpr: u32 {
        P0WP: 0,
        P1WP: 1,
        P2WP: 2,
        P3WP: 3,
        P4WP: 4,
        P5WP: 5,
        P6WP: 6,
        P7WP: 7,
    }
}

pub const REGISTERS: &[Register] = &[
    memrmp::REGISTER,
    cfgr1::REGISTER,
    exticr1::REGISTER,
    exticr2::REGISTER,
    exticr3::REGISTER,
    exticr4::REGISTER,
    scsr::REGISTER,
    cfgr2::REGISTER,
    swpr::REGISTER,
    skr::REGISTER,
];
