//! Analog-to-digital converters (ADC1, ADC2) and their shared registers.

use seq_macro::seq;

use crate::field::Register;
use crate::register::{Ro, Rw};

peripheral! {
    /// One ADC.
    pub struct RegisterBlock: 0xB8 {
        0x00 => pub isr: Rw<u32>,
        0x04 => pub ier: Rw<u32>,
        0x08 => pub cr: Rw<u32>,
        0x0C => pub cfgr: Rw<u32>,
        0x10 => pub cfgr2: Rw<u32>,
        /// `smpr[0]` is [`smpr1`], `smpr[1]` is [`smpr2`].
        0x14 => pub smpr: [Rw<u32>; 2],
        0x1C => _reserved0: u32,
        0x20 => pub tr1: Rw<u32>,
        0x24 => pub tr2: Rw<u32>,
        0x28 => pub tr3: Rw<u32>,
        0x2C => _reserved1: u32,
        /// Regular sequence, [`sqr1`] to [`sqr4`].
        0x30 => pub sqr: [Rw<u32>; 4],
        0x40 => pub dr: Ro<u32>,
        0x44 => _reserved2: [u32; 2],
        0x4C => pub jsqr: Rw<u32>,
        0x50 => _reserved3: [u32; 4],
        0x60 => pub ofr: [Rw<u32>; 4],
        0x70 => _reserved4: [u32; 4],
        0x80 => pub jdr: [Ro<u32>; 4],
        0x90 => _reserved5: [u32; 4],
        0xA0 => pub awd2cr: Rw<u32>,
        0xA4 => pub awd3cr: Rw<u32>,
        0xA8 => _reserved6: [u32; 2],
        0xB0 => pub difsel: Rw<u32>,
        0xB4 => pub calfact: Rw<u32>,
    }
}

/// Sampling time encodings of the `SMPn` fields, in ADC clock cycles.
pub mod smp {
    pub const CYCLES_2_5: u32 = 0;
    pub const CYCLES_6_5: u32 = 1;
    pub const CYCLES_12_5: u32 = 2;
    pub const CYCLES_24_5: u32 = 3;
    pub const CYCLES_47_5: u32 = 4;
    pub const CYCLES_92_5: u32 = 5;
    pub const CYCLES_247_5: u32 = 6;
    pub const CYCLES_640_5: u32 = 7;
}

fields! {
    /// Interrupt and status. Flags are cleared by writing 1.
    isr: u32 {
        ADRDY: 0,
        EOSMP: 1,
        EOC: 2,
        EOS: 3,
        OVR: 4,
        JEOC: 5,
        JEOS: 6,
        AWD1: 7,
        AWD2: 8,
        AWD3: 9,
        JQOVF: 10,
    }

    ier: u32 {
        ADRDYIE: 0,
        EOSMPIE: 1,
        EOCIE: 2,
        EOSIE: 3,
        OVRIE: 4,
        JEOCIE: 5,
        JEOSIE: 6,
        AWD1IE: 7,
        AWD2IE: 8,
        AWD3IE: 9,
        JQOVFIE: 10,
    }

    /// Control. Software may only set `ADEN`, `ADSTART`, `JADSTART`, `ADSTP`, `JADSTP` and
    /// `ADCAL`; hardware clears them.
    cr: u32 {
        ADEN: 0,
        ADDIS: 1,
        ADSTART: 2,
        JADSTART: 3,
        ADSTP: 4,
        JADSTP: 5,
        ADVREGEN: 28,
        DEEPPWD: 29,
        ADCALDIF: 30,
        ADCAL: 31,
    }

    cfgr: u32 {
        DMAEN: 0,
        DMACFG: 1,
        RES: 3..=4 {
            BITS_12 = 0,
            BITS_10 = 1,
            BITS_8 = 2,
            BITS_6 = 3,
        },
        ALIGN: 5,
        EXTSEL: 6..=9,
        EXTEN: 10..=11 {
            DISABLED = 0,
            RISING = 1,
            FALLING = 2,
            BOTH = 3,
        },
        OVRMOD: 12,
        CONT: 13,
        AUTDLY: 14,
        DISCEN: 16,
        DISCNUM: 17..=19,
        JDISCEN: 20,
        JQM: 21,
        AWD1SGL: 22,
        AWD1EN: 23,
        JAWD1EN: 24,
        JAUTO: 25,
        AWD1CH: 26..=30,
        JQDIS: 31,
    }

    /// Oversampling.
    cfgr2: u32 {
        ROVSE: 0,
        JOVSE: 1,
        OVSR: 2..=4 {
            X2 = 0,
            X4 = 1,
            X8 = 2,
            X16 = 3,
            X32 = 4,
            X64 = 5,
            X128 = 6,
            X256 = 7,
        },
        OVSS: 5..=8,
        TROVS: 9,
        ROVSM: 10,
    }

    /// Analog watchdog 1 thresholds, 12 bits.
    tr1: u32 {
        LT1: 0..=11,
        HT1: 16..=27,
    }

    /// Analog watchdog 2 thresholds, 8 most significant bits.
    tr2: u32 {
        LT2: 0..=7,
        HT2: 16..=23,
    }

    tr3: u32 {
        LT3: 0..=7,
        HT3: 16..=23,
    }

    sqr1: u32 {
        /// Sequence length minus one.
        L: 0..=3,
        SQ1: 6..=10,
        SQ2: 12..=16,
        SQ3: 18..=22,
        SQ4: 24..=28,
    }

    sqr2: u32 {
        SQ5: 0..=4,
        SQ6: 6..=10,
        SQ7: 12..=16,
        SQ8: 18..=22,
        SQ9: 24..=28,
    }

    sqr3: u32 {
        SQ10: 0..=4,
        SQ11: 6..=10,
        SQ12: 12..=16,
        SQ13: 18..=22,
        SQ14: 24..=28,
    }

    sqr4: u32 {
        SQ15: 0..=4,
        SQ16: 6..=10,
    }

    dr: u32 {
        RDATA: 0..=15,
    }

    /// Injected sequence. Writes are queued when `JQM` is set.
    jsqr: u32 {
        JL: 0..=1,
        JEXTSEL: 2..=5,
        JEXTEN: 6..=7 {
            DISABLED = 0,
            RISING = 1,
            FALLING = 2,
            BOTH = 3,
        },
        JSQ1: 8..=12,
        JSQ2: 14..=18,
        JSQ3: 20..=24,
        JSQ4: 26..=30,
    }

    /// Offset correction, one register per offset slot.
    ofr: u32 {
        OFFSET: 0..=11,
        OFFSET_CH: 26..=30,
        OFFSET_EN: 31,
    }

    jdr: u32 {
        JDATA: 0..=15,
    }

    awd2cr: u32 {
        AWD2CH: 0..=18,
    }

    awd3cr: u32 {
        AWD3CH: 0..=18,
    }

    /// Differential mode selection, one bit per channel.
    difsel: u32 {
        DIFSEL: 0..=18,
    }

    calfact: u32 {
        CALFACT_S: 0..=6,
        CALFACT_D: 16..=22,
    }
}

seq!(N in 0..10 {
    fields! {
        smpr1: u32 {
            #( SMP~N: (N * 3)..=(N * 3 + 2), )*
            /// Adds one ADC clock cycle to the 2.5-cycle sampling time.
            SMPPLUS: 31,
        }
    }
});

seq!(N in 10..19 {
    fields! {
        smpr2: u32 {
            #( SMP~N: ((N - 10) * 3)..=((N - 10) * 3 + 2), )*
        }
    }
});

pub const REGISTERS: &[Register] = &[
    isr::REGISTER,
    ier::REGISTER,
    cr::REGISTER,
    cfgr::REGISTER,
    cfgr2::REGISTER,
    smpr1::REGISTER,
    smpr2::REGISTER,
    tr1::REGISTER,
    tr2::REGISTER,
    tr3::REGISTER,
    sqr1::REGISTER,
    sqr2::REGISTER,
    sqr3::REGISTER,
    sqr4::REGISTER,
    dr::REGISTER,
    jsqr::REGISTER,
    ofr::REGISTER,
    jdr::REGISTER,
    awd2cr::REGISTER,
    awd3cr::REGISTER,
    difsel::REGISTER,
    calfact::REGISTER,
];

/// Registers shared by ADC1 and ADC2 (ADC12_COMMON).
pub mod common {
    use crate::field::Register;
    use crate::register::{Ro, Rw};

    peripheral! {
        pub struct RegisterBlock: 0x10 {
            /// Flags of both converters, mirrored from their `ISR`.
            0x00 => pub csr: Ro<u32>,
            0x04 => _reserved0: u32,
            0x08 => pub ccr: Rw<u32>,
            /// Regular data of both converters in dual mode.
            0x0C => pub cdr: Ro<u32>,
        }
    }

    fields! {
        csr: u32 {
            ADRDY_MST: 0,
            EOSMP_MST: 1,
            EOC_MST: 2,
            EOS_MST: 3,
            OVR_MST: 4,
            JEOC_MST: 5,
            JEOS_MST: 6,
            AWD1_MST: 7,
            AWD2_MST: 8,
            AWD3_MST: 9,
            JQOVF_MST: 10,
            ADRDY_SLV: 16,
            EOSMP_SLV: 17,
            EOC_SLV: 18,
            EOS_SLV: 19,
            OVR_SLV: 20,
            JEOC_SLV: 21,
            JEOS_SLV: 22,
            AWD1_SLV: 23,
            AWD2_SLV: 24,
            AWD3_SLV: 25,
            JQOVF_SLV: 26,
        }
        @legacy {
            ADRDY_EOSMP_MST => EOSMP_MST,
            ADRDY_EOC_MST => EOC_MST,
            ADRDY_EOS_MST => EOS_MST,
            ADRDY_OVR_MST => OVR_MST,
            ADRDY_JEOC_MST => JEOC_MST,
            ADRDY_JEOS_MST => JEOS_MST,
            ADRDY_EOSMP_SLV => EOSMP_SLV,
            ADRDY_EOC_SLV => EOC_SLV,
            ADRDY_EOS_SLV => EOS_SLV,
            ADRDY_OVR_SLV => OVR_SLV,
            ADRDY_JEOC_SLV => JEOC_SLV,
            ADRDY_JEOS_SLV => JEOS_SLV,
        }

        /// Common control.
        ccr: u32 {
            DUAL: 0..=4 {
                INDEPENDENT = 0b00000,
                REG_SIMULT_INJ_SIMULT = 0b00001,
                REG_SIMULT_ALT_TRIG = 0b00010,
                REG_INTERL_INJ_SIMULT = 0b00011,
                INJ_SIMULT = 0b00101,
                REG_SIMULT = 0b00110,
                REG_INTERL = 0b00111,
                ALT_TRIG = 0b01001,
            },
            DELAY: 8..=11,
            DMACFG: 13,
            MDMA: 14..=15 {
                DISABLED = 0,
                BITS_12_10 = 2,
                BITS_8_6 = 3,
            },
            CKMODE: 16..=17 {
                /// Kernel clock selected in `RCC_CCIPR`.
                ASYNC = 0,
                SYNC_DIV1 = 1,
                SYNC_DIV2 = 2,
                SYNC_DIV4 = 3,
            },
            PRESC: 18..=21 {
                DIV1 = 0,
                DIV2 = 1,
                DIV4 = 2,
                DIV6 = 3,
                DIV8 = 4,
                DIV10 = 5,
                DIV12 = 6,
                DIV16 = 7,
                DIV32 = 8,
                DIV64 = 9,
                DIV128 = 10,
                DIV256 = 11,
            },
            VREFEN: 22,
            TSEN: 23,
            VBATEN: 24,
        }

        cdr: u32 {
            RDATA_MST: 0..=15,
            RDATA_SLV: 16..=31,
        }
    }

    pub const REGISTERS: &[Register] = &[csr::REGISTER, ccr::REGISTER, cdr::REGISTER];
}
