//! Reset and clock control.

use crate::field::Register;
use crate::register::{Ro, Rw, Wo};

peripheral! {
    pub struct RegisterBlock: 0x9C {
        0x00 => pub cr: Rw<u32>,
        0x04 => pub icscr: Rw<u32>,
        0x08 => pub cfgr: Rw<u32>,
        0x0C => pub pllcfgr: Rw<u32>,
        0x10 => _reserved0: [u32; 2],
        0x18 => pub cier: Rw<u32>,
        0x1C => pub cifr: Ro<u32>,
        0x20 => pub cicr: Wo<u32>,
        0x24 => _reserved1: u32,
        0x28 => pub ahb1rstr: Rw<u32>,
        0x2C => pub ahb2rstr: Rw<u32>,
        0x30 => pub ahb3rstr: Rw<u32>,
        0x34 => _reserved2: u32,
        0x38 => pub apb1rstr1: Rw<u32>,
        0x3C => pub apb1rstr2: Rw<u32>,
        0x40 => pub apb2rstr: Rw<u32>,
        0x44 => _reserved3: u32,
        0x48 => pub ahb1enr: Rw<u32>,
        0x4C => pub ahb2enr: Rw<u32>,
        0x50 => pub ahb3enr: Rw<u32>,
        0x54 => _reserved4: u32,
        0x58 => pub apb1enr1: Rw<u32>,
        0x5C => pub apb1enr2: Rw<u32>,
        0x60 => pub apb2enr: Rw<u32>,
        0x64 => _reserved5: u32,
        0x68 => pub ahb1smenr: Rw<u32>,
        0x6C => pub ahb2smenr: Rw<u32>,
        0x70 => pub ahb3smenr: Rw<u32>,
        0x74 => _reserved6: u32,
        0x78 => pub apb1smenr1: Rw<u32>,
        0x7C => pub apb1smenr2: Rw<u32>,
        0x80 => pub apb2smenr: Rw<u32>,
        0x84 => _reserved7: u32,
        0x88 => pub ccipr: Rw<u32>,
        0x8C => _reserved8: u32,
        /// Backup domain control. Write-protected until `PWR_CR1.DBP` is set.
        0x90 => pub bdcr: Rw<u32>,
        0x94 => pub csr: Rw<u32>,
        0x98 => pub crrcr: Rw<u32>,
    }
}

fields! {
    cr: u32 {
        MSION: 0,
        MSIRDY: 1,
        MSIPLLEN: 2,
        /// Selects `MSIRANGE` over `CSR.MSISRANGE`.
        MSIRGSEL: 3,
        MSIRANGE: 4..=7 {
            RANGE_100K = 0,
            RANGE_200K = 1,
            RANGE_400K = 2,
            RANGE_800K = 3,
            RANGE_1M = 4,
            RANGE_2M = 5,
            RANGE_4M = 6,
            RANGE_8M = 7,
            RANGE_16M = 8,
            RANGE_24M = 9,
            RANGE_32M = 10,
            RANGE_48M = 11,
        },
        HSION: 8,
        HSIKERON: 9,
        HSIRDY: 10,
        HSIASFS: 11,
        HSEON: 16,
        HSERDY: 17,
        HSEBYP: 18,
        CSSON: 19,
        PLLON: 24,
        PLLRDY: 25,
    }

    icscr: u32 {
        MSICAL: 0..=7,
        MSITRIM: 8..=15,
        HSICAL: 16..=23,
        HSITRIM: 24..=30,
    }

    cfgr: u32 {
        SW: 0..=1 {
            MSI = 0,
            HSI16 = 1,
            HSE = 2,
            PLL = 3,
        },
        SWS: 2..=3 {
            MSI = 0,
            HSI16 = 1,
            HSE = 2,
            PLL = 3,
        },
        HPRE: 4..=7 {
            DIV1 = 0b0000,
            DIV2 = 0b1000,
            DIV4 = 0b1001,
            DIV8 = 0b1010,
            DIV16 = 0b1011,
            DIV64 = 0b1100,
            DIV128 = 0b1101,
            DIV256 = 0b1110,
            DIV512 = 0b1111,
        },
        PPRE1: 8..=10 {
            DIV1 = 0b000,
            DIV2 = 0b100,
            DIV4 = 0b101,
            DIV8 = 0b110,
            DIV16 = 0b111,
        },
        PPRE2: 11..=13 {
            DIV1 = 0b000,
            DIV2 = 0b100,
            DIV4 = 0b101,
            DIV8 = 0b110,
            DIV16 = 0b111,
        },
        /// Wakeup clock after Stop: 0 MSI, 1 HSI16.
        STOPWUCK: 15,
        MCOSEL: 24..=27 {
            DISABLED = 0,
            SYSCLK = 1,
            MSI = 2,
            HSI16 = 3,
            HSE = 4,
            PLL = 5,
            LSI = 6,
            LSE = 7,
            HSI48 = 8,
        },
        MCOPRE: 28..=30 {
            DIV1 = 0,
            DIV2 = 1,
            DIV4 = 2,
            DIV8 = 3,
            DIV16 = 4,
        },
    }
    @legacy {
        MCO_PRE => MCOPRE,
    }

    /// Main PLL. `f_vco = f_in * PLLN / (PLLM + 1)`.
    pllcfgr: u32 {
        PLLSRC: 0..=1 {
            NONE = 0,
            MSI = 1,
            HSI16 = 2,
            HSE = 3,
        },
        PLLM: 4..=6,
        PLLN: 8..=14,
        PLLPEN: 16,
        PLLP: 17,
        PLLQEN: 20,
        PLLQ: 21..=22 {
            DIV2 = 0,
            DIV4 = 1,
            DIV6 = 2,
            DIV8 = 3,
        },
        PLLREN: 24,
        PLLR: 25..=26 {
            DIV2 = 0,
            DIV4 = 1,
            DIV6 = 2,
            DIV8 = 3,
        },
        /// Overrides `PLLP` when nonzero.
        PLLPDIV: 27..=31,
    }

    cier: u32 {
        LSIRDYIE: 0,
        LSERDYIE: 1,
        MSIRDYIE: 2,
        HSIRDYIE: 3,
        HSERDYIE: 4,
        PLLRDYIE: 5,
        LSECSSIE: 9,
        HSI48RDYIE: 10,
    }

    cifr: u32 {
        LSIRDYF: 0,
        LSERDYF: 1,
        MSIRDYF: 2,
        HSIRDYF: 3,
        HSERDYF: 4,
        PLLRDYF: 5,
        CSSF: 8,
        LSECSSF: 9,
        HSI48RDYF: 10,
    }

    cicr: u32 {
        LSIRDYC: 0,
        LSERDYC: 1,
        MSIRDYC: 2,
        HSIRDYC: 3,
        HSERDYC: 4,
        PLLRDYC: 5,
        CSSC: 8,
        LSECSSC: 9,
        HSI48RDYC: 10,
    }

    ahb1rstr: u32 {
        DMA1RST: 0,
        DMA2RST: 1,
        FLASHRST: 8,
        CRCRST: 12,
        TSCRST: 16,
    }

    ahb2rstr: u32 {
        GPIOARST: 0,
        GPIOBRST: 1,
        GPIOCRST: 2,
        GPIODRST: 3,
        GPIOHRST: 7,
        ADCRST: 13,
        AESRST: 16,
        RNGRST: 18,
    }

    ahb3rstr: u32 {
        QSPIRST: 8,
    }

    apb1rstr1: u32 {
        TIM2RST: 0,
        TIM6RST: 4,
        SPI2RST: 14,
        USART2RST: 17,
        USART3RST: 18,
        I2C1RST: 21,
        I2C2RST: 22,
        I2C3RST: 23,
        CRSRST: 24,
        USBFSRST: 26,
        PWRRST: 28,
        OPAMPRST: 30,
        LPTIM1RST: 31,
    }

    apb1rstr2: u32 {
        LPUART1RST: 0,
        LPTIM2RST: 5,
    }

    apb2rstr: u32 {
        SYSCFGRST: 0,
        TIM1RST: 11,
        SPI1RST: 12,
        USART1RST: 14,
        TIM15RST: 16,
        TIM16RST: 17,
    }

    ahb1enr: u32 {
        DMA1EN: 0,
        DMA2EN: 1,
        FLASHEN: 8,
        CRCEN: 12,
        TSCEN: 16,
    }

    ahb2enr: u32 {
        GPIOAEN: 0,
        GPIOBEN: 1,
        GPIOCEN: 2,
        GPIODEN: 3,
        GPIOHEN: 7,
        ADCEN: 13,
        AESEN: 16,
        RNGEN: 18,
    }

    ahb3enr: u32 {
        QSPIEN: 8,
    }

    apb1enr1: u32 {
        TIM2EN: 0,
        TIM6EN: 4,
        RTCAPBEN: 10,
        WWDGEN: 11,
        SPI2EN: 14,
        USART2EN: 17,
        USART3EN: 18,
        I2C1EN: 21,
        I2C2EN: 22,
        I2C3EN: 23,
        CRSEN: 24,
        USBFSEN: 26,
        PWREN: 28,
        OPAMPEN: 30,
        LPTIM1EN: 31,
    }

    apb1enr2: u32 {
        LPUART1EN: 0,
        LPTIM2EN: 5,
    }

    apb2enr: u32 {
        SYSCFGEN: 0,
        /// Firewall clock. Set once; only a system reset clears it.
        FWEN: 7,
        TIM1EN: 11,
        SPI1EN: 12,
        USART1EN: 14,
        TIM15EN: 16,
        TIM16EN: 17,
    }

    /// Clocks kept running in Sleep and Stop modes.
    ahb1smenr: u32 {
        DMA1SMEN: 0,
        DMA2SMEN: 1,
        FLASHSMEN: 8,
        SRAM1SMEN: 9,
        CRCSMEN: 12,
        TSCSMEN: 16,
    }

    ahb2smenr: u32 {
        GPIOASMEN: 0,
        GPIOBSMEN: 1,
        GPIOCSMEN: 2,
        GPIODSMEN: 3,
        GPIOHSMEN: 7,
        SRAM2SMEN: 9,
        ADCSMEN: 13,
        AESSMEN: 16,
        RNGSMEN: 18,
    }

    ahb3smenr: u32 {
        QSPISMEN: 8,
    }

    apb1smenr1: u32 {
        TIM2SMEN: 0,
        TIM6SMEN: 4,
        RTCAPBSMEN: 10,
        WWDGSMEN: 11,
        SPI2SMEN: 14,
        USART2SMEN: 17,
        USART3SMEN: 18,
        I2C1SMEN: 21,
        I2C2SMEN: 22,
        I2C3SMEN: 23,
        CRSSMEN: 24,
        USBFSSMEN: 26,
        PWRSMEN: 28,
        OPAMPSMEN: 30,
        LPTIM1SMEN: 31,
    }

    apb1smenr2: u32 {
        LPUART1SMEN: 0,
        LPTIM2SMEN: 5,
    }

    apb2smenr: u32 {
        SYSCFGSMEN: 0,
        TIM1SMEN: 11,
        SPI1SMEN: 12,
        USART1SMEN: 14,
        TIM15SMEN: 16,
        TIM16SMEN: 17,
    }

    /// Peripheral kernel clock selection.
    ccipr: u32 {
        USART1SEL: 0..=1 {
            PCLK = 0,
            SYSCLK = 1,
            HSI16 = 2,
            LSE = 3,
        },
        USART2SEL: 2..=3 {
            PCLK = 0,
            SYSCLK = 1,
            HSI16 = 2,
            LSE = 3,
        },
        USART3SEL: 4..=5 {
            PCLK = 0,
            SYSCLK = 1,
            HSI16 = 2,
            LSE = 3,
        },
        LPUART1SEL: 10..=11 {
            PCLK = 0,
            SYSCLK = 1,
            HSI16 = 2,
            LSE = 3,
        },
        I2C1SEL: 12..=13 {
            PCLK = 0,
            SYSCLK = 1,
            HSI16 = 2,
        },
        I2C2SEL: 14..=15 {
            PCLK = 0,
            SYSCLK = 1,
            HSI16 = 2,
        },
        I2C3SEL: 16..=17 {
            PCLK = 0,
            SYSCLK = 1,
            HSI16 = 2,
        },
        LPTIM1SEL: 18..=19 {
            PCLK = 0,
            LSI = 1,
            HSI16 = 2,
            LSE = 3,
        },
        LPTIM2SEL: 20..=21 {
            PCLK = 0,
            LSI = 1,
            HSI16 = 2,
            LSE = 3,
        },
        /// 48 MHz clock for USB and RNG.
        CLK48SEL: 26..=27 {
            HSI48 = 0,
            PLLQ = 2,
            MSI = 3,
        },
        ADCSEL: 28..=29 {
            NONE = 0,
            SYSCLK = 3,
        },
    }

    bdcr: u32 {
        LSEON: 0,
        LSERDY: 1,
        LSEBYP: 2,
        LSEDRV: 3..=4 {
            LOW = 0,
            MEDIUM_LOW = 1,
            MEDIUM_HIGH = 2,
            HIGH = 3,
        },
        LSECSSON: 5,
        LSECSSD: 6,
        RTCSEL: 8..=9 {
            NONE = 0,
            LSE = 1,
            LSI = 2,
            HSE_DIV32 = 3,
        },
        RTCEN: 15,
        BDRST: 16,
        LSCOEN: 24,
        LSCOSEL: 25,
    }

    /// Control and reset flags.
    csr: u32 {
        LSION: 0,
        LSIRDY: 1,
        LSIPREDIV: 4,
        /// MSI range after Standby.
        MSISRANGE: 8..=11 {
            RANGE_1M = 4,
            RANGE_2M = 5,
            RANGE_4M = 6,
            RANGE_8M = 7,
        },
        /// Clears every reset flag.
        RMVF: 23,
        FWRSTF: 24,
        OBLRSTF: 25,
        PINRSTF: 26,
        BORRSTF: 27,
        SFTRSTF: 28,
        IWDGRSTF: 29,
        WWDGRSTF: 30,
        LPWRRSTF: 31,
    }
    @legacy {
        FIREWALLRSTF => FWRSTF,
    }

    crrcr: u32 {
        HSI48ON: 0,
        HSI48RDY: 1,
        HSI48CAL: 7..=15,
    }
}

pub const REGISTERS: &[Register] = &[
    cr::REGISTER,
    icscr::REGISTER,
    cfgr::REGISTER,
    pllcfgr::REGISTER,
    cier::REGISTER,
    cifr::REGISTER,
    cicr::REGISTER,
    ahb1rstr::REGISTER,
    ahb2rstr::REGISTER,
    ahb3rstr::REGISTER,
    apb1rstr1::REGISTER,
    apb1rstr2::REGISTER,
    apb2rstr::REGISTER,
    ahb1enr::REGISTER,
    ahb2enr::REGISTER,
    ahb3enr::REGISTER,
    apb1enr1::REGISTER,
    apb1enr2::REGISTER,
    apb2enr::REGISTER,
    ahb1smenr::REGISTER,
    ahb2smenr::REGISTER,
    ahb3smenr::REGISTER,
    apb1smenr1::REGISTER,
    apb1smenr2::REGISTER,
    apb2smenr::REGISTER,
    ccipr::REGISTER,
    bdcr::REGISTER,
    csr::REGISTER,
    crrcr::REGISTER,
];
