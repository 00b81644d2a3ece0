//! Memory regions and peripheral base addresses.
//!
//! Every peripheral base is its bus window plus the offset documented in the reference
//! manual. Instances of the same peripheral type differ only here.

/// A fixed window of the address space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    pub base: usize,
    pub size: usize,
}

impl Region {
    pub const fn new(base: usize, size: usize) -> Self {
        Self { base, size }
    }

    /// One past the last address of the region.
    pub const fn end(&self) -> usize {
        self.base + self.size
    }

    pub const fn contains(&self, addr: usize) -> bool {
        addr >= self.base && addr < self.end()
    }

    /// Whether the two regions share any address.
    pub const fn overlaps(&self, other: &Region) -> bool {
        self.base < other.end() && other.base < self.end()
    }
}

pub const FLASH_BASE: usize = 0x0800_0000;
pub const SRAM1_BASE: usize = 0x2000_0000;
pub const SRAM2_BASE: usize = 0x1000_0000;
pub const PERIPH_BASE: usize = 0x4000_0000;
/// Memory-mapped QUADSPI flash.
pub const QSPI_BASE: usize = 0x9000_0000;
/// QUADSPI control registers.
pub const QSPI_R_BASE: usize = 0xA000_1000;
pub const SRAM1_BB_BASE: usize = 0x2200_0000;
pub const PERIPH_BB_BASE: usize = 0x4200_0000;
pub const SYSTEM_MEMORY_BASE: usize = 0x1FFF_0000;
pub const OTP_BASE: usize = 0x1FFF_7000;
pub const OPTION_BYTES_BASE: usize = 0x1FFF_7800;

pub const FLASH_SIZE: usize = 128 * 1024;
pub const SRAM1_SIZE: usize = 32 * 1024;
pub const SRAM2_SIZE: usize = 8 * 1024;

pub const FLASH: Region = Region::new(FLASH_BASE, FLASH_SIZE);
pub const SRAM1: Region = Region::new(SRAM1_BASE, SRAM1_SIZE);
pub const SRAM2: Region = Region::new(SRAM2_BASE, SRAM2_SIZE);
pub const SYSTEM_MEMORY: Region = Region::new(SYSTEM_MEMORY_BASE, 28 * 1024);
pub const OTP: Region = Region::new(OTP_BASE, 1024);
pub const OPTION_BYTES: Region = Region::new(OPTION_BYTES_BASE, 16);
/// Everything from APB1 up to the end of AHB2.
pub const PERIPH: Region = Region::new(PERIPH_BASE, 0x2000_0000);
pub const QSPI: Region = Region::new(QSPI_BASE, 0x1000_0000);
pub const QSPI_R: Region = Region::new(QSPI_R_BASE, 0x400);
/// Bit-band alias of [`SRAM1`]: one word per bit.
pub const SRAM1_BB: Region = Region::new(SRAM1_BB_BASE, SRAM1_SIZE * 32);
/// Bit-band alias of the first megabyte of [`PERIPH`].
pub const PERIPH_BB: Region = Region::new(PERIPH_BB_BASE, 0x0200_0000);

/// Regions that decode to distinct storage.
pub const REGIONS: &[(&str, Region)] = &[
    ("FLASH", FLASH),
    ("SRAM1", SRAM1),
    ("SRAM2", SRAM2),
    ("SYSTEM_MEMORY", SYSTEM_MEMORY),
    ("OTP", OTP),
    ("OPTION_BYTES", OPTION_BYTES),
    ("PERIPH", PERIPH),
    ("QSPI", QSPI),
    ("QSPI_R", QSPI_R),
];

pub const APB1PERIPH_BASE: usize = PERIPH_BASE;
pub const APB2PERIPH_BASE: usize = PERIPH_BASE + 0x0001_0000;
pub const AHB1PERIPH_BASE: usize = PERIPH_BASE + 0x0002_0000;
pub const AHB2PERIPH_BASE: usize = PERIPH_BASE + 0x0800_0000;

// APB1
pub const TIM2_BASE: usize = APB1PERIPH_BASE + 0x0000;
pub const TIM6_BASE: usize = APB1PERIPH_BASE + 0x1000;
pub const RTC_BASE: usize = APB1PERIPH_BASE + 0x2800;
pub const WWDG_BASE: usize = APB1PERIPH_BASE + 0x2C00;
pub const IWDG_BASE: usize = APB1PERIPH_BASE + 0x3000;
pub const TAMP_BASE: usize = APB1PERIPH_BASE + 0x3400;
pub const SPI2_BASE: usize = APB1PERIPH_BASE + 0x3800;
pub const USART2_BASE: usize = APB1PERIPH_BASE + 0x4400;
pub const USART3_BASE: usize = APB1PERIPH_BASE + 0x4800;
pub const I2C1_BASE: usize = APB1PERIPH_BASE + 0x5400;
pub const I2C2_BASE: usize = APB1PERIPH_BASE + 0x5800;
pub const I2C3_BASE: usize = APB1PERIPH_BASE + 0x5C00;
pub const CRS_BASE: usize = APB1PERIPH_BASE + 0x6000;
pub const USB_BASE: usize = APB1PERIPH_BASE + 0x6800;
/// USB packet memory area.
pub const USB_PMAADDR: usize = APB1PERIPH_BASE + 0x6C00;
pub const PWR_BASE: usize = APB1PERIPH_BASE + 0x7000;
pub const OPAMP1_BASE: usize = APB1PERIPH_BASE + 0x7800;
pub const LPTIM1_BASE: usize = APB1PERIPH_BASE + 0x7C00;
pub const LPUART1_BASE: usize = APB1PERIPH_BASE + 0x8000;
pub const LPTIM2_BASE: usize = APB1PERIPH_BASE + 0x9400;

// APB2
pub const SYSCFG_BASE: usize = APB2PERIPH_BASE + 0x0000;
pub const VREFBUF_BASE: usize = APB2PERIPH_BASE + 0x0030;
pub const COMP1_BASE: usize = APB2PERIPH_BASE + 0x0200;
pub const EXTI_BASE: usize = APB2PERIPH_BASE + 0x0400;
pub const FIREWALL_BASE: usize = APB2PERIPH_BASE + 0x1C00;
pub const TIM1_BASE: usize = APB2PERIPH_BASE + 0x2C00;
pub const SPI1_BASE: usize = APB2PERIPH_BASE + 0x3000;
pub const USART1_BASE: usize = APB2PERIPH_BASE + 0x3800;
pub const TIM15_BASE: usize = APB2PERIPH_BASE + 0x4000;
pub const TIM16_BASE: usize = APB2PERIPH_BASE + 0x4400;

// AHB1
pub const DMA1_BASE: usize = AHB1PERIPH_BASE;
pub const DMA2_BASE: usize = AHB1PERIPH_BASE + 0x0400;
pub const RCC_BASE: usize = AHB1PERIPH_BASE + 0x1000;
pub const FLASH_R_BASE: usize = AHB1PERIPH_BASE + 0x2000;
pub const CRC_BASE: usize = AHB1PERIPH_BASE + 0x3000;
pub const TSC_BASE: usize = AHB1PERIPH_BASE + 0x4000;

/// Base of channel `n` (1-based) of the DMA controller at `dma_base`.
///
/// # Panics
///
/// If `n` is not in `1..=7`.
pub const fn dma_channel_base(dma_base: usize, n: usize) -> usize {
    assert!(n >= 1 && n <= 7, "DMA channels are numbered 1 to 7");
    dma_base + 0x08 + 0x14 * (n - 1)
}

pub const DMA1_CHANNEL1_BASE: usize = dma_channel_base(DMA1_BASE, 1);
pub const DMA1_CHANNEL2_BASE: usize = dma_channel_base(DMA1_BASE, 2);
pub const DMA1_CHANNEL3_BASE: usize = dma_channel_base(DMA1_BASE, 3);
pub const DMA1_CHANNEL4_BASE: usize = dma_channel_base(DMA1_BASE, 4);
pub const DMA1_CHANNEL5_BASE: usize = dma_channel_base(DMA1_BASE, 5);
pub const DMA1_CHANNEL6_BASE: usize = dma_channel_base(DMA1_BASE, 6);
pub const DMA1_CHANNEL7_BASE: usize = dma_channel_base(DMA1_BASE, 7);
pub const DMA1_CSELR_BASE: usize = DMA1_BASE + 0xA8;
pub const DMA2_CHANNEL1_BASE: usize = dma_channel_base(DMA2_BASE, 1);
pub const DMA2_CHANNEL2_BASE: usize = dma_channel_base(DMA2_BASE, 2);
pub const DMA2_CHANNEL3_BASE: usize = dma_channel_base(DMA2_BASE, 3);
pub const DMA2_CHANNEL4_BASE: usize = dma_channel_base(DMA2_BASE, 4);
pub const DMA2_CHANNEL5_BASE: usize = dma_channel_base(DMA2_BASE, 5);
pub const DMA2_CHANNEL6_BASE: usize = dma_channel_base(DMA2_BASE, 6);
pub const DMA2_CHANNEL7_BASE: usize = dma_channel_base(DMA2_BASE, 7);
pub const DMA2_CSELR_BASE: usize = DMA2_BASE + 0xA8;

// AHB2
pub const GPIOA_BASE: usize = AHB2PERIPH_BASE + 0x0000;
pub const GPIOB_BASE: usize = AHB2PERIPH_BASE + 0x0400;
pub const GPIOC_BASE: usize = AHB2PERIPH_BASE + 0x0800;
pub const GPIOD_BASE: usize = AHB2PERIPH_BASE + 0x0C00;
pub const GPIOH_BASE: usize = AHB2PERIPH_BASE + 0x1C00;
pub const ADC1_BASE: usize = AHB2PERIPH_BASE + 0x0804_0000;
pub const ADC2_BASE: usize = AHB2PERIPH_BASE + 0x0804_0100;
pub const ADC12_COMMON_BASE: usize = AHB2PERIPH_BASE + 0x0804_0300;
pub const AES_BASE: usize = AHB2PERIPH_BASE + 0x0806_0000;
pub const RNG_BASE: usize = AHB2PERIPH_BASE + 0x0806_0800;

/// Debug MCU configuration, on the private peripheral bus.
pub const DBGMCU_BASE: usize = 0xE004_2000;

/// Device electronic signature and factory calibration data in system memory.
pub mod signature {
    /// 96-bit unique device ID.
    pub const UID_BASE: usize = 0x1FFF_7590;
    /// Flash size in KiB, as a 16-bit value.
    pub const FLASHSIZE_BASE: usize = 0x1FFF_75E0;
    /// Package type.
    pub const PACKAGE_BASE: usize = 0x1FFF_7500;
    /// Internal reference voltage raw reading at 3.0 V and 30 °C.
    pub const VREFINT_CAL_ADDR: usize = 0x1FFF_75AA;
    /// Temperature sensor raw reading at 30 °C, VDDA = 3.0 V.
    pub const TS_CAL1_ADDR: usize = 0x1FFF_75A8;
    /// Temperature sensor raw reading at 130 °C, VDDA = 3.0 V.
    pub const TS_CAL2_ADDR: usize = 0x1FFF_75CA;
    pub const VREFINT_CAL_VREF_MV: u32 = 3000;
    pub const TS_CAL1_TEMP: i32 = 30;
    pub const TS_CAL2_TEMP: i32 = 130;
}
