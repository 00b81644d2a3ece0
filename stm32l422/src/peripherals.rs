//! Peripheral instances.
//!
//! Each instance is a zero-sized token that dereferences to the register block at its base
//! address. Instances of one peripheral type share the block type.

use core::marker::PhantomData;
use core::ops::Deref;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::memory_map;

static TAKEN: AtomicBool = AtomicBool::new(false);

macro_rules! instances {
    ($($(#[$attr:meta])* $name:ident: $block:ty = $base:expr,)*) => {
        $(
            $(#[$attr])*
            pub struct $name {
                _marker: PhantomData<*const ()>,
            }

            unsafe impl Send for $name {}

            impl $name {
                /// Base address of the instance.
                pub const BASE: usize = $base;

                /// Pointer to the register block.
                pub const PTR: *const $block = Self::BASE as *const _;

                /// Returns a pointer to the register block.
                #[inline(always)]
                pub const fn ptr() -> *const $block {
                    Self::PTR
                }

                /// Creates a token without checking ownership.
                ///
                /// # Safety
                ///
                /// The caller must ensure no other code accesses this instance's registers
                /// in a conflicting way.
                #[inline(always)]
                pub unsafe fn steal() -> Self {
                    Self { _marker: PhantomData }
                }
            }

            impl Deref for $name {
                type Target = $block;

                #[inline(always)]
                fn deref(&self) -> &Self::Target {
                    unsafe { &*Self::PTR }
                }
            }

            impl core::fmt::Debug for $name {
                fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    f.debug_struct(stringify!($name)).finish()
                }
            }
        )*

        /// Every peripheral instance of the device.
        #[allow(non_snake_case)]
        pub struct Peripherals {
            $(pub $name: $name,)*
        }

        impl Peripherals {
            /// Returns every instance, once.
            ///
            /// Later calls return `None`.
            #[cfg(feature = "critical-section")]
            #[inline]
            pub fn take() -> Option<Self> {
                critical_section::with(|_| {
                    if TAKEN.load(Ordering::Relaxed) {
                        None
                    } else {
                        Some(unsafe { Peripherals::steal() })
                    }
                })
            }

            /// Returns every instance without checking whether they were already taken.
            ///
            /// # Safety
            ///
            /// Every token returned aliases any token handed out before.
            #[inline]
            pub unsafe fn steal() -> Self {
                TAKEN.store(true, Ordering::Relaxed);
                Peripherals {
                    $($name: $name::steal(),)*
                }
            }
        }

        /// Name, base address and register block size of every instance.
        pub const INSTANCES: &[(&str, usize, usize)] = &[
            $((stringify!($name), $name::BASE, ::core::mem::size_of::<$block>()),)*
        ];
    };
}

instances! {
    ADC1: crate::adc::RegisterBlock = memory_map::ADC1_BASE,
    ADC2: crate::adc::RegisterBlock = memory_map::ADC2_BASE,
    /// Registers shared by ADC1 and ADC2.
    ADC12_COMMON: crate::adc::common::RegisterBlock = memory_map::ADC12_COMMON_BASE,
    AES: crate::aes::RegisterBlock = memory_map::AES_BASE,
    COMP1: crate::comp::RegisterBlock = memory_map::COMP1_BASE,
    CRC: crate::crc::RegisterBlock = memory_map::CRC_BASE,
    CRS: crate::crs::RegisterBlock = memory_map::CRS_BASE,
    DBGMCU: crate::dbgmcu::RegisterBlock = memory_map::DBGMCU_BASE,
    DMA1: crate::dma::RegisterBlock = memory_map::DMA1_BASE,
    DMA2: crate::dma::RegisterBlock = memory_map::DMA2_BASE,
    EXTI: crate::exti::RegisterBlock = memory_map::EXTI_BASE,
    FIREWALL: crate::firewall::RegisterBlock = memory_map::FIREWALL_BASE,
    FLASH: crate::flash::RegisterBlock = memory_map::FLASH_R_BASE,
    GPIOA: crate::gpio::RegisterBlock = memory_map::GPIOA_BASE,
    GPIOB: crate::gpio::RegisterBlock = memory_map::GPIOB_BASE,
    GPIOC: crate::gpio::RegisterBlock = memory_map::GPIOC_BASE,
    GPIOD: crate::gpio::RegisterBlock = memory_map::GPIOD_BASE,
    GPIOH: crate::gpio::RegisterBlock = memory_map::GPIOH_BASE,
    I2C1: crate::i2c::RegisterBlock = memory_map::I2C1_BASE,
    I2C2: crate::i2c::RegisterBlock = memory_map::I2C2_BASE,
    I2C3: crate::i2c::RegisterBlock = memory_map::I2C3_BASE,
    IWDG: crate::iwdg::RegisterBlock = memory_map::IWDG_BASE,
    LPTIM1: crate::lptim::RegisterBlock = memory_map::LPTIM1_BASE,
    LPTIM2: crate::lptim::RegisterBlock = memory_map::LPTIM2_BASE,
    /// Low-power UART. Shares the USART block; its `BRR` is 20 bits wide.
    LPUART1: crate::usart::RegisterBlock = memory_map::LPUART1_BASE,
    OPAMP1: crate::opamp::RegisterBlock = memory_map::OPAMP1_BASE,
    PWR: crate::pwr::RegisterBlock = memory_map::PWR_BASE,
    QUADSPI: crate::quadspi::RegisterBlock = memory_map::QSPI_R_BASE,
    RCC: crate::rcc::RegisterBlock = memory_map::RCC_BASE,
    RNG: crate::rng::RegisterBlock = memory_map::RNG_BASE,
    RTC: crate::rtc::RegisterBlock = memory_map::RTC_BASE,
    SPI1: crate::spi::RegisterBlock = memory_map::SPI1_BASE,
    SPI2: crate::spi::RegisterBlock = memory_map::SPI2_BASE,
    SYSCFG: crate::syscfg::RegisterBlock = memory_map::SYSCFG_BASE,
    TAMP: crate::tamp::RegisterBlock = memory_map::TAMP_BASE,
    /// Advanced-control timer.
    TIM1: crate::tim::RegisterBlock = memory_map::TIM1_BASE,
    /// 32-bit general-purpose timer.
    TIM2: crate::tim::RegisterBlock = memory_map::TIM2_BASE,
    /// Basic timer.
    TIM6: crate::tim::RegisterBlock = memory_map::TIM6_BASE,
    TIM15: crate::tim::RegisterBlock = memory_map::TIM15_BASE,
    TIM16: crate::tim::RegisterBlock = memory_map::TIM16_BASE,
    TSC: crate::tsc::RegisterBlock = memory_map::TSC_BASE,
    USART1: crate::usart::RegisterBlock = memory_map::USART1_BASE,
    USART2: crate::usart::RegisterBlock = memory_map::USART2_BASE,
    USART3: crate::usart::RegisterBlock = memory_map::USART3_BASE,
    /// USB full-speed device.
    USB: crate::usb::RegisterBlock = memory_map::USB_BASE,
    VREFBUF: crate::vrefbuf::RegisterBlock = memory_map::VREFBUF_BASE,
    WWDG: crate::wwdg::RegisterBlock = memory_map::WWDG_BASE,
}
