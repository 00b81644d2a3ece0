//! Interrupt and exception numbering.
//!
//! Device interrupts are numbered from 0 in vector-table order. Vectors the STM32L422xx
//! leaves unimplemented are gaps in the numbering; nothing is ever renumbered to close them.

use core::fmt;

/// Number of device interrupt vectors, including unimplemented ones.
pub const INTERRUPT_COUNT: usize = 83;

macro_rules! interrupts {
    ($($(#[$attr:meta])* $name:ident = $nr:literal,)*) => {
        /// Device interrupts.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[allow(non_camel_case_types)]
        #[repr(u8)]
        pub enum Interrupt {
            $($(#[$attr])* $name = $nr,)*
        }

        impl Interrupt {
            /// Every implemented interrupt, in vector order.
            pub const ALL: &'static [Interrupt] = &[$(Interrupt::$name),*];

            pub const fn name(self) -> &'static str {
                match self {
                    $(Interrupt::$name => stringify!($name),)*
                }
            }
        }

        impl TryFrom<u8> for Interrupt {
            type Error = InvalidInterrupt;

            fn try_from(nr: u8) -> Result<Self, Self::Error> {
                match nr {
                    $($nr => Ok(Interrupt::$name),)*
                    _ => Err(InvalidInterrupt(nr)),
                }
            }
        }
    };
}

interrupts! {
    /// Window watchdog early wakeup.
    WWDG = 0,
    /// PVD through EXTI line 16 and PVM through EXTI lines 35 and 37.
    PVD_PVM = 1,
    /// Tamper and timestamp through EXTI line 19.
    TAMP_STAMP = 2,
    /// RTC wakeup timer through EXTI line 20.
    RTC_WKUP = 3,
    FLASH = 4,
    RCC = 5,
    EXTI0 = 6,
    EXTI1 = 7,
    EXTI2 = 8,
    EXTI3 = 9,
    EXTI4 = 10,
    DMA1_CH1 = 11,
    DMA1_CH2 = 12,
    DMA1_CH3 = 13,
    DMA1_CH4 = 14,
    DMA1_CH5 = 15,
    DMA1_CH6 = 16,
    DMA1_CH7 = 17,
    ADC1_2 = 18,
    EXTI9_5 = 23,
    TIM1_BRK_TIM15 = 24,
    TIM1_UP_TIM16 = 25,
    TIM1_TRG_COM = 26,
    TIM1_CC = 27,
    TIM2 = 28,
    I2C1_EV = 31,
    I2C1_ER = 32,
    I2C2_EV = 33,
    I2C2_ER = 34,
    SPI1 = 35,
    SPI2 = 36,
    USART1 = 37,
    USART2 = 38,
    USART3 = 39,
    EXTI15_10 = 40,
    /// RTC alarms A and B through EXTI line 18.
    RTC_ALARM = 41,
    TIM6 = 54,
    DMA2_CH1 = 56,
    DMA2_CH2 = 57,
    DMA2_CH3 = 58,
    DMA2_CH4 = 59,
    DMA2_CH5 = 60,
    /// COMP1 through EXTI line 21.
    COMP = 64,
    LPTIM1 = 65,
    LPTIM2 = 66,
    /// USB event through EXTI line 17.
    USB = 67,
    DMA2_CH6 = 68,
    DMA2_CH7 = 69,
    LPUART1 = 70,
    QUADSPI = 71,
    I2C3_EV = 72,
    I2C3_ER = 73,
    TSC = 77,
    AES = 79,
    RNG = 80,
    FPU = 81,
    CRS = 82,
}

impl Interrupt {
    /// Number as the NVIC sees it, sharing one signed space with [`Exception`].
    pub const fn irqn(self) -> i16 {
        self as u8 as i16
    }
}

unsafe impl bare_metal::Nr for Interrupt {
    #[inline(always)]
    fn nr(&self) -> u8 {
        *self as u8
    }
}

/// A vector number with no implemented interrupt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidInterrupt(pub u8);

impl fmt::Display for InvalidInterrupt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no interrupt is implemented at vector {}", self.0)
    }
}

/// Cortex-M4 system exceptions, with their negative CMSIS numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(i8)]
pub enum Exception {
    NonMaskableInt = -14,
    HardFault = -13,
    MemoryManagement = -12,
    BusFault = -11,
    UsageFault = -10,
    SVCall = -5,
    DebugMonitor = -4,
    PendSV = -2,
    SysTick = -1,
}

impl Exception {
    pub const ALL: &'static [Exception] = &[
        Exception::NonMaskableInt,
        Exception::HardFault,
        Exception::MemoryManagement,
        Exception::BusFault,
        Exception::UsageFault,
        Exception::SVCall,
        Exception::DebugMonitor,
        Exception::PendSV,
        Exception::SysTick,
    ];

    pub const fn irqn(self) -> i16 {
        self as i8 as i16
    }
}

impl TryFrom<i8> for Exception {
    type Error = InvalidException;

    fn try_from(nr: i8) -> Result<Self, Self::Error> {
        Exception::ALL
            .iter()
            .copied()
            .find(|exception| *exception as i8 == nr)
            .ok_or(InvalidException(nr))
    }
}

/// A negative number with no system exception.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidException(pub i8);

impl fmt::Display for InvalidException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no system exception is numbered {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_vector_order() {
        assert!(Interrupt::ALL.windows(2).all(|w| (w[0] as u8) < (w[1] as u8)));
        assert!((Interrupt::CRS as usize) < INTERRUPT_COUNT);
    }

    #[test]
    fn try_from_gap() {
        assert_eq!(Interrupt::try_from(19), Err(InvalidInterrupt(19)));
        assert_eq!(Interrupt::try_from(41), Ok(Interrupt::RTC_ALARM));
    }
}
