//! Register map for the STM32L422xx microcontroller.
//!
//! The crate is organized in layers, each depending on the one before it:
//!
//! 1. [`memory_map`]: memory regions and every peripheral's base address.
//! 2. One module per peripheral type (for example [`gpio`], [`rcc`], [`tim`]) holding a
//!    `#[repr(C)]` `RegisterBlock` whose field offsets are checked at compile time.
//! 3. [`peripherals`]: one token type per peripheral instance (`GPIOA`, `RCC`, `TIM1`, ...)
//!    that dereferences to the shared register block at the instance's base address.
//! 4. Bit-field descriptors: inside each peripheral module, one module per register with a
//!    [`Field`] constant per bit-field, named encodings for enumerated selectors and
//!    deprecated legacy names.
//!
//! [`interrupt`] holds the vector table numbering.
//!
//! ```no_run
//! use stm32l422::{gpio, rcc, Peripherals};
//!
//! let p = unsafe { Peripherals::steal() };
//! p.RCC.ahb2enr.set_bits(rcc::ahb2enr::GPIOAEN.mask());
//! p.GPIOA.moder.modify_field(gpio::moder::MODE5, gpio::mode::OUTPUT);
//! p.GPIOA.bsrr.write(gpio::bsrr::BS5.mask());
//! ```
#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]

#[macro_use]
mod macros;

pub mod bitband;
pub mod field;
pub mod interrupt;
pub mod memory_map;
pub mod peripherals;
pub mod register;

pub mod adc;
pub mod aes;
pub mod comp;
pub mod crc;
pub mod crs;
pub mod dbgmcu;
pub mod dma;
pub mod exti;
pub mod firewall;
pub mod flash;
pub mod gpio;
pub mod i2c;
pub mod iwdg;
pub mod lptim;
pub mod opamp;
pub mod pwr;
pub mod quadspi;
pub mod rcc;
pub mod rng;
pub mod rtc;
pub mod spi;
pub mod syscfg;
pub mod tamp;
pub mod tim;
pub mod tsc;
pub mod usart;
pub mod usb;
pub mod vrefbuf;
pub mod wwdg;

pub use crate::field::{Alias, Field, Register};
pub use crate::interrupt::{Exception, Interrupt};
pub use crate::peripherals::*;

/// Number of priority bits implemented in the NVIC.
pub const NVIC_PRIO_BITS: u8 = 4;

/// Every register descriptor of the device, grouped by peripheral type.
pub const DEVICE: &[(&str, &[Register])] = &[
    ("ADC", adc::REGISTERS),
    ("ADC_COMMON", adc::common::REGISTERS),
    ("AES", aes::REGISTERS),
    ("COMP", comp::REGISTERS),
    ("CRC", crc::REGISTERS),
    ("CRS", crs::REGISTERS),
    ("DBGMCU", dbgmcu::REGISTERS),
    ("DMA", dma::REGISTERS),
    ("EXTI", exti::REGISTERS),
    ("FIREWALL", firewall::REGISTERS),
    ("FLASH", flash::REGISTERS),
    ("GPIO", gpio::REGISTERS),
    ("I2C", i2c::REGISTERS),
    ("IWDG", iwdg::REGISTERS),
    ("LPTIM", lptim::REGISTERS),
    ("OPAMP", opamp::REGISTERS),
    ("PWR", pwr::REGISTERS),
    ("QUADSPI", quadspi::REGISTERS),
    ("RCC", rcc::REGISTERS),
    ("RNG", rng::REGISTERS),
    ("RTC", rtc::REGISTERS),
    ("SPI", spi::REGISTERS),
    ("SYSCFG", syscfg::REGISTERS),
    ("TAMP", tamp::REGISTERS),
    ("TIM", tim::REGISTERS),
    ("TSC", tsc::REGISTERS),
    ("USART", usart::REGISTERS),
    ("USB", usb::REGISTERS),
    ("VREFBUF", vrefbuf::REGISTERS),
    ("WWDG", wwdg::REGISTERS),
];

#[cfg(test)]
#[test]
fn trybuild_tests() {
    let t = trybuild::TestCases::new();
    t.pass("tests_pass/*.rs");
}
