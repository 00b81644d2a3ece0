#![allow(deprecated)]

use stm32l422::{gpio, rcc, tim, Interrupt};

const LED: u32 = gpio::moder::MODER5.val(gpio::mode::OUTPUT);
const MCO: u32 = rcc::cfgr::MCO_PRE.mask();

fn main() {
    assert_eq!(LED, gpio::moder::MODE5.val(gpio::mode::OUTPUT));
    assert_eq!(MCO, rcc::cfgr::MCOPRE.mask());

    let (low, high) = tim::ocm::split(tim::ocm::RETRIGGERABLE_OPM1);
    let bits = tim::ccmr1_output::OC1M.val(low) | tim::ccmr1_output::OC1M_3.val(high);
    assert_eq!(bits, 0x0001_0000);

    assert_eq!(Interrupt::try_from(37u8), Ok(Interrupt::USART1));
}
