use stm32l422::{gpio, Peripherals, GPIOB, TIM2, USART2};

#[cfg(feature = "critical-section")]
#[test]
fn take_succeeds_once() {
    let p = Peripherals::take();
    assert!(p.is_some());
    assert!(Peripherals::take().is_none());
}

#[test]
fn tokens_are_zero_sized() {
    assert_eq!(core::mem::size_of::<GPIOB>(), 0);
    assert_eq!(core::mem::size_of::<Peripherals>(), 0);
    assert_eq!(GPIOB::PTR, (stm32l422::memory_map::GPIOB_BASE) as *const gpio::RegisterBlock);
    assert_eq!(format!("{:?}", unsafe { USART2::steal() }), "USART2");
    assert_eq!(TIM2::BASE, stm32l422::memory_map::PERIPH_BASE);
}
