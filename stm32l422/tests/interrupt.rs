use bare_metal::Nr;
use stm32l422::interrupt::{InvalidException, InvalidInterrupt, INTERRUPT_COUNT};
use stm32l422::{Exception, Interrupt};

#[test]
fn vector_numbers() {
    assert_eq!(Interrupt::WWDG as u8, 0);
    assert_eq!(Interrupt::RCC as u8, 5);
    assert_eq!(Interrupt::DMA1_CH1 as u8, 11);
    assert_eq!(Interrupt::ADC1_2 as u8, 18);
    assert_eq!(Interrupt::USART1 as u8, 37);
    assert_eq!(Interrupt::RTC_ALARM as u8, 41);
    assert_eq!(Interrupt::TIM6 as u8, 54);
    assert_eq!(Interrupt::DMA2_CH6 as u8, 68);
    assert_eq!(Interrupt::CRS as u8, 82);
    assert_eq!(Interrupt::CRS.nr() as usize, INTERRUPT_COUNT - 1);
}

#[test]
fn numbers_are_unique_and_round_trip() {
    for (i, interrupt) in Interrupt::ALL.iter().enumerate() {
        assert!(Interrupt::ALL[i + 1..].iter().all(|other| *other as u8 != *interrupt as u8));
        assert_eq!(Interrupt::try_from(interrupt.nr()), Ok(*interrupt));
        assert_eq!(interrupt.irqn(), interrupt.nr() as i16);
    }
}

#[test]
fn gaps_are_rejected() {
    let implemented = Interrupt::ALL.len();
    let rejected = (0..=u8::MAX).filter(|&nr| Interrupt::try_from(nr).is_err()).count();
    assert_eq!(implemented + rejected, 256);

    for nr in [19, 22, 29, 42, 55, 63, 74, 78, 83, 255] {
        assert_eq!(Interrupt::try_from(nr), Err(InvalidInterrupt(nr)));
    }
}

#[test]
fn names() {
    assert_eq!(Interrupt::TIM1_BRK_TIM15.name(), "TIM1_BRK_TIM15");
    assert_eq!(Interrupt::DMA2_CH7.name(), "DMA2_CH7");
    assert_eq!(
        InvalidInterrupt(20).to_string(),
        "no interrupt is implemented at vector 20"
    );
}

#[test]
fn exceptions() {
    assert_eq!(Exception::HardFault.irqn(), -13);
    assert_eq!(Exception::SysTick.irqn(), -1);
    for exception in Exception::ALL {
        assert!(exception.irqn() < 0);
        assert_eq!(Exception::try_from(*exception as i8), Ok(*exception));
    }
    assert_eq!(Exception::try_from(-3), Err(InvalidException(-3)));
    assert_eq!(Exception::try_from(0), Err(InvalidException(0)));
    assert_eq!(
        InvalidException(-6).to_string(),
        "no system exception is numbered -6"
    );
}
