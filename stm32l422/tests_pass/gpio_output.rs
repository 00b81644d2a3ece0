use stm32l422::{gpio, rcc, Peripherals};

fn configure(p: &Peripherals) {
    p.RCC.cr.set_bits(rcc::cr::HSION.mask());
    while !p.RCC.cr.is_set(rcc::cr::HSIRDY.mask()) {}

    p.RCC.ahb2enr.set_bits(rcc::ahb2enr::GPIOBEN.mask());
    p.GPIOB.moder.modify_field(gpio::moder::MODE3, gpio::mode::OUTPUT);
    p.GPIOB.otyper.modify_field(gpio::otyper::OT3, gpio::otype::PUSH_PULL);
    p.GPIOB.bsrr.write(gpio::bsrr::BS3.mask());
}

fn main() {
    let _ = configure as fn(&Peripherals);
}
