use stm32l422::{rcc, usart, USART1};

fn write(uart: &USART1, bytes: &[u8]) {
    for &byte in bytes {
        while uart.isr.read_field(usart::isr::TXE) == 0 {}
        uart.tdr.write(u16::from(byte));
    }
    while !uart.isr.is_set(usart::isr::TC.mask()) {}
}

fn init(clocks: &stm32l422::RCC, uart: &USART1) {
    clocks.apb2enr.set_bits(rcc::apb2enr::USART1EN.mask());
    uart.brr.write(usart::brr::BRR.val(16_000_000 / 115_200));
    uart.cr1.set_bits(usart::cr1::UE.mask() | usart::cr1::TE.mask());
}

fn main() {
    let _ = write as fn(&USART1, &[u8]);
    let _ = init as fn(&stm32l422::RCC, &USART1);
}
