use stm32l422::{crc, gpio, tim, usart};

/// Backs a register block with host memory.
fn with_block<B, const N: usize>(words: &mut [u32; N], f: impl FnOnce(&B)) {
    assert_eq!(core::mem::size_of::<B>(), N * 4);
    let block = unsafe { &*(words.as_mut_ptr() as *const B) };
    f(block);
}

#[test]
fn field_read_modify_write() {
    let mut words = [0u32; 11];
    words[0] = 0xFFFF_FFFF;
    with_block(&mut words, |port: &gpio::RegisterBlock| {
        port.moder.modify_field(gpio::moder::MODE5, gpio::mode::OUTPUT);
        assert_eq!(port.moder.read_field(gpio::moder::MODE5), gpio::mode::OUTPUT);
        assert_eq!(port.moder.read_field(gpio::moder::MODE4), gpio::mode::ANALOG);

        port.afr[1].modify_field(gpio::afrh::AFSEL9, 7);
        port.odr.set_bits(gpio::odr::OD3.mask() | gpio::odr::OD4.mask());
        port.odr.clear_bits(gpio::odr::OD4.mask());
        assert!(port.odr.is_set(gpio::odr::OD3.mask()));
        assert!(!port.odr.is_set(gpio::odr::OD4.mask()));

        port.bsrr.write(gpio::bsrr::BS2.mask() | gpio::bsrr::BR6.mask());
        assert_eq!(port.idr.read_field(gpio::idr::ID0), 0);
    });
    assert_eq!(words[0], 0xFFFF_F7FF);
    assert_eq!(words[5], 0x0000_0008);
    assert_eq!(words[6], 0x0040_0004);
    assert_eq!(words[9], 0x0000_0070);
}

#[test]
fn narrow_registers() {
    let mut words = [0u32; 11];
    with_block(&mut words, |uart: &usart::RegisterBlock| {
        uart.gtpr.modify_field(usart::gtpr::GT, 0x12);
        uart.gtpr.modify_field(usart::gtpr::PSC, 0x34);
        assert_eq!(uart.gtpr.read(), 0x1234);
        uart.tdr.write(0x1FF);
        assert_eq!(uart.tdr.read_field(usart::tdr::TDR), 0x1FF);
    });
    assert_eq!(words[4], 0x0000_1234);
    assert_eq!(words[10], 0x0000_01FF);

    let mut words = [0u32; 6];
    with_block(&mut words, |unit: &crc::RegisterBlock| {
        unit.idr.write(0xA5);
        unit.init.write(0xFFFF_FFFF);
        unit.cr.modify_field(crc::cr::POLYSIZE, crc::cr::polysize::BITS_16);
    });
    assert_eq!(words[1] & 0xFF, 0xA5);
    assert_eq!(words[2], 0x0000_0008);
    assert_eq!(words[4], 0xFFFF_FFFF);
}

#[test]
fn split_output_compare_mode() {
    assert_eq!(tim::ocm::split(tim::ocm::PWM1), (0b110, 0));
    assert_eq!(tim::ocm::split(tim::ocm::COMBINED_PWM1), (0b100, 1));

    let mut words = [0u32; 26];
    with_block(&mut words, |timer: &tim::RegisterBlock| {
        let (low, high) = tim::ocm::split(tim::ocm::ASYMMETRIC_PWM2);
        timer.ccmr1.modify_field(tim::ccmr1_output::OC1M, low);
        timer.ccmr1.modify_field(tim::ccmr1_output::OC1M_3, high);
        timer.ccr[2].write(500);
    });
    assert_eq!(words[6], 0x0001_0070);
    assert_eq!(words[15], 500);
}
