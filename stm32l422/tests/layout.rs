use core::mem::size_of;

use memoffset::offset_of;
use stm32l422::memory_map::{self, dma_channel_base};
use stm32l422::{adc, dma, gpio, pwr, rcc, tamp, tim, usart, usb, DMA1, DMA2, RTC, TAMP};

#[test]
fn gpio_offsets() {
    assert_eq!(offset_of!(gpio::RegisterBlock, moder), 0x00);
    assert_eq!(offset_of!(gpio::RegisterBlock, otyper), 0x04);
    assert_eq!(offset_of!(gpio::RegisterBlock, idr), 0x10);
    assert_eq!(offset_of!(gpio::RegisterBlock, bsrr), 0x18);
    assert_eq!(offset_of!(gpio::RegisterBlock, afr), 0x20);
    assert_eq!(offset_of!(gpio::RegisterBlock, afr) + 4, 0x24);
    assert_eq!(offset_of!(gpio::RegisterBlock, brr), 0x28);
    assert_eq!(size_of::<gpio::RegisterBlock>(), gpio::RegisterBlock::SIZE);
}

#[test]
fn rcc_offsets() {
    assert_eq!(offset_of!(rcc::RegisterBlock, cfgr), 0x08);
    assert_eq!(offset_of!(rcc::RegisterBlock, ahb2enr), 0x4C);
    assert_eq!(offset_of!(rcc::RegisterBlock, apb1enr1), 0x58);
    assert_eq!(offset_of!(rcc::RegisterBlock, ccipr), 0x88);
    assert_eq!(offset_of!(rcc::RegisterBlock, crrcr), 0x98);
    assert_eq!(rcc::RegisterBlock::SIZE, 0x9C);
}

#[test]
fn adc_offsets() {
    assert_eq!(offset_of!(adc::RegisterBlock, smpr), 0x14);
    assert_eq!(offset_of!(adc::RegisterBlock, sqr), 0x30);
    assert_eq!(offset_of!(adc::RegisterBlock, dr), 0x40);
    assert_eq!(offset_of!(adc::RegisterBlock, jdr), 0x80);
    assert_eq!(offset_of!(adc::RegisterBlock, calfact), 0xB4);
    assert_eq!(offset_of!(adc::common::RegisterBlock, ccr), 0x08);
}

#[test]
fn dma_channels() {
    assert_eq!(size_of::<dma::Channel>(), 0x14);
    assert_eq!(offset_of!(dma::RegisterBlock, ch), 0x08);
    assert_eq!(offset_of!(dma::RegisterBlock, cselr), 0xA8);

    for n in 1..=7 {
        let ch = offset_of!(dma::RegisterBlock, ch) + (n - 1) * size_of::<dma::Channel>();
        assert_eq!(DMA1::BASE + ch, dma_channel_base(memory_map::DMA1_BASE, n));
        assert_eq!(DMA2::BASE + ch, dma_channel_base(memory_map::DMA2_BASE, n));
    }
    assert_eq!(memory_map::DMA1_CHANNEL1_BASE, 0x4002_0008);
    assert_eq!(memory_map::DMA2_CHANNEL7_BASE, 0x4002_0480);
    assert_eq!(memory_map::DMA1_CSELR_BASE, 0x4002_00A8);
}

#[test]
#[should_panic]
fn dma_channel_zero() {
    let n = std::hint::black_box(0);
    let _ = dma_channel_base(memory_map::DMA1_BASE, n);
}

#[test]
fn sixteen_bit_registers_keep_word_stride() {
    assert_eq!(offset_of!(usart::RegisterBlock, gtpr), 0x10);
    assert_eq!(offset_of!(usart::RegisterBlock, rtor), 0x14);
    assert_eq!(offset_of!(usart::RegisterBlock, rdr), 0x24);
    assert_eq!(offset_of!(usart::RegisterBlock, tdr), 0x28);

    assert_eq!(size_of::<usb::Endpoint>(), 4);
    assert_eq!(offset_of!(usb::RegisterBlock, cntr), 0x40);
    assert_eq!(offset_of!(usb::RegisterBlock, bcdr), 0x58);
}

#[test]
fn pwr_port_pulls() {
    assert_eq!(size_of::<pwr::PortPull>(), 8);
    assert_eq!(offset_of!(pwr::RegisterBlock, port), 0x20);
    // PUCRH follows the unimplemented ports E to G.
    assert_eq!(offset_of!(pwr::RegisterBlock, pucrh), 0x58);
}

#[test]
fn backup_registers() {
    assert_eq!(offset_of!(tamp::RegisterBlock, bkpr), 0x100);
    assert_eq!(tamp::BKPR_COUNT, 32);
    assert_eq!(TAMP::BASE + 0x100, 0x4000_3500);
    assert!(RTC::BASE + size_of::<stm32l422::rtc::RegisterBlock>() <= TAMP::BASE);
}

#[test]
fn timer_capture_compare() {
    assert_eq!(offset_of!(tim::RegisterBlock, ccr), 0x34);
    assert_eq!(offset_of!(tim::RegisterBlock, bdtr), 0x44);
    assert_eq!(offset_of!(tim::RegisterBlock, ccr5), 0x58);
    assert_eq!(tim::RegisterBlock::SIZE, 0x68);
}
