use stm32l422::{adc, gpio, rcc, tim, usart, Register, DEVICE};

fn registers() -> impl Iterator<Item = (&'static str, &'static Register)> {
    DEVICE
        .iter()
        .flat_map(|(peripheral, registers)| registers.iter().map(move |r| (*peripheral, r)))
}

#[test]
fn masks_follow_position_and_width() {
    for (peripheral, register) in registers() {
        for (name, field) in register.fields {
            let expected = (((1u64 << field.width()) - 1) << field.pos()) as u32;
            assert_eq!(field.mask(), expected, "{peripheral}_{}.{name}", register.name);
            assert_eq!(field.mask() >> field.pos(), field.max());

            let bits = (0..field.width()).fold(0, |bits, n| bits | field.sub(n));
            assert_eq!(bits, field.mask(), "{peripheral}_{}.{name}", register.name);
        }
    }
}

#[test]
fn fields_are_disjoint_and_fit_the_register() {
    for (peripheral, register) in registers() {
        let mut used = 0u32;
        for (name, field) in register.fields {
            assert_eq!(
                used & field.mask(),
                0,
                "{peripheral}_{}.{name} overlaps an earlier field",
                register.name
            );
            used |= field.mask();
        }
        assert_eq!(used, register.used_bits());
        if register.width < 32 {
            assert_eq!(
                used >> register.width,
                0,
                "{peripheral}_{} is wider than {} bits",
                register.name,
                register.width
            );
        }
    }
}

#[test]
fn field_names_are_unique_per_register() {
    for (peripheral, register) in registers() {
        for (i, (name, _)) in register.fields.iter().enumerate() {
            assert!(
                register.fields[i + 1..].iter().all(|(other, _)| other != name),
                "{peripheral}_{}.{name} is declared twice",
                register.name
            );
        }
    }
}

#[test]
fn aliases_match_their_replacement() {
    let mut count = 0;
    for (peripheral, register) in registers() {
        for alias in register.aliases {
            let canonical = register.field(alias.canonical);
            assert_eq!(
                canonical,
                Some(alias.field),
                "{peripheral}_{}.{} -> {}",
                register.name,
                alias.name,
                alias.canonical
            );
            assert!(register.field(alias.name).is_none());
            count += 1;
        }
    }
    assert!(count > 0);
}

#[test]
#[allow(deprecated)]
fn legacy_names_resolve() {
    assert_eq!(gpio::moder::MODER5, gpio::moder::MODE5);
    assert_eq!(gpio::afrh::AFRH0, gpio::afrh::AFSEL8);
    assert_eq!(gpio::bsrr::BR_3, gpio::bsrr::BR3);
    assert_eq!(rcc::cfgr::MCO_PRE, rcc::cfgr::MCOPRE);
    assert_eq!(usart::icr::NECF, usart::icr::NCF);
    assert_eq!(adc::common::csr::ADRDY_EOC_MST, adc::common::csr::EOC_MST);
}

#[test]
fn known_masks() {
    assert_eq!(adc::cr::ADEN.mask(), 0x0000_0001);
    assert_eq!(adc::cr::ADCAL.mask(), 0x8000_0000);
    assert_eq!(adc::cfgr::RES.mask(), 0x0000_0018);
    assert_eq!(adc::cfgr::RES.sub(1), 0x0000_0010);
    assert_eq!(gpio::moder::MODE15.mask(), 0xC000_0000);
    assert_eq!(gpio::afrh::AFSEL15.mask(), 0xF000_0000);
    assert_eq!(gpio::bsrr::BR0.mask(), 0x0001_0000);
    assert_eq!(tim::smcr::SMS_3.mask(), 0x0001_0000);
}

#[test]
fn lookup_by_name() {
    assert_eq!(adc::cr::REGISTER.field("ADCAL"), Some(adc::cr::ADCAL));
    assert_eq!(adc::cr::REGISTER.field("ADCALX"), None);
    assert_eq!(usart::rdr::REGISTER.width, 16);
    assert_eq!(gpio::REGISTERS.len(), 11);
}
