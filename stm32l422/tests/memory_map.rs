use stm32l422::bitband;
use stm32l422::memory_map::{self, Region, REGIONS};
use stm32l422::{DBGMCU, GPIOA, INSTANCES, QUADSPI, RCC, USART1};

#[test]
fn regions_are_disjoint() {
    for (i, (name, region)) in REGIONS.iter().enumerate() {
        for (other_name, other) in &REGIONS[i + 1..] {
            assert!(!region.overlaps(other), "{name} overlaps {other_name}");
        }
    }
}

#[test]
fn power_of_two_regions_are_aligned() {
    for (name, region) in REGIONS {
        if region.size.is_power_of_two() {
            assert_eq!(region.base % region.size, 0, "{name}");
        }
    }
}

#[test]
fn region_bounds() {
    let region = Region::new(0x100, 0x10);
    assert!(region.contains(0x100));
    assert!(region.contains(0x10F));
    assert!(!region.contains(0x110));
    assert!(!region.overlaps(&Region::new(0x110, 4)));
    assert!(region.overlaps(&Region::new(0x10C, 8)));
}

#[test]
fn instances_do_not_overlap() {
    let mut instances = INSTANCES.to_vec();
    instances.sort_by_key(|&(_, base, _)| base);
    for pair in instances.windows(2) {
        let (name, base, size) = pair[0];
        let (next, next_base, _) = pair[1];
        assert!(base + size <= next_base, "{name} runs into {next}");
    }
}

#[test]
fn instances_live_in_peripheral_space() {
    for &(name, base, size) in INSTANCES {
        assert_eq!(base % 4, 0, "{name}");
        let region = match name {
            "DBGMCU" => continue,
            "QUADSPI" => memory_map::QSPI_R,
            _ => memory_map::PERIPH,
        };
        assert!(region.contains(base), "{name}");
        assert!(base + size <= region.end(), "{name}");
    }
}

#[test]
fn known_bases() {
    assert_eq!(GPIOA::BASE, 0x4800_0000);
    assert_eq!(RCC::BASE, 0x4002_1000);
    assert_eq!(USART1::BASE, 0x4001_3800);
    assert_eq!(QUADSPI::BASE, 0xA000_1000);
    assert_eq!(DBGMCU::BASE, 0xE004_2000);
    assert_eq!(GPIOA::ptr() as usize, GPIOA::BASE);
    assert_eq!(memory_map::ADC12_COMMON_BASE, 0x5004_0300);
}

#[test]
fn bit_band_targets_stay_in_alias_regions() {
    let last_word = memory_map::PERIPH_BASE + bitband::PERIPH_BB_SPAN - 4;
    let alias = bitband::periph_alias(last_word, 31).unwrap();
    assert!(memory_map::PERIPH_BB.contains(alias));
    assert_eq!(bitband::periph_alias(last_word + 4, 0), None);

    let last_word = memory_map::SRAM1_BASE + memory_map::SRAM1_SIZE - 4;
    let alias = bitband::sram1_alias(last_word, 31).unwrap();
    assert!(memory_map::SRAM1_BB.contains(alias));
}

#[test]
fn bit_band_pointer_lookup() {
    let moder = GPIOA::BASE as *const u32;
    assert_eq!(bitband::alias_of(moder, 0), None);

    let rcc_cr = RCC::BASE as *const u32;
    assert_eq!(
        bitband::alias_of(rcc_cr, 0),
        Some((memory_map::PERIPH_BB_BASE + 0x2_1000 * 32) as *mut u32)
    );

    let syscfg = memory_map::SYSCFG_BASE as *const u32;
    assert_eq!(
        bitband::alias_of(syscfg, 2),
        Some((memory_map::PERIPH_BB_BASE + 0x10000 * 32 + 8) as *mut u32)
    );
}
