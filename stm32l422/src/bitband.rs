//! Bit-band aliases.
//!
//! The Cortex-M4 maps every bit of the first megabyte of SRAM1 and of the peripheral window
//! to a word of an alias region. Writing 0 or 1 to the alias word clears or sets that one
//! bit in a single bus transaction, with no read-modify-write.
//!
//! `alias = alias_base + (addr - region_base) * 32 + bit * 4`

use core::ptr;

use crate::memory_map::{PERIPH_BASE, PERIPH_BB_BASE, SRAM1_BASE, SRAM1_BB_BASE, SRAM1_SIZE};

/// Size of the bit-banded part of the peripheral window.
pub const PERIPH_BB_SPAN: usize = 0x0010_0000;

/// Alias word of bit `bit` of the peripheral word at `addr`.
///
/// Returns `None` if `addr` is outside the bit-banded peripheral megabyte or `bit` is not
/// below 32.
pub const fn periph_alias(addr: usize, bit: u8) -> Option<usize> {
    alias(addr, bit, PERIPH_BASE, PERIPH_BB_SPAN, PERIPH_BB_BASE)
}

/// Alias word of bit `bit` of the SRAM1 word at `addr`.
pub const fn sram1_alias(addr: usize, bit: u8) -> Option<usize> {
    alias(addr, bit, SRAM1_BASE, SRAM1_SIZE, SRAM1_BB_BASE)
}

const fn alias(addr: usize, bit: u8, base: usize, span: usize, alias_base: usize) -> Option<usize> {
    if addr < base || addr >= base + span || bit >= 32 {
        return None;
    }
    Some(alias_base + (addr - base) * 32 + bit as usize * 4)
}

/// Alias word for a register pointer, in whichever region holds it.
pub fn alias_of<T>(register: *const T, bit: u8) -> Option<*mut u32> {
    let addr = register as usize;
    periph_alias(addr, bit)
        .or_else(|| sram1_alias(addr, bit))
        .map(|alias| alias as *mut u32)
}

/// Sets one bit of a bit-banded register.
///
/// Returns `false`, without writing, if the register is not bit-banded.
///
/// # Safety
///
/// `register` must be a valid register or SRAM1 word on the device.
pub unsafe fn set<T>(register: *const T, bit: u8) -> bool {
    write(register, bit, true)
}

/// Clears one bit of a bit-banded register.
///
/// # Safety
///
/// As for [`set`].
pub unsafe fn clear<T>(register: *const T, bit: u8) -> bool {
    write(register, bit, false)
}

/// Writes one bit of a bit-banded register.
///
/// # Safety
///
/// As for [`set`].
pub unsafe fn write<T>(register: *const T, bit: u8, value: bool) -> bool {
    match alias_of(register, bit) {
        Some(alias) => {
            ptr::write_volatile(alias, value as u32);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peripheral_alias() {
        // GPIOA sits on AHB2, outside the bit-banded megabyte.
        assert_eq!(periph_alias(0x4800_0000, 0), None);
        // TIM2_CR1 CEN.
        assert_eq!(periph_alias(0x4000_0000, 0), Some(0x4200_0000));
        // SYSCFG_SCSR SRAM2ER.
        assert_eq!(periph_alias(0x4001_0018, 0), Some(0x4220_0300));
        assert_eq!(periph_alias(0x4000_0000, 31), Some(0x4200_007C));
        assert_eq!(periph_alias(0x4000_0000, 32), None);
    }

    #[test]
    fn sram1_bounds() {
        assert_eq!(sram1_alias(SRAM1_BASE, 1), Some(SRAM1_BB_BASE + 4));
        assert_eq!(sram1_alias(SRAM1_BASE + SRAM1_SIZE, 0), None);
        assert_eq!(sram1_alias(SRAM1_BASE - 4, 0), None);
    }
}
