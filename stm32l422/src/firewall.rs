//! Firewall protecting a code segment and two data segments.
//!
//! Segment addresses and lengths are in bytes, but the low bits below each field are
//! not implemented: code and non-volatile data segments have 256-byte granularity,
//! the volatile data segment 64-byte granularity.

use crate::field::Register;
use crate::register::Rw;

peripheral! {
    pub struct RegisterBlock: 0x20 {
        0x00 => pub cssa: Rw<u32>,
        0x04 => pub csl: Rw<u32>,
        0x08 => pub nvdssa: Rw<u32>,
        0x0C => pub nvdsl: Rw<u32>,
        0x10 => pub vdssa: Rw<u32>,
        0x14 => pub vdsl: Rw<u32>,
        0x18 => _reserved0: u32,
        0x1C => pub cr: Rw<u32>,
    }
}

fields! {
    /// Code segment start.
    cssa: u32 {
        ADD: 8..=23,
    }

    /// Code segment length.
    csl: u32 {
        LENG: 8..=21,
    }

    nvdssa: u32 {
        ADD: 8..=23,
    }

    nvdsl: u32 {
        LENG: 8..=21,
    }

    vdssa: u32 {
        ADD: 6..=15,
    }

    vdsl: u32 {
        LENG: 6..=15,
    }

    cr: u32 {
        /// Firewall pre-arm.
        FPA: 0,
        VDS: 1,
        VDE: 2,
    }
}

pub const REGISTERS: &[Register] = &[
    cssa::REGISTER,
    csl::REGISTER,
    nvdssa::REGISTER,
    nvdsl::REGISTER,
    vdssa::REGISTER,
    vdsl::REGISTER,
    cr::REGISTER,
];
