//! Extended interrupt and event controller.
//!
//! Lines 0-31 are in the `*1` registers and lines 32-40 in the `*2` registers. Only the
//! configurable lines have trigger, software interrupt and pending bits; direct lines
//! (17 and 23-34, 39 and 40) have mask bits only.

use seq_macro::seq;

use crate::field::Register;
use crate::register::Rw;

peripheral! {
    pub struct RegisterBlock: 0x38 {
        0x00 => pub imr1: Rw<u32>,
        0x04 => pub emr1: Rw<u32>,
        0x08 => pub rtsr1: Rw<u32>,
        0x0C => pub ftsr1: Rw<u32>,
        0x10 => pub swier1: Rw<u32>,
        /// Writing 1 clears a pending bit.
        0x14 => pub pr1: Rw<u32>,
        0x18 => _reserved0: [u32; 2],
        0x20 => pub imr2: Rw<u32>,
        0x24 => pub emr2: Rw<u32>,
        0x28 => pub rtsr2: Rw<u32>,
        0x2C => pub ftsr2: Rw<u32>,
        0x30 => pub swier2: Rw<u32>,
        0x34 => pub pr2: Rw<u32>,
    }
}

seq!(N in 0..32 {
    fields! {
        imr1: u32 {
            #( IM~N: N, )*
        }

        emr1: u32 {
            #( EM~N: N, )*
        }
    }
});

// Configurable lines 0-16 and 18-22.
seq!(N in 0..=16 {
    fields! {
        rtsr1: u32 {
            #( RT~N: N, )*
            RT18: 18,
            RT19: 19,
            RT20: 20,
            RT21: 21,
            RT22: 22,
        }

        ftsr1: u32 {
            #( FT~N: N, )*
            FT18: 18,
            FT19: 19,
            FT20: 20,
            FT21: 21,
            FT22: 22,
        }

        swier1: u32 {
            #( SWI~N: N, )*
            SWI18: 18,
            SWI19: 19,
            SWI20: 20,
            SWI21: 21,
            SWI22: 22,
        }

        pr1: u32 {
            #( PIF~N: N, )*
            PIF18: 18,
            PIF19: 19,
            PIF20: 20,
            PIF21: 21,
            PIF22: 22,
        }
    }
});

seq!(N in 32..=40 {
    fields! {
        imr2: u32 {
            #( IM~N: (N - 32), )*
        }

        emr2: u32 {
            #( EM~N: (N - 32), )*
        }
    }
});

// Configurable lines 35-38, the PVM outputs.
seq!(N in 35..=38 {
    fields! {
        rtsr2: u32 {
            #( RT~N: (N - 32), )*
        }

        ftsr2: u32 {
            #( FT~N: (N - 32), )*
        }

        swier2: u32 {
            #( SWI~N: (N - 32), )*
        }

        pr2: u32 {
            #( PIF~N: (N - 32), )*
        }
    }
});

pub const REGISTERS: &[Register] = &[
    imr1::REGISTER,
    emr1::REGISTER,
    rtsr1::REGISTER,
    ftsr1::REGISTER,
    swier1::REGISTER,
    pr1::REGISTER,
    imr2::REGISTER,
    emr2::REGISTER,
    rtsr2::REGISTER,
    ftsr2::REGISTER,
    swier2::REGISTER,
    pr2::REGISTER,
];
