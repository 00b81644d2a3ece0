//! Direct memory access controllers (DMA1, DMA2).

use seq_macro::seq;

use crate::field::Register;
use crate::register::{Ro, Rw};

peripheral! {
    /// One channel of a DMA controller.
    pub struct Channel: 0x14 {
        0x00 => pub ccr: Rw<u32>,
        0x04 => pub cndtr: Rw<u32>,
        0x08 => pub cpar: Rw<u32>,
        0x0C => pub cmar: Rw<u32>,
        0x10 => _reserved0: u32,
    }

    pub struct RegisterBlock: 0xAC {
        0x00 => pub isr: Ro<u32>,
        /// Writing 1 clears the matching `ISR` flag.
        0x04 => pub ifcr: Rw<u32>,
        /// Channels 1 to 7 at `ch[0]` to `ch[6]`.
        0x08 => pub ch: [Channel; 7],
        0x94 => _reserved0: [u32; 5],
        0xA8 => pub cselr: Rw<u32>,
    }
}

seq!(N in 1..=7 {
    fields! {
        isr: u32 {
            #(
                GIF~N: ((N - 1) * 4),
                TCIF~N: ((N - 1) * 4 + 1),
                HTIF~N: ((N - 1) * 4 + 2),
                TEIF~N: ((N - 1) * 4 + 3),
            )*
        }

        ifcr: u32 {
            #(
                CGIF~N: ((N - 1) * 4),
                CTCIF~N: ((N - 1) * 4 + 1),
                CHTIF~N: ((N - 1) * 4 + 2),
                CTEIF~N: ((N - 1) * 4 + 3),
            )*
        }
    }
});

fields! {
    /// Channel configuration. Most fields are writable only while `EN` is clear.
    ccr: u32 {
        EN: 0,
        TCIE: 1,
        HTIE: 2,
        TEIE: 3,
        /// 0: read from peripheral, 1: read from memory.
        DIR: 4,
        CIRC: 5,
        PINC: 6,
        MINC: 7,
        PSIZE: 8..=9 {
            BITS_8 = 0,
            BITS_16 = 1,
            BITS_32 = 2,
        },
        MSIZE: 10..=11 {
            BITS_8 = 0,
            BITS_16 = 1,
            BITS_32 = 2,
        },
        PL: 12..=13 {
            LOW = 0,
            MEDIUM = 1,
            HIGH = 2,
            VERY_HIGH = 3,
        },
        MEM2MEM: 14,
    }

    /// Number of data items left to transfer.
    cndtr: u32 {
        NDT: 0..=15,
    }

    cpar: u32 {
        PA: 0..=31,
    }

    cmar: u32 {
        MA: 0..=31,
    }

    /// Request mapping, one selector per channel.
    cselr: u32 {
        C1S: 0..=3,
        C2S: 4..=7,
        C3S: 8..=11,
        C4S: 12..=15,
        C5S: 16..=19,
        C6S: 20..=23,
        C7S: 24..=27,
    }
}

pub const REGISTERS: &[Register] = &[
    isr::REGISTER,
    ifcr::REGISTER,
    ccr::REGISTER,
    cndtr::REGISTER,
    cpar::REGISTER,
    cmar::REGISTER,
    cselr::REGISTER,
];
