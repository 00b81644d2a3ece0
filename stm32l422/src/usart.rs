//! Universal synchronous/asynchronous receiver transmitters (USART1-3) and the low-power
//! UART (LPUART1).
//!
//! LPUART1 shares the layout. It has no synchronous, smartcard, IrDA, LIN or auto baud
//! rate features, and its `BRR` is 20 bits wide (see [`lpuart_brr`]).

use crate::field::Register;
use crate::register::{Ro, Rw, Wo};

peripheral! {
    pub struct RegisterBlock: 0x2C {
        0x00 => pub cr1: Rw<u32>,
        0x04 => pub cr2: Rw<u32>,
        0x08 => pub cr3: Rw<u32>,
        0x0C => pub brr: Rw<u32>,
        0x10 => pub gtpr: Rw<u16>,
        0x12 => _reserved0: u16,
        0x14 => pub rtor: Rw<u32>,
        0x18 => pub rqr: Wo<u16>,
        0x1A => _reserved1: u16,
        0x1C => pub isr: Ro<u32>,
        0x20 => pub icr: Wo<u32>,
        0x24 => pub rdr: Ro<u16>,
        0x26 => _reserved2: u16,
        0x28 => pub tdr: Rw<u16>,
        0x2A => _reserved3: u16,
    }
}

fields! {
    cr1: u32 {
        UE: 0,
        UESM: 1,
        RE: 2,
        TE: 3,
        IDLEIE: 4,
        RXNEIE: 5,
        TCIE: 6,
        TXEIE: 7,
        PEIE: 8,
        /// Parity: 0 even, 1 odd.
        PS: 9,
        PCE: 10,
        WAKE: 11,
        /// Word length, low bit. `M1:M0` is 00 for 8 data bits, 01 for 9 and 10 for 7.
        M0: 12,
        MME: 13,
        CMIE: 14,
        OVER8: 15,
        DEDT: 16..=20,
        DEAT: 21..=25,
        RTOIE: 26,
        EOBIE: 27,
        /// Word length, high bit.
        M1: 28,
    }

    cr2: u32 {
        ADDM7: 4,
        LBDL: 5,
        LBDIE: 6,
        LBCL: 8,
        CPHA: 9,
        CPOL: 10,
        CLKEN: 11,
        STOP: 12..=13 {
            BITS_1 = 0,
            BITS_0_5 = 1,
            BITS_2 = 2,
            BITS_1_5 = 3,
        },
        LINEN: 14,
        SWAP: 15,
        RXINV: 16,
        TXINV: 17,
        DATAINV: 18,
        MSBFIRST: 19,
        ABREN: 20,
        ABRMODE: 21..=22 {
            START_BIT = 0,
            FALLING_EDGE = 1,
            FRAME_7F = 2,
            FRAME_55 = 3,
        },
        RTOEN: 23,
        /// Node address for `CR1.MME` mute mode and the character match interrupt.
        ADD: 24..=31,
    }

    cr3: u32 {
        EIE: 0,
        IREN: 1,
        IRLP: 2,
        HDSEL: 3,
        NACK: 4,
        SCEN: 5,
        DMAR: 6,
        DMAT: 7,
        RTSE: 8,
        CTSE: 9,
        CTSIE: 10,
        ONEBIT: 11,
        OVRDIS: 12,
        DDRE: 13,
        DEM: 14,
        DEP: 15,
        SCARCNT: 17..=19,
        WUS: 20..=21 {
            ADDRESS = 0,
            START_BIT = 2,
            RXNE = 3,
        },
        WUFIE: 22,
        UCESM: 23,
        TCBGTIE: 24,
    }

    /// Baud rate of USART1-3. With `OVER8` set, bit 3 must be zero and bits 0-2 hold the
    /// fraction shifted right by one.
    brr: u32 {
        BRR: 0..=15,
    }

    /// Baud rate of LPUART1: `256 * f_ck / baud`, at least `0x300`.
    lpuart_brr: u32 {
        BRR: 0..=19,
    }

    gtpr: u16 {
        PSC: 0..=7,
        GT: 8..=15,
    }

    rtor: u32 {
        RTO: 0..=23,
        BLEN: 24..=31,
    }

    rqr: u16 {
        ABRRQ: 0,
        SBKRQ: 1,
        MMRQ: 2,
        RXFRQ: 3,
        TXFRQ: 4,
    }

    isr: u32 {
        PE: 0,
        FE: 1,
        NE: 2,
        ORE: 3,
        IDLE: 4,
        RXNE: 5,
        TC: 6,
        TXE: 7,
        LBDF: 8,
        CTSIF: 9,
        CTS: 10,
        RTOF: 11,
        EOBF: 12,
        ABRE: 14,
        ABRF: 15,
        BUSY: 16,
        CMF: 17,
        SBKF: 18,
        RWU: 19,
        WUF: 20,
        TEACK: 21,
        REACK: 22,
        TCBGT: 25,
    }

    icr: u32 {
        PECF: 0,
        FECF: 1,
        NCF: 2,
        ORECF: 3,
        IDLECF: 4,
        TCCF: 6,
        TCBGTCF: 7,
        LBDCF: 8,
        CTSCF: 9,
        RTOCF: 11,
        EOBCF: 12,
        CMCF: 17,
        WUCF: 20,
    }
    @legacy {
        NECF => NCF,
    }

    rdr: u16 {
        RDR: 0..=8,
    }

    tdr: u16 {
        TDR: 0..=8,
    }
}

pub const REGISTERS: &[Register] = &[
    cr1::REGISTER,
    cr2::REGISTER,
    cr3::REGISTER,
    brr::REGISTER,
    lpuart_brr::REGISTER,
    gtpr::REGISTER,
    rtor::REGISTER,
    rqr::REGISTER,
    isr::REGISTER,
    icr::REGISTER,
    rdr::REGISTER,
    tdr::REGISTER,
];
