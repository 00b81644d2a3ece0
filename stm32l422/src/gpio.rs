//! General-purpose I/O ports (GPIOA-D, GPIOH).

use seq_macro::seq;

use crate::field::Register;
use crate::register::{Ro, Rw, Wo};

peripheral! {
    /// GPIO port.
    pub struct RegisterBlock: 0x2C {
        0x00 => pub moder: Rw<u32>,
        0x04 => pub otyper: Rw<u32>,
        0x08 => pub ospeedr: Rw<u32>,
        0x0C => pub pupdr: Rw<u32>,
        0x10 => pub idr: Ro<u32>,
        0x14 => pub odr: Rw<u32>,
        /// Reads as zero.
        0x18 => pub bsrr: Wo<u32>,
        0x1C => pub lckr: Rw<u32>,
        /// Alternate function selection: `afr[0]` covers pins 0-7 ([`afrl`]), `afr[1]` pins
        /// 8-15 ([`afrh`]).
        0x20 => pub afr: [Rw<u32>; 2],
        0x28 => pub brr: Wo<u32>,
    }
}

/// Encodings of the `MODEn` fields.
pub mod mode {
    pub const INPUT: u32 = 0b00;
    pub const OUTPUT: u32 = 0b01;
    pub const ALTERNATE: u32 = 0b10;
    /// Reset state of most pins.
    pub const ANALOG: u32 = 0b11;
}

/// Encodings of the `OTn` fields.
pub mod otype {
    pub const PUSH_PULL: u32 = 0;
    pub const OPEN_DRAIN: u32 = 1;
}

/// Encodings of the `OSPEEDn` fields.
pub mod ospeed {
    pub const LOW: u32 = 0b00;
    pub const MEDIUM: u32 = 0b01;
    pub const HIGH: u32 = 0b10;
    pub const VERY_HIGH: u32 = 0b11;
}

/// Encodings of the `PUPDn` fields.
pub mod pupd {
    pub const NONE: u32 = 0b00;
    pub const PULL_UP: u32 = 0b01;
    pub const PULL_DOWN: u32 = 0b10;
}

seq!(N in 0..16 {
    fields! {
        /// Port mode.
        moder: u32 {
            #( MODE~N: (N * 2)..=(N * 2 + 1), )*
        }
        @legacy {
            #( MODER~N => MODE~N, )*
        }

        /// Output type.
        otyper: u32 {
            #( OT~N: N, )*
        }
        @legacy {
            #( OT_~N => OT~N, )*
        }

        /// Output speed.
        ospeedr: u32 {
            #( OSPEED~N: (N * 2)..=(N * 2 + 1), )*
        }
        @legacy {
            #( OSPEEDR~N => OSPEED~N, )*
        }

        /// Pull-up/pull-down.
        pupdr: u32 {
            #( PUPD~N: (N * 2)..=(N * 2 + 1), )*
        }
        @legacy {
            #( PUPDR~N => PUPD~N, )*
        }

        /// Input data.
        idr: u32 {
            #( ID~N: N, )*
        }
        @legacy {
            #( IDR_~N => ID~N, )*
        }

        /// Output data.
        odr: u32 {
            #( OD~N: N, )*
        }
        @legacy {
            #( ODR_~N => OD~N, )*
        }

        /// Bit set/reset. A pin written in both halves is set.
        bsrr: u32 {
            #( BS~N: N, )*
            #( BR~N: (N + 16), )*
        }
        @legacy {
            #( BS_~N => BS~N, )*
            #( BR_~N => BR~N, )*
        }

        /// Configuration lock. The lock key must be written 1, 0, 1 with the same
        /// `LCKn` bits, then read twice.
        lckr: u32 {
            #( LCK~N: N, )*
            LCKK: 16,
        }

        /// Bit reset.
        brr: u32 {
            #( BR~N: N, )*
        }
        @legacy {
            #( BR_~N => BR~N, )*
        }
    }
});

seq!(N in 0..8 {
    fields! {
        /// Alternate function, pins 0-7.
        afrl: u32 {
            #( AFSEL~N: (N * 4)..=(N * 4 + 3), )*
        }
        @legacy {
            #( AFRL~N => AFSEL~N, )*
        }
    }
});

seq!(N in 8..16 {
    fields! {
        /// Alternate function, pins 8-15.
        afrh: u32 {
            #( AFSEL~N: ((N - 8) * 4)..=((N - 8) * 4 + 3), )*
        }
        @legacy {
            AFRH0 => AFSEL8,
            AFRH1 => AFSEL9,
            AFRH2 => AFSEL10,
            AFRH3 => AFSEL11,
            AFRH4 => AFSEL12,
            AFRH5 => AFSEL13,
            AFRH6 => AFSEL14,
            AFRH7 => AFSEL15,
        }
    }
});

pub const REGISTERS: &[Register] = &[
    moder::REGISTER,
    otyper::REGISTER,
    ospeedr::REGISTER,
    pupdr::REGISTER,
    idr::REGISTER,
    odr::REGISTER,
    bsrr::REGISTER,
    lckr::REGISTER,
    afrl::REGISTER,
    afrh::REGISTER,
    brr::REGISTER,
];
