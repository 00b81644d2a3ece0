/// Declares `#[repr(C)]` register blocks with the documented offset of every field.
///
/// Each offset and the total size are checked at compile time, so a missing or extra
/// field fails the build instead of shifting every register after it.
macro_rules! peripheral {
    ($(
        $(#[$block_attr:meta])*
        pub struct $block:ident: $size:literal {
            $(
                $(#[$attr:meta])*
                $offset:literal => $vis:vis $name:ident: $ty:ty
            ),*
            $(,)?
        }
    )*) => {$(
        $(#[$block_attr])*
        #[repr(C)]
        pub struct $block {
            $(
                $(#[$attr])*
                #[doc = concat!("\n\nOffset: `", stringify!($offset), "`")]
                $vis $name: $ty,
            )*
        }

        const _: () = {
            assert!(::core::mem::size_of::<$block>() == $size);
            $(assert!(::memoffset::offset_of!($block, $name) == $offset);)*
        };

        impl $block {
            /// Size of the register block in bytes.
            pub const SIZE: usize = $size;
        }
    )*};
}

/// Declares one descriptor module per register.
///
/// A field is either a single bit (`NAME: 7`) or an inclusive bit range
/// (`NAME: 4..=6`). A range may be followed by a block of named encodings, which become
/// unshifted `u32` constants in a module named after the field. An optional `@legacy`
/// block after the register declares deprecated names for renamed fields.
macro_rules! fields {
    ($(
        $(#[$reg_attr:meta])*
        $reg:ident: $width:ident {
            $(
                $(#[$field_attr:meta])*
                $field:ident: $lo:tt $(..= $hi:tt)? $({
                    $($(#[$value_attr:meta])* $value:ident = $bits:expr),*
                    $(,)?
                })?
            ),*
            $(,)?
        }
        $(@legacy {
            $($alias:ident => $canonical:ident),*
            $(,)?
        })?
    )*) => {::paste::paste! {$(
        $(#[$reg_attr])*
        #[allow(non_upper_case_globals)]
        pub mod $reg {
            #[allow(unused_imports)]
            use $crate::field::{Alias, Field, Register};

            /// Register width in bits.
            pub const WIDTH: u32 = $width::BITS;

            $(
                $(#[$field_attr])*
                pub const $field: Field = fields!(@field $lo $(, $hi)?);

                $(
                    #[doc = concat!("Encodings of [`", stringify!($field), "`].")]
                    pub mod [<$field:lower>] {
                        $(
                            $(#[$value_attr])*
                            pub const $value: u32 = $bits;
                        )*
                    }
                )?
            )*

            $($(
                #[doc = concat!("Legacy name of [`", stringify!($canonical), "`].")]
                #[deprecated]
                pub const $alias: Field = $canonical;
            )*)?

            /// Every field of this register, in declaration order.
            pub const FIELDS: &[(&str, Field)] = &[$((stringify!($field), $field)),*];

            /// Legacy names of renamed fields.
            #[allow(deprecated)]
            pub const ALIASES: &[Alias] = &[$($(
                Alias {
                    name: stringify!($alias),
                    field: $alias,
                    canonical: stringify!($canonical),
                },
            )*)?];

            /// Descriptor of this register.
            pub const REGISTER: Register = Register {
                name: stringify!($reg),
                width: WIDTH,
                fields: FIELDS,
                aliases: ALIASES,
            };
        }
    )*}};

    (@field $lo:tt) => {
        $crate::field::Field::new($lo, 1)
    };
    (@field $lo:tt, $hi:tt) => {
        $crate::field::Field::span($lo, $hi)
    };
}
