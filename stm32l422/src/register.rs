//! Volatile register cells.
//!
//! Every register field of a register block is one of [`Rw`], [`Ro`] or [`Wo`]. All accesses
//! are volatile, so the compiler neither elides nor reorders them relative to each other.
//! The cell type also records the access discipline documented for the register: a
//! read-only register has no `write`, and a write-only register (one that reads back as
//! zero) has no `read`.
//!
//! ```compile_fail
//! # let p = unsafe { stm32l422::Peripherals::steal() };
//! // `IDR` is read-only.
//! p.GPIOA.idr.write(0);
//! ```
//!
//! ```compile_fail
//! # let p = unsafe { stm32l422::Peripherals::steal() };
//! // `IWDG_KR` is write-only.
//! let _ = p.IWDG.kr.read();
//! ```

use vcell::VolatileCell;

use crate::field::Field;

/// Read-write register.
#[repr(transparent)]
pub struct Rw<T: Copy> {
    cell: VolatileCell<T>,
}

/// Read-only register.
#[repr(transparent)]
pub struct Ro<T: Copy> {
    cell: VolatileCell<T>,
}

/// Write-only register.
#[repr(transparent)]
pub struct Wo<T: Copy> {
    cell: VolatileCell<T>,
}

impl<T: Copy> Rw<T> {
    /// Performs a volatile read.
    #[inline(always)]
    pub fn read(&self) -> T {
        self.cell.get()
    }

    /// Performs a volatile write.
    #[inline(always)]
    pub fn write(&self, value: T) {
        self.cell.set(value)
    }

    /// Reads the register, applies `f` and writes the result back.
    ///
    /// The sequence is not atomic. Callers sharing the register with an interrupt handler
    /// must run it inside a critical section.
    #[inline(always)]
    pub fn modify(&self, f: impl FnOnce(T) -> T) {
        self.write(f(self.read()));
    }

    /// Returns a raw pointer to the register.
    #[inline(always)]
    pub fn as_ptr(&self) -> *mut T {
        self.cell.as_ptr()
    }
}

impl<T: Copy> Ro<T> {
    /// Performs a volatile read.
    #[inline(always)]
    pub fn read(&self) -> T {
        self.cell.get()
    }

    /// Returns a raw pointer to the register.
    #[inline(always)]
    pub fn as_ptr(&self) -> *mut T {
        self.cell.as_ptr()
    }
}

impl<T: Copy> Wo<T> {
    /// Performs a volatile write.
    #[inline(always)]
    pub fn write(&self, value: T) {
        self.cell.set(value)
    }

    /// Returns a raw pointer to the register.
    #[inline(always)]
    pub fn as_ptr(&self) -> *mut T {
        self.cell.as_ptr()
    }
}

// Field helpers for each register width. Masks are `u32`; the field tables guarantee that
// a narrower register's masks fit its width, so the truncating casts drop only zeros.
macro_rules! impl_field_access {
    ($($ty:ty),*) => {$(
        impl Rw<$ty> {
            /// Reads one field, shifted down to bit 0.
            #[inline(always)]
            pub fn read_field(&self, field: Field) -> u32 {
                field.get(self.read() as u32)
            }

            /// Replaces one field with `value`, leaving the other bits untouched.
            #[inline(always)]
            pub fn modify_field(&self, field: Field, value: u32) {
                self.modify(|bits| field.set(bits as u32, value) as $ty);
            }

            /// Returns whether every bit of `mask` is set.
            #[inline(always)]
            pub fn is_set(&self, mask: u32) -> bool {
                self.read() as u32 & mask == mask
            }

            /// Sets the bits of `mask` with a read-modify-write.
            #[inline(always)]
            pub fn set_bits(&self, mask: u32) {
                self.modify(|bits| bits | mask as $ty);
            }

            /// Clears the bits of `mask` with a read-modify-write.
            #[inline(always)]
            pub fn clear_bits(&self, mask: u32) {
                self.modify(|bits| bits & !(mask as $ty));
            }
        }

        impl Ro<$ty> {
            /// Reads one field, shifted down to bit 0.
            #[inline(always)]
            pub fn read_field(&self, field: Field) -> u32 {
                field.get(self.read() as u32)
            }

            /// Returns whether every bit of `mask` is set.
            #[inline(always)]
            pub fn is_set(&self, mask: u32) -> bool {
                self.read() as u32 & mask == mask
            }
        }
    )*};
}
impl_field_access!(u8, u16, u32);
