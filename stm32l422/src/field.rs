//! Bit-field descriptors.

/// A contiguous run of bits within a register.
///
/// The mask is always derived from the position and width, so a descriptor cannot disagree
/// with itself. Constructors run in const context; a zero width or a field extending past
/// bit 31 fails the build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    pos: u8,
    width: u8,
}

impl Field {
    /// A field of `width` bits starting at bit `pos`.
    pub const fn new(pos: u8, width: u8) -> Self {
        assert!(width > 0, "field width must be nonzero");
        assert!(pos as u32 + width as u32 <= 32, "field extends past bit 31");
        Self { pos, width }
    }

    /// The field covering bits `lo..=hi`.
    pub const fn span(lo: u8, hi: u8) -> Self {
        assert!(lo <= hi, "field range is reversed");
        Self::new(lo, hi - lo + 1)
    }

    /// Position of the least significant bit.
    pub const fn pos(self) -> u8 {
        self.pos
    }

    pub const fn width(self) -> u8 {
        self.width
    }

    /// Largest value the field can hold, unshifted.
    pub const fn max(self) -> u32 {
        u32::MAX >> (32 - self.width as u32)
    }

    /// Bits covered by the field, in register position.
    pub const fn mask(self) -> u32 {
        self.max() << self.pos
    }

    /// Single-bit mask of bit `n` of the field, counted from the field's least significant
    /// bit.
    ///
    /// # Panics
    ///
    /// If `n` is not below the field width. In const context this is a build error.
    pub const fn sub(self, n: u8) -> u32 {
        assert!(n < self.width, "bit index outside the field");
        1 << (self.pos + n)
    }

    /// Extracts the field from a register value.
    pub const fn get(self, bits: u32) -> u32 {
        (bits & self.mask()) >> self.pos
    }

    /// Replaces the field within `bits` with `value`. Bits of `value` above the field width
    /// are dropped.
    pub const fn set(self, bits: u32, value: u32) -> u32 {
        (bits & !self.mask()) | self.val(value)
    }

    /// Shifts `value` into the field's position.
    pub const fn val(self, value: u32) -> u32 {
        (value << self.pos) & self.mask()
    }

    /// Whether the two fields share any bit.
    pub const fn overlaps(self, other: Field) -> bool {
        self.mask() & other.mask() != 0
    }
}

/// A deprecated field name kept for source compatibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Alias {
    pub name: &'static str,
    pub field: Field,
    /// Name of the field that replaced it.
    pub canonical: &'static str,
}

/// Descriptor table of one register.
#[derive(Clone, Copy, Debug)]
pub struct Register {
    pub name: &'static str,
    /// Width in bits: 8, 16 or 32.
    pub width: u32,
    pub fields: &'static [(&'static str, Field)],
    pub aliases: &'static [Alias],
}

impl Register {
    /// Looks up a field by its current name.
    pub fn field(&self, name: &str) -> Option<Field> {
        self.fields
            .iter()
            .find(|(field_name, _)| *field_name == name)
            .map(|&(_, field)| field)
    }

    /// Union of every field mask.
    pub fn used_bits(&self) -> u32 {
        self.fields.iter().fold(0, |bits, (_, field)| bits | field.mask())
    }
}

#[cfg(test)]
mod tests {
    use super::Field;

    #[test]
    fn masks() {
        assert_eq!(Field::new(0, 1).mask(), 0x0000_0001);
        assert_eq!(Field::new(31, 1).mask(), 0x8000_0000);
        assert_eq!(Field::span(4, 7).mask(), 0x0000_00F0);
        assert_eq!(Field::new(0, 32).mask(), 0xFFFF_FFFF);
    }

    #[test]
    fn sub_bits() {
        let field = Field::span(4, 6);
        assert_eq!(field.sub(0), 0x10);
        assert_eq!(field.sub(1), 0x20);
        assert_eq!(field.sub(2), 0x40);
        assert_eq!(field.sub(0) | field.sub(1) | field.sub(2), field.mask());
    }

    #[test]
    #[should_panic]
    fn sub_out_of_range() {
        Field::span(4, 6).sub(3);
    }

    #[test]
    fn get_and_set() {
        let field = Field::span(8, 11);
        assert_eq!(field.get(0x0000_0A00), 0xA);
        assert_eq!(field.set(0xFFFF_FFFF, 0), 0xFFFF_F0FF);
        assert_eq!(field.set(0, 0x1F), 0x0000_0F00);
        assert_eq!(field.val(3), 0x0000_0300);
    }

    #[test]
    fn overlap() {
        assert!(Field::span(0, 3).overlaps(Field::span(3, 4)));
        assert!(!Field::span(0, 3).overlaps(Field::span(4, 7)));
    }
}
