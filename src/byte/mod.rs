mod arith;
mod bit_input;
mod operand;
mod position;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use log::trace;
use num::{PrimInt, ToPrimitive};

use crate::bit_field;
use crate::error::{Error, Result};

pub use bit_input::{normalize_to_bool, BitInput};
pub use operand::{ByteLike, Operand};
pub use position::BitPosition;

/// An 8-bit unsigned integer kept as eight individually addressable bits.
///
/// Bit 0 is the least significant bit. The integer and character views are
/// cached and refreshed after every mutation, so they always agree with the
/// bits.
#[derive(Debug, Clone, Copy)]
pub struct ByteValue {
    bits: [bool; 8],
    value: u8,
    chr: char,
}

/// Macro to generate the getter and setter for one named bit.
macro_rules! named_bit {
    ($get:ident, $set:ident, $position:ident) => {
        #[doc = concat!("Gets ", stringify!($position), ".")]
        pub fn $get(&self) -> bool {
            self.bit(BitPosition::$position)
        }

        #[doc = concat!("Sets ", stringify!($position), ".")]
        pub fn $set<'a>(&mut self, value: impl Into<BitInput<'a>>) {
            self.set_bit(BitPosition::$position, normalize_to_bool(value.into()));
        }
    };
}

impl ByteValue {
    pub const BITS: usize = 8;

    pub fn new() -> Self {
        Self::from([false; 8])
    }

    /// Builds a byte from up to eight flags, bit 0 first. Missing trailing
    /// flags are false and flags past the eighth are ignored.
    pub fn from_bits(flags: &[bool]) -> Self {
        let mut bits = [false; 8];
        for (bit, flag) in bits.iter_mut().zip(flags) {
            *bit = *flag;
        }
        Self::from(bits)
    }

    /// Keeps the low 8 bits of `number`. Negative numbers are truncated from
    /// their two's complement form, so `from_int(-1)` is 255.
    pub fn from_int<T: PrimInt>(number: T) -> Self {
        let mut bits = [false; 8];
        bit_field::unpack(number, &mut bits);
        Self::from(bits)
    }

    /// Same as [`ByteValue::from_bits_str_at`] with offset 0.
    pub fn from_bits_str(text: &str) -> Self {
        Self::from_bits_str_at(text, 0)
    }

    /// Reads bit `i` from the character at `offset + i`. Only `'1'` sets a
    /// bit; every other character, and every missing one, reads as 0. Never
    /// fails.
    pub fn from_bits_str_at(text: &str, offset: usize) -> Self {
        let mut bits = [false; 8];
        for (bit, c) in bits.iter_mut().zip(text.chars().skip(offset)) {
            if c != '0' && c != '1' {
                trace!("reading {:?} in {:?} as 0", c, text);
            }
            *bit = c == '1';
        }
        Self::from(bits)
    }

    /// The code point of `c`, truncated to 8 bits.
    pub fn from_char(c: char) -> Self {
        Self::from_int(u32::from(c))
    }

    /// Like [`ByteValue::from_char`] but for text that must hold exactly one
    /// character.
    pub fn from_char_str(text: &str) -> Result<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self::from_char(c)),
            _ => Err(Error::from_input(text)),
        }
    }

    fn refresh(&mut self) {
        self.value = bit_field::pack(&self.bits);
        self.chr = char::from(self.value);
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// The value converted to any numeric type that can hold it.
    pub fn to_int<T: num::NumCast>(&self) -> Option<T> {
        <T as num::NumCast>::from(self.value)
    }

    /// The character whose code point is the value (Latin-1).
    pub fn as_char(&self) -> char {
        self.chr
    }

    pub fn as_bool(&self) -> bool {
        self.value != 0
    }

    pub fn bits(&self) -> [bool; 8] {
        self.bits
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        Self::BITS
    }

    pub fn to_bits_string(&self) -> String {
        self.to_string()
    }

    pub fn bit(&self, position: BitPosition) -> bool {
        self.bits[position.index()]
    }

    pub fn bit_int(&self, position: BitPosition) -> u8 {
        u8::from(self.bit(position))
    }

    pub fn bit_str(&self, position: BitPosition) -> &'static str {
        if self.bit(position) {
            "1"
        } else {
            "0"
        }
    }

    pub fn set_bit(&mut self, position: BitPosition, value: bool) {
        self.bits[position.index()] = value;
        self.refresh();
    }

    pub fn get(&self, index: usize) -> Result<bool> {
        Ok(self.bit(BitPosition::from_index(index)?))
    }

    pub fn get_int(&self, index: usize) -> Result<u8> {
        Ok(self.bit_int(BitPosition::from_index(index)?))
    }

    pub fn get_str(&self, index: usize) -> Result<&'static str> {
        Ok(self.bit_str(BitPosition::from_index(index)?))
    }

    /// Assigns one bit. `value` may be a bool, an integer or a string, see
    /// [`normalize_to_bool`].
    pub fn set<'a>(&mut self, index: usize, value: impl Into<BitInput<'a>>) -> Result<()> {
        let position = BitPosition::from_index(index)?;
        self.set_bit(position, normalize_to_bool(value.into()));
        Ok(())
    }

    named_bit!(first_bit, set_first_bit, Bit0);
    named_bit!(second_bit, set_second_bit, Bit1);
    named_bit!(third_bit, set_third_bit, Bit2);
    named_bit!(fourth_bit, set_fourth_bit, Bit3);
    named_bit!(fifth_bit, set_fifth_bit, Bit4);
    named_bit!(sixth_bit, set_sixth_bit, Bit5);
    named_bit!(seventh_bit, set_seventh_bit, Bit6);
    named_bit!(eighth_bit, set_eighth_bit, Bit7);

    /// True if `text` is exactly the canonical rendering of this byte.
    fn matches_bits_str(&self, text: &str) -> bool {
        let mut chars = text.chars();
        self.bits
            .iter()
            .all(|bit| chars.next() == Some(if *bit { '1' } else { '0' }))
            && chars.next().is_none()
    }
}

impl Default for ByteValue {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical form: eight `0`/`1` characters, least significant bit first.
impl fmt::Display for ByteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl Index<BitPosition> for ByteValue {
    type Output = bool;

    fn index(&self, position: BitPosition) -> &bool {
        &self.bits[position.index()]
    }
}

impl From<[bool; 8]> for ByteValue {
    fn from(bits: [bool; 8]) -> Self {
        let mut byte = Self {
            bits,
            value: 0,
            chr: '\0',
        };
        byte.refresh();
        byte
    }
}

impl From<u8> for ByteValue {
    fn from(value: u8) -> Self {
        Self::from_int(value)
    }
}

impl From<char> for ByteValue {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl From<&str> for ByteValue {
    fn from(text: &str) -> Self {
        Self::from_bits_str(text)
    }
}

impl From<&String> for ByteValue {
    fn from(text: &String) -> Self {
        Self::from_bits_str(text)
    }
}

impl From<ByteValue> for u8 {
    fn from(byte: ByteValue) -> u8 {
        byte.value
    }
}

impl From<ByteValue> for bool {
    fn from(byte: ByteValue) -> bool {
        byte.as_bool()
    }
}

impl From<ByteValue> for [bool; 8] {
    fn from(byte: ByteValue) -> [bool; 8] {
        byte.bits
    }
}

impl PartialEq for ByteValue {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Self) -> bool {
        self.bits.iter().zip(other.bits).any(|(a, b)| *a != b)
    }
}

impl Eq for ByteValue {}

impl Hash for ByteValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

macro_rules! eq_int {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for ByteValue {
                fn eq(&self, other: &$t) -> bool {
                    other.to_u8() == Some(self.value)
                }
            }

            impl PartialEq<ByteValue> for $t {
                fn eq(&self, other: &ByteValue) -> bool {
                    other == self
                }
            }
        )*
    };
}

eq_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl PartialEq<str> for ByteValue {
    fn eq(&self, other: &str) -> bool {
        self.matches_bits_str(other)
    }
}

impl PartialEq<&str> for ByteValue {
    fn eq(&self, other: &&str) -> bool {
        self.matches_bits_str(other)
    }
}

impl PartialEq<String> for ByteValue {
    fn eq(&self, other: &String) -> bool {
        self.matches_bits_str(other)
    }
}
