use std::str::FromStr;

use strum_macros::EnumIter;

use super::ByteValue;
use crate::error::{Error, Result};

/// A bit position inside a byte. `Bit0` is the least significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum BitPosition {
    Bit0,
    Bit1,
    Bit2,
    Bit3,
    Bit4,
    Bit5,
    Bit6,
    Bit7,
}

impl BitPosition {
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The value this bit contributes when set, `2^index`.
    pub const fn weight(self) -> u8 {
        1 << self as u8
    }

    pub fn from_index(index: usize) -> Result<Self> {
        use BitPosition::*;
        let position = match index {
            0 => Bit0,
            1 => Bit1,
            2 => Bit2,
            3 => Bit3,
            4 => Bit4,
            5 => Bit5,
            6 => Bit6,
            7 => Bit7,
            _ => return Err(Error::from_index(index)),
        };
        Ok(position)
    }
}

impl TryFrom<usize> for BitPosition {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        BitPosition::from_index(index)
    }
}

/// A byte holding 0 to 7 names the position with that index.
impl TryFrom<ByteValue> for BitPosition {
    type Error = Error;

    fn try_from(byte: ByteValue) -> Result<Self> {
        BitPosition::from_index(usize::from(byte.value()))
    }
}

/// Parses a decimal index such as `"3"`.
impl FromStr for BitPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let index = s.trim().parse::<usize>().map_err(|_| Error::from_input(s))?;
        BitPosition::from_index(index)
    }
}
