use std::borrow::Cow;

use log::{trace, warn};

use super::ByteValue;
use crate::error::{Error, Result};

/// A type that can stand in for a byte by converting itself to an integer
/// or to a binary string. The integer conversion wins when both exist.
pub trait ByteLike {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn int_value(&self) -> Option<i128> {
        None
    }

    fn text_value(&self) -> Option<String> {
        None
    }
}

impl ByteLike for ByteValue {
    fn int_value(&self) -> Option<i128> {
        Some(i128::from(self.value))
    }

    fn text_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

/// Right-hand side of [`ByteValue::add_operand`] and
/// [`ByteValue::eq_operand`] when its type is only known at runtime.
#[derive(Clone)]
pub enum Operand<'a> {
    Byte(ByteValue),
    Int(i128),
    Text(Cow<'a, str>),
    Other(&'a dyn ByteLike),
}

impl std::fmt::Debug for Operand<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Byte(byte) => write!(f, "Byte({})", byte),
            Operand::Int(n) => write!(f, "Int({})", n),
            Operand::Text(text) => write!(f, "Text({:?})", text),
            Operand::Other(other) => write!(f, "Other({})", other.type_name()),
        }
    }
}

impl From<ByteValue> for Operand<'_> {
    fn from(byte: ByteValue) -> Self {
        Operand::Byte(byte)
    }
}

impl From<&ByteValue> for Operand<'_> {
    fn from(byte: &ByteValue) -> Self {
        Operand::Byte(*byte)
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(text: &'a str) -> Self {
        Operand::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Operand<'a> {
    fn from(text: &'a String) -> Self {
        Operand::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Operand<'_> {
    fn from(text: String) -> Self {
        Operand::Text(Cow::Owned(text))
    }
}

impl<'a> From<&'a dyn ByteLike> for Operand<'a> {
    fn from(other: &'a dyn ByteLike) -> Self {
        Operand::Other(other)
    }
}

/// Values that do not fit `i128` wrap, which leaves the low 8 bits intact.
macro_rules! operand_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand<'_> {
                fn from(n: $t) -> Self {
                    Operand::Int(n as i128)
                }
            }
        )*
    };
}

operand_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Converts through the integer view if there is one, otherwise through the
/// text view.
fn coerce(other: &dyn ByteLike) -> Result<ByteValue> {
    if let Some(n) = other.int_value() {
        return Ok(ByteValue::from_int(n));
    }
    if let Some(text) = other.text_value() {
        return Ok(ByteValue::from_bits_str(&text));
    }
    warn!("{} converts to neither an integer nor text", other.type_name());
    Err(Error::UnsupportedOperand {
        type_name: other.type_name(),
    })
}

impl ByteValue {
    /// Adds an operand whose type is decided at runtime.
    ///
    /// Bytes go through the ripple-carry adder, integers are added in full
    /// precision and then truncated, text is parsed as a binary string and
    /// put on the left of the sum. Anything else is converted with
    /// [`ByteLike`] and then added as a byte.
    pub fn add_operand<'a>(self, rhs: impl Into<Operand<'a>>) -> Result<ByteValue> {
        let rhs = rhs.into();
        trace!("adding {:?} to {}", rhs, self);
        let sum = match rhs {
            Operand::Byte(byte) => self + byte,
            Operand::Int(n) => self + n,
            Operand::Text(text) => self + &*text,
            Operand::Other(other) => self + coerce(other)?,
        };
        Ok(sum)
    }

    pub fn eq_operand<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<bool> {
        let equal = match rhs.into() {
            Operand::Byte(byte) => self.bits == byte.bits,
            Operand::Int(n) => i128::from(self.value) == n,
            Operand::Text(text) => self.matches_bits_str(&text),
            Operand::Other(other) => {
                if let Some(n) = other.int_value() {
                    i128::from(self.value) == n
                } else if let Some(text) = other.text_value() {
                    self.matches_bits_str(&text)
                } else {
                    warn!("cannot compare with {}", other.type_name());
                    return Err(Error::UnsupportedOperand {
                        type_name: other.type_name(),
                    });
                }
            }
        };
        Ok(equal)
    }

    pub fn ne_operand<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<bool> {
        let differs = match rhs.into() {
            Operand::Byte(byte) => self.bits.iter().zip(byte.bits).any(|(a, b)| *a != b),
            Operand::Int(n) => i128::from(self.value) != n,
            Operand::Text(text) => !self.matches_bits_str(&text),
            Operand::Other(other) => {
                if let Some(n) = other.int_value() {
                    i128::from(self.value) != n
                } else if let Some(text) = other.text_value() {
                    !self.matches_bits_str(&text)
                } else {
                    warn!("cannot compare with {}", other.type_name());
                    return Err(Error::UnsupportedOperand {
                        type_name: other.type_name(),
                    });
                }
            }
        };
        Ok(differs)
    }
}
