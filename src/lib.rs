mod bit_field;
mod byte;
mod error;

pub use byte::{normalize_to_bool, BitInput, BitPosition, ByteLike, ByteValue, Operand};
pub use error::{Error, Result};
