use std::error::Error as StdError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A conversion was handed text it cannot interpret, e.g. a character
    /// conversion given anything other than exactly one character.
    InvalidInput { input: String },
    /// Bit access outside of positions 0 to 7.
    IndexOutOfRange { index: usize },
    /// The operand exposes neither an integer nor a text conversion.
    UnsupportedOperand { type_name: &'static str },
    DivisionByZero,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> core::result::Result<(), std::fmt::Error> {
        match self {
            Error::InvalidInput { input } => write!(f, "InvalidInput {:?}", input),
            Error::IndexOutOfRange { index } => {
                write!(f, "IndexOutOfRange {} (expected 0..=7)", index)
            }
            Error::UnsupportedOperand { type_name } => {
                write!(f, "UnsupportedOperand of type {}", type_name)
            }
            Error::DivisionByZero => write!(f, "DivisionByZero"),
        }
    }
}

impl StdError for Error {}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn from_input(input: &str) -> Self {
        Error::InvalidInput {
            input: String::from(input),
        }
    }

    pub fn from_index(index: usize) -> Self {
        Error::IndexOutOfRange { index }
    }
}
