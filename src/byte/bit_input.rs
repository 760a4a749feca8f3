/// A value accepted when assigning a single bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitInput<'a> {
    Bool(bool),
    /// Zero clears the bit, anything else sets it.
    Int(i64),
    /// `"0"` clears the bit, anything else sets it.
    Text(&'a str),
}

pub fn normalize_to_bool(input: BitInput<'_>) -> bool {
    match input {
        BitInput::Bool(value) => value,
        BitInput::Int(value) => value != 0,
        BitInput::Text(value) => value != "0",
    }
}

impl From<bool> for BitInput<'_> {
    fn from(value: bool) -> Self {
        BitInput::Bool(value)
    }
}

impl<'a> From<&'a str> for BitInput<'a> {
    fn from(value: &'a str) -> Self {
        BitInput::Text(value)
    }
}

impl<'a> From<&'a String> for BitInput<'a> {
    fn from(value: &'a String) -> Self {
        BitInput::Text(value.as_str())
    }
}

macro_rules! bit_input_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BitInput<'_> {
                fn from(value: $t) -> Self {
                    BitInput::Int(i64::from(value))
                }
            }
        )*
    };
}

/// Types wider than `i64` keep only whether they are zero.
macro_rules! bit_input_from_wide_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BitInput<'_> {
                fn from(value: $t) -> Self {
                    BitInput::Int(i64::from(value != 0))
                }
            }
        )*
    };
}

bit_input_from_int!(i8, i16, i32, i64, u8, u16, u32);
bit_input_from_wide_int!(isize, usize, u64, i128, u128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert!(normalize_to_bool(true.into()));
        assert!(!normalize_to_bool(false.into()));

        assert!(!normalize_to_bool(0i32.into()));
        assert!(normalize_to_bool(1i32.into()));
        assert!(normalize_to_bool((-3i64).into()));
        assert!(normalize_to_bool(u64::MAX.into()));
        assert!(normalize_to_bool((1u128 << 64).into()));
        assert!(normalize_to_bool(i128::MIN.into()));
        assert!(!normalize_to_bool(0u128.into()));

        assert!(!normalize_to_bool("0".into()));
        assert!(normalize_to_bool("1".into()));
        assert!(normalize_to_bool("x".into()));
        assert!(normalize_to_bool("".into()));
    }
}
