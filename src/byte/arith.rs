use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Mul, Sub};

use super::ByteValue;
use crate::error::{Error, Result};

/// Ripple-carry adder over 8 bit positions, least significant first.
/// Returns the sum bits and the carry out of bit 7.
fn ripple_add(lhs: &[bool; 8], rhs: &[bool; 8], carry_in: bool) -> ([bool; 8], bool) {
    let mut sum_bits = [false; 8];
    let mut carry = u8::from(carry_in);
    for (out, (a, b)) in sum_bits.iter_mut().zip(lhs.iter().zip(rhs)) {
        // 0, 1, 2 or 3
        let sum = carry + u8::from(*a) + u8::from(*b);
        carry = u8::from(sum > 1);
        *out = sum == 1 || sum == 3;
    }
    (sum_bits, carry == 1)
}

impl ByteValue {
    /// Adds `rhs` and also reports whether a carry left bit 7.
    pub fn overflowing_add(self, rhs: ByteValue) -> (ByteValue, bool) {
        let (bits, carry) = ripple_add(&self.bits, &rhs.bits, false);
        (ByteValue::from(bits), carry)
    }

    /// Quotient and remainder of the unsigned values.
    pub fn checked_div_rem(self, rhs: ByteValue) -> Result<(ByteValue, ByteValue)> {
        if rhs.value == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok((
            ByteValue::from_int(self.value / rhs.value),
            ByteValue::from_int(self.value % rhs.value),
        ))
    }
}

/// Wraps modulo 256; the final carry is dropped.
impl Add for ByteValue {
    type Output = ByteValue;

    fn add(self, rhs: ByteValue) -> ByteValue {
        self.overflowing_add(rhs).0
    }
}

impl AddAssign for ByteValue {
    fn add_assign(&mut self, rhs: ByteValue) {
        *self = *self + rhs;
    }
}

/// Adds in full precision first and truncates while rebuilding the byte.
macro_rules! add_int {
    ($($t:ty),*) => {
        $(
            impl Add<$t> for ByteValue {
                type Output = ByteValue;

                fn add(self, rhs: $t) -> ByteValue {
                    // `as` keeps the low 8 bits, which is all that survives
                    ByteValue::from_int(i128::from(self.value).wrapping_add(rhs as i128))
                }
            }
        )*
    };
}

add_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// The text is parsed as a binary string and placed on the left:
/// `ByteValue::from_bits_str(rhs) + self`.
impl Add<&str> for ByteValue {
    type Output = ByteValue;

    fn add(self, rhs: &str) -> ByteValue {
        ByteValue::from_bits_str(rhs) + self
    }
}

/// Two's complement: `self + !rhs + 1` on the same adder, wrapping.
impl Sub for ByteValue {
    type Output = ByteValue;

    fn sub(self, rhs: ByteValue) -> ByteValue {
        let inverted = rhs.bits.map(|bit| !bit);
        let (bits, _) = ripple_add(&self.bits, &inverted, true);
        ByteValue::from(bits)
    }
}

/// Shift-and-add, wrapping.
impl Mul for ByteValue {
    type Output = ByteValue;

    fn mul(self, rhs: ByteValue) -> ByteValue {
        let mut product = ByteValue::new();
        let mut addend = self;
        for bit in rhs.bits {
            if bit {
                product += addend;
            }
            addend += addend;
        }
        product
    }
}

impl PartialOrd for ByteValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ripple_add() {
        let (sum, carry) = ripple_add(&[true; 8], &[true; 8], false);
        assert_eq!([false, true, true, true, true, true, true, true], sum);
        assert!(carry);

        let (sum, carry) = ripple_add(&[false; 8], &[false; 8], true);
        assert_eq!([true, false, false, false, false, false, false, false], sum);
        assert!(!carry);
    }

    #[test]
    fn test_add() {
        assert_eq!(ByteValue::from_int(8), ByteValue::from_int(3) + ByteValue::from_int(5));

        let (sum, carry) = ByteValue::from_int(255).overflowing_add(ByteValue::from_int(1));
        assert_eq!(0, sum.value());
        assert!(carry);

        let mut acc = ByteValue::from_int(250);
        acc += ByteValue::from_int(10);
        assert_eq!(4, acc.value());
    }

    #[test]
    fn test_add_int() {
        assert_eq!(44, (ByteValue::from_int(200) + 100i32).value());
        assert_eq!(2, (ByteValue::from_int(1) + 257u16).value());
        assert_eq!(4, (ByteValue::from_int(5) + -1i8).value());
        assert_eq!(4, (ByteValue::from_int(5) + u128::MAX).value());
    }

    #[test]
    fn test_add_str() {
        let byte = ByteValue::from_int(5);
        assert_eq!(6, (byte + "1").value());
        assert_eq!(5, (byte + "garbage").value());
    }

    #[test]
    fn test_sub() {
        assert_eq!(2, (ByteValue::from_int(5) - ByteValue::from_int(3)).value());
        assert_eq!(255, (ByteValue::from_int(0) - ByteValue::from_int(1)).value());
        assert_eq!(0, (ByteValue::from_int(77) - ByteValue::from_int(77)).value());
    }

    #[test]
    fn test_mul() {
        assert_eq!(42, (ByteValue::from_int(6) * ByteValue::from_int(7)).value());
        assert_eq!(0, (ByteValue::from_int(16) * ByteValue::from_int(16)).value());
        assert_eq!(0, (ByteValue::from_int(200) * ByteValue::new()).value());
    }

    #[test]
    fn test_div_rem() {
        let (q, r) = ByteValue::from_int(200)
            .checked_div_rem(ByteValue::from_int(7))
            .unwrap();
        assert_eq!(28, q.value());
        assert_eq!(4, r.value());

        assert_eq!(
            Err(Error::DivisionByZero),
            ByteValue::from_int(1).checked_div_rem(ByteValue::new())
        );
    }

    #[test]
    fn test_ordering() {
        let mut bytes: Vec<ByteValue> = [9, 200, 0, 17]
            .iter()
            .map(|n| ByteValue::from_int(*n))
            .collect();
        bytes.sort();
        let values: Vec<u8> = bytes.iter().map(ByteValue::value).collect();
        assert_eq!(vec![0, 9, 17, 200], values);
        assert!(ByteValue::from_int(128) > ByteValue::from_int(127));
    }
}
