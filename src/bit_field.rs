use std::ops::{BitAnd, BitOrAssign, Shl, Shr};

/// Packs `flags` into an integer. Treats index 0 as the least significant bit.
pub fn pack<T>(flags: &[bool]) -> T
where
    T: num::Zero + num::One + Shl<usize, Output = T> + BitOrAssign + Copy,
{
    let mut value = T::zero();
    for (i, flag) in flags.iter().enumerate() {
        if *flag {
            value |= T::one() << i;
        }
    }
    value
}

/// Spreads the low `flags.len()` bits of `value` over `flags`, least
/// significant bit first. Higher bits of `value` are ignored.
pub fn unpack<T>(value: T, flags: &mut [bool])
where
    T: num::One + Shr<usize, Output = T> + BitAnd<Output = T> + Eq + Copy,
{
    for (i, flag) in flags.iter_mut().enumerate() {
        *flag = (value >> i) & T::one() == T::one();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_u8() {
        let mut flags = [false; 8];
        assert_eq!(0u8, pack::<u8>(&flags));

        flags[3] = true;
        assert_eq!(8u8, pack::<u8>(&flags));

        flags[7] = true;
        assert_eq!(0b1000_1000u8, pack::<u8>(&flags));
    }

    #[test]
    fn test_unpack_truncates() {
        let mut flags = [false; 8];
        unpack(0x1_05u32, &mut flags);
        assert_eq!([true, false, true, false, false, false, false, false], flags);

        unpack(-1i64, &mut flags);
        assert_eq!([true; 8], flags);
    }
}
