use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use byte_value::ByteValue;

/// Every byte, in increasing order.
pub fn all_bytes() -> impl Iterator<Item = ByteValue> {
    (0u8..=255).map(ByteValue::from)
}

pub fn hash_of(byte: &ByteValue) -> u64 {
    let mut hasher = DefaultHasher::new();
    byte.hash(&mut hasher);
    hasher.finish()
}
