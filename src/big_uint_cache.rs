use lazy_static::*;

use crate::BigUint;
use crate::big_uint_constants::*;

lazy_static! {
    pub static ref SMALL_CACHE: [BigUint; MAX_CONSTANT + 1] = {
        let mut cache: [BigUint; MAX_CONSTANT + 1] = Default::default();
        for (value, slot) in cache.iter_mut().enumerate().skip(1) {
            *slot = BigUint::from_single_block(value as u32);
        }
        cache
    };
}
