//! Big Uint \
//! This crate provides:
//! - [`BigUint`]: arbitrary-precision unsigned integers stored as little-endian 32-bit blocks,
//!   with checked (`try_*`) arithmetic and the usual operator overloads.
//! - [`ArithmeticError`]: the failures the checked arithmetic reports.

mod big_uint;
mod big_uint_cache;
mod big_uint_constants;
mod error;

pub use big_uint::BigUint;
pub use error::{ArithmeticError, Result};

#[cfg(test)]
mod properties;

#[cfg(test)]
mod tests {
    use crate::BigUint;

    #[test]
    fn it_works() {
        let a: BigUint = "0000000000000111010110100100101011110".parse().unwrap();
        let b: BigUint = "1011101".parse().unwrap();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("a / b = {}", &a / &b);
        println!("a % b = {}", &a % &b);
        println!("a << 10 = {}", &a << 10);
        println!("a >> 10 = {}", &a >> 10);
    }
}
