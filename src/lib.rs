//! Mpz \
//! A small arbitrary-precision integer kernel. This crate provides:
//! - [`BigNat`]: unsigned magnitudes with the raw limb algorithms (compare, add, subtract,
//!   schoolbook multiply, single-limb and long division, radix rendering).
//! - [`BigInt`]: signed integers layered on top of [`BigNat`].
//!
//! Values own a growable limb buffer whose capacity only ever grows. Every operation that can
//! allocate returns [`Result`]; running out of memory and dividing by zero are reported as
//! [`BigNumError`] rather than aborting.

mod big_int;
mod big_nat;
mod big_num_cache;
mod big_num_constants;
mod big_num_error;

pub use big_int::BigInt;
pub use big_nat::BigNat;
pub use big_num_constants::{DoubleLimb, Limb, BASE, BASE_MASK, BASE_SHIFT, MIN_LIMBS};
pub use big_num_error::{BigNumError, Result};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a = BigInt::from_signed(10000000000000).unwrap();
        let b = BigInt::from_signed(-900000000000).unwrap();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        assert_eq!((&a + &b).to_string(), "9100000000000");
        assert_eq!((&a - &b).to_string(), "10900000000000");
        assert_eq!((&a * &b).to_string(), "-9000000000000000000000000");
    }
}
