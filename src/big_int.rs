//! # BigInt
//! Signed arbitrary-precision integers: a [`BigNat`] magnitude and a sign flag.
//! Sign rules are applied here, once, on top of the raw magnitude operations.
//! Zero is never negative.
//! # Example
//! ```
//! use mpz::BigInt;
//!
//! let a = BigInt::from_signed(-1000).unwrap();
//! let b = BigInt::from_signed(58).unwrap();
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! assert_eq!((&a + &b).to_string(), "-942");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::big_nat::BigNat;
use crate::big_num_constants::Limb;
use crate::big_num_error::{BigNumError, Result};

#[derive(Clone)]
pub struct BigInt {
    negative: bool,
    mag: BigNat,
}

// 缓冲区管理
impl BigInt {
    pub fn new() -> Result<BigInt> {
        Ok(BigInt { negative: false, mag: BigNat::new()? })
    }

    pub fn with_capacity(cap: usize) -> Result<BigInt> {
        Ok(BigInt { negative: false, mag: BigNat::with_capacity(cap)? })
    }

    pub fn ensure_capacity(&mut self, cap: usize) -> Result<()> {
        self.mag.ensure_capacity(cap)
    }

    pub fn release(self) {
        self.mag.release();
    }

    pub fn capacity(&self) -> usize {
        self.mag.capacity()
    }

    /// Builds a value from a magnitude and a sign; a zero magnitude is never negative.
    pub fn from_parts(mag: BigNat, negative: bool) -> BigInt {
        let mut val = BigInt { negative, mag };
        val.normalize();
        val
    }

    pub fn magnitude(&self) -> &BigNat {
        &self.mag
    }

    pub fn into_magnitude(self) -> BigNat {
        self.mag
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.mag.is_zero()
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    fn normalize(&mut self) {
        if self.mag.is_zero() {
            self.negative = false;
        }
    }
}

// 实现构造
impl BigInt {
    pub fn from_signed(val: i64) -> Result<BigInt> {
        let mut int = BigInt::new()?;
        int.set_signed(val)?;
        Ok(int)
    }

    pub fn from_unsigned(val: u64) -> Result<BigInt> {
        let mut int = BigInt::new()?;
        int.set_unsigned(val)?;
        Ok(int)
    }

    pub fn set_signed(&mut self, val: i64) -> Result<()> {
        self.mag.set_unsigned(val.unsigned_abs())?;
        self.negative = val < 0;
        Ok(())
    }

    pub fn set_unsigned(&mut self, val: u64) -> Result<()> {
        self.mag.set_unsigned(val)?;
        self.negative = false;
        Ok(())
    }

    /// Deep copy of `src` into `self`.
    pub fn set(&mut self, src: &BigInt) -> Result<()> {
        self.mag.set(&src.mag)?;
        self.negative = src.negative;
        Ok(())
    }

    pub fn swap(&mut self, other: &mut BigInt) {
        std::mem::swap(self, other);
    }

    /// Returns `None` if the value does not fit in an `i64`.
    pub fn to_i64(&self) -> Option<i64> {
        let mag = self.mag.to_u64()?;
        if self.negative {
            0i64.checked_sub_unsigned(mag)
        } else {
            i64::try_from(mag).ok()
        }
    }

    pub fn abs(&self) -> BigInt {
        BigInt { negative: false, mag: self.mag.clone() }
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl TryFrom<$u> for BigInt {
        type Error = BigNumError;

        fn try_from(val: $u) -> Result<Self> {
            BigInt::from_unsigned(val as u64)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl TryFrom<$i> for BigInt {
        type Error = BigNumError;

        fn try_from(val: $i) -> Result<Self> {
            BigInt::from_signed(val as i64)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, u64, usize);
impl_signed_to_big_int!(i8, i16, i32, i64, isize);

// 实现大小比较
impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.negative == other.negative && self.mag == other.mag
    }
}
impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.signum().cmp(&other.signum()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        if self.negative {
            BigNat::cmp_raw(&self.mag, &other.mag).reverse()
        } else {
            BigNat::cmp_raw(&self.mag, &other.mag)
        }
    }
}

// 实现加减法
impl BigInt {
    pub fn add(out: &mut BigInt, a: &BigInt, b: &BigInt) -> Result<()> {
        BigInt::add_signed(out, a, &b.mag, b.negative)
    }

    pub fn sub(out: &mut BigInt, a: &BigInt, b: &BigInt) -> Result<()> {
        BigInt::add_signed(out, a, &b.mag, !b.negative)
    }

    /// `out = a + (-1)^b_negative * b_mag`
    fn add_signed(out: &mut BigInt, a: &BigInt, b_mag: &BigNat, b_negative: bool) -> Result<()> {
        if a.negative == b_negative {
            BigNat::add(&mut out.mag, &a.mag, b_mag)?;
            out.negative = a.negative;
        } else {
            // the larger magnitude decides the sign
            let flipped = BigNat::sub(&mut out.mag, &a.mag, b_mag)?;
            out.negative = if flipped { b_negative } else { a.negative };
        }
        out.normalize();
        Ok(())
    }

    pub fn checked_add(&self, rhs: &BigInt) -> Result<BigInt> {
        let mut sum = BigInt::new()?;
        BigInt::add(&mut sum, self, rhs)?;
        Ok(sum)
    }

    pub fn checked_sub(&self, rhs: &BigInt) -> Result<BigInt> {
        let mut difference = BigInt::new()?;
        BigInt::sub(&mut difference, self, rhs)?;
        Ok(difference)
    }
}

// 实现乘法
impl BigInt {
    pub fn mul(out: &mut BigInt, a: &BigInt, b: &BigInt) -> Result<()> {
        BigNat::mul(&mut out.mag, &a.mag, &b.mag)?;
        out.negative = a.negative != b.negative;
        out.normalize();
        Ok(())
    }

    pub fn checked_mul(&self, rhs: &BigInt) -> Result<BigInt> {
        let mut product = BigInt::new()?;
        BigInt::mul(&mut product, self, rhs)?;
        Ok(product)
    }
}

// 实现除法
impl BigInt {
    /// Truncating division by one limb: the quotient goes to `div`, the remainder is
    /// returned and carries the sign of `a`.
    pub fn div_rem_limb(div: &mut BigInt, a: &BigInt, d: Limb) -> Result<i64> {
        let rem = BigNat::div_rem_limb(&mut div.mag, &a.mag, d)? as i64;
        div.negative = a.negative;
        div.normalize();
        Ok(if a.negative { -rem } else { rem })
    }

    /// Truncating division, the same rounding as `/` and `%` on primitive integers.
    pub fn div_rem(div: &mut BigInt, rem: &mut BigInt, a: &BigInt, b: &BigInt) -> Result<()> {
        BigNat::div_rem(&mut div.mag, &mut rem.mag, &a.mag, &b.mag)?;
        div.negative = a.negative != b.negative;
        rem.negative = a.negative;
        div.normalize();
        rem.normalize();
        Ok(())
    }
}

// 实现打印
impl BigInt {
    pub fn to_decimal_string(&self) -> Result<String> {
        let digits = self.mag.to_decimal_string()?;
        Ok(if self.negative { format!("-{}", digits) } else { digits })
    }

    pub fn to_string_radix(&self, radix: u32) -> Result<String> {
        let digits = self.mag.to_string_radix(radix)?;
        Ok(if self.negative { format!("-{}", digits) } else { digits })
    }

    pub fn to_hex_limbs(&self) -> String {
        let limbs = self.mag.to_hex_limbs();
        if self.negative {
            format!("-{}", limbs)
        } else {
            limbs
        }
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mag.to_decimal_string().map_err(|_| fmt::Error)?;
        f.pad_integral(!self.negative, "", &digits)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigInt")
            .field("negative", &self.negative)
            .field("limbs", &self.mag.limbs())
            .field("capacity", &self.mag.capacity())
            .finish()
    }
}

// 运算符
macro_rules! impl_binary_op {
    ($($op: ident, $method: ident, $checked: ident);*) => {
    $(
    impl $op for &BigInt {
        type Output = BigInt;

        /// # Panics
        /// If the result cannot be allocated.
        fn $method(self, rhs: Self) -> Self::Output {
            match self.$checked(rhs) {
                Ok(val) => val,
                Err(err) => panic!("{}", err),
            }
        }
    }

    impl $op for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: Self) -> Self::Output {
            (&self).$method(&rhs)
        }
    }
    )*
    };
}
impl_binary_op!(Add, add, checked_add; Sub, sub, checked_sub; Mul, mul, checked_mul);

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { negative, mag } = self;
        BigInt::from_parts(mag, !negative)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

#[cfg(test)]
fn int(val: i64) -> BigInt {
    BigInt::from_signed(val).unwrap()
}

#[test]
fn test_from() {
    let big: BigInt = (-100i16).try_into().unwrap();
    assert!(big.is_negative());
    assert_eq!(big.to_i64(), Some(-100));

    let big: BigInt = 12u8.try_into().unwrap();
    assert_eq!(big.signum(), 1);

    let big = int(i64::MIN);
    assert_eq!(big.to_i64(), Some(i64::MIN));
    assert_eq!(big.magnitude().to_u64(), Some(1 << 63));

    let big = int(0);
    assert_eq!(big.signum(), 0);
    assert!(!big.is_negative());

    let big = BigInt::from_unsigned(u64::MAX).unwrap();
    assert_eq!(big.to_i64(), None);
}

#[test]
fn test_zero_is_never_negative() {
    let z = BigInt::from_parts(BigNat::new().unwrap(), true);
    assert!(!z.is_negative());
    assert_eq!(-int(0), int(0));
    assert_eq!((&int(-7) + &int(7)).signum(), 0);
    assert!(!(&int(-7) * &int(0)).is_negative());
    assert_eq!(int(-5).to_string(), "-5");
    assert_eq!((&int(-5) - &int(-5)).to_string(), "0");
}

#[test]
fn test_add_sub_signs() {
    let cases: [(i64, i64); 8] = [
        (5, 9), (-5, 9), (5, -9), (-5, -9),
        (9, 5), (-9, 5), (9, -5), (-9, -5),
    ];
    for (a, b) in cases {
        assert_eq!((&int(a) + &int(b)).to_i64(), Some(a + b), "{} + {}", a, b);
        assert_eq!((&int(a) - &int(b)).to_i64(), Some(a - b), "{} - {}", a, b);
        assert_eq!((&int(a) * &int(b)).to_i64(), Some(a * b), "{} * {}", a, b);
    }
}

#[test]
fn test_ord() {
    let mut vals = vec![int(3), int(-1000), int(0), int(-2), int(1000)];
    vals.sort();
    let sorted: Vec<i64> = vals.iter().map(|v| v.to_i64().unwrap()).collect();
    assert_eq!(sorted, vec![-1000, -2, 0, 3, 1000]);
}

#[test]
fn test_div_rem() {
    let mut q = BigInt::new().unwrap();
    let mut r = BigInt::new().unwrap();
    for (a, b) in [(1000i64, 7i64), (-1000, 7), (1000, -7), (-1000, -7), (3, 5000), (-123456789, 4099)] {
        BigInt::div_rem(&mut q, &mut r, &int(a), &int(b)).unwrap();
        assert_eq!(q.to_i64(), Some(a / b), "{} / {}", a, b);
        assert_eq!(r.to_i64(), Some(a % b), "{} % {}", a, b);
    }
    assert_eq!(
        BigInt::div_rem(&mut q, &mut r, &int(1), &int(0)).unwrap_err(),
        BigNumError::DivisionByZero
    );

    let rem = BigInt::div_rem_limb(&mut q, &int(-1000), 7).unwrap();
    assert_eq!(q.to_i64(), Some(-142));
    assert_eq!(rem, -6);
}

#[test]
fn test_render() {
    assert_eq!(int(-56).to_decimal_string().unwrap(), "-56");
    assert_eq!(int(-255).to_string_radix(16).unwrap(), "-ff");
    assert_eq!(format!("{:+}", int(8)), "+8");
    let a = BigInt::from_parts(BigNat::from_limbs(&[1, 2]).unwrap(), true);
    assert_eq!(a.to_hex_limbs(), "-2 1");
}

#[test]
fn test_set_swap() {
    let mut a = int(-12);
    let mut b = int(34);
    a.swap(&mut b);
    assert_eq!(a, int(34));
    assert_eq!(b, int(-12));
    a.set(&b).unwrap();
    assert_eq!(a, int(-12));
    assert_eq!(a.abs(), int(12));
}
