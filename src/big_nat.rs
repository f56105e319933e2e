//! # BigNat
//! Unsigned arbitrary-precision magnitudes, stored as little-endian limbs of `BASE_SHIFT` bits.
//! This is the raw layer: every operation here ignores sign.
//!
//! Outputs are passed as `&mut BigNat` and grown on demand; a value's capacity is a
//! high-water mark and never shrinks. Every producing operation leaves its output
//! trimmed, i.e. without leading zero limbs, and zero is the single limb `0`.
//! # Example
//! ```
//! use mpz::BigNat;
//!
//! let a = BigNat::from_unsigned(12345).unwrap();
//! let b = BigNat::from_unsigned(6789).unwrap();
//! let mut c = BigNat::new().unwrap();
//! BigNat::mul(&mut c, &a, &b).unwrap();
//! assert_eq!(c.to_string(), "83810205");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, trace, warn};

use crate::big_num_cache::RADIX_GROUPS;
use crate::big_num_constants::*;
use crate::big_num_error::{BigNumError, Result};

#[derive(Clone)]
pub struct BigNat {
    /// Allocated storage; `digits.len()` is the capacity.
    digits: Vec<Limb>,
    /// Number of significant limbs, always at least one.
    size: usize,
}

// 缓冲区管理
impl BigNat {
    /// A zero value with `MIN_LIMBS` limbs allocated.
    pub fn new() -> Result<BigNat> {
        BigNat::with_capacity(MIN_LIMBS)
    }

    /// A zero value with room for at least `cap` limbs.
    pub fn with_capacity(cap: usize) -> Result<BigNat> {
        let mut nat = BigNat { digits: Vec::new(), size: 1 };
        nat.ensure_capacity(cap.max(MIN_LIMBS))?;
        Ok(nat)
    }

    /// Grows the buffer to at least `cap` limbs. Never shrinks; existing limbs are kept
    /// and new ones are zero. On failure the value is left untouched.
    pub fn ensure_capacity(&mut self, cap: usize) -> Result<()> {
        let current = self.digits.len();
        if cap <= current {
            return Ok(());
        }
        if self.digits.try_reserve_exact(cap - current).is_err() {
            warn!("failed to grow limb buffer from {} to {} limbs", current, cap);
            return Err(BigNumError::OutOfMemory { limbs: cap });
        }
        trace!("growing limb buffer from {} to {} limbs", current, cap);
        self.digits.resize(cap, 0);
        Ok(())
    }

    /// Frees the buffer. Consuming `self` makes a second release impossible.
    pub fn release(self) {
        drop(self);
    }

    pub fn capacity(&self) -> usize {
        self.digits.len()
    }

    /// Number of significant limbs.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Significant limbs, least significant first.
    pub fn limbs(&self) -> &[Limb] {
        &self.digits[..self.size]
    }

    pub fn is_zero(&self) -> bool {
        self.size == 1 && self.digits[0] == 0
    }

    fn trim(&mut self) {
        while self.size > 1 && self.digits[self.size - 1] == 0 {
            self.size -= 1;
        }
    }

    fn set_zero(&mut self) {
        self.digits[0] = 0;
        self.size = 1;
    }

    /// Scratch output for a result of `limbs` limbs that can be swapped into `self`
    /// without lowering its capacity.
    fn scratch_for(&self, limbs: usize) -> Result<BigNat> {
        BigNat::with_capacity(self.capacity().max(limbs))
    }
}

// 实现构造
impl BigNat {
    pub fn from_unsigned(val: u64) -> Result<BigNat> {
        let mut nat = BigNat::new()?;
        nat.set_unsigned(val)?;
        Ok(nat)
    }

    pub fn set_unsigned(&mut self, mut val: u64) -> Result<()> {
        self.ensure_capacity(MIN_LIMBS)?;
        let mut i = 0;
        loop {
            self.digits[i] = (val & BASE_MASK as u64) as Limb;
            i += 1;
            val >>= BASE_SHIFT;
            if val == 0 {
                break;
            }
        }
        self.size = i;
        Ok(())
    }

    /// Builds a value from raw limbs, least significant first. Every limb must be below `BASE`.
    pub fn from_limbs(limbs: &[Limb]) -> Result<BigNat> {
        if let Some(&limb) = limbs.iter().find(|&&limb| limb > BASE_MASK) {
            return Err(BigNumError::InvalidLimb(limb));
        }
        let mut nat = BigNat::with_capacity(limbs.len())?;
        nat.digits[..limbs.len()].copy_from_slice(limbs);
        nat.size = limbs.len().max(1);
        nat.trim();
        Ok(nat)
    }

    /// Returns `None` if the value does not fit in a `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        let mut val: u64 = 0;
        for &limb in self.limbs().iter().rev() {
            if val.leading_zeros() < BASE_SHIFT {
                return None;
            }
            val = (val << BASE_SHIFT) | limb as u64;
        }
        Some(val)
    }

    /// Deep copy of `src` into `self`.
    pub fn set(&mut self, src: &BigNat) -> Result<()> {
        self.ensure_capacity(src.capacity())?;
        let (head, tail) = self.digits.split_at_mut(src.capacity());
        head.copy_from_slice(&src.digits);
        tail.fill(0);
        self.size = src.size;
        Ok(())
    }

    /// Exchanges buffers with `other`; no limb is copied.
    pub fn swap(&mut self, other: &mut BigNat) {
        mem::swap(self, other);
    }
}

macro_rules! impl_unsigned_to_big_nat {
    ($($u: ty),*) => {
    $(
    impl TryFrom<$u> for BigNat {
        type Error = BigNumError;

        fn try_from(val: $u) -> Result<Self> {
            BigNat::from_unsigned(val as u64)
        }
    }
    )*
    };
}
impl_unsigned_to_big_nat!(u8, u16, u32, u64, usize);

// 实现大小比较
impl BigNat {
    pub fn cmp_raw(a: &BigNat, b: &BigNat) -> Ordering {
        if a.size != b.size {
            return a.size.cmp(&b.size);
        }
        for i in (0..a.size).rev() {
            let (x, y) = (a.digits[i], b.digits[i]);
            if x != y {
                return x.cmp(&y);
            }
        }
        Ordering::Equal
    }
}

impl PartialEq for BigNat {
    fn eq(&self, other: &Self) -> bool {
        self.limbs() == other.limbs()
    }
}
impl Eq for BigNat {}

impl PartialOrd for BigNat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigNat {
    fn cmp(&self, other: &Self) -> Ordering {
        BigNat::cmp_raw(self, other)
    }
}

// 实现加法
impl BigNat {
    pub fn add(out: &mut BigNat, a: &BigNat, b: &BigNat) -> Result<()> {
        let (major, minor) = if a.size < b.size { (b, a) } else { (a, b) };
        out.ensure_capacity(major.size + 1)?;

        let mut carry: Limb = 0;
        let mut i = 0;
        while i < minor.size {
            carry += major.digits[i] + minor.digits[i];
            out.digits[i] = carry & BASE_MASK;
            carry >>= BASE_SHIFT;
            i += 1;
        }
        while i < major.size {
            carry += major.digits[i];
            out.digits[i] = carry & BASE_MASK;
            carry >>= BASE_SHIFT;
            i += 1;
        }
        out.digits[i] = carry;
        out.size = i + (carry != 0) as usize;
        out.trim();
        Ok(())
    }

    pub fn add_assign(&mut self, rhs: &BigNat) -> Result<()> {
        let mut sum = self.scratch_for(self.size.max(rhs.size) + 1)?;
        BigNat::add(&mut sum, self, rhs)?;
        self.swap(&mut sum);
        Ok(())
    }
}

// 实现减法
impl BigNat {
    /// Stores `|a - b|` in `out` and returns `true` when `a < b`.
    pub fn sub(out: &mut BigNat, a: &BigNat, b: &BigNat) -> Result<bool> {
        let flipped = BigNat::cmp_raw(a, b) == Ordering::Less;
        let (larger, smaller) = if flipped { (b, a) } else { (a, b) };
        out.ensure_capacity(larger.size)?;

        // a wrapped difference has its top bit set
        let mut borrow: Limb = 0;
        let mut i = 0;
        while i < smaller.size {
            let diff = larger.digits[i]
                .wrapping_sub(smaller.digits[i])
                .wrapping_sub(borrow);
            out.digits[i] = diff & BASE_MASK;
            borrow = diff >> (Limb::BITS - 1);
            i += 1;
        }
        while borrow != 0 && i < larger.size {
            let diff = larger.digits[i].wrapping_sub(borrow);
            out.digits[i] = diff & BASE_MASK;
            borrow = diff >> (Limb::BITS - 1);
            i += 1;
        }
        out.digits[i..larger.size].copy_from_slice(&larger.digits[i..larger.size]);
        out.size = larger.size;
        out.trim();
        Ok(flipped)
    }

    pub fn sub_assign(&mut self, rhs: &BigNat) -> Result<bool> {
        let mut difference = self.scratch_for(self.size.max(rhs.size))?;
        let flipped = BigNat::sub(&mut difference, self, rhs)?;
        self.swap(&mut difference);
        Ok(flipped)
    }
}

// 实现乘法
impl BigNat {
    pub fn mul(out: &mut BigNat, a: &BigNat, b: &BigNat) -> Result<()> {
        let mut product = out.scratch_for(a.size + b.size)?;
        BigNat::mul_to_len(&mut product, a, b);
        out.swap(&mut product);
        Ok(())
    }

    pub fn mul_assign(&mut self, rhs: &BigNat) -> Result<()> {
        let mut product = self.scratch_for(self.size + rhs.size)?;
        BigNat::mul_to_len(&mut product, self, rhs);
        self.swap(&mut product);
        Ok(())
    }

    /// Schoolbook product. `product` must be zero with room for `a.len() + b.len()` limbs.
    fn mul_to_len(product: &mut BigNat, a: &BigNat, b: &BigNat) {
        let mut top = 0;
        let mut last_carry: DoubleLimb = 0;
        for (i, &x) in a.limbs().iter().enumerate() {
            let x = x as DoubleLimb;
            let mut carry: DoubleLimb = 0;
            let mut k = i;
            for &y in b.limbs() {
                carry += product.digits[k] as DoubleLimb + y as DoubleLimb * x;
                product.digits[k] = (carry & BASE_MASK as DoubleLimb) as Limb;
                carry >>= BASE_SHIFT;
                k += 1;
            }
            if carry != 0 {
                product.digits[k] += carry as Limb;
            }
            top = top.max(k);
            last_carry = carry;
        }
        product.size = top + (last_carry != 0) as usize;
        product.trim();
    }

    /// Multiplies by a single limb `m < BASE`.
    pub fn mul_limb(out: &mut BigNat, a: &BigNat, m: Limb) -> Result<()> {
        if m > BASE_MASK {
            return Err(BigNumError::InvalidLimb(m));
        }
        out.ensure_capacity(a.size + 1)?;
        let m = m as DoubleLimb;
        let mut carry: DoubleLimb = 0;
        for i in 0..a.size {
            carry += a.digits[i] as DoubleLimb * m;
            out.digits[i] = (carry & BASE_MASK as DoubleLimb) as Limb;
            carry >>= BASE_SHIFT;
        }
        out.digits[a.size] = carry as Limb;
        out.size = a.size + 1;
        out.trim();
        Ok(())
    }
}

// 实现除法
impl BigNat {
    fn check_divisor(d: Limb) -> Result<()> {
        if d == 0 {
            debug!("rejecting single limb division by zero");
            return Err(BigNumError::DivisionByZero);
        }
        if d > BASE_MASK {
            return Err(BigNumError::InvalidLimb(d));
        }
        Ok(())
    }

    /// Stores `a / d` in `div` and returns `a % d`.
    pub fn div_rem_limb(div: &mut BigNat, a: &BigNat, d: Limb) -> Result<Limb> {
        BigNat::check_divisor(d)?;
        div.set(a)?;
        div.div_rem_limb_assign(d)
    }

    /// Replaces `self` with `self / d` and returns `self % d`.
    ///
    /// Runs in place from the most significant limb down: each limb is read before its
    /// quotient limb is written over it.
    pub fn div_rem_limb_assign(&mut self, d: Limb) -> Result<Limb> {
        BigNat::check_divisor(d)?;
        let top = self.size - 1;
        let shrinks = d > self.digits[top];
        if shrinks && self.size == 1 {
            let rem = self.digits[0];
            self.set_zero();
            return Ok(rem);
        }

        let d = d as DoubleLimb;
        let mut rem: DoubleLimb = 0;
        let mut len = self.size;
        if shrinks {
            rem = self.digits[top] as DoubleLimb;
            self.digits[top] = 0;
            len -= 1;
        }
        for i in (0..len).rev() {
            rem = (rem << BASE_SHIFT) | self.digits[i] as DoubleLimb;
            self.digits[i] = (rem / d) as Limb;
            rem %= d;
        }
        self.size = len;
        self.trim();
        Ok(rem as Limb)
    }

    /// Long division: `div = a / b`, `rem = a % b`.
    ///
    /// One quotient limb is produced per dividend limb, most significant first. Each
    /// quotient limb is found by bisection over `[0, BASE)`.
    pub fn div_rem(div: &mut BigNat, rem: &mut BigNat, a: &BigNat, b: &BigNat) -> Result<()> {
        if b.is_zero() {
            debug!("rejecting division by zero");
            return Err(BigNumError::DivisionByZero);
        }
        if b.size == 1 {
            let r = BigNat::div_rem_limb(div, a, b.digits[0])?;
            return rem.set_unsigned(r as u64);
        }
        if BigNat::cmp_raw(a, b) == Ordering::Less {
            rem.set(a)?;
            return div.set_unsigned(0);
        }

        let mut quotient = div.scratch_for(a.size)?;
        let mut remainder = BigNat::with_capacity(b.size + 1)?;
        let mut partial = BigNat::with_capacity(b.size + 1)?;
        let mut difference = BigNat::with_capacity(b.size + 1)?;
        for i in (0..a.size).rev() {
            remainder.push_low_limb(a.digits[i])?;
            let q = BigNat::quotient_limb(&remainder, b, &mut partial)?;
            if q != 0 {
                BigNat::mul_limb(&mut partial, b, q)?;
                BigNat::sub(&mut difference, &remainder, &partial)?;
                remainder.swap(&mut difference);
            }
            quotient.digits[i] = q;
        }
        quotient.size = a.size;
        quotient.trim();
        div.swap(&mut quotient);
        rem.set(&remainder)
    }

    /// `self = self * BASE + limb`
    fn push_low_limb(&mut self, limb: Limb) -> Result<()> {
        if self.is_zero() {
            self.digits[0] = limb;
            return Ok(());
        }
        self.ensure_capacity(self.size + 1)?;
        self.digits.copy_within(0..self.size, 1);
        self.digits[0] = limb;
        self.size += 1;
        Ok(())
    }

    /// Largest `q` with `b * q <= remainder`, given `remainder < b * BASE`.
    fn quotient_limb(remainder: &BigNat, b: &BigNat, partial: &mut BigNat) -> Result<Limb> {
        if BigNat::cmp_raw(remainder, b) == Ordering::Less {
            return Ok(0);
        }
        let (mut lo, mut hi) = (1, BASE_MASK);
        while lo < hi {
            let mid = lo + (hi - lo + 1) / 2;
            BigNat::mul_limb(partial, b, mid)?;
            if BigNat::cmp_raw(partial, remainder) == Ordering::Greater {
                hi = mid - 1;
            } else {
                lo = mid;
            }
        }
        Ok(lo)
    }
}

// 实现打印
impl BigNat {
    /// Base 10 rendering by repeated division by ten.
    pub fn to_decimal_string(&self) -> Result<String> {
        let mut value = BigNat::new()?;
        value.set(self)?;
        let mut digits = Vec::new();
        loop {
            let rem = value.div_rem_limb_assign(10)?;
            digits.push(DIGITS[rem as usize]);
            if value.is_zero() {
                break;
            }
        }
        Ok(digits.iter().rev().collect())
    }

    /// Renders in any radix from 2 to 36, a limb-sized group of digits per division.
    pub fn to_string_radix(&self, radix: u32) -> Result<String> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(BigNumError::InvalidRadix(radix));
        }
        let (divisor, group_len) = RADIX_GROUPS[radix as usize];

        let mut value = BigNat::new()?;
        value.set(self)?;
        let mut groups: Vec<Limb> = Vec::new();
        loop {
            groups.push(value.div_rem_limb_assign(divisor)?);
            if value.is_zero() {
                break;
            }
        }

        let mut result = String::with_capacity(groups.len() * group_len);
        for (n, &group) in groups.iter().rev().enumerate() {
            let digits = BigNat::small_to_string(group, radix);
            // Pad every group but the leading one
            if n > 0 {
                for _ in digits.len()..group_len {
                    result.push('0');
                }
            }
            result.push_str(&digits);
        }
        Ok(result)
    }

    fn small_to_string(mut val: Limb, radix: u32) -> String {
        if val == 0 {
            return String::from("0");
        }
        let mut s = String::new();
        while val != 0 {
            s.push(DIGITS[(val % radix) as usize]);
            val /= radix;
        }
        s.chars().rev().collect()
    }

    /// Raw limbs in hex, most significant first, separated by spaces.
    pub fn to_hex_limbs(&self) -> String {
        self.limbs()
            .iter()
            .rev()
            .map(|limb| format!("{:x}", limb))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for BigNat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.to_decimal_string().map_err(|_| fmt::Error)?;
        f.pad_integral(true, "", &s)
    }
}

impl fmt::Debug for BigNat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigNat")
            .field("limbs", &self.limbs())
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(test)]
fn nat(val: u64) -> BigNat {
    BigNat::from_unsigned(val).unwrap()
}

#[test]
fn test_new() {
    let z = BigNat::new().unwrap();
    assert!(z.is_zero());
    assert_eq!(z.len(), 1);
    assert_eq!(z.capacity(), MIN_LIMBS);

    let z = BigNat::with_capacity(100).unwrap();
    assert_eq!(z.capacity(), 100);
    let z = BigNat::with_capacity(2).unwrap();
    assert_eq!(z.capacity(), MIN_LIMBS);
}

#[test]
fn test_ensure_capacity() {
    let mut a = nat(123456);
    let before = a.limbs().to_vec();
    a.ensure_capacity(10).unwrap();
    assert_eq!(a.capacity(), MIN_LIMBS);
    a.ensure_capacity(200).unwrap();
    assert_eq!(a.capacity(), 200);
    assert_eq!(a.limbs(), &before[..]);
    assert!(a.digits[a.len()..].iter().all(|&d| d == 0));
    a.release();
}

#[test]
fn test_ensure_capacity_out_of_memory() {
    let mut a = nat(7);
    let err = a.ensure_capacity(usize::MAX / 2).unwrap_err();
    assert_eq!(err, BigNumError::OutOfMemory { limbs: usize::MAX / 2 });
    assert_eq!(a.capacity(), MIN_LIMBS);
    assert_eq!(a.to_u64(), Some(7));
}

#[test]
fn test_from_unsigned() {
    let a = nat(0);
    assert_eq!(a.limbs(), &[0]);

    let a = nat(BASE as u64 + 3);
    assert_eq!(a.limbs(), &[3, 1]);

    let a = nat(u64::MAX);
    assert!(a.limbs().iter().all(|&limb| limb < BASE));
    assert_eq!(a.to_u64(), Some(u64::MAX));

    let a: BigNat = 200u8.try_into().unwrap();
    assert_eq!(a.to_u64(), Some(200));
}

#[test]
fn test_from_limbs() {
    let a = BigNat::from_limbs(&[1, 2, 0, 0]).unwrap();
    assert_eq!(a.limbs(), &[1, 2]);
    assert!(BigNat::from_limbs(&[]).unwrap().is_zero());
    assert_eq!(BigNat::from_limbs(&[1, BASE]).unwrap_err(), BigNumError::InvalidLimb(BASE));
}

#[test]
fn test_to_u64_overflow() {
    let mut a = nat(u64::MAX);
    a.add_assign(&nat(1)).unwrap();
    assert_eq!(a.to_u64(), None);
}

#[test]
fn test_set_and_swap() {
    let src = BigNat::from_limbs(&vec![5; 40]).unwrap();
    let mut dst = nat(9);
    dst.set(&src).unwrap();
    assert_eq!(dst, src);
    assert_eq!(dst.capacity(), src.capacity());

    let mut big = BigNat::with_capacity(80).unwrap();
    big.set(&nat(77)).unwrap();
    assert_eq!(big.capacity(), 80);
    assert_eq!(big.to_u64(), Some(77));

    let mut a = nat(1);
    let mut b = BigNat::with_capacity(64).unwrap();
    b.set_unsigned(2).unwrap();
    a.swap(&mut b);
    assert_eq!(a.to_u64(), Some(2));
    assert_eq!(a.capacity(), 64);
    assert_eq!(b.to_u64(), Some(1));
    assert_eq!(b.capacity(), MIN_LIMBS);
}

#[test]
fn test_cmp_raw() {
    assert_eq!(BigNat::cmp_raw(&nat(5), &nat(9)), Ordering::Less);
    assert_eq!(BigNat::cmp_raw(&nat(5000), &nat(9)), Ordering::Greater);
    assert_eq!(BigNat::cmp_raw(&nat(5000), &nat(5000)), Ordering::Equal);
    assert_eq!(BigNat::cmp_raw(&nat(5000), &nat(5001)), Ordering::Less);
    assert!(nat(0) < nat(1));
}

#[test]
fn test_add() {
    let mut out = BigNat::new().unwrap();
    BigNat::add(&mut out, &nat(999), &nat(1)).unwrap();
    assert_eq!(out, nat(1000));

    BigNat::add(&mut out, &nat(BASE_MASK as u64), &nat(1)).unwrap();
    assert_eq!(out.limbs(), &[0, 1]);

    BigNat::add(&mut out, &nat(1), &nat(u64::MAX)).unwrap();
    assert_eq!(out.to_u64(), None);
    let mut expected = nat(u64::MAX);
    expected.add_assign(&nat(1)).unwrap();
    assert_eq!(out, expected);

    BigNat::add(&mut out, &nat(0), &nat(0)).unwrap();
    assert!(out.is_zero());
}

#[test]
fn test_sub() {
    let mut out = BigNat::new().unwrap();
    let flipped = BigNat::sub(&mut out, &nat(5), &nat(9)).unwrap();
    assert!(flipped);
    assert_eq!(out.to_u64(), Some(4));

    let flipped = BigNat::sub(&mut out, &nat(1000), &nat(1)).unwrap();
    assert!(!flipped);
    assert_eq!(out.to_u64(), Some(999));

    let flipped = BigNat::sub(&mut out, &nat(1 << 40), &nat(1)).unwrap();
    assert!(!flipped);
    assert_eq!(out.to_u64(), Some((1 << 40) - 1));

    BigNat::sub(&mut out, &nat(123456789), &nat(123456789)).unwrap();
    assert!(out.is_zero());

    let mut a = nat(1 << 20);
    let flipped = a.sub_assign(&nat(1 << 20 | 5)).unwrap();
    assert!(flipped);
    assert_eq!(a.to_u64(), Some(5));
}

#[test]
fn test_mul() {
    let mut out = BigNat::new().unwrap();
    BigNat::mul(&mut out, &nat(12345), &nat(6789)).unwrap();
    assert_eq!(out.to_u64(), Some(83810205));

    BigNat::mul(&mut out, &nat(12345), &nat(0)).unwrap();
    assert!(out.is_zero());

    BigNat::mul(&mut out, &nat(u32::MAX as u64), &nat(u32::MAX as u64)).unwrap();
    assert_eq!(out.to_u64(), Some(u32::MAX as u64 * u32::MAX as u64));

    let mut a = nat(1 << 30);
    a.mul_assign(&a.clone()).unwrap();
    assert_eq!(a.to_u64(), Some(1 << 60));
}

#[test]
fn test_mul_keeps_capacity() {
    let mut out = BigNat::with_capacity(128).unwrap();
    BigNat::mul(&mut out, &nat(3), &nat(4)).unwrap();
    assert_eq!(out.capacity(), 128);
    assert_eq!(out.to_u64(), Some(12));
}

#[test]
fn test_mul_limb() {
    let mut out = BigNat::new().unwrap();
    BigNat::mul_limb(&mut out, &nat(1_000_000), 7).unwrap();
    assert_eq!(out.to_u64(), Some(7_000_000));
    BigNat::mul_limb(&mut out, &nat(1_000_000), 0).unwrap();
    assert!(out.is_zero());
    assert!(BigNat::mul_limb(&mut out, &nat(1), BASE).is_err());
}

#[test]
fn test_div_rem_limb() {
    let a = nat(1000);
    let mut q = BigNat::new().unwrap();
    let r = BigNat::div_rem_limb(&mut q, &a, 7).unwrap();
    assert_eq!(q.to_u64(), Some(142));
    assert_eq!(r, 6);

    // divisor larger than the only limb
    let r = BigNat::div_rem_limb(&mut q, &nat(5), 9).unwrap();
    assert!(q.is_zero());
    assert_eq!(r, 5);

    let mut a = nat(u64::MAX);
    let r = a.div_rem_limb_assign(10).unwrap();
    assert_eq!(a.to_u64(), Some(u64::MAX / 10));
    assert_eq!(r as u64, u64::MAX % 10);

    assert_eq!(a.div_rem_limb_assign(0).unwrap_err(), BigNumError::DivisionByZero);
    assert_eq!(a.div_rem_limb_assign(BASE).unwrap_err(), BigNumError::InvalidLimb(BASE));
}

#[test]
fn test_div_rem() {
    let mut q = BigNat::new().unwrap();
    let mut r = BigNat::new().unwrap();

    BigNat::div_rem(&mut q, &mut r, &nat(u64::MAX), &nat(1_000_003)).unwrap();
    assert_eq!(q.to_u64(), Some(u64::MAX / 1_000_003));
    assert_eq!(r.to_u64(), Some(u64::MAX % 1_000_003));

    BigNat::div_rem(&mut q, &mut r, &nat(12), &nat(8)).unwrap();
    assert_eq!(q.to_u64(), Some(1));
    assert_eq!(r.to_u64(), Some(4));

    BigNat::div_rem(&mut q, &mut r, &nat(5000), &nat(5_000_000)).unwrap();
    assert!(q.is_zero());
    assert_eq!(r.to_u64(), Some(5000));

    BigNat::div_rem(&mut q, &mut r, &nat(4096), &nat(4096)).unwrap();
    assert_eq!(q.to_u64(), Some(1));
    assert!(r.is_zero());

    assert_eq!(
        BigNat::div_rem(&mut q, &mut r, &nat(1), &nat(0)).unwrap_err(),
        BigNumError::DivisionByZero
    );
}

#[test]
fn test_to_string() {
    assert_eq!(nat(0).to_decimal_string().unwrap(), "0");
    assert_eq!(nat(56).to_decimal_string().unwrap(), "56");
    assert_eq!(nat(u64::MAX).to_string(), u64::MAX.to_string());
    assert_eq!(format!("{:>6}", nat(42)), "    42");

    assert_eq!(nat(0).to_string_radix(16).unwrap(), "0");
    assert_eq!(nat(0xfafcfbffaffaff).to_string_radix(16).unwrap(), "fafcfbffaffaff");
    assert_eq!(nat(1_000_000_007).to_string_radix(10).unwrap(), "1000000007");
    assert_eq!(nat(35).to_string_radix(36).unwrap(), "z");
    assert_eq!(nat(5).to_string_radix(2).unwrap(), "101");
    assert_eq!(nat(5).to_string_radix(37).unwrap_err(), BigNumError::InvalidRadix(37));
}

#[test]
fn test_to_hex_limbs() {
    let a = BigNat::from_limbs(&[0x3, 0x1f, 0x2]).unwrap();
    assert_eq!(a.to_hex_limbs(), "2 1f 3");
    assert_eq!(nat(0).to_hex_limbs(), "0");
}
