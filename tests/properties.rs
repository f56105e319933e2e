use std::cmp::Ordering;

use mpz::{BigInt, BigNat, Limb, BASE_MASK};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn nat(limbs: &[u16]) -> BigNat {
    let limbs: Vec<Limb> = limbs.iter().map(|&l| l as Limb & BASE_MASK).collect();
    BigNat::from_limbs(&limbs).unwrap()
}

fn add(a: &BigNat, b: &BigNat) -> BigNat {
    let mut out = BigNat::new().unwrap();
    BigNat::add(&mut out, a, b).unwrap();
    out
}

fn mul(a: &BigNat, b: &BigNat) -> BigNat {
    let mut out = BigNat::new().unwrap();
    BigNat::mul(&mut out, a, b).unwrap();
    out
}

#[quickcheck]
fn round_trip_unsigned(x: u64) -> bool {
    let a = BigNat::from_unsigned(x).unwrap();
    let rebuilt = a
        .limbs()
        .iter()
        .rev()
        .fold(0u128, |acc, &limb| (acc << mpz::BASE_SHIFT) + limb as u128);
    rebuilt == x as u128 && a.to_u64() == Some(x)
}

#[quickcheck]
fn add_commutes(a: Vec<u16>, b: Vec<u16>) -> bool {
    let (a, b) = (nat(&a), nat(&b));
    add(&a, &b) == add(&b, &a)
}

#[quickcheck]
fn sub_undoes_add(a: Vec<u16>, b: Vec<u16>) -> bool {
    let (a, b) = (nat(&a), nat(&b));
    let sum = add(&a, &b);
    let mut out = BigNat::new().unwrap();
    let flipped = BigNat::sub(&mut out, &sum, &b).unwrap();
    !flipped && out == a
}

#[quickcheck]
fn sub_reports_flip(a: Vec<u16>, b: Vec<u16>) -> bool {
    let (a, b) = (nat(&a), nat(&b));
    let mut forward = BigNat::new().unwrap();
    let mut backward = BigNat::new().unwrap();
    let flipped = BigNat::sub(&mut forward, &a, &b).unwrap();
    BigNat::sub(&mut backward, &b, &a).unwrap();
    forward == backward && flipped == (a < b)
}

#[quickcheck]
fn mul_identity_and_zero(a: Vec<u16>) -> bool {
    let a = nat(&a);
    let one = BigNat::from_unsigned(1).unwrap();
    let zero = BigNat::from_unsigned(0).unwrap();
    mul(&a, &one) == a && mul(&a, &zero).is_zero()
}

#[quickcheck]
fn mul_distributes(a: Vec<u16>, b: Vec<u16>, c: Vec<u16>) -> bool {
    let (a, b, c) = (nat(&a), nat(&b), nat(&c));
    mul(&a, &add(&b, &c)) == add(&mul(&a, &b), &mul(&a, &c))
}

#[quickcheck]
fn mul_matches_native(x: u64, y: u64) -> bool {
    let product = mul(&BigNat::from_unsigned(x).unwrap(), &BigNat::from_unsigned(y).unwrap());
    product.to_string() == (x as u128 * y as u128).to_string()
}

#[quickcheck]
fn div_rem_limb_consistent(a: Vec<u16>, d: u16) -> bool {
    let a = nat(&a);
    let d = (d as Limb & BASE_MASK).max(1);
    let mut q = BigNat::new().unwrap();
    let r = BigNat::div_rem_limb(&mut q, &a, d).unwrap();

    let mut back = BigNat::new().unwrap();
    BigNat::mul_limb(&mut back, &q, d).unwrap();
    back.add_assign(&BigNat::from_unsigned(r as u64).unwrap()).unwrap();
    r < d && back == a
}

#[quickcheck]
fn div_rem_consistent(a: Vec<u16>, b: Vec<u16>) -> TestResult {
    let (a, b) = (nat(&a), nat(&b));
    if b.is_zero() {
        return TestResult::discard();
    }
    let mut q = BigNat::new().unwrap();
    let mut r = BigNat::new().unwrap();
    BigNat::div_rem(&mut q, &mut r, &a, &b).unwrap();
    TestResult::from_bool(r < b && add(&mul(&q, &b), &r) == a)
}

#[quickcheck]
fn cmp_is_a_total_order(a: Vec<u16>, b: Vec<u16>, c: Vec<u16>) -> bool {
    let (a, b, c) = (nat(&a), nat(&b), nat(&c));
    let antisymmetric = BigNat::cmp_raw(&a, &b) == BigNat::cmp_raw(&b, &a).reverse();
    let transitive = !(a <= b && b <= c) || a <= c;
    let reflexive = BigNat::cmp_raw(&a, &a) == Ordering::Equal;
    antisymmetric && transitive && reflexive
}

#[quickcheck]
fn decimal_matches_native(x: u64) -> bool {
    BigNat::from_unsigned(x).unwrap().to_decimal_string().unwrap() == x.to_string()
}

#[quickcheck]
fn radix_matches_decimal(a: Vec<u16>) -> bool {
    let a = nat(&a);
    a.to_string_radix(10).unwrap() == a.to_decimal_string().unwrap()
}

#[quickcheck]
fn radix_matches_native(x: u64) -> bool {
    let a = BigNat::from_unsigned(x).unwrap();
    a.to_string_radix(16).unwrap() == format!("{:x}", x)
        && a.to_string_radix(2).unwrap() == format!("{:b}", x)
        && a.to_string_radix(8).unwrap() == format!("{:o}", x)
}

#[quickcheck]
fn signed_ops_match_i128(x: i64, y: i64) -> bool {
    let (a, b) = (BigInt::from_signed(x).unwrap(), BigInt::from_signed(y).unwrap());
    let (x, y) = (x as i128, y as i128);
    (&a + &b).to_string() == (x + y).to_string()
        && (&a - &b).to_string() == (x - y).to_string()
        && (&a * &b).to_string() == (x * y).to_string()
        && a.cmp(&b) == x.cmp(&y)
}

#[quickcheck]
fn signed_div_rem_truncates(x: i64, y: i64) -> TestResult {
    if y == 0 || (x == i64::MIN && y == -1) {
        return TestResult::discard();
    }
    let (a, b) = (BigInt::from_signed(x).unwrap(), BigInt::from_signed(y).unwrap());
    let mut q = BigInt::new().unwrap();
    let mut r = BigInt::new().unwrap();
    BigInt::div_rem(&mut q, &mut r, &a, &b).unwrap();
    TestResult::from_bool(q.to_i64() == Some(x / y) && r.to_i64() == Some(x % y))
}
