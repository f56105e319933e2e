use mpz::{BigInt, BigNat, BigNumError, MIN_LIMBS};

#[test]
fn renders_small_value() {
    let v = BigNat::from_unsigned(56).unwrap();
    assert_eq!(v.to_decimal_string().unwrap(), "56");
}

#[test]
fn add_carries_into_new_value() {
    let mut out = BigNat::new().unwrap();
    BigNat::add(
        &mut out,
        &BigNat::from_unsigned(999).unwrap(),
        &BigNat::from_unsigned(1).unwrap(),
    )
    .unwrap();
    assert_eq!(out, BigNat::from_unsigned(1000).unwrap());
}

#[test]
fn sub_flips_when_rhs_is_larger() {
    let mut out = BigNat::new().unwrap();
    let flipped = BigNat::sub(
        &mut out,
        &BigNat::from_unsigned(5).unwrap(),
        &BigNat::from_unsigned(9).unwrap(),
    )
    .unwrap();
    assert!(flipped);
    assert_eq!(out.to_u64(), Some(4));

    let mut signed = BigInt::new().unwrap();
    BigInt::sub(
        &mut signed,
        &BigInt::from_signed(5).unwrap(),
        &BigInt::from_signed(9).unwrap(),
    )
    .unwrap();
    assert!(signed.is_negative());
    assert_eq!(signed.to_string(), "-4");
}

#[test]
fn mul_renders_product() {
    let mut out = BigNat::new().unwrap();
    BigNat::mul(
        &mut out,
        &BigNat::from_unsigned(12345).unwrap(),
        &BigNat::from_unsigned(6789).unwrap(),
    )
    .unwrap();
    assert_eq!(out.to_decimal_string().unwrap(), "83810205");
}

#[test]
fn div_rem_limb_in_place() {
    let mut v = BigNat::from_unsigned(1000).unwrap();
    let rem = v.div_rem_limb_assign(7).unwrap();
    assert_eq!(v.to_decimal_string().unwrap(), "142");
    assert_eq!(rem, 6);
}

#[test]
fn factorial_of_thirty() {
    let mut acc = BigNat::from_unsigned(1).unwrap();
    for i in 2..=30 {
        acc.mul_assign(&BigNat::from_unsigned(i).unwrap()).unwrap();
    }
    assert_eq!(acc.to_string(), "265252859812191058636308480000000");
    assert!(acc.capacity() >= MIN_LIMBS);

    let mut q = BigNat::new().unwrap();
    let mut r = BigNat::new().unwrap();
    let divisor = BigNat::from_unsigned(1_307_674_368_000).unwrap(); // 15!
    BigNat::div_rem(&mut q, &mut r, &acc, &divisor).unwrap();
    assert_eq!(q.to_string(), "202843204931727360000");
    assert!(r.is_zero());
}

#[test]
fn division_by_zero_is_reported() {
    let mut v = BigNat::from_unsigned(1000).unwrap();
    assert_eq!(v.div_rem_limb_assign(0), Err(BigNumError::DivisionByZero));
    assert_eq!(v.to_u64(), Some(1000));
}

#[test]
fn large_power_of_two() {
    let mut v = BigNat::from_unsigned(1 << 32).unwrap();
    let square = v.clone();
    v.mul_assign(&square).unwrap();
    v.mul_assign(&square).unwrap();
    assert_eq!(v.to_string(), "79228162514264337593543950336");
    assert_eq!(v.to_string_radix(16).unwrap(), format!("1{}", "0".repeat(24)));
}
